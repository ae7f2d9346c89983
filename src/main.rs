// SPDX-License-Identifier: PMPL-1.0-or-later

//! multi-tools: QR codes, barcodes, passwords, hashes, translation and a
//! simulated video downloader from one command line.
//!
//! Every subcommand is one tool performing its single primary action.

use anyhow::{Context, Result};
use clap::{ArgAction, Args, Parser, Subcommand};
use log::{info, warn};
use multi_tools::barcode::{self, BarcodeFormat};
use multi_tools::clipboard;
use multi_tools::config::AppConfig;
use multi_tools::diagnostics;
use multi_tools::formatter::TextFormatter;
use multi_tools::hash::{self, HashAlgorithm};
use multi_tools::logging;
use multi_tools::output::{self, ArtifactSummary, ImageKind, OutputFormat};
use multi_tools::password;
use multi_tools::qr::{self, ErrorCorrection};
use multi_tools::translate::{languages, LanguagePair, TranslateRequest, Translator};
use multi_tools::types::{Rgb, ToolKind};
use multi_tools::video;
use serde::Serialize;
use std::io::{self, Read, Write};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "multi-tools")]
#[command(version)]
#[command(about = "QR codes, barcodes, passwords, hashes, translation and a mock video downloader")]
#[command(long_about = None)]
struct Cli {
    /// Config file (YAML or JSON); defaults to multi-tools.yaml in the working directory
    #[arg(long, global = true, value_name = "PATH")]
    config: Option<PathBuf>,

    /// How results are printed
    #[arg(long, global = true, value_enum, default_value = "text")]
    format: OutputFormat,

    /// More log output (-v info, -vv debug)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    verbose: u8,

    /// Silence log output and progress bars
    #[arg(short, long, global = true)]
    quiet: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// List the available tools
    Tools,

    /// Generate a QR code image
    Qr(QrArgs),

    /// Generate a barcode image
    Barcode(BarcodeArgs),

    /// Generate a random password or rate an existing one
    Password(PasswordArgs),

    /// Hash text, or verify text against a bcrypt hash
    Hash(HashArgs),

    /// Translate text between languages
    Translate(TranslateArgs),

    /// Simulated video downloader (no platform is contacted)
    Video {
        #[command(subcommand)]
        action: VideoAction,
    },

    /// Check configuration, clipboard and translation endpoints
    Doctor,
}

#[derive(Args)]
struct QrArgs {
    /// Text or URL to encode ("-" reads stdin)
    #[arg(value_name = "TEXT")]
    text: String,

    /// Output file (default: qrcode.png in the configured output directory)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Write SVG instead of PNG
    #[arg(long)]
    svg: bool,

    /// Target edge length in pixels
    #[arg(long)]
    size: Option<u32>,

    /// Quiet zone width in modules
    #[arg(long)]
    margin: Option<u32>,

    /// Module color, #RRGGBB
    #[arg(long, value_name = "COLOR")]
    dark: Option<Rgb>,

    /// Background color, #RRGGBB
    #[arg(long, value_name = "COLOR")]
    light: Option<Rgb>,

    /// Error correction level
    #[arg(long, value_enum)]
    ec: Option<ErrorCorrection>,

    /// Also draw the code in the terminal
    #[arg(long)]
    show: bool,

    /// Copy the image to the clipboard
    #[arg(long)]
    copy: bool,
}

#[derive(Args)]
struct BarcodeArgs {
    /// Value to encode ("-" reads stdin)
    #[arg(value_name = "TEXT")]
    text: String,

    /// Symbology
    #[arg(short = 't', long = "type", value_enum, default_value = "code128")]
    symbology: BarcodeFormat,

    /// Output file (default: barcode.png in the configured output directory)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Write SVG instead of PNG
    #[arg(long)]
    svg: bool,

    /// Pixels per narrow bar
    #[arg(long)]
    width: Option<u32>,

    /// Bar height in pixels
    #[arg(long)]
    height: Option<u32>,

    /// Leave the human readable value out of SVG output
    #[arg(long)]
    no_text: bool,

    /// Copy the image to the clipboard
    #[arg(long)]
    copy: bool,
}

#[derive(Args)]
struct PasswordArgs {
    /// Password length (4-50)
    #[arg(short, long)]
    length: Option<usize>,

    #[arg(long)]
    no_uppercase: bool,

    #[arg(long)]
    no_lowercase: bool,

    #[arg(long)]
    no_numbers: bool,

    /// Include symbols
    #[arg(long, conflicts_with = "no_symbols")]
    symbols: bool,

    #[arg(long)]
    no_symbols: bool,

    /// Rate an existing password instead of generating one
    #[arg(long, value_name = "PASSWORD")]
    check: Option<String>,

    /// Copy the password to the clipboard
    #[arg(long)]
    copy: bool,
}

#[derive(Args)]
struct HashArgs {
    /// Text to hash ("-" reads stdin)
    #[arg(value_name = "TEXT")]
    input: String,

    #[arg(short, long, value_enum)]
    algorithm: Option<HashAlgorithm>,

    /// bcrypt salt rounds (4-15)
    #[arg(long)]
    cost: Option<u32>,

    /// Check the text against an existing bcrypt hash
    #[arg(long, value_name = "HASH", conflicts_with_all = ["algorithm", "cost"])]
    verify: Option<String>,

    /// Copy the hash to the clipboard
    #[arg(long)]
    copy: bool,
}

#[derive(Args)]
struct TranslateArgs {
    /// Text to translate ("-" reads stdin)
    #[arg(value_name = "TEXT", required_unless_present = "list_languages")]
    text: Vec<String>,

    /// Source language code, or "auto"
    #[arg(short, long)]
    from: Option<String>,

    /// Target language code
    #[arg(short, long)]
    to: Option<String>,

    /// Swap source and target before translating
    #[arg(long)]
    swap: bool,

    /// Print the supported language codes
    #[arg(long)]
    list_languages: bool,

    /// Copy the translation to the clipboard
    #[arg(long)]
    copy: bool,
}

#[derive(Subcommand)]
enum VideoAction {
    /// List supported platforms
    Platforms,

    /// Show (simulated) details for a video URL
    Analyze {
        #[arg(value_name = "URL")]
        url: String,
    },

    /// Simulate a download and write a demo file
    Download {
        #[arg(value_name = "URL")]
        url: String,

        /// Quality to download (default: best offered)
        #[arg(long)]
        quality: Option<String>,

        /// Directory for the demo file (default: configured output directory)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

#[derive(Serialize)]
struct ToolEntry {
    id: &'static str,
    name: &'static str,
    description: &'static str,
    default: bool,
}

#[derive(Serialize)]
struct LanguageEntry {
    code: &'static str,
    name: &'static str,
}

#[derive(Serialize)]
struct Verification {
    matches: bool,
}

struct App {
    config: AppConfig,
    format: OutputFormat,
    quiet: bool,
    formatter: TextFormatter,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose, cli.quiet)?;

    let cwd = std::env::current_dir().context("resolving working directory")?;
    let (config, source) = AppConfig::load(cli.config.as_deref(), &cwd)?;
    let app = App {
        config,
        format: cli.format,
        quiet: cli.quiet,
        formatter: TextFormatter::new(),
    };

    match cli.command.unwrap_or(Commands::Tools) {
        Commands::Tools => run_tools(&app),
        Commands::Qr(args) => run_qr(&app, args),
        Commands::Barcode(args) => run_barcode(&app, args),
        Commands::Password(args) => run_password(&app, args),
        Commands::Hash(args) => run_hash(&app, args),
        Commands::Translate(args) => run_translate(&app, args),
        Commands::Video { action } => run_video(&app, action),
        Commands::Doctor => diagnostics::run_self_diagnostics(&app.config, &source),
    }
}

fn emit<T: Serialize + ?Sized>(format: OutputFormat, value: &T) -> Result<()> {
    println!("{}", format.serialize(value)?);
    Ok(())
}

/// The argument itself, or all of stdin for `-` (trailing newline dropped).
fn read_input(arg: &str) -> Result<String> {
    if arg != "-" {
        return Ok(arg.to_string());
    }
    let mut buffer = String::new();
    io::stdin()
        .read_to_string(&mut buffer)
        .context("reading stdin")?;
    let trimmed = buffer.trim_end_matches(['\n', '\r']).len();
    buffer.truncate(trimmed);
    Ok(buffer)
}

fn artifact_path(config: &AppConfig, explicit: Option<PathBuf>, default_name: &str, svg: bool) -> PathBuf {
    let defaulted = explicit.is_none();
    let mut path = config.output_path(explicit, default_name);
    if svg && defaulted {
        path.set_extension(ImageKind::Svg.extension());
    }
    path
}

fn copy_text(requested: bool, text: &str) -> bool {
    if !requested {
        return false;
    }
    let copied = clipboard::copy_text(text);
    if !copied {
        warn!("Clipboard unavailable, result not copied");
    }
    copied
}

fn report_artifact(app: &App, summary: &ArtifactSummary) -> Result<()> {
    if app.format.is_text() {
        app.formatter.print_artifact(summary);
        Ok(())
    } else {
        emit(app.format, summary)
    }
}

fn run_tools(app: &App) -> Result<()> {
    let default = ToolKind::default();
    if app.format.is_text() {
        app.formatter.print_tools(default);
        return Ok(());
    }
    let entries: Vec<ToolEntry> = ToolKind::all()
        .iter()
        .map(|tool| ToolEntry {
            id: tool.id(),
            name: tool.name(),
            description: tool.description(),
            default: *tool == default,
        })
        .collect();
    emit(app.format, &entries)
}

fn run_qr(app: &App, args: QrArgs) -> Result<()> {
    let text = read_input(&args.text)?;
    let mut options = app.config.qr.clone();
    if let Some(size) = args.size {
        options.size = size;
    }
    if let Some(margin) = args.margin {
        options.margin = margin;
    }
    if let Some(dark) = args.dark {
        options.dark = dark;
    }
    if let Some(light) = args.light {
        options.light = light;
    }
    if let Some(ec) = args.ec {
        options.error_correction = ec;
    }

    let code = qr::generate(&text, &options)?;
    let path = artifact_path(&app.config, args.output, qr::DEFAULT_FILE_NAME, args.svg);
    let kind = ImageKind::for_path(&path, args.svg);
    let bytes = match kind {
        ImageKind::Png => code.to_png()?,
        ImageKind::Svg => code.to_svg().into_bytes(),
    };
    output::write_artifact(&path, &bytes)?;
    info!("QR code ({} modules) written to {}", code.modules(), path.display());

    if args.show && app.format.is_text() {
        println!("{}", code.to_terminal());
    }

    let copied = args.copy && clipboard::copy_image(code.to_raster());
    if args.copy && !copied {
        warn!("Clipboard unavailable, image not copied");
    }

    let edge = code.pixel_size();
    report_artifact(
        app,
        &ArtifactSummary {
            tool: ToolKind::Qr,
            path,
            kind,
            width: edge,
            height: edge,
            content: text,
            copied,
        },
    )
}

fn run_barcode(app: &App, args: BarcodeArgs) -> Result<()> {
    let text = read_input(&args.text)?;
    let mut options = app.config.barcode.clone();
    if let Some(width) = args.width {
        options.module_width = width;
    }
    if let Some(height) = args.height {
        options.height = height;
    }
    if args.no_text {
        options.display_value = false;
    }

    let code = barcode::encode(&text, args.symbology)?;
    let path = artifact_path(&app.config, args.output, barcode::DEFAULT_FILE_NAME, args.svg);
    let kind = ImageKind::for_path(&path, args.svg);
    let raster = code.to_raster(&options)?;
    let (bytes, (width, height)) = match kind {
        ImageKind::Png => (raster.to_png()?, (raster.width(), raster.height())),
        ImageKind::Svg => (code.to_svg(&options)?.into_bytes(), code.svg_size(&options)?),
    };
    output::write_artifact(&path, &bytes)?;
    info!(
        "{} barcode ({} modules) written to {}",
        args.symbology.label(),
        code.modules.len(),
        path.display()
    );

    let copied = args.copy && clipboard::copy_image(raster);
    if args.copy && !copied {
        warn!("Clipboard unavailable, image not copied");
    }

    report_artifact(
        app,
        &ArtifactSummary {
            tool: ToolKind::Barcode,
            path,
            kind,
            width,
            height,
            content: format!("{} {}", args.symbology.label(), code.text),
            copied,
        },
    )
}

fn run_password(app: &App, args: PasswordArgs) -> Result<()> {
    if let Some(candidate) = args.check {
        let strength = password::strength(&candidate);
        if app.format.is_text() {
            app.formatter.print_strength(&strength);
            return Ok(());
        }
        return emit(app.format, &strength);
    }

    let mut options = app.config.password.clone();
    if let Some(length) = args.length {
        options.length = length;
    }
    if args.no_uppercase {
        options.uppercase = false;
    }
    if args.no_lowercase {
        options.lowercase = false;
    }
    if args.no_numbers {
        options.numbers = false;
    }
    if args.symbols {
        options.symbols = true;
    }
    if args.no_symbols {
        options.symbols = false;
    }

    let generated = password::generate(&options)?;
    let copied = copy_text(args.copy, &generated.password);
    if app.format.is_text() {
        app.formatter.print_password(&generated, copied);
        Ok(())
    } else {
        emit(app.format, &generated)
    }
}

fn run_hash(app: &App, args: HashArgs) -> Result<()> {
    let input = read_input(&args.input)?;

    if let Some(existing) = args.verify {
        let matches = hash::verify_bcrypt(&input, &existing)?;
        if app.format.is_text() {
            app.formatter.print_verification(matches);
            return Ok(());
        }
        return emit(app.format, &Verification { matches });
    }

    let algorithm = args.algorithm.unwrap_or(app.config.hash.algorithm);
    let cost = args.cost.unwrap_or(app.config.hash.bcrypt_cost);
    let result = hash::generate(&input, algorithm, cost)?;
    let copied = copy_text(args.copy, &result.hash);
    if app.format.is_text() {
        app.formatter.print_hash(&result, copied);
        Ok(())
    } else {
        emit(app.format, &result)
    }
}

fn run_translate(app: &App, args: TranslateArgs) -> Result<()> {
    if args.list_languages {
        if app.format.is_text() {
            app.formatter.print_languages();
            return Ok(());
        }
        let entries: Vec<LanguageEntry> = languages::LANGUAGES
            .iter()
            .map(|&(code, name)| LanguageEntry { code, name })
            .collect();
        return emit(app.format, &entries);
    }

    let text = match args.text.as_slice() {
        [single] => read_input(single)?,
        words => words.join(" "),
    };
    let defaults = &app.config.translator;
    let mut pair = LanguagePair::new(
        args.from.unwrap_or_else(|| defaults.source.clone()),
        args.to.unwrap_or_else(|| defaults.target.clone()),
    );
    if args.swap {
        pair = pair.swapped()?;
    }

    let request = TranslateRequest::new(text, pair)?;
    let mut translator = Translator::from_config(defaults);
    let translation = translator.translate(&request);
    let copied = copy_text(args.copy, &translation.text);

    if app.format.is_text() {
        app.formatter.print_translation(&request, &translation, copied);
        Ok(())
    } else {
        emit(app.format, &translation)
    }
}

fn run_video(app: &App, action: VideoAction) -> Result<()> {
    match action {
        VideoAction::Platforms => {
            if app.format.is_text() {
                app.formatter.print_platforms();
                Ok(())
            } else {
                emit(app.format, video::PLATFORMS)
            }
        }
        VideoAction::Analyze { url } => {
            let info = video::analyze(&url, &app.config.video)?;
            if app.format.is_text() {
                app.formatter.print_video_info(&info);
                Ok(())
            } else {
                emit(app.format, &info)
            }
        }
        VideoAction::Download {
            url,
            quality,
            output,
        } => {
            let info = video::analyze(&url, &app.config.video)?;
            let quality = match quality {
                Some(quality) => quality,
                None => info
                    .quality
                    .first()
                    .cloned()
                    .context("video offers no qualities")?,
            };
            let dir = output.unwrap_or_else(|| app.config.output_dir.clone());

            let show_progress = app.format.is_text() && !app.quiet;
            let receipt = video::download(&info, &quality, &dir, &app.config.video, |percent| {
                if show_progress {
                    draw_progress(percent);
                }
            })?;
            if show_progress {
                eprintln!();
            }

            if app.format.is_text() {
                app.formatter.print_receipt(&receipt);
                Ok(())
            } else {
                emit(app.format, &receipt)
            }
        }
    }
}

fn draw_progress(percent: f64) {
    const WIDTH: usize = 30;
    let filled = ((percent / 100.0) * WIDTH as f64).round().clamp(0.0, WIDTH as f64) as usize;
    eprint!(
        "\rDownloading... [{}{}] {:5.1}%",
        "#".repeat(filled),
        " ".repeat(WIDTH - filled),
        percent
    );
    let _ = io::stderr().flush();
}
