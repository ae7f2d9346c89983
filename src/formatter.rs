// SPDX-License-Identifier: PMPL-1.0-or-later

//! Colored text output for each tool

use crate::hash::{HashResult, SecurityLevel};
use crate::output::ArtifactSummary;
use crate::password::{GeneratedPassword, Strength};
use crate::translate::{languages, TranslateRequest, Translation, TranslationSource};
use crate::types::ToolKind;
use crate::video::{self, DownloadReceipt, VideoInfo};
use colored::*;

#[derive(Debug, Default)]
pub struct TextFormatter;

impl TextFormatter {
    pub fn new() -> Self {
        Self
    }

    pub fn print_tools(&self, default: ToolKind) {
        println!("{}", "=== MULTI-TOOLS ===".bold().cyan());
        for tool in ToolKind::all() {
            let marker = if *tool == default { " (default)" } else { "" };
            println!(
                "  {:18} {:20} {}{}",
                tool.id().bold(),
                tool.name(),
                tool.description().dimmed(),
                marker.green()
            );
        }
    }

    pub fn print_artifact(&self, summary: &ArtifactSummary) {
        println!(
            "{} saved to: {}",
            summary.tool.name().bold(),
            summary.path.display()
        );
        println!("  Size: {}x{} px", summary.width, summary.height);
        println!("  Content: {}", summary.content);
        self.print_copied(summary.copied);
    }

    pub fn print_password(&self, generated: &GeneratedPassword, copied: bool) {
        println!("{}", generated.password.bold());
        println!("  Length: {}", generated.length);
        self.print_strength(&generated.strength);
        self.print_copied(copied);
    }

    pub fn print_strength(&self, strength: &Strength) {
        println!(
            "  Strength: {} ({}/6)",
            strength.label.as_str().color(strength.label.color()).bold(),
            strength.score
        );
    }

    pub fn print_hash(&self, result: &HashResult, copied: bool) {
        println!("{}", result.hash.bold());
        println!("  Algorithm: {}", result.algorithm.label());
        if let Some(cost) = result.cost {
            println!("  Salt rounds: {}", cost);
        }
        let security = match result.info.security {
            SecurityLevel::High => "High".green(),
            SecurityLevel::Low => "Low".red(),
        };
        println!("  Security: {}", security);
        println!("  Use case: {}", result.info.use_case);
        println!("  {}", result.info.description.dimmed());
        self.print_copied(copied);
    }

    pub fn print_verification(&self, matches: bool) {
        if matches {
            println!("{}", "MATCH: input matches the bcrypt hash".green().bold());
        } else {
            println!("{}", "NO MATCH: input does not match the bcrypt hash".red().bold());
        }
    }

    pub fn print_translation(&self, request: &TranslateRequest, translation: &Translation, copied: bool) {
        let name = |code: &str| languages::language_name(code).unwrap_or("Unknown").to_string();
        println!(
            "{} -> {}",
            name(&request.pair.source).dimmed(),
            name(&request.pair.target).dimmed()
        );
        println!("{}", translation.text.bold());
        match &translation.source {
            TranslationSource::Remote { backend } => {
                println!("  Source: {} ({})", "online".green(), backend)
            }
            TranslationSource::Offline => println!("  Source: {}", "offline phrases".yellow()),
        }
        if let Some(notice) = &translation.notice {
            println!("  {}", notice.yellow());
        }
        self.print_copied(copied);
    }

    pub fn print_languages(&self) {
        for (code, name) in languages::LANGUAGES {
            println!("  {:8} {}", code.bold(), name);
        }
    }

    pub fn print_platforms(&self) {
        println!("{}", "Supported platforms".bold().yellow());
        for platform in video::PLATFORMS {
            println!("  {} {:12} {}", platform.icon, platform.name, platform.domain.dimmed());
        }
    }

    pub fn print_video_info(&self, info: &VideoInfo) {
        println!("{}", info.title.bold());
        println!("  Platform: {}", info.platform);
        println!("  Duration: {}", info.duration);
        println!("  Views: {}", info.views);
        println!("  Uploaded: {}", info.upload_date);
        println!("  File size: {}", info.file_size);
        println!("  Qualities:");
        for quality in &info.quality {
            println!("    {} {}", quality, video::quality_label(quality).dimmed());
        }
    }

    pub fn print_receipt(&self, receipt: &DownloadReceipt) {
        println!("{}", "Download completed!".green().bold());
        println!("  Video: {}", receipt.title);
        println!("  Quality: {}", receipt.quality);
        println!("  File size: {}", receipt.file_size);
        println!("  Saved to: {}", receipt.path.display());
        println!("  {}", receipt.note.dimmed());
    }

    fn print_copied(&self, copied: bool) {
        if copied {
            println!("  {}", "Copied to clipboard".green());
        }
    }
}
