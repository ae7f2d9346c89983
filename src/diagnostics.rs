// SPDX-License-Identifier: PMPL-1.0-or-later

//! `doctor`: environment self-diagnostics

use crate::config::{AppConfig, ConfigSource};
use crate::translate::{BackendError, TranslationBackend, Translator};
use anyhow::{anyhow, Result};
use colored::Colorize;
use std::path::Path;

const PROBE_TEXT: &str = "hello";

pub fn run_self_diagnostics(config: &AppConfig, source: &ConfigSource) -> Result<()> {
    println!("multi-tools self-diagnostics");

    let mut checks = vec![
        Diagnostic::ok("version", format!("multi-tools {}", env!("CARGO_PKG_VERSION"))),
        check_config(source),
        check_directory("output directory", &config.output_dir),
        check_clipboard(),
    ];

    let translator = Translator::from_config(&config.translator);
    if translator.backends().next().is_none() {
        checks.push(Diagnostic::warning(
            "translation",
            "no remote endpoints configured (offline phrases only)".to_string(),
        ));
    }
    for backend in translator.backends() {
        checks.push(check_backend(backend));
    }

    println!();
    for entry in &checks {
        entry.print();
    }

    if checks.iter().any(|entry| entry.level == Level::Error) {
        Err(anyhow!("self-diagnostics reported issues"))
    } else {
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Level {
    Ok,
    Warn,
    Error,
}

impl Level {
    fn tag(&self) -> String {
        match self {
            Level::Ok => "OK".green().to_string(),
            Level::Warn => "WARN".yellow().to_string(),
            Level::Error => "ERR".red().to_string(),
        }
    }
}

#[derive(Debug)]
pub struct Diagnostic {
    pub label: &'static str,
    pub level: Level,
    pub detail: String,
}

impl Diagnostic {
    fn new(label: &'static str, level: Level, detail: String) -> Self {
        Self {
            label,
            level,
            detail,
        }
    }

    fn ok(label: &'static str, detail: String) -> Self {
        Self::new(label, Level::Ok, detail)
    }

    fn warning(label: &'static str, detail: String) -> Self {
        Self::new(label, Level::Warn, detail)
    }

    fn error(label: &'static str, detail: String) -> Self {
        Self::new(label, Level::Error, detail)
    }

    fn print(&self) {
        println!("  [{}] {:22} {}", self.level.tag(), self.label, self.detail);
    }
}

fn check_config(source: &ConfigSource) -> Diagnostic {
    match source {
        ConfigSource::File(path) => Diagnostic::ok("config", format!("loaded {}", path.display())),
        ConfigSource::Defaults => Diagnostic::ok(
            "config",
            "no config file found, using built-in defaults".to_string(),
        ),
    }
}

/// Output directory: missing is fine (created on first write), a file in its
/// place is not.
pub fn check_directory(label: &'static str, path: &Path) -> Diagnostic {
    if path.is_dir() {
        Diagnostic::ok(label, format!("{} exists", path.display()))
    } else if path.exists() {
        Diagnostic::error(
            label,
            format!("{} exists but is not a directory", path.display()),
        )
    } else {
        Diagnostic::warning(
            label,
            format!("{} missing (created on first write)", path.display()),
        )
    }
}

fn check_clipboard() -> Diagnostic {
    match arboard::Clipboard::new() {
        Ok(_) => Diagnostic::ok("clipboard", "available".to_string()),
        Err(e) => Diagnostic::warning("clipboard", format!("unavailable ({}); --copy will be skipped", e)),
    }
}

/// Translate a sample phrase; an unreachable endpoint only warns since the
/// translator falls back to offline phrases.
pub fn check_backend(backend: &dyn TranslationBackend) -> Diagnostic {
    let label = "translation endpoint";
    match backend.translate(PROBE_TEXT, "en", "es") {
        Ok(Some(text)) => Diagnostic::ok(label, format!("{} answered \"{}\"", backend.name(), text)),
        Ok(None) => Diagnostic::warning(label, format!("{} answered without a translation", backend.name())),
        Err(BackendError::Rejected(detail)) => {
            Diagnostic::warning(label, format!("{} rejected the sample phrase: {}", backend.name(), detail))
        }
        Err(BackendError::Unreachable(detail)) => {
            Diagnostic::warning(label, format!("{} unreachable: {}", backend.name(), detail))
        }
    }
}
