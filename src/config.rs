// SPDX-License-Identifier: PMPL-1.0-or-later

//! Configuration loading.
//!
//! Every section falls back to its defaults, so a config file only needs the
//! keys it wants to change. Files are YAML or JSON, picked by extension.

use crate::barcode::BarcodeOptions;
use crate::hash::{HashAlgorithm, DEFAULT_BCRYPT_COST};
use crate::password::PasswordOptions;
use crate::qr::QrOptions;
use crate::translate::remote::{MYMEMORY_ENDPOINT, PROXY_ENDPOINT};
use crate::video::VideoOptions;
use anyhow::{anyhow, Context, Result};
use log::info;
use serde::{Deserialize, Serialize};
use std::env;
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

pub const DEFAULT_CONFIG_FILES: &[&str] = &["multi-tools.yaml", "multi-tools.yml", "multi-tools.json"];

pub const PRIMARY_ENDPOINT_ENV: &str = "MULTI_TOOLS_TRANSLATE_PRIMARY";
pub const SECONDARY_ENDPOINT_ENV: &str = "MULTI_TOOLS_TRANSLATE_SECONDARY";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Where generated files land when no explicit output path is given
    pub output_dir: PathBuf,
    pub qr: QrOptions,
    pub barcode: BarcodeOptions,
    pub password: PasswordOptions,
    pub hash: HashConfig,
    pub translator: TranslatorConfig,
    pub video: VideoOptions,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from("."),
            qr: QrOptions::default(),
            barcode: BarcodeOptions::default(),
            password: PasswordOptions::default(),
            hash: HashConfig::default(),
            translator: TranslatorConfig::default(),
            video: VideoOptions::default(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HashConfig {
    pub algorithm: HashAlgorithm,
    pub bcrypt_cost: u32,
}

impl Default for HashConfig {
    fn default() -> Self {
        Self {
            algorithm: HashAlgorithm::Bcrypt,
            bcrypt_cost: DEFAULT_BCRYPT_COST,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TranslatorConfig {
    /// Tried first; an empty string disables it
    pub primary_endpoint: String,
    /// Tried when the primary endpoint gives no translation
    pub secondary_endpoint: String,
    pub timeout_secs: u64,
    pub source: String,
    pub target: String,
}

impl Default for TranslatorConfig {
    fn default() -> Self {
        Self {
            primary_endpoint: PROXY_ENDPOINT.to_string(),
            secondary_endpoint: MYMEMORY_ENDPOINT.to_string(),
            timeout_secs: 10,
            source: "en".to_string(),
            target: "es".to_string(),
        }
    }
}

/// Where the active configuration came from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigSource {
    File(PathBuf),
    Defaults,
}

impl fmt::Display for ConfigSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigSource::File(path) => write!(f, "{}", path.display()),
            ConfigSource::Defaults => f.write_str("built-in defaults"),
        }
    }
}

impl AppConfig {
    /// Load `path` if given, else the first default config file present in
    /// `dir`, else the built-in defaults. Environment overrides apply last.
    pub fn load(path: Option<&Path>, dir: &Path) -> Result<(Self, ConfigSource)> {
        let found = match path {
            Some(path) => Some(path.to_path_buf()),
            None => DEFAULT_CONFIG_FILES
                .iter()
                .map(|name| dir.join(name))
                .find(|candidate| candidate.is_file()),
        };

        let (mut config, source) = match found {
            Some(path) => {
                let config = Self::from_file(&path)?;
                info!("Loaded config from {}", path.display());
                (config, ConfigSource::File(path))
            }
            None => (Self::default(), ConfigSource::Defaults),
        };
        config.apply_env_overrides();
        Ok((config, source))
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("reading config {}", path.display()))?;
        match path.extension().and_then(|ext| ext.to_str()) {
            Some("json") => serde_json::from_str(&content)
                .with_context(|| format!("parsing json config {}", path.display())),
            Some("yaml") | Some("yml") => serde_yaml::from_str(&content)
                .with_context(|| format!("parsing yaml config {}", path.display())),
            _ => Err(anyhow!(
                "unsupported config extension for {} (use .yaml, .yml or .json)",
                path.display()
            )),
        }
    }

    pub fn apply_env_overrides(&mut self) {
        if let Ok(value) = env::var(PRIMARY_ENDPOINT_ENV) {
            info!("{} overrides the primary translation endpoint", PRIMARY_ENDPOINT_ENV);
            self.translator.primary_endpoint = value;
        }
        if let Ok(value) = env::var(SECONDARY_ENDPOINT_ENV) {
            info!("{} overrides the secondary translation endpoint", SECONDARY_ENDPOINT_ENV);
            self.translator.secondary_endpoint = value;
        }
    }

    /// `explicit` if given, else the tool's default file name in `output_dir`.
    pub fn output_path(&self, explicit: Option<PathBuf>, default_name: &str) -> PathBuf {
        explicit.unwrap_or_else(|| self.output_dir.join(default_name))
    }
}
