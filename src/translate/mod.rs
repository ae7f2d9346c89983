// SPDX-License-Identifier: PMPL-1.0-or-later

//! Translator with tiered resolution.
//!
//! Remote backends are tried in order (a local proxy first, then the public
//! MyMemory endpoint). When none produces a usable translation the request is
//! resolved offline against the phrase table, and the translator reports
//! itself as offline until a backend answers again.

pub mod languages;
pub mod phrases;
pub mod remote;

use crate::config::TranslatorConfig;
use anyhow::{bail, Result};
use log::{info, warn};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::time::Duration;

pub use remote::MyMemoryBackend;

pub const MAX_TEXT_CHARS: usize = 5000;

pub const OFFLINE_NOTICE: &str = "Online translation service is temporarily unavailable. Using offline translation for common phrases.";

/// Why a backend produced no translation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BackendError {
    /// The service could not be reached at all
    Unreachable(String),
    /// The service answered with an error or an unreadable body
    Rejected(String),
}

impl fmt::Display for BackendError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BackendError::Unreachable(detail) => write!(f, "unreachable: {}", detail),
            BackendError::Rejected(detail) => write!(f, "rejected: {}", detail),
        }
    }
}

impl std::error::Error for BackendError {}

pub trait TranslationBackend {
    fn name(&self) -> &str;

    /// `Ok(None)` when the service answered without a translation.
    fn translate(&self, text: &str, source: &str, target: &str) -> Result<Option<String>, BackendError>;
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LanguagePair {
    pub source: String,
    pub target: String,
}

impl LanguagePair {
    pub fn new(source: impl Into<String>, target: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            target: target.into(),
        }
    }

    pub fn swapped(&self) -> Result<Self> {
        if self.source == languages::AUTO {
            bail!("cannot swap languages while the source is auto-detected");
        }
        Ok(Self::new(self.target.clone(), self.source.clone()))
    }
}

/// Swap the language pair and exchange the input and output text.
pub fn swap_texts(pair: &LanguagePair, source_text: &str, translated_text: &str) -> Result<(LanguagePair, String, String)> {
    let pair = pair.swapped()?;
    Ok((pair, translated_text.to_string(), source_text.to_string()))
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TranslateRequest {
    pub text: String,
    pub pair: LanguagePair,
}

impl TranslateRequest {
    pub fn new(text: impl Into<String>, pair: LanguagePair) -> Result<Self> {
        let text = text.into();
        if text.trim().is_empty() {
            bail!("nothing to translate: text is empty");
        }
        let chars = text.chars().count();
        if chars > MAX_TEXT_CHARS {
            bail!(
                "text is too long to translate ({} characters, limit {})",
                chars,
                MAX_TEXT_CHARS
            );
        }
        if !languages::is_supported(&pair.source) {
            bail!("unsupported source language: {}", pair.source);
        }
        if pair.target == languages::AUTO {
            bail!("target language cannot be auto-detect");
        }
        if !languages::is_supported(&pair.target) {
            bail!("unsupported target language: {}", pair.target);
        }
        if pair.source == pair.target {
            bail!("source and target language are both {}", pair.target);
        }
        Ok(Self { text, pair })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum TranslationSource {
    Remote { backend: String },
    Offline,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Translation {
    pub text: String,
    pub source: TranslationSource,
    pub online: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notice: Option<String>,
}

pub struct Translator {
    backends: Vec<Box<dyn TranslationBackend>>,
    online: bool,
}

impl Translator {
    pub fn new(backends: Vec<Box<dyn TranslationBackend>>) -> Self {
        Self {
            backends,
            online: true,
        }
    }

    /// Proxy then public endpoint, skipping any left blank in the config.
    pub fn from_config(config: &TranslatorConfig) -> Self {
        let timeout = Duration::from_secs(config.timeout_secs);
        let mut backends: Vec<Box<dyn TranslationBackend>> = Vec::new();
        for (name, endpoint) in [
            ("primary", &config.primary_endpoint),
            ("secondary", &config.secondary_endpoint),
        ] {
            if endpoint.trim().is_empty() {
                info!("{} translation endpoint disabled", name);
                continue;
            }
            backends.push(Box::new(MyMemoryBackend::new(name, endpoint.trim(), timeout)));
        }
        Self::new(backends)
    }

    pub fn is_online(&self) -> bool {
        self.online
    }

    pub fn backends(&self) -> impl Iterator<Item = &dyn TranslationBackend> {
        self.backends.iter().map(|b| &**b)
    }

    pub fn translate(&mut self, request: &TranslateRequest) -> Translation {
        let pair = &request.pair;
        let mut remote: Option<(String, String)> = None;

        for backend in &self.backends {
            match backend.translate(&request.text, &pair.source, &pair.target) {
                Ok(Some(text)) => {
                    self.online = true;
                    remote = Some((backend.name().to_string(), text));
                    break;
                }
                Ok(None) => {
                    info!("{} translation service returned no text", backend.name());
                }
                Err(BackendError::Unreachable(detail)) => {
                    warn!("{} translation service failed: {}", backend.name(), detail);
                    self.online = false;
                }
                Err(BackendError::Rejected(detail)) => {
                    warn!("{} translation service rejected the request: {}", backend.name(), detail);
                }
            }
        }

        if let Some((backend, text)) = remote {
            if text != request.text {
                return Translation {
                    text,
                    source: TranslationSource::Remote { backend },
                    online: self.online,
                    notice: None,
                };
            }
            info!("{} returned the input unchanged, using offline phrases", backend);
        }

        self.online = false;
        let text = phrases::translate(&request.text, &pair.target);
        let notice = text.starts_with('[').then(|| OFFLINE_NOTICE.to_string());
        Translation {
            text,
            source: TranslationSource::Offline,
            online: false,
            notice,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_validation() {
        let pair = LanguagePair::new("en", "es");
        assert!(TranslateRequest::new("hello", pair.clone()).is_ok());
        assert!(TranslateRequest::new("  ", pair.clone()).is_err());
        assert!(TranslateRequest::new("x".repeat(MAX_TEXT_CHARS + 1), pair.clone()).is_err());
        assert!(TranslateRequest::new("x".repeat(MAX_TEXT_CHARS), pair).is_ok());
        assert!(TranslateRequest::new("hello", LanguagePair::new("en", "en")).is_err());
        assert!(TranslateRequest::new("hello", LanguagePair::new("en", "auto")).is_err());
        assert!(TranslateRequest::new("hello", LanguagePair::new("auto", "es")).is_ok());
        assert!(TranslateRequest::new("hello", LanguagePair::new("en", "klingon")).is_err());
    }

    #[test]
    fn swap_exchanges_languages_and_text() {
        let (pair, input, output) = swap_texts(&LanguagePair::new("en", "fr"), "hello", "bonjour").unwrap();
        assert_eq!(pair, LanguagePair::new("fr", "en"));
        assert_eq!(input, "bonjour");
        assert_eq!(output, "hello");
        assert!(LanguagePair::new("auto", "fr").swapped().is_err());
    }

    #[test]
    fn translator_without_backends_is_offline() {
        let mut translator = Translator::new(Vec::new());
        assert!(translator.is_online());
        let request = TranslateRequest::new("help", LanguagePair::new("en", "de")).unwrap();
        let result = translator.translate(&request);
        assert_eq!(result.text, "hilfe");
        assert_eq!(result.source, TranslationSource::Offline);
        assert!(result.notice.is_none());
        assert!(!translator.is_online());
    }
}
