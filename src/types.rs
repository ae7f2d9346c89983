// SPDX-License-Identifier: PMPL-1.0-or-later

//! Core type definitions shared by the tools

use anyhow::{anyhow, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The tools offered by multi-tools, in sidebar order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ToolKind {
    #[default]
    Qr,
    Barcode,
    Password,
    Hash,
    Translate,
    VideoDownloader,
}

impl ToolKind {
    pub fn all() -> &'static [ToolKind] {
        &[
            ToolKind::Qr,
            ToolKind::Barcode,
            ToolKind::Password,
            ToolKind::Hash,
            ToolKind::Translate,
            ToolKind::VideoDownloader,
        ]
    }

    pub fn id(&self) -> &'static str {
        match self {
            ToolKind::Qr => "qr",
            ToolKind::Barcode => "barcode",
            ToolKind::Password => "password",
            ToolKind::Hash => "hash",
            ToolKind::Translate => "translate",
            ToolKind::VideoDownloader => "video-downloader",
        }
    }

    pub fn from_id(id: &str) -> Option<Self> {
        Self::all().iter().copied().find(|tool| tool.id() == id)
    }

    pub fn name(&self) -> &'static str {
        match self {
            ToolKind::Qr => "QR Generator",
            ToolKind::Barcode => "Barcode Generator",
            ToolKind::Password => "Password Generator",
            ToolKind::Hash => "Hash Generator",
            ToolKind::Translate => "Translator",
            ToolKind::VideoDownloader => "Video Downloader",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            ToolKind::Qr => "Generate QR codes",
            ToolKind::Barcode => "Create barcodes",
            ToolKind::Password => "Secure passwords",
            ToolKind::Hash => "Hash passwords",
            ToolKind::Translate => "Translate text",
            ToolKind::VideoDownloader => "Download videos",
        }
    }
}

/// An opaque sRGB color, written in config files as `#RRGGBB`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    pub const BLACK: Rgb = Rgb(0, 0, 0);
    pub const WHITE: Rgb = Rgb(0xff, 0xff, 0xff);

    pub fn to_hex(&self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.0, self.1, self.2)
    }

    pub fn to_rgba(&self) -> [u8; 4] {
        [self.0, self.1, self.2, 0xff]
    }
}

impl FromStr for Rgb {
    type Err = anyhow::Error;

    fn from_str(value: &str) -> Result<Self> {
        let digits = value.trim().trim_start_matches('#');
        let expanded: String = match digits.len() {
            3 => digits.chars().flat_map(|c| [c, c]).collect(),
            6 => digits.to_string(),
            _ => return Err(anyhow!("invalid color {:?} (expected #RRGGBB)", value)),
        };
        let bytes = hex::decode(&expanded)
            .map_err(|_| anyhow!("invalid color {:?} (expected #RRGGBB)", value))?;
        Ok(Rgb(bytes[0], bytes[1], bytes[2]))
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl Serialize for Rgb {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex())
    }
}

impl<'de> Deserialize<'de> for Rgb {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tool_ids_round_trip() {
        for tool in ToolKind::all() {
            assert_eq!(ToolKind::from_id(tool.id()), Some(*tool));
        }
        assert_eq!(ToolKind::from_id("spreadsheet"), None);
        assert_eq!(ToolKind::default(), ToolKind::Qr);
    }

    #[test]
    fn colors_parse_long_and_short_forms() {
        assert_eq!("#FFFFFF".parse::<Rgb>().unwrap(), Rgb::WHITE);
        assert_eq!("000".parse::<Rgb>().unwrap(), Rgb::BLACK);
        assert_eq!("#1a2B3c".parse::<Rgb>().unwrap(), Rgb(0x1a, 0x2b, 0x3c));
        assert!("#12345".parse::<Rgb>().is_err());
        assert!("#zzzzzz".parse::<Rgb>().is_err());
    }
}
