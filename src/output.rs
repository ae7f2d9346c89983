// SPDX-License-Identifier: PMPL-1.0-or-later

//! Result printing and artifact writing

use crate::types::ToolKind;
use anyhow::{bail, Context, Result};
use clap::ValueEnum;
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable, colored when the terminal allows it
    #[default]
    Text,
    Json,
    Yaml,
}

impl OutputFormat {
    pub fn is_text(&self) -> bool {
        matches!(self, OutputFormat::Text)
    }

    /// Machine-readable rendering; text output is formatted by each command.
    pub fn serialize<T: Serialize + ?Sized>(&self, value: &T) -> Result<String> {
        match self {
            OutputFormat::Json => Ok(serde_json::to_string_pretty(value)?),
            OutputFormat::Yaml => Ok(serde_yaml::to_string(value)?),
            OutputFormat::Text => bail!("text output is rendered by the command itself"),
        }
    }
}

/// Artifact kinds written by the image tools
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ImageKind {
    Png,
    Svg,
}

impl ImageKind {
    /// SVG when requested explicitly or implied by the output extension.
    pub fn for_path(path: &Path, svg: bool) -> Self {
        let svg_ext = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| ext.eq_ignore_ascii_case("svg"))
            .unwrap_or(false);
        if svg || svg_ext {
            ImageKind::Svg
        } else {
            ImageKind::Png
        }
    }

    pub fn extension(&self) -> &'static str {
        match self {
            ImageKind::Png => "png",
            ImageKind::Svg => "svg",
        }
    }
}

/// What an image tool wrote, for printing or serializing
#[derive(Debug, Clone, Serialize)]
pub struct ArtifactSummary {
    pub tool: ToolKind,
    pub path: PathBuf,
    pub kind: ImageKind,
    pub width: u32,
    pub height: u32,
    pub content: String,
    pub copied: bool,
}

/// Write `bytes` to `path`, creating parent directories as needed.
pub fn write_artifact(path: &Path, bytes: &[u8]) -> Result<PathBuf> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("creating directory {}", parent.display()))?;
    }
    fs::write(path, bytes).with_context(|| format!("writing {}", path.display()))?;
    Ok(path.to_path_buf())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Serialize;
    use tempfile::TempDir;

    #[derive(Serialize)]
    struct Sample {
        name: &'static str,
        count: u32,
    }

    #[test]
    fn machine_formats_serialize() {
        let sample = Sample { name: "qr", count: 2 };
        let json = OutputFormat::Json.serialize(&sample).unwrap();
        assert!(json.contains("\"count\": 2"));
        let yaml = OutputFormat::Yaml.serialize(&sample).unwrap();
        assert!(yaml.contains("name: qr"));
        assert!(OutputFormat::Text.serialize(&sample).is_err());
    }

    #[test]
    fn image_kind_follows_flag_or_extension() {
        assert_eq!(ImageKind::for_path(Path::new("a.png"), false), ImageKind::Png);
        assert_eq!(ImageKind::for_path(Path::new("a.SVG"), false), ImageKind::Svg);
        assert_eq!(ImageKind::for_path(Path::new("a.png"), true), ImageKind::Svg);
    }

    #[test]
    fn artifacts_create_parent_directories() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested/deeper/out.bin");
        let written = write_artifact(&path, b"abc").unwrap();
        assert_eq!(fs::read(written).unwrap(), b"abc");
    }
}
