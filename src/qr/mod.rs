// SPDX-License-Identifier: PMPL-1.0-or-later

//! QR code generation
//!
//! Encoding is delegated to the `qrcode` crate. Rendering is done here so the
//! quiet zone can be set in modules (the default is 2, narrower than the
//! crate's built-in 4-module quiet zone) and the output scaled to a target
//! pixel size.

use crate::raster::{self, Raster};
use crate::types::Rgb;
use anyhow::{anyhow, bail, Result};
use qrcode::render::unicode;
use qrcode::{Color, EcLevel, QrCode};
use serde::{Deserialize, Serialize};
use std::ops::RangeInclusive;

pub const DEFAULT_FILE_NAME: &str = "qrcode.png";
pub const SIZE_RANGE: RangeInclusive<u32> = 1..=4096;
pub const MARGIN_RANGE: RangeInclusive<u32> = 0..=64;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct QrOptions {
    /// Target edge length in pixels
    pub size: u32,
    /// Quiet zone width in modules
    pub margin: u32,
    pub dark: Rgb,
    pub light: Rgb,
    pub error_correction: ErrorCorrection,
}

impl QrOptions {
    pub fn validate(&self) -> Result<()> {
        raster::check_range("QR size", self.size, SIZE_RANGE)?;
        raster::check_range("QR margin", self.margin, MARGIN_RANGE)
    }
}

impl Default for QrOptions {
    fn default() -> Self {
        Self {
            size: 300,
            margin: 2,
            dark: Rgb::BLACK,
            light: Rgb::WHITE,
            error_correction: ErrorCorrection::M,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
pub enum ErrorCorrection {
    L,
    M,
    Q,
    H,
}

impl From<ErrorCorrection> for EcLevel {
    fn from(level: ErrorCorrection) -> Self {
        match level {
            ErrorCorrection::L => EcLevel::L,
            ErrorCorrection::M => EcLevel::M,
            ErrorCorrection::Q => EcLevel::Q,
            ErrorCorrection::H => EcLevel::H,
        }
    }
}

/// An encoded QR symbol plus the options it should be drawn with
pub struct QrImage {
    code: QrCode,
    options: QrOptions,
}

pub fn generate(text: &str, options: &QrOptions) -> Result<QrImage> {
    if text.trim().is_empty() {
        bail!("nothing to encode: text is empty");
    }
    options.validate()?;
    let code = QrCode::with_error_correction_level(text.as_bytes(), options.error_correction.into())
        .map_err(|e| anyhow!("invalid QR content: {}", e))?;
    Ok(QrImage {
        code,
        options: options.clone(),
    })
}

impl QrImage {
    /// Modules per side, excluding the quiet zone.
    pub fn modules(&self) -> usize {
        self.code.width()
    }

    fn module_pixels(&self) -> u32 {
        let total = self.modules() as u32 + 2 * self.options.margin;
        (self.options.size / total).max(1)
    }

    /// Edge length of the rendered image in pixels.
    pub fn pixel_size(&self) -> u32 {
        (self.modules() as u32 + 2 * self.options.margin) * self.module_pixels()
    }

    pub fn is_dark(&self, x: usize, y: usize) -> bool {
        let width = self.modules();
        x < width && y < width && self.code[(x, y)] == Color::Dark
    }

    pub fn to_raster(&self) -> Raster {
        let scale = self.module_pixels();
        let margin = self.options.margin;
        let edge = self.pixel_size();
        let colors = self.code.to_colors();
        let width = self.modules();

        let mut raster = Raster::new(edge, edge, self.options.light);
        for (index, color) in colors.iter().enumerate() {
            if *color != Color::Dark {
                continue;
            }
            let x = (index % width) as u32 + margin;
            let y = (index / width) as u32 + margin;
            raster.fill_rect(x * scale, y * scale, scale, scale, self.options.dark);
        }
        raster
    }

    pub fn to_png(&self) -> Result<Vec<u8>> {
        self.to_raster().to_png()
    }

    pub fn to_svg(&self) -> String {
        let scale = self.module_pixels();
        let margin = self.options.margin;
        let edge = self.pixel_size();
        let width = self.modules();

        let mut rects = String::new();
        for y in 0..width {
            for x in 0..width {
                if self.is_dark(x, y) {
                    rects.push_str(&format!(
                        "<rect x=\"{}\" y=\"{}\" width=\"{s}\" height=\"{s}\"/>",
                        (x as u32 + margin) * scale,
                        (y as u32 + margin) * scale,
                        s = scale
                    ));
                }
            }
        }
        raster::svg_document(
            edge,
            edge,
            self.options.light,
            &format!("<g fill=\"{}\">{}</g>", self.options.dark, rects),
        )
    }

    /// Half-block rendering for printing straight to a terminal.
    pub fn to_terminal(&self) -> String {
        self.code
            .render::<unicode::Dense1x2>()
            .dark_color(unicode::Dense1x2::Light)
            .light_color(unicode::Dense1x2::Dark)
            .quiet_zone(true)
            .build()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_text_is_rejected() {
        assert!(generate("  \n", &QrOptions::default()).is_err());
    }

    #[test]
    fn default_render_fits_target_size() {
        let qr = generate("https://example.com", &QrOptions::default()).unwrap();
        let edge = qr.pixel_size();
        assert!(edge <= 300, "edge {} exceeds target", edge);
        assert!(edge > 250, "edge {} leaves too much unused space", edge);
        assert_eq!(edge % (qr.modules() as u32 + 4), 0);
    }

    #[test]
    fn quiet_zone_is_light() {
        let options = QrOptions::default();
        let qr = generate("hello", &options).unwrap();
        let raster = qr.to_raster();
        assert_eq!(raster.pixel(0, 0), options.light);
        // Top-left finder pattern starts right after the margin.
        let scale = qr.pixel_size() / (qr.modules() as u32 + 4);
        assert_eq!(raster.pixel(2 * scale, 2 * scale), options.dark);
    }

    #[test]
    fn tiny_size_still_renders_one_pixel_modules() {
        let options = QrOptions {
            size: 5,
            ..QrOptions::default()
        };
        let qr = generate("hello", &options).unwrap();
        assert_eq!(qr.pixel_size(), qr.modules() as u32 + 4);
    }

    #[test]
    fn out_of_range_options_are_rejected() {
        for options in [
            QrOptions {
                margin: u32::MAX / 2 + 1,
                ..QrOptions::default()
            },
            QrOptions {
                size: 100_000,
                ..QrOptions::default()
            },
            QrOptions {
                size: 0,
                ..QrOptions::default()
            },
        ] {
            let err = generate("hello", &options).err().expect("options should be rejected");
            assert!(err.to_string().contains("must be between"), "{}", err);
        }
    }

    #[test]
    fn widest_allowed_margin_renders() {
        let options = QrOptions {
            size: *SIZE_RANGE.end(),
            margin: *MARGIN_RANGE.end(),
            ..QrOptions::default()
        };
        let qr = generate("hello", &options).unwrap();
        assert!(qr.pixel_size() <= *SIZE_RANGE.end());
        assert_eq!(qr.to_raster().width(), qr.pixel_size());
    }

    #[test]
    fn png_and_svg_outputs_are_well_formed() {
        let qr = generate("hello", &QrOptions::default()).unwrap();
        let png = qr.to_png().unwrap();
        assert_eq!(&png[..4], &[0x89, b'P', b'N', b'G']);
        let svg = qr.to_svg();
        assert!(svg.starts_with("<svg"));
        assert!(svg.contains("<rect"));
        assert!(!qr.to_terminal().is_empty());
    }
}
