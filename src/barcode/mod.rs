// SPDX-License-Identifier: PMPL-1.0-or-later

//! Linear barcode generation

pub mod symbology;

use crate::raster::{self, Raster};
use crate::types::Rgb;
use anyhow::{anyhow, bail, Result};
use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::ops::RangeInclusive;

pub const DEFAULT_FILE_NAME: &str = "barcode.png";
pub const MODULE_WIDTH_RANGE: RangeInclusive<u32> = 1..=20;
pub const HEIGHT_RANGE: RangeInclusive<u32> = 1..=1024;
pub const MARGIN_RANGE: RangeInclusive<u32> = 0..=256;
pub const FONT_SIZE_RANGE: RangeInclusive<u32> = 1..=128;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
pub enum BarcodeFormat {
    #[default]
    #[serde(rename = "CODE128")]
    #[value(name = "code128")]
    Code128,
    #[serde(rename = "EAN13")]
    #[value(name = "ean13")]
    Ean13,
    #[serde(rename = "EAN8")]
    #[value(name = "ean8")]
    Ean8,
    #[serde(rename = "UPC")]
    #[value(name = "upc")]
    Upc,
    #[serde(rename = "ITF14")]
    #[value(name = "itf14")]
    Itf14,
    #[serde(rename = "MSI")]
    #[value(name = "msi")]
    Msi,
    #[serde(rename = "pharmacode")]
    #[value(name = "pharmacode")]
    Pharmacode,
}

impl BarcodeFormat {
    pub fn label(&self) -> &'static str {
        match self {
            BarcodeFormat::Code128 => "CODE128",
            BarcodeFormat::Ean13 => "EAN-13",
            BarcodeFormat::Ean8 => "EAN-8",
            BarcodeFormat::Upc => "UPC",
            BarcodeFormat::Itf14 => "ITF-14",
            BarcodeFormat::Msi => "MSI",
            BarcodeFormat::Pharmacode => "Pharmacode",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BarcodeOptions {
    /// Pixels per narrow module
    pub module_width: u32,
    /// Bar height in pixels
    pub height: u32,
    /// Blank border in pixels
    pub margin: u32,
    /// Print the human readable value under the bars (SVG output)
    pub display_value: bool,
    pub font_size: u32,
    pub text_margin: u32,
    pub background: Rgb,
    pub line_color: Rgb,
}

impl BarcodeOptions {
    pub fn validate(&self) -> Result<()> {
        raster::check_range("barcode module width", self.module_width, MODULE_WIDTH_RANGE)?;
        raster::check_range("barcode height", self.height, HEIGHT_RANGE)?;
        raster::check_range("barcode margin", self.margin, MARGIN_RANGE)?;
        raster::check_range("barcode font size", self.font_size, FONT_SIZE_RANGE)?;
        raster::check_range("barcode text margin", self.text_margin, 0..=*FONT_SIZE_RANGE.end())
    }
}

impl Default for BarcodeOptions {
    fn default() -> Self {
        Self {
            module_width: 2,
            height: 100,
            margin: 10,
            display_value: true,
            font_size: 14,
            text_margin: 5,
            background: Rgb::WHITE,
            line_color: Rgb::BLACK,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Barcode {
    pub format: BarcodeFormat,
    pub modules: Vec<bool>,
    /// Human readable value, including any computed check digit
    pub text: String,
}

pub fn encode(text: &str, format: BarcodeFormat) -> Result<Barcode> {
    if text.trim().is_empty() {
        bail!("nothing to encode: text is empty");
    }

    let (modules, display) = match format {
        BarcodeFormat::Code128 => (symbology::code128(text)?, text.to_string()),
        BarcodeFormat::Ean13 => {
            let digits = symbology::gs1_digits(text, 13, format.label())?;
            (symbology::ean13(&digits), digits_to_string(&digits))
        }
        BarcodeFormat::Ean8 => {
            let digits = symbology::gs1_digits(text, 8, format.label())?;
            (symbology::ean8(&digits), digits_to_string(&digits))
        }
        BarcodeFormat::Upc => {
            let digits = symbology::gs1_digits(text, 12, format.label())?;
            (symbology::upc_a(&digits), digits_to_string(&digits))
        }
        BarcodeFormat::Itf14 => {
            let digits = symbology::gs1_digits(text, 14, format.label())?;
            (symbology::itf(&digits)?, digits_to_string(&digits))
        }
        BarcodeFormat::Msi => (symbology::msi(text)?, text.to_string()),
        BarcodeFormat::Pharmacode => (symbology::pharmacode(text)?, text.to_string()),
    };

    Ok(Barcode {
        format,
        modules,
        text: display,
    })
}

fn digits_to_string(digits: &[u8]) -> String {
    digits.iter().map(|d| char::from(b'0' + d)).collect()
}

impl Barcode {
    fn bars_width(&self, options: &BarcodeOptions) -> Result<u32> {
        options.validate()?;
        u32::try_from(self.modules.len())
            .ok()
            .and_then(|modules| modules.checked_mul(options.module_width))
            .ok_or_else(|| anyhow!("{} barcode is too long to render", self.format.label()))
    }

    /// Dark runs as (first module, run length) pairs.
    fn bars(&self) -> Vec<(usize, usize)> {
        let mut runs = Vec::new();
        let mut start = None;
        for (index, dark) in self.modules.iter().enumerate() {
            match (dark, start) {
                (true, None) => start = Some(index),
                (false, Some(s)) => {
                    runs.push((s, index - s));
                    start = None;
                }
                _ => {}
            }
        }
        if let Some(s) = start {
            runs.push((s, self.modules.len() - s));
        }
        runs
    }

    /// PNG canvas size: bars plus margin on every side.
    pub fn png_size(&self, options: &BarcodeOptions) -> Result<(u32, u32)> {
        Ok((
            raster::padded_edge(self.bars_width(options)?, options.margin)?,
            raster::padded_edge(options.height, options.margin)?,
        ))
    }

    pub fn to_raster(&self, options: &BarcodeOptions) -> Result<Raster> {
        let (width, height) = self.png_size(options)?;
        let mut raster = Raster::new(width, height, options.background);
        for (start, len) in self.bars() {
            raster.fill_rect(
                options.margin + start as u32 * options.module_width,
                options.margin,
                len as u32 * options.module_width,
                options.height,
                options.line_color,
            );
        }
        Ok(raster)
    }

    pub fn to_png(&self, options: &BarcodeOptions) -> Result<Vec<u8>> {
        self.to_raster(options)?.to_png()
    }

    fn text_band(&self, options: &BarcodeOptions) -> u32 {
        if options.display_value {
            options.text_margin + options.font_size
        } else {
            0
        }
    }

    /// SVG canvas size; taller than the PNG by the text band.
    pub fn svg_size(&self, options: &BarcodeOptions) -> Result<(u32, u32)> {
        Ok((
            raster::padded_edge(self.bars_width(options)?, options.margin)?,
            raster::padded_edge(options.height + self.text_band(options), options.margin)?,
        ))
    }

    pub fn to_svg(&self, options: &BarcodeOptions) -> Result<String> {
        let (width, height) = self.svg_size(options)?;
        let bars_width = self.bars_width(options)?;
        let text_band = self.text_band(options);

        let mut body = format!("<g fill=\"{}\">", options.line_color);
        for (start, len) in self.bars() {
            body.push_str(&format!(
                "<rect x=\"{}\" y=\"{}\" width=\"{}\" height=\"{}\"/>",
                options.margin + start as u32 * options.module_width,
                options.margin,
                len as u32 * options.module_width,
                options.height
            ));
        }
        if options.display_value {
            body.push_str(&format!(
                "<text x=\"{}\" y=\"{}\" font-family=\"monospace\" font-size=\"{}px\" text-anchor=\"middle\">{}</text>",
                options.margin + bars_width / 2,
                options.margin + options.height + text_band,
                options.font_size,
                raster::escape_xml(&self.text)
            ));
        }
        body.push_str("</g>");
        Ok(raster::svg_document(width, height, options.background, &body))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ean13_appends_check_digit_to_display_text() {
        let barcode = encode("400638133393", BarcodeFormat::Ean13).unwrap();
        assert_eq!(barcode.text, "4006381333931");
    }

    #[test]
    fn invalid_input_names_the_format() {
        let err = encode("hello", BarcodeFormat::Ean8).unwrap_err();
        assert!(err.to_string().contains("EAN-8"), "{}", err);
        assert!(encode(" ", BarcodeFormat::Code128).is_err());
    }

    #[test]
    fn raster_dimensions_follow_options() {
        let options = BarcodeOptions::default();
        let barcode = encode("HELLO", BarcodeFormat::Code128).unwrap();
        let raster = barcode.to_raster(&options).unwrap();
        assert_eq!(
            raster.width(),
            barcode.modules.len() as u32 * options.module_width + 2 * options.margin
        );
        assert_eq!(raster.height(), options.height + 2 * options.margin);
        // Every symbol starts with a bar.
        assert_eq!(raster.pixel(options.margin, options.margin), options.line_color);
        assert_eq!(raster.pixel(0, 0), options.background);
    }

    #[test]
    fn bars_cover_all_dark_modules() {
        let barcode = encode("12345678", BarcodeFormat::Msi).unwrap();
        let dark: usize = barcode.modules.iter().filter(|m| **m).count();
        let covered: usize = barcode.bars().iter().map(|(_, len)| len).sum();
        assert_eq!(dark, covered);
    }

    #[test]
    fn svg_includes_value_only_when_requested() {
        let barcode = encode("A&B", BarcodeFormat::Code128).unwrap();
        let mut options = BarcodeOptions::default();
        assert!(barcode.to_svg(&options).unwrap().contains(">A&amp;B</text>"));
        options.display_value = false;
        assert!(!barcode.to_svg(&options).unwrap().contains("<text"));
    }

    #[test]
    fn zero_module_width_is_rejected() {
        let barcode = encode("HELLO", BarcodeFormat::Code128).unwrap();
        let options = BarcodeOptions {
            module_width: 0,
            ..BarcodeOptions::default()
        };
        let err = barcode.to_png(&options).unwrap_err().to_string();
        assert!(err.contains("module width"), "{}", err);
        assert!(barcode.to_svg(&options).is_err());
    }

    #[test]
    fn oversized_dimensions_fail_before_allocating() {
        let barcode = encode("HELLO", BarcodeFormat::Code128).unwrap();
        for options in [
            BarcodeOptions {
                margin: u32::MAX / 2 + 1,
                ..BarcodeOptions::default()
            },
            BarcodeOptions {
                height: 100_000,
                ..BarcodeOptions::default()
            },
        ] {
            assert!(barcode.to_raster(&options).is_err());
            assert!(barcode.svg_size(&options).is_err());
        }
    }

    #[test]
    fn overlong_symbol_is_refused() {
        let text = "A".repeat(2_000);
        let barcode = encode(&text, BarcodeFormat::Code128).unwrap();
        let options = BarcodeOptions {
            module_width: *MODULE_WIDTH_RANGE.end(),
            ..BarcodeOptions::default()
        };
        let err = barcode.to_raster(&options).err().expect("canvas should be too wide");
        assert!(err.to_string().contains("pixels per side"), "{}", err);
    }
}
