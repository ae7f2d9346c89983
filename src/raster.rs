// SPDX-License-Identifier: PMPL-1.0-or-later

//! Pixel canvas shared by the QR and barcode renderers

use crate::types::Rgb;
use anyhow::{anyhow, bail, Context, Result};
use image::{ImageBuffer, ImageFormat, Rgba, RgbaImage};
use std::io::Cursor;
use std::ops::RangeInclusive;

/// Largest edge, in pixels, of any rendered image.
pub const MAX_EDGE: u32 = 16_384;

/// Reject an option value outside `range`.
pub fn check_range(name: &str, value: u32, range: RangeInclusive<u32>) -> Result<()> {
    if !range.contains(&value) {
        bail!(
            "{} must be between {} and {} (got {})",
            name,
            range.start(),
            range.end(),
            value
        );
    }
    Ok(())
}

/// `content + 2 * margin`, checked against overflow and [`MAX_EDGE`].
pub fn padded_edge(content: u32, margin: u32) -> Result<u32> {
    margin
        .checked_mul(2)
        .and_then(|both| both.checked_add(content))
        .filter(|edge| *edge <= MAX_EDGE)
        .ok_or_else(|| anyhow!("image would be larger than {} pixels per side", MAX_EDGE))
}

pub struct Raster {
    image: RgbaImage,
}

impl Raster {
    pub fn new(width: u32, height: u32, background: Rgb) -> Self {
        Self {
            image: ImageBuffer::from_pixel(width, height, Rgba(background.to_rgba())),
        }
    }

    pub fn width(&self) -> u32 {
        self.image.width()
    }

    pub fn height(&self) -> u32 {
        self.image.height()
    }

    /// Fill a rectangle, clipped to the canvas.
    pub fn fill_rect(&mut self, x: u32, y: u32, width: u32, height: u32, color: Rgb) {
        let x_end = x.saturating_add(width).min(self.width());
        let y_end = y.saturating_add(height).min(self.height());
        let pixel = Rgba(color.to_rgba());
        for py in y..y_end {
            for px in x..x_end {
                self.image.put_pixel(px, py, pixel);
            }
        }
    }

    pub fn pixel(&self, x: u32, y: u32) -> Rgb {
        let Rgba([r, g, b, _]) = *self.image.get_pixel(x, y);
        Rgb(r, g, b)
    }

    pub fn to_png(&self) -> Result<Vec<u8>> {
        let mut buffer = Vec::new();
        self.image
            .write_to(&mut Cursor::new(&mut buffer), ImageFormat::Png)
            .context("encoding PNG")?;
        Ok(buffer)
    }

    /// Raw RGBA bytes, row-major, as the clipboard expects them.
    pub fn into_rgba(self) -> Vec<u8> {
        self.image.into_raw()
    }
}

pub fn svg_document(width: u32, height: u32, background: Rgb, body: &str) -> String {
    format!(
        "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{w}\" height=\"{h}\" viewBox=\"0 0 {w} {h}\">\
         <rect width=\"100%\" height=\"100%\" fill=\"{bg}\"/>{body}</svg>",
        w = width,
        h = height,
        bg = background,
        body = body
    )
}

pub fn escape_xml(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&apos;"),
            _ => escaped.push(ch),
        }
    }
    escaped
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fill_rect_clips_to_canvas() {
        let mut raster = Raster::new(4, 4, Rgb::WHITE);
        raster.fill_rect(2, 2, 10, 10, Rgb::BLACK);
        assert_eq!(raster.pixel(1, 1), Rgb::WHITE);
        assert_eq!(raster.pixel(3, 3), Rgb::BLACK);
        assert_eq!(raster.into_rgba().len(), 4 * 4 * 4);
    }

    #[test]
    fn range_errors_name_the_option() {
        assert!(check_range("margin", 64, 0..=64).is_ok());
        let err = check_range("margin", 65, 0..=64).unwrap_err().to_string();
        assert_eq!(err, "margin must be between 0 and 64 (got 65)");
    }

    #[test]
    fn padded_edge_refuses_overflow_and_huge_canvases() {
        assert_eq!(padded_edge(95, 10).unwrap(), 115);
        assert!(padded_edge(1, u32::MAX / 2 + 1).is_err());
        assert!(padded_edge(MAX_EDGE, 1).is_err());
    }

    #[test]
    fn xml_special_characters_are_escaped() {
        assert_eq!(escape_xml("a<b & \"c\""), "a&lt;b &amp; &quot;c&quot;");
    }
}
