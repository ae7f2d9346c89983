// SPDX-License-Identifier: PMPL-1.0-or-later

//! System clipboard access for `--copy`.
//!
//! Failures are logged and reported as `false`; copying is never fatal.

use crate::raster::Raster;
use arboard::ImageData;
use log::{error, info};
use std::borrow::Cow;

pub struct ClipboardHelper {
    clipboard: arboard::Clipboard,
}

impl ClipboardHelper {
    pub fn new() -> Option<Self> {
        match arboard::Clipboard::new() {
            Ok(clipboard) => Some(Self { clipboard }),
            Err(e) => {
                error!("Failed to initialize clipboard: {}", e);
                None
            }
        }
    }

    pub fn copy_text(&mut self, text: &str) -> bool {
        match self.clipboard.set_text(text) {
            Ok(()) => {
                info!("Copied {} characters to clipboard", text.chars().count());
                true
            }
            Err(e) => {
                error!("Failed to copy to clipboard: {}", e);
                false
            }
        }
    }

    pub fn copy_image(&mut self, raster: Raster) -> bool {
        let width = raster.width() as usize;
        let height = raster.height() as usize;
        let image = ImageData {
            width,
            height,
            bytes: Cow::Owned(raster.into_rgba()),
        };
        match self.clipboard.set_image(image) {
            Ok(()) => {
                info!("Copied {}x{} image to clipboard", width, height);
                true
            }
            Err(e) => {
                error!("Failed to copy image to clipboard: {}", e);
                false
            }
        }
    }
}

/// Copy text if a clipboard is available.
pub fn copy_text(text: &str) -> bool {
    ClipboardHelper::new().is_some_and(|mut helper| helper.copy_text(text))
}

/// Copy a rendered image if a clipboard is available.
pub fn copy_image(raster: Raster) -> bool {
    ClipboardHelper::new().is_some_and(|mut helper| helper.copy_image(raster))
}
