// SPDX-License-Identifier: PMPL-1.0-or-later

//! Multi-tools: a suite of small independent utilities behind one command.
//!
//! Each tool is a self-contained input-to-output action:
//! 1. **QR / Barcode**: encode text and render PNG or SVG images.
//! 2. **Password / Hash**: random passwords with strength scoring, digests
//!    and bcrypt hashes of text.
//! 3. **Translate**: remote translation with an offline phrase-table
//!    fallback and an online/offline status flag.
//! 4. **Video**: a simulated downloader that never contacts a platform.

pub mod barcode;
pub mod clipboard;
pub mod config;
pub mod diagnostics;
pub mod formatter;
pub mod hash;
pub mod logging;
pub mod output;
pub mod password;
pub mod qr;
pub mod random;
pub mod raster;
pub mod translate;
pub mod types;
pub mod video;
