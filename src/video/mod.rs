// SPDX-License-Identifier: PMPL-1.0-or-later

//! Simulated video downloader.
//!
//! No video platform is ever contacted. `analyze` validates the URL, waits
//! the configured delay and returns placeholder metadata; `download` runs a
//! fake progress bar and writes a small demo file in place of the video.

use crate::random;
use anyhow::{bail, Context, Result};
use log::{debug, info};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::thread;
use std::time::Duration;

pub const UNKNOWN_PLATFORM: &str = "Unknown";

pub const QUALITIES: &[&str] = &["1080p", "720p", "480p", "360p"];

pub const THUMBNAIL_URL: &str =
    "https://images.pexels.com/photos/1092644/pexels-photo-1092644.jpeg?auto=compress&cs=tinysrgb&w=400";

pub const DEMO_FILE_BODY: &str =
    "This is a demo download. In a real implementation, this would be the actual video file.";

pub const DEMO_NOTE: &str =
    "This is a demo. In a real implementation, the actual video file would be downloaded.";

const VIEWS: &[&str] = &["1.2M", "856K", "2.1M", "445K", "3.7M", "189K", "925K", "1.8M"];
const DURATIONS: &[&str] = &["10:45", "0:30", "15:22", "3:18", "8:07", "25:33", "4:12", "12:56"];
const FILE_SIZES: &[&str] = &["125 MB", "15 MB", "280 MB", "45 MB", "95 MB", "420 MB", "58 MB", "185 MB"];

const TITLE_LIMIT: usize = 50;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Platform {
    pub name: &'static str,
    pub domain: &'static str,
    pub icon: &'static str,
    /// Substrings that identify the platform in a lowercased URL
    #[serde(skip)]
    pub patterns: &'static [&'static str],
    #[serde(skip)]
    pub sample_title: &'static str,
}

pub const PLATFORMS: &[Platform] = &[
    Platform {
        name: "YouTube",
        domain: "youtube.com",
        icon: "🎥",
        patterns: &["youtube.com", "youtu.be"],
        sample_title: "Amazing Web Development Tutorial - Build Modern Apps in 2024 🚀",
    },
    Platform {
        name: "TikTok",
        domain: "tiktok.com",
        icon: "🎵",
        patterns: &["tiktok.com"],
        sample_title: "Viral Dance Challenge 2024 🔥 #trending #viral",
    },
    Platform {
        name: "Instagram",
        domain: "instagram.com",
        icon: "📷",
        patterns: &["instagram.com"],
        sample_title: "Behind the Scenes - Professional Photography Tips & Tricks",
    },
    Platform {
        name: "Facebook",
        domain: "facebook.com",
        icon: "👥",
        patterns: &["facebook.com", "fb.watch"],
        sample_title: "Funny Cat Compilation - Hilarious Moments That Will Make You Laugh!",
    },
    Platform {
        name: "Twitter/X",
        domain: "twitter.com",
        icon: "🐦",
        patterns: &["twitter.com", "x.com"],
        sample_title: "Breaking Tech News - Latest AI Developments & Updates",
    },
    Platform {
        name: "Vimeo",
        domain: "vimeo.com",
        icon: "🎬",
        patterns: &["vimeo.com"],
        sample_title: "Award-Winning Short Film - \"The Journey\" | Professional Cinema",
    },
    Platform {
        name: "Dailymotion",
        domain: "dailymotion.com",
        icon: "📺",
        patterns: &["dailymotion.com"],
        sample_title: "Latest Music Video - Chart-Topping Hit Song 2024",
    },
    Platform {
        name: "Reddit",
        domain: "reddit.com",
        icon: "🤖",
        patterns: &["reddit.com"],
        sample_title: "Community Discussion - Top Voted Content of the Week",
    },
];

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct VideoOptions {
    /// Simulated metadata lookup time
    pub analyze_delay_ms: u64,
    /// Interval between progress updates
    pub tick_ms: u64,
}

impl Default for VideoOptions {
    fn default() -> Self {
        Self {
            analyze_delay_ms: 2500,
            tick_ms: 200,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VideoInfo {
    pub title: String,
    pub thumbnail: String,
    pub duration: String,
    pub quality: Vec<String>,
    pub platform: String,
    pub url: String,
    pub views: String,
    pub upload_date: String,
    pub file_size: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DownloadReceipt {
    pub path: PathBuf,
    pub title: String,
    pub quality: String,
    pub file_size: String,
    pub note: &'static str,
}

/// First platform whose patterns appear in the lowercased URL.
pub fn detect_platform(url: &str) -> Option<&'static Platform> {
    let lower = url.to_lowercase();
    PLATFORMS
        .iter()
        .find(|platform| platform.patterns.iter().any(|p| lower.contains(p)))
}

pub fn platform_name(url: &str) -> &'static str {
    detect_platform(url).map_or(UNKNOWN_PLATFORM, |platform| platform.name)
}

pub fn quality_label(quality: &str) -> &'static str {
    match quality {
        "1080p" => "(Full HD)",
        "720p" => "(HD)",
        "480p" => "(SD)",
        _ => "(Low)",
    }
}

pub fn analyze(url: &str, options: &VideoOptions) -> Result<VideoInfo> {
    if url.trim().is_empty() {
        bail!("Please enter a valid video URL");
    }
    if url::Url::parse(url.trim()).is_err() {
        bail!("Please enter a valid URL");
    }
    let Some(platform) = detect_platform(url) else {
        bail!("Platform not supported. Please check supported platforms below.");
    };

    info!("Analyzing {} video {}", platform.name, url);
    sleep_ms(options.analyze_delay_ms);
    mock_info(url, platform)
}

fn mock_info(url: &str, platform: &Platform) -> Result<VideoInfo> {
    Ok(VideoInfo {
        title: platform.sample_title.to_string(),
        thumbnail: THUMBNAIL_URL.to_string(),
        duration: random::choose(DURATIONS)?.to_string(),
        quality: QUALITIES.iter().map(|q| q.to_string()).collect(),
        platform: platform.name.to_string(),
        url: url.to_string(),
        views: random::choose(VIEWS)?.to_string(),
        upload_date: "2 days ago".to_string(),
        file_size: random::choose(FILE_SIZES)?.to_string(),
    })
}

/// `<first 50 chars of title>_<quality>.mp4`, with characters that are not
/// valid in file names replaced by `_`.
pub fn demo_file_name(title: &str, quality: &str) -> String {
    let stem: String = title.chars().take(TITLE_LIMIT).collect();
    let name = format!("{}_{}.mp4", stem, quality);
    name.chars()
        .map(|c| match c {
            '/' | '\\' | ':' | '*' | '?' | '"' | '<' | '>' | '|' => '_',
            c if c.is_control() => '_',
            c => c,
        })
        .collect()
}

/// Simulate the download and write the demo file into `dir`.
///
/// `on_progress` sees 0 first and 100 last; in between each tick adds a
/// random step of up to 15 percent.
pub fn download<F>(
    info: &VideoInfo,
    quality: &str,
    dir: &Path,
    options: &VideoOptions,
    mut on_progress: F,
) -> Result<DownloadReceipt>
where
    F: FnMut(f64),
{
    if !info.quality.iter().any(|q| q == quality) {
        bail!(
            "Quality {} is not available (choose from {})",
            quality,
            info.quality.join(", ")
        );
    }

    let mut progress = 0.0;
    on_progress(progress);
    while progress < 100.0 {
        sleep_ms(options.tick_ms);
        progress = (progress + random::random_unit()? * 15.0).min(100.0);
        debug!("download progress {:.1}%", progress);
        on_progress(progress);
    }

    fs::create_dir_all(dir).with_context(|| format!("creating directory {}", dir.display()))?;
    let path = dir.join(demo_file_name(&info.title, quality));
    fs::write(&path, DEMO_FILE_BODY).with_context(|| format!("writing {}", path.display()))?;
    info!("Demo download written to {}", path.display());

    Ok(DownloadReceipt {
        path,
        title: info.title.clone(),
        quality: quality.to_string(),
        file_size: info.file_size.clone(),
        note: DEMO_NOTE,
    })
}

fn sleep_ms(ms: u64) {
    if ms > 0 {
        thread::sleep(Duration::from_millis(ms));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn instant() -> VideoOptions {
        VideoOptions {
            analyze_delay_ms: 0,
            tick_ms: 0,
        }
    }

    #[test]
    fn platform_detection() {
        assert_eq!(platform_name("https://youtu.be/abc"), "YouTube");
        assert_eq!(platform_name("HTTPS://WWW.YOUTUBE.COM/watch?v=1"), "YouTube");
        assert_eq!(platform_name("https://fb.watch/xyz"), "Facebook");
        assert_eq!(platform_name("https://x.com/user/status/1"), "Twitter/X");
        assert_eq!(platform_name("https://www.reddit.com/r/videos"), "Reddit");
        assert_eq!(platform_name("https://example.org/video"), UNKNOWN_PLATFORM);
    }

    #[test]
    fn analyze_error_messages() {
        let options = instant();
        let err = |url: &str| analyze(url, &options).unwrap_err().to_string();
        assert_eq!(err("   "), "Please enter a valid video URL");
        assert_eq!(err("youtube.com/watch"), "Please enter a valid URL");
        assert_eq!(
            err("https://example.org/v/1"),
            "Platform not supported. Please check supported platforms below."
        );
    }

    #[test]
    fn analyze_returns_mock_metadata() {
        let url = "https://vimeo.com/12345";
        let info = analyze(url, &instant()).unwrap();
        assert_eq!(info.platform, "Vimeo");
        assert_eq!(info.url, url);
        assert_eq!(info.quality, vec!["1080p", "720p", "480p", "360p"]);
        assert_eq!(info.upload_date, "2 days ago");
        assert!(DURATIONS.contains(&info.duration.as_str()));
        assert!(VIEWS.contains(&info.views.as_str()));
        assert!(FILE_SIZES.contains(&info.file_size.as_str()));
    }

    #[test]
    fn quality_labels() {
        assert_eq!(quality_label("1080p"), "(Full HD)");
        assert_eq!(quality_label("720p"), "(HD)");
        assert_eq!(quality_label("480p"), "(SD)");
        assert_eq!(quality_label("360p"), "(Low)");
    }

    #[test]
    fn demo_file_name_truncates_and_sanitizes() {
        let name = demo_file_name(PLATFORMS[5].sample_title, "720p");
        assert_eq!(
            name,
            "Award-Winning Short Film - _The Journey_ _ Profess_720p.mp4"
        );
        assert_eq!(demo_file_name("a/b\\c", "360p"), "a_b_c_360p.mp4");
    }
}
