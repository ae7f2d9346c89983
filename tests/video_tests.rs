// SPDX-License-Identifier: PMPL-1.0-or-later

//! Simulated video analysis and download

use multi_tools::video::{self, VideoOptions, DEMO_FILE_BODY};
use std::fs;
use tempfile::TempDir;

fn instant() -> VideoOptions {
    VideoOptions {
        analyze_delay_ms: 0,
        tick_ms: 0,
    }
}

#[test]
fn download_writes_demo_file_and_reports_progress() {
    let dir = TempDir::new().expect("tempdir should create");
    let info = video::analyze("https://www.youtube.com/watch?v=dQw4w9WgXcQ", &instant())
        .expect("youtube url should analyze");
    assert_eq!(info.platform, "YouTube");

    let mut updates = Vec::new();
    let receipt = video::download(&info, "720p", dir.path(), &instant(), |p| updates.push(p))
        .expect("download should succeed");

    assert_eq!(updates.first().copied(), Some(0.0));
    assert_eq!(updates.last().copied(), Some(100.0));
    assert!(updates.windows(2).all(|pair| pair[0] <= pair[1]));
    assert!(updates.iter().all(|p| (0.0..=100.0).contains(p)));

    let name = receipt
        .path
        .file_name()
        .and_then(|n| n.to_str())
        .expect("receipt should name a file");
    assert!(name.starts_with("Amazing Web Development Tutorial - Build Modern Ap"));
    assert!(name.ends_with("_720p.mp4"));
    assert_eq!(fs::read_to_string(&receipt.path).expect("demo file should read"), DEMO_FILE_BODY);
    assert_eq!(receipt.quality, "720p");
    assert_eq!(receipt.file_size, info.file_size);
}

#[test]
fn download_rejects_unoffered_quality() {
    let dir = TempDir::new().expect("tempdir should create");
    let info = video::analyze("https://vimeo.com/1", &instant()).expect("vimeo url should analyze");
    let err = video::download(&info, "4k", dir.path(), &instant(), |_| {}).unwrap_err();
    assert!(err.to_string().contains("4k"));
    assert_eq!(fs::read_dir(dir.path()).expect("dir should list").count(), 0);
}

#[test]
fn download_creates_missing_directory() {
    let dir = TempDir::new().expect("tempdir should create");
    let target = dir.path().join("videos/today");
    let info = video::analyze("https://www.tiktok.com/@user/video/1", &instant())
        .expect("tiktok url should analyze");
    let receipt = video::download(&info, "360p", &target, &instant(), |_| {})
        .expect("download should succeed");
    assert!(receipt.path.starts_with(&target));
    assert!(receipt.path.is_file());
}

#[test]
fn every_platform_has_a_detectable_domain() {
    for platform in video::PLATFORMS {
        let url = format!("https://{}/watch/1", platform.domain);
        assert_eq!(video::platform_name(&url), platform.name);
    }
}
