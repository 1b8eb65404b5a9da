//! Integration tests for the composable tracking pipeline.
//!
//! Tests cover:
//! - Step pipeline equivalence with the `HandTracker` orchestrator
//! - Frames with no acceptable blob producing no output items
//! - Debug mode writing every stage's intermediate image
//! - Debug mode refusing a non-empty output directory

mod common;

use common::*;
use handzone::detection::steps::detection_from;
use handzone::{HandTracker, MonitorConfig, build_tracker_pipeline};
use image::DynamicImage;

#[test]
fn test_pipeline_matches_tracker() -> anyhow::Result<()> {
    let cfg = MonitorConfig::default();
    let frame = frame_with_blob(220, 170, 20);

    let results = build_tracker_pipeline(&cfg, false).run(frame.clone())?;
    assert_eq!(results.len(), 1);
    let from_pipeline = detection_from(&results[0]).expect("missing blob metadata");

    let from_tracker = HandTracker::from_config(&cfg)
        .track(&frame)
        .expect("tracker found no blob");

    // Both run the identical stage sequence on the same frame
    assert_eq!(from_pipeline.centroid, from_tracker.centroid);
    assert_eq!(from_pipeline.bbox, from_tracker.bbox);
    assert_eq!(from_pipeline.area, from_tracker.area);
    Ok(())
}

#[test]
fn test_pipeline_filters_undetected_frames() -> anyhow::Result<()> {
    let cfg = MonitorConfig::default();
    let empty = DynamicImage::ImageRgb8(blank_frame());

    let results = build_tracker_pipeline(&cfg, false).run(empty)?;
    assert!(results.is_empty());
    Ok(())
}

#[test]
fn test_debug_mode_writes_stage_images() -> anyhow::Result<()> {
    let cfg = MonitorConfig::default();
    let frame = frame_with_blob(220, 170, 20);

    let tmp = tempfile::tempdir()?;
    let debug_dir = tmp.path().join("stages");

    let pipeline = build_tracker_pipeline(&cfg, false).with_debug(debug_dir.clone())?;
    let results = pipeline.run(frame)?;
    assert_eq!(results.len(), 1);

    for step_dir in [
        "00_input",
        "01_gaussian_blur",
        "02_hsv_mask",
        "03_zone_suppression",
        "04_morphology",
        "05_largest_blob",
    ] {
        let image_path = debug_dir.join(step_dir).join("01.png");
        assert!(image_path.is_file(), "missing {}", image_path.display());
    }
    Ok(())
}

#[test]
fn test_debug_mode_rejects_nonempty_directory() -> anyhow::Result<()> {
    let tmp = tempfile::tempdir()?;
    std::fs::write(tmp.path().join("leftover.txt"), "stale")?;

    let cfg = MonitorConfig::default();
    let result = build_tracker_pipeline(&cfg, false).with_debug(tmp.path().to_path_buf());
    assert!(result.is_err());
    Ok(())
}
