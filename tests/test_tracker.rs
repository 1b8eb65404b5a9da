//! Integration tests for the color-segmentation hand tracker.
//!
//! Tests cover:
//! - Centroid and bounding box accuracy on synthetic blobs
//! - Empty frames and the min-area noise filter
//! - Zone suppression (top and left of the frame)
//! - Largest-blob selection with multiple candidates
//! - End-to-end frame → distance → state

mod common;

use common::*;
use handzone::{HandTracker, ProximityState, Rect, classify_state, distance_to_rect};
use image::DynamicImage;

#[test]
fn test_detects_blob_centroid_and_bbox() {
    let frame = frame_with_blob(220, 170, 20);
    let detection = HandTracker::new().track(&frame).expect("blob not detected");

    // Blur and morphology shift edges, not the center of a symmetric blob
    assert!((detection.centroid.x - 220.0).abs() <= 3.0, "centroid.x = {}", detection.centroid.x);
    assert!((detection.centroid.y - 170.0).abs() <= 3.0, "centroid.y = {}", detection.centroid.y);

    // Bounding box covers the painted square (dilation may grow it slightly)
    assert!(detection.bbox.x <= 200);
    assert!(detection.bbox.y <= 150);
    assert!(detection.bbox.x + detection.bbox.width >= 240);
    assert!(detection.bbox.y + detection.bbox.height >= 190);

    // 41x41 painted pixels; cleanup never shrinks the blob below half of that
    assert!(detection.area > 800, "area = {}", detection.area);
}

#[test]
fn test_empty_frame_yields_none() {
    let frame = DynamicImage::ImageRgb8(blank_frame());
    assert!(HandTracker::new().track(&frame).is_none());
}

#[test]
fn test_min_area_filters_noise() {
    let frame = frame_with_blob(220, 170, 20);

    let mut tracker = HandTracker::new();
    assert!(tracker.track(&frame).is_some());

    // Same frame, but demand a blob larger than the painted one
    tracker.min_area = 10_000;
    assert!(tracker.track(&frame).is_none());
}

#[test]
fn test_top_zone_is_suppressed() {
    // Blob entirely in the top half of the frame (face/shirt zone)
    let frame = frame_with_blob(220, 40, 20);
    assert!(HandTracker::new().track(&frame).is_none());
}

#[test]
fn test_left_zone_is_suppressed() {
    // Blob entirely in the left third of the frame
    let frame = frame_with_blob(50, 170, 20);
    assert!(HandTracker::new().track(&frame).is_none());
}

#[test]
fn test_suppression_can_be_disabled() {
    let frame = frame_with_blob(50, 40, 20);
    let mut tracker = HandTracker::new();
    assert!(tracker.track(&frame).is_none());

    tracker.suppress_top_fraction = 0.0;
    tracker.suppress_left_fraction = 0.0;
    assert!(tracker.track(&frame).is_some());
}

#[test]
fn test_largest_blob_wins() {
    let mut img = blank_frame();
    paint_blob(&mut img, 160, 170, 20, GLOVE_ORANGE);
    paint_blob(&mut img, 280, 200, 7, GLOVE_ORANGE);
    let frame = DynamicImage::ImageRgb8(img);

    let detection = HandTracker::new().track(&frame).expect("blob not detected");
    assert!((detection.centroid.x - 160.0).abs() <= 3.0);
    assert!((detection.centroid.y - 170.0).abs() <= 3.0);
}

#[test]
fn test_frame_to_state_end_to_end() {
    let frame = frame_with_blob(220, 170, 20);
    let tracker = HandTracker::new();

    // Boundary whose right edge sits ~10 px left of the blob center
    let rect = Rect::centered(FRAME_W as f32, FRAME_H as f32, 100.0, 100.0).unwrap();
    assert_eq!(rect, Rect::new(110.0, 70.0, 210.0, 170.0).unwrap());

    let detection = tracker.track(&frame).expect("blob not detected");
    let d = distance_to_rect(detection.centroid, &rect);
    assert!(d > 0.0 && d < 20.0, "distance = {}", d);
    assert_eq!(classify_state(Some(d), true), ProximityState::Danger);

    // No detection on an empty frame: SAFE regardless of geometry
    let empty = DynamicImage::ImageRgb8(blank_frame());
    let missing = tracker.track(&empty);
    assert!(missing.is_none());
    assert_eq!(classify_state(None, false), ProximityState::Safe);
}
