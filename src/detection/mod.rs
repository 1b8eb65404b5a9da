pub mod blobs;
pub mod color;
pub mod morphology;
pub mod preprocessing;
pub mod steps;

use crate::config::MonitorConfig;
use crate::models::HandDetection;
use self::color::HsvRange;
use image::{DynamicImage, GrayImage};

/// Color-segmentation hand tracker.
///
/// Produces at most one detection per frame: the largest glove-colored blob
/// that survives zone suppression and morphological cleanup. A frame with no
/// acceptable blob yields `None`, which is an expected outcome, not an error.
pub struct HandTracker {
    pub hsv: HsvRange,
    pub min_area: u32,
    pub blur_sigma: f32,
    pub morph_radius: u8,
    pub suppress_top_fraction: f32,
    pub suppress_left_fraction: f32,
    pub verbose: bool,
}

impl HandTracker {
    pub fn new() -> Self {
        Self::from_config(&MonitorConfig::default())
    }

    pub fn from_config(cfg: &MonitorConfig) -> Self {
        Self {
            hsv: cfg.hsv,
            min_area: cfg.min_area,
            blur_sigma: cfg.blur_sigma,
            morph_radius: cfg.morph_radius,
            suppress_top_fraction: cfg.suppress_top_fraction,
            suppress_left_fraction: cfg.suppress_left_fraction,
            verbose: false,
        }
    }

    pub fn with_verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }

    /// Run the full tracking sequence on one frame.
    pub fn track(&self, frame: &DynamicImage) -> Option<HandDetection> {
        let mask = self.segmentation_mask(frame);

        let candidates = blobs::find_blobs(&mask, self.min_area);
        if self.verbose {
            println!(
                "Found {} candidate blobs (min area {})",
                candidates.len(),
                self.min_area
            );
        }

        let blob = candidates.into_iter().max_by_key(|b| b.pixel_count)?;
        let detection = HandDetection {
            centroid: blob.centroid(),
            bbox: blob.bbox(),
            area: blob.area(),
        };

        if self.verbose {
            println!(
                "Hand at ({:.0}, {:.0}), area {} px",
                detection.centroid.x, detection.centroid.y, detection.area
            );
        }

        Some(detection)
    }

    /// The cleaned segmentation mask for a frame (for tuning and debugging).
    pub fn segmentation_mask(&self, frame: &DynamicImage) -> GrayImage {
        let rgb = frame.to_rgb8();
        let blurred = preprocessing::apply_blur(&rgb, self.blur_sigma);
        let mut mask = color::hsv_mask(&blurred, &self.hsv);
        preprocessing::suppress_zones(
            &mut mask,
            self.suppress_top_fraction,
            self.suppress_left_fraction,
        );
        morphology::clean_mask(&mask, self.morph_radius)
    }
}

impl Default for HandTracker {
    fn default() -> Self {
        Self::new()
    }
}

/// Build the tracking sequence as a composable pipeline, one step per stage.
/// Equivalent to `HandTracker::track`; used by the CLI so debug mode can dump
/// every intermediate mask.
pub fn build_tracker_pipeline(cfg: &MonitorConfig, verbose: bool) -> crate::pipeline::Pipeline {
    use crate::detection::steps::*;
    use crate::pipeline::Pipeline;

    Pipeline::new()
        .with_verbose(verbose)
        .add_step(Box::new(BlurStep {
            sigma: cfg.blur_sigma,
        }))
        .add_step(Box::new(HsvMaskStep { range: cfg.hsv }))
        .add_step(Box::new(SuppressZonesStep {
            top_fraction: cfg.suppress_top_fraction,
            left_fraction: cfg.suppress_left_fraction,
        }))
        .add_step(Box::new(MorphologyStep {
            radius: cfg.morph_radius,
        }))
        .add_step(Box::new(LargestBlobStep {
            min_area: cfg.min_area,
        }))
}
