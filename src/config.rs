use crate::detection::color::HsvRange;
use crate::proximity::Thresholds;
use anyhow::{Context, Result, bail};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Tracker and classifier configuration, loadable from a JSON file.
///
/// Every field has a default tuned for a bright glove on a 640x480 webcam
/// frame, so a config file only needs the fields it changes.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct MonitorConfig {
    /// HSV bounds for glove segmentation.
    pub hsv: HsvRange,
    /// Minimum blob area in pixels to accept as the hand (filters noise).
    pub min_area: u32,
    /// Gaussian blur sigma applied before thresholding.
    pub blur_sigma: f32,
    /// Erode/dilate radius for mask cleanup (0 disables).
    pub morph_radius: u8,
    /// Fraction of the frame's top to ignore (face and shirt).
    pub suppress_top_fraction: f32,
    /// Fraction of the frame's left to ignore.
    pub suppress_left_fraction: f32,
    /// Distance thresholds for the DANGER/WARNING/SAFE classification.
    pub thresholds: Thresholds,
}

impl Default for MonitorConfig {
    fn default() -> Self {
        Self {
            hsv: HsvRange::default(),
            min_area: 200,
            blur_sigma: 1.5,
            morph_radius: 3,
            suppress_top_fraction: 0.5,
            suppress_left_fraction: 1.0 / 3.0,
            thresholds: Thresholds::default(),
        }
    }
}

impl MonitorConfig {
    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        let cfg: MonitorConfig = serde_json::from_str(&text)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn validate(&self) -> Result<()> {
        if self.min_area == 0 {
            bail!("min_area must be at least 1");
        }
        if !(self.blur_sigma > 0.0) {
            bail!("blur_sigma must be > 0, got {}", self.blur_sigma);
        }
        for (name, value) in [
            ("suppress_top_fraction", self.suppress_top_fraction),
            ("suppress_left_fraction", self.suppress_left_fraction),
        ] {
            if !(0.0..=1.0).contains(&value) {
                bail!("{} must be within [0, 1], got {}", name, value);
            }
        }
        for i in 0..3 {
            if self.hsv.lower[i] > self.hsv.upper[i] {
                bail!(
                    "hsv lower bound exceeds upper bound on channel {}: {} > {}",
                    i,
                    self.hsv.lower[i],
                    self.hsv.upper[i]
                );
            }
        }
        self.thresholds.validate()
    }
}
