use image::{GrayImage, Luma, RgbImage};
use serde::{Deserialize, Serialize};

/// Inclusive HSV bounds for glove segmentation.
///
/// Channels are `[h, s, v]` with hue in half degrees (0..=179) and
/// saturation/value in 0..=255, the convention most published glove tunings
/// use, so values from an external HSV tuner apply directly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct HsvRange {
    pub lower: [u8; 3],
    pub upper: [u8; 3],
}

impl Default for HsvRange {
    /// Tuned for a bright warm-colored glove. For other glove colors, e.g.
    /// bright blue, use lower = [100, 150, 0], upper = [140, 255, 255].
    fn default() -> Self {
        Self {
            lower: [0, 20, 70],
            upper: [25, 255, 255],
        }
    }
}

impl HsvRange {
    pub fn contains(&self, hsv: [u8; 3]) -> bool {
        (0..3).all(|i| self.lower[i] <= hsv[i] && hsv[i] <= self.upper[i])
    }
}

/// Convert an RGB pixel to HSV (`[h, s, v]`, hue in half degrees).
pub fn rgb_to_hsv(r: u8, g: u8, b: u8) -> [u8; 3] {
    let r = r as f32 / 255.0;
    let g = g as f32 / 255.0;
    let b = b as f32 / 255.0;

    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let delta = max - min;

    let h_deg = if delta == 0.0 {
        0.0
    } else if max == r {
        60.0 * ((g - b) / delta)
    } else if max == g {
        60.0 * ((b - r) / delta) + 120.0
    } else {
        60.0 * ((r - g) / delta) + 240.0
    };
    let h_deg = h_deg.rem_euclid(360.0);

    let s = if max == 0.0 { 0.0 } else { delta / max };

    [
        (h_deg / 2.0) as u8,
        (s * 255.0).round() as u8,
        (max * 255.0).round() as u8,
    ]
}

/// Threshold a frame against an HSV range, producing a binary mask
/// (255 = pixel inside the range, 0 = outside).
pub fn hsv_mask(frame: &RgbImage, range: &HsvRange) -> GrayImage {
    let (width, height) = frame.dimensions();
    let mut mask = GrayImage::new(width, height);

    for (x, y, px) in frame.enumerate_pixels() {
        let hsv = rgb_to_hsv(px[0], px[1], px[2]);
        let value = if range.contains(hsv) { 255 } else { 0 };
        mask.put_pixel(x, y, Luma([value]));
    }

    mask
}
