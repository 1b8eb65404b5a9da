use image::{GrayImage, RgbImage};
use imageproc::filter::gaussian_blur_f32;

/// Slight blur to reduce sensor noise and frame-to-frame flicker before
/// thresholding. `sigma` must be positive.
pub fn apply_blur(frame: &RgbImage, sigma: f32) -> RgbImage {
    gaussian_blur_f32(frame, sigma)
}

/// Zero out the top and left fractions of a segmentation mask.
///
/// With a seated operator the top of the frame is face and shirt, which
/// share hue with skin-toned gloves; suppressing those zones keeps the
/// tracker on the hand. Fractions outside [0, 1] are clamped.
pub fn suppress_zones(mask: &mut GrayImage, top_fraction: f32, left_fraction: f32) {
    let (width, height) = mask.dimensions();
    let cut_y = (height as f32 * top_fraction.clamp(0.0, 1.0)) as u32;
    let cut_x = (width as f32 * left_fraction.clamp(0.0, 1.0)) as u32;

    for (x, y, px) in mask.enumerate_pixels_mut() {
        if y < cut_y || x < cut_x {
            px[0] = 0;
        }
    }
}
