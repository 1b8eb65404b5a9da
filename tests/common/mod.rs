//! Shared helpers for integration tests: synthetic frames with painted
//! glove-colored blobs.

use image::{DynamicImage, Rgb, RgbImage};

/// Comfortably inside the default glove HSV range (hue ~30 degrees, saturated).
pub const GLOVE_ORANGE: Rgb<u8> = Rgb([255, 128, 0]);

/// Background far outside the default range (hue ~240 degrees).
pub const BACKGROUND: Rgb<u8> = Rgb([20, 20, 80]);

pub const FRAME_W: u32 = 320;
pub const FRAME_H: u32 = 240;

pub fn blank_frame() -> RgbImage {
    RgbImage::from_pixel(FRAME_W, FRAME_H, BACKGROUND)
}

/// Paint a filled square blob centered at (cx, cy) with the given half-size.
pub fn paint_blob(img: &mut RgbImage, cx: u32, cy: u32, half: u32, color: Rgb<u8>) {
    let max_x = img.width() - 1;
    let max_y = img.height() - 1;
    for y in cy.saturating_sub(half)..=(cy + half).min(max_y) {
        for x in cx.saturating_sub(half)..=(cx + half).min(max_x) {
            img.put_pixel(x, y, color);
        }
    }
}

/// A frame with a single glove-colored blob. With the default suppression
/// fractions the usable region is the bottom-right of the frame, so place
/// blobs with x > FRAME_W / 3 and y > FRAME_H / 2 unless a test wants them
/// suppressed.
pub fn frame_with_blob(cx: u32, cy: u32, half: u32) -> DynamicImage {
    let mut img = blank_frame();
    paint_blob(&mut img, cx, cy, half, GLOVE_ORANGE);
    DynamicImage::ImageRgb8(img)
}
