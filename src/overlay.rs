use crate::models::{HandDetection, Rect};
use crate::proximity::ProximityState;
use image::{Rgb, RgbImage};
use imageproc::drawing::{draw_filled_circle_mut, draw_hollow_rect_mut};
use imageproc::rect::Rect as PixelRect;

pub const SAFE_COLOR: Rgb<u8> = Rgb([0, 255, 0]);
pub const WARNING_COLOR: Rgb<u8> = Rgb([255, 255, 0]);
pub const DANGER_COLOR: Rgb<u8> = Rgb([255, 0, 0]);
const BBOX_COLOR: Rgb<u8> = Rgb([255, 255, 255]);

pub fn state_color(state: ProximityState) -> Rgb<u8> {
    match state {
        ProximityState::Safe => SAFE_COLOR,
        ProximityState::Warning => WARNING_COLOR,
        ProximityState::Danger => DANGER_COLOR,
    }
}

/// Draw the virtual boundary and the detection onto a copy of the frame.
///
/// The boundary outline takes the state color; when a hand was detected its
/// bounding box is outlined and the centroid marked with a filled dot.
pub fn annotate(
    frame: &RgbImage,
    rect: &Rect,
    detection: Option<&HandDetection>,
    state: ProximityState,
) -> RgbImage {
    let mut out = frame.clone();
    let color = state_color(state);

    let boundary = PixelRect::at(rect.x1.round() as i32, rect.y1.round() as i32).of_size(
        (rect.width().round() as u32).max(1),
        (rect.height().round() as u32).max(1),
    );
    // Two nested outlines for a 2px border
    draw_hollow_rect_mut(&mut out, boundary, color);
    if boundary.width() > 2 && boundary.height() > 2 {
        let inner = PixelRect::at(boundary.left() + 1, boundary.top() + 1)
            .of_size(boundary.width() - 2, boundary.height() - 2);
        draw_hollow_rect_mut(&mut out, inner, color);
    }

    if let Some(det) = detection {
        let bbox = PixelRect::at(det.bbox.x as i32, det.bbox.y as i32)
            .of_size(det.bbox.width.max(1), det.bbox.height.max(1));
        draw_hollow_rect_mut(&mut out, bbox, BBOX_COLOR);
        draw_filled_circle_mut(
            &mut out,
            (det.centroid.x.round() as i32, det.centroid.y.round() as i32),
            4,
            color,
        );
    }

    out
}
