use anyhow::{Result, bail};

/// A 2D point in frame coordinates (y grows downward).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// Axis-aligned rectangle with the invariant x2 > x1 and y2 > y1.
///
/// Construction goes through `new` so the invariant holds for the lifetime
/// of the value; the distance math in `proximity` relies on it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub x1: f32,
    pub y1: f32,
    pub x2: f32,
    pub y2: f32,
}

impl Rect {
    pub fn new(x1: f32, y1: f32, x2: f32, y2: f32) -> Result<Self> {
        if !(x2 > x1 && y2 > y1) {
            bail!(
                "invalid rectangle ({}, {}, {}, {}): require x2 > x1 and y2 > y1",
                x1,
                y1,
                x2,
                y2
            );
        }
        Ok(Self { x1, y1, x2, y2 })
    }

    /// Boundary box of the given size centered in a frame.
    pub fn centered(frame_w: f32, frame_h: f32, box_w: f32, box_h: f32) -> Result<Self> {
        let x1 = (frame_w - box_w) / 2.0;
        let y1 = (frame_h - box_h) / 2.0;
        Self::new(x1, y1, x1 + box_w, y1 + box_h)
    }

    pub fn width(&self) -> f32 {
        self.x2 - self.x1
    }

    pub fn height(&self) -> f32 {
        self.y2 - self.y1
    }

    /// True if the point lies inside the rectangle or on its boundary.
    pub fn contains(&self, p: Point) -> bool {
        self.x1 <= p.x && p.x <= self.x2 && self.y1 <= p.y && p.y <= self.y2
    }

    /// Translate by (dx, dy), clamped so the rectangle stays fully inside
    /// a frame of the given size. Size is preserved.
    pub fn translated_clamped(&self, dx: f32, dy: f32, frame_w: f32, frame_h: f32) -> Rect {
        let w = self.width();
        let h = self.height();
        let x1 = (self.x1 + dx).clamp(0.0, (frame_w - w).max(0.0));
        let y1 = (self.y1 + dy).clamp(0.0, (frame_h - h).max(0.0));
        Rect {
            x1,
            y1,
            x2: x1 + w,
            y2: y1 + h,
        }
    }
}

/// Bounding box in pixel coordinates.
#[derive(Debug, Clone, PartialEq)]
pub struct BoundingBox {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

/// Per-frame output of the hand tracker.
#[derive(Debug, Clone)]
pub struct HandDetection {
    /// Geometric center of the detected blob, the tracked hand position.
    pub centroid: Point,
    pub bbox: BoundingBox,
    /// Blob size in pixels.
    pub area: u32,
}
