//! Point-to-rectangle distance and the SAFE/WARNING/DANGER classifier.
//!
//! Both operations are pure functions over value types: no shared rectangle
//! state, no history between frames. They are safe to call from any number of
//! threads without coordination.

use crate::models::{Point, Rect};
use anyhow::{Result, bail};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Discrete proximity classification of a tracked point.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ProximityState {
    Safe,
    Warning,
    Danger,
}

impl fmt::Display for ProximityState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ProximityState::Safe => "SAFE",
            ProximityState::Warning => "WARNING",
            ProximityState::Danger => "DANGER",
        };
        f.write_str(s)
    }
}

/// Minimum Euclidean distance from a point to a rectangle, where inside or
/// exactly on the boundary (corners included) counts as 0.
///
/// Piecewise closed form: when the point is within the rectangle's horizontal
/// or vertical span, the axis gap already is the true minimum distance, so
/// only the diagonal regions need corner distances. Collapsing everything to
/// a corner-only computation would overestimate for points directly
/// above/below or left/right of the rectangle.
pub fn distance_to_rect(point: Point, rect: &Rect) -> f32 {
    let Point { x, y } = point;

    // Inside or on any edge, corners included
    if rect.contains(point) {
        return 0.0;
    }

    // Within the horizontal span but vertically outside: vertical gap
    if rect.x1 <= x && x <= rect.x2 {
        return if y < rect.y1 { rect.y1 - y } else { y - rect.y2 };
    }

    // Within the vertical span but horizontally outside: horizontal gap
    if rect.y1 <= y && y <= rect.y2 {
        return if x < rect.x1 { rect.x1 - x } else { x - rect.x2 };
    }

    // Diagonally outside: nearest of the four corners
    let corners = [
        (rect.x1, rect.y1),
        (rect.x1, rect.y2),
        (rect.x2, rect.y1),
        (rect.x2, rect.y2),
    ];
    corners
        .iter()
        .map(|&(cx, cy)| (x - cx).hypot(y - cy))
        .fold(f32::INFINITY, f32::min)
}

/// Named distance thresholds for the state classifier, in pixels.
///
/// Both bounds are inclusive on the near side: a distance of exactly
/// `danger` classifies as DANGER, exactly `warning` as WARNING.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Thresholds {
    pub danger: f32,
    pub warning: f32,
}

impl Default for Thresholds {
    fn default() -> Self {
        Self {
            danger: 60.0,
            warning: 120.0,
        }
    }
}

impl Thresholds {
    pub fn new(danger: f32, warning: f32) -> Result<Self> {
        let t = Self { danger, warning };
        t.validate()?;
        Ok(t)
    }

    pub fn validate(&self) -> Result<()> {
        if !(self.danger > 0.0) {
            bail!("danger threshold must be > 0, got {}", self.danger);
        }
        if !(self.warning > self.danger) {
            bail!(
                "warning threshold ({}) must exceed danger threshold ({})",
                self.warning,
                self.danger
            );
        }
        Ok(())
    }

    /// Classify a distance and hand-presence flag into a proximity state.
    ///
    /// When no hand is present the distance is undefined and the result is
    /// SAFE unconditionally. A zero distance (point inside the boundary) is
    /// the innermost DANGER case, covered by the inclusive danger bound.
    pub fn classify(&self, distance: Option<f32>, hand_present: bool) -> ProximityState {
        if !hand_present {
            return ProximityState::Safe;
        }
        let Some(d) = distance else {
            return ProximityState::Safe;
        };
        if d <= self.danger {
            ProximityState::Danger
        } else if d <= self.warning {
            ProximityState::Warning
        } else {
            ProximityState::Safe
        }
    }
}

/// Classify with the default thresholds (60 / 120 pixels).
pub fn classify_state(distance: Option<f32>, hand_present: bool) -> ProximityState {
    Thresholds::default().classify(distance, hand_present)
}
