use serde::{Deserialize, Serialize};

/// Line segment in pixel coordinates, endpoints inclusive.
///
/// Produced by the Hough stage and reused for the reconstructed lane lines.
/// Coordinates are signed so that lanes reconstructed from shallow slopes may
/// extend beyond the frame; the renderer clips while drawing.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineSegment {
    pub x1: i32,
    pub y1: i32,
    pub x2: i32,
    pub y2: i32,
}

impl LineSegment {
    pub fn new(x1: i32, y1: i32, x2: i32, y2: i32) -> Self {
        Self { x1, y1, x2, y2 }
    }

    /// Euclidean length in pixels.
    pub fn length(&self) -> f32 {
        let dx = (self.x2 - self.x1) as f32;
        let dy = (self.y2 - self.y1) as f32;
        (dx * dx + dy * dy).sqrt()
    }

    /// True when both endpoints share an x coordinate (undefined slope).
    pub fn is_vertical(&self) -> bool {
        self.x1 == self.x2
    }
}

/// Per-frame estimator output: one representative line per side, either of
/// which may be absent when no segment of that slope sign was detected.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LaneLines {
    /// Lane with negative averaged slope (left boundary in image space).
    pub left: Option<LineSegment>,
    /// Lane with non-negative averaged slope (right boundary).
    pub right: Option<LineSegment>,
}

impl LaneLines {
    /// True when neither side produced a lane this frame.
    pub fn is_empty(&self) -> bool {
        self.left.is_none() && self.right.is_none()
    }
}
