//! Region-of-interest masking.
//!
//! Lane boundaries only appear in a fixed wedge of a dashboard-camera frame,
//! so the edge map is intersected with a filled polygon (a triangle by
//! default) before segment extraction. The fill is a scanline rasterizer:
//! for each row, the crossings of the polygon edges are collected, sorted,
//! and painted pairwise. Vertices may lie outside the image; painting clamps
//! to the frame.

use crate::image::{ImageF32, ImageView, ImageViewMut};
use serde::{Deserialize, Serialize};

/// Triangular region of interest in frame coordinates.
///
/// The base sits on the bottom row of the frame between `bottom_left_x` and
/// `bottom_right_x`; the apex points toward the horizon. Defaults match the
/// classic 1280×720 dashboard-camera tuning.
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct RoiOptions {
    pub bottom_left_x: i32,
    pub bottom_right_x: i32,
    pub apex_x: i32,
    pub apex_y: i32,
}

impl Default for RoiOptions {
    fn default() -> Self {
        Self {
            bottom_left_x: 200,
            bottom_right_x: 1100,
            apex_x: 550,
            apex_y: 250,
        }
    }
}

impl RoiOptions {
    /// Triangle vertices for a frame of the given height.
    pub fn triangle(&self, frame_height: usize) -> [(i32, i32); 3] {
        let bottom = frame_height as i32;
        [
            (self.bottom_left_x, bottom),
            (self.bottom_right_x, bottom),
            (self.apex_x, self.apex_y),
        ]
    }
}

/// Rasterize a filled polygon into a binary mask (1.0 inside, 0.0 outside).
pub fn fill_polygon(w: usize, h: usize, polygon: &[(i32, i32)]) -> ImageF32 {
    let mut mask = ImageF32::new(w, h);
    if polygon.len() < 3 || w == 0 || h == 0 {
        return mask;
    }

    let mut crossings: Vec<f32> = Vec::with_capacity(polygon.len());
    for y in 0..h {
        let yc = y as f32 + 0.5;
        crossings.clear();
        for i in 0..polygon.len() {
            let (x0, y0) = polygon[i];
            let (x1, y1) = polygon[(i + 1) % polygon.len()];
            let (x0, y0, x1, y1) = (x0 as f32, y0 as f32, x1 as f32, y1 as f32);
            // Half-open rule on y avoids double-counting shared vertices.
            if (y0 <= yc && yc < y1) || (y1 <= yc && yc < y0) {
                let t = (yc - y0) / (y1 - y0);
                crossings.push(x0 + t * (x1 - x0));
            }
        }
        crossings.sort_by(|a, b| a.total_cmp(b));

        let row = mask.row_mut(y);
        for pair in crossings.chunks_exact(2) {
            let start = pair[0].ceil().max(0.0) as usize;
            let end = (pair[1].floor().min(w as f32 - 1.0)) as isize;
            if end < start as isize {
                continue;
            }
            for px in &mut row[start..=end as usize] {
                *px = 1.0;
            }
        }
    }

    mask
}

/// Pixel-wise AND of an edge map with a binary mask.
pub fn apply_mask(edges: &ImageF32, mask: &ImageF32) -> ImageF32 {
    assert_eq!(edges.w, mask.w, "mask width mismatch");
    assert_eq!(edges.h, mask.h, "mask height mismatch");
    let mut out = ImageF32::new(edges.w, edges.h);
    for y in 0..edges.h {
        let src = edges.row(y);
        let m = mask.row(y);
        let dst = out.row_mut(y);
        for x in 0..edges.w {
            dst[x] = if m[x] > 0.0 { src[x] } else { 0.0 };
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn triangle_fill_covers_interior_only() {
        let mask = fill_polygon(40, 40, &[(5, 35), (35, 35), (20, 5)]);
        assert!(mask.get(20, 30) > 0.0, "centroid row should be inside");
        assert!(mask.get(1, 1) == 0.0, "corner should be outside");
        assert!(mask.get(38, 10) == 0.0, "right of apex should be outside");
    }

    #[test]
    fn degenerate_polygon_yields_empty_mask() {
        let mask = fill_polygon(16, 16, &[(2, 2), (10, 10)]);
        assert!(mask.data.iter().all(|&v| v == 0.0));
    }

    #[test]
    fn vertices_outside_frame_are_clamped() {
        let mask = fill_polygon(20, 20, &[(-10, 25), (30, 25), (10, -5)]);
        assert!(mask.get(10, 10) > 0.0);
        // No panic and the mask stays within bounds by construction.
    }

    #[test]
    fn apply_mask_zeroes_outside() {
        let mut edges = ImageF32::new(8, 8);
        edges.data.fill(1.0);
        let mut mask = ImageF32::new(8, 8);
        mask.set(3, 3, 1.0);
        let out = apply_mask(&edges, &mask);
        let on: usize = out.data.iter().filter(|&&v| v > 0.0).count();
        assert_eq!(on, 1);
        assert!(out.get(3, 3) > 0.0);
    }
}
