//! Canny edge detection: non-maximum suppression plus hysteresis.
//!
//! The stage runs in three passes over the gradient field:
//!
//! 1. Sobel gradients (see [`crate::edges::grad`]).
//! 2. Direction-aligned non-maximum suppression with a 4-direction
//!    quantization (0°, 45°, 90°, 135°): a pixel survives only when its
//!    magnitude is at least the leading neighbor's and strictly greater than
//!    the trailing neighbor's along the gradient direction.
//! 3. Double threshold + hysteresis: pixels at or above `high` seed a BFS
//!    that promotes 8-connected pixels at or above `low`.
//!
//! Thresholds are magnitude values in Sobel units over `[0, 1]` images; the
//! defaults in [`crate::detector::CannyOptions`] correspond to the classic
//! 50/150 levels on 8-bit data.
//!
//! Border handling ignores the outermost 1-pixel frame in NMS to avoid
//! out-of-bounds checks in neighbor lookup.
use crate::edges::grad::{sobel_gradients, Grad};
use crate::image::{ImageF32, ImageView};
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;
use std::time::Instant;

const TAN_22_5_DEG: f32 = 0.41421356237;

/// Hysteresis thresholds in Sobel magnitude units over `[0, 1]` images.
///
/// The defaults are the classic 50/150 levels rescaled from 8-bit data.
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct CannyOptions {
    /// Weak-edge threshold; pixels below never survive.
    pub low_threshold: f32,
    /// Strong-edge threshold; pixels at or above seed hysteresis.
    pub high_threshold: f32,
}

impl Default for CannyOptions {
    fn default() -> Self {
        Self {
            low_threshold: 50.0 / 255.0,
            high_threshold: 150.0 / 255.0,
        }
    }
}

const NONE: u8 = 0;
const WEAK: u8 = 1;
const STRONG: u8 = 2;

/// Edge map plus the gradients it was derived from and per-pass timings.
pub struct CannyResult {
    /// Binary edge map: 1.0 on edge pixels, 0.0 elsewhere.
    pub edges: ImageF32,
    pub grad: Grad,
    pub gradient_ms: f64,
    pub nms_ms: f64,
    pub hysteresis_ms: f64,
}

/// Detect edges with Sobel gradients, NMS and hysteresis thresholding.
pub fn canny(l: &ImageF32, low_thresh: f32, high_thresh: f32) -> CannyResult {
    let gradient_start = Instant::now();
    let grad = sobel_gradients(l);
    let gradient_ms = gradient_start.elapsed().as_secs_f64() * 1000.0;

    let nms_start = Instant::now();
    let labels = suppress_non_maxima(&grad, low_thresh, high_thresh);
    let nms_ms = nms_start.elapsed().as_secs_f64() * 1000.0;

    let hysteresis_start = Instant::now();
    let edges = link_edges(&labels, l.w, l.h);
    let hysteresis_ms = hysteresis_start.elapsed().as_secs_f64() * 1000.0;

    CannyResult {
        edges,
        grad,
        gradient_ms,
        nms_ms,
        hysteresis_ms,
    }
}

/// Classify each pixel as NONE/WEAK/STRONG after direction-aligned NMS.
fn suppress_non_maxima(grad: &Grad, low_thresh: f32, high_thresh: f32) -> Vec<u8> {
    let w = grad.gx.w;
    let h = grad.gx.h;
    let mut labels = vec![NONE; w * h];
    if w < 3 || h < 3 {
        return labels;
    }

    for y in 1..h - 1 {
        let mag_prev = grad.mag.row(y - 1);
        let mag_row = grad.mag.row(y);
        let mag_next = grad.mag.row(y + 1);
        let gx_row = grad.gx.row(y);
        let gy_row = grad.gy.row(y);
        let out_row = &mut labels[y * w..(y + 1) * w];

        for x in 1..w - 1 {
            let mag = mag_row[x];
            if mag < low_thresh {
                continue;
            }

            let gx = gx_row[x];
            let gy = gy_row[x];
            let abs_gx = gx.abs();
            let abs_gy = gy.abs();
            let same_sign = (gx >= 0.0 && gy >= 0.0) || (gx <= 0.0 && gy <= 0.0);

            let (neighbor1, neighbor2) = if abs_gx >= abs_gy {
                if abs_gy <= abs_gx * TAN_22_5_DEG {
                    (mag_row[x - 1], mag_row[x + 1])
                } else if same_sign {
                    (mag_prev[x + 1], mag_next[x - 1])
                } else {
                    (mag_prev[x - 1], mag_next[x + 1])
                }
            } else if abs_gx <= abs_gy * TAN_22_5_DEG {
                (mag_prev[x], mag_next[x])
            } else if same_sign {
                (mag_prev[x + 1], mag_next[x - 1])
            } else {
                (mag_prev[x - 1], mag_next[x + 1])
            };

            // Ties break toward the trailing pixel so a two-column plateau
            // (symmetric step edge) keeps exactly one response.
            if mag < neighbor1 || mag <= neighbor2 {
                continue;
            }

            out_row[x] = if mag >= high_thresh { STRONG } else { WEAK };
        }
    }

    labels
}

/// Promote weak pixels that connect to strong ones (8-connectivity BFS).
fn link_edges(labels: &[u8], w: usize, h: usize) -> ImageF32 {
    let mut edges = ImageF32::new(w, h);
    if w < 3 || h < 3 {
        return edges;
    }

    let mut visited = vec![false; w * h];
    let mut queue = VecDeque::new();
    for (i, &label) in labels.iter().enumerate() {
        if label == STRONG && !visited[i] {
            visited[i] = true;
            queue.push_back(i);
        }
        while let Some(idx) = queue.pop_front() {
            edges.data[idx] = 1.0;
            let x = idx % w;
            let y = idx / w;
            for ny in y.saturating_sub(1)..=(y + 1).min(h - 1) {
                for nx in x.saturating_sub(1)..=(x + 1).min(w - 1) {
                    let nidx = ny * w + nx;
                    if !visited[nidx] && labels[nidx] != NONE {
                        visited[nidx] = true;
                        queue.push_back(nidx);
                    }
                }
            }
        }
    }

    edges
}

#[cfg(test)]
mod tests {
    use super::*;

    fn step_image(width: usize, height: usize, split_x: usize) -> ImageF32 {
        let mut img = ImageF32::new(width, height);
        for y in 0..height {
            for x in split_x..width {
                img.set(x, y, 1.0);
            }
        }
        img
    }

    #[test]
    fn step_edge_survives_as_single_column() {
        let img = step_image(32, 32, 16);
        let result = canny(&img, 0.2, 0.6);
        // NMS thins the response to one column near the step.
        let row = result.edges.row(16);
        let count: usize = row.iter().filter(|&&v| v > 0.0).count();
        assert_eq!(count, 1, "expected a thin edge, got {count} pixels");
        assert!(row[15] > 0.0 || row[16] > 0.0);
    }

    #[test]
    fn flat_image_yields_no_edges() {
        let img = ImageF32::new(24, 24);
        let result = canny(&img, 0.2, 0.6);
        assert!(result.edges.data.iter().all(|&v| v == 0.0));
    }

    #[test]
    fn weak_pixels_need_a_strong_anchor() {
        // A faint step whose magnitude sits between low and high never
        // reaches the output.
        let mut img = ImageF32::new(32, 32);
        for y in 0..32 {
            for x in 16..32 {
                img.set(x, y, 0.1);
            }
        }
        let result = canny(&img, 0.2, 0.6);
        assert!(result.edges.data.iter().all(|&v| v == 0.0));
    }
}
