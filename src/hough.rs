//! Probabilistic Hough transform extracting line segments from an edge map.
//!
//! Progressive probabilistic Hough in the style of `HoughLinesP`: edge
//! pixels vote into a quantized `(rho, theta)` accumulator one at a time;
//! as soon as a pixel pushes its best bin past the vote threshold, the
//! corresponding line is traced through the edge map in both directions,
//! tolerating gaps up to `max_line_gap`. Pixels swallowed by an accepted
//! segment are removed and their earlier votes retracted so they cannot
//! seed further lines.
//!
//! Unlike the classic formulation there is no random sampling: edge pixels
//! are consumed in scan order, which keeps the output reproducible for a
//! given frame.
//!
//! The parameterization is `rho = x·cos(theta) + y·sin(theta)` with
//! `theta ∈ [0, π)`; the direction along the line is `(-sin, cos)`.

use crate::image::{ImageF32, ImageView};
use crate::types::LineSegment;
use log::debug;
use serde::{Deserialize, Serialize};

/// Knobs for the probabilistic Hough stage.
///
/// Defaults mirror the classic dashboard-camera tuning: 2 px rho bins,
/// 1° theta bins, 100 votes, 40 px minimum length, 5 px gap tolerance.
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct HoughOptions {
    /// Accumulator distance resolution in pixels.
    pub rho_resolution: f32,
    /// Accumulator angle resolution in radians.
    pub theta_resolution: f32,
    /// Minimum accumulator votes before a line is traced.
    pub votes_threshold: u32,
    /// Minimum accepted segment length in pixels.
    pub min_line_length: f32,
    /// Maximum run of non-edge pixels bridged while tracing.
    pub max_line_gap: f32,
}

impl Default for HoughOptions {
    fn default() -> Self {
        Self {
            rho_resolution: 2.0,
            theta_resolution: std::f32::consts::PI / 180.0,
            votes_threshold: 100,
            min_line_length: 40.0,
            max_line_gap: 5.0,
        }
    }
}

struct Accumulator {
    votes: Vec<i32>,
    num_angles: usize,
    num_rho: usize,
    rho_offset: f32,
    inv_rho: f32,
    cos_table: Vec<f32>,
    sin_table: Vec<f32>,
}

impl Accumulator {
    fn new(w: usize, h: usize, opts: &HoughOptions) -> Self {
        let num_angles = (std::f32::consts::PI / opts.theta_resolution).round().max(1.0) as usize;
        let diag = ((w * w + h * h) as f32).sqrt();
        let inv_rho = 1.0 / opts.rho_resolution;
        let num_rho = (2.0 * diag * inv_rho).ceil() as usize + 1;
        let mut cos_table = Vec::with_capacity(num_angles);
        let mut sin_table = Vec::with_capacity(num_angles);
        for a in 0..num_angles {
            let theta = a as f32 * opts.theta_resolution;
            cos_table.push(theta.cos());
            sin_table.push(theta.sin());
        }
        Self {
            votes: vec![0; num_angles * num_rho],
            num_angles,
            num_rho,
            rho_offset: diag,
            inv_rho,
            cos_table,
            sin_table,
        }
    }

    #[inline]
    fn bin(&self, angle: usize, x: f32, y: f32) -> usize {
        let rho = x * self.cos_table[angle] + y * self.sin_table[angle];
        let r = ((rho + self.rho_offset) * self.inv_rho).round() as usize;
        angle * self.num_rho + r.min(self.num_rho - 1)
    }

    /// Vote for all angles and return `(best_votes, best_angle)`.
    fn vote(&mut self, x: f32, y: f32) -> (i32, usize) {
        let mut best_votes = 0;
        let mut best_angle = 0;
        for a in 0..self.num_angles {
            let idx = self.bin(a, x, y);
            self.votes[idx] += 1;
            if self.votes[idx] > best_votes {
                best_votes = self.votes[idx];
                best_angle = a;
            }
        }
        (best_votes, best_angle)
    }

    fn unvote(&mut self, x: f32, y: f32) {
        for a in 0..self.num_angles {
            let idx = self.bin(a, x, y);
            self.votes[idx] -= 1;
        }
    }
}

/// Extract line segments from a binary edge map.
///
/// Returns an empty vector when no candidate reaches the vote threshold;
/// callers must treat that as "no segments this frame", not as an error.
pub fn detect_line_segments(edges: &ImageF32, opts: &HoughOptions) -> Vec<LineSegment> {
    let w = edges.w;
    let h = edges.h;
    if w == 0 || h == 0 {
        return Vec::new();
    }

    let mut points = Vec::new();
    let mut available = vec![false; w * h];
    for y in 0..h {
        let row = edges.row(y);
        for x in 0..w {
            if row[x] > 0.0 {
                points.push((x, y));
                available[y * w + x] = true;
            }
        }
    }
    if points.is_empty() {
        return Vec::new();
    }

    let mut accum = Accumulator::new(w, h, opts);
    let mut voted = vec![false; w * h];
    let mut segments = Vec::new();

    for &(px, py) in &points {
        if !available[py * w + px] {
            continue;
        }

        let (best_votes, best_angle) = accum.vote(px as f32, py as f32);
        voted[py * w + px] = true;
        if best_votes < opts.votes_threshold as i32 {
            continue;
        }

        // Direction along the candidate line, scaled so the dominant axis
        // steps one pixel at a time.
        let dir_x = -accum.sin_table[best_angle];
        let dir_y = accum.cos_table[best_angle];
        let (step_x, step_y) = if dir_x.abs() >= dir_y.abs() {
            (dir_x.signum(), dir_y / dir_x.abs())
        } else {
            (dir_x / dir_y.abs(), dir_y.signum())
        };

        let forward = trace_run(edges, &available, (px, py), (step_x, step_y), opts.max_line_gap);
        let backward = trace_run(
            edges,
            &available,
            (px, py),
            (-step_x, -step_y),
            opts.max_line_gap,
        );

        let (x1, y1) = backward;
        let (x2, y2) = forward;
        let dx = x2 as f32 - x1 as f32;
        let dy = y2 as f32 - y1 as f32;
        let length = (dx * dx + dy * dy).sqrt();
        let good_line = length >= opts.min_line_length;

        // Release every edge pixel covered by the run so it cannot seed
        // another line; retract votes for pixels that already voted.
        consume_run(
            edges,
            &mut available,
            &mut voted,
            &mut accum,
            (px, py),
            (step_x, step_y),
            forward,
            good_line,
        );
        consume_run(
            edges,
            &mut available,
            &mut voted,
            &mut accum,
            (px, py),
            (-step_x, -step_y),
            backward,
            good_line,
        );

        if good_line {
            segments.push(LineSegment::new(x1 as i32, y1 as i32, x2 as i32, y2 as i32));
        }
    }

    debug!(
        "hough: {} edge points -> {} segments",
        points.len(),
        segments.len()
    );

    segments
}

/// Walk from `start` along `step`, bridging gaps up to `max_gap`, and return
/// the last edge pixel reached.
fn trace_run(
    edges: &ImageF32,
    available: &[bool],
    start: (usize, usize),
    step: (f32, f32),
    max_gap: f32,
) -> (usize, usize) {
    let w = edges.w;
    let h = edges.h;
    let mut fx = start.0 as f32;
    let mut fy = start.1 as f32;
    let mut last = start;
    let mut gap = 0.0f32;
    loop {
        fx += step.0;
        fy += step.1;
        let xi = fx.round();
        let yi = fy.round();
        if xi < 0.0 || yi < 0.0 || xi >= w as f32 || yi >= h as f32 {
            break;
        }
        let (x, y) = (xi as usize, yi as usize);
        if available[y * w + x] {
            last = (x, y);
            gap = 0.0;
        } else {
            gap += 1.0;
            if gap > max_gap {
                break;
            }
        }
    }
    last
}

/// Clear the pixels of a traced run between `start` and `end` (inclusive).
#[allow(clippy::too_many_arguments)]
fn consume_run(
    edges: &ImageF32,
    available: &mut [bool],
    voted: &mut [bool],
    accum: &mut Accumulator,
    start: (usize, usize),
    step: (f32, f32),
    end: (usize, usize),
    unvote: bool,
) {
    let w = edges.w;
    let mut fx = start.0 as f32;
    let mut fy = start.1 as f32;
    let mut pos = start;
    loop {
        let idx = pos.1 * w + pos.0;
        if available[idx] {
            available[idx] = false;
            if unvote && voted[idx] {
                accum.unvote(pos.0 as f32, pos.1 as f32);
                voted[idx] = false;
            }
        }
        if pos == end {
            break;
        }
        fx += step.0;
        fy += step.1;
        let next = (fx.round() as usize, fy.round() as usize);
        if next == pos {
            break;
        }
        pos = next;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn edge_map_with_line(
        w: usize,
        h: usize,
        from: (i32, i32),
        to: (i32, i32),
    ) -> ImageF32 {
        let mut img = ImageF32::new(w, h);
        let steps = (to.0 - from.0).abs().max((to.1 - from.1).abs());
        for i in 0..=steps {
            let t = i as f32 / steps.max(1) as f32;
            let x = (from.0 as f32 + t * (to.0 - from.0) as f32).round() as i32;
            let y = (from.1 as f32 + t * (to.1 - from.1) as f32).round() as i32;
            if x >= 0 && y >= 0 && (x as usize) < w && (y as usize) < h {
                img.set(x as usize, y as usize, 1.0);
            }
        }
        img
    }

    fn permissive_options() -> HoughOptions {
        HoughOptions {
            rho_resolution: 1.0,
            votes_threshold: 30,
            min_line_length: 30.0,
            ..Default::default()
        }
    }

    #[test]
    fn empty_edge_map_yields_no_segments() {
        let img = ImageF32::new(64, 64);
        let segments = detect_line_segments(&img, &HoughOptions::default());
        assert!(segments.is_empty());
    }

    #[test]
    fn single_straight_line_is_recovered() {
        let img = edge_map_with_line(128, 128, (10, 100), (90, 20));
        let segments = detect_line_segments(&img, &permissive_options());
        assert_eq!(segments.len(), 1, "expected one segment, got {segments:?}");
        let seg = segments[0];
        assert!(
            seg.length() >= 80.0,
            "expected most of the stroke recovered, got {:.1}",
            seg.length()
        );
    }

    #[test]
    fn short_strokes_are_rejected() {
        let img = edge_map_with_line(128, 128, (10, 10), (25, 25));
        let mut opts = permissive_options();
        opts.min_line_length = 40.0;
        opts.votes_threshold = 10;
        let segments = detect_line_segments(&img, &opts);
        assert!(segments.is_empty(), "got {segments:?}");
    }

    #[test]
    fn gap_tolerance_bridges_dashed_lines() {
        // Vertical dashed stroke with 3 px gaps.
        let mut img = ImageF32::new(64, 64);
        for y in 4..60 {
            if y % 8 < 5 {
                img.set(32, y, 1.0);
            }
        }
        let opts = HoughOptions {
            rho_resolution: 1.0,
            votes_threshold: 20,
            min_line_length: 30.0,
            max_line_gap: 4.0,
            ..Default::default()
        };
        let segments = detect_line_segments(&img, &opts);
        assert_eq!(segments.len(), 1, "expected one bridged segment, got {segments:?}");
        assert!(segments[0].length() >= 40.0);
    }

    #[test]
    fn consumed_pixels_do_not_seed_second_line() {
        let img = edge_map_with_line(128, 128, (20, 20), (20, 110));
        let segments = detect_line_segments(&img, &permissive_options());
        assert_eq!(segments.len(), 1, "line should be consumed once: {segments:?}");
    }
}
