//! Lane line estimation from raw Hough segments.
//!
//! Per frame, every detected segment is fitted with an exact two-point
//! slope/intercept, classified left (`slope < 0`) or right (`slope >= 0`),
//! and each group is averaged component-wise into one representative line.
//! The averaged line is then re-anchored to span from the bottom row of the
//! frame up to 3/5 of the frame height by solving `x = (y - intercept) /
//! slope` at both rows.
//!
//! The estimator is a pure per-frame transform: no temporal memory, no
//! shared state, and an empty input produces two absent lanes rather than
//! an error. Either side may also come back absent when the averaged slope
//! is exactly zero, since a horizontal lane line has no bottom-anchored
//! reconstruction.

use crate::types::{LaneLines, LineSegment};
use log::debug;
use serde::Serialize;
use thiserror::Error;

/// Slope/intercept of the line `y = slope * x + intercept`.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct LineFit {
    pub slope: f32,
    pub intercept: f32,
}

/// Failure modes of the two-point fit.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum FitError {
    /// Both endpoints share an x coordinate, so the slope is undefined.
    #[error("vertical segment has undefined slope")]
    VerticalSegment,
}

/// Fit the line through a segment's two endpoints.
///
/// The fit is exact (two points determine the line); vertical segments are
/// rejected rather than producing an infinite slope.
pub fn fit_line_parameters(segment: &LineSegment) -> Result<LineFit, FitError> {
    if segment.is_vertical() {
        return Err(FitError::VerticalSegment);
    }
    let slope = (segment.y2 - segment.y1) as f32 / (segment.x2 - segment.x1) as f32;
    let intercept = segment.y1 as f32 - slope * segment.x1 as f32;
    Ok(LineFit { slope, intercept })
}

/// Partition segments into left (`slope < 0`) and right (`slope >= 0`)
/// fit groups. Vertical segments carry no usable slope and are dropped
/// before averaging.
pub fn classify_and_collect(segments: &[LineSegment]) -> (Vec<LineFit>, Vec<LineFit>) {
    let mut left = Vec::new();
    let mut right = Vec::new();
    for segment in segments {
        match fit_line_parameters(segment) {
            Ok(fit) if fit.slope < 0.0 => left.push(fit),
            Ok(fit) => right.push(fit),
            Err(FitError::VerticalSegment) => {
                debug!(
                    "lanes: dropping vertical segment ({}, {}) -> ({}, {})",
                    segment.x1, segment.y1, segment.x2, segment.y2
                );
            }
        }
    }
    (left, right)
}

/// Component-wise arithmetic mean of a fit group, `None` when empty.
///
/// Accumulation happens in f64 so permuting the input only moves the result
/// within floating-point tolerance.
pub fn average_group(group: &[LineFit]) -> Option<LineFit> {
    if group.is_empty() {
        return None;
    }
    let n = group.len() as f64;
    let mut slope_sum = 0.0f64;
    let mut intercept_sum = 0.0f64;
    for fit in group {
        slope_sum += fit.slope as f64;
        intercept_sum += fit.intercept as f64;
    }
    Some(LineFit {
        slope: (slope_sum / n) as f32,
        intercept: (intercept_sum / n) as f32,
    })
}

/// Re-anchor an averaged fit to a full-length lane line.
///
/// `y1` sits on the bottom row of the frame and `y2` at 3/5 of the frame
/// height; the x coordinates solve `x = (y - intercept) / slope`. A slope of
/// exactly zero has no such solution and yields `None` for that side — the
/// caller treats it like any other absent lane.
pub fn reconstruct_segment(frame_height: u32, fit: &LineFit) -> Option<LineSegment> {
    if fit.slope == 0.0 {
        debug!("lanes: averaged slope is zero, dropping side");
        return None;
    }
    let y1 = frame_height as f32;
    let y2 = (frame_height * 3 / 5) as f32;
    let x1 = (y1 - fit.intercept) / fit.slope;
    let x2 = (y2 - fit.intercept) / fit.slope;
    Some(LineSegment::new(
        x1.round() as i32,
        y1 as i32,
        x2.round() as i32,
        y2 as i32,
    ))
}

/// Estimate one left and one right lane line for a frame.
///
/// Composes fit, classification, averaging and reconstruction. Stateless
/// and deterministic for a given segment list; an empty list yields
/// `LaneLines::default()`.
pub fn estimate_lane_lines(frame_height: u32, segments: &[LineSegment]) -> LaneLines {
    let (left_group, right_group) = classify_and_collect(segments);
    debug!(
        "lanes: {} segments -> {} left / {} right candidates",
        segments.len(),
        left_group.len(),
        right_group.len()
    );
    let left = average_group(&left_group).and_then(|fit| reconstruct_segment(frame_height, &fit));
    let right = average_group(&right_group).and_then(|fit| reconstruct_segment(frame_height, &fit));
    LaneLines { left, right }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn two_point_fit_is_exact() {
        let fit = fit_line_parameters(&LineSegment::new(100, 500, 300, 300)).unwrap();
        assert!((fit.slope - (-1.0)).abs() < 1e-6);
        assert!((fit.intercept - 600.0).abs() < 1e-4);
    }

    #[test]
    fn vertical_segment_is_rejected() {
        let err = fit_line_parameters(&LineSegment::new(50, 0, 50, 100)).unwrap_err();
        assert_eq!(err, FitError::VerticalSegment);
    }

    #[test]
    fn vertical_segments_never_reach_averaging() {
        let segments = [
            LineSegment::new(50, 0, 50, 100),
            LineSegment::new(100, 500, 300, 300),
        ];
        let (left, right) = classify_and_collect(&segments);
        assert_eq!(left.len(), 1);
        assert!(right.is_empty());
    }

    #[test]
    fn empty_input_yields_absent_lanes() {
        let lanes = estimate_lane_lines(720, &[]);
        assert_eq!(lanes, LaneLines::default());
        assert!(lanes.is_empty());
    }

    #[test]
    fn single_segment_round_trips_through_fit_and_reconstruct() {
        // The known segment (100, 500) -> (300, 300) in a 500-row frame:
        // reconstruction at y1=500, y2=300 must give back x1=100, x2=300.
        let lanes = estimate_lane_lines(500, &[LineSegment::new(100, 500, 300, 300)]);
        assert_eq!(lanes.left, Some(LineSegment::new(100, 500, 300, 300)));
        assert!(lanes.right.is_none());
    }

    #[test]
    fn averaging_is_order_independent() {
        let segments = [
            LineSegment::new(100, 500, 300, 300),
            LineSegment::new(120, 520, 280, 330),
            LineSegment::new(90, 480, 310, 290),
        ];
        let mut permuted = segments;
        permuted.swap(0, 2);
        let (a, _) = classify_and_collect(&segments);
        let (b, _) = classify_and_collect(&permuted);
        let fit_a = average_group(&a).unwrap();
        let fit_b = average_group(&b).unwrap();
        assert!((fit_a.slope - fit_b.slope).abs() < 1e-5);
        assert!((fit_a.intercept - fit_b.intercept).abs() < 1e-3);
    }

    #[test]
    fn all_left_input_leaves_right_absent() {
        let segments = [
            LineSegment::new(100, 500, 300, 300),
            LineSegment::new(150, 550, 350, 350),
        ];
        let lanes = estimate_lane_lines(720, &segments);
        assert!(lanes.left.is_some());
        assert!(lanes.right.is_none());
    }

    #[test]
    fn all_right_input_leaves_left_absent() {
        let segments = [
            LineSegment::new(700, 300, 900, 500),
            LineSegment::new(750, 350, 950, 550),
        ];
        let lanes = estimate_lane_lines(720, &segments);
        assert!(lanes.left.is_none());
        assert!(lanes.right.is_some());
    }

    #[test]
    fn mixed_input_anchors_both_lanes_to_frame_rows() {
        let frame_height = 720u32;
        let segments = [
            LineSegment::new(100, 600, 400, 400),
            LineSegment::new(800, 400, 1100, 600),
        ];
        let lanes = estimate_lane_lines(frame_height, &segments);
        for lane in [lanes.left.unwrap(), lanes.right.unwrap()] {
            assert_eq!(lane.y1, frame_height as i32);
            assert_eq!(lane.y2, (frame_height * 3 / 5) as i32);
        }
    }

    #[test]
    fn zero_averaged_slope_yields_absent_side() {
        // A perfectly horizontal detection averages to slope 0; the side
        // must come back absent instead of dividing by zero.
        let lanes = estimate_lane_lines(720, &[LineSegment::new(100, 400, 500, 400)]);
        assert!(lanes.left.is_none());
        assert!(lanes.right.is_none());
    }

    #[test]
    fn zero_slope_reconstruction_is_absent() {
        let fit = LineFit {
            slope: 0.0,
            intercept: 400.0,
        };
        assert_eq!(reconstruct_segment(720, &fit), None);
    }

    #[test]
    fn average_of_empty_group_is_absent() {
        assert_eq!(average_group(&[]), None);
    }
}
