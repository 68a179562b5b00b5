//! Detector pipeline running the per-frame stages end to end.
//!
//! The [`LaneDetector`] exposes a simple API: feed a grayscale frame and get
//! the estimated lane pair with stage timings.
//!
//! Typical usage:
//! ```no_run
//! use lane_detector::image::ImageU8;
//! use lane_detector::{LaneDetector, LaneParams};
//!
//! # fn example(gray: ImageU8) {
//! let detector = LaneDetector::new(LaneParams::default());
//! let report = detector.process(gray);
//! if let Some(left) = report.lanes.left {
//!     println!("left lane: ({}, {}) -> ({}, {})", left.x1, left.y1, left.x2, left.y2);
//! }
//! # }
//! ```

use super::params::LaneParams;
use super::report::{LaneReport, TimingBreakdown};
use crate::blur::{gaussian_blur, GAUSSIAN_5TAP};
use crate::edges::canny;
use crate::hough::detect_line_segments;
use crate::image::ImageU8;
use crate::lanes::estimate_lane_lines;
use crate::mask::{apply_mask, fill_polygon};
use log::debug;
use std::time::Instant;

/// Lane detector orchestrating blur, Canny, ROI masking, Hough extraction
/// and lane averaging.
pub struct LaneDetector {
    params: LaneParams,
}

impl LaneDetector {
    /// Create a detector with the supplied parameters.
    pub fn new(params: LaneParams) -> Self {
        Self { params }
    }

    /// Run the full pipeline on one grayscale frame.
    pub fn process(&self, gray: ImageU8) -> LaneReport {
        let total_start = Instant::now();
        let mut timing = TimingBreakdown::default();

        let stage_start = Instant::now();
        let luma = gray.to_f32();
        timing.push("grayscale", elapsed_ms(stage_start));

        let stage_start = Instant::now();
        let blurred = gaussian_blur(&luma, GAUSSIAN_5TAP);
        timing.push("blur", elapsed_ms(stage_start));

        let canny_result = canny(
            &blurred,
            self.params.canny.low_threshold,
            self.params.canny.high_threshold,
        );
        timing.push("gradient", canny_result.gradient_ms);
        timing.push("nms", canny_result.nms_ms);
        timing.push("hysteresis", canny_result.hysteresis_ms);

        let stage_start = Instant::now();
        let roi = fill_polygon(gray.w, gray.h, &self.params.roi.triangle(gray.h));
        let cropped = apply_mask(&canny_result.edges, &roi);
        timing.push("roi_mask", elapsed_ms(stage_start));

        let stage_start = Instant::now();
        let segments = detect_line_segments(&cropped, &self.params.hough);
        timing.push("hough", elapsed_ms(stage_start));

        let stage_start = Instant::now();
        let lanes = estimate_lane_lines(gray.h as u32, &segments);
        timing.push("lanes", elapsed_ms(stage_start));

        timing.total_ms = elapsed_ms(total_start);
        debug!(
            "LaneDetector::process {} segments, left={} right={} in {:.3} ms",
            segments.len(),
            lanes.left.is_some(),
            lanes.right.is_some(),
            timing.total_ms
        );

        LaneReport {
            lanes,
            segment_count: segments.len(),
            segments,
            width: gray.w,
            height: gray.h,
            latency_ms: timing.total_ms,
            timing,
        }
    }

    /// Access the current parameters.
    pub fn params(&self) -> &LaneParams {
        &self.params
    }

    /// Replace the detector parameters.
    pub fn set_params(&mut self, params: LaneParams) {
        self.params = params;
    }
}

fn elapsed_ms(start: Instant) -> f64 {
    start.elapsed().as_secs_f64() * 1000.0
}
