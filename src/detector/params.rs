//! Parameter types configuring the detector stages.
//!
//! This module groups knobs for Canny edge detection, the region-of-interest
//! triangle, and the probabilistic Hough extraction.
//!
//! Defaults carry the classic dashboard-camera tuning (Canny 50/150, Hough
//! votes 100 / min length 40 / max gap 5, ROI triangle for 1280×720). For
//! tuning, start with the Hough vote threshold and the ROI corners.

use crate::edges::CannyOptions;
use crate::hough::HoughOptions;
use crate::mask::RoiOptions;
use serde::Deserialize;

/// Detector-wide parameters controlling the per-frame pipeline.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default)]
pub struct LaneParams {
    /// Canny hysteresis thresholds.
    pub canny: CannyOptions,
    /// Region-of-interest triangle masking the edge map.
    pub roi: RoiOptions,
    /// Probabilistic Hough segment extraction.
    pub hough: HoughOptions,
}
