//! Per-frame detection report and stage timings.

use crate::types::{LaneLines, LineSegment};
use serde::Serialize;

/// Timing entry describing a single stage of the pipeline.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StageTiming {
    pub label: String,
    pub elapsed_ms: f64,
}

impl StageTiming {
    pub fn new(label: impl Into<String>, elapsed_ms: f64) -> Self {
        Self {
            label: label.into(),
            elapsed_ms,
        }
    }
}

/// Aggregated timing trace for one frame.
#[derive(Clone, Debug, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TimingBreakdown {
    pub total_ms: f64,
    pub stages: Vec<StageTiming>,
}

impl TimingBreakdown {
    pub fn push(&mut self, label: impl Into<String>, elapsed_ms: f64) {
        self.stages.push(StageTiming::new(label, elapsed_ms));
    }
}

/// Result of processing one frame.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LaneReport {
    /// Estimated lane lines; either side may be absent this frame.
    pub lanes: LaneLines,
    /// Raw Hough segments the estimate was built from.
    pub segments: Vec<LineSegment>,
    /// Convenience count of `segments`.
    pub segment_count: usize,
    /// Frame width in pixels.
    pub width: usize,
    /// Frame height in pixels.
    pub height: usize,
    /// End-to-end latency for this frame.
    pub latency_ms: f64,
    /// Per-stage wall-clock breakdown.
    pub timing: TimingBreakdown,
}
