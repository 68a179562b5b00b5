#![doc = include_str!("../README.md")]

// Public modules (stable-ish surface)
pub mod detector;
pub mod image;
pub mod lanes;
pub mod types;

// Stage-level modules – public so the CLI tools and tests can drive
// individual stages, but considered unstable internals.
pub mod blur;
pub mod config;
pub mod edges;
pub mod frames;
pub mod hough;
pub mod mask;
pub mod overlay;

// --- High-level re-exports -------------------------------------------------

// Main entry points: detector + results.
pub use crate::detector::{LaneDetector, LaneParams, LaneReport};
pub use crate::types::{LaneLines, LineSegment};

/// Small prelude for quick experiments.
///
/// ```no_run
/// use lane_detector::prelude::*;
///
/// # fn main() {
/// let (w, h) = (1280usize, 720usize);
/// let gray = vec![0u8; w * h];
/// let img = ImageU8 { w, h, stride: w, data: &gray };
///
/// let detector = LaneDetector::new(LaneParams::default());
/// let report = detector.process(img);
/// println!("segments={} latency_ms={:.3}", report.segment_count, report.latency_ms);
/// # }
/// ```
pub mod prelude {
    pub use crate::image::ImageU8;
    pub use crate::{LaneDetector, LaneLines, LaneParams, LaneReport, LineSegment};
}
