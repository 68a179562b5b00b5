//! Lane detector orchestrating the per-frame pipeline.
//!
//! Overview
//! - Converts the 8-bit frame to a float grayscale buffer.
//! - Smooths with a 5×5 separable Gaussian to suppress sensor noise.
//! - Runs Canny edge detection (Sobel gradients, direction-aligned NMS,
//!   hysteresis) and intersects the edge map with a triangular region of
//!   interest.
//! - Extracts line segments with a deterministic probabilistic Hough
//!   transform and reduces them to one left and one right lane line by
//!   slope-sign classification and slope/intercept averaging.
//!
//! Modules
//! - [`params`] – configuration types used by the detector and CLI tools.
//! - `pipeline` – the main [`LaneDetector`] implementation.
//! - [`report`] – per-frame result with stage timings.
//!
//! Every call is independent: the detector keeps no state between frames,
//! so a single instance may serve concurrent frame-processing calls.

pub mod params;
mod pipeline;
pub mod report;

pub use params::LaneParams;
pub use pipeline::LaneDetector;
pub use report::{LaneReport, StageTiming, TimingBreakdown};
