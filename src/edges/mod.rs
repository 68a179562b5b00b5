//! Edge processing: image gradients and Canny edge detection.
//!
//! This module provides the edge stage of the lane pipeline:
//!
//! - Gradient computation (Sobel) returning `gx`, `gy` and magnitude.
//! - Canny edge detection: direction-aligned non-maximum suppression on the
//!   gradient magnitude followed by double-threshold hysteresis, producing a
//!   binary edge map for the Hough stage.
//!
//! Design goals
//! - Favor clarity and cache-friendly row access over micro-optimizations.
//! - Handle borders by clamping indices (replicate).

pub mod canny;
pub mod grad;

pub use canny::{canny, CannyOptions, CannyResult};
pub use grad::{sobel_gradients, Grad};
