//! Separable Gaussian smoothing applied before edge detection.
//!
//! Uses the normalised 5-tap kernel `[1, 4, 6, 4, 1] / 16` in a horizontal
//! then vertical pass, matching a 5×5 Gaussian blur. Borders are handled by
//! clamping sample indices (replicate).

use crate::image::{ImageF32, ImageView, ImageViewMut};

/// Trait implemented by separable 1D filters used for smoothing.
pub trait SeparableFilter {
    /// Return the 1D taps (in left-to-right order). The kernel is assumed to
    /// be normalised; the implementation does not rescale.
    fn taps(&self) -> &[f32];
}

/// Simple wrapper around a static filter kernel.
#[derive(Clone, Copy, Debug)]
pub struct StaticSeparableFilter {
    taps: &'static [f32],
}

impl Default for StaticSeparableFilter {
    fn default() -> Self {
        GAUSSIAN_5TAP
    }
}

impl StaticSeparableFilter {
    pub const fn new(taps: &'static [f32]) -> Self {
        Self { taps }
    }
}

impl SeparableFilter for StaticSeparableFilter {
    #[inline]
    fn taps(&self) -> &[f32] {
        self.taps
    }
}

/// Normalised 5-tap Gaussian filter `[1, 4, 6, 4, 1] / 16`.
pub const GAUSSIAN_5TAP: StaticSeparableFilter =
    StaticSeparableFilter::new(&[0.0625, 0.25, 0.375, 0.25, 0.0625]);

/// Blur `src` with the given separable filter, returning a new image.
pub fn gaussian_blur(src: &ImageF32, filter: impl SeparableFilter) -> ImageF32 {
    let taps = filter.taps();
    assert!(!taps.is_empty(), "filter must provide at least one tap");
    let radius = (taps.len() / 2) as isize;
    let w = src.w;
    let h = src.h;
    let mut horiz = ImageF32::new(w, h);
    let mut out = ImageF32::new(w, h);
    if w == 0 || h == 0 {
        return out;
    }

    // Horizontal pass
    for y in 0..h {
        let src_row = src.row(y);
        let dst_row = horiz.row_mut(y);
        for x in 0..w {
            let mut acc = 0.0f32;
            for (k, &tap) in taps.iter().enumerate() {
                let sx = (x as isize + k as isize - radius).clamp(0, w as isize - 1) as usize;
                acc += src_row[sx] * tap;
            }
            dst_row[x] = acc;
        }
    }

    // Vertical pass
    for y in 0..h {
        let dst_row = out.row_mut(y);
        for (k, &tap) in taps.iter().enumerate() {
            let sy = (y as isize + k as isize - radius).clamp(0, h as isize - 1) as usize;
            let src_row = horiz.row(sy);
            for x in 0..w {
                dst_row[x] += src_row[x] * tap;
            }
        }
    }

    out
}
