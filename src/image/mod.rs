//! Single-channel image buffers used by the pipeline.
//!
//! - [`ImageF32`]: owned float buffer for numeric stages (blur, gradients,
//!   edge maps). Values are kept in `[0, 1]` by convention.
//! - [`ImageU8`]: borrowed 8-bit view over caller-provided grayscale bytes.
//! - [`GrayImageU8`]: owned 8-bit buffer returned by the I/O helpers.
//!
//! Row access goes through the [`ImageView`]/[`ImageViewMut`] traits so that
//! stage code is generic over the pixel type and never indexes past a row.

pub mod io;

pub use io::GrayImageU8;

/// Read-only row access over a rectangular pixel buffer.
pub trait ImageView {
    type Pixel: Copy;

    fn width(&self) -> usize;
    fn height(&self) -> usize;

    fn row(&self, y: usize) -> &[Self::Pixel];
}

/// Mutable row access for in-place stages.
pub trait ImageViewMut: ImageView {
    fn row_mut(&mut self, y: usize) -> &mut [Self::Pixel];
}

/// Owned single-channel f32 image in row-major layout (stride == width).
#[derive(Clone, Debug)]
pub struct ImageF32 {
    /// Image width in pixels
    pub w: usize,
    /// Image height in pixels
    pub h: usize,
    /// Backing storage in row-major order, `w * h` elements
    pub data: Vec<f32>,
}

impl ImageF32 {
    /// Construct a zero-initialized buffer of size `w × h`.
    pub fn new(w: usize, h: usize) -> Self {
        Self {
            w,
            h,
            data: vec![0.0; w * h],
        }
    }

    #[inline]
    pub fn idx(&self, x: usize, y: usize) -> usize {
        y * self.w + x
    }

    #[inline]
    pub fn get(&self, x: usize, y: usize) -> f32 {
        self.data[self.idx(x, y)]
    }

    #[inline]
    pub fn set(&mut self, x: usize, y: usize, v: f32) {
        let i = self.idx(x, y);
        self.data[i] = v;
    }
}

impl ImageView for ImageF32 {
    type Pixel = f32;

    #[inline]
    fn width(&self) -> usize {
        self.w
    }
    #[inline]
    fn height(&self) -> usize {
        self.h
    }
    #[inline]
    fn row(&self, y: usize) -> &[f32] {
        let start = y * self.w;
        &self.data[start..start + self.w]
    }
}

impl ImageViewMut for ImageF32 {
    #[inline]
    fn row_mut(&mut self, y: usize) -> &mut [f32] {
        let start = y * self.w;
        let end = start + self.w;
        &mut self.data[start..end]
    }
}

/// Borrowed 8-bit grayscale view. `stride` is in bytes and may exceed `w`
/// for callers handing over padded camera buffers.
#[derive(Clone, Copy, Debug)]
pub struct ImageU8<'a> {
    pub w: usize,
    pub h: usize,
    pub stride: usize,
    pub data: &'a [u8],
}

impl<'a> ImageU8<'a> {
    #[inline]
    pub fn get(&self, x: usize, y: usize) -> u8 {
        self.data[y * self.stride + x]
    }

    /// Convert to an owned float image with values scaled to `[0, 1]`.
    pub fn to_f32(&self) -> ImageF32 {
        let mut out = ImageF32::new(self.w, self.h);
        for y in 0..self.h {
            let src = self.row(y);
            let dst = out.row_mut(y);
            for x in 0..self.w {
                dst[x] = src[x] as f32 / 255.0;
            }
        }
        out
    }
}

impl<'a> ImageView for ImageU8<'a> {
    type Pixel = u8;

    #[inline]
    fn width(&self) -> usize {
        self.w
    }
    #[inline]
    fn height(&self) -> usize {
        self.h
    }
    #[inline]
    fn row(&self, y: usize) -> &[u8] {
        let start = y * self.stride;
        &self.data[start..start + self.w]
    }
}
