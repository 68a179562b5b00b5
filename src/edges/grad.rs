//! Image gradients (Sobel) with magnitude.
//!
//! - Convolves the 3×3 Sobel kernel pair (`X` and `Y`) with border clamping.
//! - Outputs per-pixel `gx`, `gy`, `mag = sqrt(gx^2 + gy^2)`.
//! - Rows are independent, so the convolution is parallelised row-wise.
//!
//! Complexity: O(W·H) per pass; memory: three float buffers.
use crate::image::{ImageF32, ImageView};
use rayon::prelude::*;

type Kernel3 = [[f32; 3]; 3];

const SOBEL_KERNEL_X: Kernel3 = [[-1.0, 0.0, 1.0], [-2.0, 0.0, 2.0], [-1.0, 0.0, 1.0]];
const SOBEL_KERNEL_Y: Kernel3 = [[-1.0, -2.0, -1.0], [0.0, 0.0, 0.0], [1.0, 2.0, 1.0]];

/// Per-pixel gradient buffers.
#[derive(Clone, Debug)]
pub struct Grad {
    /// Horizontal derivative (convolution with kernel X)
    pub gx: ImageF32,
    /// Vertical derivative (convolution with kernel Y)
    pub gy: ImageF32,
    /// Euclidean magnitude per pixel: `sqrt(gx^2 + gy^2)`
    pub mag: ImageF32,
}

/// Compute Sobel gradients of a float image.
pub fn sobel_gradients(l: &ImageF32) -> Grad {
    let w = l.w;
    let h = l.h;
    let mut gx = ImageF32::new(w, h);
    let mut gy = ImageF32::new(w, h);
    let mut mag = ImageF32::new(w, h);

    if w == 0 || h == 0 {
        return Grad { gx, gy, mag };
    }

    gx.data
        .par_chunks_mut(w)
        .zip(gy.data.par_chunks_mut(w))
        .zip(mag.data.par_chunks_mut(w))
        .enumerate()
        .for_each(|(y, ((out_gx, out_gy), out_mag))| {
            let y_idx = [y.saturating_sub(1), y, (y + 1).min(h - 1)];
            let rows = [l.row(y_idx[0]), l.row(y_idx[1]), l.row(y_idx[2])];
            for x in 0..w {
                let x_idx = [x.saturating_sub(1), x, (x + 1).min(w - 1)];

                let mut sum_x = 0.0;
                let mut sum_y = 0.0;
                for (ky, src_row) in rows.iter().enumerate() {
                    let kx_row = &SOBEL_KERNEL_X[ky];
                    let ky_row = &SOBEL_KERNEL_Y[ky];
                    sum_x += src_row[x_idx[0]] * kx_row[0]
                        + src_row[x_idx[1]] * kx_row[1]
                        + src_row[x_idx[2]] * kx_row[2];
                    sum_y += src_row[x_idx[0]] * ky_row[0]
                        + src_row[x_idx[1]] * ky_row[1]
                        + src_row[x_idx[2]] * ky_row[2];
                }

                out_gx[x] = sum_x;
                out_gy[x] = sum_y;
                out_mag[x] = (sum_x * sum_x + sum_y * sum_y).sqrt();
            }
        });

    Grad { gx, gy, mag }
}
