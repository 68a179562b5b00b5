//! Lane rendering and frame compositing.
//!
//! Lanes are drawn on a black canvas with a thick Bresenham stroke, then the
//! canvas is blended onto the original frame with a saturating weighted sum.
//! With the default weights (`0.8 / 1.0 / 1.0`) this reproduces the familiar
//! "dimmed frame with bright lane lines" look.

use crate::types::{LaneLines, LineSegment};
use image::{Rgb, RgbImage};

/// Stroke color used for lane lines (blue).
pub const LANE_COLOR: Rgb<u8> = Rgb([0, 0, 255]);

/// Stroke thickness in pixels for lane lines.
pub const LANE_THICKNESS: i32 = 10;

/// Draw a thick line segment onto `canvas`, clipping to the frame.
///
/// The stroke is a Bresenham walk stamping a filled disc of radius
/// `thickness / 2` at every step; endpoints get round caps for free.
pub fn draw_segment(canvas: &mut RgbImage, segment: &LineSegment, color: Rgb<u8>, thickness: i32) {
    let radius = (thickness.max(1) / 2).max(1);
    let mut x = segment.x1;
    let mut y = segment.y1;
    let dx = (segment.x2 - segment.x1).abs();
    let dy = -(segment.y2 - segment.y1).abs();
    let sx = if segment.x1 < segment.x2 { 1 } else { -1 };
    let sy = if segment.y1 < segment.y2 { 1 } else { -1 };
    let mut err = dx + dy;

    loop {
        stamp_disc(canvas, x, y, radius, color);
        if x == segment.x2 && y == segment.y2 {
            break;
        }
        let e2 = 2 * err;
        if e2 >= dy {
            err += dy;
            x += sx;
        }
        if e2 <= dx {
            err += dx;
            y += sy;
        }
    }
}

fn stamp_disc(canvas: &mut RgbImage, cx: i32, cy: i32, radius: i32, color: Rgb<u8>) {
    let w = canvas.width() as i32;
    let h = canvas.height() as i32;
    for oy in -radius..=radius {
        for ox in -radius..=radius {
            if ox * ox + oy * oy > radius * radius {
                continue;
            }
            let px = cx + ox;
            let py = cy + oy;
            if px >= 0 && py >= 0 && px < w && py < h {
                canvas.put_pixel(px as u32, py as u32, color);
            }
        }
    }
}

/// Render the estimated lanes on a black canvas of the frame's size.
///
/// Absent lanes are simply skipped, so a frame with no detections renders
/// as an all-black overlay.
pub fn render_lanes(lanes: &LaneLines, width: u32, height: u32) -> RgbImage {
    let mut canvas = RgbImage::new(width, height);
    for lane in [lanes.left, lanes.right].into_iter().flatten() {
        draw_segment(&mut canvas, &lane, LANE_COLOR, LANE_THICKNESS);
    }
    canvas
}

/// Saturating per-channel weighted blend: `alpha·a + beta·b + gamma`.
pub fn blend_weighted(
    frame: &RgbImage,
    overlay: &RgbImage,
    alpha: f32,
    beta: f32,
    gamma: f32,
) -> RgbImage {
    assert_eq!(frame.dimensions(), overlay.dimensions(), "frame size mismatch");
    let mut out = RgbImage::new(frame.width(), frame.height());
    for (dst, (a, b)) in out
        .pixels_mut()
        .zip(frame.pixels().zip(overlay.pixels()))
    {
        for c in 0..3 {
            let v = alpha * a.0[c] as f32 + beta * b.0[c] as f32 + gamma;
            dst.0[c] = v.round().clamp(0.0, 255.0) as u8;
        }
    }
    out
}

/// Annotate a frame with its estimated lanes using the default weights.
pub fn annotate_frame(frame: &RgbImage, lanes: &LaneLines) -> RgbImage {
    let overlay = render_lanes(lanes, frame.width(), frame.height());
    blend_weighted(frame, &overlay, 0.8, 1.0, 1.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn absent_lanes_render_black() {
        let canvas = render_lanes(&LaneLines::default(), 32, 32);
        assert!(canvas.pixels().all(|p| p.0 == [0, 0, 0]));
    }

    #[test]
    fn drawn_lane_touches_both_endpoints() {
        let lanes = LaneLines {
            left: Some(LineSegment::new(4, 28, 28, 4)),
            right: None,
        };
        let canvas = render_lanes(&lanes, 32, 32);
        assert_eq!(*canvas.get_pixel(4, 28), LANE_COLOR);
        assert_eq!(*canvas.get_pixel(28, 4), LANE_COLOR);
        assert_eq!(*canvas.get_pixel(0, 0), Rgb([0, 0, 0]));
    }

    #[test]
    fn segments_off_frame_are_clipped() {
        let lanes = LaneLines {
            left: Some(LineSegment::new(-20, -20, 40, 40)),
            right: None,
        };
        // Must not panic; pixels inside the frame are painted.
        let canvas = render_lanes(&lanes, 32, 32);
        assert_eq!(*canvas.get_pixel(16, 16), LANE_COLOR);
    }

    #[test]
    fn blend_dims_frame_and_keeps_overlay() {
        let mut frame = RgbImage::new(8, 8);
        for p in frame.pixels_mut() {
            p.0 = [100, 100, 100];
        }
        let mut overlay = RgbImage::new(8, 8);
        overlay.put_pixel(3, 3, Rgb([0, 0, 255]));

        let out = blend_weighted(&frame, &overlay, 0.8, 1.0, 1.0);
        assert_eq!(*out.get_pixel(0, 0), Rgb([81, 81, 81]));
        assert_eq!(*out.get_pixel(3, 3), Rgb([81, 81, 255]));
    }
}
