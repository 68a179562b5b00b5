/// Generates a synthetic dashboard-camera frame: dark asphalt with two
/// bright lane stripes converging toward the horizon.
pub fn road_frame_u8(width: usize, height: usize) -> Vec<u8> {
    assert!(width > 0 && height > 0, "image dimensions must be positive");

    let mut img = vec![30u8; width * height];
    // Left stripe rises right-to-left, right stripe mirrors it.
    draw_stripe(&mut img, width, height, (300, 720), (550, 350), 4);
    draw_stripe(&mut img, width, height, (1000, 720), (640, 350), 4);
    img
}

/// Stamp a thick bright line into the grayscale buffer.
fn draw_stripe(
    img: &mut [u8],
    width: usize,
    height: usize,
    from: (i32, i32),
    to: (i32, i32),
    radius: i32,
) {
    let steps = (to.0 - from.0).abs().max((to.1 - from.1).abs()).max(1);
    for i in 0..=steps {
        let t = i as f32 / steps as f32;
        let cx = (from.0 as f32 + t * (to.0 - from.0) as f32).round() as i32;
        let cy = (from.1 as f32 + t * (to.1 - from.1) as f32).round() as i32;
        for oy in -radius..=radius {
            for ox in -radius..=radius {
                if ox * ox + oy * oy > radius * radius {
                    continue;
                }
                let x = cx + ox;
                let y = cy + oy;
                if x >= 0 && y >= 0 && (x as usize) < width && (y as usize) < height {
                    img[y as usize * width + x as usize] = 220;
                }
            }
        }
    }
}
