mod common;

use common::synthetic_image::road_frame_u8;
use lane_detector::image::ImageU8;
use lane_detector::{LaneDetector, LaneParams};

#[test]
fn synthetic_road_produces_both_lanes() {
    let width = 1280usize;
    let height = 720usize;
    let buffer = road_frame_u8(width, height);

    let image = ImageU8 {
        w: width,
        h: height,
        stride: width,
        data: &buffer,
    };

    let detector = LaneDetector::new(LaneParams::default());
    let report = detector.process(image);

    assert!(
        report.segment_count > 0,
        "expected Hough segments on the synthetic stripes"
    );
    let left = report
        .lanes
        .left
        .expect("expected a left lane on the synthetic road");
    let right = report
        .lanes
        .right
        .expect("expected a right lane on the synthetic road");

    // Both lanes span from the bottom row up to 3/5 of the frame.
    for lane in [left, right] {
        assert_eq!(lane.y1, height as i32);
        assert_eq!(lane.y2, (height * 3 / 5) as i32);
    }

    // Left lane leans right going up, right lane leans left, and the pair
    // straddles the stripe bases.
    assert!(left.x1 < left.x2, "left lane should lean right: {left:?}");
    assert!(right.x1 > right.x2, "right lane should lean left: {right:?}");
    assert!(
        (left.x1 - 300).abs() < 60,
        "left lane base far from stripe: {left:?}"
    );
    assert!(
        (right.x1 - 1000).abs() < 60,
        "right lane base far from stripe: {right:?}"
    );
    assert!(left.x2 < right.x2, "lanes crossed: {left:?} vs {right:?}");
}

#[test]
fn flat_frame_produces_no_lanes() {
    let width = 1280usize;
    let height = 720usize;
    let buffer = vec![30u8; width * height];

    let image = ImageU8 {
        w: width,
        h: height,
        stride: width,
        data: &buffer,
    };

    let detector = LaneDetector::new(LaneParams::default());
    let report = detector.process(image);

    assert_eq!(report.segment_count, 0);
    assert!(report.lanes.is_empty());
    assert!(report.lanes.left.is_none() && report.lanes.right.is_none());
}
