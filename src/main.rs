use lane_detector::image::ImageU8;
use lane_detector::{LaneDetector, LaneParams};

fn main() {
    // Demo stub: creates a fake 8-bit frame buffer and runs the detector
    let w = 1280usize;
    let h = 720usize;
    let stride = w; // tightly packed
    let gray = vec![0u8; w * h];
    let img = ImageU8 {
        w,
        h,
        stride,
        data: &gray,
    };

    let detector = LaneDetector::new(LaneParams::default());
    let report = detector.process(img);
    println!(
        "segments={} left={} right={} latency_ms={:.3}",
        report.segment_count,
        report.lanes.left.is_some(),
        report.lanes.right.is_some(),
        report.latency_ms
    );
}
