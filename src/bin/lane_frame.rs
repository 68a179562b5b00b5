use lane_detector::config::load_frame_config;
use lane_detector::image::io::{load_grayscale_image, load_rgb_image, save_rgb_image, write_json_file};
use lane_detector::overlay::annotate_frame;
use lane_detector::LaneDetector;
use std::env;
use std::path::Path;

fn main() {
    if let Err(err) = run() {
        eprintln!("Error: {err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), String> {
    let config_path = env::args().nth(1).ok_or_else(usage)?;
    let config = load_frame_config(Path::new(&config_path))?;

    let gray = load_grayscale_image(&config.input)?;
    let detector = LaneDetector::new(config.params);
    let report = detector.process(gray.as_view());

    let frame = load_rgb_image(&config.input)?;
    let annotated = annotate_frame(&frame, &report.lanes);
    save_rgb_image(&annotated, &config.output.overlay_image)?;

    if let Some(report_json) = &config.output.report_json {
        write_json_file(report_json, &report)?;
    }

    println!(
        "Saved overlay to {} ({} segments, left={}, right={}, {:.3} ms)",
        config.output.overlay_image.display(),
        report.segment_count,
        report.lanes.left.is_some(),
        report.lanes.right.is_some(),
        report.latency_ms
    );

    Ok(())
}

fn usage() -> String {
    "Usage: lane_frame <config.json>".to_string()
}
