use lane_detector::config::load_video_config;
use lane_detector::frames::FrameSource;
use lane_detector::image::io::save_rgb_image;
use lane_detector::image::ImageU8;
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
    let config = load_video_config(Path::new(&config_path))?;

    let source = FrameSource::open(&config.input_dir)?;
    if source.is_empty() {
        return Err(format!(
            "No frames found under {}",
            config.input_dir.display()
        ));
    }
    let total = source.len();
    println!("Processing {total} frames from {}", config.input_dir.display());

    let detector = LaneDetector::new(config.params);
    let mut annotated_count = 0usize;

    for frame in source {
        // A corrupt frame skips this iteration, not the whole run.
        let frame = match frame {
            Ok(frame) => frame,
            Err(err) => {
                eprintln!("Skipping frame: {err}");
                continue;
            }
        };

        let luma = image::imageops::grayscale(&frame.rgb);
        let (w, h) = (luma.width() as usize, luma.height() as usize);
        let gray = ImageU8 {
            w,
            h,
            stride: w,
            data: luma.as_raw(),
        };
        let report = detector.process(gray);

        let file_name = frame
            .path
            .file_name()
            .ok_or_else(|| format!("Frame path has no file name: {}", frame.path.display()))?;
        let out_path = config.output_dir.join(file_name);

        // Frames with no detections pass through un-annotated.
        if report.lanes.is_empty() {
            println!("No lane lines detected in {}", frame.path.display());
            save_rgb_image(&frame.rgb, &out_path)?;
        } else {
            let annotated = annotate_frame(&frame.rgb, &report.lanes);
            save_rgb_image(&annotated, &out_path)?;
            annotated_count += 1;
        }
    }

    println!(
        "Annotated {annotated_count}/{total} frames into {}",
        config.output_dir.display()
    );

    Ok(())
}

fn usage() -> String {
    "Usage: lane_video <config.json>".to_string()
}
