//! Frame sequences extracted from dashboard-camera video.
//!
//! Video decoding is out of scope for the crate; instead a [`FrameSource`]
//! owns a directory of extracted frames (PNG/JPEG, sorted by file name) and
//! hands them out one at a time. The listing is read once when the source is
//! opened and the handle is released when it goes out of scope, so the frame
//! loop owns exactly one acquisition for its whole lifetime.

use crate::image::io::load_rgb_image;
use image::RgbImage;
use std::fs;
use std::path::{Path, PathBuf};

const FRAME_EXTENSIONS: [&str; 4] = ["png", "jpg", "jpeg", "bmp"];

/// One decoded frame together with its origin path.
pub struct Frame {
    pub path: PathBuf,
    pub rgb: RgbImage,
}

/// Ordered source of frames backed by a directory listing.
#[derive(Debug)]
pub struct FrameSource {
    paths: Vec<PathBuf>,
    next: usize,
}

impl FrameSource {
    /// List the image files under `dir` in file-name order.
    pub fn open(dir: &Path) -> Result<Self, String> {
        let entries =
            fs::read_dir(dir).map_err(|e| format!("Failed to read {}: {e}", dir.display()))?;
        let mut paths: Vec<PathBuf> = entries
            .filter_map(|e| e.ok())
            .map(|e| e.path())
            .filter(|p| {
                p.extension()
                    .and_then(|ext| ext.to_str())
                    .map(|ext| FRAME_EXTENSIONS.contains(&ext.to_ascii_lowercase().as_str()))
                    .unwrap_or(false)
            })
            .collect();
        paths.sort();
        Ok(Self { paths, next: 0 })
    }

    /// Number of frames in the sequence.
    pub fn len(&self) -> usize {
        self.paths.len()
    }

    /// True when the directory held no frames.
    pub fn is_empty(&self) -> bool {
        self.paths.is_empty()
    }

    /// Decode and return the next frame, or `None` at the end of the
    /// sequence. Decoding failures surface as errors without consuming the
    /// rest of the sequence.
    pub fn next_frame(&mut self) -> Option<Result<Frame, String>> {
        let path = self.paths.get(self.next)?.clone();
        self.next += 1;
        Some(load_rgb_image(&path).map(|rgb| Frame { path, rgb }))
    }
}

impl Iterator for FrameSource {
    type Item = Result<Frame, String>;

    fn next(&mut self) -> Option<Self::Item> {
        self.next_frame()
    }
}
