use crate::LaneParams;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

/// Config for the frame-directory `lane_video` tool.
#[derive(Debug, Deserialize)]
pub struct VideoToolConfig {
    /// Directory holding the extracted video frames.
    pub input_dir: PathBuf,
    /// Directory receiving the annotated frames.
    pub output_dir: PathBuf,
    #[serde(default)]
    pub params: LaneParams,
}

pub fn load_config(path: &Path) -> Result<VideoToolConfig, String> {
    let data = fs::read_to_string(path)
        .map_err(|e| format!("Failed to read config {}: {e}", path.display()))?;
    serde_json::from_str(&data)
        .map_err(|e| format!("Failed to parse config {}: {e}", path.display()))
}
