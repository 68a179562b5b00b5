use crate::LaneParams;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

/// Config for the single-image `lane_frame` tool.
#[derive(Debug, Deserialize)]
pub struct FrameToolConfig {
    #[serde(rename = "input")]
    pub input: PathBuf,
    #[serde(default)]
    pub params: LaneParams,
    pub output: FrameOutputConfig,
}

#[derive(Debug, Deserialize)]
pub struct FrameOutputConfig {
    /// Annotated copy of the input frame.
    pub overlay_image: PathBuf,
    /// Optional JSON report with the estimated lanes and timings.
    #[serde(default)]
    pub report_json: Option<PathBuf>,
}

pub fn load_config(path: &Path) -> Result<FrameToolConfig, String> {
    let data = fs::read_to_string(path)
        .map_err(|e| format!("Failed to read config {}: {e}", path.display()))?;
    serde_json::from_str(&data)
        .map_err(|e| format!("Failed to parse config {}: {e}", path.display()))
}
