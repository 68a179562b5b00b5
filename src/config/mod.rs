//! JSON configuration for the CLI tools, one schema per bin.

pub mod frame;
pub mod video;

pub use frame::{load_config as load_frame_config, FrameToolConfig};
pub use video::{load_config as load_video_config, VideoToolConfig};
