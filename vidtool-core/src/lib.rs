//! Core library for the vidtool media tools.
//!
//! Two stateless pipelines built on ffmpeg and ffprobe: `extract-audio`
//! downloads a video (from a remote URL or the host's local file store)
//! and re-encodes its audio track; `info` downloads a video and reports
//! its container and stream metadata.
//!
//! ## Usage Example
//!
//! ```rust,no_run
//! use vidtool_core::{CoreConfig, tools};
//! use serde_json::json;
//!
//! let config = CoreConfig::from_env();
//! let video = json!({
//!     "transfer_method": "remote_url",
//!     "url": "https://example.com/clip.mp4",
//! });
//! let request = tools::ExtractAudioRequest {
//!     video: Some(&video),
//!     audio_format: Some("wav"),
//! };
//! for message in tools::extract_audio::invoke(&config, &request) {
//!     // text, JSON result, and binary payload messages, in order
//!     let _ = message;
//! }
//! ```

pub mod config;
pub mod error;
pub mod external;
pub mod fetch;
pub mod media;
pub mod messages;
pub mod temp_files;
pub mod tools;
pub mod utils;
pub mod video_ref;

// Re-exports for public API
pub use config::CoreConfig;
pub use error::{CoreError, CoreResult};
pub use fetch::{fetch_video, FetchedPayload, TransferMethod};
pub use media::{FormatInfo, MediaMetadata, StreamDetails, StreamInfo};
pub use messages::{ExtractionSummary, ToolMessage};
pub use utils::{format_kbps, format_minutes_seconds, format_size_mib};
pub use video_ref::{FieldSource, VideoFile, VideoReference};
