//! Interactions with the external ffmpeg and ffprobe binaries.
//!
//! Both binaries are treated as opaque processes: one synchronous
//! invocation per tool call, stdout/stderr captured for diagnostics only.

use std::io;
use std::process::{Command, Stdio};

use crate::error::{CoreError, CoreResult};

/// Audio extraction through ffmpeg.
pub mod ffmpeg;

/// Container/stream probing through ffprobe.
pub mod ffprobe;

pub use ffmpeg::{codec_for_format, extract_audio};
pub use ffprobe::probe;

/// Checks that a required external command is available and executable.
///
/// Runs `<cmd> -version` with output discarded; used to fail fast when
/// ffmpeg or ffprobe is missing from the environment.
pub fn check_dependency(cmd_name: &str) -> CoreResult<()> {
    let result = Command::new(cmd_name)
        .arg("-version")
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .status();

    match result {
        Ok(_) => {
            log::debug!("Found dependency: {cmd_name}");
            Ok(())
        }
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            log::warn!("Dependency '{cmd_name}' not found");
            Err(CoreError::CommandStart {
                cmd: cmd_name.to_string(),
                reason: "not found on PATH".to_string(),
            })
        }
        Err(e) => {
            log::error!("Failed to run dependency check for '{cmd_name}': {e}");
            Err(CoreError::CommandStart {
                cmd: cmd_name.to_string(),
                reason: e.to_string(),
            })
        }
    }
}
