//! FFprobe invocation for media metadata extraction.

use std::path::Path;
use std::process::Command;

use serde_json::Value;

use crate::error::{command_failed_error, command_start_error, CoreError, CoreResult};

/// Runs ffprobe against `input` and returns the combined format + stream
/// report as raw JSON.
///
/// A non-zero exit surfaces the prober's stderr text in the error; the
/// caller reshapes the JSON defensively, so no typed deserialization
/// happens here.
pub fn probe(input: &Path) -> CoreResult<Value> {
    let mut cmd = Command::new("ffprobe");
    cmd.args([
        "-v",
        "quiet",
        "-print_format",
        "json",
        "-show_format",
        "-show_streams",
    ])
    .arg(input);

    log::debug!("Running probe command: {cmd:?}");

    let output = cmd
        .output()
        .map_err(|e| command_start_error("ffprobe", e))?;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr).into_owned();
        log::error!("ffprobe failed for {}: {stderr}", input.display());
        return Err(command_failed_error("ffprobe", output.status, stderr));
    }

    serde_json::from_slice(&output.stdout)
        .map_err(|e| CoreError::JsonParse(format!("ffprobe output: {e}")))
}
