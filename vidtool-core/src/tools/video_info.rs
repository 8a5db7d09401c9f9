//! Video info tool: fetch a video, probe it with ffprobe, and return the
//! reshaped metadata plus a human-readable summary.

use serde::Serialize;
use serde_json::to_value;

use crate::config::CoreConfig;
use crate::error::{CoreError, CoreResult};
use crate::external::probe;
use crate::fetch::fetch_video;
use crate::media::MediaMetadata;
use crate::messages::ToolMessage;
use crate::temp_files::write_temp_input;
use crate::video_ref::{FieldSource, VideoReference};

/// Parameters of one probe request.
pub struct VideoInfoRequest<'a> {
    /// The video reference. Unlike extraction, a missing reference is
    /// rejected outright before any fetch is attempted.
    pub video: Option<&'a dyn FieldSource>,
}

/// Structured success result of a probe.
#[derive(Debug, Serialize)]
struct ProbeReport<'a> {
    status: &'static str,
    filename: &'a str,
    #[serde(flatten)]
    metadata: &'a MediaMetadata,
}

/// Runs the probe pipeline. Never fails outward: on any error the
/// returned messages end with a text + JSON error pair.
pub fn invoke(config: &CoreConfig, request: &VideoInfoRequest<'_>) -> Vec<ToolMessage> {
    let mut messages = Vec::new();

    let Some(source) = request.video else {
        let error_msg = "Missing video parameter";
        log::warn!("Probe request without a video reference");
        messages.push(ToolMessage::text(error_msg));
        messages.push(ToolMessage::error_json(error_msg));
        return messages;
    };

    if let Err(err) = run(config, source, &mut messages) {
        log::error!("Video probe failed: {err}");
        let error_msg = format!("Failed to read video information: {err}");
        messages.push(ToolMessage::text(error_msg.as_str()));
        messages.push(ToolMessage::error_json(&error_msg));
    }
    messages
}

fn run(
    config: &CoreConfig,
    source: &dyn FieldSource,
    messages: &mut Vec<ToolMessage>,
) -> CoreResult<()> {
    let video = VideoReference::resolve(source);
    let payload = fetch_video(config, &video)?;

    let input = write_temp_input(&payload.bytes, &payload.extension)?;
    let raw = probe(input.path())?;
    let metadata = MediaMetadata::from_probe(&raw);

    messages.push(ToolMessage::text(metadata.summary(&payload.filename)));

    let report = ProbeReport {
        status: "success",
        filename: &payload.filename,
        metadata: &metadata,
    };
    messages.push(ToolMessage::Json(
        to_value(&report).map_err(|e| CoreError::JsonParse(e.to_string()))?,
    ));

    Ok(())
}
