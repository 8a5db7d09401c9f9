//! Audio extraction tool: fetch a video, transcode its audio track with
//! ffmpeg, and return the audio bytes plus a structured summary.

use serde_json::to_value;

use crate::config::CoreConfig;
use crate::error::{CoreError, CoreResult};
use crate::external::extract_audio;
use crate::fetch::fetch_video;
use crate::messages::{ExtractionSummary, ToolMessage};
use crate::temp_files::{scoped_audio_output_path, write_temp_input};
use crate::utils::{file_stem_of, format_size_mib};
use crate::video_ref::{FieldSource, VideoReference};

/// Audio formats the tool accepts as-is.
pub const VALID_AUDIO_FORMATS: [&str; 5] = ["mp3", "aac", "wav", "ogg", "flac"];

/// Format the tool falls back to when the request names an unknown one.
pub const FALLBACK_AUDIO_FORMAT: &str = "mp3";

/// Maps an audio format to the MIME type of the produced payload.
#[must_use]
pub fn mime_for_format(audio_format: &str) -> String {
    match audio_format {
        "mp3" => "audio/mpeg".to_string(),
        "aac" => "audio/aac".to_string(),
        "wav" => "audio/wav".to_string(),
        "ogg" => "audio/ogg".to_string(),
        "flac" => "audio/flac".to_string(),
        other => format!("audio/{other}"),
    }
}

/// Parameters of one extraction request.
pub struct ExtractAudioRequest<'a> {
    /// The video reference; a missing reference resolves to all defaults.
    pub video: Option<&'a dyn FieldSource>,
    /// Requested output format, case-insensitive; defaults to mp3.
    pub audio_format: Option<&'a str>,
}

/// Runs the extraction pipeline. Never fails outward: on any error the
/// returned messages end with a text + JSON error pair instead of a
/// binary payload.
pub fn invoke(config: &CoreConfig, request: &ExtractAudioRequest<'_>) -> Vec<ToolMessage> {
    let mut messages = Vec::new();
    if let Err(err) = run(config, request, &mut messages) {
        log::error!("Audio extraction failed: {err}");
        let error_msg = format!("Error while processing video file: {err}");
        messages.push(ToolMessage::text(error_msg.as_str()));
        messages.push(ToolMessage::error_json(&error_msg));
    }
    messages
}

fn run(
    config: &CoreConfig,
    request: &ExtractAudioRequest<'_>,
    messages: &mut Vec<ToolMessage>,
) -> CoreResult<()> {
    let video = request
        .video
        .map(VideoReference::resolve)
        .unwrap_or_default();

    let mut audio_format = request
        .audio_format
        .unwrap_or(FALLBACK_AUDIO_FORMAT)
        .to_lowercase();
    if !VALID_AUDIO_FORMATS.contains(&audio_format.as_str()) {
        log::warn!("Unsupported audio format '{audio_format}', using '{FALLBACK_AUDIO_FORMAT}'");
        messages.push(ToolMessage::text(format!(
            "Unsupported audio format: {audio_format}, falling back to '{FALLBACK_AUDIO_FORMAT}'"
        )));
        audio_format = FALLBACK_AUDIO_FORMAT.to_string();
    }

    let payload = fetch_video(config, &video)?;
    let output_filename = format!("{}.{}", file_stem_of(&payload.filename), audio_format);

    let input = write_temp_input(&payload.bytes, &payload.extension)?;
    // The guard deletes whatever ffmpeg wrote, on every exit path.
    let output = scoped_audio_output_path(&audio_format);

    messages.push(ToolMessage::text(format!(
        "Extracting audio as '{audio_format}'..."
    )));

    extract_audio(input.path(), &output, &audio_format)?;

    let audio_data = std::fs::read(&output)?;
    let audio_size = audio_data.len() as u64;

    messages.push(ToolMessage::Blob {
        data: audio_data,
        filename: output_filename.clone(),
        mime_type: mime_for_format(&audio_format),
    });

    let summary = ExtractionSummary {
        status: "success",
        message: format!("Extracted audio as {audio_format}"),
        original_filename: payload.filename.clone(),
        audio_filename: output_filename.clone(),
        audio_format: audio_format.clone(),
        audio_size,
    };
    messages.push(ToolMessage::Json(
        to_value(&summary).map_err(|e| CoreError::JsonParse(e.to_string()))?,
    ));

    messages.push(ToolMessage::text(format!(
        "Extracted audio: {output_filename}\nFormat: {audio_format}\nSize: {}",
        format_size_mib(audio_size)
    )));

    Ok(())
}
