//! FFmpeg invocation for audio extraction.

use std::path::Path;

use ffmpeg_sidecar::command::FfmpegCommand;
use ffmpeg_sidecar::event::{FfmpegEvent, LogLevel};

use crate::error::{command_failed_error, command_start_error, command_wait_error, CoreResult};

/// Maps a validated audio format to the encoder ffmpeg should use.
/// Unknown formats (unreachable after validation) fall back to stream copy.
#[must_use]
pub fn codec_for_format(audio_format: &str) -> &'static str {
    match audio_format {
        "mp3" => "libmp3lame",
        "aac" => "aac",
        "wav" => "pcm_s16le",
        "ogg" => "libvorbis",
        "flac" => "flac",
        _ => "copy",
    }
}

/// Extracts the audio track of `input` into `output`, re-encoded for the
/// requested format. Overwrites a pre-existing output file.
///
/// Error-level log lines from the encoder are collected and returned in
/// the failure message when the process exits non-zero.
pub fn extract_audio(input: &Path, output: &Path, audio_format: &str) -> CoreResult<()> {
    let codec = codec_for_format(audio_format);

    let mut cmd = FfmpegCommand::new();
    cmd.input(input.to_string_lossy().as_ref());
    cmd.args(["-acodec", codec]);
    cmd.arg("-y"); // overwrite a pre-existing output path
    cmd.output(output.to_string_lossy().as_ref());

    log::debug!("Running audio extraction command: {cmd:?}");

    let mut child = cmd
        .spawn()
        .map_err(|e| command_start_error("ffmpeg (audio extraction)", e))?;

    let mut diagnostics: Vec<String> = Vec::new();
    let events = child
        .iter()
        .map_err(|e| command_start_error("ffmpeg (audio extraction)", e))?;
    for event in events {
        match event {
            FfmpegEvent::Log(LogLevel::Error | LogLevel::Fatal, line) => {
                log::debug!("ffmpeg: {line}");
                diagnostics.push(line);
            }
            FfmpegEvent::Error(line) => {
                log::debug!("ffmpeg: {line}");
                diagnostics.push(line);
            }
            _ => {}
        }
    }

    let status = child
        .wait()
        .map_err(|e| command_wait_error("ffmpeg (audio extraction)", e))?;
    if !status.success() {
        log::error!("Audio extraction failed: {status}");
        return Err(command_failed_error(
            "ffmpeg (audio extraction)",
            status,
            diagnostics.join("\n"),
        ));
    }

    log::debug!("Audio extracted to {}", output.display());
    Ok(())
}
