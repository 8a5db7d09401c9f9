// vidtool-cli/src/commands/extract_audio.rs
//
// The 'extract-audio' subcommand: run the extraction tool and write the
// binary payload to disk.

use std::error::Error;
use std::fs;
use std::path::PathBuf;

use vidtool_core::external::check_dependency;
use vidtool_core::tools::{self, ExtractAudioRequest};
use vidtool_core::ToolMessage;

use crate::cli::ExtractAudioArgs;
use crate::commands::{build_config, build_video_value};

pub fn run(args: ExtractAudioArgs) -> Result<(), Box<dyn Error>> {
    check_dependency("ffmpeg")?;

    let config = build_config(&args.video);
    let video = build_video_value(&args.video);
    let request = ExtractAudioRequest {
        video: Some(&video),
        audio_format: Some(&args.audio_format),
    };

    let messages = tools::extract_audio::invoke(&config, &request);

    let mut failed = false;
    for message in messages {
        match message {
            ToolMessage::Text(text) => println!("{text}"),
            ToolMessage::Json(value) => {
                if value.get("status").and_then(|s| s.as_str()) == Some("error") {
                    failed = true;
                }
                println!("{}", serde_json::to_string_pretty(&value)?);
            }
            ToolMessage::Blob {
                data,
                filename,
                mime_type,
            } => {
                let path = args
                    .output
                    .clone()
                    .unwrap_or_else(|| PathBuf::from(&filename));
                fs::write(&path, &data)?;
                log::info!("Wrote {} byte(s) of {mime_type}", data.len());
                println!("Saved audio payload to {}", path.display());
            }
        }
    }

    if failed {
        Err("audio extraction failed".into())
    } else {
        Ok(())
    }
}
