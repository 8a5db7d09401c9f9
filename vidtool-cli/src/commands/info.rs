// vidtool-cli/src/commands/info.rs
//
// The 'info' subcommand: run the probe tool and print its report.

use std::error::Error;

use vidtool_core::external::check_dependency;
use vidtool_core::tools::{self, VideoInfoRequest};
use vidtool_core::ToolMessage;

use crate::cli::InfoArgs;
use crate::commands::{build_config, build_video_value};

pub fn run(args: InfoArgs) -> Result<(), Box<dyn Error>> {
    check_dependency("ffprobe")?;

    let config = build_config(&args.video);
    let video = build_video_value(&args.video);
    let request = VideoInfoRequest { video: Some(&video) };

    let messages = tools::video_info::invoke(&config, &request);

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
            // The probe tool never emits a binary payload.
            ToolMessage::Blob { .. } => {}
        }
    }

    if failed {
        Err("video probe failed".into())
    } else {
        Ok(())
    }
}
