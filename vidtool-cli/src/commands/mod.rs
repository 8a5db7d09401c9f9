// vidtool-cli/src/commands/mod.rs
//
// One module per subcommand, plus shared helpers for turning CLI flags
// into the mapping-shaped tool parameters and rendering tool messages.

pub mod extract_audio;
pub mod info;

use serde_json::{json, Value};
use vidtool_core::CoreConfig;

use crate::cli::VideoRefArgs;

/// Builds the core configuration from the CLI flags and environment.
pub fn build_config(args: &VideoRefArgs) -> CoreConfig {
    match &args.file_base_url {
        Some(base_url) => CoreConfig::new(base_url),
        None => CoreConfig::from_env(),
    }
}

/// Assembles the mapping-shaped video reference the tools consume.
///
/// When no transfer method is given, it is inferred from the URL shape:
/// an http(s) URL means `remote_url`, anything else `local_file`.
pub fn build_video_value(args: &VideoRefArgs) -> Value {
    let transfer_method = args.transfer_method.clone().unwrap_or_else(|| {
        if args.url.starts_with("http://") || args.url.starts_with("https://") {
            "remote_url".to_string()
        } else {
            "local_file".to_string()
        }
    });

    let mut video = json!({
        "transfer_method": transfer_method,
        "url": args.url,
    });
    if let Some(filename) = &args.filename {
        video["filename"] = json!(filename);
    }
    if let Some(extension) = &args.extension {
        video["extension"] = json!(extension);
    }
    if let Some(mime_type) = &args.mime_type {
        video["mime_type"] = json!(mime_type);
    }
    video
}
