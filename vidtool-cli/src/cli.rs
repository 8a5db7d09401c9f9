// vidtool-cli/src/cli.rs
//
// Defines the command-line argument structures using clap.

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    author,
    version, // Reads from Cargo.toml via "cargo" feature in clap
    about = "vidtool: video fetch, audio extraction, and metadata probing",
    long_about = "Fetches a video from a remote URL or the host's local file \
store, then extracts its audio track with ffmpeg or reports its metadata \
with ffprobe, via the vidtool-core library."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Extracts the audio track of a video into a chosen format
    ExtractAudio(ExtractAudioArgs),
    /// Reports container and stream metadata of a video
    Info(InfoArgs),
}

/// Flags describing the video reference, shared by both subcommands.
#[derive(Args, Debug)]
pub struct VideoRefArgs {
    /// Video URL: an http(s) URL (remote_url) or a host-relative /files/ path (local_file)
    #[arg(long, value_name = "URL", required = true)]
    pub url: String,

    /// Transfer method: local_file or remote_url (inferred from the URL when omitted)
    #[arg(long, value_name = "METHOD")]
    pub transfer_method: Option<String>,

    /// Optional: filename to report for the video
    #[arg(long, value_name = "NAME")]
    pub filename: Option<String>,

    /// Optional: extension of the video file (e.g. .mp4)
    #[arg(long, value_name = "EXT")]
    pub extension: Option<String>,

    /// Optional: MIME type of the video file
    #[arg(long, value_name = "MIME")]
    pub mime_type: Option<String>,

    /// Optional: base address for resolving /files/ references.
    /// Can also be set via the VIDTOOL_FILE_BASE_URL environment variable.
    #[arg(long, value_name = "BASE_URL", env = "VIDTOOL_FILE_BASE_URL")]
    pub file_base_url: Option<String>,
}

#[derive(Args, Debug)]
pub struct ExtractAudioArgs {
    #[command(flatten)]
    pub video: VideoRefArgs,

    /// Target audio format: mp3, aac, wav, ogg or flac
    #[arg(long, value_name = "FORMAT", default_value = "mp3")]
    pub audio_format: String,

    /// Where to write the extracted audio (defaults to the derived audio filename)
    #[arg(short, long, value_name = "PATH")]
    pub output: Option<PathBuf>,
}

#[derive(Args, Debug)]
pub struct InfoArgs {
    #[command(flatten)]
    pub video: VideoRefArgs,
}
