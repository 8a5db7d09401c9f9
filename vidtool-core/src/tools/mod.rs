//! The two tool pipelines.
//!
//! Each tool is a stateless, synchronous pipeline: resolve the video
//! reference, fetch its bytes, materialize them to a scoped temp file,
//! run one external process, and emit messages. Any error is caught at
//! the top of the pipeline and converted into a text + JSON error pair —
//! an invocation never propagates an error to its caller.

pub mod extract_audio;
pub mod video_info;

pub use extract_audio::ExtractAudioRequest;
pub use video_info::VideoInfoRequest;
