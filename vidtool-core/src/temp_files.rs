//! Temporary file management.
//!
//! Both pipelines materialize fetched bytes to disk before handing them to
//! an external binary. Cleanup relies on the tempfile crate's Drop-based
//! deletion, so every exit path — success, handled error, panic unwind —
//! removes what was created.

use std::io::Write;
use std::path::PathBuf;

use tempfile::{Builder as TempFileBuilder, NamedTempFile, TempPath};

use crate::error::CoreResult;

/// Prefix applied to materialized input files in the system temp directory.
pub const TEMP_INPUT_PREFIX: &str = "vidtool_";

/// Writes fetched bytes to a uniquely-named temp file with the payload's
/// extension. The file is deleted when the returned handle drops.
pub fn write_temp_input(bytes: &[u8], extension: &str) -> CoreResult<NamedTempFile> {
    let suffix = if extension.starts_with('.') {
        extension.to_string()
    } else {
        format!(".{extension}")
    };
    let mut file = TempFileBuilder::new()
        .prefix(TEMP_INPUT_PREFIX)
        .suffix(&suffix)
        .tempfile()?;
    file.write_all(bytes)?;
    file.flush()?;
    log::debug!(
        "Materialized {} byte(s) to {}",
        bytes.len(),
        file.path().display()
    );
    Ok(file)
}

/// Returns a path for a transcoded-audio output file in the system temp
/// directory, guarded so the file (if created) is deleted on drop.
///
/// The name carries a second-granularity timestamp plus a short random
/// suffix; the suffix narrows the collision window between invocations
/// that start within the same second.
#[must_use]
pub fn scoped_audio_output_path(extension: &str) -> TempPath {
    use rand::distributions::Alphanumeric;
    use rand::{thread_rng, Rng};

    let stamp = chrono::Utc::now().timestamp();
    let random_suffix: String = thread_rng()
        .sample_iter(&Alphanumeric)
        .take(6)
        .map(char::from)
        .collect();

    let path: PathBuf =
        std::env::temp_dir().join(format!("audio_{stamp}_{random_suffix}.{extension}"));
    TempPath::from_path(path)
}
