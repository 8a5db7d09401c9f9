//! Formatting and filename helpers used throughout the library.

use std::path::Path;

/// Formats a byte count as MiB with two decimals (e.g. 1536000 -> "1.46 MiB").
#[must_use]
pub fn format_size_mib(bytes: u64) -> String {
    const MIB: f64 = 1024.0 * 1024.0;
    format!("{:.2} MiB", bytes as f64 / MIB)
}

/// Formats a bit rate in bits/sec as kbps with two decimals.
#[must_use]
pub fn format_kbps(bit_rate: u64) -> String {
    format!("{:.2} kbps", bit_rate as f64 / 1000.0)
}

/// Formats seconds as whole minutes and seconds (e.g. 245.7 -> "4m 5s").
/// Negative or non-finite inputs render as "0m 0s".
#[must_use]
pub fn format_minutes_seconds(seconds: f64) -> String {
    if seconds < 0.0 || !seconds.is_finite() {
        return "0m 0s".to_string();
    }
    let total = seconds as u64;
    format!("{}m {}s", total / 60, total % 60)
}

/// Returns the filename component of a URL with any query string stripped.
/// Falls back to "video.mp4" when the path has no usable final segment.
#[must_use]
pub fn filename_from_url(url: &str) -> String {
    let name = match url::Url::parse(url) {
        Ok(parsed) => parsed
            .path_segments()
            .and_then(|segments| segments.last().map(str::to_string))
            .unwrap_or_default(),
        // Not an absolute URL; take the last path segment by hand.
        Err(_) => url
            .split(['?', '#'])
            .next()
            .unwrap_or_default()
            .rsplit('/')
            .next()
            .unwrap_or_default()
            .to_string(),
    };
    if name.is_empty() {
        "video.mp4".to_string()
    } else {
        name
    }
}

/// Returns the dotted extension of a filename (e.g. ".mp4"), if it has one.
#[must_use]
pub fn extension_of(filename: &str) -> Option<String> {
    Path::new(filename)
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| format!(".{ext}"))
}

/// Returns the filename without its final extension.
#[must_use]
pub fn file_stem_of(filename: &str) -> String {
    Path::new(filename)
        .file_stem()
        .and_then(|stem| stem.to_str())
        .unwrap_or(filename)
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_size_mib() {
        assert_eq!(format_size_mib(0), "0.00 MiB");
        assert_eq!(format_size_mib(1024 * 1024), "1.00 MiB");
        assert_eq!(format_size_mib(5 * 1024 * 1024 + 512 * 1024), "5.50 MiB");
    }

    #[test]
    fn test_format_kbps() {
        assert_eq!(format_kbps(0), "0.00 kbps");
        assert_eq!(format_kbps(1_500_000), "1500.00 kbps");
    }

    #[test]
    fn test_format_minutes_seconds() {
        assert_eq!(format_minutes_seconds(0.0), "0m 0s");
        assert_eq!(format_minutes_seconds(245.7), "4m 5s");
        assert_eq!(format_minutes_seconds(60.0), "1m 0s");
        assert_eq!(format_minutes_seconds(-3.0), "0m 0s");
        assert_eq!(format_minutes_seconds(f64::NAN), "0m 0s");
    }

    #[test]
    fn test_filename_from_url() {
        assert_eq!(
            filename_from_url("https://example.com/media/clip.mp4"),
            "clip.mp4"
        );
        assert_eq!(
            filename_from_url("https://example.com/media/clip.mp4?token=abc"),
            "clip.mp4"
        );
        assert_eq!(filename_from_url("https://example.com/"), "video.mp4");
        assert_eq!(filename_from_url("/files/abc/video.webm"), "video.webm");
    }

    #[test]
    fn test_extension_of() {
        assert_eq!(extension_of("clip.mp4"), Some(".mp4".to_string()));
        assert_eq!(extension_of("archive.tar.gz"), Some(".gz".to_string()));
        assert_eq!(extension_of("noext"), None);
    }

    #[test]
    fn test_file_stem_of() {
        assert_eq!(file_stem_of("clip.mp4"), "clip");
        assert_eq!(file_stem_of("noext"), "noext");
        assert_eq!(file_stem_of("a.b.c.mkv"), "a.b.c");
    }
}
