//! Reshaping of raw probe output into structured media metadata.
//!
//! Extraction is deliberately defensive: a probe report missing optional
//! fields must never fail to reshape. Every absent field takes a
//! documented default (`"unknown"` for names, zero for numerics) and the
//! stream shape branches only on `codec_type`.

use serde::Serialize;
use serde_json::Value;

use crate::utils::{format_kbps, format_minutes_seconds, format_size_mib};

/// Container-level metadata.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FormatInfo {
    pub format_name: String,
    /// Duration in seconds.
    pub duration: f64,
    /// Size in bytes.
    pub size: u64,
    /// Average bit rate in bits per second.
    pub bit_rate: u64,
}

/// Type-specific stream fields, keyed by `codec_type` on the wire.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum StreamDetails {
    Video {
        width: Option<i64>,
        height: Option<i64>,
        r_frame_rate: Option<String>,
        display_aspect_ratio: String,
    },
    Audio {
        sample_rate: Option<String>,
        channels: Option<i64>,
        channel_layout: String,
    },
    /// Streams of any other type carry only the common fields.
    Other {},
}

/// One stream of the probed container.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StreamInfo {
    pub index: Option<i64>,
    pub codec_type: Option<String>,
    pub codec_name: Option<String>,
    #[serde(flatten)]
    pub details: StreamDetails,
}

/// Full reshaped probe result: container format plus ordered streams.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MediaMetadata {
    pub format: FormatInfo,
    pub streams: Vec<StreamInfo>,
}

impl MediaMetadata {
    /// Reshapes a raw ffprobe JSON report. Never fails: missing fields
    /// take their defaults.
    #[must_use]
    pub fn from_probe(raw: &Value) -> Self {
        let format = raw.get("format");
        let format = FormatInfo {
            format_name: format
                .and_then(|f| f.get("format_name"))
                .and_then(Value::as_str)
                .unwrap_or("unknown")
                .to_string(),
            duration: lenient_f64(format.and_then(|f| f.get("duration"))),
            size: lenient_u64(format.and_then(|f| f.get("size"))),
            bit_rate: lenient_u64(format.and_then(|f| f.get("bit_rate"))),
        };

        let streams = raw
            .get("streams")
            .and_then(Value::as_array)
            .map(|streams| streams.iter().map(reshape_stream).collect())
            .unwrap_or_default();

        Self { format, streams }
    }

    /// Composes the multi-line human-readable summary.
    #[must_use]
    pub fn summary(&self, filename: &str) -> String {
        let mut lines = vec![
            format!("Video information for {filename}"),
            format!("Format: {}", self.format.format_name),
            format!("Duration: {}", format_minutes_seconds(self.format.duration)),
            format!("Size: {}", format_size_mib(self.format.size)),
            format!("Bit rate: {}", format_kbps(self.format.bit_rate)),
        ];

        for stream in &self.streams {
            let codec = stream.codec_name.as_deref().unwrap_or("unknown");
            match &stream.details {
                StreamDetails::Video { width, height, .. } => {
                    let width = width.map_or_else(|| "?".to_string(), |v| v.to_string());
                    let height = height.map_or_else(|| "?".to_string(), |v| v.to_string());
                    lines.push(format!("Video stream: {width}x{height} / codec: {codec}"));
                }
                StreamDetails::Audio { sample_rate, .. } => {
                    let rate = sample_rate.as_deref().unwrap_or("unknown");
                    lines.push(format!("Audio stream: codec: {codec} / sample rate: {rate}"));
                }
                StreamDetails::Other {} => {}
            }
        }

        lines.join("\n")
    }
}

fn reshape_stream(stream: &Value) -> StreamInfo {
    let codec_type = stream
        .get("codec_type")
        .and_then(Value::as_str)
        .map(str::to_string);

    let details = match codec_type.as_deref() {
        Some("video") => StreamDetails::Video {
            width: stream.get("width").and_then(Value::as_i64),
            height: stream.get("height").and_then(Value::as_i64),
            r_frame_rate: stream
                .get("r_frame_rate")
                .and_then(Value::as_str)
                .map(str::to_string),
            display_aspect_ratio: stream
                .get("display_aspect_ratio")
                .and_then(Value::as_str)
                .unwrap_or("unknown")
                .to_string(),
        },
        Some("audio") => StreamDetails::Audio {
            sample_rate: stream
                .get("sample_rate")
                .and_then(Value::as_str)
                .map(str::to_string),
            channels: stream.get("channels").and_then(Value::as_i64),
            channel_layout: stream
                .get("channel_layout")
                .and_then(Value::as_str)
                .unwrap_or("unknown")
                .to_string(),
        },
        _ => StreamDetails::Other {},
    };

    StreamInfo {
        index: stream.get("index").and_then(Value::as_i64),
        codec_type,
        codec_name: stream
            .get("codec_name")
            .and_then(Value::as_str)
            .map(str::to_string),
        details,
    }
}

/// ffprobe reports numerics as strings; accept either shape, default zero.
fn lenient_f64(value: Option<&Value>) -> f64 {
    match value {
        Some(Value::String(s)) => s.parse().unwrap_or(0.0),
        Some(Value::Number(n)) => n.as_f64().unwrap_or(0.0),
        _ => 0.0,
    }
}

fn lenient_u64(value: Option<&Value>) -> u64 {
    match value {
        Some(Value::String(s)) => s.parse().unwrap_or(0),
        Some(Value::Number(n)) => n.as_u64().unwrap_or(0),
        _ => 0,
    }
}
