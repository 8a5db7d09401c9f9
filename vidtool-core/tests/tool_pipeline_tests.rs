//! Pipeline-level tests that exercise the tools without requiring ffmpeg
//! or ffprobe to be installed: every scenario here fails (or is rejected)
//! before or during the external-process step, and the tools must still
//! return well-formed message sequences and clean up after themselves.

mod common;

use serde_json::json;
use vidtool_core::tools::{extract_audio, video_info, ExtractAudioRequest, VideoInfoRequest};
use vidtool_core::{CoreConfig, ToolMessage};

fn error_message_of(messages: &[ToolMessage]) -> String {
    let json = messages
        .iter()
        .rev()
        .find_map(ToolMessage::as_json)
        .expect("a structured result message");
    assert_eq!(json["status"], "error");
    json["message"].as_str().expect("error message").to_string()
}

fn has_blob(messages: &[ToolMessage]) -> bool {
    messages
        .iter()
        .any(|m| matches!(m, ToolMessage::Blob { .. }))
}

#[test]
fn test_unsupported_transfer_method_yields_error_envelope() {
    let video = json!({ "transfer_method": "carrier_pigeon", "url": "ftp://example.com/a.mp4" });
    let request = ExtractAudioRequest {
        video: Some(&video),
        audio_format: Some("mp3"),
    };
    let messages = extract_audio::invoke(&CoreConfig::default(), &request);

    let message = error_message_of(&messages);
    assert!(
        message.contains("Unsupported transfer method: carrier_pigeon"),
        "unexpected message: {message}"
    );
    assert!(!has_blob(&messages));
}

#[test]
fn test_unknown_audio_format_warns_then_proceeds() {
    // The format warning is policy, not failure: it must be emitted even
    // though the pipeline later stops on the unsupported method.
    let video = json!({ "transfer_method": "carrier_pigeon" });
    let request = ExtractAudioRequest {
        video: Some(&video),
        audio_format: Some("WMA"),
    };
    let messages = extract_audio::invoke(&CoreConfig::default(), &request);

    match &messages[0] {
        ToolMessage::Text(text) => {
            assert!(
                text.contains("Unsupported audio format: wma")
                    && text.contains("falling back to 'mp3'"),
                "unexpected warning: {text}"
            );
        }
        other => panic!("expected a warning text message first, got {other:?}"),
    }
    assert!(!error_message_of(&messages).is_empty());
}

#[test]
fn test_remote_url_without_scheme_is_rejected() {
    let video = json!({ "transfer_method": "remote_url", "url": "example.com/clip.mp4" });
    let request = ExtractAudioRequest {
        video: Some(&video),
        audio_format: Some("mp3"),
    };
    let messages = extract_audio::invoke(&CoreConfig::default(), &request);

    let message = error_message_of(&messages);
    assert!(message.contains("http"), "unexpected message: {message}");
    assert!(!has_blob(&messages));
}

#[test]
fn test_local_file_with_bad_prefix_rejected_without_network() {
    use std::net::TcpListener;

    // If the fetcher tried the network, it would hit this listener.
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    listener.set_nonblocking(true).unwrap();

    let config = CoreConfig::new(format!("http://{addr}"));
    let video = json!({ "transfer_method": "local_file", "url": "/uploads/42" });
    let request = VideoInfoRequest { video: Some(&video) };
    let messages = video_info::invoke(&config, &request);

    let message = error_message_of(&messages);
    assert!(message.contains("/files/"), "unexpected message: {message}");

    match listener.accept() {
        Err(e) if e.kind() == std::io::ErrorKind::WouldBlock => {}
        Ok(_) => panic!("fetch attempted a network call for an invalid local URL"),
        Err(e) => panic!("unexpected listener error: {e}"),
    }
}

#[test]
fn test_non_200_fetch_yields_error_envelope_for_extraction() {
    let addr = common::serve_once("404 Not Found", Vec::new());
    let video = json!({
        "transfer_method": "remote_url",
        "url": format!("http://{addr}/missing.mp4"),
    });
    let request = ExtractAudioRequest {
        video: Some(&video),
        audio_format: Some("mp3"),
    };
    let messages = extract_audio::invoke(&CoreConfig::default(), &request);

    let message = error_message_of(&messages);
    assert!(message.contains("404"), "unexpected message: {message}");
    assert!(!has_blob(&messages));
}

#[test]
fn test_non_200_fetch_yields_error_envelope_for_probe() {
    let addr = common::serve_once("500 Internal Server Error", Vec::new());
    let config = CoreConfig::new(format!("http://{addr}"));
    let video = json!({ "transfer_method": "local_file", "url": "/files/upload/42" });
    let request = VideoInfoRequest { video: Some(&video) };
    let messages = video_info::invoke(&config, &request);

    let message = error_message_of(&messages);
    assert!(message.contains("500"), "unexpected message: {message}");

    // No partial metadata alongside the error.
    let json = messages.iter().rev().find_map(ToolMessage::as_json).unwrap();
    assert!(json.get("streams").is_none());
}

#[test]
fn test_missing_video_reference_rejected_by_probe() {
    let request = VideoInfoRequest { video: None };
    let messages = video_info::invoke(&CoreConfig::default(), &request);

    assert_eq!(messages.len(), 2);
    match &messages[0] {
        ToolMessage::Text(text) => assert_eq!(text, "Missing video parameter"),
        other => panic!("expected text message, got {other:?}"),
    }
    assert_eq!(error_message_of(&messages), "Missing video parameter");
}

#[test]
fn test_temp_files_cleaned_up_after_failed_extraction() {
    // A distinctive extension lets this test track exactly its own temp
    // input file, independent of other tests running in parallel.
    let marker = |name: &str| name.starts_with("vidtool_") && name.ends_with(".cleanupcase");
    let before = common::temp_dir_entries(marker);

    // The fetch succeeds but the payload is garbage, so the pipeline dies
    // at the transcode step (or earlier, when ffmpeg is not installed).
    let addr = common::serve_once("200 OK", b"not actually a video".to_vec());
    let config = CoreConfig::new(format!("http://{addr}"));
    let video = json!({
        "transfer_method": "local_file",
        "url": "/files/upload/42",
        "extension": ".cleanupcase",
    });
    let request = ExtractAudioRequest {
        video: Some(&video),
        audio_format: Some("mp3"),
    };
    let messages = extract_audio::invoke(&config, &request);

    assert!(!error_message_of(&messages).is_empty());
    assert!(!has_blob(&messages));

    let after = common::temp_dir_entries(marker);
    assert_eq!(
        after, before,
        "temp input file survived a failed invocation"
    );
}
