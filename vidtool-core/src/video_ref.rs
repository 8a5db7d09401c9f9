//! Normalization of caller-supplied video references.
//!
//! The host hands tools a `video` parameter whose shape is not guaranteed:
//! it may be a plain key/value mapping or an object exposing equivalent
//! named attributes. Field access is therefore capability-based — anything
//! implementing [`FieldSource`] can be resolved — rather than dispatching
//! on concrete types.

use serde_json::Value;

/// Default transfer method when the reference does not name one.
pub const DEFAULT_TRANSFER_METHOD: &str = "local_file";
/// Default filename when the reference does not carry one.
pub const DEFAULT_FILENAME: &str = "video.mp4";
/// Default extension when the reference does not carry one.
pub const DEFAULT_EXTENSION: &str = ".mp4";
/// Default MIME type when the reference does not carry one.
pub const DEFAULT_MIME_TYPE: &str = "video/mp4";

/// Capability to read named string fields from a loosely-typed payload.
pub trait FieldSource {
    /// Returns the named field as a string, or `None` when absent.
    fn field(&self, name: &str) -> Option<String>;
}

impl FieldSource for Value {
    fn field(&self, name: &str) -> Option<String> {
        match self.get(name)? {
            Value::String(s) => Some(s.clone()),
            Value::Null => None,
            other => Some(other.to_string()),
        }
    }
}

/// Attribute-shaped video payload, as a typed host SDK would hand over.
#[derive(Debug, Clone, Default)]
pub struct VideoFile {
    pub transfer_method: Option<String>,
    pub filename: Option<String>,
    pub extension: Option<String>,
    pub url: Option<String>,
    pub remote_url: Option<String>,
    pub mime_type: Option<String>,
}

impl FieldSource for VideoFile {
    fn field(&self, name: &str) -> Option<String> {
        match name {
            "transfer_method" => self.transfer_method.clone(),
            "filename" => self.filename.clone(),
            "extension" => self.extension.clone(),
            "url" => self.url.clone(),
            "remote_url" => self.remote_url.clone(),
            "mime_type" => self.mime_type.clone(),
            _ => None,
        }
    }
}

/// Uniform, fully-defaulted view of a video reference.
///
/// Resolution never fails: every missing field takes its documented
/// default. The transfer method is kept as the raw string here and only
/// parsed (and possibly rejected) by the fetcher.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VideoReference {
    pub transfer_method: String,
    pub filename: String,
    pub extension: String,
    pub url: String,
    pub mime_type: String,
}

impl VideoReference {
    /// Resolves a loosely-typed payload into a uniform reference.
    ///
    /// The `url` field falls back to `remote_url` when absent, covering
    /// both spellings the host uses for remote references.
    pub fn resolve(source: &dyn FieldSource) -> Self {
        let field_or = |name: &str, default: &str| {
            source.field(name).unwrap_or_else(|| default.to_string())
        };
        let url = source
            .field("url")
            .filter(|value| !value.is_empty())
            .or_else(|| source.field("remote_url"))
            .unwrap_or_default();

        Self {
            transfer_method: field_or("transfer_method", DEFAULT_TRANSFER_METHOD),
            filename: field_or("filename", DEFAULT_FILENAME),
            extension: field_or("extension", DEFAULT_EXTENSION),
            url,
            mime_type: field_or("mime_type", DEFAULT_MIME_TYPE),
        }
    }
}

impl Default for VideoReference {
    fn default() -> Self {
        Self {
            transfer_method: DEFAULT_TRANSFER_METHOD.to_string(),
            filename: DEFAULT_FILENAME.to_string(),
            extension: DEFAULT_EXTENSION.to_string(),
            url: String::new(),
            mime_type: DEFAULT_MIME_TYPE.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_resolve_full_mapping() {
        let value = json!({
            "transfer_method": "remote_url",
            "filename": "clip.mkv",
            "extension": ".mkv",
            "url": "https://example.com/clip.mkv",
            "mime_type": "video/x-matroska",
        });
        let reference = VideoReference::resolve(&value);
        assert_eq!(reference.transfer_method, "remote_url");
        assert_eq!(reference.filename, "clip.mkv");
        assert_eq!(reference.extension, ".mkv");
        assert_eq!(reference.url, "https://example.com/clip.mkv");
        assert_eq!(reference.mime_type, "video/x-matroska");
    }

    #[test]
    fn test_resolve_empty_mapping_uses_defaults() {
        let value = json!({});
        let reference = VideoReference::resolve(&value);
        assert_eq!(reference, VideoReference::default());
    }

    #[test]
    fn test_resolve_remote_url_fallback() {
        let value = json!({ "remote_url": "https://example.com/a.mp4" });
        let reference = VideoReference::resolve(&value);
        assert_eq!(reference.url, "https://example.com/a.mp4");

        // An empty `url` also yields to `remote_url`.
        let value = json!({ "url": "", "remote_url": "https://example.com/b.mp4" });
        let reference = VideoReference::resolve(&value);
        assert_eq!(reference.url, "https://example.com/b.mp4");
    }

    #[test]
    fn test_resolve_attribute_object() {
        let file = VideoFile {
            transfer_method: Some("local_file".to_string()),
            url: Some("/files/upload/42".to_string()),
            ..VideoFile::default()
        };
        let reference = VideoReference::resolve(&file);
        assert_eq!(reference.transfer_method, "local_file");
        assert_eq!(reference.url, "/files/upload/42");
        assert_eq!(reference.filename, DEFAULT_FILENAME);
        assert_eq!(reference.extension, DEFAULT_EXTENSION);
    }

    #[test]
    fn test_resolve_null_field_takes_default() {
        let value = json!({ "filename": null });
        let reference = VideoReference::resolve(&value);
        assert_eq!(reference.filename, DEFAULT_FILENAME);
    }
}
