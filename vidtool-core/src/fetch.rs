//! Retrieval of video bytes for both transfer methods.
//!
//! One unconditional blocking GET per invocation: no retries, no timeout
//! override, no streaming. Remote references must carry an http(s) scheme;
//! host-local references must be `/files/...` paths resolved against the
//! configured base address.

use std::str::FromStr;

use crate::config::{CoreConfig, FILE_URL_PREFIX};
use crate::error::{CoreError, CoreResult};
use crate::utils::{extension_of, filename_from_url};
use crate::video_ref::VideoReference;

/// How the input video was supplied by the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransferMethod {
    /// A host-managed file, referenced by a `/files/...` path.
    LocalFile,
    /// A fully-qualified remote URL.
    RemoteUrl,
}

impl FromStr for TransferMethod {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "local_file" => Ok(Self::LocalFile),
            "remote_url" => Ok(Self::RemoteUrl),
            other => Err(CoreError::UnsupportedMethod(other.to_string())),
        }
    }
}

/// Raw bytes of a fetched video plus its resolved naming.
#[derive(Debug, Clone)]
pub struct FetchedPayload {
    pub bytes: Vec<u8>,
    pub filename: String,
    pub extension: String,
}

/// Fetches the referenced video, dispatching on the transfer method.
pub fn fetch_video(config: &CoreConfig, video: &VideoReference) -> CoreResult<FetchedPayload> {
    match video.transfer_method.parse::<TransferMethod>()? {
        TransferMethod::RemoteUrl => fetch_remote(video),
        TransferMethod::LocalFile => fetch_local(config, video),
    }
}

fn fetch_remote(video: &VideoReference) -> CoreResult<FetchedPayload> {
    validate_remote_url(&video.url)?;
    let bytes = http_get(&video.url)?;

    // Naming comes from the URL path when the caller left it blank; the
    // extension always tracks the URL so the temp suffix matches the payload.
    let derived = filename_from_url(&video.url);
    let extension = extension_of(&derived).unwrap_or_else(|| ".mp4".to_string());
    let filename = if video.filename.is_empty() {
        derived
    } else {
        video.filename.clone()
    };

    Ok(FetchedPayload {
        bytes,
        filename,
        extension,
    })
}

fn fetch_local(config: &CoreConfig, video: &VideoReference) -> CoreResult<FetchedPayload> {
    validate_local_url(&video.url)?;
    let full_url = format!("{}{}", config.file_base_url, video.url);
    let bytes = http_get(&full_url)?;

    Ok(FetchedPayload {
        bytes,
        filename: video.filename.clone(),
        extension: video.extension.clone(),
    })
}

/// Checks that a remote URL carries an http(s) scheme.
pub fn validate_remote_url(url: &str) -> CoreResult<()> {
    if url.starts_with("http://") || url.starts_with("https://") {
        Ok(())
    } else {
        Err(CoreError::InvalidInput(format!(
            "remote URL '{url}' is missing an http:// or https:// scheme"
        )))
    }
}

/// Checks that a host-local URL is a `/files/...` path.
pub fn validate_local_url(url: &str) -> CoreResult<()> {
    if url.starts_with(FILE_URL_PREFIX) {
        Ok(())
    } else {
        Err(CoreError::InvalidInput(format!(
            "local file URL '{url}' must start with {FILE_URL_PREFIX}"
        )))
    }
}

fn http_get(url: &str) -> CoreResult<Vec<u8>> {
    log::debug!("Fetching {url}");
    let response = reqwest::blocking::get(url)?;
    let status = response.status();
    if status != reqwest::StatusCode::OK {
        log::warn!("Fetch of {url} returned HTTP {status}");
        return Err(CoreError::FetchFailed {
            url: url.to_string(),
            status: status.as_u16(),
        });
    }
    Ok(response.bytes()?.to_vec())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transfer_method_parsing() {
        assert_eq!(
            "local_file".parse::<TransferMethod>().unwrap(),
            TransferMethod::LocalFile
        );
        assert_eq!(
            "remote_url".parse::<TransferMethod>().unwrap(),
            TransferMethod::RemoteUrl
        );

        let err = "carrier_pigeon".parse::<TransferMethod>().unwrap_err();
        assert!(matches!(err, CoreError::UnsupportedMethod(ref m) if m == "carrier_pigeon"));
    }

    #[test]
    fn test_validate_remote_url() {
        assert!(validate_remote_url("http://example.com/a.mp4").is_ok());
        assert!(validate_remote_url("https://example.com/a.mp4").is_ok());
        assert!(matches!(
            validate_remote_url("ftp://example.com/a.mp4"),
            Err(CoreError::InvalidInput(_))
        ));
        assert!(matches!(
            validate_remote_url(""),
            Err(CoreError::InvalidInput(_))
        ));
    }

    #[test]
    fn test_validate_local_url() {
        assert!(validate_local_url("/files/upload/42").is_ok());
        assert!(matches!(
            validate_local_url("/uploads/42"),
            Err(CoreError::InvalidInput(_))
        ));
        assert!(matches!(
            validate_local_url(""),
            Err(CoreError::InvalidInput(_))
        ));
    }
}
