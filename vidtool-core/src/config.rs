//! Configuration for the vidtool-core library.
//!
//! The only configurable value is the base address used to resolve
//! host-managed `/files/...` references. It is read from the environment
//! once at startup and injected into the pipelines explicitly, so the
//! fetcher itself never touches the environment.

use std::env;

/// Default base address for resolving host-local file references.
pub const DEFAULT_FILE_BASE_URL: &str = "http://api:5001";

/// Environment variable overriding the file base address.
pub const FILE_BASE_URL_ENV: &str = "VIDTOOL_FILE_BASE_URL";

/// Path prefix under which the host serves managed files.
pub const FILE_URL_PREFIX: &str = "/files/";

/// Runtime configuration for the tool pipelines.
#[derive(Debug, Clone)]
pub struct CoreConfig {
    /// Base address prepended to host-relative `/files/...` URLs.
    pub file_base_url: String,
}

impl CoreConfig {
    /// Creates a configuration with an explicit file base address.
    pub fn new(file_base_url: impl Into<String>) -> Self {
        Self {
            file_base_url: file_base_url.into(),
        }
    }

    /// Builds the configuration from the environment, falling back to
    /// [`DEFAULT_FILE_BASE_URL`] when the variable is unset or empty.
    #[must_use]
    pub fn from_env() -> Self {
        env::var(FILE_BASE_URL_ENV)
            .ok()
            .filter(|value| !value.is_empty())
            .map(Self::new)
            .unwrap_or_default()
    }
}

impl Default for CoreConfig {
    fn default() -> Self {
        Self::new(DEFAULT_FILE_BASE_URL)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_base_url() {
        let config = CoreConfig::default();
        assert_eq!(config.file_base_url, DEFAULT_FILE_BASE_URL);
    }

    #[test]
    fn test_explicit_base_url() {
        let config = CoreConfig::new("http://localhost:8080");
        assert_eq!(config.file_base_url, "http://localhost:8080");
    }
}
