//! Application configuration.
//!
//! UI copy and the uploader tunables used by the widget. Behavioral
//! defaults live in [`pdfdrop::UploaderConfig`]; this module only decides
//! which configuration the page mounts with and how it is described.

use pdfdrop::{format_file_size, UploaderConfig};

/// Page and widget title.
pub const APP_NAME: &str = "PDF Uploader";

/// Line under the title.
pub const APP_TAGLINE: &str = "Drag and drop your PDF files or click to browse";

/// `accept` attribute of the file input.
///
/// Only a hint for the native picker; the media type check in
/// [`pdfdrop::UploadState::accept`] is what actually filters.
pub const FILE_INPUT_ACCEPT: &str = ".pdf,application/pdf";

/// Configuration the page mounts the widget with.
pub fn uploader_config() -> UploaderConfig {
    UploaderConfig::default()
}

/// Hint shown under the drop zone, derived from the enforced limit.
pub fn limit_hint(config: &UploaderConfig) -> String {
    format!(
        "Supports: PDF files up to {} each",
        format_file_size(config.max_file_size)
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_limit_hint_matches_enforced_limit() {
        assert_eq!(
            limit_hint(&uploader_config()),
            "Supports: PDF files up to 10 MB each"
        );

        let config = UploaderConfig {
            max_file_size: 512 * 1024,
            ..Default::default()
        };
        assert_eq!(limit_hint(&config), "Supports: PDF files up to 512 KB each");
    }

    #[test]
    fn test_mounted_config_is_valid() {
        assert!(uploader_config().validate().is_ok());
    }
}
