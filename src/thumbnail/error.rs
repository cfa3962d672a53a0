//! Error types for the thumbnail converter.

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while converting HTML documents to PNG.
///
/// Only [`ThumbnailError::DirectoryAccess`] stops a run; everything else is
/// reported for the file at hand and the run moves on.
#[derive(Debug, Error)]
pub enum ThumbnailError {
    /// The input or output directory cannot be created or listed.
    #[error("Cannot access directory {}: {source}", path.display())]
    DirectoryAccess {
        path: PathBuf,
        source: std::io::Error,
    },

    /// The browser process could not be started.
    #[error("Failed to launch browser {}: {source}", browser.display())]
    Browser {
        browser: PathBuf,
        source: std::io::Error,
    },

    /// The browser did not finish in time.
    #[error("Browser timed out after {seconds}s on {file}")]
    Timeout { file: String, seconds: u64 },

    /// The natural size of the document could not be determined.
    #[error("Could not measure {file}: {reason}")]
    Measure { file: String, reason: String },

    /// Rendering or writing the image failed.
    #[error("Failed to render {file}: {reason}")]
    Render { file: String, reason: String },
}

impl ThumbnailError {
    pub fn is_fatal(&self) -> bool {
        matches!(self, Self::DirectoryAccess { .. })
    }

    pub(crate) fn render(file: &str, reason: impl ToString) -> Self {
        Self::Render {
            file: file.to_string(),
            reason: reason.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_directory_errors_are_fatal() {
        let fatal = ThumbnailError::DirectoryAccess {
            path: PathBuf::from("html"),
            source: std::io::Error::from(std::io::ErrorKind::PermissionDenied),
        };
        assert!(fatal.is_fatal());
        assert!(fatal.to_string().starts_with("Cannot access directory html"));

        let per_file = ThumbnailError::render("card.html", "boom");
        assert!(!per_file.is_fatal());
        assert_eq!(per_file.to_string(), "Failed to render card.html: boom");
    }
}
