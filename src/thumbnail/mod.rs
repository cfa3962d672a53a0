// src/thumbnail/mod.rs
//! HTML to PNG conversion for template thumbnails
//!
//! Every `.html` file in the input directory is rendered at its natural
//! content size and written to the output directory under the same base name
//! with a `.png` extension.

pub mod chromium;
pub mod error;

pub use chromium::ChromiumRenderer;
pub use error::ThumbnailError;

use async_trait::async_trait;
use serde::Serialize;
use std::path::{Path, PathBuf};

use crate::app_log;
use crate::config::ThumbnailConfig;
use crate::utils::has_suffix;

pub const HTML_SUFFIX: &str = ".html";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PageSize {
    pub width: u32,
    pub height: u32,
}

/// Turns one HTML document into one PNG image.
#[async_trait]
pub trait PageRenderer: Send + Sync {
    async fn render(&self, html_path: &Path, png_path: &Path) -> Result<PageSize, ThumbnailError>;
}

#[derive(Debug, Clone, Serialize)]
pub struct ConvertedFile {
    pub source: PathBuf,
    pub output: PathBuf,
    pub size: PageSize,
}

#[derive(Debug, Clone, Serialize)]
pub struct FailedFile {
    pub source: PathBuf,
    pub error: String,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct ConversionReport {
    pub converted: Vec<ConvertedFile>,
    pub failed: Vec<FailedFile>,
}

impl ConversionReport {
    pub fn total(&self) -> usize {
        self.converted.len() + self.failed.len()
    }
}

pub struct ThumbnailConverter<R> {
    html_dir: PathBuf,
    png_dir: PathBuf,
    renderer: R,
}

impl ThumbnailConverter<ChromiumRenderer> {
    pub fn from_config(config: &ThumbnailConfig) -> Self {
        Self::new(
            config.html_dir.clone(),
            config.png_dir.clone(),
            ChromiumRenderer::from_config(config),
        )
    }
}

impl<R: PageRenderer> ThumbnailConverter<R> {
    pub fn new(html_dir: PathBuf, png_dir: PathBuf, renderer: R) -> Self {
        Self {
            html_dir,
            png_dir,
            renderer,
        }
    }

    pub fn html_dir(&self) -> &Path {
        &self.html_dir
    }

    pub fn png_dir(&self) -> &Path {
        &self.png_dir
    }

    /// Create both directories when missing.
    pub async fn prepare_directories(&self) -> Result<(), ThumbnailError> {
        for dir in [&self.html_dir, &self.png_dir] {
            tokio::fs::create_dir_all(dir)
                .await
                .map_err(|source| ThumbnailError::DirectoryAccess {
                    path: dir.clone(),
                    source,
                })?;
        }
        Ok(())
    }

    /// `.html` files in the input directory, sorted by name.
    pub async fn list_html_files(&self) -> Result<Vec<PathBuf>, ThumbnailError> {
        let directory_error = |source| ThumbnailError::DirectoryAccess {
            path: self.html_dir.clone(),
            source,
        };

        let mut entries = tokio::fs::read_dir(&self.html_dir)
            .await
            .map_err(directory_error)?;

        let mut files = Vec::new();
        while let Some(entry) = entries.next_entry().await.map_err(directory_error)? {
            let path = entry.path();
            let is_file = entry
                .file_type()
                .await
                .map(|file_type| file_type.is_file())
                .unwrap_or(false);

            if is_file && has_suffix(&path, HTML_SUFFIX) {
                files.push(path);
            }
        }

        files.sort();
        Ok(files)
    }

    /// Same base name in the output directory, `.png` extension.
    pub fn output_path(&self, html_path: &Path) -> PathBuf {
        let file_name = html_path.file_name().map(PathBuf::from).unwrap_or_default();
        self.png_dir.join(file_name.with_extension("png"))
    }

    /// Convert every document. Per-file failures are collected in the report;
    /// only directory access errors abort the run.
    pub async fn convert_all(&self) -> Result<ConversionReport, ThumbnailError> {
        self.prepare_directories().await?;
        let files = self.list_html_files().await?;

        let mut report = ConversionReport::default();
        if files.is_empty() {
            app_log!(
                warn,
                "⚠️  No HTML files found in {}",
                self.html_dir.display()
            );
            return Ok(report);
        }

        app_log!(info, "🔄 Converting {} HTML file(s)...", files.len());

        for html_path in files {
            let png_path = self.output_path(&html_path);
            match self.renderer.render(&html_path, &png_path).await {
                Ok(size) => {
                    app_log!(
                        info,
                        "✅ Converted: {} → {} ({}x{})",
                        file_label(&html_path),
                        file_label(&png_path),
                        size.width,
                        size.height
                    );
                    report.converted.push(ConvertedFile {
                        source: html_path,
                        output: png_path,
                        size,
                    });
                }
                Err(e) if e.is_fatal() => return Err(e),
                Err(e) => {
                    app_log!(error, "❌ Error converting {}: {}", file_label(&html_path), e);
                    report.failed.push(FailedFile {
                        source: html_path,
                        error: e.to_string(),
                    });
                }
            }
        }

        app_log!(
            info,
            "✨ Done! Converted {} of {} file(s)",
            report.converted.len(),
            report.total()
        );
        app_log!(info, "📁 Output directory: {}", self.png_dir.display());

        Ok(report)
    }
}

fn file_label(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default()
}
