//! Converts every HTML file in the configured input directory to a PNG in
//! the configured output directory. Takes no arguments.

use anyhow::{Context, Result};
use cv_builder::app_log;
use cv_builder::logging::init_logging;
use cv_builder::thumbnail::ThumbnailConverter;
use cv_builder::AppConfig;

#[tokio::main]
async fn main() -> Result<()> {
    let config = AppConfig::load()?;
    init_logging(&config.logging)?;

    let converter = ThumbnailConverter::from_config(&config.thumbnails);
    app_log!(
        info,
        "Input: {} Output: {}",
        converter.html_dir().display(),
        converter.png_dir().display()
    );

    let report = converter
        .convert_all()
        .await
        .context("❌ Fatal error")?;

    if !report.failed.is_empty() {
        app_log!(warn, "{} file(s) could not be converted", report.failed.len());
    }

    Ok(())
}
