// src/thumbnail/chromium.rs
//! Headless Chromium renderer
//!
//! Rendering takes two browser runs. The first dumps the DOM of a probe copy
//! of the document, which records the root element's scroll size as
//! attributes once the page has loaded. The second takes the screenshot with
//! the window sized to exactly that content.

use async_trait::async_trait;
use scraper::{Html, Selector};
use std::path::{Path, PathBuf};
use std::process::Output;
use std::time::Duration;
use tokio::process::Command;

use crate::app_log;
use crate::config::ThumbnailConfig;
use crate::thumbnail::error::ThumbnailError;
use crate::thumbnail::{PageRenderer, PageSize};
use crate::utils::{read_file_safe, write_file_safe};

const WIDTH_ATTR: &str = "data-probe-width";
const HEIGHT_ATTR: &str = "data-probe-height";

const PROBE_SCRIPT: &str = "<script>window.addEventListener('load',function(){\
var e=document.documentElement;\
e.setAttribute('data-probe-width',e.scrollWidth);\
e.setAttribute('data-probe-height',e.scrollHeight);});</script>";

#[derive(Debug, Clone)]
pub struct ChromiumRenderer {
    browser: PathBuf,
    device_scale_factor: f32,
    timeout: Duration,
    settle_millis: u64,
}

impl ChromiumRenderer {
    pub fn new(browser: PathBuf) -> Self {
        Self::from_config(&ThumbnailConfig {
            browser,
            ..ThumbnailConfig::default()
        })
    }

    pub fn from_config(config: &ThumbnailConfig) -> Self {
        Self {
            browser: config.browser.clone(),
            device_scale_factor: config.device_scale_factor,
            timeout: Duration::from_secs(config.timeout_seconds),
            settle_millis: config.settle_millis,
        }
    }

    fn base_args(&self) -> Vec<String> {
        vec![
            "--headless=new".to_string(),
            "--no-sandbox".to_string(),
            "--disable-setuid-sandbox".to_string(),
            "--disable-gpu".to_string(),
            "--hide-scrollbars".to_string(),
            format!("--virtual-time-budget={}", self.settle_millis),
        ]
    }

    async fn run(&self, args: Vec<String>, file: &str) -> Result<Output, ThumbnailError> {
        let mut command = Command::new(&self.browser);
        command.args(&args).kill_on_drop(true);

        app_log!(debug, "Running {} {:?}", self.browser.display(), args);

        let output = tokio::time::timeout(self.timeout, command.output())
            .await
            .map_err(|_| ThumbnailError::Timeout {
                file: file.to_string(),
                seconds: self.timeout.as_secs(),
            })?
            .map_err(|source| ThumbnailError::Browser {
                browser: self.browser.clone(),
                source,
            })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(ThumbnailError::render(
                file,
                format!("browser exited with {}: {}", output.status, stderr.trim()),
            ));
        }

        Ok(output)
    }

    /// Natural content size of the document in CSS pixels.
    pub async fn measure(&self, html_path: &Path) -> Result<PageSize, ThumbnailError> {
        let file = display_name(html_path);
        let content = read_file_safe(html_path)
            .await
            .map_err(|e| ThumbnailError::render(&file, format!("{:#}", e)))?;

        let probe_path = probe_path_for(html_path);
        write_file_safe(&probe_path, &inject_probe(&content))
            .await
            .map_err(|e| ThumbnailError::render(&file, format!("{:#}", e)))?;

        let result = match file_url(&probe_path).await {
            Ok(url) => {
                let mut args = self.base_args();
                args.push("--dump-dom".to_string());
                args.push(url);
                self.run(args, &file).await
            }
            Err(e) => Err(e),
        };

        if let Err(e) = tokio::fs::remove_file(&probe_path).await {
            app_log!(warn, "Failed to remove probe {}: {}", probe_path.display(), e);
        }

        let output = result?;
        parse_probe_dimensions(&String::from_utf8_lossy(&output.stdout)).ok_or_else(|| {
            ThumbnailError::Measure {
                file,
                reason: "document size not reported by the browser".to_string(),
            }
        })
    }

    async fn screenshot(
        &self,
        html_path: &Path,
        png_path: &Path,
        size: PageSize,
    ) -> Result<(), ThumbnailError> {
        let file = display_name(html_path);

        let mut args = self.base_args();
        args.push(format!("--screenshot={}", png_path.display()));
        args.push(format!("--window-size={},{}", size.width, size.height));
        args.push(format!("--force-device-scale-factor={}", self.device_scale_factor));
        args.push("--default-background-color=00000000".to_string());
        args.push(file_url(html_path).await?);
        self.run(args, &file).await?;

        tokio::fs::metadata(png_path)
            .await
            .map_err(|_| ThumbnailError::render(&file, "browser wrote no screenshot"))?;
        Ok(())
    }
}

#[async_trait]
impl PageRenderer for ChromiumRenderer {
    async fn render(&self, html_path: &Path, png_path: &Path) -> Result<PageSize, ThumbnailError> {
        let size = self.measure(html_path).await?;
        app_log!(
            debug,
            "Measured {}: {}x{}",
            html_path.display(),
            size.width,
            size.height
        );

        self.screenshot(html_path, png_path, size).await?;
        Ok(size)
    }
}

fn display_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

async fn file_url(path: &Path) -> Result<String, ThumbnailError> {
    let absolute = tokio::fs::canonicalize(path)
        .await
        .map_err(|e| ThumbnailError::render(&display_name(path), e))?;
    Ok(format!("file://{}", absolute.display()).replace(' ', "%20"))
}

/// Hidden sibling of the document, so relative assets still resolve. The
/// `.htm` extension keeps it out of the converter's `.html` scan.
pub fn probe_path_for(html_path: &Path) -> PathBuf {
    let stem = html_path
        .file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_default();
    html_path.with_file_name(format!(".{}.probe.htm", stem))
}

/// Add the size probe just before `</body>`, or at the end when there is none.
pub fn inject_probe(html: &str) -> String {
    match html.to_ascii_lowercase().rfind("</body>") {
        Some(index) => format!("{}{}{}", &html[..index], PROBE_SCRIPT, &html[index..]),
        None => format!("{}{}", html, PROBE_SCRIPT),
    }
}

/// Read the probe attributes back from a dumped DOM.
pub fn parse_probe_dimensions(dom: &str) -> Option<PageSize> {
    let document = Html::parse_document(dom);
    let selector = Selector::parse("html").ok()?;
    let root = document.select(&selector).next()?;

    let width: u32 = root.value().attr(WIDTH_ATTR)?.trim().parse().ok()?;
    let height: u32 = root.value().attr(HEIGHT_ATTR)?.trim().parse().ok()?;

    (width > 0 && height > 0).then_some(PageSize { width, height })
}
