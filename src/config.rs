// src/config.rs
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::info;

pub const CONFIG_FILE: &str = "config.yaml";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub server: ServerSettings,
    pub thumbnails: ThumbnailConfig,
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerSettings {
    pub address: String,
    pub port: u16,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            address: "0.0.0.0".to_string(),
            port: 8000,
        }
    }
}

/// Settings for the HTML to PNG thumbnail tool.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ThumbnailConfig {
    pub html_dir: PathBuf,
    pub png_dir: PathBuf,
    /// Chromium or Chrome executable, looked up on `PATH` when relative.
    pub browser: PathBuf,
    pub device_scale_factor: f32,
    pub timeout_seconds: u64,
    /// Virtual time granted to the page before the DOM is read.
    pub settle_millis: u64,
}

impl Default for ThumbnailConfig {
    fn default() -> Self {
        Self {
            html_dir: PathBuf::from("html"),
            png_dir: PathBuf::from("png"),
            browser: PathBuf::from("chromium"),
            device_scale_factor: 2.0,
            timeout_seconds: 30,
            settle_millis: 5000,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub filter: String,
    pub json_file: Option<PathBuf>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: "cv_builder=info,rocket::server=off".to_string(),
            json_file: None,
        }
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct ConfigFile {
    local: AppConfig,
    production: AppConfig,
}

impl AppConfig {
    /// Load `config.yaml` from the working directory for the current environment.
    /// Without a config file the built-in defaults apply.
    pub fn load() -> Result<Self> {
        let environment = Self::get_environment();
        Self::load_from(Path::new(CONFIG_FILE), &environment)
    }

    pub fn load_from(path: &Path, environment: &str) -> Result<Self> {
        let config = if path.exists() {
            info!(
                "Loading configuration for environment: {} from {}",
                environment,
                path.display()
            );
            let content = std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read {}", path.display()))?;
            Self::from_yaml(&content, environment)
                .with_context(|| format!("Failed to parse {}", path.display()))?
        } else {
            info!("No {} found, using default configuration", path.display());
            Self::default()
        };

        config.with_resolved_paths()
    }

    pub fn from_yaml(content: &str, environment: &str) -> Result<Self> {
        let config_file: ConfigFile = serde_yaml::from_str(content)?;

        Ok(match environment {
            "production" => config_file.production,
            _ => config_file.local,
        })
    }

    fn get_environment() -> String {
        std::env::var("CVBUILDER_ENV")
            .or_else(|_| std::env::var("ENVIRONMENT"))
            .unwrap_or_else(|_| "local".to_string())
    }

    fn with_resolved_paths(mut self) -> Result<Self> {
        let current_dir = std::env::current_dir().context("Failed to get current directory")?;

        self.thumbnails.html_dir = resolve_path(&current_dir, &self.thumbnails.html_dir);
        self.thumbnails.png_dir = resolve_path(&current_dir, &self.thumbnails.png_dir);
        self.logging.json_file = self
            .logging
            .json_file
            .map(|file| resolve_path(&current_dir, &file));

        Ok(self)
    }
}

fn resolve_path(base: &Path, path: &Path) -> PathBuf {
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        base.join(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"
local:
  server:
    port: 9000
production:
  server:
    address: 127.0.0.1
    port: 80
  thumbnails:
    html_dir: /srv/html
    browser: /usr/bin/google-chrome
  logging:
    json_file: /var/log/cvbuilder.json
"#;

    #[test]
    fn test_environment_section_is_selected() {
        let local = AppConfig::from_yaml(SAMPLE, "local").unwrap();
        assert_eq!(local.server.port, 9000);
        assert_eq!(local.server.address, "0.0.0.0");

        let production = AppConfig::from_yaml(SAMPLE, "production").unwrap();
        assert_eq!(production.server.port, 80);
        assert_eq!(production.thumbnails.html_dir, PathBuf::from("/srv/html"));
        assert_eq!(production.thumbnails.png_dir, PathBuf::from("png"));
        assert_eq!(production.thumbnails.device_scale_factor, 2.0);
    }

    #[test]
    fn test_unknown_environment_falls_back_to_local() {
        let config = AppConfig::from_yaml(SAMPLE, "staging").unwrap();
        assert_eq!(config.server.port, 9000);
    }

    #[test]
    fn test_missing_file_uses_defaults() {
        let config =
            AppConfig::load_from(Path::new("/nonexistent/config.yaml"), "local").unwrap();
        assert_eq!(config.server.port, 8000);
        assert!(config.thumbnails.html_dir.is_absolute());
        assert!(config.thumbnails.html_dir.ends_with("html"));
    }

    #[test]
    fn test_invalid_yaml_is_an_error() {
        assert!(AppConfig::from_yaml("local: [unclosed", "local").is_err());
    }
}
