// src/core/snapshot.rs
//! Load a CV snapshot exported from the form

use anyhow::{Context, Result};
use std::path::Path;

use crate::types::CvSnapshot;
use crate::utils::{get_file_extension, read_file_safe, validate_file_extension};

pub const SNAPSHOT_EXTENSIONS: [&str; 4] = ["json", "yaml", "yml", "toml"];

/// Read a snapshot, picking the format from the file extension.
pub async fn load_snapshot(path: &Path) -> Result<CvSnapshot> {
    let filename = path.display().to_string();
    validate_file_extension(&filename, &SNAPSHOT_EXTENSIONS)?;

    let content = read_file_safe(path).await?;
    parse_snapshot(&content, get_file_extension(&filename).as_deref().unwrap_or("json"))
        .with_context(|| format!("Failed to parse snapshot: {}", path.display()))
}

pub fn parse_snapshot(content: &str, extension: &str) -> Result<CvSnapshot> {
    let snapshot = match extension {
        "yaml" | "yml" => serde_yaml::from_str(content).context("Invalid YAML")?,
        "toml" => toml::from_str(content).context("Invalid TOML")?,
        _ => serde_json::from_str(content).context("Invalid JSON")?,
    };
    Ok(snapshot)
}
