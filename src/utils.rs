// src/utils.rs
use anyhow::{Context, Result};
use std::path::Path;

use crate::app_log;

/// Get file extension in lowercase
pub fn get_file_extension(filename: &str) -> Option<String> {
    Path::new(filename)
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.to_lowercase())
}

/// Validate file extension against allowed types
pub fn validate_file_extension(filename: &str, allowed: &[&str]) -> Result<()> {
    let ext = get_file_extension(filename)
        .ok_or_else(|| anyhow::anyhow!("File has no extension: {}", filename))?;

    if !allowed.contains(&ext.as_str()) {
        anyhow::bail!(
            "Unsupported file extension: {}. Allowed: {:?}",
            ext,
            allowed
        );
    }

    Ok(())
}

/// Case-sensitive suffix check, matching how the converter selects documents.
pub fn has_suffix(path: &Path, suffix: &str) -> bool {
    path.file_name()
        .and_then(|name| name.to_str())
        .is_some_and(|name| name.ends_with(suffix))
}

pub async fn ensure_dir_exists(path: &Path) -> Result<()> {
    if !path.exists() {
        tokio::fs::create_dir_all(path)
            .await
            .with_context(|| format!("Failed to create directory: {}", path.display()))?;
        app_log!(info, "Created directory: {}", path.display());
    }
    Ok(())
}

pub async fn read_file_safe(path: &Path) -> Result<String> {
    tokio::fs::read_to_string(path)
        .await
        .with_context(|| format!("Failed to read file: {}", path.display()))
}

pub async fn write_file_safe(path: &Path, content: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        ensure_dir_exists(parent).await?;
    }

    tokio::fs::write(path, content)
        .await
        .with_context(|| format!("Failed to write file: {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_file_extension() {
        assert_eq!(get_file_extension("cv.json"), Some("json".to_string()));
        assert_eq!(get_file_extension("cv.YAML"), Some("yaml".to_string()));
        assert_eq!(get_file_extension("noext"), None);
    }

    #[test]
    fn test_validate_file_extension() {
        assert!(validate_file_extension("cv.json", &["json", "toml"]).is_ok());
        assert!(validate_file_extension("cv.txt", &["json", "toml"]).is_err());
        assert!(validate_file_extension("noext", &["json"]).is_err());
    }

    #[test]
    fn test_has_suffix() {
        assert!(has_suffix(Path::new("html/card.html"), ".html"));
        assert!(!has_suffix(Path::new("html/card.htm"), ".html"));
        assert!(!has_suffix(Path::new("html/card.HTML"), ".html"));
    }

    #[tokio::test]
    async fn test_write_then_read_creates_parent() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("file.txt");

        write_file_safe(&path, "hello").await.unwrap();

        assert_eq!(read_file_safe(&path).await.unwrap(), "hello");
    }
}
