// src/core/tags.rs

/// Split a comma-separated tag string (skills, interests) into trimmed,
/// non-empty pieces. Order is kept and duplicates stay.
pub fn split_tags(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|piece| !piece.is_empty())
        .map(str::to_string)
        .collect()
}
