use serde::{Deserialize, Serialize};

use crate::types::cv_data::{AwardEntry, CourseEntry, ThemeFlags, TimelineEntry};

// ===== Derived View =====

/// Everything a renderer needs, recomputed from one snapshot.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CvView {
    pub personal: PersonalView,
    pub education: Vec<TimelineEntry>,
    pub work_experience: Vec<TimelineEntry>,
    pub courses: Vec<CourseEntry>,
    pub awards: Vec<AwardEntry>,
    pub languages: Vec<LanguageView>,
    pub skills: Vec<String>,
    pub interests: Vec<String>,
    pub flags: SectionFlags,
    pub theme: ThemeFlags,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PersonalView {
    pub name: String,
    /// Formatted birth date and birth place, e.g. `1.1.1990, Berlin`.
    pub birth_info: String,
    pub address: String,
    pub phone: String,
    pub email: String,
    pub photo_url: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LanguageView {
    pub id: u64,
    pub language: String,
    pub level: String,
    /// 1 (basic) to 6 (native), 0 for an unknown label.
    pub level_value: u8,
}

/// Whether a section heading should be rendered at all.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SectionFlags {
    pub education: bool,
    pub work_experience: bool,
    pub courses: bool,
    pub awards: bool,
    pub languages: bool,
    pub skills: bool,
    pub interests: bool,
}

// ===== Helper Responses =====

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParsedDate {
    pub text: String,
    pub ordinal: i64,
    pub ongoing: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LevelInfo {
    pub label: String,
    pub value: u8,
}
