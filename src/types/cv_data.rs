// src/types/cv_data.rs
//! CV input snapshot as captured by the form

use serde::{Deserialize, Serialize};

// ===== Snapshot =====

/// Everything the form holds at one point in time.
///
/// German field names used by the browser form are accepted as aliases,
/// so a snapshot exported from the form can be fed in without mapping.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CvSnapshot {
    pub personal_data: PersonalData,
    #[serde(alias = "ausbildungen")]
    pub education: Vec<TimelineEntry>,
    #[serde(alias = "berufserfahrungen")]
    pub work_experience: Vec<TimelineEntry>,
    #[serde(alias = "kurse")]
    pub courses: Vec<CourseEntry>,
    #[serde(alias = "auszeichnungen")]
    pub awards: Vec<AwardEntry>,
    #[serde(alias = "kenntnisse")]
    pub skills: String,
    #[serde(alias = "sprachen")]
    pub languages: Vec<LanguageEntry>,
    #[serde(alias = "interessen")]
    pub interests: String,
    #[serde(flatten)]
    pub theme: ThemeFlags,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PersonalData {
    pub name: String,
    #[serde(alias = "geburtsdatum")]
    pub birth_date: String,
    #[serde(alias = "geburtsort")]
    pub birth_place: String,
    #[serde(alias = "adresse")]
    pub address: String,
    #[serde(alias = "telefon")]
    pub phone: String,
    pub email: String,
    pub photo_url: String,
}

/// A bounded period, used for both education and work experience.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TimelineEntry {
    pub id: u64,
    pub title: String,
    pub subtitle: String,
    pub date_from: String,
    pub date_to: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CourseEntry {
    pub id: u64,
    pub title: String,
    #[serde(alias = "anbieter")]
    pub provider: String,
    #[serde(alias = "datum")]
    pub date: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AwardEntry {
    pub id: u64,
    pub title: String,
    #[serde(alias = "verliehen")]
    pub granted_by: String,
    #[serde(alias = "datum")]
    pub date: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LanguageEntry {
    pub id: u64,
    #[serde(alias = "sprache")]
    pub language: String,
    /// One of the proficiency labels; unknown labels are kept as-is.
    #[serde(alias = "niveau")]
    pub level: String,
}

/// Theme toggles owned by the view layer. The two flags are independent:
/// one themes the formatted document, the other the on-screen zoom controls.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ThemeFlags {
    #[serde(rename = "isA4Dark", alias = "isDarkMode")]
    pub a4_dark: bool,
    #[serde(rename = "isSPADark", alias = "isSPADarkMode")]
    pub spa_dark: bool,
}
