// src/core/proficiency.rs
use serde::{Deserialize, Serialize};

use crate::types::LevelInfo;

/// Language proficiency, lowest to highest. The order drives the level bars.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum ProficiencyLevel {
    #[serde(rename = "Grundkenntnisse")]
    Basic,
    #[serde(rename = "Konversationsfähig")]
    Conversational,
    #[serde(rename = "Gut")]
    Good,
    #[serde(rename = "Professionell")]
    Professional,
    #[serde(rename = "Fließend")]
    Fluent,
    #[serde(rename = "Muttersprache")]
    Native,
}

impl ProficiencyLevel {
    pub const ALL: [Self; 6] = [
        Self::Basic,
        Self::Conversational,
        Self::Good,
        Self::Professional,
        Self::Fluent,
        Self::Native,
    ];

    /// Label as shown in the form.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Basic => "Grundkenntnisse",
            Self::Conversational => "Konversationsfähig",
            Self::Good => "Gut",
            Self::Professional => "Professionell",
            Self::Fluent => "Fließend",
            Self::Native => "Muttersprache",
        }
    }

    pub fn value(&self) -> u8 {
        match self {
            Self::Basic => 1,
            Self::Conversational => 2,
            Self::Good => 3,
            Self::Professional => 4,
            Self::Fluent => 5,
            Self::Native => 6,
        }
    }

    /// Exact, case-sensitive label lookup.
    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|level| level.label() == label)
    }
}

/// Numeric value for a proficiency label; unknown labels map to 0.
pub fn level_value(label: &str) -> u8 {
    ProficiencyLevel::from_label(label).map_or(0, |level| level.value())
}

pub fn level_table() -> Vec<LevelInfo> {
    ProficiencyLevel::ALL
        .iter()
        .map(|level| LevelInfo {
            label: level.label().to_string(),
            value: level.value(),
        })
        .collect()
}
