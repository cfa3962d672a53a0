// src/core/deriver.rs
//! Assembles the full CV view from one input snapshot

use crate::core::date::{now_ordinal, DateOrdinal};
use crate::core::locale::{birth_info, DateFormatter, GermanDateFormatter};
use crate::core::proficiency::level_value;
use crate::core::sections::{has_any, sort_newest_first};
use crate::core::tags::split_tags;
use crate::types::{CvSnapshot, CvView, LanguageView, PersonalView, SectionFlags};

pub struct CvDeriver<F = GermanDateFormatter> {
    formatter: F,
}

impl CvDeriver {
    pub fn new() -> Self {
        Self::with_formatter(GermanDateFormatter)
    }
}

impl Default for CvDeriver {
    fn default() -> Self {
        Self::new()
    }
}

impl<F: DateFormatter> CvDeriver<F> {
    pub fn with_formatter(formatter: F) -> Self {
        Self { formatter }
    }

    /// Derive against the current wall clock.
    ///
    /// The clock is read once, so every ongoing entry in the snapshot gets
    /// the same ordinal and keeps its input position relative to the others.
    pub fn derive(&self, snapshot: &CvSnapshot) -> CvView {
        self.derive_at(snapshot, now_ordinal())
    }

    pub fn derive_at(&self, snapshot: &CvSnapshot, now: DateOrdinal) -> CvView {
        let personal = &snapshot.personal_data;
        let skills = split_tags(&snapshot.skills);
        let interests = split_tags(&snapshot.interests);

        let flags = SectionFlags {
            education: has_any(&snapshot.education),
            work_experience: has_any(&snapshot.work_experience),
            courses: has_any(&snapshot.courses),
            awards: has_any(&snapshot.awards),
            languages: has_any(&snapshot.languages),
            skills: !skills.is_empty(),
            interests: !interests.is_empty(),
        };

        let languages = snapshot
            .languages
            .iter()
            .map(|entry| LanguageView {
                id: entry.id,
                language: entry.language.clone(),
                level: entry.level.clone(),
                level_value: level_value(&entry.level),
            })
            .collect();

        CvView {
            personal: PersonalView {
                name: personal.name.clone(),
                birth_info: birth_info(personal, &self.formatter),
                address: personal.address.clone(),
                phone: personal.phone.clone(),
                email: personal.email.clone(),
                photo_url: personal.photo_url.clone(),
            },
            education: sort_newest_first(&snapshot.education, now),
            work_experience: sort_newest_first(&snapshot.work_experience, now),
            courses: sort_newest_first(&snapshot.courses, now),
            awards: sort_newest_first(&snapshot.awards, now),
            languages,
            skills,
            interests,
            flags,
            theme: snapshot.theme,
        }
    }
}

/// Convenience wrapper with the default German formatter.
pub fn derive_cv_view(snapshot: &CvSnapshot) -> CvView {
    CvDeriver::new().derive(snapshot)
}
