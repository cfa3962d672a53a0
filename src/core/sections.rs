// src/core/sections.rs
//! Ordering and presence checks shared by all repeatable CV sections

use std::cmp::Reverse;

use crate::core::date::{parse_date_at, DateOrdinal};
use crate::types::{AwardEntry, CourseEntry, LanguageEntry, TimelineEntry};

/// An entry that can be placed on the CV timeline.
pub trait Dated {
    /// Free-text date the entry is ordered by.
    fn sort_date(&self) -> &str;
}

/// An entry that has something worth rendering.
pub trait HasContent {
    fn has_content(&self) -> bool;
}

impl Dated for TimelineEntry {
    fn sort_date(&self) -> &str {
        if self.date_to.is_empty() {
            &self.date_from
        } else {
            &self.date_to
        }
    }
}

impl Dated for CourseEntry {
    fn sort_date(&self) -> &str {
        &self.date
    }
}

impl Dated for AwardEntry {
    fn sort_date(&self) -> &str {
        &self.date
    }
}

impl HasContent for TimelineEntry {
    fn has_content(&self) -> bool {
        !self.title.is_empty()
            || !self.subtitle.is_empty()
            || !self.date_from.is_empty()
            || !self.date_to.is_empty()
            || self.description.as_deref().is_some_and(|d| !d.is_empty())
    }
}

impl HasContent for CourseEntry {
    fn has_content(&self) -> bool {
        !self.title.is_empty() || !self.provider.is_empty() || !self.date.is_empty()
    }
}

impl HasContent for AwardEntry {
    fn has_content(&self) -> bool {
        !self.title.is_empty() || !self.granted_by.is_empty() || !self.date.is_empty()
    }
}

impl HasContent for LanguageEntry {
    fn has_content(&self) -> bool {
        !self.language.is_empty()
    }
}

/// Newest first, as a new list. The sort is stable: entries with the same
/// ordinal keep their input order.
pub fn sort_newest_first<T>(items: &[T], now: DateOrdinal) -> Vec<T>
where
    T: Dated + Clone,
{
    let mut sorted = items.to_vec();
    sorted.sort_by_cached_key(|item| Reverse(parse_date_at(item.sort_date(), now)));
    sorted
}

/// True when at least one entry has displayable content. An empty list never does.
pub fn has_any<T: HasContent>(items: &[T]) -> bool {
    items.iter().any(HasContent::has_content)
}
