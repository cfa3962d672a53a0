// src/core/mod.rs
//! CV data derivation: pure functions over an input snapshot

pub mod date;
pub mod deriver;
pub mod locale;
pub mod proficiency;
pub mod sections;
pub mod snapshot;
pub mod tags;

pub use date::{is_ongoing, now_ordinal, parse_date, parse_date_at, DateOrdinal};
pub use deriver::{derive_cv_view, CvDeriver};
pub use locale::{birth_info, DateFormatter, GermanDateFormatter};
pub use proficiency::{level_table, level_value, ProficiencyLevel};
pub use sections::{has_any, sort_newest_first, Dated, HasContent};
pub use snapshot::load_snapshot;
pub use tags::split_tags;
