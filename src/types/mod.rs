pub mod cv_data;
pub mod response;

pub use cv_data::{
    AwardEntry, CourseEntry, CvSnapshot, LanguageEntry, PersonalData, ThemeFlags, TimelineEntry,
};
pub use response::{CvView, LanguageView, LevelInfo, ParsedDate, PersonalView, SectionFlags};
