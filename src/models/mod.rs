//! Timetable domain models.
//!
//! Provides the core data types for representing a course catalog
//! and the weekly timetables generated from it.
//!
//! # Domain Mappings
//!
//! | u-timetable | University | Training Center |
//! |-------------|-----------|-----------------|
//! | Course | Course (e.g. `CS-101`) | Program |
//! | Section | Lecture / recitation section | Class group |
//! | Meeting | Weekly class slot | Session |
//! | WeeklyCandidate | Student timetable | Trainee plan |
//!
//! # Identifiers
//!
//! Section ids are structured as `<dept>-<number>-<sectionTag>`. The course
//! id is always derived from the first two dash-delimited tokens, see
//! [`course_id_of`].

mod candidate;
mod course;
mod meeting;
mod section;

pub use candidate::WeeklyCandidate;
pub use course::{Catalog, Course};
pub use meeting::{Meeting, Weekday};
pub use section::{course_id_of, Section, SectionKind};
