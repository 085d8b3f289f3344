//! Weekly class timetable generation for the U-Engine ecosystem.
//!
//! Generates candidate weekly timetables from a catalog of course sections
//! such that no two meetings overlap and each course contributes at most
//! one lecture and at most one recitation.
//!
//! # Modules
//!
//! - **`models`**: Domain types: `Course`, `Section`, `Meeting`, `Weekday`,
//!   `Catalog`, `WeeklyCandidate`
//! - **`timetable`**: Generation pipeline: per-day interval DP, cross-day
//!   composition, canonicalization, course-count sampling, recitation
//!   placement, and the multi-run search
//! - **`validation`**: Catalog integrity checks (duplicate IDs, malformed
//!   section IDs, invalid meeting times)
//! - **`config`**: `SearchConfig` tunables
//!
//! # Guarantees
//!
//! Every returned timetable is conflict-free and course-unique. The search
//! is not exhaustive: chains are optimal per weekday only, and recitation
//! placement is first-fit.
//!
//! # Example
//!
//! ```
//! use u_timetable::{search, Catalog, SearchConfig};
//!
//! let catalog = Catalog::from_json_str(r#"[
//!     {"id": "CS-101", "sections": [
//!         {"id": "CS-101-A", "activity": "Lecture",
//!          "meetings": [{"day": "M", "start": 9, "end": 10}]},
//!         {"id": "CS-101-R1", "activity": "Recitation",
//!          "meetings": [{"day": "T", "start": 9, "end": 10}]}
//!     ]}
//! ]"#).unwrap();
//!
//! let outcome = search(&catalog, &SearchConfig::default().with_runs(3)).unwrap();
//! let best = &outcome.candidates[0];
//! assert_eq!(best.lectures, vec!["CS-101-A"]);
//! assert_eq!(best.recitations, vec!["CS-101-R1"]);
//! ```
//!
//! # References
//!
//! - Kleinberg & Tardos (2005), "Algorithm Design", Ch. 6.1
//! - Pinedo (2016), "Scheduling: Theory, Algorithms, and Systems"

pub mod config;
pub mod error;
pub mod models;
pub mod timetable;
pub mod validation;

pub use config::SearchConfig;
pub use error::{Error, Result};
pub use models::{Catalog, WeeklyCandidate};
pub use timetable::{search, SearchOutcome, TimetableGenerator};
