//! Timetable candidate generation.
//!
//! Generates conflict-free weekly timetables from a course catalog.
//!
//! # Pipeline
//!
//! | Stage | Module | Output |
//! |-------|--------|--------|
//! | Interval projection | `intervals` | lecture meetings of one weekday |
//! | Day scheduling | `day` | distinct longest chains per weekday |
//! | Composition | `compose` | Mon×Wed×Fri × Tue×Thu week sequences |
//! | Canonicalization | `canonical` | one lecture per course, conflict-free |
//! | Course-count sampling | `credit` | all `k`-course subsets (optional) |
//! | Recitation placement | `recitation` | first-fit recitations, sorted |
//! | Search | `driver` | best of several independently seeded runs |
//!
//! Only per-weekday chains are optimal (longest chain of the day); the
//! week is composed best-effort and may miss larger feasible timetables.
//!
//! # References
//!
//! - Kleinberg & Tardos (2005), "Algorithm Design", Ch. 6.1 (Weighted Interval Scheduling)
//! - Knuth (2011), TAOCP Vol. 4A, 7.2.1.3 (Generating all combinations)

mod canonical;
mod compose;
mod credit;
mod day;
mod driver;
mod intervals;
mod pipeline;
mod recitation;

pub use canonical::{canonicalize, choose_one_per_course, dedup_stable, is_conflict_free};
pub use compose::{compose_week, ComposedWeek, WeekChains};
pub use credit::{for_each_combination, sample_course_subsets};
pub use day::{sample_day_chains, DayChain, DayScheduler};
pub use driver::{run_seed, search, SearchOutcome};
pub use intervals::{build_day_intervals, lecture_intervals, DayInterval};
pub use pipeline::TimetableGenerator;
pub use recitation::RecitationPlacer;
