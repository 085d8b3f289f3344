//! Per-weekday interval projection.
//!
//! Projects lecture meetings onto a single weekday as [`DayInterval`]s.
//! Each interval carries a jittered copy of its end time used only for
//! ordering: the jitter reorders intervals with equal end times, but is
//! smaller than the catalog's time granularity so it never reorders
//! intervals whose real end times differ. Compatibility checks always use
//! the real end time.

use rand::Rng;

use crate::models::{Catalog, Section, Weekday};

/// A meeting projected onto one weekday.
#[derive(Debug, Clone)]
pub struct DayInterval {
    /// Start time (inclusive).
    pub start: f64,
    /// Real end time (exclusive).
    pub end: f64,
    /// End time plus tie-breaking jitter; sort key only.
    pub sort_end: f64,
    /// Derived course id.
    pub course_id: String,
    /// Section id.
    pub section_id: String,
}

impl DayInterval {
    /// Creates an interval without jitter.
    pub fn new(
        start: f64,
        end: f64,
        course_id: impl Into<String>,
        section_id: impl Into<String>,
    ) -> Self {
        Self {
            start,
            end,
            sort_end: end,
            course_id: course_id.into(),
            section_id: section_id.into(),
        }
    }

    /// Sets the jittered sort key.
    pub fn with_jitter(mut self, jitter: f64) -> Self {
        self.sort_end = self.end + jitter;
        self
    }

    /// Whether `next` may directly follow `self` in a chain.
    ///
    /// Requires time disjointness and different courses. Only checked
    /// between adjacent chain members.
    #[inline]
    pub fn precedes(&self, next: &Self) -> bool {
        self.end <= next.start && self.course_id != next.course_id
    }
}

// Equality ignores the jitter so repeated samples can be compared.
impl PartialEq for DayInterval {
    fn eq(&self, other: &Self) -> bool {
        self.start == other.start
            && self.end == other.end
            && self.section_id == other.section_id
            && self.course_id == other.course_id
    }
}

/// Builds one interval per meeting on `day`, drawing fresh jitter in
/// `[0, jitter)` for every interval.
pub fn build_day_intervals<'a, I, R>(
    sections: I,
    day: Weekday,
    jitter: f64,
    rng: &mut R,
) -> Vec<DayInterval>
where
    I: IntoIterator<Item = &'a Section>,
    R: Rng,
{
    let mut intervals = Vec::new();
    for section in sections {
        for meeting in section.meetings_on(day) {
            let offset = rng.random::<f64>() * jitter;
            intervals.push(
                DayInterval::new(meeting.start, meeting.end, section.course_id(), &section.id)
                    .with_jitter(offset),
            );
        }
    }
    intervals
}

/// Builds the lecture intervals of the whole catalog for `day`.
pub fn lecture_intervals<R: Rng>(
    catalog: &Catalog,
    day: Weekday,
    jitter: f64,
    rng: &mut R,
) -> Vec<DayInterval> {
    build_day_intervals(catalog.lectures(), day, jitter, rng)
}
