//! Weekday and meeting (weekly time slot) models.
//!
//! # Time Model
//! Meeting times are plain numbers in a unit chosen by the catalog
//! (typically fractional hours, e.g. `9.5` = 09:30). The unit must be
//! consistent across the whole catalog. Intervals are half-open
//! `[start, end)`: a meeting ending at 10 does not conflict with one
//! starting at 10.

use serde::{Deserialize, Serialize};

/// A teaching weekday.
///
/// Serialized with the single-letter registrar codes `M T W R F`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Weekday {
    /// Monday.
    #[serde(rename = "M")]
    Mon,
    /// Tuesday.
    #[serde(rename = "T")]
    Tue,
    /// Wednesday.
    #[serde(rename = "W")]
    Wed,
    /// Thursday.
    #[serde(rename = "R")]
    Thu,
    /// Friday.
    #[serde(rename = "F")]
    Fri,
}

impl Weekday {
    /// All weekdays in calendar order.
    pub const ALL: [Weekday; 5] = [
        Weekday::Mon,
        Weekday::Tue,
        Weekday::Wed,
        Weekday::Thu,
        Weekday::Fri,
    ];

    /// Position within the week (Mon = 0 .. Fri = 4).
    #[inline]
    pub fn index(self) -> usize {
        self as usize
    }

    /// Registrar code (`M`, `T`, `W`, `R`, `F`).
    pub fn code(self) -> char {
        match self {
            Weekday::Mon => 'M',
            Weekday::Tue => 'T',
            Weekday::Wed => 'W',
            Weekday::Thu => 'R',
            Weekday::Fri => 'F',
        }
    }
}

/// A weekly recurring meeting of a section.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Meeting {
    /// Day of the week.
    pub day: Weekday,
    /// Start time (inclusive).
    pub start: f64,
    /// End time (exclusive).
    pub end: f64,
}

impl Meeting {
    /// Creates a new meeting.
    pub fn new(day: Weekday, start: f64, end: f64) -> Self {
        Self { day, start, end }
    }

    /// Duration (end - start).
    #[inline]
    pub fn duration(&self) -> f64 {
        self.end - self.start
    }

    /// Whether two meetings overlap (same day, intersecting half-open ranges).
    pub fn overlaps(&self, other: &Self) -> bool {
        self.day == other.day && self.start < other.end && other.start < self.end
    }
}
