//! Weekly candidate (generated timetable) model.

use serde::{Deserialize, Serialize};

use super::course_id_of;

/// A generated weekly timetable.
///
/// Holds at most one lecture section per course and at most one recitation
/// section per course. Lectures are fixed when the candidate is created;
/// recitations are only ever appended.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeeklyCandidate {
    /// Lecture section ids.
    pub lectures: Vec<String>,
    /// Recitation section ids, in placement order.
    pub recitations: Vec<String>,
    /// Courses that offer recitations but got none because no recitation
    /// section fit around the rest of the timetable.
    pub unplaced_recitations: Vec<String>,
}

impl WeeklyCandidate {
    /// Creates a candidate from lecture section ids.
    pub fn from_lectures(lectures: Vec<String>) -> Self {
        Self {
            lectures,
            ..Default::default()
        }
    }

    /// All section ids: lectures first, then recitations.
    pub fn section_ids(&self) -> impl Iterator<Item = &str> + '_ {
        self.lectures
            .iter()
            .chain(self.recitations.iter())
            .map(String::as_str)
    }

    /// Total number of sections.
    pub fn section_count(&self) -> usize {
        self.lectures.len() + self.recitations.len()
    }

    /// Course ids of the lectures, in lecture order.
    pub fn course_ids(&self) -> impl Iterator<Item = &str> + '_ {
        self.lectures.iter().map(|id| course_id_of(id))
    }

    /// Whether a lecture of the course is present.
    pub fn has_course(&self, course_id: &str) -> bool {
        self.course_ids().any(|c| c == course_id)
    }

    /// Whether every course wanting a recitation received one.
    pub fn is_fully_placed(&self) -> bool {
        self.unplaced_recitations.is_empty()
    }
}
