//! Section model.
//!
//! A section is one schedulable offering of a course: either a lecture or
//! a recitation, meeting at fixed weekly times.

use serde::{Deserialize, Serialize};

use super::{Meeting, Weekday};

/// Kind of teaching activity a section provides.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SectionKind {
    /// Main lecture (one per course in a timetable).
    #[serde(alias = "LEC")]
    Lecture,
    /// Recitation / tutorial (at most one per course, placed after lectures).
    #[serde(alias = "REC")]
    Recitation,
}

/// A course section with its weekly meetings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Section {
    /// Section identifier, `<dept>-<number>-<sectionTag>`.
    pub id: String,
    /// Lecture or recitation.
    #[serde(rename = "activity")]
    pub kind: SectionKind,
    /// Weekly meetings.
    pub meetings: Vec<Meeting>,
}

impl Section {
    /// Creates a section with no meetings.
    pub fn new(id: impl Into<String>, kind: SectionKind) -> Self {
        Self {
            id: id.into(),
            kind,
            meetings: Vec::new(),
        }
    }

    /// Creates a lecture section.
    pub fn lecture(id: impl Into<String>) -> Self {
        Self::new(id, SectionKind::Lecture)
    }

    /// Creates a recitation section.
    pub fn recitation(id: impl Into<String>) -> Self {
        Self::new(id, SectionKind::Recitation)
    }

    /// Adds a meeting.
    pub fn with_meeting(mut self, day: Weekday, start: f64, end: f64) -> Self {
        self.meetings.push(Meeting::new(day, start, end));
        self
    }

    /// Course id derived from the section id.
    pub fn course_id(&self) -> &str {
        course_id_of(&self.id)
    }

    /// Meetings on a given day.
    pub fn meetings_on(&self, day: Weekday) -> impl Iterator<Item = &Meeting> + '_ {
        self.meetings.iter().filter(move |m| m.day == day)
    }

    /// Whether this is a lecture section.
    #[inline]
    pub fn is_lecture(&self) -> bool {
        self.kind == SectionKind::Lecture
    }
}

/// Derives the course id from a section id.
///
/// Takes the first two dash-delimited tokens: `CS-101-A2` → `CS-101`.
/// Ids with fewer than two dashes are their own course id.
pub fn course_id_of(section_id: &str) -> &str {
    match section_id.match_indices('-').nth(1) {
        Some((pos, _)) => &section_id[..pos],
        None => section_id,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_course_id_of() {
        assert_eq!(course_id_of("CS-101-A"), "CS-101");
        assert_eq!(course_id_of("MATH-221-R3-x"), "MATH-221");
        assert_eq!(course_id_of("CS-101"), "CS-101");
        assert_eq!(course_id_of("CS"), "CS");
        assert_eq!(course_id_of(""), "");
    }

    #[test]
    fn test_section_builder() {
        let s = Section::lecture("CS-101-A")
            .with_meeting(Weekday::Mon, 9.0, 10.0)
            .with_meeting(Weekday::Wed, 9.0, 10.0);

        assert!(s.is_lecture());
        assert_eq!(s.course_id(), "CS-101");
        assert_eq!(s.meetings_on(Weekday::Mon).count(), 1);
        assert_eq!(s.meetings_on(Weekday::Tue).count(), 0);
    }

    #[test]
    fn test_activity_aliases() {
        let json = r#"{"id":"CS-101-R1","activity":"REC","meetings":[{"day":"T","start":9,"end":10}]}"#;
        let s: Section = serde_json::from_str(json).unwrap();
        assert_eq!(s.kind, SectionKind::Recitation);
        assert_eq!(s.meetings[0].day, Weekday::Tue);

        let json = r#"{"id":"CS-101-A","activity":"Lecture","meetings":[]}"#;
        let s: Section = serde_json::from_str(json).unwrap();
        assert_eq!(s.kind, SectionKind::Lecture);
    }

    #[test]
    fn test_unknown_activity_rejected() {
        let json = r#"{"id":"CS-101-L","activity":"Lab","meetings":[]}"#;
        assert!(serde_json::from_str::<Section>(json).is_err());
    }

    #[test]
    fn test_missing_field_rejected() {
        let json = r#"{"id":"CS-101-A","activity":"Lecture"}"#;
        assert!(serde_json::from_str::<Section>(json).is_err());
    }
}
