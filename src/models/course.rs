//! Course and catalog models.
//!
//! A course groups its lecture and recitation sections. The catalog is the
//! read-only input of every pipeline stage: it is loaded in full before
//! generation starts and is never mutated afterwards.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;

use super::{Section, SectionKind};
use crate::error::{Error, Result};
use crate::validation::validate_catalog;

/// A course and its sections.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Course {
    /// Course identifier (e.g. `CS-101`).
    pub id: String,
    /// Lecture and recitation sections, in catalog order.
    pub sections: Vec<Section>,
}

impl Course {
    /// Creates a course with no sections.
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            sections: Vec::new(),
        }
    }

    /// Adds a section.
    pub fn with_section(mut self, section: Section) -> Self {
        self.sections.push(section);
        self
    }

    /// Sections of the given kind, in catalog order.
    pub fn sections_of(&self, kind: SectionKind) -> impl Iterator<Item = &Section> + '_ {
        self.sections.iter().filter(move |s| s.kind == kind)
    }

    /// Lecture sections, in catalog order.
    pub fn lectures(&self) -> impl Iterator<Item = &Section> + '_ {
        self.sections_of(SectionKind::Lecture)
    }

    /// Recitation sections, in catalog order.
    pub fn recitations(&self) -> impl Iterator<Item = &Section> + '_ {
        self.sections_of(SectionKind::Recitation)
    }

    /// Whether the course offers at least one recitation.
    pub fn has_recitations(&self) -> bool {
        self.recitations().next().is_some()
    }
}

/// Validated, indexed course catalog.
///
/// # Example
///
/// ```
/// use u_timetable::models::{Catalog, Course, Section, Weekday};
///
/// let catalog = Catalog::new(vec![
///     Course::new("CS-101").with_section(
///         Section::lecture("CS-101-A").with_meeting(Weekday::Mon, 9.0, 10.0),
///     ),
/// ])
/// .unwrap();
/// assert!(catalog.section("CS-101-A").is_some());
/// ```
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    courses: Vec<Course>,
    /// section id → (course index, section index)
    index: HashMap<String, (usize, usize)>,
}

impl Catalog {
    /// Builds a catalog, rejecting structurally invalid input.
    pub fn new(courses: Vec<Course>) -> Result<Self> {
        validate_catalog(&courses).map_err(Error::InvalidCatalog)?;

        let mut index = HashMap::new();
        for (ci, course) in courses.iter().enumerate() {
            for (si, section) in course.sections.iter().enumerate() {
                index.insert(section.id.clone(), (ci, si));
            }
        }

        Ok(Self { courses, index })
    }

    /// Parses a JSON array of courses.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let courses: Vec<Course> = serde_json::from_str(json)?;
        Self::new(courses)
    }

    /// Reads and parses a JSON catalog file.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|source| Error::DataUnavailable {
            path: path.to_path_buf(),
            source,
        })?;
        let catalog = Self::from_json_str(&json)?;
        tracing::debug!(
            path = %path.display(),
            courses = catalog.course_count(),
            sections = catalog.section_count(),
            "catalog loaded"
        );
        Ok(catalog)
    }

    /// All courses, in catalog order.
    pub fn courses(&self) -> &[Course] {
        &self.courses
    }

    /// Number of courses.
    pub fn course_count(&self) -> usize {
        self.courses.len()
    }

    /// Number of sections across all courses.
    pub fn section_count(&self) -> usize {
        self.index.len()
    }

    /// Looks up a section by id.
    pub fn section(&self, section_id: &str) -> Option<&Section> {
        self.index
            .get(section_id)
            .map(|&(ci, si)| &self.courses[ci].sections[si])
    }

    /// Looks up a course by id.
    pub fn course(&self, course_id: &str) -> Option<&Course> {
        self.courses.iter().find(|c| c.id == course_id)
    }

    /// All lecture sections, course by course in catalog order.
    pub fn lectures(&self) -> impl Iterator<Item = &Section> + '_ {
        self.courses.iter().flat_map(|c| c.lectures())
    }

    /// Courses that offer recitations, in catalog order.
    pub fn courses_with_recitations(&self) -> impl Iterator<Item = &Course> + '_ {
        self.courses.iter().filter(|c| c.has_recitations())
    }
}
