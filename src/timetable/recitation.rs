//! Greedy recitation placement.
//!
//! # Algorithm
//!
//! For each course (catalog order) that offers recitations and whose
//! lecture is in the candidate, try its recitation sections in catalog
//! order and append the first one that keeps the whole candidate
//! conflict-free. Recitations placed earlier count as occupied time for
//! later courses.
//!
//! # Incompleteness
//!
//! This is a first-fit heuristic: no backtracking over earlier
//! recitation choices and no retry with a different lecture. A feasible
//! placement can exist that it misses. Courses left without a recitation
//! are recorded in [`WeeklyCandidate::unplaced_recitations`].

use std::iter;

use super::canonical::is_conflict_free;
use crate::models::{Catalog, Course, WeeklyCandidate};

/// First-fit recitation placer over a catalog.
#[derive(Debug, Clone, Copy)]
pub struct RecitationPlacer<'a> {
    catalog: &'a Catalog,
}

impl<'a> RecitationPlacer<'a> {
    /// Creates a placer reading sections from `catalog`.
    pub fn new(catalog: &'a Catalog) -> Self {
        Self { catalog }
    }

    /// Appends at most one recitation per present course.
    pub fn place(&self, mut candidate: WeeklyCandidate) -> WeeklyCandidate {
        for course in self.catalog.courses_with_recitations() {
            if !candidate.has_course(&course.id) {
                continue;
            }
            match self.first_fit(&candidate, course) {
                Some(id) => candidate.recitations.push(id),
                None => candidate.unplaced_recitations.push(course.id.clone()),
            }
        }
        candidate
    }

    /// Places recitations in every candidate, then orders the result by
    /// ascending section count (stable).
    pub fn place_all(&self, candidates: Vec<WeeklyCandidate>) -> Vec<WeeklyCandidate> {
        let mut placed: Vec<WeeklyCandidate> =
            candidates.into_iter().map(|c| self.place(c)).collect();
        placed.sort_by_key(WeeklyCandidate::section_count);

        let incomplete = placed.iter().filter(|c| !c.is_fully_placed()).count();
        tracing::debug!(candidates = placed.len(), incomplete, "recitations placed");
        placed
    }

    fn first_fit(&self, candidate: &WeeklyCandidate, course: &Course) -> Option<String> {
        course
            .recitations()
            .find(|rec| {
                is_conflict_free(
                    self.catalog,
                    candidate.section_ids().chain(iter::once(rec.id.as_str())),
                )
            })
            .map(|rec| rec.id.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Section, Weekday};

    fn catalog() -> Catalog {
        Catalog::new(vec![
            Course::new("CS-101")
                .with_section(Section::lecture("CS-101-A").with_meeting(Weekday::Mon, 9.0, 10.0))
                .with_section(Section::recitation("CS-101-R1").with_meeting(Weekday::Tue, 9.0, 10.0))
                .with_section(Section::recitation("CS-101-R2").with_meeting(Weekday::Tue, 11.0, 12.0)),
            Course::new("MA-201")
                .with_section(Section::lecture("MA-201-A").with_meeting(Weekday::Tue, 9.0, 10.5))
                .with_section(Section::recitation("MA-201-R1").with_meeting(Weekday::Tue, 11.0, 12.0)),
            Course::new("PH-110")
                .with_section(Section::lecture("PH-110-A").with_meeting(Weekday::Wed, 13.0, 14.0))
                .with_section(Section::recitation("PH-110-R1").with_meeting(Weekday::Fri, 8.0, 9.0)),
            Course::new("EN-100")
                .with_section(Section::lecture("EN-100-A").with_meeting(Weekday::Thu, 8.0, 9.0)),
        ])
        .unwrap()
    }

    fn lectures(ids: &[&str]) -> WeeklyCandidate {
        WeeklyCandidate::from_lectures(ids.iter().map(|s| s.to_string()).collect())
    }

    #[test]
    fn test_skips_conflicting_recitation() {
        let catalog = catalog();
        let placer = RecitationPlacer::new(&catalog);

        // R1 (Tue 9-10) conflicts with MA-201-A; R2 (Tue 11-12) is free.
        let out = placer.place(lectures(&["CS-101-A", "MA-201-A"]));
        assert_eq!(out.recitations[0], "CS-101-R2");
    }

    #[test]
    fn test_earlier_placement_blocks_later_course() {
        let catalog = catalog();
        let placer = RecitationPlacer::new(&catalog);

        // CS-101-R2 takes Tue 11-12 first, so MA-201's only recitation no longer fits.
        let out = placer.place(lectures(&["CS-101-A", "MA-201-A"]));
        assert_eq!(out.recitations, vec!["CS-101-R2".to_string()]);
        assert_eq!(out.unplaced_recitations, vec!["MA-201".to_string()]);
        assert!(!out.is_fully_placed());
    }

    #[test]
    fn test_only_present_courses_get_recitations() {
        let catalog = catalog();
        let placer = RecitationPlacer::new(&catalog);

        let out = placer.place(lectures(&["PH-110-A", "EN-100-A"]));
        assert_eq!(out.recitations, vec!["PH-110-R1".to_string()]);
        assert!(out.is_fully_placed());
        assert_eq!(out.lectures, vec!["PH-110-A".to_string(), "EN-100-A".to_string()]);
    }

    #[test]
    fn test_first_fit_in_catalog_order() {
        let catalog = catalog();
        let placer = RecitationPlacer::new(&catalog);

        let out = placer.place(lectures(&["CS-101-A"]));
        assert_eq!(out.recitations, vec!["CS-101-R1".to_string()]);
    }

    #[test]
    fn test_place_all_sorted_by_section_count() {
        let catalog = catalog();
        let placer = RecitationPlacer::new(&catalog);

        let out = placer.place_all(vec![
            lectures(&["CS-101-A", "PH-110-A", "EN-100-A"]),
            lectures(&["EN-100-A"]),
            lectures(&["PH-110-A"]),
        ]);
        let counts: Vec<usize> = out.iter().map(WeeklyCandidate::section_count).collect();
        assert_eq!(counts, vec![1, 2, 5]);
        assert_eq!(out[0].lectures, vec!["EN-100-A".to_string()]);
    }
}
