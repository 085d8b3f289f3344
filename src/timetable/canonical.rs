//! Week-level canonicalization and global conflict checking.
//!
//! Turns composed weeks into canonical candidates:
//! 1. Stable de-duplication of section ids.
//! 2. One lecture per course, chosen uniformly among the course's ids.
//!    Composition across days reintroduces course repeats that the
//!    per-day reduction cannot see, so this second reduction is required.
//! 3. Global non-overlap check over all meetings of the chosen sections.
//!
//! Identical canonical candidates from different composed weeks are kept
//! once.

use std::collections::{BTreeSet, HashMap, HashSet};

use rand::prelude::IndexedRandom;
use rand::Rng;

use super::compose::ComposedWeek;
use crate::models::{course_id_of, Catalog, WeeklyCandidate};

/// Removes repeated ids, keeping first occurrences in order.
pub fn dedup_stable(ids: &[String]) -> Vec<String> {
    let mut seen = HashSet::new();
    ids.iter()
        .filter(|id| seen.insert(id.as_str()))
        .cloned()
        .collect()
}

/// Keeps one id per derived course id, picked uniformly at random.
///
/// Courses appear in order of first occurrence.
pub fn choose_one_per_course<R: Rng>(ids: &[String], rng: &mut R) -> Vec<String> {
    let mut order: Vec<&str> = Vec::new();
    let mut groups: HashMap<&str, Vec<&String>> = HashMap::new();
    for id in ids {
        let course = course_id_of(id);
        let members = groups.entry(course).or_default();
        if members.is_empty() {
            order.push(course);
        }
        members.push(id);
    }

    order
        .iter()
        .filter_map(|course| groups[course].choose(rng).map(|id| (*id).clone()))
        .collect()
}

/// Whether the meetings of the given sections are pairwise disjoint.
///
/// All meetings are placed on one weekly timeline ordered by
/// `(weekday, start)`; the set is conflict-free iff no meeting starts
/// before its predecessor on the timeline ends. Ids unknown to the
/// catalog contribute no meetings.
pub fn is_conflict_free<'a, I>(catalog: &Catalog, section_ids: I) -> bool
where
    I: IntoIterator<Item = &'a str>,
{
    let mut slots: Vec<(usize, f64, f64)> = section_ids
        .into_iter()
        .filter_map(|id| catalog.section(id))
        .flat_map(|s| s.meetings.iter().map(|m| (m.day.index(), m.start, m.end)))
        .collect();

    slots.sort_by(|a, b| a.0.cmp(&b.0).then(a.1.total_cmp(&b.1)));

    slots
        .windows(2)
        .all(|pair| pair[0].0 != pair[1].0 || pair[1].1 >= pair[0].2)
}

/// Reduces composed weeks to canonical, conflict-free candidates.
pub fn canonicalize<R: Rng>(
    catalog: &Catalog,
    composed: &[ComposedWeek],
    rng: &mut R,
) -> Vec<WeeklyCandidate> {
    let mut seen: HashSet<BTreeSet<String>> = HashSet::new();
    let mut candidates = Vec::new();
    let mut rejected = 0usize;

    for week in composed {
        let unique = dedup_stable(week);
        let chosen = choose_one_per_course(&unique, rng);

        if !is_conflict_free(catalog, chosen.iter().map(String::as_str)) {
            rejected += 1;
            continue;
        }

        let key: BTreeSet<String> = chosen.iter().cloned().collect();
        if seen.insert(key) {
            candidates.push(WeeklyCandidate::from_lectures(chosen));
        }
    }

    tracing::debug!(
        composed = composed.len(),
        rejected,
        canonical = candidates.len(),
        "candidates canonicalized"
    );
    candidates
}
