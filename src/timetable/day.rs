//! Single-day chain selection and diversity sampling.
//!
//! # Algorithm
//!
//! A constrained variant of weighted interval scheduling:
//! 1. Sort intervals by jittered end time.
//! 2. DP: `length[i]` = longest chain ending at `i`, `pred[i]` its predecessor.
//!    `j` may precede `i` iff `end[j] <= start[i]` and the courses differ.
//! 3. Backtrack from the first index of maximum length.
//! 4. Reduce to one interval per course, chosen uniformly among the chain
//!    members of that course, in order of first appearance.
//!
//! The course check in step 2 only applies to adjacent chain members, so
//! the raw chain may repeat a course at non-adjacent positions. Step 4 and
//! the week-level canonicalization remove those repeats.
//!
//! # Complexity
//! O(n²) per chain where n = intervals on the day.

use std::collections::HashMap;

use rand::prelude::IndexedRandom;
use rand::Rng;

use super::intervals::{lecture_intervals, DayInterval};
use crate::models::{Catalog, Weekday};

/// An ordered sequence of compatible intervals on one weekday.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DayChain {
    /// Intervals in chronological order.
    pub intervals: Vec<DayInterval>,
}

impl DayChain {
    /// Creates an empty chain.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Number of intervals.
    pub fn len(&self) -> usize {
        self.intervals.len()
    }

    /// Whether the chain has no intervals.
    pub fn is_empty(&self) -> bool {
        self.intervals.is_empty()
    }

    /// Section ids in chain order.
    pub fn section_ids(&self) -> impl Iterator<Item = &str> + '_ {
        self.intervals.iter().map(|iv| iv.section_id.as_str())
    }
}

impl From<Vec<DayInterval>> for DayChain {
    fn from(intervals: Vec<DayInterval>) -> Self {
        Self { intervals }
    }
}

/// Longest-chain scheduler for one weekday.
///
/// # Example
///
/// ```
/// use u_timetable::timetable::{DayInterval, DayScheduler};
/// use rand::SeedableRng;
///
/// let mut scheduler = DayScheduler::new();
/// scheduler.add_interval(DayInterval::new(9.0, 10.0, "A-1", "A-1-x"));
/// scheduler.add_interval(DayInterval::new(9.5, 10.5, "B-1", "B-1-x"));
/// scheduler.add_interval(DayInterval::new(10.0, 11.0, "C-1", "C-1-x"));
///
/// let mut rng = rand::rngs::SmallRng::seed_from_u64(0);
/// let chain = scheduler.find_optimal_chain(&mut rng);
/// assert_eq!(chain.section_ids().collect::<Vec<_>>(), vec!["A-1-x", "C-1-x"]);
/// ```
#[derive(Debug, Clone, Default)]
pub struct DayScheduler {
    intervals: Vec<DayInterval>,
}

impl DayScheduler {
    /// Creates a scheduler with no intervals.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a scheduler from a set of intervals.
    pub fn with_intervals(intervals: Vec<DayInterval>) -> Self {
        Self { intervals }
    }

    /// Registers an interval.
    pub fn add_interval(&mut self, interval: DayInterval) {
        self.intervals.push(interval);
    }

    /// Number of registered intervals.
    pub fn interval_count(&self) -> usize {
        self.intervals.len()
    }

    /// Finds one maximum-length chain, reduced to one interval per course.
    ///
    /// Returns an empty chain when no intervals are registered.
    pub fn find_optimal_chain<R: Rng>(&self, rng: &mut R) -> DayChain {
        let chain = self.longest_chain();
        reduce_per_course(chain, rng)
    }

    /// Steps 1-3: sorted DP and backtracking, without course reduction.
    fn longest_chain(&self) -> Vec<&DayInterval> {
        let mut sorted: Vec<&DayInterval> = self.intervals.iter().collect();
        sorted.sort_by(|a, b| a.sort_end.total_cmp(&b.sort_end));

        let n = sorted.len();
        let mut length = vec![1usize; n];
        let mut pred: Vec<Option<usize>> = vec![None; n];

        for i in 1..n {
            for j in 0..i {
                if sorted[j].precedes(sorted[i]) && length[j] + 1 > length[i] {
                    length[i] = length[j] + 1;
                    pred[i] = Some(j);
                }
            }
        }

        // First index holding the maximum; none for an empty day.
        let mut best: Option<usize> = None;
        for (i, &len) in length.iter().enumerate() {
            if best.map_or(true, |b| len > length[b]) {
                best = Some(i);
            }
        }

        let mut chain = Vec::new();
        let mut cursor = best;
        while let Some(i) = cursor {
            chain.push(sorted[i]);
            cursor = pred[i];
        }
        chain.reverse();
        chain
    }
}

/// Keeps one interval per course, picked uniformly among that course's
/// chain members, ordered by the course's first appearance.
fn reduce_per_course<R: Rng>(chain: Vec<&DayInterval>, rng: &mut R) -> DayChain {
    let mut order: Vec<&str> = Vec::new();
    let mut groups: HashMap<&str, Vec<&DayInterval>> = HashMap::new();
    for &iv in &chain {
        let members = groups.entry(iv.course_id.as_str()).or_default();
        if members.is_empty() {
            order.push(iv.course_id.as_str());
        }
        members.push(iv);
    }

    let intervals = order
        .iter()
        .filter_map(|course| groups[course].choose(rng).map(|iv| (*iv).clone()))
        .collect();
    DayChain { intervals }
}

/// Draws `samples` chains for one weekday and removes exact duplicates.
///
/// Each sample rebuilds the day's intervals with fresh jitter, so equal
/// end times are ordered differently from one sample to the next. The
/// result always holds at least one chain; a day without meetings yields
/// a single empty chain.
pub fn sample_day_chains<R: Rng>(
    catalog: &Catalog,
    day: Weekday,
    samples: usize,
    jitter: f64,
    rng: &mut R,
) -> Vec<DayChain> {
    let mut chains: Vec<DayChain> = Vec::new();
    for _ in 0..samples {
        let scheduler = DayScheduler::with_intervals(lecture_intervals(catalog, day, jitter, rng));
        let chain = scheduler.find_optimal_chain(rng);
        if !chains.contains(&chain) {
            chains.push(chain);
        }
    }

    if chains.is_empty() {
        chains.push(DayChain::empty());
    }

    tracing::debug!(day = ?day, distinct = chains.len(), samples, "day chains sampled");
    chains
}
