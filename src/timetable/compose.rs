//! Cross-day composition of day chains into whole-week candidates.
//!
//! Pure combinatorial expansion, no conflict filtering:
//! - Group A = Mon × Wed × Fri
//! - Group B = Tue × Thu
//! - Week = Group A × Group B
//!
//! Each combination is the concatenation of its parts' section ids.
//! Sizes multiply, so an optional cap bounds every product.

use rand::Rng;

use super::day::{sample_day_chains, DayChain};
use crate::models::{Catalog, Weekday};

/// A flat sequence of section ids spanning the week (may contain repeats).
pub type ComposedWeek = Vec<String>;

/// Distinct day chains for each weekday.
#[derive(Debug, Clone, Default)]
pub struct WeekChains {
    days: [Vec<DayChain>; 5],
}

impl WeekChains {
    /// Creates an empty set (every day without chains).
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the chains of one weekday.
    pub fn with_day(mut self, day: Weekday, chains: Vec<DayChain>) -> Self {
        self.days[day.index()] = chains;
        self
    }

    /// Chains of one weekday.
    pub fn get(&self, day: Weekday) -> &[DayChain] {
        &self.days[day.index()]
    }

    /// Samples every weekday from the catalog.
    pub fn sample<R: Rng>(catalog: &Catalog, samples: usize, jitter: f64, rng: &mut R) -> Self {
        let mut week = Self::new();
        for day in Weekday::ALL {
            week.days[day.index()] = sample_day_chains(catalog, day, samples, jitter, rng);
        }
        week
    }

    /// Section id lists of one day; a day without chains counts as one
    /// empty chain so it does not wipe out the product.
    fn id_lists(&self, day: Weekday) -> Vec<ComposedWeek> {
        let chains = self.get(day);
        if chains.is_empty() {
            return vec![Vec::new()];
        }
        chains
            .iter()
            .map(|c| c.section_ids().map(str::to_string).collect())
            .collect()
    }
}

/// Composes whole-week candidates from per-day chains.
///
/// # Arguments
/// * `week` - Distinct chains per weekday.
/// * `cap` - Maximum number of entries kept from any product.
pub fn compose_week(week: &WeekChains, cap: Option<usize>) -> Vec<ComposedWeek> {
    let mon_wed = product(&week.id_lists(Weekday::Mon), &week.id_lists(Weekday::Wed), cap);
    let group_a = product(&mon_wed, &week.id_lists(Weekday::Fri), cap);
    let group_b = product(&week.id_lists(Weekday::Tue), &week.id_lists(Weekday::Thu), cap);
    let composed = product(&group_a, &group_b, cap);

    tracing::debug!(
        group_a = group_a.len(),
        group_b = group_b.len(),
        composed = composed.len(),
        "week composed"
    );
    composed
}

/// Cartesian product with concatenation, left-major order.
fn product(left: &[ComposedWeek], right: &[ComposedWeek], cap: Option<usize>) -> Vec<ComposedWeek> {
    let full = left.len() * right.len();
    let limit = cap.map_or(full, |c| c.min(full));
    if limit < full {
        tracing::warn!(full, kept = limit, "composition truncated by max_candidates");
    }

    let mut out = Vec::with_capacity(limit);
    'outer: for l in left {
        for r in right {
            if out.len() == limit {
                break 'outer;
            }
            let mut combined = Vec::with_capacity(l.len() + r.len());
            combined.extend(l.iter().cloned());
            combined.extend(r.iter().cloned());
            out.push(combined);
        }
    }
    out
}
