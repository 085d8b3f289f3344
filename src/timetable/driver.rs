//! Multi-run search driver over the randomized pipeline.
//!
//! Repeats [`TimetableGenerator::generate`] `runs` times and keeps the run
//! that produced the most candidates (the earliest such run on ties).
//! Run `i` draws from its own `StdRng` seeded from `(seed, i)`, so the
//! outcome depends only on the configuration, not on whether runs
//! execute sequentially or on the rayon pool (`parallel` feature).
//! Only the best run's candidates are kept while runs complete.

use rand::rngs::StdRng;
use rand::SeedableRng;

use super::pipeline::TimetableGenerator;
use crate::config::SearchConfig;
use crate::error::Result;
use crate::models::{Catalog, WeeklyCandidate};

/// Result of a multi-run search.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SearchOutcome {
    /// Candidates of the best run, by ascending section count.
    pub candidates: Vec<WeeklyCandidate>,
    /// Index of the best run.
    pub best_run: usize,
    /// Candidate count of every run.
    pub run_sizes: Vec<usize>,
}

impl SearchOutcome {
    /// First `n` candidates (or fewer).
    pub fn top(&self, n: usize) -> &[WeeklyCandidate] {
        &self.candidates[..n.min(self.candidates.len())]
    }
}

/// Seed of run `run` derived from the base seed.
pub fn run_seed(base: u64, run: usize) -> u64 {
    base ^ (run as u64).wrapping_add(1).wrapping_mul(0x9E37_79B9_7F4A_7C15)
}

/// Runs the search described by `config` over `catalog`.
///
/// # Example
///
/// ```
/// use u_timetable::models::{Catalog, Course, Section, Weekday};
/// use u_timetable::{search, SearchConfig};
///
/// let catalog = Catalog::new(vec![Course::new("CS-101").with_section(
///     Section::lecture("CS-101-A").with_meeting(Weekday::Mon, 9.0, 10.0),
/// )])
/// .unwrap();
///
/// let outcome = search(&catalog, &SearchConfig::default().with_runs(3)).unwrap();
/// assert_eq!(outcome.run_sizes.len(), 3);
/// assert_eq!(outcome.top(5).len(), 1);
/// ```
pub fn search(catalog: &Catalog, config: &SearchConfig) -> Result<SearchOutcome> {
    let generator = TimetableGenerator::new(config.clone())?;

    let tally = if config.parallel {
        parallel_runs(&generator, catalog, config)
    } else {
        (0..config.runs)
            .map(|run| RunTally::single(run, single_run(&generator, catalog, config.seed, run)))
            .reduce(RunTally::merge)
    };
    let tally = tally.unwrap_or_default();

    let mut sizes = tally.sizes;
    sizes.sort_unstable_by_key(|&(run, _)| run);
    let run_sizes: Vec<usize> = sizes.into_iter().map(|(_, size)| size).collect();

    tracing::info!(
        runs = config.runs,
        best_run = tally.best_run,
        candidates = tally.candidates.len(),
        "search finished"
    );

    Ok(SearchOutcome {
        candidates: tally.candidates,
        best_run: tally.best_run,
        run_sizes,
    })
}

/// Runs on the rayon pool; concurrency is bounded by the pool size.
#[cfg(feature = "parallel")]
fn parallel_runs(
    generator: &TimetableGenerator,
    catalog: &Catalog,
    config: &SearchConfig,
) -> Option<RunTally> {
    use rayon::prelude::*;

    (0..config.runs)
        .into_par_iter()
        .map(|run| RunTally::single(run, single_run(generator, catalog, config.seed, run)))
        .reduce_with(RunTally::merge)
}

/// Without the `parallel` feature the flag falls back to sequential runs.
#[cfg(not(feature = "parallel"))]
fn parallel_runs(
    generator: &TimetableGenerator,
    catalog: &Catalog,
    config: &SearchConfig,
) -> Option<RunTally> {
    tracing::debug!("built without the `parallel` feature; running sequentially");
    (0..config.runs)
        .map(|run| RunTally::single(run, single_run(generator, catalog, config.seed, run)))
        .reduce(RunTally::merge)
}

/// Best run seen so far plus the size of every run merged into it.
///
/// Only the best run's candidates are retained. `merge` prefers the larger
/// run and, on equal size, the lower run index, so the result does not
/// depend on merge order.
#[derive(Debug, Default)]
struct RunTally {
    best_run: usize,
    candidates: Vec<WeeklyCandidate>,
    /// (run index, candidate count)
    sizes: Vec<(usize, usize)>,
}

impl RunTally {
    fn single(run: usize, candidates: Vec<WeeklyCandidate>) -> Self {
        let sizes = vec![(run, candidates.len())];
        Self {
            best_run: run,
            candidates,
            sizes,
        }
    }

    fn merge(mut self, mut other: Self) -> Self {
        let other_wins = other.candidates.len() > self.candidates.len()
            || (other.candidates.len() == self.candidates.len() && other.best_run < self.best_run);
        if other_wins {
            self.best_run = other.best_run;
            self.candidates = std::mem::take(&mut other.candidates);
        }
        self.sizes.append(&mut other.sizes);
        self
    }
}

fn single_run(
    generator: &TimetableGenerator,
    catalog: &Catalog,
    base_seed: u64,
    run: usize,
) -> Vec<WeeklyCandidate> {
    let mut rng = StdRng::seed_from_u64(run_seed(base_seed, run));
    let candidates = generator.generate(catalog, &mut rng);
    tracing::debug!(run, candidates = candidates.len(), "run complete");
    candidates
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use crate::models::{Course, Section, Weekday};
    use std::collections::HashSet;

    fn catalog() -> Catalog {
        Catalog::new(vec![
            Course::new("CS-101")
                .with_section(Section::lecture("CS-101-A").with_meeting(Weekday::Mon, 9.0, 10.0))
                .with_section(Section::lecture("CS-101-B").with_meeting(Weekday::Mon, 9.0, 10.0))
                .with_section(Section::recitation("CS-101-R1").with_meeting(Weekday::Fri, 9.0, 10.0)),
            Course::new("MA-201")
                .with_section(Section::lecture("MA-201-A").with_meeting(Weekday::Mon, 10.0, 11.0))
                .with_section(Section::lecture("MA-201-B").with_meeting(Weekday::Tue, 10.0, 11.0)),
            Course::new("PH-110")
                .with_section(Section::lecture("PH-110-A").with_meeting(Weekday::Wed, 10.0, 11.0)),
        ])
        .unwrap()
    }

    #[test]
    fn test_run_seeds_distinct() {
        let seeds: HashSet<u64> = (0..100).map(|r| run_seed(7, r)).collect();
        assert_eq!(seeds.len(), 100);
        assert_ne!(run_seed(0, 1), run_seed(1, 0));
    }

    #[test]
    fn test_search_keeps_largest_run() {
        let catalog = catalog();
        let outcome = search(&catalog, &SearchConfig::default().with_runs(6).with_seed(11)).unwrap();

        assert_eq!(outcome.run_sizes.len(), 6);
        let max = *outcome.run_sizes.iter().max().unwrap();
        assert_eq!(outcome.candidates.len(), max);
        assert_eq!(outcome.run_sizes[outcome.best_run], max);
        assert!(outcome.run_sizes[..outcome.best_run].iter().all(|&s| s < max));
    }

    #[test]
    fn test_parallel_matches_sequential() {
        let catalog = catalog();
        let config = SearchConfig::default().with_runs(8).with_seed(5).with_credit_limit(2);

        let sequential = search(&catalog, &config).unwrap();
        let parallel = search(&catalog, &config.clone().with_parallel(true)).unwrap();
        assert_eq!(sequential, parallel);
    }

    fn tally(run: usize, size: usize) -> RunTally {
        RunTally::single(run, vec![WeeklyCandidate::default(); size])
    }

    #[test]
    fn test_tally_merge_order_independent() {
        let a = tally(0, 3);
        let b = tally(1, 5);
        let c = tally(2, 5);

        let left = a.merge(b).merge(c);
        assert_eq!(left.best_run, 1);
        assert_eq!(left.candidates.len(), 5);

        let right = tally(2, 5).merge(tally(0, 3).merge(tally(1, 5)));
        assert_eq!(right.best_run, 1);

        let mut sizes = right.sizes;
        sizes.sort_unstable();
        assert_eq!(sizes, vec![(0, 3), (1, 5), (2, 5)]);
    }

    #[test]
    fn test_tally_keeps_only_best_candidates() {
        let merged = (0..10).map(|run| tally(run, run % 4)).reduce(RunTally::merge).unwrap();
        assert_eq!(merged.best_run, 3);
        assert_eq!(merged.candidates.len(), 3);
        assert_eq!(merged.sizes.len(), 10);
    }

    #[test]
    fn test_many_parallel_runs_match_sequential() {
        let catalog = catalog();
        let config = SearchConfig::default().with_runs(64).with_seed(9).with_credit_limit(2);

        let sequential = search(&catalog, &config).unwrap();
        let parallel = search(&catalog, &config.clone().with_parallel(true)).unwrap();
        assert_eq!(parallel.run_sizes.len(), 64);
        assert_eq!(sequential, parallel);
    }

    #[test]
    fn test_top_is_bounded() {
        let catalog = catalog();
        let outcome = search(&catalog, &SearchConfig::default().with_runs(2)).unwrap();
        assert!(outcome.top(1000).len() == outcome.candidates.len());
        assert!(outcome.top(0).is_empty());
    }

    #[test]
    fn test_invalid_config() {
        let err = search(&catalog(), &SearchConfig::default().with_runs(0)).unwrap_err();
        assert!(matches!(err, Error::InvalidConfig(_)));
    }
}
