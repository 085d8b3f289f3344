//! Search configuration.
//!
//! All tunables of the generation pipeline and the multi-run search
//! live in [`SearchConfig`]. Defaults reproduce the classic behavior:
//! 10 diversity samples per weekday, a 0.001 tie-breaking jitter, and
//! 15 independent runs.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Default exclusive upper bound of the end-time jitter.
pub const DEFAULT_JITTER: f64 = 0.001;
/// Default number of diversity samples per weekday.
pub const DEFAULT_SAMPLES_PER_DAY: usize = 10;
/// Default number of search runs.
pub const DEFAULT_RUNS: usize = 15;

/// Configuration for timetable generation.
///
/// # Example
///
/// ```
/// use u_timetable::SearchConfig;
///
/// let config = SearchConfig::default()
///     .with_credit_limit(4)
///     .with_runs(5)
///     .with_seed(7);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    /// Exclusive upper bound of the random value added to interval end
    /// times for tie-breaking. Must be smaller than the catalog's time
    /// granularity.
    pub jitter: f64,
    /// Number of optimal-chain samples drawn per weekday.
    pub samples_per_day: usize,
    /// Target number of courses per timetable. `None` keeps whole
    /// canonical candidates.
    pub credit_limit: Option<usize>,
    /// Number of independent pipeline runs in a search.
    pub runs: usize,
    /// Base seed; each run derives its own stream from it.
    pub seed: u64,
    /// Cap on the composed and sampled candidate lists.
    pub max_candidates: Option<usize>,
    /// Run search repetitions on the rayon thread pool. Requires the
    /// `parallel` feature; without it runs execute sequentially.
    pub parallel: bool,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            jitter: DEFAULT_JITTER,
            samples_per_day: DEFAULT_SAMPLES_PER_DAY,
            credit_limit: None,
            runs: DEFAULT_RUNS,
            seed: 0,
            max_candidates: None,
            parallel: false,
        }
    }
}

impl SearchConfig {
    /// Sets the tie-breaking jitter bound.
    pub fn with_jitter(mut self, jitter: f64) -> Self {
        self.jitter = jitter;
        self
    }

    /// Sets the number of samples per weekday.
    pub fn with_samples_per_day(mut self, samples: usize) -> Self {
        self.samples_per_day = samples;
        self
    }

    /// Sets the target course count.
    pub fn with_credit_limit(mut self, k: usize) -> Self {
        self.credit_limit = Some(k);
        self
    }

    /// Sets the number of search runs.
    pub fn with_runs(mut self, runs: usize) -> Self {
        self.runs = runs;
        self
    }

    /// Sets the base seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Caps intermediate candidate lists.
    pub fn with_max_candidates(mut self, cap: usize) -> Self {
        self.max_candidates = Some(cap);
        self
    }

    /// Enables or disables search runs on the rayon pool.
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Checks that every parameter is within its domain.
    pub fn validate(&self) -> Result<()> {
        if !self.jitter.is_finite() || self.jitter <= 0.0 {
            return Err(Error::InvalidConfig(format!(
                "jitter must be a positive finite number, got {}",
                self.jitter
            )));
        }
        if self.samples_per_day == 0 {
            return Err(Error::InvalidConfig("samples_per_day must be at least 1".into()));
        }
        if self.runs == 0 {
            return Err(Error::InvalidConfig("runs must be at least 1".into()));
        }
        if self.credit_limit == Some(0) {
            return Err(Error::InvalidConfig("credit_limit must be at least 1".into()));
        }
        if self.max_candidates == Some(0) {
            return Err(Error::InvalidConfig("max_candidates must be at least 1".into()));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = SearchConfig::default();
        assert_eq!(config.jitter, 0.001);
        assert_eq!(config.samples_per_day, 10);
        assert_eq!(config.runs, 15);
        assert!(config.credit_limit.is_none());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let config: SearchConfig = serde_json::from_str(r#"{"credit_limit": 5, "seed": 42}"#).unwrap();
        assert_eq!(config.credit_limit, Some(5));
        assert_eq!(config.seed, 42);
        assert_eq!(config.samples_per_day, DEFAULT_SAMPLES_PER_DAY);
    }

    #[test]
    fn test_invalid_values() {
        let bad = [
            SearchConfig::default().with_jitter(0.0),
            SearchConfig::default().with_jitter(f64::INFINITY),
            SearchConfig::default().with_samples_per_day(0),
            SearchConfig::default().with_runs(0),
            SearchConfig::default().with_credit_limit(0),
            SearchConfig::default().with_max_candidates(0),
        ];
        for config in bad {
            assert!(
                matches!(config.validate(), Err(Error::InvalidConfig(_))),
                "{config:?} should be rejected"
            );
        }
    }
}
