//! One full generation run.
//!
//! # Stages
//!
//! 1. Sample distinct day chains for every weekday.
//! 2. Compose whole-week candidates (Mon×Wed×Fri × Tue×Thu).
//! 3. Canonicalize: de-duplicate, one lecture per course, conflict check.
//! 4. Optionally reduce to `k`-course subsets.
//! 5. Place recitations and order by section count.

use rand::Rng;

use super::canonical::canonicalize;
use super::compose::{compose_week, WeekChains};
use super::credit::sample_course_subsets;
use super::recitation::RecitationPlacer;
use crate::config::SearchConfig;
use crate::error::Result;
use crate::models::{Catalog, WeeklyCandidate};

/// Runs the generation pipeline once.
///
/// # Example
///
/// ```
/// use u_timetable::models::{Catalog, Course, Section, Weekday};
/// use u_timetable::{SearchConfig, TimetableGenerator};
/// use rand::SeedableRng;
///
/// let catalog = Catalog::new(vec![
///     Course::new("CS-101").with_section(
///         Section::lecture("CS-101-A").with_meeting(Weekday::Mon, 9.0, 10.0),
///     ),
///     Course::new("MA-201").with_section(
///         Section::lecture("MA-201-A").with_meeting(Weekday::Tue, 9.0, 10.0),
///     ),
/// ])
/// .unwrap();
///
/// let generator = TimetableGenerator::new(SearchConfig::default()).unwrap();
/// let mut rng = rand::rngs::StdRng::seed_from_u64(1);
/// let candidates = generator.generate(&catalog, &mut rng);
/// assert_eq!(candidates.len(), 1);
/// assert_eq!(candidates[0].lectures.len(), 2);
/// ```
#[derive(Debug, Clone)]
pub struct TimetableGenerator {
    config: SearchConfig,
}

impl TimetableGenerator {
    /// Creates a generator, rejecting invalid configuration.
    pub fn new(config: SearchConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    /// The active configuration.
    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    /// Generates candidates, sorted by ascending section count.
    pub fn generate<R: Rng>(&self, catalog: &Catalog, rng: &mut R) -> Vec<WeeklyCandidate> {
        let cfg = &self.config;

        let week = WeekChains::sample(catalog, cfg.samples_per_day, cfg.jitter, rng);
        let composed = compose_week(&week, cfg.max_candidates);
        let canonical = canonicalize(catalog, &composed, rng);
        let sampled = sample_course_subsets(canonical, cfg.credit_limit, cfg.max_candidates);

        RecitationPlacer::new(catalog).place_all(sampled)
    }
}
