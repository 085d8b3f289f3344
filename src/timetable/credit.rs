//! Fixed-size course-count sampling.
//!
//! Reduces each canonical candidate to every unordered `k`-subset of its
//! lectures. Subsets are de-duplicated across all candidates: the same
//! course-section set reached from two candidates is emitted once.
//! Candidates with fewer than `k` lectures contribute nothing.

use std::collections::{BTreeSet, HashSet};

use crate::models::WeeklyCandidate;

/// Calls `f` with every `k`-combination of `0..n` in lexicographic order.
///
/// `k == 0` yields the single empty combination; `k > n` yields none.
pub fn for_each_combination<F>(n: usize, k: usize, mut f: F)
where
    F: FnMut(&[usize]) -> bool,
{
    if k > n {
        return;
    }
    let mut idx: Vec<usize> = (0..k).collect();
    loop {
        if !f(&idx) {
            return;
        }
        // Rightmost position that can still advance.
        let mut i = k;
        loop {
            if i == 0 {
                return;
            }
            i -= 1;
            if idx[i] != i + n - k {
                break;
            }
            if i == 0 {
                return;
            }
        }
        idx[i] += 1;
        for j in i + 1..k {
            idx[j] = idx[j - 1] + 1;
        }
    }
}

/// Expands candidates into their `k`-course subsets.
///
/// With `k = None` the candidates pass through unchanged. Enumeration
/// stops once `cap` subsets have been collected.
pub fn sample_course_subsets(
    candidates: Vec<WeeklyCandidate>,
    k: Option<usize>,
    cap: Option<usize>,
) -> Vec<WeeklyCandidate> {
    let Some(k) = k else {
        return candidates;
    };

    let limit = cap.unwrap_or(usize::MAX);
    let (subsets, truncated) = collect_subsets(&candidates, k, limit);
    if truncated {
        tracing::warn!(cap = limit, "course-count sampling truncated by max_candidates");
    }

    tracing::debug!(
        k,
        candidates = candidates.len(),
        subsets = subsets.len(),
        "course subsets sampled"
    );
    subsets
}

/// Collects distinct `k`-subsets up to `limit`. The flag is set only when a
/// new subset had to be dropped; duplicates past the limit do not count.
fn collect_subsets(
    candidates: &[WeeklyCandidate],
    k: usize,
    limit: usize,
) -> (Vec<WeeklyCandidate>, bool) {
    let mut seen: HashSet<BTreeSet<String>> = HashSet::new();
    let mut subsets = Vec::new();
    let mut truncated = false;

    for candidate in candidates {
        let lectures = &candidate.lectures;
        for_each_combination(lectures.len(), k, |picked| {
            let chosen: Vec<String> = picked.iter().map(|&i| lectures[i].clone()).collect();
            let key: BTreeSet<String> = chosen.iter().cloned().collect();
            if seen.contains(&key) {
                return true;
            }
            if subsets.len() >= limit {
                truncated = true;
                return false;
            }
            seen.insert(key);
            subsets.push(WeeklyCandidate::from_lectures(chosen));
            true
        });
        if truncated {
            break;
        }
    }
    (subsets, truncated)
}
