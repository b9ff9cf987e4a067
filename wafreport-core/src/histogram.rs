//! Fixed-size score histogram.
//!
//! One counter per score in `0..=MAX_SCORE`. Memory is constant no matter
//! how many observations are recorded; out-of-range scores are clamped
//! before they get here.

use crate::score::{ScoreValue, BUCKET_COUNT, MAX_SCORE};

/// Observation counts indexed by exact score value.
#[derive(Clone, PartialEq, Eq)]
pub struct ScoreHistogram {
    counts: Box<[u64]>,
}

impl ScoreHistogram {
    pub fn new() -> Self {
        Self {
            counts: vec![0u64; BUCKET_COUNT].into_boxed_slice(),
        }
    }

    /// Add one observation to `score`'s bucket, clamping above [`MAX_SCORE`].
    pub fn record(&mut self, score: u32) {
        self.record_n(score, 1);
    }

    /// Add `n` observations to `score`'s bucket.
    pub fn record_n(&mut self, score: u32, n: u64) {
        let idx = score.min(MAX_SCORE) as usize;
        self.counts[idx] = self.counts[idx].saturating_add(n);
    }

    /// Record a classified value. Returns `false` for the invalid marker,
    /// which the histogram does not hold.
    pub fn record_value(&mut self, value: ScoreValue) -> bool {
        match value {
            ScoreValue::Bucket(score) => {
                self.record(score);
                true
            }
            ScoreValue::Invalid => false,
        }
    }

    /// Count for an exact score; zero for anything above [`MAX_SCORE`].
    pub fn count(&self, score: u32) -> u64 {
        self.counts.get(score as usize).copied().unwrap_or(0)
    }

    /// Sum of all bucket counts.
    pub fn total_observations(&self) -> u64 {
        self.counts.iter().sum()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.iter().all(|&c| c == 0)
    }

    /// Highest score with a non-zero count, scanning down from the top.
    pub fn highest_nonzero(&self) -> Option<u32> {
        self.counts.iter().rposition(|&c| c != 0).map(|i| i as u32)
    }

    /// `(score, count)` for every non-empty bucket, ascending by score.
    pub fn iter_nonzero(&self) -> impl Iterator<Item = (u32, u64)> + '_ {
        self.iter().filter(|&(_, count)| count != 0)
    }

    /// `(score, count)` for every bucket, ascending by score.
    pub fn iter(&self) -> impl Iterator<Item = (u32, u64)> + '_ {
        self.counts
            .iter()
            .enumerate()
            .map(|(score, &count)| (score as u32, count))
    }
}

impl Default for ScoreHistogram {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for ScoreHistogram {
    // The full 65537-slot table is useless in debug output.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_map().entries(self.iter_nonzero()).finish()
    }
}

impl FromIterator<u32> for ScoreHistogram {
    fn from_iter<I: IntoIterator<Item = u32>>(iter: I) -> Self {
        let mut hist = ScoreHistogram::new();
        for score in iter {
            hist.record(score);
        }
        hist
    }
}
