//! Series statistics derived from a histogram — pure functions.
//!
//! Mean and median are computed from bucket counts, never from a list of
//! observations. Both divide by the record total, which includes lines whose
//! score on this side was invalid.

use crate::histogram::ScoreHistogram;

/// Mean and median for one series.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SeriesStats {
    /// `None` when there are no records.
    pub mean: Option<f64>,
    /// `None` when there are no records, or when invalid entries leave the
    /// histogram short of the median rank.
    pub median: Option<f64>,
}

impl SeriesStats {
    pub fn compute(histogram: &ScoreHistogram, total: u64) -> Self {
        Self {
            mean: mean(histogram, total),
            median: median(histogram, total),
        }
    }
}

/// Weighted mean: Σ(score × count) / total.
pub fn mean(histogram: &ScoreHistogram, total: u64) -> Option<f64> {
    if total == 0 {
        return None;
    }
    let weighted: u128 = histogram
        .iter_nonzero()
        .map(|(score, count)| u128::from(score) * u128::from(count))
        .sum();
    Some(weighted as f64 / total as f64)
}

/// Median by order statistics over the histogram.
///
/// Odd totals take the score at rank `(N+1)/2`. Even totals average the
/// scores at ranks `N/2` and `N/2 + 1`, each found by its own scan.
pub fn median(histogram: &ScoreHistogram, total: u64) -> Option<f64> {
    if total == 0 {
        return None;
    }
    if total % 2 == 1 {
        score_at_rank(histogram, (total + 1) / 2).map(f64::from)
    } else {
        let lower = score_at_rank(histogram, total / 2)?;
        let upper = score_at_rank(histogram, total / 2 + 1)?;
        Some((f64::from(lower) + f64::from(upper)) / 2.0)
    }
}

/// First score whose running count reaches `rank` (1-based).
pub fn score_at_rank(histogram: &ScoreHistogram, rank: u64) -> Option<u32> {
    let mut running = 0u64;
    for (score, count) in histogram.iter_nonzero() {
        running += count;
        if running >= rank {
            return Some(score);
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hist(scores: &[u32]) -> ScoreHistogram {
        scores.iter().copied().collect()
    }

    #[test]
    fn mean_of_two_buckets() {
        assert_eq!(mean(&hist(&[5, 10]), 2), Some(7.5));
    }

    #[test]
    fn mean_divides_by_record_total() {
        // One record had an invalid score on this side.
        assert_eq!(mean(&hist(&[6, 6]), 3), Some(4.0));
    }

    #[test]
    fn median_odd_total() {
        assert_eq!(median(&hist(&[0, 0, 5, 10, 10]), 5), Some(5.0));
    }

    #[test]
    fn median_even_total_averages_neighbours() {
        assert_eq!(median(&hist(&[0, 0, 5, 10]), 4), Some(2.5));
    }

    #[test]
    fn median_even_total_within_one_bucket() {
        assert_eq!(median(&hist(&[3, 3, 3, 3]), 4), Some(3.0));
    }

    #[test]
    fn scenario_mean_and_median() {
        let h = hist(&[0, 0, 10, 10, 10]);
        let stats = SeriesStats::compute(&h, 5);
        assert_eq!(stats.mean, Some(6.0));
        assert_eq!(stats.median, Some(10.0));
    }

    #[test]
    fn zero_total_has_no_stats() {
        let stats = SeriesStats::compute(&ScoreHistogram::new(), 0);
        assert_eq!(stats.mean, None);
        assert_eq!(stats.median, None);
    }

    #[test]
    fn median_unreachable_when_invalid_dominates() {
        // Three records, two of them invalid: rank 2 is never reached.
        assert_eq!(median(&hist(&[4]), 3), None);
        assert_eq!(mean(&hist(&[4]), 3), Some(4.0 / 3.0));
    }

    #[test]
    fn score_at_rank_walks_ascending() {
        let h = hist(&[1, 2, 2, 9]);
        assert_eq!(score_at_rank(&h, 1), Some(1));
        assert_eq!(score_at_rank(&h, 2), Some(2));
        assert_eq!(score_at_rank(&h, 3), Some(2));
        assert_eq!(score_at_rank(&h, 4), Some(9));
        assert_eq!(score_at_rank(&h, 5), None);
    }
}
