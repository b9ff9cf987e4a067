//! Column widths for the text table.

use crate::model::SeriesReport;

/// Number of decimal digits needed to print `n`.
pub fn digit_width(n: u64) -> usize {
    let mut width = 1;
    let mut n = n;
    while n > 9 {
        n /= 10;
        width += 1;
    }
    width
}

/// Widths shared by every row of one series table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColumnLayout {
    /// Digits of the highest non-empty score (at least 1).
    pub score_width: usize,
    /// Digits of the record total.
    pub count_width: usize,
    /// Width of the label column, left of the first `|`.
    pub label_width: usize,
}

impl ColumnLayout {
    /// `invalid_label` and `row_label` are the texts in front of the invalid
    /// row and in front of each score value.
    pub fn for_series(report: &SeriesReport, invalid_label: &str, row_label: &str) -> Self {
        let score_width = digit_width(report.highest_score.map_or(0, u64::from));
        let count_width = digit_width(report.total);
        let label_width = invalid_label.len().max(row_label.len() + 1 + score_width);
        Self {
            score_width,
            count_width,
            label_width,
        }
    }

    /// Column at which the count field ends.
    pub fn count_end(&self) -> usize {
        self.label_width + " | ".len() + self.count_width
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wafreport_core::{accumulate, Side};

    #[test]
    fn digit_width_counts_digits() {
        assert_eq!(digit_width(0), 1);
        assert_eq!(digit_width(9), 1);
        assert_eq!(digit_width(10), 2);
        assert_eq!(digit_width(65_536), 5);
        assert_eq!(digit_width(u64::MAX), 20);
    }

    #[test]
    fn layout_tracks_highest_score_and_total() {
        let lines: Vec<String> = (0..12).map(|i| format!("{} 0", i * 100)).collect();
        let report = SeriesReport::build(Side::Inbound, &accumulate(&lines));
        let layout = ColumnLayout::for_series(&report, "invalid", "score of");
        assert_eq!(layout.score_width, 4);
        assert_eq!(layout.count_width, 2);
        assert_eq!(layout.label_width, "score of".len() + 1 + 4);
    }

    #[test]
    fn empty_series_uses_single_digit_widths() {
        let report = SeriesReport::build(Side::Inbound, &accumulate(Vec::<&str>::new()));
        let layout = ColumnLayout::for_series(&report, "a long invalid label", "x");
        assert_eq!(layout.score_width, 1);
        assert_eq!(layout.count_width, 1);
        assert_eq!(layout.label_width, "a long invalid label".len());
    }
}
