//! Report rows and per-series summary.
//!
//! A [`SeriesReport`] is the formatter-independent view of one side: the
//! invalid row, one row per non-empty bucket in ascending order, and the
//! mean/median. Cumulative percentages carry a running count that starts at
//! the invalid count and grows through every score row.

use wafreport_core::{ReportAggregate, SeriesStats, Side};

/// What a row counts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowKind {
    /// Records with no usable score on this side.
    Invalid,
    /// Records with exactly this score (the top bucket also holds clamped values).
    Score(u32),
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ReportRow {
    pub kind: RowKind,
    pub count: u64,
    /// Share of all records, in percent.
    pub percent: f64,
    /// Share of records at or below this row, in percent.
    pub cumulative: f64,
    /// `100 - cumulative`.
    pub outstanding: f64,
}

impl ReportRow {
    fn new(kind: RowKind, count: u64, running: u64, total: u64) -> Self {
        let cumulative = percent_of(running, total);
        Self {
            kind,
            count,
            percent: percent_of(count, total),
            cumulative,
            outstanding: 100.0 - cumulative,
        }
    }
}

/// `100 * part / total`, or 0.0 when there is nothing to divide by.
pub fn percent_of(part: u64, total: u64) -> f64 {
    if total == 0 {
        return 0.0;
    }
    100.0 * (part as f64 / total as f64)
}

/// Everything the formatter prints for one side.
#[derive(Debug, Clone, PartialEq)]
pub struct SeriesReport {
    pub side: Side,
    pub total: u64,
    /// Highest non-empty bucket; only used for column widths.
    pub highest_score: Option<u32>,
    pub invalid_row: ReportRow,
    /// Non-empty buckets, ascending by score.
    pub rows: Vec<ReportRow>,
    pub stats: SeriesStats,
}

impl SeriesReport {
    pub fn build(side: Side, aggregate: &ReportAggregate) -> Self {
        let series = aggregate.series(side);
        let total = aggregate.total;

        let mut running = series.invalid;
        let invalid_row = ReportRow::new(RowKind::Invalid, series.invalid, running, total);

        let rows = series
            .histogram
            .iter_nonzero()
            .map(|(score, count)| {
                running += count;
                ReportRow::new(RowKind::Score(score), count, running, total)
            })
            .collect();

        Self {
            side,
            total,
            highest_score: series.histogram.highest_nonzero(),
            invalid_row,
            rows,
            stats: SeriesStats::compute(&series.histogram, total),
        }
    }

    pub fn has_data(&self) -> bool {
        self.total > 0
    }

    /// Invalid row followed by the score rows.
    pub fn all_rows(&self) -> impl Iterator<Item = &ReportRow> {
        std::iter::once(&self.invalid_row).chain(self.rows.iter())
    }
}

/// Both series, inbound first.
#[derive(Debug, Clone, PartialEq)]
pub struct Report {
    pub series: Vec<SeriesReport>,
}

impl Report {
    pub fn build(aggregate: &ReportAggregate) -> Self {
        Self {
            series: Side::ALL
                .iter()
                .map(|&side| SeriesReport::build(side, aggregate))
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wafreport_core::accumulate;

    #[test]
    fn invalid_row_comes_first_and_seeds_running_total() {
        let agg = accumulate(["- 1", "3 1", "3 1", "7 1"]);
        let report = SeriesReport::build(Side::Inbound, &agg);

        assert_eq!(report.invalid_row.kind, RowKind::Invalid);
        assert_eq!(report.invalid_row.count, 1);
        assert_eq!(report.invalid_row.percent, 25.0);
        assert_eq!(report.invalid_row.cumulative, 25.0);
        assert_eq!(report.invalid_row.outstanding, 75.0);

        let kinds: Vec<_> = report.rows.iter().map(|r| r.kind).collect();
        assert_eq!(kinds, vec![RowKind::Score(3), RowKind::Score(7)]);
        assert_eq!(report.rows[0].cumulative, 75.0);
        assert_eq!(report.rows[1].cumulative, 100.0);
        assert_eq!(report.rows[1].outstanding, 0.0);
    }

    #[test]
    fn empty_buckets_are_not_rows() {
        let agg = accumulate(["0 0", "100 0"]);
        let report = SeriesReport::build(Side::Inbound, &agg);
        assert_eq!(report.rows.len(), 2);
        assert_eq!(report.highest_score, Some(100));
    }

    #[test]
    fn zero_total_builds_without_nan() {
        let agg = ReportAggregate::new();
        let report = SeriesReport::build(Side::Outbound, &agg);
        assert!(!report.has_data());
        assert!(report.rows.is_empty());
        assert_eq!(report.invalid_row.percent, 0.0);
        assert_eq!(report.invalid_row.cumulative, 0.0);
        assert_eq!(report.stats.mean, None);
    }

    #[test]
    fn report_orders_inbound_then_outbound() {
        let report = Report::build(&accumulate(["1 2"]));
        let sides: Vec<_> = report.series.iter().map(|s| s.side).collect();
        assert_eq!(sides, vec![Side::Inbound, Side::Outbound]);
    }

    #[test]
    fn percent_of_zero_total_is_zero() {
        assert_eq!(percent_of(5, 0), 0.0);
        assert_eq!(percent_of(1, 4), 25.0);
    }
}
