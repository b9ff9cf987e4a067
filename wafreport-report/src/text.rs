//! Plain-text report generator.
//!
//! Layout per series:
//!
//! ```text
//! Inbound (Requests)
//! ------------------          # of req. | % of req. | Cumulative | Outstanding
//!          Total number of requests | 5 | 100.0000% | 100.0000%  |   0.0000%
//!
//! Empty or invalid inbound score    | 0 |   0.0000% |   0.0000%  | 100.0000%
//! Requests with inbound score of  0 | 2 |  40.0000% |  40.0000%  |  60.0000%
//! Requests with inbound score of 10 | 3 |  60.0000% | 100.0000%  |   0.0000%
//!
//! Mean: 6.00    Median: 10.00
//! ```

use tracing::debug;
use wafreport_core::{ReportAggregate, SeriesStats, Side};

use crate::layout::ColumnLayout;
use crate::model::{Report, ReportRow, RowKind, SeriesReport};

/// Printed in place of rows when no line was classified.
pub const NO_DATA_NOTICE: &str = "No valid score lines were read.";

/// Fixed wording for one side of the report.
struct SideLabels {
    title: &'static str,
    unit: &'static str,
    total: &'static str,
    invalid: &'static str,
    row: &'static str,
}

impl SideLabels {
    fn for_side(side: Side) -> Self {
        match side {
            Side::Inbound => Self {
                title: "Inbound (Requests)",
                unit: "req.",
                total: "Total number of requests",
                invalid: "Empty or invalid inbound score",
                row: "Requests with inbound score of",
            },
            Side::Outbound => Self {
                title: "Outbound (Responses)",
                unit: "res.",
                total: "Total number of responses",
                invalid: "Empty or invalid outbound score",
                row: "Responses with outbound score of",
            },
        }
    }
}

pub struct TextReportGenerator;

impl TextReportGenerator {
    pub fn generate(&self, aggregate: &ReportAggregate) -> String {
        self.render(&Report::build(aggregate))
    }

    pub fn render(&self, report: &Report) -> String {
        let blocks: Vec<String> = report.series.iter().map(render_series).collect();
        blocks.join("\n\n\n")
    }
}

/// Format both series of `aggregate` as text.
pub fn format_report(aggregate: &ReportAggregate) -> String {
    TextReportGenerator.generate(aggregate)
}

fn render_series(series: &SeriesReport) -> String {
    let labels = SideLabels::for_side(series.side);
    let layout = ColumnLayout::for_series(series, labels.invalid, labels.row);
    debug!(
        side = %series.side,
        rows = series.rows.len(),
        score_width = layout.score_width,
        "rendering series"
    );

    let dashes = "-".repeat(labels.title.len());
    let count_header = format!("# of {}", labels.unit);
    let header_pad = layout.count_end().saturating_sub(dashes.len());

    let mut out = String::new();
    out.push_str(labels.title);
    out.push('\n');
    out.push_str(&format!(
        "{dashes}{count_header:>header_pad$} | % of {} | Cumulative | Outstanding\n",
        labels.unit
    ));
    out.push_str(&format!(
        "{:>lw$} | {} | 100.0000% | 100.0000%  |   0.0000%\n\n",
        labels.total,
        series.total,
        lw = layout.label_width
    ));

    if !series.has_data() {
        out.push_str(NO_DATA_NOTICE);
        out.push_str("\n\n");
    } else {
        for row in series.all_rows() {
            out.push_str(&render_row(row, &labels, &layout));
        }
        out.push('\n');
    }

    out.push_str(&render_stats(&series.stats));
    out
}

fn render_row(row: &ReportRow, labels: &SideLabels, layout: &ColumnLayout) -> String {
    let label = match row.kind {
        RowKind::Invalid => labels.invalid.to_string(),
        RowKind::Score(score) => format!("{} {score:>sw$}", labels.row, sw = layout.score_width),
    };
    format!(
        "{label:<lw$} | {:>cw$} | {:8.4}% | {:8.4}%  | {:8.4}%\n",
        row.count,
        row.percent,
        row.cumulative,
        row.outstanding,
        lw = layout.label_width,
        cw = layout.count_width
    )
}

fn render_stats(stats: &SeriesStats) -> String {
    format!(
        "Mean: {}    Median: {}\n",
        fmt_stat(stats.mean),
        fmt_stat(stats.median)
    )
}

fn fmt_stat(value: Option<f64>) -> String {
    value.map_or_else(|| "n/a".to_string(), |v| format!("{v:.2}"))
}
