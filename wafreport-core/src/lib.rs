//! wafreport core — score parsing, line classification, bounded histograms.
//!
//! This crate holds the statistics engine:
//! - Score values with invalid marker and top-bucket clamping
//! - Three-shape line classifier (`<in> <out>`, `<in> -`, `- <out>`)
//! - Fixed-size histograms and the accumulator that fills them
//! - Mean and median computed from bucket counts

pub mod accumulate;
pub mod classify;
pub mod histogram;
pub mod score;
pub mod stats;

pub use accumulate::{
    accumulate, accumulate_reader, AccumulateError, Accumulator, LineTally, ReportAggregate,
    SeriesCounts,
};
pub use classify::{classify_line, ClassifiedLine, LinePattern};
pub use histogram::ScoreHistogram;
pub use score::{parse_int, ScorePair, ScoreValue, Side, BUCKET_COUNT, MAX_SCORE};
pub use stats::SeriesStats;
