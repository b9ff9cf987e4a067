//! wafreport report — turns an accumulated aggregate into the score tables.
//!
//! This crate builds on `wafreport-core` to provide:
//! - Per-series row model with running cumulative percentages
//! - Column layout derived from the highest score and record total
//! - The plain-text report, inbound block first

pub mod layout;
pub mod model;
pub mod text;

pub use layout::{digit_width, ColumnLayout};
pub use model::{percent_of, Report, ReportRow, RowKind, SeriesReport};
pub use text::{format_report, TextReportGenerator, NO_DATA_NOTICE};

#[cfg(test)]
mod send_sync_checks {
    use super::*;

    fn assert_send<T: Send>() {}
    fn assert_sync<T: Sync>() {}

    #[test]
    fn report_types_are_send_sync() {
        assert_send::<Report>();
        assert_sync::<Report>();
        assert_send::<SeriesReport>();
        assert_sync::<SeriesReport>();
        assert_send::<ReportRow>();
        assert_sync::<ReportRow>();
    }
}
