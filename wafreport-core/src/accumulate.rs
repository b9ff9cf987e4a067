//! Folding classified lines into per-side histograms and counters.
//!
//! The accumulator owns the [`ReportAggregate`] while input is consumed and
//! hands it off by value in [`Accumulator::finish`]. Nothing is retained per
//! observation, so memory stays fixed regardless of input volume.

use std::io::BufRead;

use thiserror::Error;
use tracing::{debug, trace};

use crate::classify::{classify_line, LinePattern};
use crate::histogram::ScoreHistogram;
use crate::score::{ScorePair, ScoreValue, Side};

/// Errors from reading input. Line content itself never errors.
#[derive(Debug, Error)]
pub enum AccumulateError {
    #[error("failed to read input after line {line}: {source}")]
    Read {
        line: u64,
        #[source]
        source: std::io::Error,
    },
}

/// Histogram plus invalid counter for one side.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SeriesCounts {
    pub histogram: ScoreHistogram,
    pub invalid: u64,
}

impl SeriesCounts {
    pub fn record(&mut self, value: ScoreValue) {
        if !self.histogram.record_value(value) {
            self.invalid += 1;
        }
    }

    /// Observations in the histogram plus invalid entries.
    pub fn classified(&self) -> u64 {
        self.histogram.total_observations() + self.invalid
    }
}

/// Everything the report needs: both series and the shared record total.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReportAggregate {
    pub inbound: SeriesCounts,
    pub outbound: SeriesCounts,
    /// Lines that matched one of the three input shapes.
    pub total: u64,
}

impl ReportAggregate {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn series(&self, side: Side) -> &SeriesCounts {
        match side {
            Side::Inbound => &self.inbound,
            Side::Outbound => &self.outbound,
        }
    }

    fn series_mut(&mut self, side: Side) -> &mut SeriesCounts {
        match side {
            Side::Inbound => &mut self.inbound,
            Side::Outbound => &mut self.outbound,
        }
    }

    pub fn histogram(&self, side: Side) -> &ScoreHistogram {
        &self.series(side).histogram
    }

    pub fn invalid(&self, side: Side) -> u64 {
        self.series(side).invalid
    }

    pub fn is_empty(&self) -> bool {
        self.total == 0
    }

    /// Record one classified line. Both sides are updated and the total
    /// increments exactly once.
    pub fn record(&mut self, pair: ScorePair) {
        for side in Side::ALL {
            self.series_mut(side).record(pair.get(side));
        }
        self.total += 1;
    }
}

/// Per-run tallies of how lines were classified. Only used for logging.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LineTally {
    pub both_present: u64,
    pub inbound_only: u64,
    pub outbound_only: u64,
    pub malformed: u64,
}

impl LineTally {
    pub fn lines_seen(&self) -> u64 {
        self.both_present + self.inbound_only + self.outbound_only + self.malformed
    }
}

/// Incremental line consumer.
#[derive(Debug, Default)]
pub struct Accumulator {
    aggregate: ReportAggregate,
    tally: LineTally,
}

impl Accumulator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Classify and record one line. Returns `false` if the line was
    /// malformed and skipped.
    pub fn push_line(&mut self, line: &str) -> bool {
        let Some(classified) = classify_line(line) else {
            self.tally.malformed += 1;
            trace!(line_no = self.tally.lines_seen(), "skipping malformed line");
            return false;
        };

        match classified.pattern {
            LinePattern::BothPresent => self.tally.both_present += 1,
            LinePattern::InboundOnly => self.tally.inbound_only += 1,
            LinePattern::OutboundOnly => self.tally.outbound_only += 1,
        }
        self.aggregate.record(classified.pair);
        true
    }

    /// Read newline-terminated lines until end of input.
    ///
    /// Bytes that are not UTF-8 are decoded lossily, which leaves such lines
    /// malformed unless the numeric tokens survive. On a read error the
    /// lines consumed so far stay recorded.
    pub fn read_from<R: BufRead>(&mut self, mut reader: R) -> Result<u64, AccumulateError> {
        let mut buf = Vec::new();
        let mut lines = 0u64;
        loop {
            buf.clear();
            let n = reader
                .read_until(b'\n', &mut buf)
                .map_err(|source| AccumulateError::Read { line: lines, source })?;
            if n == 0 {
                break;
            }
            lines += 1;
            self.push_line(&String::from_utf8_lossy(&buf));
        }
        Ok(lines)
    }

    pub fn tally(&self) -> LineTally {
        self.tally
    }

    pub fn finish(self) -> ReportAggregate {
        debug!(
            records = self.aggregate.total,
            both_present = self.tally.both_present,
            inbound_only = self.tally.inbound_only,
            outbound_only = self.tally.outbound_only,
            malformed = self.tally.malformed,
            invalid_inbound = self.aggregate.inbound.invalid,
            invalid_outbound = self.aggregate.outbound.invalid,
            "accumulation finished"
        );
        self.aggregate
    }
}

/// Classify and fold a sequence of lines.
pub fn accumulate<I, S>(lines: I) -> ReportAggregate
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut acc = Accumulator::new();
    for line in lines {
        acc.push_line(line.as_ref());
    }
    acc.finish()
}

/// Read every line from `reader` and fold it.
pub fn accumulate_reader<R: BufRead>(reader: R) -> Result<ReportAggregate, AccumulateError> {
    let mut acc = Accumulator::new();
    acc.read_from(reader)?;
    Ok(acc.finish())
}
