//! Line classification.
//!
//! Each line is tried against three shapes, in priority order:
//! 1. `<int> <int>` — both scores present
//! 2. `<int>` or `<int> <non-int>` (usually `<int> -`) — inbound only
//! 3. `- <int>` — outbound only, inbound replaced by a placeholder
//!
//! Anything else is malformed. Classification is stateless per line.

use crate::score::{parse_int, ScorePair};

/// Placeholder token standing in for a missing inbound score.
pub const PLACEHOLDER: &str = "-";

/// Which input shape a line matched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinePattern {
    BothPresent,
    InboundOnly,
    OutboundOnly,
}

/// A line that matched one of the three shapes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClassifiedLine {
    pub pattern: LinePattern,
    pub pair: ScorePair,
}

/// Classify one line of input. `None` means the line is malformed.
///
/// Only the first two whitespace-separated tokens are inspected; trailing
/// tokens are ignored.
pub fn classify_line(line: &str) -> Option<ClassifiedLine> {
    let mut tokens = line.split_whitespace();
    let first = tokens.next()?;
    let second = tokens.next();

    match parse_int(first) {
        Some(inbound) => match second.and_then(parse_int) {
            Some(outbound) => Some(ClassifiedLine {
                pattern: LinePattern::BothPresent,
                pair: ScorePair::from_raw(Some(inbound), Some(outbound)),
            }),
            None => Some(ClassifiedLine {
                pattern: LinePattern::InboundOnly,
                pair: ScorePair::from_raw(Some(inbound), None),
            }),
        },
        None if first == PLACEHOLDER => {
            let outbound = second.and_then(parse_int)?;
            Some(ClassifiedLine {
                pattern: LinePattern::OutboundOnly,
                pair: ScorePair::from_raw(None, Some(outbound)),
            })
        }
        None => None,
    }
}
