//! Score values, the two score sides, and integer token parsing.

use std::fmt;
use std::num::IntErrorKind;

/// Highest score with its own bucket. Anything above lands in this bucket.
pub const MAX_SCORE: u32 = 65_536;

/// Number of buckets in a score histogram (`0..=MAX_SCORE`).
pub const BUCKET_COUNT: usize = MAX_SCORE as usize + 1;

/// Which half of a score pair a value belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    /// Request-side anomaly total.
    Inbound,
    /// Response-side anomaly total.
    Outbound,
}

impl Side {
    /// Both sides, in report order.
    pub const ALL: [Side; 2] = [Side::Inbound, Side::Outbound];

    pub fn as_str(&self) -> &'static str {
        match self {
            Side::Inbound => "inbound",
            Side::Outbound => "outbound",
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A score after range handling: either a bucket index or the invalid marker.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScoreValue {
    /// No usable score was supplied (missing, placeholder, or negative).
    Invalid,
    /// Bucket index in `0..=MAX_SCORE`.
    Bucket(u32),
}

impl ScoreValue {
    /// Map a raw parsed integer onto a bucket.
    ///
    /// Negative values are invalid; values above [`MAX_SCORE`] saturate into
    /// the top bucket.
    pub fn from_raw(raw: i64) -> Self {
        if raw < 0 {
            ScoreValue::Invalid
        } else if raw > i64::from(MAX_SCORE) {
            ScoreValue::Bucket(MAX_SCORE)
        } else {
            ScoreValue::Bucket(raw as u32)
        }
    }

    pub fn is_invalid(&self) -> bool {
        matches!(self, ScoreValue::Invalid)
    }
}

impl From<Option<i64>> for ScoreValue {
    fn from(raw: Option<i64>) -> Self {
        raw.map_or(ScoreValue::Invalid, ScoreValue::from_raw)
    }
}

/// One classified input line: a value (or invalid marker) per side.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScorePair {
    pub inbound: ScoreValue,
    pub outbound: ScoreValue,
}

impl ScorePair {
    pub fn new(inbound: ScoreValue, outbound: ScoreValue) -> Self {
        Self { inbound, outbound }
    }

    /// Build a pair from raw integers, `None` meaning "not supplied".
    pub fn from_raw(inbound: Option<i64>, outbound: Option<i64>) -> Self {
        Self::new(inbound.into(), outbound.into())
    }

    pub fn get(&self, side: Side) -> ScoreValue {
        match side {
            Side::Inbound => self.inbound,
            Side::Outbound => self.outbound,
        }
    }
}

/// Parse a whole token as a signed decimal integer.
///
/// Accepts an optional `+`/`-` sign followed by ASCII digits and nothing
/// else. Magnitudes beyond `i64` saturate instead of failing, so a huge
/// score still reaches the top bucket.
pub fn parse_int(token: &str) -> Option<i64> {
    match token.parse::<i64>() {
        Ok(v) => Some(v),
        Err(e) => match e.kind() {
            IntErrorKind::PosOverflow => Some(i64::MAX),
            IntErrorKind::NegOverflow => Some(i64::MIN),
            _ => None,
        },
    }
}
