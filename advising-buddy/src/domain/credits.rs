//! Credit-hour range type.

use std::fmt;
use std::ops::RangeInclusive;
use std::str::FromStr;

/// Error returned when parsing an invalid credit string.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid credits {input:?}: {reason}")]
pub struct InvalidCredits {
    input: String,
    reason: &'static str,
}

impl InvalidCredits {
    fn new(input: &str, reason: &'static str) -> Self {
        Self {
            input: input.to_string(),
            reason,
        }
    }
}

/// The credit-hour values a course may award.
///
/// Always a non-empty run of contiguous ascending integers. A fixed-credit
/// course has `min == max`.
///
/// # Examples
///
/// ```
/// use advising_buddy::domain::CreditRange;
///
/// let fixed = CreditRange::parse("3").unwrap();
/// assert_eq!((fixed.min(), fixed.max()), (3, 3));
///
/// let ranged = CreditRange::parse("1-4").unwrap();
/// assert_eq!(ranged.values().collect::<Vec<_>>(), vec![1, 2, 3, 4]);
///
/// // Descending ranges are rejected
/// assert!(CreditRange::parse("4-1").is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CreditRange {
    min: u32,
    max: u32,
}

impl CreditRange {
    /// A single fixed credit value.
    pub fn fixed(value: u32) -> Self {
        Self {
            min: value,
            max: value,
        }
    }

    /// A range `min..=max`. Returns `None` when `min > max`.
    pub fn new(min: u32, max: u32) -> Option<Self> {
        (min <= max).then_some(Self { min, max })
    }

    /// Parse a credit string of the form `"N"` or `"A-B"`.
    pub fn parse(s: &str) -> Result<Self, InvalidCredits> {
        let parts: Vec<&str> = s.split('-').collect();

        match parts.as_slice() {
            [single] => Ok(Self::fixed(parse_value(s, single)?)),
            [low, high] => {
                let low = parse_value(s, low)?;
                let high = parse_value(s, high)?;
                Self::new(low, high)
                    .ok_or_else(|| InvalidCredits::new(s, "range low end exceeds high end"))
            }
            _ => Err(InvalidCredits::new(s, "expected \"N\" or \"A-B\"")),
        }
    }

    /// Smallest credit value.
    pub fn min(&self) -> u32 {
        self.min
    }

    /// Largest credit value.
    pub fn max(&self) -> u32 {
        self.max
    }

    /// True when the course awards exactly one credit value.
    pub fn is_fixed(&self) -> bool {
        self.min == self.max
    }

    /// Every possible credit value, ascending.
    pub fn values(&self) -> RangeInclusive<u32> {
        self.min..=self.max
    }
}

fn parse_value(input: &str, part: &str) -> Result<u32, InvalidCredits> {
    let part = part.trim();
    if part.is_empty() {
        return Err(InvalidCredits::new(input, "missing credit value"));
    }
    part.parse()
        .map_err(|_| InvalidCredits::new(input, "credit values must be non-negative integers"))
}

impl FromStr for CreditRange {
    type Err = InvalidCredits;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for CreditRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_fixed() {
            write!(f, "{}", self.min)
        } else {
            write!(f, "{}-{}", self.min, self.max)
        }
    }
}
