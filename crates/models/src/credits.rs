use serde::Serialize;
use std::{
    cmp::Ordering,
    fmt::{Display, Formatter, Result as FmtResult},
    str::FromStr,
};

/// Custom error type for parsing credits
#[derive(Debug, Clone, Serialize, PartialEq)]
pub enum ParseCreditsError {
    EmptyInput,
    NotNumeric,
}

impl Display for ParseCreditsError {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            Self::EmptyInput => write!(f, "Empty input string"),
            Self::NotNumeric => write!(f, "No numeric credit value found in input"),
        }
    }
}

/// Parses a single finite, non-negative number, e.g. a program's total credits.
///
/// Anything else, including the "N.A." marker used by the source spreadsheet,
/// yields `None`.
pub fn parse_credit_value(s: &str) -> Option<f64> {
    s.trim()
        .parse::<f64>()
        .ok()
        .filter(|value| value.is_finite() && *value >= 0.0)
}

/// Represents the number of credits a course is worth
#[derive(Debug, Clone, Copy, Serialize, PartialEq)]
pub enum Credits {
    /// A fixed number of credits
    Fixed(f64),
    /// A range of credits, lower bound first
    Range(f64, f64),
}

impl Credits {
    /// Parses a credit cell, returning `None` when the cell is unusable.
    ///
    /// Unparseable credit cells are expected in the source data and must not
    /// abort an import, so callers store absent bounds instead.
    pub fn lenient(s: &str) -> Option<Self> {
        Self::from_str(s).ok()
    }

    /// Helper to get the minimum value
    pub fn min_value(&self) -> f64 {
        match self {
            Self::Fixed(value) => *value,
            Self::Range(min, _) => *min,
        }
    }

    /// Helper to get the maximum value
    pub fn max_value(&self) -> f64 {
        match self {
            Self::Fixed(value) => *value,
            Self::Range(_, max) => *max,
        }
    }

    /// Lower and upper bound as stored on a course row
    pub fn bounds(credits: Option<Self>) -> (Option<f64>, Option<f64>) {
        match credits {
            Some(credits) => (Some(credits.min_value()), Some(credits.max_value())),
            None => (None, None),
        }
    }
}

impl PartialOrd for Credits {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        // Order first by minimum value, then by maximum value if min is equal
        match self.min_value().partial_cmp(&other.min_value()) {
            Some(Ordering::Equal) => self.max_value().partial_cmp(&other.max_value()),
            other => other,
        }
    }
}

impl FromStr for Credits {
    type Err = ParseCreditsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() {
            return Err(ParseCreditsError::EmptyInput);
        }

        if let Some(value) = parse_credit_value(s) {
            return Ok(Self::Fixed(value));
        }

        // A span such as "5-10", lower bound first
        if let Some((low, high)) = s.split_once('-')
            && let (Some(min), Some(max)) = (parse_credit_value(low), parse_credit_value(high))
        {
            if min < max {
                return Ok(Self::Range(min, max));
            }
            if min == max {
                return Ok(Self::Fixed(min));
            }
        }

        Err(ParseCreditsError::NotNumeric)
    }
}

impl Display for Credits {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            Self::Fixed(value) => {
                // Format as whole number if it's an integer
                if value.fract() == 0.0 {
                    write!(f, "{}", *value as i64)
                } else {
                    write!(f, "{value}")
                }
            }
            Self::Range(min, max) => {
                if min.fract() == 0.0 && max.fract() == 0.0 {
                    write!(f, "{}-{}", *min as i64, *max as i64)
                } else {
                    write!(f, "{min}-{max}")
                }
            }
        }
    }
}
