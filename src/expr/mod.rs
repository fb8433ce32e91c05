//! Parsing and validation of user-entered grid expressions.
//!
//! Free-form text for pattern sizes ("3/8", "2.5") and tuplet ratios
//! ("3:2", "5") becomes a validated value or a typed rejection. Accepted
//! sizes may additionally carry advisories: non-fatal notices that the
//! stored value only approximates the requested one.

mod size;
mod tuplet;

pub use size::parse_size_expression;
pub use tuplet::parse_tuplet_expression;

use std::fmt;
use thiserror::Error;

use crate::grid::{TICKS_PER_QUARTER_NOTE, TICKS_PER_WHOLE_NOTE};

/// Largest accepted tuplet numerator.
pub const MAX_TUPLET_NUMERATOR: u32 = 20;

/// Largest accepted pattern size in whole notes (16/4 on the ruler).
pub const MAX_PATTERN_WHOLE_NOTES: f64 = 4.0;

/// Limit violated by an otherwise well-formed expression.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Bound {
    /// Note-value denominators must lie in `(0, TICKS_PER_WHOLE_NOTE]`.
    Denominator(i64),
    /// Pattern sizes may not exceed four whole notes.
    PatternSizeMax,
    /// Pattern sizes must come to at least one tick.
    PatternSizeMin,
    /// Tuplet numerators may not exceed [`MAX_TUPLET_NUMERATOR`].
    TupletNumerator(i64),
}

impl fmt::Display for Bound {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Bound::Denominator(value) => write!(
                f,
                "denominator value {} rejected, limits: (0, {}]",
                value, TICKS_PER_WHOLE_NOTE
            ),
            Bound::PatternSizeMax => write!(f, "pattern size too big, maximum = 16/4"),
            Bound::PatternSizeMin => write!(
                f,
                "pattern size too small, minimum = 1/{} (one tick)",
                TICKS_PER_WHOLE_NOTE
            ),
            Bound::TupletNumerator(value) => write!(
                f,
                "tuplet numerator {} too big, maximum = {}",
                value, MAX_TUPLET_NUMERATOR
            ),
        }
    }
}

/// Rejection of a size or tuplet expression.
///
/// Rejections never mutate state; they carry everything the input layer
/// needs to tell the user what was wrong.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ExprError {
    /// The text does not match the `a[/b]` / `a[:b]` grammar, a numeric
    /// field does not parse, or a numerator is not positive.
    #[error("invalid expression {0:?}")]
    InvalidExpression(String),

    /// A parsed value violates a documented limit.
    #[error("{0}")]
    OutOfRange(Bound),
}

/// Non-fatal notice accompanying an accepted size expression.
///
/// The size is applied regardless; advisories only explain why the stored
/// pattern will not read back exactly as entered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Advisory {
    /// The denominator does not divide the tick timeline, so lengths in
    /// `1/denominator` notes can only be approximated.
    InexactDenominator { denominator: u32 },

    /// Rounding to whole ticks moved the stored size away from the
    /// requested one at display precision (3 decimal digits).
    SizeApproximated,
}

impl fmt::Display for Advisory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Advisory::InexactDenominator { denominator } => write!(
                f,
                "pattern length in 1/{} notes is not supported, length may be approximated",
                denominator
            ),
            Advisory::SizeApproximated => write!(
                f,
                "pattern size was approximated (resolution = {} ticks/quarter note)",
                TICKS_PER_QUARTER_NOTE
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages_name_the_bound() {
        let err = ExprError::OutOfRange(Bound::Denominator(500));
        assert_eq!(
            err.to_string(),
            "denominator value 500 rejected, limits: (0, 192]"
        );

        let err = ExprError::OutOfRange(Bound::TupletNumerator(25));
        assert_eq!(err.to_string(), "tuplet numerator 25 too big, maximum = 20");

        let err = ExprError::InvalidExpression("3/4/5".to_string());
        assert_eq!(err.to_string(), "invalid expression \"3/4/5\"");
    }

    #[test]
    fn test_advisory_messages() {
        let advisory = Advisory::InexactDenominator { denominator: 5 };
        assert_eq!(
            advisory.to_string(),
            "pattern length in 1/5 notes is not supported, length may be approximated"
        );
        assert_eq!(
            Advisory::SizeApproximated.to_string(),
            "pattern size was approximated (resolution = 48 ticks/quarter note)"
        );
    }
}
