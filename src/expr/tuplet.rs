//! Tuplet ratio expressions: `<numerator>[:<denominator>]`.

use crate::grid::{TupletRatio, TICKS_PER_WHOLE_NOTE};

use super::{Bound, ExprError, MAX_TUPLET_NUMERATOR};

/// Parses a tuplet ratio expression.
///
/// When the denominator is omitted it is derived the way music notation
/// implies it: the largest power of two not exceeding the numerator, so
/// "3" means 3:2, "5" means 5:4, "7" means 7:4. Unit ratios, spelled out
/// ("4:4") or derived ("8" becomes 8:8), are returned as the canonical
/// off value.
///
/// # Arguments
///
/// * `text` - Raw user input
///
/// # Returns
///
/// The validated ratio, normalized to [`TupletRatio::OFF`] when it would
/// not reshape the grid
///
/// # Errors
///
/// [`ExprError::InvalidExpression`] for malformed text,
/// [`ExprError::OutOfRange`] for a denominator outside
/// `(0, TICKS_PER_WHOLE_NOTE]` or a numerator above
/// [`MAX_TUPLET_NUMERATOR`].
///
/// # Examples
///
/// ```
/// use tickgrid::parse_tuplet_expression;
///
/// let ratio = parse_tuplet_expression("5").unwrap();
/// assert_eq!((ratio.numerator(), ratio.denominator()), (5, 4));
/// ```
pub fn parse_tuplet_expression(text: &str) -> Result<TupletRatio, ExprError> {
    let invalid = || ExprError::InvalidExpression(text.to_string());

    let parts: Vec<&str> = text.split(':').collect();
    if parts.len() > 2 {
        return Err(invalid());
    }

    let numerator: i64 = parts[0].trim().parse().map_err(|_| invalid())?;

    let explicit_denominator = match parts.get(1) {
        Some(part) => {
            let value: i64 = part.trim().parse().map_err(|_| invalid())?;
            if value <= 0 || value > TICKS_PER_WHOLE_NOTE as i64 {
                return Err(ExprError::OutOfRange(Bound::Denominator(value)));
            }
            Some(value as u32)
        }
        None => None,
    };

    if numerator <= 0 {
        return Err(invalid());
    }
    if numerator > MAX_TUPLET_NUMERATOR as i64 {
        return Err(ExprError::OutOfRange(Bound::TupletNumerator(numerator)));
    }
    let numerator = numerator as u32;

    let denominator = explicit_denominator.unwrap_or_else(|| {
        let mut value = 1;
        while 2 * value <= numerator {
            value *= 2;
        }
        value
    });

    if numerator == denominator {
        Ok(TupletRatio::OFF)
    } else {
        Ok(TupletRatio::new(numerator, denominator))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_explicit_ratio() {
        assert_eq!(parse_tuplet_expression("3:2"), Ok(TupletRatio::TRIPLET));
        assert_eq!(parse_tuplet_expression("5:4"), Ok(TupletRatio::new(5, 4)));
        // Unusual but legal ratios pass through untouched.
        assert_eq!(parse_tuplet_expression("5:7"), Ok(TupletRatio::new(5, 7)));
        assert_eq!(parse_tuplet_expression("4:3"), Ok(TupletRatio::new(4, 3)));
    }

    #[test]
    fn test_derived_denominator() {
        // Largest power of two not exceeding the numerator.
        assert_eq!(parse_tuplet_expression("3"), Ok(TupletRatio::TRIPLET));
        assert_eq!(parse_tuplet_expression("5"), Ok(TupletRatio::new(5, 4)));
        assert_eq!(parse_tuplet_expression("7"), Ok(TupletRatio::new(7, 4)));
        assert_eq!(parse_tuplet_expression("9"), Ok(TupletRatio::new(9, 8)));
        assert_eq!(parse_tuplet_expression("20"), Ok(TupletRatio::new(20, 16)));
    }

    #[test]
    fn test_unit_ratios_normalize_to_off() {
        // "4" derives 4:4; a power-of-two numerator always derives itself.
        assert_eq!(parse_tuplet_expression("4"), Ok(TupletRatio::OFF));
        assert_eq!(parse_tuplet_expression("8"), Ok(TupletRatio::OFF));
        assert_eq!(parse_tuplet_expression("1"), Ok(TupletRatio::OFF));
        assert_eq!(parse_tuplet_expression("4:4"), Ok(TupletRatio::OFF));
        assert_eq!(parse_tuplet_expression("7:7"), Ok(TupletRatio::OFF));
        assert!(parse_tuplet_expression("8").unwrap().is_off());
    }

    #[test]
    fn test_numerator_ceiling() {
        assert_eq!(
            parse_tuplet_expression("25"),
            Err(ExprError::OutOfRange(Bound::TupletNumerator(25)))
        );
        assert_eq!(
            parse_tuplet_expression("21:16"),
            Err(ExprError::OutOfRange(Bound::TupletNumerator(21)))
        );
    }

    #[test]
    fn test_denominator_bounds() {
        assert_eq!(
            parse_tuplet_expression("5:0"),
            Err(ExprError::OutOfRange(Bound::Denominator(0)))
        );
        assert_eq!(
            parse_tuplet_expression("5:193"),
            Err(ExprError::OutOfRange(Bound::Denominator(193)))
        );
        // Large denominators inside the bound are accepted.
        assert_eq!(
            parse_tuplet_expression("5:192"),
            Ok(TupletRatio::new(5, 192))
        );
        // Denominator bound is checked before the numerator ceiling.
        assert_eq!(
            parse_tuplet_expression("25:500"),
            Err(ExprError::OutOfRange(Bound::Denominator(500)))
        );
    }

    #[test]
    fn test_malformed_text() {
        for text in ["", "abc", "3:2:1", "5:", ":4", "3.5", "5:x"] {
            assert_eq!(
                parse_tuplet_expression(text),
                Err(ExprError::InvalidExpression(text.to_string())),
                "{:?} should be invalid",
                text
            );
        }
    }

    #[test]
    fn test_non_positive_numerator() {
        assert_eq!(
            parse_tuplet_expression("0"),
            Err(ExprError::InvalidExpression("0".to_string()))
        );
        assert_eq!(
            parse_tuplet_expression("-3:2"),
            Err(ExprError::InvalidExpression("-3:2".to_string()))
        );
    }

    #[test]
    fn test_whitespace_tolerated() {
        assert_eq!(parse_tuplet_expression(" 3 : 2 "), Ok(TupletRatio::TRIPLET));
    }
}
