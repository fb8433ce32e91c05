//! Pattern size expressions: `<numerator>[/<denominator>]`.

use crate::grid::{divides_timeline, TICKS_PER_WHOLE_NOTE};
use crate::pattern::PatternSize;

use super::{Advisory, Bound, ExprError, MAX_PATTERN_WHOLE_NOTES};

/// Parses a pattern size expression against the current size.
///
/// The numerator may be fractional, with either `.` or `,` as the decimal
/// separator. When the denominator is omitted the current pattern's
/// denominator is reused. The accepted size is
/// `round(TICKS_PER_WHOLE_NOTE / denominator * numerator)` ticks, rounding
/// halves away from zero; unsupported denominators are not rejected, since
/// a fractional numerator over an arbitrary denominator is what lets any
/// tick count be expressed (38 ticks is both "1/5" and "0.79/4"). They are
/// reported back as advisories instead.
///
/// # Arguments
///
/// * `text` - Raw user input
/// * `current` - Current size, seeding the omitted-denominator default
///
/// # Returns
///
/// The validated size and any advisories explaining approximation
///
/// # Errors
///
/// [`ExprError::InvalidExpression`] for malformed text,
/// [`ExprError::OutOfRange`] for a denominator outside
/// `(0, TICKS_PER_WHOLE_NOTE]` or a size beyond 16/4 or under one tick.
///
/// # Examples
///
/// ```
/// use tickgrid::{parse_size_expression, PatternSize};
///
/// let current = PatternSize::default();
/// let (size, advisories) = parse_size_expression("3/8", current).unwrap();
/// assert_eq!(size.length(), 72);
/// assert!(advisories.is_empty());
/// ```
pub fn parse_size_expression(
    text: &str,
    current: PatternSize,
) -> Result<(PatternSize, Vec<Advisory>), ExprError> {
    let invalid = || ExprError::InvalidExpression(text.to_string());

    let parts: Vec<&str> = text.split('/').collect();
    if parts.len() > 2 {
        return Err(invalid());
    }

    // Both '.' and ',' are accepted as the decimal separator.
    let numerator: f64 = parts[0]
        .trim()
        .replace(',', ".")
        .parse()
        .map_err(|_| invalid())?;

    let denominator = match parts.get(1) {
        Some(part) => {
            let value: i64 = part.trim().parse().map_err(|_| invalid())?;
            if value <= 0 || value > TICKS_PER_WHOLE_NOTE as i64 {
                return Err(ExprError::OutOfRange(Bound::Denominator(value)));
            }
            value as u32
        }
        None => current.denominator(),
    };

    if numerator.is_nan() || numerator <= 0.0 {
        return Err(invalid());
    }
    if numerator / denominator as f64 > MAX_PATTERN_WHOLE_NOTES {
        return Err(ExprError::OutOfRange(Bound::PatternSizeMax));
    }

    let mut advisories = Vec::new();
    if !divides_timeline(denominator) {
        advisories.push(Advisory::InexactDenominator { denominator });
    }

    let length = (TICKS_PER_WHOLE_NOTE as f64 / denominator as f64 * numerator).round();
    if length < 1.0 {
        return Err(ExprError::OutOfRange(Bound::PatternSizeMin));
    }
    let length = length as u32;

    // Compare at 3 decimal digits, the precision the size displays with.
    let displayed_thousandths =
        (length as f64 / TICKS_PER_WHOLE_NOTE as f64 * denominator as f64 * 1000.0).round() as i64;
    let requested_thousandths = (numerator * 1000.0).round() as i64;
    if displayed_thousandths != requested_thousandths {
        advisories.push(Advisory::SizeApproximated);
    }

    Ok((PatternSize::new(length, denominator), advisories))
}
