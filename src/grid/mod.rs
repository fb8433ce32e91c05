//! Tick timeline constants and the editing-grid model.
//!
//! This module provides the fixed tick resolution of the pattern timeline
//! and the types built on top of it: the grid state (resolution + tuplet
//! ratio), the pixel-space coordinate mapper, and the keyboard cursor.

mod cursor;
mod mapper;
mod spec;

pub use cursor::GridCursor;
pub use mapper::{CoordinateMapper, DEFAULT_MARGIN};
pub use spec::{GridPreset, GridSpec, TupletRatio};

/// Ticks per whole note - the fixed resolution of the pattern timeline.
///
/// 192 factors as 2^6 * 3, so every standard note-value denominator
/// including the triplet families divides it exactly. Everything else in
/// the crate is derived from this constant; changing it invalidates all
/// persisted tick data.
pub const TICKS_PER_WHOLE_NOTE: u32 = 192;

/// Ticks per quarter note, quoted in user-facing resolution messages.
pub const TICKS_PER_QUARTER_NOTE: u32 = TICKS_PER_WHOLE_NOTE / 4;

/// Note-value denominators that subdivide the timeline exactly.
/// Valid if and only if `TICKS_PER_WHOLE_NOTE` is 192.
pub const SUPPORTED_DENOMINATORS: [u32; 14] =
    [1, 2, 3, 4, 6, 8, 12, 16, 24, 32, 48, 64, 96, 192];

/// Checks whether a note-value denominator divides the tick timeline
/// exactly.
///
/// Pattern sizes entered with any other denominator can only be stored
/// approximately, rounded to the nearest whole tick.
#[inline]
pub fn divides_timeline(denominator: u32) -> bool {
    denominator != 0 && TICKS_PER_WHOLE_NOTE % denominator == 0
}

/// Converts a tick count to whole notes.
///
/// # Arguments
///
/// * `ticks` - Number of ticks
///
/// # Returns
///
/// The exact length in whole notes (1 whole note = 192 ticks)
#[inline]
pub fn ticks_to_whole_notes(ticks: u32) -> f64 {
    ticks as f64 / TICKS_PER_WHOLE_NOTE as f64
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_supported_denominators_divide() {
        for &den in &SUPPORTED_DENOMINATORS {
            assert!(divides_timeline(den), "{} should divide 192", den);
        }
    }

    #[test]
    fn test_supported_denominators_complete() {
        // The list is exactly the divisor set of 192.
        for den in 1..=TICKS_PER_WHOLE_NOTE {
            assert_eq!(
                SUPPORTED_DENOMINATORS.contains(&den),
                divides_timeline(den),
                "divisor set mismatch at {}",
                den
            );
        }
    }

    #[test]
    fn test_unsupported_denominators() {
        assert!(!divides_timeline(0));
        assert!(!divides_timeline(5));
        assert!(!divides_timeline(7));
        assert!(!divides_timeline(100));
    }

    #[test]
    fn test_ticks_to_whole_notes() {
        assert_eq!(ticks_to_whole_notes(192), 1.0);
        assert_eq!(ticks_to_whole_notes(48), 0.25);
        assert_eq!(ticks_to_whole_notes(0), 0.0);
    }
}
