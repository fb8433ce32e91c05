//! Pattern size state: length in ticks plus its display denominator.
//!
//! A pattern's length is stored in ticks, but users think in fractions of
//! a whole note, so the note-value denominator they entered is stored
//! alongside and used to render the size back as a fraction.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::grid::{divides_timeline, TICKS_PER_WHOLE_NOTE};

/// Length and display denominator of one pattern.
///
/// The two fields are one value: a length rendered under a different
/// denominator is a different size string, and a concurrent reader must
/// never see a fresh length with a stale denominator. They are therefore
/// only ever replaced together (see [`Pattern::set_size`]).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PatternSize {
    length: u32,
    denominator: u32,
}

impl PatternSize {
    /// Creates a pattern size.
    ///
    /// # Arguments
    ///
    /// * `length` - Pattern length in ticks
    /// * `denominator` - Note-value denominator the size displays under
    ///
    /// # Panics
    ///
    /// Panics if `length` is zero or `denominator` is outside
    /// `(0, TICKS_PER_WHOLE_NOTE]`; the expression parser rejects such
    /// input before construction, so hitting this is a programming error.
    pub fn new(length: u32, denominator: u32) -> Self {
        assert!(length > 0, "pattern length must be positive");
        assert!(
            denominator > 0 && denominator <= TICKS_PER_WHOLE_NOTE,
            "pattern denominator must lie in (0, {}]",
            TICKS_PER_WHOLE_NOTE
        );
        Self {
            length,
            denominator,
        }
    }

    /// Returns the pattern length in ticks.
    pub fn length(&self) -> u32 {
        self.length
    }

    /// Returns the display denominator.
    pub fn denominator(&self) -> u32 {
        self.denominator
    }

    /// Numerator of the size rendered as a fraction over the stored
    /// denominator: `length / TICKS_PER_WHOLE_NOTE * denominator`.
    pub fn display_numerator(&self) -> f64 {
        self.length as f64 * self.denominator as f64 / TICKS_PER_WHOLE_NOTE as f64
    }

    /// True when the size renders as an exact integer fraction, i.e. the
    /// length is a whole multiple of `1/denominator` notes.
    pub fn is_exact(&self) -> bool {
        (self.length as u64 * self.denominator as u64) % TICKS_PER_WHOLE_NOTE as u64 == 0
    }

    /// True when the denominator itself cannot subdivide the timeline.
    ///
    /// Shown as a persistent warning even when the rendered numerator
    /// happens to be an integer (a size of 5/5 renders exactly, but other
    /// lengths in fifths would not), so the user knows the denominator is
    /// approximating.
    pub fn needs_denominator_warning(&self) -> bool {
        !divides_timeline(self.denominator)
    }
}

impl Default for PatternSize {
    /// One whole note, displayed as "4/4".
    fn default() -> Self {
        Self {
            length: TICKS_PER_WHOLE_NOTE,
            denominator: 4,
        }
    }
}

impl fmt::Display for PatternSize {
    /// Renders `"numerator/denominator"`.
    ///
    /// Exact sizes print an integer numerator. Inexact ones print it with
    /// exactly 3 decimal digits, enough to distinguish a single tick
    /// (1/192 of a whole note is about 0.005).
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_exact() {
            let numerator =
                self.length as u64 * self.denominator as u64 / TICKS_PER_WHOLE_NOTE as u64;
            write!(f, "{}/{}", numerator, self.denominator)
        } else {
            write!(f, "{:.3}/{}", self.display_numerator(), self.denominator)
        }
    }
}

/// The slice of pattern state the grid engine reads and writes.
///
/// The surrounding application shares the pattern with a real-time reader,
/// so the size pair is published only as a whole value; there are no
/// field-level setters.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pattern {
    size: PatternSize,
}

impl Pattern {
    /// Creates a pattern with the given size.
    pub fn new(size: PatternSize) -> Self {
        Self { size }
    }

    /// Returns the current size.
    pub fn size(&self) -> PatternSize {
        self.size
    }

    /// Returns the pattern length in ticks.
    pub fn length(&self) -> u32 {
        self.size.length()
    }

    /// Returns the display denominator.
    pub fn denominator(&self) -> u32 {
        self.size.denominator()
    }

    /// Replaces length and denominator as one consistent pair.
    pub fn set_size(&mut self, size: PatternSize) {
        self.size = size;
    }
}
