//! Grid state: resolution and tuplet ratio.
//!
//! A grid is described by a resolution (subdivisions per whole note) and a
//! tuplet ratio reshaping those subdivisions. Together they determine the
//! granularity, the tick distance between adjacent grid marks.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::TICKS_PER_WHOLE_NOTE;

/// Rational multiplier reshaping plain note values.
///
/// The ratio numerator:denominator means "numerator notes in the time of
/// denominator plain ones", so a single note under the ratio is scaled by
/// denominator/numerator. Standard triplets are 3:2 (an eighth under a
/// triplet lasts 1/8 * 2/3 = 1/12 of a whole note), quintuplets 5:4.
///
/// Any n:n ratio leaves note values untouched; the canonical stored form
/// for "no tuplet" is 4:4, and every unit ratio displays as "off".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TupletRatio {
    numerator: u32,
    denominator: u32,
}

impl TupletRatio {
    /// The canonical "no tuplet" ratio.
    pub const OFF: TupletRatio = TupletRatio {
        numerator: 4,
        denominator: 4,
    };

    /// Standard triplet ratio, 3:2.
    pub const TRIPLET: TupletRatio = TupletRatio {
        numerator: 3,
        denominator: 2,
    };

    /// Creates a tuplet ratio.
    ///
    /// # Panics
    ///
    /// Panics if either part is zero; zero parts are a programming error,
    /// not user input (the expression parser rejects them first).
    pub fn new(numerator: u32, denominator: u32) -> Self {
        assert!(numerator > 0, "tuplet numerator must be positive");
        assert!(denominator > 0, "tuplet denominator must be positive");
        Self {
            numerator,
            denominator,
        }
    }

    /// Number of notes played in the time of `denominator` plain ones.
    pub fn numerator(&self) -> u32 {
        self.numerator
    }

    /// Plain note count the numerator is squeezed into.
    pub fn denominator(&self) -> u32 {
        self.denominator
    }

    /// True for unit ratios (n:n), which leave the grid untouched.
    pub fn is_off(&self) -> bool {
        self.numerator == self.denominator
    }
}

impl Default for TupletRatio {
    fn default() -> Self {
        Self::OFF
    }
}

impl fmt::Display for TupletRatio {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_off() {
            write!(f, "off")
        } else {
            write!(f, "{}:{}", self.numerator, self.denominator)
        }
    }
}

/// Grid resolution and tuplet ratio for one editing context.
///
/// The two tuplet parts are only ever replaced together as a whole
/// [`TupletRatio`], so no caller can observe a half-updated ratio and the
/// derived granularity stays consistent.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GridSpec {
    /// Subdivisions per whole note absent tuplets. Power of two in the
    /// stock menu, or `TICKS_PER_WHOLE_NOTE` for the "off" (finest) grid.
    resolution: u32,

    /// Tuplet ratio applied on top of the resolution.
    tuplet: TupletRatio,
}

impl GridSpec {
    /// Creates a grid with the given resolution and tuplet ratio.
    ///
    /// # Panics
    ///
    /// Panics if `resolution` is zero.
    pub fn new(resolution: u32, tuplet: TupletRatio) -> Self {
        assert!(resolution > 0, "grid resolution must be positive");
        Self { resolution, tuplet }
    }

    /// Returns the grid resolution.
    pub fn resolution(&self) -> u32 {
        self.resolution
    }

    /// Returns the tuplet ratio.
    pub fn tuplet_ratio(&self) -> TupletRatio {
        self.tuplet
    }

    /// Sets the grid resolution.
    ///
    /// # Panics
    ///
    /// Panics if `resolution` is zero.
    pub fn set_resolution(&mut self, resolution: u32) {
        assert!(resolution > 0, "grid resolution must be positive");
        self.resolution = resolution;
    }

    /// Replaces the tuplet ratio, both parts at once.
    pub fn set_tuplet_ratio(&mut self, ratio: TupletRatio) {
        self.tuplet = ratio;
    }

    /// Applies a preset from the resolution menu.
    ///
    /// Straight presets keep the current tuplet ratio; triplet presets and
    /// "off" replace it (see [`GridPreset::tuplet_ratio`]).
    pub fn apply_preset(&mut self, preset: GridPreset) {
        self.resolution = preset.resolution();
        if let Some(ratio) = preset.tuplet_ratio() {
            self.tuplet = ratio;
        }
    }

    /// Tick distance between adjacent grid marks.
    ///
    /// `TICKS_PER_WHOLE_NOTE * tupletDenominator / (tupletNumerator *
    /// resolution)`, kept in floating point so nothing truncates before
    /// the call site rounds. Always positive; fractional for tuplet grids
    /// (e.g. resolution 8 under 3:2 gives 16.0, resolution 16 under 5:4
    /// gives 9.6).
    pub fn granularity(&self) -> f64 {
        TICKS_PER_WHOLE_NOTE as f64 * self.tuplet.denominator as f64
            / (self.tuplet.numerator as f64 * self.resolution as f64)
    }
}

impl Default for GridSpec {
    /// Eighth-note grid, tuplet off - the editor's startup grid.
    fn default() -> Self {
        Self {
            resolution: 8,
            tuplet: TupletRatio::OFF,
        }
    }
}

/// The editor's fixed grid resolution menu.
///
/// Straight entries select a resolution and leave the tuplet ratio alone;
/// triplet entries also force 3:2; `Off` selects the finest grid (one mark
/// per tick) and switches tuplets off.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GridPreset {
    Quarter,
    Eighth,
    Sixteenth,
    ThirtySecond,
    SixtyFourth,
    QuarterTriplet,
    EighthTriplet,
    SixteenthTriplet,
    ThirtySecondTriplet,
    Off,
}

impl GridPreset {
    /// All presets in menu order.
    pub const ALL: [GridPreset; 10] = [
        GridPreset::Quarter,
        GridPreset::Eighth,
        GridPreset::Sixteenth,
        GridPreset::ThirtySecond,
        GridPreset::SixtyFourth,
        GridPreset::QuarterTriplet,
        GridPreset::EighthTriplet,
        GridPreset::SixteenthTriplet,
        GridPreset::ThirtySecondTriplet,
        GridPreset::Off,
    ];

    /// Grid resolution selected by this preset.
    pub fn resolution(self) -> u32 {
        match self {
            GridPreset::Quarter | GridPreset::QuarterTriplet => 4,
            GridPreset::Eighth | GridPreset::EighthTriplet => 8,
            GridPreset::Sixteenth | GridPreset::SixteenthTriplet => 16,
            GridPreset::ThirtySecond | GridPreset::ThirtySecondTriplet => 32,
            GridPreset::SixtyFourth => 64,
            GridPreset::Off => TICKS_PER_WHOLE_NOTE,
        }
    }

    /// Tuplet ratio forced by this preset, or None to keep the current
    /// one.
    pub fn tuplet_ratio(self) -> Option<TupletRatio> {
        match self {
            GridPreset::Quarter
            | GridPreset::Eighth
            | GridPreset::Sixteenth
            | GridPreset::ThirtySecond
            | GridPreset::SixtyFourth => None,
            GridPreset::QuarterTriplet
            | GridPreset::EighthTriplet
            | GridPreset::SixteenthTriplet
            | GridPreset::ThirtySecondTriplet => Some(TupletRatio::TRIPLET),
            GridPreset::Off => Some(TupletRatio::OFF),
        }
    }

    /// Menu label for this preset.
    pub fn label(self) -> &'static str {
        match self {
            GridPreset::Quarter => "1/4",
            GridPreset::Eighth => "1/8",
            GridPreset::Sixteenth => "1/16",
            GridPreset::ThirtySecond => "1/32",
            GridPreset::SixtyFourth => "1/64",
            GridPreset::QuarterTriplet => "1/4T",
            GridPreset::EighthTriplet => "1/8T",
            GridPreset::SixteenthTriplet => "1/16T",
            GridPreset::ThirtySecondTriplet => "1/32T",
            GridPreset::Off => "off",
        }
    }
}
