//! Pixel-space to tick-space conversion.
//!
//! The rendering layer owns the zoom factor (pixels per tick) and a left
//! margin before the first tick; this module owns the arithmetic that maps
//! a pixel offset to a tick position or grid-mark index and back, so every
//! editor view snaps positions identically.

use super::spec::GridSpec;

/// Default left margin of the editor drawing area, in pixels.
pub const DEFAULT_MARGIN: i32 = 20;

/// Maps between the rendering layer's pixel space and tick space.
///
/// A mapper is a snapshot of the grid, the pattern length, and the zoom
/// factor at the moment a draw or hit-test happens; build a fresh one per
/// event rather than storing it.
#[derive(Debug, Clone, Copy)]
pub struct CoordinateMapper {
    grid: GridSpec,
    pattern_length: u32,
    pixels_per_tick: f64,
    margin: i32,
}

impl CoordinateMapper {
    /// Creates a mapper with the default margin.
    ///
    /// # Arguments
    ///
    /// * `grid` - Grid to snap against
    /// * `pattern_length` - Pattern length in ticks, the clamping bound
    /// * `pixels_per_tick` - Zoom factor owned by the rendering layer
    ///
    /// # Panics
    ///
    /// Panics if `pattern_length` is zero or `pixels_per_tick` is not a
    /// positive finite number; both are programming errors in the caller.
    pub fn new(grid: GridSpec, pattern_length: u32, pixels_per_tick: f64) -> Self {
        assert!(pattern_length > 0, "pattern length must be positive");
        assert!(
            pixels_per_tick.is_finite() && pixels_per_tick > 0.0,
            "pixels per tick must be positive"
        );
        Self {
            grid,
            pattern_length,
            pixels_per_tick,
            margin: DEFAULT_MARGIN,
        }
    }

    /// Replaces the left margin.
    pub fn with_margin(mut self, margin: i32) -> Self {
        self.margin = margin;
        self
    }

    /// Exact sub-tick position of a pixel offset, unrounded.
    ///
    /// The margin is subtracted first; offsets inside the margin map to
    /// 0.0.
    pub fn float_column(&self, x: i32) -> f64 {
        (x - self.margin).max(0) as f64 / self.pixels_per_tick
    }

    /// Index of the grid mark nearest to a pixel offset.
    ///
    /// Unclamped: offsets past the pattern end keep counting marks, so
    /// callers hit-testing outside the pattern can tell. [`Self::column`]
    /// applies the clamp.
    pub fn grid_index(&self, x: i32) -> u32 {
        (self.float_column(x) / self.grid.granularity()).round() as u32
    }

    /// Tick position of a pixel offset, clamped to the pattern.
    ///
    /// With `fine_grained` false the position snaps to the nearest grid
    /// mark; with it true the grid is bypassed and the exact position is
    /// rounded to the nearest whole tick. Either way the result lies in
    /// `[0, pattern_length)` - clamped, never wrapped.
    pub fn column(&self, x: i32, fine_grained: bool) -> u32 {
        let tick = if fine_grained {
            self.float_column(x).round()
        } else {
            (self.grid_index(x) as f64 * self.grid.granularity()).round()
        };
        (tick as u32).min(self.pattern_length - 1)
    }

    /// Pixel offset of a tick position (margin included).
    pub fn x_at_tick(&self, tick: u32) -> f64 {
        self.margin as f64 + tick as f64 * self.pixels_per_tick
    }

    /// Pixel offset of a grid mark (margin included).
    pub fn x_at_index(&self, index: u32) -> f64 {
        let tick = (index as f64 * self.grid.granularity()).round();
        self.margin as f64 + tick * self.pixels_per_tick
    }
}
