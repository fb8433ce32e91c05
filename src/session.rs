//! Single-writer editing session owning the grid and cursor.
//!
//! The session holds the only copy of the grid, the cursor, and the
//! edited pattern's size. Views read through it, and every mutation
//! re-clamps the cursor, so the three cannot drift apart.

use crate::expr::{parse_size_expression, parse_tuplet_expression, Advisory, ExprError};
use crate::grid::{CoordinateMapper, GridCursor, GridPreset, GridSpec, TupletRatio};
use crate::pattern::{Pattern, PatternSize};

/// One open pattern-editing context.
///
/// All grid and pattern-size mutations go through this type. Expression
/// mutators apply nothing on rejection, and the pattern's size pair is
/// always published as one value.
#[derive(Debug, Clone, Default)]
pub struct EditSession {
    grid: GridSpec,
    cursor: GridCursor,
    pattern: Pattern,
}

impl EditSession {
    /// Creates a session editing the given pattern, with the default grid
    /// and the cursor at the pattern start.
    pub fn new(pattern: Pattern) -> Self {
        Self {
            grid: GridSpec::default(),
            cursor: GridCursor::new(),
            pattern,
        }
    }

    /// Creates a session with an explicit grid (e.g. restored from
    /// preferences).
    pub fn with_grid(pattern: Pattern, grid: GridSpec) -> Self {
        Self {
            grid,
            cursor: GridCursor::new(),
            pattern,
        }
    }

    /// Returns the grid every consumer of this session shares.
    pub fn grid(&self) -> &GridSpec {
        &self.grid
    }

    /// Returns the pattern being edited.
    pub fn pattern(&self) -> &Pattern {
        &self.pattern
    }

    /// Returns the cursor's grid-mark index.
    pub fn cursor_index(&self) -> u32 {
        self.cursor.index()
    }

    /// Returns the cursor's tick position on the current grid.
    pub fn cursor_tick(&self) -> u32 {
        self.cursor.tick(&self.grid)
    }

    /// Builds a coordinate mapper snapshot for the rendering layer.
    ///
    /// # Arguments
    ///
    /// * `pixels_per_tick` - The rendering layer's current zoom factor
    pub fn mapper(&self, pixels_per_tick: f64) -> CoordinateMapper {
        CoordinateMapper::new(self.grid, self.pattern.length(), pixels_per_tick)
    }

    /// Switches to a different pattern, resetting the cursor to the
    /// start.
    pub fn select_pattern(&mut self, pattern: Pattern) {
        self.pattern = pattern;
        self.cursor.reset();
        tracing::debug!("Selected pattern of size {}", self.pattern.size());
    }

    /// Sets the grid resolution and re-clamps the cursor.
    ///
    /// # Panics
    ///
    /// Panics if `resolution` is zero.
    pub fn set_resolution(&mut self, resolution: u32) {
        self.grid.set_resolution(resolution);
        self.clamp_cursor();
        tracing::debug!("Grid resolution set to {}", resolution);
    }

    /// Replaces the tuplet ratio (both parts at once) and re-clamps the
    /// cursor.
    pub fn set_tuplet_ratio(&mut self, ratio: TupletRatio) {
        self.grid.set_tuplet_ratio(ratio);
        self.clamp_cursor();
        tracing::debug!("Tuplet ratio set to {}", ratio);
    }

    /// Applies a preset from the resolution menu and re-clamps the
    /// cursor.
    pub fn apply_preset(&mut self, preset: GridPreset) {
        self.grid.apply_preset(preset);
        self.clamp_cursor();
        tracing::debug!("Grid preset {} applied", preset.label());
    }

    /// Parses a pattern size expression and applies it.
    ///
    /// The current size seeds the omitted-denominator default. On success
    /// the pattern's (length, denominator) pair is replaced in one update
    /// and the cursor is re-clamped to the new length; on rejection
    /// nothing is mutated.
    ///
    /// # Returns
    ///
    /// The applied size and any advisories explaining approximation
    ///
    /// # Errors
    ///
    /// See [`parse_size_expression`].
    pub fn apply_size_expression(
        &mut self,
        text: &str,
    ) -> Result<(PatternSize, Vec<Advisory>), ExprError> {
        let (size, advisories) = parse_size_expression(text, self.pattern.size())?;
        self.pattern.set_size(size);
        self.clamp_cursor();
        for advisory in &advisories {
            tracing::warn!("{}", advisory);
        }
        tracing::debug!("Pattern size set to {} ({} ticks)", size, size.length());
        Ok((size, advisories))
    }

    /// Parses a tuplet ratio expression and applies it.
    ///
    /// On success the grid's ratio is replaced whole and the cursor is
    /// re-clamped (the granularity changed); on rejection nothing is
    /// mutated.
    ///
    /// # Errors
    ///
    /// See [`parse_tuplet_expression`].
    pub fn apply_tuplet_expression(&mut self, text: &str) -> Result<TupletRatio, ExprError> {
        let ratio = parse_tuplet_expression(text)?;
        self.grid.set_tuplet_ratio(ratio);
        self.clamp_cursor();
        tracing::debug!("Tuplet ratio set to {}", ratio);
        Ok(ratio)
    }

    /// Moves the cursor one grid mark left.
    ///
    /// # Returns
    ///
    /// The new grid-mark index
    pub fn move_cursor_left(&mut self) -> u32 {
        self.cursor.move_left()
    }

    /// Moves the cursor one grid mark right, stopping before the pattern
    /// end.
    ///
    /// # Returns
    ///
    /// The new grid-mark index
    pub fn move_cursor_right(&mut self) -> u32 {
        self.cursor.move_right(&self.grid, self.pattern.length())
    }

    /// Jumps the cursor to a grid-mark index, clamped into the pattern.
    pub fn set_cursor_index(&mut self, index: i32) {
        self.cursor
            .set_index(index, &self.grid, self.pattern.length());
    }

    /// Jumps the cursor to the grid mark nearest a tick position, clamped
    /// into the pattern.
    pub fn set_cursor_tick(&mut self, tick: i32) {
        self.cursor
            .set_tick(tick, &self.grid, self.pattern.length());
    }

    fn clamp_cursor(&mut self) {
        self.cursor.clamp_to(&self.grid, self.pattern.length());
    }
}
