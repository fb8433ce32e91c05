//! Keyboard cursor over the editing grid.
//!
//! The cursor is stored as a grid-mark index, not a tick position, so it
//! lands exactly on a mark for every grid including tuplet grids whose
//! granularity is fractional. Its tick position is derived on demand.

use super::spec::GridSpec;

/// Cursor position as a grid-mark index, clamped to the pattern.
///
/// Movement never fails; at the edges it stays put. The index is only
/// meaningful together with the grid it moves on, so every operation that
/// depends on mark spacing takes the grid and the pattern length.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct GridCursor {
    index: u32,
}

impl GridCursor {
    /// Creates a cursor at the pattern start.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the grid-mark index.
    pub fn index(&self) -> u32 {
        self.index
    }

    /// Tick position of the cursor on the given grid.
    pub fn tick(&self, grid: &GridSpec) -> u32 {
        (self.index as f64 * grid.granularity()).round() as u32
    }

    /// Moves one mark left, stopping at the pattern start.
    ///
    /// # Returns
    ///
    /// The new grid-mark index
    pub fn move_left(&mut self) -> u32 {
        if self.index > 0 {
            self.index -= 1;
        }
        self.index
    }

    /// Moves one mark right, stopping before the pattern end.
    ///
    /// The move happens only if the next mark's tick position,
    /// `round((index + 1) * granularity)`, still lies inside the pattern.
    ///
    /// # Returns
    ///
    /// The new grid-mark index
    pub fn move_right(&mut self, grid: &GridSpec, pattern_length: u32) -> u32 {
        let next_tick = ((self.index + 1) as f64 * grid.granularity()).round();
        if next_tick < pattern_length as f64 {
            self.index += 1;
        }
        self.index
    }

    /// Jumps to a grid-mark index, clamping into the pattern.
    ///
    /// Negative input clamps to 0. Input whose tick position would reach
    /// or pass the pattern end clamps to `pattern_length / granularity`,
    /// truncated.
    pub fn set_index(&mut self, index: i32, grid: &GridSpec, pattern_length: u32) {
        let granularity = grid.granularity();
        if index < 0 {
            self.index = 0;
        } else if (index as f64 * granularity).round() >= pattern_length as f64 {
            self.index = (pattern_length as f64 / granularity) as u32;
        } else {
            self.index = index as u32;
        }
    }

    /// Jumps to the grid mark nearest a tick position, clamping into the
    /// pattern.
    pub fn set_tick(&mut self, tick: i32, grid: &GridSpec, pattern_length: u32) {
        let granularity = grid.granularity();
        if tick < 0 {
            self.index = 0;
        } else if tick as u32 >= pattern_length {
            self.index = (pattern_length as f64 / granularity) as u32;
        } else {
            self.index = (tick as f64 / granularity).round() as u32;
        }
    }

    /// Re-clamps the cursor after the grid or the pattern length changed.
    pub fn clamp_to(&mut self, grid: &GridSpec, pattern_length: u32) {
        self.set_index(self.index as i32, grid, pattern_length);
    }

    /// Returns to the pattern start (pattern switch).
    pub fn reset(&mut self) {
        self.index = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::super::spec::TupletRatio;
    use super::*;

    fn sixteenth_grid() -> GridSpec {
        GridSpec::new(16, TupletRatio::OFF) // granularity 12
    }

    #[test]
    fn test_move_left_stops_at_start() {
        let mut cursor = GridCursor::new();
        assert_eq!(cursor.move_left(), 0);
        cursor.set_index(3, &sixteenth_grid(), 192);
        assert_eq!(cursor.move_left(), 2);
    }

    #[test]
    fn test_move_right_stops_before_pattern_end() {
        let grid = sixteenth_grid();
        let mut cursor = GridCursor::new();
        // Marks every 12 ticks, so 0..=15 fit in 192 ticks.
        for expected in 1..=15 {
            assert_eq!(cursor.move_right(&grid, 192), expected);
        }
        assert_eq!(cursor.move_right(&grid, 192), 15); // round(16 * 12) == 192
        assert_eq!(cursor.tick(&grid), 180);
    }

    #[test]
    fn test_move_right_on_triplet_grid() {
        let grid = GridSpec::new(8, TupletRatio::TRIPLET); // granularity 16
        let mut cursor = GridCursor::new();
        for _ in 0..30 {
            cursor.move_right(&grid, 192);
        }
        assert_eq!(cursor.index(), 11); // round(12 * 16) == 192 blocks
        assert_eq!(cursor.tick(&grid), 176);
    }

    #[test]
    fn test_tick_rounds_fractional_granularity() {
        // Sixteenth quintuplets: granularity 9.6.
        let grid = GridSpec::new(16, TupletRatio::new(5, 4));
        let mut cursor = GridCursor::new();
        cursor.set_index(2, &grid, 192);
        assert_eq!(cursor.tick(&grid), 19); // round(19.2)
        cursor.set_index(3, &grid, 192);
        assert_eq!(cursor.tick(&grid), 29); // round(28.8)
    }

    #[test]
    fn test_set_index_clamps() {
        let grid = sixteenth_grid();
        let mut cursor = GridCursor::new();

        cursor.set_index(-5, &grid, 192);
        assert_eq!(cursor.index(), 0);

        cursor.set_index(7, &grid, 192);
        assert_eq!(cursor.index(), 7);

        // Past the end: clamps to length / granularity, truncated.
        cursor.set_index(100, &grid, 192);
        assert_eq!(cursor.index(), 16);
    }

    #[test]
    fn test_set_index_edge_sits_past_last_movable_mark() {
        // The clamp target 192 / 12 = 16 is one mark past where
        // move_right stops (15).
        let grid = sixteenth_grid();
        let mut cursor = GridCursor::new();
        cursor.set_index(16, &grid, 192);
        assert_eq!(cursor.index(), 16);
        assert_eq!(cursor.move_right(&grid, 192), 16);
    }

    #[test]
    fn test_set_tick() {
        let grid = sixteenth_grid();
        let mut cursor = GridCursor::new();

        cursor.set_tick(60, &grid, 192);
        assert_eq!(cursor.index(), 5);

        cursor.set_tick(65, &grid, 192); // 65 / 12 = 5.42, nearest mark 5
        assert_eq!(cursor.index(), 5);

        cursor.set_tick(-3, &grid, 192);
        assert_eq!(cursor.index(), 0);

        cursor.set_tick(500, &grid, 192);
        assert_eq!(cursor.index(), 16);
    }

    #[test]
    fn test_clamp_to_after_grid_change() {
        let mut cursor = GridCursor::new();
        let fine = sixteenth_grid();
        cursor.set_index(15, &fine, 192);

        // Switching to a quarter grid (granularity 48) leaves index 15
        // pointing at tick 720; it clamps to 192 / 48 = 4.
        let coarse = GridSpec::new(4, TupletRatio::OFF);
        cursor.clamp_to(&coarse, 192);
        assert_eq!(cursor.index(), 4);
    }

    #[test]
    fn test_reset() {
        let grid = sixteenth_grid();
        let mut cursor = GridCursor::new();
        cursor.set_index(9, &grid, 192);
        cursor.reset();
        assert_eq!(cursor.index(), 0);
        assert_eq!(cursor.tick(&grid), 0);
    }
}
