//! tickgrid - tick-based grid quantization and cursor positioning for
//! pattern editors.
//!
//! A pattern's timeline is measured in ticks (192 per whole note); editing
//! happens on a grid derived from a resolution and a tuplet ratio. This
//! crate provides the grid arithmetic, the pixel-space coordinate mapping,
//! the keyboard cursor, and the parsers that turn user-entered size and
//! tuplet expressions into validated values.

pub mod expr;
pub mod grid;
pub mod pattern;
pub mod session;

// Re-export commonly used types
pub use expr::{
    parse_size_expression, parse_tuplet_expression, Advisory, Bound, ExprError,
    MAX_TUPLET_NUMERATOR,
};
pub use grid::{
    divides_timeline, CoordinateMapper, GridCursor, GridPreset, GridSpec, TupletRatio,
    SUPPORTED_DENOMINATORS, TICKS_PER_WHOLE_NOTE,
};
pub use pattern::{Pattern, PatternSize};
pub use session::EditSession;
