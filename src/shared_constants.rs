/// Number of individually addressable LEDs on the face display.
pub const LED_COUNT: usize = 33;

/// Most glyphs a single table may hold.
pub const MAX_CHAR_INDICES: usize = 25;

/// Logical rows of the face display, and row masks per glyph.
pub const ROWS: usize = 5;

/// Column positions of the hexagonal grid. Only the middle row uses all of them.
pub const GRID_COLUMNS: usize = 9;
