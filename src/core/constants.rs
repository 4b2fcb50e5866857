//! A collection of constants.

/// One bin per lowercase ASCII letter
pub const ALPHABET_LEN: usize = 26;
/// The labels printed under the horizontal axis
pub const ALPHABET: &str = "abcdefghijklmnopqrstuvwxyz";

/// Chart rows drawn when `-r` is not given
pub const DEFAULT_ROWS: usize = 10;
/// A tick is drawn every third row when `-s` is not given
pub const DEFAULT_TICK_STRIDE: usize = 3;

/// Marker for a bin whose count exceeds the row floor
pub const FILLED: char = '*';
pub const BLANK: char = ' ';

// Axis glyphs
pub const V_AXIS: char = '|';
pub const H_AXIS: char = '-';
pub const CORNER: char = '+';
