//! Shape pattern table
//!
//! Each pattern is a 16 character string laid out row-major over the 4x4
//! piece grid. Shape letters stamp that shape, `.` is filler.

use crate::types::Shape;

/// Patterns in [`Shape::ALL`] order
pub const PATTERNS: [&str; 7] = [
    "....IIII........",
    ".....OO..OO.....",
    "......T..TTT....",
    ".....L...L...LL.",
    "......J...J..JJ.",
    ".....S...SS...S.",
    "......Z..ZZ..Z..",
];

/// Pattern string for a shape
pub fn pattern(shape: Shape) -> &'static str {
    PATTERNS[shape.index()]
}
