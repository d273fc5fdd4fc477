use crate::Coord;
use crate::Level;

/// The largest supported level. A level 20 bitmap is `1_048_576` pixels on a side, and its pixel
/// count still fits comfortably in a `u64`.
pub const MAX_LEVEL: Level = 20;

/// Side length of a level `n` square, `2^n`.
pub const fn side(level: Level) -> Coord {
    1 << level
}

/// Number of pixels in a level `n` square, `2^(2n)`.
pub const fn area(level: Level) -> u64 {
    1 << (2 * level as u32)
}

/// Half the side of a level `n` square, for `n > 0`. This is the first row of the bottom half, and
/// the first column of the right half.
pub const fn mid(level: Level) -> Coord {
    1 << (level - 1)
}
