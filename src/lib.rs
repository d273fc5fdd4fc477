pub mod pixel;
pub mod quadtree;
pub mod render;

pub use pixel::Pixel;
pub use quadtree::QuadTree;
pub use quadtree::QuadTreeError;

/// Exponent of a square's side length. A level `n` square is `2^n` pixels on a side, and level
/// `0` is a single pixel.
pub type Level = u8;

/// A row or column index into a bitmap. Rows grow downwards, columns grow to the right.
pub type Coord = u32;
