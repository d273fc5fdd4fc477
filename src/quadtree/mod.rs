use core::fmt;

use thiserror::Error;
use tracing::warn;

use crate::Coord;
use crate::Level;
use crate::Pixel;
use crate::quadtree::region::Rect;
use crate::render;

pub use crate::quadtree::node::Node;
pub use crate::quadtree::util::MAX_LEVEL;

mod boolean;
mod extract;
mod node;
mod region;
mod resize;
mod util;

pub type Result<T> = std::result::Result<T, QuadTreeError>;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum QuadTreeError {
    #[error("rows {x1}..={x2}, columns {y1}..={y2} are out of range for a {side}x{side} bitmap")]
    OutOfRange {
        x1: Coord,
        y1: Coord,
        x2: Coord,
        y2: Coord,
        side: Coord,
    },

    #[error("expected bitmaps of the same level, got {left} and {right}")]
    LevelMismatch { left: Level, right: Level },

    #[error("level {level} is larger than the maximum of {max}")]
    LevelTooLarge { level: Level, max: Level },

    #[error("pixels are 0 or 1, got {value}")]
    InvalidPixel { value: u8 },
}

/// A `2^level` by `2^level` binary bitmap, stored as a region quadtree.
///
/// The tree is always kept canonical: no internal node has four leaves of the same value for
/// children. Since the representation of a bitmap is then unique, two trees of the same level are
/// equal exactly when their pixels are.
///
/// Pixel `(x, y)` is row `x`, column `y`, with `(0, 0)` in the top left corner.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuadTree {
    level: Level,
    root: Node,
}

impl QuadTree {
    /// Create an all black `QuadTree` with sidelength `2^level`.
    pub fn new(level: Level) -> Result<Self> {
        Self::filled(level, Pixel::Black)
    }

    /// Create a `QuadTree` with sidelength `2^level` where every pixel is `value`.
    pub fn filled(level: Level, value: Pixel) -> Result<Self> {
        check_level(level)?;

        Ok(QuadTree {
            level,
            root: Node::Leaf(value),
        })
    }

    /// The level `n` of the bitmap, which is `2^n` pixels on a side.
    pub fn size(&self) -> Level {
        self.level
    }

    /// Sidelength of the bitmap, `2^size()`.
    pub fn side(&self) -> Coord {
        util::side(self.level)
    }

    /// The root node, for walking the tree's structure.
    pub fn root(&self) -> &Node {
        &self.root
    }

    /// Read pixel `(x, y)`.
    pub fn get(&self, x: Coord, y: Coord) -> Result<Pixel> {
        let point = Rect::new(x, y, x, y);
        self.check_rect(point)?;

        Ok(self.root.get(self.level, x, y))
    }

    /// Set every pixel with row in `x1..=x2` and column in `y1..=y2` to `value`.
    ///
    /// An empty or out of range rectangle is rejected, and the bitmap is left untouched.
    pub fn set(&mut self, x1: Coord, y1: Coord, x2: Coord, y2: Coord, value: Pixel) -> Result<()> {
        let rect = Rect::new(x1, y1, x2, y2);
        self.check_rect(rect)?;

        self.root.set(self.level, rect, value);

        Ok(())
    }

    /// Flip every pixel.
    pub fn complement(&mut self) {
        self.root.complement();
    }

    /// Number of pixels equal to `value`.
    pub fn count(&self, value: Pixel) -> u64 {
        let whites = self.root.count_whites(self.level);

        match value {
            Pixel::White => whites,
            Pixel::Black => util::area(self.level) - whites,
        }
    }

    /// Number of nodes in the tree, leaves included.
    pub fn node_count(&self) -> usize {
        self.root.node_count()
    }

    /// Whether the tree is in canonical form. This holds after every public operation, so it
    /// should only ever be `false` if there's a bug.
    pub fn is_canonical(&self) -> bool {
        self.root.is_canonical(self.level)
    }

    fn check_rect(&self, rect: Rect) -> Result<()> {
        if rect.fits(self.level) {
            return Ok(());
        }

        warn!(?rect, level = self.level, "rejecting out of range pixels");

        Err(QuadTreeError::OutOfRange {
            x1: rect.x1,
            y1: rect.y1,
            x2: rect.x2,
            y2: rect.y2,
            side: self.side(),
        })
    }

    fn check_same_level(&self, other: &QuadTree) -> Result<()> {
        if self.level == other.level {
            return Ok(());
        }

        warn!(
            left = self.level,
            right = other.level,
            "rejecting bitmaps of different levels"
        );

        Err(QuadTreeError::LevelMismatch {
            left: self.level,
            right: other.level,
        })
    }
}

fn check_level(level: Level) -> Result<()> {
    if level > MAX_LEVEL {
        return Err(QuadTreeError::LevelTooLarge {
            level,
            max: MAX_LEVEL,
        });
    }

    Ok(())
}

impl fmt::Display for QuadTree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        render::write_grid(f, self)
    }
}

#[cfg(test)]
mod test {
    use super::QuadTree;
    use super::QuadTreeError;
    use crate::Pixel;

    #[test]
    fn new_is_all_black() -> super::Result<()> {
        let qt = QuadTree::new(3)?;

        assert_eq!(qt.size(), 3);
        assert_eq!(qt.side(), 8);
        assert_eq!(qt.count(Pixel::Black), 64);
        assert_eq!(qt.node_count(), 1);

        Ok(())
    }

    #[test]
    fn root_exposes_structure() -> super::Result<()> {
        let mut qt = QuadTree::new(1)?;
        qt.set(1, 1, 1, 1, Pixel::White)?;

        let children = qt.root().children().map(|c| c.clone().map(|n| n.value()));
        assert_eq!(
            children,
            Some([
                Some(Pixel::Black),
                Some(Pixel::Black),
                Some(Pixel::Black),
                Some(Pixel::White)
            ])
        );
        assert!(!qt.root().is_leaf());

        Ok(())
    }

    #[test]
    fn level_limit() {
        assert!(QuadTree::new(20).is_ok());
        assert_eq!(
            QuadTree::new(21),
            Err(QuadTreeError::LevelTooLarge { level: 21, max: 20 })
        );
    }

    #[test]
    fn set_small_square() -> super::Result<()> {
        let mut qt = QuadTree::new(3)?;
        qt.set(0, 0, 1, 1, Pixel::White)?;

        assert_eq!(qt.get(0, 0)?, Pixel::White);
        assert_eq!(qt.get(1, 1)?, Pixel::White);
        assert_eq!(qt.get(2, 2)?, Pixel::Black);
        assert_eq!(qt.count(Pixel::White), 4);
        assert!(qt.is_canonical());

        Ok(())
    }

    #[test]
    fn set_full_square_collapses() -> super::Result<()> {
        let mut qt = QuadTree::new(3)?;
        qt.set(0, 0, 1, 1, Pixel::White)?;
        qt.set(0, 0, 7, 7, Pixel::White)?;

        assert_eq!(qt.size(), 3);
        assert_eq!(qt.root().children(), None);
        assert_eq!(qt.root().value(), Some(Pixel::White));

        qt.complement();
        assert_eq!(qt.root().value(), Some(Pixel::Black));

        Ok(())
    }

    #[test]
    fn set_rejects_bad_rectangles() -> super::Result<()> {
        let mut qt = QuadTree::new(2)?;
        qt.set(1, 1, 2, 2, Pixel::White)?;
        let before = qt.clone();

        // inverted
        assert!(matches!(
            qt.set(2, 0, 1, 0, Pixel::White),
            Err(QuadTreeError::OutOfRange { .. })
        ));
        // past the edge
        assert_eq!(
            qt.set(0, 0, 0, 4, Pixel::White),
            Err(QuadTreeError::OutOfRange {
                x1: 0,
                y1: 0,
                x2: 0,
                y2: 4,
                side: 4
            })
        );
        assert_eq!(qt, before);

        Ok(())
    }

    #[test]
    fn get_rejects_out_of_range() -> super::Result<()> {
        let qt = QuadTree::filled(1, Pixel::White)?;

        assert_eq!(qt.get(1, 1)?, Pixel::White);
        assert!(qt.get(2, 0).is_err());
        assert!(qt.get(0, 2).is_err());

        Ok(())
    }

    #[test]
    fn single_pixel_tree() -> super::Result<()> {
        let mut qt = QuadTree::new(0)?;
        qt.set(0, 0, 0, 0, Pixel::White)?;

        assert_eq!(qt.get(0, 0)?, Pixel::White);
        assert_eq!(qt.node_count(), 1);

        Ok(())
    }

    #[test]
    fn set_twice_is_idempotent() -> super::Result<()> {
        let mut qt = QuadTree::new(3)?;
        qt.set(1, 2, 6, 5, Pixel::White)?;
        let once = qt.clone();
        qt.set(1, 2, 6, 5, Pixel::White)?;

        assert_eq!(qt, once);

        Ok(())
    }

    #[test]
    fn clone_is_independent() -> super::Result<()> {
        let mut a = QuadTree::new(2)?;
        a.set(0, 0, 1, 1, Pixel::White)?;
        let b = a.clone();
        a.complement();

        assert_eq!(b.get(0, 0)?, Pixel::White);
        assert_eq!(a.get(0, 0)?, Pixel::Black);

        Ok(())
    }
}
