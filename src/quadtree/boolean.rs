use tracing::debug;

use crate::Pixel;
use crate::QuadTree;
use crate::quadtree::Result;
use crate::quadtree::node::Node;

impl QuadTree {
    /// Pixelwise boolean OR: every pixel that's white in `other` becomes white here.
    ///
    /// Both bitmaps must have the same level.
    pub fn overlap(&mut self, other: &QuadTree) -> Result<()> {
        self.check_same_level(other)?;
        debug!(level = self.level, "overlap");

        self.root.combine(&other.root, Pixel::White);

        Ok(())
    }

    /// Pixelwise boolean AND: every pixel that's black in `other` becomes black here.
    ///
    /// Both bitmaps must have the same level.
    pub fn intersect(&mut self, other: &QuadTree) -> Result<()> {
        self.check_same_level(other)?;
        debug!(level = self.level, "intersect");

        self.root.combine(&other.root, Pixel::Black);

        Ok(())
    }
}

impl Node {
    /// Combine two nodes of the same level pixel by pixel, with an operator for which `absorbing`
    /// always wins and its complement is the identity. That's `White` for OR and `Black` for AND.
    ///
    /// Whenever one side is a leaf the answer is either that leaf or a copy of the other side, so
    /// only pairs of internal nodes are recursed into.
    fn combine(&mut self, other: &Node, absorbing: Pixel) {
        if let Node::Leaf(value) = *self {
            if value != absorbing {
                *self = other.clone();
            }

            return;
        }

        let theirs = match other {
            Node::Leaf(value) => {
                if *value == absorbing {
                    *self = Node::Leaf(absorbing);
                }

                return;
            }
            Node::Internal(theirs) => theirs,
        };

        if let Node::Internal(ours) = self {
            for (ours, theirs) in ours.iter_mut().zip(theirs.iter()) {
                ours.combine(theirs, absorbing);
            }
        }

        self.collapse();
    }
}

#[cfg(test)]
mod test {
    use crate::Pixel;
    use crate::QuadTree;
    use crate::QuadTreeError;
    use crate::quadtree::Result;

    /// Two 4x4 bitmaps: one white in the top left quadrant, the other in the bottom right.
    fn diagonal_pair() -> Result<(QuadTree, QuadTree)> {
        let mut a = QuadTree::new(2)?;
        a.set(0, 0, 1, 1, Pixel::White)?;

        let mut b = QuadTree::new(2)?;
        b.set(2, 2, 3, 3, Pixel::White)?;

        Ok((a, b))
    }

    #[test]
    fn overlap_unions_quadrants() -> Result<()> {
        let (mut a, b) = diagonal_pair()?;
        a.overlap(&b)?;

        for x in 0..4 {
            for y in 0..4 {
                let white = (x < 2 && y < 2) || (x >= 2 && y >= 2);
                assert_eq!(a.get(x, y)?, Pixel::from(white), "pixel ({x}, {y})");
            }
        }
        assert!(a.is_canonical());

        Ok(())
    }

    #[test]
    fn intersect_disjoint_is_black() -> Result<()> {
        let (mut a, b) = diagonal_pair()?;
        a.intersect(&b)?;

        assert_eq!(a, QuadTree::new(2)?);

        Ok(())
    }

    #[test]
    fn leaf_fast_paths() -> Result<()> {
        let (a, _) = diagonal_pair()?;

        // black | a = a
        let mut black = QuadTree::new(2)?;
        black.overlap(&a)?;
        assert_eq!(black, a);

        // a | white = white
        let white = QuadTree::filled(2, Pixel::White)?;
        let mut c = a.clone();
        c.overlap(&white)?;
        assert_eq!(c, white);

        // white & a = a
        let mut d = white.clone();
        d.intersect(&a)?;
        assert_eq!(d, a);

        // a & white = a
        let mut e = a.clone();
        e.intersect(&white)?;
        assert_eq!(e, a);

        Ok(())
    }

    #[test]
    fn complementary_halves_collapse() -> Result<()> {
        let mut a = QuadTree::new(3)?;
        a.set(0, 0, 3, 7, Pixel::White)?;
        a.set(5, 5, 5, 5, Pixel::White)?;

        let mut b = a.clone();
        b.complement();

        a.overlap(&b)?;
        assert_eq!(a, QuadTree::filled(3, Pixel::White)?);
        assert_eq!(a.node_count(), 1);

        Ok(())
    }

    #[test]
    fn level_mismatch() -> Result<()> {
        let mut a = QuadTree::new(2)?;
        let b = QuadTree::filled(3, Pixel::White)?;

        let err = QuadTreeError::LevelMismatch { left: 2, right: 3 };
        assert_eq!(a.overlap(&b), Err(err.clone()));
        assert_eq!(a.intersect(&b), Err(err));
        assert_eq!(a, QuadTree::new(2)?);

        Ok(())
    }
}
