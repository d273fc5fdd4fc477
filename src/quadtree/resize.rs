use std::cmp::Ordering;

use tracing::debug;

use crate::Level;
use crate::Pixel;
use crate::QuadTree;
use crate::quadtree::Result;
use crate::quadtree::check_level;
use crate::quadtree::node::Node;
use crate::quadtree::util::area;

impl QuadTree {
    /// Change the bitmap to be `2^m` pixels on a side.
    ///
    /// Growing keeps the tree as-is and only raises its level, so every old pixel now covers a
    /// `2^(m - n)` square: pixel `(x, y)` of the result is pixel `(x >> (m - n), y >> (m - n))` of
    /// the original.
    ///
    /// Shrinking replaces every `2^(n - m)` square with a single pixel, white if at least half of
    /// the square is white. This loses information, so growing back won't restore the original.
    pub fn resize(&mut self, m: Level) -> Result<()> {
        check_level(m)?;

        match m.cmp(&self.level) {
            Ordering::Equal => {}
            Ordering::Greater => self.upscale(m),
            Ordering::Less => self.downscale(m),
        }

        Ok(())
    }

    fn upscale(&mut self, m: Level) {
        debug!(from = self.level, to = m, "upscale");

        // Levels aren't stored in the nodes, so relabelling the root relabels every node below it.
        self.level = m;
    }

    fn downscale(&mut self, m: Level) {
        debug!(from = self.level, to = m, "downscale");

        let cut = self.level - m;
        self.root.downscale(self.level, cut);
        self.level = m;
    }
}

impl Node {
    /// Collapse every node at level `cut` beneath this level `level` node into a single pixel by
    /// majority vote, ties going to white. Leaves above level `cut` are kept as they are.
    fn downscale(&mut self, level: Level, cut: Level) {
        if level == cut {
            let whites = self.count_whites(level);
            let blacks = area(level) - whites;

            *self = Node::Leaf(Pixel::from(whites >= blacks));
            return;
        }

        if let Node::Internal(children) = self {
            for child in children.iter_mut() {
                child.downscale(level - 1, cut);
            }
        }

        self.collapse();
    }
}
