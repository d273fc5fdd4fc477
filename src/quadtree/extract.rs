use tracing::debug;

use crate::Coord;
use crate::Level;
use crate::QuadTree;
use crate::QuadTreeError;
use crate::quadtree::Result;
use crate::quadtree::node::Node;
use crate::quadtree::region::Rect;
use crate::quadtree::util::side;

impl QuadTree {
    /// Replace the bitmap with its `2^m` by `2^m` sub-square whose top left pixel is `(x1, y1)`.
    ///
    /// The sub-square must lie inside the bitmap, which means `m <= size()`. That holds for a
    /// uniform bitmap too: it can't be grown through `extract`, use [`QuadTree::resize`].
    pub fn extract(&mut self, x1: Coord, y1: Coord, m: Level) -> Result<()> {
        if m > self.level {
            return Err(QuadTreeError::LevelTooLarge {
                level: m,
                max: self.level,
            });
        }

        let region = Rect::square(x1, y1, m).ok_or_else(|| QuadTreeError::OutOfRange {
            x1,
            y1,
            x2: x1.saturating_add(side(m) - 1),
            y2: y1.saturating_add(side(m) - 1),
            side: self.side(),
        })?;
        self.check_rect(region)?;

        // Only `(0, 0)` passes the range check at full size.
        if m == self.level {
            return Ok(());
        }

        debug!(x1, y1, from = self.level, to = m, "extract");

        // Any part of a uniform bitmap is that same bitmap, only smaller.
        if !self.root.is_leaf() {
            self.root = self.root.extract(self.level, x1, y1, m);
        }
        self.level = m;

        Ok(())
    }
}

impl Node {
    /// Build a new level `m` node holding the square at `(x1, y1)` of this level `level` node.
    /// The square must fit inside the node.
    fn extract(&self, level: Level, x1: Coord, y1: Coord, m: Level) -> Node {
        let children = match self {
            Node::Leaf(value) => return Node::Leaf(*value),
            Node::Internal(children) => children,
        };

        if m == 0 {
            return Node::Leaf(self.get(level, x1, y1));
        }

        if m == level {
            return self.clone();
        }

        let half = side(m - 1);
        let region = Rect::new(x1, y1, x1 + 2 * half - 1, y1 + 2 * half - 1);

        if let Some((quadrant, local)) = region.quadrant(level) {
            return children[quadrant.index()].extract(level - 1, local.x1, local.y1, m);
        }

        // The square straddles the middle of this node, so build it a quarter at a time.
        let mut node = Node::Internal(Box::new([
            self.extract(level, x1, y1, m - 1),
            self.extract(level, x1, y1 + half, m - 1),
            self.extract(level, x1 + half, y1, m - 1),
            self.extract(level, x1 + half, y1 + half, m - 1),
        ]));
        node.collapse();

        node
    }
}
