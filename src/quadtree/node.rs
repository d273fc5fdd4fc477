use tracing::trace;

use crate::Coord;
use crate::Level;
use crate::Pixel;
use crate::quadtree::region::Quadrant;
use crate::quadtree::region::Rect;
use crate::quadtree::util::area;

/// A square region of a bitmap.
///
/// A node doesn't know its own level; that's implied by its depth below the root of the owning
/// [`QuadTree`](crate::QuadTree). Every operation threads the level through its recursion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    /// The whole square has this value.
    Leaf(Pixel),

    /// The square is split into four equal quadrants, stored as `[top left, top right, bottom
    /// left, bottom right]`.
    Internal(Box<[Node; 4]>),
}

impl Node {
    pub fn is_leaf(&self) -> bool {
        matches!(self, Node::Leaf(_))
    }

    /// The value of a leaf, `None` for an internal node.
    pub fn value(&self) -> Option<Pixel> {
        match self {
            Node::Leaf(value) => Some(*value),
            Node::Internal(_) => None,
        }
    }

    /// The children of an internal node, `None` for a leaf.
    pub fn children(&self) -> Option<&[Node; 4]> {
        match self {
            Node::Leaf(_) => None,
            Node::Internal(children) => Some(&**children),
        }
    }

    /// Pixel `(x, y)` of this level `level` node. Coordinates aren't checked.
    pub(crate) fn get(&self, level: Level, x: Coord, y: Coord) -> Pixel {
        let (mut node, mut level, mut x, mut y) = (self, level, x, y);

        loop {
            match node {
                Node::Leaf(value) => return *value,
                Node::Internal(children) => {
                    let (quadrant, qx, qy) = Quadrant::locate(x, y, level);

                    node = &children[quadrant.index()];
                    level -= 1;
                    (x, y) = (qx, qy);
                }
            }
        }
    }

    /// Write `value` to every pixel of `rect`, which must fit inside this level `level` node.
    pub(crate) fn set(&mut self, level: Level, rect: Rect, value: Pixel) {
        // Also takes care of level 0, where the only rectangle that fits is the whole pixel.
        if rect.covers(level) {
            *self = Node::Leaf(value);
            return;
        }

        if *self == Node::Leaf(value) {
            return;
        }

        let children = self.subdivide();
        for (child, part) in children.iter_mut().zip(rect.split(level)) {
            if let Some(part) = part {
                child.set(level - 1, part, value);
            }
        }

        self.collapse();
    }

    pub(crate) fn complement(&mut self) {
        match self {
            Node::Leaf(value) => *value = !*value,
            Node::Internal(children) => children.iter_mut().for_each(Node::complement),
        }
    }

    /// Turns a leaf into an internal node whose four children all carry the leaf's value, so that
    /// part of it can be rewritten. Internal nodes are returned as-is.
    ///
    /// This leaves the node non-canonical until [`Node::collapse`] runs.
    pub(crate) fn subdivide(&mut self) -> &mut [Node; 4] {
        if let Node::Leaf(value) = *self {
            *self = Node::Internal(Box::new([
                Node::Leaf(value),
                Node::Leaf(value),
                Node::Leaf(value),
                Node::Leaf(value),
            ]));
        }

        match self {
            Node::Internal(children) => &mut **children,
            Node::Leaf(_) => unreachable!("leaf was just subdivided"),
        }
    }

    /// Restore canonical form after rewriting this node's children: four leaves of the same value
    /// become a single leaf. Anything else, including three equal leaves next to an internal node,
    /// is left alone.
    pub(crate) fn collapse(&mut self) {
        let Node::Internal(children) = self else {
            return;
        };

        let uniform = match **children {
            [Node::Leaf(a), Node::Leaf(b), Node::Leaf(c), Node::Leaf(d)]
                if a == b && b == c && c == d =>
            {
                Some(a)
            }
            _ => None,
        };

        if let Some(value) = uniform {
            trace!(%value, "collapsing four equal leaves");
            *self = Node::Leaf(value);
        }
    }

    /// Number of white pixels under this level `level` node.
    pub(crate) fn count_whites(&self, level: Level) -> u64 {
        match self {
            Node::Leaf(Pixel::White) => area(level),
            Node::Leaf(Pixel::Black) => 0,
            Node::Internal(children) => children
                .iter()
                .map(|child| child.count_whites(level - 1))
                .sum(),
        }
    }

    /// Number of nodes in this subtree, itself included.
    pub(crate) fn node_count(&self) -> usize {
        match self {
            Node::Leaf(_) => 1,
            Node::Internal(children) => 1 + children.iter().map(Node::node_count).sum::<usize>(),
        }
    }

    /// Whether no internal node in this level `level` subtree has four equal leaves for children,
    /// and no internal node sits at level `0`.
    pub(crate) fn is_canonical(&self, level: Level) -> bool {
        let Node::Internal(children) = self else {
            return true;
        };

        if level == 0 {
            return false;
        }

        let redundant = match **children {
            [Node::Leaf(a), Node::Leaf(b), Node::Leaf(c), Node::Leaf(d)] => {
                a == b && b == c && c == d
            }
            _ => false,
        };

        !redundant && children.iter().all(|child| child.is_canonical(level - 1))
    }
}
