use crate::Coord;
use crate::Level;
use crate::quadtree::util::mid;
use crate::quadtree::util::side;

/// One of the four equal quarters of a square.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Quadrant {
    TopLeft,
    TopRight,
    BottomLeft,
    BottomRight,
}

impl Quadrant {
    /// All quadrants, in the order children are stored in.
    pub(crate) const ALL: [Quadrant; 4] = [
        Quadrant::TopLeft,
        Quadrant::TopRight,
        Quadrant::BottomLeft,
        Quadrant::BottomRight,
    ];

    pub(crate) const fn index(self) -> usize {
        self as usize
    }

    /// Row and column of the quadrant's top left pixel, in the frame of its level `level` parent.
    pub(crate) const fn origin(self, level: Level) -> (Coord, Coord) {
        let mid = mid(level);

        match self {
            Quadrant::TopLeft => (0, 0),
            Quadrant::TopRight => (0, mid),
            Quadrant::BottomLeft => (mid, 0),
            Quadrant::BottomRight => (mid, mid),
        }
    }

    /// Find the quadrant of a level `level` square that holds pixel `(x, y)`, and re-express the
    /// pixel in that quadrant's own frame.
    pub(crate) const fn locate(x: Coord, y: Coord, level: Level) -> (Quadrant, Coord, Coord) {
        let mid = mid(level);

        match (x >= mid, y >= mid) {
            (false, false) => (Quadrant::TopLeft, x, y),
            (false, true) => (Quadrant::TopRight, x, y - mid),
            (true, false) => (Quadrant::BottomLeft, x - mid, y),
            (true, true) => (Quadrant::BottomRight, x - mid, y - mid),
        }
    }
}

/// An inclusive rectangle of rows `x1..=x2` and columns `y1..=y2`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Rect {
    pub x1: Coord,
    pub y1: Coord,
    pub x2: Coord,
    pub y2: Coord,
}

impl Rect {
    pub(crate) const fn new(x1: Coord, y1: Coord, x2: Coord, y2: Coord) -> Self {
        Rect { x1, y1, x2, y2 }
    }

    /// The level `level` square whose top left pixel is `(x, y)`. `None` if the square would run
    /// past the largest representable coordinate.
    pub(crate) fn square(x: Coord, y: Coord, level: Level) -> Option<Self> {
        let extent = side(level) - 1;

        Some(Rect {
            x1: x,
            y1: y,
            x2: x.checked_add(extent)?,
            y2: y.checked_add(extent)?,
        })
    }

    /// Whether the rectangle is non-empty and lies inside a level `level` square.
    pub(crate) const fn fits(&self, level: Level) -> bool {
        let side = side(level);

        self.x1 <= self.x2 && self.y1 <= self.y2 && self.x2 < side && self.y2 < side
    }

    /// Whether the rectangle is exactly the whole of a level `level` square.
    pub(crate) const fn covers(&self, level: Level) -> bool {
        let last = side(level) - 1;

        self.x1 == 0 && self.y1 == 0 && self.x2 == last && self.y2 == last
    }

    /// Clips the rectangle against each quadrant of a level `level` square (`level > 0`).
    ///
    /// Entry `i` holds the part of the rectangle inside `Quadrant::ALL[i]`, re-expressed in that
    /// quadrant's frame, or `None` if the two don't intersect.
    pub(crate) fn split(&self, level: Level) -> [Option<Rect>; 4] {
        let last = mid(level) - 1;

        Quadrant::ALL.map(|quadrant| {
            let (ox, oy) = quadrant.origin(level);

            let x1 = self.x1.max(ox);
            let y1 = self.y1.max(oy);
            let x2 = self.x2.min(ox + last);
            let y2 = self.y2.min(oy + last);

            if x1 > x2 || y1 > y2 {
                return None;
            }

            Some(Rect::new(x1 - ox, y1 - oy, x2 - ox, y2 - oy))
        })
    }

    /// If the rectangle lies entirely inside one quadrant of a level `level` square (`level > 0`),
    /// returns that quadrant along with the rectangle in the quadrant's frame.
    pub(crate) fn quadrant(&self, level: Level) -> Option<(Quadrant, Rect)> {
        let (top_left, x1, y1) = Quadrant::locate(self.x1, self.y1, level);
        let (bottom_right, x2, y2) = Quadrant::locate(self.x2, self.y2, level);

        if top_left != bottom_right {
            return None;
        }

        Some((top_left, Rect::new(x1, y1, x2, y2)))
    }
}

#[cfg(test)]
mod test {
    use super::Quadrant;
    use super::Rect;

    #[test]
    fn locate_shifts_into_child_frame() {
        assert_eq!(Quadrant::locate(0, 0, 3), (Quadrant::TopLeft, 0, 0));
        assert_eq!(Quadrant::locate(3, 4, 3), (Quadrant::TopRight, 3, 0));
        assert_eq!(Quadrant::locate(4, 3, 3), (Quadrant::BottomLeft, 0, 3));
        assert_eq!(Quadrant::locate(7, 7, 3), (Quadrant::BottomRight, 3, 3));
    }

    #[test]
    fn split_across_all_quadrants() {
        let parts = Rect::new(1, 2, 5, 6).split(3);

        assert_eq!(
            parts,
            [
                Some(Rect::new(1, 2, 3, 3)),
                Some(Rect::new(1, 0, 3, 2)),
                Some(Rect::new(0, 2, 1, 3)),
                Some(Rect::new(0, 0, 1, 2)),
            ]
        );
    }

    #[test]
    fn split_inside_one_quadrant() {
        let parts = Rect::new(6, 1, 7, 2).split(3);

        assert_eq!(parts, [None, None, Some(Rect::new(2, 1, 3, 2)), None]);
    }

    #[test]
    fn split_across_one_axis() {
        // rows 0..=1 in the top half, columns straddling the middle
        let parts = Rect::new(0, 3, 1, 4).split(3);

        assert_eq!(
            parts,
            [
                Some(Rect::new(0, 3, 1, 3)),
                Some(Rect::new(0, 0, 1, 0)),
                None,
                None,
            ]
        );
    }

    #[test]
    fn quadrant_of_rect() {
        assert_eq!(
            Rect::new(4, 4, 5, 5).quadrant(3),
            Some((Quadrant::BottomRight, Rect::new(0, 0, 1, 1)))
        );
        assert_eq!(Rect::new(2, 2, 5, 5).quadrant(3), None);
        assert_eq!(
            Rect::new(0, 4, 3, 7).quadrant(3),
            Some((Quadrant::TopRight, Rect::new(0, 0, 3, 3)))
        );
    }

    #[test]
    fn square_bounds() {
        assert_eq!(Rect::square(2, 4, 2), Some(Rect::new(2, 4, 5, 7)));
        assert_eq!(Rect::square(u32::MAX, 0, 1), None);
        assert!(Rect::square(4, 4, 2).is_some_and(|r| r.fits(3)));
        assert!(!Rect::square(5, 4, 2).is_some_and(|r| r.fits(3)));
        assert!(Rect::new(0, 0, 7, 7).covers(3));
        assert!(!Rect::new(0, 0, 7, 6).covers(3));
    }
}
