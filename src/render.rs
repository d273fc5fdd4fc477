use core::fmt;

use crate::Level;
use crate::Pixel;
use crate::QuadTree;
use crate::quadtree::Node;

/// The blank braille character. Raising a dot adds its bit from [`DOTS`].
const BRAILLE_EMPTY: u32 = 0x2800;

/// Bit of each dot in a braille cell, indexed by `[row][column]` within its 2x4 block:
///
/// ```text
///  1   8
///  2  10
///  4  20
/// 40  80
/// ```
const DOTS: [[u32; 2]; 4] = [[0x1, 0x8], [0x2, 0x10], [0x4, 0x20], [0x40, 0x80]];

/// Write `tree` as a grid of `0`s and `1`s, one row per line, with pixels separated by a space.
///
/// Every pixel is read with [`QuadTree::get`], so this costs `O(level)` per pixel.
pub fn write_grid<W: fmt::Write>(out: &mut W, tree: &QuadTree) -> fmt::Result {
    let side = tree.side();

    for x in 0..side {
        for y in 0..side {
            if y > 0 {
                out.write_char(' ')?;
            }

            let pixel = tree.get(x, y).map_err(|_| fmt::Error)?;
            write!(out, "{pixel}")?;
        }

        out.write_char('\n')?;
    }

    Ok(())
}

/// Like [`write_grid`], into a new `String`.
pub fn render_grid(tree: &QuadTree) -> String {
    tree.to_string()
}

/// A framebuffer that draws a bitmap with braille characters, each one showing a 2x4 block of
/// pixels. White pixels are raised dots.
#[derive(Debug)]
pub struct Canvas {
    /// Row-major, `true` where a white pixel was drawn.
    pixels: Vec<bool>,

    /// One braille codepoint per 2x4 block, row-major.
    cells: Vec<u32>,

    /// The rendered text, reused between calls to [`Canvas::render`].
    text: String,

    w: usize,
    h: usize,
}

impl Canvas {
    /// A blank canvas of `w` columns by `h` rows of pixels.
    pub fn new(w: usize, h: usize) -> Self {
        let (cols, rows) = (w.div_ceil(2), h.div_ceil(4));

        Self {
            pixels: vec![false; w * h],
            cells: vec![BRAILLE_EMPTY; cols * rows],
            // three bytes per braille character, plus a newline per row
            text: String::with_capacity(3 * cols * rows + rows),
            w,
            h,
        }
    }

    pub fn width(&self) -> usize {
        self.w
    }

    pub fn height(&self) -> usize {
        self.h
    }

    /// Blank every pixel.
    pub fn reset(&mut self) {
        self.pixels.fill(false);
    }

    /// Draw `tree` with its top left corner on the top left of the canvas. Whatever doesn't fit
    /// is cut off.
    ///
    /// Leaves are filled in one square at a time, so large uniform regions are cheap.
    pub fn draw(&mut self, tree: &QuadTree) {
        self.draw_node(tree.root(), tree.size(), 0, 0);
    }

    /// Draw a level `level` node whose top left pixel lands on canvas column `x`, row `y`.
    fn draw_node(&mut self, node: &Node, level: Level, x: usize, y: usize) {
        // Entirely off the canvas
        if x >= self.w || y >= self.h {
            return;
        }

        match node {
            Node::Leaf(Pixel::White) => self.fill_square(x, y, 1 << level),
            Node::Leaf(Pixel::Black) => {}
            Node::Internal(children) => {
                let half = 1 << (level - 1);
                let [tl, tr, bl, br] = &**children;

                self.draw_node(tl, level - 1, x, y);
                self.draw_node(tr, level - 1, x + half, y);
                self.draw_node(bl, level - 1, x, y + half);
                self.draw_node(br, level - 1, x + half, y + half);
            }
        }
    }

    /// Whiten the `s` by `s` square at column `x`, row `y`, clipped to the canvas.
    fn fill_square(&mut self, x: usize, y: usize, s: usize) {
        let (x_end, y_end) = ((x + s).min(self.w), (y + s).min(self.h));

        for row in self.pixels.chunks_exact_mut(self.w).take(y_end).skip(y) {
            row[x..x_end].fill(true);
        }
    }

    /// Turn the drawn pixels into braille text, one line per 4 rows of pixels.
    pub fn render(&mut self) -> &str {
        let cols = self.w.div_ceil(2);
        self.cells.fill(BRAILLE_EMPTY);

        for (y, row) in self.pixels.chunks_exact(self.w.max(1)).enumerate() {
            for (x, _) in row.iter().enumerate().filter(|&(_, &white)| white) {
                self.cells[(y / 4) * cols + x / 2] += DOTS[y % 4][x % 2];
            }
        }

        self.text.clear();
        for line in self.cells.chunks(cols.max(1)) {
            self.text.extend(line.iter().map(|&c| char::from_u32(c).unwrap_or(' ')));
            self.text.push('\n');
        }

        &self.text
    }
}
