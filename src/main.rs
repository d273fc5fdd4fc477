use std::io;
use std::io::Write;

use crossterm::execute;
use crossterm::style;
use tracing::info;
use tracing_subscriber::EnvFilter;

use region_quadtree::Coord;
use region_quadtree::Level;
use region_quadtree::Pixel;
use region_quadtree::QuadTree;
use region_quadtree::render::Canvas;

const LEVEL: Level = 3;

/// White rectangles of the first bitmap, as `(x1, y1, x2, y2)`.
const P_RECTS: &[(Coord, Coord, Coord, Coord)] = &[
    (0, 0, 1, 1),
    (4, 5, 4, 6),
    (6, 1, 7, 5),
    (1, 5, 1, 5),
    (3, 4, 3, 4),
];

/// White rectangles of the second bitmap.
const Q_RECTS: &[(Coord, Coord, Coord, Coord)] = &[
    (0, 1, 1, 2),
    (5, 7, 6, 7),
    (3, 3, 3, 5),
    (6, 0, 7, 3),
    (0, 0, 1, 2),
];

fn bitmap(rects: &[(Coord, Coord, Coord, Coord)]) -> anyhow::Result<QuadTree> {
    let mut tree = QuadTree::new(LEVEL)?;

    for &(x1, y1, x2, y2) in rects {
        tree.set(x1, y1, x2, y2, Pixel::White)?;
    }

    Ok(tree)
}

fn show<W: Write>(out: &mut W, title: &str, tree: &QuadTree) -> io::Result<()> {
    let side = tree.side();

    info!(title, nodes = tree.node_count(), "showing bitmap");

    execute!(
        out,
        style::Print(format!("{title} ({side}x{side})\n")),
        style::Print(tree),
        style::Print("\n"),
    )
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let mut stdout = io::stdout();

    let p = bitmap(P_RECTS)?;
    let q = bitmap(Q_RECTS)?;
    show(&mut stdout, "p", &p)?;
    show(&mut stdout, "q", &q)?;

    let mut r = p.clone();
    r.overlap(&q)?;
    show(&mut stdout, "p | q", &r)?;

    let mut s = p.clone();
    s.intersect(&q)?;
    show(&mut stdout, "p & q", &s)?;

    s.complement();
    show(&mut stdout, "!(p & q)", &s)?;

    s.resize(LEVEL)?;
    s.set(0, 0, 0, 0, Pixel::White)?;
    show(&mut stdout, "!(p & q), top left pixel set", &s)?;

    s.extract(0, 2, 1)?;
    show(&mut stdout, "extracted at (0, 2)", &s)?;

    let mut halved = r.clone();
    halved.resize(LEVEL - 1)?;
    show(&mut stdout, "p | q, halved", &halved)?;

    let side = r.side() as usize;
    let mut canvas = Canvas::new(side, side);
    canvas.draw(&r);

    execute!(
        stdout,
        style::Print("p | q, in braille\n"),
        style::Print(canvas.render()),
    )?;

    Ok(())
}
