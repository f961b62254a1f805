//! Drawing a grid and a search into the terminal.
//!
//! [`Canvas::compose`] is pure: it decides what each cell shows. [`paint`]
//! only turns that into bytes, either coloured blocks via crossterm or plain
//! glyphs.

use std::collections::BTreeSet;
use std::io::{self, Write};

use crossterm::queue;
use crossterm::style::{Color as CtColor, Print, ResetColor, SetBackgroundColor};
use gridstar_core::{Grid, Point};
use gridstar_paths::SearchResult;

use crate::config::{Color, VizConfig};

/// What a single cell shows.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Mark {
    Free,
    Blocked,
    Explored,
    Path,
    Start,
    Goal,
}

/// A composed picture of the grid, one [`Mark`] per cell in row-major
/// order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Canvas {
    width: usize,
    marks: Vec<Mark>,
}

impl Canvas {
    /// Lay out a grid with the explored cells and path on top of it.
    ///
    /// Later layers win: free/blocked, then explored, then path, then goal,
    /// then start.
    pub fn compose(
        grid: &Grid,
        explored: &BTreeSet<Point>,
        path: &[Point],
        start: Point,
        goal: Point,
    ) -> Self {
        let mut marks: Vec<Mark> = grid
            .bounds()
            .iter()
            .map(|p| if grid.is_free(p) { Mark::Free } else { Mark::Blocked })
            .collect();
        let mut set = |p: Point, m: Mark| {
            if let Some(i) = grid.index(p) {
                marks[i] = m;
            }
        };
        for &p in explored {
            set(p, Mark::Explored);
        }
        for &p in path {
            set(p, Mark::Path);
        }
        set(goal, Mark::Goal);
        set(start, Mark::Start);
        Self {
            width: grid.width() as usize,
            marks,
        }
    }

    /// Lay out a finished search.
    pub fn from_result(grid: &Grid, result: &SearchResult, start: Point, goal: Point) -> Self {
        Self::compose(grid, &result.explored, &result.path, start, goal)
    }

    /// Number of rows.
    pub fn height(&self) -> usize {
        self.marks.len() / self.width
    }

    /// Rows, top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[Mark]> {
        self.marks.chunks(self.width)
    }
}

/// Lines to move the cursor up to draw over `canvas` in place, or `None`
/// if it is taller than a terminal cursor move can reach.
pub fn redraw_rows(canvas: &Canvas) -> Option<u16> {
    u16::try_from(canvas.height()).ok()
}

/// Maps a config [`Color`] to a [`crossterm::style::Color`].
fn to_ct_color(c: Color) -> CtColor {
    CtColor::Rgb {
        r: c.r(),
        g: c.g(),
        b: c.b(),
    }
}

/// Write the canvas to `out`, one line per row.
///
/// In colour mode every cell is two spaces wide so cells come out roughly
/// square.
pub fn paint<W: Write>(canvas: &Canvas, config: &VizConfig, out: &mut W) -> io::Result<()> {
    for row in canvas.rows() {
        if config.plain {
            let line: String = row.iter().map(|&m| glyph(config, m)).collect();
            writeln!(out, "{line}")?;
            continue;
        }
        for &m in row {
            queue!(
                out,
                SetBackgroundColor(to_ct_color(color(config, m))),
                Print("  ")
            )?;
        }
        queue!(out, ResetColor, Print("\n"))?;
    }
    out.flush()
}

fn glyph(config: &VizConfig, m: Mark) -> char {
    let g = &config.glyphs;
    match m {
        Mark::Free => g.free,
        Mark::Blocked => g.blocked,
        Mark::Explored => g.explored,
        Mark::Path => g.path,
        Mark::Start => g.start,
        Mark::Goal => g.goal,
    }
}

fn color(config: &VizConfig, m: Mark) -> Color {
    let p = &config.palette;
    match m {
        Mark::Free => p.free,
        Mark::Blocked => p.blocked,
        Mark::Explored => p.explored,
        Mark::Path => p.path,
        Mark::Start => p.start,
        Mark::Goal => p.goal,
    }
}

/// One-line outcome report. Counts path cells, start and goal included.
pub fn summary(result: &SearchResult) -> String {
    if result.path.is_empty() {
        "No path found.".to_string()
    } else {
        format!("Path found with {} steps.", result.path.len())
    }
}
