use crate::maze::MazeGrid;
use crate::search::find_path;
use core::fmt;
use grid_util::point::Point;
use itertools::Itertools;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Marker {
    OnPath,
    OffPath,
}

/// Characters used when turning a [Marking] into text.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RenderStyle {
    pub on_path: char,
    pub off_path: char,
}

impl Default for RenderStyle {
    fn default() -> RenderStyle {
        RenderStyle {
            on_path: 'S',
            off_path: '-',
        }
    }
}

impl RenderStyle {
    pub fn symbol(&self, marker: Marker) -> char {
        match marker {
            Marker::OnPath => self.on_path,
            Marker::OffPath => self.off_path,
        }
    }
}

/// A grid of markers with the same shape as the maze it was rendered from.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Marking {
    rows: Vec<Vec<Marker>>,
}

impl Marking {
    pub fn width(&self) -> usize {
        self.rows.first().map_or(0, |r| r.len())
    }

    pub fn height(&self) -> usize {
        self.rows.len()
    }

    pub fn rows(&self) -> &[Vec<Marker>] {
        &self.rows
    }

    /// Marker at a cell, [None] outside the marking.
    pub fn get(&self, point: Point) -> Option<Marker> {
        if point.x < 0 || point.y < 0 {
            return None;
        }
        self.rows
            .get(point.y as usize)
            .and_then(|r| r.get(point.x as usize))
            .copied()
    }

    pub fn on_path_count(&self) -> usize {
        self.rows
            .iter()
            .flatten()
            .filter(|m| **m == Marker::OnPath)
            .count()
    }

    /// One line per row, cells separated by a space.
    pub fn to_text(&self, style: &RenderStyle) -> String {
        self.rows
            .iter()
            .map(|row| row.iter().map(|m| style.symbol(*m)).join(" "))
            .join("\n")
    }
}

impl fmt::Display for Marking {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "{}", self.to_text(&RenderStyle::default()))
    }
}

/// Marks the cells of `path` on a grid shaped like `grid`. Cells outside the grid are skipped.
pub fn render(grid: &MazeGrid, path: &[Point]) -> Marking {
    let mut rows = vec![vec![Marker::OffPath; grid.width()]; grid.height()];
    for p in path.iter().filter(|p| grid.in_bounds(**p)) {
        rows[p.y as usize][p.x as usize] = Marker::OnPath;
    }
    Marking { rows }
}

/// Searches the maze and renders the resulting path, if there is one.
pub fn solve(grid: &MazeGrid) -> Option<Marking> {
    find_path(grid).map(|path| render(grid, &path))
}
