use crate::error::MazeError;
use core::fmt;
use core::str::FromStr;
use grid_util::grid::{BoolGrid, ValueGrid};
use grid_util::point::Point;
use log::debug;
use petgraph::unionfind::UnionFind;

/// An immutable rectangular maze. Cells are addressed with [Point] where `x` is the column and
/// `y` the row. The start is always the top-left cell and the goal the bottom-right one.
///
/// Like the occupancy grids used elsewhere for pathfinding, the underlying [BoolGrid] stores
/// `true` for blocked cells. Connected components over the 4-neighbourhood are computed once at
/// construction using a [UnionFind] structure, so reachability queries are cheap.
#[derive(Clone, Debug)]
pub struct MazeGrid {
    grid: BoolGrid,
    width: usize,
    height: usize,
    components: UnionFind<usize>,
}

impl MazeGrid {
    /// Builds a maze from rows of cells where `true` is passable.
    pub fn new(rows: Vec<Vec<bool>>) -> Result<MazeGrid, MazeError> {
        let height = rows.len();
        let width = rows.first().ok_or(MazeError::Empty)?.len();
        if width == 0 {
            return Err(MazeError::ZeroWidth);
        }
        if let Some((row, r)) = rows.iter().enumerate().find(|(_, r)| r.len() != width) {
            return Err(MazeError::Ragged {
                row,
                expected: width,
                found: r.len(),
            });
        }
        let mut grid = BoolGrid::new(width, height, true);
        for (y, row) in rows.iter().enumerate() {
            for (x, &passable) in row.iter().enumerate() {
                if passable {
                    grid.set(x as i32, y as i32, false);
                }
            }
        }
        let mut maze = MazeGrid {
            grid,
            width,
            height,
            components: UnionFind::new(width * height),
        };
        maze.generate_components();
        Ok(maze)
    }

    /// Builds a maze from integer rows. Only `1` is passable, every other value is a wall.
    pub fn from_rows<R: AsRef<[u8]>>(rows: &[R]) -> Result<MazeGrid, MazeError> {
        MazeGrid::new(
            rows.iter()
                .map(|r| r.as_ref().iter().map(|&v| v == 1).collect())
                .collect(),
        )
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn start(&self) -> Point {
        Point::new(0, 0)
    }

    pub fn goal(&self) -> Point {
        Point::new(self.width as i32 - 1, self.height as i32 - 1)
    }

    pub fn in_bounds(&self, point: Point) -> bool {
        point.x >= 0
            && point.y >= 0
            && (point.x as usize) < self.width
            && (point.y as usize) < self.height
    }

    /// Whether the cell can be entered. Out-of-bounds cells are never passable.
    pub fn is_passable(&self, point: Point) -> bool {
        self.in_bounds(point) && !self.grid.get(point.x, point.y)
    }

    pub fn passable_count(&self) -> usize {
        self.points().filter(|p| self.is_passable(*p)).count()
    }

    /// All cells in row-major order.
    pub fn points(&self) -> impl Iterator<Item = Point> + '_ {
        let (width, height) = (self.width as i32, self.height as i32);
        (0..height).flat_map(move |y| (0..width).map(move |x| Point::new(x, y)))
    }

    fn get_ix_point(&self, point: &Point) -> usize {
        point.y as usize * self.width + point.x as usize
    }

    /// Retrieves the component id a given passable [Point] belongs to.
    pub fn get_component(&self, point: &Point) -> Option<usize> {
        if self.is_passable(*point) {
            Some(self.components.find(self.get_ix_point(point)))
        } else {
            None
        }
    }

    /// Checks if start and goal are passable and on the same connected component.
    pub fn reachable(&self, start: &Point, goal: &Point) -> bool {
        match (self.get_component(start), self.get_component(goal)) {
            (Some(a), Some(b)) => a == b,
            _ => false,
        }
    }

    pub fn unreachable(&self, start: &Point, goal: &Point) -> bool {
        !self.reachable(start, goal)
    }

    /// Links every passable cell to its passable right and lower neighbours.
    fn generate_components(&mut self) {
        debug!(
            "Generating connected components for {}x{} maze",
            self.width, self.height
        );
        let points = self.points().collect::<Vec<_>>();
        for point in points {
            if !self.is_passable(point) {
                continue;
            }
            let parent_ix = self.get_ix_point(&point);
            for n in [
                Point::new(point.x, point.y + 1),
                Point::new(point.x + 1, point.y),
            ] {
                if self.is_passable(n) {
                    let ix = self.get_ix_point(&n);
                    self.components.union(parent_ix, ix);
                }
            }
        }
    }
}

impl FromStr for MazeGrid {
    type Err = MazeError;

    /// Parses one row per non-empty line. `1`, `.`, `S` and `G` are passable, `0` and `#` are
    /// walls. Whitespace between cells is ignored.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let rows = s
            .lines()
            .map(|line| line.trim())
            .filter(|line| !line.is_empty())
            .enumerate()
            .map(|(row, line)| {
                line.chars()
                    .filter(|c| !c.is_whitespace())
                    .enumerate()
                    .map(|(col, c)| match c {
                        '1' | '.' | 'S' | 'G' => Ok(true),
                        '0' | '#' => Ok(false),
                        value => Err(MazeError::InvalidCell { row, col, value }),
                    })
                    .collect::<Result<Vec<bool>, MazeError>>()
            })
            .collect::<Result<Vec<_>, _>>()?;
        MazeGrid::new(rows)
    }
}

impl fmt::Display for MazeGrid {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for y in 0..self.height as i32 {
            let values = (0..self.width as i32)
                .map(|x| self.is_passable(Point::new(x, y)) as i32)
                .collect::<Vec<i32>>();
            writeln!(f, "{:?}", values)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_empty() {
        assert_eq!(MazeGrid::new(vec![]).unwrap_err(), MazeError::Empty);
        assert_eq!(
            MazeGrid::new(vec![vec![], vec![]]).unwrap_err(),
            MazeError::ZeroWidth
        );
    }

    #[test]
    fn rejects_ragged_rows() {
        let err = MazeGrid::from_rows(&[vec![1, 1, 1], vec![1, 1], vec![1, 1, 1]]).unwrap_err();
        assert_eq!(
            err,
            MazeError::Ragged {
                row: 1,
                expected: 3,
                found: 2
            }
        );
    }

    #[test]
    fn dimensions_and_corners() {
        let maze = MazeGrid::from_rows(&[[1, 0, 1], [1, 1, 1]]).unwrap();
        assert_eq!(maze.width(), 3);
        assert_eq!(maze.height(), 2);
        assert_eq!(maze.start(), Point::new(0, 0));
        assert_eq!(maze.goal(), Point::new(2, 1));
        assert_eq!(maze.passable_count(), 5);
    }

    #[test]
    fn out_of_bounds_is_not_passable() {
        let maze = MazeGrid::from_rows(&[[1, 1], [1, 1]]).unwrap();
        assert!(maze.is_passable(Point::new(1, 1)));
        assert!(!maze.is_passable(Point::new(-1, 0)));
        assert!(!maze.is_passable(Point::new(0, -1)));
        assert!(!maze.is_passable(Point::new(2, 0)));
        assert!(!maze.is_passable(Point::new(0, 2)));
    }

    #[test]
    fn only_one_is_passable() {
        let maze = MazeGrid::from_rows(&[[1, 2, 0]]).unwrap();
        assert!(maze.is_passable(Point::new(0, 0)));
        assert!(!maze.is_passable(Point::new(1, 0)));
        assert!(!maze.is_passable(Point::new(2, 0)));
    }

    #[test]
    fn parses_text() {
        let maze: MazeGrid = "S.#\n#..\n##G\n".parse().unwrap();
        assert_eq!(maze.width(), 3);
        assert_eq!(maze.height(), 3);
        assert!(maze.is_passable(maze.goal()));
        assert!(!maze.is_passable(Point::new(2, 0)));

        let spaced: MazeGrid = "1 0\n1 1".parse().unwrap();
        assert_eq!(spaced.width(), 2);
        assert!(!spaced.is_passable(Point::new(1, 0)));
    }

    #[test]
    fn rejects_unknown_characters() {
        let err = "..\n.x".parse::<MazeGrid>().unwrap_err();
        assert_eq!(
            err,
            MazeError::InvalidCell {
                row: 1,
                col: 1,
                value: 'x'
            }
        );
    }

    /// Tests whether points are correctly mapped to different connected components
    #[test]
    fn test_component_generation() {
        // |. # .|
        // |. # .|
        let maze = MazeGrid::from_rows(&[[1, 0, 1], [1, 0, 1]]).unwrap();
        let p1 = Point::new(0, 0);
        let p2 = Point::new(1, 1);
        let p3 = Point::new(0, 1);
        let p4 = Point::new(2, 0);
        assert!(maze.unreachable(&p1, &p2));
        assert!(maze.reachable(&p1, &p3));
        assert!(maze.unreachable(&p1, &p4));
        assert_eq!(maze.get_component(&p2), None);
    }

    /// Diagonal contact does not connect cells.
    #[test]
    fn diagonal_cells_are_separate_components() {
        let maze = MazeGrid::from_rows(&[[1, 0], [0, 1]]).unwrap();
        assert!(maze.unreachable(&maze.start(), &maze.goal()));
    }

    #[test]
    fn display_lists_rows() {
        let maze = MazeGrid::from_rows(&[[1, 0], [0, 1]]).unwrap();
        assert_eq!(maze.to_string(), "[1, 0]\n[0, 1]\n");
    }
}
