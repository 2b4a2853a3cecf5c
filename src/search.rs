use crate::bfs::bfs_explored;
use crate::maze::MazeGrid;
use grid_util::point::Point;
use log::{debug, info};

/// Offsets explored from every cell: down, up, right, left. The order decides which of several
/// shortest paths is returned.
pub const NEIGHBOUR_OFFSETS: [(i32, i32); 4] = [(0, 1), (0, -1), (1, 0), (-1, 0)];

impl MazeGrid {
    /// Passable 4-neighbours of a cell in [NEIGHBOUR_OFFSETS] order.
    pub fn neighborhood_points(&self, point: &Point) -> impl Iterator<Item = Point> + '_ {
        let point = *point;
        NEIGHBOUR_OFFSETS
            .into_iter()
            .map(move |(dx, dy)| Point::new(point.x + dx, point.y + dy))
            .filter(move |p| self.is_passable(*p))
    }
}

/// Computes a shortest path from the top-left to the bottom-right cell of the maze. The path
/// includes both ends; a 1x1 maze yields just the start. Returns [None] if either end is blocked
/// or the goal cannot be reached.
pub fn find_path(grid: &MazeGrid) -> Option<Vec<Point>> {
    find_path_between(grid, grid.start(), grid.goal())
}

/// Computes a shortest path between two arbitrary cells using 4-directional moves.
pub fn find_path_between(grid: &MazeGrid, start: Point, goal: Point) -> Option<Vec<Point>> {
    if !grid.is_passable(start) {
        info!("Start {} is blocked or outside the maze", start);
        return None;
    }
    if !grid.is_passable(goal) {
        info!("Goal {} is blocked or outside the maze", goal);
        return None;
    }
    let (path, explored) = bfs_explored(
        &start,
        |node| grid.neighborhood_points(node).collect::<Vec<_>>(),
        |node| *node == goal,
    );
    match &path {
        Some(p) => debug!(
            "Found path of {} cells from {} to {} after exploring {} cells",
            p.len(),
            start,
            goal,
            explored
        ),
        None => info!(
            "{} is not reachable from {} ({} cells explored)",
            goal, start, explored
        ),
    }
    path
}

/// Number of moves on a shortest path from start to goal.
pub fn path_length(grid: &MazeGrid) -> Option<usize> {
    find_path(grid).map(|p| p.len() - 1)
}
