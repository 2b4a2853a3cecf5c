//! # maze_pathfinding
//!
//! Finds a shortest path from the top-left to the bottom-right cell of a binary maze using
//! [breadth-first search](https://en.wikipedia.org/wiki/Breadth-first_search) over the
//! 4-neighbourhood, and renders that path as a grid of markers. Moves are uniform-cost and
//! diagonal steps are not allowed.
//!
//! Cells are [Point]s with `x` as the column and `y` as the row.
//!
//! ```
//! use maze_pathfinding::{find_path, render, MazeGrid};
//!
//! let maze = MazeGrid::from_rows(&[[1, 0, 0], [1, 1, 0], [0, 1, 1]]).unwrap();
//! let path = find_path(&maze).unwrap();
//! assert_eq!(path.len(), 5);
//! print!("{}", render(&maze, &path));
//! ```
pub mod bfs;
mod error;
mod maze;
mod render;
mod search;

pub use error::MazeError;
pub use grid_util::point::Point;
pub use maze::MazeGrid;
pub use render::{render, solve, Marker, Marking, RenderStyle};
pub use search::{find_path, find_path_between, path_length, NEIGHBOUR_OFFSETS};
