use log::info;
use maze_pathfinding::{find_path, render, MazeGrid};

// Solves the reference mazes. Walls are 0, open cells are 1, the start is the top-left cell and the
// exit the bottom-right one. Cells on the shortest path are printed as S, all others as -.
//
// Run with RUST_LOG=debug to see how many cells each search explored.

fn print_solution(maze: &MazeGrid) {
    match find_path(maze) {
        Some(path) => {
            info!("Path of {} cells found", path.len());
            println!("{}", render(maze, &path));
        }
        None => println!("No path found\n"),
    }
}

fn main() -> Result<(), maze_pathfinding::MazeError> {
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    let m = MazeGrid::from_rows(&[
        [1, 0, 0, 1],
        [1, 0, 0, 1],
        [1, 0, 0, 1],
        [1, 1, 1, 1],
    ])?;
    let easy_maze = MazeGrid::from_rows(&[
        [1, 1, 1, 0, 1],
        [1, 0, 1, 0, 1],
        [1, 0, 1, 1, 1],
        [1, 1, 0, 0, 1],
        [0, 1, 1, 1, 1],
    ])?;
    let medium_maze = MazeGrid::from_rows(&[
        [1, 1, 0, 1, 1, 0],
        [0, 1, 0, 1, 0, 1],
        [1, 1, 1, 1, 1, 1],
        [1, 0, 0, 0, 0, 0],
        [1, 1, 1, 1, 1, 1],
        [0, 0, 1, 0, 0, 1],
    ])?;
    let hard_maze = MazeGrid::from_rows(&[
        [1, 0, 1, 1, 1, 0, 1],
        [1, 0, 1, 0, 1, 0, 1],
        [1, 1, 1, 0, 1, 1, 1],
        [0, 0, 1, 0, 0, 0, 0],
        [1, 1, 1, 1, 1, 1, 1],
        [1, 0, 0, 0, 0, 0, 1],
        [1, 1, 1, 1, 1, 1, 1],
    ])?;

    for maze in [&m, &easy_maze, &medium_maze, &hard_maze] {
        print_solution(maze);
    }
    Ok(())
}
