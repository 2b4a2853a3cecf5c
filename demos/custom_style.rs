use maze_pathfinding::{solve, MazeGrid, RenderStyle};

// In this example a maze is parsed from text with shape
// S..#
// #..#
// #.##
// #..G
// where
// - # marks a wall
// - S marks the start
// - G marks the goal
//
// and the solution is drawn with custom markers.

fn main() {
    let maze: MazeGrid = "S..#\n#..#\n#.##\n#..G".parse().unwrap();
    println!("{}", maze);
    let style = RenderStyle {
        on_path: 'o',
        off_path: '.',
    };
    if let Some(marking) = solve(&maze) {
        println!("A path has been found:");
        println!("{}", marking.to_text(&style));
    }
}
