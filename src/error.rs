use core::fmt;

/// Reasons a grid is rejected when building a [MazeGrid](crate::MazeGrid).
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum MazeError {
    /// The grid has no rows.
    Empty,
    /// The first row has no cells.
    ZeroWidth,
    /// A row differs in length from the first row.
    Ragged {
        row: usize,
        expected: usize,
        found: usize,
    },
    /// A character in the text form that is neither passable nor blocked.
    InvalidCell { row: usize, col: usize, value: char },
}

impl fmt::Display for MazeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "maze has no rows"),
            Self::ZeroWidth => write!(f, "maze rows have no cells"),
            Self::Ragged {
                row,
                expected,
                found,
            } => write!(
                f,
                "row {} has {} cells, expected {} like the first row",
                row, found, expected
            ),
            Self::InvalidCell { row, col, value } => {
                write!(f, "invalid cell {:?} at row {}, column {}", value, row, col)
            }
        }
    }
}

impl std::error::Error for MazeError {}
