use std::fmt;

/// Errors raised while setting up a maze from caller-supplied dimensions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MazeError {
    /// Rows or columns is zero.
    InvalidDimensions { rows: u16, cols: u16 },
    /// Fewer than three cells lie outside the 5x5 block around the start.
    GridTooSmall { rows: u16, cols: u16, eligible: usize },
    /// Rows or columns exceed what the viewer can lay out.
    TooLarge { rows: u16, cols: u16, max: u16 },
}

impl fmt::Display for MazeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MazeError::InvalidDimensions { rows, cols } => {
                write!(f, "invalid maze dimensions {}x{}: both must be at least 1", rows, cols)
            }
            MazeError::GridTooSmall {
                rows,
                cols,
                eligible,
            } => write!(
                f,
                "a {}x{} maze has only {} cells outside the start area, at least 3 are needed for destinations",
                rows, cols, eligible
            ),
            MazeError::TooLarge { rows, cols, max } => write!(
                f,
                "a {}x{} maze is too large to display, at most {}x{} is supported",
                rows, cols, max, max
            ),
        }
    }
}

impl std::error::Error for MazeError {}
