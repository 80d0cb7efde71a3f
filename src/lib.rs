pub mod app;
pub mod error;
pub mod generators;
pub mod maze;
pub mod solvers;

pub use error::MazeError;
pub use generators::{MazeGenerator, generate};
pub use maze::{Coord, Maze};
pub use solvers::{MazeSolver, SolveResult, Solver, reconstruct_path};
