use super::SolveResult;
use crate::maze::{Coord, Grid, Maze};

/// Depth-first search with an explicit stack. Cells are marked visited when pushed,
/// so each cell keeps the predecessor that first discovered it.
pub fn solve_dfs(
    maze: &Maze,
    visited: &mut Grid<bool>,
    start: Coord,
    targets: &[Coord],
) -> SolveResult {
    let mut result = SolveResult::new(maze.rows(), maze.cols());

    let mut stack = vec![start];
    visited[start] = true;
    result.predecessors.set_start(start);

    while let Some(current) = stack.pop() {
        result.exploration_order.push(current);
        if targets.contains(&current) {
            result.reached = Some(current);
            return result;
        }

        for neighbor in maze.accessible_neighbors(current) {
            if !visited[neighbor] {
                visited[neighbor] = true;
                result.predecessors.set(neighbor, current);
                stack.push(neighbor);
            }
        }
    }

    result
}
