use std::collections::VecDeque;

use super::SolveResult;
use crate::maze::{Coord, Grid, Maze};

/// Breadth-first search. Terrain is ignored, so the route found has the fewest steps.
/// Cells are marked visited when they are enqueued.
pub fn solve_bfs(
    maze: &Maze,
    visited: &mut Grid<bool>,
    start: Coord,
    targets: &[Coord],
) -> SolveResult {
    let mut result = SolveResult::new(maze.rows(), maze.cols());

    let mut queue = VecDeque::from([start]);
    visited[start] = true;
    result.predecessors.set_start(start);

    while let Some(current) = queue.pop_front() {
        result.exploration_order.push(current);
        if targets.contains(&current) {
            result.reached = Some(current);
            return result;
        }

        for neighbor in maze.accessible_neighbors(current) {
            if !visited[neighbor] {
                visited[neighbor] = true;
                result.predecessors.set(neighbor, current);
                queue.push_back(neighbor);
            }
        }
    }

    result // No target reachable
}
