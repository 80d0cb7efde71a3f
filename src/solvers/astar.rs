use super::{SolveResult, dijkstra::best_first};
use crate::maze::{Coord, Grid, Maze};

pub fn manhattan(a: Coord, b: Coord) -> u32 {
    a.0.abs_diff(b.0) as u32 + a.1.abs_diff(b.1) as u32
}

/// Manhattan distance from `coord` to the closest of `targets`.
pub fn nearest_target_distance(coord: Coord, targets: &[Coord]) -> u32 {
    targets
        .iter()
        .map(|&t| manhattan(coord, t))
        .min()
        .unwrap_or(0)
}

/// A* search keyed by `f = g + h`, where `g` is the accumulated terrain cost and
/// `h` the Manhattan distance to the nearest target.
///
/// Default terrain costs nothing to enter, so `h` can overestimate the remaining
/// cost and the route found is not always the cheapest.
pub fn solve_astar(
    maze: &Maze,
    visited: &mut Grid<bool>,
    start: Coord,
    targets: &[Coord],
) -> SolveResult {
    best_first(maze, visited, start, targets, |coord| {
        nearest_target_distance(coord, targets)
    })
}
