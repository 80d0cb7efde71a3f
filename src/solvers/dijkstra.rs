use std::{cmp::Reverse, collections::BinaryHeap};

use super::SolveResult;
use crate::maze::{Coord, Grid, Maze};

/// Best-first search over terrain cost, shared by Dijkstra and A*.
///
/// Entering a cell costs its terrain penalty. The heap is keyed by
/// `cost + heuristic(cell)`; equal keys pop the lower row-major index first.
/// A cell may sit in the heap several times: stale entries are skipped once
/// the cell has been finalized.
pub(super) fn best_first<H>(
    maze: &Maze,
    visited: &mut Grid<bool>,
    start: Coord,
    targets: &[Coord],
    heuristic: H,
) -> SolveResult
where
    H: Fn(Coord) -> u32,
{
    let mut result = SolveResult::new(maze.rows(), maze.cols());

    // Using Reverse to turn the max-heap into a min-heap
    let mut pq: BinaryHeap<Reverse<(u32, usize)>> = BinaryHeap::new();
    let mut costs = Grid::new(maze.rows(), maze.cols(), u32::MAX);

    costs[start] = 0;
    result.predecessors.set_start(start);
    pq.push(Reverse((heuristic(start), maze.ravel_index(start))));

    while let Some(Reverse((_, index))) = pq.pop() {
        let current = maze.unravel_index(index);
        if visited[current] {
            continue;
        }
        visited[current] = true;
        result.exploration_order.push(current);

        if targets.contains(&current) {
            result.reached = Some(current);
            result.settled_cost = Some(costs[current]);
            return result;
        }

        let current_cost = costs[current];
        for neighbor in maze.accessible_neighbors(current) {
            if visited[neighbor] {
                continue;
            }
            let new_cost = current_cost + maze.penalty(neighbor);
            if new_cost < costs[neighbor] {
                costs[neighbor] = new_cost;
                result.predecessors.set(neighbor, current);
                pq.push(Reverse((
                    new_cost + heuristic(neighbor),
                    maze.ravel_index(neighbor),
                )));
            }
        }
    }

    result
}

/// Dijkstra's algorithm: finalizes cells in order of accumulated terrain cost,
/// so the target it reaches is the cheapest one to enter.
pub fn solve_dijkstra(
    maze: &Maze,
    visited: &mut Grid<bool>,
    start: Coord,
    targets: &[Coord],
) -> SolveResult {
    best_first(maze, visited, start, targets, |_| 0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::maze::Terrain;
    use crate::solvers::{reconstruct_path, test_utils::*};
    use rand::{Rng, SeedableRng, rngs::StdRng};

    #[test]
    fn test_single_row_terrain_cost() {
        let mut maze = open_maze(1, 3);
        paint(&mut maze, &[((0, 1), Terrain::Mud), ((0, 2), Terrain::Water)]);
        let mut visited = Grid::new(1, 3, false);
        let result = solve_dijkstra(&maze, &mut visited, (0, 0), &[(0, 2)]);

        assert_eq!(result.settled_cost, Some(15));
        let (path, cost) = reconstruct_path(&maze, &result.predecessors, result.reached);
        assert_eq!(path, vec![(0, 0), (0, 1), (0, 2)]);
        assert_eq!(cost, 15);
    }

    #[test]
    fn test_ties_break_on_row_major_index() {
        let maze = open_maze(2, 2);
        let mut visited = Grid::new(2, 2, false);
        let result = solve_dijkstra(&maze, &mut visited, (0, 0), &[(1, 1)]);
        // Every cell costs 0 to enter, so order follows the index
        assert_eq!(result.exploration_order, vec![(0, 0), (0, 1), (1, 0), (1, 1)]);
    }

    #[test]
    fn test_finalizes_in_cost_order_and_is_optimal() {
        let mut rng = StdRng::seed_from_u64(17);
        for _ in 0..25 {
            // Random terrain on an open grid, which is full of loops
            let mut maze = open_maze(7, 8);
            for row in 0..7u16 {
                for col in 0..8u16 {
                    let roll: u32 = rng.random_range(0..100);
                    maze.set_terrain((row, col), Terrain::from_roll(roll));
                }
            }
            maze.set_terrain((0, 0), Terrain::Default);
            let targets = [(6, 7), (3, 5), (6, 0)];
            let mut visited = Grid::new(7, 8, false);
            let result = solve_dijkstra(&maze, &mut visited, (0, 0), &targets);
            let best = relaxed_costs(&maze, (0, 0));

            let order_costs = result
                .exploration_order
                .iter()
                .map(|&c| best[maze.ravel_index(c)].unwrap())
                .collect::<Vec<_>>();
            assert!(order_costs.windows(2).all(|w| w[0] <= w[1]));

            let min_cost = targets
                .iter()
                .map(|&t| best[maze.ravel_index(t)].unwrap())
                .min()
                .unwrap();
            let (_, cost) = reconstruct_path(&maze, &result.predecessors, result.reached);
            assert_eq!(cost, min_cost);
            assert_eq!(result.settled_cost, Some(min_cost));
        }
    }

    #[test]
    fn test_prefers_cheaper_target_over_nearer() {
        let mut maze = open_maze(1, 7);
        paint(
            &mut maze,
            &[
                ((0, 2), Terrain::Water),
                ((0, 1), Terrain::Grass),
                ((0, 4), Terrain::Grass),
                ((0, 5), Terrain::Grass),
                ((0, 6), Terrain::Grass),
            ],
        );
        let mut visited = Grid::new(1, 7, false);
        // (0, 1) is two steps away but behind water, (0, 6) is three steps of grass
        let result = solve_dijkstra(&maze, &mut visited, (0, 3), &[(0, 1), (0, 6)]);
        assert_eq!(result.reached, Some((0, 6)));
        assert_eq!(result.settled_cost, Some(3));
    }
}
