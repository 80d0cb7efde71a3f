use rand::{Rng, seq::SliceRandom};

use crate::{
    generators::union_find::UnionFind,
    maze::{Coord, Maze},
};

/// Pair of adjacent cells separated by a wall
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct Edge {
    pub cell1: Coord,
    pub cell2: Coord,
}

/// Every internal edge of a `rows x cols` grid, each listed once.
pub(crate) fn all_edges(rows: u16, cols: u16) -> Vec<Edge> {
    (0..rows)
        .flat_map(|row| (0..cols).map(move |col| (row, col)))
        .flat_map(|(row, col)| {
            [
                (row + 1 < rows).then(|| Edge {
                    cell1: (row, col),
                    cell2: (row + 1, col),
                }),
                (col + 1 < cols).then(|| Edge {
                    cell1: (row, col),
                    cell2: (row, col + 1),
                }),
            ]
        })
        .flatten()
        .collect()
}

/// Carve a spanning tree into `maze` by processing every edge in random order
/// and opening it whenever its endpoints are not yet connected.
///
/// Expects every wall to be standing. Returns the number of walls removed,
/// which is `rows * cols - 1` for a non-empty maze.
pub fn randomized_kruskal<R: Rng + ?Sized>(maze: &mut Maze, rng: &mut R) -> usize {
    if maze.is_empty() {
        return 0;
    }

    let mut uf = UnionFind::new(maze.len());

    let mut edges = all_edges(maze.rows(), maze.cols());
    edges.shuffle(rng);

    let mut removed = 0;
    for edge in edges {
        let id1 = maze.ravel_index(edge.cell1);
        let id2 = maze.ravel_index(edge.cell2);

        // Skip edges that would close a cycle
        if !uf.is_connected(id1, id2) {
            uf.union(id1, id2);
            maze.remove_wall_between(edge.cell1, edge.cell2);
            removed += 1;
        }
    }
    removed
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{SeedableRng, rngs::StdRng};

    #[test]
    fn test_edge_count() {
        for (rows, cols) in [(1, 1), (1, 5), (4, 1), (3, 4), (30, 40)] {
            let expected = rows as usize * (cols as usize - 1) + cols as usize * (rows as usize - 1);
            assert_eq!(all_edges(rows, cols).len(), expected);
        }
    }

    #[test]
    fn test_edges_are_adjacent_and_unique() {
        let edges = all_edges(5, 6);
        for edge in &edges {
            assert!(Maze::side_towards(edge.cell1, edge.cell2).is_some());
        }
        let mut keys = edges
            .iter()
            .map(|e| (e.cell1.min(e.cell2), e.cell1.max(e.cell2)))
            .collect::<Vec<_>>();
        keys.sort();
        keys.dedup();
        assert_eq!(keys.len(), edges.len());
    }

    #[test]
    fn test_removes_exactly_tree_edges() {
        let mut rng = StdRng::seed_from_u64(7);
        let mut maze = Maze::new(12, 9);
        let removed = randomized_kruskal(&mut maze, &mut rng);
        assert_eq!(removed, 12 * 9 - 1);
        assert_eq!(maze.open_adjacencies(), 12 * 9 - 1);
    }

    #[test]
    fn test_single_cell() {
        let mut rng = StdRng::seed_from_u64(0);
        let mut maze = Maze::new(1, 1);
        assert_eq!(randomized_kruskal(&mut maze, &mut rng), 0);
    }

    #[test]
    fn test_same_seed_same_maze() {
        let mut a = Maze::new(8, 8);
        let mut b = Maze::new(8, 8);
        randomized_kruskal(&mut a, &mut StdRng::seed_from_u64(42));
        randomized_kruskal(&mut b, &mut StdRng::seed_from_u64(42));
        assert_eq!(a, b);
    }
}
