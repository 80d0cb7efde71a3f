use super::{Parent, Predecessors};
use crate::maze::{Coord, Maze};

/// Walk predecessors back from `reached` to the start and return the route in
/// start-to-target order with the summed terrain penalty of every cell on it.
///
/// An unreached target gives an empty route and a cost of 0.
///
/// # Panics
/// * If a cell on the way back has no recorded predecessor
pub fn reconstruct_path(
    maze: &Maze,
    predecessors: &Predecessors,
    reached: Option<Coord>,
) -> (Vec<Coord>, u32) {
    let Some(target) = reached else {
        return (Vec::new(), 0);
    };

    let mut path = Vec::new();
    let mut current = target;
    loop {
        path.push(current);
        match predecessors.get(current) {
            Some(Parent::From(parent)) => current = parent,
            Some(Parent::Start) => break,
            None => panic!("Cell {:?} on the path has no recorded predecessor", current),
        }
    }
    path.reverse();

    let cost = path.iter().map(|&c| maze.penalty(c)).sum();
    (path, cost)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::maze::Terrain;

    #[test]
    fn test_walks_back_and_sums() {
        let mut maze = Maze::new(1, 4);
        maze.set_terrain((0, 1), Terrain::Grass);
        maze.set_terrain((0, 2), Terrain::Water);
        let mut predecessors = Predecessors::new(1, 4);
        predecessors.set_start((0, 0));
        predecessors.set((0, 1), (0, 0));
        predecessors.set((0, 2), (0, 1));
        predecessors.set((0, 3), (0, 2));

        let (path, cost) = reconstruct_path(&maze, &predecessors, Some((0, 3)));
        assert_eq!(path, vec![(0, 0), (0, 1), (0, 2), (0, 3)]);
        assert_eq!(cost, 11);

        // Stopping part way uses only the prefix
        let (path, cost) = reconstruct_path(&maze, &predecessors, Some((0, 1)));
        assert_eq!(path, vec![(0, 0), (0, 1)]);
        assert_eq!(cost, 1);
    }

    #[test]
    fn test_start_penalty_counts() {
        let mut maze = Maze::new(1, 2);
        maze.set_terrain((0, 0), Terrain::Mud);
        let mut predecessors = Predecessors::new(1, 2);
        predecessors.set_start((0, 0));
        predecessors.set((0, 1), (0, 0));
        let (_, cost) = reconstruct_path(&maze, &predecessors, Some((0, 1)));
        assert_eq!(cost, 5);
    }

    #[test]
    fn test_unreached_is_empty() {
        let maze = Maze::new(2, 2);
        let predecessors = Predecessors::new(2, 2);
        let (path, cost) = reconstruct_path(&maze, &predecessors, None);
        assert!(path.is_empty());
        assert_eq!(cost, 0);
    }

    #[test]
    #[should_panic(expected = "no recorded predecessor")]
    fn test_broken_chain_panics() {
        let maze = Maze::new(1, 3);
        let mut predecessors = Predecessors::new(1, 3);
        predecessors.set((0, 2), (0, 1));
        reconstruct_path(&maze, &predecessors, Some((0, 2)));
    }
}
