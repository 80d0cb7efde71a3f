use rand::{Rng, SeedableRng, rngs::StdRng};

pub mod destinations;
mod kruskal;
mod union_find;

pub use destinations::{NUM_DESTINATIONS, START_EXCLUSION, pick_destinations};
pub use kruskal::randomized_kruskal;
pub use union_find::UnionFind;

use crate::{
    error::MazeError,
    maze::{Coord, Maze, Terrain},
};

/// Fixed starting cell of every maze.
pub const START: Coord = (0, 0);
/// Default maze dimensions.
pub const DEFAULT_ROWS: u16 = 30;
pub const DEFAULT_COLS: u16 = 40;

/// Get a random number generator, optionally seeded for reproducibility.
pub fn get_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(s) => StdRng::seed_from_u64(s),
        None => StdRng::from_os_rng(),
    }
}

/// Fresh grid with every wall standing and random terrain on every cell but the start.
pub fn initialize_grid<R: Rng + ?Sized>(rows: u16, cols: u16, rng: &mut R) -> Maze {
    let mut maze = Maze::new(rows, cols);
    (0..rows)
        .flat_map(|row| (0..cols).map(move |col| (row, col)))
        .filter(|&coord| coord != START)
        .for_each(|coord| maze.set_terrain(coord, Terrain::from_roll(rng.random_range(0..100))));
    maze
}

fn check_dimensions(rows: u16, cols: u16) -> Result<(), MazeError> {
    if rows == 0 || cols == 0 {
        return Err(MazeError::InvalidDimensions { rows, cols });
    }
    let eligible = destinations::eligible_cells(rows, cols);
    if eligible < NUM_DESTINATIONS {
        return Err(MazeError::GridTooSmall {
            rows,
            cols,
            eligible,
        });
    }
    Ok(())
}

/// Owns the current maze and its destinations, and rebuilds both on reset.
pub struct MazeGenerator {
    rows: u16,
    cols: u16,
    rng: StdRng,
    maze: Maze,
    destinations: [Coord; NUM_DESTINATIONS],
}

impl MazeGenerator {
    /// Validates the dimensions and generates the first maze.
    /// With a seed every maze this generator produces is reproducible.
    pub fn new(rows: u16, cols: u16, seed: Option<u64>) -> Result<Self, MazeError> {
        check_dimensions(rows, cols)?;
        let mut rng = get_rng(seed);
        let (maze, destinations) = MazeGenerator::build(rows, cols, &mut rng);
        Ok(MazeGenerator {
            rows,
            cols,
            rng,
            maze,
            destinations,
        })
    }

    fn build(rows: u16, cols: u16, rng: &mut StdRng) -> (Maze, [Coord; NUM_DESTINATIONS]) {
        let started = std::time::Instant::now();
        let mut maze = initialize_grid(rows, cols, rng);
        let removed = randomized_kruskal(&mut maze, rng);
        debug_assert_eq!(removed, maze.len() - 1);
        let destinations = pick_destinations(rows, cols, rng);
        tracing::info!(
            "[generator] Built {}x{} maze with {} open passages in {:?}",
            rows,
            cols,
            removed,
            started.elapsed()
        );
        (maze, destinations)
    }

    /// Discard the current maze and destinations and build new ones from scratch.
    pub fn reset(&mut self) {
        let (maze, destinations) = MazeGenerator::build(self.rows, self.cols, &mut self.rng);
        self.maze = maze;
        self.destinations = destinations;
    }

    pub fn maze(&self) -> &Maze {
        &self.maze
    }

    pub fn destinations(&self) -> &[Coord; NUM_DESTINATIONS] {
        &self.destinations
    }

    pub fn start(&self) -> Coord {
        START
    }

    pub fn rows(&self) -> u16 {
        self.rows
    }

    pub fn cols(&self) -> u16 {
        self.cols
    }
}

/// Build a single maze and its destinations.
pub fn generate(
    rows: u16,
    cols: u16,
    seed: Option<u64>,
) -> Result<(Maze, [Coord; NUM_DESTINATIONS]), MazeError> {
    let generator = MazeGenerator::new(rows, cols, seed)?;
    Ok((generator.maze, generator.destinations))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::maze::Side;
    use std::collections::VecDeque;

    /// Cells reachable from the start through open walls, counted once each.
    fn reachable_from_start(maze: &Maze) -> usize {
        let mut seen = vec![false; maze.len()];
        let mut queue = VecDeque::from([START]);
        seen[maze.ravel_index(START)] = true;
        let mut count = 0;
        while let Some(cur) = queue.pop_front() {
            count += 1;
            for next in maze.accessible_neighbors(cur) {
                let idx = maze.ravel_index(next);
                if !seen[idx] {
                    seen[idx] = true;
                    queue.push_back(next);
                }
            }
        }
        count
    }

    #[test]
    fn test_spanning_tree_property() {
        for seed in 0..20 {
            let (maze, _) = generate(DEFAULT_ROWS, DEFAULT_COLS, Some(seed)).unwrap();
            assert_eq!(maze.open_adjacencies(), maze.len() - 1);
            assert_eq!(reachable_from_start(&maze), maze.len());
        }
    }

    #[test]
    fn test_no_cycles() {
        let (maze, _) = generate(15, 17, Some(5)).unwrap();
        let mut uf = UnionFind::new(maze.len());
        for (coord, cell) in maze.cells() {
            for side in [Side::Right, Side::Bottom] {
                if let Some(next) = maze.neighbor(coord, side).filter(|_| !cell.has_wall(side)) {
                    // A second route between two cells would show up as an already-joined pair
                    assert!(uf.union(maze.ravel_index(coord), maze.ravel_index(next)));
                }
            }
        }
    }

    #[test]
    fn test_wall_symmetry() {
        let (maze, _) = generate(10, 12, Some(9)).unwrap();
        for (coord, cell) in maze.cells() {
            for side in Side::ALL {
                if let Some(next) = maze.neighbor(coord, side) {
                    assert_eq!(
                        cell.has_wall(side),
                        maze.has_wall(next, side.opposite()),
                        "asymmetric wall between {:?} and {:?}",
                        coord,
                        next
                    );
                }
            }
        }
    }

    #[test]
    fn test_start_is_default_terrain() {
        for seed in 0..10 {
            let (maze, _) = generate(6, 7, Some(seed)).unwrap();
            assert_eq!(maze[START].terrain(), Terrain::Default);
        }
    }

    #[test]
    fn test_terrain_distribution_is_plausible() {
        let (maze, _) = generate(DEFAULT_ROWS, DEFAULT_COLS, Some(1)).unwrap();
        let count = |t: Terrain| maze.cells().filter(|(_, c)| c.terrain() == t).count();
        // 1200 cells, roughly 120 of each special kind
        for terrain in [Terrain::Grass, Terrain::Mud, Terrain::Water] {
            let n = count(terrain);
            assert!((40..250).contains(&n), "{} {} cells", n, terrain);
        }
        assert!(count(Terrain::Default) > 600);
    }

    #[test]
    fn test_generated_destinations() {
        for seed in 0..20 {
            let (maze, destinations) = generate(DEFAULT_ROWS, DEFAULT_COLS, Some(seed)).unwrap();
            for (i, &d) in destinations.iter().enumerate() {
                assert!(maze.is_in_bounds(d));
                assert_ne!(d, START);
                assert!(!(d.0 < START_EXCLUSION && d.1 < START_EXCLUSION));
                assert!(!destinations[i + 1..].contains(&d));
            }
        }
    }

    #[test]
    fn test_seed_reproducible() {
        let a = generate(9, 11, Some(123)).unwrap();
        let b = generate(9, 11, Some(123)).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_reset_rebuilds() {
        let mut generator = MazeGenerator::new(20, 20, Some(77)).unwrap();
        let first = generator.maze().clone();
        let first_destinations = *generator.destinations();
        generator.reset();
        assert_eq!(generator.maze().open_adjacencies(), 20 * 20 - 1);
        // Same seeded stream continues, so the new maze differs from the first
        assert!(*generator.maze() != first || *generator.destinations() != first_destinations);
    }

    #[test]
    fn test_invalid_dimensions() {
        assert_eq!(
            MazeGenerator::new(0, 10, None).err(),
            Some(MazeError::InvalidDimensions { rows: 0, cols: 10 })
        );
        assert!(matches!(
            MazeGenerator::new(5, 5, None),
            Err(MazeError::GridTooSmall { eligible: 0, .. })
        ));
        assert!(MazeGenerator::new(1, 8, Some(0)).is_ok());
    }
}
