use rand::Rng;

use crate::maze::Coord;

/// Number of targets placed in every maze.
pub const NUM_DESTINATIONS: usize = 3;
/// Side of the square block around the start in which no target may be placed.
pub const START_EXCLUSION: u16 = 5;

/// Whether a destination may be placed at `coord`.
pub fn is_eligible(coord: Coord) -> bool {
    coord != (0, 0) && !(coord.0 < START_EXCLUSION && coord.1 < START_EXCLUSION)
}

/// Number of cells of a `rows x cols` grid that may hold a destination.
pub fn eligible_cells(rows: u16, cols: u16) -> usize {
    let blocked = rows.min(START_EXCLUSION) as usize * cols.min(START_EXCLUSION) as usize;
    rows as usize * cols as usize - blocked
}

/// Draw distinct random cells outside the start area until `NUM_DESTINATIONS` are collected.
///
/// # Panics
/// * If the grid has fewer than `NUM_DESTINATIONS` eligible cells
pub fn pick_destinations<R: Rng + ?Sized>(
    rows: u16,
    cols: u16,
    rng: &mut R,
) -> [Coord; NUM_DESTINATIONS] {
    let eligible = eligible_cells(rows, cols);
    if eligible < NUM_DESTINATIONS {
        panic!(
            "A {}x{} grid has only {} cells eligible for destinations",
            rows, cols, eligible
        );
    }

    let mut chosen: Vec<Coord> = Vec::with_capacity(NUM_DESTINATIONS);
    let mut draws = 0usize;
    while chosen.len() < NUM_DESTINATIONS {
        let candidate = (rng.random_range(0..rows), rng.random_range(0..cols));
        draws += 1;
        if is_eligible(candidate) && !chosen.contains(&candidate) {
            chosen.push(candidate);
        }
    }
    tracing::debug!("[generator] Picked destinations {:?} after {} draws", chosen, draws);

    [chosen[0], chosen[1], chosen[2]]
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{SeedableRng, rngs::StdRng};

    #[test]
    fn test_eligibility() {
        assert!(!is_eligible((0, 0)));
        assert!(!is_eligible((4, 4)));
        assert!(!is_eligible((0, 4)));
        assert!(is_eligible((5, 0)));
        assert!(is_eligible((0, 5)));
        assert!(is_eligible((29, 39)));
    }

    #[test]
    fn test_eligible_cells() {
        assert_eq!(eligible_cells(30, 40), 30 * 40 - 25);
        assert_eq!(eligible_cells(1, 8), 3);
        assert_eq!(eligible_cells(5, 5), 0);
        assert_eq!(eligible_cells(2, 6), 2);
    }

    #[test]
    fn test_destination_constraints_hold() {
        let mut rng = StdRng::seed_from_u64(3);
        for _ in 0..200 {
            let picked = pick_destinations(30, 40, &mut rng);
            for (i, &coord) in picked.iter().enumerate() {
                assert!(is_eligible(coord), "{:?} is inside the start area", coord);
                assert!(coord.0 < 30 && coord.1 < 40);
                assert!(!picked[i + 1..].contains(&coord), "duplicate {:?}", coord);
            }
        }
    }

    #[test]
    fn test_minimal_grid_uses_every_eligible_cell() {
        let mut rng = StdRng::seed_from_u64(11);
        let mut picked = pick_destinations(1, 8, &mut rng);
        picked.sort();
        assert_eq!(picked, [(0, 5), (0, 6), (0, 7)]);
    }

    #[test]
    #[should_panic(expected = "eligible")]
    fn test_degenerate_grid_panics() {
        let mut rng = StdRng::seed_from_u64(0);
        pick_destinations(5, 5, &mut rng);
    }
}
