pub mod cell;
pub mod grid;

pub use cell::{Cell, Side, Terrain};
pub use grid::Grid;

/// A cell coordinate as `(row, col)`.
pub type Coord = (u16, u16);

/// A rectangular maze: a flat row-major arena of cells with wall flags and terrain.
#[derive(Debug, Clone, PartialEq)]
pub struct Maze {
    grid: Grid<Cell>,
}

impl Maze {
    /// Creates a new maze with the given number of rows and columns.
    /// Every wall is standing and every cell has default terrain.
    pub fn new(rows: u16, cols: u16) -> Self {
        Maze {
            grid: Grid::new(rows, cols, Cell::CLOSED),
        }
    }

    /// Returns the number of rows in the maze.
    pub fn rows(&self) -> u16 {
        self.grid.rows()
    }

    /// Returns the number of columns in the maze.
    pub fn cols(&self) -> u16 {
        self.grid.cols()
    }

    pub fn len(&self) -> usize {
        self.rows() as usize * self.cols() as usize
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Checks if the given coordinate is within the bounds of the maze.
    pub fn is_in_bounds(&self, coord: Coord) -> bool {
        self.grid.is_in_bounds(coord)
    }

    /// Row-major identifier of a cell, `row * cols + col`.
    pub fn ravel_index(&self, coord: Coord) -> usize {
        self.grid.ravel_index(coord)
    }

    pub fn unravel_index(&self, index: usize) -> Coord {
        self.grid.unravel_index(index)
    }

    pub fn set_terrain(&mut self, coord: Coord, terrain: Terrain) {
        self.grid[coord].set_terrain(terrain);
    }

    pub fn penalty(&self, coord: Coord) -> u32 {
        self.grid[coord].penalty()
    }

    /// Iterate over every cell in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = (Coord, &Cell)> {
        self.grid.iter()
    }

    /// The in-bounds neighbor of `coord` on the given side, ignoring walls.
    pub fn neighbor(&self, coord: Coord, side: Side) -> Option<Coord> {
        let (row, col) = coord;
        let next = match side {
            Side::Top => (row.checked_sub(1)?, col),
            Side::Right => (row, col.checked_add(1)?),
            Side::Bottom => (row.checked_add(1)?, col),
            Side::Left => (row, col.checked_sub(1)?),
        };
        self.is_in_bounds(next).then_some(next)
    }

    /// The side of `from` that faces `to`, if the two cells are grid-adjacent.
    pub fn side_towards(from: Coord, to: Coord) -> Option<Side> {
        let d_row = to.0 as i32 - from.0 as i32;
        let d_col = to.1 as i32 - from.1 as i32;
        match (d_row, d_col) {
            (-1, 0) => Some(Side::Top),
            (0, 1) => Some(Side::Right),
            (1, 0) => Some(Side::Bottom),
            (0, -1) => Some(Side::Left),
            _ => None,
        }
    }

    /// Clears the pair of walls separating `a` and `b`.
    ///
    /// The side is chosen from the relative position of the two cells.
    /// If they are not grid-adjacent nothing changes.
    ///
    /// # Returns
    /// `true` if the two cells are adjacent (whether or not the wall was already open)
    ///
    /// # Panics
    /// * If either coordinate is out of bounds
    pub fn remove_wall_between(&mut self, a: Coord, b: Coord) -> bool {
        if !self.is_in_bounds(a) || !self.is_in_bounds(b) {
            panic!("Cannot remove wall between {:?} and {:?}: out of bounds", a, b);
        }
        match Maze::side_towards(a, b) {
            Some(side) => {
                self.grid[a].set_wall(side, false);
                self.grid[b].set_wall(side.opposite(), false);
                true
            }
            None => false,
        }
    }

    /// Checks whether the wall on the given side of a cell is standing.
    pub fn has_wall(&self, coord: Coord, side: Side) -> bool {
        self.grid[coord].has_wall(side)
    }

    /// Neighbors reachable from `coord` in one step, in top, right, bottom, left order.
    /// A neighbor is reported only if it is in bounds and the wall towards it is open.
    pub fn accessible_neighbors(&self, coord: Coord) -> impl Iterator<Item = Coord> + '_ {
        let cell = self.grid[coord];
        Side::ALL
            .into_iter()
            .filter(move |&side| !cell.has_wall(side))
            .filter_map(move |side| self.neighbor(coord, side))
    }

    /// Number of adjacent cell pairs with an open wall between them.
    /// Only right and bottom sides are counted so each pair is seen once.
    pub fn open_adjacencies(&self) -> usize {
        self.cells()
            .map(|(coord, cell)| {
                [Side::Right, Side::Bottom]
                    .into_iter()
                    .filter(|&side| !cell.has_wall(side) && self.neighbor(coord, side).is_some())
                    .count()
            })
            .sum()
    }
}

impl std::ops::Index<Coord> for Maze {
    type Output = Cell;

    fn index(&self, coord: Coord) -> &Self::Output {
        &self.grid[coord]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_maze_starts_closed() {
        let maze = Maze::new(3, 4);
        assert_eq!(maze.len(), 12);
        assert_eq!(maze.open_adjacencies(), 0);
        assert!(maze.cells().all(|(_, c)| *c == Cell::CLOSED));
    }

    #[test]
    fn test_remove_wall_each_direction() {
        let mut maze = Maze::new(3, 3);
        let center = (1, 1);
        assert!(maze.remove_wall_between(center, (0, 1)));
        assert!(!maze.has_wall(center, Side::Top));
        assert!(!maze.has_wall((0, 1), Side::Bottom));

        assert!(maze.remove_wall_between((1, 2), center));
        assert!(!maze.has_wall(center, Side::Right));
        assert!(!maze.has_wall((1, 2), Side::Left));

        assert!(maze.remove_wall_between(center, (2, 1)));
        assert!(!maze.has_wall(center, Side::Bottom));
        assert!(!maze.has_wall((2, 1), Side::Top));

        assert!(maze.remove_wall_between((1, 0), center));
        assert!(!maze.has_wall(center, Side::Left));
        assert!(!maze.has_wall((1, 0), Side::Right));

        assert_eq!(maze.open_adjacencies(), 4);
    }

    #[test]
    fn test_remove_wall_non_adjacent_is_noop() {
        let mut maze = Maze::new(3, 3);
        let before = maze.clone();
        // Diagonal, same cell and two steps away
        assert!(!maze.remove_wall_between((0, 0), (1, 1)));
        assert!(!maze.remove_wall_between((1, 1), (1, 1)));
        assert!(!maze.remove_wall_between((0, 0), (0, 2)));
        assert_eq!(maze, before);
    }

    #[test]
    #[should_panic(expected = "out of bounds")]
    fn test_remove_wall_out_of_bounds() {
        let mut maze = Maze::new(2, 2);
        maze.remove_wall_between((1, 1), (1, 2));
    }

    #[test]
    fn test_accessible_neighbors_respects_walls_and_bounds() {
        let mut maze = Maze::new(2, 2);
        assert_eq!(maze.accessible_neighbors((0, 0)).count(), 0);

        maze.remove_wall_between((0, 0), (0, 1));
        maze.remove_wall_between((0, 0), (1, 0));
        let neighbors = maze.accessible_neighbors((0, 0)).collect::<Vec<_>>();
        assert_eq!(neighbors, vec![(0, 1), (1, 0)]);
        assert_eq!(maze.accessible_neighbors((1, 1)).count(), 0);
    }

    #[test]
    fn test_open_boundary_wall_is_not_a_neighbor() {
        let mut maze = Maze::new(1, 1);
        maze.grid[(0, 0)].set_wall(Side::Top, false);
        maze.grid[(0, 0)].set_wall(Side::Left, false);
        assert_eq!(maze.accessible_neighbors((0, 0)).count(), 0);
        assert_eq!(maze.open_adjacencies(), 0);
    }

    #[test]
    fn test_out_of_bounds() {
        let maze = Maze::new(5, 4);
        assert!(!maze.is_in_bounds((5, 0)));
        assert!(!maze.is_in_bounds((0, 4)));
        assert!(maze.is_in_bounds((4, 3)));
        assert_eq!(maze.neighbor((0, 0), Side::Top), None);
        assert_eq!(maze.neighbor((4, 3), Side::Right), None);
        assert_eq!(maze.neighbor((4, 3), Side::Left), Some((4, 2)));
    }
}
