use super::Coord;

/// Fixed-size row-major storage addressed by `(row, col)`.
#[derive(Debug, Clone, PartialEq)]
pub struct Grid<T> {
    data: Box<[T]>,
    rows: u16,
    cols: u16,
}

impl<T: Clone> Grid<T> {
    pub fn new(rows: u16, cols: u16, value: T) -> Self {
        let data = vec![value; rows as usize * cols as usize].into_boxed_slice();
        Grid { data, rows, cols }
    }

    /// Overwrite every slot with `value`, keeping the allocation.
    pub fn fill(&mut self, value: T) {
        self.data.fill(value);
    }
}

impl<T> Grid<T> {
    pub fn rows(&self) -> u16 {
        self.rows
    }

    pub fn cols(&self) -> u16 {
        self.cols
    }

    pub fn is_in_bounds(&self, coord: Coord) -> bool {
        coord.0 < self.rows && coord.1 < self.cols
    }

    pub fn ravel_index(&self, coord: Coord) -> usize {
        // Overflow-safe since rows and cols are u16 (assuming usize is at least 32 bits)
        coord.0 as usize * self.cols as usize + coord.1 as usize
    }

    pub fn unravel_index(&self, index: usize) -> Coord {
        (
            (index / self.cols as usize) as u16,
            (index % self.cols as usize) as u16,
        )
    }

    pub fn get(&self, coord: Coord) -> Option<&T> {
        if self.is_in_bounds(coord) {
            self.data.get(self.ravel_index(coord))
        } else {
            None
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (Coord, &T)> {
        self.data
            .iter()
            .enumerate()
            .map(|(i, value)| (self.unravel_index(i), value))
    }
}

impl<T> std::ops::Index<Coord> for Grid<T> {
    type Output = T;

    fn index(&self, coord: Coord) -> &Self::Output {
        if !self.is_in_bounds(coord) {
            panic!(
                "Coordinate {:?} is out of bounds for a {}x{} grid",
                coord, self.rows, self.cols
            );
        }
        &self.data[self.ravel_index(coord)]
    }
}

impl<T> std::ops::IndexMut<Coord> for Grid<T> {
    fn index_mut(&mut self, coord: Coord) -> &mut Self::Output {
        if !self.is_in_bounds(coord) {
            panic!(
                "Coordinate {:?} is out of bounds for a {}x{} grid",
                coord, self.rows, self.cols
            );
        }
        let idx = self.ravel_index(coord);
        &mut self.data[idx]
    }
}
