/// Disjoint sets over identifiers `0..size`, with path compression and union by rank.
pub struct UnionFind {
    parent: Vec<usize>,
    rank: Vec<u8>,
}

impl UnionFind {
    pub fn new(size: usize) -> Self {
        UnionFind {
            parent: (0..size).collect(),
            rank: vec![0; size],
        }
    }

    fn check(&self, x: usize) {
        if x >= self.parent.len() {
            panic!(
                "Identifier {} is out of range for a union-find of size {}",
                x,
                self.parent.len()
            );
        }
    }

    /// Representative of the set containing `x`.
    pub fn find(&mut self, x: usize) -> usize {
        self.check(x);
        // Iterative so large grids cannot overflow the stack
        let mut root = x;
        while self.parent[root] != root {
            root = self.parent[root];
        }
        let mut node = x;
        while self.parent[node] != root {
            let next = self.parent[node];
            self.parent[node] = root;
            node = next;
        }
        root
    }

    /// Merge the sets containing `x` and `y`.
    /// Returns `false` if they were already in the same set.
    pub fn union(&mut self, x: usize, y: usize) -> bool {
        let root_x = self.find(x);
        let root_y = self.find(y);

        if root_x == root_y {
            return false; // Already in same set
        }

        match self.rank[root_x].cmp(&self.rank[root_y]) {
            std::cmp::Ordering::Greater => {
                self.parent[root_y] = root_x;
            }
            std::cmp::Ordering::Less => {
                self.parent[root_x] = root_y;
            }
            std::cmp::Ordering::Equal => {
                self.parent[root_y] = root_x;
                self.rank[root_x] += 1;
            }
        }
        true
    }

    pub fn is_connected(&mut self, x: usize, y: usize) -> bool {
        self.find(x) == self.find(y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_singletons() {
        let mut uf = UnionFind::new(4);
        assert!((0..4).all(|i| uf.find(i) == i));
        assert!(!uf.is_connected(0, 1));
        assert!(uf.is_connected(2, 2));
    }

    #[test]
    fn test_union_is_transitive() {
        let mut uf = UnionFind::new(6);
        assert!(uf.union(0, 1));
        assert!(uf.union(2, 3));
        assert!(uf.union(1, 3));
        assert!(uf.is_connected(0, 2));
        assert!(!uf.is_connected(0, 4));
        // Already joined through 1 and 3
        assert!(!uf.union(0, 2));
    }

    #[test]
    fn test_long_chain() {
        let size = 10_000;
        let mut uf = UnionFind::new(size);
        (1..size).for_each(|i| {
            uf.union(i - 1, i);
        });
        assert!(uf.is_connected(0, size - 1));
    }

    #[test]
    #[should_panic(expected = "out of range")]
    fn test_out_of_range_panics() {
        let mut uf = UnionFind::new(3);
        uf.find(3);
    }
}
