mod astar;
mod bfs;
mod dfs;
mod dijkstra;
mod path;

pub use astar::{manhattan, nearest_target_distance, solve_astar};
pub use bfs::solve_bfs;
pub use dfs::solve_dfs;
pub use dijkstra::solve_dijkstra;
pub use path::reconstruct_path;

use crate::maze::{Coord, Grid, Maze};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Solver {
    Bfs,
    Dfs,
    Dijkstra,
    AStar,
}

impl Solver {
    pub const ALL: [Solver; 4] = [Solver::Bfs, Solver::Dfs, Solver::Dijkstra, Solver::AStar];

    /// Short label shown next to the statistics.
    pub fn label(&self) -> &'static str {
        match self {
            Solver::Bfs => "BFS",
            Solver::Dfs => "DFS",
            Solver::Dijkstra => "Dijkstra",
            Solver::AStar => "A*",
        }
    }
}

impl std::fmt::Display for Solver {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Solver::Bfs => write!(f, "Breadth-First Search (BFS)"),
            Solver::Dfs => write!(f, "Depth-First Search (DFS)"),
            Solver::Dijkstra => write!(f, "Dijkstra's Algorithm"),
            Solver::AStar => write!(f, "A* Search"),
        }
    }
}

/// How a cell was first reached during a search.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Parent {
    /// The cell the search started from.
    Start,
    /// Reached by stepping from the given cell.
    From(Coord),
}

/// Predecessor of every cell a search reached. Cells never reached have no entry.
#[derive(Debug, Clone, PartialEq)]
pub struct Predecessors {
    links: Grid<Option<Parent>>,
}

impl Predecessors {
    pub fn new(rows: u16, cols: u16) -> Self {
        Predecessors {
            links: Grid::new(rows, cols, None),
        }
    }

    pub fn set_start(&mut self, coord: Coord) {
        self.links[coord] = Some(Parent::Start);
    }

    pub fn set(&mut self, coord: Coord, parent: Coord) {
        self.links[coord] = Some(Parent::From(parent));
    }

    pub fn get(&self, coord: Coord) -> Option<Parent> {
        self.links.get(coord).copied().flatten()
    }

    pub fn contains(&self, coord: Coord) -> bool {
        self.get(coord).is_some()
    }

    /// Number of cells with an entry. Scans the whole grid, O(rows * cols).
    pub fn len(&self) -> usize {
        self.links.iter().filter(|(_, link)| link.is_some()).count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Outcome of one search run.
#[derive(Debug, Clone, PartialEq)]
pub struct SolveResult {
    pub predecessors: Predecessors,
    /// Cells in the order they were finalized, for replay.
    pub exploration_order: Vec<Coord>,
    /// The first target finalized, or `None` if the frontier ran out.
    pub reached: Option<Coord>,
    /// Accumulated terrain cost the strategy settled on for `reached`.
    /// Only the weighted strategies track it.
    pub settled_cost: Option<u32>,
}

impl SolveResult {
    pub(crate) fn new(rows: u16, cols: u16) -> Self {
        SolveResult {
            predecessors: Predecessors::new(rows, cols),
            exploration_order: Vec::new(),
            reached: None,
            settled_cost: None,
        }
    }
}

/// Runs searches over a maze of fixed size, reusing one visited buffer,
/// and remembers the last reconstructed path.
pub struct MazeSolver {
    visited: Grid<bool>,
    shortest_path: Vec<Coord>,
    total_cost: u32,
}

impl MazeSolver {
    pub fn new(rows: u16, cols: u16) -> Self {
        MazeSolver {
            visited: Grid::new(rows, cols, false),
            shortest_path: Vec::new(),
            total_cost: 0,
        }
    }

    fn reset_visited(&mut self) {
        self.visited.fill(false);
    }

    /// Clear visited state and the last path and cost.
    pub fn reset(&mut self) {
        self.reset_visited();
        self.shortest_path.clear();
        self.total_cost = 0;
    }

    /// Search from `start` until any cell of `targets` is finalized.
    ///
    /// # Panics
    /// * If the maze does not match the size this solver was built for
    /// * If `targets` is empty
    /// * If `start` or any target is out of bounds
    pub fn search(
        &mut self,
        maze: &Maze,
        solver: Solver,
        start: Coord,
        targets: &[Coord],
    ) -> SolveResult {
        if maze.rows() != self.visited.rows() || maze.cols() != self.visited.cols() {
            panic!(
                "Solver built for a {}x{} maze was given a {}x{} maze",
                self.visited.rows(),
                self.visited.cols(),
                maze.rows(),
                maze.cols()
            );
        }
        if targets.is_empty() {
            panic!("Search needs at least one target");
        }
        if !maze.is_in_bounds(start) {
            panic!("Start {:?} is out of bounds", start);
        }
        if let Some(target) = targets.iter().find(|&&t| !maze.is_in_bounds(t)) {
            panic!("Target {:?} is out of bounds", target);
        }

        self.reset_visited();
        let started = std::time::Instant::now();
        let result = match solver {
            Solver::Bfs => solve_bfs(maze, &mut self.visited, start, targets),
            Solver::Dfs => solve_dfs(maze, &mut self.visited, start, targets),
            Solver::Dijkstra => solve_dijkstra(maze, &mut self.visited, start, targets),
            Solver::AStar => solve_astar(maze, &mut self.visited, start, targets),
        };
        tracing::debug!(
            "[solver] {} finalized {} cells, reached {:?} in {:?}",
            solver.label(),
            result.exploration_order.len(),
            result.reached,
            started.elapsed()
        );
        result
    }

    /// Rebuild the path of `result` and store it as the last path.
    pub fn reconstruct_path(&mut self, maze: &Maze, result: &SolveResult) -> (&[Coord], u32) {
        let (path, cost) = reconstruct_path(maze, &result.predecessors, result.reached);
        self.shortest_path = path;
        self.total_cost = cost;
        (&self.shortest_path, self.total_cost)
    }

    pub fn shortest_path(&self) -> &[Coord] {
        &self.shortest_path
    }

    pub fn total_cost(&self) -> u32 {
        self.total_cost
    }
}
