use std::io::{Stdout, Write};

use crossterm::{
    QueueableCommand, cursor, queue,
    style::{self, Attribute, Color, StyledContent, Stylize},
    terminal::{self, ClearType},
};

use crate::maze::{Coord, Grid, Maze, Side, Terrain};

/// What is drawn at one position of the frame. The frame has a slot for every
/// cell, every wall between two cells, and every wall corner.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Glyph {
    Wall,
    Floor(Terrain),
    Explored(Terrain),
    Route,
    Start,
    Goal,
}

impl Glyph {
    /// The width of each glyph when rendered, in character widths.
    pub const WIDTH: u16 = 2;

    fn styled(self) -> StyledContent<&'static str> {
        let symbol = match self {
            Glyph::Wall => "██".with(Color::DarkGrey),
            Glyph::Floor(terrain) => "  ".on(terrain.color()),
            Glyph::Explored(terrain) => "··".with(Color::DarkBlue).on(terrain.color()),
            Glyph::Route => "  ".on(Color::Rgb {
                r: 255,
                g: 140,
                b: 0,
            }),
            Glyph::Start => "  ".on(Color::Rgb {
                r: 50,
                g: 205,
                b: 50,
            }),
            Glyph::Goal => "  ".on(Color::Rgb {
                r: 255,
                g: 215,
                b: 0,
            }),
        };

        #[cfg(debug_assertions)]
        {
            use unicode_width::UnicodeWidthStr;
            assert_eq!(
                symbol.content().width(),
                Glyph::WIDTH as usize,
                "Each glyph must occupy exactly two character widths."
            );
        }
        symbol
    }
}

/// Search state drawn on top of the maze.
pub struct Overlay {
    explored: Grid<bool>,
    /// Position of each cell on the reconstructed route, if it is on it.
    route: Grid<Option<usize>>,
}

impl Overlay {
    pub fn new(rows: u16, cols: u16) -> Self {
        Overlay {
            explored: Grid::new(rows, cols, false),
            route: Grid::new(rows, cols, None),
        }
    }

    pub fn clear(&mut self) {
        self.explored.fill(false);
        self.route.fill(None);
    }

    pub fn set_explored(&mut self, coord: Coord, explored: bool) {
        self.explored[coord] = explored;
    }

    pub fn is_explored(&self, coord: Coord) -> bool {
        self.explored[coord]
    }

    pub fn is_on_route(&self, coord: Coord) -> bool {
        self.route[coord].is_some()
    }

    pub fn set_route(&mut self, route: &[Coord]) {
        self.route.fill(None);
        route
            .iter()
            .enumerate()
            .for_each(|(i, &coord)| self.route[coord] = Some(i));
    }
}

/// Glyph for the cell at `coord`.
pub fn cell_glyph(
    maze: &Maze,
    start: Coord,
    destinations: &[Coord],
    overlay: &Overlay,
    coord: Coord,
) -> Glyph {
    let terrain = maze[coord].terrain();
    if coord == start {
        Glyph::Start
    } else if destinations.contains(&coord) {
        Glyph::Goal
    } else if overlay.is_on_route(coord) {
        Glyph::Route
    } else if overlay.is_explored(coord) {
        Glyph::Explored(terrain)
    } else {
        Glyph::Floor(terrain)
    }
}

/// Glyph for the wall slot between `coord` and its neighbor on `side`.
pub fn passage_glyph(maze: &Maze, overlay: &Overlay, coord: Coord, side: Side) -> Glyph {
    let Some(next) = maze.neighbor(coord, side).filter(|_| !maze.has_wall(coord, side)) else {
        return Glyph::Wall;
    };
    if let (Some(a), Some(b)) = (overlay.route[coord], overlay.route[next]) {
        // Consecutive on the route
        if a.abs_diff(b) == 1 {
            return Glyph::Route;
        }
    }
    if overlay.is_explored(coord) && overlay.is_explored(next) {
        Glyph::Explored(Terrain::Default)
    } else {
        Glyph::Floor(Terrain::Default)
    }
}

/// Position of a cell in the frame, as (frame row, frame col).
pub fn frame_position(coord: Coord) -> Coord {
    (coord.0 * 2 + 1, coord.1 * 2 + 1)
}

/// Position of the wall slot on `side` of a cell, as (frame row, frame col).
pub fn wall_position(coord: Coord, side: Side) -> Coord {
    let (row, col) = frame_position(coord);
    match side {
        Side::Top => (row - 1, col),
        Side::Right => (row, col + 1),
        Side::Bottom => (row + 1, col),
        Side::Left => (row, col - 1),
    }
}

/// Full frame for the maze, `2 * rows + 1` by `2 * cols + 1` glyphs.
pub fn compose(
    maze: &Maze,
    start: Coord,
    destinations: &[Coord],
    overlay: &Overlay,
) -> Grid<Glyph> {
    let mut frame = Grid::new(maze.rows() * 2 + 1, maze.cols() * 2 + 1, Glyph::Wall);
    for (coord, _) in maze.cells() {
        frame[frame_position(coord)] = cell_glyph(maze, start, destinations, overlay, coord);
        for side in [Side::Right, Side::Bottom] {
            if maze.neighbor(coord, side).is_some() {
                frame[wall_position(coord, side)] = passage_glyph(maze, overlay, coord, side);
            }
        }
    }
    frame
}

/// Text shown under the maze.
pub struct Status<'a> {
    pub algorithm: Option<&'a str>,
    pub total_cost: u32,
    pub explored: usize,
    /// Length of the exploration order being replayed
    pub to_explore: usize,
    pub paused: bool,
    pub message: &'a str,
}

pub struct Renderer {
    /// Standard output handle to write to the terminal
    stdout: Stdout,
    /// Frame dimensions in glyphs (rows, cols)
    frame_dims: (u16, u16),
}

impl Renderer {
    /// Number of terminal rows reserved under the maze for the status area.
    pub const NUM_STATUS_ROWS: u16 = 5;

    pub fn new(rows: u16, cols: u16) -> Self {
        Self {
            stdout: std::io::stdout(),
            frame_dims: (rows * 2 + 1, cols * 2 + 1),
        }
    }

    /// Terminal size needed to show the frame and the status area, as (width, height).
    pub fn required_size(&self) -> (u16, u16) {
        let (rows, cols) = self.frame_dims;
        (cols * Glyph::WIDTH, rows + Renderer::NUM_STATUS_ROWS)
    }

    /// Check if terminal size is sufficient for the frame.
    /// If not, display a message and return Ok(false).
    pub fn check_size(&mut self) -> std::io::Result<bool> {
        let (term_width, term_height) = terminal::size()?;
        let (width, height) = self.required_size();
        if term_width < width || term_height < height {
            let msg = format!(
                "Terminal size is too small ({}x{}), the maze needs {}x{}. Please resize the terminal or press Esc to exit.\r\n",
                term_width, term_height, width, height
            );
            queue!(
                self.stdout,
                terminal::Clear(ClearType::All),
                cursor::MoveTo(0, 0),
                style::PrintStyledContent(msg.with(Color::Yellow).attribute(Attribute::Bold)),
            )?;
            self.stdout.flush()?;
            return Ok(false);
        }
        Ok(true)
    }

    pub fn draw_frame(&mut self, frame: &Grid<Glyph>) -> std::io::Result<()> {
        self.stdout
            .queue(terminal::Clear(ClearType::All))?
            .queue(cursor::MoveTo(0, 0))?;
        for row in 0..frame.rows() {
            self.stdout.queue(cursor::MoveTo(0, row))?;
            for col in 0..frame.cols() {
                self.stdout
                    .queue(style::PrintStyledContent(frame[(row, col)].styled()))?;
            }
        }
        self.stdout.flush()
    }

    /// Redraw a single slot of the frame. Queued only; drawing the status flushes.
    pub fn draw_glyph(&mut self, position: Coord, glyph: Glyph) -> std::io::Result<()> {
        queue!(
            self.stdout,
            cursor::MoveTo(position.1 * Glyph::WIDTH, position.0),
            style::PrintStyledContent(glyph.styled())
        )
    }

    pub fn draw_status(&mut self, status: &Status) -> std::io::Result<()> {
        let top = self.frame_dims.0;
        let line = |i: u16| cursor::MoveTo(0, top + i);

        queue!(
            self.stdout,
            line(0),
            terminal::Clear(ClearType::FromCursorDown),
            style::PrintStyledContent(" Start ".black().on(Color::Rgb { r: 50, g: 205, b: 50 })),
            style::Print(" "),
            style::PrintStyledContent(" Finish (x3) ".black().on(Color::Rgb { r: 255, g: 215, b: 0 })),
            style::Print(" "),
        )?;
        for terrain in [Terrain::Grass, Terrain::Mud, Terrain::Water] {
            let label = format!(" {} +{} ", terrain, terrain.penalty());
            queue!(
                self.stdout,
                style::PrintStyledContent(label.black().on(terrain.color())),
                style::Print(" ")
            )?;
        }

        let algorithm = status.algorithm.unwrap_or("-");
        queue!(
            self.stdout,
            line(1),
            style::PrintStyledContent(
                format!(
                    "Algorithm: {}   Total Penalty: {}   Explored: {}/{}{}",
                    algorithm,
                    status.total_cost,
                    status.explored,
                    status.to_explore,
                    if status.paused { "   [paused]" } else { "" }
                )
                .with(Color::Green)
                .attribute(Attribute::Bold)
            ),
            line(2),
            style::PrintStyledContent(status.message.with(Color::Yellow)),
            line(3),
            style::PrintStyledContent(
                "b: BFS  d: DFS  j: Dijkstra  a: A*  n: new maze".with(Color::Cyan)
            ),
            line(4),
            style::PrintStyledContent(
                "Enter: pause/resume  ←/→: step when paused  ↑/↓: speed  Esc: exit".with(Color::Cyan)
            ),
        )?;
        self.stdout.flush()
    }
}
