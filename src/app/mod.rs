mod config;
mod renderer;
mod replay;

use std::{
    io::{Stdout, Write},
    time::{Duration, Instant},
};

use crossterm::{
    cursor,
    event::{self, KeyCode},
    queue,
    terminal::{self, ClearType},
};

pub use config::{AppConfig, MAX_DIMENSION, frame_delay, steps_per_frame};
pub use renderer::{Glyph, Overlay, compose};
pub use replay::Replay;

use crate::{
    error::MazeError,
    generators::MazeGenerator,
    maze::{Coord, Side},
    solvers::{MazeSolver, SolveResult, Solver},
};
use renderer::{Renderer, Status, cell_glyph, frame_position, passage_glyph, wall_position};

/// A search whose exploration is being replayed.
struct Run {
    solver: Solver,
    result: SolveResult,
    replay: Replay,
}

pub struct App {
    generator: MazeGenerator,
    solver: MazeSolver,
    overlay: Overlay,
    renderer: Renderer,
    /// Replay speed between 0 and 1
    speed: f64,
    run: Option<Run>,
    /// Algorithm whose path and cost are currently shown
    shown_algorithm: Option<Solver>,
    message: String,
}

impl App {
    /// How often to wake up when nothing is being replayed
    const IDLE_POLL_TIMEOUT: Duration = Duration::from_millis(100);
    const SPEED_STEP: f64 = 0.1;

    pub fn new(config: &AppConfig) -> Result<Self, MazeError> {
        if config.rows > MAX_DIMENSION || config.cols > MAX_DIMENSION {
            return Err(MazeError::TooLarge {
                rows: config.rows,
                cols: config.cols,
                max: MAX_DIMENSION,
            });
        }
        let generator = MazeGenerator::new(config.rows, config.cols, config.seed)?;
        Ok(Self {
            generator,
            solver: MazeSolver::new(config.rows, config.cols),
            overlay: Overlay::new(config.rows, config.cols),
            renderer: Renderer::new(config.rows, config.cols),
            speed: config.speed.clamp(0.0, 1.0),
            run: None,
            shown_algorithm: None,
            message: String::from("Pick an algorithm to solve the maze."),
        })
    }

    /// Set a panic hook to restore terminal state on panic
    /// This ensures that the terminal is not left in raw mode or alternate screen on panic
    fn set_panic_hook() {
        let hook = std::panic::take_hook();
        std::panic::set_hook(Box::new(move |panic_info| {
            let _ = App::restore_terminal(&mut std::io::stdout()); // ignore any errors as we are already failing
            hook(panic_info);
        }));
    }

    /// Setup terminal in raw mode and enter alternate screen
    /// Also sets a panic hook to restore terminal on panic
    pub fn setup_terminal(stdout: &mut Stdout) -> std::io::Result<()> {
        terminal::enable_raw_mode()?;
        App::set_panic_hook();
        queue!(
            stdout,
            terminal::EnterAlternateScreen,
            terminal::Clear(ClearType::All),
            cursor::Hide,
            cursor::MoveTo(0, 0)
        )?;
        stdout.flush()?;
        Ok(())
    }

    /// Restore terminal to original state
    /// Leave alternate screen and disable raw mode
    pub fn restore_terminal(stdout: &mut Stdout) -> std::io::Result<()> {
        queue!(stdout, terminal::LeaveAlternateScreen, cursor::Show)?;
        stdout.flush()?;
        terminal::disable_raw_mode()?;
        Ok(())
    }

    /// Main application loop. Returns when the user presses Esc.
    pub fn run(&mut self) -> std::io::Result<()> {
        tracing::info!("Started main app loop");
        self.redraw()?;

        loop {
            let timeout = match &self.run {
                Some(run) if !run.replay.is_paused() && !run.replay.is_finished() => {
                    run.replay.delay()
                }
                _ => App::IDLE_POLL_TIMEOUT,
            };

            if !event::poll(timeout)? {
                self.tick()?;
                continue;
            }

            match event::read()? {
                event::Event::Key(key_event) if key_event.kind == event::KeyEventKind::Press => {
                    match key_event.code {
                        KeyCode::Esc => {
                            tracing::debug!("[app loop] Esc key pressed, exiting");
                            break;
                        }
                        KeyCode::Char('b') => self.start_search(Solver::Bfs)?,
                        KeyCode::Char('d') => self.start_search(Solver::Dfs)?,
                        KeyCode::Char('j') => self.start_search(Solver::Dijkstra)?,
                        KeyCode::Char('a') => self.start_search(Solver::AStar)?,
                        KeyCode::Char('n') => self.new_maze()?,
                        KeyCode::Enter => self.toggle_pause()?,
                        KeyCode::Left => self.step_backward()?,
                        KeyCode::Right => self.step_forward()?,
                        KeyCode::Up => self.change_speed(App::SPEED_STEP)?,
                        KeyCode::Down => self.change_speed(-App::SPEED_STEP)?,
                        _ => {} // Ignore other keys
                    }
                }
                event::Event::Resize(_, _) => self.redraw()?,
                _ => {} // Ignore other events
            }
        }

        tracing::info!("Exiting main app loop");
        Ok(())
    }

    /// Reveal the next frame of the current replay
    fn tick(&mut self) -> std::io::Result<()> {
        let Some((newly_revealed, finished)) = self.advance_replay() else {
            return Ok(());
        };
        if finished {
            return self.redraw();
        }
        for coord in newly_revealed {
            self.redraw_cell(coord)?;
        }
        self.draw_status()
    }

    /// Advance a running replay by one frame and mark the revealed cells.
    /// Completes the run when the last cell is revealed.
    /// Returns the revealed cells and whether the replay finished, or `None`
    /// if no replay is running.
    fn advance_replay(&mut self) -> Option<(Vec<Coord>, bool)> {
        let run = self
            .run
            .as_mut()
            .filter(|run| !run.replay.is_paused() && !run.replay.is_finished())?;
        let before = run.replay.revealed().len();
        let finished = run.replay.advance();
        let newly_revealed = run.replay.revealed()[before..].to_vec();

        for &coord in &newly_revealed {
            self.overlay.set_explored(coord, true);
        }
        if finished {
            self.complete_run();
        }
        Some((newly_revealed, finished))
    }

    fn start_search(&mut self, strategy: Solver) -> std::io::Result<()> {
        self.begin_search(strategy);
        self.redraw()
    }

    /// Run a search to completion and start replaying its exploration order.
    /// Any replay in progress is discarded along with the last path and cost.
    fn begin_search(&mut self, strategy: Solver) {
        self.solver.reset();
        self.overlay.clear();
        self.shown_algorithm = None;

        let maze = self.generator.maze();
        let destinations = self.generator.destinations();
        let result = self
            .solver
            .search(maze, strategy, self.generator.start(), destinations);
        tracing::info!(
            "[app] {} explored {} cells, reached {:?}",
            strategy.label(),
            result.exploration_order.len(),
            result.reached
        );

        let replay = Replay::new(result.exploration_order.clone(), self.speed);
        let finished = replay.is_finished();
        self.message = format!("Replaying {}...", strategy);
        self.run = Some(Run {
            solver: strategy,
            result,
            replay,
        });
        if finished {
            self.complete_run();
        }
    }

    /// Reconstruct the path of the finished run and put it and its cost on show.
    fn complete_run(&mut self) {
        let Some(run) = self.run.as_ref() else {
            return;
        };
        let (path, cost) = self
            .solver
            .reconstruct_path(self.generator.maze(), &run.result);
        self.overlay.set_route(path);
        self.shown_algorithm = Some(run.solver);
        self.message = match run.result.reached {
            Some(target) => format!(
                "{} reached {:?} with a path of {} cells.",
                run.solver.label(),
                target,
                path.len()
            ),
            None => format!("{} found no path.", run.solver.label()),
        };
        tracing::info!(
            "[app] {} path of {} cells, total penalty {}",
            run.solver.label(),
            path.len(),
            cost
        );
    }

    fn new_maze(&mut self) -> std::io::Result<()> {
        self.regenerate();
        self.redraw()
    }

    /// Drop the running replay, the last path and cost, and build a fresh maze.
    fn regenerate(&mut self) {
        self.run = None;
        self.generator.reset();
        self.solver.reset();
        self.overlay.clear();
        self.shown_algorithm = None;
        self.message = String::from("New maze generated.");
    }

    fn toggle_pause(&mut self) -> std::io::Result<()> {
        if let Some(run) = self.run.as_mut().filter(|run| !run.replay.is_finished()) {
            run.replay.toggle_pause();
            self.draw_status()?;
        }
        Ok(())
    }

    fn step_forward(&mut self) -> std::io::Result<()> {
        let Some(run) = self.run.as_mut().filter(|run| run.replay.is_paused()) else {
            return Ok(());
        };
        if let Some(coord) = run.replay.step_forward() {
            let finished = run.replay.is_finished();
            self.overlay.set_explored(coord, true);
            self.redraw_cell(coord)?;
            if finished {
                self.complete_run();
                return self.redraw();
            }
            self.draw_status()?;
        }
        Ok(())
    }

    fn step_backward(&mut self) -> std::io::Result<()> {
        let Some(run) = self
            .run
            .as_mut()
            .filter(|run| run.replay.is_paused() && !run.replay.is_finished())
        else {
            return Ok(());
        };
        if let Some(coord) = run.replay.step_backward() {
            self.overlay.set_explored(coord, false);
            self.redraw_cell(coord)?;
            self.draw_status()?;
        }
        Ok(())
    }

    fn change_speed(&mut self, delta: f64) -> std::io::Result<()> {
        self.speed = (self.speed + delta).clamp(0.0, 1.0);
        if let Some(run) = self.run.as_mut() {
            run.replay.set_speed(self.speed);
        }
        tracing::debug!("[app loop] Replay speed set to {:.1}", self.speed);
        self.message = format!("Replay speed {:.0}%", self.speed * 100.0);
        self.draw_status()
    }

    /// Redraw a cell and the passages around it.
    fn redraw_cell(&mut self, coord: Coord) -> std::io::Result<()> {
        let maze = self.generator.maze();
        let glyph = cell_glyph(
            maze,
            self.generator.start(),
            self.generator.destinations(),
            &self.overlay,
            coord,
        );
        self.renderer.draw_glyph(frame_position(coord), glyph)?;
        for side in Side::ALL {
            if maze.neighbor(coord, side).is_some() {
                let glyph = passage_glyph(maze, &self.overlay, coord, side);
                self.renderer
                    .draw_glyph(wall_position(coord, side), glyph)?;
            }
        }
        Ok(())
    }

    fn redraw(&mut self) -> std::io::Result<()> {
        if !self.renderer.check_size()? {
            return Ok(());
        }
        let frame = compose(
            self.generator.maze(),
            self.generator.start(),
            self.generator.destinations(),
            &self.overlay,
        );
        self.renderer.draw_frame(&frame)?;
        self.draw_status()
    }

    fn draw_status(&mut self) -> std::io::Result<()> {
        let (paused, explored, to_explore) = match &self.run {
            Some(run) => (
                run.replay.is_paused(),
                run.replay.revealed().len(),
                run.replay.len(),
            ),
            None => (false, 0, 0),
        };
        let status = Status {
            algorithm: self.shown_algorithm.map(|s| s.label()),
            total_cost: self.solver.total_cost(),
            explored,
            to_explore,
            paused,
            message: &self.message,
        };
        self.renderer.draw_status(&status)
    }

    /// Profiling mode: generate mazes and run every solver on each without rendering.
    pub fn profile(
        rows: u16,
        cols: u16,
        seed: Option<u64>,
        iterations: usize,
    ) -> Result<Vec<SolverProfile>, MazeError> {
        let mut generator = MazeGenerator::new(rows, cols, seed)?;
        let mut solver = MazeSolver::new(rows, cols);
        let mut profiles = Solver::ALL.map(SolverProfile::new);

        for i in 0..iterations {
            if i > 0 {
                generator.reset();
            }
            for profile in profiles.iter_mut() {
                let started = Instant::now();
                let result = solver.search(
                    generator.maze(),
                    profile.solver,
                    generator.start(),
                    generator.destinations(),
                );
                let (_, cost) = solver.reconstruct_path(generator.maze(), &result);
                profile.elapsed += started.elapsed();
                profile.runs += 1;
                profile.explored += result.exploration_order.len();
                profile.total_cost += cost as u64;
                if result.reached.is_some() {
                    profile.reached += 1;
                }
            }
        }
        Ok(profiles.to_vec())
    }
}

/// Totals for one solver over a profiling session.
#[derive(Debug, Clone, PartialEq)]
pub struct SolverProfile {
    pub solver: Solver,
    pub runs: usize,
    pub reached: usize,
    pub explored: usize,
    pub total_cost: u64,
    pub elapsed: Duration,
}

impl SolverProfile {
    fn new(solver: Solver) -> Self {
        SolverProfile {
            solver,
            runs: 0,
            reached: 0,
            explored: 0,
            total_cost: 0,
            elapsed: Duration::ZERO,
        }
    }

    pub fn mean_explored(&self) -> f64 {
        if self.runs == 0 {
            0.0
        } else {
            self.explored as f64 / self.runs as f64
        }
    }

    pub fn mean_cost(&self) -> f64 {
        if self.runs == 0 {
            0.0
        } else {
            self.total_cost as f64 / self.runs as f64
        }
    }
}
