use std::time::Duration;

use super::config::{frame_delay, steps_per_frame};
use crate::maze::Coord;

/// Progressive reveal of a finished search's exploration order.
///
/// The search itself is already complete; the replay only controls how much
/// of it is shown. Stepping backward and forward is allowed while paused.
pub struct Replay {
    order: Vec<Coord>,
    /// Number of cells revealed so far. Always between 0 and `order.len()`.
    cursor: usize,
    paused: bool,
    delay: Duration,
}

impl Replay {
    pub fn new(order: Vec<Coord>, speed: f64) -> Self {
        Replay {
            order,
            cursor: 0,
            paused: false,
            delay: frame_delay(speed),
        }
    }

    pub fn set_speed(&mut self, speed: f64) {
        self.delay = frame_delay(speed);
    }

    /// Time to wait between two frames.
    pub fn delay(&self) -> Duration {
        self.delay
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    pub fn toggle_pause(&mut self) {
        self.paused = !self.paused;
    }

    pub fn is_finished(&self) -> bool {
        self.cursor >= self.order.len()
    }

    /// Reveal the next frame's worth of cells. Does nothing while paused.
    /// Returns whether the whole exploration order is now revealed.
    pub fn advance(&mut self) -> bool {
        if !self.paused {
            let steps = steps_per_frame(self.delay);
            self.cursor = (self.cursor + steps).min(self.order.len());
        }
        self.is_finished()
    }

    /// Reveal one more cell. Returns the cell, or `None` if everything is shown.
    pub fn step_forward(&mut self) -> Option<Coord> {
        let cell = self.order.get(self.cursor).copied()?;
        self.cursor += 1;
        Some(cell)
    }

    /// Hide the most recently revealed cell. Returns the cell, or `None` if nothing is shown.
    pub fn step_backward(&mut self) -> Option<Coord> {
        self.cursor = self.cursor.checked_sub(1)?;
        self.order.get(self.cursor).copied()
    }

    /// Reveal everything at once.
    pub fn finish(&mut self) {
        self.cursor = self.order.len();
    }

    /// Cells revealed so far, in exploration order.
    pub fn revealed(&self) -> &[Coord] {
        &self.order[..self.cursor]
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }
}
