use std::time::Duration;

use crate::generators::{DEFAULT_COLS, DEFAULT_ROWS};

/// Slowest replay frame delay, at speed 0.
pub const MAX_FRAME_DELAY_MS: u64 = 150;
/// Fastest replay frame delay, at speed 1.
pub const MIN_FRAME_DELAY_MS: u64 = 1;
/// Largest accepted row or column count. Keeps the rendered frame,
/// `(2 * n + 1)` glyphs of two columns each, within terminal coordinates.
pub const MAX_DIMENSION: u16 = 255;
/// Below this delay several exploration steps are revealed per frame.
const FAST_DELAY_MS: u64 = 5;
const FAST_STEPS_PER_FRAME: usize = 5;

/// Settings for the interactive viewer.
#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub rows: u16,
    pub cols: u16,
    /// Seed for reproducible mazes. A fresh OS seed is used when absent.
    pub seed: Option<u64>,
    /// Replay speed between 0 (slowest) and 1 (fastest).
    pub speed: f64,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            rows: DEFAULT_ROWS,
            cols: DEFAULT_COLS,
            seed: None,
            speed: 0.8,
        }
    }
}

impl AppConfig {
    pub const USAGE: &'static str =
        "Usage: terramaze [--rows N] [--cols N] [--seed N] [--speed 0.0-1.0]";

    /// Parse command line arguments, without the executable name.
    pub fn from_args<I, S>(args: I) -> Result<Self, String>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut config = AppConfig::default();
        let mut args = args.into_iter();
        while let Some(flag) = args.next() {
            let flag = flag.as_ref();
            let value = args
                .next()
                .ok_or_else(|| format!("Missing value for {}", flag))?;
            let value = value.as_ref();
            match flag {
                "--rows" => config.rows = parse_dimension(flag, value)?,
                "--cols" => config.cols = parse_dimension(flag, value)?,
                "--seed" => {
                    config.seed = Some(
                        value
                            .parse::<u64>()
                            .map_err(|_| format!("Invalid seed: {}", value))?,
                    )
                }
                "--speed" => {
                    config.speed = value
                        .parse::<f64>()
                        .ok()
                        .filter(|s| (0.0..=1.0).contains(s))
                        .ok_or_else(|| format!("Speed must be between 0 and 1, got {}", value))?
                }
                _ => return Err(format!("Unknown argument: {}", flag)),
            }
        }
        Ok(config)
    }
}

fn parse_dimension(flag: &str, value: &str) -> Result<u16, String> {
    match value.parse::<u16>() {
        Ok(n) if (1..=MAX_DIMENSION).contains(&n) => Ok(n),
        _ => Err(format!(
            "{} expects a number between 1 and {}, got {}",
            flag, MAX_DIMENSION, value
        )),
    }
}

/// Frame delay for a speed ratio in `[0, 1]`. Out-of-range ratios are clamped.
pub fn frame_delay(speed: f64) -> Duration {
    let speed = speed.clamp(0.0, 1.0);
    let span = (MAX_FRAME_DELAY_MS - MIN_FRAME_DELAY_MS) as f64;
    Duration::from_millis(MAX_FRAME_DELAY_MS - (speed * span) as u64)
}

/// Exploration steps revealed per frame at the given delay.
pub fn steps_per_frame(delay: Duration) -> usize {
    if delay < Duration::from_millis(FAST_DELAY_MS) {
        FAST_STEPS_PER_FRAME
    } else {
        1
    }
}
