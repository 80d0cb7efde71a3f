use terramaze::{
    app::App,
    generators::{DEFAULT_COLS, DEFAULT_ROWS},
};

const DEFAULT_ITERATIONS: usize = 100;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_max_level(tracing::Level::INFO)
        .init();

    let mut args = std::env::args();
    args.next(); // Skip executable name
    let num_iters = args
        .next()
        .and_then(|s| s.parse::<usize>().ok())
        .unwrap_or(DEFAULT_ITERATIONS);

    tracing::info!(
        "[profile] {} iterations on {}x{} mazes",
        num_iters,
        DEFAULT_ROWS,
        DEFAULT_COLS
    );
    let profiles = App::profile(DEFAULT_ROWS, DEFAULT_COLS, None, num_iters)?;
    for profile in &profiles {
        tracing::info!(
            "[profile] {:<8} reached {}/{}, mean explored {:.1}, mean cost {:.1}, total time {:?}",
            profile.solver.label(),
            profile.reached,
            profile.runs,
            profile.mean_explored(),
            profile.mean_cost(),
            profile.elapsed
        );
    }
    Ok(())
}
