use anyhow::{Context, anyhow};
use terramaze::app::{App, AppConfig};
use tracing::Level;

const LOG_DIR: &str = ".";
const LOG_FILE: &str = "terramaze.log";

fn main() -> anyhow::Result<()> {
    let config = AppConfig::from_args(std::env::args().skip(1))
        .map_err(|e| anyhow!("{}\n{}", e, AppConfig::USAGE))?;

    // The terminal belongs to the UI, so logs go to a file
    let file_appender = tracing_appender::rolling::never(LOG_DIR, LOG_FILE);
    let (writer, _guard) = tracing_appender::non_blocking(file_appender);
    tracing_subscriber::fmt()
        .with_writer(writer)
        .with_ansi(false)
        .with_max_level(Level::DEBUG)
        .init();

    tracing::info!("Starting with {:?}", config);
    let mut app = App::new(&config).context("Cannot build maze")?;

    let mut stdout = std::io::stdout();
    App::setup_terminal(&mut stdout)?;
    let result = app.run();
    App::restore_terminal(&mut stdout)?;
    result?;
    Ok(())
}
