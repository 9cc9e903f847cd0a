use std::io;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};

use connect4::config::AppConfig;
use connect4::game::{Connect4, GameStatus};
use connect4::logging::init_logging;
use connect4::ui::{plain, App};

/// Play Connect Four in the terminal.
#[derive(Parser)]
#[command(name = "connect4", about = "Two-player Connect Four")]
struct Cli {
    /// Path to TOML configuration file
    #[arg(long, default_value = "connect4.toml")]
    config: PathBuf,

    /// Read moves line by line from stdin instead of starting the TUI
    #[arg(long)]
    plain: bool,

    /// Override the configured log filter
    #[arg(long)]
    log: Option<String>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = AppConfig::load_or_default(&cli.config)
        .with_context(|| format!("loading config from {}", cli.config.display()))?;
    init_logging(cli.log.as_deref().unwrap_or(&config.log.filter));

    if cli.plain {
        run_plain(&config)
    } else {
        run_tui(&config).context("running terminal UI")
    }
}

fn run_plain(config: &AppConfig) -> Result<()> {
    let stdout = io::stdout();
    let mut game = Connect4::with_renderer(stdout.lock(), config.display.renderer());
    let status = plain::run(io::stdin().lock(), &mut game).context("reading moves")?;

    if status == GameStatus::InProgress {
        tracing::info!(discs = game.number_of_discs(), "game abandoned");
    }
    Ok(())
}

fn run_tui(config: &AppConfig) -> io::Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new(config);
    let res = app.run(&mut terminal);

    // Restore terminal — always runs, even on error
    let _ = disable_raw_mode();
    let _ = execute!(terminal.backend_mut(), LeaveAlternateScreen);
    let _ = terminal.show_cursor();

    res
}
