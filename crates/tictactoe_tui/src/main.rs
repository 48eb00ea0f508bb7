//! Tic-tac-toe - unified CLI
//!
//! Runs the terminal UI or plays a scripted game headlessly.

#![warn(missing_docs)]

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io::{self, Stdout};
use std::sync::Arc;
use tictactoe_engine::{BoardSize, Position};
use tictactoe_tui::{App, Cli, Command, TuiConfig, play::run_play, ui};
use tracing::{debug, info, instrument};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = TuiConfig::load(&cli.config)?;

    match cli.command {
        Command::Tui { size } => run_tui(config, size),
        Command::Play { size, moves } => run_scripted(config, size, moves),
    }
}

fn env_filter(config: &TuiConfig) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(config.log_filter()))
}

/// Plays a scripted game, printing to stdout and logging to stderr.
fn run_scripted(config: TuiConfig, size: Option<i64>, moves: Vec<Position>) -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(env_filter(&config))
        .with_writer(io::stderr)
        .init();

    let size = BoardSize::new(size.unwrap_or(*config.default_size()))?;
    info!(%size, moves = moves.len(), "Playing scripted game");

    run_play(size, &moves, &mut io::stdout().lock())?;
    Ok(())
}

/// Runs the terminal UI.
fn run_tui(config: TuiConfig, size: Option<i64>) -> Result<()> {
    // Log to a file so tracing output never draws over the UI
    let log_file = std::fs::File::create(config.log_file()).with_context(|| {
        format!("Failed to create log file {}", config.log_file().display())
    })?;
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter(&config))
        .with_writer(Arc::new(log_file))
        .with_ansi(false)
        .try_init(); // Don't panic if already initialized

    info!("Starting tic-tac-toe TUI");

    let config = match size {
        Some(size) => config.with_default_size(size),
        None => config,
    };
    let mut app = App::new(config.default_size().to_string());
    if size.is_some() {
        app.confirm_size();
    }

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = event_loop(&mut terminal, &mut app);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    info!("TUI exited");
    result
}

/// Draws, then blocks for the next key, until the user quits.
#[instrument(skip_all)]
fn event_loop(terminal: &mut Terminal<CrosstermBackend<Stdout>>, app: &mut App) -> Result<()> {
    while !app.should_quit() {
        terminal.draw(|frame| ui::draw(frame, app))?;

        if let Event::Key(key) = event::read()?
            && key.kind == KeyEventKind::Press
        {
            app.handle_key(key.code);
        } else {
            debug!("Non-key event");
        }
    }
    Ok(())
}
