//! Rewind - tic-tac-toe with time travel.

#![warn(missing_docs)]

use anyhow::Result;
use clap::Parser;
use crossterm::event::{self, Event, KeyEventKind};
use ratatui::{Terminal, backend::CrosstermBackend};
use rewind_tui::{App, Cli, Command, TerminalGuard, TuiConfig, init_tracing, report, ui};
use std::io::{self, Stdout};
use std::time::Duration;
use tracing::{error, info, instrument};

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let mut config = TuiConfig::load(cli.config.as_deref())?;
    if let Some(log_file) = cli.log_file {
        config = config.with_log_file(log_file);
    }
    init_tracing(&config)?;

    match cli.command.unwrap_or(Command::Play) {
        Command::Play => run_tui(&config),
        Command::Print { cells, jump, json } => {
            let view = report::script(&cells, jump);
            let output = if json {
                report::render_json(&view)?
            } else {
                report::render_text(&view)
            };
            println!("{}", output);
            Ok(())
        }
    }
}

/// Runs the interactive terminal UI until the user quits.
fn run_tui(config: &TuiConfig) -> Result<()> {
    info!("Starting Rewind TUI");

    let mut guard = TerminalGuard::new(io::stdout());
    guard.enable_raw_mode()?;
    guard.enter_alternate_screen()?;
    let mut terminal = Terminal::new(CrosstermBackend::new(io::stdout()))?;

    let tick = Duration::from_millis(*config.tick_rate_ms());
    let res = run_app(&mut terminal, App::new(), tick);

    drop(terminal);
    guard.restore()?;

    if let Err(err) = &res {
        error!(error = ?err, "Game loop error");
    }
    res
}

#[instrument(skip_all)]
fn run_app(
    terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    mut app: App,
    tick: Duration,
) -> Result<()> {
    while !app.should_quit() {
        terminal.draw(|f| ui::draw(f, &app))?;

        if event::poll(tick)?
            && let Event::Key(key) = event::read()?
            && key.kind == KeyEventKind::Press
        {
            app.handle_key(key.code);
        }
    }

    info!("User quit");
    Ok(())
}
