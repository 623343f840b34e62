use std::io::{self, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use tracing::info;
use tracing_subscriber::EnvFilter;

use connect_four::config::AppConfig;
use connect_four::console::{configure, LineInput, Match, MatchSetup};
use connect_four::ui::App;

/// Play Connect Four against another person at the same terminal.
#[derive(Parser)]
#[command(name = "connect-four", about = "Two-player Connect Four for the terminal")]
struct Cli {
    /// Path to TOML configuration file
    #[arg(long, default_value = "connect_four.toml")]
    config: PathBuf,

    /// First player's name
    #[arg(long)]
    first: Option<String>,

    /// Second player's name
    #[arg(long)]
    second: Option<String>,

    /// Board size as ROWSxCOLUMNS, each from 5 to 9
    #[arg(long)]
    board: Option<String>,

    /// Number of games in the match
    #[arg(long)]
    games: Option<u32>,

    /// Play in the full-screen terminal UI instead of the line console
    #[arg(long)]
    tui: bool,

    /// Print an example configuration file and exit
    #[arg(long)]
    print_config: bool,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    if cli.print_config {
        print!("{}", AppConfig::example_toml());
        return Ok(());
    }

    // Load configuration
    let mut config = AppConfig::load_or_default(&cli.config)
        .with_context(|| format!("loading config from {}", cli.config.display()))?;

    // Apply CLI overrides
    if let Some(name) = cli.first {
        config.first_player = Some(name);
    }
    if let Some(name) = cli.second {
        config.second_player = Some(name);
    }
    if let Some(board) = cli.board {
        config.board = Some(board);
    }
    if let Some(games) = cli.games {
        config.games = Some(games);
    }
    config.validate().context("invalid settings")?;

    let mut input = LineInput::new(io::stdin().lock());
    let mut stdout = io::stdout().lock();
    let setup = configure(&config, &mut input, &mut stdout).context("setting up the match")?;

    if cli.tui {
        drop(stdout);
        return run_tui(setup);
    }

    let report = Match::new(setup)
        .play(&mut input, &mut stdout)
        .context("playing the match")?;
    stdout.flush()?;
    info!(sessions = report.outcomes.len(), "match over");
    Ok(())
}

fn run_tui(setup: MatchSetup) -> Result<()> {
    // Setup terminal
    enable_raw_mode().context("enabling raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen).context("entering alternate screen")?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend).context("creating terminal")?;

    let mut app = App::new(setup.roster, setup.dimensions, setup.games);
    let res = app.run(&mut terminal);

    // Restore terminal — always runs, even on error
    let _ = disable_raw_mode();
    let _ = execute!(terminal.backend_mut(), LeaveAlternateScreen);
    let _ = terminal.show_cursor();

    let roster = app.roster();
    println!(
        "{}: {} {}: {}",
        roster.first().name,
        roster.first().wins,
        roster.second().name,
        roster.second().wins
    );
    res.context("running terminal UI")
}
