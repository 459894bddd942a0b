use std::io::{self, Write};
use std::path::PathBuf;
use std::sync::Mutex;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use rand::rngs::StdRng;
use rand::SeedableRng;
use ratatui::{backend::CrosstermBackend, Terminal};
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

use term_life::config::{AppConfig, ConfigSource, LogConfig};
use term_life::life::Board;
use term_life::logging::open_log_file;
use term_life::ui::App;

/// Run Conway's Game of Life in the terminal.
#[derive(Parser)]
#[command(name = "term_life", about = "Conway's Game of Life in the terminal")]
struct Cli {
    /// Path to TOML configuration file
    #[arg(long, default_value = "life.toml")]
    config: PathBuf,

    /// Override number of board rows
    #[arg(long)]
    rows: Option<usize>,

    /// Override number of board columns
    #[arg(long)]
    columns: Option<usize>,

    /// Seed for the initial population
    #[arg(long)]
    seed: Option<u64>,

    /// Override milliseconds between generations
    #[arg(long)]
    tick_ms: Option<u64>,

    /// Print generations to stdout instead of running the TUI
    #[arg(long)]
    headless: bool,

    /// Override number of generations printed in headless mode
    #[arg(long)]
    generations: Option<usize>,

    /// Print the default configuration as TOML and exit
    #[arg(long)]
    print_config: bool,
}

fn main() {
    if let Err(err) = run() {
        error!("{err:#}");
        eprintln!("Error: {err:#}");
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    if cli.print_config {
        print!("{}", AppConfig::default_toml());
        return Ok(());
    }

    let (mut config, source) = AppConfig::load_or_default(&cli.config)
        .with_context(|| format!("loading config from {}", cli.config.display()))?;

    // Apply CLI overrides
    if let Some(rows) = cli.rows {
        config.board.rows = rows;
    }
    if let Some(columns) = cli.columns {
        config.board.columns = columns;
    }
    if let Some(seed) = cli.seed {
        config.board.seed = Some(seed);
    }
    if let Some(tick_ms) = cli.tick_ms {
        config.simulation.tick_ms = tick_ms;
    }
    if let Some(generations) = cli.generations {
        config.simulation.generations = generations;
    }
    config.validate().context("invalid command line overrides")?;

    if let Err(err) = init_logging(&config.log) {
        eprintln!(
            "Warning: logging disabled, cannot open log file '{}': {err}",
            config.log.file.display()
        );
    }
    if source == ConfigSource::Defaults {
        warn!(path = %cli.config.display(), "config file not found, using defaults");
    }

    let seed = config.board.seed.unwrap_or_else(rand::random);
    info!(
        seed,
        rows = config.board.rows,
        columns = config.board.columns,
        density = config.board.density,
        "seeding board"
    );
    let mut rng = StdRng::seed_from_u64(seed);
    let board = Board::with_density(
        config.board.rows,
        config.board.columns,
        config.board.density,
        &mut rng,
    );
    let tick = Duration::from_millis(config.simulation.tick_ms);

    if cli.headless {
        run_headless(board, tick, config.simulation.generations)
    } else {
        run_tui(App::new(board, tick))
    }
}

/// Send tracing output to the configured log file. The terminal is owned by
/// the UI, so nothing is logged to stdout or stderr.
fn init_logging(log: &LogConfig) -> io::Result<()> {
    let file = open_log_file(&log.file)?;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&log.level));
    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .finish();
    let _ = tracing::subscriber::set_global_default(subscriber);
    Ok(())
}

/// Print successive generations to stdout, pausing `tick` between them.
fn run_headless(mut board: Board, tick: Duration, generations: usize) -> Result<()> {
    let mut out = io::stdout().lock();

    for generation in 0..generations {
        writeln!(
            out,
            "Generation {}  (population {})",
            generation,
            board.population()
        )?;
        writeln!(out, "{board}")?;
        out.flush()?;

        if generation + 1 < generations {
            std::thread::sleep(tick);
            board.advance();
        }
    }

    info!(generations, "headless run finished");
    Ok(())
}

fn run_tui(mut app: App) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = app.run(&mut terminal);

    // Restore terminal — always runs, even on error
    let _ = disable_raw_mode();
    let _ = execute!(terminal.backend_mut(), LeaveAlternateScreen);
    let _ = terminal.show_cursor();

    res.context("terminal UI failed")
}
