// services/farm-dash/src/main.rs
//
// Terminal dashboard for simulated macroalgae farms
//
// Run with: cargo run --bin farm-dash -- --seed 42

use std::fs::OpenOptions;
use std::io::stdout;
use std::sync::{Arc, Mutex};
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::{
    event::{self, Event, KeyEventKind},
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
    ExecutableCommand,
};
use ratatui::prelude::*;
use tokio::sync::mpsc;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use farmkit::config::ObservabilityConfig;
use farmkit::profile_image::{ImageStore, SimulatedImageStore};
use farmkit::router::Session;
use farmkit::{DashboardConfig, MockDataGenerator, SystemClock};

mod config;
mod events;
mod mock;
mod state;
mod ui;

use mock::LiveFeed;
use state::{Command, DashboardState};

#[derive(Parser, Debug)]
#[command(name = "farm-dash")]
#[command(about = "Terminal dashboard for monitoring simulated seaweed farms")]
#[command(version = "0.1.0")]
struct Args {
    #[arg(short, long, default_value = "config/farm-dash.yaml")]
    config: String,

    /// Seed for the mock data generator (overrides simulation.seed)
    #[arg(long)]
    seed: Option<u64>,

    /// Refresh interval in milliseconds (overrides ui.refresh_ms)
    #[arg(long, value_parser = clap::value_parser!(u64).range(1..))]
    refresh_ms: Option<u64>,

    /// Print the effective configuration as YAML and exit
    #[arg(long)]
    print_config: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    let mut config = config::load_config(&args.config)?;
    if let Some(seed) = args.seed {
        config.simulation.seed = Some(seed);
    }
    if let Some(refresh_ms) = args.refresh_ms {
        config.ui.refresh_ms = refresh_ms;
    }

    if args.print_config {
        print!("{}", serde_yaml::to_string(&config)?);
        return Ok(());
    }

    init_tracing(&config.observability)?;
    info!(
        "Starting farm-dash (seed: {:?}, refresh: {}ms)",
        config.simulation.seed, config.ui.refresh_ms
    );

    // Setup terminal
    enable_raw_mode()?;
    stdout().execute(EnterAlternateScreen)?;
    let mut terminal = Terminal::new(CrosstermBackend::new(stdout()))?;

    let result = run_app(&mut terminal, &config);

    // Restore terminal
    disable_raw_mode()?;
    stdout().execute(LeaveAlternateScreen)?;

    info!("farm-dash stopped");
    result
}

/// The terminal belongs to the UI, so logs go to a file.
fn init_tracing(observability: &ObservabilityConfig) -> Result<()> {
    let log_file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&observability.log_file)
        .with_context(|| format!("opening log file {}", observability.log_file))?;

    let default_filter = format!(
        "farm_dash={level},farmkit={level}",
        level = observability.log_level
    );

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter.into()),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(Mutex::new(log_file))
                .with_ansi(false),
        )
        .init();

    Ok(())
}

fn run_app<B: Backend>(terminal: &mut Terminal<B>, config: &DashboardConfig) -> Result<()> {
    let generator = MockDataGenerator::from_seed(config.simulation.seed);
    let mut state = DashboardState::new(config, generator);
    let mut feed = LiveFeed::new(config.ui.chart_refresh_ticks);

    let store: Arc<dyn ImageStore> = Arc::new(SimulatedImageStore::new(
        config.simulation.upload_delay(),
        SystemClock,
    ));
    let (tx, mut rx) = mpsc::unbounded_channel();
    events::spawn_login_timer(tx.clone(), config.simulation.login_delay());

    let tick_rate = Duration::from_millis(config.ui.refresh_ms);
    let mut last_tick = Instant::now();

    loop {
        terminal.draw(|frame| ui::draw(frame, &state))?;

        // Handle input
        let timeout = tick_rate.saturating_sub(last_tick.elapsed());
        if event::poll(timeout)? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    match state.handle_key(key) {
                        Command::Quit => return Ok(()),
                        Command::Upload(file) => events::spawn_upload(tx.clone(), store.clone(), file),
                        Command::None => {}
                    }
                }
            }
        }

        // Background results
        while let Ok(event) = rx.try_recv() {
            state.on_event(event);
        }

        if last_tick.elapsed() >= tick_rate {
            if state.router.session() == Session::SignedIn {
                feed.update(&mut state);
            }
            last_tick = Instant::now();
        }
    }
}
