//! Stocksim CLI - Interactive stock market simulator.
//!
//! Runs the numbered trading menu on stdin/stdout. Logs go to stderr and are
//! controlled with `RUST_LOG`.

use anyhow::{Context, Result};
use clap::Parser;
use std::io;
use std::path::PathBuf;
use stocksim_core::{run, Market, Session, SimConfig};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[derive(Parser)]
#[command(name = "stocksim")]
#[command(about = "Stock market simulator - buy, sell and watch random prices")]
#[command(version)]
struct Cli {
    /// Seed for reproducible price updates
    #[arg(short, long)]
    seed: Option<u64>,

    /// TOML file with simulation settings
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Largest percentage move per price update
    #[arg(short = 'm', long)]
    max_change: Option<f64>,
}

impl Cli {
    /// Merge file settings with command line overrides.
    fn sim_config(&self) -> Result<SimConfig> {
        let mut config = match &self.config {
            Some(path) => SimConfig::load(path)
                .with_context(|| format!("failed to load config {}", path.display()))?,
            None => SimConfig::default(),
        };

        if let Some(seed) = self.seed {
            config.seed = Some(seed);
        }
        if let Some(max_change) = self.max_change {
            config.max_change_percent = max_change;
        }

        config.validate()?;
        Ok(config)
    }
}

fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    let cli = Cli::parse();
    let config = cli.sim_config()?;
    tracing::info!(
        seed = ?config.seed,
        max_change_percent = config.max_change_percent,
        stocks = config.stocks.len(),
        "starting simulator"
    );

    let market = Market::from_config(&config)?;
    let mut session = Session::new(market);

    let stdin = io::stdin();
    let stdout = io::stdout();
    run(&mut session, &mut stdin.lock(), &mut stdout.lock())?;

    Ok(())
}
