//! Simulated market module.
//!
//! Owns the listed stocks and moves their prices with an injected RNG.

mod pricing;

pub use pricing::{apply_change, draw_change_percent};

use crate::config::{SimConfig, DEFAULT_MAX_CHANGE_PERCENT};
use crate::types::Stock;
use crate::Result;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// RNG used by the simulator binary.
pub type SimRng = StdRng;

/// Stocks listed when no config is given, in display order.
pub const STARTER_STOCKS: [(&str, f64); 4] = [
    ("AAPL", 150.0),
    ("GOOG", 2800.0),
    ("TSLA", 700.0),
    ("AMZN", 3300.0),
];

/// A fixed set of stocks whose prices drift on each update.
#[derive(Debug)]
pub struct Market<R = SimRng> {
    /// Listed stocks in insertion order
    stocks: Vec<Stock>,
    /// Source of price moves
    rng: R,
    /// Bound of the uniform percentage move
    max_change_percent: f64,
}

impl<R: Rng> Market<R> {
    /// Create a market listing the starter stocks.
    pub fn new(rng: R) -> Self {
        let stocks = STARTER_STOCKS
            .iter()
            .map(|(symbol, price)| Stock::new(symbol, *price))
            .collect();

        Self {
            stocks,
            rng,
            max_change_percent: DEFAULT_MAX_CHANGE_PERCENT,
        }
    }

    /// Create a market from a validated config.
    ///
    /// The config seed is ignored here; the caller decides how `rng` is built.
    pub fn with_config(config: &SimConfig, rng: R) -> Result<Self> {
        config.validate()?;

        let stocks = config
            .stocks
            .iter()
            .map(|seed| Stock::new(&seed.symbol, seed.price))
            .collect();

        Ok(Self {
            stocks,
            rng,
            max_change_percent: config.max_change_percent,
        })
    }

    /// Move every price by an independent random percentage.
    pub fn update_prices(&mut self) {
        for stock in &mut self.stocks {
            let change = draw_change_percent(&mut self.rng, self.max_change_percent);
            let old = stock.price();
            let new = apply_change(old, change);
            stock.set_price(new);
            tracing::debug!(symbol = stock.symbol(), old, new, change, "price moved");
        }
    }

    /// Exact, case-sensitive lookup. Callers normalize the symbol first.
    pub fn get_stock(&self, symbol: &str) -> Option<&Stock> {
        self.stocks.iter().find(|s| s.symbol() == symbol)
    }

    /// Current price of a listed stock.
    pub fn price_of(&self, symbol: &str) -> Option<f64> {
        self.get_stock(symbol).map(Stock::price)
    }

    /// All listed stocks in insertion order.
    pub fn stocks(&self) -> &[Stock] {
        &self.stocks
    }
}

impl Market<SimRng> {
    /// Starter market with a deterministic RNG.
    pub fn seeded(seed: u64) -> Self {
        Self::new(SimRng::seed_from_u64(seed))
    }

    /// Starter market seeded from OS entropy.
    pub fn from_entropy() -> Self {
        Self::new(SimRng::from_entropy())
    }

    /// Build from config, seeding from `config.seed` or entropy.
    pub fn from_config(config: &SimConfig) -> Result<Self> {
        let rng = match config.seed {
            Some(seed) => SimRng::seed_from_u64(seed),
            None => SimRng::from_entropy(),
        };
        Self::with_config(config, rng)
    }
}
