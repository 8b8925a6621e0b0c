//! Simulation settings.
//!
//! Defaults reproduce the classic four-stock market with a ±5% move per
//! update. A TOML file can override any field:
//!
//! ```toml
//! seed = 7
//! max_change_percent = 2.5
//!
//! [[stocks]]
//! symbol = "AAPL"
//! price = 150.0
//! ```

use crate::market::STARTER_STOCKS;
use crate::types::normalize_symbol;
use crate::{Error, Result};
use serde::Deserialize;
use std::collections::HashSet;
use std::fs;
use std::path::Path;

/// Default bound of the uniform percentage move applied on each update.
pub const DEFAULT_MAX_CHANGE_PERCENT: f64 = 5.0;

/// Exclusive upper bound for `max_change_percent`. Below it a one-cent price
/// still rounds to one cent after the largest drop.
pub const MAX_CHANGE_LIMIT: f64 = 50.0;

/// Smallest starting price a config may list.
pub const MIN_START_PRICE: f64 = 0.01;

/// A stock listed at market construction.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct StockSeed {
    /// Ticker symbol
    pub symbol: String,
    /// Starting price
    pub price: f64,
}

impl StockSeed {
    pub fn new(symbol: &str, price: f64) -> Self {
        Self {
            symbol: symbol.to_string(),
            price,
        }
    }
}

/// Simulator configuration.
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default)]
pub struct SimConfig {
    /// RNG seed for reproducible price updates (entropy when absent)
    pub seed: Option<u64>,
    /// Price moves are drawn from `[-max_change_percent, +max_change_percent)`
    pub max_change_percent: f64,
    /// Stocks listed in the market, in display order
    pub stocks: Vec<StockSeed>,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            seed: None,
            max_change_percent: DEFAULT_MAX_CHANGE_PERCENT,
            stocks: STARTER_STOCKS
                .iter()
                .map(|(symbol, price)| StockSeed::new(symbol, *price))
                .collect(),
        }
    }
}

impl SimConfig {
    /// Parse and validate a config from TOML text.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let mut config: SimConfig = toml::from_str(content)?;
        config.normalize();
        config.validate()?;
        Ok(config)
    }

    /// Load and validate a config file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        let config = Self::from_toml_str(&content)?;
        tracing::debug!(path = %path.display(), stocks = config.stocks.len(), "loaded config");
        Ok(config)
    }

    /// Uppercase and trim every symbol.
    pub fn normalize(&mut self) {
        for seed in &mut self.stocks {
            seed.symbol = normalize_symbol(&seed.symbol);
        }
    }

    /// Check the invariants the market relies on.
    pub fn validate(&self) -> Result<()> {
        if !(self.max_change_percent > 0.0 && self.max_change_percent < MAX_CHANGE_LIMIT) {
            return Err(Error::InvalidConfig(format!(
                "max_change_percent must be in (0, {}), got {}",
                MAX_CHANGE_LIMIT, self.max_change_percent
            )));
        }

        if self.stocks.is_empty() {
            return Err(Error::InvalidConfig(
                "at least one stock must be listed".to_string(),
            ));
        }

        let mut seen = HashSet::new();
        for seed in &self.stocks {
            let symbol = normalize_symbol(&seed.symbol);
            if symbol.is_empty() {
                return Err(Error::InvalidConfig("empty stock symbol".to_string()));
            }
            if !(seed.price.is_finite() && seed.price >= MIN_START_PRICE) {
                return Err(Error::InvalidConfig(format!(
                    "price for {} must be at least {}, got {}",
                    symbol, MIN_START_PRICE, seed.price
                )));
            }
            if !seen.insert(symbol.clone()) {
                return Err(Error::InvalidConfig(format!(
                    "duplicate stock symbol: {}",
                    symbol
                )));
            }
        }

        Ok(())
    }
}
