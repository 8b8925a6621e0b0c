//! Stocksim Core - In-memory stock market simulator.
//!
//! This crate provides everything behind the `stocksim` text menu:
//!
//! - **Market**: A fixed set of synthetic stocks with randomly perturbed prices
//! - **Portfolio**: Share holdings with buy, sell and valuation
//! - **Session**: Validated trade commands over one market and one portfolio
//! - **Repl**: The numbered menu loop over any reader and writer
//!
//! # Example
//!
//! ```rust
//! use stocksim_core::{Market, Session};
//!
//! // Seeded market so price updates are reproducible
//! let mut session = Session::new(Market::seeded(42));
//!
//! session.buy("aapl", 10).unwrap();
//! let valuation = session.valuation();
//! assert_eq!(valuation.total, 1500.0);
//!
//! session.update_market();
//! ```

pub mod config;
pub mod market;
pub mod portfolio;
pub mod session;
pub mod types;

// Re-export commonly used types
pub use config::{SimConfig, StockSeed};
pub use market::{Market, SimRng, STARTER_STOCKS};
pub use portfolio::{Holding, HoldingValuation, Portfolio, SellOutcome, Valuation};
pub use session::{run, MenuChoice, Session};
pub use types::{normalize_symbol, round_to_cents, Stock};

/// Error types for stocksim-core operations.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Config parse error: {0}")]
    ConfigParse(#[from] toml::de::Error),

    #[error("Invalid config: {0}")]
    InvalidConfig(String),

    #[error("Stock not found: {0}")]
    StockNotFound(String),

    #[error("No shares held: {0}")]
    NotHeld(String),

    #[error("Invalid quantity: {0}")]
    InvalidQuantity(i64),
}

/// Result type for stocksim-core operations.
pub type Result<T> = std::result::Result<T, Error>;
