//! Portfolio module.
//!
//! Provides share holdings and their valuation against a market.

mod holdings;
mod valuation;

pub use holdings::{Holding, Portfolio, SellOutcome};
pub use valuation::{HoldingValuation, Valuation};
