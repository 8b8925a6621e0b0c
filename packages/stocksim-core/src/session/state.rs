//! Trading session state.

use crate::market::{Market, SimRng};
use crate::portfolio::{Portfolio, SellOutcome, Valuation};
use crate::types::normalize_symbol;
use crate::{Error, Result};
use rand::Rng;

/// One market and one portfolio for the lifetime of the process.
///
/// Trade commands validate their input here; [`Portfolio`] itself accepts
/// anything.
#[derive(Debug)]
pub struct Session<R = SimRng> {
    market: Market<R>,
    portfolio: Portfolio,
}

impl<R: Rng> Session<R> {
    /// Start a session with an empty portfolio.
    pub fn new(market: Market<R>) -> Self {
        Self {
            market,
            portfolio: Portfolio::new(),
        }
    }

    pub fn market(&self) -> &Market<R> {
        &self.market
    }

    pub fn portfolio(&self) -> &Portfolio {
        &self.portfolio
    }

    /// Fail with `StockNotFound` unless the market lists `symbol`.
    pub fn check_buy_symbol(&self, symbol: &str) -> Result<String> {
        let symbol = normalize_symbol(symbol);
        if self.market.get_stock(&symbol).is_none() {
            return Err(Error::StockNotFound(symbol));
        }
        Ok(symbol)
    }

    /// Fail with `NotHeld` unless the portfolio holds `symbol`.
    pub fn check_sell_symbol(&self, symbol: &str) -> Result<String> {
        let symbol = normalize_symbol(symbol);
        if !self.portfolio.holds(&symbol) {
            return Err(Error::NotHeld(symbol));
        }
        Ok(symbol)
    }

    /// Buy shares of a listed stock.
    ///
    /// Returns the quantity now held.
    pub fn buy(&mut self, symbol: &str, quantity: i64) -> Result<u64> {
        let symbol = self.check_buy_symbol(symbol)?;
        let quantity = positive_quantity(quantity)?;

        let held = self.portfolio.buy_stock(&symbol, quantity);
        tracing::debug!(%symbol, quantity, held, "bought");
        Ok(held)
    }

    /// Sell shares of a held stock. Overselling liquidates the holding.
    pub fn sell(&mut self, symbol: &str, quantity: i64) -> Result<SellOutcome> {
        let symbol = self.check_sell_symbol(symbol)?;
        let quantity = positive_quantity(quantity)?;

        let outcome = self.portfolio.sell_stock(&symbol, quantity);
        tracing::debug!(%symbol, quantity, ?outcome, "sold");
        Ok(outcome)
    }

    /// Apply one random price move to every stock.
    pub fn update_market(&mut self) {
        self.market.update_prices();
    }

    /// Portfolio value at current prices.
    pub fn valuation(&self) -> Valuation {
        self.portfolio.valuation(&self.market)
    }
}

fn positive_quantity(quantity: i64) -> Result<u64> {
    if quantity <= 0 {
        return Err(Error::InvalidQuantity(quantity));
    }
    Ok(quantity as u64)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn session() -> Session {
        Session::new(Market::seeded(0))
    }

    #[test]
    fn test_buy_listed_stock() {
        let mut session = session();
        assert_eq!(session.buy("AAPL", 10).unwrap(), 10);
        assert_eq!(session.buy("aapl", 5).unwrap(), 15);
        assert_eq!(session.portfolio().quantity_of("AAPL"), 15);
    }

    #[test]
    fn test_buy_unknown_stock() {
        let mut session = session();
        let result = session.buy("MSFT", 10);
        assert!(matches!(result, Err(Error::StockNotFound(ref s)) if s == "MSFT"));
        assert!(session.portfolio().is_empty());
    }

    #[test]
    fn test_buy_invalid_quantity() {
        let mut session = session();
        assert!(matches!(session.buy("AAPL", 0), Err(Error::InvalidQuantity(0))));
        assert!(matches!(session.buy("AAPL", -3), Err(Error::InvalidQuantity(-3))));
        assert!(session.portfolio().is_empty());
    }

    #[test]
    fn test_unknown_symbol_checked_before_quantity() {
        let mut session = session();
        assert!(matches!(session.buy("MSFT", 0), Err(Error::StockNotFound(_))));
    }

    #[test]
    fn test_sell_not_held() {
        let mut session = session();
        let result = session.sell("AAPL", 1);
        assert!(matches!(result, Err(Error::NotHeld(_))));
    }

    #[test]
    fn test_sell_invalid_quantity() {
        let mut session = session();
        session.buy("AAPL", 10).unwrap();
        assert!(matches!(session.sell("AAPL", 0), Err(Error::InvalidQuantity(0))));
        assert_eq!(session.portfolio().quantity_of("AAPL"), 10);
    }

    #[test]
    fn test_buy_then_value() {
        let mut session = session();
        session.buy("AAPL", 10).unwrap();

        let valuation = session.valuation();
        assert_eq!(valuation.holdings.len(), 1);
        assert_eq!(valuation.holdings[0].symbol, "AAPL");
        assert_eq!(valuation.holdings[0].quantity, 10);
        assert_relative_eq!(valuation.total, 1500.0);
    }

    #[test]
    fn test_oversell_empties_portfolio() {
        let mut session = session();
        session.buy("AAPL", 10).unwrap();

        let outcome = session.sell("aapl", 15).unwrap();
        assert_eq!(outcome, SellOutcome::Liquidated { sold: 10 });
        assert!(session.portfolio().is_empty());
        assert!(session.valuation().is_empty());
    }

    #[test]
    fn test_update_market_changes_valuation() {
        let mut session = session();
        session.buy("TSLA", 4).unwrap();
        session.update_market();

        let price = session.market().price_of("TSLA").unwrap();
        assert_relative_eq!(session.valuation().total, price * 4.0);
    }
}
