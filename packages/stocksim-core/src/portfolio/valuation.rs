//! Portfolio valuation at current market prices.

use super::Portfolio;
use crate::market::Market;
use crate::types::Stock;
use rand::Rng;

/// Value of one holding.
#[derive(Debug, Clone, PartialEq)]
pub struct HoldingValuation {
    pub symbol: String,
    pub quantity: u64,
    /// Current price, `None` when the market does not list the symbol
    pub price: Option<f64>,
    /// `price * quantity`, zero when unpriced
    pub value: f64,
}

/// Per-holding values and their sum.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Valuation {
    pub holdings: Vec<HoldingValuation>,
    pub total: f64,
}

impl Valuation {
    pub fn is_empty(&self) -> bool {
        self.holdings.is_empty()
    }
}

impl Portfolio {
    /// Value every holding against the market's current prices.
    pub fn valuation<R: Rng>(&self, market: &Market<R>) -> Valuation {
        let holdings: Vec<HoldingValuation> = self
            .holdings()
            .iter()
            .map(|holding| {
                let stock = market.get_stock(&holding.symbol);
                if stock.is_none() {
                    tracing::warn!(symbol = %holding.symbol, "holding not listed in market, valued at zero");
                }
                HoldingValuation {
                    symbol: holding.symbol.clone(),
                    quantity: holding.quantity,
                    price: stock.map(Stock::price),
                    value: stock.map(|s| s.value_of(holding.quantity)).unwrap_or(0.0),
                }
            })
            .collect();

        let total = holdings.iter().map(|h| h.value).sum();
        Valuation { holdings, total }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_empty_valuation() {
        let market = Market::seeded(0);
        let valuation = Portfolio::new().valuation(&market);
        assert!(valuation.is_empty());
        assert_eq!(valuation.total, 0.0);
    }

    #[test]
    fn test_single_holding() {
        let market = Market::seeded(0);
        let mut portfolio = Portfolio::new();
        portfolio.buy_stock("AAPL", 10);

        let valuation = portfolio.valuation(&market);
        assert_eq!(valuation.holdings.len(), 1);
        assert_eq!(valuation.holdings[0].price, Some(150.0));
        assert_relative_eq!(valuation.holdings[0].value, 1500.0);
        assert_relative_eq!(valuation.total, 1500.0);
    }

    #[test]
    fn test_total_sums_holdings() {
        let market = Market::seeded(0);
        let mut portfolio = Portfolio::new();
        portfolio.buy_stock("AAPL", 10); // 1500
        portfolio.buy_stock("TSLA", 2); // 1400

        let valuation = portfolio.valuation(&market);
        assert_relative_eq!(valuation.total, 2900.0);
    }

    #[test]
    fn test_tracks_price_updates() {
        let mut market = Market::seeded(11);
        let mut portfolio = Portfolio::new();
        portfolio.buy_stock("GOOG", 3);

        market.update_prices();
        let price = market.price_of("GOOG").unwrap();

        let valuation = portfolio.valuation(&market);
        assert_relative_eq!(valuation.total, price * 3.0);
    }

    #[test]
    fn test_unlisted_holding_valued_at_zero() {
        let market = Market::seeded(0);
        let mut portfolio = Portfolio::new();
        portfolio.buy_stock("ZZZZ", 5);
        portfolio.buy_stock("AAPL", 1);

        let valuation = portfolio.valuation(&market);
        assert_eq!(valuation.holdings[0].price, None);
        assert_eq!(valuation.holdings[0].value, 0.0);
        assert_relative_eq!(valuation.total, 150.0);
    }
}
