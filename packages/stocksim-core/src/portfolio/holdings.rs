//! Share holdings keyed by symbol.

/// Shares held of one symbol. Quantity is always positive.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Holding {
    /// Stock ticker symbol
    pub symbol: String,
    /// Number of shares held
    pub quantity: u64,
}

impl Holding {
    pub fn new(symbol: &str, quantity: u64) -> Self {
        Self {
            symbol: symbol.to_string(),
            quantity,
        }
    }
}

/// Result of a sell request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SellOutcome {
    /// Symbol was not held; nothing changed.
    NotHeld,
    /// Request met or exceeded the holding; the whole holding was removed.
    Liquidated { sold: u64 },
    /// Part of the holding was sold.
    Reduced { sold: u64, remaining: u64 },
}

impl SellOutcome {
    /// Shares actually removed from the portfolio.
    pub fn sold(&self) -> u64 {
        match self {
            SellOutcome::NotHeld => 0,
            SellOutcome::Liquidated { sold } | SellOutcome::Reduced { sold, .. } => *sold,
        }
    }
}

/// Symbol to quantity holdings, kept in purchase order.
///
/// Symbols are stored as given; the caller normalizes them. No market or
/// cash checks happen here.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Portfolio {
    holdings: Vec<Holding>,
}

impl Portfolio {
    /// Create an empty portfolio.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add shares, creating the holding if needed.
    ///
    /// Returns the quantity now held. A zero quantity changes nothing.
    pub fn buy_stock(&mut self, symbol: &str, quantity: u64) -> u64 {
        if quantity == 0 {
            return self.quantity_of(symbol);
        }

        if let Some(holding) = self.holdings.iter_mut().find(|h| h.symbol == symbol) {
            holding.quantity = holding.quantity.saturating_add(quantity);
            holding.quantity
        } else {
            self.holdings.push(Holding::new(symbol, quantity));
            quantity
        }
    }

    /// Remove shares.
    ///
    /// Selling an unheld symbol is a no-op. Selling at least the held
    /// quantity removes the holding instead of failing.
    pub fn sell_stock(&mut self, symbol: &str, quantity: u64) -> SellOutcome {
        let Some(idx) = self.holdings.iter().position(|h| h.symbol == symbol) else {
            return SellOutcome::NotHeld;
        };

        let held = self.holdings[idx].quantity;
        if quantity >= held {
            self.holdings.remove(idx);
            SellOutcome::Liquidated { sold: held }
        } else {
            let remaining = held - quantity;
            self.holdings[idx].quantity = remaining;
            SellOutcome::Reduced {
                sold: quantity,
                remaining,
            }
        }
    }

    /// All holdings in purchase order.
    pub fn holdings(&self) -> &[Holding] {
        &self.holdings
    }

    /// Shares held of `symbol` (zero when absent).
    pub fn quantity_of(&self, symbol: &str) -> u64 {
        self.holdings
            .iter()
            .find(|h| h.symbol == symbol)
            .map(|h| h.quantity)
            .unwrap_or(0)
    }

    pub fn holds(&self, symbol: &str) -> bool {
        self.holdings.iter().any(|h| h.symbol == symbol)
    }

    pub fn is_empty(&self) -> bool {
        self.holdings.is_empty()
    }
}
