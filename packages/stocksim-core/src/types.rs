//! Core data types for the simulator.

/// A listed stock: immutable symbol, mutable price.
#[derive(Debug, Clone, PartialEq)]
pub struct Stock {
    symbol: String,
    price: f64,
}

impl Stock {
    /// Create a new stock. The symbol is normalized to uppercase.
    pub fn new(symbol: &str, price: f64) -> Self {
        Self {
            symbol: normalize_symbol(symbol),
            price,
        }
    }

    /// Ticker symbol (uppercase).
    pub fn symbol(&self) -> &str {
        &self.symbol
    }

    /// Current price per share.
    pub fn price(&self) -> f64 {
        self.price
    }

    /// Overwrite the current price. No validation is applied.
    pub fn set_price(&mut self, price: f64) {
        self.price = price;
    }

    /// Value of `quantity` shares at the current price.
    pub fn value_of(&self, quantity: u64) -> f64 {
        self.price * quantity as f64
    }
}

/// Trim and uppercase a user-supplied ticker.
pub fn normalize_symbol(symbol: &str) -> String {
    symbol.trim().to_uppercase()
}

/// Round a money amount to the nearest cent.
///
/// Scales by 100, rounds half away from zero, then scales back. This is the
/// only rounding rule used for prices.
pub fn round_to_cents(amount: f64) -> f64 {
    (amount * 100.0).round() / 100.0
}
