//! Main menu entries.

/// A numbered main menu entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    ViewStocks,
    BuyStocks,
    SellStocks,
    ViewPortfolio,
    UpdatePrices,
    Exit,
}

impl MenuChoice {
    /// All entries in menu order.
    pub const ALL: [MenuChoice; 6] = [
        MenuChoice::ViewStocks,
        MenuChoice::BuyStocks,
        MenuChoice::SellStocks,
        MenuChoice::ViewPortfolio,
        MenuChoice::UpdatePrices,
        MenuChoice::Exit,
    ];

    /// Parse a line of user input. Anything but a listed number is `None`.
    pub fn from_input(line: &str) -> Option<Self> {
        let number: i64 = line.trim().parse().ok()?;
        Self::from_number(number)
    }

    pub fn from_number(number: i64) -> Option<Self> {
        match number {
            1 => Some(MenuChoice::ViewStocks),
            2 => Some(MenuChoice::BuyStocks),
            3 => Some(MenuChoice::SellStocks),
            4 => Some(MenuChoice::ViewPortfolio),
            5 => Some(MenuChoice::UpdatePrices),
            6 => Some(MenuChoice::Exit),
            _ => None,
        }
    }

    pub fn number(self) -> u8 {
        match self {
            MenuChoice::ViewStocks => 1,
            MenuChoice::BuyStocks => 2,
            MenuChoice::SellStocks => 3,
            MenuChoice::ViewPortfolio => 4,
            MenuChoice::UpdatePrices => 5,
            MenuChoice::Exit => 6,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            MenuChoice::ViewStocks => "View Stocks",
            MenuChoice::BuyStocks => "Buy Stocks",
            MenuChoice::SellStocks => "Sell Stocks",
            MenuChoice::ViewPortfolio => "View Portfolio",
            MenuChoice::UpdatePrices => "Update Market Prices",
            MenuChoice::Exit => "Exit",
        }
    }
}
