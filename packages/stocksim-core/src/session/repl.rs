//! Numbered text menu over a reader and a writer.

use super::{MenuChoice, Session};
use crate::portfolio::SellOutcome;
use crate::{Error, Result};
use rand::Rng;
use std::io::{BufRead, Write};

const TITLE: &str = "--- Stock Market Simulator ---";

/// Run the menu loop until the user exits or input ends.
///
/// Input problems are reported on `output` and the menu is shown again;
/// only IO failures end the loop with an error.
pub fn run<R, I, W>(session: &mut Session<R>, input: &mut I, output: &mut W) -> Result<()>
where
    R: Rng,
    I: BufRead,
    W: Write,
{
    tracing::info!("session started");

    loop {
        print_menu(output)?;
        let Some(line) = prompt(input, output, "Choose an option: ")? else {
            break;
        };

        let Some(choice) = MenuChoice::from_input(&line) else {
            writeln!(output, "Invalid option. Try again.")?;
            continue;
        };

        let keep_going = match choice {
            MenuChoice::ViewStocks => view_stocks(session, output).map(|_| true)?,
            MenuChoice::BuyStocks => buy(session, input, output)?,
            MenuChoice::SellStocks => sell(session, input, output)?,
            MenuChoice::ViewPortfolio => view_portfolio(session, output).map(|_| true)?,
            MenuChoice::UpdatePrices => {
                session.update_market();
                writeln!(output, "Market prices updated!")?;
                true
            }
            MenuChoice::Exit => {
                writeln!(output, "Exiting simulator.")?;
                false
            }
        };

        if !keep_going {
            break;
        }
    }

    output.flush()?;
    tracing::info!("session ended");
    Ok(())
}

fn print_menu<W: Write>(output: &mut W) -> Result<()> {
    writeln!(output)?;
    writeln!(output, "{}", TITLE)?;
    for choice in MenuChoice::ALL {
        writeln!(output, "{}. {}", choice.number(), choice.label())?;
    }
    Ok(())
}

/// Print a prompt and read one line. `None` at end of input.
fn prompt<I: BufRead, W: Write>(input: &mut I, output: &mut W, text: &str) -> Result<Option<String>> {
    write!(output, "{}", text)?;
    output.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        tracing::debug!("end of input");
        return Ok(None);
    }
    Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
}

/// Read a quantity. Unparsable text counts as an invalid quantity.
fn prompt_quantity<I: BufRead, W: Write>(
    input: &mut I,
    output: &mut W,
    text: &str,
) -> Result<Option<Option<i64>>> {
    Ok(prompt(input, output, text)?.map(|line| line.trim().parse().ok()))
}

fn view_stocks<R: Rng, W: Write>(session: &Session<R>, output: &mut W) -> Result<()> {
    writeln!(output)?;
    writeln!(output, "Available Stocks:")?;
    for stock in session.market().stocks() {
        writeln!(output, "{} : ${:.2}", stock.symbol(), stock.price())?;
    }
    Ok(())
}

fn buy<R: Rng, I: BufRead, W: Write>(
    session: &mut Session<R>,
    input: &mut I,
    output: &mut W,
) -> Result<bool> {
    let Some(raw) = prompt(input, output, "Enter stock symbol to buy: ")? else {
        return Ok(false);
    };
    let symbol = match session.check_buy_symbol(&raw) {
        Ok(symbol) => symbol,
        Err(e) => return report(output, e),
    };

    let Some(quantity) = prompt_quantity(input, output, "Enter quantity to buy: ")? else {
        return Ok(false);
    };
    let Some(quantity) = quantity else {
        writeln!(output, "Invalid quantity.")?;
        return Ok(true);
    };

    match session.buy(&symbol, quantity) {
        Ok(_) => {
            writeln!(output, "Bought {} shares of {}", quantity, symbol)?;
            Ok(true)
        }
        Err(e) => report(output, e),
    }
}

fn sell<R: Rng, I: BufRead, W: Write>(
    session: &mut Session<R>,
    input: &mut I,
    output: &mut W,
) -> Result<bool> {
    let Some(raw) = prompt(input, output, "Enter stock symbol to sell: ")? else {
        return Ok(false);
    };
    let symbol = match session.check_sell_symbol(&raw) {
        Ok(symbol) => symbol,
        Err(e) => return report(output, e),
    };

    let Some(quantity) = prompt_quantity(input, output, "Enter quantity to sell: ")? else {
        return Ok(false);
    };
    let Some(quantity) = quantity else {
        writeln!(output, "Invalid quantity.")?;
        return Ok(true);
    };

    match session.sell(&symbol, quantity) {
        Ok(outcome) => {
            if let SellOutcome::Liquidated { sold } = outcome {
                tracing::debug!(%symbol, requested = quantity, sold, "sell request liquidated holding");
            }
            writeln!(output, "Sold {} shares of {}", quantity, symbol)?;
            Ok(true)
        }
        Err(e) => report(output, e),
    }
}

fn view_portfolio<R: Rng, W: Write>(session: &Session<R>, output: &mut W) -> Result<()> {
    writeln!(output)?;
    writeln!(output, "Your Portfolio:")?;

    let valuation = session.valuation();
    if valuation.is_empty() {
        writeln!(output, "Your portfolio is empty.")?;
        return Ok(());
    }

    for line in &valuation.holdings {
        writeln!(
            output,
            "{}: {} shares (Value: ${:.2})",
            line.symbol, line.quantity, line.value
        )?;
    }
    writeln!(output, "Total Portfolio Value: ${:.2}", valuation.total)?;
    Ok(())
}

/// Print the message for a recoverable trade error; propagate IO errors.
fn report<W: Write>(output: &mut W, error: Error) -> Result<bool> {
    let message = match error {
        Error::StockNotFound(_) => "Stock not found!",
        Error::NotHeld(_) => "You don't own any shares of this stock.",
        Error::InvalidQuantity(_) => "Invalid quantity.",
        other => return Err(other),
    };
    writeln!(output, "{}", message)?;
    Ok(true)
}
