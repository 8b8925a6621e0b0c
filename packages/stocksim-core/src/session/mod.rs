//! Interactive trading session.
//!
//! Holds the session state and drives it from the numbered text menu.

mod menu;
mod repl;
mod state;

pub use menu::MenuChoice;
pub use repl::run;
pub use state::Session;
