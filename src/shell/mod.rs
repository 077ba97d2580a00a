//! Interactive shell for shoestock.
//!
//! A numbered menu read from a line-oriented console. The session owns the
//! inventory and dispatches each choice to one operation.

mod console;
mod menu;
mod session;

pub use console::Console;
pub use menu::{MenuChoice, menu_text};
pub use session::Session;
