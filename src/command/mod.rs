//! Textual command front end: parses command lines, applies them to an
//! [`OrderBook`](crate::OrderBook) and renders the results.

mod dispatcher;
mod error;
mod parser;

pub use dispatcher::{Dispatcher, Outcome, format_line, write_book};
pub use error::CommandError;
pub use parser::Command;
