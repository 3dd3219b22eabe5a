//! Runs command lines against a book and renders the results

use super::error::CommandError;
use super::parser::Command;
use crate::orderbook::{DisplayLine, OrderBook, OrderBookSnapshot};
use std::io::{self, BufRead, Write};
use tracing::{trace, warn};

/// What a single command produced.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    /// An order was submitted; executed value
    Executed(u64),

    /// A cancel or amend, which print nothing
    Applied,

    /// The session ended with this final book
    Ended(OrderBookSnapshot),
}

/// Drives one order book from textual commands.
#[derive(Debug)]
pub struct Dispatcher {
    book: OrderBook,
}

impl Dispatcher {
    pub fn new(symbol: &str) -> Self {
        Self {
            book: OrderBook::new(symbol),
        }
    }

    /// The book driven by this dispatcher
    pub fn book(&self) -> &OrderBook {
        &self.book
    }

    /// Parse and apply one command line.
    pub fn handle_line(&mut self, line: &str) -> Result<Outcome, CommandError> {
        let command: Command = line.parse()?;
        trace!("Dispatching {:?}", command);
        let outcome = match command {
            Command::Submit(order) => Outcome::Executed(self.book.match_any(order)?),
            Command::Cancel(order_id) => {
                self.book.cancel_order(&order_id);
                Outcome::Applied
            }
            Command::Amend(update) => {
                self.book.amend_order(&update);
                Outcome::Applied
            }
            Command::End => Outcome::Ended(self.book.create_snapshot()),
        };
        Ok(outcome)
    }

    /// Reads commands until `END` or end of input, writing results to `output`.
    ///
    /// Malformed or rejected lines are logged and skipped.
    pub fn run<R: BufRead, W: Write>(&mut self, input: R, mut output: W) -> io::Result<()> {
        for line in input.lines() {
            let line = line?;
            match self.handle_line(&line) {
                Ok(Outcome::Executed(value)) => writeln!(output, "{}", value)?,
                Ok(Outcome::Applied) => {}
                Ok(Outcome::Ended(snapshot)) => {
                    write_book(&mut output, &snapshot)?;
                    break;
                }
                Err(err) => warn!("Skipping command {:?}: {}", line, err),
            }
        }
        output.flush()
    }
}

/// Renders a display line as `qty@price#id`, or `visible(total)@price#id` for icebergs.
pub fn format_line(line: &DisplayLine) -> String {
    match line.visible {
        Some(visible) => format!("{}({})@{}#{}", visible, line.quantity, line.price, line.id),
        None => format!("{}@{}#{}", line.quantity, line.price, line.id),
    }
}

fn format_side(lines: &[DisplayLine]) -> String {
    lines.iter().map(format_line).collect::<Vec<_>>().join(" ")
}

/// Writes the `B ...` and `S ...` book lines.
pub fn write_book<W: Write>(output: &mut W, snapshot: &OrderBookSnapshot) -> io::Result<()> {
    writeln!(output, "B {}", format_side(&snapshot.bids))?;
    writeln!(output, "S {}", format_side(&snapshot.asks))
}
