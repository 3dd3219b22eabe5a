//! OrderBook implementation for resting orders and price-time order matching.

pub mod book;
mod error;
mod modifications;
mod operations;
mod order;
mod private;
mod snapshot;

pub mod matching;

pub use book::OrderBook;
pub use error::OrderBookError;
pub use matching::{Fill, MatchResult};
pub use order::{ExecutionPolicy, Order, OrderKind, OrderUpdate};
pub use snapshot::{DisplayLine, OrderBookSnapshot};
