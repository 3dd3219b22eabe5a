//! # Single-Instrument Order Matching Engine
//!
//! An order book for one instrument that keeps two collections of resting
//! orders (bids and asks) and matches incoming orders against them under
//! price-time priority.
//!
//! ## Key Features
//!
//! - **Five Order Types**: limit (LO), market (MO), immediate-or-cancel (IOC),
//!   fill-or-kill (FOK) and iceberg (ICE). Each type maps to a fixed
//!   [`ExecutionPolicy`] consumed by a single generic matching loop.
//!
//! - **Price-Time Priority**: the best price always trades first; equal prices
//!   trade in timestamp order. Trades execute at the resting order's price, so
//!   any price improvement goes to the incoming order.
//!
//! - **Atomic Fill-or-Kill**: a fill-or-kill order is matched against a working
//!   copy of the contra side. The copy replaces the live side only when the order
//!   fills completely; otherwise the book is left exactly as it was and the
//!   executed value is 0.
//!
//! - **Iceberg Refresh**: an iceberg exposes one clip at a time. When a clip is
//!   exhausted and hidden quantity remains, a new clip is revealed and the order
//!   moves to the back of its price level.
//!
//! - **Book Maintenance**: cancel and amend by order id, with amend keeping time
//!   priority only for a pure quantity decrease.
//!
//! - **Snapshots**: a read-only view of both sides in matching priority, with JSON
//!   export.
//!
//! ## Processing Model
//!
//! Every operation takes `&mut OrderBook` and runs to completion before the next
//! one starts. There is no locking and no background work.
//!
//! ## Example
//!
//! ```
//! use matching_book::{Order, OrderBook};
//! use pricelevel::Side;
//!
//! let mut book = OrderBook::new("XYZ");
//! book.match_order(Order::limit("S1", Side::Sell, 100, 50)).unwrap();
//!
//! let result = book.match_order(Order::limit("B1", Side::Buy, 100, 30)).unwrap();
//! assert_eq!(result.executed_value, 3000);
//! assert_eq!(book.get_order("S1").map(|order| order.quantity), Some(20));
//! ```
//!
//! ## Command Front End
//!
//! The [`command`] module parses line commands (`SUB`, `CXL`, `CRP`, `END`) and
//! renders results; the `matching-book` binary runs it over stdin and stdout.

pub mod command;
pub mod orderbook;

mod utils;

pub use orderbook::{
    DisplayLine, ExecutionPolicy, Fill, MatchResult, Order, OrderBook, OrderBookError,
    OrderBookSnapshot, OrderKind, OrderUpdate,
};
pub use utils::current_time_millis;
