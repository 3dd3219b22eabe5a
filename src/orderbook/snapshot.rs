//! Order book snapshot for market data

use super::order::Order;
use super::private::priority_cmp;
use crate::OrderBook;
use crate::utils::current_time_millis;
use pricelevel::Side;
use serde::{Deserialize, Serialize};
use tracing::trace;

/// One resting order as seen from outside the book.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DisplayLine {
    /// Order identifier
    pub id: String,

    /// Price in ticks
    pub price: u64,

    /// Remaining quantity, hidden iceberg quantity included
    pub quantity: u64,

    /// Current visible clip, iceberg orders only
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub visible: Option<u64>,
}

impl From<&Order> for DisplayLine {
    fn from(order: &Order) -> Self {
        Self {
            id: order.id.clone(),
            price: order.price,
            quantity: order.quantity,
            visible: order.visible_quantity(),
        }
    }
}

/// A snapshot of the order book state at a specific point in time
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderBookSnapshot {
    /// The symbol or identifier for this order book
    pub symbol: String,

    /// Timestamp when the snapshot was created (milliseconds since epoch)
    pub timestamp: u64,

    /// Bids, best price first, then earliest first
    pub bids: Vec<DisplayLine>,

    /// Asks, best price first, then earliest first
    pub asks: Vec<DisplayLine>,
}

fn line_value(line: &DisplayLine) -> u128 {
    u128::from(line.price) * u128::from(line.quantity)
}

impl OrderBookSnapshot {
    /// Get the best bid price and quantity
    pub fn best_bid(&self) -> Option<(u64, u64)> {
        let bid = self.bids.first().map(|line| (line.price, line.quantity));
        trace!("best_bid: {:?}", bid);
        bid
    }

    /// Get the best ask price and quantity
    pub fn best_ask(&self) -> Option<(u64, u64)> {
        let ask = self.asks.first().map(|line| (line.price, line.quantity));
        trace!("best_ask: {:?}", ask);
        ask
    }

    /// Get the mid price (average of best bid and best ask)
    pub fn mid_price(&self) -> Option<f64> {
        match (self.best_bid(), self.best_ask()) {
            (Some((bid_price, _)), Some((ask_price, _))) => {
                Some((bid_price as f64 + ask_price as f64) / 2.0)
            }
            _ => None,
        }
    }

    /// Get the spread (best ask - best bid)
    pub fn spread(&self) -> Option<u64> {
        match (self.best_bid(), self.best_ask()) {
            (Some((bid_price, _)), Some((ask_price, _))) => {
                Some(ask_price.saturating_sub(bid_price))
            }
            _ => None,
        }
    }

    /// Calculate the total volume on the bid side
    pub fn total_bid_volume(&self) -> u128 {
        self.bids.iter().map(|line| u128::from(line.quantity)).sum()
    }

    /// Calculate the total volume on the ask side
    pub fn total_ask_volume(&self) -> u128 {
        self.asks.iter().map(|line| u128::from(line.quantity)).sum()
    }

    /// Calculate the total value on the bid side (price * quantity)
    pub fn total_bid_value(&self) -> u128 {
        self.bids.iter().map(line_value).sum()
    }

    /// Calculate the total value on the ask side (price * quantity)
    pub fn total_ask_value(&self) -> u128 {
        self.asks.iter().map(line_value).sum()
    }

    /// Serialize the snapshot as JSON
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    /// Parse a snapshot previously exported with [`to_json`](Self::to_json)
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}

impl OrderBook {
    /// Create a snapshot of the current order book state, each side in matching priority.
    pub fn create_snapshot(&self) -> OrderBookSnapshot {
        trace!("Order book {}: Creating snapshot", self.symbol);
        OrderBookSnapshot {
            symbol: self.symbol.clone(),
            timestamp: current_time_millis(),
            bids: self.display_lines(Side::Buy),
            asks: self.display_lines(Side::Sell),
        }
    }

    fn display_lines(&self, side: Side) -> Vec<DisplayLine> {
        let mut orders: Vec<&Order> = self.orders(side).iter().collect();
        orders.sort_by(|a, b| priority_cmp(side, a, b));
        orders.into_iter().map(DisplayLine::from).collect()
    }
}
