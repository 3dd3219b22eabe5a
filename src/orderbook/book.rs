//! Core OrderBook state for a single instrument

use super::order::Order;
use pricelevel::Side;
use std::collections::HashMap;
use tracing::trace;
use uuid::Uuid;

/// The OrderBook owns every resting order of one instrument, split into bids and asks.
///
/// Neither side is kept sorted. Priority is recomputed from `(price, timestamp)`
/// whenever the book is matched against or exported.
#[derive(Debug)]
pub struct OrderBook {
    /// The symbol or identifier for this order book
    pub(super) symbol: String,

    /// Resting buy orders
    pub(super) bids: Vec<Order>,

    /// Resting sell orders
    pub(super) asks: Vec<Order>,

    /// Map from order ID to the side holding it
    pub(super) order_locations: HashMap<String, Side>,

    /// Logical clock used for priority timestamps
    pub(super) clock: u64,

    /// Namespace for deterministic transaction IDs
    pub(super) transaction_namespace: Uuid,

    /// Number of transactions generated so far
    pub(super) transaction_count: u64,

    /// The last price at which a trade occurred
    pub(super) last_trade_price: Option<u64>,
}

impl OrderBook {
    /// Create a new order book for the given symbol
    pub fn new(symbol: &str) -> Self {
        Self {
            symbol: symbol.to_string(),
            bids: Vec::new(),
            asks: Vec::new(),
            order_locations: HashMap::new(),
            clock: 0,
            transaction_namespace: Uuid::new_v4(),
            transaction_count: 0,
            last_trade_price: None,
        }
    }

    /// Get the symbol of this order book
    pub fn symbol(&self) -> &str {
        &self.symbol
    }

    /// Resting orders on one side, in insertion order
    pub fn orders(&self, side: Side) -> &[Order] {
        match side {
            Side::Buy => &self.bids,
            Side::Sell => &self.asks,
        }
    }

    /// Get the best bid price, if any
    pub fn best_bid(&self) -> Option<u64> {
        self.bids.iter().map(|order| order.price).max()
    }

    /// Get the best ask price, if any
    pub fn best_ask(&self) -> Option<u64> {
        self.asks.iter().map(|order| order.price).min()
    }

    /// Get the mid price (average of best bid and best ask)
    pub fn mid_price(&self) -> Option<f64> {
        match (self.best_bid(), self.best_ask()) {
            (Some(bid), Some(ask)) => Some((bid as f64 + ask as f64) / 2.0),
            _ => None,
        }
    }

    /// Get the spread (best ask - best bid)
    pub fn spread(&self) -> Option<u64> {
        match (self.best_bid(), self.best_ask()) {
            (Some(bid), Some(ask)) => Some(ask.saturating_sub(bid)),
            _ => None,
        }
    }

    /// Get the last trade price, if any
    pub fn last_trade_price(&self) -> Option<u64> {
        self.last_trade_price
    }

    /// Get all orders at a specific price on one side, in time priority
    pub fn get_orders_at_price(&self, price: u64, side: Side) -> Vec<&Order> {
        trace!(
            "Order book {}: Getting orders at price {} for side {:?}",
            self.symbol, price, side
        );
        let mut orders: Vec<&Order> = self
            .orders(side)
            .iter()
            .filter(|order| order.price == price)
            .collect();
        orders.sort_by_key(|order| order.timestamp);
        orders
    }

    /// Get a resting order by ID
    pub fn get_order(&self, order_id: &str) -> Option<&Order> {
        let side = *self.order_locations.get(order_id)?;
        self.orders(side).iter().find(|order| order.id == order_id)
    }

    /// Returns true if an order with this ID is resting
    pub fn contains(&self, order_id: &str) -> bool {
        self.order_locations.contains_key(order_id)
    }

    /// Number of resting orders on both sides
    pub fn order_count(&self) -> usize {
        self.bids.len() + self.asks.len()
    }

    /// Returns true if neither side has resting orders
    pub fn is_empty(&self) -> bool {
        self.bids.is_empty() && self.asks.is_empty()
    }

    /// Total open quantity resting on one side, hidden iceberg quantity included
    pub fn total_quantity(&self, side: Side) -> u64 {
        self.orders(side).iter().map(|order| order.quantity).sum()
    }

    /// Current value of the priority clock
    pub fn current_timestamp(&self) -> u64 {
        self.clock
    }
}
