//! Convenience submitters for each order type

use super::book::OrderBook;
use super::error::OrderBookError;
use super::matching::MatchResult;
use super::order::Order;
use pricelevel::Side;
use tracing::trace;

impl OrderBook {
    /// Submit a limit order; any remainder rests
    pub fn submit_limit_order(
        &mut self,
        id: &str,
        side: Side,
        price: u64,
        quantity: u64,
    ) -> Result<MatchResult, OrderBookError> {
        trace!("Submitting limit order {} {} {} {}", id, side, price, quantity);
        self.match_order(Order::limit(id, side, price, quantity))
    }

    /// Submit a market order; any remainder is discarded
    pub fn submit_market_order(
        &mut self,
        id: &str,
        side: Side,
        quantity: u64,
    ) -> Result<MatchResult, OrderBookError> {
        trace!("Submitting market order {} {} {}", id, side, quantity);
        self.match_order(Order::market(id, side, quantity))
    }

    /// Submit an immediate-or-cancel order
    pub fn submit_immediate_or_cancel_order(
        &mut self,
        id: &str,
        side: Side,
        price: u64,
        quantity: u64,
    ) -> Result<MatchResult, OrderBookError> {
        trace!("Submitting IOC order {} {} {} {}", id, side, price, quantity);
        self.match_order(Order::immediate_or_cancel(id, side, price, quantity))
    }

    /// Submit a fill-or-kill order
    pub fn submit_fill_or_kill_order(
        &mut self,
        id: &str,
        side: Side,
        price: u64,
        quantity: u64,
    ) -> Result<MatchResult, OrderBookError> {
        trace!("Submitting FOK order {} {} {} {}", id, side, price, quantity);
        self.match_order(Order::fill_or_kill(id, side, price, quantity))
    }

    /// Submit an iceberg order showing `display_size` at a time
    pub fn submit_iceberg_order(
        &mut self,
        id: &str,
        side: Side,
        price: u64,
        quantity: u64,
        display_size: u64,
    ) -> Result<MatchResult, OrderBookError> {
        trace!(
            "Submitting iceberg order {} {} {} {} display {}",
            id, side, price, quantity, display_size
        );
        self.match_order(Order::iceberg(id, side, price, quantity, display_size))
    }
}
