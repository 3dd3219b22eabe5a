//! Contains the core matching engine logic for the order book.

use super::order::{Order, OrderKind};
use super::private::{best_candidate, max_executable_value};
use crate::{OrderBook, OrderBookError};
use pricelevel::Side;
use serde::{Deserialize, Serialize};
use tracing::{debug, trace};
use uuid::Uuid;

/// A single execution between the incoming order and one resting order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Fill {
    /// Unique transaction identifier
    pub transaction_id: Uuid,

    /// The resting order that provided liquidity
    pub maker_order_id: String,

    /// The incoming order
    pub taker_order_id: String,

    /// Side of the incoming order
    pub taker_side: Side,

    /// Execution price, always the resting order's price
    pub price: u64,

    /// Executed quantity
    pub quantity: u64,
}

impl Fill {
    /// Price times quantity, `None` on overflow
    pub fn value(&self) -> Option<u64> {
        self.price.checked_mul(self.quantity)
    }
}

/// Outcome of submitting one order to the book.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchResult {
    /// The incoming order
    pub order_id: String,

    /// Executions in the order they happened
    pub fills: Vec<Fill>,

    /// Sum of price times quantity over all fills
    pub executed_value: u64,

    /// Quantity left unfilled
    pub remaining_quantity: u64,

    /// True when nothing remains unfilled
    pub is_complete: bool,

    /// True when the unfilled remainder now rests in the book
    pub resting: bool,
}

impl MatchResult {
    /// Result with no executions
    pub fn new(order_id: &str, quantity: u64) -> Self {
        Self {
            order_id: order_id.to_string(),
            fills: Vec::new(),
            executed_value: 0,
            remaining_quantity: quantity,
            is_complete: quantity == 0,
            resting: false,
        }
    }

    /// Total quantity executed across all fills
    pub fn executed_quantity(&self) -> u64 {
        self.fills.iter().map(|fill| fill.quantity).sum()
    }
}

/// Working copy of the contra side of the book.
///
/// Holds every piece of book state a sweep can touch. Non-atomic orders
/// detach the live side and always commit it back; fill-or-kill orders sweep
/// a deep copy that is only committed when the order fills completely.
#[derive(Debug)]
pub(super) struct ContraSide {
    side: Side,
    orders: Vec<Order>,
    clock: u64,
    transaction_namespace: Uuid,
    transaction_count: u64,
    last_trade_price: Option<u64>,
    filled_order_ids: Vec<String>,
}

impl ContraSide {
    /// Moves the live side out of the book. Must be committed.
    fn detach(book: &mut OrderBook, side: Side) -> Self {
        let orders = std::mem::take(book.side_mut(side));
        Self::with_orders(book, side, orders)
    }

    /// Copies the live side, leaving the book untouched.
    fn copy(book: &OrderBook, side: Side) -> Self {
        let orders = book.orders(side).to_vec();
        Self::with_orders(book, side, orders)
    }

    fn with_orders(book: &OrderBook, side: Side, orders: Vec<Order>) -> Self {
        Self {
            side,
            orders,
            clock: book.clock,
            transaction_namespace: book.transaction_namespace,
            transaction_count: book.transaction_count,
            last_trade_price: book.last_trade_price,
            filled_order_ids: Vec::new(),
        }
    }

    /// Replaces the book's side and counters with this working copy.
    fn commit(self, book: &mut OrderBook) {
        for order_id in &self.filled_order_ids {
            book.order_locations.remove(order_id);
        }
        *book.side_mut(self.side) = self.orders;
        book.clock = self.clock;
        book.transaction_count = self.transaction_count;
        book.last_trade_price = self.last_trade_price;
    }

    fn next_transaction_id(&mut self) -> Uuid {
        self.transaction_count += 1;
        Uuid::new_v5(
            &self.transaction_namespace,
            &self.transaction_count.to_be_bytes(),
        )
    }

    /// Matches `incoming` against this side until it is filled or no
    /// eligible order is left. Returns the executed value and the fills.
    fn sweep(&mut self, incoming: &mut Order, price_filtered: bool) -> (u64, Vec<Fill>) {
        let mut executed_value = 0u64;
        let mut fills = Vec::new();

        while incoming.quantity > 0 {
            let Some(index) = best_candidate(&self.orders, incoming, price_filtered) else {
                break;
            };

            let candidate = &mut self.orders[index];
            let trade_quantity = incoming.quantity.min(candidate.executable_quantity());
            assert!(trade_quantity > 0, "resting order {} exposes no quantity", candidate.id);

            incoming.quantity -= trade_quantity;
            candidate.quantity -= trade_quantity;
            executed_value += trade_quantity * candidate.price;

            if let OrderKind::Iceberg {
                display_size,
                remaining_display,
            } = &mut candidate.kind
            {
                *remaining_display -= trade_quantity;
                if *remaining_display == 0 && candidate.quantity > 0 {
                    // New clip goes to the back of its price level
                    *remaining_display = (*display_size).min(candidate.quantity);
                    self.clock += 1;
                    candidate.timestamp = self.clock;
                    trace!(
                        "Iceberg {} refreshed clip to {} ({} total) at t={}",
                        candidate.id, remaining_display, candidate.quantity, candidate.timestamp
                    );
                }
            }

            let price = candidate.price;
            let maker_order_id = candidate.id.clone();
            let maker_filled = candidate.quantity == 0;
            trace!(
                "Fill {} {} against {}: {}@{}",
                incoming.side, incoming.id, maker_order_id, trade_quantity, price
            );

            if maker_filled {
                self.orders.remove(index);
                self.filled_order_ids.push(maker_order_id.clone());
            }

            self.last_trade_price = Some(price);
            fills.push(Fill {
                transaction_id: self.next_transaction_id(),
                maker_order_id,
                taker_order_id: incoming.id.clone(),
                taker_side: incoming.side,
                price,
                quantity: trade_quantity,
            });
        }

        (executed_value, fills)
    }
}

impl OrderBook {
    /// Matches an incoming order against the book under price-time priority.
    ///
    /// The order type's [`ExecutionPolicy`](super::order::ExecutionPolicy)
    /// decides which resting orders are eligible, whether the remainder rests,
    /// and whether the match is all-or-nothing. Trades always execute at the
    /// resting order's price.
    ///
    /// # Errors
    /// Returns [`OrderBookError::DuplicateOrderId`] if the id already rests,
    /// [`OrderBookError::InvalidDisplaySize`] for an iceberg with a zero clip,
    /// and [`OrderBookError::ValueOverflow`] when the value the order could
    /// trade does not fit in a `u64`. The book is not modified in any case.
    pub fn match_order(&mut self, mut incoming: Order) -> Result<MatchResult, OrderBookError> {
        trace!(
            "Order book {}: Matching {} order {} {} {}@{}",
            self.symbol, incoming.kind, incoming.id, incoming.side, incoming.quantity, incoming.price
        );

        if self.order_locations.contains_key(&incoming.id) {
            return Err(OrderBookError::DuplicateOrderId(incoming.id));
        }
        if let OrderKind::Iceberg { display_size: 0, .. } = incoming.kind {
            return Err(OrderBookError::InvalidDisplaySize {
                order_id: incoming.id,
            });
        }

        let requested = incoming.quantity;
        let mut match_result = MatchResult::new(&incoming.id, requested);
        if requested == 0 {
            return Ok(match_result);
        }

        let policy = incoming.kind.policy();
        let contra_side = incoming.side.opposite();
        let bound = max_executable_value(self.orders(contra_side), &incoming, policy.price_filtered);
        if bound.is_none() {
            return Err(OrderBookError::ValueOverflow {
                order_id: incoming.id,
            });
        }

        let mut contra = if policy.atomic {
            ContraSide::copy(self, contra_side)
        } else {
            ContraSide::detach(self, contra_side)
        };

        let (executed_value, fills) = contra.sweep(&mut incoming, policy.price_filtered);

        if policy.atomic && incoming.quantity > 0 {
            debug!(
                "Order book {}: Killed {} order {}, only {} of {} available",
                self.symbol,
                incoming.kind,
                incoming.id,
                requested - incoming.quantity,
                requested
            );
            return Ok(match_result);
        }

        contra.commit(self);
        if policy.atomic {
            debug!(
                "Order book {}: Committed {} order {} for {}",
                self.symbol, incoming.kind, incoming.id, executed_value
            );
        }

        match_result.fills = fills;
        match_result.executed_value = executed_value;
        match_result.remaining_quantity = incoming.quantity;
        match_result.is_complete = incoming.quantity == 0;

        if policy.can_rest && incoming.quantity > 0 {
            self.place_order_in_book(incoming);
            match_result.resting = true;
        }

        Ok(match_result)
    }

    /// Matches an incoming order and returns only its executed value.
    pub fn match_any(&mut self, incoming: Order) -> Result<u64, OrderBookError> {
        self.match_order(incoming)
            .map(|match_result| match_result.executed_value)
    }
}
