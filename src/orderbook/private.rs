use super::order::{Order, OrderKind};
use crate::OrderBook;
use pricelevel::Side;
use std::cmp::Ordering;
use tracing::trace;

/// Orders two resting orders of `side` by matching priority: better price first,
/// then earlier timestamp.
pub(super) fn priority_cmp(side: Side, a: &Order, b: &Order) -> Ordering {
    let by_price = match side {
        Side::Buy => b.price.cmp(&a.price),
        Side::Sell => a.price.cmp(&b.price),
    };
    by_price.then(a.timestamp.cmp(&b.timestamp))
}

/// Index of the contra order `incoming` should trade with next, if any.
pub(super) fn best_candidate(
    contra: &[Order],
    incoming: &Order,
    price_filtered: bool,
) -> Option<usize> {
    let contra_side = incoming.side.opposite();
    contra
        .iter()
        .enumerate()
        .filter(|(_, resting)| !price_filtered || incoming.accepts_price(resting.price))
        .min_by(|(_, a), (_, b)| priority_cmp(contra_side, a, b))
        .map(|(index, _)| index)
}

/// An upper bound on the value `incoming` can trade against `contra`, or
/// `None` when no bound fits in a `u64`.
///
/// Both the value of every eligible order and the incoming quantity at the
/// worst eligible price bound the traded value.
pub(super) fn max_executable_value(
    contra: &[Order],
    incoming: &Order,
    price_filtered: bool,
) -> Option<u64> {
    let eligible = contra
        .iter()
        .filter(|resting| !price_filtered || incoming.accepts_price(resting.price));
    let by_book = eligible.clone().try_fold(0u64, |total, resting| {
        let quantity = resting.quantity.min(incoming.quantity);
        total.checked_add(resting.price.checked_mul(quantity)?)
    });
    let by_price = eligible
        .map(|resting| resting.price)
        .max()
        .map_or(Some(0), |price| price.checked_mul(incoming.quantity));
    by_book.or(by_price)
}

impl OrderBook {
    /// Advance the priority clock and return the new timestamp
    pub(super) fn next_timestamp(&mut self) -> u64 {
        self.clock += 1;
        self.clock
    }

    pub(super) fn side_mut(&mut self, side: Side) -> &mut Vec<Order> {
        match side {
            Side::Buy => &mut self.bids,
            Side::Sell => &mut self.asks,
        }
    }

    /// Places a resting order in the book and records its location.
    ///
    /// The order is stamped with a fresh timestamp and, for icebergs, its
    /// first clip is revealed from the remaining quantity.
    pub(super) fn place_order_in_book(&mut self, mut order: Order) {
        debug_assert!(order.quantity > 0, "resting order must have open quantity");
        debug_assert!(
            !self.order_locations.contains_key(&order.id),
            "order id already resting"
        );

        order.timestamp = self.next_timestamp();
        if let OrderKind::Iceberg {
            display_size,
            remaining_display,
        } = &mut order.kind
        {
            *remaining_display = (*display_size).min(order.quantity);
        }

        trace!(
            "Order book {}: Resting {} order {} {} {}@{} at t={}",
            self.symbol, order.kind, order.id, order.side, order.quantity, order.price, order.timestamp
        );
        self.order_locations.insert(order.id.clone(), order.side);
        let side = order.side;
        self.side_mut(side).push(order);
    }

    /// Removes a resting order by ID, returning it.
    pub(super) fn remove_order(&mut self, order_id: &str) -> Option<Order> {
        let side = self.order_locations.remove(order_id)?;
        let orders = self.side_mut(side);
        let index = orders.iter().position(|order| order.id == order_id)?;
        Some(orders.remove(index))
    }
}
