use super::order::{Order, OrderUpdate};
use crate::OrderBook;
use tracing::trace;

impl OrderBook {
    /// Cancel an order by ID.
    ///
    /// Returns the removed order, or `None` if no order with this ID rests.
    /// Cancelling an unknown ID leaves the book untouched.
    pub fn cancel_order(&mut self, order_id: &str) -> Option<Order> {
        let cancelled = self.remove_order(order_id);
        trace!(
            "Order book {}: Cancel {} -> {}",
            self.symbol,
            order_id,
            if cancelled.is_some() { "removed" } else { "not found" }
        );
        cancelled
    }

    /// Update a resting order's quantity and price.
    ///
    /// Iceberg orders cannot be amended and unknown IDs are ignored; both
    /// return `None`. A quantity decrease at an unchanged price keeps time
    /// priority, any other change moves the order to the back of its level.
    /// Amending to zero quantity removes the order. The amended order is
    /// never matched against the contra side.
    pub fn amend_order(&mut self, update: &OrderUpdate) -> Option<&Order> {
        trace!("Order book {}: Updating order {:?}", self.symbol, update);
        let side = *self.order_locations.get(&update.order_id)?;
        let index = self
            .orders(side)
            .iter()
            .position(|order| order.id == update.order_id)?;

        if self.orders(side)[index].kind.is_iceberg() {
            trace!(
                "Order book {}: Ignoring amend of iceberg order {}",
                self.symbol, update.order_id
            );
            return None;
        }

        if update.quantity == 0 {
            self.remove_order(&update.order_id);
            return None;
        }

        let timestamp = self.clock + 1;
        let order = &mut self.side_mut(side)[index];
        let keeps_priority = update.quantity < order.quantity && update.price == order.price;
        order.quantity = update.quantity;
        order.price = update.price;
        if !keeps_priority {
            order.timestamp = timestamp;
            self.clock = timestamp;
        }

        let order = &self.orders(side)[index];
        trace!(
            "Order book {}: Amended {} to {}@{} at t={}",
            self.symbol, order.id, order.quantity, order.price, order.timestamp
        );
        Some(order)
    }
}
