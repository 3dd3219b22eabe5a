//! Book-wide invariants checked over a long deterministic order flow

use matching_book::{Order, OrderBook, OrderKind, OrderUpdate};
use pricelevel::Side;

/// Small linear congruential generator so the flow is reproducible
struct Lcg(u64);

impl Lcg {
    fn next(&mut self) -> u64 {
        self.0 = self
            .0
            .wrapping_mul(6364136223846793005)
            .wrapping_add(1442695040888963407);
        self.0 >> 33
    }

    fn range(&mut self, low: u64, high: u64) -> u64 {
        low + self.next() % (high - low + 1)
    }
}

fn random_order(rng: &mut Lcg, id: &str) -> Order {
    let side = if rng.next() % 2 == 0 {
        Side::Buy
    } else {
        Side::Sell
    };
    let price = rng.range(95, 105);
    let quantity = rng.range(1, 60);
    match rng.next() % 5 {
        0 => Order::limit(id, side, price, quantity),
        1 => Order::market(id, side, quantity),
        2 => Order::immediate_or_cancel(id, side, price, quantity),
        3 => Order::fill_or_kill(id, side, price, quantity),
        _ => Order::iceberg(id, side, price, quantity, rng.range(1, 15)),
    }
}

fn assert_book_invariants(book: &OrderBook) {
    for side in [Side::Buy, Side::Sell] {
        for order in book.orders(side) {
            assert!(order.quantity > 0, "zero quantity order {} rests", order.id);
            assert_eq!(order.side, side);
            assert_eq!(book.get_order(&order.id), Some(order));
            if let OrderKind::Iceberg {
                display_size,
                remaining_display,
            } = order.kind
            {
                assert!(remaining_display > 0);
                assert!(remaining_display <= display_size);
                assert!(remaining_display <= order.quantity);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invariants_hold_over_random_flow() {
        let mut rng = Lcg(42);
        let mut book = OrderBook::new("FLOW");

        for i in 0..2000 {
            let id = format!("O{}", i);
            match rng.next() % 10 {
                0 => {
                    let target = format!("O{}", rng.range(0, i.max(1) as u64));
                    book.cancel_order(&target);
                }
                1 => {
                    let target = format!("O{}", rng.range(0, i.max(1) as u64));
                    let update =
                        OrderUpdate::new(&target, rng.range(1, 60), rng.range(95, 105));
                    book.amend_order(&update);
                }
                _ => {
                    let order = random_order(&mut rng, &id);
                    let side = order.side;
                    let kind = order.kind;
                    let requested = order.quantity;
                    let contra_before = book.total_quantity(side.opposite());
                    let clock_before = book.current_timestamp();

                    let result = book.match_order(order).unwrap();

                    let from_fills: u64 = result.fills.iter().map(|fill| fill.value().unwrap()).sum();
                    assert_eq!(result.executed_value, from_fills);
                    assert_eq!(
                        result.executed_quantity() + result.remaining_quantity,
                        requested
                    );
                    assert_eq!(
                        contra_before - book.total_quantity(side.opposite()),
                        result.executed_quantity()
                    );
                    if kind == OrderKind::FillOrKill && !result.is_complete {
                        assert_eq!(result.executed_value, 0);
                        assert_eq!(book.current_timestamp(), clock_before);
                    }
                    assert!(book.current_timestamp() >= clock_before);
                }
            }
            assert_book_invariants(&book);
        }
    }

    #[test]
    fn test_fills_follow_price_then_time_priority() {
        let mut rng = Lcg(7);
        let mut book = OrderBook::new("PRIORITY");
        for i in 0..200 {
            let id = format!("S{}", i);
            book.match_order(Order::limit(&id, Side::Sell, rng.range(100, 110), rng.range(1, 20)))
                .unwrap();
        }

        let mut expected: Vec<(u64, u64, String)> = book
            .orders(Side::Sell)
            .iter()
            .map(|order| (order.price, order.timestamp, order.id.clone()))
            .collect();
        expected.sort();

        let total = book.total_quantity(Side::Sell);
        let result = book
            .match_order(Order::market("SWEEP", Side::Buy, total))
            .unwrap();

        let makers: Vec<String> = result
            .fills
            .iter()
            .map(|fill| fill.maker_order_id.clone())
            .collect();
        let expected_ids: Vec<String> = expected.into_iter().map(|(_, _, id)| id).collect();
        assert_eq!(makers, expected_ids);

        let prices: Vec<u64> = result.fills.iter().map(|fill| fill.price).collect();
        assert!(prices.windows(2).all(|pair| pair[0] <= pair[1]));
        assert!(book.is_empty());
    }

    #[test]
    fn test_snapshot_matches_sweep_order_on_bids() {
        let mut rng = Lcg(99);
        let mut book = OrderBook::new("PRIORITY");
        for i in 0..100 {
            let id = format!("B{}", i);
            book.match_order(Order::limit(&id, Side::Buy, rng.range(90, 99), rng.range(1, 20)))
                .unwrap();
        }

        let snapshot = book.create_snapshot();
        let total = book.total_quantity(Side::Buy);
        let result = book
            .match_order(Order::market("SWEEP", Side::Sell, total))
            .unwrap();

        let snapshot_ids: Vec<&str> = snapshot.bids.iter().map(|line| line.id.as_str()).collect();
        let fill_ids: Vec<&str> = result
            .fills
            .iter()
            .map(|fill| fill.maker_order_id.as_str())
            .collect();
        assert_eq!(snapshot_ids, fill_ids);
    }
}
