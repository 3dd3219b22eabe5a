//! End-to-end scenarios for each order type through the public API

#[cfg(test)]
mod tests {
    use matching_book::{Order, OrderBook, OrderKind, OrderUpdate};
    use pricelevel::Side;

    #[test]
    fn test_limit_buy_partially_consumes_resting_ask() {
        let mut book = OrderBook::new("TEST");
        book.match_order(Order::limit("S1", Side::Sell, 100, 50))
            .unwrap();

        let result = book
            .match_order(Order::limit("B1", Side::Buy, 100, 30))
            .unwrap();

        assert_eq!(result.executed_value, 3000);
        assert_eq!(book.get_order("S1").unwrap().quantity, 20);
        assert!(book.orders(Side::Buy).is_empty());
    }

    #[test]
    fn test_market_buy_sweeps_and_discards() {
        let mut book = OrderBook::new("TEST");
        book.match_order(Order::limit("S1", Side::Sell, 100, 10))
            .unwrap();

        let result = book
            .match_order(Order::market("M1", Side::Buy, 30))
            .unwrap();

        assert_eq!(result.executed_value, 1000);
        assert!(book.get_order("S1").is_none());
        assert!(book.get_order("M1").is_none());
        assert!(book.orders(Side::Sell).is_empty());
    }

    #[test]
    fn test_fill_or_kill_against_empty_asks() {
        let mut book = OrderBook::new("TEST");
        book.match_order(Order::limit("B0", Side::Buy, 90, 10))
            .unwrap();
        let snapshot_before = book.create_snapshot();

        let result = book
            .match_order(Order::fill_or_kill("F1", Side::Buy, 100, 10))
            .unwrap();

        assert_eq!(result.executed_value, 0);
        assert!(book.get_order("F1").is_none());
        let snapshot_after = book.create_snapshot();
        assert_eq!(snapshot_after.bids, snapshot_before.bids);
        assert_eq!(snapshot_after.asks, snapshot_before.asks);
    }

    #[test]
    fn test_iceberg_refresh_during_single_match() {
        let mut book = OrderBook::new("TEST");
        book.match_order(Order::iceberg("I1", Side::Sell, 100, 100, 20))
            .unwrap();
        let t_before = book.get_order("I1").unwrap().timestamp;

        let result = book
            .match_order(Order::limit("B1", Side::Buy, 100, 25))
            .unwrap();

        assert_eq!(result.fills.len(), 2);
        assert_eq!(result.fills[0].quantity, 20);
        assert_eq!(result.fills[1].quantity, 5);
        assert_eq!(result.executed_value, 2500);
        assert!(result.is_complete);

        let iceberg = book.get_order("I1").unwrap();
        assert_eq!(iceberg.quantity, 75);
        assert_eq!(iceberg.visible_quantity(), Some(15));
        assert!(iceberg.timestamp > t_before);
        match iceberg.kind {
            OrderKind::Iceberg {
                display_size,
                remaining_display,
            } => {
                assert!(remaining_display <= display_size);
                assert!(remaining_display <= iceberg.quantity);
            }
            other => panic!("Expected iceberg, got {:?}", other),
        }
    }

    #[test]
    fn test_amend_priority_rules() {
        let mut book = OrderBook::new("TEST");
        book.match_order(Order::limit("O1", Side::Buy, 100, 50))
            .unwrap();
        let t1 = book.get_order("O1").unwrap().timestamp;

        book.amend_order(&OrderUpdate::new("O1", 30, 100));
        assert_eq!(book.get_order("O1").unwrap().timestamp, t1);

        book.amend_order(&OrderUpdate::new("O1", 40, 100));
        let t2 = book.get_order("O1").unwrap().timestamp;
        assert!(t2 > t1);
        assert_eq!(book.get_order("O1").unwrap().quantity, 40);
    }

    #[test]
    fn test_sell_side_mirror() {
        let mut book = OrderBook::new("TEST");
        book.match_order(Order::limit("B1", Side::Buy, 101, 10))
            .unwrap();
        book.match_order(Order::limit("B2", Side::Buy, 99, 10))
            .unwrap();

        let result = book
            .match_order(Order::limit("S1", Side::Sell, 100, 15))
            .unwrap();

        assert_eq!(result.executed_value, 1010);
        assert_eq!(result.remaining_quantity, 5);
        assert!(result.resting);
        assert_eq!(book.best_ask(), Some(100));
        assert_eq!(book.best_bid(), Some(99));
    }
}
