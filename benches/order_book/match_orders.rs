use criterion::{BatchSize, BenchmarkId, Criterion};
use matching_book::{Order, OrderBook};
use pricelevel::Side;
use std::hint::black_box;

/// Register all benchmarks for matching orders in an order book
pub fn register_benchmarks(c: &mut Criterion) {
    let mut group = c.benchmark_group("OrderBook - Match Orders");
    group.sample_size(100);

    group.bench_function("match_market_against_limit", |b| {
        b.iter(|| {
            let mut order_book = setup_limit_order_book(100);
            let _ = black_box(order_book.match_order(Order::market("TAKER", Side::Buy, 50)));
        })
    });

    group.bench_function("match_market_against_iceberg", |b| {
        b.iter(|| {
            let mut order_book = setup_iceberg_order_book(100);
            let _ = black_box(order_book.match_order(Order::market("TAKER", Side::Buy, 75)));
        })
    });

    // A fill-or-kill that cannot fill copies and discards the whole contra side
    group.bench_function("fill_or_kill_killed", |b| {
        b.iter_batched(
            || setup_limit_order_book(100),
            |mut order_book| {
                let order = Order::fill_or_kill("TAKER", Side::Buy, 1000, 2000);
                black_box(order_book.match_order(order))
            },
            BatchSize::SmallInput,
        );
    });

    for match_quantity in [10, 50, 100, 200, 500].iter() {
        group.bench_with_input(
            BenchmarkId::new("match_quantity_scaling", match_quantity),
            match_quantity,
            |b, &match_quantity| {
                b.iter(|| {
                    let mut order_book = setup_limit_order_book(50);
                    let order = Order::market("TAKER", Side::Buy, match_quantity);
                    let _ = black_box(order_book.match_order(order));
                })
            },
        );
    }

    group.finish();
}

// Helper function to set up an order book with limit orders over 10 price levels
fn setup_limit_order_book(order_count: u64) -> OrderBook {
    let mut order_book = OrderBook::new("TEST-SYMBOL");

    for i in 0..order_count {
        let id = format!("S{}", i);
        order_book
            .submit_limit_order(&id, Side::Sell, 1000 - (i % 10), 10)
            .unwrap();
    }

    order_book
}

// Helper function to set up an order book with iceberg orders
fn setup_iceberg_order_book(order_count: u64) -> OrderBook {
    let mut order_book = OrderBook::new("TEST-SYMBOL");

    for i in 0..order_count {
        let id = format!("I{}", i);
        order_book
            .submit_iceberg_order(&id, Side::Sell, 1000, 20, 5)
            .unwrap();
    }

    order_book
}
