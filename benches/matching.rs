//! Benchmarks for the limit order book matching engine.
//!
//! ## Running Benchmarks
//!
//! ```bash
//! # Run all benchmarks
//! cargo bench
//!
//! # Run specific benchmark
//! cargo bench -- single_match
//! ```
//!
//! Results are saved to `target/criterion/` with HTML reports.

use criterion::{
    black_box, criterion_group, criterion_main,
    BatchSize, BenchmarkId, Criterion, Throughput,
};
use std::time::Duration;

use limit_order_book::types::price::{from_whole, SCALE};
use limit_order_book::{EngineConfig, MatchingEngine, Order, Side};

// ============================================================================
// HELPER FUNCTIONS - Deterministic order generation
// ============================================================================

/// Base price: 50000 (fixed-point)
const BASE_PRICE: u64 = 50_000 * SCALE;

fn make_order(id: String, side: Side, price: u64, quantity: u64) -> Order {
    Order::new(id, side, price, quantity, 0).expect("benchmark orders are valid")
}

/// Engine pre-populated with resting sells at increasing prices.
///
/// # Arguments
/// * `count` - Number of orders to add (one per level)
/// * `price_step` - Price increment between levels (fixed-point)
/// * `quantity` - Quantity per order
fn engine_with_asks(count: usize, price_step: u64, quantity: u64) -> MatchingEngine {
    let mut engine = MatchingEngine::with_config(EngineConfig::with_capacity(count * 2));
    for i in 0..count {
        let price = BASE_PRICE + i as u64 * price_step;
        engine
            .submit(make_order(format!("ask-{i}"), Side::Sell, price, quantity))
            .expect("unique ids");
    }
    engine
}

/// Add resting buys strictly below `BASE_PRICE`.
fn add_bids(engine: &mut MatchingEngine, count: usize, price_step: u64, quantity: u64) {
    for i in 0..count {
        let price = BASE_PRICE - (i as u64 + 1) * price_step;
        engine
            .submit(make_order(format!("bid-{i}"), Side::Buy, price, quantity))
            .expect("unique ids");
    }
}

/// Deterministic mixed flow for throughput testing.
fn generate_order_batch(count: usize, seed: u64) -> Vec<Order> {
    use rand::{Rng, SeedableRng};
    use rand_chacha::ChaCha8Rng;

    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let mut orders = Vec::with_capacity(count);

    for i in 0..count {
        let side = if rng.gen_bool(0.5) { Side::Buy } else { Side::Sell };
        // Price variation: ±500
        let offset = rng.gen_range(0..=1_000u64) * SCALE;
        let price = BASE_PRICE - 500 * SCALE + offset;
        let quantity: u64 = rng.gen_range(1..=100);
        orders.push(make_order(format!("o{i}"), side, price, quantity));
    }

    orders
}

// ============================================================================
// BENCHMARK: Single Match Latency
// ============================================================================

fn bench_single_match(c: &mut Criterion) {
    let mut group = c.benchmark_group("single_match");
    group.measurement_time(Duration::from_secs(10));

    // Buy that fully fills against the best of 1,000 asks
    group.bench_function("against_1k_orders", |b| {
        b.iter_batched(
            || {
                let engine = engine_with_asks(1_000, SCALE, 100);
                let buy = make_order("taker".into(), Side::Buy, BASE_PRICE, 100);
                (engine, buy)
            },
            |(mut engine, buy)| black_box(engine.submit(buy)),
            BatchSize::LargeInput,
        );
    });

    // Buy large enough to sweep ~10 levels
    group.bench_function("multi_level_sweep", |b| {
        b.iter_batched(
            || {
                let engine = engine_with_asks(100, SCALE, 10);
                let buy = make_order("taker".into(), Side::Buy, BASE_PRICE + 10 * SCALE, 100);
                (engine, buy)
            },
            |(mut engine, buy)| black_box(engine.submit(buy)),
            BatchSize::SmallInput,
        );
    });

    // Buy below the best ask rests on the book
    group.bench_function("no_match_rest_on_book", |b| {
        b.iter_batched(
            || {
                let engine = engine_with_asks(1_000, SCALE, 100);
                let buy = make_order("taker".into(), Side::Buy, BASE_PRICE - 100 * SCALE, 100);
                (engine, buy)
            },
            |(mut engine, buy)| black_box(engine.submit(buy)),
            BatchSize::LargeInput,
        );
    });

    group.finish();
}

// ============================================================================
// BENCHMARK: Queries
// ============================================================================

fn bench_queries(c: &mut Criterion) {
    let mut group = c.benchmark_group("queries");

    let mut engine = engine_with_asks(500, SCALE, 100);
    add_bids(&mut engine, 500, SCALE, 100);

    group.bench_function("best_bid_ask", |b| {
        b.iter(|| black_box((engine.best_bid(), engine.best_ask())))
    });
    group.bench_function("lookup", |b| b.iter(|| black_box(engine.lookup("ask-250"))));
    group.bench_function("depth_10", |b| {
        b.iter(|| black_box(engine.book().depth(Side::Sell, 10)))
    });

    group.finish();
}

// ============================================================================
// BENCHMARK: Throughput
// ============================================================================

fn bench_throughput(c: &mut Criterion) {
    let mut group = c.benchmark_group("throughput");
    group.measurement_time(Duration::from_secs(15));
    group.sample_size(50);

    for batch_size in [1_000, 10_000, 50_000] {
        group.throughput(Throughput::Elements(batch_size as u64));

        group.bench_with_input(
            BenchmarkId::new("orders", batch_size),
            &batch_size,
            |b, &size| {
                let orders = generate_order_batch(size, 42);

                b.iter_batched(
                    || {
                        let engine = MatchingEngine::with_config(EngineConfig::with_capacity(size));
                        (engine, orders.clone())
                    },
                    |(mut engine, orders)| {
                        for order in orders {
                            let _ = black_box(engine.submit(order));
                        }
                        engine.book().order_count()
                    },
                    BatchSize::LargeInput,
                );
            },
        );
    }

    group.finish();
}

// ============================================================================
// BENCHMARK: Large Book
// ============================================================================

fn bench_large_book(c: &mut Criterion) {
    let mut group = c.benchmark_group("large_book");
    group.measurement_time(Duration::from_secs(10));
    group.sample_size(50);

    // Match inside a book with 100k resting orders
    group.bench_function("match_in_100k_book", |b| {
        let mut engine = engine_with_asks(50_000, 1_000, 1_000_000);
        add_bids(&mut engine, 50_000, 1_000, 1_000_000);
        let mut next_id = 0u64;

        b.iter(|| {
            next_id += 1;
            let buy = make_order(format!("t{next_id}"), Side::Buy, from_whole(50_000).unwrap_or(BASE_PRICE), 1);
            black_box(engine.submit(buy))
        });
    });

    group.finish();
}

// ============================================================================
// CRITERION ENTRY POINT
// ============================================================================

criterion_group!(
    benches,
    bench_single_match,
    bench_queries,
    bench_throughput,
    bench_large_book
);

criterion_main!(benches);
