//! Limit Order Book - demo driver
//!
//! Submits a few orders and prints the top of book. Set `RUST_LOG=debug` to
//! see trade and resting events.

use std::time::{SystemTime, UNIX_EPOCH};

use limit_order_book::types::price::{from_fixed_trimmed, to_fixed};
use limit_order_book::{EngineConfig, MatchingEngine, Order, Side};
use tracing_subscriber::EnvFilter;

fn now_millis() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or_default()
}

fn format_price(price: Option<u64>) -> String {
    price.map(from_fixed_trimmed).unwrap_or_else(|| "None".to_string())
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let mut engine = MatchingEngine::with_config(EngineConfig::with_capacity(16));

    let submissions = [
        ("1", Side::Buy, "100.0", 10),
        ("2", Side::Buy, "101.0", 5),
        ("3", Side::Sell, "105.0", 7),
    ];

    for (id, side, price, quantity) in submissions {
        let price = to_fixed(price).ok_or("invalid price")?;
        let order = Order::new(id, side, price, quantity, now_millis())?;
        println!("Submitting {order}");

        let result = engine.submit(order)?;
        for trade in &result.trades {
            println!(
                "  trade #{}: {} x {} @ {} (maker {})",
                trade.id,
                trade.quantity,
                trade.taker_order_id,
                from_fixed_trimmed(trade.price),
                trade.maker_order_id
            );
        }
    }

    println!();
    println!("Best bid: {}", format_price(engine.best_bid()));
    println!("Best ask: {}", format_price(engine.best_ask()));
    println!("State root: {}", engine.book().state_root_hex());

    Ok(())
}
