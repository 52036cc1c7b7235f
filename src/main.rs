//! Pair Book - demo binary
//!
//! Registers two pairs, submits a few crossing orders with human-readable
//! prices and runs one batch. Log verbosity comes from `PAIR_BOOK_LOG`
//! (`error`, `warn`, `info`, `debug`, `trace`; default `info`).

use std::error::Error;
use std::str::FromStr;

use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

use pair_book::types::price::{from_fixed_trimmed, to_fixed};
use pair_book::{maker_from_u64, BookError, OrderBookRegistry, PairId, Side};

/// (side, price, amount, maker)
type DemoOrder = (Side, &'static str, u64, u64);

const BTC_ORDERS: &[DemoOrder] = &[
    (Side::Ask, "800", 5, 1),
    (Side::Ask, "900", 15, 2),
    (Side::Bid, "1000", 10, 3),
    (Side::Bid, "900", 20, 4),
];

const ETH_ORDERS: &[DemoOrder] = &[
    (Side::Ask, "31.5", 5, 5),
    (Side::Ask, "1100", 15, 6),
    (Side::Bid, "1000.25", 10, 7),
    (Side::Bid, "90", 20, 8),
];

fn main() -> Result<(), Box<dyn Error>> {
    let level = std::env::var("PAIR_BOOK_LOG")
        .ok()
        .and_then(|v| Level::from_str(&v).ok())
        .unwrap_or(Level::INFO);
    let subscriber = FmtSubscriber::builder().with_max_level(level).finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let mut registry = OrderBookRegistry::new();
    let btc = registry.create_pair(b"BTC".to_vec(), b"USDC".to_vec());
    let eth = registry.create_pair(b"ETH".to_vec(), b"USDC".to_vec());

    submit_all(&mut registry, btc, BTC_ORDERS)?;
    submit_all(&mut registry, eth, ETH_ORDERS)?;

    let receipt = registry.match_all()?;
    info!(
        batch_id = receipt.batch_id,
        pairs = receipt.pairs_matched,
        fills = receipt.fills_executed,
        volume = receipt.volume,
        state_root = %receipt.state_root_hex(),
        "batch complete"
    );

    for pair_id in [btc, eth] {
        print_book(&registry, pair_id)?;
    }

    Ok(())
}

fn submit_all(
    registry: &mut OrderBookRegistry,
    pair_id: PairId,
    orders: &[DemoOrder],
) -> Result<(), Box<dyn Error>> {
    for &(side, price, amount, maker) in orders {
        let price = to_fixed(price).ok_or_else(|| format!("bad price literal {price:?}"))?;
        match side {
            Side::Bid => registry.submit_bid(pair_id, price, amount, maker_from_u64(maker))?,
            Side::Ask => registry.submit_ask(pair_id, price, amount, maker_from_u64(maker))?,
        }
    }
    Ok(())
}

fn print_book(registry: &OrderBookRegistry, pair_id: PairId) -> Result<(), BookError> {
    let book = registry.book(pair_id)?;
    println!("pair {} ({})", pair_id, registry.pair(pair_id)?);

    for side in [Side::Bid, Side::Ask] {
        let orders = book.side(side);
        if orders.is_empty() {
            println!("  {side}: none");
        }
        for order in orders {
            println!(
                "  {side}: price {} amount {} filled {}",
                from_fixed_trimmed(order.price),
                order.amount,
                order.filled_amount
            );
        }
    }
    Ok(())
}
