//! Randomized stress tests for the pair-book matching engine.
//!
//! These tests verify, over seeded random order flow:
//! 1. Every order keeps `0 <= filled_amount <= amount`
//! 2. No bid crosses the best ask once matching returns
//! 3. Quantity is conserved: both sides lose exactly the reported volume
//! 4. Re-matching without new submissions changes nothing
//! 5. Identical inputs produce identical state roots
//!
//! ## Running Stress Tests
//!
//! ```bash
//! cargo test --release --test stress_test -- --nocapture
//! ```

use std::time::Instant;

use pair_book::{maker_from_u64, OrderBook, OrderBookRegistry, PairId, Side};

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

// ============================================================================
// TEST CONSTANTS
// ============================================================================

/// Number of pairs in the multi-pair runs
const PAIR_COUNT: usize = 8;

/// Orders submitted per pair between batches
const ORDERS_PER_ROUND: usize = 200;

/// Batches per run
const ROUNDS: usize = 25;

/// Base price; random prices land within +/- PRICE_SPREAD of it
const BASE_PRICE: u128 = 1_000_000;
const PRICE_SPREAD: u128 = 5_000;

// ============================================================================
// HELPER FUNCTIONS
// ============================================================================

/// Submit `count` random orders to `pair`.
fn submit_random_orders(rng: &mut ChaCha8Rng, registry: &mut OrderBookRegistry, pair: PairId, count: usize) {
    for _ in 0..count {
        let price = rng.gen_range(BASE_PRICE - PRICE_SPREAD..=BASE_PRICE + PRICE_SPREAD);
        let amount: u64 = rng.gen_range(1..=1_000);
        let maker = maker_from_u64(rng.gen_range(1..=500));

        if rng.gen_bool(0.5) {
            registry.submit_bid(pair, price, amount, maker).unwrap();
        } else {
            registry.submit_ask(pair, price, amount, maker).unwrap();
        }
    }
}

/// Check the invariants that must hold for any book after a match.
fn assert_book_invariants(book: &OrderBook) {
    for order in book.bids().iter().chain(book.asks()) {
        assert!(order.filled_amount <= order.amount, "overfilled order {:?}", order);
        assert!(!order.is_filled(), "fully filled order left on book: {:?}", order);
    }

    if let (Some(bid), Some(ask)) = (book.best_bid(), book.best_ask()) {
        assert!(bid < ask, "book still crossed: bid {} >= ask {}", bid, ask);
    }
}

/// Run a seeded multi-pair session and return the final state root.
fn run_deterministic_session(seed: u64) -> [u8; 32] {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let mut registry = OrderBookRegistry::new();
    let pairs: Vec<PairId> = (0..PAIR_COUNT)
        .map(|i| registry.create_pair(vec![i as u8], b"QUOTE".to_vec()))
        .collect();

    for _ in 0..ROUNDS {
        for &pair in &pairs {
            submit_random_orders(&mut rng, &mut registry, pair, ORDERS_PER_ROUND / 4);
        }
        registry.match_all().unwrap();
    }

    registry.state_root().unwrap()
}

// ============================================================================
// STRESS TESTS
// ============================================================================

/// Random flow on one pair, checking every invariant after every match.
#[test]
fn stress_invariants_single_pair() {
    let mut rng = ChaCha8Rng::seed_from_u64(42);
    let mut registry = OrderBookRegistry::new();
    let pair = registry.create_pair(b"BASE".to_vec(), b"QUOTE".to_vec());

    let mut total_volume = 0u128;

    for round in 0..ROUNDS {
        submit_random_orders(&mut rng, &mut registry, pair, ORDERS_PER_ROUND);

        let book = registry.book(pair).unwrap();
        let open_bids = book.open_quantity(Side::Bid);
        let open_asks = book.open_quantity(Side::Ask);

        let report = registry.match_pair(pair).unwrap();
        let book = registry.book(pair).unwrap();

        assert_book_invariants(book);

        // Conservation: each side lost exactly what was matched
        assert_eq!(
            open_bids - book.open_quantity(Side::Bid),
            report.volume(),
            "bid-side conservation broken in round {}",
            round
        );
        assert_eq!(
            open_asks - book.open_quantity(Side::Ask),
            report.volume(),
            "ask-side conservation broken in round {}",
            round
        );

        // Every fill honours both limits
        for fill in &report.fills {
            assert!(fill.bid_price >= fill.ask_price);
            assert!(fill.quantity > 0);
        }

        total_volume += report.volume();
    }

    assert!(total_volume > 0, "Expected some fills to occur");
    assert_eq!(registry.engine().total_volume(), total_volume);
}

/// Re-matching an already matched book is a no-op.
#[test]
fn stress_idempotent_rematch() {
    let mut rng = ChaCha8Rng::seed_from_u64(7);
    let mut registry = OrderBookRegistry::new();
    let pair = registry.create_pair(b"BASE".to_vec(), b"QUOTE".to_vec());

    for _ in 0..10 {
        submit_random_orders(&mut rng, &mut registry, pair, ORDERS_PER_ROUND);
        registry.match_pair(pair).unwrap();

        let settled = registry.book(pair).unwrap().clone();
        let report = registry.match_pair(pair).unwrap();

        assert!(report.is_empty());
        assert_eq!(registry.book(pair).unwrap(), &settled);
    }
}

/// `match_all` over many pairs leaves each book as matching it alone would.
#[test]
fn stress_match_all_matches_pairs_independently() {
    let mut rng_batch = ChaCha8Rng::seed_from_u64(99);
    let mut rng_single = ChaCha8Rng::seed_from_u64(99);

    let mut batch = OrderBookRegistry::new();
    let mut single = OrderBookRegistry::new();
    let mut pairs = Vec::new();
    for i in 0..PAIR_COUNT {
        let id = batch.create_pair(vec![i as u8], b"QUOTE".to_vec());
        assert_eq!(single.create_pair(vec![i as u8], b"QUOTE".to_vec()), id);
        pairs.push(id);
    }

    for _ in 0..5 {
        for &pair in &pairs {
            submit_random_orders(&mut rng_batch, &mut batch, pair, ORDERS_PER_ROUND / 4);
            submit_random_orders(&mut rng_single, &mut single, pair, ORDERS_PER_ROUND / 4);
        }

        let receipt = batch.match_all().unwrap();

        // Reverse order on purpose: pairs must not influence each other
        let mut volume = 0;
        for &pair in pairs.iter().rev() {
            volume += single.match_pair(pair).unwrap().volume();
        }

        assert_eq!(receipt.volume, volume);
        for &pair in &pairs {
            assert_eq!(batch.book(pair).unwrap(), single.book(pair).unwrap());
            assert_book_invariants(batch.book(pair).unwrap());
        }
        assert_eq!(receipt.state_root, single.state_root().unwrap());
    }
}

/// Same seed, same state root.
#[test]
fn verify_determinism() {
    const SEED: u64 = 12345;

    let root1 = run_deterministic_session(SEED);
    let root2 = run_deterministic_session(SEED);
    assert_eq!(root1, root2, "State roots must match for determinism");

    let root3 = run_deterministic_session(SEED + 1);
    assert_ne!(root1, root3, "Different seeds should produce different roots");
}

/// Throughput report for a larger single-pair session.
#[test]
fn stress_throughput_report() {
    const ORDER_COUNT: usize = 100_000;

    let mut rng = ChaCha8Rng::seed_from_u64(2024);
    let mut registry = OrderBookRegistry::new();
    let pair = registry.create_pair(b"BASE".to_vec(), b"QUOTE".to_vec());

    let start = Instant::now();
    let mut fills = 0usize;
    for _ in 0..(ORDER_COUNT / 1_000) {
        submit_random_orders(&mut rng, &mut registry, pair, 1_000);
        fills += registry.match_pair(pair).unwrap().fills.len();
    }
    let elapsed = start.elapsed();

    println!("\n=== THROUGHPUT ===");
    println!("  Orders submitted:  {:>12}", ORDER_COUNT);
    println!("  Fills generated:   {:>12}", fills);
    println!("  Bids resting:      {:>12}", registry.bid_count(pair).unwrap());
    println!("  Asks resting:      {:>12}", registry.ask_count(pair).unwrap());
    println!("  Elapsed time:      {:>12.2?}", elapsed);
    println!("  State root:        {}", hex::encode(registry.state_root().unwrap()));

    assert!(fills > 0);
    assert_book_invariants(registry.book(pair).unwrap());
}
