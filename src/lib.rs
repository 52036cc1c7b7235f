//! # Pair Book
//!
//! Limit-order matching engine for discrete trading pairs.
//!
//! ## Architecture
//!
//! - **Types**: Order, TradingPair, Fill, MatchReceipt
//! - **OrderBook**: Per-pair bids and asks, plus the pair registry
//! - **Engine**: Batch matching by price priority
//!
//! ## Design Principles
//!
//! 1. **Determinism**: Equal prices trade in submission order, so identical
//!    inputs produce identical books and state roots
//! 2. **Synchronous Execution**: Every operation runs to completion; there
//!    is no locking, the host guarantees a single writer
//! 3. **Explicit Ownership**: The registry owns its books; callers pass it
//!    around by `&mut`, there is no global state
//!
//! ## Example
//!
//! ```
//! use pair_book::{maker_from_u64, OrderBookRegistry};
//!
//! let mut registry = OrderBookRegistry::new();
//! let pair = registry.create_pair(b"BTC".to_vec(), b"USDC".to_vec());
//!
//! registry.submit_ask(pair, 800, 5, maker_from_u64(1))?;
//! registry.submit_ask(pair, 900, 15, maker_from_u64(2))?;
//! registry.submit_bid(pair, 1_000, 10, maker_from_u64(3))?;
//! registry.submit_bid(pair, 900, 20, maker_from_u64(4))?;
//!
//! let receipt = registry.match_all()?;
//! assert_eq!(receipt.volume, 20);
//! assert_eq!(registry.ask_count(pair)?, 0);
//! assert_eq!(registry.bid(pair, 0)?.filled_amount, 10);
//! # Ok::<(), pair_book::BookError>(())
//! ```

// ============================================================================
// Module declarations
// ============================================================================

/// Core data types: Order, TradingPair, Fill, MatchReceipt
pub mod types;

/// Order books, sorting and the pair registry
pub mod orderbook;

/// Matching engine: batch matching over one book
pub mod engine;

/// Validation and allocation policy
pub mod config;

/// Error types
pub mod error;

// ============================================================================
// Re-exports for convenience
// ============================================================================

pub use types::{maker_from_u64, Fill, Maker, MatchReceipt, MatchReport, Order, PairId, Side, TradingPair};
pub use orderbook::{OrderBook, OrderBookRegistry, SortDirection};
pub use engine::{match_book, MatchingEngine};
pub use config::EngineConfig;
pub use error::BookError;
