//! Core data types for the pair-book engine
//!
//! ## Types
//!
//! - [`Order`]: A resting limit order on one side of a book
//! - [`Side`]: Bid or Ask
//! - [`TradingPair`]: The two token identifiers defining a market
//! - [`Fill`] / [`MatchReport`]: What a matching run produced
//! - [`MatchReceipt`]: Batch summary with a state root
//!
//! Prices are opaque `u128` integers and quantities are `u64`. The
//! [`price`] module converts human-readable decimals at the edge.

mod order;
mod pair;
mod trade;
mod receipt;
pub mod price;

// Re-export all types at module level
pub use order::{maker_from_u64, Maker, Order, Side};
pub use pair::{PairId, TradingPair};
pub use trade::{Fill, MatchReport};
pub use receipt::MatchReceipt;
