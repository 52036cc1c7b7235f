//! Registry of trading pairs and their order books.
//!
//! ## Pair Ids
//!
//! Ids come from an explicit counter starting at 1, stored next to the
//! mappings. The registry never deletes pairs, so an id always equals the
//! number of pairs registered before it plus one.
//!
//! ## Concurrency
//!
//! The registry is a plain owned value. Every method takes `&self` or
//! `&mut self`; hosts that share it across threads provide their own
//! single-writer discipline (e.g. a `Mutex`).
//!
//! ## Example
//!
//! ```
//! use pair_book::orderbook::OrderBookRegistry;
//! use pair_book::types::maker_from_u64;
//!
//! let mut registry = OrderBookRegistry::new();
//! let pair = registry.create_pair(b"BTC".to_vec(), b"USDC".to_vec());
//! assert_eq!(pair, 1);
//!
//! registry.submit_ask(pair, 800, 5, maker_from_u64(1)).unwrap();
//! registry.submit_bid(pair, 1_000, 10, maker_from_u64(2)).unwrap();
//!
//! let report = registry.match_pair(pair).unwrap();
//! assert_eq!(report.volume(), 5);
//! assert_eq!(registry.ask_count(pair).unwrap(), 0);
//! assert_eq!(registry.bid(pair, 0).unwrap().filled_amount, 5);
//! ```

use std::collections::HashMap;

use tracing::{debug, warn};

use crate::config::EngineConfig;
use crate::engine::MatchingEngine;
use crate::error::BookError;
use crate::orderbook::OrderBook;
use crate::types::{Maker, MatchReceipt, MatchReport, Order, PairId, Side, TradingPair};

/// Owner of every trading pair and its book.
#[derive(Debug)]
pub struct OrderBookRegistry {
    /// Pair metadata by id
    pairs: HashMap<PairId, TradingPair>,

    /// Book by id, same key set as `pairs`
    books: HashMap<PairId, OrderBook>,

    /// Id handed to the next created pair (ids start at 1)
    next_pair_id: PairId,

    /// Validation and allocation policy
    config: EngineConfig,

    /// Matching engine with running totals
    engine: MatchingEngine,

    /// Number of `match_all` batches run so far
    batches: u64,
}

impl Default for OrderBookRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl OrderBookRegistry {
    /// Create an empty registry with the default policy
    pub fn new() -> Self {
        Self::with_config(EngineConfig::default())
    }

    /// Create an empty registry with a custom policy
    pub fn with_config(config: EngineConfig) -> Self {
        Self {
            pairs: HashMap::new(),
            books: HashMap::new(),
            next_pair_id: 1,
            config,
            engine: MatchingEngine::new(),
            batches: 0,
        }
    }

    #[inline]
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    #[inline]
    pub fn engine(&self) -> &MatchingEngine {
        &self.engine
    }

    // ========================================================================
    // Pair lifecycle
    // ========================================================================

    /// Register a new pair with an empty book.
    ///
    /// Always succeeds. Identical tokens may be registered more than once,
    /// each time getting an independent book.
    pub fn create_pair(&mut self, base: impl Into<Vec<u8>>, quote: impl Into<Vec<u8>>) -> PairId {
        let pair_id = self.next_pair_id;
        self.next_pair_id += 1;

        let pair = TradingPair::new(base, quote);
        debug!(pair_id, pair = %pair, "pair created");

        self.pairs.insert(pair_id, pair);
        self.books
            .insert(pair_id, OrderBook::with_capacity(self.config.book_capacity));
        pair_id
    }

    /// Number of registered pairs
    #[inline]
    pub fn pair_count(&self) -> usize {
        self.pairs.len()
    }

    #[inline]
    pub fn contains_pair(&self, pair_id: PairId) -> bool {
        self.pairs.contains_key(&pair_id)
    }

    pub fn pair(&self, pair_id: PairId) -> Result<&TradingPair, BookError> {
        self.pairs.get(&pair_id).ok_or(BookError::PairNotFound(pair_id))
    }

    pub fn book(&self, pair_id: PairId) -> Result<&OrderBook, BookError> {
        self.books.get(&pair_id).ok_or(BookError::PairNotFound(pair_id))
    }

    // ========================================================================
    // Submission
    // ========================================================================

    /// Append a buy order to the pair's book
    pub fn submit_bid(
        &mut self,
        pair_id: PairId,
        price: u128,
        amount: u64,
        maker: Maker,
    ) -> Result<(), BookError> {
        self.submit(pair_id, Side::Bid, price, amount, maker)
    }

    /// Append a sell order to the pair's book
    pub fn submit_ask(
        &mut self,
        pair_id: PairId,
        price: u128,
        amount: u64,
        maker: Maker,
    ) -> Result<(), BookError> {
        self.submit(pair_id, Side::Ask, price, amount, maker)
    }

    fn submit(
        &mut self,
        pair_id: PairId,
        side: Side,
        price: u128,
        amount: u64,
        maker: Maker,
    ) -> Result<(), BookError> {
        let book = self
            .books
            .get_mut(&pair_id)
            .ok_or(BookError::PairNotFound(pair_id))?;

        if let Err(e) = self.config.validate(price, amount) {
            warn!(pair_id, %side, price, amount, error = %e, "order rejected");
            return Err(e);
        }

        let sequence = book.push(side, price, amount, maker);
        debug!(pair_id, %side, price, amount, sequence, "order submitted");
        Ok(())
    }

    // ========================================================================
    // Matching
    // ========================================================================

    /// Run the matching algorithm on one pair's book
    pub fn match_pair(&mut self, pair_id: PairId) -> Result<MatchReport, BookError> {
        let book = self
            .books
            .get_mut(&pair_id)
            .ok_or(BookError::PairNotFound(pair_id))?;

        let report = self.engine.match_book(book);
        debug!(pair_id, fills = report.fills.len(), volume = report.volume(), "pair matched");
        Ok(report)
    }

    /// Match every pair in ascending id order and summarize the batch.
    ///
    /// Each book is matched on its own; no state is shared between pairs.
    /// Fails only if the state root cannot be computed, in which case every
    /// book has already been matched but the batch counter is unchanged.
    pub fn match_all(&mut self) -> Result<MatchReceipt, BookError> {
        let mut pairs_matched = 0u64;
        let mut fills_executed = 0u64;
        let mut volume = 0u128;

        for pair_id in 1..self.next_pair_id {
            if !self.contains_pair(pair_id) {
                continue;
            }
            let report = self.match_pair(pair_id)?;
            pairs_matched += 1;
            fills_executed = fills_executed.saturating_add(report.fills.len() as u64);
            volume = volume.saturating_add(report.volume());
        }

        let state_root = self.state_root()?;
        self.batches += 1;
        let receipt = MatchReceipt::new(
            self.batches,
            pairs_matched,
            fills_executed,
            volume,
            state_root,
        );
        debug!(
            batch_id = receipt.batch_id,
            pairs_matched,
            fills_executed,
            volume,
            state_root = %receipt.state_root_hex(),
            "batch matched"
        );
        Ok(receipt)
    }

    // ========================================================================
    // Read accessors
    // ========================================================================

    pub fn bid_count(&self, pair_id: PairId) -> Result<usize, BookError> {
        Ok(self.book(pair_id)?.bid_count())
    }

    pub fn ask_count(&self, pair_id: PairId) -> Result<usize, BookError> {
        Ok(self.book(pair_id)?.ask_count())
    }

    /// Bid at `index` in current storage order
    pub fn bid(&self, pair_id: PairId, index: usize) -> Result<&Order, BookError> {
        self.book(pair_id)?.order(Side::Bid, index)
    }

    /// Ask at `index` in current storage order
    pub fn ask(&self, pair_id: PairId, index: usize) -> Result<&Order, BookError> {
        self.book(pair_id)?.order(Side::Ask, index)
    }

    // ========================================================================
    // State root
    // ========================================================================

    /// SHA-256 over the SSZ encoding of every resting order.
    ///
    /// Pairs are walked in ascending id order, bids before asks, each side
    /// in its current storage order.
    pub fn state_root(&self) -> Result<[u8; 32], BookError> {
        let mut data = Vec::new();

        for pair_id in 1..self.next_pair_id {
            let Some(book) = self.books.get(&pair_id) else {
                continue;
            };
            data.extend_from_slice(&pair_id.to_le_bytes());
            for order in book.bids().iter().chain(book.asks()) {
                let bytes = ssz_rs::serialize(order).map_err(|e| BookError::Encoding {
                    pair_id,
                    sequence: order.sequence,
                    message: format!("{e:?}"),
                })?;
                data.extend_from_slice(&bytes);
            }
        }

        Ok(MatchReceipt::compute_hash(&data))
    }
}

// ============================================================================
// Unit Tests
// ============================================================================
