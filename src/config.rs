//! Engine configuration.
//!
//! The reference matching logic accepts any order, including degenerate ones.
//! Here zero-amount and zero-price orders are rejected at submission unless
//! the host opts in explicitly.
//!
//! ## Example
//!
//! ```
//! use pair_book::EngineConfig;
//!
//! let config = EngineConfig::default()
//!     .with_zero_amount(true)
//!     .with_book_capacity(1_024);
//!
//! assert!(config.allow_zero_amount);
//! assert!(!config.allow_zero_price);
//! ```

use crate::error::BookError;

/// Default number of order slots pre-allocated per book side.
pub const DEFAULT_BOOK_CAPACITY: usize = 64;

/// Validation and allocation settings shared by every book in a registry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EngineConfig {
    /// Accept orders with `amount == 0`. Such orders are born fully filled
    /// and are dropped by the next matching run.
    pub allow_zero_amount: bool,

    /// Accept orders with `price == 0`.
    pub allow_zero_price: bool,

    /// Orders pre-allocated per side when a pair is created
    pub book_capacity: usize,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            allow_zero_amount: false,
            allow_zero_price: false,
            book_capacity: DEFAULT_BOOK_CAPACITY,
        }
    }
}

impl EngineConfig {
    pub fn with_zero_amount(mut self, allow: bool) -> Self {
        self.allow_zero_amount = allow;
        self
    }

    pub fn with_zero_price(mut self, allow: bool) -> Self {
        self.allow_zero_price = allow;
        self
    }

    pub fn with_book_capacity(mut self, capacity: usize) -> Self {
        self.book_capacity = capacity;
        self
    }

    /// Check a submission against the policy.
    pub fn validate(&self, price: u128, amount: u64) -> Result<(), BookError> {
        if amount == 0 && !self.allow_zero_amount {
            return Err(BookError::InvalidOrder { reason: "amount must be non-zero" });
        }
        if price == 0 && !self.allow_zero_price {
            return Err(BookError::InvalidOrder { reason: "price must be non-zero" });
        }
        Ok(())
    }
}
