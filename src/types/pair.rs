//! Trading pair metadata.

use std::fmt;

/// Identifier issued by the registry when a pair is created. Starts at 1.
pub type PairId = u64;

/// A market between two opaque token identifiers.
///
/// Pairs are immutable once created and carry no uniqueness guarantee:
/// registering the same tokens twice yields two independent books.
///
/// ```
/// use pair_book::types::TradingPair;
///
/// let pair = TradingPair::new(b"\x01\x02".to_vec(), b"\xff".to_vec());
/// assert_eq!(pair.to_string(), "0102/ff");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TradingPair {
    base: Vec<u8>,
    quote: Vec<u8>,
}

impl TradingPair {
    pub fn new(base: impl Into<Vec<u8>>, quote: impl Into<Vec<u8>>) -> Self {
        Self {
            base: base.into(),
            quote: quote.into(),
        }
    }

    /// First token of the pair
    pub fn base(&self) -> &[u8] {
        &self.base
    }

    /// Second token of the pair
    pub fn quote(&self) -> &[u8] {
        &self.quote
    }
}

impl fmt::Display for TradingPair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", hex::encode(&self.base), hex::encode(&self.quote))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pair_accessors() {
        let pair = TradingPair::new(b"BTC".to_vec(), b"USDC".to_vec());

        assert_eq!(pair.base(), b"BTC");
        assert_eq!(pair.quote(), b"USDC");
    }

    #[test]
    fn test_pair_display_hex() {
        let pair = TradingPair::new(vec![0xde, 0xad], vec![]);
        assert_eq!(pair.to_string(), "dead/");
    }

    #[test]
    fn test_identical_pairs_compare_equal() {
        let a = TradingPair::new(b"ETH".to_vec(), b"DAI".to_vec());
        let b = TradingPair::new(b"ETH".to_vec(), b"DAI".to_vec());
        assert_eq!(a, b);
    }
}
