use crate::blockchain::sized_bytes::Bytes32;
use crate::validation::decoder::DecodedSpend;
use crate::validation::errors::ValidationError;
use std::collections::HashSet;

/// Decoded spends in submission order, each coin at most once.
#[derive(Debug, Default)]
pub struct SpendAccumulator {
    spends: Vec<DecodedSpend>,
    seen: HashSet<Bytes32>,
}
impl SpendAccumulator {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            spends: Vec::with_capacity(capacity),
            seen: HashSet::with_capacity(capacity),
        }
    }
    pub fn push(&mut self, decoded: DecodedSpend) -> Result<(), ValidationError> {
        let coin_id = decoded.spend.coin_id;
        if !self.seen.insert(coin_id) {
            return Err(ValidationError::DuplicateCoin { coin_id });
        }
        self.spends.push(decoded);
        Ok(())
    }
    #[must_use]
    pub fn len(&self) -> usize {
        self.spends.len()
    }
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.spends.is_empty()
    }
    #[must_use]
    pub fn into_spends(self) -> Vec<DecodedSpend> {
        self.spends
    }
}
