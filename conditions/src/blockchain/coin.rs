use crate::blockchain::sized_bytes::Bytes32;
use crate::formatting::u64_to_bytes;
use dg_xch_macros::ChiaSerial;
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

#[derive(ChiaSerial, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Debug)]
pub struct Coin {
    pub parent_coin_info: Bytes32,
    pub puzzle_hash: Bytes32,
    pub amount: u64,
}
impl Coin {
    #[must_use]
    pub fn new(parent_coin_info: Bytes32, puzzle_hash: Bytes32, amount: u64) -> Self {
        Self {
            parent_coin_info,
            puzzle_hash,
            amount,
        }
    }
    /// sha256 of parent, puzzle hash and the minimal CLVM encoding of the amount.
    #[must_use]
    pub fn coin_id(&self) -> Bytes32 {
        let mut hasher = Sha256::new();
        hasher.update(self.parent_coin_info);
        hasher.update(self.puzzle_hash);
        hasher.update(u64_to_bytes(self.amount));
        let id: [u8; 32] = hasher.finalize().into();
        id.into()
    }
}
