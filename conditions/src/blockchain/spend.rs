use crate::blockchain::coin::Coin;
use crate::blockchain::sized_bytes::{Bytes32, Bytes48};
use dg_xch_macros::ChiaSerial;
use serde::{Deserialize, Serialize};

/// Set on a [`Spend`] whose conditions included ASSERT_EPHEMERAL.
pub const ASSERT_EPHEMERAL_FLAG: u32 = 0x1;

/// A public key and the message it must sign.
pub type AggSigPair = (Bytes48, Vec<u8>);

#[derive(ChiaSerial, Clone, PartialEq, Eq, Serialize, Deserialize, Debug)]
pub struct Spend {
    pub coin_id: Bytes32,
    pub parent_id: Bytes32,
    pub puzzle_hash: Bytes32,
    pub coin_amount: u64,
    pub height_relative: Option<u32>,
    pub seconds_relative: u64,
    pub before_height_relative: Option<u32>,
    pub before_seconds_relative: Option<u64>,
    pub birth_height: Option<u32>,
    pub birth_seconds: Option<u64>,
    pub create_coin: Vec<NewCoin>,
    pub agg_sig_me: Vec<AggSigPair>,
    pub agg_sig_parent: Vec<AggSigPair>,
    pub agg_sig_puzzle: Vec<AggSigPair>,
    pub agg_sig_amount: Vec<AggSigPair>,
    pub agg_sig_puzzle_amount: Vec<AggSigPair>,
    pub agg_sig_parent_amount: Vec<AggSigPair>,
    pub agg_sig_parent_puzzle: Vec<AggSigPair>,
    pub flags: u32,
}
impl Spend {
    /// An empty record for `coin`, before any of its conditions are applied.
    #[must_use]
    pub fn new(coin: &Coin) -> Self {
        Self {
            coin_id: coin.coin_id(),
            parent_id: coin.parent_coin_info,
            puzzle_hash: coin.puzzle_hash,
            coin_amount: coin.amount,
            height_relative: None,
            seconds_relative: 0,
            before_height_relative: None,
            before_seconds_relative: None,
            birth_height: None,
            birth_seconds: None,
            create_coin: vec![],
            agg_sig_me: vec![],
            agg_sig_parent: vec![],
            agg_sig_puzzle: vec![],
            agg_sig_amount: vec![],
            agg_sig_puzzle_amount: vec![],
            agg_sig_parent_amount: vec![],
            agg_sig_parent_puzzle: vec![],
            flags: 0,
        }
    }
    #[must_use]
    pub fn addition_amount(&self) -> u128 {
        self.create_coin.iter().map(|c| u128::from(c.amount)).sum()
    }
    #[must_use]
    pub fn additions(&self) -> Vec<Coin> {
        self.create_coin
            .iter()
            .map(|c| Coin::new(self.coin_id, c.puzzle_hash, c.amount))
            .collect()
    }
    #[must_use]
    pub fn is_ephemeral_asserted(&self) -> bool {
        self.flags & ASSERT_EPHEMERAL_FLAG != 0
    }
}

#[derive(ChiaSerial, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Debug)]
pub struct NewCoin {
    pub puzzle_hash: Bytes32,
    pub amount: u64,
    pub memo: Option<Vec<u8>>,
}
