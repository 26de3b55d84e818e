use crate::blockchain::sized_bytes::Bytes32;
use crate::blockchain::spend::{AggSigPair, Spend};
use dg_xch_macros::ChiaSerial;
use dg_xch_serialize::ChiaSerialize;
use serde::{Deserialize, Serialize};

#[derive(ChiaSerial, Clone, PartialEq, Eq, Serialize, Deserialize, Debug, Default)]
pub struct SpendBundleConditions {
    pub spends: Vec<Spend>,
    pub reserve_fee: u64,
    pub height_absolute: u32,
    pub seconds_absolute: u64,
    pub before_height_absolute: Option<u32>,
    pub before_seconds_absolute: Option<u64>,
    pub agg_sig_unsafe: Vec<AggSigPair>,
    pub cost: u64,
    pub removal_amount: u128,
    pub addition_amount: u128,
}
impl SpendBundleConditions {
    /// sha256 of the streamable encoding.
    #[must_use]
    pub fn hash(&self) -> Bytes32 {
        ChiaSerialize::hash(self).into()
    }
    pub fn spend(&self, coin_id: &Bytes32) -> Option<&Spend> {
        self.spends.iter().find(|s| &s.coin_id == coin_id)
    }
    #[must_use]
    pub fn signature_count(&self) -> usize {
        self.agg_sig_unsafe.len()
            + self
                .spends
                .iter()
                .map(|s| {
                    s.agg_sig_me.len()
                        + s.agg_sig_parent.len()
                        + s.agg_sig_puzzle.len()
                        + s.agg_sig_amount.len()
                        + s.agg_sig_puzzle_amount.len()
                        + s.agg_sig_parent_amount.len()
                        + s.agg_sig_parent_puzzle.len()
                })
                .sum::<usize>()
    }
}
