use crate::blockchain::coin::Coin;
use crate::blockchain::condition_with_args::ConditionWithArgs;
use crate::blockchain::sized_bytes::Bytes32;
use dg_xch_macros::ChiaSerial;
use serde::{Deserialize, Serialize};

/// The interpreter's output for one coin being spent.
///
/// `execution_cost` is the cost the interpreter reported for running the
/// puzzle, `program_size` the serialized length of puzzle and solution. Both
/// are charged to the bundle before any of the conditions.
#[derive(ChiaSerial, Clone, PartialEq, Eq, Serialize, Deserialize, Debug)]
pub struct CoinConditions {
    pub coin: Coin,
    pub conditions: Vec<ConditionWithArgs>,
    #[serde(default)]
    pub execution_cost: u64,
    #[serde(default)]
    pub program_size: u64,
}
impl CoinConditions {
    #[must_use]
    pub fn new(coin: Coin, conditions: Vec<ConditionWithArgs>) -> Self {
        Self {
            coin,
            conditions,
            execution_cost: 0,
            program_size: 0,
        }
    }
    #[must_use]
    pub fn with_execution_cost(mut self, execution_cost: u64, program_size: u64) -> Self {
        self.execution_cost = execution_cost;
        self.program_size = program_size;
        self
    }
    #[must_use]
    pub fn coin_id(&self) -> Bytes32 {
        self.coin.coin_id()
    }
}
