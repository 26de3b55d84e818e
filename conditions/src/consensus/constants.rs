use crate::blockchain::condition_opcode::ConditionOpcode;
use lazy_static::lazy_static;
use serde::{Deserialize, Serialize};

/// Reject integer arguments with redundant leading sign bytes.
pub const COND_CANON_INTS: u32 = 0x0001_0000;
/// Reject conditions carrying more arguments than they define.
pub const STRICT_ARGS_COUNT: u32 = 0x0008_0000;
/// Recognize the SOFTFORK condition. Without it opcode 90 is unknown.
pub const ENABLE_SOFTFORK_CONDITION: u32 = 0x0040_0000;

pub const CONSENSUS_MODE: u32 = ENABLE_SOFTFORK_CONDITION;
pub const MEMPOOL_MODE: u32 = CONSENSUS_MODE | COND_CANON_INTS | STRICT_ARGS_COUNT;

const fn max_cost() -> u64 {
    11_000_000_000
}
const fn max_coin_amount() -> u64 {
    u64::MAX
}
const fn flags() -> u32 {
    MEMPOOL_MODE
}
const fn agg_sig_cost() -> u64 {
    1_200_000
}
const fn create_coin_cost() -> u64 {
    1_800_000
}
const fn cost_per_byte() -> u64 {
    12_000
}
const fn softfork_cost_unit() -> u64 {
    10_000
}

/// Cost charged per condition class. These are consensus parameters: every
/// node validating the same chain must use the same table.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CostWeights {
    #[serde(default = "agg_sig_cost")]
    pub agg_sig: u64,
    #[serde(default = "create_coin_cost")]
    pub create_coin: u64,
    #[serde(default)]
    pub reserve_fee: u64,
    #[serde(default)]
    pub timelock: u64,
    #[serde(default)]
    pub assertion: u64,
    #[serde(default)]
    pub announcement: u64,
    #[serde(default)]
    pub remark: u64,
    #[serde(default = "cost_per_byte")]
    pub cost_per_byte: u64,
    /// Charged for every byte of a condition's opcode and argument atoms.
    #[serde(default = "cost_per_byte")]
    pub cost_per_condition_byte: u64,
    #[serde(default = "softfork_cost_unit")]
    pub softfork_cost_unit: u64,
}
impl Default for CostWeights {
    fn default() -> Self {
        Self {
            agg_sig: agg_sig_cost(),
            create_coin: create_coin_cost(),
            reserve_fee: 0,
            timelock: 0,
            assertion: 0,
            announcement: 0,
            remark: 0,
            cost_per_byte: cost_per_byte(),
            cost_per_condition_byte: cost_per_byte(),
            softfork_cost_unit: softfork_cost_unit(),
        }
    }
}
impl CostWeights {
    /// Fixed cost of one condition. SOFTFORK has none of its own: it charges
    /// the cost named in its first argument, scaled by `softfork_cost_unit`.
    #[must_use]
    pub fn weight_for(&self, opcode: ConditionOpcode) -> u64 {
        match opcode {
            ConditionOpcode::AggSigParent
            | ConditionOpcode::AggSigPuzzle
            | ConditionOpcode::AggSigAmount
            | ConditionOpcode::AggSigPuzzleAmount
            | ConditionOpcode::AggSigParentAmount
            | ConditionOpcode::AggSigParentPuzzle
            | ConditionOpcode::AggSigUnsafe
            | ConditionOpcode::AggSigMe => self.agg_sig,
            ConditionOpcode::AssertSecondsRelative
            | ConditionOpcode::AssertSecondsAbsolute
            | ConditionOpcode::AssertHeightRelative
            | ConditionOpcode::AssertHeightAbsolute
            | ConditionOpcode::AssertBeforeSecondsRelative
            | ConditionOpcode::AssertBeforeSecondsAbsolute
            | ConditionOpcode::AssertBeforeHeightRelative
            | ConditionOpcode::AssertBeforeHeightAbsolute => self.timelock,
            ConditionOpcode::CreateCoin => self.create_coin,
            ConditionOpcode::ReserveFee => self.reserve_fee,
            ConditionOpcode::AssertMyCoinId
            | ConditionOpcode::AssertMyParentId
            | ConditionOpcode::AssertMyPuzzlehash
            | ConditionOpcode::AssertMyAmount
            | ConditionOpcode::AssertMyBirthSeconds
            | ConditionOpcode::AssertMyBirthHeight
            | ConditionOpcode::AssertEphemeral => self.assertion,
            ConditionOpcode::CreateCoinAnnouncement
            | ConditionOpcode::AssertCoinAnnouncement
            | ConditionOpcode::CreatePuzzleAnnouncement
            | ConditionOpcode::AssertPuzzleAnnouncement
            | ConditionOpcode::AssertConcurrentSpend
            | ConditionOpcode::AssertConcurrentPuzzle
            | ConditionOpcode::SendMessage
            | ConditionOpcode::ReceiveMessage => self.announcement,
            ConditionOpcode::Remark => self.remark,
            ConditionOpcode::SoftFork => 0,
        }
    }
}

/// Consensus parameters consumed by a validation pass.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationConfig {
    #[serde(default = "max_cost")]
    pub max_cost: u64,
    #[serde(default = "max_coin_amount")]
    pub max_coin_amount: u64,
    #[serde(default)]
    pub cost_weights: CostWeights,
    #[serde(default = "flags")]
    pub flags: u32,
}
impl Default for ValidationConfig {
    fn default() -> Self {
        MAINNET.clone()
    }
}
impl ValidationConfig {
    #[must_use]
    pub fn with_max_cost(mut self, max_cost: u64) -> Self {
        self.max_cost = max_cost;
        self
    }
    #[must_use]
    pub fn with_condition_byte_cost(mut self, cost_per_condition_byte: u64) -> Self {
        self.cost_weights.cost_per_condition_byte = cost_per_condition_byte;
        self
    }
    #[must_use]
    pub fn with_flags(mut self, flags: u32) -> Self {
        self.flags = flags;
        self
    }
    #[must_use]
    pub fn has_flag(&self, flag: u32) -> bool {
        self.flags & flag != 0
    }
}

lazy_static! {
    pub static ref MAINNET: ValidationConfig = ValidationConfig {
        max_cost: max_cost(),
        max_coin_amount: max_coin_amount(),
        cost_weights: CostWeights::default(),
        flags: MEMPOOL_MODE,
    };
    pub static ref MAINNET_CONSENSUS: ValidationConfig = ValidationConfig {
        flags: CONSENSUS_MODE,
        ..MAINNET.clone()
    };
}
