//! Builders shared by the integration tests.

use dg_xch_conditions::blockchain::coin::Coin;
use dg_xch_conditions::blockchain::coin_conditions::CoinConditions;
use dg_xch_conditions::blockchain::condition_opcode::ConditionOpcode;
use dg_xch_conditions::blockchain::condition_with_args::ConditionWithArgs;
use dg_xch_conditions::blockchain::sized_bytes::{Bytes32, Bytes48};
use dg_xch_conditions::consensus::constants::{ValidationConfig, MAINNET};
use dg_xch_conditions::formatting::u64_to_bytes;
use simple_logger::SimpleLogger;
use std::sync::Once;

static LOGGER: Once = Once::new();

pub fn init_logger() {
    LOGGER.call_once(|| {
        SimpleLogger::new().env().init().unwrap();
    });
}

/// Mainnet parameters with condition bytes uncharged, so a bundle costs
/// exactly the sum of its condition weights.
pub fn unmetered_bytes() -> ValidationConfig {
    MAINNET.clone().with_condition_byte_cost(0)
}

pub fn puzzle_hash(seed: u8) -> Bytes32 {
    Bytes32::from([seed; 32])
}

pub fn coin(seed: u8, amount: u64) -> Coin {
    Coin::new(Bytes32::from([seed; 32]), puzzle_hash(0xee), amount)
}

pub fn spend(seed: u8, conditions: Vec<ConditionWithArgs>) -> CoinConditions {
    CoinConditions::new(coin(seed, 1_000_000), conditions)
}

pub fn int_condition(opcode: ConditionOpcode, value: u64) -> ConditionWithArgs {
    ConditionWithArgs::new(opcode, vec![u64_to_bytes(value)])
}

pub fn height_relative(height: u64) -> ConditionWithArgs {
    int_condition(ConditionOpcode::AssertHeightRelative, height)
}

pub fn height_absolute(height: u64) -> ConditionWithArgs {
    int_condition(ConditionOpcode::AssertHeightAbsolute, height)
}

pub fn seconds_absolute(seconds: u64) -> ConditionWithArgs {
    int_condition(ConditionOpcode::AssertSecondsAbsolute, seconds)
}

pub fn reserve_fee(fee: u64) -> ConditionWithArgs {
    int_condition(ConditionOpcode::ReserveFee, fee)
}

pub fn create_coin(puzzle_hash: Bytes32, amount: u64) -> ConditionWithArgs {
    ConditionWithArgs::new(
        ConditionOpcode::CreateCoin,
        vec![puzzle_hash.to_sized_bytes().to_vec(), u64_to_bytes(amount)],
    )
}

pub fn agg_sig(opcode: ConditionOpcode, key_seed: u8, message: &[u8]) -> ConditionWithArgs {
    ConditionWithArgs::new(
        opcode,
        vec![Bytes48::from([key_seed; 48]).to_sized_bytes().to_vec(), message.to_vec()],
    )
}
