pub mod coin;
pub mod coin_conditions;
pub mod condition_opcode;
pub mod condition_with_args;
pub mod npc_result;
pub mod sized_bytes;
pub mod spend;
pub mod spend_bundle_conditions;
