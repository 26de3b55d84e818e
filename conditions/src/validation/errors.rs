use crate::blockchain::condition_opcode::ConditionOpcode;
use crate::blockchain::sized_bytes::Bytes32;
use hex::encode;
use std::io::{Error as IoError, ErrorKind};
use thiserror::Error;

pub const ERR_MALFORMED_CONDITION: u16 = 1;
pub const ERR_DUPLICATE_COIN: u16 = 2;
pub const ERR_COST_EXCEEDED: u16 = 3;
pub const ERR_FEE_OVERFLOW: u16 = 4;
pub const ERR_AMOUNT_OVERFLOW: u16 = 5;
pub const ERR_UNKNOWN_OPCODE: u16 = 6;
pub const ERR_DUPLICATE_OUTPUT: u16 = 7;
pub const ERR_ASSERTION_FAILED: u16 = 8;
pub const ERR_IMPOSSIBLE_CONSTRAINT: u16 = 9;

/// Every failure aborts validation of the whole bundle.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("malformed {opcode:?} condition on coin {coin_id}: {reason}")]
    MalformedCondition {
        coin_id: Bytes32,
        opcode: ConditionOpcode,
        reason: String,
    },
    #[error("coin {coin_id} is spent more than once")]
    DuplicateCoin { coin_id: Bytes32 },
    #[error("cost {cost} exceeds maximum {max_cost}")]
    CostExceeded { cost: u64, max_cost: u64 },
    #[error("reserve fee total overflows at coin {coin_id}")]
    FeeOverflow { coin_id: Bytes32 },
    #[error("amount {amount} exceeds the maximum (coin {coin_id:?})")]
    AmountOverflow {
        coin_id: Option<Bytes32>,
        amount: String,
    },
    #[error("unknown condition opcode 0x{} on coin {coin_id}", encode(.opcode))]
    UnknownOpcode { coin_id: Bytes32, opcode: Vec<u8> },
    #[error("coin {coin_id} creates ({puzzle_hash}, {amount}) more than once")]
    DuplicateOutput {
        coin_id: Bytes32,
        puzzle_hash: Bytes32,
        amount: u64,
    },
    #[error("{opcode:?} failed on coin {coin_id}")]
    AssertionFailed {
        coin_id: Bytes32,
        opcode: ConditionOpcode,
    },
    #[error("{opcode:?} can never be satisfied (coin {coin_id:?})")]
    ImpossibleConstraint {
        coin_id: Option<Bytes32>,
        opcode: ConditionOpcode,
    },
}
impl ValidationError {
    #[must_use]
    pub fn code(&self) -> u16 {
        match self {
            ValidationError::MalformedCondition { .. } => ERR_MALFORMED_CONDITION,
            ValidationError::DuplicateCoin { .. } => ERR_DUPLICATE_COIN,
            ValidationError::CostExceeded { .. } => ERR_COST_EXCEEDED,
            ValidationError::FeeOverflow { .. } => ERR_FEE_OVERFLOW,
            ValidationError::AmountOverflow { .. } => ERR_AMOUNT_OVERFLOW,
            ValidationError::UnknownOpcode { .. } => ERR_UNKNOWN_OPCODE,
            ValidationError::DuplicateOutput { .. } => ERR_DUPLICATE_OUTPUT,
            ValidationError::AssertionFailed { .. } => ERR_ASSERTION_FAILED,
            ValidationError::ImpossibleConstraint { .. } => ERR_IMPOSSIBLE_CONSTRAINT,
        }
    }
    /// The coin the failure is attributed to, when there is one.
    #[must_use]
    pub fn coin_id(&self) -> Option<Bytes32> {
        match self {
            ValidationError::MalformedCondition { coin_id, .. }
            | ValidationError::DuplicateCoin { coin_id }
            | ValidationError::FeeOverflow { coin_id }
            | ValidationError::UnknownOpcode { coin_id, .. }
            | ValidationError::DuplicateOutput { coin_id, .. }
            | ValidationError::AssertionFailed { coin_id, .. } => Some(*coin_id),
            ValidationError::AmountOverflow { coin_id, .. }
            | ValidationError::ImpossibleConstraint { coin_id, .. } => *coin_id,
            ValidationError::CostExceeded { .. } => None,
        }
    }
}
impl From<ValidationError> for IoError {
    fn from(value: ValidationError) -> Self {
        IoError::new(ErrorKind::InvalidData, value)
    }
}
