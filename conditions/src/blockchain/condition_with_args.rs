use crate::blockchain::condition_opcode::ConditionOpcode;
use dg_xch_macros::ChiaSerial;
use hex::encode;
use serde::{Deserialize, Serialize};
use std::fmt;

/// One raw condition as produced by the puzzle interpreter: the opcode atom
/// followed by its argument atoms.
#[derive(ChiaSerial, Clone, PartialEq, Eq, Serialize, Deserialize, Debug)]
pub struct ConditionWithArgs {
    pub opcode: Vec<u8>,
    pub vars: Vec<Vec<u8>>,
}
impl ConditionWithArgs {
    #[must_use]
    pub fn new(opcode: ConditionOpcode, vars: Vec<Vec<u8>>) -> Self {
        Self {
            opcode: vec![opcode as u8],
            vars,
        }
    }
    #[must_use]
    pub fn raw(opcode: &[u8], vars: Vec<Vec<u8>>) -> Self {
        Self {
            opcode: opcode.to_vec(),
            vars,
        }
    }
    /// Bytes of the opcode atom plus every argument atom.
    #[must_use]
    pub fn byte_len(&self) -> u64 {
        let vars: usize = self.vars.iter().map(Vec::len).sum();
        (self.opcode.len() + vars) as u64
    }
    #[must_use]
    pub fn condition_opcode(&self) -> Option<ConditionOpcode> {
        ConditionOpcode::from_atom(&self.opcode)
    }
}
impl fmt::Display for ConditionWithArgs {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.condition_opcode() {
            Some(op) => write!(f, "({op:?}")?,
            None => write!(f, "(0x{}", encode(&self.opcode))?,
        }
        for var in &self.vars {
            write!(f, " 0x{}", encode(var))?;
        }
        write!(f, ")")
    }
}
