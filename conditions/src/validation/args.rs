use crate::blockchain::condition_opcode::ConditionOpcode;
use crate::blockchain::sized_bytes::{Bytes32, Bytes48};
use crate::formatting::{is_canonical_int, number_from_slice};
use crate::validation::errors::ValidationError;

pub const MAX_MESSAGE_LENGTH: usize = 1024;

/// Largest integer atom rendered in full inside error messages.
const MAX_DISPLAYED_INT_BYTES: usize = 32;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SanitizedUint {
    Ok(u64),
    PositiveOverflow,
    NegativeOverflow,
}

/// Classifies an integer atom against `[0, max]` without materializing
/// arbitrarily large numbers.
#[must_use]
pub fn sanitize_uint(atom: &[u8], max: u64) -> SanitizedUint {
    if atom.first().is_some_and(|b| b & 0x80 != 0) {
        return SanitizedUint::NegativeOverflow;
    }
    let start = atom.iter().position(|b| *b != 0).unwrap_or(atom.len());
    let significant = &atom[start..];
    if significant.len() > 8 {
        return SanitizedUint::PositiveOverflow;
    }
    let mut buf = [0u8; 8];
    buf[8 - significant.len()..].copy_from_slice(significant);
    let value = u64::from_be_bytes(buf);
    if value > max {
        SanitizedUint::PositiveOverflow
    } else {
        SanitizedUint::Ok(value)
    }
}

#[must_use]
pub fn display_int(atom: &[u8]) -> String {
    if atom.len() > MAX_DISPLAYED_INT_BYTES {
        format!("<{} byte integer>", atom.len())
    } else {
        number_from_slice(atom).to_string()
    }
}

/// Typed access to the arguments of one condition.
pub struct ConditionArgs<'a> {
    pub coin_id: Bytes32,
    pub opcode: ConditionOpcode,
    vars: &'a [Vec<u8>],
    strict: bool,
    canonical: bool,
}
impl<'a> ConditionArgs<'a> {
    #[must_use]
    pub fn new(
        coin_id: Bytes32,
        opcode: ConditionOpcode,
        vars: &'a [Vec<u8>],
        strict: bool,
        canonical: bool,
    ) -> Self {
        Self {
            coin_id,
            opcode,
            vars,
            strict,
            canonical,
        }
    }
    pub fn malformed(&self, reason: impl Into<String>) -> ValidationError {
        ValidationError::MalformedCondition {
            coin_id: self.coin_id,
            opcode: self.opcode,
            reason: reason.into(),
        }
    }
    pub fn assertion_failed(&self) -> ValidationError {
        ValidationError::AssertionFailed {
            coin_id: self.coin_id,
            opcode: self.opcode,
        }
    }
    pub fn impossible(&self) -> ValidationError {
        ValidationError::ImpossibleConstraint {
            coin_id: Some(self.coin_id),
            opcode: self.opcode,
        }
    }
    /// Too few arguments is always malformed, too many only in strict mode.
    pub fn expect_count(&self, min: usize, max: Option<usize>) -> Result<(), ValidationError> {
        if self.vars.len() < min {
            return Err(self.malformed(format!(
                "expected at least {min} argument{}, got {}",
                if min == 1 { "" } else { "s" },
                self.vars.len()
            )));
        }
        match max {
            Some(max) if self.strict && self.vars.len() > max => Err(self.malformed(format!(
                "expected at most {max} argument{}, got {}",
                if max == 1 { "" } else { "s" },
                self.vars.len()
            ))),
            _ => Ok(()),
        }
    }
    pub fn atom(&self, index: usize) -> Result<&'a [u8], ValidationError> {
        self.vars
            .get(index)
            .map(Vec::as_slice)
            .ok_or_else(|| self.malformed(format!("missing argument {index}")))
    }
    #[must_use]
    pub fn optional_atom(&self, index: usize) -> Option<&'a [u8]> {
        self.vars.get(index).map(Vec::as_slice)
    }
    pub fn bytes32(&self, index: usize) -> Result<Bytes32, ValidationError> {
        Bytes32::try_from(self.atom(index)?).map_err(|e| self.malformed(e.to_string()))
    }
    pub fn public_key(&self, index: usize) -> Result<Bytes48, ValidationError> {
        Bytes48::try_from(self.atom(index)?).map_err(|e| self.malformed(e.to_string()))
    }
    pub fn message(&self, index: usize) -> Result<Vec<u8>, ValidationError> {
        let atom = self.atom(index)?;
        if atom.len() > MAX_MESSAGE_LENGTH {
            Err(self.malformed(format!(
                "message is {} bytes, limit is {MAX_MESSAGE_LENGTH}",
                atom.len()
            )))
        } else {
            Ok(atom.to_vec())
        }
    }
    /// An integer atom, rejecting redundant sign bytes when canonical
    /// integers are enforced.
    pub fn int_atom(&self, index: usize) -> Result<&'a [u8], ValidationError> {
        let atom = self.atom(index)?;
        if self.canonical && !is_canonical_int(atom) {
            Err(self.malformed(format!("argument {index} is not a canonical integer")))
        } else {
            Ok(atom)
        }
    }
    pub fn uint(&self, index: usize, max: u64) -> Result<SanitizedUint, ValidationError> {
        Ok(sanitize_uint(self.int_atom(index)?, max))
    }
}
