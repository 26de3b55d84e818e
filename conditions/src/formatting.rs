use hex::{decode, FromHexError};
use num_bigint::BigInt;

#[must_use]
pub fn prep_hex_str<S: AsRef<str>>(to_fix: S) -> String {
    let lc = to_fix.as_ref().to_lowercase();
    if let Some(s) = lc.strip_prefix("0x") {
        s.to_string()
    } else {
        lc
    }
}

pub fn hex_to_bytes<S: AsRef<str>>(hex: S) -> Result<Vec<u8>, FromHexError> {
    decode(prep_hex_str(hex))
}

/// Interprets an atom as a CLVM integer (big-endian two's complement, empty is zero).
#[must_use]
pub fn number_from_slice(v: &[u8]) -> BigInt {
    if v.is_empty() {
        0.into()
    } else {
        BigInt::from_signed_bytes_be(v)
    }
}

/// An atom is a canonical integer when it carries no redundant sign byte.
#[must_use]
pub fn is_canonical_int(v: &[u8]) -> bool {
    match v {
        [0x00] => false,
        [0x00, next, ..] => next & 0x80 != 0,
        [0xff, next, ..] => next & 0x80 == 0,
        _ => true,
    }
}

/// Minimal CLVM encoding of an unsigned value.
#[must_use]
pub fn u64_to_bytes(v: u64) -> Vec<u8> {
    if v == 0 {
        return vec![];
    }
    let bytes = v.to_be_bytes();
    let first = (v.leading_zeros() / 8) as usize;
    let mut rtn = Vec::with_capacity(9 - first);
    if bytes[first] & 0x80 != 0 {
        rtn.push(0);
    }
    rtn.extend_from_slice(&bytes[first..]);
    rtn
}
