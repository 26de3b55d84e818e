use crate::formatting::hex_to_bytes;
use dg_xch_serialize::ChiaSerialize;
use hex::encode;
use serde::de::Visitor;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::io::{Cursor, Error as IoError, Read};
use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum SizedBytesError {
    #[error("invalid length for {name}: expected {expected}, got {actual}")]
    InvalidLength {
        name: &'static str,
        expected: usize,
        actual: usize,
    },
    #[error("invalid hex: {0}")]
    InvalidHex(#[from] hex::FromHexError),
}

pub trait SizedBytes: Sized {
    const SIZE: usize;
    fn as_slice(&self) -> &[u8];
    fn is_null(&self) -> bool {
        self.as_slice().iter().all(|v| *v == 0)
    }
}

macro_rules! impl_sized_bytes {
    ($($name: ident, $size:expr, $visitor:ident);*) => {
        $(
            #[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
            pub struct $name {
                pub bytes: [u8; $size]
            }
            impl SizedBytes for $name {
                const SIZE: usize = $size;
                fn as_slice(&self) -> &[u8] {
                    &self.bytes
                }
            }
            impl $name {
                #[must_use]
                pub const fn from_sized_bytes(bytes: [u8; $size]) -> Self {
                    $name { bytes }
                }
                #[must_use]
                pub fn to_sized_bytes(&self) -> &[u8; $size] {
                    &self.bytes
                }
            }

            impl AsRef<[u8]> for $name {
                fn as_ref(&self) -> &[u8] {
                    &self.bytes
                }
            }

            impl From<[u8; $size]> for $name {
                fn from(bytes: [u8; $size]) -> Self {
                    $name::from_sized_bytes(bytes)
                }
            }

            impl From<&[u8; $size]> for $name {
                fn from(bytes: &[u8; $size]) -> Self {
                    $name::from_sized_bytes(*bytes)
                }
            }

            impl TryFrom<&[u8]> for $name {
                type Error = SizedBytesError;

                fn try_from(value: &[u8]) -> Result<Self, Self::Error> {
                    let bytes: [u8; $size] = value.try_into().map_err(|_| {
                        SizedBytesError::InvalidLength {
                            name: stringify!($name),
                            expected: $size,
                            actual: value.len(),
                        }
                    })?;
                    Ok(bytes.into())
                }
            }

            impl FromStr for $name {
                type Err = SizedBytesError;

                fn from_str(hex: &str) -> Result<Self, Self::Err> {
                    let bytes = hex_to_bytes(hex)?;
                    $name::try_from(bytes.as_slice())
                }
            }

            impl Serialize for $name {
                fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
                where
                    S: Serializer,
                {
                    serializer.serialize_str(self.to_string().as_str())
                }
            }

            struct $visitor;

            impl<'de> Visitor<'de> for $visitor {
                type Value = $name;

                fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                    write!(formatter, "a hex string of {} bytes", $size)
                }

                fn visit_str<E>(self, value: &str) -> Result<Self::Value, E>
                where
                    E: serde::de::Error,
                {
                    value.parse().map_err(E::custom)
                }
            }

            impl<'a> Deserialize<'a> for $name {
                fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
                where
                    D: Deserializer<'a>,
                {
                    deserializer.deserialize_str($visitor)
                }
            }

            impl fmt::Display for $name {
                fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                    write!(f, "{}", encode(self.bytes))
                }
            }

            impl fmt::Debug for $name {
                fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                    write!(f, "{}", encode(self.bytes))
                }
            }

            impl Default for $name {
                fn default() -> $name {
                    $name::from([0; $size])
                }
            }

            impl ChiaSerialize for $name {
                fn write_bytes(&self, out: &mut Vec<u8>) {
                    out.extend_from_slice(&self.bytes);
                }
                fn read_bytes<T: AsRef<[u8]>>(bytes: &mut Cursor<T>) -> Result<Self, IoError> {
                    let mut buf = [0u8; $size];
                    bytes.read_exact(&mut buf)?;
                    Ok(buf.into())
                }
            }
        )*
    };
    ()=>{};
}

impl_sized_bytes!(
    Bytes32, 32, Bytes32Visitor;
    Bytes48, 48, Bytes48Visitor
);
