use bytes::Buf;
use log::debug;
use sha2::{Digest, Sha256};
use std::io::{Cursor, Error, ErrorKind, Read};

const LARGE_LIST_WARNING: u32 = 2048;

pub fn hash_256(input: impl AsRef<[u8]>) -> [u8; 32] {
    let mut hasher = Sha256::new();
    hasher.update(input);
    hasher.finalize().into()
}

/// Streamable encoding: big-endian integers, `u32` length prefixes for lists
/// and a one byte presence marker for optionals. The encoding is canonical, so
/// equal values always produce equal bytes and equal hashes.
pub trait ChiaSerialize {
    fn write_bytes(&self, out: &mut Vec<u8>);
    fn read_bytes<T: AsRef<[u8]>>(bytes: &mut Cursor<T>) -> Result<Self, Error>
    where
        Self: Sized;

    fn to_bytes(&self) -> Vec<u8> {
        let mut out = Vec::new();
        self.write_bytes(&mut out);
        out
    }

    /// Parses a complete buffer, trailing bytes are an error.
    fn from_bytes(buf: &[u8]) -> Result<Self, Error>
    where
        Self: Sized,
    {
        let mut cursor = Cursor::new(buf);
        let value = Self::read_bytes(&mut cursor)?;
        if cursor.has_remaining() {
            return Err(Error::new(
                ErrorKind::InvalidData,
                format!("{} trailing bytes after value", cursor.remaining()),
            ));
        }
        Ok(value)
    }

    fn hash(&self) -> [u8; 32] {
        hash_256(self.to_bytes())
    }
}

fn read_length<T: AsRef<[u8]>>(bytes: &mut Cursor<T>) -> Result<usize, Error> {
    let len = u32::read_bytes(bytes)?;
    if len > LARGE_LIST_WARNING {
        debug!("Parsing large list: {len}");
    }
    let len = len as usize;
    if len > bytes.remaining() {
        return Err(Error::new(
            ErrorKind::InvalidData,
            format!(
                "Declared length {len} exceeds remaining input {}",
                bytes.remaining()
            ),
        ));
    }
    Ok(len)
}

impl ChiaSerialize for String {
    fn write_bytes(&self, out: &mut Vec<u8>) {
        (self.len() as u32).write_bytes(out);
        out.extend_from_slice(self.as_bytes());
    }
    fn read_bytes<T: AsRef<[u8]>>(bytes: &mut Cursor<T>) -> Result<Self, Error> {
        let len = read_length(bytes)?;
        let mut buf = vec![0u8; len];
        bytes.read_exact(&mut buf)?;
        String::from_utf8(buf).map_err(|e| {
            Error::new(
                ErrorKind::InvalidInput,
                format!("Failed to parse Utf-8 String from Bytes: {e:?}"),
            )
        })
    }
}

impl ChiaSerialize for bool {
    fn write_bytes(&self, out: &mut Vec<u8>) {
        out.push(u8::from(*self));
    }
    fn read_bytes<T: AsRef<[u8]>>(bytes: &mut Cursor<T>) -> Result<Self, Error> {
        match u8::read_bytes(bytes)? {
            0 => Ok(false),
            1 => Ok(true),
            v => Err(Error::new(
                ErrorKind::InvalidInput,
                format!("Failed to parse bool, invalid value: {v}"),
            )),
        }
    }
}

impl<T: ChiaSerialize> ChiaSerialize for Option<T> {
    fn write_bytes(&self, out: &mut Vec<u8>) {
        match self {
            Some(t) => {
                out.push(1u8);
                t.write_bytes(out);
            }
            None => out.push(0u8),
        }
    }
    fn read_bytes<B: AsRef<[u8]>>(bytes: &mut Cursor<B>) -> Result<Self, Error> {
        if bool::read_bytes(bytes)? {
            Ok(Some(T::read_bytes(bytes)?))
        } else {
            Ok(None)
        }
    }
}

impl<T: ChiaSerialize, U: ChiaSerialize> ChiaSerialize for (T, U) {
    fn write_bytes(&self, out: &mut Vec<u8>) {
        self.0.write_bytes(out);
        self.1.write_bytes(out);
    }
    fn read_bytes<B: AsRef<[u8]>>(bytes: &mut Cursor<B>) -> Result<Self, Error> {
        Ok((T::read_bytes(bytes)?, U::read_bytes(bytes)?))
    }
}

impl<T: ChiaSerialize, U: ChiaSerialize, V: ChiaSerialize> ChiaSerialize for (T, U, V) {
    fn write_bytes(&self, out: &mut Vec<u8>) {
        self.0.write_bytes(out);
        self.1.write_bytes(out);
        self.2.write_bytes(out);
    }
    fn read_bytes<B: AsRef<[u8]>>(bytes: &mut Cursor<B>) -> Result<Self, Error> {
        Ok((
            T::read_bytes(bytes)?,
            U::read_bytes(bytes)?,
            V::read_bytes(bytes)?,
        ))
    }
}

impl<T: ChiaSerialize> ChiaSerialize for Vec<T> {
    fn write_bytes(&self, out: &mut Vec<u8>) {
        (self.len() as u32).write_bytes(out);
        for e in self {
            e.write_bytes(out);
        }
    }
    fn read_bytes<B: AsRef<[u8]>>(bytes: &mut Cursor<B>) -> Result<Self, Error> {
        let len = read_length(bytes)?;
        (0..len).try_fold(Vec::with_capacity(len), |mut vec, _| {
            vec.push(T::read_bytes(bytes)?);
            Ok(vec)
        })
    }
}

macro_rules! impl_primitives {
    ($($name: ident, $size:expr);*) => {
        $(
            impl ChiaSerialize for $name {
                fn write_bytes(&self, out: &mut Vec<u8>) {
                    out.extend_from_slice(&self.to_be_bytes());
                }
                fn read_bytes<T: AsRef<[u8]>>(bytes: &mut Cursor<T>) -> Result<Self, Error> {
                    if bytes.remaining() < $size {
                        Err(Error::new(
                            ErrorKind::InvalidInput,
                            format!(
                                "Failed to parse {}, expected length {}, found {}",
                                stringify!($name),
                                $size,
                                bytes.remaining()
                            ),
                        ))
                    } else {
                        let mut buffer: [u8; $size] = [0; $size];
                        bytes.read_exact(&mut buffer)?;
                        Ok($name::from_be_bytes(buffer))
                    }
                }
            }
        )*
    };
    ()=>{};
}
impl_primitives!(
    i8, 1;
    i16, 2;
    i32, 4;
    i64, 8;
    i128, 16;
    u8, 1;
    u16, 2;
    u32, 4;
    u64, 8;
    u128, 16
);
