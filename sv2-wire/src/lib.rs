//! Owned Sv2 wire datatypes and their binary encoding.
//!
//! Every Sv2 message payload is a flat sequence of fields, each one either a
//! fixed-width little-endian integer or a length-prefixed byte string. This
//! crate provides the datatypes for those fields and the
//! [`Serialize`]/[`Deserialize`] traits that turn them into wire bytes and
//! back.
//!
//! Size bounds are enforced when a value is constructed (`TryFrom`), so
//! serializing an owned value can not fail. Deserialization goes through a
//! cursor [`Reader`]; a top level [`from_bytes`] additionally requires the
//! input to be consumed exactly, which is what makes trailing garbage after a
//! payload a decode error instead of silently ignored bytes.

use core::fmt;

mod datatypes;
mod reader;

pub use datatypes::{Seq0255, Seq064K, Str0255, B016M, B0255, B064K, U24, U256};
pub use reader::Reader;

/// Failure conditions while encoding or decoding wire data.
#[derive(Debug, PartialEq, Eq, Clone)]
pub enum Error {
    /// An attempt to read beyond the end of the input.
    OutOfBound,
    /// A byte other than 0 or 1 interpreted as a boolean.
    NotABool(u8),
    /// A `u32` exceeding the maximum `U24` value.
    U24TooBig(u32),
    /// A `U256` built from a slice that is not 32 bytes long.
    InvalidU256(usize),
    /// A byte string longer than its type allows.
    ValueExceedsMaxSize { max: usize, actual: usize },
    /// A sequence with more elements than its type allows.
    SeqExceedsMaxSize { max: usize, actual: usize },
    /// Bytes left over after a complete value was decoded.
    LeftoverBytes(usize),
    /// A protocol discriminant outside the four known sub-protocols.
    ValueIsNotAValidProtocol(u8),
    /// A message type code outside the known registry.
    UnknownMessageType(u8),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use Error::*;
        match self {
            OutOfBound => write!(f, "attempt to read beyond the input"),
            NotABool(b) => write!(f, "`{}` is not a valid boolean", b),
            U24TooBig(v) => write!(f, "`{}` does not fit in a U24", v),
            InvalidU256(l) => write!(f, "U256 requires 32 bytes, got `{}`", l),
            ValueExceedsMaxSize { max, actual } => {
                write!(f, "value of `{}` bytes exceeds the maximum of `{}`", actual, max)
            }
            SeqExceedsMaxSize { max, actual } => {
                write!(f, "sequence of `{}` elements exceeds the maximum of `{}`", actual, max)
            }
            LeftoverBytes(n) => write!(f, "`{}` bytes left over after decoding", n),
            ValueIsNotAValidProtocol(p) => write!(f, "`{}` is not a valid protocol", p),
            UnknownMessageType(t) => write!(f, "unknown message type `{}`", t),
        }
    }
}

/// Encodes a value into wire bytes.
///
/// Implementations are infallible: any size bound was already checked when
/// the value was built.
pub trait Serialize {
    /// Exact size of the encoded value in bytes.
    fn get_size(&self) -> usize;

    /// Appends the encoded value to `dst`.
    fn serialize(&self, dst: &mut Vec<u8>);
}

/// Decodes a value from wire bytes read through a [`Reader`].
pub trait Deserialize: Sized {
    fn deserialize(reader: &mut Reader<'_>) -> Result<Self, Error>;
}

/// Encodes `src` into a freshly allocated byte vector.
pub fn to_bytes<T: Serialize>(src: &T) -> Vec<u8> {
    let mut dst = Vec::with_capacity(src.get_size());
    src.serialize(&mut dst);
    dst
}

/// Decodes a value from `data`, requiring the input to be consumed exactly.
pub fn from_bytes<T: Deserialize>(data: &[u8]) -> Result<T, Error> {
    let mut reader = Reader::new(data);
    let value = T::deserialize(&mut reader)?;
    reader.finish()?;
    Ok(value)
}
