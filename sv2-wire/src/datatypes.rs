use crate::{Deserialize, Error, Reader, Serialize};
use core::convert::TryFrom;

impl Serialize for u8 {
    fn get_size(&self) -> usize {
        1
    }

    fn serialize(&self, dst: &mut Vec<u8>) {
        dst.push(*self);
    }
}

impl Deserialize for u8 {
    fn deserialize(reader: &mut Reader<'_>) -> Result<Self, Error> {
        reader.read_u8()
    }
}

impl Serialize for u16 {
    fn get_size(&self) -> usize {
        2
    }

    fn serialize(&self, dst: &mut Vec<u8>) {
        dst.extend_from_slice(&self.to_le_bytes());
    }
}

impl Deserialize for u16 {
    fn deserialize(reader: &mut Reader<'_>) -> Result<Self, Error> {
        reader.read_u16()
    }
}

impl Serialize for u32 {
    fn get_size(&self) -> usize {
        4
    }

    fn serialize(&self, dst: &mut Vec<u8>) {
        dst.extend_from_slice(&self.to_le_bytes());
    }
}

impl Deserialize for u32 {
    fn deserialize(reader: &mut Reader<'_>) -> Result<Self, Error> {
        reader.read_u32()
    }
}

impl Serialize for u64 {
    fn get_size(&self) -> usize {
        8
    }

    fn serialize(&self, dst: &mut Vec<u8>) {
        dst.extend_from_slice(&self.to_le_bytes());
    }
}

impl Deserialize for u64 {
    fn deserialize(reader: &mut Reader<'_>) -> Result<Self, Error> {
        reader.read_u64()
    }
}

impl Serialize for bool {
    fn get_size(&self) -> usize {
        1
    }

    fn serialize(&self, dst: &mut Vec<u8>) {
        dst.push(*self as u8);
    }
}

impl Deserialize for bool {
    fn deserialize(reader: &mut Reader<'_>) -> Result<Self, Error> {
        match reader.read_u8()? {
            0 => Ok(false),
            1 => Ok(true),
            b => Err(Error::NotABool(b)),
        }
    }
}

/// 24-bit unsigned integer, held in a `u32` with the top byte unused.
///
/// Used by the plain frame header for the payload length.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct U24(u32);

impl U24 {
    pub const MAX: u32 = 0x00ff_ffff;
}

impl TryFrom<u32> for U24 {
    type Error = Error;

    fn try_from(v: u32) -> Result<Self, Error> {
        if v <= Self::MAX {
            Ok(Self(v))
        } else {
            Err(Error::U24TooBig(v))
        }
    }
}

impl From<U24> for u32 {
    fn from(v: U24) -> u32 {
        v.0
    }
}

impl Serialize for U24 {
    fn get_size(&self) -> usize {
        3
    }

    fn serialize(&self, dst: &mut Vec<u8>) {
        dst.extend_from_slice(&self.0.to_le_bytes()[..3]);
    }
}

impl Deserialize for U24 {
    fn deserialize(reader: &mut Reader<'_>) -> Result<Self, Error> {
        let b = reader.read_bytes(3)?;
        Ok(Self(u32::from_le_bytes([b[0], b[1], b[2], 0])))
    }
}

/// 32 raw bytes, used for hashes and targets.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct U256([u8; 32]);

impl U256 {
    pub const SIZE: usize = 32;

    pub fn inner(&self) -> [u8; 32] {
        self.0
    }
}

impl From<[u8; 32]> for U256 {
    fn from(v: [u8; 32]) -> Self {
        Self(v)
    }
}

impl TryFrom<&[u8]> for U256 {
    type Error = Error;

    fn try_from(v: &[u8]) -> Result<Self, Error> {
        let mut inner = [0_u8; 32];
        if v.len() != inner.len() {
            return Err(Error::InvalidU256(v.len()));
        }
        inner.copy_from_slice(v);
        Ok(Self(inner))
    }
}

impl AsRef<[u8]> for U256 {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl Serialize for U256 {
    fn get_size(&self) -> usize {
        Self::SIZE
    }

    fn serialize(&self, dst: &mut Vec<u8>) {
        dst.extend_from_slice(&self.0);
    }
}

impl Deserialize for U256 {
    fn deserialize(reader: &mut Reader<'_>) -> Result<Self, Error> {
        // read_bytes returned exactly 32 bytes, try_from can not fail
        Ok(Self::try_from(reader.read_bytes(Self::SIZE)?).expect("32 bytes"))
    }
}

// Length-prefixed byte strings. The prefix width fixes the maximum size, the
// bound is enforced on construction so `serialize` stays infallible.
macro_rules! bounded_bytes {
    ($(#[$doc:meta])* $name:ident, $max:expr, $prefix:expr) => {
        $(#[$doc])*
        #[derive(Debug, Default, Clone, PartialEq, Eq)]
        pub struct $name(Vec<u8>);

        impl $name {
            pub const MAX_SIZE: usize = $max;

            pub fn as_slice(&self) -> &[u8] {
                &self.0
            }

            pub fn into_vec(self) -> Vec<u8> {
                self.0
            }

            pub fn len(&self) -> usize {
                self.0.len()
            }

            pub fn is_empty(&self) -> bool {
                self.0.is_empty()
            }
        }

        impl TryFrom<Vec<u8>> for $name {
            type Error = Error;

            fn try_from(v: Vec<u8>) -> Result<Self, Error> {
                if v.len() <= Self::MAX_SIZE {
                    Ok(Self(v))
                } else {
                    Err(Error::ValueExceedsMaxSize {
                        max: Self::MAX_SIZE,
                        actual: v.len(),
                    })
                }
            }
        }

        impl TryFrom<&[u8]> for $name {
            type Error = Error;

            fn try_from(v: &[u8]) -> Result<Self, Error> {
                Self::try_from(v.to_vec())
            }
        }

        impl AsRef<[u8]> for $name {
            fn as_ref(&self) -> &[u8] {
                &self.0
            }
        }

        impl Serialize for $name {
            fn get_size(&self) -> usize {
                $prefix + self.0.len()
            }

            fn serialize(&self, dst: &mut Vec<u8>) {
                dst.extend_from_slice(&(self.0.len() as u32).to_le_bytes()[..$prefix]);
                dst.extend_from_slice(&self.0);
            }
        }

        impl Deserialize for $name {
            fn deserialize(reader: &mut Reader<'_>) -> Result<Self, Error> {
                let b = reader.read_bytes($prefix)?;
                let mut len = [0_u8; 4];
                len[..$prefix].copy_from_slice(b);
                let len = u32::from_le_bytes(len) as usize;
                Ok(Self(reader.read_bytes(len)?.to_vec()))
            }
        }
    };
}

bounded_bytes!(
    /// ASCII text up to 255 bytes, 1-byte length prefix.
    Str0255,
    255,
    1
);
bounded_bytes!(
    /// Raw bytes up to 255, 1-byte length prefix.
    B0255,
    255,
    1
);
bounded_bytes!(
    /// Raw bytes up to 64 KiB - 1, 2-byte length prefix.
    B064K,
    65535,
    2
);
bounded_bytes!(
    /// Raw bytes up to 16 MiB - 1, 3-byte length prefix.
    B016M,
    0x00ff_ffff,
    3
);

impl TryFrom<&str> for Str0255 {
    type Error = Error;

    fn try_from(v: &str) -> Result<Self, Error> {
        Self::try_from(v.as_bytes().to_vec())
    }
}

impl TryFrom<String> for Str0255 {
    type Error = Error;

    fn try_from(v: String) -> Result<Self, Error> {
        Self::try_from(v.into_bytes())
    }
}

// Count-prefixed sequences. `push` moves the element into the sequence, which
// becomes its only owner.
macro_rules! bounded_seq {
    ($(#[$doc:meta])* $name:ident, $max:expr, $prefix:expr) => {
        $(#[$doc])*
        #[derive(Debug, Clone, PartialEq, Eq)]
        pub struct $name<T>(Vec<T>);

        impl<T> $name<T> {
            pub const MAX_SIZE: usize = $max;

            pub fn new(inner: Vec<T>) -> Result<Self, Error> {
                if inner.len() <= Self::MAX_SIZE {
                    Ok(Self(inner))
                } else {
                    Err(Error::SeqExceedsMaxSize {
                        max: Self::MAX_SIZE,
                        actual: inner.len(),
                    })
                }
            }

            pub fn push(&mut self, elem: T) -> Result<(), Error> {
                if self.0.len() == Self::MAX_SIZE {
                    return Err(Error::SeqExceedsMaxSize {
                        max: Self::MAX_SIZE,
                        actual: self.0.len() + 1,
                    });
                }
                self.0.push(elem);
                Ok(())
            }

            pub fn as_slice(&self) -> &[T] {
                &self.0
            }

            pub fn into_inner(self) -> Vec<T> {
                self.0
            }

            pub fn len(&self) -> usize {
                self.0.len()
            }

            pub fn is_empty(&self) -> bool {
                self.0.is_empty()
            }
        }

        impl<T> Default for $name<T> {
            fn default() -> Self {
                Self(Vec::new())
            }
        }

        impl<T: Serialize> Serialize for $name<T> {
            fn get_size(&self) -> usize {
                $prefix + self.0.iter().map(Serialize::get_size).sum::<usize>()
            }

            fn serialize(&self, dst: &mut Vec<u8>) {
                dst.extend_from_slice(&(self.0.len() as u32).to_le_bytes()[..$prefix]);
                for elem in &self.0 {
                    elem.serialize(dst);
                }
            }
        }

        impl<T: Deserialize> Deserialize for $name<T> {
            fn deserialize(reader: &mut Reader<'_>) -> Result<Self, Error> {
                let b = reader.read_bytes($prefix)?;
                let mut count = [0_u8; 4];
                count[..$prefix].copy_from_slice(b);
                let count = u32::from_le_bytes(count) as usize;
                let mut inner = Vec::with_capacity(count.min(Self::MAX_SIZE));
                for _ in 0..count {
                    inner.push(T::deserialize(reader)?);
                }
                Ok(Self(inner))
            }
        }
    };
}

bounded_seq!(
    /// Sequence of up to 255 elements, 1-byte count prefix.
    Seq0255,
    255,
    1
);
bounded_seq!(
    /// Sequence of up to 65535 elements, 2-byte count prefix.
    Seq064K,
    65535,
    2
);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{from_bytes, to_bytes};
    use quickcheck_macros::quickcheck;

    #[test]
    fn u24_rejects_values_over_24_bits() {
        assert!(U24::try_from(U24::MAX).is_ok());
        assert_eq!(
            U24::try_from(U24::MAX + 1),
            Err(Error::U24TooBig(U24::MAX + 1))
        );
    }

    #[test]
    fn u24_is_three_le_bytes() {
        let v = U24::try_from(0x0003_0201).unwrap();
        assert_eq!(to_bytes(&v), vec![0x01, 0x02, 0x03]);
    }

    #[test]
    fn b0255_rejects_oversized_input() {
        assert!(B0255::try_from(vec![0; 255]).is_ok());
        assert_eq!(
            B0255::try_from(vec![0; 256]),
            Err(Error::ValueExceedsMaxSize {
                max: 255,
                actual: 256
            })
        );
    }

    #[test]
    fn u256_requires_exactly_32_bytes() {
        assert_eq!(U256::try_from(&[0_u8; 31][..]), Err(Error::InvalidU256(31)));
        assert!(U256::try_from(&[0_u8; 32][..]).is_ok());
    }

    #[test]
    fn bool_decode_rejects_other_bytes() {
        assert_eq!(from_bytes::<bool>(&[2]), Err(Error::NotABool(2)));
    }

    #[test]
    fn empty_seq_encodes_as_zero_count() {
        let seq: Seq0255<U256> = Seq0255::default();
        assert_eq!(to_bytes(&seq), vec![0]);
        let decoded: Seq0255<U256> = from_bytes(&[0]).unwrap();
        assert!(decoded.is_empty());
    }

    #[test]
    fn seq_push_respects_the_bound() {
        let mut seq: Seq0255<u8> = Seq0255::new(vec![0; 255]).unwrap();
        assert!(seq.push(0).is_err());
    }

    #[quickcheck]
    fn b064k_round_trip(data: Vec<u8>) -> bool {
        let value = match B064K::try_from(data) {
            Ok(v) => v,
            // quickcheck rarely generates > 64K, skip if it does
            Err(_) => return true,
        };
        from_bytes::<B064K>(&to_bytes(&value)) == Ok(value)
    }

    #[quickcheck]
    fn str0255_round_trip(data: String) -> bool {
        let value = match Str0255::try_from(data) {
            Ok(v) => v,
            Err(_) => return true,
        };
        from_bytes::<Str0255>(&to_bytes(&value)) == Ok(value)
    }
}
