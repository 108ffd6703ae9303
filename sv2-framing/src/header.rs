use crate::Error;
use core::convert::TryInto;
use sv2_wire::U24;

/// Mask of the `channel_msg` flag, the most significant bit of
/// `extension_type`.
pub(crate) const CHANNEL_MSG_MASK: u16 = 0b1000_0000_0000_0000;

/// Plain frame header.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq)]
pub struct Header {
    extension_type: u16,
    msg_type: u8,
    msg_length: U24,
}

impl Header {
    pub const SIZE: usize = crate::SV2_FRAME_HEADER_SIZE;
    pub const LEN_OFFSET: usize = crate::SV2_FRAME_HEADER_LEN_OFFSET;
    pub const LEN_SIZE: usize = crate::SV2_FRAME_HEADER_LEN_SIZE;
    pub const LEN_END: usize = Self::LEN_OFFSET + Self::LEN_SIZE;

    /// Parses a header from the first [`Header::SIZE`] bytes of `bytes`.
    ///
    /// With fewer bytes available this reports how many are missing, which
    /// during streaming reassembly means "read more and retry".
    #[inline]
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, Error> {
        if bytes.len() < Self::SIZE {
            return Err(Error::UnexpectedHeaderLength(Self::SIZE - bytes.len()));
        }

        let extension_type = u16::from_le_bytes([bytes[0], bytes[1]]);
        let msg_type = bytes[2];
        let msg_length = u32::from_le_bytes([bytes[3], bytes[4], bytes[5], 0]);

        Ok(Self {
            extension_type,
            msg_type,
            // the most significant byte is 0, the conversion can not fail
            msg_length: msg_length.try_into().expect("fits in 24 bits"),
        })
    }

    /// Builds a header for a payload of `len` bytes.
    ///
    /// A length that does not fit in 24 bits is a construction error on the
    /// caller's side, not a network condition.
    #[inline]
    pub fn from_len(len: u32, message_type: u8, extension_type: u16) -> Result<Self, Error> {
        Ok(Self {
            extension_type,
            msg_type: message_type,
            msg_length: len.try_into().map_err(|_| Error::PayloadTooBig(len as usize))?,
        })
    }

    /// Serializes the header into its fixed six byte wire form.
    #[inline]
    pub fn to_bytes(self) -> [u8; Self::SIZE] {
        let len: u32 = self.msg_length.into();
        let len = len.to_le_bytes();
        let ext = self.extension_type.to_le_bytes();
        [ext[0], ext[1], self.msg_type, len[0], len[1], len[2]]
    }

    /// Declared payload length.
    #[allow(clippy::len_without_is_empty)]
    #[inline]
    pub fn len(&self) -> usize {
        let inner: u32 = self.msg_length.into();
        inner as usize
    }

    pub fn msg_type(&self) -> u8 {
        self.msg_type
    }

    pub fn ext_type(&self) -> u16 {
        self.extension_type
    }

    /// Whether the frame carries a channel scoped message.
    pub fn channel_msg(&self) -> bool {
        self.extension_type & CHANNEL_MSG_MASK != 0
    }
}

/// Noise-secured frame header: a bare little-endian `u16` ciphertext length.
pub struct NoiseHeader {}

impl NoiseHeader {
    pub const SIZE: usize = crate::NOISE_FRAME_HEADER_SIZE;

    /// Ciphertext length declared by the first two bytes of a noise frame.
    #[inline]
    pub fn payload_len(bytes: &[u8]) -> Result<usize, Error> {
        if bytes.len() < Self::SIZE {
            return Err(Error::UnexpectedHeaderLength(Self::SIZE - bytes.len()));
        }
        Ok(u16::from_le_bytes([bytes[0], bytes[1]]) as usize)
    }
}
