use crate::{header::CHANNEL_MSG_MASK, Error, Header, NoiseHeader};
use sv2_wire::U24;

/// A complete plain frame, owned as serialized header plus payload.
///
/// The frame says nothing about the correctness of the payload; it only
/// guarantees that the payload has exactly the length the header declares.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sv2Frame {
    header: Header,
    serialized: Vec<u8>,
}

impl Sv2Frame {
    /// Builds a frame around an already serialized payload.
    ///
    /// `channel_msg` drives the most significant bit of `extension_type`.
    /// Fails if the payload does not fit the 24-bit length field.
    pub fn from_payload(
        payload: Vec<u8>,
        message_type: u8,
        extension_type: u16,
        channel_msg: bool,
    ) -> Result<Self, Error> {
        if payload.len() > U24::MAX as usize {
            return Err(Error::PayloadTooBig(payload.len()));
        }
        let extension_type = update_extension_type(extension_type, channel_msg);
        let header = Header::from_len(payload.len() as u32, message_type, extension_type)?;
        let mut serialized = Vec::with_capacity(Header::SIZE + payload.len());
        serialized.extend_from_slice(&header.to_bytes());
        serialized.extend_from_slice(&payload);
        Ok(Self { header, serialized })
    }

    /// Tries to build a frame from raw bytes, returning the [`size_hint`]
    /// when `bytes` is not exactly one complete frame.
    ///
    /// [`size_hint`]: Sv2Frame::size_hint
    #[inline]
    pub fn from_bytes(bytes: Vec<u8>) -> Result<Self, isize> {
        let hint = Self::size_hint(&bytes);
        if hint == 0 {
            Ok(Self::from_bytes_unchecked(bytes))
        } else {
            Err(hint)
        }
    }

    /// Builds a frame from bytes already known to be one complete frame.
    #[inline]
    pub fn from_bytes_unchecked(bytes: Vec<u8>) -> Self {
        // the caller already checked the size, the header is present
        let header = Header::from_bytes(&bytes).expect("complete header");
        Self {
            header,
            serialized: bytes,
        }
    }

    /// How many bytes are missing for `bytes` to be one complete frame.
    ///
    /// Returns `0` when `bytes` is exactly one frame, a positive count of
    /// missing bytes when it is short, and a negative count of surplus bytes
    /// when it is long.
    #[inline]
    pub fn size_hint(bytes: &[u8]) -> isize {
        match Header::from_bytes(bytes) {
            Err(_) => (Header::SIZE - bytes.len()) as isize,
            Ok(header) => {
                let expected = Header::SIZE + header.len();
                expected as isize - bytes.len() as isize
            }
        }
    }

    pub fn header(&self) -> Header {
        self.header
    }

    /// The payload bytes, without the header.
    pub fn payload(&self) -> &[u8] {
        &self.serialized[Header::SIZE..]
    }

    /// Total length of the serialized frame.
    pub fn encoded_length(&self) -> usize {
        self.serialized.len()
    }

    /// Hands the serialized frame to the caller, consuming the frame.
    pub fn into_bytes(self) -> Vec<u8> {
        self.serialized
    }
}

/// A complete noise-secured frame: length prefix plus ciphertext.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NoiseFrame {
    serialized: Vec<u8>,
}

impl NoiseFrame {
    /// Wraps a ciphertext into a noise frame.
    ///
    /// Fails if the ciphertext does not fit the 16-bit length field.
    pub fn from_ciphertext(ciphertext: Vec<u8>) -> Result<Self, Error> {
        if ciphertext.len() > crate::NOISE_FRAME_MAX_SIZE {
            return Err(Error::PayloadTooBig(ciphertext.len()));
        }
        let mut serialized = Vec::with_capacity(NoiseHeader::SIZE + ciphertext.len());
        serialized.extend_from_slice(&(ciphertext.len() as u16).to_le_bytes());
        serialized.extend_from_slice(&ciphertext);
        Ok(Self { serialized })
    }

    #[inline]
    pub fn from_bytes(bytes: Vec<u8>) -> Result<Self, isize> {
        let hint = Self::size_hint(&bytes);
        if hint == 0 {
            Ok(Self { serialized: bytes })
        } else {
            Err(hint)
        }
    }

    /// Same contract as [`Sv2Frame::size_hint`], over the 2-byte header.
    #[inline]
    pub fn size_hint(bytes: &[u8]) -> isize {
        match NoiseHeader::payload_len(bytes) {
            Err(_) => (NoiseHeader::SIZE - bytes.len()) as isize,
            Ok(len) => {
                let expected = NoiseHeader::SIZE + len;
                expected as isize - bytes.len() as isize
            }
        }
    }

    /// The ciphertext, without the length prefix.
    pub fn ciphertext(&self) -> &[u8] {
        &self.serialized[NoiseHeader::SIZE..]
    }

    pub fn encoded_length(&self) -> usize {
        self.serialized.len()
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.serialized
    }
}

/// Sets or clears the `channel_msg` bit of `extension_type`.
fn update_extension_type(extension_type: u16, channel_msg: bool) -> u16 {
    if channel_msg {
        extension_type | CHANNEL_MSG_MASK
    } else {
        extension_type & !CHANNEL_MSG_MASK
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_size_hint() {
        let h = Sv2Frame::size_hint(&[0, 128, 30, 46, 0, 0][..]);
        assert!(h == 46);
    }

    #[test]
    fn size_hint_reports_missing_header_bytes() {
        assert_eq!(Sv2Frame::size_hint(&[0, 128]), 4);
    }

    #[test]
    fn zero_length_payload_is_a_valid_frame() {
        let frame = Sv2Frame::from_payload(Vec::new(), 0, 0, false).unwrap();
        let bytes = frame.clone().into_bytes();
        assert_eq!(bytes, vec![0, 0, 0, 0, 0, 0]);
        let parsed = Sv2Frame::from_bytes(bytes).unwrap();
        assert_eq!(parsed.header().len(), 0);
        assert!(parsed.payload().is_empty());
    }

    #[test]
    fn frame_payload_matches_declared_length() {
        // extension_type=0, message_type=0, payload_length=3
        let bytes = vec![0x00, 0x00, 0x00, 0x03, 0x00, 0x00, 0xaa, 0xbb, 0xcc];
        let frame = Sv2Frame::from_bytes(bytes).unwrap();
        assert_eq!(frame.header().msg_type(), 0);
        assert_eq!(frame.payload(), &[0xaa, 0xbb, 0xcc]);
    }

    #[test]
    fn channel_msg_sets_the_top_bit() {
        let frame = Sv2Frame::from_payload(vec![0; 4], 26, 0, true).unwrap();
        assert!(frame.header().channel_msg());
        assert_eq!(frame.header().ext_type(), 0x8000);
    }

    #[test]
    fn noise_frame_round_trip() {
        let ciphertext = vec![7; 32];
        let frame = NoiseFrame::from_ciphertext(ciphertext.clone()).unwrap();
        let bytes = frame.into_bytes();
        assert_eq!(&bytes[..2], &(32_u16).to_le_bytes());
        let parsed = NoiseFrame::from_bytes(bytes).unwrap();
        assert_eq!(parsed.ciphertext(), &ciphertext[..]);
    }

    #[test]
    fn oversized_ciphertext_is_rejected() {
        let too_big = vec![0; crate::NOISE_FRAME_MAX_SIZE + 1];
        assert!(NoiseFrame::from_ciphertext(too_big).is_err());
    }
}
