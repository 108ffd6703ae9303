use crate::{Error, NoiseSession};
use sv2_framing::{NoiseFrame, Sv2Frame};
use sv2_messages::Sv2Message;
use sv2_wire::to_bytes;
use tracing::error;

/// Single-slot encoder for plain frames.
///
/// One encode may be in flight at a time: [`encode`] hands the caller the
/// frame bytes as an owned buffer and marks the slot busy until [`flush`]
/// releases it. A second encode before the flush is caller misuse and fails
/// with [`Error::EncoderBusy`]. The encoder never retains what it returned.
///
/// [`encode`]: Encoder::encode
/// [`flush`]: Encoder::flush
#[derive(Debug)]
pub struct Encoder {
    free: bool,
}

impl Encoder {
    pub fn new() -> Self {
        Self { free: true }
    }

    pub fn is_free(&self) -> bool {
        self.free
    }

    /// Frames `message` and returns the serialized bytes, ready for the
    /// wire. The message's own type number and `channel_msg` bit go into the
    /// header, combined with the caller's `extension_type`.
    pub fn encode(&mut self, message: Sv2Message, extension_type: u16) -> Result<Vec<u8>, Error> {
        if !self.free {
            error!("encode called on a busy encoder");
            return Err(Error::EncoderBusy);
        }
        let frame = Sv2Frame::from_payload(
            to_bytes(&message),
            message.message_type(),
            extension_type,
            message.channel_bit(),
        )?;
        self.free = false;
        Ok(frame.into_bytes())
    }

    /// Releases the slot once the caller is done with the encoded bytes.
    pub fn flush(&mut self) {
        self.free = true;
    }
}

impl Default for Encoder {
    fn default() -> Self {
        Self::new()
    }
}

/// Single-slot encoder for noise-secured frames.
///
/// Same slot discipline as [`Encoder`]. Each message becomes one plain frame
/// which is encrypted whole into one noise frame.
#[derive(Debug)]
pub struct NoiseEncoder {
    free: bool,
}

impl NoiseEncoder {
    pub fn new() -> Self {
        Self { free: true }
    }

    pub fn is_free(&self) -> bool {
        self.free
    }

    /// Frames, encrypts and length-prefixes `message`. Fails with
    /// [`Error::InvalidSv2Frame`] when the ciphertext does not fit the
    /// 16-bit noise length field.
    pub fn encode<S: NoiseSession>(
        &mut self,
        message: Sv2Message,
        extension_type: u16,
        session: &mut S,
    ) -> Result<Vec<u8>, Error> {
        if !self.free {
            error!("encode called on a busy encoder");
            return Err(Error::EncoderBusy);
        }
        let frame = Sv2Frame::from_payload(
            to_bytes(&message),
            message.message_type(),
            extension_type,
            message.channel_bit(),
        )?;
        let ciphertext = session.encrypt(&frame.into_bytes())?;
        let noise = NoiseFrame::from_ciphertext(ciphertext)?;
        self.free = false;
        Ok(noise.into_bytes())
    }

    pub fn flush(&mut self) {
        self.free = true;
    }
}

impl Default for NoiseEncoder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sv2_messages::ChannelEndpointChanged;

    #[test]
    fn second_encode_without_flush_is_busy() {
        let mut encoder = Encoder::new();
        let message = Sv2Message::ChannelEndpointChanged(ChannelEndpointChanged { channel_id: 1 });
        assert!(encoder.encode(message.clone(), 0).is_ok());
        assert!(!encoder.is_free());
        assert_eq!(encoder.encode(message.clone(), 0), Err(Error::EncoderBusy));
        encoder.flush();
        assert!(encoder.encode(message, 0).is_ok());
    }

    #[test]
    fn channel_bit_comes_from_the_message() {
        let mut encoder = Encoder::new();
        let message = Sv2Message::ChannelEndpointChanged(ChannelEndpointChanged { channel_id: 1 });
        let bytes = encoder.encode(message, 0).unwrap();
        // ChannelEndpointChanged is channel scoped, the top bit must be set
        assert_eq!(&bytes[..2], &0x8000_u16.to_le_bytes());
    }
}
