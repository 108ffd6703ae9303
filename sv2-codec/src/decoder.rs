use crate::{Error, NoiseSession};
use core::convert::TryFrom;
use core::mem;
use sv2_framing::{Header, NoiseFrame, NoiseHeader, Sv2Frame, AEAD_MAC_LEN, NOISE_FRAME_MAX_SIZE};
use sv2_messages::Sv2Message;
use tracing::error;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    AwaitingHeader,
    AwaitingPayload,
}

/// Incremental decoder for plain frames.
///
/// Usage is a fill-then-ask loop: read exactly [`writable`] bytes from the
/// wire into the window, then call [`next_frame`]. [`Error::MissingBytes`]
/// means go around again; a message means one frame was consumed and the
/// decoder is ready for the next one. Every other error is fatal for the
/// connection.
///
/// [`writable`]: Decoder::writable
/// [`next_frame`]: Decoder::next_frame
#[derive(Debug)]
pub struct Decoder {
    frame: Vec<u8>,
    state: State,
    max_frame_size: usize,
}

impl Decoder {
    pub fn new() -> Self {
        Self::with_max_frame_size(NOISE_FRAME_MAX_SIZE)
    }

    /// A decoder that refuses frames longer than `max_frame_size` bytes,
    /// header included.
    pub fn with_max_frame_size(max_frame_size: usize) -> Self {
        Self {
            frame: vec![0; Header::SIZE],
            state: State::AwaitingHeader,
            max_frame_size,
        }
    }

    /// The window the caller must fill completely before the next
    /// [`next_frame`] call. Repeated calls without an intervening
    /// [`next_frame`] return the same window, nothing is consumed.
    ///
    /// [`next_frame`]: Decoder::next_frame
    pub fn writable(&mut self) -> &mut [u8] {
        match self.state {
            State::AwaitingHeader => &mut self.frame[..Header::SIZE],
            State::AwaitingPayload => &mut self.frame[Header::SIZE..],
        }
    }

    /// Advances the state machine over the bytes the caller filled in.
    pub fn next_frame(&mut self) -> Result<Sv2Message, Error> {
        match self.state {
            State::AwaitingHeader => {
                let header = Header::from_bytes(&self.frame)?;
                let frame_len = Header::SIZE + header.len();
                if frame_len > self.max_frame_size {
                    error!(
                        "frame of {} bytes exceeds the {} byte limit",
                        frame_len, self.max_frame_size
                    );
                    return Err(Error::InvalidSv2Frame);
                }
                // a zero length payload needs no further reads
                if header.len() == 0 {
                    return self.decode_frame();
                }
                self.frame.resize(frame_len, 0);
                self.state = State::AwaitingPayload;
                Err(Error::MissingBytes(header.len()))
            }
            State::AwaitingPayload => self.decode_frame(),
        }
    }

    fn decode_frame(&mut self) -> Result<Sv2Message, Error> {
        let bytes = mem::replace(&mut self.frame, vec![0; Header::SIZE]);
        self.state = State::AwaitingHeader;
        let frame = Sv2Frame::from_bytes(bytes).map_err(|_| Error::InvalidSv2Frame)?;
        let message = Sv2Message::try_from((frame.header().msg_type(), frame.payload()))?;
        Ok(message)
    }
}

impl Default for Decoder {
    fn default() -> Self {
        Self::new()
    }
}

/// Incremental decoder for noise-secured frames.
///
/// Same fill-then-ask loop as [`Decoder`], over the 2-byte noise header and
/// the ciphertext. The ciphertext of each noise frame must decrypt to
/// exactly one plain frame.
#[derive(Debug)]
pub struct NoiseDecoder {
    frame: Vec<u8>,
    state: State,
    max_frame_size: usize,
}

impl NoiseDecoder {
    pub fn new() -> Self {
        Self::with_max_frame_size(NOISE_FRAME_MAX_SIZE)
    }

    pub fn with_max_frame_size(max_frame_size: usize) -> Self {
        Self {
            frame: vec![0; NoiseHeader::SIZE],
            state: State::AwaitingHeader,
            max_frame_size,
        }
    }

    /// Same contract as [`Decoder::writable`].
    pub fn writable(&mut self) -> &mut [u8] {
        match self.state {
            State::AwaitingHeader => &mut self.frame[..NoiseHeader::SIZE],
            State::AwaitingPayload => &mut self.frame[NoiseHeader::SIZE..],
        }
    }

    /// Advances the state machine, decrypting through `session` once a full
    /// noise frame is buffered. Authentication failure is
    /// [`Error::InvalidSv2Frame`], more bytes can not fix it.
    pub fn next_frame<S: NoiseSession>(&mut self, session: &mut S) -> Result<Sv2Message, Error> {
        match self.state {
            State::AwaitingHeader => {
                let ciphertext_len = NoiseHeader::payload_len(&self.frame)?;
                if ciphertext_len < AEAD_MAC_LEN {
                    error!(
                        "noise frame of {} bytes can not hold the authentication tag",
                        ciphertext_len
                    );
                    return Err(Error::InvalidSv2Frame);
                }
                self.frame.resize(NoiseHeader::SIZE + ciphertext_len, 0);
                self.state = State::AwaitingPayload;
                Err(Error::MissingBytes(ciphertext_len))
            }
            State::AwaitingPayload => {
                let bytes = mem::replace(&mut self.frame, vec![0; NoiseHeader::SIZE]);
                self.state = State::AwaitingHeader;
                let noise = NoiseFrame::from_bytes(bytes).map_err(|_| Error::InvalidSv2Frame)?;
                let plaintext = session.decrypt(noise.ciphertext())?;
                if plaintext.len() > self.max_frame_size || Sv2Frame::size_hint(&plaintext) != 0 {
                    error!("decrypted bytes are not exactly one frame");
                    return Err(Error::InvalidSv2Frame);
                }
                let frame = Sv2Frame::from_bytes_unchecked(plaintext);
                let message = Sv2Message::try_from((frame.header().msg_type(), frame.payload()))?;
                Ok(message)
            }
        }
    }
}

impl Default for NoiseDecoder {
    fn default() -> Self {
        Self::new()
    }
}
