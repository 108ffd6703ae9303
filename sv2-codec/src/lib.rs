//! Frame codec for Sv2 connections.
//!
//! Pairs a single-slot [`Encoder`] with an incremental [`Decoder`], in a
//! plain and a noise-secured flavor. The decoder exposes a fill-then-ask
//! loop so the caller owns the I/O: it reads from the socket into
//! [`Decoder::writable`] and asks [`Decoder::next_frame`] whether a full
//! message came through. The crypto side of the noise flavor is behind the
//! [`NoiseSession`] trait, the codec itself only frames and length-checks.

mod decoder;
mod encoder;
mod error;
mod noise;

pub use decoder::{Decoder, NoiseDecoder};
pub use encoder::{Encoder, NoiseEncoder};
pub use error::Error;
pub use noise::{AeadError, NoiseSession};

pub use sv2_framing::{
    Header, NoiseFrame, Sv2Frame, AEAD_MAC_LEN, NOISE_FRAME_HEADER_SIZE, NOISE_FRAME_MAX_SIZE,
    NOISE_PSK_LEN, SV2_FRAME_HEADER_SIZE,
};
pub use sv2_messages::Sv2Message;
