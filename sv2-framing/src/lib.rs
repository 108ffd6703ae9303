//! Framing for Sv2 binary messages.
//!
//! Each plain message begins with the extension type, message type and
//! message length (six bytes in total), followed by a variable length
//! payload:
//!
//! | field            | size  | description                                        |
//! |------------------|-------|----------------------------------------------------|
//! | `extension_type` | `U16` | extension identifier; the most significant bit is the `channel_msg` flag |
//! | `msg_type`       | `U8`  | message type code within the extension             |
//! | `msg_length`     | `U24` | payload length, not including this header          |
//! | `payload`        | bytes | `msg_length` bytes                                 |
//!
//! A noise-secured frame is a two byte little-endian length prefix followed
//! by that many bytes of AEAD ciphertext; the ciphertext decrypts to exactly
//! one plain frame.

pub mod error;
pub mod frame;
pub mod header;

pub use error::Error;
pub use frame::{NoiseFrame, Sv2Frame};
pub use header::{Header, NoiseHeader};

/// Size of the plain frame header.
pub const SV2_FRAME_HEADER_SIZE: usize = 6;
/// Offset of the 3-byte length field inside the plain header.
pub const SV2_FRAME_HEADER_LEN_OFFSET: usize = 3;
/// Size of the length field inside the plain header.
pub const SV2_FRAME_HEADER_LEN_SIZE: usize = 3;

/// Size of the noise frame header (the 2-byte length prefix).
pub const NOISE_FRAME_HEADER_SIZE: usize = 2;
/// Maximum ciphertext length a noise frame can carry.
pub const NOISE_FRAME_MAX_SIZE: usize = u16::MAX as usize;

/// AEAD authentication tag length, appended to every ciphertext.
pub const AEAD_MAC_LEN: usize = 16;
/// Pre-shared key length of the noise protocol in use.
pub const NOISE_PSK_LEN: usize = 32;
