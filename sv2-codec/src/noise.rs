use core::fmt;

/// Failure of the AEAD layer of a noise session, either on encryption or on
/// authentication of received ciphertext.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AeadError;

impl fmt::Display for AeadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "aead encryption or authentication failed")
    }
}

/// A noise transport after a completed handshake.
///
/// The codec drives framing and stays independent of the crypto library
/// holding the cipher states. `encrypt` returns the ciphertext with the
/// [`AEAD_MAC_LEN`] byte authentication tag appended, `decrypt` verifies and
/// strips it. Both advance the session nonce, so frames must go through in
/// order.
///
/// [`AEAD_MAC_LEN`]: sv2_framing::AEAD_MAC_LEN
pub trait NoiseSession {
    fn encrypt(&mut self, plaintext: &[u8]) -> Result<Vec<u8>, AeadError>;
    fn decrypt(&mut self, ciphertext: &[u8]) -> Result<Vec<u8>, AeadError>;
}
