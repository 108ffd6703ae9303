use sv2_codec::{
    AeadError, Error, NoiseDecoder, NoiseEncoder, NoiseSession, Sv2Message, AEAD_MAC_LEN,
};
use sv2_messages::{ChannelEndpointChanged, RequestTransactionData};

/// A stand-in transport: xor "cipher" with a checksum "tag". Enough to
/// exercise the framing without pulling in a crypto library.
struct XorSession {
    key: u8,
}

impl XorSession {
    fn tag(&self, plaintext: &[u8]) -> [u8; AEAD_MAC_LEN] {
        let mut tag = [self.key; AEAD_MAC_LEN];
        tag[0] = plaintext.iter().fold(0, |acc, b| acc ^ b);
        tag
    }
}

impl NoiseSession for XorSession {
    fn encrypt(&mut self, plaintext: &[u8]) -> Result<Vec<u8>, AeadError> {
        let mut out: Vec<u8> = plaintext.iter().map(|b| b ^ self.key).collect();
        out.extend_from_slice(&self.tag(plaintext));
        Ok(out)
    }

    fn decrypt(&mut self, ciphertext: &[u8]) -> Result<Vec<u8>, AeadError> {
        if ciphertext.len() < AEAD_MAC_LEN {
            return Err(AeadError);
        }
        let (body, tag) = ciphertext.split_at(ciphertext.len() - AEAD_MAC_LEN);
        let plaintext: Vec<u8> = body.iter().map(|b| b ^ self.key).collect();
        if tag != self.tag(&plaintext) {
            return Err(AeadError);
        }
        Ok(plaintext)
    }
}

fn decode_one(wire: &[u8], session: &mut XorSession) -> Result<Sv2Message, Error> {
    let mut decoder = NoiseDecoder::new();
    let mut bytes = wire;
    loop {
        let writable = decoder.writable();
        let n = writable.len();
        writable.copy_from_slice(&bytes[..n]);
        bytes = &bytes[n..];
        match decoder.next_frame(session) {
            Err(Error::MissingBytes(_)) => continue,
            other => return other,
        }
    }
}

#[test]
fn noise_round_trip() {
    let mut session = XorSession { key: 0x5a };
    let message = Sv2Message::RequestTransactionData(RequestTransactionData { template_id: 71 });

    let mut encoder = NoiseEncoder::new();
    let wire = encoder.encode(message.clone(), 0, &mut session).unwrap();
    // 2 byte length prefix, 6 + 8 bytes of frame, the tag
    assert_eq!(wire.len(), 2 + 6 + 8 + AEAD_MAC_LEN);

    assert_eq!(decode_one(&wire, &mut session), Ok(message));
}

#[test]
fn tampered_ciphertext_is_invalid_not_missing() {
    let mut session = XorSession { key: 0x5a };
    let message = Sv2Message::ChannelEndpointChanged(ChannelEndpointChanged { channel_id: 42 });

    let mut encoder = NoiseEncoder::new();
    let mut wire = encoder.encode(message, 0, &mut session).unwrap();
    let last = wire.len() - 1;
    wire[last] ^= 0xff;

    assert_eq!(decode_one(&wire, &mut session), Err(Error::InvalidSv2Frame));
}

#[test]
fn noise_encoder_is_single_slot() {
    let mut session = XorSession { key: 1 };
    let message = Sv2Message::ChannelEndpointChanged(ChannelEndpointChanged { channel_id: 1 });

    let mut encoder = NoiseEncoder::new();
    assert!(encoder.encode(message.clone(), 0, &mut session).is_ok());
    assert_eq!(
        encoder.encode(message.clone(), 0, &mut session),
        Err(Error::EncoderBusy)
    );
    encoder.flush();
    assert!(encoder.encode(message, 0, &mut session).is_ok());
}

#[test]
fn each_message_is_one_noise_frame() {
    let mut session = XorSession { key: 7 };
    let first = Sv2Message::ChannelEndpointChanged(ChannelEndpointChanged { channel_id: 1 });
    let second = Sv2Message::RequestTransactionData(RequestTransactionData { template_id: 2 });

    let mut encoder = NoiseEncoder::new();
    let mut wire = encoder.encode(first.clone(), 0, &mut session).unwrap();
    encoder.flush();
    wire.extend(encoder.encode(second.clone(), 0, &mut session).unwrap());

    let mut decoder = NoiseDecoder::new();
    let mut out = Vec::new();
    let mut bytes = &wire[..];
    while !bytes.is_empty() {
        let writable = decoder.writable();
        let n = writable.len();
        writable.copy_from_slice(&bytes[..n]);
        bytes = &bytes[n..];
        match decoder.next_frame(&mut session) {
            Ok(message) => out.push(message),
            Err(Error::MissingBytes(_)) => {}
            Err(e) => panic!("decode failed: {}", e),
        }
    }
    assert_eq!(out, vec![first, second]);
}

#[test]
fn tampered_tag_key_bytes_fail_authentication() {
    let mut session = XorSession { key: 3 };
    let plaintext = vec![1_u8, 2, 3];
    let mut ciphertext = session.encrypt(&plaintext).unwrap();
    let last = ciphertext.len() - 1;
    ciphertext[last] ^= 1;
    assert_eq!(session.decrypt(&ciphertext), Err(AeadError));
}
