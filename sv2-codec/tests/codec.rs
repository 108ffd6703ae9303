use core::convert::TryInto;
use quickcheck_macros::quickcheck;
use sv2_codec::{Decoder, Encoder, Error, Sv2Message};
use sv2_messages::{
    ChannelEndpointChanged, CoinbaseOutputDataSize, NewTemplate, Protocol, RequestTransactionData,
    RequestTransactionDataError, RequestTransactionDataSuccess, SetNewPrevHash, SetupConnection,
    SetupConnectionError, SetupConnectionSuccess, SubmitSolution,
};
use sv2_wire::{Seq0255, Seq064K, B064K};

fn one_of_each() -> Vec<Sv2Message> {
    vec![
        Sv2Message::SetupConnection(SetupConnection {
            protocol: Protocol::TemplateDistributionProtocol,
            min_version: 2,
            max_version: 2,
            flags: 0,
            endpoint_host: "0.0.0.0".try_into().unwrap(),
            endpoint_port: 8081,
            vendor: "Bitmain".try_into().unwrap(),
            hardware_version: "901".try_into().unwrap(),
            firmware: "abcX".try_into().unwrap(),
            device_id: "89567".try_into().unwrap(),
        }),
        Sv2Message::SetupConnectionSuccess(SetupConnectionSuccess {
            used_version: 2,
            flags: 0,
        }),
        Sv2Message::SetupConnectionError(SetupConnectionError {
            flags: 0,
            error_code: "unsupported-protocol".try_into().unwrap(),
        }),
        Sv2Message::ChannelEndpointChanged(ChannelEndpointChanged { channel_id: 42 }),
        Sv2Message::CoinbaseOutputDataSize(CoinbaseOutputDataSize {
            coinbase_output_max_additional_size: 32,
        }),
        Sv2Message::NewTemplate(NewTemplate {
            template_id: 71,
            future_template: true,
            version: 0x2000_0000,
            coinbase_tx_version: 2,
            coinbase_prefix: vec![3, 76, 163, 38].try_into().unwrap(),
            coinbase_tx_input_sequence: u32::MAX,
            coinbase_tx_value_remaining: 625_000_000,
            coinbase_tx_outputs_count: 0,
            coinbase_tx_outputs: B064K::default(),
            coinbase_tx_locktime: 0,
            merkle_path: Seq0255::new(vec![[0xab_u8; 32].into()]).unwrap(),
        }),
        Sv2Message::SetNewPrevHash(SetNewPrevHash {
            template_id: 71,
            prev_hash: [9_u8; 32].into(),
            header_timestamp: 1_614_000_000,
            n_bits: 0x1703_1abe,
            target: [0xff_u8; 32].into(),
        }),
        Sv2Message::RequestTransactionData(RequestTransactionData { template_id: 71 }),
        Sv2Message::RequestTransactionDataSuccess(RequestTransactionDataSuccess {
            template_id: 71,
            excess_data: vec![0_u8; 36].try_into().unwrap(),
            transaction_list: Seq064K::new(vec![vec![1_u8; 60].try_into().unwrap()]).unwrap(),
        }),
        Sv2Message::RequestTransactionDataError(RequestTransactionDataError {
            template_id: 71,
            error_code: "template-id-not-found".try_into().unwrap(),
        }),
        Sv2Message::SubmitSolution(SubmitSolution {
            template_id: 71,
            version: 0x2000_0000,
            header_timestamp: 1_614_000_100,
            header_nonce: 0xdead_beef,
            coinbase_tx: vec![2_u8; 120].try_into().unwrap(),
        }),
    ]
}

fn encode_all(messages: &[Sv2Message]) -> Vec<u8> {
    let mut encoder = Encoder::new();
    let mut wire = Vec::new();
    for message in messages {
        wire.extend(encoder.encode(message.clone(), 0).unwrap());
        encoder.flush();
    }
    wire
}

fn decode_all(mut bytes: &[u8]) -> Vec<Sv2Message> {
    let mut decoder = Decoder::new();
    let mut out = Vec::new();
    while !bytes.is_empty() {
        let writable = decoder.writable();
        let n = writable.len();
        writable.copy_from_slice(&bytes[..n]);
        bytes = &bytes[n..];
        match decoder.next_frame() {
            Ok(message) => out.push(message),
            Err(Error::MissingBytes(_)) => continue,
            Err(e) => panic!("decode failed: {}", e),
        }
    }
    out
}

#[test]
fn every_message_survives_the_wire() {
    let messages = one_of_each();
    let wire = encode_all(&messages);
    assert_eq!(decode_all(&wire), messages);
}

#[test]
fn one_byte_at_a_time() {
    let messages = one_of_each();
    let wire = encode_all(&messages);

    let mut decoder = Decoder::new();
    let mut out = Vec::new();
    let mut filled = 0;
    for &byte in &wire {
        let writable = decoder.writable();
        writable[filled] = byte;
        filled += 1;
        if filled < writable.len() {
            continue;
        }
        filled = 0;
        match decoder.next_frame() {
            Ok(message) => out.push(message),
            Err(Error::MissingBytes(_)) => {}
            Err(e) => panic!("decode failed: {}", e),
        }
    }
    assert_eq!(out, messages);
}

#[test]
fn channel_endpoint_changed_round_trip() {
    let message = Sv2Message::ChannelEndpointChanged(ChannelEndpointChanged { channel_id: 42 });
    let mut encoder = Encoder::new();
    let wire = encoder.encode(message.clone(), 0).unwrap();
    // channel_msg bit set, message type 3, payload length 4
    assert_eq!(wire, vec![0x00, 0x80, 3, 4, 0, 0, 42, 0, 0, 0]);
    assert_eq!(decode_all(&wire), vec![message]);
}

#[test]
fn unknown_message_type_tears_down() {
    // message type 21 is unassigned
    let wire = [0_u8, 0, 21, 2, 0, 0, 0xaa, 0xbb];
    let mut decoder = Decoder::new();
    decoder.writable().copy_from_slice(&wire[..6]);
    assert_eq!(decoder.next_frame(), Err(Error::MissingBytes(2)));
    decoder.writable().copy_from_slice(&wire[6..]);
    assert_eq!(decoder.next_frame(), Err(Error::UnknownMessageType(21)));
}

#[test]
fn garbage_payload_is_invalid() {
    // SetupConnection with a 3 byte payload can not decode
    let wire = [0_u8, 0, 0, 3, 0, 0, 1, 2, 3];
    let mut decoder = Decoder::new();
    decoder.writable().copy_from_slice(&wire[..6]);
    assert_eq!(decoder.next_frame(), Err(Error::MissingBytes(3)));
    decoder.writable().copy_from_slice(&wire[6..]);
    assert_eq!(decoder.next_frame(), Err(Error::InvalidSv2Frame));
}

#[test]
fn decoder_recovers_after_missing_bytes() {
    let message = Sv2Message::RequestTransactionData(RequestTransactionData { template_id: 9 });
    let mut encoder = Encoder::new();
    let wire = encoder.encode(message.clone(), 0).unwrap();

    let mut decoder = Decoder::new();
    decoder.writable().copy_from_slice(&wire[..6]);
    assert_eq!(decoder.next_frame(), Err(Error::MissingBytes(8)));
    // the window is stable until it is filled
    assert_eq!(decoder.writable().len(), 8);
    assert_eq!(decoder.writable().len(), 8);
    decoder.writable().copy_from_slice(&wire[6..]);
    assert_eq!(decoder.next_frame(), Ok(message));
}

#[quickcheck]
fn any_channel_id_survives_the_wire(channel_id: u32, extension_type: u16) -> bool {
    let message = Sv2Message::ChannelEndpointChanged(ChannelEndpointChanged { channel_id });
    let mut encoder = Encoder::new();
    let wire = encoder.encode(message.clone(), extension_type).unwrap();
    decode_all(&wire) == vec![message]
}

#[test]
fn zero_length_payload_needs_no_second_read() {
    // a frame whose header declares no payload decodes in one step, but no
    // known message decodes from it
    let mut decoder = Decoder::new();
    decoder.writable().copy_from_slice(&[0, 0, 21, 0, 0, 0]);
    assert_eq!(decoder.next_frame(), Err(Error::UnknownMessageType(21)));
    // and the decoder is back at a fresh header window
    assert_eq!(decoder.writable().len(), 6);
}
