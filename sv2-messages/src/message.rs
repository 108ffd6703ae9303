use crate::{
    registry::*, ChannelEndpointChanged, CoinbaseOutputDataSize, NewTemplate,
    RequestTransactionData, RequestTransactionDataError, RequestTransactionDataSuccess,
    SetNewPrevHash, SetupConnection, SetupConnectionError, SetupConnectionSuccess, SubmitSolution,
};
use crate::Protocol;
use core::convert::TryFrom;
use core::fmt;
use sv2_wire::{from_bytes, Error, Serialize};

/// Every message this crate can decode, one variant per message type.
///
/// A frame payload plus the `msg_type` from its header is enough to build
/// one, see the [`TryFrom`] impl below.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Sv2Message {
    SetupConnection(SetupConnection),
    SetupConnectionSuccess(SetupConnectionSuccess),
    SetupConnectionError(SetupConnectionError),
    ChannelEndpointChanged(ChannelEndpointChanged),
    CoinbaseOutputDataSize(CoinbaseOutputDataSize),
    NewTemplate(NewTemplate),
    SetNewPrevHash(SetNewPrevHash),
    RequestTransactionData(RequestTransactionData),
    RequestTransactionDataSuccess(RequestTransactionDataSuccess),
    RequestTransactionDataError(RequestTransactionDataError),
    SubmitSolution(SubmitSolution),
}

impl Sv2Message {
    /// The message type number carried in the frame header.
    pub fn message_type(&self) -> u8 {
        match self {
            Sv2Message::SetupConnection(_) => MESSAGE_TYPE_SETUP_CONNECTION,
            Sv2Message::SetupConnectionSuccess(_) => MESSAGE_TYPE_SETUP_CONNECTION_SUCCESS,
            Sv2Message::SetupConnectionError(_) => MESSAGE_TYPE_SETUP_CONNECTION_ERROR,
            Sv2Message::ChannelEndpointChanged(_) => MESSAGE_TYPE_CHANNEL_ENDPOINT_CHANGED,
            Sv2Message::CoinbaseOutputDataSize(_) => MESSAGE_TYPE_COINBASE_OUTPUT_DATA_SIZE,
            Sv2Message::NewTemplate(_) => MESSAGE_TYPE_NEW_TEMPLATE,
            Sv2Message::SetNewPrevHash(_) => MESSAGE_TYPE_SET_NEW_PREV_HASH,
            Sv2Message::RequestTransactionData(_) => MESSAGE_TYPE_REQUEST_TRANSACTION_DATA,
            Sv2Message::RequestTransactionDataSuccess(_) => {
                MESSAGE_TYPE_REQUEST_TRANSACTION_DATA_SUCCESS
            }
            Sv2Message::RequestTransactionDataError(_) => {
                MESSAGE_TYPE_REQUEST_TRANSACTION_DATA_ERROR
            }
            Sv2Message::SubmitSolution(_) => MESSAGE_TYPE_SUBMIT_SOLUTION,
        }
    }

    /// The `channel_msg` bit frames carrying this message must set.
    pub fn channel_bit(&self) -> bool {
        match self {
            Sv2Message::SetupConnection(_) => CHANNEL_BIT_SETUP_CONNECTION,
            Sv2Message::SetupConnectionSuccess(_) => CHANNEL_BIT_SETUP_CONNECTION_SUCCESS,
            Sv2Message::SetupConnectionError(_) => CHANNEL_BIT_SETUP_CONNECTION_ERROR,
            Sv2Message::ChannelEndpointChanged(_) => CHANNEL_BIT_CHANNEL_ENDPOINT_CHANGED,
            Sv2Message::CoinbaseOutputDataSize(_) => CHANNEL_BIT_COINBASE_OUTPUT_DATA_SIZE,
            Sv2Message::NewTemplate(_) => CHANNEL_BIT_NEW_TEMPLATE,
            Sv2Message::SetNewPrevHash(_) => CHANNEL_BIT_SET_NEW_PREV_HASH,
            Sv2Message::RequestTransactionData(_) => CHANNEL_BIT_REQUEST_TRANSACTION_DATA,
            Sv2Message::RequestTransactionDataSuccess(_) => {
                CHANNEL_BIT_REQUEST_TRANSACTION_DATA_SUCCESS
            }
            Sv2Message::RequestTransactionDataError(_) => {
                CHANNEL_BIT_REQUEST_TRANSACTION_DATA_ERROR
            }
            Sv2Message::SubmitSolution(_) => CHANNEL_BIT_SUBMIT_SOLUTION,
        }
    }

    /// The sub-protocol the message belongs to. The connection setup
    /// messages are shared by all four and reported as the mining protocol,
    /// matching [`crate::registry::classify`].
    pub fn protocol(&self) -> Protocol {
        match self {
            Sv2Message::SetupConnection(_)
            | Sv2Message::SetupConnectionSuccess(_)
            | Sv2Message::SetupConnectionError(_)
            | Sv2Message::ChannelEndpointChanged(_) => Protocol::MiningProtocol,
            Sv2Message::CoinbaseOutputDataSize(_)
            | Sv2Message::NewTemplate(_)
            | Sv2Message::SetNewPrevHash(_)
            | Sv2Message::RequestTransactionData(_)
            | Sv2Message::RequestTransactionDataSuccess(_)
            | Sv2Message::RequestTransactionDataError(_)
            | Sv2Message::SubmitSolution(_) => Protocol::TemplateDistributionProtocol,
        }
    }
}

impl Serialize for Sv2Message {
    fn get_size(&self) -> usize {
        match self {
            Sv2Message::SetupConnection(m) => m.get_size(),
            Sv2Message::SetupConnectionSuccess(m) => m.get_size(),
            Sv2Message::SetupConnectionError(m) => m.get_size(),
            Sv2Message::ChannelEndpointChanged(m) => m.get_size(),
            Sv2Message::CoinbaseOutputDataSize(m) => m.get_size(),
            Sv2Message::NewTemplate(m) => m.get_size(),
            Sv2Message::SetNewPrevHash(m) => m.get_size(),
            Sv2Message::RequestTransactionData(m) => m.get_size(),
            Sv2Message::RequestTransactionDataSuccess(m) => m.get_size(),
            Sv2Message::RequestTransactionDataError(m) => m.get_size(),
            Sv2Message::SubmitSolution(m) => m.get_size(),
        }
    }

    fn serialize(&self, dst: &mut Vec<u8>) {
        match self {
            Sv2Message::SetupConnection(m) => m.serialize(dst),
            Sv2Message::SetupConnectionSuccess(m) => m.serialize(dst),
            Sv2Message::SetupConnectionError(m) => m.serialize(dst),
            Sv2Message::ChannelEndpointChanged(m) => m.serialize(dst),
            Sv2Message::CoinbaseOutputDataSize(m) => m.serialize(dst),
            Sv2Message::NewTemplate(m) => m.serialize(dst),
            Sv2Message::SetNewPrevHash(m) => m.serialize(dst),
            Sv2Message::RequestTransactionData(m) => m.serialize(dst),
            Sv2Message::RequestTransactionDataSuccess(m) => m.serialize(dst),
            Sv2Message::RequestTransactionDataError(m) => m.serialize(dst),
            Sv2Message::SubmitSolution(m) => m.serialize(dst),
        }
    }
}

impl fmt::Display for Sv2Message {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Sv2Message::SetupConnection(_) => "SetupConnection",
            Sv2Message::SetupConnectionSuccess(_) => "SetupConnection.Success",
            Sv2Message::SetupConnectionError(_) => "SetupConnection.Error",
            Sv2Message::ChannelEndpointChanged(_) => "ChannelEndpointChanged",
            Sv2Message::CoinbaseOutputDataSize(_) => "CoinbaseOutputDataSize",
            Sv2Message::NewTemplate(_) => "NewTemplate",
            Sv2Message::SetNewPrevHash(_) => "SetNewPrevHash",
            Sv2Message::RequestTransactionData(_) => "RequestTransactionData",
            Sv2Message::RequestTransactionDataSuccess(_) => "RequestTransactionData.Success",
            Sv2Message::RequestTransactionDataError(_) => "RequestTransactionData.Error",
            Sv2Message::SubmitSolution(_) => "SubmitSolution",
        };
        f.write_str(name)
    }
}

/// Decodes a frame payload into the message its header's `msg_type` names.
///
/// Fails with [`Error::UnknownMessageType`] for numbers this crate has no
/// typed message for, and with the decoding error otherwise.
impl TryFrom<(u8, &[u8])> for Sv2Message {
    type Error = Error;

    fn try_from(v: (u8, &[u8])) -> Result<Self, Error> {
        let (message_type, payload) = v;
        match message_type {
            MESSAGE_TYPE_SETUP_CONNECTION => {
                Ok(Sv2Message::SetupConnection(from_bytes(payload)?))
            }
            MESSAGE_TYPE_SETUP_CONNECTION_SUCCESS => {
                Ok(Sv2Message::SetupConnectionSuccess(from_bytes(payload)?))
            }
            MESSAGE_TYPE_SETUP_CONNECTION_ERROR => {
                Ok(Sv2Message::SetupConnectionError(from_bytes(payload)?))
            }
            MESSAGE_TYPE_CHANNEL_ENDPOINT_CHANGED => {
                Ok(Sv2Message::ChannelEndpointChanged(from_bytes(payload)?))
            }
            MESSAGE_TYPE_COINBASE_OUTPUT_DATA_SIZE => {
                Ok(Sv2Message::CoinbaseOutputDataSize(from_bytes(payload)?))
            }
            MESSAGE_TYPE_NEW_TEMPLATE => Ok(Sv2Message::NewTemplate(from_bytes(payload)?)),
            MESSAGE_TYPE_SET_NEW_PREV_HASH => {
                Ok(Sv2Message::SetNewPrevHash(from_bytes(payload)?))
            }
            MESSAGE_TYPE_REQUEST_TRANSACTION_DATA => {
                Ok(Sv2Message::RequestTransactionData(from_bytes(payload)?))
            }
            MESSAGE_TYPE_REQUEST_TRANSACTION_DATA_SUCCESS => Ok(
                Sv2Message::RequestTransactionDataSuccess(from_bytes(payload)?),
            ),
            MESSAGE_TYPE_REQUEST_TRANSACTION_DATA_ERROR => Ok(
                Sv2Message::RequestTransactionDataError(from_bytes(payload)?),
            ),
            MESSAGE_TYPE_SUBMIT_SOLUTION => Ok(Sv2Message::SubmitSolution(from_bytes(payload)?)),
            other => Err(Error::UnknownMessageType(other)),
        }
    }
}
