//! Typed Sv2 messages.
//!
//! Covers the connection setup messages shared by every sub-protocol and the
//! template distribution set, plus the message type registry for all four
//! sub-protocols. The registry values are load bearing for interoperability
//! and must match every other implementation byte for byte.

use core::convert::TryFrom;
use sv2_wire::{Deserialize, Error, Reader, Serialize};

#[macro_use]
mod codec_macro;

mod common;
mod message;
pub mod registry;
mod template_distribution;

pub use common::{
    ChannelEndpointChanged, SetupConnection, SetupConnectionError, SetupConnectionSuccess,
};
pub use message::Sv2Message;
pub use registry::{classify, is_channel_msg};
pub use template_distribution::{
    CoinbaseOutputDataSize, NewTemplate, RequestTransactionData, RequestTransactionDataError,
    RequestTransactionDataSuccess, SetNewPrevHash, SubmitSolution,
};

/// The four sub-protocols sharing the Sv2 framing, one byte on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum Protocol {
    MiningProtocol = 0,
    JobNegotiationProtocol = 1,
    TemplateDistributionProtocol = 2,
    JobDistributionProtocol = 3,
}

impl Default for Protocol {
    fn default() -> Self {
        Protocol::MiningProtocol
    }
}

impl TryFrom<u8> for Protocol {
    type Error = Error;

    fn try_from(v: u8) -> Result<Self, Error> {
        match v {
            0 => Ok(Protocol::MiningProtocol),
            1 => Ok(Protocol::JobNegotiationProtocol),
            2 => Ok(Protocol::TemplateDistributionProtocol),
            3 => Ok(Protocol::JobDistributionProtocol),
            other => Err(Error::ValueIsNotAValidProtocol(other)),
        }
    }
}

impl Serialize for Protocol {
    fn get_size(&self) -> usize {
        1
    }

    fn serialize(&self, dst: &mut Vec<u8>) {
        dst.push(*self as u8);
    }
}

impl Deserialize for Protocol {
    fn deserialize(reader: &mut Reader<'_>) -> Result<Self, Error> {
        Protocol::try_from(reader.read_u8()?)
    }
}
