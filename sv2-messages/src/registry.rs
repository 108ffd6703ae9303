//! Message type numbers and `channel_msg` bits for every Sv2 message.
//!
//! These values identify messages on the wire across all four sub-protocols,
//! so they must match every other implementation exactly. The typed messages
//! in this crate cover the common and template distribution sets; the mining
//! and job negotiation numbers are listed so a router can classify frames it
//! does not decode itself.

use crate::Protocol;

// Common messages.
pub const MESSAGE_TYPE_SETUP_CONNECTION: u8 = 0;
pub const MESSAGE_TYPE_SETUP_CONNECTION_SUCCESS: u8 = 1;
pub const MESSAGE_TYPE_SETUP_CONNECTION_ERROR: u8 = 2;
pub const MESSAGE_TYPE_CHANNEL_ENDPOINT_CHANGED: u8 = 3;

// Template distribution messages.
pub const MESSAGE_TYPE_COINBASE_OUTPUT_DATA_SIZE: u8 = 112;
pub const MESSAGE_TYPE_NEW_TEMPLATE: u8 = 113;
pub const MESSAGE_TYPE_SET_NEW_PREV_HASH: u8 = 114;
pub const MESSAGE_TYPE_REQUEST_TRANSACTION_DATA: u8 = 115;
pub const MESSAGE_TYPE_REQUEST_TRANSACTION_DATA_SUCCESS: u8 = 116;
pub const MESSAGE_TYPE_REQUEST_TRANSACTION_DATA_ERROR: u8 = 117;
pub const MESSAGE_TYPE_SUBMIT_SOLUTION: u8 = 118;

// Job negotiation messages.
pub const MESSAGE_TYPE_ALLOCATE_MINING_JOB_TOKEN: u8 = 80;
pub const MESSAGE_TYPE_ALLOCATE_MINING_JOB_SUCCESS: u8 = 81;
pub const MESSAGE_TYPE_ALLOCATE_MINING_JOB_ERROR: u8 = 82;
pub const MESSAGE_TYPE_IDENTIFY_TRANSACTIONS: u8 = 83;
pub const MESSAGE_TYPE_IDENTIFY_TRANSACTIONS_SUCCESS: u8 = 84;
pub const MESSAGE_TYPE_PROVIDE_MISSING_TRANSACTION: u8 = 85;
pub const MESSAGE_TYPE_PROVIDE_MISSING_TRANSACTION_SUCCESS: u8 = 86;
pub const MESSAGE_TYPE_COMMIT_MINING_JOB: u8 = 87;
pub const MESSAGE_TYPE_COMMIT_MINING_JOB_SUCCESS: u8 = 88;
pub const MESSAGE_TYPE_COMMIT_MINING_JOB_ERROR: u8 = 89;

// Mining messages.
pub const MESSAGE_TYPE_OPEN_STANDARD_MINING_CHANNEL: u8 = 16;
pub const MESSAGE_TYPE_OPEN_STANDARD_MINING_CHANNEL_SUCCESS: u8 = 17;
pub const MESSAGE_TYPE_OPEN_MINING_CHANNEL_ERROR: u8 = 18;
pub const MESSAGE_TYPE_OPEN_EXTENDED_MINING_CHANNEL: u8 = 19;
pub const MESSAGE_TYPE_OPEN_EXTENDED_MINING_CHANNEL_SUCCES: u8 = 20;
pub const MESSAGE_TYPE_UPDATE_CHANNEL: u8 = 22;
pub const MESSAGE_TYPE_UPDATE_CHANNEL_ERROR: u8 = 23;
pub const MESSAGE_TYPE_CLOSE_CHANNEL: u8 = 24;
pub const MESSAGE_TYPE_SET_EXTRANONCE_PREFIX: u8 = 25;
pub const MESSAGE_TYPE_SUBMIT_SHARES_STANDARD: u8 = 26;
pub const MESSAGE_TYPE_SUBMIT_SHARES_EXTENDED: u8 = 27;
pub const MESSAGE_TYPE_SUBMIT_SHARES_SUCCESS: u8 = 28;
pub const MESSAGE_TYPE_SUBMIT_SHARES_ERROR: u8 = 29;
pub const MESSAGE_TYPE_NEW_MINING_JOB: u8 = 30;
pub const MESSAGE_TYPE_NEW_EXTENDED_MINING_JOB: u8 = 31;
pub const MESSAGE_TYPE_MINING_SET_NEW_PREV_HASH: u8 = 32;
pub const MESSAGE_TYPE_SET_TARGET: u8 = 33;
pub const MESSAGE_TYPE_SET_CUSTOM_MINING_JOB: u8 = 34;
pub const MESSAGE_TYPE_SET_CUSTOM_MINING_JOB_SUCCESS: u8 = 35;
pub const MESSAGE_TYPE_SET_CUSTOM_MINING_JOB_ERROR: u8 = 36;
pub const MESSAGE_TYPE_RECONNECT: u8 = 37;
pub const MESSAGE_TYPE_SET_GROUP_CHANNEL: u8 = 38;

pub const CHANNEL_BIT_SETUP_CONNECTION: bool = false;
pub const CHANNEL_BIT_SETUP_CONNECTION_SUCCESS: bool = false;
pub const CHANNEL_BIT_SETUP_CONNECTION_ERROR: bool = false;
pub const CHANNEL_BIT_CHANNEL_ENDPOINT_CHANGED: bool = true;

pub const CHANNEL_BIT_COINBASE_OUTPUT_DATA_SIZE: bool = false;
pub const CHANNEL_BIT_NEW_TEMPLATE: bool = false;
pub const CHANNEL_BIT_SET_NEW_PREV_HASH: bool = false;
pub const CHANNEL_BIT_REQUEST_TRANSACTION_DATA: bool = false;
pub const CHANNEL_BIT_REQUEST_TRANSACTION_DATA_SUCCESS: bool = false;
pub const CHANNEL_BIT_REQUEST_TRANSACTION_DATA_ERROR: bool = false;
pub const CHANNEL_BIT_SUBMIT_SOLUTION: bool = false;

pub const CHANNEL_BIT_ALLOCATE_MINING_JOB_TOKEN: bool = false;
pub const CHANNEL_BIT_ALLOCATE_MINING_JOB_SUCCESS: bool = false;
pub const CHANNEL_BIT_ALLOCATE_MINING_JOB_ERROR: bool = false;
pub const CHANNEL_BIT_IDENTIFY_TRANSACTIONS: bool = false;
pub const CHANNEL_BIT_IDENTIFY_TRANSACTIONS_SUCCESS: bool = false;
pub const CHANNEL_BIT_PROVIDE_MISSING_TRANSACTION: bool = false;
pub const CHANNEL_BIT_PROVIDE_MISSING_TRANSACTION_SUCCESS: bool = false;
pub const CHANNEL_BIT_COMMIT_MINING_JOB: bool = false;
pub const CHANNEL_BIT_COMMIT_MINING_JOB_SUCCESS: bool = false;
pub const CHANNEL_BIT_COMMIT_MINING_JOB_ERROR: bool = false;

pub const CHANNEL_BIT_OPEN_STANDARD_MINING_CHANNEL: bool = false;
pub const CHANNEL_BIT_OPEN_STANDARD_MINING_CHANNEL_SUCCESS: bool = false;
pub const CHANNEL_BIT_OPEN_MINING_CHANNEL_ERROR: bool = false;
pub const CHANNEL_BIT_OPEN_EXTENDED_MINING_CHANNEL: bool = false;
pub const CHANNEL_BIT_OPEN_EXTENDED_MINING_CHANNEL_SUCCES: bool = false;
pub const CHANNEL_BIT_UPDATE_CHANNEL: bool = true;
pub const CHANNEL_BIT_UPDATE_CHANNEL_ERROR: bool = true;
pub const CHANNEL_BIT_CLOSE_CHANNEL: bool = true;
pub const CHANNEL_BIT_SET_EXTRANONCE_PREFIX: bool = true;
pub const CHANNEL_BIT_SUBMIT_SHARES_STANDARD: bool = true;
pub const CHANNEL_BIT_SUBMIT_SHARES_EXTENDED: bool = true;
pub const CHANNEL_BIT_SUBMIT_SHARES_SUCCESS: bool = true;
pub const CHANNEL_BIT_SUBMIT_SHARES_ERROR: bool = true;
pub const CHANNEL_BIT_NEW_MINING_JOB: bool = true;
pub const CHANNEL_BIT_NEW_EXTENDED_MINING_JOB: bool = true;
pub const CHANNEL_BIT_MINING_SET_NEW_PREV_HASH: bool = true;
pub const CHANNEL_BIT_SET_TARGET: bool = true;
pub const CHANNEL_BIT_SET_CUSTOM_MINING_JOB: bool = false;
pub const CHANNEL_BIT_SET_CUSTOM_MINING_JOB_SUCCESS: bool = false;
pub const CHANNEL_BIT_SET_CUSTOM_MINING_JOB_ERROR: bool = false;
pub const CHANNEL_BIT_RECONNECT: bool = false;
pub const CHANNEL_BIT_SET_GROUP_CHANNEL: bool = false;

/// Maps a message type number to the sub-protocol it belongs to and the
/// `channel_msg` bit its frames must carry. `None` for unassigned numbers.
///
/// The common messages (0..=3) are shared by every sub-protocol; they are
/// reported here under [`Protocol::MiningProtocol`].
pub fn classify(message_type: u8) -> Option<(Protocol, bool)> {
    use Protocol::*;
    match message_type {
        MESSAGE_TYPE_SETUP_CONNECTION => Some((MiningProtocol, CHANNEL_BIT_SETUP_CONNECTION)),
        MESSAGE_TYPE_SETUP_CONNECTION_SUCCESS => {
            Some((MiningProtocol, CHANNEL_BIT_SETUP_CONNECTION_SUCCESS))
        }
        MESSAGE_TYPE_SETUP_CONNECTION_ERROR => {
            Some((MiningProtocol, CHANNEL_BIT_SETUP_CONNECTION_ERROR))
        }
        MESSAGE_TYPE_CHANNEL_ENDPOINT_CHANGED => {
            Some((MiningProtocol, CHANNEL_BIT_CHANNEL_ENDPOINT_CHANGED))
        }
        MESSAGE_TYPE_OPEN_STANDARD_MINING_CHANNEL => {
            Some((MiningProtocol, CHANNEL_BIT_OPEN_STANDARD_MINING_CHANNEL))
        }
        MESSAGE_TYPE_OPEN_STANDARD_MINING_CHANNEL_SUCCESS => Some((
            MiningProtocol,
            CHANNEL_BIT_OPEN_STANDARD_MINING_CHANNEL_SUCCESS,
        )),
        MESSAGE_TYPE_OPEN_MINING_CHANNEL_ERROR => {
            Some((MiningProtocol, CHANNEL_BIT_OPEN_MINING_CHANNEL_ERROR))
        }
        MESSAGE_TYPE_OPEN_EXTENDED_MINING_CHANNEL => {
            Some((MiningProtocol, CHANNEL_BIT_OPEN_EXTENDED_MINING_CHANNEL))
        }
        MESSAGE_TYPE_OPEN_EXTENDED_MINING_CHANNEL_SUCCES => Some((
            MiningProtocol,
            CHANNEL_BIT_OPEN_EXTENDED_MINING_CHANNEL_SUCCES,
        )),
        MESSAGE_TYPE_UPDATE_CHANNEL => Some((MiningProtocol, CHANNEL_BIT_UPDATE_CHANNEL)),
        MESSAGE_TYPE_UPDATE_CHANNEL_ERROR => {
            Some((MiningProtocol, CHANNEL_BIT_UPDATE_CHANNEL_ERROR))
        }
        MESSAGE_TYPE_CLOSE_CHANNEL => Some((MiningProtocol, CHANNEL_BIT_CLOSE_CHANNEL)),
        MESSAGE_TYPE_SET_EXTRANONCE_PREFIX => {
            Some((MiningProtocol, CHANNEL_BIT_SET_EXTRANONCE_PREFIX))
        }
        MESSAGE_TYPE_SUBMIT_SHARES_STANDARD => {
            Some((MiningProtocol, CHANNEL_BIT_SUBMIT_SHARES_STANDARD))
        }
        MESSAGE_TYPE_SUBMIT_SHARES_EXTENDED => {
            Some((MiningProtocol, CHANNEL_BIT_SUBMIT_SHARES_EXTENDED))
        }
        MESSAGE_TYPE_SUBMIT_SHARES_SUCCESS => {
            Some((MiningProtocol, CHANNEL_BIT_SUBMIT_SHARES_SUCCESS))
        }
        MESSAGE_TYPE_SUBMIT_SHARES_ERROR => {
            Some((MiningProtocol, CHANNEL_BIT_SUBMIT_SHARES_ERROR))
        }
        MESSAGE_TYPE_NEW_MINING_JOB => Some((MiningProtocol, CHANNEL_BIT_NEW_MINING_JOB)),
        MESSAGE_TYPE_NEW_EXTENDED_MINING_JOB => {
            Some((MiningProtocol, CHANNEL_BIT_NEW_EXTENDED_MINING_JOB))
        }
        MESSAGE_TYPE_MINING_SET_NEW_PREV_HASH => {
            Some((MiningProtocol, CHANNEL_BIT_MINING_SET_NEW_PREV_HASH))
        }
        MESSAGE_TYPE_SET_TARGET => Some((MiningProtocol, CHANNEL_BIT_SET_TARGET)),
        MESSAGE_TYPE_SET_CUSTOM_MINING_JOB => {
            Some((MiningProtocol, CHANNEL_BIT_SET_CUSTOM_MINING_JOB))
        }
        MESSAGE_TYPE_SET_CUSTOM_MINING_JOB_SUCCESS => {
            Some((MiningProtocol, CHANNEL_BIT_SET_CUSTOM_MINING_JOB_SUCCESS))
        }
        MESSAGE_TYPE_SET_CUSTOM_MINING_JOB_ERROR => {
            Some((MiningProtocol, CHANNEL_BIT_SET_CUSTOM_MINING_JOB_ERROR))
        }
        MESSAGE_TYPE_RECONNECT => Some((MiningProtocol, CHANNEL_BIT_RECONNECT)),
        MESSAGE_TYPE_SET_GROUP_CHANNEL => Some((MiningProtocol, CHANNEL_BIT_SET_GROUP_CHANNEL)),
        MESSAGE_TYPE_ALLOCATE_MINING_JOB_TOKEN => Some((
            JobNegotiationProtocol,
            CHANNEL_BIT_ALLOCATE_MINING_JOB_TOKEN,
        )),
        MESSAGE_TYPE_ALLOCATE_MINING_JOB_SUCCESS => Some((
            JobNegotiationProtocol,
            CHANNEL_BIT_ALLOCATE_MINING_JOB_SUCCESS,
        )),
        MESSAGE_TYPE_ALLOCATE_MINING_JOB_ERROR => Some((
            JobNegotiationProtocol,
            CHANNEL_BIT_ALLOCATE_MINING_JOB_ERROR,
        )),
        MESSAGE_TYPE_IDENTIFY_TRANSACTIONS => {
            Some((JobNegotiationProtocol, CHANNEL_BIT_IDENTIFY_TRANSACTIONS))
        }
        MESSAGE_TYPE_IDENTIFY_TRANSACTIONS_SUCCESS => Some((
            JobNegotiationProtocol,
            CHANNEL_BIT_IDENTIFY_TRANSACTIONS_SUCCESS,
        )),
        MESSAGE_TYPE_PROVIDE_MISSING_TRANSACTION => Some((
            JobNegotiationProtocol,
            CHANNEL_BIT_PROVIDE_MISSING_TRANSACTION,
        )),
        MESSAGE_TYPE_PROVIDE_MISSING_TRANSACTION_SUCCESS => Some((
            JobNegotiationProtocol,
            CHANNEL_BIT_PROVIDE_MISSING_TRANSACTION_SUCCESS,
        )),
        MESSAGE_TYPE_COMMIT_MINING_JOB => {
            Some((JobNegotiationProtocol, CHANNEL_BIT_COMMIT_MINING_JOB))
        }
        MESSAGE_TYPE_COMMIT_MINING_JOB_SUCCESS => Some((
            JobNegotiationProtocol,
            CHANNEL_BIT_COMMIT_MINING_JOB_SUCCESS,
        )),
        MESSAGE_TYPE_COMMIT_MINING_JOB_ERROR => {
            Some((JobNegotiationProtocol, CHANNEL_BIT_COMMIT_MINING_JOB_ERROR))
        }
        MESSAGE_TYPE_COINBASE_OUTPUT_DATA_SIZE => Some((
            TemplateDistributionProtocol,
            CHANNEL_BIT_COINBASE_OUTPUT_DATA_SIZE,
        )),
        MESSAGE_TYPE_NEW_TEMPLATE => {
            Some((TemplateDistributionProtocol, CHANNEL_BIT_NEW_TEMPLATE))
        }
        MESSAGE_TYPE_SET_NEW_PREV_HASH => {
            Some((TemplateDistributionProtocol, CHANNEL_BIT_SET_NEW_PREV_HASH))
        }
        MESSAGE_TYPE_REQUEST_TRANSACTION_DATA => Some((
            TemplateDistributionProtocol,
            CHANNEL_BIT_REQUEST_TRANSACTION_DATA,
        )),
        MESSAGE_TYPE_REQUEST_TRANSACTION_DATA_SUCCESS => Some((
            TemplateDistributionProtocol,
            CHANNEL_BIT_REQUEST_TRANSACTION_DATA_SUCCESS,
        )),
        MESSAGE_TYPE_REQUEST_TRANSACTION_DATA_ERROR => Some((
            TemplateDistributionProtocol,
            CHANNEL_BIT_REQUEST_TRANSACTION_DATA_ERROR,
        )),
        MESSAGE_TYPE_SUBMIT_SOLUTION => {
            Some((TemplateDistributionProtocol, CHANNEL_BIT_SUBMIT_SOLUTION))
        }
        _ => None,
    }
}

/// The `channel_msg` bit for a known message type, `false` for unknown ones.
pub fn is_channel_msg(message_type: u8) -> bool {
    match classify(message_type) {
        Some((_, channel_msg)) => channel_msg,
        None => false,
    }
}
