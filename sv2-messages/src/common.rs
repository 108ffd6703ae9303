use crate::Protocol;
use sv2_wire::{Serialize, Str0255};

/// ## SetupConnection (Client -> Server)
/// Initiates the connection. This MUST be the first message sent by the
/// client on the newly opened connection. Server MUST respond with either a
/// [`SetupConnectionSuccess`] or [`SetupConnectionError`] message. Clients
/// that are not configured to provide telemetry data to the upstream node
/// SHOULD set `device_id` to a 0-length string. However, they MUST always set
/// `vendor` to a string describing the manufacturer/developer and firmware
/// version and SHOULD always set `hardware_version` to a string describing,
/// at least, the particular hardware/software package in use.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SetupConnection {
    /// Sub-protocol this connection is for.
    pub protocol: Protocol,
    /// The minimum protocol version the client supports (currently must be 2).
    pub min_version: u16,
    /// The maximum protocol version the client supports (currently must be 2).
    pub max_version: u16,
    /// Flags indicating optional protocol features the client supports. Each
    /// protocol from [`Protocol`] has its own values/flags.
    pub flags: u32,
    /// ASCII text indicating the hostname or IP address.
    pub endpoint_host: Str0255,
    /// Connecting port value.
    pub endpoint_port: u16,
    //-- DEVICE INFORMATION --//
    pub vendor: Str0255,
    pub hardware_version: Str0255,
    pub firmware: Str0255,
    pub device_id: Str0255,
}

message_codec!(SetupConnection {
    protocol,
    min_version,
    max_version,
    flags,
    endpoint_host,
    endpoint_port,
    vendor,
    hardware_version,
    firmware,
    device_id,
});

/// ## SetupConnection.Success (Server -> Client)
/// Response to [`SetupConnection`] message if the server accepts the
/// connection. The client is required to verify the set of feature flags that
/// the server supports and act accordingly.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SetupConnectionSuccess {
    /// Selected version proposed by the connecting node that the upstream
    /// node supports. This version will be used on the connection for the
    /// rest of its life.
    pub used_version: u16,
    /// Flags indicating optional protocol features the server supports.
    pub flags: u32,
}

message_codec!(SetupConnectionSuccess {
    used_version,
    flags,
});

/// ## SetupConnection.Error (Server -> Client)
/// When protocol version negotiation fails (or there is another reason why
/// the upstream node cannot set up the connection) the server sends this
/// message with a particular error code prior to closing the connection.
///
/// ### Possible error codes:
/// * `unsupported-feature-flags`
/// * `unsupported-protocol`
/// * `protocol-version-mismatch`
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SetupConnectionError {
    /// Flags indicating features causing an error.
    pub flags: u32,
    /// Human-readable error code(s).
    pub error_code: Str0255,
}

message_codec!(SetupConnectionError {
    flags,
    error_code,
});

/// ## ChannelEndpointChanged (Server -> Client)
/// When a channel's upstream or downstream endpoint changes and that channel
/// had previously sent messages with the `channel_msg` bit set of unknown
/// `extension_type`, the intermediate proxy MUST send this message. Upon
/// receipt, any extension state (including version negotiation and the
/// presence of support for a given extension) MUST be reset and
/// version/presence negotiation must begin again.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ChannelEndpointChanged {
    /// The channel which has changed endpoint.
    pub channel_id: u32,
}

message_codec!(ChannelEndpointChanged { channel_id });
