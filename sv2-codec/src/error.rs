use core::fmt;

/// Everything that can go wrong while encoding or decoding frames.
///
/// Only [`Error::MissingBytes`] is recoverable: the caller performs more I/O
/// and retries. Every other variant means the connection can not continue
/// and must be closed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// The decoder needs this many more bytes before it can produce a frame.
    MissingBytes(usize),
    /// The encoder slot still holds a frame that has not been flushed.
    EncoderBusy,
    /// Reserved for operations not implemented yet.
    Todo,
    /// A well formed frame carries a message type with no known decoding.
    UnknownMessageType(u8),
    /// The bytes on the wire can not be a valid Sv2 frame.
    InvalidSv2Frame,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::MissingBytes(n) => write!(f, "{} more bytes needed", n),
            Error::EncoderBusy => write!(f, "encoder slot holds an unflushed frame"),
            Error::Todo => write!(f, "not implemented"),
            Error::UnknownMessageType(t) => write!(f, "unknown message type {}", t),
            Error::InvalidSv2Frame => write!(f, "invalid Sv2 frame"),
        }
    }
}

impl From<sv2_framing::Error> for Error {
    fn from(_: sv2_framing::Error) -> Self {
        Error::InvalidSv2Frame
    }
}

impl From<sv2_wire::Error> for Error {
    fn from(e: sv2_wire::Error) -> Self {
        match e {
            sv2_wire::Error::UnknownMessageType(t) => Error::UnknownMessageType(t),
            _ => Error::InvalidSv2Frame,
        }
    }
}

impl From<crate::AeadError> for Error {
    fn from(_: crate::AeadError) -> Self {
        Error::InvalidSv2Frame
    }
}
