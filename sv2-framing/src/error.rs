use core::fmt;

#[derive(Debug, PartialEq, Eq)]
pub enum Error {
    WireError(sv2_wire::Error),
    /// Header parsed from fewer bytes than [`crate::Header::SIZE`]; carries
    /// how many bytes are missing. A streaming condition, not a protocol
    /// violation.
    UnexpectedHeaderLength(usize),
    /// Payload length does not fit the header's length field.
    PayloadTooBig(usize),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use Error::*;
        match self {
            WireError(ref e) => write!(f, "WireError: `{}`", e),
            UnexpectedHeaderLength(n) => {
                write!(f, "Incomplete `Header`, missing `{}` bytes", n)
            }
            PayloadTooBig(n) => write!(f, "Payload of `{}` bytes does not fit the frame", n),
        }
    }
}

impl From<sv2_wire::Error> for Error {
    fn from(e: sv2_wire::Error) -> Self {
        Error::WireError(e)
    }
}
