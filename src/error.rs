//! Error types for the p0f API client.

use thiserror::Error;

use crate::wire::constants::RESPONSE_SIZE;

/// Everything that can go wrong between building a query and refining
/// the daemon's answer. Transport failures, malformed responses and
/// daemon-reported outcomes are distinct variants so callers can treat
/// "no match" differently from a broken socket.
#[derive(Error, Debug)]
pub enum Error {
    /// The address slice carries fewer than the 4 bytes an IPv4 query
    /// needs. Raised before anything is written to the socket.
    #[error("unsupported address: got {0} bytes, need at least 4")]
    UnsupportedAddress(usize),

    /// Connecting, writing or reading the daemon socket failed.
    #[error("daemon connection failed: {0}")]
    ConnectionFailed(#[from] std::io::Error),

    /// The stream ended before a full response record arrived.
    #[error("truncated response: got {got} of {} bytes", RESPONSE_SIZE)]
    Truncated { got: usize },

    /// The response did not start with the expected magic value.
    #[error("bad response magic 0x{0:08x}")]
    BadMagic(u32),

    /// The daemon has no cached fingerprint for the queried address.
    #[error("no matching host in the daemon cache")]
    NoMatch,

    /// The daemon rejected the query as malformed.
    #[error("daemon rejected the query")]
    BadQuery,

    /// The daemon answered with a status code this crate does not know.
    #[error("unknown response status 0x{0:08x}")]
    UnknownStatus(u32),
}

pub type Result<T> = std::result::Result<T, Error>;
