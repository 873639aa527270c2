use std::os::unix::net::UnixStream;
use std::path::Path;
use std::time::Duration;

use log::debug;

use crate::error::Result;
use crate::wire::constants::QUERY_SIZE;
use crate::wire::{read_response, send_query, HostInfo, Status};

/// A connection to a running p0f daemon's API socket.
///
/// One client owns one `UnixStream` and drives one query/response
/// exchange at a time: [`Client::query`] takes `&mut self`, so
/// interleaving exchanges on a shared client is a compile error.
/// Callers wanting cross-thread sharing wrap the client in a `Mutex`.
///
/// Dropping the client closes the socket.
#[derive(Debug)]
pub struct Client {
    stream: UnixStream,
}

impl Client {
    /// Connects to the daemon's API socket at `path`.
    ///
    /// The daemon must be running with `-s <path>`. No timeout is
    /// applied; see [`Client::set_timeout`].
    pub fn connect<P: AsRef<Path>>(path: P) -> Result<Self> {
        let stream = UnixStream::connect(path)?;
        Ok(Self::new(stream))
    }

    /// Wraps an already connected stream.
    pub fn new(stream: UnixStream) -> Self {
        Self { stream }
    }

    /// Applies `timeout` to both reads and writes on the socket.
    ///
    /// `None` removes any deadline. The client itself never imposes
    /// one, so without this an unresponsive daemon blocks `query`
    /// indefinitely.
    pub fn set_timeout(&self, timeout: Option<Duration>) -> Result<()> {
        self.stream.set_read_timeout(timeout)?;
        self.stream.set_write_timeout(timeout)?;
        Ok(())
    }

    /// Queries the daemon for the host at `addr`.
    ///
    /// `addr` holds IPv4 address bytes with the last 4 significant,
    /// so both `Ipv4Addr::octets()` and a 16-byte IPv4-mapped buffer
    /// work. One call performs exactly one write-then-read exchange
    /// on the socket.
    ///
    /// # Errors
    ///
    /// A short address is rejected before anything is written.
    /// Transport failures, malformed responses and daemon-reported
    /// outcomes (no match, bad query, unknown status) each surface as
    /// their own [`Error`](crate::error::Error) variant.
    pub fn query(&mut self, addr: &[u8]) -> Result<HostInfo> {
        send_query(&mut self.stream, addr)?;
        debug!("sent query: {} bytes", QUERY_SIZE);

        let raw = read_response(&mut self.stream)?;
        debug!("received response: status {:?}", Status::from(raw.status));

        HostInfo::try_from(raw)
    }

    /// Closes the connection.
    ///
    /// Equivalent to dropping the client; provided so call sites can
    /// state the intent. Consuming `self` makes later use a compile
    /// error.
    pub fn close(self) {}
}
