use crate::error::Result;
use crate::wire::constants::RESPONSE_SIZE;
use crate::wire::message::{Decode, RawResponse};
use crate::wire::payload::build_query;
use std::io::{self, Read, Write};

/// Writes a p0f API query for `addr` to the given writer.
///
/// The 21-byte query is built with [`build_query`] and written with a
/// single `write_all`, so a rejected address leaves the writer
/// untouched.
///
/// # Arguments
///
/// * `writer` - Any type implementing [`Write`] (e.g. `UnixStream`,
///              `Vec<u8>`, `BufWriter`)
/// * `addr`   - IPv4 address bytes; the last 4 are significant
///
/// # Example
///
/// ```
/// use p0f_client::wire;
///
/// let mut buffer = Vec::new();
///
/// wire::codec::send_query(&mut buffer, &[198, 51, 100, 23]).unwrap();
///
/// // The buffer now contains a complete query frame.
/// assert_eq!(buffer.len(), 21);
/// ```
///
/// # Errors
///
/// Returns an error if the address is shorter than 4 bytes or if
/// writing to the underlying stream fails.
pub fn send_query<W: Write>(writer: &mut W, addr: &[u8]) -> Result<()> {
    let query = build_query(addr)?;
    writer.write_all(&query)?;
    Ok(())
}

/// Reads one p0f API response record from the given reader.
///
/// The fixed 232-byte record is gathered with as many reads as the
/// stream needs; a read of zero (EOF) ends the fill early. Whatever
/// arrived is then decoded, so a half-closed or short stream surfaces
/// as a truncation error carrying the byte count, never as a
/// zero-padded record. Bytes past the record are left in the stream.
///
/// # Example
///
/// ```
/// use std::io::Cursor;
/// use p0f_client::wire::{self, constants};
///
/// // Minimal daemon reply: valid magic, every other field zero.
/// let mut bytes = vec![0u8; constants::RESPONSE_SIZE];
/// bytes[..4].copy_from_slice(&constants::RESPONSE_MAGIC.to_le_bytes());
///
/// let raw = wire::codec::read_response(&mut Cursor::new(bytes)).unwrap();
/// assert_eq!(raw.status, constants::STATUS_BAD_QUERY);
/// ```
///
/// # Errors
///
/// Returns an error if reading fails, if fewer bytes than the fixed
/// record size arrive, or if the record fails to decode.
pub fn read_response<R: Read>(reader: &mut R) -> Result<RawResponse> {
    let mut buf = [0u8; RESPONSE_SIZE];
    let mut filled = 0;

    while filled < RESPONSE_SIZE {
        match reader.read(&mut buf[filled..]) {
            Ok(0) => break,
            Ok(n) => filled += n,
            Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
            Err(e) => return Err(e.into()),
        }
    }

    RawResponse::decode(&buf[..filled])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use crate::wire::constants::{ADDR_IPV4, QUERY_MAGIC, QUERY_SIZE, RESPONSE_MAGIC, STATUS_OK};
    use std::io::Cursor;

    /// Builds a full daemon reply with the given status, OS name and
    /// distance; every other field zero.
    fn response_bytes(status: u32, os_name: &[u8], distance: u16) -> Vec<u8> {
        let mut b = vec![0u8; RESPONSE_SIZE];
        b[..4].copy_from_slice(&RESPONSE_MAGIC.to_le_bytes());
        b[4..8].copy_from_slice(&status.to_le_bytes());
        b[36..38].copy_from_slice(&distance.to_le_bytes());
        b[40..40 + os_name.len()].copy_from_slice(os_name);
        b
    }

    /// Yields the wrapped bytes at most `chunk` bytes per read, the
    /// way a socket may deliver a record in pieces.
    struct ChunkedReader {
        bytes: Vec<u8>,
        pos: usize,
        chunk: usize,
    }

    impl Read for ChunkedReader {
        fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
            let n = self.chunk.min(buf.len()).min(self.bytes.len() - self.pos);
            buf[..n].copy_from_slice(&self.bytes[self.pos..self.pos + n]);
            self.pos += n;
            Ok(n)
        }
    }

    #[test]
    fn send_query_writes_single_frame() {
        let mut buffer = Vec::new();
        send_query(&mut buffer, &[192, 168, 1, 20]).unwrap();

        assert_eq!(buffer.len(), QUERY_SIZE);
        assert_eq!(&buffer[..4], &QUERY_MAGIC.to_le_bytes());
        assert_eq!(buffer[4], ADDR_IPV4);
        assert_eq!(&buffer[5..9], &[192, 168, 1, 20]);
    }

    #[test]
    fn send_query_rejected_address_writes_nothing() {
        let mut buffer = Vec::new();
        let err = send_query(&mut buffer, &[10, 0]).unwrap_err();

        assert!(matches!(err, Error::UnsupportedAddress(2)));
        assert!(buffer.is_empty());
    }

    #[test]
    fn read_response_from_full_stream() {
        let bytes = response_bytes(STATUS_OK, b"OpenBSD", 7);
        let raw = read_response(&mut Cursor::new(bytes)).unwrap();

        assert_eq!(raw.status, STATUS_OK);
        assert_eq!(raw.distance, 7);
        assert_eq!(&raw.os_name[..7], b"OpenBSD");
        assert_eq!(raw.os_name[7], 0);
    }

    #[test]
    fn read_response_gathers_fragmented_stream() {
        let bytes = response_bytes(STATUS_OK, b"FreeBSD", 2);
        let mut reader = ChunkedReader {
            bytes: bytes.clone(),
            pos: 0,
            chunk: 7,
        };

        let raw = read_response(&mut reader).unwrap();
        assert_eq!(raw, RawResponse::decode(&bytes).unwrap());
    }

    #[test]
    fn read_response_truncated_stream_reports_byte_count() {
        let bytes = response_bytes(STATUS_OK, b"Linux", 3);
        let mut cursor = Cursor::new(&bytes[..50]);

        assert!(matches!(
            read_response(&mut cursor),
            Err(Error::Truncated { got: 50 })
        ));
    }

    #[test]
    fn read_response_empty_stream() {
        assert!(matches!(
            read_response(&mut Cursor::new(vec![])),
            Err(Error::Truncated { got: 0 })
        ));
    }

    #[test]
    fn read_response_consumes_exactly_one_record() {
        let mut bytes = response_bytes(STATUS_OK, b"Linux", 3);
        bytes.extend_from_slice(&[0xAB; 10]);
        let mut cursor = Cursor::new(bytes);

        let raw = read_response(&mut cursor).unwrap();
        assert_eq!(raw.status, STATUS_OK);
        assert_eq!(cursor.position() as usize, RESPONSE_SIZE);
    }
}
