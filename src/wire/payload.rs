use crate::error::{Error, Result};
use crate::wire::constants::{ADDR_IPV4, QUERY_MAGIC, QUERY_SIZE};

/// Builds a p0f API query for an IPv4 address.
///
/// The query layout is:
///
/// ```text
/// u32       magic (LE)          0x50304601
/// u8        address family      0x04 (IPv4)
/// [u8; 16]  address             4 significant bytes, left-aligned
/// ```
///
/// Total: 21 bytes.
///
/// The significant bytes are taken from the END of `addr`, so both a
/// plain 4-byte IPv4 slice and the 16-byte IPv4-mapped form
/// (`::ffff:a.b.c.d`) encode the same query. The remaining 12 bytes
/// of the address field stay zero.
///
/// Each call fills a fresh stack buffer; the builder is pure and
/// deterministic.
///
/// # Example
///
/// ```
/// use p0f_client::wire;
///
/// let query = wire::payload::build_query(&[192, 0, 2, 7]).unwrap();
///
/// assert_eq!(query.len(), 21);
/// assert_eq!(query[4], 0x04);
/// assert_eq!(&query[5..9], &[192, 0, 2, 7]);
/// ```
///
/// # Errors
///
/// Returns [`Error::UnsupportedAddress`] when `addr` holds fewer than
/// 4 bytes; nothing shorter can name an IPv4 host, and sending a
/// padded query would silently fingerprint the wrong address.
pub fn build_query(addr: &[u8]) -> Result<[u8; QUERY_SIZE]> {
    if addr.len() < 4 {
        return Err(Error::UnsupportedAddress(addr.len()));
    }

    let ip = &addr[addr.len() - 4..];

    let mut query = [0u8; QUERY_SIZE];
    query[..4].copy_from_slice(&QUERY_MAGIC.to_le_bytes());
    query[4] = ADDR_IPV4;
    query[5..9].copy_from_slice(ip);

    Ok(query)
}
