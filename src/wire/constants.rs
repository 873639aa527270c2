/// Magic value opening every p0f API query.
///
/// The first 4 bytes of a query identify it to the daemon and double
/// as a framing check on the socket. The value is serialized as a
/// little-endian u32, so the on-wire byte sequence is `01 46 30 50`
/// (`\x01F0P`).
///
/// Defined as `P0F_QUERY_MAGIC` in the p0f source (api.h):
/// https://lcamtuf.coredump.cx/p0f3/
pub const QUERY_MAGIC: u32 = 0x50304601;

/// Magic value opening every p0f API response.
///
/// Serialized little-endian; on the wire the bytes are `02 46 30 50`
/// (`\x02F0P`). A response whose first 4 bytes differ is not a p0f
/// API record and must be rejected rather than parsed further.
///
/// Defined as `P0F_RESP_MAGIC` in the p0f source (api.h).
pub const RESPONSE_MAGIC: u32 = 0x50304602;

/// Response status: the daemon could not parse the query.
///
/// Sent when the query magic, address type or frame length is wrong.
/// `P0F_STATUS_BADQUERY` in api.h.
pub const STATUS_BAD_QUERY: u32 = 0x00;

/// Response status: the queried host was found in the daemon cache.
///
/// Only responses carrying this status have meaningful fingerprint
/// fields; everything past `status` is undefined otherwise.
/// `P0F_STATUS_OK` in api.h.
pub const STATUS_OK: u32 = 0x10;

/// Response status: no cached fingerprint for the queried address.
///
/// Not an I/O failure. The daemon only knows hosts it has passively
/// observed, so this is a routine outcome for quiet or new peers.
/// `P0F_STATUS_NOMATCH` in api.h.
pub const STATUS_NO_MATCH: u32 = 0x20;

/// Address family tag for an IPv4 query (`P0F_ADDR_IPV4`).
///
/// Follows the query magic; the 4 significant address bytes are then
/// left-aligned in the fixed 16-byte address field.
pub const ADDR_IPV4: u8 = 0x04;

/// Address family tag for an IPv6 query (`P0F_ADDR_IPV6`).
///
/// Declared for completeness of the wire contract; this crate only
/// builds IPv4 queries and no path emits this tag.
pub const ADDR_IPV6: u8 = 0x06;

/// Match-quality bit: the OS signature matched fuzzily.
///
/// Set in the `os_match_q` response field when volatile quantities
/// such as TTL had to be approximated. `P0F_MATCH_FUZZY` in api.h.
pub const MATCH_FUZZY: u8 = 0x01;

/// Match-quality bit: the match came from a generic signature.
///
/// Generic signatures identify a broad class (e.g. "Linux 2.2.x-3.x")
/// rather than one exact stack. `P0F_MATCH_GENERIC` in api.h.
pub const MATCH_GENERIC: u8 = 0x02;

/// Maximum length of a response text field, excluding the NUL.
///
/// Each of the six text fields occupies `STR_MAX + 1` bytes on the
/// wire and is zero padded. `P0F_STR_MAX` in api.h.
pub const STR_MAX: usize = 31;

/// Size of the fixed address field inside a query.
///
/// Wide enough for IPv6; an IPv4 query uses the first 4 bytes and
/// leaves the remaining 12 zero.
pub const QUERY_ADDR_SIZE: usize = 16;

/// Total size of an API query in bytes.
///
/// ```text
/// 4  bytes  magic (LE)
/// 1  byte   address family tag
/// 16 bytes  address, left-aligned, zero padded
/// ```
///
/// Total: 21 bytes, always, regardless of address family.
pub const QUERY_SIZE: usize = 4 + 1 + QUERY_ADDR_SIZE;

/// Total size of an API response in bytes.
///
/// ```text
/// 4  bytes  magic (LE)
/// 4  bytes  status
/// 4  bytes  first_seen (Unix time)
/// 4  bytes  last_seen (Unix time)
/// 4  bytes  total_conn
/// 4  bytes  uptime_min
/// 4  bytes  up_mod_days
/// 4  bytes  last_nat (Unix time)
/// 4  bytes  last_chg (Unix time)
/// 2  bytes  distance
/// 1  byte   bad_sw
/// 1  byte   os_match_q
/// 32 bytes  os_name
/// 32 bytes  os_flavor
/// 32 bytes  http_name
/// 32 bytes  http_flavor
/// 32 bytes  link_type
/// 32 bytes  language
/// ```
///
/// Total: 232 bytes. All multi-byte integers little-endian.
///
/// This matches `struct p0f_api_response` in the daemon's api.h
/// (p0f 3.06b and later), where `distance` is 16 bits. Some
/// third-party clients widen the field to 32 bits and expect a
/// differently sized record; those do not interoperate with the
/// actual daemon.
pub const RESPONSE_SIZE: usize = 4 + 4 + 7 * 4 + 2 + 1 + 1 + 6 * (STR_MAX + 1);

/// Wire value of `distance` when the daemon has no measurement.
///
/// The daemon stores distance as a signed 16-bit value and writes -1
/// for "unknown"; on the unsigned wire view that is 0xffff.
pub const DISTANCE_UNKNOWN: u16 = 0xffff;
