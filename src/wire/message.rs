use crate::error::{Error, Result};
use crate::wire::constants::{
    MATCH_FUZZY, MATCH_GENERIC, STATUS_BAD_QUERY, STATUS_NO_MATCH, STATUS_OK, STR_MAX,
};

/// A raw p0f API response record.
///
/// This struct mirrors the fixed 232-byte record the daemon writes on
/// its API socket, field for field (see
/// [`RESPONSE_SIZE`](crate::wire::constants::RESPONSE_SIZE) for the
/// byte layout). Integers are already converted from little-endian;
/// the six text fields are kept as the verbatim zero-padded byte
/// arrays so the record round-trips bit-exactly.
///
/// `RawResponse` performs no interpretation: the status is an
/// unvalidated code and the fingerprint fields may be garbage when
/// the status is not OK. Conversion to [`HostInfo`] applies the
/// status rules.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawResponse {
    pub magic: u32,
    pub status: u32,
    /// First observation of the host, Unix time.
    pub first_seen: u32,
    /// Most recent observation of the host, Unix time.
    pub last_seen: u32,
    /// Total connections seen from the host.
    pub total_conn: u32,
    /// Last measured uptime in minutes, 0 if never measured.
    pub uptime_min: u32,
    /// Wraparound period of the host's timestamp clock, in days.
    pub up_mod_days: u32,
    /// Last NAT detection, Unix time, 0 if never.
    pub last_nat: u32,
    /// Last OS-change detection, Unix time, 0 if never.
    pub last_chg: u32,
    /// Network distance in hops; 0xffff when not measured.
    pub distance: u16,
    /// 0 = looks honest, 1 = possibly lying about User-Agent or
    /// Server, 2 = definitely lying.
    pub bad_sw: u8,
    /// Two-bit match quality field, see [`MatchQuality`].
    pub os_match_q: u8,
    pub os_name: [u8; STR_MAX + 1],
    pub os_flavor: [u8; STR_MAX + 1],
    pub http_name: [u8; STR_MAX + 1],
    pub http_flavor: [u8; STR_MAX + 1],
    pub link_type: [u8; STR_MAX + 1],
    pub language: [u8; STR_MAX + 1],
}

/// Implemented by types that can be decoded from raw p0f API bytes.
pub trait Decode: Sized {
    fn decode(bytes: &[u8]) -> Result<Self>;
}

/// Decoded response status.
///
/// The daemon reports exactly three codes; anything else is carried
/// through as [`Status::Unknown`] so the caller sees the offending
/// value instead of a lossy guess.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    /// 0x10: host found, fingerprint fields are valid.
    Ok,
    /// 0x20: no cached fingerprint for this address.
    NoMatch,
    /// 0x00: the daemon could not parse the query.
    BadQuery,
    Unknown(u32),
}

impl From<u32> for Status {
    fn from(code: u32) -> Self {
        match code {
            STATUS_OK => Status::Ok,
            STATUS_NO_MATCH => Status::NoMatch,
            STATUS_BAD_QUERY => Status::BadQuery,
            other => Status::Unknown(other),
        }
    }
}

/// How confidently the daemon matched the OS signature.
///
/// The wire carries a two-bit field: bit 0
/// ([`MATCH_FUZZY`](crate::wire::constants::MATCH_FUZZY)) means
/// volatile quantities like TTL were approximated, bit 1
/// ([`MATCH_GENERIC`](crate::wire::constants::MATCH_GENERIC)) means
/// the match came from a generic signature covering a class of
/// systems. Higher bits are reserved and ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchQuality {
    /// Exact match against a specific signature.
    Normal,
    /// Approximated match against a specific signature.
    Fuzzy,
    /// Exact match against a generic signature.
    Signature,
    /// Approximated match against a generic signature.
    FuzzySignature,
}

impl From<u8> for MatchQuality {
    fn from(bits: u8) -> Self {
        match bits & (MATCH_FUZZY | MATCH_GENERIC) {
            0 => MatchQuality::Normal,
            MATCH_FUZZY => MatchQuality::Fuzzy,
            MATCH_GENERIC => MatchQuality::Signature,
            _ => MatchQuality::FuzzySignature,
        }
    }
}

/// Fingerprint information for one host, from a successful query.
///
/// This is the caller-facing view of a [`RawResponse`] whose status
/// was OK: text fields are scanned up to their NUL terminator and
/// converted to `String`, the match quality byte becomes
/// [`MatchQuality`], and everything else is carried through.
///
/// Field notes:
/// - `uptime_min` is 0 when the daemon never measured an uptime; only
///   then is `up_mod_days` meaningless too.
/// - `distance` is 0xffff
///   ([`DISTANCE_UNKNOWN`](crate::wire::constants::DISTANCE_UNKNOWN))
///   when not measured.
/// - `last_nat` / `last_chg` are 0 when NAT or an OS change was never
///   detected.
/// - Empty strings mean the daemon has no data for that field (e.g.
///   `http_name` for a host that never spoke HTTP through the sensor).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HostInfo {
    pub os_match_q: MatchQuality,
    pub bad_sw: u8,
    pub distance: u16,
    pub first_seen: u32,
    pub last_seen: u32,
    pub total_conn: u32,
    pub uptime_min: u32,
    pub up_mod_days: u32,
    pub last_nat: u32,
    pub last_chg: u32,
    pub os_name: String,
    pub os_flavor: String,
    pub http_name: String,
    pub http_flavor: String,
    pub link_type: String,
    pub language: String,
}

impl TryFrom<RawResponse> for HostInfo {
    type Error = Error;

    fn try_from(raw: RawResponse) -> Result<Self> {
        match Status::from(raw.status) {
            Status::Ok => Ok(HostInfo {
                os_match_q: MatchQuality::from(raw.os_match_q),
                bad_sw: raw.bad_sw,
                distance: raw.distance,
                first_seen: raw.first_seen,
                last_seen: raw.last_seen,
                total_conn: raw.total_conn,
                uptime_min: raw.uptime_min,
                up_mod_days: raw.up_mod_days,
                last_nat: raw.last_nat,
                last_chg: raw.last_chg,
                os_name: fixed_str(&raw.os_name),
                os_flavor: fixed_str(&raw.os_flavor),
                http_name: fixed_str(&raw.http_name),
                http_flavor: fixed_str(&raw.http_flavor),
                link_type: fixed_str(&raw.link_type),
                language: fixed_str(&raw.language),
            }),
            Status::NoMatch => Err(Error::NoMatch),
            Status::BadQuery => Err(Error::BadQuery),
            Status::Unknown(code) => Err(Error::UnknownStatus(code)),
        }
    }
}

/// Decodes a fixed-width NUL-padded text field.
///
/// Takes the prefix before the first zero byte, or the whole field
/// when no terminator exists; bytes after the terminator are padding
/// and never read into the result.
fn fixed_str(field: &[u8]) -> String {
    let end = field.iter().position(|&b| b == 0).unwrap_or(field.len());
    String::from_utf8_lossy(&field[..end]).into_owned()
}
