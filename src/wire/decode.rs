use crate::error::{Error, Result};
use crate::wire::constants::{RESPONSE_MAGIC, STR_MAX};
use crate::wire::message::{Decode, RawResponse};

impl Decode for RawResponse {
    /// Decodes one API response record from a byte buffer.
    ///
    /// The magic is validated first, so a buffer starting with the
    /// wrong 4 bytes fails with [`Error::BadMagic`] no matter how much
    /// of it arrived. Every other field read fails with
    /// [`Error::Truncated`] carrying the number of bytes that were
    /// available. Bytes past the fixed record length are ignored.
    fn decode(bytes: &[u8]) -> Result<Self> {
        let mut c = 0;

        let magic = read_u32(bytes, &mut c)?;
        if magic != RESPONSE_MAGIC {
            return Err(Error::BadMagic(magic));
        }

        Ok(RawResponse {
            magic,
            status: read_u32(bytes, &mut c)?,
            first_seen: read_u32(bytes, &mut c)?,
            last_seen: read_u32(bytes, &mut c)?,
            total_conn: read_u32(bytes, &mut c)?,
            uptime_min: read_u32(bytes, &mut c)?,
            up_mod_days: read_u32(bytes, &mut c)?,
            last_nat: read_u32(bytes, &mut c)?,
            last_chg: read_u32(bytes, &mut c)?,
            distance: read_u16(bytes, &mut c)?,
            bad_sw: read_u8(bytes, &mut c)?,
            os_match_q: read_u8(bytes, &mut c)?,
            os_name: read_str(bytes, &mut c)?,
            os_flavor: read_str(bytes, &mut c)?,
            http_name: read_str(bytes, &mut c)?,
            http_flavor: read_str(bytes, &mut c)?,
            link_type: read_str(bytes, &mut c)?,
            language: read_str(bytes, &mut c)?,
        })
    }
}

fn truncated(p: &[u8]) -> Error {
    Error::Truncated { got: p.len() }
}

fn read_u8(p: &[u8], c: &mut usize) -> Result<u8> {
    let b = *p.get(*c).ok_or_else(|| truncated(p))?;
    *c += 1;
    Ok(b)
}

fn read_u16(p: &[u8], c: &mut usize) -> Result<u16> {
    Ok(u16::from_le_bytes(slice2(p, c)?))
}

fn read_u32(p: &[u8], c: &mut usize) -> Result<u32> {
    Ok(u32::from_le_bytes(slice4(p, c)?))
}

/// Copies one fixed-width text field, padding included.
fn read_str(p: &[u8], c: &mut usize) -> Result<[u8; STR_MAX + 1]> {
    let b = p
        .get(*c..*c + STR_MAX + 1)
        .ok_or_else(|| truncated(p))?
        .try_into()
        .unwrap();
    *c += STR_MAX + 1;
    Ok(b)
}

fn slice2(p: &[u8], c: &mut usize) -> Result<[u8; 2]> {
    let b = p
        .get(*c..*c + 2)
        .ok_or_else(|| truncated(p))?
        .try_into()
        .unwrap();
    *c += 2;
    Ok(b)
}

fn slice4(p: &[u8], c: &mut usize) -> Result<[u8; 4]> {
    let b = p
        .get(*c..*c + 4)
        .ok_or_else(|| truncated(p))?
        .try_into()
        .unwrap();
    *c += 4;
    Ok(b)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wire::constants::{QUERY_MAGIC, RESPONSE_SIZE, STATUS_OK};
    use byteorder::{LittleEndian, WriteBytesExt};

    /// Serializes a record the way the daemon does: little-endian
    /// integers, fields in wire order, text fields verbatim.
    fn encode_response(r: &RawResponse) -> Vec<u8> {
        let mut b = vec![];
        b.write_u32::<LittleEndian>(r.magic).unwrap();
        b.write_u32::<LittleEndian>(r.status).unwrap();
        b.write_u32::<LittleEndian>(r.first_seen).unwrap();
        b.write_u32::<LittleEndian>(r.last_seen).unwrap();
        b.write_u32::<LittleEndian>(r.total_conn).unwrap();
        b.write_u32::<LittleEndian>(r.uptime_min).unwrap();
        b.write_u32::<LittleEndian>(r.up_mod_days).unwrap();
        b.write_u32::<LittleEndian>(r.last_nat).unwrap();
        b.write_u32::<LittleEndian>(r.last_chg).unwrap();
        b.write_u16::<LittleEndian>(r.distance).unwrap();
        b.push(r.bad_sw);
        b.push(r.os_match_q);
        b.extend_from_slice(&r.os_name);
        b.extend_from_slice(&r.os_flavor);
        b.extend_from_slice(&r.http_name);
        b.extend_from_slice(&r.http_flavor);
        b.extend_from_slice(&r.link_type);
        b.extend_from_slice(&r.language);
        b
    }

    /// Pads a text value to the fixed 32-byte wire field.
    fn field(text: &[u8]) -> [u8; STR_MAX + 1] {
        let mut buf = [0u8; STR_MAX + 1];
        buf[..text.len()].copy_from_slice(text);
        buf
    }

    /// OK record with awkward text fields: one carries stale bytes
    /// after its terminator, one fills the field with no terminator.
    fn sample_response() -> RawResponse {
        let mut os_flavor = field(b"7 or 8");
        os_flavor[10] = b'x'; // daemon never zeroes beyond the NUL

        RawResponse {
            magic: RESPONSE_MAGIC,
            status: STATUS_OK,
            first_seen: 1754820000,
            last_seen: 1755001800,
            total_conn: 112,
            uptime_min: 9000,
            up_mod_days: 497,
            last_nat: 1754900000,
            last_chg: 0,
            distance: 14,
            bad_sw: 1,
            os_match_q: 0x01,
            os_name: field(b"Windows"),
            os_flavor,
            http_name: field(b"nginx"),
            http_flavor: field(b"1.x"),
            link_type: field(b"DSL"),
            language: [b'z'; STR_MAX + 1],
        }
    }

    #[test]
    fn encoded_sample_matches_fixed_record_size() {
        assert_eq!(encode_response(&sample_response()).len(), RESPONSE_SIZE);
    }

    #[test]
    fn decode_round_trips_encoded_record() {
        let original = sample_response();
        let decoded = RawResponse::decode(&encode_response(&original)).unwrap();
        assert_eq!(decoded, original);
    }

    #[test]
    fn decode_rejects_query_magic() {
        let mut bytes = encode_response(&sample_response());
        bytes[..4].copy_from_slice(&QUERY_MAGIC.to_le_bytes());

        assert!(matches!(
            RawResponse::decode(&bytes),
            Err(Error::BadMagic(m)) if m == QUERY_MAGIC
        ));
    }

    #[test]
    fn decode_rejects_garbage_magic() {
        let mut bytes = encode_response(&sample_response());
        bytes[..4].copy_from_slice(&[0xFF; 4]);

        assert!(matches!(
            RawResponse::decode(&bytes),
            Err(Error::BadMagic(0xFFFFFFFF))
        ));
    }

    #[test]
    fn decode_reports_bad_magic_even_on_short_buffer() {
        // Magic is checked first, so 10 wrong-magic bytes are a magic
        // failure, not a length failure.
        let mut bytes = vec![0xAA; 10];
        bytes[..4].copy_from_slice(&0x12345678u32.to_le_bytes());

        assert!(matches!(
            RawResponse::decode(&bytes),
            Err(Error::BadMagic(0x12345678))
        ));
    }

    #[test]
    fn decode_truncated_at_every_boundary() {
        let bytes = encode_response(&sample_response());

        for cut in 0..RESPONSE_SIZE {
            match RawResponse::decode(&bytes[..cut]) {
                Err(Error::Truncated { got }) => assert_eq!(got, cut),
                other => panic!("cut {}: expected Truncated, got {:?}", cut, other),
            }
        }
    }

    #[test]
    fn decode_ignores_trailing_bytes() {
        let original = sample_response();
        let mut bytes = encode_response(&original);
        bytes.extend_from_slice(&[0xEE; 57]);

        let decoded = RawResponse::decode(&bytes).unwrap();
        assert_eq!(decoded, original);
    }
}
