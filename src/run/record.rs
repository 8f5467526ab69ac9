use crate::error::{Error, Result};

/// Header sizes
pub const CRC_SIZE: usize = 4;
pub const LEN_SIZE: usize = 4;
pub const HEADER_SIZE: usize = CRC_SIZE + LEN_SIZE;

/// Frame one encoded element as a run record.
///
/// On-disk format:
/// ```text
/// ┌──────────┬──────────┬─────────────────┐
/// │ CRC (4B) │ Len (4B) │ Payload (Len B) │
/// └──────────┴──────────┴─────────────────┘
/// ```
///
/// CRC covers the length field and the payload.
///
/// Fails with `InvalidInput` if the payload does not fit the 4-byte length.
pub fn encode(payload: &[u8]) -> Result<Vec<u8>> {
    let len = payload_len(payload.len())?;
    let mut buf = Vec::with_capacity(HEADER_SIZE + payload.len());

    // Reserve space for CRC (filled at the end)
    buf.extend_from_slice(&[0u8; CRC_SIZE]);
    buf.extend_from_slice(&len.to_le_bytes());
    buf.extend_from_slice(payload);

    let crc = crc32fast::hash(&buf[CRC_SIZE..]);
    buf[..CRC_SIZE].copy_from_slice(&crc.to_le_bytes());

    Ok(buf)
}

fn payload_len(len: usize) -> Result<u32> {
    u32::try_from(len)
        .map_err(|_| Error::InvalidInput(format!("payload of {len} bytes exceeds record limit")))
}

/// Read the total framed size of the record starting at `data[0]` without
/// checking its CRC. Used to index a run file.
pub fn framed_len(data: &[u8]) -> Result<usize> {
    if data.len() < HEADER_SIZE {
        return Err(Error::Corruption("record header truncated".into()));
    }
    let payload_len = read_u32(&data[CRC_SIZE..HEADER_SIZE]) as usize;
    let total = HEADER_SIZE + payload_len;
    if data.len() < total {
        return Err(Error::Corruption("record truncated".into()));
    }
    Ok(total)
}

/// Verify the record starting at `data[0]` and return its payload.
pub fn decode(data: &[u8]) -> Result<&[u8]> {
    let total = framed_len(data)?;
    let stored_crc = read_u32(&data[..CRC_SIZE]);
    let computed_crc = crc32fast::hash(&data[CRC_SIZE..total]);
    if stored_crc != computed_crc {
        return Err(Error::Corruption("CRC mismatch".into()));
    }
    Ok(&data[HEADER_SIZE..total])
}

fn read_u32(bytes: &[u8]) -> u32 {
    let mut word = [0u8; 4];
    word.copy_from_slice(bytes);
    u32::from_le_bytes(word)
}
