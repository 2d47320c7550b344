//! Binary snapshot format
//!
//! ```text
//! ┌────────────────────────────────────────────────────────────┐
//! │ Header (14 bytes)                                          │
//! │   Magic: "GRDB" (4) | Version: u16 (2)                     │
//! │   PayloadCRC: u32 (4) | PayloadLen: u32 (4)                │
//! ├────────────────────────────────────────────────────────────┤
//! │ Payload (PayloadLen bytes)                                 │
//! │   bincode(Vec<StudentRecord>)                              │
//! └────────────────────────────────────────────────────────────┘
//! ```
//!
//! Unlike the text format, nothing is skipped: any damage fails the load.

use std::path::Path;

use crate::error::{GradebookError, Result};
use crate::record::StudentRecord;

use super::{read_existing, LoadReport};

// =============================================================================
// Format Constants
// =============================================================================

/// Magic bytes identifying a Gradebook snapshot
pub const MAGIC: &[u8; 4] = b"GRDB";

/// Current snapshot format version
pub const VERSION: u16 = 1;

/// Header size: Magic (4) + Version (2) + CRC (4) + Len (4) = 14 bytes
pub const HEADER_SIZE: usize = 14;

/// Encode records into snapshot bytes
pub fn encode(records: &[StudentRecord]) -> Result<Vec<u8>> {
    let payload =
        bincode::serialize(records).map_err(|e| GradebookError::Serialization(e.to_string()))?;

    let payload_len = u32::try_from(payload.len()).map_err(|_| {
        GradebookError::Serialization(format!("snapshot payload too large: {} bytes", payload.len()))
    })?;
    let crc = crc32fast::hash(&payload);

    let mut bytes = Vec::with_capacity(HEADER_SIZE + payload.len());
    bytes.extend_from_slice(MAGIC);
    bytes.extend_from_slice(&VERSION.to_le_bytes());
    bytes.extend_from_slice(&crc.to_le_bytes());
    bytes.extend_from_slice(&payload_len.to_le_bytes());
    bytes.extend_from_slice(&payload);

    Ok(bytes)
}

/// Decode snapshot bytes into records
pub fn decode(bytes: &[u8]) -> Result<(Vec<StudentRecord>, LoadReport)> {
    if bytes.is_empty() {
        return Err(GradebookError::EmptyFile);
    }

    if bytes.len() < HEADER_SIZE {
        return Err(GradebookError::MalformedHeader(format!(
            "incomplete snapshot header: expected {} bytes, got {}",
            HEADER_SIZE,
            bytes.len()
        )));
    }

    if &bytes[0..4] != MAGIC {
        return Err(GradebookError::MalformedHeader(format!(
            "invalid snapshot magic: expected GRDB, got {:?}",
            &bytes[0..4]
        )));
    }

    let version = u16::from_le_bytes([bytes[4], bytes[5]]);
    if version != VERSION {
        return Err(GradebookError::MalformedHeader(format!(
            "unsupported snapshot version: {}",
            version
        )));
    }

    let stored_crc = u32::from_le_bytes([bytes[6], bytes[7], bytes[8], bytes[9]]);
    let payload_len = u32::from_le_bytes([bytes[10], bytes[11], bytes[12], bytes[13]]) as usize;

    let payload = &bytes[HEADER_SIZE..];
    if payload.len() != payload_len {
        return Err(GradebookError::Corruption(format!(
            "payload length mismatch: header says {} bytes, found {}",
            payload_len,
            payload.len()
        )));
    }

    let actual_crc = crc32fast::hash(payload);
    if actual_crc != stored_crc {
        return Err(GradebookError::Corruption(format!(
            "CRC mismatch: stored {:#010x}, computed {:#010x}",
            stored_crc, actual_crc
        )));
    }

    let records: Vec<StudentRecord> =
        bincode::deserialize(payload).map_err(|e| GradebookError::Serialization(e.to_string()))?;

    let report = LoadReport {
        declared_count: records.len(),
        loaded: records.len(),
        skipped: 0,
    };
    Ok((records, report))
}

/// Load a snapshot file
pub fn load(path: &Path) -> Result<(Vec<StudentRecord>, LoadReport)> {
    let bytes = read_existing(path)?;
    decode(&bytes)
}
