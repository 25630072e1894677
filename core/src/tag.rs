//! src/tag.rs
//!
//! The per-block metadata record that carries the compression identifier to
//! disk.
//!
//! Design notes:
//! - Fixed 16-byte little-endian layout; field order is ABI.
//! - The identifier byte is re-validated on every decode — block metadata
//!   is as untrusted as block data.
//! - Reserved bytes allow future fields without changing size; always zero.

use thiserror::Error;

use crate::block::stored_budget;
use crate::registry;
use crate::types::{Compressed, Compression};

/// Fixed tag size in bytes.
pub const TAG_LEN: usize = 16;

/// Current tag format version.
pub const TAG_VERSION: u8 = 1;

/// CRC32 covers everything before its own field.
const CRC_OFFSET: usize = 12;

/// Decoded block tag.
///
/// Layout:
/// - `0`       version
/// - `1`       compression identifier
/// - `2..4`    reserved (zero)
/// - `4..8`    logical length
/// - `8..12`   stored length
/// - `12..16`  crc32 over bytes `0..12`
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct BlockTag {
    pub version: u8,
    pub compression: Compression,
    pub logical_len: u32,
    pub stored_len: u32,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum TagError {
    #[error("tag buffer holds {have} bytes, need {need}")]
    BufferTooShort { have: usize, need: usize },
    #[error("tag crc32 mismatch: have 0x{have:08x}, need 0x{need:08x}")]
    InvalidCrc32 { have: u32, need: u32 },
    #[error("reserved tag bytes are not zero")]
    ReservedNotZero,
    #[error("tag names unknown compression identifier 0x{raw:02x}")]
    UnknownCompression { raw: u8 },
    #[error("unsupported tag version {have}")]
    UnsupportedVersion { have: u8 },
    #[error("compression setting {id} is never stored in a tag")]
    NotStorable { id: Compression },
    #[error("tag logical length is zero")]
    ZeroLogicalLen,
    #[error("stored length {stored} is invalid for {id} at logical length {logical}")]
    StoredLenInvalid { id: Compression, stored: u32, logical: u32 },
}

impl BlockTag {
    /// Build the tag for a gateway outcome.
    ///
    /// `requested` is the identifier the block was compressed under;
    /// `logical_len` is the block's uncompressed size. The persisted
    /// identifier follows the outcome: all-zero blocks are tagged `empty`,
    /// verbatim blocks `uncompressed`, and stored blocks get the row's
    /// `stored_as` value (which folds lz4hc down to `lz4`).
    pub fn for_outcome(requested: Compression, logical_len: u32, outcome: Compressed) -> BlockTag {
        let (compression, stored_len) = match outcome {
            Compressed::AllZero => (Compression::Empty, 0),
            Compressed::Uncompressed => (Compression::Off, logical_len),
            Compressed::Stored(n) => {
                debug_assert!(requested.has_codec(), "Stored outcome from {}", requested);
                (registry::entry(requested).stored_as, n as u32)
            }
        };
        BlockTag { version: TAG_VERSION, compression, logical_len, stored_len }
    }

    /// Serialize into a fixed 16-byte little-endian buffer. The CRC is
    /// computed here; callers never supply it.
    pub fn encode(&self) -> [u8; TAG_LEN] {
        let mut out = [0u8; TAG_LEN];
        let mut i = 0usize;

        fn put_u8(out: &mut [u8], i: &mut usize, v: u8) {
            out[*i] = v;
            *i += 1;
        }
        fn put_u32(out: &mut [u8], i: &mut usize, v: u32) {
            out[*i..*i + 4].copy_from_slice(&v.to_le_bytes());
            *i += 4;
        }

        put_u8(&mut out, &mut i, self.version);             // 0      version
        put_u8(&mut out, &mut i, self.compression as u8);   // 1      identifier
        i += 2;                                             // 2..4   reserved
        put_u32(&mut out, &mut i, self.logical_len);        // 4..8   logical length
        put_u32(&mut out, &mut i, self.stored_len);         // 8..12  stored length
        let crc = crc32fast::hash(&out[..CRC_OFFSET]);
        put_u32(&mut out, &mut i, crc);                     // 12..16 crc32

        debug_assert_eq!(i, TAG_LEN, "encoding wrote incorrect length");
        out
    }

    /// Deserialize a 16-byte little-endian buffer into a validated tag.
    ///
    /// CRC and reserved bytes are checked before any field is interpreted;
    /// the identifier and length rules after.
    pub fn decode(buf: &[u8]) -> Result<BlockTag, TagError> {
        if buf.len() < TAG_LEN {
            return Err(TagError::BufferTooShort { have: buf.len(), need: TAG_LEN });
        }

        let mut i = 0usize;

        fn get_u8(buf: &[u8], i: &mut usize) -> u8 {
            let v = buf[*i];
            *i += 1;
            v
        }
        fn get_u32(buf: &[u8], i: &mut usize) -> u32 {
            let v = u32::from_le_bytes(buf[*i..*i + 4].try_into().unwrap());
            *i += 4;
            v
        }

        let version = get_u8(buf, &mut i);                  // 0      version
        let raw = get_u8(buf, &mut i);                      // 1      identifier
        let reserved = [get_u8(buf, &mut i), get_u8(buf, &mut i)]; // 2..4 reserved
        let logical_len = get_u32(buf, &mut i);             // 4..8   logical length
        let stored_len = get_u32(buf, &mut i);              // 8..12  stored length
        let crc = get_u32(buf, &mut i);                     // 12..16 crc32

        debug_assert_eq!(i, TAG_LEN, "decoding read incorrect length");

        let computed = crc32fast::hash(&buf[..CRC_OFFSET]);
        if crc != computed {
            return Err(TagError::InvalidCrc32 { have: crc, need: computed });
        }
        if reserved != [0, 0] {
            return Err(TagError::ReservedNotZero);
        }

        let compression =
            Compression::verify(raw).map_err(|_| TagError::UnknownCompression { raw })?;

        let tag = BlockTag { version, compression, logical_len, stored_len };
        tag.validate()?;
        Ok(tag)
    }

    /// Field rules beyond byte-level integrity. Decoding runs this; writers
    /// can call it on hand-built tags before encoding.
    pub fn validate(&self) -> Result<(), TagError> {
        if self.version != TAG_VERSION {
            return Err(TagError::UnsupportedVersion { have: self.version });
        }
        if !self.compression.is_storable() {
            return Err(TagError::NotStorable { id: self.compression });
        }
        if self.logical_len == 0 {
            return Err(TagError::ZeroLogicalLen);
        }

        let stored_ok = match self.compression {
            Compression::Empty => self.stored_len == 0,
            Compression::Off => self.stored_len == self.logical_len,
            // Concrete identifiers: the gateway never stores outside
            // (0, budget], so anything else did not come from it.
            _ => {
                let budget = stored_budget(self.logical_len as usize) as u32;
                self.stored_len > 0 && self.stored_len <= budget
            }
        };
        if !stored_ok {
            return Err(TagError::StoredLenInvalid {
                id: self.compression,
                stored: self.stored_len,
                logical: self.logical_len,
            });
        }
        Ok(())
    }
}
