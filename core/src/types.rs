//! src/types.rs
//!
//! The identifier space, gateway outcome type, and error types.

use std::fmt;
use std::str::FromStr;

use num_enum::TryFromPrimitive;
use thiserror::Error;

use crate::constants::{ids, COMPRESSION_VALUES};
use crate::registry::{self, CodecVector};
use crate::utils::enum_name_or_hex;

/// Compression setting of a block, dataset, or stored block tag.
///
/// The discriminant is the codec table index and the byte persisted on disk,
/// so this enum is ABI: variants are never renumbered and gaps never close.
/// `Inherit`, `On`, `Off` and `Empty` are logical policy values; everything
/// else names a codec at a fixed level.
#[repr(u8)]
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, TryFromPrimitive)]
pub enum Compression {
    Inherit  = ids::INHERIT,
    On       = ids::ON,
    Off      = ids::OFF,
    Snappy   = ids::SNAPPY,
    Empty    = ids::EMPTY,
    Deflate1 = ids::DEFLATE_1,
    Deflate2 = ids::DEFLATE_2,
    Deflate3 = ids::DEFLATE_3,
    Deflate4 = ids::DEFLATE_4,
    Deflate5 = ids::DEFLATE_5,
    Deflate6 = ids::DEFLATE_6,
    Deflate7 = ids::DEFLATE_7,
    Deflate8 = ids::DEFLATE_8,
    Deflate9 = ids::DEFLATE_9,
    Rle      = ids::RLE,
    Lz4      = ids::LZ4,
    Lz4hc1   = ids::LZ4HC_1,
    Lz4hc2   = ids::LZ4HC_2,
    Lz4hc3   = ids::LZ4HC_3,
    Lz4hc4   = ids::LZ4HC_4,
    Lz4hc5   = ids::LZ4HC_5,
    Lz4hc6   = ids::LZ4HC_6,
    Lz4hc7   = ids::LZ4HC_7,
    Lz4hc8   = ids::LZ4HC_8,
    Lz4hc9   = ids::LZ4HC_9,
    Lz4hc10  = ids::LZ4HC_10,
    Lz4hc11  = ids::LZ4HC_11,
    Lz4hc12  = ids::LZ4HC_12,
    Lz4hc13  = ids::LZ4HC_13,
    Lz4hc14  = ids::LZ4HC_14,
    Lz4hc15  = ids::LZ4HC_15,
    Lz4hc16  = ids::LZ4HC_16,
}

impl Compression {
    /// Re-validate a raw identifier byte read from block metadata.
    pub fn verify(raw: u8) -> Result<Self, DecompressError> {
        Self::try_from_primitive(raw).map_err(|_| DecompressError::InvalidIdentifier { raw })
    }

    /// Display / parse name from the codec table (`"lz4"`, `"deflate-6"`, ...).
    pub fn name(self) -> &'static str {
        registry::entry(self).name
    }

    /// Codec level from the table; `0` for codecs without a level concept.
    pub fn level(self) -> i32 {
        registry::entry(self).level
    }

    /// Logical policy value (`inherit`, `on`, `uncompressed`, `empty`) with
    /// no codec behind it.
    pub fn is_logical(self) -> bool {
        matches!(
            self,
            Compression::Inherit | Compression::On | Compression::Off | Compression::Empty
        )
    }

    /// A codec table row with compress/decompress vectors.
    pub fn has_codec(self) -> bool {
        matches!(registry::entry(self).vector, CodecVector::Codec { .. })
    }

    /// Valid inside persisted block metadata. `Inherit` and `On` only exist
    /// before resolution and never reach disk.
    pub fn is_storable(self) -> bool {
        !matches!(self, Compression::Inherit | Compression::On)
    }
}

impl fmt::Display for Compression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Compression {
    type Err = ParseCompressionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        (0..COMPRESSION_VALUES as u8)
            .filter_map(|raw| Compression::try_from_primitive(raw).ok())
            .find(|c| c.name() == s)
            .ok_or_else(|| ParseCompressionError { name: s.to_string() })
    }
}

/// Outcome of [`crate::block::compress_block`].
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Compressed {
    /// Every source byte is zero; nothing was written. The block needs no
    /// storage at all, only an `empty` tag.
    AllZero,
    /// Compression did not pay for itself; store the source verbatim.
    Uncompressed,
    /// This many compressed bytes were written to the destination.
    Stored(usize),
}

/// Decompression failure. Corrupt inputs surface here as typed errors;
/// nothing in this crate logs or swallows them.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum DecompressError {
    /// The persisted identifier byte is out of table range or names a
    /// logical policy value. Rejected before any codec dispatch.
    #[error("invalid compression identifier {}", enum_name_or_hex::<Compression>(*raw))]
    InvalidIdentifier { raw: u8 },
    /// The codec rejected the stored bytes.
    #[error("codec {codec} failed to decompress: {reason}")]
    Codec { codec: &'static str, reason: String },
}

/// Failure to parse a compression setting name.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown compression setting {name:?}")]
pub struct ParseCompressionError {
    pub name: String,
}
