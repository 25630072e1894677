//! src/registry.rs
//!
//! The codec table: one row per identifier value. The row index IS the
//! persisted identifier, so the table layout is on-disk ABI — rows are
//! never reordered and retired slots are never reclaimed. There is no
//! registration API; the table is a `const` and lives in rodata.

use crate::codecs::{deflate, lz4, rle, snappy};
use crate::constants::COMPRESSION_VALUES;
use crate::types::{Compression, DecompressError};

/// Block compression call. Returns the compressed length, or `None` when
/// the output cannot fit `dst` (an outcome, not an error).
pub type CompressFn = fn(src: &[u8], dst: &mut [u8], level: i32) -> Option<usize>;

/// Block decompression call. `Ok` carries the decompressed length; `Err`
/// means the stored bytes are corrupt for this codec.
pub type DecompressFn = fn(src: &[u8], dst: &mut [u8], level: i32) -> Result<usize, DecompressError>;

/// Call targets of one table row. Logical policy values carry no functions,
/// and the closed variant makes "no codec" impossible to invoke.
#[derive(Copy, Clone)]
pub enum CodecVector {
    LogicalOnly,
    Codec {
        compress: CompressFn,
        decompress: DecompressFn,
    },
}

/// One row of the codec table.
#[derive(Copy, Clone)]
pub struct CodecEntry {
    pub vector: CodecVector,
    /// Level handed to the vectors verbatim; table data, never caller input.
    pub level: i32,
    /// Display and parse name.
    pub name: &'static str,
    /// Identifier written into block tags when this row produced the stored
    /// bytes. Identity for all rows except the lz4hc family, which shares
    /// the lz4 block format and persists as plain `lz4`.
    pub stored_as: Compression,
}

const fn logical(name: &'static str, stored_as: Compression) -> CodecEntry {
    CodecEntry { vector: CodecVector::LogicalOnly, level: 0, name, stored_as }
}

const fn codec(
    compress: CompressFn,
    decompress: DecompressFn,
    level: i32,
    name: &'static str,
    stored_as: Compression,
) -> CodecEntry {
    CodecEntry { vector: CodecVector::Codec { compress, decompress }, level, name, stored_as }
}

/// The codec table. Indexed by identifier value; see `constants::ids`.
pub const CODEC_TABLE: [CodecEntry; COMPRESSION_VALUES] = [
    logical("inherit", Compression::Inherit),                                          // 0
    logical("on", Compression::On),                                                    // 1
    logical("uncompressed", Compression::Off),                                         // 2
    codec(snappy::compress, snappy::decompress, 0, "snappy", Compression::Snappy),     // 3
    logical("empty", Compression::Empty),                                              // 4
    codec(deflate::compress, deflate::decompress, 1, "deflate-1", Compression::Deflate1), // 5
    codec(deflate::compress, deflate::decompress, 2, "deflate-2", Compression::Deflate2), // 6
    codec(deflate::compress, deflate::decompress, 3, "deflate-3", Compression::Deflate3), // 7
    codec(deflate::compress, deflate::decompress, 4, "deflate-4", Compression::Deflate4), // 8
    codec(deflate::compress, deflate::decompress, 5, "deflate-5", Compression::Deflate5), // 9
    codec(deflate::compress, deflate::decompress, 6, "deflate-6", Compression::Deflate6), // 10
    codec(deflate::compress, deflate::decompress, 7, "deflate-7", Compression::Deflate7), // 11
    codec(deflate::compress, deflate::decompress, 8, "deflate-8", Compression::Deflate8), // 12
    codec(deflate::compress, deflate::decompress, 9, "deflate-9", Compression::Deflate9), // 13
    codec(rle::compress, rle::decompress, 64, "rle", Compression::Rle),                // 14
    codec(lz4::compress, lz4::decompress, 0, "lz4", Compression::Lz4),                 // 15
    codec(lz4::compress_hc, lz4::decompress, 1, "lz4hc-1", Compression::Lz4),          // 16
    codec(lz4::compress_hc, lz4::decompress, 2, "lz4hc-2", Compression::Lz4),          // 17
    codec(lz4::compress_hc, lz4::decompress, 3, "lz4hc-3", Compression::Lz4),          // 18
    codec(lz4::compress_hc, lz4::decompress, 4, "lz4hc-4", Compression::Lz4),          // 19
    codec(lz4::compress_hc, lz4::decompress, 5, "lz4hc-5", Compression::Lz4),          // 20
    codec(lz4::compress_hc, lz4::decompress, 6, "lz4hc-6", Compression::Lz4),          // 21
    codec(lz4::compress_hc, lz4::decompress, 7, "lz4hc-7", Compression::Lz4),          // 22
    codec(lz4::compress_hc, lz4::decompress, 8, "lz4hc-8", Compression::Lz4),          // 23
    codec(lz4::compress_hc, lz4::decompress, 9, "lz4hc-9", Compression::Lz4),          // 24
    codec(lz4::compress_hc, lz4::decompress, 10, "lz4hc-10", Compression::Lz4),        // 25
    codec(lz4::compress_hc, lz4::decompress, 11, "lz4hc-11", Compression::Lz4),        // 26
    codec(lz4::compress_hc, lz4::decompress, 12, "lz4hc-12", Compression::Lz4),        // 27
    codec(lz4::compress_hc, lz4::decompress, 13, "lz4hc-13", Compression::Lz4),        // 28
    codec(lz4::compress_hc, lz4::decompress, 14, "lz4hc-14", Compression::Lz4),        // 29
    codec(lz4::compress_hc, lz4::decompress, 15, "lz4hc-15", Compression::Lz4),        // 30
    codec(lz4::compress_hc, lz4::decompress, 16, "lz4hc-16", Compression::Lz4),        // 31
];

/// Table row for a validated identifier.
pub fn entry(c: Compression) -> &'static CodecEntry {
    &CODEC_TABLE[c as usize]
}

/// Table row for a raw identifier byte, if the byte names one.
pub fn lookup(raw: u8) -> Option<&'static CodecEntry> {
    CODEC_TABLE.get(raw as usize)
}
