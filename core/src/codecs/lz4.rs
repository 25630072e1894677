//! src/codecs/lz4.rs
//!
//! LZ4 block-format adapter. Slot 15 is the fast encoder; slots 16..=31 run
//! the high-compression encoder at levels 1..=16. Every slot emits the same
//! block format, so one decode function serves the whole family and the hc
//! slots persist in tags as plain `lz4`.

use lz4::block::{self, CompressionMode};

use crate::types::DecompressError;

const CODEC: &str = "lz4";

/// `CompressFn` for slot 15 (fast mode). No size prefix: the block tag
/// carries the logical length.
pub fn compress(src: &[u8], dst: &mut [u8], _level: i32) -> Option<usize> {
    block::compress_to_buffer(src, None, false, dst).ok()
}

/// `CompressFn` for the lz4hc slots; `level` is the hc level from the codec
/// table. liblz4 clamps levels beyond its maximum.
pub fn compress_hc(src: &[u8], dst: &mut [u8], level: i32) -> Option<usize> {
    block::compress_to_buffer(src, Some(CompressionMode::HIGHCOMPRESSION(level)), false, dst).ok()
}

/// Shared `DecompressFn`. `dst.len()` is the expected decoded size from the
/// block tag.
pub fn decompress(src: &[u8], dst: &mut [u8], _level: i32) -> Result<usize, DecompressError> {
    block::decompress_to_buffer(src, Some(dst.len() as i32), dst)
        .map_err(|e| DecompressError::Codec { codec: CODEC, reason: e.to_string() })
}
