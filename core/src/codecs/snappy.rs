//! src/codecs/snappy.rs
//!
//! Raw (unframed) Snappy adapter. Slot 3 is the oldest codec in the table:
//! the `on` default from before the lz4 pool feature existed.

use crate::types::DecompressError;

const CODEC: &str = "snappy";

/// `CompressFn` over `snap::raw::Encoder`.
///
/// Raw Snappy compression demands worst-case output space up front, so this
/// compresses into scratch and applies the caller's budget by length check.
pub fn compress(src: &[u8], dst: &mut [u8], _level: i32) -> Option<usize> {
    let out = snap::raw::Encoder::new().compress_vec(src).ok()?;
    if out.len() > dst.len() {
        return None;
    }
    dst[..out.len()].copy_from_slice(&out);
    Some(out.len())
}

/// `DecompressFn` over `snap::raw::Decoder`. The stored stream announces its
/// decoded size; `snap` checks it against `dst` itself.
pub fn decompress(src: &[u8], dst: &mut [u8], _level: i32) -> Result<usize, DecompressError> {
    snap::raw::Decoder::new()
        .decompress(src, dst)
        .map_err(|e| DecompressError::Codec { codec: CODEC, reason: e.to_string() })
}
