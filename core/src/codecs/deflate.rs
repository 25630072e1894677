//! src/codecs/deflate.rs
//!
//! Deflate (zlib wrapper) adapter over flate2, one-shot into caller buffers.
//! Slots 5..=13 map straight to zlib levels 1..=9.

use flate2::{Compress, Compression, Decompress, FlushCompress, FlushDecompress, Status};

use crate::types::DecompressError;

const CODEC: &str = "deflate";

/// `CompressFn` over a one-shot zlib stream. `StreamEnd` is the only
/// success: anything short of it means the output did not fit `dst`.
pub fn compress(src: &[u8], dst: &mut [u8], level: i32) -> Option<usize> {
    let mut enc = Compress::new(Compression::new(level as u32), true);
    match enc.compress(src, dst, FlushCompress::Finish) {
        Ok(Status::StreamEnd) => Some(enc.total_out() as usize),
        Ok(_) | Err(_) => None,
    }
}

/// `DecompressFn` over a one-shot zlib stream. The stream must end within
/// `dst`; a stream that neither ends nor errors claims more output than the
/// block has room for, which is corruption, not a sizing problem.
pub fn decompress(src: &[u8], dst: &mut [u8], _level: i32) -> Result<usize, DecompressError> {
    let mut dec = Decompress::new(true);
    match dec.decompress(src, dst, FlushDecompress::Finish) {
        Ok(Status::StreamEnd) => Ok(dec.total_out() as usize),
        Ok(_) => Err(DecompressError::Codec {
            codec: CODEC,
            reason: "zlib stream did not end inside the block".into(),
        }),
        Err(e) => Err(DecompressError::Codec { codec: CODEC, reason: e.to_string() }),
    }
}
