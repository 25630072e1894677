//! src/block.rs
//!
//! The compression gateway. Every codec call in the engine funnels through
//! these two functions, which wrap the table vectors in uniform guards: an
//! all-zero short-circuit, a minimum-gain budget on writes, and full
//! identifier validation on reads.

use crate::registry::{self, CodecVector};
use crate::types::{Compressed, Compression, DecompressError};

/// Largest stored size worth keeping for a block of `logical_len` bytes:
/// compression must save at least one eighth or the block is stored
/// verbatim.
pub const fn stored_budget(logical_len: usize) -> usize {
    logical_len - (logical_len >> 3)
}

/// Compress one block of `src` into `dst`.
///
/// `c` must be `Empty` or a concrete identifier — run policy resolution
/// first. `dst` must hold at least `stored_budget(src.len())` bytes; the
/// codec never sees more than that, which is what enforces the gain floor.
///
/// The zero scan runs before anything looks at `c`, so an all-zero block
/// (any length, zero included) comes back as [`Compressed::AllZero`] for
/// every identifier and no codec ever sees it.
///
/// # Panics
///
/// When `src` is not all zero and `c` has no codec (`inherit`, `on`,
/// `uncompressed`), or when `dst` is under the budget. Both are caller
/// bugs, not data conditions, and are not reported as values.
pub fn compress_block(c: Compression, src: &[u8], dst: &mut [u8]) -> Compressed {
    if all_zeroes(src) {
        return Compressed::AllZero;
    }
    if c == Compression::Empty {
        // `empty` only ever marks blocks that scan to zero; with real data
        // it degrades to a verbatim store.
        return Compressed::Uncompressed;
    }

    let entry = registry::entry(c);
    let compress = match entry.vector {
        CodecVector::Codec { compress, .. } => compress,
        CodecVector::LogicalOnly => {
            panic!("compress_block: {} is not a concrete identifier", entry.name)
        }
    };

    let d_len = stored_budget(src.len());
    assert!(
        dst.len() >= d_len,
        "compress_block: dst holds {} bytes, budget needs {}",
        dst.len(),
        d_len
    );

    match compress(src, &mut dst[..d_len], entry.level) {
        Some(n) if n <= d_len => Compressed::Stored(n),
        // Over budget or could not fit: the block is stored verbatim.
        _ => Compressed::Uncompressed,
    }
}

/// Decompress one stored block of `src` into `dst`.
///
/// `raw` is the identifier byte exactly as read from block metadata. It is
/// validated in full before any dispatch: a corrupt byte can at worst name
/// the wrong codec, never an out-of-table call. The codec's verdict comes
/// back unchanged — `Ok` is the decompressed length it produced.
pub fn decompress_block(raw: u8, src: &[u8], dst: &mut [u8]) -> Result<usize, DecompressError> {
    let entry = match registry::lookup(raw) {
        Some(entry) => entry,
        None => return Err(DecompressError::InvalidIdentifier { raw }),
    };
    let decompress = match entry.vector {
        CodecVector::Codec { decompress, .. } => decompress,
        CodecVector::LogicalOnly => return Err(DecompressError::InvalidIdentifier { raw }),
    };
    decompress(src, dst, entry.level)
}

/// Word-at-a-time zero scan; the empty slice counts as all-zero.
fn all_zeroes(src: &[u8]) -> bool {
    let mut words = src.chunks_exact(8);
    if !words.all(|w| u64::from_ne_bytes(w.try_into().unwrap()) == 0) {
        return false;
    }
    words.remainder().iter().all(|&b| b == 0)
}
