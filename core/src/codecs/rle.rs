//! src/codecs/rle.rs
//!
//! Zero-run-length kernel for slot 14, tuned for blocks that are mostly
//! zeros with islands of data.
//!
//! Token format: a 1-byte tag, then payload. With run threshold `n` (the
//! table level, 64):
//! - tag < n: literal run of `tag + 1` bytes, which follow verbatim.
//! - tag >= n: run of `tag + 1 - n` zero bytes, no payload.
//!
//! A literal run breaks as soon as two consecutive zeros are ahead, so any
//! zero run of length >= 2 takes the zero form; isolated zeros ride inside
//! literals. Literal runs cap at `n` bytes, zero runs at `256 - n`.

use crate::types::DecompressError;

const CODEC: &str = "rle";

/// `CompressFn` for the zero-run kernel. `level` is the run threshold from
/// the codec table.
pub fn compress(src: &[u8], dst: &mut [u8], level: i32) -> Option<usize> {
    let n = level as usize;
    let mut s = 0;
    let mut d = 0;

    // Each pass emits one token: the tag needs a byte and carries at least
    // one source byte, hence the d + 1 bound.
    while s < src.len() && d + 1 < dst.len() {
        let first = s;
        let tag = d;
        d += 1;
        if src[s] == 0 {
            let last = (s + (256 - n)).min(src.len());
            while s < last && src[s] == 0 {
                s += 1;
            }
            dst[tag] = (s - first - 1 + n) as u8;
        } else {
            // A full literal run must fit before we start copying.
            if dst.len() - d < n {
                break;
            }
            let last = (s + n).min(src.len());
            while s + 1 < last && (src[s] | src[s + 1]) != 0 {
                dst[d] = src[s];
                d += 1;
                s += 1;
            }
            if src[s] != 0 {
                dst[d] = src[s];
                d += 1;
                s += 1;
            }
            dst[tag] = (s - first - 1) as u8;
        }
    }

    if s == src.len() {
        Some(d)
    } else {
        None
    }
}

/// `DecompressFn` for the zero-run kernel. The token stream must fill `dst`
/// exactly; anything else is corrupt. Unlike compression, the input here is
/// untrusted, so every run is bounds-checked before it is applied.
pub fn decompress(src: &[u8], dst: &mut [u8], level: i32) -> Result<usize, DecompressError> {
    let n = level as usize;
    let mut s = 0;
    let mut d = 0;

    while s < src.len() && d < dst.len() {
        let len = 1 + src[s] as usize;
        s += 1;
        if len <= n {
            if s + len > src.len() {
                return Err(corrupt("literal run overruns the stored bytes"));
            }
            if d + len > dst.len() {
                return Err(corrupt("literal run overruns the block"));
            }
            dst[d..d + len].copy_from_slice(&src[s..s + len]);
            s += len;
            d += len;
        } else {
            let len = len - n;
            if d + len > dst.len() {
                return Err(corrupt("zero run overruns the block"));
            }
            dst[d..d + len].fill(0);
            d += len;
        }
    }

    if d == dst.len() {
        Ok(d)
    } else {
        Err(corrupt("token stream ends short of the block"))
    }
}

fn corrupt(reason: &str) -> DecompressError {
    DecompressError::Codec { codec: CODEC, reason: reason.into() }
}
