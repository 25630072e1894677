//! src/stats.rs
//!
//! Mutable counters for the block compression path.
//!
//! Summary: each writer context owns one of these and records every gateway
//! outcome; there is no global state and no atomics. Merge or export
//! snapshots out of band (the struct serializes as-is).

use serde::{Deserialize, Serialize};

use crate::types::Compressed;

/// Deterministic counters collected across block writes.
#[derive(Default, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompressionStats {
    pub blocks_zero: u64,
    pub blocks_stored: u64,
    pub blocks_verbatim: u64,
    pub bytes_logical: u64,
    pub bytes_stored: u64,
}

impl CompressionStats {
    /// Record one gateway outcome.
    ///
    /// - `logical_len`: uncompressed block size
    /// - `outcome`: what `compress_block` returned for it
    pub fn record(&mut self, logical_len: usize, outcome: Compressed) {
        self.bytes_logical += logical_len as u64;
        match outcome {
            Compressed::AllZero => self.blocks_zero += 1,
            Compressed::Uncompressed => {
                self.blocks_verbatim += 1;
                self.bytes_stored += logical_len as u64;
            }
            Compressed::Stored(n) => {
                self.blocks_stored += 1;
                self.bytes_stored += n as u64;
            }
        }
    }

    /// Total blocks recorded.
    pub fn blocks(&self) -> u64 {
        self.blocks_zero + self.blocks_stored + self.blocks_verbatim
    }

    /// Achieved ratio, stored over logical bytes: 1.0 means nothing saved,
    /// and nothing recorded reads as 1.0 too. All-zero blocks store zero
    /// bytes, so they pull the ratio down hard.
    pub fn ratio(&self) -> f64 {
        if self.bytes_logical == 0 {
            return 1.0;
        }
        self.bytes_stored as f64 / self.bytes_logical as f64
    }
}
