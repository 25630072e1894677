//! basalt-compress
//!
//! Block compression layer for the Basalt storage engine: a stable
//! identifier space for codecs, policy resolution for inherited settings,
//! and the safety-net gateway every block compression call runs through.
//! No I/O, no global state, and callers own every buffer.
//!
//! Identifier values are persisted inside block tags and are on-disk ABI;
//! see [`registry::CODEC_TABLE`].

#![forbid(unsafe_code)]

// Shared and top level
pub mod constants;
pub mod types;
pub mod utils;

// Identifier space and dispatch
pub mod codecs;
pub mod registry;

// Block path
pub mod block;
pub mod policy;
pub mod stats;
pub mod tag;

pub use block::{compress_block, decompress_block, stored_budget};
pub use policy::resolve;
pub use stats::CompressionStats;
pub use tag::{BlockTag, TagError, TAG_LEN, TAG_VERSION};
pub use types::{Compressed, Compression, DecompressError, ParseCompressionError};
