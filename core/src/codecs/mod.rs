//! src/codecs/mod.rs
//!
//! Codec adapters: one module per backend, each exposing plain functions in
//! the `CompressFn`/`DecompressFn` shape the codec table dispatches through.
//!
//! Adapter rules:
//! - Levels come from the codec table, never from callers.
//! - Compress reports "did not fit" as `None`; it is an outcome, not an error.
//! - Decompress returns typed errors for corrupt input and never panics on
//!   untrusted bytes.

pub mod deflate;
pub mod lz4;
pub mod rle;
pub mod snappy;
