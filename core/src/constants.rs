//! src/constants.rs
//!
//! Stable identifier values for the codec table.

/// Number of identifier values (and codec table rows). The table is dense:
/// every value below this is a row, and nothing above it is ever reused.
pub const COMPRESSION_VALUES: usize = 32;

/// Stable compression identifiers (u8) persisted in block tags.
///
/// The value is the codec table index; both are on-disk ABI. Values never
/// change, never reorder, and gaps never close.
pub mod ids {
    pub const INHERIT: u8    = 0;
    pub const ON: u8         = 1;
    pub const OFF: u8        = 2;
    pub const SNAPPY: u8     = 3;
    pub const EMPTY: u8      = 4;
    pub const DEFLATE_1: u8  = 5;
    pub const DEFLATE_2: u8  = 6;
    pub const DEFLATE_3: u8  = 7;
    pub const DEFLATE_4: u8  = 8;
    pub const DEFLATE_5: u8  = 9;
    pub const DEFLATE_6: u8  = 10;
    pub const DEFLATE_7: u8  = 11;
    pub const DEFLATE_8: u8  = 12;
    pub const DEFLATE_9: u8  = 13;
    pub const RLE: u8        = 14;
    pub const LZ4: u8        = 15;
    pub const LZ4HC_1: u8    = 16;
    pub const LZ4HC_2: u8    = 17;
    pub const LZ4HC_3: u8    = 18;
    pub const LZ4HC_4: u8    = 19;
    pub const LZ4HC_5: u8    = 20;
    pub const LZ4HC_6: u8    = 21;
    pub const LZ4HC_7: u8    = 22;
    pub const LZ4HC_8: u8    = 23;
    pub const LZ4HC_9: u8    = 24;
    pub const LZ4HC_10: u8   = 25;
    pub const LZ4HC_11: u8   = 26;
    pub const LZ4HC_12: u8   = 27;
    pub const LZ4HC_13: u8   = 28;
    pub const LZ4HC_14: u8   = 29;
    pub const LZ4HC_15: u8   = 30;
    pub const LZ4HC_16: u8   = 31;
}
