//! src/utils.rs
//!
//! Shared helpers.

use std::fmt;

use num_enum::TryFromPrimitive;

/// Format a raw identifier as its variant name, or as hex when it names
/// nothing. Keeps diagnostics readable without trusting the input.
pub fn enum_name_or_hex<T>(raw: T::Primitive) -> String
where
    T: TryFromPrimitive + fmt::Debug,
    T::Primitive: fmt::LowerHex,
{
    match T::try_from_primitive(raw) {
        Ok(variant) => format!("{:?}", variant),
        Err(_) => format!("0x{:x}", raw),
    }
}
