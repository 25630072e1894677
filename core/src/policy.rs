//! src/policy.rs
//!
//! Resolution of logical compression settings down to what the block path
//! actually runs.

use crate::types::Compression;

/// What `on` means once the lz4 pool feature is active.
const ON_DEFAULT: Compression = Compression::Lz4;
/// What `on` meant before the feature existed; still the answer on pools
/// that have never enabled it.
const ON_LEGACY: Compression = Compression::Snappy;

/// Resolve an object's compression setting against its parent.
///
/// `child` is the object's own setting; `parent` is the already-resolved
/// setting of its ancestor and must not be `Inherit`. `lz4_enabled` is the
/// pool feature gate, supplied per call — this crate keeps no global state.
///
/// The result is never `Inherit` or `On`. It may still be `Off` or `Empty`;
/// the block path routes those without running a codec.
pub fn resolve(child: Compression, parent: Compression, lz4_enabled: bool) -> Compression {
    debug_assert!(
        parent != Compression::Inherit,
        "parent compression must already be resolved"
    );

    let mut result = child;
    if result == Compression::Inherit {
        result = parent;
    }
    if result == Compression::On {
        result = if lz4_enabled { ON_DEFAULT } else { ON_LEGACY };
    }
    result
}
