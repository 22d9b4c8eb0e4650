//! UUID v7 utilities for time-ordered identifiers.
//!
//! Note identifiers are UUIDv7, which embed a millisecond-precision Unix
//! timestamp in the first 48 bits and therefore sort chronologically.

use uuid::Uuid;

/// Generate a new UUIDv7 identifier.
///
/// IDs generated later are lexicographically greater, so primary-key order
/// matches creation order.
#[inline]
pub fn new_v7() -> Uuid {
    Uuid::now_v7()
}

/// Check whether a UUID is version 7.
pub fn is_v7(id: &Uuid) -> bool {
    id.get_version_num() == 7
}
