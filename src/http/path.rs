//! Trailing-id extraction from request paths.
//!
//! # Design Decisions
//! - Any parse failure yields id 0 instead of failing the request: a
//!   non-numeric suffix, an empty suffix, extra path segments, or a path
//!   that does not carry the prefix at all. Lookups then proceed against
//!   id 0, which the service treats as never assigned to a real record.

/// Decode the base-10 id that trails `prefix` in `path`.
///
/// Returns 0 when the path does not start with the prefix or the suffix
/// is not a well-formed integer.
pub fn decode_trailing_id(prefix: &str, path: &str) -> u64 {
    let suffix = path.strip_prefix(prefix).unwrap_or("");
    suffix.parse().unwrap_or(0)
}
