//! Reversible URL encoding for version identifiers.
//!
//! `+` and `_` are replaced by `-plus-` and `-u-` so a version such as
//! `v1.2.3+fix6` can sit in a path segment as `v1.2.3-plus-fix6`.
//! Versions that already contain `-plus-` or `-u-` (or whose encoding would
//! form one across a boundary, as `_plus_` does) cannot be round-tripped and
//! must not be published.

const PLUS: (&str, &str) = ("+", "-plus-");
const UNDERSCORE: (&str, &str) = ("_", "-u-");

/// Encode a version for use in a URL path segment.
pub fn encode_version(version: &str) -> String {
    version
        .replace(PLUS.0, PLUS.1)
        .replace(UNDERSCORE.0, UNDERSCORE.1)
}

/// Decode a URL path segment back into a version.
pub fn decode_version(segment: &str) -> String {
    segment
        .replace(PLUS.1, PLUS.0)
        .replace(UNDERSCORE.1, UNDERSCORE.0)
}
