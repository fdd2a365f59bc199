//! Splitter for `authority` string.

use crate::components::AuthorityComponents;
use crate::parser::str::{rfind, rfind_split};

/// Decomposes the authority into `(userinfo, host, port)`.
///
/// The `userinfo` ends at the last `@`, and the port starts after the last
/// `:` which is not inside an IP literal.
#[must_use]
pub(crate) fn decompose_authority(authority: &str) -> AuthorityComponents<'_> {
    let host_start = match rfind(authority.as_bytes(), b'@') {
        Some(pos) => pos + 1,
        None => 0,
    };
    let i = &authority[host_start..];
    let host_end = match rfind_split(i, b':') {
        // `[::1]` has colons, but the last colon is followed by `]`.
        Some((_, colon_port)) if colon_port.contains(']') => authority.len(),
        Some((host, _colon_port)) => host_start + host.len(),
        None => authority.len(),
    };

    AuthorityComponents {
        authority,
        host_start,
        host_end,
    }
}
