//! Helpers for characters.

/// Checks if the given byte matches `sub-delim` rule.
#[inline]
#[must_use]
pub(crate) fn is_ascii_sub_delim(b: u8) -> bool {
    matches!(
        b,
        b'!' | b'$' | b'&' | b'\'' | b'(' | b')' | b'*' | b'+' | b',' | b';' | b'='
    )
}

/// Checks if the given byte matches `unreserved` rule.
#[inline]
#[must_use]
pub(crate) fn is_ascii_unreserved(b: u8) -> bool {
    b.is_ascii_alphanumeric() || matches!(b, b'-' | b'.' | b'_' | b'~')
}

/// Checks if the given byte matches `pchar` rule, except for percent-encoded triplets.
#[inline]
#[must_use]
pub(crate) fn is_ascii_pchar(b: u8) -> bool {
    is_ascii_unreserved(b) || is_ascii_sub_delim(b) || b == b':' || b == b'@'
}

/// Checks if the given byte may appear unencoded in a `userinfo` part.
///
/// Colons are excluded since they separate the user and the password.
#[inline]
#[must_use]
pub(crate) fn is_ascii_userinfo(b: u8) -> bool {
    is_ascii_unreserved(b) || is_ascii_sub_delim(b)
}

/// Checks if the given byte may appear unencoded in a query key or value.
///
/// `&`, `=` and `+` carry meaning inside a query, so they are excluded.
#[inline]
#[must_use]
pub(crate) fn is_ascii_query_component(b: u8) -> bool {
    match b {
        b'&' | b'=' | b'+' => false,
        b'/' | b'?' => true,
        _ => is_ascii_pchar(b),
    }
}

/// Checks if the given byte may appear unencoded in a fragment.
#[inline]
#[must_use]
pub(crate) fn is_ascii_fragment(b: u8) -> bool {
    b == b'/' || b == b'?' || is_ascii_pchar(b)
}

/// Checks if the given string matches `scheme` rule.
///
/// `scheme = ALPHA *( ALPHA / DIGIT / "+" / "-" / "." )`.
#[must_use]
pub(crate) fn is_scheme(s: &str) -> bool {
    let mut bytes = s.bytes();
    match bytes.next() {
        Some(first) if first.is_ascii_alphabetic() => {}
        _ => return false,
    }
    bytes.all(|b| b.is_ascii_alphanumeric() || matches!(b, b'+' | b'-' | b'.'))
}

/// Checks if the given byte ends a `host` or splits it when written in an authority.
#[inline]
#[must_use]
pub(crate) fn is_ascii_host_delim(b: u8) -> bool {
    matches!(b, b'/' | b'?' | b'#' | b'@' | b':' | b'[' | b']')
}

/// Checks if the given string is written back as the same host.
///
/// A host is either a bracketed IP literal, which may contain colons, or a
/// name without any of the authority delimiters.
#[must_use]
pub(crate) fn is_host(s: &str) -> bool {
    if s.is_empty() {
        return false;
    }
    match s.strip_prefix('[').and_then(|s| s.strip_suffix(']')) {
        Some(literal) => !literal.bytes().any(|b| b != b':' && is_ascii_host_delim(b)),
        None => !s.bytes().any(is_ascii_host_delim),
    }
}
