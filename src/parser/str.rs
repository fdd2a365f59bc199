//! Functions for common string operations.

/// Returns the position of the first occurrence of the byte.
#[cfg(feature = "memchr")]
#[inline]
#[must_use]
pub(crate) fn find(haystack: &[u8], needle: u8) -> Option<usize> {
    memchr::memchr(needle, haystack)
}

/// Returns the position of the first occurrence of the byte.
#[cfg(not(feature = "memchr"))]
#[inline]
#[must_use]
pub(crate) fn find(haystack: &[u8], needle: u8) -> Option<usize> {
    haystack.iter().position(|&b| b == needle)
}

/// Returns the position of the last occurrence of the byte.
#[cfg(feature = "memchr")]
#[inline]
#[must_use]
pub(crate) fn rfind(haystack: &[u8], needle: u8) -> Option<usize> {
    memchr::memrchr(needle, haystack)
}

/// Returns the position of the last occurrence of the byte.
#[cfg(not(feature = "memchr"))]
#[inline]
#[must_use]
pub(crate) fn rfind(haystack: &[u8], needle: u8) -> Option<usize> {
    haystack.iter().rposition(|&b| b == needle)
}

/// Returns the position of the first occurrence of either of the two bytes.
#[cfg(feature = "memchr")]
#[inline]
#[must_use]
fn find2(haystack: &[u8], needle1: u8, needle2: u8) -> Option<usize> {
    memchr::memchr2(needle1, needle2, haystack)
}

/// Returns the position of the first occurrence of either of the two bytes.
#[cfg(not(feature = "memchr"))]
#[inline]
#[must_use]
fn find2(haystack: &[u8], needle1: u8, needle2: u8) -> Option<usize> {
    haystack
        .iter()
        .position(|&b| b == needle1 || b == needle2)
}

/// Returns the position of the first occurrence of any of the three bytes.
#[cfg(feature = "memchr")]
#[inline]
#[must_use]
fn find3(haystack: &[u8], needle1: u8, needle2: u8, needle3: u8) -> Option<usize> {
    memchr::memchr3(needle1, needle2, needle3, haystack)
}

/// Returns the position of the first occurrence of any of the three bytes.
#[cfg(not(feature = "memchr"))]
#[inline]
#[must_use]
fn find3(haystack: &[u8], needle1: u8, needle2: u8, needle3: u8) -> Option<usize> {
    haystack
        .iter()
        .position(|&b| b == needle1 || b == needle2 || b == needle3)
}

/// Splits the string at the first occurrence of the byte, dropping the delimiter.
#[inline]
#[must_use]
pub(crate) fn find_split_hole(s: &str, needle: u8) -> Option<(&str, &str)> {
    find(s.as_bytes(), needle).map(|pos| (&s[..pos], &s[(pos + 1)..]))
}

/// Splits the string at the last occurrence of the byte.
///
/// The delimiter is kept at the head of the second string.
#[inline]
#[must_use]
pub(crate) fn rfind_split(s: &str, needle: u8) -> Option<(&str, &str)> {
    rfind(s.as_bytes(), needle).map(|pos| s.split_at(pos))
}

/// Splits the string at the first occurrence of either of the two bytes.
///
/// The delimiter is kept at the head of the second string.
#[inline]
#[must_use]
pub(crate) fn find_split2(s: &str, needle1: u8, needle2: u8) -> Option<(&str, &str)> {
    find2(s.as_bytes(), needle1, needle2).map(|pos| s.split_at(pos))
}

/// Splits the string at the first occurrence of any of the three bytes.
///
/// The delimiter is kept at the head of the second string.
#[inline]
#[must_use]
pub(crate) fn find_split3(
    s: &str,
    needle1: u8,
    needle2: u8,
    needle3: u8,
) -> Option<(&str, &str)> {
    find3(s.as_bytes(), needle1, needle2, needle3).map(|pos| s.split_at(pos))
}

/// Splits the string at the first occurrence of any of the four bytes.
///
/// Returns the string before the delimiter, the delimiter, and the rest.
#[must_use]
pub(crate) fn find_split4_hole(
    s: &str,
    needle1: u8,
    needle2: u8,
    needle3: u8,
    needle4: u8,
) -> Option<(&str, u8, &str)> {
    let pos = s
        .bytes()
        .position(|b| b == needle1 || b == needle2 || b == needle3 || b == needle4)?;
    let delim = s.as_bytes()[pos];
    Some((&s[..pos], delim, &s[(pos + 1)..]))
}
