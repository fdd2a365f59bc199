//! Fast splitters for URL references.
//!
//! These only find component boundaries. Any string is accepted, and a
//! prefix which does not match `scheme` rule is treated as a part of the path.

mod authority;

pub(crate) use self::authority::decompose_authority;

use crate::components::ReferenceComponents;
use crate::parser::char::is_scheme;
use crate::parser::str::{find_split2, find_split3, find_split4_hole, find_split_hole};

/// Eats a `scheme` and a following colon if available, and returns the rest and the scheme.
///
/// This should be called at the head of a reference.
#[must_use]
fn scheme_colon_opt(i: &str) -> (&str, Option<&str>) {
    match find_split4_hole(i, b':', b'/', b'?', b'#') {
        Some((scheme, b':', rest)) if is_scheme(scheme) => (rest, Some(scheme)),
        _ => (i, None),
    }
}

/// Eats double slash and the following authority if available, and returns the authority.
///
/// This should be called at the head of a reference, or at the result of `scheme_colon_opt`.
#[must_use]
fn slash_slash_authority_opt(i: &str) -> (&str, Option<&str>) {
    let s = match i.strip_prefix("//") {
        Some(rest) => rest,
        None => return (i, None),
    };
    // A slash, question mark, and hash character terminate `authority`.
    match find_split3(s, b'/', b'?', b'#') {
        Some((authority, rest)) => (rest, Some(authority)),
        None => ("", Some(s)),
    }
}

/// Eats a string until the query, and returns that part (excluding `?` for the query).
#[must_use]
fn until_query(i: &str) -> (&str, &str) {
    match find_split2(i, b'?', b'#') {
        Some((before_query, rest)) => (rest, before_query),
        None => ("", i),
    }
}

/// Decomposes query and fragment, if available.
///
/// The string must start with `?`, or `#`, or be empty.
#[must_use]
fn decompose_query_and_fragment(i: &str) -> (Option<&str>, Option<&str>) {
    match i.as_bytes().first().copied() {
        None => (None, None),
        Some(b'?') => {
            let rest = &i[1..];
            match find_split_hole(rest, b'#') {
                Some((query, fragment)) => (Some(query), Some(fragment)),
                None => (Some(rest), None),
            }
        }
        Some(c) => {
            debug_assert_eq!(c, b'#');
            (None, Some(&i[1..]))
        }
    }
}

/// Decomposes the given reference into the five components.
#[must_use]
pub(crate) fn decompose_reference(i: &str) -> ReferenceComponents<'_> {
    let (i, scheme) = scheme_colon_opt(i);
    let (i, authority) = slash_slash_authority_opt(i);
    let (i, path) = until_query(i);
    let (query, fragment) = decompose_query_and_fragment(i);
    ReferenceComponents {
        scheme,
        authority,
        path,
        query,
        fragment,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn full_url() {
        let c = decompose_reference("https://github.com/zacharyvoase/urlblocks?spam=eggs#foo");
        assert_eq!(c.scheme, Some("https"));
        assert_eq!(c.authority, Some("github.com"));
        assert_eq!(c.path, "/zacharyvoase/urlblocks");
        assert_eq!(c.query, Some("spam=eggs"));
        assert_eq!(c.fragment, Some("foo"));
    }

    #[test]
    fn relative_references() {
        let c = decompose_reference("another-project");
        assert_eq!(c.scheme, None);
        assert_eq!(c.authority, None);
        assert_eq!(c.path, "another-project");

        let c = decompose_reference("//example.com/foo");
        assert_eq!(c.scheme, None);
        assert_eq!(c.authority, Some("example.com"));
        assert_eq!(c.path, "/foo");

        let c = decompose_reference("?x=y");
        assert_eq!(c.path, "");
        assert_eq!(c.query, Some("x=y"));
        assert_eq!(c.fragment, None);

        let c = decompose_reference("#");
        assert_eq!(c.query, None);
        assert_eq!(c.fragment, Some(""));
    }

    #[test]
    fn colon_after_slash_is_not_a_scheme() {
        let c = decompose_reference("a/b:c");
        assert_eq!(c.scheme, None);
        assert_eq!(c.path, "a/b:c");

        let c = decompose_reference("1a:b");
        assert_eq!(c.scheme, None);
        assert_eq!(c.path, "1a:b");
    }

    #[test]
    fn fragment_may_contain_question_mark() {
        let c = decompose_reference("http://h/p#frag?not-query");
        assert_eq!(c.query, None);
        assert_eq!(c.fragment, Some("frag?not-query"));
    }
}
