//! Syntactic components of URL references.

use crate::parser::trusted as trusted_parser;

/// Components of a URL reference.
///
/// See <https://tools.ietf.org/html/rfc3986#section-5.2.2>.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct ReferenceComponents<'a> {
    /// Scheme.
    pub(crate) scheme: Option<&'a str>,
    /// Authority.
    ///
    /// Note that this can be `Some("")`.
    pub(crate) authority: Option<&'a str>,
    /// Path.
    pub(crate) path: &'a str,
    /// Query.
    pub(crate) query: Option<&'a str>,
    /// Fragment.
    pub(crate) fragment: Option<&'a str>,
}

impl<'a> From<&'a str> for ReferenceComponents<'a> {
    #[inline]
    fn from(s: &'a str) -> Self {
        trusted_parser::decompose_reference(s)
    }
}

/// Subcomponents of an authority.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct AuthorityComponents<'a> {
    /// Authority string, excluding the leading `//`.
    pub(crate) authority: &'a str,
    /// Start position of the `host`.
    pub(crate) host_start: usize,
    /// End position of the `host`.
    pub(crate) host_end: usize,
}

impl<'a> AuthorityComponents<'a> {
    /// Returns the `userinfo` part, excluding the following `@`.
    #[must_use]
    pub(crate) fn userinfo(&self) -> Option<&'a str> {
        match self.host_start {
            0 => None,
            n => Some(&self.authority[..(n - 1)]),
        }
    }

    /// Returns the `host` part.
    #[inline]
    #[must_use]
    pub(crate) fn host(&self) -> &'a str {
        &self.authority[self.host_start..self.host_end]
    }

    /// Returns the `port` part, excluding the preceding `:`.
    ///
    /// Note that this can be `Some("")`.
    #[must_use]
    pub(crate) fn port(&self) -> Option<&'a str> {
        if self.host_end == self.authority.len() {
            return None;
        }
        Some(&self.authority[(self.host_end + 1)..])
    }
}
