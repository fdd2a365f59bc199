//! Relative reference resolution.
//!
//! This follows [RFC 3986 section 5.2.2]. `.` and `..` segments are removed
//! from the path of the reference (merged with the base path if relative).
//! A reference with a scheme is parsed as is.
//!
//! [RFC 3986 section 5.2.2]: https://datatracker.ietf.org/doc/html/rfc3986#section-5.2.2

use crate::authority::Authority;
use crate::components::ReferenceComponents;
use crate::error::InvalidUrlError;
use crate::parser::str::rfind;
use crate::path::Path;
use crate::query::QueryString;
use crate::url::Url;

/// A resolver against the fixed base.
///
/// # Examples
///
/// ```
/// use urlblocks::resolve::FixedBaseResolver;
/// use urlblocks::Url;
///
/// let base = Url::parse("http://example.com/base/index.html?x=1")?;
/// let resolver = FixedBaseResolver::new(&base);
///
/// assert_eq!(resolver.resolve("other.html")?.to_string(), "http://example.com/base/other.html");
/// assert_eq!(resolver.resolve("?y=2")?.to_string(), "http://example.com/base/index.html?y=2");
/// assert_eq!(resolver.resolve("#top")?.to_string(), "http://example.com/base/index.html?x=1#top");
/// # Ok::<_, urlblocks::InvalidUrlError>(())
/// ```
#[derive(Debug, Clone, Copy)]
pub struct FixedBaseResolver<'a> {
    /// Base URL.
    base: &'a Url,
}

impl<'a> FixedBaseResolver<'a> {
    /// Creates a new resolver with the given base.
    #[inline]
    #[must_use]
    pub fn new(base: &'a Url) -> Self {
        Self { base }
    }

    /// Returns the base.
    #[inline]
    #[must_use]
    pub fn base(&self) -> &'a Url {
        self.base
    }

    /// Resolves the given reference against the fixed base.
    ///
    /// The result does not depend on the base fragment. `.` and `..`
    /// segments are removed unless the reference has a scheme.
    ///
    /// # Failures
    ///
    /// Fails when the reference has a scheme but is not a valid URL itself,
    /// or when it has an authority without a valid host.
    pub fn resolve(&self, reference: &str) -> Result<Url, InvalidUrlError> {
        let r = ReferenceComponents::from(reference);
        let base = self.base;

        if r.scheme.is_some() {
            tracing::trace!(reference, branch = "absolute", "resolving reference");
            return Url::parse(reference);
        }

        if let Some(authority) = r.authority {
            tracing::trace!(reference, branch = "authority", "resolving reference");
            let authority = Authority::parse_within(authority, reference)?;
            return Ok(Url::from_parts(
                base.scheme(),
                authority,
                Path::new(r.path).normalize(),
                r.query.map(QueryString::parse).unwrap_or_default(),
                r.fragment,
            ));
        }

        let (path, query) = if r.path.is_empty() {
            match r.query {
                Some(query) => {
                    tracing::trace!(reference, branch = "query", "resolving reference");
                    (base.path().clone(), QueryString::parse(query))
                }
                None => {
                    let branch = if r.fragment.is_some() {
                        "fragment"
                    } else {
                        "empty"
                    };
                    tracing::trace!(reference, branch, "resolving reference");
                    (base.path().clone(), base.query().clone())
                }
            }
        } else {
            tracing::trace!(reference, branch = "path", "resolving reference");
            let path = if r.path.starts_with('/') {
                Path::new(r.path).normalize()
            } else {
                merge(base.path(), r.path).normalize()
            };
            (path, r.query.map(QueryString::parse).unwrap_or_default())
        };

        Ok(Url::from_parts(
            base.scheme(),
            base.netloc().clone(),
            path,
            query,
            r.fragment,
        ))
    }
}

/// Merges a relative reference path into the base path.
///
/// See <https://datatracker.ietf.org/doc/html/rfc3986#section-5.2.3>.
fn merge(base: &Path, reference: &str) -> Path {
    let base = base.as_str();
    match rfind(base.as_bytes(), b'/') {
        Some(last_slash) => Path::new(format!("{}{}", &base[..=last_slash], reference)),
        None => Path::new(format!("/{}", reference)),
    }
}

impl Url {
    /// Resolves a reference against this URL.
    ///
    /// A reference with a scheme is parsed as is, and this URL is ignored.
    /// Otherwise `.` and `..` segments are removed from the resulting path,
    /// so resolving against `/` normalizes a path.
    ///
    /// # Failures
    ///
    /// Fails when the result is not a valid URL, for example when the
    /// reference has a scheme but no host.
    ///
    /// # Examples
    ///
    /// ```
    /// use urlblocks::Url;
    ///
    /// let base = Url::parse("https://github.com/zacharyvoase/urlblocks?spam=eggs#foo")?;
    /// assert_eq!(
    ///     base.relative("another-project")?.to_string(),
    ///     "https://github.com/zacharyvoase/another-project"
    /// );
    /// assert_eq!(base.relative("//example.com/foo")?.to_string(), "https://example.com/foo");
    /// assert_eq!(base.relative("http://example.org/")?.to_string(), "http://example.org/");
    ///
    /// let dir = Url::parse("http://www.google.com/a/b/c/")?;
    /// assert_eq!(dir.relative("../d/e/f")?.to_string(), "http://www.google.com/a/b/d/e/f");
    /// # Ok::<_, urlblocks::InvalidUrlError>(())
    /// ```
    pub fn relative(&self, reference: &str) -> Result<Url, InvalidUrlError> {
        FixedBaseResolver::new(self).resolve(reference)
    }
}
