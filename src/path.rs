//! Path component.

use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

use crate::normalize::remove_dot_segments;
use crate::parser::str::rfind;
use crate::percent_encode::{percent_decode, PercentEncoded};

/// A URL path.
///
/// The path is held percent-encoded, exactly as written, so joining
/// [`segments`][`Self::segments`] back with `/` reproduces it.
///
/// Every method returns a new value; the receiver is never modified.
///
/// # Examples
///
/// ```
/// use urlblocks::Path;
///
/// let path = Path::new("/a/b/c");
/// assert!(path.is_absolute());
/// assert_eq!(path.segments(), ["a", "b", "c"]);
/// assert_eq!(path.parent().as_str(), "/a/b/");
/// assert_eq!(path.add_segment("d e").as_str(), "/a/b/c/d%20e");
/// ```
#[derive(Debug, Default, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Path(String);

impl Path {
    /// Creates a path from an already encoded string.
    #[inline]
    #[must_use]
    pub fn new(path: impl Into<String>) -> Self {
        Self(path.into())
    }

    /// Returns the root path, `/`.
    #[inline]
    #[must_use]
    pub fn root() -> Self {
        Self("/".to_owned())
    }

    /// Joins the already encoded segments with `/`.
    ///
    /// If `absolute` is true, the path starts with `/`.
    ///
    /// ```
    /// use urlblocks::Path;
    ///
    /// let path = Path::from_segments(["a", "b", ""], true);
    /// assert_eq!(path.as_str(), "/a/b/");
    /// assert_eq!(path.segments(), ["a", "b", ""]);
    /// ```
    #[must_use]
    pub fn from_segments<I, S>(segments: I, absolute: bool) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut path = String::new();
        for (i, segment) in segments.into_iter().enumerate() {
            if absolute || i > 0 {
                path.push('/');
            }
            path.push_str(segment.as_ref());
        }
        Self(path)
    }

    /// Returns the path as a string.
    #[inline]
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns true if the path is empty.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns true if the path starts with `/`.
    #[inline]
    #[must_use]
    pub fn is_absolute(&self) -> bool {
        self.0.starts_with('/')
    }

    /// Returns true if the path does not start with `/`.
    #[inline]
    #[must_use]
    pub fn is_relative(&self) -> bool {
        !self.is_absolute()
    }

    /// Returns true if the path is not empty and does not end with `/`.
    ///
    /// ```
    /// use urlblocks::Path;
    ///
    /// assert!(Path::new("/a/b/c").is_leaf());
    /// assert!(!Path::new("/a/").is_leaf());
    /// assert!(!Path::new("").is_leaf());
    /// ```
    #[inline]
    #[must_use]
    pub fn is_leaf(&self) -> bool {
        !self.0.is_empty() && !self.0.ends_with('/')
    }

    /// Returns the encoded segments.
    ///
    /// The leading `/` of an absolute path does not make a segment, and a
    /// trailing `/` makes an empty last segment.
    ///
    /// ```
    /// use urlblocks::Path;
    ///
    /// assert_eq!(Path::new("/a/b").segments(), ["a", "b"]);
    /// assert_eq!(Path::new("/a/b/").segments(), ["a", "b", ""]);
    /// assert_eq!(Path::new("/").segments(), [""]);
    /// assert!(Path::new("").segments().is_empty());
    /// ```
    #[must_use]
    pub fn segments(&self) -> Vec<&str> {
        if self.0.is_empty() {
            return Vec::new();
        }
        let body = self.0.strip_prefix('/').unwrap_or(&self.0);
        body.split('/').collect()
    }

    /// Returns the decoded segments.
    #[must_use]
    pub fn decoded_segments(&self) -> Vec<String> {
        self.segments()
            .into_iter()
            .map(|segment| percent_decode(segment).into_owned())
            .collect()
    }

    /// Returns the parent directory.
    ///
    /// The result always ends with `/`, except for the parent of a relative
    /// single-segment path, which is empty.
    /// The parent of the root (or the empty path) is the root.
    ///
    /// ```
    /// use urlblocks::Path;
    ///
    /// assert_eq!(Path::new("/a/b/c").parent().as_str(), "/a/b/");
    /// assert_eq!(Path::new("/a/b/").parent().as_str(), "/a/");
    /// assert_eq!(Path::new("/").parent().as_str(), "/");
    /// ```
    #[must_use]
    pub fn parent(&self) -> Self {
        if self.0.is_empty() || self.0 == "/" {
            return Self::root();
        }
        let dir = self.0.strip_suffix('/').unwrap_or(&self.0);
        match rfind(dir.as_bytes(), b'/') {
            Some(last_slash) => Self(dir[..=last_slash].to_owned()),
            None => Self::default(),
        }
    }

    /// Appends a segment after percent-encoding it.
    ///
    /// A slash in `segment` is encoded, so exactly one segment is added.
    /// `.` and `..` are appended as is.
    #[must_use]
    pub fn add_segment(&self, segment: &str) -> Self {
        self.join(&PercentEncoded::from_path_segment(segment).to_string())
    }

    /// Appends a partial path after percent-encoding it.
    ///
    /// Slashes in `partial_path` separate segments. A partial path starting
    /// with `/` replaces the whole path.
    ///
    /// ```
    /// use urlblocks::Path;
    ///
    /// assert_eq!(Path::new("/a").add("b/c").as_str(), "/a/b/c");
    /// assert_eq!(Path::new("/a/").add("b c").as_str(), "/a/b%20c");
    /// assert_eq!(Path::new("/a").add("/b").as_str(), "/b");
    /// ```
    #[must_use]
    pub fn add(&self, partial_path: &str) -> Self {
        let encoded = PercentEncoded::from_path(partial_path).to_string();
        if encoded.starts_with('/') {
            return Self(encoded);
        }
        self.join(&encoded)
    }

    /// Joins an encoded relative path, inserting a slash if necessary.
    fn join(&self, encoded: &str) -> Self {
        let mut path = self.0.clone();
        if !path.is_empty() && !path.ends_with('/') {
            path.push('/');
        }
        path.push_str(encoded);
        Self(path)
    }

    /// Returns the path with `.` and `..` segments removed.
    ///
    /// ```
    /// use urlblocks::Path;
    ///
    /// assert_eq!(Path::new("/a/b/c/./../../g").normalize().as_str(), "/a/g");
    /// ```
    #[must_use]
    pub fn normalize(&self) -> Self {
        Self(remove_dot_segments(&self.0))
    }
}

impl fmt::Display for Path {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for Path {
    #[inline]
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<&str> for Path {
    #[inline]
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl From<String> for Path {
    #[inline]
    fn from(s: String) -> Self {
        Self::new(s)
    }
}

impl FromStr for Path {
    type Err = Infallible;

    #[inline]
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::new(s))
    }
}

impl_serde! {
    expecting: "a URL path string",
    ty: Path,
}
