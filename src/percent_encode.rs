//! Percent encoding.

use std::borrow::Cow;
use std::fmt::{self, Write as _};

use crate::parser::char;

/// Context for percent encoding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
enum Context {
    /// Encode the string as a user name or a password.
    ///
    /// A colon (`:`) will be encoded to `%3A`.
    Userinfo,
    /// Encode the string as a path segment.
    ///
    /// A slash (`/`) will be encoded to `%2F`.
    PathSegment,
    /// Encode the string as path segments joined with `/`.
    ///
    /// A slash (`/`) will be used as is.
    Path,
    /// Encode the string as a query key or value.
    ///
    /// `&`, `=` and `+` will be encoded.
    QueryComponent,
    /// Encode the string as a fragment string (without the `#` prefix).
    Fragment,
}

/// A proxy to percent-encode a string.
///
/// The encoded form is produced by the [`Display`][`fmt::Display`] impl, so
/// it can be written into any formatter without an intermediate allocation.
///
/// # Examples
///
/// ```
/// use urlblocks::percent_encode::PercentEncoded;
///
/// let encoded = PercentEncoded::from_path_segment("a b/c");
/// assert_eq!(encoded.to_string(), "a%20b%2Fc");
/// ```
#[derive(Debug, Clone, Copy)]
pub struct PercentEncoded<T> {
    /// Source string context.
    context: Context,
    /// Raw string before being encoded.
    raw: T,
}

impl<T: fmt::Display> PercentEncoded<T> {
    /// Creates an encoded string from a raw user name or password.
    ///
    /// ```
    /// use urlblocks::percent_encode::PercentEncoded;
    ///
    /// assert_eq!(PercentEncoded::from_userinfo("a:b@c").to_string(), "a%3Ab%40c");
    /// ```
    pub fn from_userinfo(raw: T) -> Self {
        Self {
            context: Context::Userinfo,
            raw,
        }
    }

    /// Creates an encoded string from a raw path segment.
    ///
    /// ```
    /// use urlblocks::percent_encode::PercentEncoded;
    ///
    /// let raw = "alpha/\u{03B1}?#";
    /// // Note that `/` is encoded to `%2F`.
    /// let encoded = "alpha%2F%CE%B1%3F%23";
    /// assert_eq!(PercentEncoded::from_path_segment(raw).to_string(), encoded);
    /// ```
    pub fn from_path_segment(raw: T) -> Self {
        Self {
            context: Context::PathSegment,
            raw,
        }
    }

    /// Creates an encoded string from a raw path.
    ///
    /// ```
    /// use urlblocks::percent_encode::PercentEncoded;
    ///
    /// let raw = "alpha/\u{03B1}?#";
    /// // Note that `/` is NOT percent encoded.
    /// let encoded = "alpha/%CE%B1%3F%23";
    /// assert_eq!(PercentEncoded::from_path(raw).to_string(), encoded);
    /// ```
    pub fn from_path(raw: T) -> Self {
        Self {
            context: Context::Path,
            raw,
        }
    }

    /// Creates an encoded string from a raw query key or value.
    ///
    /// ```
    /// use urlblocks::percent_encode::PercentEncoded;
    ///
    /// let raw = "a=b&c d+e/f";
    /// let encoded = "a%3Db%26c%20d%2Be/f";
    /// assert_eq!(PercentEncoded::from_query_component(raw).to_string(), encoded);
    /// ```
    pub fn from_query_component(raw: T) -> Self {
        Self {
            context: Context::QueryComponent,
            raw,
        }
    }

    /// Creates an encoded string from a raw fragment.
    ///
    /// ```
    /// use urlblocks::percent_encode::PercentEncoded;
    ///
    /// let raw = "alpha/\u{03B1}?#";
    /// let encoded = "alpha/%CE%B1?%23";
    /// assert_eq!(PercentEncoded::from_fragment(raw).to_string(), encoded);
    /// ```
    pub fn from_fragment(raw: T) -> Self {
        Self {
            context: Context::Fragment,
            raw,
        }
    }
}

impl<T: fmt::Display> fmt::Display for PercentEncoded<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        /// Filter that encodes a character before written if necessary.
        struct Filter<'a, 'b> {
            /// Encoding context.
            context: Context,
            /// Writer.
            writer: &'a mut fmt::Formatter<'b>,
        }
        impl fmt::Write for Filter<'_, '_> {
            fn write_str(&mut self, s: &str) -> fmt::Result {
                s.chars().try_for_each(|c| self.write_char(c))
            }
            fn write_char(&mut self, c: char) -> fmt::Result {
                let is_valid_char = c.is_ascii() && {
                    let b = c as u8;
                    match self.context {
                        Context::Userinfo => char::is_ascii_userinfo(b),
                        Context::PathSegment => char::is_ascii_pchar(b),
                        Context::Path => b == b'/' || char::is_ascii_pchar(b),
                        Context::QueryComponent => char::is_ascii_query_component(b),
                        Context::Fragment => char::is_ascii_fragment(b),
                    }
                };
                if is_valid_char {
                    self.writer.write_char(c)
                } else {
                    write_pct_encoded_char(&mut self.writer, c)
                }
            }
        }
        let mut filter = Filter {
            context: self.context,
            writer: f,
        };
        write!(filter, "{}", self.raw)
    }
}

/// Percent-encodes the given character and writes it.
#[inline]
fn write_pct_encoded_char<W: fmt::Write>(writer: &mut W, c: char) -> fmt::Result {
    let mut buf = [0_u8; 4];
    let buf = c.encode_utf8(&mut buf);
    buf.bytes().try_for_each(|b| write!(writer, "%{:02X}", b))
}

/// Decodes percent-encoded triplets in the given string.
///
/// A `%` which is not followed by two hexadecimal digits is kept as is.
/// Byte sequences which are not valid UTF-8 after decoding are replaced with
/// `U+FFFD REPLACEMENT CHARACTER`.
///
/// ```
/// use urlblocks::percent_encode::percent_decode;
///
/// assert_eq!(percent_decode("p%C3%A5th%2Fx"), "p\u{e5}th/x");
/// assert_eq!(percent_decode("100%"), "100%");
/// ```
#[inline]
#[must_use]
pub fn percent_decode(s: &str) -> Cow<'_, str> {
    percent_encoding::percent_decode_str(s).decode_utf8_lossy()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn userinfo_encodes_colon_and_at() {
        assert_eq!(
            PercentEncoded::from_userinfo("us:er@x").to_string(),
            "us%3Aer%40x"
        );
    }

    #[test]
    fn path_segment_encodes_slash() {
        assert_eq!(
            PercentEncoded::from_path_segment("\u{03B1}/<alpha>?#").to_string(),
            "%CE%B1%2F%3Calpha%3E%3F%23"
        );
    }

    #[test]
    fn path_keeps_slash() {
        assert_eq!(
            PercentEncoded::from_path("\u{03B1}/<alpha>?#").to_string(),
            "%CE%B1/%3Calpha%3E%3F%23"
        );
    }

    #[test]
    fn percent_sign_is_encoded() {
        assert_eq!(PercentEncoded::from_fragment("100%").to_string(), "100%25");
    }

    #[test]
    fn decode_is_borrowed_when_nothing_to_decode() {
        assert!(matches!(percent_decode("plain"), Cow::Borrowed("plain")));
        assert!(matches!(percent_decode("a%20b"), Cow::Owned(_)));
    }

    #[test]
    fn plus_is_not_a_space_outside_query() {
        assert_eq!(percent_decode("a+b%20c"), "a+b c");
    }

    #[test]
    fn decode_broken_triplets() {
        assert_eq!(percent_decode("%"), "%");
        assert_eq!(percent_decode("%4"), "%4");
        assert_eq!(percent_decode("%zz"), "%zz");
        assert_eq!(percent_decode("%ff"), "\u{FFFD}");
    }

    #[test]
    fn encode_then_decode_restores_input() {
        for raw in ["a b", "x/y?z#w", "\u{03B1}\u{03B2}", "k=v&k2=v2", "100%"] {
            let encoded = PercentEncoded::from_query_component(raw).to_string();
            assert_eq!(percent_decode(&encoded), raw);
            let encoded = PercentEncoded::from_fragment(raw).to_string();
            assert_eq!(percent_decode(&encoded), raw);
        }
    }
}
