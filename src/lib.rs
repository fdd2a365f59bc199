//! Immutable URL values with component-level accessors and rewriters.
//!
//! A [`Url`] is an absolute URL with a host, such as
//! `https://user@example.com:8443/a/b?x=1#top`. It is split into its
//! components once, on parse, and each component can be read or replaced:
//!
//! * scheme, user name, password, host and port ([`Authority`]),
//! * path ([`Path`]), as a list of segments,
//! * query ([`QueryString`]), as an ordered list of name/value pairs which
//!   may repeat a name,
//! * fragment.
//!
//! A `Url` is never modified. Every `with_*`, `without_*`, `add_*`, `set_*`
//! and `del_*` method returns a new value, so a `Url` can be shared freely.
//!
//! ```
//! use urlblocks::Url;
//!
//! let url = Url::parse("https://github.com/zacharyvoase/urlblocks?spam=eggs#foo")?;
//!
//! let issues = url
//!     .add_path_segment("issues")
//!     .set_query_param("state", "open")
//!     .without_fragment();
//! assert_eq!(
//!     issues.to_string(),
//!     "https://github.com/zacharyvoase/urlblocks/issues?spam=eggs&state=open"
//! );
//!
//! // The original value is untouched.
//! assert_eq!(url.to_string(), "https://github.com/zacharyvoase/urlblocks?spam=eggs#foo");
//! # Ok::<_, urlblocks::InvalidUrlError>(())
//! ```
//!
//! # Relative references
//!
//! [`Url::relative`] resolves a reference the way a browser resolves a link
//! against the page URL ([RFC 3986 section 5.2]).
//! `.` and `..` segments are removed from the result. Paths built with
//! [`Path::add_segment`] or [`Url::add_path`] keep them until
//! [`Url::with_normalized_path`] is called.
//!
//! ```
//! use urlblocks::Url;
//!
//! let base = Url::parse("http://example.com/docs/index.html")?;
//! assert_eq!(base.relative("guide.html")?.to_string(), "http://example.com/docs/guide.html");
//! assert_eq!(base.relative("//cdn.example.com/a.js")?.to_string(), "http://cdn.example.com/a.js");
//! assert_eq!(base.relative("../img/x.png")?.to_string(), "http://example.com/img/x.png");
//! # Ok::<_, urlblocks::InvalidUrlError>(())
//! ```
//!
//! # What is a valid URL
//!
//! Only URLs with a scheme and a non-empty host are accepted.
//! `mailto:someone@example.com` and `file:///etc/hosts` are valid RFC 3986
//! URIs, but they have no host, so they are rejected with
//! [`InvalidUrlError::MissingHost`].
//!
//! Hosts are not checked against DNS rules, and no scheme-specific rule is
//! applied. A host is only rejected ([`InvalidUrlError::InvalidHost`]) when
//! it contains a character that would split the URL differently, such as
//! `/` or `@`, outside of an IP literal like `[::1]`.
//!
//! # Features
//!
//! * `serde`: implements `Serialize` and `Deserialize` for [`Url`],
//!   [`Authority`], [`Path`] and [`QueryString`] as strings.
//! * `memchr`: uses `memchr` crate to find delimiters.
//!
//! # Logging
//!
//! Rejected inputs and the branch taken by relative resolution are reported
//! as `TRACE` level [`tracing`] events. This crate never installs a
//! subscriber.
//!
//! [RFC 3986 section 5.2]: https://datatracker.ietf.org/doc/html/rfc3986#section-5.2
#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

#[macro_use]
mod macros;

pub mod authority;
mod components;
pub mod error;
mod normalize;
pub(crate) mod parser;
pub mod path;
pub mod percent_encode;
pub mod ports;
pub mod query;
pub mod resolve;
pub mod url;

pub use self::authority::{Authority, DOMAIN_LEVEL_SECOND, DOMAIN_LEVEL_TOP};
pub use self::error::InvalidUrlError;
pub use self::path::Path;
pub use self::query::QueryString;
pub use self::resolve::FixedBaseResolver;
pub use self::url::Url;
