//! URL creation error.

use thiserror::Error;

/// Error on creating a [`Url`][`crate::Url`] value.
///
/// All variants mean "the input is not a URL this crate accepts"; they only
/// differ in which part is missing or broken.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum InvalidUrlError {
    /// The input string is empty.
    #[error("URL is empty")]
    Empty,

    /// The input has no scheme.
    #[error("URL {input:?} does not provide a scheme")]
    MissingScheme {
        /// The rejected input.
        input: String,
    },

    /// The input has no authority, or its host is empty.
    #[error("URL {input:?} does not provide a hostname")]
    MissingHost {
        /// The rejected input.
        input: String,
    },

    /// The host or a domain label contains a character that would end or
    /// split it when written in an authority.
    #[error("host {input:?} contains a delimiter")]
    InvalidHost {
        /// The rejected host or label.
        input: String,
    },

    /// The port is not a decimal number in `0..=65535`.
    #[error("authority {input:?} has an invalid port")]
    InvalidPort {
        /// The rejected authority.
        input: String,
    },

    /// The host has fewer domain labels than the requested level.
    #[error("host {host:?} has no domain at level {level}")]
    MissingDomainLevel {
        /// The host.
        host: String,
        /// The requested level.
        level: usize,
    },
}

impl InvalidUrlError {
    /// Returns a short name of the failure, used as a log field.
    #[must_use]
    pub(crate) fn reason(&self) -> &'static str {
        match self {
            Self::Empty => "empty",
            Self::MissingScheme { .. } => "missing scheme",
            Self::MissingHost { .. } => "missing host",
            Self::InvalidHost { .. } => "invalid host",
            Self::InvalidPort { .. } => "invalid port",
            Self::MissingDomainLevel { .. } => "missing domain level",
        }
    }
}
