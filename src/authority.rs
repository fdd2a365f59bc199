//! Authority: user name, password, host and port.

use std::fmt;
use std::str::FromStr;

use crate::components::AuthorityComponents;
use crate::error::InvalidUrlError;
use crate::parser::char::is_host;
use crate::parser::str::find_split_hole;
use crate::parser::trusted::decompose_authority;
use crate::percent_encode::{percent_decode, PercentEncoded};

/// Level of the top domain (`com` in `www.example.com`).
pub const DOMAIN_LEVEL_TOP: usize = 1;

/// Level of the second domain (`example` in `www.example.com`).
pub const DOMAIN_LEVEL_SECOND: usize = 2;

/// The authority of a URL, `user:password@host:port`.
///
/// User name and password are held decoded, and encoded when written out.
/// The host is held as written.
///
/// # Examples
///
/// ```
/// use urlblocks::Authority;
///
/// let authority = Authority::parse("user:pass@www.example.com:8080")?;
/// assert_eq!(authority.username(), Some("user"));
/// assert_eq!(authority.password(), Some("pass"));
/// assert_eq!(authority.hostname(), "www.example.com");
/// assert_eq!(authority.port(), Some(8080));
///
/// let moved = authority.without_auth().with_port(443);
/// assert_eq!(moved.to_string(), "www.example.com:443");
/// # Ok::<_, urlblocks::InvalidUrlError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Authority {
    /// User name.
    username: Option<String>,
    /// Password.
    password: Option<String>,
    /// Host.
    host: String,
    /// Port.
    port: Option<u16>,
}

impl Authority {
    /// Parses an authority string.
    ///
    /// # Failures
    ///
    /// Fails when the host is empty or malformed, or the port is not a number
    /// in `0..=65535`. An empty port (`host:`) means no port.
    pub fn parse(authority: &str) -> Result<Self, InvalidUrlError> {
        Self::parse_within(authority, authority)
    }

    /// Parses an authority string which is a part of the given URL.
    ///
    /// A missing host is reported with the whole URL.
    pub(crate) fn parse_within(authority: &str, url: &str) -> Result<Self, InvalidUrlError> {
        let components: AuthorityComponents<'_> = decompose_authority(authority);
        let host = components.host();
        if host.is_empty() {
            return Err(InvalidUrlError::MissingHost {
                input: url.to_owned(),
            });
        }
        let host = checked_host(host.to_owned())?;
        let port = match components.port() {
            None | Some("") => None,
            Some(port) => Some(parse_port(port).ok_or_else(|| {
                InvalidUrlError::InvalidPort {
                    input: authority.to_owned(),
                }
            })?),
        };
        let (username, password) = match components.userinfo() {
            None => (None, None),
            Some(userinfo) => match find_split_hole(userinfo, b':') {
                Some((user, password)) => (
                    Some(percent_decode(user).into_owned()),
                    Some(percent_decode(password).into_owned()),
                ),
                None => (Some(percent_decode(userinfo).into_owned()), None),
            },
        };

        Ok(Self {
            username,
            password,
            host,
            port,
        })
    }

    /// Creates an authority with only a host.
    ///
    /// # Failures
    ///
    /// Fails when the host is empty, or contains a delimiter outside of an
    /// IP literal.
    pub fn from_host(host: impl Into<String>) -> Result<Self, InvalidUrlError> {
        Ok(Self {
            username: None,
            password: None,
            host: checked_host(host.into())?,
            port: None,
        })
    }

    /// Returns the user name.
    #[inline]
    #[must_use]
    pub fn username(&self) -> Option<&str> {
        self.username.as_deref()
    }

    /// Returns the password.
    #[inline]
    #[must_use]
    pub fn password(&self) -> Option<&str> {
        self.password.as_deref()
    }

    /// Returns the host.
    #[inline]
    #[must_use]
    pub fn hostname(&self) -> &str {
        &self.host
    }

    /// Returns the port.
    #[inline]
    #[must_use]
    pub fn port(&self) -> Option<u16> {
        self.port
    }

    /// Returns the user name and the password.
    #[inline]
    #[must_use]
    pub fn auth(&self) -> (Option<&str>, Option<&str>) {
        (self.username(), self.password())
    }

    /// Replaces the user name.
    #[must_use]
    pub fn with_username(&self, username: impl Into<String>) -> Self {
        Self {
            username: Some(username.into()),
            ..self.clone()
        }
    }

    /// Removes the user name, and the password along with it.
    #[must_use]
    pub fn without_username(&self) -> Self {
        self.without_auth()
    }

    /// Replaces the password.
    ///
    /// An empty user name is used if there was none.
    #[must_use]
    pub fn with_password(&self, password: impl Into<String>) -> Self {
        Self {
            username: Some(self.username.clone().unwrap_or_default()),
            password: Some(password.into()),
            ..self.clone()
        }
    }

    /// Removes the password.
    #[must_use]
    pub fn without_password(&self) -> Self {
        Self {
            password: None,
            ..self.clone()
        }
    }

    /// Replaces the user name and the password.
    ///
    /// A `None` password removes the existing one.
    #[must_use]
    pub fn with_auth(&self, username: impl Into<String>, password: Option<&str>) -> Self {
        Self {
            username: Some(username.into()),
            password: password.map(ToOwned::to_owned),
            ..self.clone()
        }
    }

    /// Removes the user name and the password.
    #[must_use]
    pub fn without_auth(&self) -> Self {
        Self {
            username: None,
            password: None,
            ..self.clone()
        }
    }

    /// Replaces the host.
    ///
    /// # Failures
    ///
    /// Fails when the host is empty, or contains a delimiter (`/`, `?`, `#`,
    /// `@`, `:`, `[` or `]`) outside of an IP literal such as `[::1]`.
    ///
    /// ```
    /// use urlblocks::Authority;
    ///
    /// let authority = Authority::parse("example.com")?;
    /// assert_eq!(authority.with_hostname("[::1]")?.to_string(), "[::1]");
    /// assert!(authority.with_hostname("evil.com/y").is_err());
    /// # Ok::<_, urlblocks::InvalidUrlError>(())
    /// ```
    pub fn with_hostname(&self, host: impl Into<String>) -> Result<Self, InvalidUrlError> {
        Ok(Self {
            host: checked_host(host.into())?,
            ..self.clone()
        })
    }

    /// Replaces the port.
    #[must_use]
    pub fn with_port(&self, port: u16) -> Self {
        Self {
            port: Some(port),
            ..self.clone()
        }
    }

    /// Removes the port.
    #[must_use]
    pub fn without_port(&self) -> Self {
        Self {
            port: None,
            ..self.clone()
        }
    }

    /// Returns the dot-separated labels of the host.
    ///
    /// ```
    /// use urlblocks::Authority;
    ///
    /// let authority = Authority::parse("www.example.code.google.com")?;
    /// assert_eq!(authority.domains(), ["www", "example", "code", "google", "com"]);
    /// # Ok::<_, urlblocks::InvalidUrlError>(())
    /// ```
    #[must_use]
    pub fn domains(&self) -> Vec<&str> {
        self.host.split('.').collect()
    }

    /// Returns the leftmost label, if the host has more than two labels.
    #[must_use]
    pub fn subdomain(&self) -> Option<&str> {
        let domains = self.domains();
        if domains.len() > 2 {
            domains.first().copied()
        } else {
            None
        }
    }

    /// Prepends a label to the host.
    ///
    /// # Failures
    ///
    /// Fails when the label contains a delimiter.
    pub fn add_subdomain(&self, subdomain: &str) -> Result<Self, InvalidUrlError> {
        self.with_hostname(format!("{}.{}", subdomain, self.host))
    }

    /// Removes the leftmost label, if the host has more than two labels.
    #[must_use]
    pub fn remove_subdomain(&self) -> Self {
        if self.subdomain().is_none() {
            return self.clone();
        }
        match find_split_hole(&self.host, b'.') {
            Some((_, rest)) => Self {
                host: rest.to_owned(),
                ..self.clone()
            },
            None => self.clone(),
        }
    }

    /// Returns the label at the given level, counted from the right.
    ///
    /// Level `1` is the top domain, see [`DOMAIN_LEVEL_TOP`] and
    /// [`DOMAIN_LEVEL_SECOND`].
    #[must_use]
    pub fn get_domain(&self, level: usize) -> Option<&str> {
        if level == 0 {
            return None;
        }
        let domains = self.domains();
        let index = domains.len().checked_sub(level)?;
        domains.get(index).copied()
    }

    /// Replaces the label at the given level, counted from the right.
    ///
    /// # Failures
    ///
    /// Fails when the host has no label at the level, or the new label
    /// contains a delimiter.
    pub fn with_domain(&self, domain: &str, level: usize) -> Result<Self, InvalidUrlError> {
        let mut domains = self.domains();
        let index = match domains.len().checked_sub(level) {
            Some(index) if level > 0 => index,
            _ => {
                return Err(InvalidUrlError::MissingDomainLevel {
                    host: self.host.clone(),
                    level,
                })
            }
        };
        domains[index] = domain;
        self.with_hostname(domains.join("."))
    }
}

/// Returns the host if it is written back as the same host.
fn checked_host(host: String) -> Result<String, InvalidUrlError> {
    if host.is_empty() {
        return Err(InvalidUrlError::MissingHost { input: host });
    }
    if !is_host(&host) {
        return Err(InvalidUrlError::InvalidHost { input: host });
    }
    Ok(host)
}

/// Parses a decimal port number.
fn parse_port(s: &str) -> Option<u16> {
    if !s.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    s.parse().ok()
}

impl fmt::Display for Authority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.username.is_some() || self.password.is_some() {
            if let Some(username) = &self.username {
                write!(f, "{}", PercentEncoded::from_userinfo(username))?;
            }
            if let Some(password) = &self.password {
                write!(f, ":{}", PercentEncoded::from_userinfo(password))?;
            }
            f.write_str("@")?;
        }
        f.write_str(&self.host)?;
        if let Some(port) = self.port {
            write!(f, ":{}", port)?;
        }
        Ok(())
    }
}

impl FromStr for Authority {
    type Err = InvalidUrlError;

    #[inline]
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl_serde! {
    expecting: "an authority string",
    ty: Authority,
}
