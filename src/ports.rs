//! Default ports of registered schemes.

/// Known schemes and their default ports.
///
/// Schemes are lowercase.
pub const DEFAULT_PORTS: &[(&str, u16)] = &[
    ("ftp", 21),
    ("ssh", 22),
    ("sftp", 22),
    ("telnet", 23),
    ("smtp", 25),
    ("gopher", 70),
    ("http", 80),
    ("ws", 80),
    ("pop", 110),
    ("nntp", 119),
    ("imap", 143),
    ("snmp", 161),
    ("ldap", 389),
    ("https", 443),
    ("wss", 443),
    ("rtsp", 554),
    ("ldaps", 636),
    ("imaps", 993),
    ("pop3s", 995),
    ("rsync", 873),
    ("mysql", 3306),
    ("postgres", 5432),
    ("postgresql", 5432),
    ("redis", 6379),
    ("git", 9418),
    ("mongodb", 27017),
];

/// Returns the default port of the given scheme, if registered.
///
/// The scheme is compared case-insensitively.
///
/// ```
/// use urlblocks::ports::default_port;
///
/// assert_eq!(default_port("http"), Some(80));
/// assert_eq!(default_port("HTTPS"), Some(443));
/// assert_eq!(default_port("made-up"), None);
/// ```
#[must_use]
pub fn default_port(scheme: &str) -> Option<u16> {
    DEFAULT_PORTS
        .iter()
        .find(|(known, _)| known.eq_ignore_ascii_case(scheme))
        .map(|&(_, port)| port)
}
