//! Query string parameter algebra.

use std::collections::BTreeMap;
use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

use crate::percent_encode::PercentEncoded;

/// A query string, as an ordered list of name/value pairs.
///
/// The same name may appear more than once. The pair list is the only
/// state; [`dict`][`Self::dict`] and [`multi_dict`][`Self::multi_dict`] are
/// computed from it on demand.
///
/// Names and values are held decoded, and encoded when written out. A query
/// without any pair is written as the empty string.
///
/// Every `add_*`, `set_*` and `del_*` method returns a new value; the
/// receiver is never modified.
///
/// # Examples
///
/// ```
/// use urlblocks::QueryString;
///
/// let query = QueryString::parse("spam=eggs&spam=ham&foo=bar");
/// assert_eq!(query.get("spam"), Some("eggs"));
/// assert_eq!(query.get_all("spam"), ["eggs", "ham"]);
///
/// let query = query.set_param("spam", "spam").del_param("foo");
/// assert_eq!(query.to_string(), "spam=spam");
/// ```
#[derive(Debug, Default, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct QueryString {
    /// Decoded pairs, in order.
    pairs: Vec<(String, String)>,
}

impl QueryString {
    /// Creates an empty query.
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses an encoded query string (without the leading `?`).
    ///
    /// Pairs are separated by `&`, and empty pieces are skipped. A piece
    /// without `=` has an empty value. `+` is decoded as a space.
    ///
    /// ```
    /// use urlblocks::QueryString;
    ///
    /// let query = QueryString::parse("a=1&&b&c=x+y%21");
    /// assert_eq!(query.list(), [
    ///     ("a".to_owned(), "1".to_owned()),
    ///     ("b".to_owned(), "".to_owned()),
    ///     ("c".to_owned(), "x y!".to_owned()),
    /// ]);
    /// ```
    #[must_use]
    pub fn parse(query: &str) -> Self {
        let pairs = form_urlencoded::parse(query.as_bytes())
            .map(|(name, value)| (name.into_owned(), value.into_owned()))
            .collect();
        Self { pairs }
    }

    /// Creates a query from decoded pairs.
    #[must_use]
    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            pairs: pairs
                .into_iter()
                .map(|(name, value)| (name.into(), value.into()))
                .collect(),
        }
    }

    /// Returns the pairs in order.
    #[inline]
    #[must_use]
    pub fn list(&self) -> &[(String, String)] {
        &self.pairs
    }

    /// Returns an iterator over the pairs in order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.pairs
            .iter()
            .map(|(name, value)| (name.as_str(), value.as_str()))
    }

    /// Returns the number of pairs.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    /// Returns true if there are no pairs.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    /// Returns the first value for the name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&str> {
        self.iter().find(|(n, _)| *n == name).map(|(_, v)| v)
    }

    /// Returns all values for the name, in order.
    #[must_use]
    pub fn get_all(&self, name: &str) -> Vec<&str> {
        self.iter()
            .filter(|(n, _)| *n == name)
            .map(|(_, v)| v)
            .collect()
    }

    /// Returns true if a pair with the name exists.
    #[must_use]
    pub fn contains_key(&self, name: &str) -> bool {
        self.iter().any(|(n, _)| n == name)
    }

    /// Returns a map from each name to its first value.
    ///
    /// ```
    /// use urlblocks::QueryString;
    ///
    /// let qs = QueryString::parse("a=b&a=c&d=e");
    /// let dict = qs.dict();
    /// assert_eq!(dict.get("a"), Some(&"b"));
    /// assert_eq!(dict.get("d"), Some(&"e"));
    /// ```
    #[must_use]
    pub fn dict(&self) -> BTreeMap<&str, &str> {
        let mut dict = BTreeMap::new();
        for (name, value) in self.iter() {
            dict.entry(name).or_insert(value);
        }
        dict
    }

    /// Returns a map from each name to all of its values, in order.
    ///
    /// ```
    /// use urlblocks::QueryString;
    ///
    /// let qs = QueryString::parse("a=b&d=e&a=c");
    /// let multi = qs.multi_dict();
    /// assert_eq!(multi["a"], ["b", "c"]);
    /// assert_eq!(multi["d"], ["e"]);
    /// ```
    #[must_use]
    pub fn multi_dict(&self) -> BTreeMap<&str, Vec<&str>> {
        let mut multi: BTreeMap<&str, Vec<&str>> = BTreeMap::new();
        for (name, value) in self.iter() {
            multi.entry(name).or_default().push(value);
        }
        multi
    }

    /// Appends a pair, keeping any existing pair with the same name.
    #[must_use]
    pub fn add_param(&self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.add_params([(name, value)])
    }

    /// Appends pairs in the iteration order of `params`.
    ///
    /// ```
    /// use std::collections::BTreeMap;
    /// use urlblocks::QueryString;
    ///
    /// let params: BTreeMap<_, _> = [("spam", "ham"), ("foo", "bar")].into_iter().collect();
    /// let query = QueryString::parse("spam=eggs").add_params(params);
    /// assert_eq!(query.to_string(), "spam=eggs&foo=bar&spam=ham");
    /// ```
    #[must_use]
    pub fn add_params<I, K, V>(&self, params: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let mut pairs = self.pairs.clone();
        pairs.extend(
            params
                .into_iter()
                .map(|(name, value)| (name.into(), value.into())),
        );
        Self { pairs }
    }

    /// Removes every pair with the name, then appends the new pair.
    ///
    /// ```
    /// use urlblocks::QueryString;
    ///
    /// let query = QueryString::parse("a=b&c=d&a=e").set_param("a", "z");
    /// assert_eq!(query.to_string(), "c=d&a=z");
    /// ```
    #[must_use]
    pub fn set_param(&self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.set_params([(name, value)])
    }

    /// Removes every pair whose name appears in `params`, then appends `params`.
    ///
    /// All removals happen before any pair is appended. If a name appears
    /// more than once in `params`, its last value is used, at the position of
    /// its first appearance.
    ///
    /// ```
    /// use urlblocks::QueryString;
    ///
    /// let query = QueryString::parse("a=b&c=d").set_params([("a", "z"), ("d", "e")]);
    /// assert_eq!(query.to_string(), "c=d&a=z&d=e");
    /// ```
    #[must_use]
    pub fn set_params<I, K, V>(&self, params: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let mut new_pairs: Vec<(String, String)> = Vec::new();
        for (name, value) in params {
            let (name, value) = (name.into(), value.into());
            match new_pairs.iter_mut().find(|(n, _)| *n == name) {
                Some(pair) => pair.1 = value,
                None => new_pairs.push((name, value)),
            }
        }

        let mut pairs: Vec<(String, String)> = self
            .pairs
            .iter()
            .filter(|(name, _)| new_pairs.iter().all(|(n, _)| n != name))
            .cloned()
            .collect();
        pairs.extend(new_pairs);
        Self { pairs }
    }

    /// Removes every pair with the name.
    #[must_use]
    pub fn del_param(&self, name: &str) -> Self {
        self.del_params([name])
    }

    /// Removes every pair whose name is in `names`.
    ///
    /// ```
    /// use urlblocks::QueryString;
    ///
    /// let query = QueryString::parse("a=b&c=d&d=e").del_params(["c", "d"]);
    /// assert_eq!(query.to_string(), "a=b");
    /// ```
    #[must_use]
    pub fn del_params<I, K>(&self, names: I) -> Self
    where
        I: IntoIterator<Item = K>,
        K: AsRef<str>,
    {
        let names: Vec<K> = names.into_iter().collect();
        let pairs = self
            .pairs
            .iter()
            .filter(|(name, _)| names.iter().all(|n| n.as_ref() != name))
            .cloned()
            .collect();
        Self { pairs }
    }
}

impl fmt::Display for QueryString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, (name, value)) in self.pairs.iter().enumerate() {
            if i > 0 {
                f.write_str("&")?;
            }
            write!(
                f,
                "{}={}",
                PercentEncoded::from_query_component(name),
                PercentEncoded::from_query_component(value)
            )?;
        }
        Ok(())
    }
}

impl From<&str> for QueryString {
    #[inline]
    fn from(s: &str) -> Self {
        Self::parse(s)
    }
}

impl From<String> for QueryString {
    #[inline]
    fn from(s: String) -> Self {
        Self::parse(&s)
    }
}

impl FromStr for QueryString {
    type Err = Infallible;

    #[inline]
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::parse(s))
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for QueryString {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self::from_pairs(iter)
    }
}

impl_serde! {
    expecting: "a query string",
    ty: QueryString,
}
