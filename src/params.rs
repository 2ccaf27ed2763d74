use indexmap::IndexMap;
use std::fmt;

/// The joiner used between query parameters.
pub const DEFAULT_JOINER: &str = "&";

/// The value of a single URL parameter.
///
/// A parameter written without `=` (`;debug`, `?debug`) is a flag.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ParamValue {
    /// Present without a value.
    Flag,
    /// Present with a (possibly empty) value.
    Value(String),
}

impl ParamValue {
    /// Returns the value as a string, or `None` for a flag.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            ParamValue::Flag => None,
            ParamValue::Value(value) => Some(value),
        }
    }

    /// Returns `true` if this is a flag parameter.
    pub fn is_flag(&self) -> bool {
        matches!(self, ParamValue::Flag)
    }
}

impl From<&str> for ParamValue {
    fn from(value: &str) -> Self {
        ParamValue::Value(value.to_owned())
    }
}

impl From<String> for ParamValue {
    fn from(value: String) -> Self {
        ParamValue::Value(value)
    }
}

// Flags travel as `true` so that serialized params read like the URL they came from.
#[cfg(feature = "serde")]
mod serde_impl {
    use super::ParamValue;
    use serde::{de, Deserialize, Deserializer, Serialize, Serializer};

    impl Serialize for ParamValue {
        fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
            match self {
                ParamValue::Flag => serializer.serialize_bool(true),
                ParamValue::Value(value) => serializer.serialize_str(value),
            }
        }
    }

    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Repr {
        Flag(bool),
        Value(String),
    }

    impl<'de> Deserialize<'de> for ParamValue {
        fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
            match Repr::deserialize(deserializer)? {
                Repr::Flag(true) => Ok(ParamValue::Flag),
                Repr::Flag(false) => Err(de::Error::custom("a flag parameter can only be `true`")),
                Repr::Value(value) => Ok(ParamValue::Value(value)),
            }
        }
    }
}

/// An ordered set of URL parameters.
///
/// Keys are unique. Inserting an existing key replaces its value but keeps
/// the position it was first inserted at, so rendering is deterministic.
///
/// ```rust
/// use routeurl::{ParamValue, Params};
///
/// let mut params = Params::new();
/// params.insert("page", "2");
/// params.insert_flag("debug");
///
/// assert_eq!(params.get("page"), Some(&ParamValue::from("2")));
/// assert_eq!(params.to_string(), "page=2&debug");
/// ```
#[derive(Default, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Params {
    inner: IndexMap<String, ParamValue>,
}

impl Params {
    /// Creates an empty parameter set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the number of parameters.
    pub fn len(&self) -> usize {
        self.inner.len()
    }

    /// Returns `true` if there are no parameters.
    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    /// Returns the value registered under the given key.
    pub fn get(&self, key: impl AsRef<str>) -> Option<&ParamValue> {
        self.inner.get(key.as_ref())
    }

    /// Returns `true` if the key is present, with or without a value.
    pub fn contains_key(&self, key: impl AsRef<str>) -> bool {
        self.inner.contains_key(key.as_ref())
    }

    /// Inserts a parameter, returning the value it replaced.
    pub fn insert(
        &mut self,
        key: impl Into<String>,
        value: impl Into<ParamValue>,
    ) -> Option<ParamValue> {
        self.inner.insert(key.into(), value.into())
    }

    /// Inserts a flag parameter, returning the value it replaced.
    pub fn insert_flag(&mut self, key: impl Into<String>) -> Option<ParamValue> {
        self.inner.insert(key.into(), ParamValue::Flag)
    }

    /// Returns an iterator over the parameters in insertion order.
    pub fn iter(&self) -> impl ExactSizeIterator<Item = (&str, &ParamValue)> {
        self.inner.iter().map(|(key, value)| (key.as_str(), value))
    }

    /// Renders the parameters joined with `&`.
    pub fn to_query_string(&self) -> String {
        serialize(Some(self), DEFAULT_JOINER)
    }
}

impl fmt::Debug for Params {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}

impl fmt::Display for Params {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_query_string())
    }
}

impl<K: Into<String>, V: Into<ParamValue>> FromIterator<(K, V)> for Params {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut params = Params::new();
        params.extend(iter);
        params
    }
}

impl<K: Into<String>, V: Into<ParamValue>> Extend<(K, V)> for Params {
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (key, value) in iter {
            self.insert(key, value);
        }
    }
}

/// Converts parameters into `key` / `key=value` pairs, in insertion order.
///
/// Missing parameters yield no pairs.
pub fn to_pairs(params: Option<&Params>) -> Vec<String> {
    let Some(params) = params else {
        return Vec::new();
    };

    params
        .iter()
        .map(|(key, value)| match value {
            ParamValue::Flag => key.to_owned(),
            ParamValue::Value(value) => format!("{key}={value}"),
        })
        .collect()
}

/// Renders parameters as pairs separated by `joiner`.
///
/// ```rust
/// use routeurl::{params, Params};
///
/// let mut matrix = Params::new();
/// matrix.insert_flag("a");
/// matrix.insert("b", "2");
///
/// assert_eq!(params::serialize(Some(&matrix), ";"), "a;b=2");
/// assert_eq!(params::serialize(None, "&"), "");
/// ```
pub fn serialize(params: Option<&Params>, joiner: &str) -> String {
    to_pairs(params).join(joiner)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pairs() {
        let params: Params = [("a", ParamValue::Flag), ("b", "2".into()), ("c", "".into())]
            .into_iter()
            .collect();

        assert_eq!(to_pairs(Some(&params)), vec!["a", "b=2", "c="]);
        assert!(to_pairs(None).is_empty());
        assert!(to_pairs(Some(&Params::new())).is_empty());
    }

    #[test]
    fn joiners() {
        let params: Params = [("a", ParamValue::Flag), ("b", "2".into())]
            .into_iter()
            .collect();

        assert_eq!(serialize(Some(&params), ";"), "a;b=2");
        assert_eq!(serialize(Some(&params), DEFAULT_JOINER), "a&b=2");
        assert_eq!(serialize(Some(&Params::new()), "&"), "");
        assert_eq!(params.to_string(), "a&b=2");
    }

    #[test]
    fn overwrite_keeps_position() {
        let mut params = Params::new();
        params.insert("x", "1");
        params.insert("y", "2");

        assert_eq!(params.insert_flag("x"), Some(ParamValue::from("1")));
        assert_eq!(params.len(), 2);
        assert_eq!(params.to_query_string(), "x&y=2");
    }

    #[test]
    fn lookups() {
        let mut params = Params::new();
        params.insert_flag("debug");
        params.insert("page", "3");

        assert!(params.contains_key("debug"));
        assert!(params.get("debug").unwrap().is_flag());
        assert_eq!(params.get("page").and_then(ParamValue::as_str), Some("3"));
        assert!(params.get("missing").is_none());
        assert_eq!(format!("{:?}", params), r#"{"debug": Flag, "page": Value("3")}"#);
    }
}
