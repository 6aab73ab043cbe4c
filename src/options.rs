//! Generic ordered option maps.
//!
//! Every typed bundle in the DSL is eventually lowered into [`Options`]: an
//! ordered, null-permitting key/value map that the rendering backend consumes.

/// A value stored in an [`Options`] map.
///
/// Aesthetic values distinguish a reference to a data column from a literal
/// value, so the render boundary never has to guess what a string means.
#[derive(Debug, Clone, PartialEq)]
pub enum OptionValue {
    /// Reference to a data column by name.
    Column(String),
    /// A literal text value (e.g. a color constant like `"red"`).
    Text(String),
    /// A literal floating-point value.
    Number(f64),
    /// A literal integer value.
    Int(i64),
    /// A literal boolean value.
    Bool(bool),
    /// A list of values (e.g. a scale range).
    List(Vec<OptionValue>),
    /// A nested option map.
    Map(Options),
}

impl From<&str> for OptionValue {
    fn from(s: &str) -> Self {
        OptionValue::Text(s.to_string())
    }
}

impl From<String> for OptionValue {
    fn from(s: String) -> Self {
        OptionValue::Text(s)
    }
}

impl From<f64> for OptionValue {
    fn from(v: f64) -> Self {
        OptionValue::Number(v)
    }
}

impl From<f32> for OptionValue {
    fn from(v: f32) -> Self {
        OptionValue::Number(f64::from(v))
    }
}

impl From<i64> for OptionValue {
    fn from(v: i64) -> Self {
        OptionValue::Int(v)
    }
}

impl From<i32> for OptionValue {
    fn from(v: i32) -> Self {
        OptionValue::Int(i64::from(v))
    }
}

impl From<u32> for OptionValue {
    fn from(v: u32) -> Self {
        OptionValue::Int(i64::from(v))
    }
}

impl From<usize> for OptionValue {
    fn from(v: usize) -> Self {
        OptionValue::Int(v as i64)
    }
}

impl From<bool> for OptionValue {
    fn from(v: bool) -> Self {
        OptionValue::Bool(v)
    }
}

impl From<(f64, f64)> for OptionValue {
    fn from((lo, hi): (f64, f64)) -> Self {
        OptionValue::List(vec![OptionValue::Number(lo), OptionValue::Number(hi)])
    }
}

impl<T: Into<OptionValue>> From<Vec<T>> for OptionValue {
    fn from(values: Vec<T>) -> Self {
        OptionValue::List(values.into_iter().map(Into::into).collect())
    }
}

/// An ordered mapping from string keys to optional values.
///
/// Keys keep their insertion order so serialization is reproducible. Entries
/// whose value is `None` are *declared but unset*: sealing a typed aesthetic
/// bundle emits one entry per declared field, whether or not the caller set
/// it. There is no mutating API after construction.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Options {
    entries: Vec<(String, Option<OptionValue>)>,
}

impl Options {
    /// Create an empty option map.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build an option map from key/value pairs, preserving pair order.
    #[must_use]
    pub fn of<K, I>(entries: I) -> Self
    where
        K: Into<String>,
        I: IntoIterator<Item = (K, Option<OptionValue>)>,
    {
        Self {
            entries: entries.into_iter().map(|(k, v)| (k.into(), v)).collect(),
        }
    }

    /// Get the value set for a key, if the key is declared *and* set.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&OptionValue> {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .and_then(|(_, v)| v.as_ref())
    }

    /// Whether a key is declared, set or not.
    #[must_use]
    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.iter().any(|(k, _)| k == key)
    }

    /// Declared keys in insertion order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(k, _)| k.as_str())
    }

    /// Iterate entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, Option<&OptionValue>)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_ref()))
    }

    /// Number of declared keys.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether no keys are declared.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
