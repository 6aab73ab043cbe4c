//! Columnar data tables for plot specifications.
//!
//! A [`DataFrame`] is carried verbatim inside the specification: no statistics
//! are computed here, and column lengths are not reconciled. Both are the
//! rendering backend's job.

/// A single cell value in a data frame.
#[derive(Debug, Clone, PartialEq)]
pub enum DataValue {
    /// A floating-point value.
    Number(f64),
    /// An integer value.
    Int(i64),
    /// A text value.
    Text(String),
    /// A boolean value.
    Bool(bool),
    /// A missing value.
    Null,
}

impl DataValue {
    /// Get as f64, or None if not numeric.
    #[must_use]
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            DataValue::Number(n) => Some(*n),
            DataValue::Int(i) => Some(*i as f64),
            _ => None,
        }
    }

    /// Get as string slice, or None if not text.
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            DataValue::Text(s) => Some(s.as_str()),
            _ => None,
        }
    }
}

impl From<f64> for DataValue {
    fn from(v: f64) -> Self {
        DataValue::Number(v)
    }
}

impl From<i64> for DataValue {
    fn from(v: i64) -> Self {
        DataValue::Int(v)
    }
}

impl From<i32> for DataValue {
    fn from(v: i32) -> Self {
        DataValue::Int(i64::from(v))
    }
}

impl From<bool> for DataValue {
    fn from(v: bool) -> Self {
        DataValue::Bool(v)
    }
}

impl From<&str> for DataValue {
    fn from(s: &str) -> Self {
        DataValue::Text(s.to_string())
    }
}

impl From<String> for DataValue {
    fn from(s: String) -> Self {
        DataValue::Text(s)
    }
}

/// An ordered columnar data table.
///
/// Columns keep insertion order so serialized specifications are
/// reproducible. Heterogeneous value types are permitted within a column and
/// unequal column lengths are not rejected at construction.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DataFrame {
    columns: Vec<(String, Vec<DataValue>)>,
}

impl DataFrame {
    /// Create a new empty data frame.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a column of arbitrary values, replacing any column of the same name.
    pub fn add_column(&mut self, name: &str, values: Vec<DataValue>) {
        if let Some(col) = self.columns.iter_mut().find(|(n, _)| n == name) {
            col.1 = values;
        } else {
            self.columns.push((name.to_string(), values));
        }
    }

    /// Add a floating-point column.
    pub fn add_column_f64(&mut self, name: &str, data: &[f64]) {
        self.add_column(name, data.iter().map(|&v| DataValue::Number(v)).collect());
    }

    /// Add an integer column.
    pub fn add_column_int(&mut self, name: &str, data: &[i64]) {
        self.add_column(name, data.iter().map(|&v| DataValue::Int(v)).collect());
    }

    /// Add a text column.
    pub fn add_column_str(&mut self, name: &str, data: &[&str]) {
        self.add_column(
            name,
            data.iter().map(|&s| DataValue::Text(s.to_string())).collect(),
        );
    }

    /// Get a column by name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&[DataValue]> {
        self.columns
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_slice())
    }

    /// Number of rows (the longest column).
    #[must_use]
    pub fn nrow(&self) -> usize {
        self.columns.iter().map(|(_, v)| v.len()).max().unwrap_or(0)
    }

    /// Number of columns.
    #[must_use]
    pub fn ncol(&self) -> usize {
        self.columns.len()
    }

    /// Check if a column exists.
    #[must_use]
    pub fn has_column(&self, name: &str) -> bool {
        self.columns.iter().any(|(n, _)| n == name)
    }

    /// Column names in insertion order.
    #[must_use]
    pub fn columns(&self) -> Vec<&str> {
        self.columns.iter().map(|(n, _)| n.as_str()).collect()
    }

    /// Iterate columns in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[DataValue])> {
        self.columns.iter().map(|(n, v)| (n.as_str(), v.as_slice()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dataframe_columns_ordered() {
        let mut df = DataFrame::new();
        df.add_column_f64("val", &[1.0, 2.0]);
        df.add_column_str("cat", &["a", "b"]);
        df.add_column_int("n", &[1, 2]);
        assert_eq!(df.columns(), vec!["val", "cat", "n"]);
    }

    #[test]
    fn test_dataframe_replace_column() {
        let mut df = DataFrame::new();
        df.add_column_f64("x", &[1.0]);
        df.add_column_f64("x", &[2.0, 3.0]);
        assert_eq!(df.ncol(), 1);
        assert_eq!(df.nrow(), 2);
    }

    #[test]
    fn test_dataframe_get() {
        let mut df = DataFrame::new();
        df.add_column_str("cat", &["A", "B"]);
        let col = df.get("cat").unwrap();
        assert_eq!(col[0].as_str(), Some("A"));
        assert!(df.get("missing").is_none());
    }

    #[test]
    fn test_dataframe_unequal_lengths_allowed() {
        let mut df = DataFrame::new();
        df.add_column_f64("x", &[1.0, 2.0, 3.0]);
        df.add_column_f64("y", &[1.0]);
        assert_eq!(df.nrow(), 3);
        assert_eq!(df.ncol(), 2);
    }

    #[test]
    fn test_dataframe_empty() {
        let df = DataFrame::new();
        assert_eq!(df.nrow(), 0);
        assert_eq!(df.ncol(), 0);
        assert!(!df.has_column("anything"));
    }

    #[test]
    fn test_data_value_as_f64() {
        assert_eq!(DataValue::Number(2.5).as_f64(), Some(2.5));
        assert_eq!(DataValue::Int(3).as_f64(), Some(3.0));
        assert_eq!(DataValue::Text("x".into()).as_f64(), None);
        assert_eq!(DataValue::Null.as_f64(), None);
    }

    #[test]
    fn test_data_value_conversions() {
        let v: DataValue = 42i32.into();
        assert_eq!(v, DataValue::Int(42));
        let v: DataValue = "hello".into();
        assert_eq!(v.as_str(), Some("hello"));
        let v: DataValue = true.into();
        assert_eq!(v, DataValue::Bool(true));
    }

    #[test]
    fn test_dataframe_heterogeneous_column() {
        let mut df = DataFrame::new();
        df.add_column(
            "mixed",
            vec![DataValue::Number(1.0), DataValue::Text("two".into()), DataValue::Null],
        );
        assert_eq!(df.get("mixed").unwrap().len(), 3);
    }

    #[test]
    fn test_dataframe_debug_clone() {
        let mut df = DataFrame::new();
        df.add_column_f64("x", &[1.0]);
        let df2 = df.clone();
        assert_eq!(df, df2);
        let _ = format!("{df2:?}");
    }
}
