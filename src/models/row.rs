use std::borrow::Cow;
use std::fmt::Display;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// A table row: column key -> cell, in column order.
pub type Row = IndexMap<String, Cell>;

/// A single table value, either text or a number.
///
/// `Null` is an explicit empty value (JSON `null`), sorted like a missing one.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Cell {
    Null,
    Number(f64),
    Text(String),
}

impl Cell {
    /// The text form of the cell, numbers are rendered without a trailing `.0`
    pub fn as_text(&self) -> Cow<'_, str> {
        match self {
            Cell::Null => Cow::Borrowed(""),
            Cell::Text(s) => Cow::Borrowed(s.as_str()),
            Cell::Number(n) => Cow::Owned(format_number(*n)),
        }
    }

    #[inline]
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Cell::Number(n) => Some(*n),
            Cell::Null | Cell::Text(_) => None,
        }
    }

    #[inline]
    pub fn is_text(&self) -> bool {
        matches!(self, Cell::Text(_))
    }

    #[inline]
    pub fn is_null(&self) -> bool {
        matches!(self, Cell::Null)
    }
}

impl Display for Cell {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.as_text())
    }
}

impl From<&str> for Cell {
    fn from(value: &str) -> Self {
        Cell::Text(value.to_owned())
    }
}

impl From<String> for Cell {
    fn from(value: String) -> Self {
        Cell::Text(value)
    }
}

impl From<f64> for Cell {
    fn from(value: f64) -> Self {
        Cell::Number(value)
    }
}

impl From<i32> for Cell {
    fn from(value: i32) -> Self {
        Cell::Number(value.into())
    }
}

impl From<i64> for Cell {
    fn from(value: i64) -> Self {
        Cell::Number(value as f64)
    }
}

fn format_number(n: f64) -> String {
    // integral values print like integers: 30 rather than 30.0
    if n.is_finite() && n.fract() == 0.0 && n.abs() < 1e15 {
        format!("{}", n as i64)
    } else {
        format!("{n}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_as_text() {
        assert_eq!(Cell::from(30).as_text(), "30");
        assert_eq!(Cell::from(-2.5).as_text(), "-2.5");
        assert_eq!(Cell::from("Bob").as_text(), "Bob");
        assert_eq!(Cell::Number(f64::INFINITY).to_string(), "inf");
    }

    #[test]
    fn test_deserialize_row() {
        let row: Row = serde_json::from_str(r#"{"name":"Bob","age":30,"score":1.5}"#).unwrap();
        assert_eq!(row.keys().collect::<Vec<_>>(), vec!["name", "age", "score"]);
        assert_eq!(row["name"], Cell::Text("Bob".into()));
        assert_eq!(row["age"], Cell::Number(30.0));
        assert_eq!(row["score"].as_number(), Some(1.5));
        assert!(row["name"].is_text());
    }

    #[test]
    fn test_deserialize_null() {
        let rows: Vec<Row> =
            serde_json::from_str(r#"[{"name":"Bob","age":30},{"name":"amy","age":null}]"#).unwrap();
        assert_eq!(rows[1]["age"], Cell::Null);
        assert!(rows[1]["age"].is_null());
        assert_eq!(rows[1]["age"].as_number(), None);
        assert_eq!(serde_json::to_string(&rows[1]).unwrap(), r#"{"name":"amy","age":null}"#);
    }

    #[test]
    fn test_deserialize_rejects_other_types() {
        let res = serde_json::from_str::<Row>(r#"{"active":true}"#);
        assert!(res.is_err());
    }

    #[test]
    fn test_serialize_row() {
        let mut row = Row::new();
        row.insert("name".into(), "amy".into());
        row.insert("age".into(), 25.into());
        assert_eq!(serde_json::to_string(&row).unwrap(), r#"{"name":"amy","age":25.0}"#);
    }
}
