//! Table Records
//!
//! Rows are read through [`TableRecord::field`], which yields a [`CellValue`]
//! for a column's data index.

use std::cmp::Ordering;
use std::fmt;

use chrono::NaiveDate;
use serde_json::Value;

/// A single field value read from a row
#[derive(Debug, Clone, Default, PartialEq)]
pub enum CellValue {
    #[default]
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    Text(String),
    Date(NaiveDate),
}

impl CellValue {
    pub fn is_null(&self) -> bool {
        matches!(self, CellValue::Null)
    }

    /// Generic `<` / `>` ordering.
    ///
    /// Int and Float compare numerically. Values of different kinds, Null and
    /// NaN compare equal, so a stable sort leaves them where they are.
    pub fn compare(&self, other: &CellValue) -> Ordering {
        use CellValue::*;

        match (self, other) {
            (Bool(a), Bool(b)) => a.cmp(b),
            (Int(a), Int(b)) => a.cmp(b),
            (Int(a), Float(b)) => (*a as f64).partial_cmp(b).unwrap_or(Ordering::Equal),
            (Float(a), Int(b)) => a.partial_cmp(&(*b as f64)).unwrap_or(Ordering::Equal),
            (Float(a), Float(b)) => a.partial_cmp(b).unwrap_or(Ordering::Equal),
            (Text(a), Text(b)) => a.cmp(b),
            (Date(a), Date(b)) => a.cmp(b),
            _ => Ordering::Equal,
        }
    }
}

impl fmt::Display for CellValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CellValue::Null => Ok(()),
            CellValue::Bool(v) => write!(f, "{v}"),
            CellValue::Int(v) => write!(f, "{v}"),
            CellValue::Float(v) => write!(f, "{v}"),
            CellValue::Text(v) => f.write_str(v),
            CellValue::Date(v) => write!(f, "{}", v.format("%Y-%m-%d")),
        }
    }
}

impl From<&str> for CellValue {
    fn from(value: &str) -> Self {
        CellValue::Text(value.to_string())
    }
}

impl From<String> for CellValue {
    fn from(value: String) -> Self {
        CellValue::Text(value)
    }
}

impl From<i64> for CellValue {
    fn from(value: i64) -> Self {
        CellValue::Int(value)
    }
}

impl From<f64> for CellValue {
    fn from(value: f64) -> Self {
        CellValue::Float(value)
    }
}

impl From<bool> for CellValue {
    fn from(value: bool) -> Self {
        CellValue::Bool(value)
    }
}

impl From<NaiveDate> for CellValue {
    fn from(value: NaiveDate) -> Self {
        CellValue::Date(value)
    }
}

impl<T: Into<CellValue>> From<Option<T>> for CellValue {
    fn from(value: Option<T>) -> Self {
        value.map_or(CellValue::Null, Into::into)
    }
}

impl From<&Value> for CellValue {
    fn from(value: &Value) -> Self {
        match value {
            Value::Null => CellValue::Null,
            Value::Bool(b) => CellValue::Bool(*b),
            Value::Number(n) => match n.as_i64() {
                Some(i) => CellValue::Int(i),
                None => n.as_f64().map_or(CellValue::Null, CellValue::Float),
            },
            Value::String(s) => CellValue::Text(s.clone()),
            other => CellValue::Text(other.to_string()),
        }
    }
}

/// A row that can be shown in a data table
pub trait TableRecord: Clone + 'static {
    /// Read the field named by a column's data index
    fn field(&self, name: &str) -> CellValue;
}

impl TableRecord for Value {
    fn field(&self, name: &str) -> CellValue {
        self.get(name).map_or(CellValue::Null, CellValue::from)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn numbers_compare_across_kinds() {
        assert_eq!(CellValue::Int(2).compare(&CellValue::Float(2.5)), Ordering::Less);
        assert_eq!(CellValue::Float(3.0).compare(&CellValue::Int(3)), Ordering::Equal);
    }

    #[test]
    fn mismatched_kinds_are_equal() {
        assert_eq!(CellValue::Null.compare(&CellValue::Int(1)), Ordering::Equal);
        assert_eq!(CellValue::from("a").compare(&CellValue::Int(1)), Ordering::Equal);
        assert_eq!(
            CellValue::Float(f64::NAN).compare(&CellValue::Float(1.0)),
            Ordering::Equal
        );
    }

    #[test]
    fn text_and_dates_order_naturally() {
        assert_eq!(CellValue::from("A").compare(&CellValue::from("B")), Ordering::Less);
        let early = NaiveDate::from_ymd_opt(2023, 1, 15).map(CellValue::Date);
        let late = NaiveDate::from_ymd_opt(2024, 1, 15).map(CellValue::Date);
        assert_eq!(
            CellValue::from(early).compare(&CellValue::from(late)),
            Ordering::Less
        );
    }

    #[test]
    fn json_rows_read_fields() {
        let row = json!({ "id": 1, "name": "Alice", "score": 9.5, "active": true, "note": null });
        assert_eq!(row.field("id"), CellValue::Int(1));
        assert_eq!(row.field("name"), CellValue::from("Alice"));
        assert_eq!(row.field("score"), CellValue::Float(9.5));
        assert_eq!(row.field("active"), CellValue::Bool(true));
        assert!(row.field("note").is_null());
        assert!(row.field("missing").is_null());
    }

    #[test]
    fn display_renders_null_as_empty() {
        assert_eq!(CellValue::Null.to_string(), "");
        assert_eq!(CellValue::Int(42).to_string(), "42");
        let date = NaiveDate::from_ymd_opt(2024, 3, 5).map(CellValue::Date);
        assert_eq!(CellValue::from(date).to_string(), "2024-03-05");
    }
}
