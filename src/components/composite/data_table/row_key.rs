//! Row Identity

use std::fmt;
use std::rc::Rc;

use super::record::{CellValue, TableRecord};
use crate::constants::DEFAULT_ROW_KEY_FIELD;

/// Identity of a row, independent of the record value
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum RowKey {
    Number(i64),
    Text(String),
    /// Position in the data array, used when a row has no usable key
    Position(usize),
}

impl RowKey {
    /// Key for a field value, `None` when the value cannot identify a row
    pub fn from_cell(value: &CellValue) -> Option<Self> {
        match value {
            CellValue::Null => None,
            CellValue::Int(v) => Some(RowKey::Number(*v)),
            CellValue::Text(v) if v.is_empty() => None,
            CellValue::Text(v) => Some(RowKey::Text(v.clone())),
            other => Some(RowKey::Text(other.to_string())),
        }
    }
}

impl fmt::Display for RowKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RowKey::Number(v) => write!(f, "{v}"),
            RowKey::Text(v) => f.write_str(v),
            RowKey::Position(v) => write!(f, "#{v}"),
        }
    }
}

impl From<i64> for RowKey {
    fn from(value: i64) -> Self {
        RowKey::Number(value)
    }
}

impl From<&str> for RowKey {
    fn from(value: &str) -> Self {
        RowKey::Text(value.to_string())
    }
}

/// Derivation function for row keys
pub type DeriveKey<R> = Rc<dyn Fn(&R) -> Option<RowKey>>;

/// How a row's key is read
pub enum RowKeyAccessor<R> {
    /// Read a named field
    Field(SharedString),
    /// Compute the key from the record
    Derive(DeriveKey<R>),
}

impl<R> Clone for RowKeyAccessor<R> {
    fn clone(&self) -> Self {
        match self {
            RowKeyAccessor::Field(name) => RowKeyAccessor::Field(name.clone()),
            RowKeyAccessor::Derive(f) => RowKeyAccessor::Derive(f.clone()),
        }
    }
}

impl<R> Default for RowKeyAccessor<R> {
    fn default() -> Self {
        RowKeyAccessor::Field(SharedString::new_static(DEFAULT_ROW_KEY_FIELD))
    }
}

impl<R> fmt::Debug for RowKeyAccessor<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RowKeyAccessor::Field(name) => f.debug_tuple("Field").field(name).finish(),
            RowKeyAccessor::Derive(_) => f.write_str("Derive(..)"),
        }
    }
}

impl<R: TableRecord> RowKeyAccessor<R> {
    /// Read keys from a named field
    pub fn field(name: impl Into<SharedString>) -> Self {
        RowKeyAccessor::Field(name.into())
    }

    /// Derive keys with a function
    pub fn derive(f: impl Fn(&R) -> Option<RowKey> + 'static) -> Self {
        RowKeyAccessor::Derive(Rc::new(f))
    }

    /// Key of the record at `index`, falling back to the position
    pub fn resolve(&self, record: &R, index: usize) -> RowKey {
        let key = match self {
            RowKeyAccessor::Field(name) => RowKey::from_cell(&record.field(name)),
            RowKeyAccessor::Derive(f) => f(record),
        };
        key.unwrap_or(RowKey::Position(index))
    }
}
