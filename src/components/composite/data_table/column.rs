//! Column Definition
//!
//! Defines table columns with their properties and cell renderers.

use std::rc::Rc;

use gpui::{AnyElement, SharedString};

use super::record::CellValue;

/// Custom cell renderer: field value, record, row index in the visible order
pub type CellRenderer<R> = Rc<dyn Fn(&CellValue, &R, usize) -> AnyElement>;

/// Column definition for the DataTable
pub struct Column<R> {
    /// Column identifier, unique within a table
    pub key: SharedString,
    /// Column header label
    pub title: SharedString,
    /// Field read from each record
    pub data_index: SharedString,
    /// Column width (in pixels, or flexible)
    pub width: ColumnWidth,
    /// Whether the column is sortable
    pub sortable: bool,
    /// Cell renderer function; cells show the plain value without one
    pub render: Option<CellRenderer<R>>,
}

impl<R> Clone for Column<R> {
    fn clone(&self) -> Self {
        Self {
            key: self.key.clone(),
            title: self.title.clone(),
            data_index: self.data_index.clone(),
            width: self.width,
            sortable: self.sortable,
            render: self.render.clone(),
        }
    }
}

/// Column width specification
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ColumnWidth {
    /// Fixed width in pixels
    Fixed(f32),
    /// Flexible width with optional min/max
    Flex { min: Option<f32>, max: Option<f32> },
    /// Percentage of available space
    Percent(f32),
}

impl Default for ColumnWidth {
    fn default() -> Self {
        ColumnWidth::Flex { min: None, max: None }
    }
}

impl<R: 'static> Column<R> {
    /// Create a column whose key is also its data index
    pub fn new(key: impl Into<SharedString>, title: impl Into<SharedString>) -> Self {
        let key = key.into();
        Self {
            data_index: key.clone(),
            key,
            title: title.into(),
            width: ColumnWidth::default(),
            sortable: false,
            render: None,
        }
    }

    /// Set the field read from each record
    pub fn data_index(mut self, data_index: impl Into<SharedString>) -> Self {
        self.data_index = data_index.into();
        self
    }

    /// Set fixed width
    pub fn fixed_width(mut self, width: f32) -> Self {
        self.width = ColumnWidth::Fixed(width);
        self
    }

    /// Set flexible width with optional constraints
    pub fn flex_width(mut self, min: Option<f32>, max: Option<f32>) -> Self {
        self.width = ColumnWidth::Flex { min, max };
        self
    }

    /// Set percentage width
    pub fn percent_width(mut self, percent: f32) -> Self {
        self.width = ColumnWidth::Percent(percent);
        self
    }

    /// Make the column sortable
    pub fn sortable(mut self) -> Self {
        self.sortable = true;
        self
    }

    /// Set the cell renderer
    pub fn render(
        mut self,
        render: impl Fn(&CellValue, &R, usize) -> AnyElement + 'static,
    ) -> Self {
        self.render = Some(Rc::new(render));
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn key_doubles_as_data_index() {
        let col = Column::<serde_json::Value>::new("name", "Name");
        assert_eq!(col.data_index.as_ref(), "name");
        assert!(!col.sortable);
        assert!(col.render.is_none());

        let col = col.data_index("full_name").sortable().fixed_width(120.0);
        assert_eq!(col.key.as_ref(), "name");
        assert_eq!(col.data_index.as_ref(), "full_name");
        assert!(col.sortable);
        assert_eq!(col.width, ColumnWidth::Fixed(120.0));
    }
}
