//! DataTable Component
//!
//! Generic table with client-side sorting, row selection, a loading skeleton
//! and an empty state.

pub mod column;
pub mod data_table;
pub mod model;
pub mod record;
pub mod row_key;
pub mod selection;
pub mod sort;

pub use column::{CellRenderer, Column, ColumnWidth};
pub use data_table::{DataTable, RowSelectHandler};
pub use model::{TableBody, TableModel, VisibleRow};
pub use record::{CellValue, TableRecord};
pub use row_key::{RowKey, RowKeyAccessor};
pub use selection::{HeaderCheckState, Selection};
pub use sort::{sorted_indices, AriaSort, SortDirection, SortState};
