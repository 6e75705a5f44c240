//! Table Model
//!
//! Framework-free state behind [`super::DataTable`]: the data, columns, sort
//! state, sorted view and selection. Every mutation that changes the
//! selection returns `true` so the view can report it.

use std::collections::HashMap;

use ahash::RandomState;
use gpui::{ElementId, SharedString};
use tracing::{debug, warn};

use super::column::Column;
use super::record::TableRecord;
use super::row_key::{RowKey, RowKeyAccessor};
use super::selection::{HeaderCheckState, Selection};
use super::sort::{sorted_indices, AriaSort, SortState};
use crate::constants::{DEFAULT_EMPTY_MESSAGE, EMPTY_STATE_TITLE, SKELETON_ROW_COUNT};

/// What the table body shows
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TableBody {
    /// Placeholder rows while loading
    Skeleton { rows: usize, cells: usize },
    /// Panel shown instead of the table when there is no data
    Empty {
        title: SharedString,
        message: SharedString,
    },
    /// The sorted rows
    Rows,
}

/// A row in display order
#[derive(Debug)]
pub struct VisibleRow<'a, R> {
    /// Position in the displayed order
    pub index: usize,
    pub key: &'a RowKey,
    pub record: &'a R,
    pub selected: bool,
}

impl<R> VisibleRow<'_, R> {
    /// Element id for something rendered in this row.
    ///
    /// Includes the display position, so rows sharing a key stay distinct.
    pub fn element_id(&self, prefix: &str) -> ElementId {
        ElementId::Name(SharedString::from(format!("{prefix}-{}-{}", self.index, self.key)))
    }
}

pub struct TableModel<R: TableRecord> {
    data: Vec<R>,
    columns: Vec<Column<R>>,
    row_key: RowKeyAccessor<R>,
    /// Key of each row, parallel to `data`
    keys: Vec<RowKey>,
    /// First position of each key in `data`
    positions: HashMap<RowKey, usize, RandomState>,
    sort: SortState,
    /// Positions of `data` in display order
    view: Vec<usize>,
    selection: Selection<R>,
    loading: bool,
    selectable: bool,
    dark_mode: bool,
    empty_message: SharedString,
}

impl<R: TableRecord> Default for TableModel<R> {
    fn default() -> Self {
        Self {
            data: Vec::new(),
            columns: Vec::new(),
            row_key: RowKeyAccessor::default(),
            keys: Vec::new(),
            positions: HashMap::with_hasher(RandomState::new()),
            sort: SortState::Unsorted,
            view: Vec::new(),
            selection: Selection::default(),
            loading: false,
            selectable: false,
            dark_mode: false,
            empty_message: SharedString::new_static(DEFAULT_EMPTY_MESSAGE),
        }
    }
}

impl<R: TableRecord> TableModel<R> {
    pub fn new(columns: Vec<Column<R>>, data: Vec<R>) -> Self {
        let mut model = Self::default();
        model.set_columns(columns);
        model.set_data(data);
        model
    }

    // ==================== Getters ====================

    pub fn data(&self) -> &[R] {
        &self.data
    }

    pub fn columns(&self) -> &[Column<R>] {
        &self.columns
    }

    pub fn sort_state(&self) -> &SortState {
        &self.sort
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn is_selectable(&self) -> bool {
        self.selectable
    }

    pub fn is_dark_mode(&self) -> bool {
        self.dark_mode
    }

    pub fn empty_message(&self) -> &SharedString {
        &self.empty_message
    }

    pub fn is_selected(&self, key: &RowKey) -> bool {
        self.selection.contains(key)
    }

    /// Selected records in the order they were selected
    pub fn selected_rows(&self) -> Vec<R> {
        self.selection.records()
    }

    pub fn selected_count(&self) -> usize {
        self.selection.len()
    }

    /// Rows in display order
    pub fn visible_rows(&self) -> impl Iterator<Item = VisibleRow<'_, R>> + '_ {
        self.view.iter().enumerate().map(move |(index, &pos)| {
            let key = &self.keys[pos];
            VisibleRow {
                index,
                key,
                record: &self.data[pos],
                selected: self.selection.contains(key),
            }
        })
    }

    /// Row keys in display order
    pub fn visible_keys(&self) -> impl Iterator<Item = &RowKey> + '_ {
        self.view.iter().map(move |&pos| &self.keys[pos])
    }

    pub fn header_check_state(&self) -> HeaderCheckState {
        self.selection.header_state(self.visible_keys())
    }

    pub fn aria_sort(&self, column: &str) -> AriaSort {
        self.sort.aria_sort(column)
    }

    pub fn body(&self) -> TableBody {
        if self.loading {
            TableBody::Skeleton {
                rows: SKELETON_ROW_COUNT,
                cells: self.columns.len() + usize::from(self.selectable),
            }
        } else if self.data.is_empty() {
            TableBody::Empty {
                title: SharedString::new_static(EMPTY_STATE_TITLE),
                message: self.empty_message.clone(),
            }
        } else {
            TableBody::Rows
        }
    }

    /// Number of column header cells rendered
    pub fn header_cell_count(&self) -> usize {
        match self.body() {
            TableBody::Rows => self.columns.len(),
            TableBody::Skeleton { .. } | TableBody::Empty { .. } => 0,
        }
    }

    // ==================== Data ====================

    /// Replace the rows.
    ///
    /// Selected rows that are gone are dropped, survivors take the new record.
    /// Returns whether the selection changed.
    pub fn set_data(&mut self, data: Vec<R>) -> bool {
        self.data = data;
        self.rebuild_keys();
        self.refresh_view();
        self.reconcile_selection()
    }

    /// Replace the columns. Duplicate keys after the first are dropped.
    pub fn set_columns(&mut self, columns: Vec<Column<R>>) {
        let mut unique: Vec<Column<R>> = Vec::with_capacity(columns.len());
        for column in columns {
            if unique.iter().any(|c| c.key == column.key) {
                warn!(column = %column.key, "Duplicate column key ignored");
                continue;
            }
            unique.push(column);
        }
        self.columns = unique;

        let sorted_column_gone = match &self.sort {
            SortState::Sorted { column, .. } => !self.columns.iter().any(|c| c.key == *column),
            SortState::Unsorted => false,
        };
        if sorted_column_gone {
            self.sort = SortState::Unsorted;
        }
        self.refresh_view();
    }

    /// Change how row keys are read. Returns whether the selection changed.
    pub fn set_row_key(&mut self, row_key: RowKeyAccessor<R>) -> bool {
        self.row_key = row_key;
        self.rebuild_keys();
        self.refresh_view();
        self.reconcile_selection()
    }

    pub fn set_loading(&mut self, loading: bool) {
        self.loading = loading;
    }

    pub fn set_selectable(&mut self, selectable: bool) {
        self.selectable = selectable;
    }

    pub fn set_dark_mode(&mut self, dark_mode: bool) {
        self.dark_mode = dark_mode;
    }

    pub fn set_empty_message(&mut self, message: impl Into<SharedString>) {
        self.empty_message = message.into();
    }

    // ==================== Sorting ====================

    /// Handle a header click. Returns whether the sort changed.
    pub fn click_header(&mut self, column_key: &str) -> bool {
        let Some(column) = self.columns.iter().find(|c| c.key.as_ref() == column_key) else {
            return false;
        };
        let next = self.sort.next(column_key, column.sortable);
        if next == self.sort {
            return false;
        }
        debug!(column = column_key, sort = ?next, "Sort changed");
        self.sort = next;
        self.refresh_view();
        true
    }

    // ==================== Selection ====================

    /// Flip one row. Returns whether the selection changed.
    pub fn toggle_row(&mut self, key: &RowKey) -> bool {
        let selected = !self.selection.contains(key);
        self.set_row_selected(key, selected)
    }

    pub fn set_row_selected(&mut self, key: &RowKey, selected: bool) -> bool {
        if !self.selectable {
            return false;
        }
        let Some(&pos) = self.positions.get(key) else {
            return false;
        };
        let changed = self.selection.set(key.clone(), &self.data[pos], selected);
        if changed {
            debug!(row = %key, selected, total = self.selection.len(), "Row selection changed");
        }
        changed
    }

    /// Select every visible row, or clear when all are already selected.
    ///
    /// Returns whether the selection changed.
    pub fn toggle_all(&mut self) -> bool {
        let select = self.header_check_state() != HeaderCheckState::Checked;
        self.set_all_selected(select)
    }

    pub fn set_all_selected(&mut self, selected: bool) -> bool {
        if !self.selectable {
            return false;
        }
        let changed = if selected {
            if self.view.is_empty() {
                return false;
            }
            let before: Vec<RowKey> = self.selection.keys().cloned().collect();
            let rows = self
                .view
                .iter()
                .map(|&pos| (self.keys[pos].clone(), &self.data[pos]));
            self.selection.replace(rows);
            !self.selection.keys().eq(before.iter())
        } else {
            self.selection.clear()
        };
        if changed {
            debug!(selected, total = self.selection.len(), "Select all");
        }
        changed
    }

    // ==================== Internals ====================

    fn rebuild_keys(&mut self) {
        self.keys = self
            .data
            .iter()
            .enumerate()
            .map(|(i, record)| self.row_key.resolve(record, i))
            .collect();

        self.positions.clear();
        for (pos, key) in self.keys.iter().enumerate() {
            self.positions.entry(key.clone()).or_insert(pos);
        }
    }

    fn refresh_view(&mut self) {
        self.view = sorted_indices(&self.data, &self.columns, &self.sort);
    }

    fn reconcile_selection(&mut self) -> bool {
        let positions = &self.positions;
        let data = &self.data;
        let changed = self
            .selection
            .reconcile(|key| positions.get(key).map(|&pos| data[pos].clone()));
        if changed {
            debug!(total = self.selection.len(), "Selection reconciled with new data");
        }
        changed
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{json, Value};

    fn users() -> Vec<Value> {
        vec![
            json!({ "id": 1, "name": "Charlie", "age": 35 }),
            json!({ "id": 2, "name": "Alice", "age": 28 }),
            json!({ "id": 3, "name": "Bob", "age": 42 }),
        ]
    }

    fn columns() -> Vec<Column<Value>> {
        vec![
            Column::new("name", "Name").sortable(),
            Column::new("age", "Age").sortable(),
            Column::new("email", "Email"),
        ]
    }

    fn selectable_model() -> TableModel<Value> {
        let mut model = TableModel::new(columns(), users());
        model.set_selectable(true);
        model
    }

    fn visible_names(model: &TableModel<Value>) -> Vec<String> {
        model
            .visible_rows()
            .map(|row| row.record["name"].as_str().unwrap_or_default().to_string())
            .collect()
    }

    fn selected_ids(model: &TableModel<Value>) -> Vec<i64> {
        model
            .selected_rows()
            .iter()
            .filter_map(|r| r["id"].as_i64())
            .collect()
    }

    #[test]
    fn header_clicks_reorder_view_not_data() {
        let mut model = TableModel::new(columns(), users());
        assert!(model.click_header("name"));
        assert_eq!(visible_names(&model), ["Alice", "Bob", "Charlie"]);
        assert!(model.click_header("name"));
        assert_eq!(visible_names(&model), ["Charlie", "Bob", "Alice"]);
        assert!(model.click_header("name"));
        assert_eq!(visible_names(&model), ["Charlie", "Alice", "Bob"]);
        assert_eq!(model.data(), users().as_slice());
    }

    #[test]
    fn non_sortable_header_click_is_ignored() {
        let mut model = TableModel::new(columns(), users());
        assert!(!model.click_header("email"));
        assert!(!model.click_header("nope"));
        assert_eq!(model.sort_state(), &SortState::Unsorted);
    }

    #[test]
    fn switching_columns_restarts_ascending() {
        let mut model = TableModel::new(columns(), users());
        model.click_header("name");
        model.click_header("name");
        model.click_header("age");
        assert_eq!(model.aria_sort("age"), AriaSort::Ascending);
        assert_eq!(model.aria_sort("name"), AriaSort::None);
        assert_eq!(visible_names(&model), ["Alice", "Charlie", "Bob"]);
    }

    #[test]
    fn select_all_then_deselect_one() {
        let mut model = selectable_model();
        assert!(model.toggle_all());
        assert_eq!(model.header_check_state(), HeaderCheckState::Checked);
        assert_eq!(model.selected_count(), 3);

        assert!(model.toggle_row(&RowKey::Number(2)));
        assert_eq!(selected_ids(&model), [1, 3]);
        assert!(!model.is_selected(&RowKey::Number(2)));
        assert_eq!(model.header_check_state(), HeaderCheckState::Indeterminate);
    }

    #[test]
    fn membership_is_by_key_not_record() {
        let mut model = selectable_model();
        model.toggle_row(&RowKey::Number(1));
        // Same id, different content
        model.set_data(vec![
            json!({ "id": 1, "name": "Charles", "age": 36 }),
            json!({ "id": 2, "name": "Alice", "age": 28 }),
        ]);
        assert!(model.is_selected(&RowKey::Number(1)));
        assert_eq!(model.selected_rows()[0]["name"], "Charles");
    }

    #[test]
    fn select_all_follows_sorted_order() {
        let mut model = selectable_model();
        model.click_header("name");
        model.toggle_all();
        assert_eq!(selected_ids(&model), [2, 3, 1]);
    }

    #[test]
    fn selection_order_follows_clicks() {
        let mut model = selectable_model();
        model.toggle_row(&RowKey::Number(3));
        model.toggle_row(&RowKey::Number(1));
        assert_eq!(selected_ids(&model), [3, 1]);
    }

    #[test]
    fn indeterminate_header_click_selects_everything() {
        let mut model = selectable_model();
        model.toggle_row(&RowKey::Number(1));
        assert!(model.toggle_all());
        assert_eq!(model.header_check_state(), HeaderCheckState::Checked);
        assert!(model.toggle_all());
        assert_eq!(model.header_check_state(), HeaderCheckState::Unchecked);
        assert!(model.selected_rows().is_empty());
    }

    #[test]
    fn select_all_on_empty_table_does_nothing() {
        let mut model = TableModel::<Value>::new(columns(), Vec::new());
        model.set_selectable(true);
        assert!(!model.toggle_all());
        assert!(model.selected_rows().is_empty());
        assert_eq!(model.header_check_state(), HeaderCheckState::Unchecked);
    }

    #[test]
    fn selection_needs_selectable() {
        let mut model = TableModel::new(columns(), users());
        assert!(!model.toggle_row(&RowKey::Number(1)));
        assert!(!model.toggle_all());
    }

    #[test]
    fn unknown_key_is_ignored() {
        let mut model = selectable_model();
        assert!(!model.toggle_row(&RowKey::Number(99)));
    }

    #[test]
    fn new_data_prunes_vanished_rows() {
        let mut model = selectable_model();
        model.toggle_all();
        let changed = model.set_data(vec![json!({ "id": 3, "name": "Bob", "age": 43 })]);
        assert!(changed);
        assert_eq!(selected_ids(&model), [3]);
        assert_eq!(model.header_check_state(), HeaderCheckState::Checked);
    }

    #[test]
    fn new_data_without_removals_keeps_selection() {
        let mut model = selectable_model();
        model.toggle_row(&RowKey::Number(2));
        let mut more = users();
        more.push(json!({ "id": 4, "name": "Dana", "age": 22 }));
        assert!(!model.set_data(more));
        assert_eq!(selected_ids(&model), [2]);
    }

    #[test]
    fn keyless_rows_use_position() {
        let mut model = TableModel::new(
            columns(),
            vec![json!({ "name": "X" }), json!({ "name": "Y" })],
        );
        model.set_selectable(true);
        assert!(model.toggle_row(&RowKey::Position(1)));
        assert!(!model.is_selected(&RowKey::Position(0)));
        assert_eq!(model.selected_rows()[0]["name"], "Y");
    }

    #[test]
    fn custom_row_key() {
        let mut model = selectable_model();
        model.set_row_key(RowKeyAccessor::field("name"));
        assert!(model.toggle_row(&RowKey::from("Bob")));
        assert_eq!(selected_ids(&model), [3]);
    }

    #[test]
    fn rows_sharing_a_key_get_distinct_element_ids() {
        let data = vec![
            json!({ "id": 1, "name": "Alice" }),
            json!({ "id": 1, "name": "Alias" }),
        ];
        let model = TableModel::new(columns(), data);
        let ids: Vec<ElementId> = model
            .visible_rows()
            .map(|row| row.element_id("row"))
            .collect();
        assert_eq!(ids.len(), 2);
        assert_ne!(ids[0], ids[1]);
        assert_eq!(ids[0], ElementId::Name("row-0-1".into()));
    }

    #[test]
    fn loading_shows_skeleton() {
        let mut model = selectable_model();
        model.set_loading(true);
        assert_eq!(model.body(), TableBody::Skeleton { rows: 5, cells: 4 });
        model.set_selectable(false);
        assert_eq!(model.body(), TableBody::Skeleton { rows: 5, cells: 3 });
    }

    #[test]
    fn loading_wins_over_empty() {
        let mut model = TableModel::<Value>::new(columns(), Vec::new());
        model.set_loading(true);
        assert!(matches!(model.body(), TableBody::Skeleton { .. }));
    }

    #[test]
    fn empty_data_shows_panel_without_headers() {
        let mut model = TableModel::<Value>::new(columns(), Vec::new());
        model.set_empty_message("No users found");
        assert_eq!(
            model.body(),
            TableBody::Empty {
                title: "No Data".into(),
                message: "No users found".into(),
            }
        );
        assert_eq!(model.header_cell_count(), 0);
    }

    #[test]
    fn default_empty_message() {
        let model = TableModel::<Value>::default();
        assert_eq!(model.empty_message().as_ref(), "No data available");
        assert_eq!(TableModel::new(columns(), users()).header_cell_count(), 3);
    }

    #[test]
    fn duplicate_column_keys_are_dropped() {
        let model = TableModel::<Value>::new(
            vec![Column::new("name", "Name"), Column::new("name", "Again")],
            users(),
        );
        assert_eq!(model.columns().len(), 1);
        assert_eq!(model.columns()[0].title.as_ref(), "Name");
    }

    #[test]
    fn removing_sorted_column_resets_sort() {
        let mut model = TableModel::new(columns(), users());
        model.click_header("age");
        model.set_columns(vec![Column::new("name", "Name").sortable()]);
        assert_eq!(model.sort_state(), &SortState::Unsorted);
        assert_eq!(visible_names(&model), ["Charlie", "Alice", "Bob"]);
    }
}
