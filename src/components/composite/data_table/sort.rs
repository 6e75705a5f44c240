//! Sorting
//!
//! Three-state header sort cycle and the stable sorted view over the data.

use gpui::SharedString;

use super::column::Column;
use super::record::TableRecord;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    Ascending,
    Descending,
}

/// Active sort of a table
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum SortState {
    #[default]
    Unsorted,
    Sorted {
        column: SharedString,
        direction: SortDirection,
    },
}

/// Value of the `aria-sort` attribute for a header
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AriaSort {
    Ascending,
    Descending,
    None,
}

impl SortState {
    pub fn ascending(column: impl Into<SharedString>) -> Self {
        SortState::Sorted {
            column: column.into(),
            direction: SortDirection::Ascending,
        }
    }

    pub fn descending(column: impl Into<SharedString>) -> Self {
        SortState::Sorted {
            column: column.into(),
            direction: SortDirection::Descending,
        }
    }

    /// State after clicking a header.
    ///
    /// The same column cycles ascending, descending, unsorted. Another column
    /// starts over at ascending. Non-sortable columns change nothing.
    pub fn next(&self, column: &str, sortable: bool) -> SortState {
        if !sortable {
            return self.clone();
        }
        match self {
            SortState::Sorted {
                column: active,
                direction,
            } if active.as_ref() == column => match direction {
                SortDirection::Ascending => SortState::descending(active.clone()),
                SortDirection::Descending => SortState::Unsorted,
            },
            _ => SortState::ascending(SharedString::from(column.to_string())),
        }
    }

    /// Direction applied to `column`, if it is the active one
    pub fn direction_for(&self, column: &str) -> Option<SortDirection> {
        match self {
            SortState::Sorted {
                column: active,
                direction,
            } if active.as_ref() == column => Some(*direction),
            _ => None,
        }
    }

    pub fn aria_sort(&self, column: &str) -> AriaSort {
        match self.direction_for(column) {
            Some(SortDirection::Ascending) => AriaSort::Ascending,
            Some(SortDirection::Descending) => AriaSort::Descending,
            None => AriaSort::None,
        }
    }
}

/// Positions of `data` in display order.
///
/// The sort is stable and never touches `data`. An unknown column leaves the
/// original order.
pub fn sorted_indices<R: TableRecord>(
    data: &[R],
    columns: &[Column<R>],
    state: &SortState,
) -> Vec<usize> {
    let mut indices: Vec<usize> = (0..data.len()).collect();

    let SortState::Sorted { column, direction } = state else {
        return indices;
    };
    let Some(column) = columns.iter().find(|c| c.key == *column) else {
        return indices;
    };

    let values: Vec<_> = data.iter().map(|r| r.field(&column.data_index)).collect();
    indices.sort_by(|&a, &b| {
        let ord = values[a].compare(&values[b]);
        match direction {
            SortDirection::Ascending => ord,
            SortDirection::Descending => ord.reverse(),
        }
    });

    indices
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{json, Value};

    fn columns() -> Vec<Column<Value>> {
        vec![
            Column::new("name", "Name").sortable(),
            Column::new("age", "Age").sortable(),
            Column::new("email", "Email"),
        ]
    }

    fn names(data: &[Value], indices: &[usize]) -> Vec<String> {
        indices
            .iter()
            .map(|&i| data[i]["name"].as_str().unwrap_or_default().to_string())
            .collect()
    }

    #[test]
    fn click_cycles_three_states() {
        let s0 = SortState::Unsorted;
        let s1 = s0.next("name", true);
        let s2 = s1.next("name", true);
        let s3 = s2.next("name", true);
        let s4 = s3.next("name", true);

        assert_eq!(s1, SortState::ascending("name"));
        assert_eq!(s2, SortState::descending("name"));
        assert_eq!(s3, SortState::Unsorted);
        assert_eq!(s4, s1);
    }

    #[test]
    fn other_column_restarts_ascending() {
        let state = SortState::descending("name");
        assert_eq!(state.next("age", true), SortState::ascending("age"));
        let state = SortState::ascending("name");
        assert_eq!(state.next("age", true), SortState::ascending("age"));
    }

    #[test]
    fn non_sortable_column_is_ignored() {
        let state = SortState::ascending("name");
        assert_eq!(state.next("email", false), state);
        assert_eq!(SortState::Unsorted.next("email", false), SortState::Unsorted);
    }

    #[test]
    fn aria_sort_follows_active_column() {
        let state = SortState::descending("name");
        assert_eq!(state.aria_sort("name"), AriaSort::Descending);
        assert_eq!(state.aria_sort("age"), AriaSort::None);
        assert_eq!(SortState::Unsorted.aria_sort("name"), AriaSort::None);
    }

    #[test]
    fn header_click_scenario() {
        let data = vec![json!({ "id": 1, "name": "B" }), json!({ "id": 2, "name": "A" })];
        let cols = vec![Column::new("name", "Name").sortable()];

        let mut state = SortState::Unsorted;
        state = state.next("name", true);
        assert_eq!(names(&data, &sorted_indices(&data, &cols, &state)), ["A", "B"]);
        state = state.next("name", true);
        assert_eq!(names(&data, &sorted_indices(&data, &cols, &state)), ["B", "A"]);
        state = state.next("name", true);
        assert_eq!(names(&data, &sorted_indices(&data, &cols, &state)), ["B", "A"]);
        assert_eq!(state, SortState::Unsorted);
    }

    #[test]
    fn equal_values_keep_relative_order() {
        let data = vec![
            json!({ "name": "x1", "age": 30 }),
            json!({ "name": "x2", "age": 20 }),
            json!({ "name": "x3", "age": 30 }),
            json!({ "name": "x4", "age": 20 }),
        ];
        let asc = sorted_indices(&data, &columns(), &SortState::ascending("age"));
        assert_eq!(asc, [1, 3, 0, 2]);
        let desc = sorted_indices(&data, &columns(), &SortState::descending("age"));
        assert_eq!(desc, [0, 2, 1, 3]);
    }

    #[test]
    fn sorting_sorted_data_is_idempotent() {
        let data = vec![
            json!({ "name": "C", "age": 3 }),
            json!({ "name": "A", "age": 1 }),
            json!({ "name": "B", "age": 2 }),
        ];
        let state = SortState::ascending("name");
        let once = sorted_indices(&data, &columns(), &state);
        let resorted: Vec<Value> = once.iter().map(|&i| data[i].clone()).collect();
        let twice = sorted_indices(&resorted, &columns(), &state);
        assert_eq!(twice, [0, 1, 2]);
        assert_eq!(names(&resorted, &twice), names(&data, &once));
    }

    #[test]
    fn unknown_column_keeps_original_order() {
        let data = vec![json!({ "name": "B" }), json!({ "name": "A" })];
        let order = sorted_indices(&data, &columns(), &SortState::ascending("missing"));
        assert_eq!(order, [0, 1]);
    }

    #[test]
    fn sorting_does_not_touch_data() {
        let data = vec![json!({ "name": "B" }), json!({ "name": "A" })];
        let before = data.clone();
        let _ = sorted_indices(&data, &columns(), &SortState::ascending("name"));
        assert_eq!(data, before);
    }
}
