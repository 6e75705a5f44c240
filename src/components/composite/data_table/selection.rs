//! Row Selection
//!
//! Selected records keyed by row key, kept in the order they were selected.

use ahash::RandomState;
use hashlink::LinkedHashMap;

use super::row_key::RowKey;

/// State of the select-all checkbox
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeaderCheckState {
    Unchecked,
    Indeterminate,
    Checked,
}

/// Ordered set of selected rows
#[derive(Debug, Clone)]
pub struct Selection<R> {
    rows: LinkedHashMap<RowKey, R, RandomState>,
}

impl<R> Default for Selection<R> {
    fn default() -> Self {
        Self {
            rows: LinkedHashMap::with_hasher(RandomState::new()),
        }
    }
}

impl<R: Clone> Selection<R> {
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn contains(&self, key: &RowKey) -> bool {
        self.rows.contains_key(key)
    }

    /// Add or remove a row. Returns whether the set changed.
    pub fn set(&mut self, key: RowKey, record: &R, selected: bool) -> bool {
        if selected {
            if self.rows.contains_key(&key) {
                return false;
            }
            self.rows.insert(key, record.clone());
            true
        } else {
            self.rows.remove(&key).is_some()
        }
    }

    /// Replace the whole set with `rows`, in the given order
    pub fn replace<'a>(&mut self, rows: impl IntoIterator<Item = (RowKey, &'a R)>)
    where
        R: 'a,
    {
        self.rows.clear();
        for (key, record) in rows {
            self.rows.insert(key, record.clone());
        }
    }

    /// Returns whether anything was removed
    pub fn clear(&mut self) -> bool {
        let changed = !self.rows.is_empty();
        self.rows.clear();
        changed
    }

    /// Keep only rows whose key still resolves, swapping in the fresh record.
    ///
    /// Returns whether any row was dropped.
    pub fn reconcile(&mut self, lookup: impl Fn(&RowKey) -> Option<R>) -> bool {
        let before = self.rows.len();
        let previous =
            std::mem::replace(&mut self.rows, LinkedHashMap::with_hasher(RandomState::new()));
        for (key, _) in previous {
            if let Some(record) = lookup(&key) {
                self.rows.insert(key, record);
            }
        }
        self.rows.len() != before
    }

    /// Selected records in selection order
    pub fn records(&self) -> Vec<R> {
        self.rows.values().cloned().collect()
    }

    pub fn keys(&self) -> impl Iterator<Item = &RowKey> {
        self.rows.keys()
    }

    /// Header checkbox state for the keys currently visible
    pub fn header_state<'a>(&self, visible: impl IntoIterator<Item = &'a RowKey>) -> HeaderCheckState {
        let mut total = 0;
        let mut selected = 0;
        for key in visible {
            total += 1;
            if self.rows.contains_key(key) {
                selected += 1;
            }
        }

        if total > 0 && selected == total {
            HeaderCheckState::Checked
        } else if selected > 0 {
            HeaderCheckState::Indeterminate
        } else {
            HeaderCheckState::Unchecked
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(n: i64) -> RowKey {
        RowKey::Number(n)
    }

    #[test]
    fn keeps_selection_order() {
        let mut sel = Selection::default();
        assert!(sel.set(key(3), &"c", true));
        assert!(sel.set(key(1), &"a", true));
        assert!(sel.set(key(2), &"b", true));
        assert_eq!(sel.records(), ["c", "a", "b"]);
    }

    #[test]
    fn set_reports_changes() {
        let mut sel = Selection::default();
        assert!(sel.set(key(1), &"a", true));
        assert!(!sel.set(key(1), &"a", true));
        assert!(sel.set(key(1), &"a", false));
        assert!(!sel.set(key(1), &"a", false));
        assert!(sel.is_empty());
    }

    #[test]
    fn header_state() {
        let mut sel = Selection::default();
        let visible = [key(1), key(2)];
        assert_eq!(sel.header_state(&visible), HeaderCheckState::Unchecked);
        sel.set(key(1), &"a", true);
        assert_eq!(sel.header_state(&visible), HeaderCheckState::Indeterminate);
        sel.set(key(2), &"b", true);
        assert_eq!(sel.header_state(&visible), HeaderCheckState::Checked);
    }

    #[test]
    fn empty_visible_set_is_unchecked() {
        let sel: Selection<&str> = Selection::default();
        assert_eq!(sel.header_state(&[]), HeaderCheckState::Unchecked);
    }

    #[test]
    fn reconcile_drops_missing_and_refreshes_records() {
        let mut sel = Selection::default();
        sel.set(key(1), &"old-a".to_string(), true);
        sel.set(key(2), &"old-b".to_string(), true);

        let changed = sel.reconcile(|k| (*k == key(2)).then(|| "new-b".to_string()));
        assert!(changed);
        assert_eq!(sel.records(), ["new-b"]);
        assert!(!sel.contains(&key(1)));
    }
}
