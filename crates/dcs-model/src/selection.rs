//! Ordered column selection.
//!
//! The selection is the list of normalized keys the cleaned file will
//! contain, in the exact order the user arranged them. It behaves as an
//! ordered set: insertion order is significant, duplicates are impossible.

use thiserror::Error;

/// Rejected selection operation.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SelectionError {
    /// A reorder index does not address an existing entry.
    #[error("index {index} out of bounds for selection of {len} column(s)")]
    IndexOutOfBounds {
        /// The offending index.
        index: usize,
        /// Selection length at the time of the call.
        len: usize,
    },
}

/// Ordered, deduplicated set of normalized column keys.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selection {
    keys: Vec<String>,
}

impl Selection {
    /// Empty selection.
    pub fn new() -> Self {
        Self::default()
    }

    /// Selected keys in export order.
    pub fn keys(&self) -> &[String] {
        &self.keys
    }

    /// Number of selected columns.
    pub fn len(&self) -> usize {
        self.keys.len()
    }

    /// True when nothing is selected.
    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    /// True when the key is currently selected.
    pub fn contains(&self, key: &str) -> bool {
        self.keys.iter().any(|k| k == key)
    }

    /// Append a key at the end of the order.
    ///
    /// Returns `false` (and leaves the selection untouched) when the key is
    /// already present.
    pub fn add(&mut self, key: impl Into<String>) -> bool {
        let key = key.into();
        if self.contains(&key) {
            return false;
        }
        self.keys.push(key);
        true
    }

    /// Remove a key wherever it sits in the order.
    ///
    /// Returns `false` when the key was not selected.
    pub fn remove(&mut self, key: &str) -> bool {
        let before = self.keys.len();
        self.keys.retain(|k| k != key);
        self.keys.len() != before
    }

    /// Remove the key if present, append it otherwise.
    ///
    /// Returns `true` when the key is selected after the call.
    pub fn toggle(&mut self, key: impl Into<String>) -> bool {
        let key = key.into();
        if self.remove(&key) {
            false
        } else {
            self.keys.push(key);
            true
        }
    }

    /// Move the entry at `from` so that it ends up at position `to`,
    /// preserving the relative order of every other entry.
    ///
    /// # Errors
    ///
    /// Returns [`SelectionError::IndexOutOfBounds`] without touching the
    /// selection when either index does not address an existing entry.
    pub fn reorder(&mut self, from: usize, to: usize) -> Result<(), SelectionError> {
        let len = self.keys.len();
        for index in [from, to] {
            if index >= len {
                return Err(SelectionError::IndexOutOfBounds { index, len });
            }
        }
        let key = self.keys.remove(from);
        self.keys.insert(to, key);
        Ok(())
    }

    /// Drop every selected key.
    pub fn clear(&mut self) {
        self.keys.clear();
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    fn selection_of(keys: &[&str]) -> Selection {
        let mut selection = Selection::new();
        for key in keys {
            assert!(selection.add(*key));
        }
        selection
    }

    #[test]
    fn add_is_idempotent() {
        let mut selection = Selection::new();
        assert!(selection.add("plu"));
        assert!(!selection.add("plu"));
        assert_eq!(selection.keys(), ["plu"]);
    }

    #[test]
    fn add_appends_at_the_end() {
        let selection = selection_of(&["plu", "color", "contenido"]);
        assert_eq!(selection.keys(), ["plu", "color", "contenido"]);
    }

    #[test]
    fn remove_missing_key_is_a_no_op() {
        let mut selection = selection_of(&["plu"]);
        assert!(!selection.remove("color"));
        assert_eq!(selection.keys(), ["plu"]);
    }

    #[test]
    fn toggle_roundtrip() {
        let mut selection = Selection::new();
        assert!(selection.toggle("plu"));
        assert!(selection.contains("plu"));
        assert!(!selection.toggle("plu"));
        assert!(selection.is_empty());
    }

    #[test]
    fn reorder_moves_entry_and_keeps_the_rest() {
        let mut selection = selection_of(&["a", "b", "c", "d"]);
        selection.reorder(3, 0).unwrap();
        assert_eq!(selection.keys(), ["d", "a", "b", "c"]);

        selection.reorder(0, 2).unwrap();
        assert_eq!(selection.keys(), ["a", "b", "d", "c"]);
    }

    #[test]
    fn reorder_rejects_out_of_bounds_without_state_change() {
        let mut selection = selection_of(&["a", "b"]);
        let err = selection.reorder(0, 2).unwrap_err();
        assert_eq!(err, SelectionError::IndexOutOfBounds { index: 2, len: 2 });
        assert_eq!(selection.keys(), ["a", "b"]);

        let err = selection.reorder(5, 0).unwrap_err();
        assert_eq!(err, SelectionError::IndexOutOfBounds { index: 5, len: 2 });
        assert_eq!(selection.keys(), ["a", "b"]);
    }

    proptest! {
        /// Reordering never changes which keys are selected, only their order.
        #[test]
        fn reorder_preserves_set_and_length(
            len in 1usize..8,
            from in 0usize..8,
            to in 0usize..8,
        ) {
            prop_assume!(from < len && to < len);

            let keys: Vec<String> = (0..len).map(|i| format!("col_{i}")).collect();
            let mut selection = Selection::new();
            for key in &keys {
                selection.add(key.clone());
            }

            selection.reorder(from, to).unwrap();

            prop_assert_eq!(selection.len(), len);
            for key in &keys {
                prop_assert!(selection.contains(key));
            }
        }

        /// No sequence of adds and toggles can introduce a duplicate.
        #[test]
        fn no_duplicates_ever(ops in proptest::collection::vec((0usize..5, proptest::bool::ANY), 0..32)) {
            let mut selection = Selection::new();
            for (slot, use_toggle) in ops {
                let key = format!("col_{slot}");
                if use_toggle {
                    selection.toggle(key);
                } else {
                    selection.add(key);
                }
            }

            let mut seen = std::collections::HashSet::new();
            for key in selection.keys() {
                prop_assert!(seen.insert(key.clone()), "duplicate key {}", key);
            }
        }
    }
}
