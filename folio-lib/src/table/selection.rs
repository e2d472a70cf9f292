//! Key-based row selection.
//!
//! Selection is tracked by row key so it survives reordering, sorting and
//! paging.

use std::collections::HashSet;
use std::hash::Hash;

/// Checked state of the "select all on this page" box.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageSelection {
    /// No row on the page is selected (or the page is empty).
    None,
    /// Some, but not all, rows on the page are selected.
    Some,
    /// Every row on the page is selected.
    All,
}

/// Set of selected row keys.
#[derive(Debug, Clone)]
pub struct Selection<K: Clone + Eq + Hash> {
    selected: HashSet<K>,
}

impl<K: Clone + Eq + Hash> Default for Selection<K> {
    fn default() -> Self {
        Self {
            selected: HashSet::new(),
        }
    }
}

impl<K: Clone + Eq + Hash> Selection<K> {
    /// Create an empty selection.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set membership for a key. Returns true if selection changed.
    pub fn set(&mut self, key: K, selected: bool) -> bool {
        if selected {
            self.selected.insert(key)
        } else {
            self.selected.remove(&key)
        }
    }

    /// Set membership for every key. Returns the number of keys that changed.
    pub fn set_all<'a>(&mut self, keys: impl IntoIterator<Item = &'a K>, selected: bool) -> usize
    where
        K: 'a,
    {
        keys.into_iter()
            .filter(|key| self.set((*key).clone(), selected))
            .count()
    }

    /// Check if a key is selected.
    pub fn is_selected(&self, key: &K) -> bool {
        self.selected.contains(key)
    }

    /// Classify how many of `keys` are selected.
    pub fn coverage<'a>(&self, keys: impl IntoIterator<Item = &'a K>) -> PageSelection
    where
        K: 'a,
    {
        let mut total = 0;
        let mut selected = 0;
        for key in keys {
            total += 1;
            if self.selected.contains(key) {
                selected += 1;
            }
        }
        match selected {
            0 => PageSelection::None,
            n if n == total => PageSelection::All,
            _ => PageSelection::Some,
        }
    }

    /// Get the number of selected keys.
    pub fn len(&self) -> usize {
        self.selected.len()
    }

    /// Check if nothing is selected.
    pub fn is_empty(&self) -> bool {
        self.selected.is_empty()
    }

    /// Clear all selection.
    /// Returns the keys that were deselected.
    pub fn clear(&mut self) -> Vec<K> {
        self.selected.drain().collect()
    }

    /// Get all selected keys (unordered).
    pub fn keys(&self) -> impl Iterator<Item = &K> {
        self.selected.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_reports_changes() {
        let mut selection = Selection::new();
        assert!(selection.set(1, true));
        assert!(!selection.set(1, true));
        assert!(selection.set(1, false));
        assert!(!selection.set(1, false));
    }

    #[test]
    fn test_set_all_counts_changes() {
        let mut selection = Selection::new();
        selection.set(2, true);
        assert_eq!(selection.set_all(&[1, 2, 3], true), 2);
        assert_eq!(selection.len(), 3);
        assert_eq!(selection.set_all(&[1, 4], false), 1);
        assert_eq!(selection.len(), 2);
    }

    #[test]
    fn test_coverage() {
        let mut selection = Selection::new();
        assert_eq!(selection.coverage(&[1, 2]), PageSelection::None);
        selection.set(1, true);
        assert_eq!(selection.coverage(&[1, 2]), PageSelection::Some);
        selection.set(2, true);
        assert_eq!(selection.coverage(&[1, 2]), PageSelection::All);
        assert_eq!(selection.coverage(&[]), PageSelection::None);
    }

    #[test]
    fn test_clear() {
        let mut selection = Selection::new();
        selection.set_all(&[1, 2], true);
        let mut removed = selection.clear();
        removed.sort();
        assert_eq!(removed, vec![1, 2]);
        assert!(selection.is_empty());
    }
}
