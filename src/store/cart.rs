//! Per-user cart store
//!
//! Maps user id to an ordered list of worksheet ids. Duplicates are
//! allowed; removal deletes a single occurrence.

use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard};

/// Shared in-memory cart store
#[derive(Clone, Default)]
pub struct CartStore {
    inner: Arc<Mutex<HashMap<i64, Vec<i64>>>>,
}

impl CartStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn locked(&self) -> MutexGuard<'_, HashMap<i64, Vec<i64>>> {
        self.inner.lock().unwrap_or_else(|e| e.into_inner())
    }

    /// Add a worksheet to a user's cart
    pub fn add(&self, user_id: i64, worksheet_id: i64) {
        self.locked().entry(user_id).or_default().push(worksheet_id);
    }

    /// Worksheet ids currently in a user's cart
    pub fn items(&self, user_id: i64) -> Vec<i64> {
        self.locked().get(&user_id).cloned().unwrap_or_default()
    }

    /// Remove one occurrence of a worksheet from a user's cart
    ///
    /// Returns false if the worksheet was not present.
    pub fn remove(&self, user_id: i64, worksheet_id: i64) -> bool {
        let mut map = self.locked();
        let Some(items) = map.get_mut(&user_id) else {
            return false;
        };
        match items.iter().position(|&id| id == worksheet_id) {
            Some(pos) => {
                items.remove(pos);
                true
            }
            None => false,
        }
    }

    /// Empty a user's cart (checkout)
    pub fn clear(&self, user_id: i64) {
        self.locked().insert(user_id, Vec::new());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_and_items() {
        let store = CartStore::new();
        store.add(1, 10);
        store.add(1, 11);
        store.add(2, 10);
        assert_eq!(store.items(1), vec![10, 11]);
        assert_eq!(store.items(2), vec![10]);
        assert!(store.items(3).is_empty());
    }

    #[test]
    fn test_remove_single_occurrence() {
        let store = CartStore::new();
        store.add(1, 10);
        store.add(1, 10);
        assert!(store.remove(1, 10));
        assert_eq!(store.items(1), vec![10]);
        assert!(store.remove(1, 10));
        assert!(!store.remove(1, 10));
    }

    #[test]
    fn test_remove_from_empty_cart() {
        let store = CartStore::new();
        assert!(!store.remove(5, 1));
    }

    #[test]
    fn test_clear() {
        let store = CartStore::new();
        store.add(1, 10);
        store.add(1, 11);
        store.clear(1);
        assert!(store.items(1).is_empty());
    }
}
