//! Worksheet catalog store

use chrono::Utc;
use std::collections::BTreeMap;
use std::sync::{Arc, Mutex, MutexGuard};

use crate::models::{NewWorksheet, Worksheet};

struct CatalogMap {
    // BTreeMap keeps listing order stable by id
    by_id: BTreeMap<i64, Worksheet>,
    next_id: i64,
}

/// Shared in-memory worksheet catalog
#[derive(Clone)]
pub struct WorksheetStore {
    inner: Arc<Mutex<CatalogMap>>,
}

impl Default for WorksheetStore {
    fn default() -> Self {
        Self::new()
    }
}

impl WorksheetStore {
    pub fn new() -> Self {
        Self {
            inner: Arc::new(Mutex::new(CatalogMap {
                by_id: BTreeMap::new(),
                next_id: 1,
            })),
        }
    }

    fn locked(&self) -> MutexGuard<'_, CatalogMap> {
        self.inner.lock().unwrap_or_else(|e| e.into_inner())
    }

    /// Add a worksheet, assigning the next sequential ID and creation time
    pub fn add(&self, new: NewWorksheet) -> Worksheet {
        let mut map = self.locked();
        let worksheet = Worksheet {
            id: map.next_id,
            title: new.title,
            description: new.description,
            difficulty: new.difficulty,
            pages: new.pages,
            price: new.price,
            image_url: new.image_url,
            created_at: Utc::now(),
            is_active: true,
        };
        map.next_id += 1;
        map.by_id.insert(worksheet.id, worksheet.clone());
        worksheet
    }

    /// All worksheets in id order
    pub fn list(&self) -> Vec<Worksheet> {
        self.locked().by_id.values().cloned().collect()
    }

    pub fn get(&self, id: i64) -> Option<Worksheet> {
        self.locked().by_id.get(&id).cloned()
    }

    pub fn exists(&self, id: i64) -> bool {
        self.locked().by_id.contains_key(&id)
    }
}
