//! The in-memory database: collection name to records

use crate::core::collection::Collection;
use indexmap::IndexMap;
use serde::Serialize;

/// Mapping of collection name to its records
///
/// Keys keep the order they were inserted in, so the store serializes the
/// same way it was authored.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Store {
    collections: IndexMap<String, Collection>,
}

impl Store {
    /// Create an empty store
    pub fn new() -> Self {
        Self {
            collections: IndexMap::new(),
        }
    }

    /// Add or replace a collection
    pub fn insert(&mut self, name: impl Into<String>, collection: Collection) {
        self.collections.insert(name.into(), collection);
    }

    /// Builder-style [`insert`](Self::insert)
    pub fn with_collection(mut self, name: impl Into<String>, collection: Collection) -> Self {
        self.insert(name, collection);
        self
    }

    pub fn get(&self, name: &str) -> Option<&Collection> {
        self.collections.get(name)
    }

    pub fn get_mut(&mut self, name: &str) -> Option<&mut Collection> {
        self.collections.get_mut(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.collections.contains_key(name)
    }

    /// Collection names in authored order
    pub fn names(&self) -> Vec<&str> {
        self.collections.keys().map(String::as_str).collect()
    }

    /// Empty every collection, keeping the collections themselves
    pub fn clear_all(&mut self) {
        for collection in self.collections.values_mut() {
            collection.clear();
        }
    }

    /// Total number of records across every collection
    pub fn record_count(&self) -> usize {
        self.collections.values().map(Collection::len).sum()
    }
}
