//! Last server snapshot of one collection.

use crate::models::Identified;

/// Most recently fetched collection for a resource.
///
/// Only ever replaced wholesale; never patched record by record.
#[derive(Debug, Clone)]
pub struct ListCache<T> {
    records: Vec<T>,
    generation: u64,
}

impl<T> Default for ListCache<T> {
    fn default() -> Self {
        Self {
            records: Vec::new(),
            generation: 0,
        }
    }
}

impl<T> ListCache<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Swap in a fresh snapshot.
    pub fn replace(&mut self, records: Vec<T>) {
        self.records = records;
        self.generation += 1;
    }

    pub fn records(&self) -> &[T] {
        &self.records
    }

    /// Number of snapshots stored so far (0 = never loaded).
    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl<T: Identified> ListCache<T> {
    pub fn get(&self, id: u64) -> Option<&T> {
        self.records.iter().find(|r| r.id() == id)
    }

    pub fn contains(&self, id: u64) -> bool {
        self.get(id).is_some()
    }
}
