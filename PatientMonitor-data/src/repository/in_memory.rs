use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use crate::models::patient::PatientRecord;
use super::errors::RepositoryError;

/// In-memory storage for patient records, keyed by patient id
#[derive(Debug, Clone)]
pub struct InMemoryStorage {
    /// Storage for patient records
    patients: Arc<RwLock<HashMap<String, PatientRecord>>>,
}

impl Default for InMemoryStorage {
    fn default() -> Self {
        Self::new()
    }
}

impl InMemoryStorage {
    /// Create a new in-memory storage
    pub fn new() -> Self {
        Self {
            patients: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    /// Insert a record unless its id is already taken
    pub fn insert(&self, record: PatientRecord) -> Result<(), RepositoryError> {
        let mut store = self.patients.write()?;
        if store.contains_key(&record.id) {
            return Err(RepositoryError::AlreadyExists(record.id));
        }
        store.insert(record.id.clone(), record);
        Ok(())
    }

    /// Get a record by id
    pub fn get(&self, id: &str) -> Result<Option<PatientRecord>, RepositoryError> {
        let store = self.patients.read()?;
        Ok(store.get(id).cloned())
    }

    /// Replace an existing record, returning the one it replaced
    pub fn replace(&self, record: PatientRecord) -> Result<PatientRecord, RepositoryError> {
        let mut store = self.patients.write()?;
        match store.get_mut(&record.id) {
            Some(existing) => Ok(std::mem::replace(existing, record)),
            None => Err(RepositoryError::NotFound(record.id)),
        }
    }

    /// Remove a record by id
    pub fn remove(&self, id: &str) -> Result<Option<PatientRecord>, RepositoryError> {
        let mut store = self.patients.write()?;
        Ok(store.remove(id))
    }

    /// Number of stored records
    pub fn len(&self) -> Result<usize, RepositoryError> {
        let store = self.patients.read()?;
        Ok(store.len())
    }

    /// Whether the storage holds no records
    pub fn is_empty(&self) -> Result<bool, RepositoryError> {
        Ok(self.len()? == 0)
    }
}
