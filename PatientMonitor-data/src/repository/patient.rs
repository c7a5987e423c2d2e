use tracing::{debug, error};
use uuid::Uuid;

#[cfg(any(test, feature = "mock"))]
use mockall::automock;

use crate::models::patient::PatientRecord;
use super::errors::RepositoryError;
use super::in_memory::InMemoryStorage;

/// Repository trait for monitored patients
#[cfg_attr(any(test, feature = "mock"), automock)]
pub trait PatientRepositoryTrait: Send + Sync {
    /// Get a patient by ID
    fn get_by_id(&self, id: &str) -> Result<Option<PatientRecord>, RepositoryError>;

    /// Add a patient, assigning a fresh ID when the record has none.
    /// Returns the ID the patient is stored under.
    fn add(&self, record: PatientRecord) -> Result<String, RepositoryError>;

    /// Remove a patient by ID, returning the removed record
    fn remove(&self, id: &str) -> Result<Option<PatientRecord>, RepositoryError>;

    /// Replace a stored patient, returning the previous record
    fn update(&self, record: PatientRecord) -> Result<PatientRecord, RepositoryError>;

    /// Number of registered patients
    fn count(&self) -> Result<usize, RepositoryError>;
}

/// Repository for patient records.
/// Records live in process memory only.
#[derive(Debug, Clone, Default)]
pub struct PatientRepository {
    storage: InMemoryStorage,
}

impl PatientRepository {
    /// Create a new, empty repository
    pub fn new() -> Self {
        Self {
            storage: InMemoryStorage::new(),
        }
    }

    /// Create a repository pre-populated with records
    pub fn with_patients(records: Vec<PatientRecord>) -> Result<Self, RepositoryError> {
        let repository = Self::new();
        for record in records {
            repository.add(record)?;
        }
        Ok(repository)
    }
}

impl PatientRepositoryTrait for PatientRepository {
    fn get_by_id(&self, id: &str) -> Result<Option<PatientRecord>, RepositoryError> {
        debug!("Looking up patient: {}", id);
        self.storage.get(id)
    }

    fn add(&self, mut record: PatientRecord) -> Result<String, RepositoryError> {
        if record.id.is_empty() {
            record.id = Uuid::new_v4().to_string();
        } else if record.id.trim().is_empty() {
            return Err(RepositoryError::Validation(
                "Patient id cannot be blank".to_string(),
            ));
        }

        let id = record.id.clone();
        match self.storage.insert(record) {
            Ok(()) => {
                debug!("Registered patient: {}", id);
                Ok(id)
            }
            Err(e) => {
                error!("Failed to register patient {}: {}", id, e);
                Err(e)
            }
        }
    }

    fn remove(&self, id: &str) -> Result<Option<PatientRecord>, RepositoryError> {
        debug!("Removing patient: {}", id);
        self.storage.remove(id)
    }

    fn update(&self, record: PatientRecord) -> Result<PatientRecord, RepositoryError> {
        debug!("Updating patient: {}", record.id);
        self.storage.replace(record)
    }

    fn count(&self) -> Result<usize, RepositoryError> {
        self.storage.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use rust_decimal::Decimal;
    use std::str::FromStr;

    fn create_test_record(id: &str) -> PatientRecord {
        PatientRecord {
            id: id.to_string(),
            name: "Semen".to_string(),
            surname: "Mikhailov".to_string(),
            birthday: NaiveDate::from_ymd_opt(1982, 1, 16).unwrap(),
            normal_temperature: Decimal::from_str("36.6").unwrap(),
            systolic: 125,
            diastolic: 78,
        }
    }

    #[test]
    fn test_add_and_get_by_id() {
        let repository = PatientRepository::new();
        let id = repository.add(create_test_record("1223-1445")).unwrap();
        assert_eq!(id, "1223-1445");

        let stored = repository.get_by_id("1223-1445").unwrap().unwrap();
        assert_eq!(stored.systolic, 125);
        assert_eq!(stored.diastolic, 78);
        assert!(repository.get_by_id("0000-0000").unwrap().is_none());
    }

    #[test]
    fn test_add_assigns_uuid_when_id_empty() {
        let repository = PatientRepository::new();
        let id = repository.add(create_test_record("")).unwrap();

        assert!(Uuid::parse_str(&id).is_ok());
        assert_eq!(repository.get_by_id(&id).unwrap().unwrap().id, id);
    }

    #[test]
    fn test_add_rejects_duplicate_id() {
        let repository = PatientRepository::new();
        repository.add(create_test_record("1245-1423")).unwrap();

        let result = repository.add(create_test_record("1245-1423"));
        assert!(matches!(result, Err(RepositoryError::AlreadyExists(id)) if id == "1245-1423"));
        assert_eq!(repository.count().unwrap(), 1);
    }

    #[test]
    fn test_add_rejects_blank_id() {
        let repository = PatientRepository::new();
        let result = repository.add(create_test_record("   "));
        assert!(matches!(result, Err(RepositoryError::Validation(_))));
    }

    #[test]
    fn test_update_returns_previous_record() {
        let repository = PatientRepository::new();
        repository.add(create_test_record("1223-1445")).unwrap();

        let mut changed = create_test_record("1223-1445");
        changed.systolic = 130;
        let previous = repository.update(changed).unwrap();

        assert_eq!(previous.systolic, 125);
        assert_eq!(repository.get_by_id("1223-1445").unwrap().unwrap().systolic, 130);
    }

    #[test]
    fn test_update_unknown_patient() {
        let repository = PatientRepository::new();
        let result = repository.update(create_test_record("1223-1445"));
        assert!(matches!(result, Err(RepositoryError::NotFound(_))));
    }

    #[test]
    fn test_remove() {
        let repository = PatientRepository::with_patients(vec![
            create_test_record("1223-1445"),
            create_test_record("1245-1423"),
        ])
        .unwrap();

        let removed = repository.remove("1223-1445").unwrap();
        assert_eq!(removed.map(|r| r.id), Some("1223-1445".to_string()));
        assert!(repository.remove("1223-1445").unwrap().is_none());
        assert_eq!(repository.count().unwrap(), 1);
    }

    #[test]
    fn test_clones_share_storage() {
        let repository = PatientRepository::new();
        let clone = repository.clone();
        clone.add(create_test_record("1223-1445")).unwrap();

        assert!(repository.get_by_id("1223-1445").unwrap().is_some());
    }
}
