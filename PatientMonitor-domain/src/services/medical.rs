use rust_decimal::Decimal;
use thiserror::Error;
use tracing::{debug, error, info, warn};

use crate::config::MonitorConfig;
use crate::entities::conversions;
use crate::entities::patient::{BloodPressure, PatientInfo};
use crate::services::alert::{alert_message, create_alert_service, AlertServiceTrait};
use crate::services::vitals::{is_pressure_normal, is_temperature_normal};
use patient_monitor_data::repository::{PatientRepository, PatientRepositoryTrait, RepositoryError};

/// Medical service errors
#[derive(Debug, Error)]
pub enum MedicalServiceError {
    /// No patient is registered under the given id
    #[error("Patient not found: {0}")]
    PatientNotFound(String),

    /// Repository error
    #[error("Repository error: {0}")]
    RepositoryError(String),
}

/// Checks of current readings against a patient's baseline.
///
/// Each check returns `Ok(true)` when the reading matches the baseline. When it
/// does not, exactly one alert is sent before returning `Ok(false)`.
pub trait MedicalServiceTrait: Send + Sync {
    /// Compare a blood pressure reading with the patient's baseline
    fn check_blood_pressure(
        &self,
        patient_id: &str,
        current: BloodPressure,
    ) -> Result<bool, MedicalServiceError>;

    /// Compare a temperature reading with the patient's baseline
    fn check_temperature(
        &self,
        patient_id: &str,
        current: Decimal,
    ) -> Result<bool, MedicalServiceError>;
}

/// Medical service backed by a patient repository and an alert channel
pub struct MedicalService<R, A> {
    repository: R,
    alert_service: A,
}

impl<R: PatientRepositoryTrait, A: AlertServiceTrait> MedicalService<R, A> {
    /// Create a new medical service
    pub fn new(repository: R, alert_service: A) -> Self {
        Self {
            repository,
            alert_service,
        }
    }

    /// Access the underlying repository
    pub fn repository(&self) -> &R {
        &self.repository
    }

    /// Map repository errors to service errors
    fn map_repo_error(&self, err: RepositoryError) -> MedicalServiceError {
        match err {
            RepositoryError::NotFound(id) => MedicalServiceError::PatientNotFound(id),
            _ => MedicalServiceError::RepositoryError(err.to_string()),
        }
    }

    fn get_patient(&self, patient_id: &str) -> Result<PatientInfo, MedicalServiceError> {
        let record = self
            .repository
            .get_by_id(patient_id)
            .map_err(|e| {
                error!("Failed to load patient {}: {}", patient_id, e);
                self.map_repo_error(e)
            })?
            .ok_or_else(|| MedicalServiceError::PatientNotFound(patient_id.to_string()))?;

        debug!("Loaded baseline for patient {}", patient_id);
        Ok(conversions::convert_to_domain_patient(record))
    }

    fn alert(&self, patient: &PatientInfo) {
        self.alert_service.send(&alert_message(patient.id()));
    }
}

impl<R: PatientRepositoryTrait, A: AlertServiceTrait> MedicalServiceTrait for MedicalService<R, A> {
    fn check_blood_pressure(
        &self,
        patient_id: &str,
        current: BloodPressure,
    ) -> Result<bool, MedicalServiceError> {
        let patient = self.get_patient(patient_id)?;
        let baseline = patient.health_info().blood_pressure();

        if is_pressure_normal(current, baseline) {
            info!("Blood pressure {} for patient {} matches baseline", current, patient.id());
            return Ok(true);
        }

        warn!(
            "Blood pressure {} for patient {} deviates from baseline {}",
            current,
            patient.id(),
            baseline
        );
        self.alert(&patient);
        Ok(false)
    }

    fn check_temperature(
        &self,
        patient_id: &str,
        current: Decimal,
    ) -> Result<bool, MedicalServiceError> {
        let patient = self.get_patient(patient_id)?;
        let baseline = patient.health_info().normal_temperature();

        if is_temperature_normal(current, baseline) {
            info!("Temperature {} for patient {} matches baseline", current, patient.id());
            return Ok(true);
        }

        warn!(
            "Temperature {} for patient {} deviates from baseline {}",
            current,
            patient.id(),
            baseline
        );
        self.alert(&patient);
        Ok(false)
    }
}

/// Create a medical service over an empty in-memory repository, alerting
/// through the backend selected by the configuration
pub fn create_default_medical_service(
    config: &MonitorConfig,
) -> MedicalService<PatientRepository, Box<dyn AlertServiceTrait>> {
    MedicalService::new(PatientRepository::new(), create_alert_service(config))
}
