// Testing utilities for the domain layer
// This module is only available when the "mock" feature is enabled

// Re-export the generated repository mock from the data layer
#[cfg(feature = "mock")]
pub use patient_monitor_data::repository::MockPatientRepositoryTrait;

use std::sync::RwLock;

use chrono::NaiveDate;
use rust_decimal::Decimal;

use crate::entities::patient::{BloodPressure, HealthInfo, PatientInfo};
use crate::services::alert::AlertServiceTrait;

/// Alert service that records every message it is asked to send
#[derive(Debug, Default)]
pub struct RecordingAlertService {
    messages: RwLock<Vec<String>>,
}

impl RecordingAlertService {
    /// Create a recorder with no messages
    pub fn new() -> Self {
        Self::default()
    }

    /// All messages received so far, in order
    pub fn messages(&self) -> Vec<String> {
        self.messages.read().unwrap().clone()
    }

    /// Number of times `send` was called
    pub fn call_count(&self) -> usize {
        self.messages.read().unwrap().len()
    }

    /// Number of times `send` was called with exactly this message
    pub fn count_of(&self, message: &str) -> usize {
        self.messages
            .read()
            .unwrap()
            .iter()
            .filter(|m| m.as_str() == message)
            .count()
    }

    /// Forget all recorded messages
    pub fn clear(&self) {
        self.messages.write().unwrap().clear();
    }
}

impl AlertServiceTrait for RecordingAlertService {
    fn send(&self, message: &str) {
        self.messages.write().unwrap().push(message.to_string());
    }
}

/// Build a patient with the given id and baseline vitals
pub fn sample_patient(id: &str, normal_temperature: Decimal, high: i32, low: i32) -> PatientInfo {
    PatientInfo::new(
        id,
        "Ivan",
        "Petrov",
        NaiveDate::from_ymd_opt(1980, 11, 26).unwrap_or_default(),
        HealthInfo::new(normal_temperature, BloodPressure::new(high, low)),
    )
}
