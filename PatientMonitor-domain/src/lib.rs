// Patient Monitor Domain
// This crate contains the baseline checks and alerting logic for monitored patients

// Services that implement business logic
pub mod services;

// Domain entities
pub mod entities;

// Environment-driven configuration
pub mod config;

// Tracing subscriber setup
pub mod logging;

// Re-export the repository module from the data crate for convenience
pub use patient_monitor_data::repository;

// Testing utilities - only available with mock feature
#[cfg(any(test, feature = "mock"))]
pub mod testing;

pub use config::MonitorConfig;
pub use entities::{BloodPressure, HealthInfo, PatientInfo};
pub use services::{AlertServiceTrait, MedicalService, MedicalServiceError, MedicalServiceTrait};
