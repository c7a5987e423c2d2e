pub mod alert;
pub mod medical;
pub mod vitals;

// Domain services
// Baseline comparisons, alert delivery and the medical checks that tie them together.

// Re-export service traits and factory functions
pub use alert::{alert_message, create_alert_service, AlertServiceTrait, ConsoleAlertService, LoggingAlertService};
pub use medical::{create_default_medical_service, MedicalService, MedicalServiceError, MedicalServiceTrait};
pub use vitals::{is_pressure_normal, is_temperature_normal};
