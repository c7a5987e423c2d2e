use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Storage model for a monitored patient and their baseline vitals
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PatientRecord {
    /// Patient identifier. Empty until the repository assigns one.
    pub id: String,

    /// Given name
    pub name: String,

    /// Family name
    pub surname: String,

    /// Date of birth
    pub birthday: NaiveDate,

    /// Baseline body temperature in degrees Celsius
    pub normal_temperature: Decimal,

    /// Baseline systolic blood pressure (the higher number)
    pub systolic: i32,

    /// Baseline diastolic blood pressure (the lower number)
    pub diastolic: i32,
}
