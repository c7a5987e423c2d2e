use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A blood pressure measurement.
///
/// Two measurements are equal only when both the systolic and the diastolic
/// values match exactly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BloodPressure {
    /// Systolic blood pressure (the higher number)
    high: i32,

    /// Diastolic blood pressure (the lower number)
    low: i32,
}

impl BloodPressure {
    /// Create a measurement from systolic and diastolic values
    pub fn new(high: i32, low: i32) -> Self {
        Self { high, low }
    }

    /// Systolic blood pressure
    pub fn high(&self) -> i32 {
        self.high
    }

    /// Diastolic blood pressure
    pub fn low(&self) -> i32 {
        self.low
    }
}

impl std::fmt::Display for BloodPressure {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/{}", self.high, self.low)
    }
}

/// Baseline vitals a patient's readings are compared against
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HealthInfo {
    normal_temperature: Decimal,
    blood_pressure: BloodPressure,
}

impl HealthInfo {
    pub fn new(normal_temperature: Decimal, blood_pressure: BloodPressure) -> Self {
        Self {
            normal_temperature,
            blood_pressure,
        }
    }

    /// Baseline body temperature in degrees Celsius
    pub fn normal_temperature(&self) -> Decimal {
        self.normal_temperature
    }

    /// Baseline blood pressure
    pub fn blood_pressure(&self) -> BloodPressure {
        self.blood_pressure
    }
}

/// A monitored patient
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PatientInfo {
    id: String,
    name: String,
    surname: String,
    birthday: NaiveDate,
    health_info: HealthInfo,
}

impl PatientInfo {
    /// Create a patient with a known identifier
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        surname: impl Into<String>,
        birthday: NaiveDate,
        health_info: HealthInfo,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            surname: surname.into(),
            birthday,
            health_info,
        }
    }

    /// Create a patient whose identifier will be assigned on registration
    pub fn register(
        name: impl Into<String>,
        surname: impl Into<String>,
        birthday: NaiveDate,
        health_info: HealthInfo,
    ) -> Self {
        Self::new(String::new(), name, surname, birthday, health_info)
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn surname(&self) -> &str {
        &self.surname
    }

    pub fn birthday(&self) -> NaiveDate {
        self.birthday
    }

    pub fn health_info(&self) -> &HealthInfo {
        &self.health_info
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_blood_pressure_value_equality() {
        assert_eq!(BloodPressure::new(120, 80), BloodPressure::new(120, 80));
        assert_ne!(BloodPressure::new(120, 80), BloodPressure::new(120, 81));
        assert_ne!(BloodPressure::new(120, 80), BloodPressure::new(121, 80));
    }

    #[test]
    fn test_blood_pressure_display() {
        assert_eq!(BloodPressure::new(130, 85).to_string(), "130/85");
    }

    #[test]
    fn test_health_info_temperature_equality_ignores_scale() {
        let pressure = BloodPressure::new(120, 80);
        let a = HealthInfo::new(Decimal::from_str("36.60").unwrap(), pressure);
        let b = HealthInfo::new(Decimal::from_str("36.600").unwrap(), pressure);
        assert_eq!(a, b);
    }

    #[test]
    fn test_register_leaves_id_empty() {
        let health_info = HealthInfo::new(Decimal::new(366, 1), BloodPressure::new(120, 80));
        let patient = PatientInfo::register(
            "Ivan",
            "Petrov",
            NaiveDate::from_ymd_opt(1980, 11, 26).unwrap(),
            health_info,
        );
        assert!(patient.id().is_empty());
        assert_eq!(patient.surname(), "Petrov");
    }

    #[test]
    fn test_patient_json_shape() {
        let patient = PatientInfo::new(
            "1223-1445",
            "Ivan",
            "Petrov",
            NaiveDate::from_ymd_opt(1980, 11, 26).unwrap(),
            HealthInfo::new(Decimal::from_str("36.65").unwrap(), BloodPressure::new(120, 80)),
        );

        let json = serde_json::to_value(&patient).unwrap();
        assert_eq!(json["id"], "1223-1445");
        assert_eq!(json["health_info"]["normal_temperature"], "36.65");
        assert_eq!(json["health_info"]["blood_pressure"]["high"], 120);
        assert_eq!(json["health_info"]["blood_pressure"]["low"], 80);
    }
}
