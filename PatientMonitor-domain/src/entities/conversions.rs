use crate::entities::patient::{BloodPressure, HealthInfo, PatientInfo};
use patient_monitor_data::models::patient::PatientRecord;

/// Conversion functions between domain entities and data models
/// These functions follow the pattern convert_to_[target_layer]_[model_name]

/// Convert from data model to domain entity for a patient
pub fn convert_to_domain_patient(record: PatientRecord) -> PatientInfo {
    let health_info = HealthInfo::new(
        record.normal_temperature,
        BloodPressure::new(record.systolic, record.diastolic),
    );

    PatientInfo::new(
        record.id,
        record.name,
        record.surname,
        record.birthday,
        health_info,
    )
}

/// Convert from domain entity to data model for a patient
pub fn convert_to_data_patient(patient: &PatientInfo) -> PatientRecord {
    let health_info = patient.health_info();
    let pressure = health_info.blood_pressure();

    PatientRecord {
        id: patient.id().to_string(),
        name: patient.name().to_string(),
        surname: patient.surname().to_string(),
        birthday: patient.birthday(),
        normal_temperature: health_info.normal_temperature(),
        systolic: pressure.high(),
        diastolic: pressure.low(),
    }
}
