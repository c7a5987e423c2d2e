use rust_decimal::Decimal;

use crate::entities::patient::BloodPressure;

/// Whether a blood pressure reading matches the patient's baseline.
///
/// Both the systolic and the diastolic values must be equal. No range
/// validation is applied.
pub fn is_pressure_normal(current: BloodPressure, baseline: BloodPressure) -> bool {
    current.high() == baseline.high() && current.low() == baseline.low()
}

/// Whether a temperature reading matches the patient's baseline.
///
/// Comparison is by numeric value, so `36.60` and `36.600` are equal.
pub fn is_temperature_normal(current: Decimal, baseline: Decimal) -> bool {
    current == baseline
}
