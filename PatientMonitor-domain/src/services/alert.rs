use tracing::warn;

use crate::config::{AlertTarget, MonitorConfig};

/// Build the warning sent when a patient's reading deviates from their baseline
pub fn alert_message(patient_id: &str) -> String {
    format!("Warning, patient with id: {}, need help", patient_id)
}

/// Delivery channel for patient alerts.
///
/// Delivery is fire-and-forget: implementations report their own failures.
pub trait AlertServiceTrait: Send + Sync {
    /// Deliver an alert message
    fn send(&self, message: &str);
}

impl<T: AlertServiceTrait + ?Sized> AlertServiceTrait for Box<T> {
    fn send(&self, message: &str) {
        (**self).send(message)
    }
}

impl<T: AlertServiceTrait + ?Sized> AlertServiceTrait for std::sync::Arc<T> {
    fn send(&self, message: &str) {
        (**self).send(message)
    }
}

/// Alert service that emits alerts as warning-level tracing events
#[derive(Debug, Clone, Copy, Default)]
pub struct LoggingAlertService;

impl AlertServiceTrait for LoggingAlertService {
    fn send(&self, message: &str) {
        warn!(target: "patient_alert", "{}", message);
    }
}

/// Alert service that prints alerts on standard output
#[derive(Debug, Clone, Copy, Default)]
pub struct ConsoleAlertService;

impl AlertServiceTrait for ConsoleAlertService {
    fn send(&self, message: &str) {
        println!("{}", message);
    }
}

/// Create the alert service selected by the configuration
pub fn create_alert_service(config: &MonitorConfig) -> Box<dyn AlertServiceTrait> {
    match config.alert_target {
        AlertTarget::Log => Box::new(LoggingAlertService),
        AlertTarget::Console => Box::new(ConsoleAlertService),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::RecordingAlertService;
    use std::sync::Arc;

    #[test]
    fn test_alert_message_format() {
        assert_eq!(
            alert_message("1223-1445"),
            "Warning, patient with id: 1223-1445, need help"
        );
    }

    #[test]
    fn test_boxed_and_shared_services_forward() {
        let recorder = Arc::new(RecordingAlertService::new());
        let boxed: Box<dyn AlertServiceTrait> = Box::new(Arc::clone(&recorder));

        boxed.send("first");
        recorder.send("second");

        assert_eq!(recorder.messages(), vec!["first".to_string(), "second".to_string()]);
    }

    #[test]
    fn test_create_alert_service_from_config() {
        let config = MonitorConfig {
            alert_target: AlertTarget::Console,
            ..MonitorConfig::default()
        };
        // Both backends accept messages without panicking
        create_alert_service(&config).send(&alert_message("1245-1423"));
        create_alert_service(&MonitorConfig::default()).send(&alert_message("1245-1423"));
    }
}
