// Repository module structure
pub mod errors;
mod in_memory;
mod patient;

// Re-export commonly used types
pub use errors::RepositoryError;
pub use in_memory::InMemoryStorage;
pub use patient::{PatientRepository, PatientRepositoryTrait};

// Generated repository mock for dependent crates' tests
#[cfg(any(test, feature = "mock"))]
pub use patient::MockPatientRepositoryTrait;
