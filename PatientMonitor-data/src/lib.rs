// Patient Monitor Data
// This crate holds patient records for the lifetime of the process

// Repository implementations for data access
pub mod repository;

// Data storage models
pub mod models;
