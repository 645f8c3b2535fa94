#![doc = "The `exerlog` library crate."]
#![doc = ""]
#![doc = "This crate contains the domain models, storage collaborators, the exercise-log"]
#![doc = "query service, authentication helpers, routing configuration, and error handling"]
#![doc = "for the exerlog application. It is used by the main binary (`main.rs`) to"]
#![doc = "construct and run the HTTP server."]

pub mod auth;
pub mod config;
pub mod error;
pub mod logs;
pub mod models;
pub mod routes;
pub mod store;

// Re-export the pieces the binary and integration tests wire together most often.
pub use crate::logs::LogService;
pub use crate::store::{ExerciseStore, UserDirectory};
