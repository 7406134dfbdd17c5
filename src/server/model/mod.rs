//! Server-side domain models and parameter types.
//!
//! Domain models are converted from entity models at the repository boundary and
//! transformed to DTOs at the controller boundary. Parameter types carry validated
//! input from controllers into services. `query` holds the list request translator.

pub mod booking;
pub mod hotel;
pub mod query;
pub mod user;
