//! HTTP request handlers.
//!
//! Controllers check access through `AuthGuard`, convert DTOs into parameter
//! models, call a service and wrap the result in the response envelope.

pub mod auth;
pub mod booking;
pub mod hotel;

#[cfg(test)]
mod test;
