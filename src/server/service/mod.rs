//! Service layer for business logic and orchestration.
//!
//! This module contains the service layer of the application, which sits between the
//! controller (API) layer and the data (repository) layer. Services are responsible for:
//!
//! - **Business Logic**: Ownership checks, booking limits and duplicate detection
//! - **Orchestration**: Coordinating repository calls, such as the hotel cascade delete
//! - **Domain Models**: Working with domain models rather than DTOs or entity models

pub mod auth;
pub mod booking;
pub mod hotel;
