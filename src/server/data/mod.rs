//! Database repository layer for all domain entities.
//!
//! This module contains repository structs that handle database operations (CRUD) for each
//! domain in the application. Repositories use SeaORM entity models internally and return
//! domain models to maintain separation between the data layer and business logic layer.
//! `query` applies translated list requests to SeaORM selects.

pub mod booking;
pub mod hotel;
pub mod query;
pub mod user;
