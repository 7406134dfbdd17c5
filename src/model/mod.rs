//! Wire types shared by every endpoint: request payloads, response DTOs and the
//! `{success, ...}` envelope.

pub mod api;
pub mod booking;
pub mod hotel;
pub mod user;
