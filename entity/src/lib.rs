//! SeaORM entity definitions for the hotel booking schema.

pub mod prelude;

pub mod booking;
pub mod hotel;
pub mod user;
