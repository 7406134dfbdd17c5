//! Factory methods for creating test data.
//!
//! Each entity has its own factory module with both a `Factory` struct for customization
//! and a `create_*` convenience function for quick default creation.
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! let user = factory::create_user(&db).await?;
//! let hotel = factory::hotel::HotelFactory::new(&db)
//!     .name("Happy Hotel")
//!     .province("Bangkok")
//!     .build()
//!     .await?;
//! let booking = factory::create_booking(&db, user.id, hotel.id).await?;
//! ```
//!
//! # Available Factories
//!
//! - `user` - Create user entities
//! - `hotel` - Create hotel entities
//! - `booking` - Create booking entities
//! - `helpers` - Unique id generation and multi-entity helpers

pub mod booking;
pub mod helpers;
pub mod hotel;
pub mod user;

pub use booking::create_booking;
pub use hotel::create_hotel;
pub use user::{create_admin, create_user};
