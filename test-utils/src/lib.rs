//! Shared fixtures for the hotel booking API tests.
//!
//! Each test builds its own in-memory SQLite database with [`builder::TestBuilder`],
//! fills it through the entity factories in [`factory`] and, where cookies matter,
//! borrows a session or session store from [`context::TestContext`].
//!
//! ```rust,ignore
//! use test_utils::{builder::TestBuilder, factory};
//!
//! #[tokio::test]
//! async fn deletes_bookings_with_hotel() -> Result<(), DbErr> {
//!     let test = TestBuilder::new().with_booking_tables().build().await.unwrap();
//!     let db = test.db.as_ref().unwrap();
//!
//!     let (_, hotel, _) = factory::helpers::create_hotel_with_bookings(db, 2).await?;
//!     // ...
//!     Ok(())
//! }
//! ```

pub mod builder;
pub mod context;
pub mod error;
pub mod factory;
