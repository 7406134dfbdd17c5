//! Booking business logic.
//!
//! Admins see and manage every booking. Other users only see their own, may
//! only change their own and are limited in how many bookings they hold.

use sea_orm::DatabaseConnection;

use crate::server::{
    data::{booking::BookingRepository, hotel::HotelRepository},
    error::{auth::AuthError, AppError},
    model::{
        booking::{Booking, CreateBookingParams, UpdateBookingParams},
        user::User,
    },
};

pub struct BookingService<'a> {
    db: &'a DatabaseConnection,
    max_bookings_per_user: u64,
}

impl<'a> BookingService<'a> {
    /// Creates a booking service.
    ///
    /// # Arguments
    /// - `db` - Database connection
    /// - `max_bookings_per_user` - Booking cap for non-admin users
    pub fn new(db: &'a DatabaseConnection, max_bookings_per_user: u64) -> Self {
        Self {
            db,
            max_bookings_per_user,
        }
    }

    /// Lists the bookings visible to `user`.
    ///
    /// # Arguments
    /// - `user` - Caller; admins get every booking, others only their own
    /// - `hotel_id` - Restricts the listing to one hotel when set
    ///
    /// # Returns
    /// - `Ok(Vec<Booking>)` - Bookings with their hotel
    /// - `Err(AppError::NotFound)` - `hotel_id` does not exist
    pub async fn list(&self, user: &User, hotel_id: Option<i32>) -> Result<Vec<Booking>, AppError> {
        if let Some(hotel_id) = hotel_id {
            self.require_hotel(hotel_id).await?;
        }

        let owner = (!user.is_admin()).then_some(user.id);

        Ok(BookingRepository::new(self.db)
            .get_scoped(owner, hotel_id)
            .await?)
    }

    /// Gets one booking owned by `user`, or any booking for an admin.
    ///
    /// # Returns
    /// - `Ok(Booking)` - The booking with its hotel
    /// - `Err(AppError::NotFound)` - No booking with that id
    /// - `Err(AppError::AuthErr)` - The booking belongs to someone else
    pub async fn get_by_id(&self, user: &User, id: i32) -> Result<Booking, AppError> {
        let booking = BookingRepository::new(self.db)
            .get_by_id(id)
            .await?
            .ok_or_else(|| booking_not_found(id))?;

        ensure_owner(user, &booking, "view")?;

        Ok(booking)
    }

    /// Books a stay at a hotel.
    ///
    /// # Returns
    /// - `Ok(Booking)` - The created booking
    /// - `Err(AppError::NotFound)` - The hotel does not exist
    /// - `Err(AppError::Validation)` - A non-admin user already holds the maximum number of bookings
    pub async fn create(
        &self,
        user: &User,
        params: CreateBookingParams,
    ) -> Result<Booking, AppError> {
        self.require_hotel(params.hotel_id).await?;

        let repo = BookingRepository::new(self.db);

        if !user.is_admin() {
            let held = repo.count_by_user(params.user_id).await?;
            if held >= self.max_bookings_per_user {
                return Err(AppError::Validation(format!(
                    "The user with ID {} has already made {} bookings",
                    params.user_id, held
                )));
            }
        }

        let booking = repo.create(params).await?;
        tracing::debug!(
            "User {} booked hotel {} as booking {}",
            booking.user_id,
            booking.hotel_id,
            booking.id
        );

        Ok(booking)
    }

    /// Changes the date of a booking.
    ///
    /// # Returns
    /// - `Ok(Booking)` - The updated booking
    /// - `Err(AppError::NotFound)` - No booking with that id
    /// - `Err(AppError::AuthErr)` - The booking belongs to someone else
    pub async fn update(
        &self,
        user: &User,
        params: UpdateBookingParams,
    ) -> Result<Booking, AppError> {
        let id = params.id;
        let repo = BookingRepository::new(self.db);

        let booking = repo
            .get_by_id(id)
            .await?
            .ok_or_else(|| booking_not_found(id))?;
        ensure_owner(user, &booking, "update")?;

        repo.update(params)
            .await?
            .ok_or_else(|| booking_not_found(id))
    }

    /// Deletes a booking.
    ///
    /// # Returns
    /// - `Ok(())` - Booking removed
    /// - `Err(AppError::NotFound)` - No booking with that id
    /// - `Err(AppError::AuthErr)` - The booking belongs to someone else
    pub async fn delete(&self, user: &User, id: i32) -> Result<(), AppError> {
        let repo = BookingRepository::new(self.db);

        let booking = repo
            .get_by_id(id)
            .await?
            .ok_or_else(|| booking_not_found(id))?;
        ensure_owner(user, &booking, "delete")?;

        if repo.delete(id).await? == 0 {
            return Err(booking_not_found(id));
        }

        Ok(())
    }

    async fn require_hotel(&self, hotel_id: i32) -> Result<(), AppError> {
        if HotelRepository::new(self.db).exists(hotel_id).await? {
            Ok(())
        } else {
            Err(AppError::NotFound(format!("Hotel {} not found", hotel_id)))
        }
    }
}

fn ensure_owner(user: &User, booking: &Booking, action: &str) -> Result<(), AppError> {
    if user.is_admin() || booking.user_id == user.id {
        return Ok(());
    }

    Err(AuthError::AccessDenied(
        user.id,
        format!(
            "User attempted to {} booking {} owned by another user",
            action, booking.id
        ),
    )
    .into())
}

fn booking_not_found(id: i32) -> AppError {
    AppError::NotFound(format!("Booking {} not found", id))
}
