use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20251001_000001_create_user_table::User, m20251001_000002_create_hotel_table::Hotel,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Booking::Table)
                    .if_not_exists()
                    .col(pk_auto(Booking::Id))
                    .col(timestamp(Booking::BookingDate))
                    .col(integer(Booking::UserId))
                    .col(integer(Booking::HotelId))
                    .col(
                        timestamp(Booking::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    // No ON DELETE CASCADE: the hotel service purges bookings
                    // before removing their hotel.
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_booking_hotel_id")
                            .from(Booking::Table, Booking::HotelId)
                            .to(Hotel::Table, Hotel::Id)
                            .on_delete(ForeignKeyAction::Restrict)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_booking_user_id")
                            .from(Booking::Table, Booking::UserId)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_booking_hotel_id")
                    .table(Booking::Table)
                    .col(Booking::HotelId)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Booking::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Booking {
    Table,
    Id,
    BookingDate,
    UserId,
    HotelId,
    CreatedAt,
}
