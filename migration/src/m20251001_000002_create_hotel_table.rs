use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Hotel::Table)
                    .if_not_exists()
                    .col(pk_auto(Hotel::Id))
                    .col(string_len_uniq(Hotel::Name, 50))
                    .col(string(Hotel::Address))
                    .col(string_null(Hotel::District))
                    .col(string_null(Hotel::Province))
                    .col(string_len_null(Hotel::PostalCode, 5))
                    .col(string_null(Hotel::Tel))
                    .col(string_null(Hotel::Region))
                    .col(
                        timestamp(Hotel::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_hotel_created_at")
                    .table(Hotel::Table)
                    .col(Hotel::CreatedAt)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Hotel::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Hotel {
    Table,
    Id,
    Name,
    Address,
    District,
    Province,
    PostalCode,
    Tel,
    Region,
    CreatedAt,
}
