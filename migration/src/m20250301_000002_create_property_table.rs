use sea_orm_migration::{prelude::*, schema::*};

use super::m20250301_000001_create_user_table::User;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Property::Table)
                    .if_not_exists()
                    .col(pk_auto(Property::Id))
                    .col(integer(Property::HostId))
                    .col(integer(Property::PropertyType))
                    .col(string_null(Property::Title))
                    .col(text_null(Property::MarkdownDescription))
                    .col(integer(Property::MaxGuests))
                    .col(integer_null(Property::MaxBabies))
                    .col(string_null(Property::ProofOfAddress))
                    .col(boolean_null(Property::IsProofOfAddressVerified))
                    .col(string_null(Property::LandUsePermit))
                    .col(boolean_null(Property::IsLandUsePermitVerified))
                    .col(double(Property::Width))
                    .col(double(Property::Length))
                    .col(integer(Property::CheckIn))
                    .col(integer(Property::CheckOut))
                    .col(integer(Property::MinStayNights))
                    .col(integer(Property::MaxStayNights))
                    .col(double(Property::PricePerNight))
                    .col(string(Property::Currency))
                    .col(integer_null(Property::PreparationDaysTimeBetweenStays))
                    .col(json(Property::Address))
                    .col(json(Property::Amenities))
                    .col(json(Property::Bedrooms))
                    .col(json(Property::Kitchens))
                    .col(json(Property::Bathrooms))
                    .col(json(Property::Photos))
                    .col(json(Property::Videos))
                    .col(json(Property::Rules))
                    .col(json(Property::Reviews))
                    .col(boolean(Property::IsActive).default(true))
                    .col(big_integer(Property::Views).default(0))
                    .col(boolean(Property::IsApproved).default(false))
                    .col(
                        timestamp_with_time_zone(Property::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .col(
                        timestamp_with_time_zone(Property::UpdatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_property_host_id")
                            .from(Property::Table, Property::HostId)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Property::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Property {
    Table,
    Id,
    HostId,
    PropertyType,
    Title,
    MarkdownDescription,
    MaxGuests,
    MaxBabies,
    ProofOfAddress,
    IsProofOfAddressVerified,
    LandUsePermit,
    IsLandUsePermitVerified,
    Width,
    Length,
    CheckIn,
    CheckOut,
    MinStayNights,
    MaxStayNights,
    PricePerNight,
    Currency,
    PreparationDaysTimeBetweenStays,
    Address,
    Amenities,
    Bedrooms,
    Kitchens,
    Bathrooms,
    Photos,
    Videos,
    Rules,
    Reviews,
    IsActive,
    Views,
    IsApproved,
    CreatedAt,
    UpdatedAt,
}
