use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20250301_000001_create_user_table::User, m20250301_000002_create_property_table::Property,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(PropertyDraft::Table)
                    .if_not_exists()
                    .col(pk_auto(PropertyDraft::Id))
                    .col(integer_null(PropertyDraft::OriginalPropertyId))
                    .col(integer(PropertyDraft::OwnerId))
                    .col(json(PropertyDraft::DraftData))
                    .col(boolean(PropertyDraft::IsInReview).default(false))
                    .col(
                        timestamp_with_time_zone(PropertyDraft::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .col(
                        timestamp_with_time_zone(PropertyDraft::UpdatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_property_draft_original_property_id")
                            .from(PropertyDraft::Table, PropertyDraft::OriginalPropertyId)
                            .to(Property::Table, Property::Id)
                            .on_delete(ForeignKeyAction::SetNull)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_property_draft_owner_id")
                            .from(PropertyDraft::Table, PropertyDraft::OwnerId)
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
                    .name("idx_property_draft_original_property_id")
                    .table(PropertyDraft::Table)
                    .col(PropertyDraft::OriginalPropertyId)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(PropertyDraft::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum PropertyDraft {
    Table,
    Id,
    OriginalPropertyId,
    OwnerId,
    DraftData,
    IsInReview,
    CreatedAt,
    UpdatedAt,
}
