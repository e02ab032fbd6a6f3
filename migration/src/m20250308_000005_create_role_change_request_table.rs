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
                    .table(RoleChangeRequest::Table)
                    .if_not_exists()
                    .col(pk_auto(RoleChangeRequest::Id))
                    .col(integer(RoleChangeRequest::UserId))
                    .col(integer(RoleChangeRequest::RequestedRole))
                    .col(string(RoleChangeRequest::Status).default("pending"))
                    .col(string(RoleChangeRequest::TaxDocument))
                    .col(boolean_null(RoleChangeRequest::IsTaxDocumentVerified))
                    .col(string(RoleChangeRequest::ProofOfResidence))
                    .col(boolean_null(RoleChangeRequest::IsProofOfResidenceVerified))
                    .col(string(RoleChangeRequest::CriminalRecordCertificate))
                    .col(boolean_null(
                        RoleChangeRequest::IsCriminalRecordCertificateVerified,
                    ))
                    .col(
                        timestamp_with_time_zone(RoleChangeRequest::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .col(
                        timestamp_with_time_zone(RoleChangeRequest::UpdatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_role_change_request_user_id")
                            .from(RoleChangeRequest::Table, RoleChangeRequest::UserId)
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
            .drop_table(Table::drop().table(RoleChangeRequest::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum RoleChangeRequest {
    Table,
    Id,
    UserId,
    RequestedRole,
    Status,
    TaxDocument,
    IsTaxDocumentVerified,
    ProofOfResidence,
    IsProofOfResidenceVerified,
    CriminalRecordCertificate,
    IsCriminalRecordCertificateVerified,
    CreatedAt,
    UpdatedAt,
}
