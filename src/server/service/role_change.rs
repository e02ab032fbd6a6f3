//! Host applications.
//!
//! Guests apply to become hosts by submitting three documents. An admin reviews the
//! documents and approves or rejects the request; approval promotes the user.

use sea_orm::DatabaseConnection;

use crate::{
    model::role_change::{ReviewRoleChangeDto, SubmitRoleChangeDto},
    server::{
        data::{role_change::RoleChangeRepository, user::UserRepository},
        error::AppError,
        model::{
            role_change::{
                CreateRoleChangeParams, RequestStatus, ReviewRoleChangeParams, RoleChangeRequest,
            },
            user::{User, UserRole},
        },
    },
};

pub struct RoleChangeService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> RoleChangeService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Files a host application for the caller.
    ///
    /// # Returns
    /// - `Ok(RoleChangeRequest)` - Pending request
    /// - `Err(AppError::BadRequest)` - Requested role is not host, a document is missing,
    ///   the caller is already a host, or a request is already pending
    pub async fn submit(
        &self,
        caller: &User,
        dto: SubmitRoleChangeDto,
    ) -> Result<RoleChangeRequest, AppError> {
        if dto.requested_role != UserRole::Host.as_i32() {
            return Err(AppError::BadRequest(
                "Only the host role can be requested".to_string(),
            ));
        }

        let documents = [
            &dto.tax_document,
            &dto.proof_of_residence,
            &dto.criminal_record_certificate,
        ];
        if documents.iter().any(|d| d.trim().is_empty()) {
            return Err(AppError::BadRequest(
                "tax_document, proof_of_residence and criminal_record_certificate are required"
                    .to_string(),
            ));
        }

        if caller.is_host() {
            return Err(AppError::BadRequest("You are already a host".to_string()));
        }

        let repo = RoleChangeRepository::new(self.db);
        if repo.find_pending_by_user(caller.id).await?.is_some() {
            return Err(AppError::BadRequest(
                "You already have a pending request".to_string(),
            ));
        }

        let request = repo
            .create(CreateRoleChangeParams {
                user_id: caller.id,
                requested_role: dto.requested_role,
                tax_document: dto.tax_document,
                proof_of_residence: dto.proof_of_residence,
                criminal_record_certificate: dto.criminal_record_certificate,
            })
            .await?;

        tracing::info!("User {} requested the host role", caller.id);

        Ok(request)
    }

    pub async fn list(&self) -> Result<Vec<RoleChangeRequest>, AppError> {
        Ok(RoleChangeRepository::new(self.db).get_all().await?)
    }

    /// Records an admin decision. Approving promotes the requesting user.
    ///
    /// # Returns
    /// - `Ok(RoleChangeRequest)` - The reviewed request
    /// - `Err(AppError::BadRequest)` - Unknown status, or an attempt to reset to pending
    /// - `Err(AppError::NotFound)` - No request with that id
    pub async fn review(
        &self,
        id: i32,
        dto: ReviewRoleChangeDto,
    ) -> Result<RoleChangeRequest, AppError> {
        let params = ReviewRoleChangeParams::from_dto(id, dto)?;
        if params.status == Some(RequestStatus::Pending) {
            return Err(AppError::BadRequest(
                "status must be approved or rejected".to_string(),
            ));
        }

        let request = match RoleChangeRepository::new(self.db).review(params).await {
            Ok(request) => request,
            Err(sea_orm::DbErr::RecordNotFound(_)) => {
                return Err(AppError::NotFound("Request not found".to_string()))
            }
            Err(e) => return Err(e.into()),
        };

        if request.status == RequestStatus::Approved.as_str() {
            UserRepository::new(self.db)
                .set_role(request.user_id, UserRole::from_i32(request.requested_role))
                .await?;

            tracing::info!(
                "Approved request {}, user {} is now a host",
                request.id,
                request.user_id
            );
        }

        Ok(request)
    }

    pub async fn delete(&self, id: i32) -> Result<(), AppError> {
        if !RoleChangeRepository::new(self.db).delete(id).await? {
            return Err(AppError::NotFound("Request not found".to_string()));
        }

        Ok(())
    }
}
