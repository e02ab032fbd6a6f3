//! Role-change request data repository for database operations.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter, QueryOrder,
};

use crate::server::model::role_change::{
    CreateRoleChangeParams, RequestStatus, ReviewRoleChangeParams, RoleChangeRequest,
};

pub struct RoleChangeRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> RoleChangeRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Inserts a new pending request with unreviewed documents.
    pub async fn create(&self, params: CreateRoleChangeParams) -> Result<RoleChangeRequest, DbErr> {
        let now = Utc::now();

        let entity = entity::role_change_request::ActiveModel {
            user_id: ActiveValue::Set(params.user_id),
            requested_role: ActiveValue::Set(params.requested_role),
            status: ActiveValue::Set(RequestStatus::Pending.as_str().to_string()),
            tax_document: ActiveValue::Set(params.tax_document),
            is_tax_document_verified: ActiveValue::Set(None),
            proof_of_residence: ActiveValue::Set(params.proof_of_residence),
            is_proof_of_residence_verified: ActiveValue::Set(None),
            criminal_record_certificate: ActiveValue::Set(params.criminal_record_certificate),
            is_criminal_record_certificate_verified: ActiveValue::Set(None),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(RoleChangeRequest::from_entity(entity))
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<RoleChangeRequest>, DbErr> {
        Ok(entity::prelude::RoleChangeRequest::find_by_id(id)
            .one(self.db)
            .await?
            .map(RoleChangeRequest::from_entity))
    }

    /// Finds the user's pending request, if any.
    pub async fn find_pending_by_user(
        &self,
        user_id: i32,
    ) -> Result<Option<RoleChangeRequest>, DbErr> {
        Ok(entity::prelude::RoleChangeRequest::find()
            .filter(entity::role_change_request::Column::UserId.eq(user_id))
            .filter(
                entity::role_change_request::Column::Status.eq(RequestStatus::Pending.as_str()),
            )
            .one(self.db)
            .await?
            .map(RoleChangeRequest::from_entity))
    }

    /// Gets every request, newest first.
    pub async fn get_all(&self) -> Result<Vec<RoleChangeRequest>, DbErr> {
        Ok(entity::prelude::RoleChangeRequest::find()
            .order_by_desc(entity::role_change_request::Column::CreatedAt)
            .order_by_desc(entity::role_change_request::Column::Id)
            .all(self.db)
            .await?
            .into_iter()
            .map(RoleChangeRequest::from_entity)
            .collect())
    }

    /// Records an admin review of the request's status and documents.
    ///
    /// # Returns
    /// - `Ok(RoleChangeRequest)` - The updated request
    /// - `Err(DbErr::RecordNotFound)` - No request with that id
    pub async fn review(&self, params: ReviewRoleChangeParams) -> Result<RoleChangeRequest, DbErr> {
        let request = entity::prelude::RoleChangeRequest::find_by_id(params.id)
            .one(self.db)
            .await?
            .ok_or(DbErr::RecordNotFound(format!(
                "Role change request with id {} not found",
                params.id
            )))?;

        let mut active_model: entity::role_change_request::ActiveModel = request.into();
        if let Some(status) = params.status {
            active_model.status = ActiveValue::Set(status.as_str().to_string());
        }
        if let Some(verified) = params.is_tax_document_verified {
            active_model.is_tax_document_verified = ActiveValue::Set(Some(verified));
        }
        if let Some(verified) = params.is_proof_of_residence_verified {
            active_model.is_proof_of_residence_verified = ActiveValue::Set(Some(verified));
        }
        if let Some(verified) = params.is_criminal_record_certificate_verified {
            active_model.is_criminal_record_certificate_verified = ActiveValue::Set(Some(verified));
        }
        active_model.updated_at = ActiveValue::Set(Utc::now());

        Ok(RoleChangeRequest::from_entity(
            active_model.update(self.db).await?,
        ))
    }

    pub async fn delete(&self, id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::RoleChangeRequest::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }
}
