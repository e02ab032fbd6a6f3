//! Role-change request domain models and parameters.

use chrono::{DateTime, Utc};

use crate::{
    model::role_change::{ReviewRoleChangeDto, RoleChangeRequestDto},
    server::error::AppError,
};

/// Lifecycle of a role-change request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequestStatus {
    Pending,
    Approved,
    Rejected,
}

impl RequestStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Approved => "approved",
            Self::Rejected => "rejected",
        }
    }

    pub fn parse(value: &str) -> Result<Self, AppError> {
        match value {
            "pending" => Ok(Self::Pending),
            "approved" => Ok(Self::Approved),
            "rejected" => Ok(Self::Rejected),
            other => Err(AppError::BadRequest(format!(
                "Unknown request status: {}",
                other
            ))),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct RoleChangeRequest {
    pub id: i32,
    pub user_id: i32,
    pub requested_role: i32,
    pub status: String,
    pub tax_document: String,
    pub is_tax_document_verified: Option<bool>,
    pub proof_of_residence: String,
    pub is_proof_of_residence_verified: Option<bool>,
    pub criminal_record_certificate: String,
    pub is_criminal_record_certificate_verified: Option<bool>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl RoleChangeRequest {
    pub fn from_entity(entity: entity::role_change_request::Model) -> Self {
        Self {
            id: entity.id,
            user_id: entity.user_id,
            requested_role: entity.requested_role,
            status: entity.status,
            tax_document: entity.tax_document,
            is_tax_document_verified: entity.is_tax_document_verified,
            proof_of_residence: entity.proof_of_residence,
            is_proof_of_residence_verified: entity.is_proof_of_residence_verified,
            criminal_record_certificate: entity.criminal_record_certificate,
            is_criminal_record_certificate_verified: entity
                .is_criminal_record_certificate_verified,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        }
    }

    pub fn into_dto(self) -> RoleChangeRequestDto {
        RoleChangeRequestDto {
            id: self.id,
            user_id: self.user_id,
            requested_role: self.requested_role,
            status: self.status,
            tax_document: self.tax_document,
            is_tax_document_verified: self.is_tax_document_verified,
            proof_of_residence: self.proof_of_residence,
            is_proof_of_residence_verified: self.is_proof_of_residence_verified,
            criminal_record_certificate: self.criminal_record_certificate,
            is_criminal_record_certificate_verified: self.is_criminal_record_certificate_verified,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

#[derive(Debug, Clone)]
pub struct CreateRoleChangeParams {
    pub user_id: i32,
    pub requested_role: i32,
    pub tax_document: String,
    pub proof_of_residence: String,
    pub criminal_record_certificate: String,
}

#[derive(Debug, Clone, Default)]
pub struct ReviewRoleChangeParams {
    pub id: i32,
    pub status: Option<RequestStatus>,
    pub is_tax_document_verified: Option<bool>,
    pub is_proof_of_residence_verified: Option<bool>,
    pub is_criminal_record_certificate_verified: Option<bool>,
}

impl ReviewRoleChangeParams {
    pub fn from_dto(id: i32, dto: ReviewRoleChangeDto) -> Result<Self, AppError> {
        let status = dto.status.as_deref().map(RequestStatus::parse).transpose()?;

        Ok(Self {
            id,
            status,
            is_tax_document_verified: dto.is_tax_document_verified,
            is_proof_of_residence_verified: dto.is_proof_of_residence_verified,
            is_criminal_record_certificate_verified: dto.is_criminal_record_certificate_verified,
        })
    }
}
