use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct RoleChangeRequestDto {
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

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct SubmitRoleChangeDto {
    pub requested_role: i32,
    pub tax_document: String,
    pub proof_of_residence: String,
    pub criminal_record_certificate: String,
}

#[derive(Debug, Default, Serialize, Deserialize, ToSchema)]
#[serde(default)]
pub struct ReviewRoleChangeDto {
    /// `approved` or `rejected`.
    pub status: Option<String>,
    pub is_tax_document_verified: Option<bool>,
    pub is_proof_of_residence_verified: Option<bool>,
    pub is_criminal_record_certificate_verified: Option<bool>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct RoleChangeResponseDto {
    pub success: bool,
    pub request: RoleChangeRequestDto,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct RoleChangeListDto {
    pub success: bool,
    pub requests: Vec<RoleChangeRequestDto>,
}
