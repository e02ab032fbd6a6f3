use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::model::property::{PropertyDto, PropertyFields, ReviewDto};

/// Identity and moderation fields carried in a draft snapshot.
///
/// These are copied from the property when the draft is created so the client sees a
/// complete document, but they are never written back on publish.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(default)]
pub struct ProtectedFields {
    pub id: Option<i32>,
    pub host_id: Option<i32>,
    pub is_active: Option<bool>,
    pub views: Option<i64>,
    pub is_approved: Option<bool>,
    pub is_proof_of_address_verified: Option<bool>,
    pub is_land_use_permit_verified: Option<bool>,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
    pub reviews: Option<Vec<ReviewDto>>,
}

/// Working copy of a property held by a draft.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct DraftData {
    #[serde(flatten)]
    pub fields: PropertyFields,
    #[serde(flatten)]
    pub protected: ProtectedFields,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct PropertyDraftDto {
    pub id: i32,
    pub original_property_id: Option<i32>,
    pub owner_id: i32,
    pub draft_data: DraftData,
    pub is_in_review: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Default, Serialize, Deserialize, ToSchema)]
pub struct CreateEmptyDraftDto {
    #[serde(default)]
    pub draft_data: Option<PropertyFields>,
}

/// Fields merged into a draft's content.
///
/// The fields must be wrapped in `draft_data`; a bare field object is rejected rather
/// than read as an empty edit.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(deny_unknown_fields)]
pub struct UpdateDraftDto {
    pub draft_data: PropertyFields,
}

/// Media reference added to or removed from a draft.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct DraftMediaDto {
    /// `image` or `video`.
    #[serde(rename = "type")]
    pub media_type: String,
    pub url: String,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct DraftResponseDto {
    pub success: bool,
    pub draft: PropertyDraftDto,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct GetOrCreateDraftDto {
    pub success: bool,
    pub draft: PropertyDraftDto,
    #[serde(rename = "isNew")]
    pub is_new: bool,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct DraftListDto {
    pub success: bool,
    pub drafts: Vec<PropertyDraftDto>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct PublishDraftDto {
    pub success: bool,
    pub property: PropertyDto,
    #[serde(rename = "propertyId")]
    pub property_id: i32,
    /// Follow-up steps that failed after the property was written.
    pub warnings: Vec<String>,
}
