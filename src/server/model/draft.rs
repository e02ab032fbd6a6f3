//! Property draft domain models and parameters.
//!
//! A draft holds a working copy of a property's fields. It is either linked to the
//! property it edits (`original_property_id`) or, when unlinked, authors a new property.

use chrono::{DateTime, Utc};
use sea_orm::DbErr;

use crate::{
    model::draft::{DraftData, PropertyDraftDto, ProtectedFields},
    server::model::{decode_json, property::Property},
};

impl DraftData {
    /// Full snapshot of a property, identity and moderation fields included.
    pub fn snapshot_of(property: &Property) -> Self {
        Self {
            fields: property.fields(),
            protected: ProtectedFields {
                id: Some(property.id),
                host_id: Some(property.host_id),
                is_active: Some(property.is_active),
                views: Some(property.views),
                is_approved: Some(property.is_approved),
                is_proof_of_address_verified: property.is_proof_of_address_verified,
                is_land_use_permit_verified: property.is_land_use_permit_verified,
                created_at: Some(property.created_at),
                updated_at: Some(property.updated_at),
                reviews: Some(property.reviews.clone()),
            },
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct PropertyDraft {
    pub id: i32,
    pub original_property_id: Option<i32>,
    pub owner_id: i32,
    pub data: DraftData,
    pub is_in_review: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl PropertyDraft {
    /// Converts an entity model to a domain model at the repository boundary.
    ///
    /// # Returns
    /// - `Ok(PropertyDraft)` - Draft with decoded `draft_data`
    /// - `Err(DbErr::Json)` - Stored `draft_data` is not a property document
    pub fn from_entity(entity: entity::property_draft::Model) -> Result<Self, DbErr> {
        Ok(Self {
            id: entity.id,
            original_property_id: entity.original_property_id,
            owner_id: entity.owner_id,
            data: decode_json("property_draft.draft_data", entity.draft_data)?,
            is_in_review: entity.is_in_review,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        })
    }

    pub fn is_owned_by(&self, user_id: i32) -> bool {
        self.owner_id == user_id
    }

    pub fn into_dto(self) -> PropertyDraftDto {
        PropertyDraftDto {
            id: self.id,
            original_property_id: self.original_property_id,
            owner_id: self.owner_id,
            draft_data: self.data,
            is_in_review: self.is_in_review,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

#[derive(Debug, Clone)]
pub struct CreateDraftParams {
    pub original_property_id: Option<i32>,
    pub owner_id: i32,
    pub data: DraftData,
}

/// Which drafts of a user to list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DraftReviewFilter {
    All,
    NotInReview,
    InReview,
}

impl DraftReviewFilter {
    pub fn in_review(self) -> Option<bool> {
        match self {
            Self::All => None,
            Self::NotInReview => Some(false),
            Self::InReview => Some(true),
        }
    }
}
