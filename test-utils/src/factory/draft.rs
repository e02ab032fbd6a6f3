//! Property draft factory for creating test draft entities.

use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};
use serde_json::{json, Value};

/// Factory for creating test drafts.
///
/// Drafts start unlinked with an empty document; link them to a property with
/// `original_property_id`.
pub struct DraftFactory<'a> {
    db: &'a DatabaseConnection,
    owner_id: i32,
    original_property_id: Option<i32>,
    draft_data: Value,
    is_in_review: bool,
}

impl<'a> DraftFactory<'a> {
    pub fn new(db: &'a DatabaseConnection, owner_id: i32) -> Self {
        Self {
            db,
            owner_id,
            original_property_id: None,
            draft_data: json!({}),
            is_in_review: false,
        }
    }

    pub fn original_property_id(mut self, property_id: i32) -> Self {
        self.original_property_id = Some(property_id);
        self
    }

    /// Sets the raw `draft_data` JSON document.
    pub fn draft_data(mut self, draft_data: Value) -> Self {
        self.draft_data = draft_data;
        self
    }

    pub fn is_in_review(mut self, is_in_review: bool) -> Self {
        self.is_in_review = is_in_review;
        self
    }

    pub async fn build(self) -> Result<entity::property_draft::Model, DbErr> {
        let now = Utc::now();
        entity::property_draft::ActiveModel {
            original_property_id: ActiveValue::Set(self.original_property_id),
            owner_id: ActiveValue::Set(self.owner_id),
            draft_data: ActiveValue::Set(self.draft_data),
            is_in_review: ActiveValue::Set(self.is_in_review),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates an unlinked, empty draft for an owner.
pub async fn create_draft(
    db: &DatabaseConnection,
    owner_id: i32,
) -> Result<entity::property_draft::Model, DbErr> {
    DraftFactory::new(db, owner_id).build().await
}
