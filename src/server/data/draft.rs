//! Property draft data repository for database operations.

use chrono::Utc;
use sea_orm::{
    sea_query::Expr, ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr,
    EntityTrait, QueryFilter, QueryOrder,
};

use crate::{
    model::draft::DraftData,
    server::model::{
        draft::{CreateDraftParams, PropertyDraft},
        encode_json,
    },
};

/// Repository providing database operations for property drafts.
pub struct DraftRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> DraftRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Inserts a new draft, not in review.
    ///
    /// # Arguments
    /// - `params` - Owner, optional linked property and initial draft content
    ///
    /// # Returns
    /// - `Ok(PropertyDraft)` - The created draft
    /// - `Err(DbErr)` - Database or encoding error
    pub async fn create(&self, params: CreateDraftParams) -> Result<PropertyDraft, DbErr> {
        let now = Utc::now();

        let entity = entity::property_draft::ActiveModel {
            original_property_id: ActiveValue::Set(params.original_property_id),
            owner_id: ActiveValue::Set(params.owner_id),
            draft_data: ActiveValue::Set(encode_json("property_draft.draft_data", &params.data)?),
            is_in_review: ActiveValue::Set(false),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        PropertyDraft::from_entity(entity)
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<PropertyDraft>, DbErr> {
        entity::prelude::PropertyDraft::find_by_id(id)
            .one(self.db)
            .await?
            .map(PropertyDraft::from_entity)
            .transpose()
    }

    /// Finds the oldest draft a user holds for a property.
    ///
    /// # Returns
    /// - `Ok(Some(PropertyDraft))` - The owner already has a draft of the property
    /// - `Ok(None)` - No draft by this owner for the property
    /// - `Err(DbErr)` - Database or decoding error
    pub async fn find_by_property_and_owner(
        &self,
        property_id: i32,
        owner_id: i32,
    ) -> Result<Option<PropertyDraft>, DbErr> {
        entity::prelude::PropertyDraft::find()
            .filter(entity::property_draft::Column::OriginalPropertyId.eq(property_id))
            .filter(entity::property_draft::Column::OwnerId.eq(owner_id))
            .order_by_asc(entity::property_draft::Column::Id)
            .one(self.db)
            .await?
            .map(PropertyDraft::from_entity)
            .transpose()
    }

    /// Gets a user's drafts, newest first, optionally filtered by review state.
    pub async fn get_by_owner(
        &self,
        owner_id: i32,
        in_review: Option<bool>,
    ) -> Result<Vec<PropertyDraft>, DbErr> {
        let mut query = entity::prelude::PropertyDraft::find()
            .filter(entity::property_draft::Column::OwnerId.eq(owner_id));

        if let Some(in_review) = in_review {
            query = query.filter(entity::property_draft::Column::IsInReview.eq(in_review));
        }

        query
            .order_by_desc(entity::property_draft::Column::UpdatedAt)
            .order_by_desc(entity::property_draft::Column::Id)
            .all(self.db)
            .await?
            .into_iter()
            .map(PropertyDraft::from_entity)
            .collect()
    }

    /// Replaces the draft content and bumps `updated_at`.
    ///
    /// # Returns
    /// - `Ok(PropertyDraft)` - The updated draft
    /// - `Err(DbErr::RecordNotFound)` - No draft with that id
    pub async fn update_data(&self, id: i32, data: &DraftData) -> Result<PropertyDraft, DbErr> {
        let draft = entity::prelude::PropertyDraft::find_by_id(id)
            .one(self.db)
            .await?
            .ok_or(DbErr::RecordNotFound(format!(
                "Property draft with id {} not found",
                id
            )))?;

        let mut active_model: entity::property_draft::ActiveModel = draft.into();
        active_model.draft_data =
            ActiveValue::Set(encode_json("property_draft.draft_data", data)?);
        active_model.updated_at = ActiveValue::Set(Utc::now());

        PropertyDraft::from_entity(active_model.update(self.db).await?)
    }

    /// Sets the review flag.
    ///
    /// # Returns
    /// - `Ok(true)` - Draft found and updated
    /// - `Ok(false)` - No draft with that id
    pub async fn set_in_review(&self, id: i32, is_in_review: bool) -> Result<bool, DbErr> {
        let result = entity::prelude::PropertyDraft::update_many()
            .col_expr(
                entity::property_draft::Column::IsInReview,
                Expr::value(is_in_review),
            )
            .col_expr(
                entity::property_draft::Column::UpdatedAt,
                Expr::value(Utc::now()),
            )
            .filter(entity::property_draft::Column::Id.eq(id))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }

    /// Deletes a draft.
    ///
    /// # Returns
    /// - `Ok(true)` - Draft deleted
    /// - `Ok(false)` - No draft with that id
    pub async fn delete(&self, id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::PropertyDraft::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }
}
