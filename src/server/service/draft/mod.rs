//! Property drafts.
//!
//! A draft lets a user stage edits to a property without touching the live listing until
//! they publish. This module provides the `DraftService`, organized by concern:
//! - `create` - Drafts from a property, empty drafts and get-or-create
//! - `edit` - Content updates, discard, media references and review submission
//! - `publish` - Writing a draft to its property or to a new one
//! - `cleanup` - Deleting media a published draft no longer references
//!
//! Every operation on an existing draft first checks that the caller owns it.

pub mod cleanup;
mod create;
mod edit;
mod publish;

use sea_orm::DatabaseConnection;

use crate::server::{
    data::draft::DraftRepository,
    error::AppError,
    model::{
        draft::{DraftReviewFilter, PropertyDraft},
        property::Property,
        user::User,
    },
    storage::MediaStore,
};

/// A draft returned by get-or-create, with whether it was created by the call.
#[derive(Debug, Clone)]
pub struct DraftWithStatus {
    pub draft: PropertyDraft,
    pub is_new: bool,
}

/// Result of a publish.
///
/// `warnings` lists follow-up steps that failed after the property was written. The
/// property itself is always persisted when an outcome is returned.
#[derive(Debug, Clone)]
pub struct PublishOutcome {
    pub property: Property,
    pub warnings: Vec<String>,
}

pub struct DraftService<'a> {
    db: &'a DatabaseConnection,
    media: &'a MediaStore,
    /// Delete media dropped by a draft when it is published to its property.
    cleanup_on_publish: bool,
}

impl<'a> DraftService<'a> {
    pub fn new(db: &'a DatabaseConnection, media: &'a MediaStore, cleanup_on_publish: bool) -> Self {
        Self {
            db,
            media,
            cleanup_on_publish,
        }
    }

    /// Loads a draft and checks that the caller owns it.
    ///
    /// # Returns
    /// - `Ok(PropertyDraft)` - Draft owned by the caller
    /// - `Err(AppError::NotFound)` - No draft with that id
    /// - `Err(AppError::Forbidden)` - Draft belongs to someone else
    async fn owned_draft(&self, caller: &User, id: i32) -> Result<PropertyDraft, AppError> {
        let draft = DraftRepository::new(self.db)
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Draft not found".to_string()))?;

        if !draft.is_owned_by(caller.id) {
            return Err(AppError::Forbidden(
                "You do not have access to this draft".to_string(),
            ));
        }

        Ok(draft)
    }

    pub async fn get_by_id(&self, caller: &User, id: i32) -> Result<PropertyDraft, AppError> {
        self.owned_draft(caller, id).await
    }

    /// Lists the caller's drafts, newest first.
    pub async fn list_by_owner(
        &self,
        caller: &User,
        filter: DraftReviewFilter,
    ) -> Result<Vec<PropertyDraft>, AppError> {
        Ok(DraftRepository::new(self.db)
            .get_by_owner(caller.id, filter.in_review())
            .await?)
    }
}
