use crate::server::{
    data::{draft::DraftRepository, property::PropertyRepository},
    error::AppError,
    model::{
        property::{merge_fields, validate_fields, CreatePropertyParams, UpdatePropertyParams},
        user::User,
    },
};

use super::{cleanup, DraftService, PublishOutcome};

impl<'a> DraftService<'a> {
    /// Writes a draft to the property it was created from.
    ///
    /// Runs three steps in order. The property update must succeed; deleting the draft and
    /// deleting orphaned media afterwards are reported as warnings when they fail. Only
    /// host-writable fields are applied: identity, moderation flags and reviews stay as
    /// they are on the property.
    ///
    /// # Returns
    /// - `Ok(PublishOutcome)` - Updated property and any follow-up warnings
    /// - `Err(AppError::BadRequest)` - Draft is unlinked or its content is invalid
    /// - `Err(AppError::NotFound)` - Draft or property no longer exists
    /// - `Err(AppError::Forbidden)` - Caller does not own the draft or manage the property
    pub async fn publish_to_existing(
        &self,
        caller: &User,
        id: i32,
    ) -> Result<PublishOutcome, AppError> {
        let draft = self.owned_draft(caller, id).await?;

        let property_id = draft.original_property_id.ok_or_else(|| {
            AppError::BadRequest("Draft is not linked to an existing property".to_string())
        })?;
        let property_repo = PropertyRepository::new(self.db);
        let before = property_repo
            .find_by_id(property_id)
            .await?
            .filter(|property| property.is_active)
            .ok_or_else(|| AppError::NotFound("Original property not found".to_string()))?;

        if !before.can_be_managed_by(caller) {
            return Err(AppError::Forbidden(
                "You are not allowed to manage this property".to_string(),
            ));
        }

        let mut merged = before.fields();
        merge_fields(&mut merged, draft.data.fields.clone());
        validate_fields(&merged)?;

        let property = property_repo
            .update(UpdatePropertyParams {
                id: property_id,
                fields: draft.data.fields,
            })
            .await?;

        let mut warnings = Vec::new();
        self.delete_published_draft(id, &mut warnings).await;

        if self.cleanup_on_publish {
            warnings.extend(
                cleanup::delete_orphaned_media(self.media, &before.fields(), &property.fields())
                    .await,
            );
        }

        tracing::info!(
            "User {} published draft {} to property {}",
            caller.id,
            id,
            property_id
        );

        Ok(PublishOutcome { property, warnings })
    }

    /// Creates a new property owned by the caller from a draft's content.
    ///
    /// Identity and moderation fields carried in the draft are ignored.
    ///
    /// # Returns
    /// - `Ok(PublishOutcome)` - New property and any follow-up warnings
    /// - `Err(AppError::BadRequest)` - A required field is missing or out of range
    /// - `Err(AppError::NotFound)` - No draft with that id
    /// - `Err(AppError::Forbidden)` - Caller does not own the draft
    pub async fn publish_to_new(&self, caller: &User, id: i32) -> Result<PublishOutcome, AppError> {
        let draft = self.owned_draft(caller, id).await?;

        let params = CreatePropertyParams::from_fields(caller.id, draft.data.fields)?;
        let property = PropertyRepository::new(self.db).create(params).await?;

        let mut warnings = Vec::new();
        self.delete_published_draft(id, &mut warnings).await;

        tracing::info!(
            "User {} published draft {} as new property {}",
            caller.id,
            id,
            property.id
        );

        Ok(PublishOutcome { property, warnings })
    }

    async fn delete_published_draft(&self, id: i32, warnings: &mut Vec<String>) {
        match DraftRepository::new(self.db).delete(id).await {
            Ok(true) => {}
            Ok(false) => tracing::debug!("Draft {} was already deleted", id),
            Err(e) => {
                tracing::warn!("Failed to delete published draft {}: {}", id, e);
                warnings.push(format!("Draft {} could not be deleted", id));
            }
        }
    }
}
