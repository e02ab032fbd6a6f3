use crate::{
    model::{draft::DraftData, property::PropertyFields},
    server::{
        data::draft::DraftRepository,
        error::AppError,
        model::{
            draft::{CreateDraftParams, PropertyDraft},
            user::User,
        },
        service::property::PropertyService,
    },
};

use super::{DraftService, DraftWithStatus};

impl<'a> DraftService<'a> {
    /// Creates a draft holding a snapshot of a property.
    ///
    /// # Returns
    /// - `Ok(PropertyDraft)` - Draft linked to the property, owned by the caller
    /// - `Err(AppError::NotFound)` - No property with that id
    /// - `Err(AppError::Forbidden)` - Caller may not manage the property
    pub async fn create_from_property(
        &self,
        caller: &User,
        property_id: i32,
    ) -> Result<PropertyDraft, AppError> {
        let property = PropertyService::new(self.db)
            .get_managed(caller, property_id)
            .await?;

        let draft = DraftRepository::new(self.db)
            .create(CreateDraftParams {
                original_property_id: Some(property.id),
                owner_id: caller.id,
                data: DraftData::snapshot_of(&property),
            })
            .await?;

        tracing::debug!(
            "User {} opened draft {} of property {}",
            caller.id,
            draft.id,
            property_id
        );

        Ok(draft)
    }

    /// Creates an unlinked draft, optionally seeded with content.
    pub async fn create_empty(
        &self,
        caller: &User,
        initial: Option<PropertyFields>,
    ) -> Result<PropertyDraft, AppError> {
        Ok(DraftRepository::new(self.db)
            .create(CreateDraftParams {
                original_property_id: None,
                owner_id: caller.id,
                data: DraftData {
                    fields: initial.unwrap_or_default(),
                    ..Default::default()
                },
            })
            .await?)
    }

    /// Returns the caller's draft of a property, creating one if none exists.
    ///
    /// Repeated calls return the same draft until it is published.
    pub async fn get_or_create_for_property(
        &self,
        caller: &User,
        property_id: i32,
    ) -> Result<DraftWithStatus, AppError> {
        let existing = DraftRepository::new(self.db)
            .find_by_property_and_owner(property_id, caller.id)
            .await?;

        if let Some(draft) = existing {
            return Ok(DraftWithStatus {
                draft,
                is_new: false,
            });
        }

        Ok(DraftWithStatus {
            draft: self.create_from_property(caller, property_id).await?,
            is_new: true,
        })
    }
}
