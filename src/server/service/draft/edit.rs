use crate::{
    model::{
        draft::{DraftData, DraftMediaDto},
        property::{PhotoDto, PropertyFields, VideoDto},
    },
    server::{
        data::{draft::DraftRepository, property::PropertyRepository},
        error::AppError,
        model::{
            draft::PropertyDraft,
            property::merge_fields,
            user::User,
        },
    },
};

use super::DraftService;

/// Which media list of a draft a reference belongs to.
enum DraftMediaList {
    Photos,
    Videos,
}

impl DraftMediaList {
    fn parse(media_type: &str) -> Result<Self, AppError> {
        match media_type {
            "image" => Ok(Self::Photos),
            "video" => Ok(Self::Videos),
            _ => Err(AppError::BadRequest("Invalid file type".to_string())),
        }
    }
}

impl<'a> DraftService<'a> {
    /// Merges supplied fields into the draft content.
    ///
    /// Content is not range-checked here; a draft may be saved half-finished and is
    /// validated when published.
    pub async fn update(
        &self,
        caller: &User,
        id: i32,
        patch: PropertyFields,
    ) -> Result<PropertyDraft, AppError> {
        let mut draft = self.owned_draft(caller, id).await?;
        merge_fields(&mut draft.data.fields, patch);

        Ok(DraftRepository::new(self.db)
            .update_data(id, &draft.data)
            .await?)
    }

    /// Resets the draft content to the current state of its property.
    ///
    /// The draft itself is kept.
    ///
    /// # Returns
    /// - `Ok(PropertyDraft)` - Draft holding a fresh snapshot
    /// - `Err(AppError::BadRequest)` - Draft is not linked to a property
    /// - `Err(AppError::NotFound)` - Draft or its property no longer exists
    /// - `Err(AppError::Forbidden)` - Caller does not own the draft
    pub async fn discard(&self, caller: &User, id: i32) -> Result<PropertyDraft, AppError> {
        let draft = self.owned_draft(caller, id).await?;

        let property_id = draft.original_property_id.ok_or_else(|| {
            AppError::BadRequest("Draft is not linked to an existing property".to_string())
        })?;
        let property = PropertyRepository::new(self.db)
            .find_by_id(property_id)
            .await?
            .filter(|property| property.is_active)
            .ok_or_else(|| AppError::NotFound("Original property not found".to_string()))?;

        Ok(DraftRepository::new(self.db)
            .update_data(id, &DraftData::snapshot_of(&property))
            .await?)
    }

    /// Appends a media URL to the draft's photos or videos. Disk is not touched.
    pub async fn add_media(
        &self,
        caller: &User,
        id: i32,
        media: DraftMediaDto,
    ) -> Result<PropertyDraft, AppError> {
        let list = DraftMediaList::parse(&media.media_type)?;
        let mut draft = self.owned_draft(caller, id).await?;

        let fields = &mut draft.data.fields;
        match list {
            DraftMediaList::Photos => fields.photos.get_or_insert_with(Vec::new).push(PhotoDto {
                url: Some(media.url),
                ..Default::default()
            }),
            DraftMediaList::Videos => fields.videos.get_or_insert_with(Vec::new).push(VideoDto {
                url: Some(media.url),
                ..Default::default()
            }),
        }

        Ok(DraftRepository::new(self.db)
            .update_data(id, &draft.data)
            .await?)
    }

    /// Removes every reference with the given URL from the draft's photos or videos.
    pub async fn remove_media(
        &self,
        caller: &User,
        id: i32,
        media: DraftMediaDto,
    ) -> Result<PropertyDraft, AppError> {
        let list = DraftMediaList::parse(&media.media_type)?;
        let mut draft = self.owned_draft(caller, id).await?;

        let url = Some(media.url);
        let fields = &mut draft.data.fields;
        match list {
            DraftMediaList::Photos => {
                if let Some(photos) = fields.photos.as_mut() {
                    photos.retain(|p| p.url != url);
                }
            }
            DraftMediaList::Videos => {
                if let Some(videos) = fields.videos.as_mut() {
                    videos.retain(|v| v.url != url);
                }
            }
        }

        Ok(DraftRepository::new(self.db)
            .update_data(id, &draft.data)
            .await?)
    }

    /// Marks the draft as submitted for review.
    pub async fn submit_for_review(
        &self,
        caller: &User,
        id: i32,
    ) -> Result<PropertyDraft, AppError> {
        self.owned_draft(caller, id).await?;
        DraftRepository::new(self.db).set_in_review(id, true).await?;

        self.owned_draft(caller, id).await
    }
}
