//! Property service for listing management.
//!
//! Hosts create and edit their own listings, admins may manage any listing and are the
//! only ones who approve listings and verify their documents. Properties are never hard-deleted.

use sea_orm::DatabaseConnection;

use crate::{
    model::property::PropertyFields,
    server::{
        data::property::PropertyRepository,
        error::AppError,
        model::{
            property::{
                merge_fields, validate_fields, CreatePropertyParams, ModerationParams,
                PaginatedProperties, Property, UpdatePropertyParams,
            },
            user::User,
        },
    },
};

pub struct PropertyService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> PropertyService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a listing owned by the caller.
    ///
    /// # Returns
    /// - `Ok(Property)` - The created property
    /// - `Err(AppError::BadRequest)` - A required field is missing or out of range
    pub async fn create(&self, caller: &User, fields: PropertyFields) -> Result<Property, AppError> {
        let params = CreatePropertyParams::from_fields(caller.id, fields)?;
        let property = PropertyRepository::new(self.db).create(params).await?;

        tracing::info!("User {} created property {}", caller.id, property.id);

        Ok(property)
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Property, AppError> {
        PropertyRepository::new(self.db)
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Property not found".to_string()))
    }

    pub async fn get_active_paginated(
        &self,
        page: u64,
        per_page: u64,
    ) -> Result<PaginatedProperties, AppError> {
        if per_page == 0 {
            return Err(AppError::BadRequest(
                "entries must be greater than zero".to_string(),
            ));
        }

        Ok(PropertyRepository::new(self.db)
            .get_active_paginated(page, per_page)
            .await?)
    }

    /// Loads a property the caller is allowed to manage.
    ///
    /// # Returns
    /// - `Ok(Property)` - Caller is the host or an admin
    /// - `Err(AppError::NotFound)` - No property with that id
    /// - `Err(AppError::Forbidden)` - Caller may not manage the property
    pub async fn get_managed(&self, caller: &User, id: i32) -> Result<Property, AppError> {
        let property = self.get_by_id(id).await?;

        if !property.can_be_managed_by(caller) {
            return Err(AppError::Forbidden(
                "You are not allowed to manage this property".to_string(),
            ));
        }

        Ok(property)
    }

    /// Applies an allow-listed patch to a managed property.
    ///
    /// The patch is validated against the property's current values, so for example a
    /// new `max_stay_nights` cannot drop below the stored `min_stay_nights`.
    pub async fn update(
        &self,
        caller: &User,
        id: i32,
        patch: PropertyFields,
    ) -> Result<Property, AppError> {
        let property = self.get_managed(caller, id).await?;

        let mut merged = property.fields();
        merge_fields(&mut merged, patch.clone());
        validate_fields(&merged)?;

        Ok(PropertyRepository::new(self.db)
            .update(UpdatePropertyParams { id, fields: patch })
            .await?)
    }

    /// Soft-deletes a managed property.
    pub async fn deactivate(&self, caller: &User, id: i32) -> Result<(), AppError> {
        self.get_managed(caller, id).await?;
        PropertyRepository::new(self.db).set_active(id, false).await?;

        tracing::info!("User {} deactivated property {}", caller.id, id);

        Ok(())
    }

    /// Sets approval and document verification flags. Admin only, checked by the caller.
    ///
    /// # Returns
    /// - `Ok(Property)` - The moderated property
    /// - `Err(AppError::BadRequest)` - No flag supplied
    /// - `Err(AppError::NotFound)` - No property with that id
    pub async fn moderate(&self, params: ModerationParams) -> Result<Property, AppError> {
        if params.is_empty() {
            return Err(AppError::BadRequest(
                "No moderation flag supplied".to_string(),
            ));
        }

        let id = params.id;
        if !PropertyRepository::new(self.db).moderate(params).await? {
            return Err(AppError::NotFound("Property not found".to_string()));
        }

        self.get_by_id(id).await
    }
}
