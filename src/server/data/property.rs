//! Property data repository for database operations.
//!
//! Nested sub-documents are encoded into JSON columns on write and decoded into typed
//! structs on read. A property update is a single-row write, so a failed update never
//! leaves the property half-written.

use chrono::Utc;
use sea_orm::{
    sea_query::Expr, ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr,
    EntityTrait, PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::{
    model::property::ReviewDto,
    server::model::{
        encode_json,
        property::{
            CreatePropertyParams, ModerationParams, PaginatedProperties, Property,
            UpdatePropertyParams,
        },
    },
};

pub struct PropertyRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> PropertyRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Inserts a new property. Moderation fields start at their defaults (active, not
    /// approved, documents unverified, zero views, no reviews).
    ///
    /// # Arguments
    /// - `params` - Validated property fields and owning host
    ///
    /// # Returns
    /// - `Ok(Property)` - The created property
    /// - `Err(DbErr)` - Database or encoding error
    pub async fn create(&self, params: CreatePropertyParams) -> Result<Property, DbErr> {
        let now = Utc::now();

        let entity = entity::property::ActiveModel {
            host_id: ActiveValue::Set(params.host_id),
            property_type: ActiveValue::Set(params.property_type),
            title: ActiveValue::Set(params.title),
            markdown_description: ActiveValue::Set(params.markdown_description),
            max_guests: ActiveValue::Set(params.max_guests),
            max_babies: ActiveValue::Set(params.max_babies),
            proof_of_address: ActiveValue::Set(params.proof_of_address),
            is_proof_of_address_verified: ActiveValue::Set(None),
            land_use_permit: ActiveValue::Set(params.land_use_permit),
            is_land_use_permit_verified: ActiveValue::Set(None),
            width: ActiveValue::Set(params.width),
            length: ActiveValue::Set(params.length),
            check_in: ActiveValue::Set(params.check_in),
            check_out: ActiveValue::Set(params.check_out),
            min_stay_nights: ActiveValue::Set(params.min_stay_nights),
            max_stay_nights: ActiveValue::Set(params.max_stay_nights),
            price_per_night: ActiveValue::Set(params.price_per_night),
            currency: ActiveValue::Set(params.currency),
            preparation_days_time_between_stays: ActiveValue::Set(
                params.preparation_days_time_between_stays,
            ),
            address: ActiveValue::Set(encode_json("property.address", &params.address)?),
            amenities: ActiveValue::Set(encode_json("property.amenities", &params.amenities)?),
            bedrooms: ActiveValue::Set(encode_json("property.bedrooms", &params.bedrooms)?),
            kitchens: ActiveValue::Set(encode_json("property.kitchens", &params.kitchens)?),
            bathrooms: ActiveValue::Set(encode_json("property.bathrooms", &params.bathrooms)?),
            photos: ActiveValue::Set(encode_json("property.photos", &params.photos)?),
            videos: ActiveValue::Set(encode_json("property.videos", &params.videos)?),
            rules: ActiveValue::Set(encode_json("property.rules", &params.rules)?),
            reviews: ActiveValue::Set(serde_json::json!([])),
            is_active: ActiveValue::Set(true),
            views: ActiveValue::Set(0),
            is_approved: ActiveValue::Set(false),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Property::from_entity(entity)
    }

    /// Finds a property by id regardless of its active flag.
    ///
    /// # Returns
    /// - `Ok(Some(Property))` - Property found
    /// - `Ok(None)` - No property with that id
    /// - `Err(DbErr)` - Database or decoding error
    pub async fn find_by_id(&self, id: i32) -> Result<Option<Property>, DbErr> {
        entity::prelude::Property::find_by_id(id)
            .one(self.db)
            .await?
            .map(Property::from_entity)
            .transpose()
    }

    /// Gets active properties, newest first, with pagination.
    pub async fn get_active_paginated(
        &self,
        page: u64,
        per_page: u64,
    ) -> Result<PaginatedProperties, DbErr> {
        let paginator = entity::prelude::Property::find()
            .filter(entity::property::Column::IsActive.eq(true))
            .order_by_desc(entity::property::Column::CreatedAt)
            .order_by_desc(entity::property::Column::Id)
            .paginate(self.db, per_page);

        let total = paginator.num_items().await?;
        let properties = paginator
            .fetch_page(page)
            .await?
            .into_iter()
            .map(Property::from_entity)
            .collect::<Result<Vec<_>, _>>()?;

        Ok(PaginatedProperties {
            properties,
            total,
            page,
            per_page,
        })
    }

    /// Gets every property carrying at least one review by the user.
    pub async fn get_reviewed_by(&self, user_id: i32) -> Result<Vec<Property>, DbErr> {
        let properties = entity::prelude::Property::find()
            .order_by_asc(entity::property::Column::Id)
            .all(self.db)
            .await?
            .into_iter()
            .map(Property::from_entity)
            .collect::<Result<Vec<_>, _>>()?;

        Ok(properties
            .into_iter()
            .filter(|p| p.reviews.iter().any(|r| r.user_id == user_id))
            .collect())
    }

    /// Applies every supplied host-writable field and bumps `updated_at`.
    ///
    /// Identity and moderation columns are never touched by this method.
    ///
    /// # Returns
    /// - `Ok(Property)` - The updated property
    /// - `Err(DbErr::RecordNotFound)` - No property with that id
    /// - `Err(DbErr)` - Other database or encoding error
    pub async fn update(&self, params: UpdatePropertyParams) -> Result<Property, DbErr> {
        let property = entity::prelude::Property::find_by_id(params.id)
            .one(self.db)
            .await?
            .ok_or(DbErr::RecordNotFound(format!(
                "Property with id {} not found",
                params.id
            )))?;

        let fields = params.fields;
        let mut active_model: entity::property::ActiveModel = property.into();

        if let Some(property_type) = fields.property_type {
            active_model.property_type = ActiveValue::Set(property_type);
        }
        if let Some(title) = fields.title {
            active_model.title = ActiveValue::Set(Some(title));
        }
        if let Some(description) = fields.markdown_description {
            active_model.markdown_description = ActiveValue::Set(Some(description));
        }
        if let Some(max_guests) = fields.max_guests {
            active_model.max_guests = ActiveValue::Set(max_guests);
        }
        if let Some(max_babies) = fields.max_babies {
            active_model.max_babies = ActiveValue::Set(Some(max_babies));
        }
        if let Some(proof) = fields.proof_of_address {
            active_model.proof_of_address = ActiveValue::Set(Some(proof));
        }
        if let Some(permit) = fields.land_use_permit {
            active_model.land_use_permit = ActiveValue::Set(Some(permit));
        }
        if let Some(width) = fields.width {
            active_model.width = ActiveValue::Set(width);
        }
        if let Some(length) = fields.length {
            active_model.length = ActiveValue::Set(length);
        }
        if let Some(check_in) = fields.check_in {
            active_model.check_in = ActiveValue::Set(check_in);
        }
        if let Some(check_out) = fields.check_out {
            active_model.check_out = ActiveValue::Set(check_out);
        }
        if let Some(nights) = fields.min_stay_nights {
            active_model.min_stay_nights = ActiveValue::Set(nights);
        }
        if let Some(nights) = fields.max_stay_nights {
            active_model.max_stay_nights = ActiveValue::Set(nights);
        }
        if let Some(price) = fields.price_per_night {
            active_model.price_per_night = ActiveValue::Set(price);
        }
        if let Some(currency) = fields.currency {
            active_model.currency = ActiveValue::Set(currency);
        }
        if let Some(days) = fields.preparation_days_time_between_stays {
            active_model.preparation_days_time_between_stays = ActiveValue::Set(Some(days));
        }
        if let Some(address) = fields.address {
            active_model.address = ActiveValue::Set(encode_json("property.address", &address)?);
        }
        if let Some(amenities) = fields.amenities {
            active_model.amenities =
                ActiveValue::Set(encode_json("property.amenities", &amenities)?);
        }
        if let Some(bedrooms) = fields.bedrooms {
            active_model.bedrooms = ActiveValue::Set(encode_json("property.bedrooms", &bedrooms)?);
        }
        if let Some(kitchens) = fields.kitchens {
            active_model.kitchens = ActiveValue::Set(encode_json("property.kitchens", &kitchens)?);
        }
        if let Some(bathrooms) = fields.bathrooms {
            active_model.bathrooms =
                ActiveValue::Set(encode_json("property.bathrooms", &bathrooms)?);
        }
        if let Some(photos) = fields.photos {
            active_model.photos = ActiveValue::Set(encode_json("property.photos", &photos)?);
        }
        if let Some(videos) = fields.videos {
            active_model.videos = ActiveValue::Set(encode_json("property.videos", &videos)?);
        }
        if let Some(rules) = fields.rules {
            active_model.rules = ActiveValue::Set(encode_json("property.rules", &rules)?);
        }
        active_model.updated_at = ActiveValue::Set(Utc::now());

        Property::from_entity(active_model.update(self.db).await?)
    }

    /// Replaces the embedded review list.
    pub async fn set_reviews(&self, id: i32, reviews: &[ReviewDto]) -> Result<(), DbErr> {
        entity::prelude::Property::update_many()
            .col_expr(
                entity::property::Column::Reviews,
                Expr::value(encode_json("property.reviews", &reviews)?),
            )
            .filter(entity::property::Column::Id.eq(id))
            .exec(self.db)
            .await?;

        Ok(())
    }

    /// Sets the active flag. Properties are never hard-deleted.
    ///
    /// # Returns
    /// - `Ok(true)` - Property found and updated
    /// - `Ok(false)` - No property with that id
    pub async fn set_active(&self, id: i32, is_active: bool) -> Result<bool, DbErr> {
        let result = entity::prelude::Property::update_many()
            .col_expr(entity::property::Column::IsActive, Expr::value(is_active))
            .col_expr(entity::property::Column::UpdatedAt, Expr::value(Utc::now()))
            .filter(entity::property::Column::Id.eq(id))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }

    /// Sets the supplied approval and document verification flags.
    ///
    /// # Returns
    /// - `Ok(true)` - Property found and updated
    /// - `Ok(false)` - No property with that id
    pub async fn moderate(&self, params: ModerationParams) -> Result<bool, DbErr> {
        let mut update = entity::prelude::Property::update_many()
            .col_expr(entity::property::Column::UpdatedAt, Expr::value(Utc::now()));
        if let Some(approved) = params.is_approved {
            update = update.col_expr(entity::property::Column::IsApproved, Expr::value(approved));
        }
        if let Some(verified) = params.is_proof_of_address_verified {
            update = update.col_expr(
                entity::property::Column::IsProofOfAddressVerified,
                Expr::value(Some(verified)),
            );
        }
        if let Some(verified) = params.is_land_use_permit_verified {
            update = update.col_expr(
                entity::property::Column::IsLandUsePermitVerified,
                Expr::value(Some(verified)),
            );
        }

        let result = update
            .filter(entity::property::Column::Id.eq(params.id))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }
}
