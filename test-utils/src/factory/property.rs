//! Property factory for creating test property entities.
//!
//! Sub-document columns default to empty JSON documents of the right shape, so the rows
//! decode cleanly into the server's typed property model.

use crate::factory::helpers::next_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};
use serde_json::{json, Value};

/// Factory for creating test properties with customizable fields.
pub struct PropertyFactory<'a> {
    db: &'a DatabaseConnection,
    host_id: i32,
    title: String,
    max_guests: i32,
    price_per_night: f64,
    photos: Value,
    videos: Value,
    bedrooms: Value,
    proof_of_address: Option<String>,
    reviews: Value,
    is_active: bool,
}

impl<'a> PropertyFactory<'a> {
    /// Creates a new PropertyFactory with default values.
    ///
    /// Defaults:
    /// - title: `"Property {id}"`
    /// - max_guests: `4`
    /// - price_per_night: `100.0`
    /// - photos, videos, bedrooms and reviews: empty lists
    /// - is_active: `true`
    ///
    /// # Arguments
    /// - `db` - Database connection for inserting the entity
    /// - `host_id` - Id of the owning user, which must already exist
    pub fn new(db: &'a DatabaseConnection, host_id: i32) -> Self {
        let id = next_id();
        Self {
            db,
            host_id,
            title: format!("Property {}", id),
            max_guests: 4,
            price_per_night: 100.0,
            photos: json!([]),
            videos: json!([]),
            bedrooms: json!([]),
            proof_of_address: None,
            reviews: json!([]),
            is_active: true,
        }
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn max_guests(mut self, max_guests: i32) -> Self {
        self.max_guests = max_guests;
        self
    }

    pub fn price_per_night(mut self, price_per_night: f64) -> Self {
        self.price_per_night = price_per_night;
        self
    }

    /// Sets the raw `photos` JSON list.
    pub fn photos(mut self, photos: Value) -> Self {
        self.photos = photos;
        self
    }

    /// Sets the raw `videos` JSON list.
    pub fn videos(mut self, videos: Value) -> Self {
        self.videos = videos;
        self
    }

    /// Sets the raw `bedrooms` JSON list.
    pub fn bedrooms(mut self, bedrooms: Value) -> Self {
        self.bedrooms = bedrooms;
        self
    }

    pub fn proof_of_address(mut self, url: impl Into<String>) -> Self {
        self.proof_of_address = Some(url.into());
        self
    }

    /// Sets the raw `reviews` JSON list.
    pub fn reviews(mut self, reviews: Value) -> Self {
        self.reviews = reviews;
        self
    }

    pub fn is_active(mut self, is_active: bool) -> Self {
        self.is_active = is_active;
        self
    }

    /// Builds and inserts the property entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::property::Model)` - Created property entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::property::Model, DbErr> {
        let now = Utc::now();
        entity::property::ActiveModel {
            host_id: ActiveValue::Set(self.host_id),
            property_type: ActiveValue::Set(1),
            title: ActiveValue::Set(Some(self.title)),
            markdown_description: ActiveValue::Set(None),
            max_guests: ActiveValue::Set(self.max_guests),
            max_babies: ActiveValue::Set(Some(0)),
            proof_of_address: ActiveValue::Set(self.proof_of_address),
            is_proof_of_address_verified: ActiveValue::Set(None),
            land_use_permit: ActiveValue::Set(None),
            is_land_use_permit_verified: ActiveValue::Set(None),
            width: ActiveValue::Set(10.0),
            length: ActiveValue::Set(20.0),
            check_in: ActiveValue::Set(900),
            check_out: ActiveValue::Set(660),
            min_stay_nights: ActiveValue::Set(1),
            max_stay_nights: ActiveValue::Set(30),
            price_per_night: ActiveValue::Set(self.price_per_night),
            currency: ActiveValue::Set("MXN".to_string()),
            preparation_days_time_between_stays: ActiveValue::Set(None),
            address: ActiveValue::Set(json!({ "city": "Oaxaca", "country": "MX" })),
            amenities: ActiveValue::Set(json!({ "wifi": true })),
            bedrooms: ActiveValue::Set(self.bedrooms),
            kitchens: ActiveValue::Set(json!([])),
            bathrooms: ActiveValue::Set(json!([])),
            photos: ActiveValue::Set(self.photos),
            videos: ActiveValue::Set(self.videos),
            rules: ActiveValue::Set(json!(["No smoking"])),
            reviews: ActiveValue::Set(self.reviews),
            is_active: ActiveValue::Set(self.is_active),
            views: ActiveValue::Set(0),
            is_approved: ActiveValue::Set(false),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a property with default values for a host.
pub async fn create_property(
    db: &DatabaseConnection,
    host_id: i32,
) -> Result<entity::property::Model, DbErr> {
    PropertyFactory::new(db, host_id).build().await
}
