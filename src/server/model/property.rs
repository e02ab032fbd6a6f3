//! Property domain models and parameters.
//!
//! A property owns its nested sub-documents (address, amenities, rooms, media, rules and
//! reviews). They are stored as JSON columns and decoded here at the repository boundary.

use chrono::{DateTime, Utc};
use sea_orm::DbErr;

use crate::{
    model::{
        property::{
            AddressDto, AmenitiesDto, BathroomDto, BedroomDto, KitchenDto, PaginatedPropertiesDto,
            PhotoDto, PropertyDto, PropertyFields, ReviewDto, VideoDto,
        },
        user::UserReviewDto,
    },
    server::{
        error::AppError,
        model::{decode_json, user::User},
    },
};

const MINUTES_PER_DAY: i32 = 1440;

#[derive(Debug, Clone, PartialEq)]
pub struct Property {
    pub id: i32,
    pub host_id: i32,
    pub property_type: i32,
    pub title: Option<String>,
    pub markdown_description: Option<String>,
    pub max_guests: i32,
    pub max_babies: Option<i32>,
    pub proof_of_address: Option<String>,
    pub is_proof_of_address_verified: Option<bool>,
    pub land_use_permit: Option<String>,
    pub is_land_use_permit_verified: Option<bool>,
    pub bedrooms: Vec<BedroomDto>,
    pub kitchens: Vec<KitchenDto>,
    pub bathrooms: Vec<BathroomDto>,
    pub width: f64,
    pub length: f64,
    pub address: AddressDto,
    pub photos: Vec<PhotoDto>,
    pub videos: Vec<VideoDto>,
    pub amenities: AmenitiesDto,
    pub check_in: i32,
    pub check_out: i32,
    pub min_stay_nights: i32,
    pub max_stay_nights: i32,
    pub price_per_night: f64,
    pub currency: String,
    pub rules: Vec<String>,
    pub preparation_days_time_between_stays: Option<i32>,
    pub reviews: Vec<ReviewDto>,
    pub is_active: bool,
    pub views: i64,
    pub is_approved: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Property {
    /// Converts an entity model to a domain model at the repository boundary.
    ///
    /// # Arguments
    /// - `entity` - Property row with its JSON sub-document columns
    ///
    /// # Returns
    /// - `Ok(Property)` - Property with decoded sub-documents
    /// - `Err(DbErr::Json)` - A JSON column did not match its sub-document shape
    pub fn from_entity(entity: entity::property::Model) -> Result<Self, DbErr> {
        Ok(Self {
            id: entity.id,
            host_id: entity.host_id,
            property_type: entity.property_type,
            title: entity.title,
            markdown_description: entity.markdown_description,
            max_guests: entity.max_guests,
            max_babies: entity.max_babies,
            proof_of_address: entity.proof_of_address,
            is_proof_of_address_verified: entity.is_proof_of_address_verified,
            land_use_permit: entity.land_use_permit,
            is_land_use_permit_verified: entity.is_land_use_permit_verified,
            bedrooms: decode_json("property.bedrooms", entity.bedrooms)?,
            kitchens: decode_json("property.kitchens", entity.kitchens)?,
            bathrooms: decode_json("property.bathrooms", entity.bathrooms)?,
            width: entity.width,
            length: entity.length,
            address: decode_json("property.address", entity.address)?,
            photos: decode_json("property.photos", entity.photos)?,
            videos: decode_json("property.videos", entity.videos)?,
            amenities: decode_json("property.amenities", entity.amenities)?,
            check_in: entity.check_in,
            check_out: entity.check_out,
            min_stay_nights: entity.min_stay_nights,
            max_stay_nights: entity.max_stay_nights,
            price_per_night: entity.price_per_night,
            currency: entity.currency,
            rules: decode_json("property.rules", entity.rules)?,
            preparation_days_time_between_stays: entity.preparation_days_time_between_stays,
            reviews: decode_json("property.reviews", entity.reviews)?,
            is_active: entity.is_active,
            views: entity.views,
            is_approved: entity.is_approved,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        })
    }

    /// Snapshot of every host-writable field.
    pub fn fields(&self) -> PropertyFields {
        PropertyFields {
            property_type: Some(self.property_type),
            title: self.title.clone(),
            markdown_description: self.markdown_description.clone(),
            max_guests: Some(self.max_guests),
            max_babies: self.max_babies,
            proof_of_address: self.proof_of_address.clone(),
            land_use_permit: self.land_use_permit.clone(),
            bedrooms: Some(self.bedrooms.clone()),
            kitchens: Some(self.kitchens.clone()),
            bathrooms: Some(self.bathrooms.clone()),
            width: Some(self.width),
            length: Some(self.length),
            address: Some(self.address.clone()),
            photos: Some(self.photos.clone()),
            videos: Some(self.videos.clone()),
            amenities: Some(self.amenities.clone()),
            check_in: Some(self.check_in),
            check_out: Some(self.check_out),
            min_stay_nights: Some(self.min_stay_nights),
            max_stay_nights: Some(self.max_stay_nights),
            price_per_night: Some(self.price_per_night),
            currency: Some(self.currency.clone()),
            rules: Some(self.rules.clone()),
            preparation_days_time_between_stays: self.preparation_days_time_between_stays,
        }
    }

    /// Hosts manage their own listings; admins manage every listing.
    pub fn can_be_managed_by(&self, user: &User) -> bool {
        self.host_id == user.id || user.is_admin()
    }

    pub fn into_dto(self) -> PropertyDto {
        PropertyDto {
            id: self.id,
            host_id: self.host_id,
            fields: self.fields(),
            reviews: self.reviews,
            is_proof_of_address_verified: self.is_proof_of_address_verified,
            is_land_use_permit_verified: self.is_land_use_permit_verified,
            is_active: self.is_active,
            views: self.views,
            is_approved: self.is_approved,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

/// Applies every supplied field of `patch` over `base`.
///
/// Fields absent from the patch keep their current value; lists and nested documents are
/// replaced wholesale.
pub fn merge_fields(base: &mut PropertyFields, patch: PropertyFields) {
    macro_rules! take {
        ($($field:ident),* $(,)?) => {
            $(
                if patch.$field.is_some() {
                    base.$field = patch.$field;
                }
            )*
        };
    }

    take!(
        property_type,
        title,
        markdown_description,
        max_guests,
        max_babies,
        proof_of_address,
        land_use_permit,
        bedrooms,
        kitchens,
        bathrooms,
        width,
        length,
        address,
        photos,
        videos,
        amenities,
        check_in,
        check_out,
        min_stay_nights,
        max_stay_nights,
        price_per_night,
        currency,
        rules,
        preparation_days_time_between_stays,
    );
}

/// Checks the ranges of every supplied field.
///
/// # Returns
/// - `Ok(())` - All supplied values are in range
/// - `Err(AppError::BadRequest)` - The first out-of-range field
pub fn validate_fields(fields: &PropertyFields) -> Result<(), AppError> {
    fn bad(message: &str) -> Result<(), AppError> {
        Err(AppError::BadRequest(message.to_string()))
    }

    if fields.max_guests.is_some_and(|v| v < 1) {
        return bad("max_guests must be at least 1");
    }
    if fields.max_babies.is_some_and(|v| v < 0) {
        return bad("max_babies cannot be negative");
    }
    if fields.width.is_some_and(|v| v < 0.0) || fields.length.is_some_and(|v| v < 0.0) {
        return bad("width and length cannot be negative");
    }
    for minutes in [fields.check_in, fields.check_out].into_iter().flatten() {
        if !(0..=MINUTES_PER_DAY).contains(&minutes) {
            return bad("check_in and check_out must be minutes from midnight (0-1440)");
        }
    }
    if fields.min_stay_nights.is_some_and(|v| v < 1) {
        return bad("min_stay_nights must be at least 1");
    }
    if let (Some(min), Some(max)) = (fields.min_stay_nights, fields.max_stay_nights) {
        if max < min {
            return bad("max_stay_nights cannot be less than min_stay_nights");
        }
    }
    if fields.price_per_night.is_some_and(|v| v < 0.0) {
        return bad("price_per_night cannot be negative");
    }
    if fields
        .preparation_days_time_between_stays
        .is_some_and(|v| v < 0)
    {
        return bad("preparation_days_time_between_stays cannot be negative");
    }

    let bathrooms = fields
        .bathrooms
        .iter()
        .flatten()
        .chain(fields.bedrooms.iter().flatten().filter_map(|b| b.bathroom.as_ref()));
    for bathroom in bathrooms {
        if bathroom.privacy.is_some_and(|p| !(1..=3).contains(&p)) {
            return bad("bathroom privacy must be between 1 and 3");
        }
    }

    Ok(())
}

/// Validated input for creating a property.
#[derive(Debug, Clone)]
pub struct CreatePropertyParams {
    pub host_id: i32,
    pub property_type: i32,
    pub title: Option<String>,
    pub markdown_description: Option<String>,
    pub max_guests: i32,
    pub max_babies: Option<i32>,
    pub proof_of_address: Option<String>,
    pub land_use_permit: Option<String>,
    pub bedrooms: Vec<BedroomDto>,
    pub kitchens: Vec<KitchenDto>,
    pub bathrooms: Vec<BathroomDto>,
    pub width: f64,
    pub length: f64,
    pub address: AddressDto,
    pub photos: Vec<PhotoDto>,
    pub videos: Vec<VideoDto>,
    pub amenities: AmenitiesDto,
    pub check_in: i32,
    pub check_out: i32,
    pub min_stay_nights: i32,
    pub max_stay_nights: i32,
    pub price_per_night: f64,
    pub currency: String,
    pub rules: Vec<String>,
    pub preparation_days_time_between_stays: Option<i32>,
}

impl CreatePropertyParams {
    /// Builds create params from host-writable fields.
    ///
    /// # Arguments
    /// - `host_id` - User who will own the property
    /// - `fields` - Supplied fields
    ///
    /// # Returns
    /// - `Ok(CreatePropertyParams)` - All required fields present and in range
    /// - `Err(AppError::BadRequest)` - A required field is missing or out of range
    pub fn from_fields(host_id: i32, fields: PropertyFields) -> Result<Self, AppError> {
        validate_fields(&fields)?;

        fn require<T>(value: Option<T>, name: &str) -> Result<T, AppError> {
            value.ok_or_else(|| AppError::BadRequest(format!("Missing required field: {}", name)))
        }

        Ok(Self {
            host_id,
            property_type: require(fields.property_type, "type")?,
            title: fields.title,
            markdown_description: fields.markdown_description,
            max_guests: require(fields.max_guests, "max_guests")?,
            max_babies: fields.max_babies,
            proof_of_address: fields.proof_of_address,
            land_use_permit: fields.land_use_permit,
            bedrooms: fields.bedrooms.unwrap_or_default(),
            kitchens: fields.kitchens.unwrap_or_default(),
            bathrooms: fields.bathrooms.unwrap_or_default(),
            width: require(fields.width, "width")?,
            length: require(fields.length, "length")?,
            address: fields.address.unwrap_or_default(),
            photos: fields.photos.unwrap_or_default(),
            videos: fields.videos.unwrap_or_default(),
            amenities: fields.amenities.unwrap_or_default(),
            check_in: require(fields.check_in, "check_in")?,
            check_out: require(fields.check_out, "check_out")?,
            min_stay_nights: require(fields.min_stay_nights, "min_stay_nights")?,
            max_stay_nights: require(fields.max_stay_nights, "max_stay_nights")?,
            price_per_night: require(fields.price_per_night, "price_per_night")?,
            currency: require(fields.currency, "currency")?,
            rules: fields.rules.unwrap_or_default(),
            preparation_days_time_between_stays: fields.preparation_days_time_between_stays,
        })
    }
}

/// Host-writable changes to an existing property. `None` fields are left untouched.
#[derive(Debug, Clone)]
pub struct UpdatePropertyParams {
    pub id: i32,
    pub fields: PropertyFields,
}

/// Admin-only moderation flags. `None` fields are left untouched.
#[derive(Debug, Clone, Default)]
pub struct ModerationParams {
    pub id: i32,
    pub is_approved: Option<bool>,
    pub is_proof_of_address_verified: Option<bool>,
    pub is_land_use_permit_verified: Option<bool>,
}

impl ModerationParams {
    pub fn is_empty(&self) -> bool {
        self.is_approved.is_none()
            && self.is_proof_of_address_verified.is_none()
            && self.is_land_use_permit_verified.is_none()
    }
}

#[derive(Debug, Clone)]
pub struct PaginatedProperties {
    pub properties: Vec<Property>,
    pub total: u64,
    pub page: u64,
    pub per_page: u64,
}

impl PaginatedProperties {
    pub fn into_dto(self) -> PaginatedPropertiesDto {
        PaginatedPropertiesDto {
            success: true,
            properties: self.properties.into_iter().map(Property::into_dto).collect(),
            total: self.total,
            page: self.page,
            entries: self.per_page,
        }
    }
}

/// A review together with the property it was written for.
#[derive(Debug, Clone, PartialEq)]
pub struct UserReview {
    pub property_id: i32,
    pub review: ReviewDto,
}

impl UserReview {
    pub fn into_dto(self) -> UserReviewDto {
        UserReviewDto {
            property_id: self.property_id,
            review: self.review,
        }
    }
}
