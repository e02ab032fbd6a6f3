use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use utoipa::ToSchema;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(default)]
pub struct AddressDto {
    pub street: Option<String>,
    pub exterior_number: Option<String>,
    pub interior_number: Option<String>,
    pub neighborhood: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub postal_code: Option<String>,
    pub country: Option<String>,
    pub references: Option<String>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
}

/// Named amenity flags such as `wifi`, `private_pool` or `pets_allowed`.
///
/// Entries whose value is not a boolean (document identifiers and the like) are
/// dropped while decoding.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(from = "BTreeMap<String, Value>")]
pub struct AmenitiesDto(pub BTreeMap<String, bool>);

impl From<BTreeMap<String, Value>> for AmenitiesDto {
    fn from(raw: BTreeMap<String, Value>) -> Self {
        Self(
            raw.into_iter()
                .filter_map(|(name, value)| value.as_bool().map(|flag| (name, flag)))
                .collect(),
        )
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(default)]
pub struct BedsDto {
    pub king_size: u32,
    pub queen_size: u32,
    pub single: u32,
    pub sofa_bed: u32,
    pub bunk_beds: u32,
    pub cradle: u32,
}

/// A media list entry as clients send it: a bare file name or a full record.
#[derive(Deserialize)]
#[serde(untagged)]
enum MediaEntry<T> {
    FileName(String),
    Record(T),
}

/// Photo entry. Deserializes from either a record or a bare file name such as `"a.jpg"`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(from = "MediaEntry<PhotoRecord>")]
pub struct PhotoDto {
    pub url: Option<String>,
    #[serde(rename = "fileName", skip_serializing_if = "Option::is_none")]
    pub file_name: Option<String>,
    pub description: Option<String>,
    pub width: Option<u32>,
    pub height: Option<u32>,
    pub format: Option<String>,
    pub size_kb: Option<f64>,
}

#[derive(Default, Deserialize)]
#[serde(default)]
struct PhotoRecord {
    url: Option<String>,
    #[serde(rename = "fileName")]
    file_name: Option<String>,
    description: Option<String>,
    width: Option<u32>,
    height: Option<u32>,
    format: Option<String>,
    size_kb: Option<f64>,
}

impl From<MediaEntry<PhotoRecord>> for PhotoDto {
    fn from(entry: MediaEntry<PhotoRecord>) -> Self {
        let record = match entry {
            MediaEntry::FileName(name) => PhotoRecord {
                file_name: Some(name),
                ..Default::default()
            },
            MediaEntry::Record(record) => record,
        };

        Self {
            url: record.url,
            file_name: record.file_name,
            description: record.description,
            width: record.width,
            height: record.height,
            format: record.format,
            size_kb: record.size_kb,
        }
    }
}

/// Video entry. Deserializes from either a record or a bare file name such as `"a.mp4"`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(from = "MediaEntry<VideoRecord>")]
pub struct VideoDto {
    pub url: Option<String>,
    #[serde(rename = "fileName", skip_serializing_if = "Option::is_none")]
    pub file_name: Option<String>,
    pub title: Option<String>,
    pub description: Option<String>,
    pub duration: Option<f64>,
    pub width: Option<u32>,
    pub height: Option<u32>,
    pub format: Option<String>,
    pub size_mb: Option<f64>,
    pub thumbnail_url: Option<String>,
}

#[derive(Default, Deserialize)]
#[serde(default)]
struct VideoRecord {
    url: Option<String>,
    #[serde(rename = "fileName")]
    file_name: Option<String>,
    title: Option<String>,
    description: Option<String>,
    duration: Option<f64>,
    width: Option<u32>,
    height: Option<u32>,
    format: Option<String>,
    size_mb: Option<f64>,
    thumbnail_url: Option<String>,
}

impl From<MediaEntry<VideoRecord>> for VideoDto {
    fn from(entry: MediaEntry<VideoRecord>) -> Self {
        let record = match entry {
            MediaEntry::FileName(name) => VideoRecord {
                file_name: Some(name),
                ..Default::default()
            },
            MediaEntry::Record(record) => record,
        };

        Self {
            url: record.url,
            file_name: record.file_name,
            title: record.title,
            description: record.description,
            duration: record.duration,
            width: record.width,
            height: record.height,
            format: record.format,
            size_mb: record.size_mb,
            thumbnail_url: record.thumbnail_url,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(default)]
pub struct BathroomDto {
    pub name: Option<String>,
    /// 1 private, 2 shared with the host, 3 shared with other guests.
    pub privacy: Option<u8>,
    pub width_m: Option<f64>,
    pub length_m: Option<f64>,
    pub accessible_for_wheelchairs: Option<bool>,
    pub amenities: AmenitiesDto,
    pub photos: Vec<PhotoDto>,
    pub videos: Vec<VideoDto>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(default)]
pub struct KitchenDto {
    pub name: Option<String>,
    pub width_m: Option<f64>,
    pub length_m: Option<f64>,
    pub amenities: AmenitiesDto,
    pub photos: Vec<PhotoDto>,
    pub videos: Vec<VideoDto>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(default)]
pub struct BedroomDto {
    pub name: Option<String>,
    pub description: Option<String>,
    pub beds: BedsDto,
    pub amenities: AmenitiesDto,
    /// Private bathroom attached to the bedroom.
    pub bathroom: Option<BathroomDto>,
    pub windows: Option<u32>,
    pub width: Option<f64>,
    pub length: Option<f64>,
    pub balcony: Option<bool>,
    pub view: Option<String>,
    pub soundproof_windows: Option<bool>,
    pub max_guests: Option<u32>,
    pub photos: Vec<PhotoDto>,
    pub videos: Vec<VideoDto>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ReviewDto {
    pub id: String,
    pub user_id: i32,
    pub booking_id: Option<i32>,
    pub score: u8,
    pub comment: String,
    pub date: DateTime<Utc>,
}

/// Every property field a host may write.
///
/// Used as the update body for properties and drafts, and as the content of a draft.
/// `None` means "not supplied"; identity and moderation fields (including the document
/// verification flags) are not part of this set.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(default)]
pub struct PropertyFields {
    #[serde(rename = "type")]
    pub property_type: Option<i32>,
    pub title: Option<String>,
    pub markdown_description: Option<String>,
    pub max_guests: Option<i32>,
    pub max_babies: Option<i32>,
    pub proof_of_address: Option<String>,
    pub land_use_permit: Option<String>,
    pub bedrooms: Option<Vec<BedroomDto>>,
    pub kitchens: Option<Vec<KitchenDto>>,
    pub bathrooms: Option<Vec<BathroomDto>>,
    pub width: Option<f64>,
    pub length: Option<f64>,
    pub address: Option<AddressDto>,
    pub photos: Option<Vec<PhotoDto>>,
    pub videos: Option<Vec<VideoDto>>,
    pub amenities: Option<AmenitiesDto>,
    /// Minutes from midnight.
    pub check_in: Option<i32>,
    /// Minutes from midnight.
    pub check_out: Option<i32>,
    pub min_stay_nights: Option<i32>,
    pub max_stay_nights: Option<i32>,
    pub price_per_night: Option<f64>,
    pub currency: Option<String>,
    pub rules: Option<Vec<String>>,
    pub preparation_days_time_between_stays: Option<i32>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct PropertyDto {
    pub id: i32,
    pub host_id: i32,
    #[serde(flatten)]
    pub fields: PropertyFields,
    pub reviews: Vec<ReviewDto>,
    pub is_proof_of_address_verified: Option<bool>,
    pub is_land_use_permit_verified: Option<bool>,
    pub is_active: bool,
    pub views: i64,
    pub is_approved: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct PropertyResponseDto {
    pub success: bool,
    pub property: PropertyDto,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct PaginatedPropertiesDto {
    pub success: bool,
    pub properties: Vec<PropertyDto>,
    pub total: u64,
    pub page: u64,
    pub entries: u64,
}

/// Admin moderation of a listing. Omitted flags keep their stored value.
#[derive(Debug, Default, Serialize, Deserialize, ToSchema)]
#[serde(default)]
pub struct SetApprovalDto {
    pub is_approved: Option<bool>,
    pub is_proof_of_address_verified: Option<bool>,
    pub is_land_use_permit_verified: Option<bool>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct CreateReviewDto {
    pub booking_id: Option<i32>,
    pub score: u8,
    pub comment: String,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct UpdateReviewDto {
    pub score: Option<u8>,
    pub comment: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ReviewResponseDto {
    pub success: bool,
    pub review: ReviewDto,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ReviewListDto {
    pub success: bool,
    pub reviews: Vec<ReviewDto>,
}
