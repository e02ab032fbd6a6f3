use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "property")]
pub struct Model {
    #[sea_orm(primary_key)]
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
    pub width: f64,
    pub length: f64,
    pub check_in: i32,
    pub check_out: i32,
    pub min_stay_nights: i32,
    pub max_stay_nights: i32,
    pub price_per_night: f64,
    pub currency: String,
    pub preparation_days_time_between_stays: Option<i32>,
    pub address: Json,
    pub amenities: Json,
    pub bedrooms: Json,
    pub kitchens: Json,
    pub bathrooms: Json,
    pub photos: Json,
    pub videos: Json,
    pub rules: Json,
    pub reviews: Json,
    pub is_active: bool,
    pub views: i64,
    pub is_approved: bool,
    pub created_at: DateTimeUtc,
    pub updated_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::user::Entity",
        from = "Column::HostId",
        to = "super::user::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    Host,
    #[sea_orm(has_many = "super::property_draft::Entity")]
    PropertyDraft,
    #[sea_orm(has_many = "super::booking::Entity")]
    Booking,
}

impl Related<super::user::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Host.def()
    }
}

impl Related<super::property_draft::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::PropertyDraft.def()
    }
}

impl Related<super::booking::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Booking.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
