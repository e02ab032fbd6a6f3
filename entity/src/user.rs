use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "user")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub username: String,
    #[sea_orm(unique)]
    pub email: String,
    pub password_hash: String,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub description_markdown: Option<String>,
    pub phone: Option<String>,
    pub profile_picture: Option<String>,
    pub date_of_birth: Option<Date>,
    pub language: Option<String>,
    pub currency: Option<String>,
    pub address: Option<Json>,
    pub notifications: Json,
    pub role: i32,
    pub email_verified: bool,
    pub is_active: bool,
    pub created_at: DateTimeUtc,
    pub last_login: Option<DateTimeUtc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::payment::Entity")]
    Payment,
    #[sea_orm(has_many = "super::property::Entity")]
    Property,
    #[sea_orm(has_many = "super::property_draft::Entity")]
    PropertyDraft,
    #[sea_orm(has_many = "super::refresh_token::Entity")]
    RefreshToken,
    #[sea_orm(has_many = "super::role_change_request::Entity")]
    RoleChangeRequest,
}

impl Related<super::payment::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Payment.def()
    }
}

impl Related<super::property::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Property.def()
    }
}

impl Related<super::property_draft::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::PropertyDraft.def()
    }
}

impl Related<super::refresh_token::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::RefreshToken.def()
    }
}

impl Related<super::role_change_request::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::RoleChangeRequest.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
