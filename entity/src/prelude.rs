pub use super::booking::Entity as Booking;
pub use super::payment::Entity as Payment;
pub use super::property::Entity as Property;
pub use super::property_draft::Entity as PropertyDraft;
pub use super::refresh_token::Entity as RefreshToken;
pub use super::role_change_request::Entity as RoleChangeRequest;
pub use super::user::Entity as User;
