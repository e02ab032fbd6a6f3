pub use sea_orm_migration::prelude::*;

mod m20250301_000001_create_user_table;
mod m20250301_000002_create_property_table;
mod m20250301_000003_create_property_draft_table;
mod m20250302_000004_create_booking_table;
mod m20250308_000005_create_role_change_request_table;
mod m20250310_000006_create_refresh_token_table;
mod m20250312_000007_create_payment_table;
mod m20250315_000008_add_user_notifications;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20250301_000001_create_user_table::Migration),
            Box::new(m20250301_000002_create_property_table::Migration),
            Box::new(m20250301_000003_create_property_draft_table::Migration),
            Box::new(m20250302_000004_create_booking_table::Migration),
            Box::new(m20250308_000005_create_role_change_request_table::Migration),
            Box::new(m20250310_000006_create_refresh_token_table::Migration),
            Box::new(m20250312_000007_create_payment_table::Migration),
            Box::new(m20250315_000008_add_user_notifications::Migration),
        ]
    }
}
