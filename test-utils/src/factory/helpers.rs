//! Shared helper utilities for factory methods.

use sea_orm::{DatabaseConnection, DbErr};

/// Counter for generating unique values in tests.
static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);

/// Gets the next unique counter value for test data.
///
/// # Returns
/// - `u64` - Next unique counter value
pub fn next_id() -> u64 {
    COUNTER.fetch_add(1, std::sync::atomic::Ordering::SeqCst)
}

/// Creates a host and a property owned by that host.
///
/// # Arguments
/// - `db` - Database connection
///
/// # Returns
/// - `Ok((host, property))` - Tuple of created entities
/// - `Err(DbErr)` - Database error during creation
pub async fn create_property_with_host(
    db: &DatabaseConnection,
) -> Result<(entity::user::Model, entity::property::Model), DbErr> {
    let host = crate::factory::user::create_host(db).await?;
    let property = crate::factory::property::create_property(db, host.id).await?;

    Ok((host, property))
}

/// Creates a host, a property and a draft of that property owned by the host.
///
/// # Returns
/// - `Ok((host, property, draft))` - Tuple of created entities
/// - `Err(DbErr)` - Database error during creation
pub async fn create_draft_of_property(
    db: &DatabaseConnection,
) -> Result<
    (
        entity::user::Model,
        entity::property::Model,
        entity::property_draft::Model,
    ),
    DbErr,
> {
    let (host, property) = create_property_with_host(db).await?;
    let draft = crate::factory::draft::DraftFactory::new(db, host.id)
        .original_property_id(property.id)
        .build()
        .await?;

    Ok((host, property, draft))
}
