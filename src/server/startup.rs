use crate::server::{config::Config, error::AppError, storage::MediaStore};

/// Opens the database pool and applies pending migrations.
///
/// Must succeed before any request is served; the schema is always current afterwards.
///
/// # Returns
/// - `Ok(DatabaseConnection)` - Pool with migrations applied
/// - `Err(AppError::DbErr)` - Connection or a migration failed
pub async fn connect_to_database(config: &Config) -> Result<sea_orm::DatabaseConnection, AppError> {
    use migration::{Migrator, MigratorTrait};
    use sea_orm::{ConnectOptions, Database};

    let mut opt = ConnectOptions::new(&config.database_url);
    opt.sqlx_logging(false);

    let db = Database::connect(opt).await?;

    Migrator::up(&db, None).await?;

    Ok(db)
}

/// Creates the media store and its folders under the configured public directory.
///
/// # Returns
/// - `Ok(MediaStore)` - Store with the `images`, `videos`, `pdfs` and `temp` folders present
/// - `Err(AppError::MediaErr)` - A folder could not be created
pub async fn setup_media_store(config: &Config) -> Result<MediaStore, AppError> {
    let media = MediaStore::new(&config.public_dir);
    media.ensure_dirs().await?;

    tracing::info!("Serving media from {}", media.root().display());

    Ok(media)
}
