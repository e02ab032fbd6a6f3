use std::time::Duration;

use sea_orm::DatabaseConnection;
use tokio_cron_scheduler::{Job, JobScheduler};

use crate::server::{
    data::refresh_token::RefreshTokenRepository, error::AppError, storage::MediaStore,
};

/// Temp uploads older than this are treated as abandoned.
pub const TEMP_FILE_MAX_AGE: Duration = Duration::from_secs(60 * 60);

/// Starts the maintenance scheduler
///
/// This scheduler runs every 15 minutes and:
/// - Deletes temp uploads that were never confirmed
/// - Removes expired refresh tokens
///
/// # Arguments
/// - `db`: Database connection
/// - `media`: Media store holding the temp folder
pub async fn start_scheduler(db: DatabaseConnection, media: MediaStore) -> Result<(), AppError> {
    let scheduler = JobScheduler::new().await?;

    let job = Job::new_async("0 */15 * * * *", move |_uuid, _lock| {
        let db = db.clone();
        let media = media.clone();

        Box::pin(async move {
            run_maintenance(&db, &media).await;
        })
    })?;

    scheduler.add(job).await?;
    scheduler.start().await?;

    tracing::info!("Maintenance scheduler started");

    Ok(())
}

/// Runs one maintenance pass. Each task logs its own failure so one cannot block the other.
pub async fn run_maintenance(db: &DatabaseConnection, media: &MediaStore) {
    match media.purge_temp(TEMP_FILE_MAX_AGE).await {
        Ok(0) => {}
        Ok(removed) => tracing::info!("Purged {} abandoned temp uploads", removed),
        Err(e) => tracing::error!("Error purging temp uploads: {}", e),
    }

    match RefreshTokenRepository::new(db).delete_expired().await {
        Ok(0) => {}
        Ok(removed) => tracing::info!("Removed {} expired refresh tokens", removed),
        Err(e) => tracing::error!("Error removing expired refresh tokens: {}", e),
    }
}
