mod model;
mod server;

use std::net::SocketAddr;

use tracing_subscriber::EnvFilter;

use crate::server::{
    config::Config, error::AppError, router, scheduler::maintenance,
    service::auth::token::JwtKeys, startup, state::AppState,
};

#[tokio::main]
async fn main() -> Result<(), AppError> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = Config::from_env()?;

    let db = startup::connect_to_database(&config).await?;
    let media = startup::setup_media_store(&config).await?;
    let jwt = JwtKeys::new(&config.jwt_secret, &config.jwt_refresh_secret);

    tracing::info!("Starting server");

    // Start maintenance scheduler
    let scheduler_db = db.clone();
    let scheduler_media = media.clone();
    tokio::spawn(async move {
        if let Err(e) = maintenance::start_scheduler(scheduler_db, scheduler_media).await {
            tracing::error!("Maintenance scheduler error: {}", e);
        }
    });

    let app = router::router(&config)?.with_state(AppState::new(
        db,
        jwt,
        media,
        config.media_cleanup_on_publish,
    ));

    let listener = tokio::net::TcpListener::bind(&config.bind_address).await?;
    tracing::info!("Listening on {}", config.bind_address);

    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .await?;

    Ok(())
}
