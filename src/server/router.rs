use std::sync::Arc;

use axum::{
    extract::DefaultBodyLimit,
    http::{
        header::{AUTHORIZATION, CONTENT_TYPE},
        HeaderValue, Method,
    },
    routing::{delete, get, post, put},
    Router,
};
use tower_governor::{governor::GovernorConfigBuilder, GovernorLayer};
use tower_http::{cors::CorsLayer, services::ServeDir, trace::TraceLayer};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::server::{
    config::Config,
    controller::{auth, booking, draft, file, payment, property, role_change, user},
    docs::ApiDoc,
    error::{config::ConfigError, AppError},
    model::media::MediaKind,
    state::AppState,
};

/// Sustained login and registration attempts allowed per client IP.
const AUTH_REQUESTS_PER_SECOND: u64 = 2;
const AUTH_BURST: u32 = 5;

/// Headroom for multipart framing on top of the largest accepted file.
const UPLOAD_OVERHEAD_BYTES: usize = 1024 * 1024;

const SERVED_MEDIA: [MediaKind; 4] = [
    MediaKind::Photo,
    MediaKind::Video,
    MediaKind::Pdf,
    MediaKind::Temp,
];

/// Builds the complete HTTP router.
///
/// The auth routes are rate limited by peer IP, so the router must be served with
/// `into_make_service_with_connect_info::<SocketAddr>()`.
///
/// # Returns
/// - `Ok(Router)` - Router awaiting its `AppState`
/// - `Err(ConfigError)` - Rate limit or CORS origin could not be built from configuration
pub fn router(config: &Config) -> Result<Router<AppState>, AppError> {
    let mut router = Router::new()
        .merge(auth_routes()?)
        .merge(user_routes())
        .merge(property_routes())
        .merge(booking_routes())
        .merge(payment_routes())
        .merge(role_change_routes())
        .merge(draft_routes())
        .merge(file_routes())
        .merge(SwaggerUi::new("/api/docs").url("/api/openapi.json", ApiDoc::openapi()));

    for kind in SERVED_MEDIA {
        router = router.nest_service(
            &format!("/{}", kind.folder()),
            ServeDir::new(config.public_dir.join(kind.folder())),
        );
    }

    Ok(router
        .layer(cors(&config.app_url)?)
        .layer(TraceLayer::new_for_http()))
}

fn cors(app_url: &str) -> Result<CorsLayer, ConfigError> {
    let origin = app_url
        .parse::<HeaderValue>()
        .map_err(|_| ConfigError::InvalidEnvVar {
            name: "APP_URL".to_string(),
            value: app_url.to_string(),
        })?;

    Ok(CorsLayer::new()
        .allow_origin(origin)
        .allow_credentials(true)
        .allow_headers(vec![AUTHORIZATION, CONTENT_TYPE])
        .allow_methods(vec![
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ]))
}

fn auth_routes() -> Result<Router<AppState>, ConfigError> {
    let governor = GovernorConfigBuilder::default()
        .per_second(AUTH_REQUESTS_PER_SECOND)
        .burst_size(AUTH_BURST)
        .finish()
        .ok_or(ConfigError::InvalidRateLimit {
            per_second: AUTH_REQUESTS_PER_SECOND,
            burst: AUTH_BURST,
        })?;

    let limited = Router::new()
        .route("/api/auth/register", post(auth::register))
        .route("/api/auth/login", post(auth::login))
        .layer(GovernorLayer::new(Arc::new(governor)));

    Ok(Router::new()
        .merge(limited)
        .route("/api/auth/refresh", post(auth::refresh))
        .route("/api/auth/logout", post(auth::logout))
        .route("/api/auth/verify-token", post(auth::verify_token))
        .route("/api/auth/user", get(auth::get_user)))
}

fn user_routes() -> Router<AppState> {
    Router::new()
        .route("/api/users", get(user::get_users))
        .route(
            "/api/users/{id}",
            get(user::get_user_by_id)
                .put(user::update_user)
                .delete(user::deactivate_user),
        )
        .route("/api/users/role/{role}", get(user::get_users_by_role))
        .route("/api/users/email/{email}", get(user::get_user_by_email))
        .route("/api/users/{id}/reviews", get(user::get_user_reviews))
        .route(
            "/api/users/{id}/notifications",
            get(user::get_notifications).post(user::send_notification),
        )
        .route(
            "/api/users/{id}/notifications/{notification_id}",
            put(user::mark_notification_read),
        )
}

fn property_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/api/properties",
            get(property::get_properties).post(property::create_property),
        )
        .route(
            "/api/properties/{id}",
            get(property::get_property_by_id)
                .put(property::update_property)
                .delete(property::deactivate_property),
        )
        .route(
            "/api/properties/{id}/approval",
            put(property::set_property_approval),
        )
        .route(
            "/api/properties/{id}/reviews",
            get(property::get_reviews).post(property::add_review),
        )
        .route(
            "/api/properties/{id}/reviews/{review_id}",
            put(property::update_review).delete(property::delete_review),
        )
}

fn booking_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/api/bookings",
            get(booking::get_bookings).post(booking::create_booking),
        )
        .route(
            "/api/bookings/{id}",
            get(booking::get_booking_by_id)
                .put(booking::update_booking)
                .delete(booking::cancel_booking),
        )
}

fn payment_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/api/payments",
            get(payment::get_payments).post(payment::create_payment),
        )
        .route("/api/payments/page/{page}", get(payment::get_payments_page))
        .route(
            "/api/payments/{id}",
            get(payment::get_payment_by_id)
                .put(payment::update_payment)
                .delete(payment::delete_payment),
        )
}

fn role_change_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/api/role-change-requests",
            get(role_change::get_role_change_requests)
                .post(role_change::submit_role_change_request),
        )
        .route(
            "/api/role-change-requests/{id}",
            put(role_change::review_role_change_request)
                .delete(role_change::delete_role_change_request),
        )
}

fn draft_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/api/drafts/property/empty",
            post(draft::create_empty_draft),
        )
        .route(
            "/api/drafts/property/from-property/{id}",
            post(draft::create_draft_from_property),
        )
        .route(
            "/api/drafts/property/{id}",
            get(draft::get_or_create_draft).put(draft::update_draft),
        )
        .route(
            "/api/drafts/property/{id}/save-to-property",
            post(draft::publish_draft),
        )
        .route(
            "/api/drafts/property/{id}/save-to-new-property",
            post(draft::publish_draft_as_new),
        )
        .route(
            "/api/drafts/property/{id}/discard",
            post(draft::discard_draft),
        )
        .route("/api/drafts/user/all", get(draft::get_my_drafts))
        .route(
            "/api/drafts/user/not-in-review",
            get(draft::get_my_drafts_not_in_review),
        )
        .route(
            "/api/drafts/user/in-review",
            get(draft::get_my_drafts_in_review),
        )
        .route("/api/drafts/{id}", get(draft::get_draft_by_id))
        .route(
            "/api/drafts/{id}/media",
            post(draft::add_draft_media).delete(draft::remove_draft_media),
        )
        .route(
            "/api/drafts/{id}/submit-review",
            post(draft::submit_draft_for_review),
        )
}

fn file_routes() -> Router<AppState> {
    let max_upload = SERVED_MEDIA
        .iter()
        .map(|kind| kind.max_bytes())
        .max()
        .unwrap_or_default()
        + UPLOAD_OVERHEAD_BYTES;

    Router::new()
        .route("/api/files/upload/{kind}", post(file::upload_file))
        .route(
            "/api/files/confirm/{kind}/{file_name}",
            post(file::confirm_file),
        )
        .route(
            "/api/files/{kind}/{file_name}",
            delete(file::delete_file),
        )
        .layer(DefaultBodyLimit::max(max_upload))
}
