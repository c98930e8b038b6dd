use axum::Json;
use axum::http::StatusCode;

/// Host lifecycle notifications (installs, notifications enabled, ...).
/// Nothing reacts to them yet; they are acknowledged and logged.
#[utoipa::path(
    post,
    path = "/api/webhook",
    description = "Sink for host lifecycle events",
    responses(
        (status = 200, description = "Acknowledged"),
    )
)]
#[axum::debug_handler]
pub async fn webhook(Json(event): Json<serde_json::Value>) -> StatusCode {
    log::info!("webhook event: {event}");
    StatusCode::OK
}
