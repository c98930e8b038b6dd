use axum::Json;

use crate::info::dto::Info;

#[utoipa::path(
    get,
    path = "/",
    description = "Service identity",
    responses(
        (status = 200, description = "Success", body = Info),
    )
)]
#[axum::debug_handler]
pub async fn info() -> Json<Info> {
    Json(Info {
        name: env!("CARGO_PKG_NAME").to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}
