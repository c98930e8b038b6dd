use std::sync::Arc;

use axum::{Json, extract::State};

use crate::manifest::dto::MiniAppManifest;
use crate::state::ServerState;

#[utoipa::path(
    get,
    path = "/.well-known/farcaster.json",
    description = "Mini-app manifest consumed by the host discovery mechanism",
    responses(
        (status = 200, description = "Success", body = MiniAppManifest),
    )
)]
#[axum::debug_handler]
pub async fn manifest(State(server_state): State<Arc<ServerState>>) -> Json<MiniAppManifest> {
    Json(MiniAppManifest::for_app_url(&server_state.app_url()))
}
