use std::{env, sync::Arc};

use axum::{
    Router,
    routing::{get, post},
};
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_redoc::{Redoc, Servable};

use vibes_core::collections::client::{CollectionsClient, DEFAULT_COLLECTIONS_API_URL};
use vibes_core::media::pinata::PinataClient;

use crate::{
    capture::RenderApiCapturer,
    docs::{dto::ApiDoc, handler::api_docs},
    home::handler::launch_page,
    info::handler::info,
    manifest::handler::manifest,
    sessions::handler::{create_session, session_event},
    share_page::handler::share_page,
    state::ServerState,
    webhook::handler::webhook,
};

pub async fn router() -> Router {
    let app_url = env::var("APP_URL").expect("APP_URL environment variable not set");
    let pinata_jwt = env::var("PINATA_JWT").expect("PINATA_JWT environment variable not set");
    let collections_api_url =
        env::var("COLLECTIONS_API_URL").unwrap_or(DEFAULT_COLLECTIONS_API_URL.to_string());
    let capture_api_url = env::var("CAPTURE_API_URL").ok();

    let collections = CollectionsClient::new(collections_api_url);
    let pinner = PinataClient::new(pinata_jwt);
    let capturer = RenderApiCapturer::new(capture_api_url);

    let state = Arc::new(ServerState::from((app_url, collections, pinner, capturer)));

    let doc = ApiDoc::openapi();

    Router::new()
        .merge(Redoc::with_url("/redoc", doc))
        .route("/", get(info))
        .route("/docs", get(api_docs))
        .route("/app", get(launch_page))
        .route("/.well-known/farcaster.json", get(manifest))
        .route("/share", get(share_page))
        .route("/api/webhook", post(webhook))
        .route("/api/sessions", post(create_session))
        .route("/api/sessions/{id}/events", post(session_event))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
