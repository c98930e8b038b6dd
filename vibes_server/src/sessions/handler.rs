use std::sync::Arc;

use axum::http::StatusCode;
use axum::{
    Json,
    extract::{Path, State},
};
use uuid::Uuid;

use vibes_core::vibe::engine::DispatchOutcome;

use crate::error::ErrorServer;
use crate::sessions::dto::{EventRequest, SessionCreated, SessionView};
use crate::state::ServerState;

#[utoipa::path(
    post,
    path = "/api/sessions",
    description = "Create a session",
    responses(
        (status = 200, description = "Success", body = SessionCreated),
    )
)]
#[axum::debug_handler]
pub async fn create_session(
    State(server_state): State<Arc<ServerState>>,
) -> Result<Json<SessionCreated>, ErrorServer> {
    let (session_id, session) = server_state.create_session();
    let state = session.lock().await;

    log::info!("created session {session_id}");

    Ok(Json(SessionCreated {
        session_id,
        view: SessionView::project(&state, DispatchOutcome::default()),
    }))
}

#[utoipa::path(
    post,
    path = "/api/sessions/{id}/events",
    request_body = EventRequest,
    description = "Apply one event to a session",
    responses(
        (status = 200, description = "Success", body = SessionView),
        (status = 404, description = "Unknown session"),
    )
)]
#[axum::debug_handler]
pub async fn session_event(
    State(server_state): State<Arc<ServerState>>,
    Path(id): Path<Uuid>,
    Json(request): Json<EventRequest>,
) -> Result<Json<SessionView>, ErrorServer> {
    let session = server_state.session(&id).ok_or(ErrorServer {
        status: StatusCode::NOT_FOUND.into(),
        message: "Session not found".to_string(),
    })?;

    let mut state = session.lock().await;
    let mut engine = server_state.engine();
    let outcome = engine.dispatch(&mut state, request.into()).await;

    Ok(Json(SessionView::project(&state, outcome)))
}
