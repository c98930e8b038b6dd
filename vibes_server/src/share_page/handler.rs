use std::sync::Arc;

use axum::extract::{Query, State};
use axum::response::Html;

use crate::home::handler::escape_attribute;
use crate::share_page::dto::ShareParams;
use crate::state::ServerState;

/// Share landing page: feed crawlers read the OpenGraph image out of the
/// metadata, browsers are redirected straight back into the app.
#[axum::debug_handler]
pub async fn share_page(
    State(server_state): State<Arc<ServerState>>,
    Query(params): Query<ShareParams>,
) -> Html<String> {
    let app_url = server_state.app_url();
    let img = params.img.unwrap_or_default();

    log::info!("share page requested, img={img}");

    Html(format!(
        r#"<!DOCTYPE html>
<html>
<head>
<meta charset="utf-8">
<title>Monad Vibes</title>
<meta property="og:title" content="Monad Vibes">
<meta property="og:description" content="Monad Vibes is a platform for discovering and sharing NFTs with a unique twist.">
<meta property="og:image" content="{img}">
<meta property="og:image:width" content="600">
<meta property="og:image:height" content="600">
<meta property="og:image:alt" content="Score Screenshot">
<meta http-equiv="refresh" content="0;url={app_url}">
</head>
<body></body>
</html>
"#,
        img = escape_attribute(&img),
        app_url = escape_attribute(&app_url),
    ))
}
