use std::sync::Arc;

use axum::extract::State;
use axum::response::Html;

use crate::state::ServerState;

pub fn escape_attribute(value: &str) -> String {
    value
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

/// Launch page fetched by the host when embedding the app: OpenGraph tags
/// plus the `fc:frame` descriptor for the launch button.
#[axum::debug_handler]
pub async fn launch_page(State(server_state): State<Arc<ServerState>>) -> Html<String> {
    let app_url = server_state.app_url();

    let frame = serde_json::json!({
        "version": "next",
        "imageUrl": format!("{app_url}/images/feed.png"),
        "button": {
            "title": "Check your vibes",
            "action": {
                "type": "launch_frame",
                "name": "Monad Vibes",
                "url": app_url,
                "splashImageUrl": format!("{app_url}/images/splash.png"),
                "splashBackgroundColor": "#f7f7f7",
            },
        },
    });

    Html(format!(
        r#"<!DOCTYPE html>
<html>
<head>
<meta charset="utf-8">
<title>Monad Vibes</title>
<meta property="og:title" content="Monad Vibes">
<meta property="og:description" content="Discover your random NFT">
<meta property="og:image" content="{feed}">
<meta name="fc:frame" content="{frame}">
</head>
<body></body>
</html>
"#,
        feed = escape_attribute(&format!("{app_url}/images/feed.png")),
        frame = escape_attribute(&frame.to_string()),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_attribute() {
        assert_eq!(
            escape_attribute(r#"{"a":"<b> & c"}"#),
            "{&quot;a&quot;:&quot;&lt;b&gt; &amp; c&quot;}"
        );
    }
}
