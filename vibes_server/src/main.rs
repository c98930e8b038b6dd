mod capture;
mod docs;
mod error;
mod home;
mod info;
mod manifest;
mod router;
mod sessions;
mod share_page;
mod state;
mod webhook;

use std::env;

use dotenvy::dotenv;
use router::router;

#[tokio::main(flavor = "multi_thread", worker_threads = 4)]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();
    tracing_subscriber::fmt::init();

    let server_domain = env::var("SERVER_DOMAIN").unwrap_or("localhost:3000".to_string());

    let app = router().await;

    let listener = tokio::net::TcpListener::bind(&server_domain).await?;

    axum::serve(listener, app).await?;

    Ok(())
}
