// crates/server/src/main.rs
use anyhow::Context;
use cluster_view_client::BackendClient;
use cluster_view_server::{create_app, metrics};
use tracing_subscriber::EnvFilter;

const DEFAULT_PORT: u16 = 47901;
const DEFAULT_BACKEND_URL: &str = "http://localhost:3001";

/// Listen port: CLUSTER_VIEW_PORT wins, then the conventional PORT, then the
/// built-in default.
fn resolve_port() -> u16 {
    std::env::var("CLUSTER_VIEW_PORT")
        .or_else(|_| std::env::var("PORT"))
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(DEFAULT_PORT)
}

fn resolve_backend_url() -> String {
    std::env::var("CLUSTER_VIEW_BACKEND_URL").unwrap_or_else(|_| DEFAULT_BACKEND_URL.to_string())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| {
                    EnvFilter::new("cluster_view_server=info,cluster_view_client=info,tower_http=info")
                }),
        )
        .init();

    metrics::init_metrics();

    let port = resolve_port();
    let backend_url = resolve_backend_url();
    let client = BackendClient::new(backend_url.clone());
    let app = create_app(client);

    let addr = format!("0.0.0.0:{port}");
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;

    eprintln!("cluster-view v{}", env!("CARGO_PKG_VERSION"));
    eprintln!("  API:      http://localhost:{port}/api");
    eprintln!("  Backend:  {backend_url}");
    tracing::info!(port, backend_url = %backend_url, "Server listening");

    axum::serve(listener, app).await.context("server error")?;

    Ok(())
}
