mod config;
mod templates;

use std::sync::Arc;

use axum::extract::State;
use axum::http::header::ETAG;
use axum::http::{HeaderMap, HeaderValue, StatusCode};
use axum::response::Html;
use axum::routing::{get, post};
use axum::{Json, Router};
use common::{RpcResponse, TemplateSet, LOADQWEB_PATH};
use tower_http::services::ServeDir;
use tracing::info;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::config::load_config;
use crate::templates::TemplateRegistry;

struct AppState {
    registry: TemplateRegistry,
    index: String,
}

#[tokio::main]
async fn main() {
    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(EnvFilter::from_default_env())
        .init();

    let config = load_config("config.toml").expect("problem with config loading");

    let registry =
        TemplateRegistry::load(&config.assets.template_files).expect("templates should load");
    info!(
        templates = registry.templates().len(),
        checksum = registry.checksum(),
        "template registry loaded"
    );

    let index =
        std::fs::read_to_string(&config.assets.index_file).expect("index file should be readable");

    let app_state = Arc::new(AppState { registry, index });

    let app = Router::new()
        .route("/", get(index_page))
        .route(LOADQWEB_PATH, post(load_qweb))
        .nest_service("/static", ServeDir::new(config.assets.static_dir))
        .with_state(app_state);

    let listener = tokio::net::TcpListener::bind(&config.app.address)
        .await
        .unwrap();
    info!(address = %config.app.address, "listening");
    axum::serve(listener, app).await.unwrap();
}

async fn index_page(state: State<Arc<AppState>>) -> Html<String> {
    Html(state.index.clone())
}

/// The request payload is empty and ignored; the whole template set goes
/// back in one envelope. The registry checksum doubles as an entity tag.
async fn load_qweb(
    state: State<Arc<AppState>>,
) -> (StatusCode, HeaderMap, Json<RpcResponse<TemplateSet>>) {
    let mut headers = HeaderMap::new();
    if let Ok(value) = HeaderValue::from_str(&format!("\"{}\"", state.registry.checksum())) {
        headers.insert(ETAG, value);
    }
    info!(templates = state.registry.templates().len(), "serving templates");
    (
        StatusCode::OK,
        headers,
        Json(RpcResponse::Result(state.registry.templates().clone())),
    )
}
