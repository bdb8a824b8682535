pub mod handlers;
pub mod page;

use crate::{
    Result,
    config::{self, Config},
    llm::GeminiClient,
    report::ReportRenderer,
};
use axum::{
    Router,
    extract::DefaultBodyLimit,
    routing::{get, post},
};
use std::{net::SocketAddr, sync::Arc};
use tower_http::trace::TraceLayer;
use tracing::info;

pub use handlers::AppState;

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::index))
        .route(
            "/report",
            post(handlers::report).layer(DefaultBodyLimit::disable()),
        )
        .route("/health", get(handlers::health))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

pub async fn run(config: Config) -> Result<()> {
    // Read once; later changes to the environment are not picked up.
    let default_credential = config::default_credential(&config.llm);
    if default_credential.is_empty() {
        info!(
            "{} is not set, the credential must be entered in the form",
            config.llm.api_key_env
        );
    }

    let client = GeminiClient::new(config.llm.clone());
    let app_state = AppState {
        renderer: Arc::new(ReportRenderer::new(Arc::new(client))),
        default_credential: Arc::from(default_credential),
    };

    let app = router(app_state);

    let addr = SocketAddr::new(config.server.host.parse()?, config.server.port);

    info!("Starting server on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
