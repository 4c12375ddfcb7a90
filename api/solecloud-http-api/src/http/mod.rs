use std::{net::SocketAddr, sync::Arc};

use axum::{
    Router,
    http::{Method, header},
    routing::{get, post},
};
use log::info;
use solecloud_app::Application;
use tower_http::cors::{Any, CorsLayer};

mod contact;
mod diagnostics;

#[derive(Clone)]
pub struct AppState {
    pub app: Arc<Application>,
}

/// Routes are served both under `/api` and at the root so the site can call
/// either form.
pub fn router(app: Arc<Application>) -> Router {
    let routes: Router<AppState> = Router::new()
        .route("/contact", post(contact::submit_contact))
        .route("/test-email", get(diagnostics::get_mail_status));

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE]);

    Router::new()
        .nest("/api", routes.clone())
        .merge(routes)
        .layer(cors)
        .with_state(AppState { app })
}

pub async fn run(
    app: Arc<Application>,
    addr: SocketAddr,
    shutdown_signal: impl std::future::Future<Output = ()> + Send + 'static,
) -> std::io::Result<()> {
    let listener = tokio::net::TcpListener::bind(addr).await?;

    info!("API server listening on {}", addr);
    axum::serve(listener, router(app))
        .with_graceful_shutdown(shutdown_signal)
        .await?;

    info!("HTTP API shut down gracefully");
    Ok(())
}
