//! Backend of a personal escape-room review log.
//!
//! # General Infrastructure
//! - Browser client talks to this server only
//! - Server proxies a Meilisearch index holding the review documents and a
//!   Redis instance holding sign-in sessions
//! - Both stores run next to the server, the extra hop is magnitudes smaller
//!   than the user trip
//!
//! # Read/Write Split
//! - Anyone may read: the ranked listing, a single review, and the corpus
//!   averages are public
//! - Writing requires a session: the owner signs in once with the configured
//!   key and holds a long-lived token
//!
//! # Failure Policy
//! - A failed store or session call is logged and surfaced as the status for
//!   that one request, there is no retry and nothing is fatal to the process
//!
//! # Setup
//!
//! Environment: `RUST_PORT`, `REDIS_URL`, `MEILI_URL`, plus the
//! `MEILI_ADMIN_KEY` and `SIGNIN_KEY` secrets (Docker secret files, with an
//! environment fallback for local runs).
//!
//! ```sh
//! RUST_LOG=info cargo run -p server
//! ```
use std::time::Duration;

use axum::{
    Router,
    http::{
        Method,
        header::{AUTHORIZATION, CONTENT_TYPE},
    },
    routing::{get, post},
};

use signal::{
    ctrl_c,
    unix::{SignalKind, signal},
};
use tokio::{net::TcpListener, signal};
use tower_http::cors::CorsLayer;
use tracing::info;
use tracing_subscriber::{EnvFilter, fmt};

pub mod auth;
pub mod config;
pub mod database;
pub mod error;
pub mod routes;
pub mod state;
pub mod store;

use routes::{
    averages_handler, create_review_handler, delete_review_handler, get_review_handler,
    list_reviews_handler, login_handler, session_handler, update_review_handler,
};
use state::AppState;

pub async fn start_server() {
    fmt().with_env_filter(EnvFilter::from_default_env()).init();

    info!("Initializing state...");
    let state = AppState::new().await;

    info!("Starting server...");

    let cors = CorsLayer::new()
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([CONTENT_TYPE, AUTHORIZATION])
        .max_age(Duration::from_secs(60 * 60));

    let app = Router::new()
        .route("/login", post(login_handler))
        .route("/session", get(session_handler))
        .route(
            "/reviews",
            get(list_reviews_handler).post(create_review_handler),
        )
        .route(
            "/reviews/{id}",
            get(get_review_handler)
                .put(update_review_handler)
                .delete(delete_review_handler),
        )
        .route("/averages", get(averages_handler))
        .layer(cors)
        .with_state(state.clone());

    let address = format!("0.0.0.0:{}", state.config.port);
    info!("Binding to {address}");

    let listener = TcpListener::bind(&address).await.unwrap();
    info!("Server running on {address}");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .unwrap();

    println!("Server shutting down...");
}

async fn shutdown_signal() {
    let ctrl_c = async {
        ctrl_c().await.expect("Failed to install Ctrl+C handler");

        info!("Received Ctrl+C, shutting down");
    };

    #[cfg(unix)]
    let terminate = async {
        signal(SignalKind::terminate())
            .expect("Failed to install signal handler")
            .recv()
            .await;

        info!("Received terminate signal, shutting down");
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
