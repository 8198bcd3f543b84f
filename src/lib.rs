pub mod accounts;
pub mod auth;
pub mod config;
pub mod contact;
pub mod general;
pub mod inquiries;
pub mod store;
pub mod utils;

use std::sync::Arc;

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::{services::ServeDir, trace::TraceLayer};

use crate::{config::SiteConfig, store::RecordStore};

/// Shared application state
/// Cloned for every request, the store sits behind an Arc
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn RecordStore>,
    pub config: SiteConfig,
}

impl AppState {
    pub fn new(store: Arc<dyn RecordStore>, config: SiteConfig) -> Self {
        Self { store, config }
    }
}

/// Site routes, static assets under /static
pub fn router(state: AppState) -> Router {
    let static_files = ServeDir::new(&state.config.static_dir);

    Router::new()
        .route("/", get(auth::login::get))
        .route("/login", post(auth::login::post))
        .route("/signup", get(auth::signup::get).post(auth::signup::post))
        .route("/contact", get(contact::get).post(contact::post))
        .nest_service("/static", static_files)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
