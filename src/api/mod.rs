use std::sync::Arc;

use axum::Router;
use axum::routing::get;
use tower_http::trace::TraceLayer;

use crate::service::listing::get_listing_handler;
use crate::service::object::get_object_handler;
use crate::utils::state::AppState;

pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        // Empty path (leading slash stripped) renders the listing; any
        // other path is treated as an object key.
        .route("/", get(get_listing_handler))
        .route("/{*key}", get(get_object_handler))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
