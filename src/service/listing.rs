use std::sync::Arc;

use axum::extract::State;
use axum::response::Response;

use crate::storage::MAX_LISTING_KEYS;
use crate::utils::state::AppState;
use crate::views::listing::ListingView;
use crate::views::render_template;

/// GET /
///
/// Listing failures degrade to an empty page: the error is logged
/// server-side and the client still gets a 200 with zero entries.
pub async fn get_listing_handler(State(state): State<Arc<AppState>>) -> Response {
    let bucket = state.config.bucket.clone();
    let view = match state.storage.list("", MAX_LISTING_KEYS).await {
        Ok(entries) => ListingView::new(bucket, entries),
        Err(err) => {
            tracing::warn!("error listing bucket contents: {err}");
            ListingView::empty(bucket)
        }
    };
    render_template(view)
}
