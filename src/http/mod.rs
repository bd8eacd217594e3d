//! HTTP surface: routes, handlers and the error boundary.

pub mod error;
pub mod handlers;

use std::sync::Arc;

use axum::routing::get;
use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::store::ItemStore;

pub use error::{ApiError, Operation};

/// Store handle shared by every handler.
pub type SharedStore = Arc<ItemStore>;

/// Build the axum router with all item endpoints. Cross-origin requests are
/// allowed from anywhere, and unmatched paths or methods still answer JSON.
pub fn build_router(store: SharedStore) -> Router {
    Router::new()
        .route(
            "/items",
            get(handlers::list_items)
                .post(handlers::create_item)
                .fallback(handlers::method_not_allowed),
        )
        .route(
            "/items/:id",
            get(handlers::get_item)
                .put(handlers::update_item)
                .delete(handlers::delete_item)
                .fallback(handlers::method_not_allowed),
        )
        .fallback(handlers::not_found)
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(store)
}
