//! Frontera HTTP del registro (axum).
//!
//! Rutas:
//! - `GET /health`
//! - `GET|POST /items`, `GET|PUT|DELETE /items/:item_id`
//! - `GET /items/:item_id/history`
//! - `GET /events`
//! - `POST /reset`

pub mod handlers;
pub mod params;

use axum::routing::{get, post};
use axum::Router;

pub use handlers::SharedRegistry;

/// Construye el router con el registro compartido como estado.
pub fn build_router(registry: SharedRegistry) -> Router {
    Router::new().route("/health", get(handlers::health))
                 .route("/items", get(handlers::list_items).post(handlers::create_item))
                 .route("/items/:item_id",
                        get(handlers::get_item).put(handlers::update_item)
                                               .delete(handlers::delete_item))
                 .route("/items/:item_id/history", get(handlers::item_history))
                 .route("/events", get(handlers::list_events))
                 .route("/reset", post(handlers::reset))
                 .with_state(registry)
}
