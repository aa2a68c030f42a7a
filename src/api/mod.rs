//! The HTTP API.

use axum::Router;

pub mod hello_world_api;

/// All API routes.
pub fn api() -> Router {
    Router::new().merge(hello_world_api::routes())
}
