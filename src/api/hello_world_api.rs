//! Implementation of the hello world API. Returns a greeting for the default name.

use crate::{
    core::greeting::{greeting_model::Greeting, greeting_service},
    infra::error,
};
use axum::{routing::get, Json, Router};
use axum_extra::routing::TypedPath;
use tracing::instrument;

/// The hello world API endpoints.
pub fn routes() -> Router {
    Router::new().route(
        HelloWorldPath::PATH,
        get(hello_world).fallback(error::method_not_allowed),
    )
}

/// The path of the hello world endpoint.
#[derive(Clone, Copy, Debug, TypedPath)]
#[typed_path("/helloworld")]
pub struct HelloWorldPath;

/// A handler for requests to the hello world endpoint.
#[utoipa::path(
    get,
    path = "/helloworld",
    responses(
        (status = 200, description = "Success", body = Greeting),
    )
)]
#[instrument]
pub async fn hello_world(_path: HelloWorldPath) -> Json<Greeting> {
    Json(greeting_service::default_greeting())
}
