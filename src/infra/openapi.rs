//! OpenAPI configuration.

use crate::api::hello_world_api;
use crate::core::greeting::greeting_model::Greeting;
use crate::infra::error::ErrorBody;
use utoipa::OpenApi;

/// OpenApi configuration.
#[derive(OpenApi)]
#[openapi(
    paths(hello_world_api::hello_world),
    components(schemas(Greeting, ErrorBody)),
    tags((name = "hello-world", description = "A greeting for the default name"))
)]
#[derive(Clone, Copy, Debug)]
pub struct ApiDoc;
