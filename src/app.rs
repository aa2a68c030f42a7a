//! The axum application.
//!
//! # Examples
//!
//! Hello world API.
//!
//! ```rust
//! # use hello_world_tdd::core::greeting::greeting_model::Greeting;
//! # tokio_test::block_on(async {
//! # let url = hello_world_tdd::app::spawn_app().await.unwrap();
//! let response = reqwest::get(format!("{}/helloworld", url)).await.unwrap();
//! assert_eq!(200, response.status());
//! assert_eq!(Greeting::new("Unicorn"), response.json::<Greeting>().await.unwrap());
//! # });
//! ```

use std::iter;

use crate::infra::config::{self, Config, ServerConfig};
use crate::infra::error::{self, InternalError, PanicHandler};
use crate::infra::middleware::MakeRequestIdSpan;
use crate::infra::openapi::ApiDoc;
use axum::error_handling::HandleErrorLayer;
use axum::response::IntoResponse;
use axum::Router;
use http::header::AUTHORIZATION;
use tokio::net::TcpListener;
use tower::ServiceBuilder;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer};
use tower_http::sensitive_headers::SetSensitiveRequestHeadersLayer;
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::{DefaultOnRequest, DefaultOnResponse, TraceLayer};
use tracing::Level;
use utoipa::OpenApi;
use utoipa_rapidoc::RapiDoc;
use utoipa_redoc::{Redoc, Servable};
use utoipa_swagger_ui::SwaggerUi;

/// Constructs the full axum application.
pub fn app(config: &ServerConfig) -> Router {
    // Fallible middleware from tower, mapped to infallible response with [`HandleErrorLayer`].
    let tower_middleware = ServiceBuilder::new()
        .layer(HandleErrorLayer::new(|e| async move {
            InternalError::Other(format!("Tower middleware failed: {e}")).into_response()
        }))
        .concurrency_limit(config.concurrency_limit);

    Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/openapi.json", ApiDoc::openapi()))
        .merge(Redoc::with_url("/redoc", ApiDoc::openapi()))
        .merge(RapiDoc::new("/openapi.json").path("/rapidoc"))
        .merge(crate::api::api())
        .fallback(error::not_found)
        // Layers
        .layer(TimeoutLayer::new(config.request_timeout))
        .layer(axum::middleware::from_fn(
            crate::infra::middleware::log_request_response,
        ))
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(MakeRequestIdSpan)
                .on_request(DefaultOnRequest::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO))
                .on_failure(()),
        )
        .layer(PropagateRequestIdLayer::x_request_id())
        .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
        .layer(SetSensitiveRequestHeadersLayer::new(iter::once(
            AUTHORIZATION,
        )))
        .layer(tower_middleware)
        .layer(CatchPanicLayer::custom(PanicHandler))
}

/// Starts the axum server and runs it until ctrl-c is pressed.
pub async fn run_app(listener: TcpListener, config: Config) -> std::io::Result<()> {
    let app = app(&config.server);

    tracing::info!("Starting axum on {}", listener.local_addr()?);
    let exit_result = axum::serve(listener, app)
        .with_graceful_shutdown(crate::infra::shutdown::shutdown_signal())
        .await;

    match &exit_result {
        Ok(_) => tracing::info!("Successfully shut down"),
        Err(e) => tracing::error!("Shutdown failed: {}", e),
    }

    exit_result
}

/// Spawn a server on a random port, returning its base url.
pub async fn spawn_app() -> color_eyre::Result<String> {
    let config = config::load_config()?;
    let address = "127.0.0.1";
    let listener = TcpListener::bind(format!("{address}:0")).await?;
    let port = listener.local_addr()?.port();
    tokio::spawn(run_app(listener, config));
    Ok(format!("http://{address}:{port}"))
}
