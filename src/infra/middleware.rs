//! Middleware for modifying requests and responses.

use super::error::{ApiError, ClientError, InternalError};
use axum::{
    body::{Body, HttpBody},
    middleware::Next,
    response::IntoResponse,
};
use bytes::Bytes;
use http::{Request, Response};
use http_body_util::BodyExt;
use tower_http::trace::MakeSpan;

static X_REQUEST_ID: &str = "x-request-id";

/// Creates a request span tagged with the request id set by `SetRequestIdLayer`.
#[derive(Clone, Copy, Debug)]
pub(crate) struct MakeRequestIdSpan;

impl<B> MakeSpan<B> for MakeRequestIdSpan {
    fn make_span(&mut self, request: &Request<B>) -> tracing::Span {
        let request_id = request
            .headers()
            .get(X_REQUEST_ID)
            .and_then(|id| id.to_str().ok())
            .unwrap_or("unknown");
        tracing::info_span!(
            "request",
            request_id = request_id,
            method = %request.method(),
            uri = %request.uri(),
            version = ?request.version(),
        )
    }
}

/// The maximum size of a body to log.
const MAX_BODY_SIZE: u64 = 8192;

/// Print the request and response bodies.
pub(crate) async fn log_request_response(
    req: Request<Body>,
    next: Next,
) -> Result<impl IntoResponse, ApiError> {
    let (parts, body) = req.into_parts();
    let body = if is_small(&body) {
        Body::from(buffer_request(body).await?)
    } else {
        body
    };
    let req = Request::from_parts(parts, body);

    let res = next.run(req).await;

    let (parts, body) = res.into_parts();
    let body = if is_small(&body) {
        Body::from(buffer_response(body).await?)
    } else {
        body
    };
    Ok(Response::from_parts(parts, body))
}

fn is_small(body: &Body) -> bool {
    matches!(body.size_hint().upper(), Some(n) if n <= MAX_BODY_SIZE)
}

/// An unreadable request body is the client's fault.
async fn buffer_request(body: Body) -> Result<Bytes, ApiError> {
    buffer_and_print("Request", body)
        .await
        .map_err(|e| ClientError::BadRequest(format!("failed to read request body: {e}")).into())
}

/// An unreadable response body is ours.
async fn buffer_response(body: Body) -> Result<Bytes, ApiError> {
    buffer_and_print("Response", body)
        .await
        .map_err(|e| InternalError::Other(format!("failed to read response body: {e}")).into())
}

/// Read the entire body stream and store it in memory.
async fn buffer_and_print(direction: &str, body: Body) -> Result<Bytes, axum::Error> {
    let body = body.collect().await?.to_bytes();

    if let Ok(body) = std::str::from_utf8(&body) {
        tracing::trace!("{} body = {:?}", direction, body);
    }

    Ok(body)
}
