//! Types for reporting errors that happened during a request.

use axum::{http::HeaderValue, response::IntoResponse, Json};
use http::StatusCode;
use serde::{Deserialize, Serialize};
use time::OffsetDateTime;
use tower_http::catch_panic::ResponseForPanic;
use utoipa::ToSchema;

/// A standard error response body.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ErrorBody {
    /// A description of the error.
    message: String,
    /// When the error happened.
    #[serde(with = "time::serde::rfc3339")]
    #[schema(value_type = String, format = DateTime)]
    timestamp: OffsetDateTime,
}

impl ErrorBody {
    pub(crate) fn new(message: String) -> Self {
        Self {
            message,
            timestamp: OffsetDateTime::now_utc(),
        }
    }

    /// The error message.
    pub fn message(&self) -> &str {
        self.message.as_ref()
    }

    /// When the error happened.
    pub fn timestamp(&self) -> OffsetDateTime {
        self.timestamp
    }
}

/// An error from our API.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// An error caused by the client.
    #[error("{0}")]
    ClientError(#[from] ClientError),
    /// An internal error.
    #[error("{0}")]
    InternalError(#[from] InternalError),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> axum::response::Response {
        match self {
            ApiError::ClientError(e) => e.into_response(),
            ApiError::InternalError(e) => {
                tracing::error!("internal error: {}", e);
                e.into_response()
            }
        }
    }
}

/// Errors caused by the client.
/// The client can do something to fix these.
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    /// The request could not be read.
    #[error("{0}")]
    BadRequest(String),
    /// The resource was not found.
    #[error("not found")]
    NotFound,
    /// The resource exists, but not for this method.
    #[error("method not allowed")]
    MethodNotAllowed,
}

impl IntoResponse for ClientError {
    fn into_response(self) -> axum::response::Response {
        let msg = self.to_string();
        let status = match self {
            Self::BadRequest(_) => StatusCode::BAD_REQUEST,
            Self::NotFound => StatusCode::NOT_FOUND,
            Self::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
        };
        (status, Json(ErrorBody::new(msg))).into_response()
    }
}

/// An internal error.
/// The client cannot do anything about this.
#[derive(Debug, thiserror::Error)]
pub enum InternalError {
    /// Other miscellaneous errors.
    #[error("{0}")]
    Other(String),
}

impl IntoResponse for InternalError {
    fn into_response(self) -> axum::response::Response {
        let status = match self {
            Self::Other(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };
        let mut response =
            (status, Json(ErrorBody::new("internal error".to_string()))).into_response();
        response
            .headers_mut()
            .insert("Retry-After", HeaderValue::from_static("5"));
        response
    }
}

/// Responds to requests for routes that do not exist.
pub async fn not_found() -> ClientError {
    ClientError::NotFound
}

/// Responds to requests using a method a route does not support.
pub async fn method_not_allowed() -> ClientError {
    ClientError::MethodNotAllowed
}

/// A handler for converting panics into proper responses for the client.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PanicHandler;

impl ResponseForPanic for PanicHandler {
    type ResponseBody = axum::body::Body;

    fn response_for_panic(
        &mut self,
        _: Box<dyn std::any::Any + Send + 'static>,
    ) -> http::Response<Self::ResponseBody> {
        ApiError::InternalError(InternalError::Other("Panic".to_string())).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use http_body_util::BodyExt;

    async fn body_of(response: axum::response::Response) -> ErrorBody {
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn not_found_is_404_with_message() {
        let response = not_found().await.into_response();
        assert_eq!(StatusCode::NOT_FOUND, response.status());
        assert_eq!("not found", body_of(response).await.message());
    }

    #[tokio::test]
    async fn method_not_allowed_is_405_with_message() {
        let response = method_not_allowed().await.into_response();
        assert_eq!(StatusCode::METHOD_NOT_ALLOWED, response.status());
        assert_eq!("method not allowed", body_of(response).await.message());
    }

    #[test]
    fn timestamp_is_rfc3339() {
        let body = ErrorBody::new("not found".to_string());
        let json = serde_json::to_value(&body).unwrap();
        let timestamp = json["timestamp"].as_str().unwrap();
        assert_eq!(
            body.timestamp(),
            OffsetDateTime::parse(timestamp, &time::format_description::well_known::Rfc3339)
                .unwrap()
        );
        let parsed: ErrorBody = serde_json::from_value(json).unwrap();
        assert_eq!(body, parsed);
    }

    #[tokio::test]
    async fn internal_errors_hide_details() {
        let response = ApiError::from(InternalError::Other("secret".to_string())).into_response();
        assert_eq!(StatusCode::INTERNAL_SERVER_ERROR, response.status());
        assert_eq!("5", response.headers()["Retry-After"]);
        assert_eq!("internal error", body_of(response).await.message());
    }

    #[tokio::test]
    async fn panics_become_500() {
        let response = PanicHandler.response_for_panic(Box::new("boom"));
        assert_eq!(StatusCode::INTERNAL_SERVER_ERROR, response.status());
    }
}
