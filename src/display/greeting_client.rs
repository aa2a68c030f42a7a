//! HTTP client for the hello world endpoint.

use super::DisplayError;
use crate::core::greeting::greeting_model::Greeting;
use reqwest::Client;
use tracing::instrument;

/// Fetches greetings from a running greeting service.
#[derive(Clone, Debug)]
pub struct GreetingClient {
    client: Client,
    base_url: String,
}

impl GreetingClient {
    /// Constructs a client for the service at `base_url`.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_client(Client::new(), base_url)
    }

    /// Constructs a client reusing an existing [`Client`].
    pub fn with_client(client: Client, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { client, base_url }
    }

    /// The base url of the service.
    pub fn base_url(&self) -> &str {
        self.base_url.as_ref()
    }

    /// Fetches the greeting with a single `GET /helloworld`.
    #[instrument(skip(self), fields(base_url = %self.base_url))]
    pub async fn fetch_greeting(&self) -> Result<Greeting, DisplayError> {
        let url = format!("{}/helloworld", self.base_url);
        tracing::debug!("Sending request: GET {}", url);
        let greeting = self
            .client
            .get(url)
            .send()
            .await?
            .error_for_status()?
            .json::<Greeting>()
            .await?;
        tracing::debug!("Received greeting for {}", greeting.name());
        Ok(greeting)
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::GreetingClient;
    use crate::display::DisplayError;
    use axum::{routing::get, Json, Router};
    use tokio::net::TcpListener;

    /// Serves `body` as the hello world response, returning the base url.
    pub(crate) async fn spawn_greeting_server(body: serde_json::Value) -> String {
        let app = Router::new().route("/helloworld", get(move || async move { Json(body) }));
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let port = listener.local_addr().unwrap().port();
        tokio::spawn(async move { axum::serve(listener, app).await });
        format!("http://127.0.0.1:{port}")
    }

    #[test]
    fn trailing_slash_is_dropped() {
        let client = GreetingClient::new("http://localhost:8080/");
        assert_eq!("http://localhost:8080", client.base_url());
    }

    #[tokio::test]
    async fn fetches_from_running_service() {
        let url = crate::app::spawn_app().await.unwrap();
        let greeting = GreetingClient::new(url).fetch_greeting().await.unwrap();
        assert_eq!("Unicorn", greeting.name());
    }

    #[tokio::test]
    async fn missing_endpoint_is_an_error() {
        let url = crate::app::spawn_app().await.unwrap();
        let client = GreetingClient::new(format!("{url}/nothing-here"));
        assert!(client.fetch_greeting().await.is_err());
    }

    #[tokio::test]
    async fn bare_name_string_is_a_decode_error() {
        let url = spawn_greeting_server(serde_json::json!("Unicorn")).await;
        let result = GreetingClient::new(url).fetch_greeting().await;
        assert!(matches!(result, Err(DisplayError::ReqwestError(e)) if e.is_decode()));
    }

    #[tokio::test]
    async fn object_without_name_is_a_decode_error() {
        let url = spawn_greeting_server(serde_json::json!({})).await;
        let result = GreetingClient::new(url).fetch_greeting().await;
        assert!(matches!(result, Err(DisplayError::ReqwestError(e)) if e.is_decode()));
    }

    #[tokio::test]
    async fn reads_name_field_of_greeting_object() {
        let url = spawn_greeting_server(serde_json::json!({ "name": "Pegasus" })).await;
        let greeting = GreetingClient::new(url).fetch_greeting().await.unwrap();
        assert_eq!("Pegasus", greeting.name());
    }
}
