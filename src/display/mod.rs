//! A client-side component that fetches a greeting and renders it.
//!
//! The component starts out [`Loading`](display_state::DisplayState::Loading),
//! fetches the greeting once when mounted and then renders `Hello {name}`.

pub mod display_state;
pub mod greeting_client;
pub mod greeting_display;

/// Errors from fetching a greeting.
#[derive(Debug, thiserror::Error)]
pub enum DisplayError {
    /// The request could not be sent, or the response could not be decoded.
    #[error("reqwest error: {0}")]
    ReqwestError(#[from] reqwest::Error),
    /// The view could not be rendered.
    #[error("render error: {0}")]
    RenderError(#[from] askama::Error),
}
