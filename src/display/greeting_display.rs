//! The greeting display component.

use super::{display_state::DisplayState, greeting_client::GreetingClient, DisplayError};
use askama::Template;
use tracing::instrument;

/// Markup for the display.
#[derive(Template)]
#[template(path = "hello_world.html")]
struct HelloWorldTemplate<'a> {
    name: Option<&'a str>,
}

/// Fetches a greeting once and renders it.
#[derive(Debug)]
pub struct GreetingDisplay {
    client: GreetingClient,
    state: DisplayState,
}

impl GreetingDisplay {
    /// Constructs a display that has not fetched anything yet.
    pub fn new(client: GreetingClient) -> Self {
        Self {
            client,
            state: DisplayState::Loading,
        }
    }

    /// The current state.
    pub fn state(&self) -> &DisplayState {
        &self.state
    }

    /// Fetches the greeting and moves to the loaded state.
    ///
    /// Does nothing once loaded. On failure the display keeps loading.
    #[instrument(skip(self))]
    pub async fn mount(&mut self) -> Result<&DisplayState, DisplayError> {
        if self.state.is_loading() {
            let greeting = self.client.fetch_greeting().await?;
            self.state = std::mem::take(&mut self.state).resolve(greeting);
        }
        Ok(&self.state)
    }

    /// Renders the current state as plain text.
    pub fn render(&self) -> String {
        self.state.render()
    }

    /// Renders the current state as HTML.
    pub fn render_html(&self) -> Result<String, DisplayError> {
        let template = HelloWorldTemplate {
            name: self.state.greeting().map(|g| g.name()),
        };
        Ok(template.render()?)
    }
}
