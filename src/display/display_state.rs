//! What the display currently shows.

use crate::core::greeting::greeting_model::Greeting;

/// The text shown while waiting for the greeting.
pub const LOADING_TEXT: &str = "Loading...";

/// The state of a [`GreetingDisplay`](super::greeting_display::GreetingDisplay).
///
/// The only transition is from [`DisplayState::Loading`] to [`DisplayState::Loaded`].
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum DisplayState {
    /// The greeting has not arrived yet.
    #[default]
    Loading,
    /// The greeting has arrived.
    Loaded(Greeting),
}

impl DisplayState {
    /// Moves to [`DisplayState::Loaded`]. A loaded state keeps its greeting.
    pub fn resolve(self, greeting: Greeting) -> Self {
        match self {
            Self::Loading => Self::Loaded(greeting),
            loaded @ Self::Loaded(_) => loaded,
        }
    }

    /// Whether the greeting is still pending.
    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    /// The greeting, once loaded.
    pub fn greeting(&self) -> Option<&Greeting> {
        match self {
            Self::Loading => None,
            Self::Loaded(greeting) => Some(greeting),
        }
    }

    /// Renders the state as plain text.
    pub fn render(&self) -> String {
        match self {
            Self::Loading => LOADING_TEXT.to_string(),
            Self::Loaded(greeting) => format!("Hello {}", greeting.name()),
        }
    }
}
