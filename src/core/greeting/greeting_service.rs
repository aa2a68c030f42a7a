//! A service for greeting someone.

use super::greeting_model::{Greeting, DEFAULT_NAME};
use tracing::instrument;

/// Returns a fresh greeting for the default name.
#[instrument(ret)]
pub fn default_greeting() -> Greeting {
    Greeting::new(DEFAULT_NAME)
}
