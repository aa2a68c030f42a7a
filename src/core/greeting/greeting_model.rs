//! The greeting entity.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// The name used when nobody in particular is being greeted.
pub const DEFAULT_NAME: &str = "Unicorn";

/// A greeting carrying the name to display.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Greeting {
    /// The name to greet.
    #[schema(example = "Unicorn")]
    name: String,
}

impl Greeting {
    /// Constructs a new greeting.
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    /// Returns the name.
    pub fn name(&self) -> &str {
        self.name.as_ref()
    }
}

impl Default for Greeting {
    fn default() -> Self {
        Self::new(DEFAULT_NAME)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn greeting_with_given_name() {
        let name = "Unicorn";
        let greeting = Greeting::new(name);
        assert_eq!(name, greeting.name());
    }

    #[test]
    fn name_is_not_modified() {
        let greeting = Greeting::new("  Ünïcörn <3 ");
        assert_eq!("  Ünïcörn <3 ", greeting.name());
    }

    #[test]
    fn serializes_as_name_object() {
        let json = serde_json::to_value(Greeting::default()).unwrap();
        assert_eq!(serde_json::json!({ "name": "Unicorn" }), json);
    }
}
