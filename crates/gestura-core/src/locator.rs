//! Element locators.
//!
//! A [`Locator`] names zero or more elements on the current screen. The core
//! never interprets it beyond displaying it in diagnostics: only the
//! [`AutomationDriver`](crate::driver::AutomationDriver) gives it meaning.
//! Locators are immutable input values owned by the caller.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Identifies elements by accessibility identifier or label, with an optional
/// element-type filter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Locator {
    /// The value to match (accessibility identifier or label).
    pub selector: String,
    /// If true, `selector` is matched against labels; otherwise identifiers.
    pub by_label: bool,
    /// Optional element type filter (e.g., "Button", "TextField").
    pub element_type: Option<String>,
}

impl Locator {
    /// Locator matching by accessibility identifier.
    pub fn id(selector: impl Into<String>) -> Self {
        Self {
            selector: selector.into(),
            by_label: false,
            element_type: None,
        }
    }

    /// Locator matching by accessibility label.
    pub fn label(selector: impl Into<String>) -> Self {
        Self {
            selector: selector.into(),
            by_label: true,
            element_type: None,
        }
    }

    /// Restricts the locator to a specific element type.
    pub fn of_type(mut self, element_type: impl Into<String>) -> Self {
        self.element_type = Some(element_type.into());
        self
    }
}

impl fmt::Display for Locator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let kind = if self.by_label { "label" } else { "id" };
        match &self.element_type {
            Some(typ) => write!(f, "{}='{}' ({})", kind, self.selector, typ),
            None => write!(f, "{}='{}'", kind, self.selector),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_by_id() {
        let locator = Locator::id("login-button");
        assert_eq!(locator.to_string(), "id='login-button'");
    }

    #[test]
    fn display_by_label_with_type() {
        let locator = Locator::label("Sign In").of_type("Button");
        assert_eq!(locator.to_string(), "label='Sign In' (Button)");
    }

    #[test]
    fn of_type_sets_filter() {
        let locator = Locator::id("email").of_type("TextField");
        assert_eq!(locator.element_type.as_deref(), Some("TextField"));
        assert!(!locator.by_label);
    }
}
