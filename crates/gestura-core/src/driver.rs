//! Automation driver trait for backend-agnostic UI automation.
//!
//! This module defines the [`AutomationDriver`] trait, the seam between the
//! waiting/search layer and whatever backend actually renders and drives the
//! UI (a device agent, a simulator bridge, a browser driver). The poller and
//! scroller work against `Arc<dyn AutomationDriver>` and never know the
//! implementation details.
//!
//! The contract the waiting layer relies on:
//!
//! - [`find_elements`](AutomationDriver::find_elements) returns an empty
//!   vector, never an error, when nothing matches — "no match yet" is the one
//!   retryable outcome.
//! - [`find_element`](AutomationDriver::find_element) raises
//!   [`DriverError::ElementNotFound`] when absent, and is used only for
//!   immediate, non-waiting checks.
//! - Any other error (connection loss, malformed locator, command failure)
//!   propagates to the caller unchanged and is never retried.

use async_trait::async_trait;
use thiserror::Error;

use crate::element::{SurfaceSize, UiElement};
use crate::gesture::GestureVector;
use crate::locator::Locator;

/// Errors that can occur during automation driver operations.
///
/// Unifies errors from all backends behind a single type so the waiting
/// layer can handle them uniformly.
#[derive(Error, Debug)]
pub enum DriverError {
    /// A command or operation failed with the given message.
    #[error("Command failed: {0}")]
    CommandFailed(String),

    /// No element matched the locator on an immediate lookup.
    #[error("No element matching {0}")]
    ElementNotFound(String),

    /// The backend is not available or not connected.
    #[error("Not connected to automation backend")]
    NotConnected,

    /// The connection to the backend was lost.
    #[error("Connection lost: {0}")]
    ConnectionLost(String),

    /// The backend rejected the locator itself (not a failed match).
    #[error("Invalid locator {locator}: {reason}")]
    InvalidLocator {
        /// Display form of the rejected locator.
        locator: String,
        /// Backend-reported reason.
        reason: String,
    },

    /// The backend reported an element without the geometry a gesture needs.
    #[error("Element matching {0} has no reported frame")]
    MissingFrame(String),

    /// An I/O error occurred.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Trait for backend-agnostic UI automation.
///
/// Implementors provide element lookup, surface geometry, gesture execution,
/// and per-element actions. All methods are async to support both TCP agents
/// and CLI tools wrapped in `spawn_blocking`.
///
/// Element values returned by queries are snapshots; the waiting layer
/// re-resolves its locator on every poll rather than holding a snapshot
/// across checks.
#[async_trait]
pub trait AutomationDriver: Send + Sync {
    /// Find all elements currently matching the locator.
    ///
    /// Returns an empty vector when nothing matches. An error here means the
    /// query itself failed (bad locator, lost connection), not an empty match.
    async fn find_elements(&self, locator: &Locator) -> Result<Vec<UiElement>, DriverError>;

    /// Find a single element matching the locator, failing immediately when
    /// absent.
    ///
    /// The default implementation takes the first result of
    /// [`find_elements`](Self::find_elements) and maps an empty match to
    /// [`DriverError::ElementNotFound`]. Used for immediate, non-waiting
    /// checks only; waiting callers go through the poller.
    async fn find_element(&self, locator: &Locator) -> Result<UiElement, DriverError> {
        self.find_elements(locator)
            .await?
            .into_iter()
            .next()
            .ok_or_else(|| DriverError::ElementNotFound(locator.to_string()))
    }

    /// Dimensions of the addressable surface, in points.
    async fn surface_size(&self) -> Result<SurfaceSize, DriverError>;

    /// Perform a press-hold-move-release drag described by the vector.
    ///
    /// The sequence is atomic from the caller's perspective: no other gesture
    /// interleaves with it.
    async fn perform_gesture(&self, vector: &GestureVector) -> Result<(), DriverError>;

    /// Tap a previously resolved element.
    async fn tap(&self, element: &UiElement) -> Result<(), DriverError>;

    /// Type text into a previously resolved element.
    async fn type_text(&self, element: &UiElement, text: &str) -> Result<(), DriverError>;

    /// Clear the text content of a previously resolved element.
    async fn clear_text(&self, element: &UiElement) -> Result<(), DriverError>;

    /// Read a named attribute of a previously resolved element.
    ///
    /// Returns `Ok(None)` when the element has no such attribute.
    async fn attribute(
        &self,
        element: &UiElement,
        name: &str,
    ) -> Result<Option<String>, DriverError>;

    /// Read the visible text of a previously resolved element.
    async fn text(&self, element: &UiElement) -> Result<String, DriverError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn driver_error_display() {
        let err = DriverError::CommandFailed("tap failed".to_string());
        assert!(err.to_string().contains("tap failed"));

        let err = DriverError::ElementNotFound("id='missing'".to_string());
        assert!(err.to_string().contains("id='missing'"));

        let err = DriverError::NotConnected;
        assert!(err.to_string().contains("Not connected"));

        let err = DriverError::ConnectionLost("reset by peer".to_string());
        assert!(err.to_string().contains("reset by peer"));

        let err = DriverError::InvalidLocator {
            locator: "id='???'".to_string(),
            reason: "unsupported selector".to_string(),
        };
        assert!(err.to_string().contains("unsupported selector"));

        let err = DriverError::MissingFrame("label='Row'".to_string());
        assert!(err.to_string().contains("no reported frame"));
    }
}
