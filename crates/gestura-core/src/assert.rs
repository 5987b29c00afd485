//! Thin assertion boundary layer.
//!
//! Consumes the poller's outcomes and immediate driver checks, turning them
//! into [`AssertionError`]s for test-step callers. Only this layer raises
//! assertion failures; the poller and scroller never do.

use std::sync::Arc;

use thiserror::Error;

use crate::config::WaitConfig;
use crate::driver::{AutomationDriver, DriverError};
use crate::locator::Locator;
use crate::poller::{Poller, WaitError};

/// Failures raised by the assertion helpers.
#[derive(Error, Debug)]
pub enum AssertionError {
    /// An element expected to be present was not found.
    #[error("Expected element {locator} to be present: {message}")]
    NotPresent {
        /// Display form of the locator.
        locator: String,
        /// Caller-supplied context.
        message: String,
    },

    /// An element expected to be absent matched.
    #[error("Expected no element matching {locator} but found {count}: {message}")]
    UnexpectedlyPresent {
        /// Display form of the locator.
        locator: String,
        /// How many elements matched.
        count: usize,
        /// Caller-supplied context.
        message: String,
    },

    /// An element's text did not equal the expected value.
    #[error("Text mismatch on {locator}: expected '{expected}', actual '{actual}': {message}")]
    TextMismatch {
        /// Display form of the locator.
        locator: String,
        /// The text the caller expected.
        expected: String,
        /// The text the element actually had.
        actual: String,
        /// Caller-supplied context.
        message: String,
    },

    /// A bounded wait inside an assertion failed before the comparison ran.
    #[error(transparent)]
    Wait(#[from] WaitError),

    /// A driver-level error interrupted the check.
    #[error(transparent)]
    Driver(#[from] DriverError),
}

/// Immediate and bounded-wait assertions over an [`AutomationDriver`].
#[derive(Clone)]
pub struct Asserter {
    poller: Poller,
}

impl Asserter {
    /// Creates an asserter with default [`WaitConfig`] timings.
    pub fn new(driver: Arc<dyn AutomationDriver>) -> Self {
        Self {
            poller: Poller::new(driver),
        }
    }

    /// Creates an asserter with explicit timings.
    pub fn with_config(driver: Arc<dyn AutomationDriver>, config: WaitConfig) -> Self {
        Self {
            poller: Poller::with_config(driver, config),
        }
    }

    /// Asserts that `locator` resolves right now, without waiting.
    pub async fn assert_present(
        &self,
        locator: &Locator,
        message: &str,
    ) -> Result<(), AssertionError> {
        match self.poller.driver().find_element(locator).await {
            Ok(_) => Ok(()),
            Err(DriverError::ElementNotFound(_)) => Err(AssertionError::NotPresent {
                locator: locator.to_string(),
                message: message.to_string(),
            }),
            Err(other) => Err(other.into()),
        }
    }

    /// Asserts that nothing matches `locator` right now, without waiting.
    pub async fn assert_absent(
        &self,
        locator: &Locator,
        message: &str,
    ) -> Result<(), AssertionError> {
        let count = self.poller.driver().find_elements(locator).await?.len();
        if count > 0 {
            return Err(AssertionError::UnexpectedlyPresent {
                locator: locator.to_string(),
                count,
                message: message.to_string(),
            });
        }
        Ok(())
    }

    /// Asserts that the element's text equals `expected` exactly.
    ///
    /// Resolves the element with a bounded wait (30 s out of the box) so the
    /// assertion tolerates late rendering; the comparison itself runs once.
    pub async fn assert_has_text(
        &self,
        locator: &Locator,
        expected: &str,
        message: &str,
    ) -> Result<(), AssertionError> {
        let timeout = self.poller.config().text_assert_timeout();
        let element = self
            .poller
            .wait_until_present(locator, message, Some(timeout))
            .await?;
        let actual = self.poller.driver().text(&element).await?;
        if actual != expected {
            return Err(AssertionError::TextMismatch {
                locator: locator.to_string(),
                expected: expected.to_string(),
                actual,
                message: message.to_string(),
            });
        }
        Ok(())
    }
}
