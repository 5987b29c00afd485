//! Bounded condition polling.
//!
//! The [`Poller`] turns "does this element exist yet" into a blocking call
//! with a deterministic outcome: it re-resolves the locator, sleeps one poll
//! interval, and re-checks, until the condition holds or the wall-clock
//! timeout elapses. The condition is evaluated at least once even with a zero
//! timeout, and a timeout failure is returned no earlier than the full bound
//! and no later than one poll interval past it.
//!
//! Only "no match yet" is retried. Driver errors (lost connection, rejected
//! locator) propagate immediately through [`WaitError::Driver`].

use std::sync::Arc;
use std::time::Duration;

use thiserror::Error;
use tokio::time::Instant;
use tracing::{debug, info_span, Instrument};

use crate::config::WaitConfig;
use crate::driver::{AutomationDriver, DriverError};
use crate::element::UiElement;
use crate::locator::Locator;

/// Errors produced by bounded waits.
#[derive(Error, Debug)]
pub enum WaitError {
    /// The condition never held within the allotted time.
    ///
    /// Carries the caller-supplied context, a description of what was being
    /// waited for, and the elapsed bound, so the failure is diagnosable
    /// without a re-run.
    #[error("Timed out after {}ms waiting for {waiting_for}: {message}", .waited.as_millis())]
    Timeout {
        /// Caller-supplied diagnostic context, echoed verbatim.
        message: String,
        /// Description of the condition (locator display, possibly annotated).
        waiting_for: String,
        /// The timeout bound that elapsed.
        waited: Duration,
    },

    /// A driver-level error interrupted the wait; never retried.
    #[error(transparent)]
    Driver(#[from] DriverError),
}

impl WaitError {
    fn timeout(message: &str, waiting_for: String, waited: Duration) -> Self {
        Self::Timeout {
            message: message.to_string(),
            waiting_for,
            waited,
        }
    }
}

/// Polls element existence against an [`AutomationDriver`] with bounded-time
/// semantics.
///
/// Stateless between calls: every wait re-resolves its locator on each poll
/// and retains nothing afterwards. Cloning is cheap (the driver is shared
/// behind an `Arc`).
#[derive(Clone)]
pub struct Poller {
    driver: Arc<dyn AutomationDriver>,
    config: WaitConfig,
}

impl Poller {
    /// Creates a poller with default [`WaitConfig`] timings.
    pub fn new(driver: Arc<dyn AutomationDriver>) -> Self {
        Self::with_config(driver, WaitConfig::default())
    }

    /// Creates a poller with explicit timings.
    pub fn with_config(driver: Arc<dyn AutomationDriver>, config: WaitConfig) -> Self {
        Self { driver, config }
    }

    /// Returns the underlying driver.
    pub fn driver(&self) -> &Arc<dyn AutomationDriver> {
        &self.driver
    }

    /// Returns the timing configuration.
    pub fn config(&self) -> &WaitConfig {
        &self.config
    }

    /// Waits until at least one element matches `locator`, returning the
    /// first match in driver order.
    ///
    /// `timeout` of `None` applies the configured default (5 s out of the
    /// box). A zero timeout checks exactly once and fails without sleeping.
    pub async fn wait_until_present(
        &self,
        locator: &Locator,
        message: &str,
        timeout: Option<Duration>,
    ) -> Result<UiElement, WaitError> {
        self.wait_until_all_present(locator, message, timeout)
            .await
            // The matched set is non-empty by construction.
            .map(|matches| matches.into_iter().next().unwrap_or_default())
    }

    /// Waits until at least one element matches `locator`, returning the full
    /// current match set in driver-reported order.
    pub async fn wait_until_all_present(
        &self,
        locator: &Locator,
        message: &str,
        timeout: Option<Duration>,
    ) -> Result<Vec<UiElement>, WaitError> {
        let timeout = timeout.unwrap_or_else(|| self.config.default_timeout());
        let span = info_span!("wait_until_present", locator = %locator, timeout_ms = timeout.as_millis() as u64);
        async {
            let start = Instant::now();
            loop {
                let matches = self.driver.find_elements(locator).await?;
                if !matches.is_empty() {
                    debug!(
                        elapsed_ms = start.elapsed().as_millis() as u64,
                        count = matches.len(),
                        "condition met"
                    );
                    return Ok(matches);
                }
                if start.elapsed() >= timeout {
                    return Err(WaitError::timeout(message, locator.to_string(), timeout));
                }
                tokio::time::sleep(self.config.poll_interval()).await;
            }
        }
        .instrument(span)
        .await
    }

    /// Waits until no element matches `locator`.
    ///
    /// Succeeds immediately if nothing ever matched; fails once the timeout
    /// elapses while a match still exists.
    pub async fn wait_until_absent(
        &self,
        locator: &Locator,
        message: &str,
        timeout: Option<Duration>,
    ) -> Result<(), WaitError> {
        let timeout = timeout.unwrap_or_else(|| self.config.default_timeout());
        let span = info_span!("wait_until_absent", locator = %locator, timeout_ms = timeout.as_millis() as u64);
        async {
            let start = Instant::now();
            loop {
                let matches = self.driver.find_elements(locator).await?;
                if matches.is_empty() {
                    debug!(
                        elapsed_ms = start.elapsed().as_millis() as u64,
                        "condition met"
                    );
                    return Ok(());
                }
                if start.elapsed() >= timeout {
                    return Err(WaitError::timeout(
                        message,
                        format!("{locator} to disappear"),
                        timeout,
                    ));
                }
                tokio::time::sleep(self.config.poll_interval()).await;
            }
        }
        .instrument(span)
        .await
    }

    /// Waits for the element, then taps it once.
    ///
    /// Only existence is retried; the tap itself is attempted exactly once
    /// and its failure propagates as a driver error.
    pub async fn wait_then_tap(
        &self,
        locator: &Locator,
        message: &str,
        timeout: Option<Duration>,
    ) -> Result<UiElement, WaitError> {
        let element = self.wait_until_present(locator, message, timeout).await?;
        self.driver.tap(&element).await?;
        Ok(element)
    }

    /// Waits for the element, then types `text` into it once.
    pub async fn wait_then_type_text(
        &self,
        locator: &Locator,
        text: &str,
        message: &str,
        timeout: Option<Duration>,
    ) -> Result<UiElement, WaitError> {
        let element = self.wait_until_present(locator, message, timeout).await?;
        self.driver.type_text(&element, text).await?;
        Ok(element)
    }

    /// Waits for the element, then clears its text content once.
    pub async fn wait_then_clear(
        &self,
        locator: &Locator,
        message: &str,
        timeout: Option<Duration>,
    ) -> Result<UiElement, WaitError> {
        let element = self.wait_until_present(locator, message, timeout).await?;
        self.driver.clear_text(&element).await?;
        Ok(element)
    }

    /// Waits for the element, then reads the named attribute once.
    pub async fn wait_then_attribute(
        &self,
        locator: &Locator,
        name: &str,
        message: &str,
        timeout: Option<Duration>,
    ) -> Result<Option<String>, WaitError> {
        let element = self.wait_until_present(locator, message, timeout).await?;
        Ok(self.driver.attribute(&element, name).await?)
    }

    /// Waits for the element, then reads its visible text once.
    pub async fn wait_then_text(
        &self,
        locator: &Locator,
        message: &str,
        timeout: Option<Duration>,
    ) -> Result<String, WaitError> {
        let element = self.wait_until_present(locator, message, timeout).await?;
        Ok(self.driver.text(&element).await?)
    }
}
