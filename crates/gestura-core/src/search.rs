//! Gesture-driven element search.
//!
//! The [`Scroller`] locates elements that are not currently visible by
//! performing directional scroll gestures and re-checking presence, bounded
//! by a retry budget. The check happens before each swipe, so an element
//! already on screen is never swiped past, and a mid-loop miss never raises:
//! only the terminal zero-timeout wait can fail, producing one clearly
//! attributable error rather than per-iteration noise.

use std::sync::Arc;
use std::time::Duration;

use tracing::{debug, info_span, Instrument};

use crate::config::WaitConfig;
use crate::driver::{AutomationDriver, DriverError};
use crate::element::UiElement;
use crate::gesture::{element_swipe_left_vector, scroll_vector, SwipeDirection};
use crate::locator::Locator;
use crate::poller::{Poller, WaitError};

/// Target of an element-relative swipe: either a locator resolved internally
/// via a bounded wait, or an already resolved element used as-is.
#[derive(Debug, Clone)]
pub enum SwipeTarget {
    /// Resolve this locator first (bounded wait, configured timeout).
    Locator(Locator),
    /// Use this element snapshot without re-resolution.
    Element(UiElement),
}

impl From<Locator> for SwipeTarget {
    fn from(locator: Locator) -> Self {
        Self::Locator(locator)
    }
}

impl From<UiElement> for SwipeTarget {
    fn from(element: UiElement) -> Self {
        Self::Element(element)
    }
}

/// Short description of an element for diagnostics, preferring its
/// identifier, then label, then type.
fn describe(element: &UiElement) -> String {
    if let Some(id) = &element.identifier {
        format!("id='{id}'")
    } else if let Some(label) = &element.label {
        format!("label='{label}'")
    } else {
        format!("<{}>", element.element_type.as_deref().unwrap_or("element"))
    }
}

/// Drives scroll gestures and presence re-checks against an
/// [`AutomationDriver`].
///
/// Stateless between calls; gesture-then-recheck sequences within one call
/// are strictly sequential.
#[derive(Clone)]
pub struct Scroller {
    poller: Poller,
}

impl Scroller {
    /// Creates a scroller with default [`WaitConfig`] timings.
    pub fn new(driver: Arc<dyn AutomationDriver>) -> Self {
        Self {
            poller: Poller::new(driver),
        }
    }

    /// Creates a scroller with explicit timings.
    pub fn with_config(driver: Arc<dyn AutomationDriver>, config: WaitConfig) -> Self {
        Self {
            poller: Poller::with_config(driver, config),
        }
    }

    /// Returns the poller used for terminal waits and target resolution.
    pub fn poller(&self) -> &Poller {
        &self.poller
    }

    fn driver(&self) -> &Arc<dyn AutomationDriver> {
        self.poller.driver()
    }

    fn config(&self) -> &WaitConfig {
        self.poller.config()
    }

    /// Performs one full-surface scroll swipe along `direction`.
    ///
    /// The vector spans 80% to 20% of the surface on the scroll axis,
    /// centered on the other axis. A `hold` of `None` uses the quick default
    /// (200 ms out of the box).
    pub async fn swipe(
        &self,
        direction: SwipeDirection,
        hold: Option<Duration>,
    ) -> Result<(), DriverError> {
        let hold = hold.unwrap_or_else(|| self.config().quick_swipe());
        let surface = self.driver().surface_size().await?;
        let vector = scroll_vector(surface, direction, hold);
        debug!(?direction, hold_ms = hold.as_millis() as u64, "swiping");
        self.driver().perform_gesture(&vector).await
    }

    /// Scrolls upward until `locator` resolves or the swipe budget runs out.
    ///
    /// Each iteration first checks presence with an immediate, non-waiting
    /// query; on a hit the first match is returned with no further gestures.
    /// After `max_attempts` swipes, one terminal zero-timeout wait surfaces
    /// the failure, annotated with the swipe count on top of `message`.
    pub async fn search_by_scrolling(
        &self,
        locator: &Locator,
        message: &str,
        max_attempts: u32,
    ) -> Result<UiElement, WaitError> {
        let span = info_span!("search_by_scrolling", locator = %locator, max_attempts);
        async {
            let mut swipes = 0u32;
            loop {
                let mut matches = self.driver().find_elements(locator).await?;
                if !matches.is_empty() {
                    debug!(swipes, "element discovered");
                    return Ok(matches.swap_remove(0));
                }
                if swipes >= max_attempts {
                    let annotated =
                        format!("gave up after {swipes} swipe(s) without finding it: {message}");
                    return self
                        .poller
                        .wait_until_present(locator, &annotated, Some(Duration::ZERO))
                        .await;
                }
                self.swipe(SwipeDirection::Up, None).await?;
                swipes += 1;
            }
        }
        .instrument(span)
        .await
    }

    /// Swipes an element horizontally from its right edge to its left edge
    /// at its vertical midpoint, e.g. to reveal a row action or dismiss it.
    ///
    /// A [`SwipeTarget::Locator`] is resolved first with a bounded wait
    /// (10 s out of the box); a [`SwipeTarget::Element`] is used without
    /// re-resolution. The vector is clamped to the surface bounds before
    /// execution. An element reported without a frame is a driver-contract
    /// failure, not a timeout.
    pub async fn swipe_element_offscreen(
        &self,
        target: impl Into<SwipeTarget>,
        message: &str,
    ) -> Result<(), WaitError> {
        let element = match target.into() {
            SwipeTarget::Element(element) => element,
            SwipeTarget::Locator(locator) => {
                self.poller
                    .wait_until_present(
                        &locator,
                        message,
                        Some(self.config().offscreen_resolve_timeout()),
                    )
                    .await?
            }
        };
        let frame = element
            .frame
            .ok_or_else(|| DriverError::MissingFrame(describe(&element)))?;
        let surface = self.driver().surface_size().await?;
        let vector =
            element_swipe_left_vector(frame, self.config().element_swipe()).clamp_to(surface);
        debug!(target = %describe(&element), "swiping element offscreen");
        self.driver().perform_gesture(&vector).await?;
        Ok(())
    }
}
