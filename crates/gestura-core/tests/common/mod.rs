//! Shared test helpers for gestura-core integration tests.
//!
//! Provides a scripted in-process [`MockDriver`] so waits and scroll-search
//! can be exercised deterministically, without a live backend. The script
//! controls when a locator starts matching (immediately, never, after N
//! presence polls, or after N swipes), and the mock records every gesture
//! and element action it receives.

use std::sync::Mutex;

use async_trait::async_trait;

use gestura_core::driver::{AutomationDriver, DriverError};
use gestura_core::element::{ElementFrame, SurfaceSize, UiElement};
use gestura_core::gesture::GestureVector;
use gestura_core::locator::Locator;

/// When the scripted match set becomes visible.
enum Script {
    /// Matches on every query.
    Always,
    /// Never matches.
    Never,
    /// Matches starting with the Nth `find_elements` call (1-based).
    AfterPolls(u32),
    /// Matches once N gestures have been performed.
    AfterSwipes(u32),
    /// Every `find_elements` call fails with a connection loss.
    FailFind,
}

#[derive(Default)]
struct Recorded {
    find_calls: u32,
    gestures: Vec<GestureVector>,
    taps: Vec<String>,
    typed: Vec<(String, String)>,
    cleared: Vec<String>,
}

/// A scripted [`AutomationDriver`] for integration tests.
pub struct MockDriver {
    script: Script,
    elements: Vec<UiElement>,
    surface: SurfaceSize,
    recorded: Mutex<Recorded>,
}

/// Standard surface used by the mocks (iPhone-ish portrait).
pub const SURFACE: SurfaceSize = SurfaceSize {
    width: 390.0,
    height: 844.0,
};

/// Element snapshot with an identifier, no frame.
pub fn element(id: &str) -> UiElement {
    UiElement {
        identifier: Some(id.to_string()),
        ..UiElement::default()
    }
}

/// Element snapshot with an identifier, a value, and a frame.
pub fn framed_element(id: &str, frame: ElementFrame) -> UiElement {
    UiElement {
        frame: Some(frame),
        ..element(id)
    }
}

impl MockDriver {
    fn with_script(script: Script, elements: Vec<UiElement>) -> Self {
        Self {
            script,
            elements,
            surface: SURFACE,
            recorded: Mutex::new(Recorded::default()),
        }
    }

    /// Driver on which `elements` match from the first query onward.
    pub fn always(elements: Vec<UiElement>) -> Self {
        Self::with_script(Script::Always, elements)
    }

    /// Driver on which nothing ever matches.
    pub fn never() -> Self {
        Self::with_script(Script::Never, Vec::new())
    }

    /// Driver on which `elements` match starting with the Nth presence check.
    pub fn appears_on_poll(n: u32, elements: Vec<UiElement>) -> Self {
        Self::with_script(Script::AfterPolls(n), elements)
    }

    /// Driver on which `elements` match once N gestures have been performed.
    pub fn appears_after_swipes(n: u32, elements: Vec<UiElement>) -> Self {
        Self::with_script(Script::AfterSwipes(n), elements)
    }

    /// Driver whose element queries always fail with a lost connection.
    pub fn failing() -> Self {
        Self::with_script(Script::FailFind, Vec::new())
    }

    pub fn find_calls(&self) -> u32 {
        self.recorded.lock().unwrap().find_calls
    }

    pub fn gestures(&self) -> Vec<GestureVector> {
        self.recorded.lock().unwrap().gestures.clone()
    }

    pub fn taps(&self) -> Vec<String> {
        self.recorded.lock().unwrap().taps.clone()
    }

    pub fn typed(&self) -> Vec<(String, String)> {
        self.recorded.lock().unwrap().typed.clone()
    }

    pub fn cleared(&self) -> Vec<String> {
        self.recorded.lock().unwrap().cleared.clone()
    }
}

fn id_of(element: &UiElement) -> String {
    element.identifier.clone().unwrap_or_default()
}

#[async_trait]
impl AutomationDriver for MockDriver {
    async fn find_elements(&self, _locator: &Locator) -> Result<Vec<UiElement>, DriverError> {
        let mut recorded = self.recorded.lock().unwrap();
        recorded.find_calls += 1;
        let visible = match self.script {
            Script::Always => true,
            Script::Never => false,
            Script::AfterPolls(n) => recorded.find_calls >= n,
            Script::AfterSwipes(n) => recorded.gestures.len() as u32 >= n,
            Script::FailFind => {
                return Err(DriverError::ConnectionLost("agent went away".to_string()))
            }
        };
        Ok(if visible {
            self.elements.clone()
        } else {
            Vec::new()
        })
    }

    async fn surface_size(&self) -> Result<SurfaceSize, DriverError> {
        Ok(self.surface)
    }

    async fn perform_gesture(&self, vector: &GestureVector) -> Result<(), DriverError> {
        self.recorded.lock().unwrap().gestures.push(*vector);
        Ok(())
    }

    async fn tap(&self, element: &UiElement) -> Result<(), DriverError> {
        self.recorded.lock().unwrap().taps.push(id_of(element));
        Ok(())
    }

    async fn type_text(&self, element: &UiElement, text: &str) -> Result<(), DriverError> {
        self.recorded
            .lock()
            .unwrap()
            .typed
            .push((id_of(element), text.to_string()));
        Ok(())
    }

    async fn clear_text(&self, element: &UiElement) -> Result<(), DriverError> {
        self.recorded.lock().unwrap().cleared.push(id_of(element));
        Ok(())
    }

    async fn attribute(
        &self,
        element: &UiElement,
        name: &str,
    ) -> Result<Option<String>, DriverError> {
        Ok(match name {
            "value" => element.value.clone(),
            "label" => element.label.clone(),
            _ => None,
        })
    }

    async fn text(&self, element: &UiElement) -> Result<String, DriverError> {
        Ok(element
            .value
            .clone()
            .or_else(|| element.label.clone())
            .unwrap_or_default())
    }
}
