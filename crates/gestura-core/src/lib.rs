//! # gestura-core
//!
//! Bounded waits and gesture-driven element search for asynchronous,
//! visually rendered UI surfaces.
//!
//! Automation targets render asynchronously: elements appear late, animate,
//! scroll into view, or never show up at all. This crate turns that
//! uncertainty into bounded-time, deterministic-outcome primitives: a
//! condition poller that converts "is it there yet" into a blocking call
//! with a hard timeout, and a scroll-search engine that swipes until a
//! target becomes discoverable or a retry budget runs out.
//!
//! The backend is abstract: anything implementing
//! [`driver::AutomationDriver`] (a device agent, a simulator bridge, a
//! browser driver) plugs in underneath.
//!
//! ## Modules
//!
//! - [`driver`] - The [`AutomationDriver`](driver::AutomationDriver) seam and its error type
//! - [`element`] - Element snapshot and geometry value types
//! - [`locator`] - Opaque element locators, interpreted only by drivers
//! - [`config`] - Timing configuration (timeouts, poll interval, swipe holds)
//! - [`poller`] - Bounded check-sleep-recheck waits and wait-then-act compositions
//! - [`gesture`] - Pure gesture-vector geometry
//! - [`search`] - Scroll-search engine and element-relative swipes
//! - [`assert`] - Thin assertion helpers for test-step callers
//!
//! ## Example
//!
//! ```no_run
//! use std::sync::Arc;
//! use gestura_core::driver::AutomationDriver;
//! use gestura_core::locator::Locator;
//! use gestura_core::poller::Poller;
//! use gestura_core::search::Scroller;
//!
//! # async fn example(driver: Arc<dyn AutomationDriver>) -> Result<(), Box<dyn std::error::Error>> {
//! let poller = Poller::new(Arc::clone(&driver));
//! poller
//!     .wait_then_tap(&Locator::id("search-field"), "search field should be tappable", None)
//!     .await?;
//!
//! let scroller = Scroller::new(driver);
//! let footer = scroller
//!     .search_by_scrolling(&Locator::label("Footer"), "footer should exist", 10)
//!     .await?;
//! # Ok(())
//! # }
//! ```

pub mod assert;
pub mod config;
pub mod driver;
pub mod element;
pub mod gesture;
pub mod locator;
pub mod poller;
pub mod search;
