//! Host-side utilities for the `virtual-grid` crate.
//!
//! The `virtual-grid` crate is UI-agnostic and focuses on the windowing math and the render
//! phase sequencing. This crate provides small, framework-neutral helpers commonly needed by
//! hosts:
//!
//! - A time-injected scroll throttle (leading call immediately, trailing call guaranteed)
//! - Scoped event subscriptions that unregister on drop
//! - A controller that routes resize/scroll/data events and renders visible items
//!
//! This crate is intentionally framework-agnostic (no DOM/egui/ratatui bindings).
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

#[cfg(test)]
extern crate std;

#[macro_use]
mod macros;

mod controller;
mod renderer;
mod subscription;
mod throttle;


pub use controller::{Controller, DEFAULT_SCROLL_INTERVAL_MS};
pub use renderer::ItemRenderer;
pub use subscription::{EventHub, GridEvent, PendingEvents, Subscription};
pub use throttle::Throttle;
