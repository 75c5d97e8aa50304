//! A headless windowing engine for responsive, uniformly-sized multi-column grids.
//!
//! For host-side helpers (scroll throttling, event subscriptions, item rendering), see the
//! `virtual-grid-adapter` crate.
//!
//! Given a large ordered collection rendered in a grid whose column count follows the
//! container width, this crate determines which contiguous, row-aligned index range is
//! visible without laying out every item: column/row derivation, offset → row lookup with a
//! preload margin, a two-pass bootstrap for the first measurement, and a change gate that
//! suppresses redundant updates.
//!
//! It is UI-agnostic. A DOM/TUI/GUI layer is expected to provide, on every trigger:
//! - the container's content width
//! - the scroll offset and viewport height of the scroll container
//! - the rendered grid's content height
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

#[cfg(test)]
extern crate std;

#[macro_use]
mod macros;

mod config;
mod error;
mod gate;
mod grid;
mod layout;
mod state;
mod types;
mod window;


pub use config::{ConfigField, ConfigWarning, GridConfig, GridOptions, OnChangeCallback};
pub use error::InvalidConfig;
pub use gate::is_changed;
pub use grid::VirtualGrid;
pub use layout::{column_count, compute_layout};
pub use state::{GridState, LayoutState, WindowState};
pub use types::{GridItem, GridPosition, Measurement, RenderPhase, Trigger};
pub use window::{compute_window, row_height_with_gap};
