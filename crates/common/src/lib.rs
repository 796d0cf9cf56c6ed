//! Shared view-state types for the fractalspace viewer.
//!
//! # Invariants
//! - `zoom` is strictly positive; it is the half-extent of the visible window.
//! - View state is mutated only by the navigation layer, once per frame.

pub mod view;

pub use view::{ViewState, ViewWindow};

pub fn crate_info() -> &'static str {
    "fractalspace-common v0.1.0"
}
