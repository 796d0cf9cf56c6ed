//! Renderer-agnostic interface for the fractal viewer.
//!
//! # Invariants
//! - Renderers read the view state; they never mutate it.
//! - Zero-area framebuffer events are ignored; the previous surface
//!   configuration persists.

pub mod renderer;

pub use renderer::{DebugTextRenderer, Renderer, accept_resize};

pub fn crate_info() -> &'static str {
    "fractalspace-render v0.1.0"
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn crate_loads() {
        assert!(crate_info().contains("render"));
    }
}
