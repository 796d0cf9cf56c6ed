//! wgpu render backend for the fractal viewer.
//!
//! Draws a full-screen quad through the externally loaded fractal kernel,
//! colored by a 1-D palette texture, with the view state uploaded as
//! uniforms each frame.
//!
//! # Invariants
//! - The renderer never mutates the view state.
//! - GPU resources are created once at startup and dropped once at
//!   shutdown; nothing is reallocated mid-run.

mod gpu;
mod uniforms;

pub use gpu::{FractalRenderer, RenderError};
pub use uniforms::ViewUniforms;

pub fn crate_info() -> &'static str {
    "fractalspace-render-wgpu v0.1.0"
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn crate_loads() {
        assert!(crate_info().contains("render-wgpu"));
    }
}
