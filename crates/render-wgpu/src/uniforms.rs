use bytemuck::{Pod, Zeroable};
use fractalspace_common::ViewState;

/// Uniform block consumed by the fractal kernel.
///
/// Field order and size (16 bytes) match the WGSL `ViewUniforms` struct:
/// `offset: vec2<f32>`, `zoom: f32`, `max_iter: f32`.
#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, Pod, Zeroable)]
pub struct ViewUniforms {
    pub offset: [f32; 2],
    pub zoom: f32,
    pub max_iter: f32,
}

impl ViewUniforms {
    pub fn new(view: &ViewState, max_iter: f32) -> Self {
        Self {
            offset: [view.center.x, view.center.y],
            zoom: view.zoom,
            max_iter,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn layout_matches_the_wgsl_struct() {
        assert_eq!(std::mem::size_of::<ViewUniforms>(), 16);
        assert_eq!(std::mem::align_of::<ViewUniforms>(), 4);
    }

    #[test]
    fn packs_the_view_state() {
        let view = ViewState::new(-0.75, 0.1, 0.25);
        let uniforms = ViewUniforms::new(&view, 256.0);
        assert_eq!(uniforms.offset, [-0.75, 0.1]);
        assert_eq!(uniforms.zoom, 0.25);
        assert_eq!(uniforms.max_iter, 256.0);
    }
}
