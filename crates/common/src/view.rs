use glam::Vec2;

/// Pan/zoom parameters defining the visible region of the fractal.
///
/// `zoom` is the half-extent of the visible window on the complex plane:
/// the kernel maps the full-screen quad to `[center - zoom, center + zoom]`
/// on both axes, so dividing `zoom` moves deeper into the set.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewState {
    pub center: Vec2,
    pub zoom: f32,
}

impl Default for ViewState {
    fn default() -> Self {
        Self {
            center: Vec2::ZERO,
            zoom: 1.0,
        }
    }
}

impl ViewState {
    pub fn new(center_x: f32, center_y: f32, zoom: f32) -> Self {
        debug_assert!(zoom > 0.0);
        Self {
            center: Vec2::new(center_x, center_y),
            zoom,
        }
    }

    /// The complex-plane rectangle currently on screen.
    pub fn window(&self) -> ViewWindow {
        ViewWindow {
            min: self.center - Vec2::splat(self.zoom),
            max: self.center + Vec2::splat(self.zoom),
        }
    }
}

/// Axis-aligned rectangle on the complex plane.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewWindow {
    pub min: Vec2,
    pub max: Vec2,
}

impl ViewWindow {
    pub fn width(&self) -> f32 {
        self.max.x - self.min.x
    }

    pub fn height(&self) -> f32 {
        self.max.y - self.min.y
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_view_covers_unit_window() {
        let view = ViewState::default();
        assert_eq!(view.center, Vec2::ZERO);
        assert_eq!(view.zoom, 1.0);

        let window = view.window();
        assert_eq!(window.min, Vec2::new(-1.0, -1.0));
        assert_eq!(window.max, Vec2::new(1.0, 1.0));
    }

    #[test]
    fn window_follows_center_and_zoom() {
        let view = ViewState::new(-0.5, 0.25, 0.125);
        let window = view.window();
        assert_eq!(window.min, Vec2::new(-0.625, 0.125));
        assert_eq!(window.max, Vec2::new(-0.375, 0.375));
        assert_eq!(window.width(), 0.25);
        assert_eq!(window.height(), 0.25);
    }
}
