use fractalspace_common::ViewState;
use fractalspace_input::InputSnapshot;
use glam::Vec2;

/// Box the view center may not leave while panning is clamped.
///
/// The default covers the interesting part of the set: real axis from
/// -2 to 1, imaginary from -1 to 1.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PanBounds {
    pub min: Vec2,
    pub max: Vec2,
}

impl Default for PanBounds {
    fn default() -> Self {
        Self {
            min: Vec2::new(-2.0, -1.0),
            max: Vec2::new(1.0, 1.0),
        }
    }
}

/// Tuning for the navigation model.
///
/// Motion is time-scaled: a frame of `time_ref` seconds applies one
/// unscaled step, shorter or longer frames scale proportionally.
#[derive(Debug, Clone, Copy)]
pub struct NavConfig {
    /// Pan distance per `time_ref`, multiplied by the current zoom.
    pub pan_step: f32,
    /// Zoom multiplier gain per `time_ref`.
    pub zoom_rate: f32,
    /// Frame duration that maps to one unscaled step, in seconds.
    pub time_ref: f32,
    /// Pan clamp box; `None` leaves panning unbounded.
    pub bounds: Option<PanBounds>,
    /// Zoom-out stops once the half-extent reaches this value; `None`
    /// allows zooming out indefinitely.
    pub max_zoom: Option<f32>,
}

impl Default for NavConfig {
    fn default() -> Self {
        Self {
            pan_step: 0.1,
            zoom_rate: 0.5,
            time_ref: 0.1,
            bounds: Some(PanBounds::default()),
            max_zoom: Some(1.0),
        }
    }
}

/// What a frame of input asked the controller to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavOutcome {
    Continue,
    Exit,
}

/// Maps one input snapshot per frame onto a view-state update.
///
/// Directions move the center by `pan_step * zoom * k` where
/// `k = dt / time_ref`, each axis gated by the pan bounds before the
/// move. Zoom-out multiplies the half-extent by `1 + zoom_rate * k`
/// (while under `max_zoom`), zoom-in divides by the same factor, so the
/// two are exact inverses for equal frame times.
#[derive(Debug, Clone, Copy, Default)]
pub struct Navigator {
    pub config: NavConfig,
}

impl Navigator {
    pub fn new(config: NavConfig) -> Self {
        Self { config }
    }

    /// Apply one frame of input to the view. The only control-flow side
    /// effect is the returned outcome.
    pub fn apply(&self, view: &mut ViewState, snap: &InputSnapshot, dt: f32) -> NavOutcome {
        let k = dt / self.config.time_ref;
        let step = self.config.pan_step * view.zoom * k;

        let (min, max) = match self.config.bounds {
            Some(b) => (b.min, b.max),
            None => (Vec2::splat(f32::NEG_INFINITY), Vec2::splat(f32::INFINITY)),
        };

        if snap.up && view.center.y < max.y {
            view.center.y += step;
        }
        if snap.down && view.center.y > min.y {
            view.center.y -= step;
        }
        if snap.right && view.center.x < max.x {
            view.center.x += step;
        }
        if snap.left && view.center.x > min.x {
            view.center.x -= step;
        }

        let factor = 1.0 + self.config.zoom_rate * k;
        if snap.zoom_out && self.config.max_zoom.is_none_or(|cap| view.zoom < cap) {
            view.zoom *= factor;
        }
        if snap.zoom_in {
            view.zoom /= factor;
        }

        if snap.exit {
            NavOutcome::Exit
        } else {
            NavOutcome::Continue
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn press(f: impl FnOnce(&mut InputSnapshot)) -> InputSnapshot {
        let mut snap = InputSnapshot::NEUTRAL;
        f(&mut snap);
        snap
    }

    #[test]
    fn pan_step_scales_with_zoom() {
        let nav = Navigator::default();
        let mut view = ViewState::new(0.0, 0.0, 0.5);
        // dt == time_ref, so k == 1 and the step is exactly pan_step * zoom.
        nav.apply(&mut view, &press(|s| s.right = true), 0.1);
        assert!((view.center.x - 0.05).abs() < 1e-6);
        assert_eq!(view.center.y, 0.0);
    }

    #[test]
    fn diagonal_pan_moves_both_axes() {
        let nav = Navigator::default();
        let mut view = ViewState::default();
        nav.apply(
            &mut view,
            &press(|s| {
                s.up = true;
                s.left = true;
            }),
            0.1,
        );
        assert!((view.center.x + 0.1).abs() < 1e-6);
        assert!((view.center.y - 0.1).abs() < 1e-6);
    }

    #[test]
    fn zoom_round_trip_restores_zoom() {
        let nav = Navigator::default();
        let mut view = ViewState::default();
        nav.apply(&mut view, &press(|s| s.zoom_in = true), 0.07);
        assert!(view.zoom < 1.0);
        nav.apply(&mut view, &press(|s| s.zoom_out = true), 0.07);
        assert!((view.zoom - 1.0).abs() < 1e-6);
    }

    #[test]
    fn zoom_stays_positive() {
        let nav = Navigator::default();
        let mut view = ViewState::default();
        let zoom_in = press(|s| s.zoom_in = true);
        for _ in 0..10_000 {
            nav.apply(&mut view, &zoom_in, 0.1);
            assert!(view.zoom > 0.0);
        }
    }

    #[test]
    fn neutral_snapshot_is_a_noop() {
        let nav = Navigator::default();
        let mut view = ViewState::new(0.3, -0.2, 0.25);
        let before = view;
        let outcome = nav.apply(&mut view, &InputSnapshot::NEUTRAL, 0.1);
        assert_eq!(view, before);
        assert_eq!(outcome, NavOutcome::Continue);
    }

    #[test]
    fn pan_is_gated_at_the_bounds() {
        let nav = Navigator::default();
        let mut view = ViewState::new(1.0, 0.0, 1.0);
        nav.apply(&mut view, &press(|s| s.right = true), 0.1);
        assert_eq!(view.center.x, 1.0);
        // The opposite direction is still free.
        nav.apply(&mut view, &press(|s| s.left = true), 0.1);
        assert!(view.center.x < 1.0);
    }

    #[test]
    fn unclamped_config_pans_past_the_bounds() {
        let nav = Navigator::new(NavConfig {
            bounds: None,
            ..NavConfig::default()
        });
        let mut view = ViewState::new(1.0, 0.0, 1.0);
        nav.apply(&mut view, &press(|s| s.right = true), 0.1);
        assert!(view.center.x > 1.0);
    }

    #[test]
    fn zoom_out_respects_the_cap() {
        let nav = Navigator::default();
        let mut view = ViewState::default();
        nav.apply(&mut view, &press(|s| s.zoom_out = true), 0.1);
        assert_eq!(view.zoom, 1.0);

        let uncapped = Navigator::new(NavConfig {
            max_zoom: None,
            ..NavConfig::default()
        });
        uncapped.apply(&mut view, &press(|s| s.zoom_out = true), 0.1);
        assert!(view.zoom > 1.0);
    }

    #[test]
    fn exit_is_reported_not_applied() {
        let nav = Navigator::default();
        let mut view = ViewState::default();
        let outcome = nav.apply(&mut view, &press(|s| s.exit = true), 0.1);
        assert_eq!(outcome, NavOutcome::Exit);
        assert_eq!(view, ViewState::default());
    }

    #[test]
    fn zoom_then_pan_scenario() {
        let nav = Navigator::default();
        let mut view = ViewState::default();

        // k == 2, factor == 2: one zoom-in halves the window.
        nav.apply(&mut view, &press(|s| s.zoom_in = true), 0.2);
        assert!((view.zoom - 0.5).abs() < 1e-6);
        assert_eq!(view.center, Vec2::ZERO);

        // k == 1: one step right moves by 0.1 * 0.5.
        nav.apply(&mut view, &press(|s| s.right = true), 0.1);
        assert!((view.center.x - 0.05).abs() < 1e-6);
        assert_eq!(view.center.y, 0.0);
    }
}
