use crate::navigator::{NavConfig, NavOutcome, Navigator};
use fractalspace_common::ViewState;
use fractalspace_input::InputSnapshot;

/// Frame-controller lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Running,
    Terminated,
}

/// Owns the authoritative view state and steps it once per frame.
///
/// The session is the single writer of the view: input flows in through
/// [`advance`](NavSession::advance), the renderer reads the result.
/// Termination is observed in the same call that requests it, and a
/// terminated session ignores all further input.
#[derive(Debug, Clone)]
pub struct NavSession {
    view: ViewState,
    navigator: Navigator,
    phase: Phase,
}

impl NavSession {
    pub fn new(config: NavConfig) -> Self {
        Self::with_view(ViewState::default(), config)
    }

    pub fn with_view(view: ViewState, config: NavConfig) -> Self {
        Self {
            view,
            navigator: Navigator::new(config),
            phase: Phase::Running,
        }
    }

    pub fn view(&self) -> ViewState {
        self.view
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn is_running(&self) -> bool {
        self.phase == Phase::Running
    }

    /// Feed one frame of input. Returns the phase after the update so the
    /// caller can skip the draw for a frame that terminated the session.
    pub fn advance(&mut self, snap: &InputSnapshot, dt: f32) -> Phase {
        if self.phase == Phase::Terminated {
            return Phase::Terminated;
        }

        if self.navigator.apply(&mut self.view, snap, dt) == NavOutcome::Exit {
            tracing::info!("exit requested, terminating session");
            self.phase = Phase::Terminated;
        }
        self.phase
    }
}
