/// One frame of navigation input, normalized across devices.
///
/// A gamepad, the keyboard fallback, and the scripted replay source all
/// produce this same shape; the navigation layer never sees raw events.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct InputSnapshot {
    pub left: bool,
    pub right: bool,
    pub up: bool,
    pub down: bool,
    pub zoom_in: bool,
    pub zoom_out: bool,
    pub exit: bool,
}

impl InputSnapshot {
    /// Every button released. Missing or malformed input maps here.
    pub const NEUTRAL: Self = Self {
        left: false,
        right: false,
        up: false,
        down: false,
        zoom_in: false,
        zoom_out: false,
        exit: false,
    };

    pub fn is_neutral(&self) -> bool {
        *self == Self::NEUTRAL
    }
}
