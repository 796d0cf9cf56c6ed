use crate::snapshot::InputSnapshot;
use std::collections::VecDeque;

/// A device that can produce one input snapshot per frame.
///
/// `None` means the device is absent this frame; the caller falls back
/// to the next source in its chain (on desktop, the keyboard).
pub trait InputSource {
    fn poll(&mut self) -> Option<InputSnapshot>;
}

/// Provider for targets without a physical gamepad. Always absent,
/// which routes every frame to the keyboard fallback.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullGamepad;

impl InputSource for NullGamepad {
    fn poll(&mut self) -> Option<InputSnapshot> {
        None
    }
}

/// Errors from parsing a navigation script.
#[derive(Debug, thiserror::Error)]
pub enum ScriptError {
    #[error("unknown input token: {0:?}")]
    UnknownToken(String),
}

/// Replays a fixed sequence of snapshots, then reports absence.
///
/// Drives the headless simulator and tests; the session under test sees
/// the exact same snapshots a live device would have produced.
#[derive(Debug, Clone, Default)]
pub struct ScriptedSource {
    frames: VecDeque<InputSnapshot>,
}

impl ScriptedSource {
    pub fn new(frames: impl IntoIterator<Item = InputSnapshot>) -> Self {
        Self {
            frames: frames.into_iter().collect(),
        }
    }

    /// Parse a comma-separated script into one snapshot per token.
    ///
    /// Tokens: `left`, `right`, `up`, `down`, `in`, `out`, `exit`, `idle`.
    pub fn parse(script: &str) -> Result<Self, ScriptError> {
        let mut frames = VecDeque::new();
        for token in script.split(',') {
            let token = token.trim();
            if token.is_empty() {
                continue;
            }
            let mut snap = InputSnapshot::NEUTRAL;
            match token {
                "left" => snap.left = true,
                "right" => snap.right = true,
                "up" => snap.up = true,
                "down" => snap.down = true,
                "in" => snap.zoom_in = true,
                "out" => snap.zoom_out = true,
                "exit" => snap.exit = true,
                "idle" => {}
                other => return Err(ScriptError::UnknownToken(other.to_string())),
            }
            frames.push_back(snap);
        }
        Ok(Self { frames })
    }

    pub fn remaining(&self) -> usize {
        self.frames.len()
    }
}

impl InputSource for ScriptedSource {
    fn poll(&mut self) -> Option<InputSnapshot> {
        let frame = self.frames.pop_front();
        if frame.is_none() {
            tracing::debug!("input script exhausted");
        }
        frame
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn null_gamepad_is_always_absent() {
        let mut pad = NullGamepad;
        assert_eq!(pad.poll(), None);
        assert_eq!(pad.poll(), None);
    }

    #[test]
    fn scripted_source_replays_in_order() {
        let press_right = InputSnapshot {
            right: true,
            ..Default::default()
        };
        let mut source = ScriptedSource::new([press_right, InputSnapshot::NEUTRAL]);
        assert_eq!(source.remaining(), 2);
        assert_eq!(source.poll(), Some(press_right));
        assert_eq!(source.poll(), Some(InputSnapshot::NEUTRAL));
        assert_eq!(source.poll(), None);
    }

    #[test]
    fn parse_accepts_all_tokens() {
        let source = ScriptedSource::parse("left, right, up, down, in, out, idle, exit").unwrap();
        assert_eq!(source.remaining(), 8);
    }

    #[test]
    fn parse_maps_tokens_to_buttons() {
        let mut source = ScriptedSource::parse("in,exit").unwrap();
        let first = source.poll().unwrap();
        assert!(first.zoom_in);
        assert!(!first.exit);
        let second = source.poll().unwrap();
        assert!(second.exit);
    }

    #[test]
    fn parse_rejects_unknown_tokens() {
        let err = ScriptedSource::parse("left,warp").unwrap_err();
        assert!(matches!(err, ScriptError::UnknownToken(t) if t == "warp"));
    }

    #[test]
    fn parse_skips_empty_tokens() {
        let source = ScriptedSource::parse("left,,right,").unwrap();
        assert_eq!(source.remaining(), 2);
    }
}
