//! Normalized navigation input: one snapshot per frame, whatever the device.
//!
//! # Invariants
//! - Snapshots are ephemeral: produced fresh each frame, consumed, discarded.
//! - An absent device maps to the neutral snapshot, never to an error.

pub mod snapshot;
pub mod source;

pub use snapshot::InputSnapshot;
pub use source::{InputSource, NullGamepad, ScriptError, ScriptedSource};

pub fn crate_info() -> &'static str {
    "fractalspace-input v0.1.0"
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn crate_loads() {
        assert!(crate_info().contains("input"));
    }
}
