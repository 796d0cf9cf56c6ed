//! Platform bring-up behind a capability interface.
//!
//! Console targets need resource mounting and debug-stdio plumbing before
//! the viewer can start; desktop targets need none of it. Providers are
//! selected at build/config time, never via source-level conditionals in
//! the app.
//!
//! # Invariants
//! - `init` runs before any asset load; `shutdown` runs after the event
//!   loop ends, exactly once each.

use std::path::{Path, PathBuf};

/// Errors from platform bring-up.
#[derive(Debug, thiserror::Error)]
pub enum PlatformError {
    #[error("platform service failed to start: {0}")]
    ServiceInit(String),
}

/// Platform services the viewer depends on.
pub trait Platform {
    /// Bring up platform services. Called once before asset loading.
    fn init(&mut self) -> Result<(), PlatformError>;

    /// Tear down platform services. Called once after the loop ends.
    fn shutdown(&mut self);

    /// Root directory resource paths are resolved against.
    fn resource_root(&self) -> &Path;
}

/// Desktop provider: no services to mount, resources live in a local
/// directory (`./assets` unless overridden).
#[derive(Debug, Clone)]
pub struct DesktopPlatform {
    root: PathBuf,
}

impl Default for DesktopPlatform {
    fn default() -> Self {
        Self {
            root: PathBuf::from("./assets"),
        }
    }
}

impl DesktopPlatform {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }
}

impl Platform for DesktopPlatform {
    fn init(&mut self) -> Result<(), PlatformError> {
        tracing::debug!(root = %self.root.display(), "desktop platform up");
        Ok(())
    }

    fn shutdown(&mut self) {
        tracing::debug!("desktop platform down");
    }

    fn resource_root(&self) -> &Path {
        &self.root
    }
}

pub fn crate_info() -> &'static str {
    "fractalspace-platform v0.1.0"
}
