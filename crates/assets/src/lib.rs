//! Viewer assets: the WGSL fractal kernel loaded from disk and the color
//! palettes uploaded as 1-D textures.
//!
//! # Invariants
//! - Shader sources are read into owned buffers; nothing holds the file open
//!   past the load.
//! - Palettes are fixed at startup; the GPU copy is uploaded exactly once.

use std::path::PathBuf;

pub mod palette;
pub mod shader;

pub use palette::Palette;
pub use shader::ShaderSource;

/// Errors from asset loading and lookup.
#[derive(Debug, thiserror::Error)]
pub enum AssetError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("shader not found: {0:?}")]
    NotFound(PathBuf),
    #[error("shader {path:?} is missing entry point `{entry}`")]
    MissingEntryPoint { path: PathBuf, entry: &'static str },
    #[error("unknown palette: {0:?}")]
    UnknownPalette(String),
}

pub fn crate_info() -> &'static str {
    "fractalspace-assets v0.1.0"
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn crate_loads() {
        assert!(crate_info().contains("assets"));
    }
}
