use crate::AssetError;
use std::path::{Path, PathBuf};

/// Entry points the render pipeline binds. Checked at load time so a
/// truncated or wrong file fails before any GPU work starts.
const ENTRY_POINTS: [&str; 2] = ["vs_main", "fs_main"];

/// A WGSL kernel read from disk.
#[derive(Debug, Clone)]
pub struct ShaderSource {
    pub path: PathBuf,
    pub wgsl: String,
}

impl ShaderSource {
    /// Read the kernel into an owned buffer and check its entry points.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, AssetError> {
        let path = path.as_ref().to_path_buf();
        if !path.is_file() {
            return Err(AssetError::NotFound(path));
        }

        let wgsl = std::fs::read_to_string(&path)?;
        for entry in ENTRY_POINTS {
            if !wgsl.contains(entry) {
                return Err(AssetError::MissingEntryPoint { path, entry });
            }
        }

        tracing::debug!(path = %path.display(), bytes = wgsl.len(), "loaded shader");
        Ok(Self { path, wgsl })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const MINIMAL_KERNEL: &str = "fn vs_main() {}\nfn fs_main() {}\n";

    #[test]
    fn load_reads_the_source() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("kernel.wgsl");
        std::fs::write(&path, MINIMAL_KERNEL).unwrap();

        let shader = ShaderSource::load(&path).unwrap();
        assert_eq!(shader.wgsl, MINIMAL_KERNEL);
        assert_eq!(shader.path, path);
    }

    #[test]
    fn load_reports_a_missing_file() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("nope.wgsl");
        let err = ShaderSource::load(&path).unwrap_err();
        assert!(matches!(err, AssetError::NotFound(p) if p == path));
    }

    #[test]
    fn load_rejects_a_kernel_without_entry_points() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("kernel.wgsl");
        std::fs::write(&path, "fn vs_main() {}\n").unwrap();

        let err = ShaderSource::load(&path).unwrap_err();
        assert!(matches!(
            err,
            AssetError::MissingEntryPoint { entry: "fs_main", .. }
        ));
    }
}
