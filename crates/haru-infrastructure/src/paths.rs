//! Unified path management for haru state files.
//!
//! All persisted state lives under a single `haru` directory in the
//! platform data dir (e.g. `~/.local/share/haru/` on Linux). Tests and the
//! CLI's `--data-dir` flag override the base directory explicitly.

use std::path::{Path, PathBuf};

use haru_core::error::{HaruError, Result};

/// Resolves the directories haru stores its state in.
#[derive(Debug, Clone)]
pub struct HaruPaths {
    base: PathBuf,
}

impl HaruPaths {
    /// Resolves the default platform data directory.
    pub fn resolve() -> Result<Self> {
        let data_dir = dirs::data_dir()
            .ok_or_else(|| HaruError::config("cannot determine platform data directory"))?;
        Ok(Self {
            base: data_dir.join("haru"),
        })
    }

    /// Uses an explicit base directory instead of the platform default.
    pub fn with_base(base: impl Into<PathBuf>) -> Self {
        Self { base: base.into() }
    }

    /// The directory holding all state files.
    pub fn base_dir(&self) -> &Path {
        &self.base
    }

    /// Path of the JSON file backing one logical storage key.
    pub fn state_file(&self, key: &str) -> PathBuf {
        self.base.join(format!("{}.json", key))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_state_file_layout() {
        let paths = HaruPaths::with_base("/tmp/haru-test");
        assert_eq!(
            paths.state_file("stats"),
            PathBuf::from("/tmp/haru-test/stats.json")
        );
    }
}
