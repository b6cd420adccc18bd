// Optional run defaults for the Verdict CLI
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Defaults read from `verdict.json`. Flags on the command line always win;
/// a missing file just means no defaults.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RunDefaults {
    /// Target program to run when `--target` is not given.
    pub target: Option<PathBuf>,
    /// Per-case timeout in seconds when `--timeout` is not given.
    pub timeout_secs: Option<f64>,
}

impl RunDefaults {
    /// Load defaults from `path`. A missing file yields empty defaults; a
    /// malformed file is an error.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse {}", path.display()))
    }
}
