//! `crosstool.toml` manifest parsing and project configuration.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

pub const MANIFEST_FILE: &str = "crosstool.toml";

/// The top-level manifest structure for a project using crosstool.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CrosstoolManifest {
    /// Where the configuration lives.
    #[serde(default)]
    pub crosstool: Option<SourceConfig>,
    /// Default build request values.
    #[serde(default)]
    pub build: Option<BuildConfig>,
}

/// Configuration source section.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SourceConfig {
    /// Configuration file, relative to the manifest directory.
    #[serde(default)]
    pub path: Option<String>,
    /// Label of the crosstool package (e.g. "//tools/cpp").
    #[serde(default)]
    pub top: Option<String>,
}

/// Build request defaults. Command-line flags take precedence.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct BuildConfig {
    #[serde(default)]
    pub cpu: Option<String>,
    #[serde(default)]
    pub compiler: Option<String>,
    #[serde(default)]
    pub glibc: Option<String>,
    #[serde(default)]
    pub compilation_mode: Option<String>,
    #[serde(default)]
    pub lipo: Option<String>,
    /// Feature requests; a leading '-' disables.
    #[serde(default)]
    pub features: Vec<String>,
    #[serde(default)]
    pub libc_top: Option<String>,
    #[serde(default)]
    pub copts: Vec<String>,
    #[serde(default)]
    pub cxxopts: Vec<String>,
    #[serde(default)]
    pub linkopts: Vec<String>,
}

impl CrosstoolManifest {
    /// Search upward from `start_dir` for a `crosstool.toml` file, parse and
    /// return it along with the directory it was found in.
    pub fn find_and_load(start_dir: &Path) -> Result<Option<(Self, PathBuf)>> {
        let mut dir = start_dir.to_path_buf();
        loop {
            let candidate = dir.join(MANIFEST_FILE);
            if candidate.is_file() {
                let content = std::fs::read_to_string(&candidate)
                    .with_context(|| format!("reading {}", candidate.display()))?;
                let manifest: CrosstoolManifest = toml::from_str(&content)
                    .with_context(|| format!("parsing {}", candidate.display()))?;
                return Ok(Some((manifest, dir)));
            }
            if !dir.pop() {
                break;
            }
        }
        Ok(None)
    }

    /// Parse a manifest from a TOML string.
    #[cfg(test)]
    pub fn from_str(s: &str) -> Result<Self> {
        toml::from_str(s).context("parsing crosstool.toml")
    }

    /// Configuration file path, resolved against the manifest directory.
    pub fn config_path(&self, manifest_dir: &Path) -> Option<PathBuf> {
        self.crosstool
            .as_ref()
            .and_then(|c| c.path.as_deref())
            .map(|p| manifest_dir.join(p))
    }

    pub fn top(&self) -> Option<&str> {
        self.crosstool.as_ref().and_then(|c| c.top.as_deref())
    }

    pub fn build(&self) -> Option<&BuildConfig> {
        self.build.as_ref()
    }
}
