//! CLI command implementations.

pub mod check;
pub mod resolve;
pub mod toolchains;

use std::path::{Path, PathBuf};
use std::sync::{Arc, OnceLock};

use anyhow::{bail, Context, Result};
use crosstool_model::{Label, ReleaseConfig};
use crosstool_parse::ReleaseCache;
use crosstool_resolve::Selector;
use tracing::debug;

use crate::manifest::{BuildConfig, CrosstoolManifest};

/// Crosstool package used when neither the flags nor the manifest name one.
pub const DEFAULT_TOP: &str = "//tools/cpp";

/// The configuration file and package label a command works against.
#[derive(Debug, Clone)]
pub struct Source {
    pub config: PathBuf,
    pub top: Label,
}

impl Source {
    /// Merge flags with the manifest: `--config`/`--top` win, then the
    /// manifest's `[crosstool]` section, then defaults.
    pub fn locate(
        cwd: &Path,
        manifest: Option<&(CrosstoolManifest, PathBuf)>,
        config: Option<&Path>,
        top: Option<&str>,
    ) -> Result<Self> {
        let config = match config {
            Some(path) => cwd.join(path),
            None => match manifest.and_then(|(m, dir)| m.config_path(dir)) {
                Some(path) => path,
                None => bail!(
                    "no configuration file given (use --config or set [crosstool] path in crosstool.toml)"
                ),
            },
        };
        let top_text = top
            .or_else(|| manifest.and_then(|(m, _)| m.top()))
            .unwrap_or(DEFAULT_TOP);
        let top = Label::parse(top_text).with_context(|| format!("invalid --top '{top_text}'"))?;
        Ok(Self { config, top })
    }

    /// Read and parse the configuration file. Identical contents are parsed
    /// once per process.
    pub fn load(&self) -> Result<Arc<ReleaseConfig>> {
        debug!(config = %self.config.display(), top = %self.top, "loading release");
        Ok(releases().get_or_parse_file(&self.config)?)
    }
}

fn releases() -> &'static ReleaseCache {
    static RELEASES: OnceLock<ReleaseCache> = OnceLock::new();
    RELEASES.get_or_init(ReleaseCache::new)
}

/// Selector flags as given on the command line.
#[derive(Debug, Clone, Default)]
pub struct SelectorFlags<'a> {
    pub cpu: Option<&'a str>,
    pub compiler: Option<&'a str>,
    pub glibc: Option<&'a str>,
}

impl SelectorFlags<'_> {
    /// Each field falls back to `[build]`; the CPU finally falls back to the
    /// release's `default_target_cpu`.
    pub fn to_selector(&self, build: Option<&BuildConfig>, release: &ReleaseConfig) -> Selector {
        let cpu = self
            .cpu
            .or_else(|| build.and_then(|b| b.cpu.as_deref()))
            .unwrap_or_else(|| release.default_target_cpu());
        Selector {
            cpu: cpu.to_string(),
            compiler: self
                .compiler
                .or_else(|| build.and_then(|b| b.compiler.as_deref()))
                .map(str::to_string),
            glibc: self
                .glibc
                .or_else(|| build.and_then(|b| b.glibc.as_deref()))
                .map(str::to_string),
        }
    }
}
