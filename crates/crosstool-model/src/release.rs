//! Root of a parsed configuration release.

use std::collections::HashMap;

use serde::Serialize;

use crate::toolchain::Toolchain;

/// Maps a CPU to the toolchain a bare `--cpu` selects.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DefaultToolchain {
    pub cpu: String,
    pub toolchain_identifier: String,
}

/// A named toggle that gates optional compiler flags.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DefaultSetting {
    pub name: String,
    pub default_value: bool,
}

/// An immutable configuration release.
///
/// Toolchains keep declaration order; the identifier index records the first
/// declaration of each identifier so default-path lookups keep first-match
/// semantics without rescanning.
#[derive(Debug, Clone, Serialize)]
pub struct ReleaseConfig {
    major_version: String,
    minor_version: String,
    default_target_cpu: String,
    default_toolchains: Vec<DefaultToolchain>,
    toolchains: Vec<Toolchain>,
    default_settings: Vec<DefaultSetting>,
    #[serde(skip)]
    identifier_index: HashMap<String, usize>,
}

impl ReleaseConfig {
    /// Assemble a release and build its identifier index.
    pub fn new(
        major_version: impl Into<String>,
        minor_version: impl Into<String>,
        default_target_cpu: impl Into<String>,
        default_toolchains: Vec<DefaultToolchain>,
        toolchains: Vec<Toolchain>,
        default_settings: Vec<DefaultSetting>,
    ) -> Self {
        let mut identifier_index = HashMap::with_capacity(toolchains.len());
        for (i, toolchain) in toolchains.iter().enumerate() {
            identifier_index
                .entry(toolchain.toolchain_identifier.clone())
                .or_insert(i);
        }
        Self {
            major_version: major_version.into(),
            minor_version: minor_version.into(),
            default_target_cpu: default_target_cpu.into(),
            default_toolchains,
            toolchains,
            default_settings,
            identifier_index,
        }
    }

    pub fn major_version(&self) -> &str {
        &self.major_version
    }

    pub fn minor_version(&self) -> &str {
        &self.minor_version
    }

    pub fn default_target_cpu(&self) -> &str {
        &self.default_target_cpu
    }

    /// Default mappings in declaration order.
    pub fn default_toolchains(&self) -> &[DefaultToolchain] {
        &self.default_toolchains
    }

    /// Toolchains in declaration order.
    pub fn toolchains(&self) -> &[Toolchain] {
        &self.toolchains
    }

    pub fn default_settings(&self) -> &[DefaultSetting] {
        &self.default_settings
    }

    /// First default mapping declared for `cpu`.
    pub fn default_toolchain_for(&self, cpu: &str) -> Option<&DefaultToolchain> {
        self.default_toolchains.iter().find(|d| d.cpu == cpu)
    }

    /// First toolchain declared with `identifier`.
    pub fn toolchain_by_identifier(&self, identifier: &str) -> Option<&Toolchain> {
        self.identifier_index
            .get(identifier)
            .map(|&i| &self.toolchains[i])
    }
}
