//! Derived artifacts: tool locations, sysroot, include directories, and
//! runtime library references.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use crosstool_model::{Label, Tool, Toolchain};
use serde::Serialize;

use crate::error::Result;

/// Where a declared tool path points. Absolute paths are kept; relative ones
/// live under the crosstool package.
pub fn resolve_tool_path(crosstool_top: &Label, declared: &str) -> PathBuf {
    let declared = Path::new(declared);
    if declared.is_absolute() {
        declared.to_path_buf()
    } else {
        crosstool_top.package_path().join(declared)
    }
}

/// Resolved location of one well-known tool, if declared.
pub fn tool_path(toolchain: &Toolchain, crosstool_top: &Label, tool: Tool) -> Option<PathBuf> {
    toolchain
        .tool_path(tool)
        .map(|declared| resolve_tool_path(crosstool_top, declared))
}

/// Resolved locations of every declared tool, keyed by tool name.
pub fn tool_paths(toolchain: &Toolchain, crosstool_top: &Label) -> BTreeMap<String, PathBuf> {
    toolchain
        .tool_paths
        .iter()
        .map(|(name, declared)| (name.clone(), resolve_tool_path(crosstool_top, declared)))
        .collect()
}

pub fn builtin_include_directories(toolchain: &Toolchain) -> Vec<String> {
    toolchain.cxx_builtin_include_directories.clone()
}

/// The libc top in effect: an explicit request wins over the toolchain default.
pub fn libc_top(toolchain: &Toolchain, requested: Option<&Label>) -> Result<Option<Label>> {
    if let Some(label) = requested {
        return Ok(Some(label.clone()));
    }
    match &toolchain.default_grte_top {
        Some(text) => Ok(Some(Label::parse(text)?)),
        None => Ok(None),
    }
}

/// The sysroot: the libc top's package when one is in effect, otherwise the
/// declared builtin sysroot, otherwise none.
pub fn sysroot(toolchain: &Toolchain, libc_top: Option<&Label>) -> Option<String> {
    match libc_top {
        Some(label) => Some(label.package().to_string()),
        None => toolchain.builtin_sysroot.clone(),
    }
}

/// Runtime library filegroups for static and dynamic linking.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RuntimeLibraries {
    #[serde(rename = "static")]
    pub static_libs: Label,
    #[serde(rename = "dynamic")]
    pub dynamic_libs: Label,
}

impl RuntimeLibraries {
    /// Each axis uses the toolchain's override when declared, else
    /// `<kind>-runtime-libs-<target_cpu>` in the crosstool package.
    pub fn resolve(toolchain: &Toolchain, crosstool_top: &Label) -> Result<Self> {
        Ok(Self {
            static_libs: runtime_label(
                crosstool_top,
                toolchain.static_runtimes_filegroup.as_deref(),
                "static",
                &toolchain.target_cpu,
            )?,
            dynamic_libs: runtime_label(
                crosstool_top,
                toolchain.dynamic_runtimes_filegroup.as_deref(),
                "dynamic",
                &toolchain.target_cpu,
            )?,
        })
    }
}

fn runtime_label(top: &Label, declared: Option<&str>, kind: &str, cpu: &str) -> Result<Label> {
    match declared {
        Some(name) if name.starts_with("//") => Ok(Label::parse(name)?),
        Some(name) => Ok(top.sibling(name)?),
        None => Ok(top.sibling(&format!("{kind}-runtime-libs-{cpu}"))?),
    }
}
