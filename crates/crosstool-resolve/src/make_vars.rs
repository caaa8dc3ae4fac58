//! Make-style variables exported to the build.

use std::collections::BTreeMap;

use crosstool_model::{Label, Tool, Toolchain};

use crate::artifacts::tool_path;

pub const STACK_FRAME_UNLIMITED: &str = "STACK_FRAME_UNLIMITED";
pub const CC_FLAGS: &str = "CC_FLAGS";
pub const GCOVTOOL: &str = "GCOVTOOL";

/// Toolchain-level variables: the declared ones plus the derived
/// `STACK_FRAME_UNLIMITED`, `CC_FLAGS`, and (only when `gcov-tool` is
/// declared) `GCOVTOOL`.
///
/// A declared variable is overwritten by a later declaration of the same
/// name. `CC_FLAGS` always reflects the resolved sysroot.
pub fn make_variables(
    toolchain: &Toolchain,
    crosstool_top: &Label,
    sysroot: Option<&str>,
) -> BTreeMap<String, String> {
    let mut vars: BTreeMap<String, String> = toolchain
        .make_variables
        .iter()
        .map(|v| (v.name.clone(), v.value.clone()))
        .collect();
    vars.entry(STACK_FRAME_UNLIMITED.to_string()).or_default();
    vars.insert(
        CC_FLAGS.to_string(),
        sysroot.map(|s| format!("--sysroot={s}")).unwrap_or_default(),
    );
    if let Some(path) = tool_path(toolchain, crosstool_top, Tool::GcovTool) {
        vars.insert(GCOVTOOL.to_string(), path.display().to_string());
    }
    vars
}

/// Build-wide variables describing the selected toolchain.
pub fn global_make_variables(toolchain: &Toolchain, crosstool_top: &Label) -> BTreeMap<String, String> {
    let mut vars = BTreeMap::new();
    for (name, tool) in [
        ("CC", Tool::Gcc),
        ("AR", Tool::Ar),
        ("NM", Tool::Nm),
        ("LD", Tool::Ld),
        ("OBJCOPY", Tool::Objcopy),
        ("STRIP", Tool::Strip),
        (GCOVTOOL, Tool::GcovTool),
    ] {
        if let Some(path) = tool_path(toolchain, crosstool_top, tool) {
            vars.insert(name.to_string(), path.display().to_string());
        }
    }
    vars.insert("C_COMPILER".to_string(), toolchain.compiler.clone());
    vars.insert("TARGET_CPU".to_string(), toolchain.target_cpu.clone());
    vars.insert("GLIBC_VERSION".to_string(), toolchain.target_libc.clone());
    vars.insert("ABI".to_string(), toolchain.abi_version.clone());
    vars.insert("ABI_GLIBC_VERSION".to_string(), toolchain.abi_libc_version.clone());
    vars.insert("CROSSTOOLTOP".to_string(), crosstool_top.package().to_string());
    vars
}
