//! End-to-end resolution of one build request.

use std::collections::BTreeMap;
use std::path::PathBuf;

use crosstool_model::{CompilationMode, Label, LinkingMode, LipoMode, ReleaseConfig, Toolchain};
use serde::Serialize;
use tracing::debug;

use crate::artifacts::{self, RuntimeLibraries};
use crate::error::Result;
use crate::features::FeatureSet;
use crate::flags::FlagComposer;
use crate::make_vars;
use crate::select::{select, Selector};
use crate::validate::validate;

/// Everything one build supplies to resolution.
#[derive(Debug, Clone)]
pub struct ResolveRequest {
    pub selector: Selector,
    /// Label of the package holding the configuration and its tools.
    pub crosstool_top: Label,
    pub compilation_mode: CompilationMode,
    pub lipo_mode: LipoMode,
    /// Feature requests: `name` enables, `-name` disables.
    pub features: Vec<String>,
    /// Overrides the toolchain's `default_grte_top`.
    pub libc_top: Option<Label>,
    pub copts: Vec<String>,
    pub cxxopts: Vec<String>,
    pub linkopts: Vec<String>,
}

impl ResolveRequest {
    pub fn new(selector: Selector, crosstool_top: Label) -> Self {
        Self {
            selector,
            crosstool_top,
            compilation_mode: CompilationMode::default(),
            lipo_mode: LipoMode::default(),
            features: Vec::new(),
            libc_top: None,
            copts: Vec::new(),
            cxxopts: Vec::new(),
            linkopts: Vec::new(),
        }
    }
}

/// Capability flags of the selected toolchain.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Capabilities {
    pub supports_gold_linker: bool,
    pub supports_start_end_lib: bool,
    pub supports_normalizing_ar: bool,
    pub supports_incremental_linker: bool,
    pub supports_fission: bool,
    pub supports_embedded_runtimes: bool,
    pub needs_pic: bool,
    pub supports_interface_shared_objects: bool,
}

impl From<&Toolchain> for Capabilities {
    fn from(t: &Toolchain) -> Self {
        Self {
            supports_gold_linker: t.supports_gold_linker,
            supports_start_end_lib: t.supports_start_end_lib,
            supports_normalizing_ar: t.supports_normalizing_ar,
            supports_incremental_linker: t.supports_incremental_linker,
            supports_fission: t.supports_fission,
            supports_embedded_runtimes: t.supports_embedded_runtimes,
            needs_pic: t.needs_pic,
            supports_interface_shared_objects: t.supports_interface_shared_objects,
        }
    }
}

/// Link options for one linking mode.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LinkOptions {
    pub executable: Vec<String>,
    pub shared_object: Vec<String>,
}

/// The fully resolved configuration for one request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResolvedConfiguration {
    pub toolchain_identifier: String,
    pub host_system_name: String,
    pub target_system_name: String,
    pub target_cpu: String,
    pub target_libc: String,
    pub compiler: String,
    pub abi_version: String,
    pub abi_libc_version: String,

    pub compilation_mode: CompilationMode,
    pub lipo_mode: LipoMode,
    pub features: FeatureSet,
    pub capabilities: Capabilities,
    pub tool_paths: BTreeMap<String, PathBuf>,

    pub compiler_options: Vec<String>,
    pub cxx_options: Vec<String>,
    pub unfiltered_compiler_options: Vec<String>,
    pub c_options: Vec<String>,
    pub cxx_user_options: Vec<String>,
    pub linker_options: Vec<String>,
    pub link_options: Vec<String>,
    pub link_modes: BTreeMap<LinkingMode, LinkOptions>,
    pub objcopy_embed_options: Vec<String>,
    pub ld_embed_options: Vec<String>,

    pub builtin_include_directories: Vec<String>,
    pub sysroot: Option<String>,
    pub runtime_libraries: RuntimeLibraries,
    pub make_variables: BTreeMap<String, String>,
    pub global_make_variables: BTreeMap<String, String>,
}

/// Select, validate, and compose everything a build needs from `release`.
pub fn resolve(release: &ReleaseConfig, request: &ResolveRequest) -> Result<ResolvedConfiguration> {
    let toolchain = select(release, &request.selector)?;
    validate(toolchain)?;

    let top = &request.crosstool_top;
    let features = FeatureSet::from_requests(release.default_settings(), request.features.as_slice());
    let composer = FlagComposer::new(toolchain, request.compilation_mode, request.lipo_mode);

    let link_modes = LinkingMode::ALL
        .into_iter()
        .map(|mode| {
            let options = LinkOptions {
                executable: composer.link_options(mode, false),
                shared_object: composer.link_options(mode, true),
            };
            (mode, options)
        })
        .collect();

    let libc_top = artifacts::libc_top(toolchain, request.libc_top.as_ref())?;
    let sysroot = artifacts::sysroot(toolchain, libc_top.as_ref());
    let runtime_libraries = RuntimeLibraries::resolve(toolchain, top)?;

    debug!(
        toolchain = %toolchain.toolchain_identifier,
        compilation_mode = %request.compilation_mode,
        lipo_mode = %request.lipo_mode,
        sysroot = sysroot.as_deref().unwrap_or(""),
        "resolved toolchain configuration"
    );

    Ok(ResolvedConfiguration {
        toolchain_identifier: toolchain.toolchain_identifier.clone(),
        host_system_name: toolchain.host_system_name.clone(),
        target_system_name: toolchain.target_system_name.clone(),
        target_cpu: toolchain.target_cpu.clone(),
        target_libc: toolchain.target_libc.clone(),
        compiler: toolchain.compiler.clone(),
        abi_version: toolchain.abi_version.clone(),
        abi_libc_version: toolchain.abi_libc_version.clone(),

        compilation_mode: request.compilation_mode,
        lipo_mode: request.lipo_mode,
        capabilities: Capabilities::from(toolchain),
        tool_paths: artifacts::tool_paths(toolchain, top),

        compiler_options: composer.compiler_options(&features),
        cxx_options: composer.cxx_options(&features),
        unfiltered_compiler_options: composer.unfiltered_compiler_options(&features),
        c_options: request.copts.clone(),
        cxx_user_options: request.cxxopts.clone(),
        linker_options: composer.linker_options(),
        link_options: request.linkopts.clone(),
        link_modes,
        objcopy_embed_options: composer.objcopy_embed_options(),
        ld_embed_options: composer.ld_embed_options(),

        builtin_include_directories: artifacts::builtin_include_directories(toolchain),
        make_variables: make_vars::make_variables(toolchain, top, sysroot.as_deref()),
        global_make_variables: make_vars::global_make_variables(toolchain, top),
        sysroot,
        runtime_libraries,
        features,
    })
}
