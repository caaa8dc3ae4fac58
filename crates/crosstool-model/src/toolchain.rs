//! Toolchain descriptor.
//!
//! One complete compiler/linker configuration for a specific
//! (CPU, compiler, libc) combination.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::mode::{CompilationMode, LinkingMode, LipoMode};
use crate::tool::Tool;

/// Flags contributed by one compilation-mode or lipo-mode block.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModeFlags {
    pub compiler_flags: Vec<String>,
    pub cxx_flags: Vec<String>,
    pub linker_flags: Vec<String>,
}

impl ModeFlags {
    /// Append another block's flags after this one's.
    pub fn extend(&mut self, other: ModeFlags) {
        self.compiler_flags.extend(other.compiler_flags);
        self.cxx_flags.extend(other.cxx_flags);
        self.linker_flags.extend(other.linker_flags);
    }
}

/// A compiler flag that fires only when its named setting is enabled.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OptionalFlag {
    pub default_setting_name: String,
    pub flag: String,
}

/// A declared make variable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MakeVariable {
    pub name: String,
    pub value: String,
}

/// A toolchain descriptor as declared in a release.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Toolchain {
    /// Identifier used by default mappings. Not unique across a release.
    pub toolchain_identifier: String,
    pub host_system_name: String,
    pub target_system_name: String,
    pub target_cpu: String,
    pub target_libc: String,
    pub compiler: String,
    pub abi_version: String,
    pub abi_libc_version: String,

    /// Tool name to declared path. A later declaration of the same name wins.
    pub tool_paths: BTreeMap<String, String>,

    pub supports_gold_linker: bool,
    pub supports_start_end_lib: bool,
    pub supports_normalizing_ar: bool,
    pub supports_incremental_linker: bool,
    pub supports_fission: bool,
    pub supports_embedded_runtimes: bool,
    pub needs_pic: bool,
    pub supports_interface_shared_objects: bool,

    pub compiler_flags: Vec<String>,
    pub cxx_flags: Vec<String>,
    pub unfiltered_cxx_flags: Vec<String>,
    pub linker_flags: Vec<String>,
    pub dynamic_library_linker_flags: Vec<String>,
    pub objcopy_embed_flags: Vec<String>,
    pub ld_embed_flags: Vec<String>,

    pub compilation_mode_flags: BTreeMap<CompilationMode, ModeFlags>,
    pub lipo_mode_flags: BTreeMap<LipoMode, ModeFlags>,
    pub linking_mode_flags: BTreeMap<LinkingMode, Vec<String>>,
    pub optional_compiler_flags: Vec<OptionalFlag>,

    pub cxx_builtin_include_directories: Vec<String>,
    pub make_variables: Vec<MakeVariable>,
    pub builtin_sysroot: Option<String>,
    pub static_runtimes_filegroup: Option<String>,
    pub dynamic_runtimes_filegroup: Option<String>,

    pub default_python_top: Option<String>,
    pub default_python_version: Option<String>,
    /// Label of the default libc top; its package becomes the sysroot.
    pub default_grte_top: Option<String>,
    pub debian_extra_requires: Vec<String>,
}

impl Toolchain {
    /// Declared path for a well-known tool.
    pub fn tool_path(&self, tool: Tool) -> Option<&str> {
        self.tool_paths.get(tool.name_part()).map(String::as_str)
    }

    /// Whether a path is declared for `tool`.
    pub fn has_tool(&self, tool: Tool) -> bool {
        self.tool_paths.contains_key(tool.name_part())
    }

    /// Flags of a compilation-mode block, if the block is declared.
    pub fn compilation_mode_block(&self, mode: CompilationMode) -> Option<&ModeFlags> {
        self.compilation_mode_flags.get(&mode)
    }

    /// Flags of a lipo-mode block, if the block is declared.
    pub fn lipo_mode_block(&self, mode: LipoMode) -> Option<&ModeFlags> {
        self.lipo_mode_flags.get(&mode)
    }

    /// Linker flags of a linking-mode block; empty when the block is absent.
    pub fn linking_mode_linker_flags(&self, mode: LinkingMode) -> &[String] {
        self.linking_mode_flags
            .get(&mode)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// Whether this toolchain satisfies the explicit selection predicate.
    pub fn matches(&self, cpu: &str, compiler: Option<&str>, libc: Option<&str>) -> bool {
        self.target_cpu == cpu
            && compiler.map_or(true, |c| self.compiler == c)
            && libc.map_or(true, |l| self.target_libc == l)
    }
}
