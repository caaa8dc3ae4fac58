//! Well-known tools a toolchain declares paths for.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A tool referenced by name from a toolchain's `tool_path` entries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Tool {
    /// Archiver.
    Ar,
    /// C preprocessor.
    Cpp,
    /// C compiler driver.
    Gcc,
    /// Coverage tool.
    Gcov,
    /// Coverage data merger. Optional.
    GcovTool,
    /// Linker.
    Ld,
    /// Symbol table lister.
    Nm,
    Objcopy,
    Objdump,
    Strip,
    /// Debug fission packager. Required only with `supports_fission`.
    Dwp,
}

impl Tool {
    /// Tools every selected toolchain must declare.
    pub const REQUIRED: [Tool; 9] = [
        Tool::Ar,
        Tool::Cpp,
        Tool::Gcc,
        Tool::Gcov,
        Tool::Ld,
        Tool::Nm,
        Tool::Objcopy,
        Tool::Objdump,
        Tool::Strip,
    ];

    /// Every known tool.
    pub const ALL: [Tool; 11] = [
        Tool::Ar,
        Tool::Cpp,
        Tool::Gcc,
        Tool::Gcov,
        Tool::GcovTool,
        Tool::Ld,
        Tool::Nm,
        Tool::Objcopy,
        Tool::Objdump,
        Tool::Strip,
        Tool::Dwp,
    ];

    /// The `name` used for this tool in `tool_path` entries.
    pub fn name_part(self) -> &'static str {
        match self {
            Tool::Ar => "ar",
            Tool::Cpp => "cpp",
            Tool::Gcc => "gcc",
            Tool::Gcov => "gcov",
            Tool::GcovTool => "gcov-tool",
            Tool::Ld => "ld",
            Tool::Nm => "nm",
            Tool::Objcopy => "objcopy",
            Tool::Objdump => "objdump",
            Tool::Strip => "strip",
            Tool::Dwp => "dwp",
        }
    }

    /// Look a tool up by its `tool_path` name.
    pub fn from_name_part(name: &str) -> Option<Tool> {
        Tool::ALL.into_iter().find(|t| t.name_part() == name)
    }
}

impl fmt::Display for Tool {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name_part())
    }
}
