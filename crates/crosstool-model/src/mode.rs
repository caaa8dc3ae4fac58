//! Build-variant axes that select layered flag blocks.
//!
//! Each axis is a closed enum. Names use the configuration file spelling
//! (`FASTBUILD`, `FULLY_STATIC`, ...); parsing also accepts the lowercase,
//! dash-separated spelling used on command lines (`fully-static`).

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ModelError;

/// Normalize a user-facing mode name to the configuration file spelling.
fn normalize(value: &str) -> String {
    value.trim().replace('-', "_").to_ascii_uppercase()
}

/// Compilation mode (fast/debug/coverage/optimized).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CompilationMode {
    #[default]
    Fastbuild,
    Dbg,
    Coverage,
    Opt,
}

impl CompilationMode {
    /// All compilation modes in declaration order.
    pub const ALL: [CompilationMode; 4] = [
        CompilationMode::Fastbuild,
        CompilationMode::Dbg,
        CompilationMode::Coverage,
        CompilationMode::Opt,
    ];

    /// Configuration file spelling.
    pub fn as_str(self) -> &'static str {
        match self {
            CompilationMode::Fastbuild => "FASTBUILD",
            CompilationMode::Dbg => "DBG",
            CompilationMode::Coverage => "COVERAGE",
            CompilationMode::Opt => "OPT",
        }
    }
}

impl FromStr for CompilationMode {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match normalize(s).as_str() {
            "FASTBUILD" => Ok(CompilationMode::Fastbuild),
            "DBG" => Ok(CompilationMode::Dbg),
            "COVERAGE" => Ok(CompilationMode::Coverage),
            "OPT" => Ok(CompilationMode::Opt),
            _ => Err(ModelError::UnknownMode {
                axis: "compilation mode",
                value: s.to_string(),
                expected: "FASTBUILD, DBG, COVERAGE, OPT",
            }),
        }
    }
}

impl fmt::Display for CompilationMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Lipo build variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum LipoMode {
    #[default]
    Off,
    Binary,
}

impl LipoMode {
    /// All lipo modes in declaration order.
    pub const ALL: [LipoMode; 2] = [LipoMode::Off, LipoMode::Binary];

    /// Configuration file spelling.
    pub fn as_str(self) -> &'static str {
        match self {
            LipoMode::Off => "OFF",
            LipoMode::Binary => "BINARY",
        }
    }
}

impl FromStr for LipoMode {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match normalize(s).as_str() {
            "OFF" => Ok(LipoMode::Off),
            "BINARY" => Ok(LipoMode::Binary),
            _ => Err(ModelError::UnknownMode {
                axis: "lipo mode",
                value: s.to_string(),
                expected: "OFF, BINARY",
            }),
        }
    }
}

impl fmt::Display for LipoMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Linking strategy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum LinkingMode {
    FullyStatic,
    MostlyStatic,
    Dynamic,
}

impl LinkingMode {
    /// All linking modes in declaration order.
    pub const ALL: [LinkingMode; 3] = [
        LinkingMode::FullyStatic,
        LinkingMode::MostlyStatic,
        LinkingMode::Dynamic,
    ];

    /// Configuration file spelling.
    pub fn as_str(self) -> &'static str {
        match self {
            LinkingMode::FullyStatic => "FULLY_STATIC",
            LinkingMode::MostlyStatic => "MOSTLY_STATIC",
            LinkingMode::Dynamic => "DYNAMIC",
        }
    }
}

impl FromStr for LinkingMode {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match normalize(s).as_str() {
            "FULLY_STATIC" => Ok(LinkingMode::FullyStatic),
            "MOSTLY_STATIC" => Ok(LinkingMode::MostlyStatic),
            "DYNAMIC" => Ok(LinkingMode::Dynamic),
            _ => Err(ModelError::UnknownMode {
                axis: "linking mode",
                value: s.to_string(),
                expected: "FULLY_STATIC, MOSTLY_STATIC, DYNAMIC",
            }),
        }
    }
}

impl fmt::Display for LinkingMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
