//! Error types for toolchain resolution.

use crosstool_model::{ModelError, Tool};

use crate::select::{Candidate, Selector};

/// Errors raised while picking a toolchain from a release.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SelectionError {
    /// No toolchain satisfies the explicit selectors.
    #[error(
        "No toolchain found for {selector}. Valid toolchains are: {}",
        candidate_list(.candidates)
    )]
    NoMatch {
        selector: Selector,
        /// Every toolchain in the release, in declaration order.
        candidates: Vec<Candidate>,
    },

    /// More than one toolchain satisfies the explicit selectors.
    #[error("Multiple toolchains found for {selector}: {}", candidate_list(.matches))]
    MultipleMatch {
        selector: Selector,
        /// The matching toolchains, in declaration order.
        matches: Vec<Candidate>,
    },

    /// The default path found no mapping for the CPU, or the mapped
    /// identifier names no toolchain.
    #[error("{}", default_mapping_message(.cpu, .toolchain_identifier.as_deref()))]
    DefaultMappingMissing {
        cpu: String,
        /// The mapped identifier, when a mapping exists.
        toolchain_identifier: Option<String>,
    },
}

/// Errors raised while checking the selected toolchain.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("Tool path for '{tool}' is missing")]
    MissingToolPath { tool: Tool },
}

/// Any failure of a full resolution.
#[derive(Debug, thiserror::Error)]
pub enum ResolveError {
    #[error(transparent)]
    Selection(#[from] SelectionError),

    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// A label declared in the toolchain could not be interpreted.
    #[error(transparent)]
    Label(#[from] ModelError),
}

/// Result type for resolution operations.
pub type Result<T> = std::result::Result<T, ResolveError>;

fn candidate_list(candidates: &[Candidate]) -> String {
    let mut out = String::from("[\n");
    for candidate in candidates {
        out.push_str(&format!("  {candidate},\n"));
    }
    out.push(']');
    out
}

fn default_mapping_message(cpu: &str, toolchain_identifier: Option<&str>) -> String {
    match toolchain_identifier {
        Some(id) => format!(
            "Toolchain identifier '{id}' for --cpu='{cpu}' does not name any toolchain"
        ),
        None => format!("No default toolchain found for --cpu='{cpu}'"),
    }
}
