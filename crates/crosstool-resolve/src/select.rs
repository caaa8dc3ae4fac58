//! Toolchain selection.
//!
//! A bare CPU goes through the release's default mappings. As soon as a
//! compiler or libc is given, selection switches to field matching over every
//! toolchain and must find exactly one. Neither path falls back to the other.

use std::fmt;

use crosstool_model::{ReleaseConfig, Toolchain};
use serde::Serialize;
use tracing::debug;

use crate::error::SelectionError;

/// User-supplied selector inputs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Selector {
    pub cpu: String,
    pub compiler: Option<String>,
    pub glibc: Option<String>,
}

impl Selector {
    /// Selector for a bare CPU.
    pub fn new(cpu: impl Into<String>) -> Self {
        Self {
            cpu: cpu.into(),
            compiler: None,
            glibc: None,
        }
    }

    pub fn with_compiler(mut self, compiler: impl Into<String>) -> Self {
        self.compiler = Some(compiler.into());
        self
    }

    pub fn with_glibc(mut self, glibc: impl Into<String>) -> Self {
        self.glibc = Some(glibc.into());
        self
    }

    /// Whether this selector takes the default-mapping path.
    pub fn is_default(&self) -> bool {
        self.compiler.is_none() && self.glibc.is_none()
    }
}

/// Rendered as the command-line flags that would reproduce it.
impl fmt::Display for Selector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "--cpu='{}'", self.cpu)?;
        if let Some(compiler) = &self.compiler {
            write!(f, " --compiler='{compiler}'")?;
        }
        if let Some(glibc) = &self.glibc {
            write!(f, " --glibc='{glibc}'")?;
        }
        Ok(())
    }
}

/// Selector values that pick one particular toolchain, for diagnostics.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Candidate {
    pub toolchain_identifier: String,
    pub cpu: String,
    pub compiler: String,
    pub glibc: String,
}

impl From<&Toolchain> for Candidate {
    fn from(toolchain: &Toolchain) -> Self {
        Self {
            toolchain_identifier: toolchain.toolchain_identifier.clone(),
            cpu: toolchain.target_cpu.clone(),
            compiler: toolchain.compiler.clone(),
            glibc: toolchain.target_libc.clone(),
        }
    }
}

impl fmt::Display for Candidate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "--cpu='{}' --compiler='{}' --glibc='{}'",
            self.cpu, self.compiler, self.glibc
        )
    }
}

/// Every toolchain of a release as a candidate, in declaration order.
pub fn candidates(release: &ReleaseConfig) -> Vec<Candidate> {
    release.toolchains().iter().map(Candidate::from).collect()
}

/// Pick the single toolchain `selector` denotes.
pub fn select<'r>(
    release: &'r ReleaseConfig,
    selector: &Selector,
) -> Result<&'r Toolchain, SelectionError> {
    if selector.is_default() {
        select_default(release, &selector.cpu)
    } else {
        select_explicit(release, selector)
    }
}

fn select_default<'r>(release: &'r ReleaseConfig, cpu: &str) -> Result<&'r Toolchain, SelectionError> {
    let mapping = release
        .default_toolchain_for(cpu)
        .ok_or_else(|| SelectionError::DefaultMappingMissing {
            cpu: cpu.to_string(),
            toolchain_identifier: None,
        })?;
    let toolchain = release
        .toolchain_by_identifier(&mapping.toolchain_identifier)
        .ok_or_else(|| SelectionError::DefaultMappingMissing {
            cpu: cpu.to_string(),
            toolchain_identifier: Some(mapping.toolchain_identifier.clone()),
        })?;
    debug!(cpu, toolchain = %toolchain.toolchain_identifier, "selected default toolchain");
    Ok(toolchain)
}

fn select_explicit<'r>(
    release: &'r ReleaseConfig,
    selector: &Selector,
) -> Result<&'r Toolchain, SelectionError> {
    let matches: Vec<&Toolchain> = release
        .toolchains()
        .iter()
        .filter(|t| {
            t.matches(
                &selector.cpu,
                selector.compiler.as_deref(),
                selector.glibc.as_deref(),
            )
        })
        .collect();

    match matches.as_slice() {
        [toolchain] => {
            debug!(%selector, toolchain = %toolchain.toolchain_identifier, "selected toolchain");
            Ok(*toolchain)
        }
        [] => Err(SelectionError::NoMatch {
            selector: selector.clone(),
            candidates: candidates(release),
        }),
        _ => Err(SelectionError::MultipleMatch {
            selector: selector.clone(),
            matches: matches.into_iter().map(Candidate::from).collect(),
        }),
    }
}
