//! Toolchain resolution for crosstool releases.
//!
//! Resolution runs in a fixed pipeline over an immutable release:
//! - **Selection:** pick exactly one toolchain from CPU, compiler, and libc
//! - **Validation:** check the selected toolchain declares every required tool
//! - **Composition:** layer base, mode, lipo, and linking-mode flags
//! - **Derivation:** sysroot, runtime libraries, and make variables
//!
//! Every step is a pure function of its inputs, so a release can be shared
//! across threads and resolved concurrently.

pub mod artifacts;
pub mod error;
pub mod features;
pub mod flags;
pub mod make_vars;
pub mod resolved;
pub mod select;
pub mod validate;

#[cfg(test)]
mod fixtures;

pub use artifacts::RuntimeLibraries;
pub use error::{ResolveError, Result, SelectionError, ValidationError};
pub use features::FeatureSet;
pub use flags::{configure_linker_options, FlagComposer};
pub use resolved::{resolve, Capabilities, LinkOptions, ResolveRequest, ResolvedConfiguration};
pub use select::{candidates, select, Candidate, Selector};
pub use validate::{missing_tools, validate};
