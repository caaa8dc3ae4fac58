//! Descriptor model for crosstool configuration releases.
//!
//! A release describes many compiler toolchains at once:
//! - **Default mappings:** which toolchain a bare `--cpu` selects
//! - **Toolchains:** tool paths, capabilities, and layered flag blocks
//! - **Default settings:** named toggles gating optional compiler flags
//!
//! Everything here is built once by the parser and shared read-only afterwards.

pub mod error;
pub mod label;
pub mod mode;
pub mod release;
pub mod tool;
pub mod toolchain;

pub use error::{ModelError, Result};
pub use label::Label;
pub use mode::{CompilationMode, LinkingMode, LipoMode};
pub use release::{DefaultSetting, DefaultToolchain, ReleaseConfig};
pub use tool::Tool;
pub use toolchain::{MakeVariable, ModeFlags, OptionalFlag, Toolchain};
