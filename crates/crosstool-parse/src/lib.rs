//! Config parser for crosstool configuration releases.
//!
//! Turns text-format configuration into a [`ReleaseConfig`]. Only structural
//! completeness is checked here; tool-path and selection checks run later,
//! against the one toolchain a build actually selects.

mod decode;
mod text;

pub mod cache;
pub mod error;

use std::path::Path;

use crosstool_model::ReleaseConfig;
use tracing::debug;

use crate::decode::{decode_release, Decoded};

pub use cache::ReleaseCache;
pub use error::{ParseError, Result};

/// Parse configuration bytes read from `source_id`.
///
/// `source_id` only appears in diagnostics.
pub fn parse(source_id: &str, bytes: &[u8]) -> Result<ReleaseConfig> {
    let text = std::str::from_utf8(bytes).map_err(|e| ParseError::Syntax {
        source_id: source_id.to_string(),
        detail: format!("input is not valid UTF-8 ({e})"),
    })?;
    parse_str(source_id, text)
}

/// Parse configuration text read from `source_id`.
pub fn parse_str(source_id: &str, text: &str) -> Result<ReleaseConfig> {
    let syntax = |detail: String| ParseError::Syntax {
        source_id: source_id.to_string(),
        detail,
    };
    let document = text::parse_document(text).map_err(syntax)?;
    match decode_release(&document).map_err(syntax)? {
        Decoded::Complete(release) => {
            debug!(
                source = source_id,
                toolchains = release.toolchains().len(),
                default_toolchains = release.default_toolchains().len(),
                "parsed crosstool release"
            );
            Ok(release)
        }
        Decoded::Incomplete(missing) => Err(ParseError::Incomplete {
            source_id: source_id.to_string(),
            missing,
        }),
    }
}

/// Read and parse a configuration file. The displayed path is the source id.
pub fn parse_file(path: &Path) -> Result<ReleaseConfig> {
    let bytes = std::fs::read(path).map_err(|source| ParseError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    parse(&path.display().to_string(), &bytes)
}
