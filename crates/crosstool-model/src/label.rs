//! Package-qualified artifact references.

use std::fmt;
use std::path::Path;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{ModelError, Result};

/// A reference of the form `//package:name`.
///
/// The resolver treats labels as opaque identifiers; it only ever derives
/// siblings in the same package and the package's relative path.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Label {
    package: String,
    name: String,
}

impl Label {
    /// Parse `//package:name`, or `//package` as shorthand for
    /// `//package:<last package component>`.
    pub fn parse(text: &str) -> Result<Self> {
        let invalid = |detail| ModelError::InvalidLabel {
            label: text.to_string(),
            detail,
        };
        let rest = text
            .strip_prefix("//")
            .ok_or_else(|| invalid("must start with '//'"))?;
        let (package, name) = match rest.split_once(':') {
            Some((package, name)) => (package, name.to_string()),
            None => {
                let last = rest.rsplit('/').next().unwrap_or(rest);
                (rest, last.to_string())
            }
        };
        if package.ends_with('/') || package.contains("//") {
            return Err(invalid("package path has an empty component"));
        }
        if name.is_empty() {
            return Err(invalid("target name is empty"));
        }
        if name.contains(':') {
            return Err(invalid("target name contains ':'"));
        }
        Ok(Label {
            package: package.to_string(),
            name,
        })
    }

    /// The package part, without the leading `//`.
    pub fn package(&self) -> &str {
        &self.package
    }

    /// The target name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The package as a relative path.
    pub fn package_path(&self) -> &Path {
        Path::new(&self.package)
    }

    /// A label naming `name` in the same package. A leading `:` is taken as
    /// a package-relative reference.
    pub fn sibling(&self, name: &str) -> Result<Label> {
        let invalid = |detail| ModelError::InvalidLabel {
            label: name.to_string(),
            detail,
        };
        let target = name.strip_prefix(':').unwrap_or(name);
        if target.is_empty() {
            return Err(invalid("target name is empty"));
        }
        if target.contains(':') {
            return Err(invalid("target name contains ':'"));
        }
        Ok(Label {
            package: self.package.clone(),
            name: target.to_string(),
        })
    }
}

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "//{}:{}", self.package, self.name)
    }
}

impl FromStr for Label {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self> {
        Label::parse(s)
    }
}

impl TryFrom<String> for Label {
    type Error = ModelError;

    fn try_from(value: String) -> Result<Self> {
        Label::parse(&value)
    }
}

impl From<Label> for String {
    fn from(label: Label) -> String {
        label.to_string()
    }
}
