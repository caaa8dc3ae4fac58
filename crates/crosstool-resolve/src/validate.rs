//! Tool path completeness of a selected toolchain.

use crosstool_model::{Tool, Toolchain};

use crate::error::ValidationError;

/// Tools the toolchain must declare, in checking order.
///
/// `dwp` is only required when the toolchain supports fission.
pub fn required_tools(toolchain: &Toolchain) -> Vec<Tool> {
    let mut tools = Tool::REQUIRED.to_vec();
    if toolchain.supports_fission {
        tools.push(Tool::Dwp);
    }
    tools
}

/// Every required tool the toolchain does not declare.
pub fn missing_tools(toolchain: &Toolchain) -> Vec<Tool> {
    required_tools(toolchain)
        .into_iter()
        .filter(|&tool| !toolchain.has_tool(tool))
        .collect()
}

/// Fail on the first required tool without a path.
pub fn validate(toolchain: &Toolchain) -> Result<(), ValidationError> {
    match missing_tools(toolchain).first() {
        Some(&tool) => Err(ValidationError::MissingToolPath { tool }),
        None => Ok(()),
    }
}
