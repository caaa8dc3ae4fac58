//! `crosstool check` — select a toolchain and verify its tool paths.

use anyhow::{bail, Result};
use crosstool_model::{Tool, Toolchain};
use crosstool_resolve::validate::required_tools;
use crosstool_resolve::{missing_tools, select};
use tracing::info;

use crate::commands::{SelectorFlags, Source};
use crate::manifest::BuildConfig;

/// Select the toolchain, report each required tool, and fail if any is
/// missing.
pub fn run(source: &Source, build: Option<&BuildConfig>, flags: &SelectorFlags<'_>) -> Result<()> {
    let release = source.load()?;
    let selector = flags.to_selector(build, &release);
    let toolchain = select(&release, &selector)?;
    let missing = missing_tools(toolchain);

    print!("{}", report(toolchain, &missing));

    if !missing.is_empty() {
        bail!("{} required tool path(s) missing", missing.len());
    }
    info!(toolchain = %toolchain.toolchain_identifier, "toolchain passes checks");
    Ok(())
}

pub fn report(toolchain: &Toolchain, missing: &[Tool]) -> String {
    let required = required_tools(toolchain);
    let mut out = format!("=== Check: {} ===\n", toolchain.toolchain_identifier);
    out.push_str("\n--- Required tools ---\n");
    for &tool in &required {
        let path = toolchain.tool_path(tool).unwrap_or("MISSING");
        out.push_str(&format!("  {:<10} {path}\n", tool.name_part()));
    }

    let optional: Vec<Tool> = Tool::ALL
        .into_iter()
        .filter(|tool| !required.contains(tool))
        .collect();
    if !optional.is_empty() {
        out.push_str("\n--- Optional tools ---\n");
        for tool in optional {
            let path = toolchain.tool_path(tool).unwrap_or("(not declared)");
            out.push_str(&format!("  {:<10} {path}\n", tool.name_part()));
        }
    }

    if missing.is_empty() {
        out.push_str("\nAll required tool paths present.\n");
    } else {
        let names: Vec<&str> = missing.iter().map(|t| t.name_part()).collect();
        out.push_str(&format!("\nMissing: {}\n", names.join(", ")));
    }
    out
}
