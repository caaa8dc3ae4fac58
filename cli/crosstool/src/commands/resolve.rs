//! `crosstool resolve` — resolve one build request.

use anyhow::{bail, Context, Result};
use crosstool_model::{CompilationMode, Label, LipoMode, ReleaseConfig};
use crosstool_resolve::{resolve, ResolveRequest, ResolvedConfiguration};

use crate::commands::{SelectorFlags, Source};
use crate::manifest::BuildConfig;

/// Build-request flags of `crosstool resolve`.
#[derive(Debug, Clone, Default)]
pub struct RequestFlags<'a> {
    pub selector: SelectorFlags<'a>,
    pub compilation_mode: Option<&'a str>,
    pub lipo: Option<&'a str>,
    pub features: &'a [String],
    pub libc_top: Option<&'a str>,
    pub copts: &'a [String],
    pub cxxopts: &'a [String],
    pub linkopts: &'a [String],
}

/// Resolve and print the configuration.
pub fn run(
    source: &Source,
    build: Option<&BuildConfig>,
    flags: &RequestFlags<'_>,
    format: Option<&str>,
) -> Result<()> {
    let release = source.load()?;
    let resolved = execute(&release, source, build, flags)?;
    match format.unwrap_or("human") {
        "human" => print!("{}", render_human(&resolved)),
        "json" => println!("{}", serde_json::to_string_pretty(&resolved)?),
        other => bail!("unknown format '{other}' (expected human or json)"),
    }
    Ok(())
}

/// Build the request from flags and manifest, then resolve it.
pub fn execute(
    release: &ReleaseConfig,
    source: &Source,
    build: Option<&BuildConfig>,
    flags: &RequestFlags<'_>,
) -> Result<ResolvedConfiguration> {
    let request = build_request(release, source, build, flags)?;
    let resolved = resolve(release, &request)
        .with_context(|| format!("resolving {}", source.config.display()))?;
    Ok(resolved)
}

fn build_request(
    release: &ReleaseConfig,
    source: &Source,
    build: Option<&BuildConfig>,
    flags: &RequestFlags<'_>,
) -> Result<ResolveRequest> {
    let mut request = ResolveRequest::new(
        flags.selector.to_selector(build, release),
        source.top.clone(),
    );

    if let Some(mode) = flags
        .compilation_mode
        .or_else(|| build.and_then(|b| b.compilation_mode.as_deref()))
    {
        request.compilation_mode = mode.parse::<CompilationMode>()?;
    }
    if let Some(lipo) = flags.lipo.or_else(|| build.and_then(|b| b.lipo.as_deref())) {
        request.lipo_mode = lipo.parse::<LipoMode>()?;
    }
    if let Some(libc_top) = flags
        .libc_top
        .or_else(|| build.and_then(|b| b.libc_top.as_deref()))
    {
        request.libc_top = Some(Label::parse(libc_top)?);
    }

    // Manifest lists come first so command-line requests apply last.
    request.features = merged(build.map(|b| &b.features), flags.features);
    request.copts = merged(build.map(|b| &b.copts), flags.copts);
    request.cxxopts = merged(build.map(|b| &b.cxxopts), flags.cxxopts);
    request.linkopts = merged(build.map(|b| &b.linkopts), flags.linkopts);

    Ok(request)
}

fn merged(manifest: Option<&Vec<String>>, flags: &[String]) -> Vec<String> {
    manifest.into_iter().flatten().chain(flags).cloned().collect()
}

/// Human-readable report of a resolved configuration.
pub fn render_human(resolved: &ResolvedConfiguration) -> String {
    let mut out = format!("=== Toolchain: {} ===\n", resolved.toolchain_identifier);
    out.push_str(&format!("  Target CPU:    {}\n", resolved.target_cpu));
    out.push_str(&format!("  Compiler:      {}\n", resolved.compiler));
    out.push_str(&format!("  Libc:          {}\n", resolved.target_libc));
    out.push_str(&format!("  Host system:   {}\n", resolved.host_system_name));
    out.push_str(&format!("  Target system: {}\n", resolved.target_system_name));
    out.push_str(&format!(
        "  ABI:           {} ({})\n",
        resolved.abi_version, resolved.abi_libc_version
    ));
    out.push_str(&format!(
        "  Modes:         {} / lipo {}\n",
        resolved.compilation_mode, resolved.lipo_mode
    ));
    let features: Vec<&str> = resolved.features.iter().collect();
    out.push_str(&format!("  Features:      {}\n", join_or_none(&features)));
    out.push_str(&format!(
        "  Sysroot:       {}\n",
        resolved.sysroot.as_deref().unwrap_or("(none)")
    ));

    out.push_str("\n--- Tools ---\n");
    for (name, path) in &resolved.tool_paths {
        out.push_str(&format!("  {name:<10} {}\n", path.display()));
    }

    out.push_str("\n--- Compile ---\n");
    list(&mut out, "compiler", &resolved.compiler_options);
    list(&mut out, "cxx", &resolved.cxx_options);
    list(&mut out, "unfiltered", &resolved.unfiltered_compiler_options);
    list(&mut out, "copts", &resolved.c_options);
    list(&mut out, "cxxopts", &resolved.cxx_user_options);

    out.push_str("\n--- Link ---\n");
    list(&mut out, "base", &resolved.linker_options);
    for (mode, options) in &resolved.link_modes {
        list(&mut out, &format!("{mode}"), &options.executable);
        list(&mut out, &format!("{mode} (shared)"), &options.shared_object);
    }
    list(&mut out, "linkopts", &resolved.link_options);
    list(&mut out, "objcopy embed", &resolved.objcopy_embed_options);
    list(&mut out, "ld embed", &resolved.ld_embed_options);

    out.push_str("\n--- Runtime libraries ---\n");
    out.push_str(&format!("  static:  {}\n", resolved.runtime_libraries.static_libs));
    out.push_str(&format!("  dynamic: {}\n", resolved.runtime_libraries.dynamic_libs));
    if !resolved.builtin_include_directories.is_empty() {
        out.push_str(&format!(
            "  include: {}\n",
            resolved.builtin_include_directories.join(" ")
        ));
    }

    out.push_str("\n--- Make variables ---\n");
    for (name, value) in resolved
        .make_variables
        .iter()
        .chain(&resolved.global_make_variables)
    {
        out.push_str(&format!("  {name}={value}\n"));
    }
    out
}

fn list(out: &mut String, label: &str, flags: &[String]) {
    let flags: Vec<&str> = flags.iter().map(String::as_str).collect();
    out.push_str(&format!("  {label:<24} {}\n", join_or_none(&flags)));
}

fn join_or_none(items: &[&str]) -> String {
    if items.is_empty() {
        "(none)".to_string()
    } else {
        items.join(" ")
    }
}
