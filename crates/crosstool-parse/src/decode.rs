//! Schema layer: maps the generic text tree onto the descriptor model.
//!
//! Unknown fields and mistyped values abort decoding with a schema error.
//! Missing required fields are collected (as dotted paths) and reported
//! together once the whole document has been walked.

use std::fmt::Display;
use std::str::FromStr;

use crosstool_model::{
    DefaultSetting, DefaultToolchain, MakeVariable, ModeFlags, OptionalFlag, ReleaseConfig,
    Toolchain,
};

use crate::text::{Field, Message, Value};

/// Outcome of decoding a document that was syntactically valid.
pub(crate) enum Decoded {
    Complete(ReleaseConfig),
    Incomplete(Vec<String>),
}

type SchemaResult<T> = Result<T, String>;

/// Collects missing required fields while walking the tree.
#[derive(Default)]
struct Missing(Vec<String>);

impl Missing {
    fn require(&mut self, value: Option<String>, path: &str, field: &str) -> String {
        value.unwrap_or_else(|| {
            self.0.push(format!("{path}{field}"));
            String::new()
        })
    }
}

pub(crate) fn decode_release(doc: &Message) -> SchemaResult<Decoded> {
    let mut missing = Missing::default();
    let mut major_version = None;
    let mut minor_version = None;
    let mut default_target_cpu = None;
    let mut default_toolchains = Vec::new();
    let mut toolchains = Vec::new();
    let mut default_settings = Vec::new();

    for field in &doc.fields {
        match field.name.as_str() {
            "major_version" => major_version = Some(string(field)?),
            "minor_version" => minor_version = Some(string(field)?),
            "default_target_cpu" => default_target_cpu = Some(string(field)?),
            "default_toolchain" => {
                let path = format!("default_toolchain[{}].", default_toolchains.len());
                default_toolchains.push(decode_default_toolchain(message(field)?, &path, &mut missing)?);
            }
            "toolchain" => {
                let path = format!("toolchain[{}].", toolchains.len());
                toolchains.push(decode_toolchain(message(field)?, &path, &mut missing)?);
            }
            "default_setting" => {
                let path = format!("default_setting[{}].", default_settings.len());
                default_settings.push(decode_default_setting(message(field)?, &path, &mut missing)?);
            }
            _ => return Err(unknown(field, "the release")),
        }
    }

    let major_version = missing.require(major_version, "", "major_version");
    let minor_version = missing.require(minor_version, "", "minor_version");
    let default_target_cpu = missing.require(default_target_cpu, "", "default_target_cpu");
    if !missing.0.is_empty() {
        // Top-level fields first.
        missing.0.sort_by_key(|p| p.contains('.'));
        return Ok(Decoded::Incomplete(missing.0));
    }

    Ok(Decoded::Complete(ReleaseConfig::new(
        major_version,
        minor_version,
        default_target_cpu,
        default_toolchains,
        toolchains,
        default_settings,
    )))
}

fn decode_default_toolchain(
    msg: &Message,
    path: &str,
    missing: &mut Missing,
) -> SchemaResult<DefaultToolchain> {
    let mut cpu = None;
    let mut toolchain_identifier = None;
    for field in &msg.fields {
        match field.name.as_str() {
            "cpu" => cpu = Some(string(field)?),
            "toolchain_identifier" => toolchain_identifier = Some(string(field)?),
            _ => return Err(unknown(field, "default_toolchain")),
        }
    }
    Ok(DefaultToolchain {
        cpu: missing.require(cpu, path, "cpu"),
        toolchain_identifier: missing.require(toolchain_identifier, path, "toolchain_identifier"),
    })
}

fn decode_default_setting(
    msg: &Message,
    path: &str,
    missing: &mut Missing,
) -> SchemaResult<DefaultSetting> {
    let mut name = None;
    let mut default_value = false;
    for field in &msg.fields {
        match field.name.as_str() {
            "name" => name = Some(string(field)?),
            "default_value" => default_value = boolean(field)?,
            _ => return Err(unknown(field, "default_setting")),
        }
    }
    Ok(DefaultSetting {
        name: missing.require(name, path, "name"),
        default_value,
    })
}

fn decode_toolchain(msg: &Message, path: &str, missing: &mut Missing) -> SchemaResult<Toolchain> {
    let mut t = Toolchain::default();
    let mut toolchain_identifier = None;
    let mut host_system_name = None;
    let mut target_system_name = None;
    let mut target_cpu = None;
    let mut target_libc = None;
    let mut compiler = None;
    let mut abi_version = None;
    let mut abi_libc_version = None;
    let mut counts = BlockCounts::default();

    for field in &msg.fields {
        match field.name.as_str() {
            "toolchain_identifier" => toolchain_identifier = Some(string(field)?),
            "host_system_name" => host_system_name = Some(string(field)?),
            "target_system_name" => target_system_name = Some(string(field)?),
            "target_cpu" => target_cpu = Some(string(field)?),
            "target_libc" => target_libc = Some(string(field)?),
            "compiler" => compiler = Some(string(field)?),
            "abi_version" => abi_version = Some(string(field)?),
            "abi_libc_version" => abi_libc_version = Some(string(field)?),

            "tool_path" => {
                let sub = format!("{path}tool_path[{}].", bump(&mut counts.tool_path));
                if let Some((name, tool_path)) = decode_tool_path(message(field)?, &sub, missing)? {
                    t.tool_paths.insert(name, tool_path);
                }
            }

            "supports_gold_linker" => t.supports_gold_linker = boolean(field)?,
            "supports_start_end_lib" => t.supports_start_end_lib = boolean(field)?,
            "supports_normalizing_ar" => t.supports_normalizing_ar = boolean(field)?,
            "supports_incremental_linker" => t.supports_incremental_linker = boolean(field)?,
            "supports_fission" => t.supports_fission = boolean(field)?,
            "supports_embedded_runtimes" => t.supports_embedded_runtimes = boolean(field)?,
            "needsPic" => t.needs_pic = boolean(field)?,
            "supports_interface_shared_objects" => {
                t.supports_interface_shared_objects = boolean(field)?
            }

            "compiler_flag" => t.compiler_flags.push(string(field)?),
            "cxx_flag" => t.cxx_flags.push(string(field)?),
            "unfiltered_cxx_flag" => t.unfiltered_cxx_flags.push(string(field)?),
            "linker_flag" => t.linker_flags.push(string(field)?),
            "dynamic_library_linker_flag" => t.dynamic_library_linker_flags.push(string(field)?),
            "objcopy_embed_flag" => t.objcopy_embed_flags.push(string(field)?),
            "ld_embed_flag" => t.ld_embed_flags.push(string(field)?),
            "cxx_builtin_include_directory" => {
                t.cxx_builtin_include_directories.push(string(field)?)
            }
            "debian_extra_requires" => t.debian_extra_requires.push(string(field)?),

            "compilation_mode_flags" => {
                let sub = format!(
                    "{path}compilation_mode_flags[{}].",
                    bump(&mut counts.compilation_mode)
                );
                if let Some((mode, flags)) = decode_mode_flags(message(field)?, &sub, missing, true)? {
                    t.compilation_mode_flags.entry(mode).or_default().extend(flags);
                }
            }
            "lipo_mode_flags" => {
                let sub = format!("{path}lipo_mode_flags[{}].", bump(&mut counts.lipo_mode));
                if let Some((mode, flags)) = decode_mode_flags(message(field)?, &sub, missing, true)? {
                    t.lipo_mode_flags.entry(mode).or_default().extend(flags);
                }
            }
            "linking_mode_flags" => {
                let sub = format!(
                    "{path}linking_mode_flags[{}].",
                    bump(&mut counts.linking_mode)
                );
                if let Some((mode, flags)) = decode_mode_flags(message(field)?, &sub, missing, false)? {
                    t.linking_mode_flags
                        .entry(mode)
                        .or_default()
                        .extend(flags.linker_flags);
                }
            }
            "optional_compiler_flag" => {
                let sub = format!(
                    "{path}optional_compiler_flag[{}].",
                    bump(&mut counts.optional_flag)
                );
                t.optional_compiler_flags
                    .push(decode_optional_flag(message(field)?, &sub, missing)?);
            }
            "make_variable" => {
                let sub = format!("{path}make_variable[{}].", bump(&mut counts.make_variable));
                t.make_variables
                    .push(decode_make_variable(message(field)?, &sub, missing)?);
            }

            "builtin_sysroot" => t.builtin_sysroot = Some(string(field)?),
            "static_runtimes_filegroup" => t.static_runtimes_filegroup = Some(string(field)?),
            "dynamic_runtimes_filegroup" => t.dynamic_runtimes_filegroup = Some(string(field)?),
            "default_python_top" => t.default_python_top = Some(string(field)?),
            "default_python_version" => t.default_python_version = Some(string(field)?),
            "default_grte_top" => t.default_grte_top = Some(string(field)?),

            _ => return Err(unknown(field, "toolchain")),
        }
    }

    t.toolchain_identifier = missing.require(toolchain_identifier, path, "toolchain_identifier");
    t.host_system_name = missing.require(host_system_name, path, "host_system_name");
    t.target_system_name = missing.require(target_system_name, path, "target_system_name");
    t.target_cpu = missing.require(target_cpu, path, "target_cpu");
    t.target_libc = missing.require(target_libc, path, "target_libc");
    t.compiler = missing.require(compiler, path, "compiler");
    t.abi_version = missing.require(abi_version, path, "abi_version");
    t.abi_libc_version = missing.require(abi_libc_version, path, "abi_libc_version");
    Ok(t)
}

/// Per-toolchain counters for nested block paths.
#[derive(Default)]
struct BlockCounts {
    tool_path: usize,
    compilation_mode: usize,
    lipo_mode: usize,
    linking_mode: usize,
    optional_flag: usize,
    make_variable: usize,
}

fn bump(counter: &mut usize) -> usize {
    let current = *counter;
    *counter += 1;
    current
}

fn decode_tool_path(
    msg: &Message,
    path: &str,
    missing: &mut Missing,
) -> SchemaResult<Option<(String, String)>> {
    let mut name = None;
    let mut tool_path = None;
    for field in &msg.fields {
        match field.name.as_str() {
            "name" => name = Some(string(field)?),
            "path" => tool_path = Some(string(field)?),
            _ => return Err(unknown(field, "tool_path")),
        }
    }
    Ok(match (name, tool_path) {
        (Some(name), Some(tool_path)) => Some((name, tool_path)),
        (name, tool_path) => {
            missing.require(name, path, "name");
            missing.require(tool_path, path, "path");
            None
        }
    })
}

/// Decode a mode block. `with_compile_flags` is false for linking-mode
/// blocks, which only carry `linker_flag`.
fn decode_mode_flags<M>(
    msg: &Message,
    path: &str,
    missing: &mut Missing,
    with_compile_flags: bool,
) -> SchemaResult<Option<(M, ModeFlags)>>
where
    M: FromStr + Display,
{
    let context = if with_compile_flags { "mode flags" } else { "linking_mode_flags" };
    let mut mode = None;
    let mut flags = ModeFlags::default();
    for field in &msg.fields {
        match field.name.as_str() {
            "mode" => mode = Some(enumeration::<M>(field)?),
            "linker_flag" => flags.linker_flags.push(string(field)?),
            "compiler_flag" if with_compile_flags => flags.compiler_flags.push(string(field)?),
            "cxx_flag" if with_compile_flags => flags.cxx_flags.push(string(field)?),
            _ => return Err(unknown(field, context)),
        }
    }
    match mode {
        Some(mode) => Ok(Some((mode, flags))),
        None => {
            missing.0.push(format!("{path}mode"));
            Ok(None)
        }
    }
}

fn decode_optional_flag(
    msg: &Message,
    path: &str,
    missing: &mut Missing,
) -> SchemaResult<OptionalFlag> {
    let mut default_setting_name = None;
    let mut flag = None;
    for field in &msg.fields {
        match field.name.as_str() {
            "default_setting_name" => default_setting_name = Some(string(field)?),
            "flag" => flag = Some(string(field)?),
            _ => return Err(unknown(field, "optional_compiler_flag")),
        }
    }
    Ok(OptionalFlag {
        default_setting_name: missing.require(default_setting_name, path, "default_setting_name"),
        flag: missing.require(flag, path, "flag"),
    })
}

fn decode_make_variable(
    msg: &Message,
    path: &str,
    missing: &mut Missing,
) -> SchemaResult<MakeVariable> {
    let mut name = None;
    let mut value = None;
    for field in &msg.fields {
        match field.name.as_str() {
            "name" => name = Some(string(field)?),
            "value" => value = Some(string(field)?),
            _ => return Err(unknown(field, "make_variable")),
        }
    }
    Ok(MakeVariable {
        name: missing.require(name, path, "name"),
        value: missing.require(value, path, "value"),
    })
}

fn unknown(field: &Field, context: &str) -> String {
    format!("line {}: unknown field '{}' in {context}", field.line, field.name)
}

fn mistyped(field: &Field, expected: &str) -> String {
    format!(
        "line {}: field '{}' expects {expected}, found {}",
        field.line,
        field.name,
        field.value.kind()
    )
}

fn string(field: &Field) -> SchemaResult<String> {
    match &field.value {
        Value::Str(s) => Ok(s.clone()),
        _ => Err(mistyped(field, "a quoted string")),
    }
}

fn boolean(field: &Field) -> SchemaResult<bool> {
    match &field.value {
        Value::Ident(v) => match v.as_str() {
            "true" | "True" | "t" => Ok(true),
            "false" | "False" | "f" => Ok(false),
            _ => Err(mistyped(field, "true or false")),
        },
        Value::Number(v) if v == "1" => Ok(true),
        Value::Number(v) if v == "0" => Ok(false),
        _ => Err(mistyped(field, "true or false")),
    }
}

/// Enum values must use the exact file spelling.
fn enumeration<M: FromStr + Display>(field: &Field) -> SchemaResult<M> {
    if let Value::Ident(v) = &field.value {
        if let Ok(mode) = v.parse::<M>() {
            if mode.to_string() == *v {
                return Ok(mode);
            }
        }
        return Err(format!(
            "line {}: unknown value '{v}' for field '{}'",
            field.line, field.name
        ));
    }
    Err(mistyped(field, "an enum value"))
}

fn message(field: &Field) -> SchemaResult<&Message> {
    match &field.value {
        Value::Message(m) => Ok(m),
        _ => Err(mistyped(field, "a message")),
    }
}
