//! Text-format releases shared by the tests, parsed through the real parser.

use crosstool_model::{Label, ReleaseConfig, Tool};

pub(crate) fn release(text: &str) -> ReleaseConfig {
    crosstool_parse::parse_str("CROSSTOOL", text).unwrap()
}

pub(crate) fn top() -> Label {
    Label::parse("//tools/cpp").unwrap()
}

/// One toolchain with every block declared once; `k8` maps to it even though
/// it targets `piii`.
pub(crate) fn simple(optional_tool: &str) -> String {
    format!(
        r#"major_version: "12"
minor_version: "0"
default_target_cpu: "k8"
default_toolchain {{
  cpu: "k8"
  toolchain_identifier: "toolchain-identifier"
}}
toolchain {{
  toolchain_identifier: "toolchain-identifier"
  host_system_name: "host-system-name"
  target_system_name: "target-system-name"
  target_cpu: "piii"
  target_libc: "target-libc"
  compiler: "compiler"
  abi_version: "abi-version"
  abi_libc_version: "abi-libc-version"
  tool_path {{ name: "ar" path: "path-to-ar" }}
  tool_path {{ name: "cpp" path: "path-to-cpp" }}
  tool_path {{ name: "gcc" path: "path-to-gcc" }}
  tool_path {{ name: "gcov" path: "path-to-gcov" }}
  tool_path {{ name: "ld" path: "path-to-ld" }}
  tool_path {{ name: "nm" path: "path-to-nm" }}
  tool_path {{ name: "objcopy" path: "path-to-objcopy" }}
  tool_path {{ name: "objdump" path: "path-to-objdump" }}
  tool_path {{ name: "strip" path: "path-to-strip" }}
  tool_path {{ name: "dwp" path: "path-to-dwp" }}
  {optional_tool}
  supports_gold_linker: true
  supports_normalizing_ar: true
  supports_incremental_linker: true
  supports_fission: true
  compiler_flag: "c"
  cxx_flag: "cxx"
  unfiltered_cxx_flag: "unfiltered"
  linker_flag: "linker"
  dynamic_library_linker_flag: "solinker"
  objcopy_embed_flag: "objcopy"
  compilation_mode_flags {{
    mode: FASTBUILD
    compiler_flag: "fastbuild"
    cxx_flag: "cxx-fastbuild"
    linker_flag: "linker-fastbuild"
  }}
  compilation_mode_flags {{
    mode: DBG
    compiler_flag: "dbg"
    cxx_flag: "cxx-dbg"
    linker_flag: "linker-dbg"
  }}
  compilation_mode_flags {{
    mode: COVERAGE
    compiler_flag: "coverage"
    cxx_flag: "cxx-coverage"
    linker_flag: "linker-coverage"
  }}
  compilation_mode_flags {{
    mode: OPT
    compiler_flag: "opt"
    cxx_flag: "cxx-opt"
    linker_flag: "linker-opt"
  }}
  linking_mode_flags {{
    mode: FULLY_STATIC
    linker_flag: "fully static"
  }}
  linking_mode_flags {{
    mode: MOSTLY_STATIC
    linker_flag: "mostly static"
  }}
  linking_mode_flags {{
    mode: DYNAMIC
    linker_flag: "dynamic"
  }}
  make_variable {{
    name: "SOME_MAKE_VARIABLE"
    value: "make-variable-value"
  }}
  cxx_builtin_include_directory: "system-include-dir"
}}
"#
    )
}

/// A toolchain declaring every tool except `missing`, with `custom` fields
/// spliced in before the tool paths.
pub(crate) fn missing_tool(missing: Tool, custom: &str) -> String {
    let mut text = String::from(
        r#"major_version: "12"
minor_version: "0"
default_target_cpu: "k8"
default_toolchain { cpu: "k8" toolchain_identifier: "toolchain-identifier" }
toolchain {
  toolchain_identifier: "toolchain-identifier"
  host_system_name: "host-system-name"
  target_system_name: "target-system-name"
  target_cpu: "piii"
  target_libc: "target-libc"
  compiler: "compiler"
  abi_version: "abi-version"
  abi_libc_version: "abi-libc-version"
"#,
    );
    text.push_str(custom);
    text.push('\n');
    for tool in Tool::ALL.into_iter().filter(|&t| t != missing) {
        text.push_str(&format!(
            "  tool_path {{ name: \"{tool}\" path: \"path-to-{tool}\" }}\n"
        ));
    }
    text.push_str("}\n");
    text
}

/// Three toolchains: A and B fully populated (B with lipo blocks and an
/// optional flag), C nearly empty. Some mode blocks are left out on purpose.
pub(crate) const COMPREHENSIVE: &str = r#"major_version: "12"
minor_version: "0"
default_target_cpu: "piii"
default_toolchain {
  cpu: "piii"
  toolchain_identifier: "toolchain-identifier-A"
}
default_toolchain {
  cpu: "k8"
  toolchain_identifier: "toolchain-identifier-B"
}
toolchain {
  toolchain_identifier: "toolchain-identifier-A"
  host_system_name: "host-system-name-A"
  target_system_name: "target-system-name-A"
  target_cpu: "piii"
  target_libc: "target-libc-A"
  compiler: "compiler-A"
  abi_version: "abi-version-A"
  abi_libc_version: "abi-libc-version-A"
  tool_path { name: "ar" path: "path/to/ar-A" }
  tool_path { name: "cpp" path: "path/to/cpp-A" }
  tool_path { name: "gcc" path: "path/to/gcc-A" }
  tool_path { name: "gcov" path: "path/to/gcov-A" }
  tool_path { name: "gcov-tool" path: "path-to-gcov-tool-A" }
  tool_path { name: "ld" path: "path/to/ld-A" }
  tool_path { name: "nm" path: "path/to/nm-A" }
  tool_path { name: "objcopy" path: "path/to/objcopy-A" }
  tool_path { name: "objdump" path: "path/to/objdump-A" }
  tool_path { name: "strip" path: "path/to/strip-A" }
  tool_path { name: "dwp" path: "path/to/dwp" }
  supports_gold_linker: true
  supports_start_end_lib: true
  supports_normalizing_ar: true
  supports_embedded_runtimes: true
  needsPic: true
  compiler_flag: "compiler-flag-A-1"
  compiler_flag: "compiler-flag-A-2"
  cxx_flag: "cxx-flag-A-1"
  cxx_flag: "cxx-flag-A-2"
  unfiltered_cxx_flag: "unfiltered-flag-A-1"
  unfiltered_cxx_flag: "unfiltered-flag-A-2"
  linker_flag: "linker-flag-A-1"
  linker_flag: "linker-flag-A-2"
  dynamic_library_linker_flag: "solinker-flag-A-1"
  dynamic_library_linker_flag: "solinker-flag-A-2"
  objcopy_embed_flag: "objcopy-embed-flag-A-1"
  objcopy_embed_flag: "objcopy-embed-flag-A-2"
  ld_embed_flag: "ld-embed-flag-A-1"
  ld_embed_flag: "ld-embed-flag-A-2"
  compilation_mode_flags {
    mode: FASTBUILD
    compiler_flag: "fastbuild-flag-A-1"
    compiler_flag: "fastbuild-flag-A-2"
    cxx_flag: "cxx-fastbuild-flag-A-1"
    cxx_flag: "cxx-fastbuild-flag-A-2"
    linker_flag: "linker-fastbuild-flag-A-1"
    linker_flag: "linker-fastbuild-flag-A-2"
  }
  compilation_mode_flags {
    mode: DBG
    compiler_flag: "dbg-flag-A-1"
    compiler_flag: "dbg-flag-A-2"
    cxx_flag: "cxx-dbg-flag-A-1"
    cxx_flag: "cxx-dbg-flag-A-2"
    linker_flag: "linker-dbg-flag-A-1"
    linker_flag: "linker-dbg-flag-A-2"
  }
  compilation_mode_flags {
    mode: COVERAGE
  }
  # no OPT block
  linking_mode_flags {
    mode: FULLY_STATIC
    linker_flag: "fully-static-flag-A-1"
    linker_flag: "fully-static-flag-A-2"
  }
  linking_mode_flags {
    mode: MOSTLY_STATIC
  }
  # no DYNAMIC block
  make_variable {
    name: "SOME_MAKE_VARIABLE-A-1"
    value: "make-variable-value-A-1"
  }
  make_variable {
    name: "SOME_MAKE_VARIABLE-A-2"
    value: "make-variable-value-A-2 with spaces in"
  }
  cxx_builtin_include_directory: "system-include-dir-A-1"
  cxx_builtin_include_directory: "system-include-dir-A-2"
  builtin_sysroot: "builtin-sysroot-A"
  default_python_top: "python-top-A"
  default_python_version: "python-version-A"
  default_grte_top: "//some"
  debian_extra_requires: "a"
  debian_extra_requires: "b"
}
toolchain {
  toolchain_identifier: "toolchain-identifier-B"
  host_system_name: "host-system-name-B"
  target_system_name: "target-system-name-B"
  target_cpu: "piii"
  target_libc: "target-libc-B"
  compiler: "compiler-B"
  abi_version: "abi-version-B"
  abi_libc_version: "abi-libc-version-B"
  tool_path { name: "ar" path: "path/to/ar-B" }
  tool_path { name: "cpp" path: "path/to/cpp-B" }
  tool_path { name: "gcc" path: "path/to/gcc-B" }
  tool_path { name: "gcov" path: "path/to/gcov-B" }
  tool_path { name: "gcov-tool" path: "path/to/gcov-tool-B" }
  tool_path { name: "ld" path: "path/to/ld-B" }
  tool_path { name: "nm" path: "path/to/nm-B" }
  tool_path { name: "objcopy" path: "path/to/objcopy-B" }
  tool_path { name: "objdump" path: "path/to/objdump-B" }
  tool_path { name: "strip" path: "path/to/strip-B" }
  tool_path { name: "dwp" path: "path/to/dwp" }
  supports_gold_linker: true
  supports_start_end_lib: true
  supports_normalizing_ar: true
  supports_embedded_runtimes: true
  needsPic: true
  compiler_flag: "compiler-flag-B-1"
  compiler_flag: "compiler-flag-B-2"
  optional_compiler_flag {
    default_setting_name: "crosstool_fig"
    flag: "-Wfig"
  }
  cxx_flag: "cxx-flag-B-1"
  cxx_flag: "cxx-flag-B-2"
  unfiltered_cxx_flag: "unfiltered-flag-B-1"
  unfiltered_cxx_flag: "unfiltered-flag-B-2"
  linker_flag: "linker-flag-B-1"
  linker_flag: "linker-flag-B-2"
  dynamic_library_linker_flag: "solinker-flag-B-1"
  dynamic_library_linker_flag: "solinker-flag-B-2"
  objcopy_embed_flag: "objcopy-embed-flag-B-1"
  objcopy_embed_flag: "objcopy-embed-flag-B-2"
  ld_embed_flag: "ld-embed-flag-B-1"
  ld_embed_flag: "ld-embed-flag-B-2"
  compilation_mode_flags {
    mode: FASTBUILD
    compiler_flag: "fastbuild-flag-B-1"
    compiler_flag: "fastbuild-flag-B-2"
    cxx_flag: "cxx-fastbuild-flag-B-1"
    cxx_flag: "cxx-fastbuild-flag-B-2"
    linker_flag: "linker-fastbuild-flag-B-1"
    linker_flag: "linker-fastbuild-flag-B-2"
  }
  compilation_mode_flags {
    mode: DBG
    compiler_flag: "dbg-flag-B-1"
    compiler_flag: "dbg-flag-B-2"
    cxx_flag: "cxx-dbg-flag-B-1"
    cxx_flag: "cxx-dbg-flag-B-2"
    linker_flag: "linker-dbg-flag-B-1"
    linker_flag: "linker-dbg-flag-B-2"
  }
  compilation_mode_flags {
    mode: COVERAGE
  }
  lipo_mode_flags {
    mode: OFF
    compiler_flag: "lipo_off"
    cxx_flag: "cxx-lipo_off"
    linker_flag: "linker-lipo_off"
  }
  lipo_mode_flags {
    mode: BINARY
    compiler_flag: "lipo_binary"
    cxx_flag: "cxx-lipo_binary"
    linker_flag: "linker-lipo_binary"
  }
  linking_mode_flags {
    mode: FULLY_STATIC
    linker_flag: "fully-static-flag-B-1"
    linker_flag: "fully-static-flag-B-2"
  }
  linking_mode_flags {
    mode: MOSTLY_STATIC
  }
  make_variable {
    name: "SOME_MAKE_VARIABLE-B-1"
    value: "make-variable-value-B-1"
  }
  make_variable {
    name: "SOME_MAKE_VARIABLE-B-2"
    value: "make-variable-value-B-2 with spaces in"
  }
  cxx_builtin_include_directory: "system-include-dir-B-1"
  cxx_builtin_include_directory: "system-include-dir-B-2"
  builtin_sysroot: "builtin-sysroot-B"
  default_python_top: "python-top-B"
  default_python_version: "python-version-B"
  default_grte_top: "//some"
  debian_extra_requires: "c"
  debian_extra_requires: "d"
}
default_setting {
  name: "crosstool_fig"
  default_value: false
}
toolchain {
  toolchain_identifier: "toolchain-identifier-C"
  host_system_name: "host-system-name-C"
  target_system_name: "target-system-name-C"
  target_cpu: "piii"
  target_libc: "target-libc-C"
  compiler: "compiler-C"
  abi_version: "abi-version-C"
  abi_libc_version: "abi-libc-version-C"
  tool_path { name: "ar" path: "path/to/ar-C" }
  tool_path { name: "cpp" path: "path/to/cpp-C" }
  tool_path { name: "gcc" path: "path/to/gcc-C" }
  tool_path { name: "gcov" path: "path/to/gcov-C" }
  tool_path { name: "gcov-tool" path: "path/to/gcov-tool-C" }
  tool_path { name: "ld" path: "path/to/ld-C" }
  tool_path { name: "nm" path: "path/to/nm-C" }
  tool_path { name: "objcopy" path: "path/to/objcopy-C" }
  tool_path { name: "objdump" path: "path/to/objdump-C" }
  tool_path { name: "strip" path: "path/to/strip-C" }
  tool_path { name: "dwp" path: "path/to/dwp" }
}
"#;

/// Six toolchains for selector disambiguation. Only AA-piii targets piii.
pub(crate) const COMPILER_LIBC_SEARCH: &str = r#"major_version: "12"
minor_version: "0"
default_target_cpu: "k8"
default_toolchain {
  cpu: "piii"
  toolchain_identifier: "toolchain-identifier-AA-piii"
}
default_toolchain {
  cpu: "k8"
  toolchain_identifier: "toolchain-identifier-BB"
}
toolchain {
  toolchain_identifier: "toolchain-identifier-AA"
  host_system_name: "host-system-name-AA"
  target_system_name: "target-system-name-AA"
  target_cpu: "k8"
  target_libc: "target-libc-A"
  compiler: "compiler-A"
  abi_version: "abi-version-A"
  abi_libc_version: "abi-libc-version-A"
}
toolchain {
  toolchain_identifier: "toolchain-identifier-AA-piii"
  host_system_name: "host-system-name-AA"
  target_system_name: "target-system-name-AA"
  target_cpu: "piii"
  target_libc: "target-libc-A"
  compiler: "compiler-A"
  abi_version: "abi-version-A"
  abi_libc_version: "abi-libc-version-A"
}
toolchain {
  toolchain_identifier: "toolchain-identifier-AB"
  host_system_name: "host-system-name-AB"
  target_system_name: "target-system-name-AB"
  target_cpu: "k8"
  target_libc: "target-libc-A"
  compiler: "compiler-B"
  abi_version: "abi-version-B"
  abi_libc_version: "abi-libc-version-A"
}
toolchain {
  toolchain_identifier: "toolchain-identifier-BA"
  host_system_name: "host-system-name-BA"
  target_system_name: "target-system-name-BA"
  target_cpu: "k8"
  target_libc: "target-libc-B"
  compiler: "compiler-A"
  abi_version: "abi-version-A"
  abi_libc_version: "abi-libc-version-B"
}
toolchain {
  toolchain_identifier: "toolchain-identifier-BB"
  host_system_name: "host-system-name-BB"
  target_system_name: "target-system-name-BB"
  target_cpu: "k8"
  target_libc: "target-libc-B"
  compiler: "compiler-B"
  abi_version: "abi-version-B"
  abi_libc_version: "abi-libc-version-B"
}
toolchain {
  toolchain_identifier: "toolchain-identifier-BC"
  host_system_name: "host-system-name-BC"
  target_system_name: "target-system-name-BC"
  target_cpu: "k8"
  target_libc: "target-libc-B"
  compiler: "compiler-C"
  abi_version: "abi-version-C"
  abi_libc_version: "abi-libc-version-B"
}
"#;

/// One toolchain with default runtime library locations, one with overrides
/// shared by several CPUs.
pub(crate) const RUNTIME_LIBS: &str = r#"major_version: "v17"
minor_version: "0"
default_target_cpu: "k8"
default_toolchain { cpu: "piii" toolchain_identifier: "default-libs" }
default_toolchain { cpu: "k8" toolchain_identifier: "custom-libs" }
default_toolchain { cpu: "darwin" toolchain_identifier: "custom-libs" }
default_toolchain { cpu: "x64_windows" toolchain_identifier: "custom-libs" }
toolchain {
  toolchain_identifier: "default-libs"
  host_system_name: "host-system-name"
  target_system_name: "target-system-name"
  target_cpu: "piii"
  target_libc: "target-libc"
  compiler: "compiler"
  abi_version: "abi-version"
  abi_libc_version: "abi-libc-version"
  supports_embedded_runtimes: true
}
toolchain {
  toolchain_identifier: "custom-libs"
  host_system_name: "host-system-name"
  target_system_name: "target-system-name"
  target_cpu: "k8"
  target_libc: "target-libc"
  compiler: "compiler"
  abi_version: "abi-version"
  abi_libc_version: "abi-libc-version"
  supports_embedded_runtimes: true
  static_runtimes_filegroup: "static-group"
  dynamic_runtimes_filegroup: "dynamic-group"
}
"#;
