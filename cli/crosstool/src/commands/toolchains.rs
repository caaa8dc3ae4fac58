//! `crosstool toolchains` — list the toolchains of a release.

use anyhow::Result;
use crosstool_model::ReleaseConfig;
use crosstool_resolve::Candidate;

use crate::commands::Source;

/// Print every toolchain, the default mappings, and the release version.
pub fn run(source: &Source) -> Result<()> {
    let release = source.load()?;
    println!("=== {} ===", source.config.display());
    print!("{}", render(&release));
    Ok(())
}

pub fn render(release: &ReleaseConfig) -> String {
    let mut out = format!(
        "  Release:            {}.{}\n",
        release.major_version(),
        release.minor_version()
    );
    out.push_str(&format!(
        "  Default target CPU: {}\n",
        release.default_target_cpu()
    ));

    out.push_str(&format!(
        "\n--- Toolchains ({}) ---\n",
        release.toolchains().len()
    ));
    for toolchain in release.toolchains() {
        let candidate = Candidate::from(toolchain);
        out.push_str(&format!(
            "  {:<24} {candidate}\n",
            toolchain.toolchain_identifier
        ));
    }

    out.push_str("\n--- Default toolchains ---\n");
    if release.default_toolchains().is_empty() {
        out.push_str("  (none)\n");
    }
    for mapping in release.default_toolchains() {
        let marker = if release
            .toolchain_by_identifier(&mapping.toolchain_identifier)
            .is_some()
        {
            ""
        } else {
            "  (unknown identifier)"
        };
        out.push_str(&format!(
            "  --cpu='{}' -> {}{marker}\n",
            mapping.cpu, mapping.toolchain_identifier
        ));
    }

    if !release.default_settings().is_empty() {
        out.push_str("\n--- Default settings ---\n");
        for setting in release.default_settings() {
            let state = if setting.default_value { "on" } else { "off" };
            out.push_str(&format!("  {:<24} {state}\n", setting.name));
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    const CONFIG: &str = r#"
major_version: "12"
minor_version: "3"
default_target_cpu: "k8"
default_toolchain { cpu: "k8" toolchain_identifier: "gcc-k8" }
default_toolchain { cpu: "arm" toolchain_identifier: "gone" }
toolchain {
  toolchain_identifier: "gcc-k8"
  host_system_name: "x86_64-linux"
  target_system_name: "x86_64-linux-gnu"
  target_cpu: "k8"
  target_libc: "glibc-2.19"
  compiler: "gcc"
  abi_version: "gcc"
  abi_libc_version: "glibc-2.19"
}
toolchain {
  toolchain_identifier: "clang-k8"
  host_system_name: "x86_64-linux"
  target_system_name: "x86_64-linux-gnu"
  target_cpu: "k8"
  target_libc: "glibc-2.19"
  compiler: "clang"
  abi_version: "clang"
  abi_libc_version: "glibc-2.19"
}
default_setting { name: "crosstool_fig" default_value: true }
"#;

    #[test]
    fn render_lists_toolchains_in_file_order() {
        let release = crosstool_parse::parse_str("CROSSTOOL", CONFIG).unwrap();
        let text = render(&release);
        assert!(text.contains("Release:            12.3"));
        assert!(text.contains("--- Toolchains (2) ---"));
        let gcc = text
            .find("gcc-k8 ")
            .expect("gcc toolchain listed");
        let clang = text.find("clang-k8").expect("clang toolchain listed");
        assert!(gcc < clang);
        assert!(text.contains("--cpu='k8' --compiler='clang' --glibc='glibc-2.19'"));
    }

    #[test]
    fn render_flags_dangling_mappings() {
        let release = crosstool_parse::parse_str("CROSSTOOL", CONFIG).unwrap();
        let text = render(&release);
        assert!(text.contains("--cpu='k8' -> gcc-k8\n"));
        assert!(text.contains("--cpu='arm' -> gone  (unknown identifier)"));
        assert!(text.contains("crosstool_fig"));
    }

    #[test]
    fn render_empty_release() {
        let release = crosstool_parse::parse_str(
            "CROSSTOOL",
            "major_version: \"1\" minor_version: \"0\" default_target_cpu: \"k8\"",
        )
        .unwrap();
        let text = render(&release);
        assert!(text.contains("--- Toolchains (0) ---"));
        assert!(text.contains("  (none)"));
        assert!(!text.contains("Default settings"));
    }
}
