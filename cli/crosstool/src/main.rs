//! Crosstool CLI — resolve compiler toolchain configurations.

mod commands;
mod manifest;

use std::path::{Path, PathBuf};
use std::process;

use clap::{ArgAction, Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use commands::resolve::RequestFlags;
use commands::{SelectorFlags, Source};
use manifest::CrosstoolManifest;

#[derive(Parser)]
#[command(name = "crosstool", version, about = "Multi-toolchain compiler configuration resolver")]
struct Cli {
    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Resolve the full build configuration for one toolchain
    Resolve {
        /// CROSSTOOL configuration file (default: [crosstool] path in crosstool.toml)
        #[arg(long)]
        config: Option<PathBuf>,
        /// Crosstool package label (default: //tools/cpp)
        #[arg(long)]
        top: Option<String>,
        /// Target CPU
        #[arg(long)]
        cpu: Option<String>,
        /// Compiler name; requires an exact descriptor match
        #[arg(long)]
        compiler: Option<String>,
        /// Target libc; requires an exact descriptor match
        #[arg(long)]
        glibc: Option<String>,
        /// Compilation mode (fastbuild, dbg, opt, coverage)
        #[arg(long)]
        compilation_mode: Option<String>,
        /// LIPO mode (off, binary)
        #[arg(long)]
        lipo: Option<String>,
        /// Enable a feature, or disable it with a leading '-' (repeatable)
        #[arg(long = "feature", allow_hyphen_values = true)]
        features: Vec<String>,
        /// Libc top label; overrides the toolchain's default_grte_top
        #[arg(long)]
        libc_top: Option<String>,
        /// Extra C compiler option (repeatable)
        #[arg(long = "copt", allow_hyphen_values = true)]
        copts: Vec<String>,
        /// Extra C++ compiler option (repeatable)
        #[arg(long = "cxxopt", allow_hyphen_values = true)]
        cxxopts: Vec<String>,
        /// Extra linker option (repeatable)
        #[arg(long = "linkopt", allow_hyphen_values = true)]
        linkopts: Vec<String>,
        /// Output format (human, json)
        #[arg(long)]
        format: Option<String>,
    },
    /// List the toolchains declared in a configuration file
    Toolchains {
        /// CROSSTOOL configuration file
        #[arg(long)]
        config: Option<PathBuf>,
        /// Crosstool package label
        #[arg(long)]
        top: Option<String>,
    },
    /// Check that the selected toolchain declares every required tool
    Check {
        /// CROSSTOOL configuration file
        #[arg(long)]
        config: Option<PathBuf>,
        /// Crosstool package label
        #[arg(long)]
        top: Option<String>,
        /// Target CPU
        #[arg(long)]
        cpu: Option<String>,
        /// Compiler name
        #[arg(long)]
        compiler: Option<String>,
        /// Target libc
        #[arg(long)]
        glibc: Option<String>,
    },
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let result = run(cli);
    if let Err(e) = result {
        eprintln!("error: {e:#}");
        process::exit(1);
    }
}

/// Log to stderr so `--format json` output stays clean. `RUST_LOG` adds
/// further directives.
fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => "info",
        1 => "debug",
        _ => "trace",
    };
    let mut filter = EnvFilter::from_default_env();
    for krate in ["crosstool", "crosstool_parse", "crosstool_resolve"] {
        if let Ok(directive) = format!("{krate}={level}").parse() {
            filter = filter.add_directive(directive);
        }
    }
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .init();
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let cwd = std::env::current_dir()?;

    match cli.command {
        Commands::Resolve {
            config,
            top,
            cpu,
            compiler,
            glibc,
            compilation_mode,
            lipo,
            features,
            libc_top,
            copts,
            cxxopts,
            linkopts,
            format,
        } => {
            let manifest = load_manifest_optional(&cwd)?;
            let source =
                Source::locate(&cwd, manifest.as_ref(), config.as_deref(), top.as_deref())?;
            let flags = RequestFlags {
                selector: SelectorFlags {
                    cpu: cpu.as_deref(),
                    compiler: compiler.as_deref(),
                    glibc: glibc.as_deref(),
                },
                compilation_mode: compilation_mode.as_deref(),
                lipo: lipo.as_deref(),
                features: &features,
                libc_top: libc_top.as_deref(),
                copts: &copts,
                cxxopts: &cxxopts,
                linkopts: &linkopts,
            };
            let build = build_config(manifest.as_ref());
            commands::resolve::run(&source, build, &flags, format.as_deref())
        }

        Commands::Toolchains { config, top } => {
            let manifest = load_manifest_optional(&cwd)?;
            let source =
                Source::locate(&cwd, manifest.as_ref(), config.as_deref(), top.as_deref())?;
            commands::toolchains::run(&source)
        }

        Commands::Check {
            config,
            top,
            cpu,
            compiler,
            glibc,
        } => {
            let manifest = load_manifest_optional(&cwd)?;
            let source =
                Source::locate(&cwd, manifest.as_ref(), config.as_deref(), top.as_deref())?;
            let flags = SelectorFlags {
                cpu: cpu.as_deref(),
                compiler: compiler.as_deref(),
                glibc: glibc.as_deref(),
            };
            commands::check::run(&source, build_config(manifest.as_ref()), &flags)
        }
    }
}

/// Try to load a manifest from the current directory upward.
fn load_manifest_optional(cwd: &Path) -> anyhow::Result<Option<(CrosstoolManifest, PathBuf)>> {
    CrosstoolManifest::find_and_load(cwd)
}

fn build_config(manifest: Option<&(CrosstoolManifest, PathBuf)>) -> Option<&manifest::BuildConfig> {
    manifest.and_then(|(m, _)| m.build())
}
