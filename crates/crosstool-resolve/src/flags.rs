//! Flag composition.
//!
//! Every list is built by concatenating layers in a fixed order:
//!
//! 1. The toolchain's base flags
//! 2. The compilation-mode block
//! 3. The lipo-mode block
//! 4. Axis-specific extras (optional flags, linking-mode block, shared-object flags)
//!
//! A block the toolchain does not declare contributes nothing.

use crosstool_model::{CompilationMode, LinkingMode, LipoMode, ModeFlags, Toolchain};

use crate::features::FeatureSet;

/// Composes flag lists for one toolchain under fixed compilation and lipo modes.
#[derive(Debug, Clone, Copy)]
pub struct FlagComposer<'t> {
    toolchain: &'t Toolchain,
    compilation_mode: CompilationMode,
    lipo_mode: LipoMode,
}

impl<'t> FlagComposer<'t> {
    pub fn new(toolchain: &'t Toolchain, compilation_mode: CompilationMode, lipo_mode: LipoMode) -> Self {
        Self {
            toolchain,
            compilation_mode,
            lipo_mode,
        }
    }

    pub fn toolchain(&self) -> &'t Toolchain {
        self.toolchain
    }

    /// Base, mode, and lipo compiler flags, then each optional flag whose
    /// setting is in `features`.
    pub fn compiler_options(&self, features: &FeatureSet) -> Vec<String> {
        let mut flags = self.layered(&self.toolchain.compiler_flags, |m| &m.compiler_flags);
        flags.extend(
            self.toolchain
                .optional_compiler_flags
                .iter()
                .filter(|o| features.contains(&o.default_setting_name))
                .map(|o| o.flag.clone()),
        );
        flags
    }

    /// Optional flags only gate the compiler axis; `features` is accepted so
    /// every compile composition has the same shape.
    pub fn cxx_options(&self, _features: &FeatureSet) -> Vec<String> {
        self.layered(&self.toolchain.cxx_flags, |m| &m.cxx_flags)
    }

    /// Unfiltered flags are never layered by mode.
    pub fn unfiltered_compiler_options(&self, _features: &FeatureSet) -> Vec<String> {
        self.toolchain.unfiltered_cxx_flags.clone()
    }

    /// Base, mode, and lipo linker flags shared by every link.
    pub fn linker_options(&self) -> Vec<String> {
        self.layered(&self.toolchain.linker_flags, |m| &m.linker_flags)
    }

    pub fn dynamic_link_options(&self, shared_object: bool) -> Vec<String> {
        self.link_with(LinkingMode::Dynamic, shared_object)
    }

    /// A fully static link cannot produce a shared object; that combination
    /// links mostly static instead.
    pub fn fully_static_link_options(&self, shared_object: bool) -> Vec<String> {
        if shared_object {
            self.link_with(LinkingMode::MostlyStatic, true)
        } else {
            self.link_with(LinkingMode::FullyStatic, false)
        }
    }

    pub fn mostly_static_link_options(&self, shared_object: bool) -> Vec<String> {
        self.link_with(LinkingMode::MostlyStatic, shared_object)
    }

    /// Link options for `mode`, with the same substitution rules as the
    /// per-mode methods.
    pub fn link_options(&self, mode: LinkingMode, shared_object: bool) -> Vec<String> {
        match mode {
            LinkingMode::FullyStatic => self.fully_static_link_options(shared_object),
            LinkingMode::MostlyStatic => self.mostly_static_link_options(shared_object),
            LinkingMode::Dynamic => self.dynamic_link_options(shared_object),
        }
    }

    pub fn objcopy_embed_options(&self) -> Vec<String> {
        self.toolchain.objcopy_embed_flags.clone()
    }

    pub fn ld_embed_options(&self) -> Vec<String> {
        self.toolchain.ld_embed_flags.clone()
    }

    fn link_with(&self, mode: LinkingMode, shared_object: bool) -> Vec<String> {
        let mut flags = self.linker_options();
        flags.extend_from_slice(self.toolchain.linking_mode_linker_flags(mode));
        if shared_object {
            flags.extend_from_slice(&self.toolchain.dynamic_library_linker_flags);
        }
        flags
    }

    fn layered(&self, base: &[String], axis: impl Fn(&ModeFlags) -> &Vec<String>) -> Vec<String> {
        let mut flags = base.to_vec();
        if let Some(block) = self.toolchain.compilation_mode_block(self.compilation_mode) {
            flags.extend_from_slice(axis(block));
        }
        if let Some(block) = self.toolchain.lipo_mode_block(self.lipo_mode) {
            flags.extend_from_slice(axis(block));
        }
        flags
    }
}

/// Linker options for an explicit mode triple. `linking_mode` is taken
/// literally, with no shared-object substitution.
pub fn configure_linker_options(
    toolchain: &Toolchain,
    compilation_mode: CompilationMode,
    lipo_mode: LipoMode,
    linking_mode: LinkingMode,
) -> Vec<String> {
    FlagComposer::new(toolchain, compilation_mode, lipo_mode).link_with(linking_mode, false)
}
