//! Skin engine -- independent visual and behavioral presets for nchat.
//!
//! A platform identity is split along two axes: a [`VisualSkin`] (palette,
//! typography, spacing, component styles) and a [`BehaviorPreset`]
//! (messaging rules, presence, privacy, feature flags). Either axis can be
//! combined with any other; a [`CompositeProfile`] names a pairing.
//!
//! Resolution looks both records up in a [`SkinRegistry`], deep-merges
//! caller overrides, re-validates, and lowers the result into flat token
//! sets and CSS custom-property maps that a [`SkinBinder`] writes to a
//! style root.

pub mod behavior;
pub mod binder;
pub mod builtin;
pub mod css;
pub mod extension;
pub mod pack;
pub mod profile;
pub mod registry;
pub mod skin;
pub mod tokens;
pub mod validate;

pub use behavior::BehaviorPreset;
pub use binder::{BinderPrefixes, MemoryStyleRoot, SkinBinder, SkinRequest, StyleRoot};
pub use css::VariableMap;
pub use extension::{BehaviorExtension, PlatformBehavior, PlatformSkin, SkinExtension};
pub use pack::{SkinPack, discover_packs};
pub use profile::CompositeProfile;
pub use registry::{Overrides, ResolvedSkin, SkinRegistry, default_registry};
pub use skin::VisualSkin;
pub use validate::ValidationResult;

use std::path::Path;

use nchat_types::error::{NchatError, RecordKind, Result};

/// Find a visual skin by id or path.
///
/// Resolution order:
/// 1. Id registered in `registry`
/// 2. Path to a pack directory containing `skin.toml`
/// 3. Pack directory `{skins_dir}/{name}/`
pub fn find_skin(registry: &SkinRegistry, name_or_path: &str, skins_dir: &Path) -> Result<VisualSkin> {
    if let Some(skin) = registry.get_skin(name_or_path) {
        return Ok(skin.clone());
    }

    let path = Path::new(name_or_path);
    if path.join("skin.toml").is_file() {
        return SkinPack::from_directory(path).map(|p| p.skin);
    }

    let pack_dir = skins_dir.join(name_or_path);
    if pack_dir.join("skin.toml").is_file() {
        return SkinPack::from_directory(&pack_dir).map(|p| p.skin);
    }

    log::warn!("Skin '{name_or_path}' not found in registry or on disk");
    Err(NchatError::not_found(RecordKind::Skin, name_or_path))
}
