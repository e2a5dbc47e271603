//! Skin packs: custom skins loaded from TOML files on disk.
//!
//! A pack is a directory holding `skin.toml` and, optionally,
//! `behavior.toml`, `extended.toml` and `profile.toml`. Packs live side by
//! side in a skins directory:
//!
//! ```text
//! skins/
//!   midnight/
//!     skin.toml
//!     extended.toml
//!     profile.toml
//! ```

use std::path::Path;

use nchat_types::error::{NchatError, Result};

use crate::behavior::BehaviorPreset;
use crate::extension::SkinExtension;
use crate::profile::CompositeProfile;
use crate::skin::VisualSkin;

/// The records loaded from one pack directory.
#[derive(Debug, Clone, PartialEq)]
pub struct SkinPack {
    /// Directory name (or caller-supplied name for in-memory packs).
    pub name: String,
    pub skin: VisualSkin,
    pub behavior: Option<BehaviorPreset>,
    pub extension: Option<SkinExtension>,
    pub profile: Option<CompositeProfile>,
}

fn parse_opt<T>(text: &str, parse: impl FnOnce(&str) -> Result<T>) -> Result<Option<T>> {
    if text.trim().is_empty() {
        Ok(None)
    } else {
        parse(text).map(Some)
    }
}

impl SkinPack {
    /// Build a pack from TOML strings. Empty optional strings mean the file
    /// is absent.
    pub fn from_toml(
        name: &str,
        skin_toml: &str,
        behavior_toml: &str,
        extended_toml: &str,
        profile_toml: &str,
    ) -> Result<Self> {
        Ok(Self {
            name: name.to_string(),
            skin: VisualSkin::from_toml(skin_toml)?,
            behavior: parse_opt(behavior_toml, BehaviorPreset::from_toml)?,
            extension: parse_opt(extended_toml, SkinExtension::from_toml)?,
            profile: parse_opt(profile_toml, CompositeProfile::from_toml)?,
        })
    }

    /// Load a pack from a directory. Only `skin.toml` is required.
    pub fn from_directory(dir: &Path) -> Result<Self> {
        let read = |name: &str| -> Result<String> {
            let p = dir.join(name);
            std::fs::read_to_string(&p).map_err(|e| NchatError::Config(format!("{}: {e}", p.display())))
        };
        let read_opt = |name: &str| -> String { std::fs::read_to_string(dir.join(name)).unwrap_or_default() };

        let skin = read("skin.toml")?;
        let behavior = read_opt("behavior.toml");
        let extended = read_opt("extended.toml");
        let profile = read_opt("profile.toml");

        let name = dir
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        Self::from_toml(&name, &skin, &behavior, &extended, &profile)
    }
}

/// Load every pack under `dir`, sorted by directory name.
///
/// Only subdirectories containing `skin.toml` count. A missing directory
/// yields no packs; a pack that fails to parse is skipped with a warning.
pub fn discover_packs(dir: &Path) -> Vec<SkinPack> {
    let Ok(entries) = std::fs::read_dir(dir) else {
        return Vec::new();
    };
    let mut dirs: Vec<_> = entries
        .filter_map(|e| e.ok())
        .map(|e| e.path())
        .filter(|p| p.join("skin.toml").is_file())
        .collect();
    dirs.sort();

    dirs.iter()
        .filter_map(|p| match SkinPack::from_directory(p) {
            Ok(pack) => Some(pack),
            Err(e) => {
                log::warn!("Skipping skin pack {}: {e}", p.display());
                None
            },
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use super::*;
    use crate::registry::SkinRegistry;

    fn bundled_skins() -> PathBuf {
        Path::new(env!("CARGO_MANIFEST_DIR")).join("skins")
    }

    #[test]
    fn bundled_midnight_pack_loads() {
        let pack = SkinPack::from_directory(&bundled_skins().join("midnight")).unwrap();
        assert_eq!(pack.name, "midnight");
        assert_eq!(pack.skin.id, "midnight");
        assert!(pack.behavior.is_none());
        assert!(pack.extension.is_some());
        assert_eq!(pack.profile.as_ref().unwrap().behavior_id, "discord");
    }

    #[test]
    fn register_bundled_pack() {
        let mut reg = SkinRegistry::with_builtins().unwrap();
        for pack in discover_packs(&bundled_skins()) {
            reg.register_pack(pack).unwrap();
        }
        assert!(reg.get_skin("midnight").is_some());
        assert!(reg.get_skin_extension("midnight").is_some());
        let r = reg
            .resolve_profile("midnight", &crate::registry::Overrides::none())
            .unwrap();
        assert_eq!(r.behavior.id, "discord");
    }

    #[test]
    fn pack_profile_needs_known_behavior() {
        let dir = bundled_skins().join("midnight");
        let pack = SkinPack::from_directory(&dir).unwrap();
        let mut reg = SkinRegistry::new();
        assert!(reg.register_pack(pack).is_err());
        assert!(reg.get_skin("midnight").is_none());
    }

    #[test]
    fn discover_sorts_and_skips() {
        let tmp = tempfile::tempdir().unwrap();
        let skin = std::fs::read_to_string(bundled_skins().join("midnight/skin.toml")).unwrap();
        for name in ["zeta", "alpha"] {
            let d = tmp.path().join(name);
            std::fs::create_dir(&d).unwrap();
            std::fs::write(d.join("skin.toml"), skin.replace("\"midnight\"", &format!("\"{name}\""))).unwrap();
        }
        let broken = tmp.path().join("broken");
        std::fs::create_dir(&broken).unwrap();
        std::fs::write(broken.join("skin.toml"), "id = [").unwrap();
        std::fs::create_dir(tmp.path().join("empty")).unwrap();

        let packs = discover_packs(tmp.path());
        let names: Vec<&str> = packs.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, ["alpha", "zeta"]);
        assert_eq!(packs[0].skin.id, "alpha");
    }

    #[test]
    fn missing_directory_yields_nothing() {
        assert!(discover_packs(Path::new("/nonexistent/path/to/skins")).is_empty());
    }

    #[test]
    fn from_directory_requires_skin_toml() {
        let tmp = tempfile::tempdir().unwrap();
        let err = SkinPack::from_directory(tmp.path()).unwrap_err();
        assert!(err.to_string().contains("skin.toml"));
    }

    #[test]
    fn empty_optional_files_are_absent() {
        let skin = std::fs::read_to_string(bundled_skins().join("midnight/skin.toml")).unwrap();
        let pack = SkinPack::from_toml("inline", &skin, "", "  \n", "").unwrap();
        assert!(pack.behavior.is_none());
        assert!(pack.extension.is_none());
        assert!(pack.profile.is_none());
    }
}
