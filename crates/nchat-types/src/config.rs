//! Runtime configuration.
//!
//! Loaded from an optional `nchat.toml`; every field has a default so an
//! empty file (or no file) yields a working setup.

use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::{NchatError, Result};

/// Engine configuration.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct NchatConfig {
    /// Visual skin id to apply at startup.
    pub skin: String,
    /// Behavior preset id to apply at startup.
    pub behavior: String,
    /// Composite profile id. When set it takes precedence over
    /// `skin`/`behavior`.
    pub profile: Option<String>,
    /// Whether the dark palette is used.
    pub dark_mode: bool,
    /// Prefix for skin-level variables.
    pub skin_prefix: String,
    /// Prefix for design token variables.
    pub design_prefix: String,
    /// Prefix for accessibility token variables.
    pub accessibility_prefix: String,
    /// Prefix for component token variables.
    pub component_prefix: String,
    /// Prefix for platform extension variables.
    pub extension_prefix: String,
    /// Directory scanned for custom skin packs.
    pub skins_dir: Option<PathBuf>,
}

impl Default for NchatConfig {
    fn default() -> Self {
        Self {
            skin: "nchat".to_string(),
            behavior: "nchat".to_string(),
            profile: None,
            dark_mode: false,
            skin_prefix: "--skin".to_string(),
            design_prefix: "--dt".to_string(),
            accessibility_prefix: "--a11y".to_string(),
            component_prefix: "--cmp".to_string(),
            extension_prefix: "--ext".to_string(),
            skins_dir: None,
        }
    }
}

impl NchatConfig {
    /// Parse configuration from a TOML string.
    pub fn from_toml(s: &str) -> Result<Self> {
        toml::from_str(s).map_err(|e| NchatError::Config(format!("nchat.toml: {e}")))
    }

    /// Load configuration from a file.
    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)
            .map_err(|e| NchatError::Config(format!("{}: {e}", path.display())))?;
        let config = Self::from_toml(&text)?;
        log::debug!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// Load from `path` if it exists, otherwise fall back to defaults.
    pub fn load_or_default(path: &Path) -> Result<Self> {
        if path.is_file() {
            Self::load(path)
        } else {
            Ok(Self::default())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let c = NchatConfig::default();
        assert_eq!(c.skin, "nchat");
        assert_eq!(c.behavior, "nchat");
        assert_eq!(c.skin_prefix, "--skin");
        assert_eq!(c.design_prefix, "--dt");
        assert!(!c.dark_mode);
        assert!(c.profile.is_none());
    }

    #[test]
    fn empty_toml_is_default() {
        let c = NchatConfig::from_toml("").unwrap();
        assert_eq!(c.skin, "nchat");
        assert_eq!(c.component_prefix, "--cmp");
    }

    #[test]
    fn partial_toml_keeps_defaults() {
        let c = NchatConfig::from_toml(
            r#"
skin = "slack"
behavior = "whatsapp"
dark_mode = true
skins_dir = "skins"
"#,
        )
        .unwrap();
        assert_eq!(c.skin, "slack");
        assert_eq!(c.behavior, "whatsapp");
        assert!(c.dark_mode);
        assert_eq!(c.skins_dir.as_deref(), Some(Path::new("skins")));
        assert_eq!(c.design_prefix, "--dt");
    }

    #[test]
    fn bad_toml_is_config_error() {
        let err = NchatConfig::from_toml("dark_mode = \"maybe\"").unwrap_err();
        assert!(matches!(err, NchatError::Config(_)));
    }

    #[test]
    fn load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nchat.toml");
        std::fs::write(&path, "profile = \"discord\"\n").unwrap();
        let c = NchatConfig::load(&path).unwrap();
        assert_eq!(c.profile.as_deref(), Some("discord"));
    }

    #[test]
    fn missing_file_falls_back() {
        let dir = tempfile::tempdir().unwrap();
        let c = NchatConfig::load_or_default(&dir.path().join("absent.toml")).unwrap();
        assert_eq!(c.skin, "nchat");
        assert!(NchatConfig::load(&dir.path().join("absent.toml")).is_err());
    }
}
