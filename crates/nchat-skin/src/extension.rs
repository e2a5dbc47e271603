//! Per-platform extension side tables.
//!
//! Platforms carry extra fields beyond the base skin/behavior shape
//! (WhatsApp's outgoing bubble green, Discord's role limits). Those live in
//! separately typed records keyed by the same id and are composed with the
//! base record structurally.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use nchat_types::error::{NchatError, Result};

use crate::behavior::BehaviorPreset;
use crate::skin::VisualSkin;

/// Extra visual tokens for one platform.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SkinExtension {
    /// Id of the skin this extends.
    pub id: String,
    /// Extra light-mode colors, keyed by camelCase name.
    #[serde(default)]
    pub colors: BTreeMap<String, String>,
    /// Dark-mode replacements for entries in `colors`.
    #[serde(default)]
    pub dark_colors: BTreeMap<String, String>,
    /// Extra box-shadow values, keyed by camelCase name.
    #[serde(default)]
    pub shadows: BTreeMap<String, String>,
}

impl SkinExtension {
    pub fn empty(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            ..Self::default()
        }
    }

    pub fn from_toml(s: &str) -> Result<Self> {
        toml::from_str(s).map_err(|e| NchatError::Config(format!("extended.toml: {e}")))
    }

    /// Extension colors for the given mode. Dark entries fall back to the
    /// light value when not overridden.
    pub fn colors_for(&self, is_dark: bool) -> BTreeMap<String, String> {
        let mut out = self.colors.clone();
        if is_dark {
            for (k, v) in &self.dark_colors {
                out.insert(k.clone(), v.clone());
            }
        }
        out
    }
}

/// Extra behavioral switches and limits for one platform.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BehaviorExtension {
    /// Id of the behavior preset this extends.
    pub id: String,
    #[serde(default)]
    pub features: BTreeMap<String, bool>,
    /// Platform-specific limits (0 = unlimited).
    #[serde(default)]
    pub limits: BTreeMap<String, u64>,
}

impl BehaviorExtension {
    pub fn empty(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            ..Self::default()
        }
    }

    pub fn from_toml(s: &str) -> Result<Self> {
        toml::from_str(s).map_err(|e| NchatError::Config(format!("extended.toml: {e}")))
    }

    /// Whether a platform feature is switched on. Unknown features are off.
    pub fn has_feature(&self, name: &str) -> bool {
        self.features.get(name).copied().unwrap_or(false)
    }
}

/// A base skin composed with its extension.
#[derive(Debug, Clone, PartialEq)]
pub struct PlatformSkin {
    pub base: VisualSkin,
    pub extended: SkinExtension,
}

/// A base behavior preset composed with its extension.
#[derive(Debug, Clone, PartialEq)]
pub struct PlatformBehavior {
    pub base: BehaviorPreset,
    pub extended: BehaviorExtension,
}
