//! Applying resolved skins to a live style root.
//!
//! The binder computes the complete variable map before it touches the
//! root. A failed switch therefore leaves the previously applied map in
//! place, and a successful one replaces it wholesale: stale keys are
//! removed, then every entry is written.

use std::collections::BTreeMap;

use serde_json::Value;

use nchat_types::config::NchatConfig;
use nchat_types::error::{NchatError, RecordKind, Result};
use nchat_types::merge::merge_overrides;

use crate::css::{
    ACCESSIBILITY_PREFIX, COMPONENT_PREFIX, DESIGN_PREFIX, EXTENSION_PREFIX, SKIN_PREFIX, VariableMap,
    accessibility_tokens_to_css_variables, component_tokens_to_css_variables,
    design_tokens_to_css_variables, extension_to_css_variables, skin_to_css_variables,
};
use crate::extension::SkinExtension;
use crate::registry::{Overrides, ResolvedSkin, SkinRegistry, check};
use crate::skin::VisualSkin;
use crate::tokens::{accessibility_tokens, component_tokens, design_tokens};
use crate::validate::{validate_behavior, validate_skin, validate_skin_extension};

/// A presentation surface that holds named style properties.
pub trait StyleRoot {
    fn set_property(&mut self, name: &str, value: &str);
    fn remove_property(&mut self, name: &str);
}

/// In-memory style root.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemoryStyleRoot {
    properties: BTreeMap<String, String>,
}

impl MemoryStyleRoot {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.properties.get(name).map(String::as_str)
    }

    pub fn properties(&self) -> &BTreeMap<String, String> {
        &self.properties
    }

    pub fn len(&self) -> usize {
        self.properties.len()
    }

    pub fn is_empty(&self) -> bool {
        self.properties.is_empty()
    }
}

impl StyleRoot for MemoryStyleRoot {
    fn set_property(&mut self, name: &str, value: &str) {
        self.properties.insert(name.to_string(), value.to_string());
    }

    fn remove_property(&mut self, name: &str) {
        self.properties.remove(name);
    }
}

/// Variable prefixes used by a binder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BinderPrefixes {
    pub skin: String,
    pub design: String,
    pub accessibility: String,
    pub component: String,
    pub extension: String,
}

impl Default for BinderPrefixes {
    fn default() -> Self {
        Self {
            skin: SKIN_PREFIX.to_string(),
            design: DESIGN_PREFIX.to_string(),
            accessibility: ACCESSIBILITY_PREFIX.to_string(),
            component: COMPONENT_PREFIX.to_string(),
            extension: EXTENSION_PREFIX.to_string(),
        }
    }
}

impl From<&NchatConfig> for BinderPrefixes {
    fn from(config: &NchatConfig) -> Self {
        Self {
            skin: config.skin_prefix.clone(),
            design: config.design_prefix.clone(),
            accessibility: config.accessibility_prefix.clone(),
            component: config.component_prefix.clone(),
            extension: config.extension_prefix.clone(),
        }
    }
}

/// What to switch to.
#[derive(Debug, Clone, PartialEq)]
pub enum SkinRequest {
    /// A registered skin id. Visual variables only.
    Id(String),
    /// A skin record supplied by the caller. Visual variables only.
    Skin(Box<VisualSkin>),
    /// A registered skin paired with a registered behavior.
    Pair { skin: String, behavior: String },
    /// A registered composite profile.
    Profile(String),
}

/// Owns a style root and the variable map last written to it.
#[derive(Debug)]
pub struct SkinBinder<R: StyleRoot> {
    root: R,
    prefixes: BinderPrefixes,
    applied: VariableMap,
}

impl<R: StyleRoot> SkinBinder<R> {
    pub fn new(root: R) -> Self {
        Self::with_prefixes(root, BinderPrefixes::default())
    }

    pub fn with_prefixes(root: R, prefixes: BinderPrefixes) -> Self {
        Self {
            root,
            prefixes,
            applied: VariableMap::new(),
        }
    }

    pub fn root(&self) -> &R {
        &self.root
    }

    pub fn into_root(self) -> R {
        self.root
    }

    /// The variables currently written to the root by this binder.
    pub fn applied(&self) -> &VariableMap {
        &self.applied
    }

    /// Apply a skin's visual variables: palette, skin fields, design and
    /// accessibility tokens.
    pub fn apply_skin(&mut self, skin: &VisualSkin, is_dark: bool) -> Result<()> {
        let vars = self.visual_variables(skin, None, is_dark)?;
        self.write(vars);
        log::info!("Applied skin '{}' ({} variables)", skin.id, self.applied.len());
        Ok(())
    }

    /// Apply a resolved skin/behavior pair, including component tokens and
    /// an optional platform extension.
    pub fn apply_resolved(
        &mut self,
        resolved: &ResolvedSkin,
        extension: Option<&SkinExtension>,
        is_dark: bool,
    ) -> Result<()> {
        let vars = self.resolved_variables(resolved, extension, is_dark)?;
        self.write(vars);
        log::info!(
            "Applied skin '{}' with behavior '{}' ({} variables)",
            resolved.skin.id,
            resolved.behavior.id,
            self.applied.len()
        );
        Ok(())
    }

    /// Remove exactly the variables this binder last wrote.
    pub fn remove_skin_variables(&mut self) {
        for name in self.applied.keys() {
            self.root.remove_property(name);
        }
        log::debug!("Removed {} skin variables", self.applied.len());
        self.applied.clear();
    }

    /// Look up, merge, validate, derive and serialize, then replace the
    /// applied variables. Any failure leaves the root untouched.
    pub fn switch_skin(
        &mut self,
        registry: &SkinRegistry,
        request: SkinRequest,
        overrides: &Overrides,
        is_dark: bool,
    ) -> Result<()> {
        let (label, vars) = match request {
            SkinRequest::Id(id) => {
                let skin = registry
                    .get_skin(&id)
                    .ok_or_else(|| NchatError::not_found(RecordKind::Skin, &id))?;
                let skin = apply_skin_override(skin, overrides.skin.as_ref())?;
                let vars = self.visual_variables(&skin, registry.get_skin_extension(&id), is_dark)?;
                (id, vars)
            },
            SkinRequest::Skin(skin) => {
                let skin = apply_skin_override(&skin, overrides.skin.as_ref())?;
                let vars = self.visual_variables(&skin, None, is_dark)?;
                (skin.id, vars)
            },
            SkinRequest::Pair { skin, behavior } => {
                let resolved = registry.resolve_independent(&skin, &behavior, overrides)?;
                let vars =
                    self.resolved_variables(&resolved, registry.get_skin_extension(&skin), is_dark)?;
                (format!("{skin}+{behavior}"), vars)
            },
            SkinRequest::Profile(id) => {
                let resolved = registry.resolve_profile(&id, overrides)?;
                let ext = registry.get_skin_extension(&resolved.skin.id);
                let vars = self.resolved_variables(&resolved, ext, is_dark)?;
                (id, vars)
            },
        };
        self.write(vars);
        log::info!("Switched to '{label}' ({} variables)", self.applied.len());
        Ok(())
    }

    fn visual_variables(
        &self,
        skin: &VisualSkin,
        extension: Option<&SkinExtension>,
        is_dark: bool,
    ) -> Result<VariableMap> {
        check(RecordKind::Skin, &skin.id, validate_skin(skin))?;
        if let Some(ext) = extension {
            check(RecordKind::SkinExtension, &ext.id, validate_skin_extension(ext))?;
        }
        let p = &self.prefixes;
        let mut vars = skin_to_css_variables(skin, is_dark, &p.skin)?;
        vars.extend(design_tokens_to_css_variables(&design_tokens(skin, is_dark), &p.design)?);
        vars.extend(accessibility_tokens_to_css_variables(
            &accessibility_tokens(skin, is_dark),
            &p.accessibility,
        )?);
        if let Some(ext) = extension {
            vars.extend(extension_to_css_variables(ext, is_dark, &p.extension));
        }
        Ok(vars)
    }

    fn resolved_variables(
        &self,
        resolved: &ResolvedSkin,
        extension: Option<&SkinExtension>,
        is_dark: bool,
    ) -> Result<VariableMap> {
        check(RecordKind::Behavior, &resolved.behavior.id, validate_behavior(&resolved.behavior))?;
        let mut vars = self.visual_variables(&resolved.skin, extension, is_dark)?;
        let components = component_tokens(&resolved.skin, &resolved.behavior, is_dark);
        vars.extend(component_tokens_to_css_variables(&components, &self.prefixes.component)?);
        Ok(vars)
    }

    fn write(&mut self, vars: VariableMap) {
        for stale in self.applied.keys().filter(|k| !vars.contains_key(*k)) {
            self.root.remove_property(stale);
        }
        for (name, value) in &vars {
            self.root.set_property(name, value);
        }
        self.applied = vars;
    }
}

fn apply_skin_override(skin: &VisualSkin, overrides: Option<&Value>) -> Result<VisualSkin> {
    match overrides {
        Some(o) => merge_overrides(skin, o),
        None => Ok(skin.clone()),
    }
}
