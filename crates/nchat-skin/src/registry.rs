//! The skin registry: id-keyed stores for skins, behaviors, profiles and
//! their extension side tables, plus override-aware resolution.
//!
//! A registry is an explicit value. Tests build isolated instances with
//! [`SkinRegistry::new`]; production code shares the lazily built
//! [`default_registry`].

use std::collections::HashMap;
use std::sync::{OnceLock, RwLock};

use serde_json::Value;

use nchat_types::error::{MissingId, NchatError, RecordKind, Result};
use nchat_types::merge::merge_overrides;

use crate::behavior::BehaviorPreset;
use crate::builtin;
use crate::extension::{BehaviorExtension, PlatformBehavior, PlatformSkin, SkinExtension};
use crate::pack::SkinPack;
use crate::profile::CompositeProfile;
use crate::skin::VisualSkin;
use crate::validate::{
    ValidationResult, validate_behavior, validate_behavior_extension, validate_profile, validate_skin,
    validate_skin_extension,
};

/// Partial overrides applied on top of the looked-up records.
///
/// Each side is a JSON object shaped like a subset of the record's
/// camelCase serialization. `None` leaves the record untouched.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Overrides {
    pub skin: Option<Value>,
    pub behavior: Option<Value>,
}

impl Overrides {
    pub fn none() -> Self {
        Self::default()
    }

    pub fn skin(value: Value) -> Self {
        Self {
            skin: Some(value),
            behavior: None,
        }
    }

    pub fn behavior(value: Value) -> Self {
        Self {
            skin: None,
            behavior: Some(value),
        }
    }

    pub fn with_behavior(mut self, value: Value) -> Self {
        self.behavior = Some(value);
        self
    }
}

/// A skin and a behavior preset after overrides, both validated.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedSkin {
    pub skin: VisualSkin,
    pub behavior: BehaviorPreset,
}

pub(crate) fn check(kind: RecordKind, id: &str, result: ValidationResult) -> Result<()> {
    if result.valid {
        return Ok(());
    }
    log::warn!("Rejected {kind} '{id}': {}", result.errors.join("; "));
    Err(NchatError::Validation {
        kind,
        id: id.to_string(),
        errors: result.errors,
    })
}

fn sorted_ids<T>(map: &HashMap<String, T>) -> Vec<&str> {
    let mut ids: Vec<&str> = map.keys().map(String::as_str).collect();
    ids.sort_unstable();
    ids
}

/// Id-keyed store of catalog records.
#[derive(Debug, Clone, Default)]
pub struct SkinRegistry {
    skins: HashMap<String, VisualSkin>,
    behaviors: HashMap<String, BehaviorPreset>,
    profiles: HashMap<String, CompositeProfile>,
    skin_extensions: HashMap<String, SkinExtension>,
    behavior_extensions: HashMap<String, BehaviorExtension>,
}

impl SkinRegistry {
    /// An empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// A registry seeded with every built-in platform.
    pub fn with_builtins() -> Result<Self> {
        let mut reg = Self::new();
        for id in builtin::builtin_ids() {
            reg.register_skin(builtin::skin(id)?)?;
            reg.register_behavior(builtin::behavior(id)?)?;
            reg.register_skin_extension(builtin::skin_extension(id)?)?;
            reg.register_behavior_extension(builtin::behavior_extension(id)?)?;
            reg.register_profile(builtin::profile(id)?)?;
        }
        log::debug!("Seeded registry with {} built-in platforms", reg.skins.len());
        Ok(reg)
    }

    // -- Registration ------------------------------------------------------

    /// Validate and insert a skin, replacing any skin with the same id.
    pub fn register_skin(&mut self, skin: VisualSkin) -> Result<()> {
        check(RecordKind::Skin, &skin.id, validate_skin(&skin))?;
        log::debug!("Registered skin '{}'", skin.id);
        self.skins.insert(skin.id.clone(), skin);
        Ok(())
    }

    pub fn register_behavior(&mut self, behavior: BehaviorPreset) -> Result<()> {
        check(RecordKind::Behavior, &behavior.id, validate_behavior(&behavior))?;
        log::debug!("Registered behavior '{}'", behavior.id);
        self.behaviors.insert(behavior.id.clone(), behavior);
        Ok(())
    }

    /// Validate and insert a profile. Both referenced ids must already be
    /// registered.
    pub fn register_profile(&mut self, profile: CompositeProfile) -> Result<()> {
        check(RecordKind::Profile, &profile.id, validate_profile(&profile))?;
        let mut missing = Vec::new();
        if !self.skins.contains_key(&profile.skin_id) {
            missing.push(MissingId::new(RecordKind::Skin, &profile.skin_id));
        }
        if !self.behaviors.contains_key(&profile.behavior_id) {
            missing.push(MissingId::new(RecordKind::Behavior, &profile.behavior_id));
        }
        if !missing.is_empty() {
            log::warn!("Rejected profile '{}': unresolved references", profile.id);
            return Err(NchatError::NotFound { missing });
        }
        log::debug!(
            "Registered profile '{}' ({} + {})",
            profile.id,
            profile.skin_id,
            profile.behavior_id
        );
        self.profiles.insert(profile.id.clone(), profile);
        Ok(())
    }

    /// Validate and insert a skin extension. Its base skin must exist.
    pub fn register_skin_extension(&mut self, ext: SkinExtension) -> Result<()> {
        check(RecordKind::SkinExtension, &ext.id, validate_skin_extension(&ext))?;
        if !self.skins.contains_key(&ext.id) {
            return Err(NchatError::not_found(RecordKind::Skin, &ext.id));
        }
        self.skin_extensions.insert(ext.id.clone(), ext);
        Ok(())
    }

    /// Validate and insert a behavior extension. Its base preset must exist.
    pub fn register_behavior_extension(&mut self, ext: BehaviorExtension) -> Result<()> {
        check(RecordKind::BehaviorExtension, &ext.id, validate_behavior_extension(&ext))?;
        if !self.behaviors.contains_key(&ext.id) {
            return Err(NchatError::not_found(RecordKind::Behavior, &ext.id));
        }
        self.behavior_extensions.insert(ext.id.clone(), ext);
        Ok(())
    }

    /// Register every record of a skin pack.
    ///
    /// Everything is validated before anything is inserted, so a bad pack
    /// leaves the registry unchanged.
    pub fn register_pack(&mut self, pack: SkinPack) -> Result<()> {
        let skin_id = pack.skin.id.clone();
        check(RecordKind::Skin, &skin_id, validate_skin(&pack.skin))?;
        if let Some(b) = &pack.behavior {
            check(RecordKind::Behavior, &b.id, validate_behavior(b))?;
        }
        if let Some(ext) = &pack.extension {
            check(RecordKind::SkinExtension, &ext.id, validate_skin_extension(ext))?;
            if ext.id != skin_id {
                return Err(NchatError::not_found(RecordKind::Skin, &ext.id));
            }
        }
        if let Some(p) = &pack.profile {
            check(RecordKind::Profile, &p.id, validate_profile(p))?;
            let pack_behavior = pack.behavior.as_ref().map(|b| b.id.as_str());
            let mut missing = Vec::new();
            if p.skin_id != skin_id && !self.skins.contains_key(&p.skin_id) {
                missing.push(MissingId::new(RecordKind::Skin, &p.skin_id));
            }
            if pack_behavior != Some(p.behavior_id.as_str()) && !self.behaviors.contains_key(&p.behavior_id) {
                missing.push(MissingId::new(RecordKind::Behavior, &p.behavior_id));
            }
            if !missing.is_empty() {
                return Err(NchatError::NotFound { missing });
            }
        }

        log::info!("Registering skin pack '{}'", pack.name);
        self.skins.insert(skin_id, pack.skin);
        if let Some(b) = pack.behavior {
            self.behaviors.insert(b.id.clone(), b);
        }
        if let Some(ext) = pack.extension {
            self.skin_extensions.insert(ext.id.clone(), ext);
        }
        if let Some(p) = pack.profile {
            self.profiles.insert(p.id.clone(), p);
        }
        Ok(())
    }

    // -- Lookup ------------------------------------------------------------

    pub fn get_skin(&self, id: &str) -> Option<&VisualSkin> {
        self.skins.get(id)
    }

    pub fn get_behavior(&self, id: &str) -> Option<&BehaviorPreset> {
        self.behaviors.get(id)
    }

    pub fn get_profile(&self, id: &str) -> Option<&CompositeProfile> {
        self.profiles.get(id)
    }

    pub fn get_skin_extension(&self, id: &str) -> Option<&SkinExtension> {
        self.skin_extensions.get(id)
    }

    pub fn get_behavior_extension(&self, id: &str) -> Option<&BehaviorExtension> {
        self.behavior_extensions.get(id)
    }

    /// Registered skin ids, sorted.
    pub fn skin_ids(&self) -> Vec<&str> {
        sorted_ids(&self.skins)
    }

    pub fn behavior_ids(&self) -> Vec<&str> {
        sorted_ids(&self.behaviors)
    }

    pub fn profile_ids(&self) -> Vec<&str> {
        sorted_ids(&self.profiles)
    }

    // -- Removal -----------------------------------------------------------

    /// Remove a skin together with its extension.
    pub fn remove_skin(&mut self, id: &str) -> Option<VisualSkin> {
        let removed = self.skins.remove(id)?;
        self.skin_extensions.remove(id);
        log::debug!("Removed skin '{id}'");
        Some(removed)
    }

    /// Remove a behavior preset together with its extension.
    pub fn remove_behavior(&mut self, id: &str) -> Option<BehaviorPreset> {
        let removed = self.behaviors.remove(id)?;
        self.behavior_extensions.remove(id);
        log::debug!("Removed behavior '{id}'");
        Some(removed)
    }

    pub fn remove_profile(&mut self, id: &str) -> Option<CompositeProfile> {
        self.profiles.remove(id)
    }

    // -- Resolution --------------------------------------------------------

    /// Look up a skin and a behavior independently, apply overrides to
    /// each, and re-validate the merged records.
    ///
    /// Every missing id is reported in a single [`NchatError::NotFound`].
    pub fn resolve_independent(
        &self,
        skin_id: &str,
        behavior_id: &str,
        overrides: &Overrides,
    ) -> Result<ResolvedSkin> {
        let skin = self.skins.get(skin_id);
        let behavior = self.behaviors.get(behavior_id);
        let (skin, behavior) = match (skin, behavior) {
            (Some(s), Some(b)) => (s, b),
            (s, b) => {
                let mut missing = Vec::new();
                if s.is_none() {
                    missing.push(MissingId::new(RecordKind::Skin, skin_id));
                }
                if b.is_none() {
                    missing.push(MissingId::new(RecordKind::Behavior, behavior_id));
                }
                return Err(NchatError::NotFound { missing });
            },
        };

        let skin = match &overrides.skin {
            Some(o) => {
                let merged: VisualSkin = merge_overrides(skin, o)?;
                check(RecordKind::Skin, &merged.id, validate_skin(&merged))?;
                merged
            },
            None => skin.clone(),
        };
        let behavior = match &overrides.behavior {
            Some(o) => {
                let merged: BehaviorPreset = merge_overrides(behavior, o)?;
                check(RecordKind::Behavior, &merged.id, validate_behavior(&merged))?;
                merged
            },
            None => behavior.clone(),
        };

        log::debug!("Resolved skin '{skin_id}' with behavior '{behavior_id}'");
        Ok(ResolvedSkin { skin, behavior })
    }

    /// Resolve the skin/behavior pair a profile names.
    pub fn resolve_profile(&self, profile_id: &str, overrides: &Overrides) -> Result<ResolvedSkin> {
        let profile = self
            .profiles
            .get(profile_id)
            .ok_or_else(|| NchatError::not_found(RecordKind::Profile, profile_id))?;
        self.resolve_independent(&profile.skin_id, &profile.behavior_id, overrides)
    }

    /// A skin composed with its extension. A skin without one gets an
    /// empty extension.
    pub fn resolve_platform_skin(&self, id: &str) -> Result<PlatformSkin> {
        let base = self
            .skins
            .get(id)
            .ok_or_else(|| NchatError::not_found(RecordKind::Skin, id))?;
        let extended = self
            .skin_extensions
            .get(id)
            .cloned()
            .unwrap_or_else(|| SkinExtension::empty(id));
        Ok(PlatformSkin {
            base: base.clone(),
            extended,
        })
    }

    pub fn resolve_platform_behavior(&self, id: &str) -> Result<PlatformBehavior> {
        let base = self
            .behaviors
            .get(id)
            .ok_or_else(|| NchatError::not_found(RecordKind::Behavior, id))?;
        let extended = self
            .behavior_extensions
            .get(id)
            .cloned()
            .unwrap_or_else(|| BehaviorExtension::empty(id));
        Ok(PlatformBehavior {
            base: base.clone(),
            extended,
        })
    }
}

static DEFAULT_REGISTRY: OnceLock<RwLock<SkinRegistry>> = OnceLock::new();

/// The process-wide registry, seeded with the built-ins on first use.
///
/// Writers take the write lock; the last registration for an id wins.
pub fn default_registry() -> &'static RwLock<SkinRegistry> {
    DEFAULT_REGISTRY.get_or_init(|| {
        let reg = SkinRegistry::with_builtins().unwrap_or_else(|e| {
            log::error!("Built-in catalog failed to load: {e}");
            SkinRegistry::new()
        });
        RwLock::new(reg)
    })
}
