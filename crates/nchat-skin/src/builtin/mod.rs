//! Built-in platform catalog.
//!
//! Each platform is defined as embedded TOML constants: a visual skin, a
//! behavior preset, and the two extension side tables. A composite profile
//! with the same id pairs the platform's skin with its behavior.

use nchat_types::error::{NchatError, RecordKind, Result};

use crate::behavior::BehaviorPreset;
use crate::extension::{BehaviorExtension, SkinExtension};
use crate::profile::CompositeProfile;
use crate::skin::VisualSkin;

mod discord;
mod nchat;
mod signal;
mod slack;
mod telegram;
mod whatsapp;

#[cfg(test)]
mod tests;

/// Id of the blended default identity.
pub const DEFAULT_ID: &str = "nchat";

/// One built-in platform: all of its catalog data as TOML.
pub(crate) struct Platform {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub skin: &'static str,
    pub behavior: &'static str,
    pub skin_extension: &'static str,
    pub behavior_extension: &'static str,
}

const PLATFORMS: &[Platform] = &[
    nchat::PLATFORM,
    whatsapp::PLATFORM,
    telegram::PLATFORM,
    discord::PLATFORM,
    slack::PLATFORM,
    signal::PLATFORM,
];

fn find(kind: RecordKind, id: &str) -> Result<&'static Platform> {
    PLATFORMS
        .iter()
        .find(|p| p.id == id)
        .ok_or_else(|| NchatError::not_found(kind, id))
}

/// Ids of all built-in platforms.
pub fn builtin_ids() -> Vec<&'static str> {
    PLATFORMS.iter().map(|p| p.id).collect()
}

/// Load a built-in visual skin by id.
pub fn skin(id: &str) -> Result<VisualSkin> {
    VisualSkin::from_toml(find(RecordKind::Skin, id)?.skin)
}

/// Load a built-in behavior preset by id.
pub fn behavior(id: &str) -> Result<BehaviorPreset> {
    BehaviorPreset::from_toml(find(RecordKind::Behavior, id)?.behavior)
}

/// Load a built-in skin extension by id.
pub fn skin_extension(id: &str) -> Result<SkinExtension> {
    SkinExtension::from_toml(find(RecordKind::SkinExtension, id)?.skin_extension)
}

/// Load a built-in behavior extension by id.
pub fn behavior_extension(id: &str) -> Result<BehaviorExtension> {
    BehaviorExtension::from_toml(find(RecordKind::BehaviorExtension, id)?.behavior_extension)
}

/// The composite profile pairing a platform's own skin and behavior.
pub fn profile(id: &str) -> Result<CompositeProfile> {
    let p = find(RecordKind::Profile, id)?;
    Ok(CompositeProfile {
        id: p.id.to_string(),
        name: p.name.to_string(),
        description: p.description.to_string(),
        skin_id: p.id.to_string(),
        behavior_id: p.id.to_string(),
    })
}
