//! Structural validation for catalog records.
//!
//! Validation never fails; it reports every problem found. Enum membership
//! is already guaranteed by the typed records, so the checks here cover
//! what the type system cannot: hex colors, pixel sizes, numeric ranges.

use std::collections::{BTreeMap, BTreeSet, HashSet};

use nchat_types::color::is_hex_color;

use crate::behavior::BehaviorPreset;
use crate::css::camel_to_kebab;
use crate::extension::{BehaviorExtension, SkinExtension};
use crate::profile::CompositeProfile;
use crate::skin::{SkinColorPalette, VisualSkin, parse_px};

/// Outcome of validating one record.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationResult {
    pub valid: bool,
    pub errors: Vec<String>,
}

impl ValidationResult {
    fn from_errors(errors: Vec<String>) -> Self {
        Self {
            valid: errors.is_empty(),
            errors,
        }
    }
}

/// Longest edit/delete window accepted (one year).
const MAX_WINDOW_MS: u64 = 365 * 24 * 60 * 60 * 1000;
const MAX_MESSAGE_LENGTH: u32 = 1_000_000;
const MAX_GROUP_SIZE: u32 = 10_000_000;
const MAX_LINE_HEIGHT: f64 = 4.0;
const MAX_STROKE_WIDTH: f64 = 4.0;

fn require_non_empty(errors: &mut Vec<String>, field: &str, value: &str) {
    if value.trim().is_empty() {
        errors.push(format!("{field} must not be empty"));
    }
}

fn check_palette(errors: &mut Vec<String>, path: &str, palette: &SkinColorPalette) {
    for (name, value) in palette.slots() {
        if !is_hex_color(value) {
            errors.push(format!("{path}.{name}: '{value}' is not a hex color"));
        }
    }
}

fn check_px(errors: &mut Vec<String>, path: &str, value: &str) {
    if parse_px(value).is_none() {
        errors.push(format!("{path}: '{value}' is not a non-negative px size"));
    }
}

fn check_weight(errors: &mut Vec<String>, path: &str, weight: u16) {
    if !(100..=900).contains(&weight) || weight % 100 != 0 {
        errors.push(format!("{path}: {weight} is not a font weight (100..900 in steps of 100)"));
    }
}

/// Validate a visual skin.
pub fn validate_skin(skin: &VisualSkin) -> ValidationResult {
    let mut errors = Vec::new();
    require_non_empty(&mut errors, "id", &skin.id);
    require_non_empty(&mut errors, "name", &skin.name);

    check_palette(&mut errors, "colors", &skin.colors);
    check_palette(&mut errors, "darkMode.colors", &skin.dark_mode.colors);

    let t = &skin.typography;
    require_non_empty(&mut errors, "typography.fontFamily", &t.font_family);
    require_non_empty(&mut errors, "typography.fontFamilyMono", &t.font_family_mono);
    for (name, value) in [
        ("fontSizeSm", &t.font_size_sm),
        ("fontSizeBase", &t.font_size_base),
        ("fontSizeLg", &t.font_size_lg),
        ("fontSizeXl", &t.font_size_xl),
    ] {
        check_px(&mut errors, &format!("typography.{name}"), value);
    }
    check_weight(&mut errors, "typography.fontWeightNormal", t.font_weight_normal);
    check_weight(&mut errors, "typography.fontWeightMedium", t.font_weight_medium);
    check_weight(&mut errors, "typography.fontWeightBold", t.font_weight_bold);
    if !(t.line_height > 0.0 && t.line_height <= MAX_LINE_HEIGHT) {
        errors.push(format!(
            "typography.lineHeight: {} is outside (0, {MAX_LINE_HEIGHT}]",
            t.line_height
        ));
    }
    require_non_empty(&mut errors, "typography.letterSpacing", &t.letter_spacing);

    for (name, value) in skin.spacing.slots() {
        check_px(&mut errors, &format!("spacing.{name}"), value);
    }
    for (name, value) in skin.border_radius.slots() {
        check_px(&mut errors, &format!("borderRadius.{name}"), value);
    }

    require_non_empty(&mut errors, "icons.set", &skin.icons.set);
    let sw = skin.icons.stroke_width;
    if !(sw > 0.0 && sw <= MAX_STROKE_WIDTH) {
        errors.push(format!("icons.strokeWidth: {sw} is outside (0, {MAX_STROKE_WIDTH}]"));
    }

    ValidationResult::from_errors(errors)
}

/// Validate a behavior preset.
pub fn validate_behavior(behavior: &BehaviorPreset) -> ValidationResult {
    let mut errors = Vec::new();
    require_non_empty(&mut errors, "id", &behavior.id);
    require_non_empty(&mut errors, "name", &behavior.name);

    let m = &behavior.messaging;
    for (name, value) in [("editWindow", m.edit_window), ("deleteWindow", m.delete_window)] {
        if value > MAX_WINDOW_MS {
            errors.push(format!("messaging.{name}: {value}ms exceeds one year"));
        }
    }
    if m.max_message_length > MAX_MESSAGE_LENGTH {
        errors.push(format!(
            "messaging.maxMessageLength: {} exceeds {MAX_MESSAGE_LENGTH}",
            m.max_message_length
        ));
    }
    if !m.reactions && m.max_reactions_per_message > 0 {
        errors.push("messaging.maxReactionsPerMessage is set but reactions are disabled".into());
    }
    if !m.pinning && m.max_pinned_messages > 0 {
        errors.push("messaging.maxPinnedMessages is set but pinning is disabled".into());
    }

    if behavior.channels.max_group_size > MAX_GROUP_SIZE {
        errors.push(format!(
            "channels.maxGroupSize: {} exceeds {MAX_GROUP_SIZE}",
            behavior.channels.max_group_size
        ));
    }

    let states = &behavior.presence.states;
    if states.is_empty() {
        errors.push("presence.states must not be empty".into());
    }
    let mut seen = HashSet::new();
    for s in states {
        if !seen.insert(s) {
            errors.push(format!("presence.states: duplicate state {s:?}"));
        }
    }

    if behavior.moderation.max_slow_mode_interval > MAX_WINDOW_MS {
        errors.push("moderation.maxSlowModeInterval exceeds one year".into());
    }

    ValidationResult::from_errors(errors)
}

/// Validate a composite profile. Referenced ids are only checked for
/// presence here; the registry checks they resolve.
pub fn validate_profile(profile: &CompositeProfile) -> ValidationResult {
    let mut errors = Vec::new();
    require_non_empty(&mut errors, "id", &profile.id);
    require_non_empty(&mut errors, "name", &profile.name);
    require_non_empty(&mut errors, "skinId", &profile.skin_id);
    require_non_empty(&mut errors, "behaviorId", &profile.behavior_id);
    ValidationResult::from_errors(errors)
}

/// Validate a skin extension side table.
pub fn validate_skin_extension(ext: &SkinExtension) -> ValidationResult {
    let mut errors = Vec::new();
    require_non_empty(&mut errors, "id", &ext.id);
    for (path, map) in [("colors", &ext.colors), ("darkColors", &ext.dark_colors)] {
        for (name, value) in map {
            if !is_hex_color(value) {
                errors.push(format!("{path}.{name}: '{value}' is not a hex color"));
            }
        }
    }
    for (name, value) in &ext.shadows {
        require_non_empty(&mut errors, &format!("shadows.{name}"), value);
    }

    // Colors and shadows share one variable namespace; a color named
    // `shadowFoo` would land on the same key as shadow `foo`.
    let color_names: BTreeSet<&String> = ext.colors.keys().chain(ext.dark_colors.keys()).collect();
    let named = color_names
        .into_iter()
        .map(|n| (camel_to_kebab(n), format!("colors.{n}")))
        .chain(
            ext.shadows
                .keys()
                .map(|n| (format!("shadow-{}", camel_to_kebab(n)), format!("shadows.{n}"))),
        );
    let mut seen: BTreeMap<String, String> = BTreeMap::new();
    for (key, source) in named {
        if let Some(first) = seen.get(&key) {
            errors.push(format!("{source}: variable '{key}' is already produced by {first}"));
        } else {
            seen.insert(key, source);
        }
    }
    ValidationResult::from_errors(errors)
}

/// Validate a behavior extension side table.
pub fn validate_behavior_extension(ext: &BehaviorExtension) -> ValidationResult {
    let mut errors = Vec::new();
    require_non_empty(&mut errors, "id", &ext.id);
    for name in ext.features.keys().chain(ext.limits.keys()) {
        require_non_empty(&mut errors, "feature/limit name", name);
    }
    ValidationResult::from_errors(errors)
}
