//! Lowering records to flat CSS custom-property maps.
//!
//! Any serializable record can be flattened: object keys become
//! kebab-case path segments joined by `-` under a prefix. Numbers and
//! booleans are stringified, scalar arrays are joined with `", "`, nulls
//! are skipped.

use std::collections::BTreeMap;

use serde::Serialize;
use serde_json::Value;

use nchat_types::error::Result;

use crate::extension::SkinExtension;
use crate::skin::{SkinColorPalette, VisualSkin};
use crate::tokens::{AccessibilityTokens, ComponentTokens, DesignTokens};

/// Variable name → value, in deterministic order.
pub type VariableMap = BTreeMap<String, String>;

pub const SKIN_PREFIX: &str = "--skin";
pub const DESIGN_PREFIX: &str = "--dt";
pub const ACCESSIBILITY_PREFIX: &str = "--a11y";
pub const COMPONENT_PREFIX: &str = "--cmp";
pub const EXTENSION_PREFIX: &str = "--ext";

/// Convert `camelCase` to `kebab-case`. Digits stay attached to the
/// preceding segment (`avatarSizeLg` → `avatar-size-lg`, `2xl` → `2xl`).
pub fn camel_to_kebab(s: &str) -> String {
    let mut out = String::with_capacity(s.len() + 4);
    for (i, ch) in s.chars().enumerate() {
        if ch.is_ascii_uppercase() {
            if i > 0 {
                out.push('-');
            }
            out.push(ch.to_ascii_lowercase());
        } else {
            out.push(ch);
        }
    }
    out
}

fn join_key(prefix: &str, segment: &str) -> String {
    let segment = camel_to_kebab(segment);
    if prefix.is_empty() {
        segment
    } else {
        format!("{prefix}-{segment}")
    }
}

fn scalar(v: &Value) -> Option<String> {
    match v {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

fn flatten(prefix: &str, value: &Value, out: &mut VariableMap) {
    match value {
        Value::Null => {},
        Value::Object(map) => {
            for (k, v) in map {
                flatten(&join_key(prefix, k), v, out);
            }
        },
        Value::Array(items) => {
            if items.iter().all(|v| !v.is_object() && !v.is_array()) {
                let joined: Vec<String> = items.iter().filter_map(scalar).collect();
                out.insert(prefix.to_string(), joined.join(", "));
            } else {
                for (i, v) in items.iter().enumerate() {
                    flatten(&join_key(prefix, &i.to_string()), v, out);
                }
            }
        },
        scalar_value => {
            if let Some(s) = scalar(scalar_value) {
                out.insert(prefix.to_string(), s);
            }
        },
    }
}

/// Flatten any serializable record under `prefix`.
///
/// A scalar at the top level is stored under the bare prefix.
pub fn to_css_variables<T: Serialize + ?Sized>(value: &T, prefix: &str) -> Result<VariableMap> {
    let v = serde_json::to_value(value)?;
    let mut out = VariableMap::new();
    flatten(prefix, &v, &mut out);
    Ok(out)
}

/// Palette slots directly under the prefix (`--skin-primary`).
pub fn colors_to_css_variables(palette: &SkinColorPalette, prefix: &str) -> VariableMap {
    palette
        .slots()
        .into_iter()
        .map(|(name, value)| (join_key(prefix, name), value.to_string()))
        .collect()
}

/// All skin-level variables for one mode: the active palette plus
/// typography, spacing, radii, icons and component styles.
pub fn skin_to_css_variables(skin: &VisualSkin, is_dark: bool, prefix: &str) -> Result<VariableMap> {
    let mut out = colors_to_css_variables(skin.palette(is_dark), prefix);
    out.extend(to_css_variables(&skin.typography, &join_key(prefix, "typography"))?);
    out.extend(to_css_variables(&skin.spacing, &join_key(prefix, "spacing"))?);
    out.extend(to_css_variables(&skin.border_radius, &join_key(prefix, "borderRadius"))?);
    out.extend(to_css_variables(&skin.icons, &join_key(prefix, "icons"))?);
    out.extend(to_css_variables(&skin.components, &join_key(prefix, "components"))?);
    Ok(out)
}

pub fn design_tokens_to_css_variables(tokens: &DesignTokens, prefix: &str) -> Result<VariableMap> {
    to_css_variables(tokens, prefix)
}

pub fn accessibility_tokens_to_css_variables(
    tokens: &AccessibilityTokens,
    prefix: &str,
) -> Result<VariableMap> {
    to_css_variables(tokens, prefix)
}

pub fn component_tokens_to_css_variables(tokens: &ComponentTokens, prefix: &str) -> Result<VariableMap> {
    to_css_variables(tokens, prefix)
}

/// Extension colors for one mode and extension shadows.
pub fn extension_to_css_variables(ext: &SkinExtension, is_dark: bool, prefix: &str) -> VariableMap {
    let mut out = VariableMap::new();
    for (name, value) in ext.colors_for(is_dark) {
        out.insert(join_key(prefix, &name), value);
    }
    let shadows = join_key(prefix, "shadow");
    for (name, value) in &ext.shadows {
        out.insert(join_key(&shadows, name), value.clone());
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builtin;
    use crate::tokens::{accessibility_tokens, component_tokens, design_tokens};
    use serde_json::json;

    #[test]
    fn kebab_conversion() {
        assert_eq!(camel_to_kebab("textSecondary"), "text-secondary");
        assert_eq!(camel_to_kebab("buttonPrimaryBg"), "button-primary-bg");
        assert_eq!(camel_to_kebab("2xl"), "2xl");
        assert_eq!(camel_to_kebab("primary"), "primary");
    }

    #[test]
    fn slack_primary_variable() {
        let skin = builtin::skin("slack").unwrap();
        let vars = skin_to_css_variables(&skin, false, SKIN_PREFIX).unwrap();
        assert_eq!(vars["--skin-primary"], "#611F69");
        assert_eq!(vars["--skin-text-secondary"], skin.colors.text_secondary);
        assert_eq!(vars["--skin-typography-font-size-base"], "15px");
        assert_eq!(vars["--skin-typography-line-height"], "1.46668");
        assert_eq!(vars["--skin-components-message-layout"], "compact");
        assert_eq!(vars["--skin-border-radius-lg"], skin.border_radius.lg);
    }

    #[test]
    fn dark_palette_replaces_light() {
        let skin = builtin::skin("slack").unwrap();
        let vars = skin_to_css_variables(&skin, true, SKIN_PREFIX).unwrap();
        assert_eq!(vars["--skin-primary"], "#C695CE");
    }

    #[test]
    fn generic_flattening_rules() {
        let v = json!({
            "fontSize": 14,
            "enabled": true,
            "missing": null,
            "states": ["online", "away"],
            "nested": { "innerKey": "x" }
        });
        let vars = to_css_variables(&v, "--p").unwrap();
        assert_eq!(vars.len(), 4);
        assert_eq!(vars["--p-font-size"], "14");
        assert_eq!(vars["--p-enabled"], "true");
        assert_eq!(vars["--p-states"], "online, away");
        assert_eq!(vars["--p-nested-inner-key"], "x");
        assert!(!vars.contains_key("--p-missing"));
    }

    #[test]
    fn empty_prefix_has_no_leading_dash() {
        let vars = to_css_variables(&json!({ "aB": 1 }), "").unwrap();
        assert_eq!(vars["a-b"], "1");
    }

    #[test]
    fn design_variables() {
        let skin = builtin::skin("slack").unwrap();
        let vars = design_tokens_to_css_variables(&design_tokens(&skin, false), DESIGN_PREFIX).unwrap();
        assert_eq!(vars["--dt-type-scale-base-font-size"], "15px");
        assert_eq!(vars["--dt-type-scale-base-line-height"], "1.46668");
        assert_eq!(vars["--dt-spacing-4"], "16px");
        assert_eq!(vars["--dt-colors-primary-hover"], "#611F690F");
        assert_eq!(vars["--dt-z-index-modal"], "1400");
        assert_eq!(vars["--dt-type-scale-2xl-font-size"], "26px");
    }

    #[test]
    fn accessibility_and_component_variables() {
        let skin = builtin::skin("whatsapp").unwrap();
        let behavior = builtin::behavior("whatsapp").unwrap();
        let a11y =
            accessibility_tokens_to_css_variables(&accessibility_tokens(&skin, false), ACCESSIBILITY_PREFIX)
                .unwrap();
        assert_eq!(a11y["--a11y-touch-targets-minimum"], "44px");
        assert_eq!(a11y["--a11y-contrast-text-on-background-aa"], "true");

        let cmp = component_tokens_to_css_variables(&component_tokens(&skin, &behavior, false), COMPONENT_PREFIX)
            .unwrap();
        assert_eq!(cmp["--cmp-avatar-radius"], "9999px");
        assert_eq!(cmp["--cmp-message-bubble-threading"], "reply");
        assert_eq!(cmp["--cmp-composer-max-length"], "65536");
    }

    #[test]
    fn extension_variables_follow_mode() {
        let ext = builtin::skin_extension("whatsapp").unwrap();
        let light = extension_to_css_variables(&ext, false, EXTENSION_PREFIX);
        let dark = extension_to_css_variables(&ext, true, EXTENSION_PREFIX);
        assert_eq!(light["--ext-bubble-outgoing"], "#D9FDD3");
        assert_eq!(dark["--ext-bubble-outgoing"], "#005C4B");
        assert_eq!(dark["--ext-checkmark-read"], "#53BDEB");
        assert!(light.contains_key("--ext-shadow-bubble"));
    }

    #[test]
    fn custom_prefix_is_verbatim() {
        let skin = builtin::skin("discord").unwrap();
        let vars = colors_to_css_variables(&skin.colors, "--my");
        assert_eq!(vars.len(), 17);
        assert_eq!(vars["--my-primary"], "#5865F2");
    }
}
