//! Accessibility tokens: focus rings, high-contrast overrides, touch
//! targets, screen-reader helpers and a precomputed contrast report.

use serde::Serialize;

use nchat_types::color::{WcagLevel, contrast_ratio, meets_contrast_requirement};

use crate::skin::{SkinColorPalette, VisualSkin};

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AccessibilityTokens {
    pub focus_rings: FocusRings,
    pub high_contrast: HighContrast,
    pub touch_targets: TouchTargets,
    pub sr_only: ScreenReaderStyle,
    pub sr_only_focusable: ScreenReaderStyle,
    pub contrast: ContrastReport,
}

/// Derive accessibility tokens for a skin in one mode.
pub fn accessibility_tokens(skin: &VisualSkin, is_dark: bool) -> AccessibilityTokens {
    let palette = skin.palette(is_dark);
    AccessibilityTokens {
        focus_rings: focus_rings(palette, is_dark),
        high_contrast: high_contrast(palette, is_dark),
        touch_targets: touch_targets(),
        sr_only: sr_only(),
        sr_only_focusable: sr_only_focusable(),
        contrast: contrast_report(palette),
    }
}

// ---------------------------------------------------------------------------
// Focus rings
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FocusRing {
    pub outline_width: String,
    pub outline_style: String,
    pub outline_offset: String,
    pub outline_color: String,
    pub box_shadow: String,
}

impl FocusRing {
    /// A double ring: `inner` px of the background, then the ring color
    /// out to twice that width.
    fn double(color: &str, background: &str, width: u32, offset: i32, inset: bool) -> Self {
        let prefix = if inset { "inset " } else { "" };
        Self {
            outline_width: format!("{width}px"),
            outline_style: "solid".to_string(),
            outline_offset: format!("{offset}px"),
            outline_color: color.to_string(),
            box_shadow: format!(
                "{prefix}0 0 0 {width}px {background}, {prefix}0 0 0 {}px {color}",
                width * 2
            ),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FocusRings {
    pub default: FocusRing,
    pub inset: FocusRing,
    pub error: FocusRing,
    pub high_contrast: FocusRing,
}

pub fn focus_rings(p: &SkinColorPalette, is_dark: bool) -> FocusRings {
    let hc = if is_dark { "#FFFFFF" } else { "#000000" };
    FocusRings {
        default: FocusRing::double(&p.primary, &p.background, 2, 2, false),
        inset: FocusRing::double(&p.primary, &p.background, 2, -2, true),
        error: FocusRing::double(&p.error, &p.background, 2, 2, false),
        high_contrast: FocusRing::double(hc, &p.background, 3, 2, false),
    }
}

// ---------------------------------------------------------------------------
// High contrast
// ---------------------------------------------------------------------------

/// Overrides for a forced high-contrast mode. Link and button colors keep
/// the skin's identity; surfaces and text go to pure black and white.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HighContrast {
    pub background: String,
    pub text: String,
    pub border: String,
    pub border_width: String,
    pub link: String,
    pub link_decoration: String,
    pub button_primary_bg: String,
    pub button_primary_text: String,
}

pub fn high_contrast(p: &SkinColorPalette, is_dark: bool) -> HighContrast {
    let (bg, fg) = if is_dark {
        ("#000000", "#FFFFFF")
    } else {
        ("#FFFFFF", "#000000")
    };
    HighContrast {
        background: bg.to_string(),
        text: fg.to_string(),
        border: fg.to_string(),
        border_width: "2px".to_string(),
        link: p.primary.clone(),
        link_decoration: "underline".to_string(),
        button_primary_bg: p.button_primary_bg.clone(),
        button_primary_text: p.button_primary_text.clone(),
    }
}

// ---------------------------------------------------------------------------
// Touch targets and screen-reader helpers
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TouchTargets {
    pub minimum: String,
    pub recommended: String,
    pub mobile: String,
    pub spacing: String,
    pub compact: String,
}

pub fn touch_targets() -> TouchTargets {
    TouchTargets {
        minimum: "44px".into(),
        recommended: "48px".into(),
        mobile: "48px".into(),
        spacing: "8px".into(),
        compact: "32px".into(),
    }
}

/// Style that hides content visually while keeping it in the
/// accessibility tree.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScreenReaderStyle {
    pub position: String,
    pub width: String,
    pub height: String,
    pub padding: String,
    pub margin: String,
    pub overflow: String,
    pub clip: String,
    pub white_space: String,
    pub border_width: String,
}

pub fn sr_only() -> ScreenReaderStyle {
    ScreenReaderStyle {
        position: "absolute".into(),
        width: "1px".into(),
        height: "1px".into(),
        padding: "0".into(),
        margin: "-1px".into(),
        overflow: "hidden".into(),
        clip: "rect(0, 0, 0, 0)".into(),
        white_space: "nowrap".into(),
        border_width: "0".into(),
    }
}

/// Undo [`sr_only`] once the element receives focus.
pub fn sr_only_focusable() -> ScreenReaderStyle {
    ScreenReaderStyle {
        position: "static".into(),
        width: "auto".into(),
        height: "auto".into(),
        padding: "0".into(),
        margin: "0".into(),
        overflow: "visible".into(),
        clip: "auto".into(),
        white_space: "normal".into(),
        border_width: "0".into(),
    }
}

// ---------------------------------------------------------------------------
// Contrast report
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ContrastCheck {
    pub foreground: String,
    pub background: String,
    /// Rounded to two decimals. Unparseable colors report `1`.
    pub ratio: f64,
    pub aa: bool,
    pub aa_large: bool,
    pub aaa: bool,
}

impl ContrastCheck {
    pub fn new(foreground: &str, background: &str) -> Self {
        Self {
            foreground: foreground.to_string(),
            background: background.to_string(),
            ratio: contrast_ratio(foreground, background).unwrap_or(1.0),
            aa: meets_contrast_requirement(foreground, background, WcagLevel::Aa, false),
            aa_large: meets_contrast_requirement(foreground, background, WcagLevel::Aa, true),
            aaa: meets_contrast_requirement(foreground, background, WcagLevel::Aaa, false),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ContrastReport {
    pub text_on_background: ContrastCheck,
    pub text_on_surface: ContrastCheck,
    pub primary_on_background: ContrastCheck,
    pub button_primary: ContrastCheck,
}

impl ContrastReport {
    /// Checks as `(camelCaseName, check)` pairs.
    pub fn checks(&self) -> [(&'static str, &ContrastCheck); 4] {
        [
            ("textOnBackground", &self.text_on_background),
            ("textOnSurface", &self.text_on_surface),
            ("primaryOnBackground", &self.primary_on_background),
            ("buttonPrimary", &self.button_primary),
        ]
    }
}

pub fn contrast_report(p: &SkinColorPalette) -> ContrastReport {
    ContrastReport {
        text_on_background: ContrastCheck::new(&p.text, &p.background),
        text_on_surface: ContrastCheck::new(&p.text, &p.surface),
        primary_on_background: ContrastCheck::new(&p.primary, &p.background),
        button_primary: ContrastCheck::new(&p.button_primary_text, &p.button_primary_bg),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builtin;

    #[test]
    fn default_ring_is_double() {
        let skin = builtin::skin("slack").unwrap();
        let rings = focus_rings(&skin.colors, false);
        assert_eq!(rings.default.outline_color, "#611F69");
        assert_eq!(rings.default.box_shadow, "0 0 0 2px #FFFFFF, 0 0 0 4px #611F69");
        assert!(rings.inset.box_shadow.starts_with("inset "));
        assert_eq!(rings.inset.outline_offset, "-2px");
        assert_eq!(rings.error.outline_color, skin.colors.error);
        assert_eq!(rings.high_contrast.outline_width, "3px");
    }

    #[test]
    fn high_contrast_inverts_in_dark_mode() {
        let skin = builtin::skin("telegram").unwrap();
        let light = high_contrast(&skin.colors, false);
        let dark = high_contrast(&skin.dark_mode.colors, true);
        assert_eq!(light.background, "#FFFFFF");
        assert_eq!(light.text, "#000000");
        assert_eq!(dark.background, "#000000");
        assert_eq!(dark.text, "#FFFFFF");
        assert_eq!(dark.link, skin.dark_mode.colors.primary);
        assert_eq!(light.link_decoration, "underline");
    }

    #[test]
    fn touch_target_sizes() {
        let t = touch_targets();
        assert_eq!(t.minimum, "44px");
        assert_eq!(t.recommended, "48px");
        assert_eq!(t.compact, "32px");
    }

    #[test]
    fn sr_only_reverses() {
        assert_eq!(sr_only().position, "absolute");
        assert_eq!(sr_only_focusable().position, "static");
        assert_eq!(sr_only_focusable().overflow, "visible");
    }

    #[test]
    fn contrast_report_black_on_white() {
        let skin = builtin::skin("telegram").unwrap();
        let report = contrast_report(&skin.colors);
        assert_eq!(report.text_on_background.ratio, 21.0);
        assert!(report.text_on_background.aaa);
    }

    #[test]
    fn unparseable_colors_fail_every_level() {
        let c = ContrastCheck::new("nope", "#FFFFFF");
        assert_eq!(c.ratio, 1.0);
        assert!(!c.aa && !c.aa_large && !c.aaa);
    }
}
