//! Design tokens: the flat scales a renderer consumes.
//!
//! Every builder here is a pure function. [`design_tokens`] composes them
//! for one skin and mode.

use std::collections::BTreeMap;

use serde::Serialize;

use nchat_types::color::with_alpha_hex;

use crate::skin::{SkinBorderRadius, SkinColorPalette, SkinTypography, VisualSkin, format_px, parse_px};

/// Everything derived from a skin for one mode.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DesignTokens {
    pub spacing: BTreeMap<String, String>,
    pub type_scale: TypeScale,
    pub type_aliases: TypeAliases,
    pub colors: ColorAliases,
    pub shadows: ShadowScale,
    pub transitions: Transitions,
    pub z_index: ZIndexScale,
    pub border_radius: SkinBorderRadius,
    pub fonts: FontGlobals,
}

/// Derive the full design token set for a skin.
pub fn design_tokens(skin: &VisualSkin, is_dark: bool) -> DesignTokens {
    let type_scale = type_scale(&skin.typography);
    DesignTokens {
        spacing: spacing_scale(),
        type_aliases: type_aliases(&type_scale, &skin.typography),
        type_scale,
        colors: color_aliases(skin.palette(is_dark)),
        shadows: shadow_scale(is_dark),
        transitions: transitions(),
        z_index: z_index_scale(),
        border_radius: skin.border_radius.clone(),
        fonts: FontGlobals::from(&skin.typography),
    }
}

// ---------------------------------------------------------------------------
// Spacing
// ---------------------------------------------------------------------------

const SPACING_STEPS: [u32; 20] = [1, 2, 3, 4, 5, 6, 8, 10, 12, 14, 16, 20, 24, 28, 32, 36, 40, 48, 56, 64];

/// The fixed 4px spacing scale: `0`, `px`, then `1` = 4px up to `64` = 256px.
pub fn spacing_scale() -> BTreeMap<String, String> {
    let mut scale = BTreeMap::new();
    scale.insert("0".to_string(), "0px".to_string());
    scale.insert("px".to_string(), "1px".to_string());
    for step in SPACING_STEPS {
        scale.insert(step.to_string(), format_px(f64::from(step * 4)));
    }
    scale
}

// ---------------------------------------------------------------------------
// Typography
// ---------------------------------------------------------------------------

/// Size, line height and tracking for one step of the type scale.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TypeStep {
    pub font_size: String,
    pub line_height: String,
    pub letter_spacing: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TypeScale {
    pub xs: TypeStep,
    pub sm: TypeStep,
    pub base: TypeStep,
    pub lg: TypeStep,
    pub xl: TypeStep,
    #[serde(rename = "2xl")]
    pub xl2: TypeStep,
    #[serde(rename = "3xl")]
    pub xl3: TypeStep,
    #[serde(rename = "4xl")]
    pub xl4: TypeStep,
    #[serde(rename = "5xl")]
    pub xl5: TypeStep,
}

const LINE_HEIGHT_STEP: f64 = 0.05;
const LINE_HEIGHT_FLOOR: f64 = 1.0;
const FALLBACK_BASE_PX: f64 = 16.0;

fn round3(x: f64) -> f64 {
    (x * 1000.0).round() / 1000.0
}

fn scaled_px(base: f64, factor: f64) -> String {
    format_px((base * factor).round())
}

/// Build the nine-step type scale from a skin's typography.
///
/// `sm`, `base`, `lg` and `xl` sizes come straight from the skin; the
/// outer steps are multiples of the base size. Line height shrinks by
/// 0.05 per step above base and grows below it; `base` keeps the skin's
/// exact value.
pub fn type_scale(t: &SkinTypography) -> TypeScale {
    let base_px = parse_px(&t.font_size_base).unwrap_or(FALLBACK_BASE_PX);
    let step = |font_size: String, offset: i32, letter_spacing: &str| {
        let line_height = if offset == 0 {
            t.line_height
        } else {
            round3((t.line_height - LINE_HEIGHT_STEP * f64::from(offset)).max(LINE_HEIGHT_FLOOR))
        };
        TypeStep {
            font_size,
            line_height: line_height.to_string(),
            letter_spacing: letter_spacing.to_string(),
        }
    };
    TypeScale {
        xs: step(scaled_px(base_px, 0.786), -2, "0.01em"),
        sm: step(t.font_size_sm.clone(), -1, "0.005em"),
        base: step(t.font_size_base.clone(), 0, &t.letter_spacing),
        lg: step(t.font_size_lg.clone(), 1, "-0.005em"),
        xl: step(t.font_size_xl.clone(), 2, "-0.01em"),
        xl2: step(scaled_px(base_px, 1.714), 3, "-0.015em"),
        xl3: step(scaled_px(base_px, 2.143), 4, "-0.02em"),
        xl4: step(scaled_px(base_px, 2.571), 5, "-0.025em"),
        xl5: step(scaled_px(base_px, 3.429), 6, "-0.03em"),
    }
}

/// A type step paired with a weight.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TextStyle {
    pub font_size: String,
    pub line_height: String,
    pub letter_spacing: String,
    pub font_weight: u16,
}

impl TextStyle {
    fn new(step: &TypeStep, font_weight: u16) -> Self {
        Self {
            font_size: step.font_size.clone(),
            line_height: step.line_height.clone(),
            letter_spacing: step.letter_spacing.clone(),
            font_weight,
        }
    }
}

/// Semantic names over the type scale.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TypeAliases {
    pub caption: TextStyle,
    pub body: TextStyle,
    pub body_large: TextStyle,
    pub heading_sm: TextStyle,
    pub heading_md: TextStyle,
    pub heading_lg: TextStyle,
    pub heading_xl: TextStyle,
    pub display: TextStyle,
}

pub fn type_aliases(scale: &TypeScale, t: &SkinTypography) -> TypeAliases {
    let normal = t.font_weight_normal;
    let bold = t.font_weight_bold;
    TypeAliases {
        caption: TextStyle::new(&scale.xs, normal),
        body: TextStyle::new(&scale.base, normal),
        body_large: TextStyle::new(&scale.lg, normal),
        heading_sm: TextStyle::new(&scale.xl, bold),
        heading_md: TextStyle::new(&scale.xl2, bold),
        heading_lg: TextStyle::new(&scale.xl3, bold),
        heading_xl: TextStyle::new(&scale.xl4, bold),
        display: TextStyle::new(&scale.xl5, bold),
    }
}

/// Font families and weights, passed through from the skin.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FontGlobals {
    pub family: String,
    pub family_mono: String,
    pub weight_normal: u16,
    pub weight_medium: u16,
    pub weight_bold: u16,
}

impl From<&SkinTypography> for FontGlobals {
    fn from(t: &SkinTypography) -> Self {
        Self {
            family: t.font_family.clone(),
            family_mono: t.font_family_mono.clone(),
            weight_normal: t.font_weight_normal,
            weight_medium: t.font_weight_medium,
            weight_bold: t.font_weight_bold,
        }
    }
}

// ---------------------------------------------------------------------------
// Color aliases
// ---------------------------------------------------------------------------

/// 29 semantic color names over one palette.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ColorAliases {
    pub primary: String,
    pub primary_hover: String,
    pub primary_focus: String,
    pub primary_active: String,
    pub primary_selected: String,
    pub secondary: String,
    pub accent: String,
    pub text_primary: String,
    pub text_secondary: String,
    pub text_muted: String,
    pub text_inverse: String,
    pub text_link: String,
    pub text_on_primary: String,
    pub bg_primary: String,
    pub bg_secondary: String,
    pub bg_hover: String,
    pub bg_active: String,
    pub bg_overlay: String,
    pub border_default: String,
    pub border_strong: String,
    pub border_focus: String,
    pub success: String,
    pub warning: String,
    pub error: String,
    pub info: String,
    pub button_primary_bg: String,
    pub button_primary_text: String,
    pub button_secondary_bg: String,
    pub button_secondary_text: String,
}

pub fn color_aliases(p: &SkinColorPalette) -> ColorAliases {
    ColorAliases {
        primary: p.primary.clone(),
        primary_hover: with_alpha_hex(&p.primary, 0.06),
        primary_focus: with_alpha_hex(&p.primary, 0.08),
        primary_active: with_alpha_hex(&p.primary, 0.10),
        primary_selected: with_alpha_hex(&p.primary, 0.12),
        secondary: p.secondary.clone(),
        accent: p.accent.clone(),
        text_primary: p.text.clone(),
        text_secondary: p.text_secondary.clone(),
        text_muted: p.muted.clone(),
        text_inverse: p.background.clone(),
        text_link: p.primary.clone(),
        text_on_primary: p.button_primary_text.clone(),
        bg_primary: p.background.clone(),
        bg_secondary: p.surface.clone(),
        bg_hover: with_alpha_hex(&p.text, 0.05),
        bg_active: with_alpha_hex(&p.text, 0.08),
        bg_overlay: with_alpha_hex("#000000", 0.5),
        border_default: p.border.clone(),
        border_strong: p.muted.clone(),
        border_focus: p.primary.clone(),
        success: p.success.clone(),
        warning: p.warning.clone(),
        error: p.error.clone(),
        info: p.info.clone(),
        button_primary_bg: p.button_primary_bg.clone(),
        button_primary_text: p.button_primary_text.clone(),
        button_secondary_bg: p.button_secondary_bg.clone(),
        button_secondary_text: p.button_secondary_text.clone(),
    }
}

// ---------------------------------------------------------------------------
// Shadows
// ---------------------------------------------------------------------------

/// A single box-shadow layer. Color is always black; only opacity varies.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ShadowLayer {
    pub offset_y: f64,
    pub blur: f64,
    pub spread: f64,
    pub alpha: f64,
}

impl ShadowLayer {
    const fn new(offset_y: f64, blur: f64, spread: f64, alpha: f64) -> Self {
        Self {
            offset_y,
            blur,
            spread,
            alpha,
        }
    }

    fn to_css(self, alpha_scale: f64) -> String {
        let alpha = round3((self.alpha * alpha_scale).min(1.0));
        format!(
            "0 {} {} {} rgba(0, 0, 0, {alpha})",
            length(self.offset_y),
            length(self.blur),
            length(self.spread)
        )
    }
}

fn length(n: f64) -> String {
    if n == 0.0 { "0".to_string() } else { format_px(n) }
}

const SHADOW_XS: &[ShadowLayer] = &[ShadowLayer::new(1.0, 2.0, 0.0, 0.05)];
const SHADOW_SM: &[ShadowLayer] = &[
    ShadowLayer::new(1.0, 3.0, 0.0, 0.1),
    ShadowLayer::new(1.0, 2.0, -1.0, 0.1),
];
const SHADOW_MD: &[ShadowLayer] = &[
    ShadowLayer::new(4.0, 6.0, -1.0, 0.1),
    ShadowLayer::new(2.0, 4.0, -2.0, 0.1),
];
const SHADOW_LG: &[ShadowLayer] = &[
    ShadowLayer::new(10.0, 15.0, -3.0, 0.1),
    ShadowLayer::new(4.0, 6.0, -4.0, 0.1),
];
const SHADOW_XL: &[ShadowLayer] = &[
    ShadowLayer::new(20.0, 25.0, -5.0, 0.1),
    ShadowLayer::new(8.0, 10.0, -6.0, 0.1),
];

/// Dark surfaces need much stronger shadows to read at all.
const DARK_SHADOW_SCALE: f64 = 4.0;

fn shadow_css(layers: &[ShadowLayer], alpha_scale: f64) -> String {
    layers
        .iter()
        .map(|l| l.to_css(alpha_scale))
        .collect::<Vec<_>>()
        .join(", ")
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ShadowScale {
    pub none: String,
    pub xs: String,
    pub sm: String,
    pub md: String,
    pub lg: String,
    pub xl: String,
}

/// Elevation shadows. Dark mode multiplies every opacity by 4, capped at 1.
pub fn shadow_scale(is_dark: bool) -> ShadowScale {
    let k = if is_dark { DARK_SHADOW_SCALE } else { 1.0 };
    ShadowScale {
        none: "none".to_string(),
        xs: shadow_css(SHADOW_XS, k),
        sm: shadow_css(SHADOW_SM, k),
        md: shadow_css(SHADOW_MD, k),
        lg: shadow_css(SHADOW_LG, k),
        xl: shadow_css(SHADOW_XL, k),
    }
}

// ---------------------------------------------------------------------------
// Motion and layering
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Durations {
    pub instant: String,
    pub fast: String,
    pub normal: String,
    pub slow: String,
    pub slower: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Easings {
    pub linear: String,
    pub ease_in: String,
    pub ease_out: String,
    pub ease_in_out: String,
    pub spring: String,
    pub bounce: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Transitions {
    pub duration: Durations,
    pub easing: Easings,
}

pub fn transitions() -> Transitions {
    Transitions {
        duration: Durations {
            instant: "0ms".into(),
            fast: "100ms".into(),
            normal: "200ms".into(),
            slow: "300ms".into(),
            slower: "500ms".into(),
        },
        easing: Easings {
            linear: "linear".into(),
            ease_in: "cubic-bezier(0.4, 0, 1, 1)".into(),
            ease_out: "cubic-bezier(0, 0, 0.2, 1)".into(),
            ease_in_out: "cubic-bezier(0.4, 0, 0.2, 1)".into(),
            spring: "cubic-bezier(0.175, 0.885, 0.32, 1.275)".into(),
            bounce: "cubic-bezier(0.68, -0.55, 0.265, 1.55)".into(),
        },
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ZIndexScale {
    pub hide: i32,
    pub base: i32,
    pub docked: i32,
    pub dropdown: i32,
    pub sticky: i32,
    pub banner: i32,
    pub overlay: i32,
    pub modal: i32,
    pub popover: i32,
    pub toast: i32,
    pub tooltip: i32,
}

pub const fn z_index_scale() -> ZIndexScale {
    ZIndexScale {
        hide: -1,
        base: 0,
        docked: 10,
        dropdown: 1000,
        sticky: 1100,
        banner: 1200,
        overlay: 1300,
        modal: 1400,
        popover: 1500,
        toast: 1700,
        tooltip: 1800,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builtin;

    #[test]
    fn spacing_has_22_stops() {
        let s = spacing_scale();
        assert_eq!(s.len(), 22);
        assert_eq!(s["0"], "0px");
        assert_eq!(s["px"], "1px");
        assert_eq!(s["1"], "4px");
        assert_eq!(s["4"], "16px");
        assert_eq!(s["64"], "256px");
    }

    #[test]
    fn type_scale_keeps_base_exact() {
        let skin = builtin::skin("slack").unwrap();
        let scale = type_scale(&skin.typography);
        assert_eq!(scale.base.font_size, "15px");
        assert_eq!(scale.base.line_height, "1.46668");
        assert_eq!(scale.sm.font_size, skin.typography.font_size_sm);
        assert_eq!(scale.xl.font_size, skin.typography.font_size_xl);
    }

    #[test]
    fn type_scale_outer_steps() {
        let skin = builtin::skin("slack").unwrap();
        let scale = type_scale(&skin.typography);
        // 15 * 0.786 = 11.79, 15 * 2.571 = 38.565
        assert_eq!(scale.xs.font_size, "12px");
        assert_eq!(scale.xl2.font_size, "26px");
        assert_eq!(scale.xl4.font_size, "39px");
        assert_eq!(scale.xl5.font_size, "51px");
        assert_eq!(scale.lg.line_height, "1.417");
        assert_eq!(scale.xs.line_height, "1.567");
        assert_eq!(scale.xl5.letter_spacing, "-0.03em");
    }

    #[test]
    fn line_height_never_drops_below_one() {
        let mut skin = builtin::skin("telegram").unwrap();
        skin.typography.line_height = 1.1;
        let scale = type_scale(&skin.typography);
        assert_eq!(scale.xl5.line_height, "1");
        assert_eq!(scale.xl.line_height, "1");
        assert_eq!(scale.lg.line_height, "1.05");
    }

    #[test]
    fn headings_are_bold() {
        let skin = builtin::skin("discord").unwrap();
        let scale = type_scale(&skin.typography);
        let aliases = type_aliases(&scale, &skin.typography);
        assert_eq!(aliases.heading_md.font_weight, 700);
        assert_eq!(aliases.heading_md.font_size, scale.xl2.font_size);
        assert_eq!(aliases.body.font_weight, 400);
        assert_eq!(aliases.caption.font_size, scale.xs.font_size);
    }

    #[test]
    fn interaction_aliases_append_alpha() {
        let skin = builtin::skin("slack").unwrap();
        let c = color_aliases(&skin.colors);
        assert_eq!(c.primary_hover, "#611F690F");
        assert_eq!(c.primary_focus, "#611F6914");
        assert_eq!(c.primary_active, "#611F691A");
        assert_eq!(c.primary_selected, "#611F691F");
        assert_eq!(c.text_primary, skin.colors.text);
    }

    #[test]
    fn dark_shadows_are_stronger() {
        let light = shadow_scale(false);
        let dark = shadow_scale(true);
        assert_eq!(light.none, "none");
        assert_eq!(light.xs, "0 1px 2px 0 rgba(0, 0, 0, 0.05)");
        assert_eq!(dark.xs, "0 1px 2px 0 rgba(0, 0, 0, 0.2)");
        assert_eq!(dark.md, "0 4px 6px -1px rgba(0, 0, 0, 0.4), 0 2px 4px -2px rgba(0, 0, 0, 0.4)");
    }

    #[test]
    fn z_index_ordering() {
        let z = z_index_scale();
        assert!(z.hide < z.base);
        assert!(z.dropdown < z.modal);
        assert!(z.modal < z.toast);
        assert_eq!(z.tooltip, 1800);
    }

    #[test]
    fn derivation_is_pure() {
        let skin = builtin::skin("whatsapp").unwrap();
        assert_eq!(design_tokens(&skin, true), design_tokens(&skin, true));
        assert_ne!(design_tokens(&skin, true).colors, design_tokens(&skin, false).colors);
    }

    mod proptests {
        use super::*;
        use proptest::prelude::*;

        fn typography(base_px: u32, line_height: f64) -> SkinTypography {
            let mut t = builtin::skin("nchat").unwrap().typography;
            t.font_size_base = format!("{base_px}px");
            t.line_height = line_height;
            t
        }

        proptest! {
            #[test]
            fn outer_steps_never_drop_below_floor(base in 10u32..32, lh in 0.5f64..3.0) {
                let scale = type_scale(&typography(base, lh));
                for step in [&scale.xs, &scale.sm, &scale.lg, &scale.xl, &scale.xl2, &scale.xl5] {
                    let v: f64 = step.line_height.parse().unwrap();
                    prop_assert!(v >= LINE_HEIGHT_FLOOR, "line height {v} below floor");
                }
            }

            #[test]
            fn derived_sizes_grow_with_base(base in 10u32..32, lh in 1.0f64..2.0) {
                let scale = type_scale(&typography(base, lh));
                let px = |s: &str| s.trim_end_matches("px").parse::<f64>().unwrap();
                prop_assert!(px(&scale.xs.font_size) <= f64::from(base));
                prop_assert!(px(&scale.xl2.font_size) < px(&scale.xl3.font_size));
                prop_assert!(px(&scale.xl4.font_size) < px(&scale.xl5.font_size));
            }
        }
    }
}
