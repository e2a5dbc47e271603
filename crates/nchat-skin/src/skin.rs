//! Visual skin: the purely visual half of a platform identity.
//!
//! A skin carries a light palette, a dark palette, typography, spacing,
//! radii, icon style and component style choices. It has no behavioral
//! meaning; see [`crate::behavior`] for that axis.

use serde::{Deserialize, Serialize};

use nchat_types::error::{NchatError, Result};

/// A complete visual skin.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VisualSkin {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default = "default_version")]
    pub version: String,
    /// Light-mode palette.
    pub colors: SkinColorPalette,
    pub dark_mode: DarkModeOverride,
    pub typography: SkinTypography,
    pub spacing: SkinSpacing,
    pub border_radius: SkinBorderRadius,
    pub icons: SkinIconStyle,
    pub components: SkinComponentStyles,
}

fn default_version() -> String {
    "1.0.0".to_string()
}

impl VisualSkin {
    /// Parse a skin from TOML.
    pub fn from_toml(s: &str) -> Result<Self> {
        toml::from_str(s).map_err(|e| NchatError::Config(format!("skin.toml: {e}")))
    }

    /// The palette in effect for the given mode.
    pub fn palette(&self, is_dark: bool) -> &SkinColorPalette {
        if is_dark {
            &self.dark_mode.colors
        } else {
            &self.colors
        }
    }
}

/// The 17 semantic color slots every palette must define.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SkinColorPalette {
    pub primary: String,
    pub secondary: String,
    pub accent: String,
    pub background: String,
    pub surface: String,
    pub text: String,
    pub text_secondary: String,
    pub muted: String,
    pub border: String,
    pub success: String,
    pub warning: String,
    pub error: String,
    pub info: String,
    pub button_primary_bg: String,
    pub button_primary_text: String,
    pub button_secondary_bg: String,
    pub button_secondary_text: String,
}

impl SkinColorPalette {
    /// Every slot as `(camelCaseName, value)`, in declaration order.
    pub fn slots(&self) -> [(&'static str, &str); 17] {
        [
            ("primary", self.primary.as_str()),
            ("secondary", self.secondary.as_str()),
            ("accent", self.accent.as_str()),
            ("background", self.background.as_str()),
            ("surface", self.surface.as_str()),
            ("text", self.text.as_str()),
            ("textSecondary", self.text_secondary.as_str()),
            ("muted", self.muted.as_str()),
            ("border", self.border.as_str()),
            ("success", self.success.as_str()),
            ("warning", self.warning.as_str()),
            ("error", self.error.as_str()),
            ("info", self.info.as_str()),
            ("buttonPrimaryBg", self.button_primary_bg.as_str()),
            ("buttonPrimaryText", self.button_primary_text.as_str()),
            ("buttonSecondaryBg", self.button_secondary_bg.as_str()),
            ("buttonSecondaryText", self.button_secondary_text.as_str()),
        ]
    }
}

/// Dark-mode overrides. Currently only the palette differs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DarkModeOverride {
    pub colors: SkinColorPalette,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SkinTypography {
    pub font_family: String,
    pub font_family_mono: String,
    pub font_size_sm: String,
    pub font_size_base: String,
    pub font_size_lg: String,
    pub font_size_xl: String,
    pub font_weight_normal: u16,
    pub font_weight_medium: u16,
    pub font_weight_bold: u16,
    pub line_height: f64,
    pub letter_spacing: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SkinSpacing {
    pub message_padding: String,
    pub message_gap: String,
    pub sidebar_width: String,
    pub header_height: String,
    pub input_height: String,
    pub avatar_size_sm: String,
    pub avatar_size_md: String,
    pub avatar_size_lg: String,
}

impl SkinSpacing {
    pub fn slots(&self) -> [(&'static str, &str); 8] {
        [
            ("messagePadding", self.message_padding.as_str()),
            ("messageGap", self.message_gap.as_str()),
            ("sidebarWidth", self.sidebar_width.as_str()),
            ("headerHeight", self.header_height.as_str()),
            ("inputHeight", self.input_height.as_str()),
            ("avatarSizeSm", self.avatar_size_sm.as_str()),
            ("avatarSizeMd", self.avatar_size_md.as_str()),
            ("avatarSizeLg", self.avatar_size_lg.as_str()),
        ]
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SkinBorderRadius {
    pub none: String,
    pub sm: String,
    pub md: String,
    pub lg: String,
    pub xl: String,
    pub full: String,
}

impl SkinBorderRadius {
    pub fn slots(&self) -> [(&'static str, &str); 6] {
        [
            ("none", self.none.as_str()),
            ("sm", self.sm.as_str()),
            ("md", self.md.as_str()),
            ("lg", self.lg.as_str()),
            ("xl", self.xl.as_str()),
            ("full", self.full.as_str()),
        ]
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SkinIconStyle {
    pub style: IconVariant,
    pub set: String,
    pub stroke_width: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IconVariant {
    Outline,
    Filled,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SkinComponentStyles {
    pub message_layout: MessageLayout,
    pub avatar_shape: AvatarShape,
    pub button_style: ButtonStyle,
    pub input_style: InputStyle,
    pub sidebar_style: SidebarStyle,
    pub header_style: HeaderStyle,
    pub scrollbar_style: ScrollbarStyle,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageLayout {
    Bubbles,
    Compact,
    Cozy,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AvatarShape {
    Circle,
    Rounded,
    Square,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ButtonStyle {
    Filled,
    Outline,
    Ghost,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InputStyle {
    Filled,
    Outline,
    Underline,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SidebarStyle {
    Full,
    Compact,
    Icons,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HeaderStyle {
    Solid,
    Transparent,
    Blurred,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScrollbarStyle {
    Thin,
    Hidden,
    Overlay,
}

/// Parse a `"<n>px"` size into its numeric value.
///
/// Bare `"0"` is accepted. Negative values are rejected.
pub fn parse_px(s: &str) -> Option<f64> {
    if s == "0" {
        return Some(0.0);
    }
    let n: f64 = s.strip_suffix("px")?.parse().ok()?;
    (n.is_finite() && n >= 0.0).then_some(n)
}

/// Format a pixel value, dropping a zero fraction (`15.0` → `"15px"`).
pub fn format_px(n: f64) -> String {
    if n.fract() == 0.0 {
        format!("{}px", n as i64)
    } else {
        format!("{n}px")
    }
}
