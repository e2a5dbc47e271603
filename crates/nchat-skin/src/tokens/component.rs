//! Per-component token bundles.
//!
//! Each bundle is an independent projection of a skin (and, where the
//! component shows or hides affordances, a behavior preset).

use serde::Serialize;

use nchat_types::color::with_alpha_hex;

use crate::behavior::{BadgeStyle, BehaviorPreset, ChannelHierarchy, ThreadingModel};
use crate::skin::{
    AvatarShape, ButtonStyle, HeaderStyle, InputStyle, MessageLayout, SidebarStyle, VisualSkin,
};
use crate::tokens::design::{shadow_scale, z_index_scale};

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ComponentTokens {
    pub message_bubble: MessageBubbleTokens,
    pub sidebar: SidebarTokens,
    pub header: HeaderTokens,
    pub composer: ComposerTokens,
    pub modal: ModalTokens,
    pub tooltip: TooltipTokens,
    pub dropdown: DropdownTokens,
    pub avatar: AvatarTokens,
    pub badge: BadgeTokens,
    pub button: ButtonTokens,
    pub input: InputTokens,
}

/// Derive every component bundle for a skin/behavior pair.
pub fn component_tokens(skin: &VisualSkin, behavior: &BehaviorPreset, is_dark: bool) -> ComponentTokens {
    ComponentTokens {
        message_bubble: message_bubble(skin, behavior, is_dark),
        sidebar: sidebar(skin, behavior, is_dark),
        header: header(skin, behavior, is_dark),
        composer: composer(skin, behavior, is_dark),
        modal: modal(skin, is_dark),
        tooltip: tooltip(skin, is_dark),
        dropdown: dropdown(skin, is_dark),
        avatar: avatar(skin, behavior, is_dark),
        badge: badge(skin, behavior, is_dark),
        button: button(skin, is_dark),
        input: input(skin, is_dark),
    }
}

// ---------------------------------------------------------------------------
// Conversation
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MessageBubbleTokens {
    pub layout: MessageLayout,
    pub padding: String,
    pub gap: String,
    pub radius: String,
    pub outgoing_bg: String,
    pub outgoing_text: String,
    pub incoming_bg: String,
    pub incoming_text: String,
    pub timestamp_color: String,
    pub show_read_receipts: bool,
    /// Edit window in ms (0 = unlimited). Consumers hide the edit action
    /// once a message is older than this.
    pub edit_window: u64,
    pub show_reactions: bool,
    pub max_reactions: u32,
    pub threading: ThreadingModel,
}

pub fn message_bubble(skin: &VisualSkin, behavior: &BehaviorPreset, is_dark: bool) -> MessageBubbleTokens {
    let p = skin.palette(is_dark);
    let m = &behavior.messaging;
    // Row layouts have no bubble fill; outgoing rows read like incoming ones.
    let (outgoing_bg, outgoing_text) = match skin.components.message_layout {
        MessageLayout::Bubbles => (p.button_primary_bg.clone(), p.button_primary_text.clone()),
        MessageLayout::Compact | MessageLayout::Cozy => ("transparent".to_string(), p.text.clone()),
    };
    let incoming_bg = match skin.components.message_layout {
        MessageLayout::Bubbles => p.surface.clone(),
        MessageLayout::Compact | MessageLayout::Cozy => "transparent".to_string(),
    };
    MessageBubbleTokens {
        layout: skin.components.message_layout,
        padding: skin.spacing.message_padding.clone(),
        gap: skin.spacing.message_gap.clone(),
        radius: skin.border_radius.lg.clone(),
        outgoing_bg,
        outgoing_text,
        incoming_bg,
        incoming_text: p.text.clone(),
        timestamp_color: p.muted.clone(),
        show_read_receipts: m.read_receipts,
        edit_window: m.edit_window,
        show_reactions: m.reactions,
        max_reactions: m.max_reactions_per_message,
        threading: m.threading_model,
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ComposerTokens {
    pub style: InputStyle,
    pub height: String,
    pub background: String,
    pub border: String,
    pub placeholder: String,
    /// 0 = unlimited.
    pub max_length: u32,
    pub show_attach_button: bool,
    pub show_voice_button: bool,
    pub show_emoji_button: bool,
    pub show_gif_button: bool,
    pub show_schedule_button: bool,
    pub markdown: bool,
}

pub fn composer(skin: &VisualSkin, behavior: &BehaviorPreset, is_dark: bool) -> ComposerTokens {
    let p = skin.palette(is_dark);
    let f = &behavior.features;
    ComposerTokens {
        style: skin.components.input_style,
        height: skin.spacing.input_height.clone(),
        background: input_background(skin.components.input_style, &p.surface),
        border: p.border.clone(),
        placeholder: p.muted.clone(),
        max_length: behavior.messaging.max_message_length,
        show_attach_button: f.file_sharing,
        show_voice_button: behavior.messaging.voice_messages,
        show_emoji_button: behavior.messaging.reactions || f.stickers,
        show_gif_button: f.gifs,
        show_schedule_button: behavior.messaging.scheduled_messages,
        markdown: f.markdown,
    }
}

// ---------------------------------------------------------------------------
// Chrome
// ---------------------------------------------------------------------------

const COLLAPSED_SIDEBAR_WIDTH: &str = "72px";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SidebarTokens {
    pub style: SidebarStyle,
    pub width: String,
    pub collapsed_width: String,
    pub background: String,
    pub text: String,
    pub active_bg: String,
    pub hierarchy: ChannelHierarchy,
}

pub fn sidebar(skin: &VisualSkin, behavior: &BehaviorPreset, is_dark: bool) -> SidebarTokens {
    let p = skin.palette(is_dark);
    SidebarTokens {
        style: skin.components.sidebar_style,
        width: skin.spacing.sidebar_width.clone(),
        collapsed_width: COLLAPSED_SIDEBAR_WIDTH.to_string(),
        background: p.surface.clone(),
        text: p.text_secondary.clone(),
        active_bg: with_alpha_hex(&p.primary, 0.12),
        hierarchy: behavior.channels.hierarchy,
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HeaderTokens {
    pub style: HeaderStyle,
    pub height: String,
    pub background: String,
    pub backdrop_filter: String,
    pub border_bottom: String,
    pub show_voice_call: bool,
    pub show_video_call: bool,
}

pub fn header(skin: &VisualSkin, behavior: &BehaviorPreset, is_dark: bool) -> HeaderTokens {
    let p = skin.palette(is_dark);
    let (background, backdrop_filter) = match skin.components.header_style {
        HeaderStyle::Solid => (p.background.clone(), "none".to_string()),
        HeaderStyle::Transparent => ("transparent".to_string(), "none".to_string()),
        HeaderStyle::Blurred => (with_alpha_hex(&p.background, 0.8), "blur(12px)".to_string()),
    };
    HeaderTokens {
        style: skin.components.header_style,
        height: skin.spacing.header_height.clone(),
        background,
        backdrop_filter,
        border_bottom: format!("1px solid {}", p.border),
        show_voice_call: behavior.calls.voice_calls,
        show_video_call: behavior.calls.video_calls,
    }
}

// ---------------------------------------------------------------------------
// Overlays
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ModalTokens {
    pub background: String,
    pub overlay: String,
    pub radius: String,
    pub shadow: String,
    pub z_index: i32,
}

pub fn modal(skin: &VisualSkin, is_dark: bool) -> ModalTokens {
    let p = skin.palette(is_dark);
    let overlay_alpha = if is_dark { 0.7 } else { 0.5 };
    ModalTokens {
        background: p.background.clone(),
        overlay: with_alpha_hex("#000000", overlay_alpha),
        radius: skin.border_radius.xl.clone(),
        shadow: shadow_scale(is_dark).xl,
        z_index: z_index_scale().modal,
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TooltipTokens {
    pub background: String,
    pub text: String,
    pub radius: String,
    pub font_size: String,
    pub z_index: i32,
}

/// Tooltips invert the palette.
pub fn tooltip(skin: &VisualSkin, is_dark: bool) -> TooltipTokens {
    let p = skin.palette(is_dark);
    TooltipTokens {
        background: p.text.clone(),
        text: p.background.clone(),
        radius: skin.border_radius.sm.clone(),
        font_size: skin.typography.font_size_sm.clone(),
        z_index: z_index_scale().tooltip,
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DropdownTokens {
    pub background: String,
    pub border: String,
    pub radius: String,
    pub shadow: String,
    pub item_hover: String,
    pub z_index: i32,
}

pub fn dropdown(skin: &VisualSkin, is_dark: bool) -> DropdownTokens {
    let p = skin.palette(is_dark);
    DropdownTokens {
        background: p.background.clone(),
        border: p.border.clone(),
        radius: skin.border_radius.md.clone(),
        shadow: shadow_scale(is_dark).lg,
        item_hover: with_alpha_hex(&p.primary, 0.06),
        z_index: z_index_scale().dropdown,
    }
}

// ---------------------------------------------------------------------------
// Identity
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AvatarTokens {
    pub shape: AvatarShape,
    pub radius: String,
    pub size_sm: String,
    pub size_md: String,
    pub size_lg: String,
    pub show_presence: bool,
    pub presence_online: String,
    pub presence_away: String,
    pub presence_busy: String,
    pub presence_offline: String,
}

pub fn avatar(skin: &VisualSkin, behavior: &BehaviorPreset, is_dark: bool) -> AvatarTokens {
    let p = skin.palette(is_dark);
    let r = &skin.border_radius;
    let radius = match skin.components.avatar_shape {
        AvatarShape::Circle => r.full.clone(),
        AvatarShape::Rounded => r.md.clone(),
        AvatarShape::Square => r.none.clone(),
    };
    AvatarTokens {
        shape: skin.components.avatar_shape,
        radius,
        size_sm: skin.spacing.avatar_size_sm.clone(),
        size_md: skin.spacing.avatar_size_md.clone(),
        size_lg: skin.spacing.avatar_size_lg.clone(),
        show_presence: behavior.presence.show_online_status,
        presence_online: p.success.clone(),
        presence_away: p.warning.clone(),
        presence_busy: p.error.clone(),
        presence_offline: p.muted.clone(),
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BadgeTokens {
    pub style: BadgeStyle,
    pub background: String,
    pub text: String,
    pub radius: String,
    pub dot_size: String,
    pub min_width: String,
}

pub fn badge(skin: &VisualSkin, behavior: &BehaviorPreset, is_dark: bool) -> BadgeTokens {
    let p = skin.palette(is_dark);
    BadgeTokens {
        style: behavior.notifications.badge_style,
        background: p.error.clone(),
        text: "#FFFFFF".to_string(),
        radius: skin.border_radius.full.clone(),
        dot_size: "8px".to_string(),
        min_width: "18px".to_string(),
    }
}

// ---------------------------------------------------------------------------
// Controls
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ButtonTokens {
    pub variant: ButtonStyle,
    pub primary_bg: String,
    pub primary_text: String,
    pub primary_border: String,
    pub secondary_bg: String,
    pub secondary_text: String,
    pub hover_bg: String,
    pub radius: String,
    pub min_height: String,
}

pub fn button(skin: &VisualSkin, is_dark: bool) -> ButtonTokens {
    let p = skin.palette(is_dark);
    let (primary_bg, primary_text, primary_border) = match skin.components.button_style {
        ButtonStyle::Filled => (
            p.button_primary_bg.clone(),
            p.button_primary_text.clone(),
            p.button_primary_bg.clone(),
        ),
        ButtonStyle::Outline => (
            "transparent".to_string(),
            p.button_primary_bg.clone(),
            p.button_primary_bg.clone(),
        ),
        ButtonStyle::Ghost => (
            "transparent".to_string(),
            p.button_primary_bg.clone(),
            "transparent".to_string(),
        ),
    };
    ButtonTokens {
        variant: skin.components.button_style,
        primary_bg,
        primary_text,
        primary_border,
        secondary_bg: p.button_secondary_bg.clone(),
        secondary_text: p.button_secondary_text.clone(),
        hover_bg: with_alpha_hex(&p.button_primary_bg, 0.08),
        radius: skin.border_radius.md.clone(),
        min_height: "36px".to_string(),
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InputTokens {
    pub style: InputStyle,
    pub height: String,
    pub background: String,
    pub border: String,
    pub border_bottom: String,
    pub focus_border: String,
    pub placeholder: String,
    pub radius: String,
}

fn input_background(style: InputStyle, surface: &str) -> String {
    match style {
        InputStyle::Filled => surface.to_string(),
        InputStyle::Outline | InputStyle::Underline => "transparent".to_string(),
    }
}

pub fn input(skin: &VisualSkin, is_dark: bool) -> InputTokens {
    let p = skin.palette(is_dark);
    let style = skin.components.input_style;
    let line = format!("1px solid {}", p.border);
    let (border, border_bottom, radius) = match style {
        InputStyle::Filled => ("none".to_string(), "none".to_string(), skin.border_radius.md.clone()),
        InputStyle::Outline => (line.clone(), line, skin.border_radius.md.clone()),
        InputStyle::Underline => ("none".to_string(), line, skin.border_radius.none.clone()),
    };
    InputTokens {
        style,
        height: skin.spacing.input_height.clone(),
        background: input_background(style, &p.surface),
        border,
        border_bottom,
        focus_border: p.primary.clone(),
        placeholder: p.muted.clone(),
        radius,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builtin;

    #[test]
    fn avatar_radius_follows_shape() {
        let behavior = builtin::behavior("nchat").unwrap();
        let mut skin = builtin::skin("whatsapp").unwrap();
        assert_eq!(avatar(&skin, &behavior, false).radius, skin.border_radius.full);

        skin.components.avatar_shape = AvatarShape::Rounded;
        assert_eq!(avatar(&skin, &behavior, false).radius, skin.border_radius.md);

        skin.components.avatar_shape = AvatarShape::Square;
        assert_eq!(avatar(&skin, &behavior, false).radius, "0px");
    }

    #[test]
    fn bubble_uses_spacing_and_large_radius() {
        let skin = builtin::skin("telegram").unwrap();
        let behavior = builtin::behavior("telegram").unwrap();
        let b = message_bubble(&skin, &behavior, false);
        assert_eq!(b.padding, skin.spacing.message_padding);
        assert_eq!(b.radius, skin.border_radius.lg);
        assert_eq!(b.layout, MessageLayout::Bubbles);
        assert_eq!(b.outgoing_bg, skin.colors.button_primary_bg);
    }

    #[test]
    fn behavior_drives_affordances() {
        let skin = builtin::skin("nchat").unwrap();
        let discord = builtin::behavior("discord").unwrap();
        let signal = builtin::behavior("signal").unwrap();

        let t = component_tokens(&skin, &discord, false);
        assert!(!t.message_bubble.show_read_receipts);
        assert_eq!(t.composer.max_length, 2000);
        assert_eq!(t.sidebar.hierarchy, ChannelHierarchy::Categories);

        let whatsapp = builtin::behavior("whatsapp").unwrap();
        assert_eq!(component_tokens(&skin, &whatsapp, false).message_bubble.edit_window, 900_000);
        let slack = builtin::behavior("slack").unwrap();
        assert_eq!(component_tokens(&skin, &slack, false).message_bubble.edit_window, 0);

        let t = component_tokens(&skin, &signal, false);
        assert!(t.message_bubble.show_read_receipts);
        assert!(!t.avatar.show_presence);
        assert!(!t.composer.markdown);
    }

    #[test]
    fn sidebar_width_comes_from_skin() {
        let skin = builtin::skin("slack").unwrap();
        let behavior = builtin::behavior("slack").unwrap();
        assert_eq!(sidebar(&skin, &behavior, true).width, skin.spacing.sidebar_width);
    }

    #[test]
    fn blurred_header_is_translucent() {
        let skin = builtin::skin("nchat").unwrap();
        let behavior = builtin::behavior("nchat").unwrap();
        let h = header(&skin, &behavior, false);
        assert_eq!(h.background, "#FFFFFFCC");
        assert_eq!(h.backdrop_filter, "blur(12px)");
    }

    #[test]
    fn outline_button_is_transparent() {
        let mut skin = builtin::skin("discord").unwrap();
        skin.components.button_style = ButtonStyle::Outline;
        let b = button(&skin, false);
        assert_eq!(b.primary_bg, "transparent");
        assert_eq!(b.primary_border, skin.colors.button_primary_bg);
    }

    #[test]
    fn underline_input_has_bottom_border_only() {
        let mut skin = builtin::skin("signal").unwrap();
        skin.components.input_style = InputStyle::Underline;
        let i = input(&skin, false);
        assert_eq!(i.border, "none");
        assert!(i.border_bottom.starts_with("1px solid"));
        assert_eq!(i.radius, skin.border_radius.none);
    }
}
