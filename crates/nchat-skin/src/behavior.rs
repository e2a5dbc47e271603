//! Behavior preset: the purely behavioral half of a platform identity.
//!
//! Numeric windows and limits use `0` for "unlimited". Durations are in
//! milliseconds.

use serde::{Deserialize, Serialize};

use nchat_types::error::{NchatError, Result};

/// A complete behavior preset.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BehaviorPreset {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default = "default_version")]
    pub version: String,
    pub messaging: MessagingBehavior,
    pub channels: ChannelBehavior,
    pub presence: PresenceBehavior,
    pub calls: CallBehavior,
    pub notifications: NotificationBehavior,
    pub moderation: ModerationBehavior,
    pub privacy: PrivacyBehavior,
    pub features: FeatureFlags,
}

fn default_version() -> String {
    "1.0.0".to_string()
}

impl BehaviorPreset {
    /// Parse a behavior preset from TOML.
    pub fn from_toml(s: &str) -> Result<Self> {
        toml::from_str(s).map_err(|e| NchatError::Config(format!("behavior.toml: {e}")))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MessagingBehavior {
    /// How long after sending a message may be edited (ms, 0 = unlimited).
    pub edit_window: u64,
    /// How long after sending a message may be deleted (ms, 0 = unlimited).
    pub delete_window: u64,
    pub delete_for_everyone: bool,
    /// Maximum characters per message (0 = unlimited).
    pub max_message_length: u32,
    pub reactions: bool,
    /// 0 = unlimited.
    pub max_reactions_per_message: u32,
    pub threading_model: ThreadingModel,
    pub read_receipts: bool,
    pub typing_indicators: bool,
    pub forwarding: bool,
    pub pinning: bool,
    /// 0 = unlimited.
    pub max_pinned_messages: u32,
    pub scheduled_messages: bool,
    pub voice_messages: bool,
    pub disappearing_messages: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThreadingModel {
    /// No threading at all.
    None,
    /// Inline quoted replies.
    Reply,
    /// Side-panel threads.
    Thread,
    /// Forum-style topics.
    Topic,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChannelBehavior {
    pub direct_messages: bool,
    pub group_chats: bool,
    pub public_channels: bool,
    pub private_channels: bool,
    pub broadcast_channels: bool,
    /// 0 = unlimited.
    pub max_group_size: u32,
    pub hierarchy: ChannelHierarchy,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChannelHierarchy {
    Flat,
    Folders,
    Categories,
    Workspaces,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PresenceBehavior {
    pub show_online_status: bool,
    pub show_last_seen: bool,
    pub custom_status: bool,
    /// Selectable presence states.
    pub states: Vec<PresenceState>,
    /// Inactivity before switching to away (ms, 0 = never).
    pub idle_timeout: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PresenceState {
    Online,
    Away,
    Busy,
    Invisible,
    Offline,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CallBehavior {
    pub voice_calls: bool,
    pub video_calls: bool,
    pub group_calls: bool,
    /// 0 = unlimited.
    pub max_participants: u32,
    pub screen_sharing: bool,
    pub recording: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NotificationBehavior {
    pub default_level: NotificationLevel,
    pub mention_everyone: bool,
    pub keyword_alerts: bool,
    pub do_not_disturb: bool,
    pub badge_style: BadgeStyle,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NotificationLevel {
    All,
    Mentions,
    None,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BadgeStyle {
    Count,
    Dot,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ModerationBehavior {
    pub roles: bool,
    pub slow_mode: bool,
    /// Longest selectable slow-mode interval (ms, 0 = unlimited).
    pub max_slow_mode_interval: u64,
    pub automod: bool,
    pub report_messages: bool,
    pub ban_users: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PrivacyBehavior {
    pub end_to_end_encryption: EncryptionMode,
    pub phone_number_required: bool,
    pub username_discovery: bool,
    pub screenshot_protection: bool,
    pub link_previews: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EncryptionMode {
    Always,
    Optional,
    None,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeatureFlags {
    pub file_sharing: bool,
    /// 0 = unlimited.
    pub max_file_size_mb: u32,
    pub stickers: bool,
    pub gifs: bool,
    pub bots: bool,
    pub polls: bool,
    pub stories: bool,
    pub markdown: bool,
    pub code_blocks: bool,
    pub search: bool,
}
