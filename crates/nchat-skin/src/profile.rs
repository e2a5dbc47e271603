//! Composite profiles: a named pairing of one skin and one behavior preset.

use serde::{Deserialize, Serialize};

use nchat_types::error::{NchatError, Result};

/// A full platform identity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompositeProfile {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub skin_id: String,
    pub behavior_id: String,
}

impl CompositeProfile {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        skin_id: impl Into<String>,
        behavior_id: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            description: String::new(),
            skin_id: skin_id.into(),
            behavior_id: behavior_id.into(),
        }
    }

    /// Parse a profile from TOML.
    pub fn from_toml(s: &str) -> Result<Self> {
        toml::from_str(s).map_err(|e| NchatError::Config(format!("profile.toml: {e}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_profile_toml() {
        let p = CompositeProfile::from_toml(
            r#"
id = "slack-ish"
name = "Slack look, WhatsApp rules"
skinId = "slack"
behaviorId = "whatsapp"
"#,
        )
        .unwrap();
        assert_eq!(p.skin_id, "slack");
        assert_eq!(p.behavior_id, "whatsapp");
        assert!(p.description.is_empty());
    }

    #[test]
    fn new_sets_ids() {
        let p = CompositeProfile::new("x", "X", "discord", "signal");
        assert_eq!(p.id, "x");
        assert_eq!(p.skin_id, "discord");
        assert_eq!(p.behavior_id, "signal");
    }
}
