//! Error types for nchat.

use std::fmt;
use std::io;

/// The kind of catalog record an error refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordKind {
    Skin,
    Behavior,
    Profile,
    SkinExtension,
    BehaviorExtension,
}

impl fmt::Display for RecordKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Skin => "skin",
            Self::Behavior => "behavior",
            Self::Profile => "profile",
            Self::SkinExtension => "skin extension",
            Self::BehaviorExtension => "behavior extension",
        };
        f.write_str(s)
    }
}

/// A single id that failed to resolve.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MissingId {
    pub kind: RecordKind,
    pub id: String,
}

impl MissingId {
    pub fn new(kind: RecordKind, id: impl Into<String>) -> Self {
        Self {
            kind,
            id: id.into(),
        }
    }
}

impl fmt::Display for MissingId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} '{}'", self.kind, self.id)
    }
}

/// Errors produced by the nchat skin engine.
#[derive(Debug, thiserror::Error)]
pub enum NchatError {
    #[error("not found: {}", join(.missing, ", "))]
    NotFound { missing: Vec<MissingId> },

    #[error("invalid {kind} '{id}': {}", .errors.join("; "))]
    Validation {
        kind: RecordKind,
        id: String,
        errors: Vec<String>,
    },

    #[error("override error: {0}")]
    Override(String),

    #[error("config error: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl NchatError {
    /// Shorthand for a single missing id.
    pub fn not_found(kind: RecordKind, id: impl Into<String>) -> Self {
        Self::NotFound {
            missing: vec![MissingId::new(kind, id)],
        }
    }
}

fn join(items: &[MissingId], sep: &str) -> String {
    items
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(sep)
}

/// Convenience alias.
pub type Result<T> = std::result::Result<T, NchatError>;
