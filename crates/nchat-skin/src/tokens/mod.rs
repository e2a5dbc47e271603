//! Derived token sets.
//!
//! All derivers are pure: the same inputs always produce equal outputs and
//! nothing is cached.

pub mod accessibility;
pub mod component;
pub mod design;

pub use accessibility::{AccessibilityTokens, accessibility_tokens};
pub use component::{ComponentTokens, component_tokens};
pub use design::{DesignTokens, design_tokens};
