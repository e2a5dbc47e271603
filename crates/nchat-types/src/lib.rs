//! Foundation types for the nchat skin engine.
//!
//! This crate holds the pieces every other nchat crate leans on: color
//! parsing and WCAG contrast math, the generic deep-merge used to apply
//! partial overrides, runtime configuration, and the shared error type.

pub mod color;
pub mod config;
pub mod error;
pub mod merge;
