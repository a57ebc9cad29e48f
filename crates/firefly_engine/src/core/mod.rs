//! Core engine module
//!
//! Shared abstractions the rest of the framework depends on. Currently this
//! is the configuration system; foundation utilities are re-exported for
//! convenience.

pub mod config;

pub use crate::foundation;

pub use config::{AppSettings, ConfigError, EngineConfig, LogSettings};
