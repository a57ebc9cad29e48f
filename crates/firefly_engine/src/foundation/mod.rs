//! Foundation module - shared low-level utilities
//!
//! This module provides the utilities the rest of the framework is built on:
//! - Math types and operations
//! - Frame timing and statistics
//! - Logging setup

pub mod logging;
pub mod math;
pub mod time;
