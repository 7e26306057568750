//! Foundation module - Core utilities and types
//!
//! - Math types and the perspective projection
//! - Frame pacing
//! - Logging setup

pub mod logging;
pub mod math;
pub mod time;
