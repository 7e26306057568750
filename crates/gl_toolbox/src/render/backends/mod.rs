//! Graphics context implementations
//!
//! - [`FixedFunctionGl`]: forwards to a live compatibility-profile OpenGL context
//! - [`HeadlessContext`]: records calls and mirrors the resulting state

pub mod headless;
pub mod opengl;

pub use headless::{GlCall, HeadlessContext, LightUnitState, PipelineState};
pub use opengl::FixedFunctionGl;
