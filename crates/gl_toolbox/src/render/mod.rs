//! # Rendering
//!
//! Fixed-function pipeline configuration on top of a [`GraphicsContext`].
//!
//! ## Layout
//!
//! - **types**: typed OpenGL enums (capabilities, hints, light parameters, ...)
//! - **backend**: the [`GraphicsContext`] trait every backend implements
//! - **backends**: a live OpenGL backend and a headless recording one
//! - **configuration** / **lighting**: declarative value types with defaults
//! - **configurator**: [`GraphicsConfigurator`], which applies them
//! - **window**: GLFW window with a compatibility OpenGL context

pub mod backend;
pub mod backends;
pub mod configuration;
pub mod configurator;
pub mod lighting;
pub mod types;
pub mod window;

pub use backend::GraphicsContext;
pub use backends::{FixedFunctionGl, GlCall, HeadlessContext, PipelineState};
pub use configuration::RenderConfiguration;
pub use configurator::{DriverInfo, GraphicsConfigurator, ViewportParams};
pub use lighting::LightParameters;
pub use types::{
    BlendFactor, Capability, ClearMask, ColorControl, DepthFunc, Face, HintMode, HintTarget,
    LightModel, LightParam, LightUnit, MatrixMode, PolygonMode, ShadeModel, StringName,
};
pub use window::{GlWindow, WindowError, WindowOptions};

use thiserror::Error;

/// Rendering errors
#[derive(Error, Debug)]
pub enum RenderError {
    /// A light operation was given no (or an out-of-range) light unit
    ///
    /// The operation is skipped; nothing reaches the context.
    #[error("Light cannot be None")]
    InvalidLight,

    /// A backend could not be brought up
    ///
    /// Raised when the driver lacks an entry point, typically because the
    /// context is a core profile without the fixed-function pipeline.
    #[error("Renderer initialization failed: {0}")]
    InitializationFailed(String),
}

/// Result type for rendering operations
pub type RenderResult<T> = Result<T, RenderError>;
