//! # gl_toolbox
//!
//! Convenience layer over the OpenGL fixed-function pipeline.
//!
//! A [`GraphicsConfigurator`](render::GraphicsConfigurator) takes a declarative
//! [`RenderConfiguration`](render::RenderConfiguration) and issues the matching
//! `glEnable`/`glHint`/... calls, configures light units from
//! [`LightParameters`](render::LightParameters), and rebuilds the viewport and
//! projection on resize.
//!
//! ## Quick Start
//!
//! ```rust
//! use gl_toolbox::prelude::*;
//!
//! let mut gfx = GraphicsConfigurator::new(HeadlessContext::new());
//! gfx.apply_configuration(&RenderConfiguration::default().with_lighting(1));
//! gfx.reshape(800, 600);
//! gfx.apply_light(Some(LightUnit::Light0), &LightParameters::default())
//!     .expect("Light0 is a valid unit");
//! assert!(gfx.is_lighting_enabled());
//! ```
//!
//! Swap [`HeadlessContext`](render::HeadlessContext) for
//! [`FixedFunctionGl`](render::FixedFunctionGl) (loaded from a
//! [`GlWindow`](render::GlWindow)) to drive a real driver.

pub mod config;
pub mod foundation;
pub mod render;

/// Common imports
pub mod prelude {
    pub use crate::{
        config::{Config, ConfigError, ConfigFormat},
        foundation::time::FrameClock,
        render::{
            Capability, FixedFunctionGl, GlWindow, GraphicsConfigurator, GraphicsContext,
            HeadlessContext, LightParameters, LightUnit, RenderConfiguration, RenderError,
            ViewportParams, WindowOptions,
        },
    };
}
