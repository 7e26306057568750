//! Graphics context configurator
//!
//! [`GraphicsConfigurator`] wraps a [`GraphicsContext`] and turns the
//! declarative [`RenderConfiguration`] / [`LightParameters`] values into the
//! matching fixed-function calls. It also carries the lighting latch that the
//! render loop queries to decide whether unlit geometry needs lighting
//! suspended around it.
//!
//! The lighting latch goes from off to on the first time a configuration with
//! `lighting` is applied and is never cleared afterwards, even if lighting is
//! later switched off through the context directly.

use log::{debug, error, info, warn};

use crate::foundation::math::Vec4Array;
use crate::render::backend::GraphicsContext;
use crate::render::configuration::RenderConfiguration;
use crate::render::lighting::LightParameters;
use crate::render::types::{
    BlendFactor, Capability, ClearMask, ColorControl, DepthFunc, Face, HintMode, HintTarget,
    LightModel, LightParam, LightUnit, MatrixMode, PolygonMode, ShadeModel, StringName,
};
use crate::render::{RenderError, RenderResult};

/// Default vertical field of view in degrees
pub const DEFAULT_FIELD_OF_VIEW: f32 = 60.0;
/// Default near clip plane
pub const DEFAULT_NEAR_PLANE: f32 = 10.0;
/// Default far clip plane
pub const DEFAULT_FAR_PLANE: f32 = 10000.0;

/// Projection parameters for [`GraphicsConfigurator::reshape_viewport`]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewportParams {
    /// Vertical field of view in degrees
    pub field_of_view: f32,
    /// Near clip plane distance
    pub near_plane: f32,
    /// Far clip plane distance
    pub far_plane: f32,
}

impl Default for ViewportParams {
    fn default() -> Self {
        Self {
            field_of_view: DEFAULT_FIELD_OF_VIEW,
            near_plane: DEFAULT_NEAR_PLANE,
            far_plane: DEFAULT_FAR_PLANE,
        }
    }
}

/// Strings the driver reports about itself
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DriverInfo {
    /// `GL_VERSION`
    pub version: Option<String>,
    /// `GL_VENDOR`
    pub vendor: Option<String>,
    /// `GL_RENDERER`
    pub renderer: Option<String>,
    /// `GL_SHADING_LANGUAGE_VERSION`
    pub shading_language_version: Option<String>,
    /// `GL_EXTENSIONS`
    pub extensions: Option<String>,
}

impl DriverInfo {
    /// Query every string from a context
    pub fn query(ctx: &mut impl GraphicsContext) -> Self {
        Self {
            version: ctx.get_string(StringName::Version),
            vendor: ctx.get_string(StringName::Vendor),
            renderer: ctx.get_string(StringName::Renderer),
            shading_language_version: ctx.get_string(StringName::ShadingLanguageVersion),
            extensions: ctx.get_string(StringName::Extensions),
        }
    }

    /// Look up one string
    pub fn get(&self, name: StringName) -> Option<&str> {
        match name {
            StringName::Version => self.version.as_deref(),
            StringName::Vendor => self.vendor.as_deref(),
            StringName::Renderer => self.renderer.as_deref(),
            StringName::ShadingLanguageVersion => self.shading_language_version.as_deref(),
            StringName::Extensions => self.extensions.as_deref(),
        }
    }

    /// `(label, value)` pairs in report order
    pub fn report_lines(&self) -> [(&'static str, &str); 5] {
        fn show(value: &Option<String>) -> &str {
            value.as_deref().unwrap_or("<unavailable>")
        }
        [
            ("OpenGL version", show(&self.version)),
            ("GPU", show(&self.vendor)),
            ("Renderer", show(&self.renderer)),
            ("GLSL version", show(&self.shading_language_version)),
            ("Extensions", show(&self.extensions)),
        ]
    }
}

/// Applies pipeline configuration to a graphics context
///
/// Owns (or borrows, via `&mut C`) the context for as long as it is in use.
/// Single-threaded by construction: every operation needs `&mut self`.
#[derive(Debug)]
pub struct GraphicsConfigurator<C: GraphicsContext> {
    context: C,
    lighting_enabled: bool,
}

impl<C: GraphicsContext> GraphicsConfigurator<C> {
    /// Wrap a context; the lighting latch starts off
    pub fn new(context: C) -> Self {
        Self {
            context,
            lighting_enabled: false,
        }
    }

    /// The wrapped context
    pub fn context(&self) -> &C {
        &self.context
    }

    /// The wrapped context, for calls the configurator doesn't cover
    pub fn context_mut(&mut self) -> &mut C {
        &mut self.context
    }

    /// Give the context back
    pub fn into_inner(self) -> C {
        self.context
    }

    /// Whether a configuration with lighting has been applied
    pub fn is_lighting_enabled(&self) -> bool {
        self.lighting_enabled
    }

    /// Apply every feature requested by `config`
    ///
    /// One pipeline call per enabled feature, nothing for disabled ones. The
    /// clear color and depth are always set. No input is rejected; values are
    /// forwarded as they are.
    pub fn apply_configuration(&mut self, config: &RenderConfiguration) {
        let verbose = config.verbose;
        let log_gl = |message: &str| {
            if verbose {
                info!("[GL] {message}");
            }
        };

        log_gl("Init OPENGL");

        if config.version {
            let driver = DriverInfo::query(&mut self.context);
            for (label, value) in driver.report_lines() {
                info!("[GL-INFO] {label} {value}");
            }
        }

        log_gl(&format!("Clear color set: {:?}", config.background_color));
        self.context.clear_color(config.background_color);

        log_gl(&format!("Clear depth set: {}", config.background_depth));
        self.context.clear_depth(config.background_depth);

        if config.transparency {
            log_gl("Transparency enabled");
            self.context.enable(Capability::Blend);
            self.context.blend_func(BlendFactor::SrcAlpha, BlendFactor::OneMinusSrcAlpha);
        }

        if config.smooth {
            log_gl("Enable SMOOTH shade model");
            self.context.shade_model(ShadeModel::Smooth);
        }

        if config.depth {
            log_gl("Enable depth test");
            self.context.enable(Capability::DepthTest);
            self.context.depth_func(DepthFunc::LessOrEqual);
        }

        if config.antialiasing {
            log_gl("Antialiasing enabled");
            self.context.hint(HintTarget::PolygonSmooth, HintMode::Nicest);
        }

        if config.normalized {
            log_gl("Normalized normal enabled");
            self.context.enable(Capability::Normalize);
        }

        if config.surface_fill {
            log_gl("Enabled polygon offset fill");
            self.context.enable(Capability::PolygonOffsetFill);
        }

        if config.lighting {
            log_gl("Enable lighting");
            self.context.enable(Capability::Lighting);

            let requested = config.num_lights as usize;
            if requested > LightUnit::COUNT {
                warn!(
                    "Requested {} lights but only {} units exist; enabling {}",
                    requested,
                    LightUnit::COUNT,
                    LightUnit::COUNT
                );
            }
            for unit in LightUnit::ALL.iter().take(requested) {
                log_gl(&format!("Light {} enabled", unit.index()));
                self.context.enable(Capability::Light(*unit));
            }

            self.lighting_enabled = true;
        }

        if config.polygon_fill_mode {
            log_gl("Enabled polygon fill by both sides");
            self.context.polygon_mode(Face::FrontAndBack, PolygonMode::Fill);
        }

        if config.material_color {
            log_gl("Enabled color material");
            self.context.enable(Capability::ColorMaterial);
        }

        if config.perspective_correction {
            log_gl("Enabled perspective correction");
            self.context.hint(HintTarget::PerspectiveCorrection, HintMode::Nicest);
        }

        if config.textures {
            log_gl("Textures enabled");
            self.context.enable(Capability::Texture2D);
            self.context
                .light_model(LightModel::ColorControl(ColorControl::SeparateSpecularColor));
        }

        log_gl("OpenGL init finished");
    }

    /// Clear the color and depth buffers
    pub fn clear_buffers(&mut self) {
        self.context.clear(ClearMask::COLOR | ClearMask::DEPTH);
    }

    /// Reset the viewport and projection for a `width` x `height` surface
    ///
    /// A zero (or negative) height is treated as 1. The projection matrix is
    /// reset to identity before the perspective is applied, so repeated calls
    /// replace the projection rather than accumulate onto it. Leaves the
    /// model-view matrix selected and reset to identity.
    pub fn reshape_viewport(&mut self, width: i32, height: i32, params: ViewportParams) {
        let height = height.max(1);
        debug!(
            "Reshape viewport to {}x{} (fov {}, near {}, far {})",
            width, height, params.field_of_view, params.near_plane, params.far_plane
        );

        self.context.load_identity();
        self.context.viewport(0, 0, width, height);

        self.context.matrix_mode(MatrixMode::Projection);
        self.context.load_identity();
        self.context.perspective(
            params.field_of_view,
            width as f32 / height as f32,
            params.near_plane,
            params.far_plane,
        );

        self.context.matrix_mode(MatrixMode::ModelView);
        self.context.load_identity();
    }

    /// [`Self::reshape_viewport`] with the default projection parameters
    pub fn reshape(&mut self, width: i32, height: i32) {
        self.reshape_viewport(width, height, ViewportParams::default());
    }

    /// Write `params` to a light unit
    ///
    /// Does not enable lighting or the unit itself. A missing unit is reported
    /// with an error log and changes nothing; the returned error can be
    /// ignored.
    pub fn apply_light(&mut self, light: Option<LightUnit>, params: &LightParameters) -> RenderResult<()> {
        let Some(unit) = light else {
            error!("Light cannot be None");
            return Err(RenderError::InvalidLight);
        };

        debug!("Configuring {:?}", unit);
        for param in params.to_params() {
            self.context.light(unit, param);
        }
        Ok(())
    }

    /// Move a light unit
    pub fn set_light_position(&mut self, unit: LightUnit, position: Vec4Array) {
        self.context.light(unit, LightParam::Position(position));
    }

    /// Run `draw` with lighting switched off if the latch is on
    ///
    /// Lighting is re-enabled afterwards. With the latch off, `draw` runs as is.
    pub fn with_lighting_suspended<R>(&mut self, draw: impl FnOnce(&mut C) -> R) -> R {
        if self.lighting_enabled {
            self.context.disable(Capability::Lighting);
            let result = draw(&mut self.context);
            self.context.enable(Capability::Lighting);
            result
        } else {
            draw(&mut self.context)
        }
    }

    /// Query the driver's identification strings
    pub fn driver_info(&mut self) -> DriverInfo {
        DriverInfo::query(&mut self.context)
    }
}
