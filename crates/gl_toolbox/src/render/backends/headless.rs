//! Headless graphics context
//!
//! Records every call in order and mirrors the fixed-function state those calls
//! would leave behind in a driver. No GPU or window is needed, which makes it
//! the backend for tests and for dry-running a configuration.

use std::collections::{HashMap, HashSet};

use log::trace;

use crate::foundation::math::{perspective_matrix, Mat4, Rgba};
use crate::render::backend::GraphicsContext;
use crate::render::types::{
    BlendFactor, Capability, ClearMask, ColorControl, DepthFunc, Face, HintMode, HintTarget,
    LightModel, LightParam, LightUnit, MatrixMode, PolygonMode, ShadeModel, StringName,
};
use crate::render::DriverInfo;

/// One recorded pipeline call
#[derive(Debug, Clone, PartialEq)]
pub enum GlCall {
    /// `glClearColor`
    ClearColor(Rgba),
    /// `glClearDepth`
    ClearDepth(f64),
    /// `glEnable`
    Enable(Capability),
    /// `glDisable`
    Disable(Capability),
    /// `glBlendFunc`
    BlendFunc(BlendFactor, BlendFactor),
    /// `glDepthFunc`
    DepthFunc(DepthFunc),
    /// `glShadeModel`
    ShadeModel(ShadeModel),
    /// `glHint`
    Hint(HintTarget, HintMode),
    /// `glPolygonMode`
    PolygonMode(Face, PolygonMode),
    /// `glLightf[v]`
    Light(LightUnit, LightParam),
    /// `glLightModeli`
    LightModel(LightModel),
    /// `glClear`
    Clear(ClearMask),
    /// `glMatrixMode`
    MatrixMode(MatrixMode),
    /// `glLoadIdentity`
    LoadIdentity,
    /// `glViewport`
    Viewport(i32, i32, i32, i32),
    /// `gluPerspective`
    Perspective {
        /// Vertical field of view in degrees
        fov_y: f32,
        /// Width over height
        aspect: f32,
        /// Near clip plane
        near: f32,
        /// Far clip plane
        far: f32,
    },
    /// `glGetString`
    GetString(StringName),
}

/// Parameters of one light unit, initialized to the OpenGL defaults for
/// units other than `GL_LIGHT0`
#[derive(Debug, Clone, PartialEq)]
pub struct LightUnitState {
    /// Ambient intensity
    pub ambient: Rgba,
    /// Diffuse intensity
    pub diffuse: Rgba,
    /// Specular intensity
    pub specular: Rgba,
    /// Position
    pub position: [f32; 4],
    /// Spot direction
    pub spot_direction: [f32; 4],
    /// Spot exponent
    pub spot_exponent: f32,
    /// Spot cutoff
    pub spot_cutoff: f32,
    /// Constant attenuation
    pub constant_attenuation: f32,
    /// Linear attenuation
    pub linear_attenuation: f32,
    /// Quadratic attenuation
    pub quadratic_attenuation: f32,
}

impl Default for LightUnitState {
    fn default() -> Self {
        Self {
            ambient: [0.0, 0.0, 0.0, 1.0],
            diffuse: [0.0, 0.0, 0.0, 1.0],
            specular: [0.0, 0.0, 0.0, 1.0],
            position: [0.0, 0.0, 1.0, 0.0],
            spot_direction: [0.0, 0.0, -1.0, 0.0],
            spot_exponent: 0.0,
            spot_cutoff: 180.0,
            constant_attenuation: 1.0,
            linear_attenuation: 0.0,
            quadratic_attenuation: 0.0,
        }
    }
}

impl LightUnitState {
    fn apply(&mut self, param: LightParam) {
        match param {
            LightParam::Ambient(v) => self.ambient = v,
            LightParam::Diffuse(v) => self.diffuse = v,
            LightParam::Specular(v) => self.specular = v,
            LightParam::Position(v) => self.position = v,
            LightParam::SpotDirection(v) => self.spot_direction = v,
            LightParam::SpotExponent(v) => self.spot_exponent = v,
            LightParam::SpotCutoff(v) => self.spot_cutoff = v,
            LightParam::ConstantAttenuation(v) => self.constant_attenuation = v,
            LightParam::LinearAttenuation(v) => self.linear_attenuation = v,
            LightParam::QuadraticAttenuation(v) => self.quadratic_attenuation = v,
        }
    }
}

/// Fixed-function state as a driver would hold it after the recorded calls
#[derive(Debug, Clone)]
pub struct PipelineState {
    /// Clear color
    pub clear_color: Rgba,
    /// Clear depth
    pub clear_depth: f64,
    /// Enabled capabilities
    pub enabled: HashSet<Capability>,
    /// Blend function (source, destination)
    pub blend_func: (BlendFactor, BlendFactor),
    /// Depth comparison
    pub depth_func: DepthFunc,
    /// Shade model
    pub shade_model: ShadeModel,
    /// Hints that were set; unset targets are `DontCare`
    pub hints: HashMap<HintTarget, HintMode>,
    /// Front face polygon mode
    pub front_polygon_mode: PolygonMode,
    /// Back face polygon mode
    pub back_polygon_mode: PolygonMode,
    /// Per-unit light parameters
    pub lights: [LightUnitState; LightUnit::COUNT],
    /// Light model color control
    pub color_control: ColorControl,
    /// Selected matrix stack
    pub matrix_mode: MatrixMode,
    /// Top of the model-view stack
    pub model_view: Mat4,
    /// Top of the projection stack
    pub projection: Mat4,
    /// Viewport `(x, y, width, height)`
    pub viewport: (i32, i32, i32, i32),
}

impl Default for PipelineState {
    fn default() -> Self {
        let mut lights: [LightUnitState; LightUnit::COUNT] = Default::default();
        // GL_LIGHT0 starts out white
        lights[0].diffuse = [1.0, 1.0, 1.0, 1.0];
        lights[0].specular = [1.0, 1.0, 1.0, 1.0];

        Self {
            clear_color: [0.0, 0.0, 0.0, 0.0],
            clear_depth: 1.0,
            enabled: HashSet::new(),
            blend_func: (BlendFactor::One, BlendFactor::Zero),
            depth_func: DepthFunc::Less,
            shade_model: ShadeModel::Smooth,
            hints: HashMap::new(),
            front_polygon_mode: PolygonMode::Fill,
            back_polygon_mode: PolygonMode::Fill,
            lights,
            color_control: ColorControl::SingleColor,
            matrix_mode: MatrixMode::ModelView,
            model_view: Mat4::identity(),
            projection: Mat4::identity(),
            viewport: (0, 0, 0, 0),
        }
    }
}

impl PipelineState {
    /// Whether a capability is currently enabled
    pub fn is_enabled(&self, capability: Capability) -> bool {
        self.enabled.contains(&capability)
    }

    /// Current hint for a target
    pub fn hint(&self, target: HintTarget) -> HintMode {
        self.hints.get(&target).copied().unwrap_or(HintMode::DontCare)
    }

    /// Parameters of a light unit
    pub fn light(&self, unit: LightUnit) -> &LightUnitState {
        &self.lights[unit.index()]
    }

    fn current_matrix_mut(&mut self) -> &mut Mat4 {
        match self.matrix_mode {
            MatrixMode::ModelView => &mut self.model_view,
            MatrixMode::Projection => &mut self.projection,
        }
    }
}

/// Recording, state-mirroring graphics context
#[derive(Debug, Clone, Default)]
pub struct HeadlessContext {
    calls: Vec<GlCall>,
    state: PipelineState,
    info: DriverInfo,
}

impl HeadlessContext {
    /// Create a context in the OpenGL initial state
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a context that reports the given driver strings
    pub fn with_driver_info(info: DriverInfo) -> Self {
        Self {
            info,
            ..Self::default()
        }
    }

    /// Calls recorded so far, oldest first
    pub fn calls(&self) -> &[GlCall] {
        &self.calls
    }

    /// Drain the call log, keeping the mirrored state
    pub fn take_calls(&mut self) -> Vec<GlCall> {
        std::mem::take(&mut self.calls)
    }

    /// Number of recorded calls matching a predicate
    pub fn count_calls(&self, predicate: impl Fn(&GlCall) -> bool) -> usize {
        self.calls.iter().filter(|call| predicate(call)).count()
    }

    /// Mirrored pipeline state
    pub fn state(&self) -> &PipelineState {
        &self.state
    }

    fn record(&mut self, call: GlCall) {
        trace!("headless: {:?}", call);
        self.calls.push(call);
    }
}

impl GraphicsContext for HeadlessContext {
    fn clear_color(&mut self, color: Rgba) {
        self.record(GlCall::ClearColor(color));
        self.state.clear_color = color;
    }

    fn clear_depth(&mut self, depth: f64) {
        self.record(GlCall::ClearDepth(depth));
        self.state.clear_depth = depth;
    }

    fn enable(&mut self, capability: Capability) {
        self.record(GlCall::Enable(capability));
        self.state.enabled.insert(capability);
    }

    fn disable(&mut self, capability: Capability) {
        self.record(GlCall::Disable(capability));
        self.state.enabled.remove(&capability);
    }

    fn blend_func(&mut self, source: BlendFactor, destination: BlendFactor) {
        self.record(GlCall::BlendFunc(source, destination));
        self.state.blend_func = (source, destination);
    }

    fn depth_func(&mut self, func: DepthFunc) {
        self.record(GlCall::DepthFunc(func));
        self.state.depth_func = func;
    }

    fn shade_model(&mut self, model: ShadeModel) {
        self.record(GlCall::ShadeModel(model));
        self.state.shade_model = model;
    }

    fn hint(&mut self, target: HintTarget, mode: HintMode) {
        self.record(GlCall::Hint(target, mode));
        self.state.hints.insert(target, mode);
    }

    fn polygon_mode(&mut self, face: Face, mode: PolygonMode) {
        self.record(GlCall::PolygonMode(face, mode));
        match face {
            Face::Front => self.state.front_polygon_mode = mode,
            Face::Back => self.state.back_polygon_mode = mode,
            Face::FrontAndBack => {
                self.state.front_polygon_mode = mode;
                self.state.back_polygon_mode = mode;
            }
        }
    }

    fn light(&mut self, unit: LightUnit, param: LightParam) {
        self.record(GlCall::Light(unit, param));
        self.state.lights[unit.index()].apply(param);
    }

    fn light_model(&mut self, model: LightModel) {
        self.record(GlCall::LightModel(model));
        match model {
            LightModel::ColorControl(control) => self.state.color_control = control,
        }
    }

    fn clear(&mut self, mask: ClearMask) {
        self.record(GlCall::Clear(mask));
    }

    fn matrix_mode(&mut self, mode: MatrixMode) {
        self.record(GlCall::MatrixMode(mode));
        self.state.matrix_mode = mode;
    }

    fn load_identity(&mut self) {
        self.record(GlCall::LoadIdentity);
        *self.state.current_matrix_mut() = Mat4::identity();
    }

    fn viewport(&mut self, x: i32, y: i32, width: i32, height: i32) {
        self.record(GlCall::Viewport(x, y, width, height));
        self.state.viewport = (x, y, width, height);
    }

    fn perspective(&mut self, fov_y: f32, aspect: f32, near: f32, far: f32) {
        self.record(GlCall::Perspective { fov_y, aspect, near, far });
        if let Some(projection) = perspective_matrix(fov_y, aspect, near, far) {
            let current = self.state.current_matrix_mut();
            *current *= projection;
        }
    }

    fn get_string(&mut self, name: StringName) -> Option<String> {
        self.record(GlCall::GetString(name));
        self.info.get(name).map(str::to_owned)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_initial_state_matches_gl_defaults() {
        let ctx = HeadlessContext::new();
        let state = ctx.state();
        assert!(state.enabled.is_empty());
        assert_eq!(state.depth_func, DepthFunc::Less);
        assert_eq!(state.hint(HintTarget::PolygonSmooth), HintMode::DontCare);
        assert_eq!(state.light(LightUnit::Light0).diffuse, [1.0, 1.0, 1.0, 1.0]);
        assert_eq!(state.light(LightUnit::Light1).diffuse, [0.0, 0.0, 0.0, 1.0]);
        assert!(ctx.calls().is_empty());
    }

    #[test]
    fn test_enable_disable_round_trip() {
        let mut ctx = HeadlessContext::new();
        ctx.enable(Capability::Lighting);
        assert!(ctx.state().is_enabled(Capability::Lighting));
        ctx.disable(Capability::Lighting);
        assert!(!ctx.state().is_enabled(Capability::Lighting));
        assert_eq!(
            ctx.calls(),
            &[GlCall::Enable(Capability::Lighting), GlCall::Disable(Capability::Lighting)]
        );
    }

    #[test]
    fn test_load_identity_targets_current_matrix() {
        let mut ctx = HeadlessContext::new();
        ctx.matrix_mode(MatrixMode::Projection);
        ctx.perspective(60.0, 1.0, 1.0, 100.0);
        ctx.matrix_mode(MatrixMode::ModelView);
        ctx.load_identity();

        let expected = perspective_matrix(60.0, 1.0, 1.0, 100.0).unwrap();
        assert_relative_eq!(ctx.state().projection, expected);
        assert_relative_eq!(ctx.state().model_view, Mat4::identity());
    }

    #[test]
    fn test_perspective_multiplies_onto_current() {
        let mut ctx = HeadlessContext::new();
        ctx.matrix_mode(MatrixMode::Projection);
        ctx.perspective(60.0, 2.0, 1.0, 10.0);
        ctx.perspective(60.0, 2.0, 1.0, 10.0);

        let once = perspective_matrix(60.0, 2.0, 1.0, 10.0).unwrap();
        assert_relative_eq!(ctx.state().projection, once * once);
    }

    #[test]
    fn test_polygon_mode_per_face() {
        let mut ctx = HeadlessContext::new();
        ctx.polygon_mode(Face::Front, PolygonMode::Line);
        assert_eq!(ctx.state().front_polygon_mode, PolygonMode::Line);
        assert_eq!(ctx.state().back_polygon_mode, PolygonMode::Fill);
        ctx.polygon_mode(Face::FrontAndBack, PolygonMode::Point);
        assert_eq!(ctx.state().back_polygon_mode, PolygonMode::Point);
    }

    #[test]
    fn test_get_string_reports_configured_info() {
        let mut ctx = HeadlessContext::with_driver_info(DriverInfo {
            vendor: Some("Acme".to_string()),
            ..DriverInfo::default()
        });
        assert_eq!(ctx.get_string(StringName::Vendor).as_deref(), Some("Acme"));
        assert_eq!(ctx.get_string(StringName::Renderer), None);
        assert_eq!(ctx.take_calls().len(), 2);
        assert!(ctx.calls().is_empty());
    }
}
