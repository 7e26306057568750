//! Compatibility-profile OpenGL backend
//!
//! Loads the legacy fixed-function entry points through a proc-address loader
//! (for example `glfw::Window::get_proc_address`) and forwards every
//! [`GraphicsContext`] call straight to the driver. GLU is not linked; the
//! perspective matrix is built with nalgebra and multiplied on with
//! `glMultMatrixf`.

use std::ffi::{c_void, CStr};

use log::debug;

use crate::foundation::math::{perspective_matrix, to_column_major, Rgba};
use crate::render::backend::GraphicsContext;
use crate::render::types::{
    BlendFactor, Capability, ClearMask, DepthFunc, Face, GLenum, HintMode, HintTarget, LightModel,
    LightParam, LightUnit, MatrixMode, PolygonMode, ShadeModel, StringName,
};
use crate::render::{RenderError, RenderResult};

type ClearColorFn = unsafe extern "system" fn(f32, f32, f32, f32);
type ClearDepthFn = unsafe extern "system" fn(f64);
type CapFn = unsafe extern "system" fn(GLenum);
type BlendFuncFn = unsafe extern "system" fn(GLenum, GLenum);
type EnumFn = unsafe extern "system" fn(GLenum);
type HintFn = unsafe extern "system" fn(GLenum, GLenum);
type PolygonModeFn = unsafe extern "system" fn(GLenum, GLenum);
type LightfFn = unsafe extern "system" fn(GLenum, GLenum, f32);
type LightfvFn = unsafe extern "system" fn(GLenum, GLenum, *const f32);
type LightModeliFn = unsafe extern "system" fn(GLenum, i32);
type ClearFn = unsafe extern "system" fn(GLenum);
type LoadIdentityFn = unsafe extern "system" fn();
type MultMatrixfFn = unsafe extern "system" fn(*const f32);
type ViewportFn = unsafe extern "system" fn(i32, i32, i32, i32);
type GetStringFn = unsafe extern "system" fn(GLenum) -> *const u8;

/// Fixed-function OpenGL entry points bound to the current context
pub struct FixedFunctionGl {
    clear_color: ClearColorFn,
    clear_depth: ClearDepthFn,
    enable: CapFn,
    disable: CapFn,
    blend_func: BlendFuncFn,
    depth_func: EnumFn,
    shade_model: EnumFn,
    hint: HintFn,
    polygon_mode: PolygonModeFn,
    lightf: LightfFn,
    lightfv: LightfvFn,
    light_modeli: LightModeliFn,
    clear: ClearFn,
    matrix_mode: EnumFn,
    load_identity: LoadIdentityFn,
    mult_matrixf: MultMatrixfFn,
    viewport: ViewportFn,
    get_string: GetStringFn,
}

/// Resolve one symbol and reinterpret it as the given function pointer type
macro_rules! load_fn {
    ($loader:expr, $name:literal, $ty:ty) => {{
        let ptr: *const c_void = $loader($name);
        if ptr.is_null() {
            return Err(RenderError::InitializationFailed(format!(
                "OpenGL entry point {} is not available",
                $name
            )));
        }
        // SAFETY: the loader returned a non-null address for this symbol, and
        // `$ty` matches its C signature in the compatibility profile.
        unsafe { std::mem::transmute::<*const c_void, $ty>(ptr) }
    }};
}

impl FixedFunctionGl {
    /// Load every entry point through `loader`
    ///
    /// The context that will receive the calls must be current on this thread
    /// and must expose the compatibility profile; core profiles lack the
    /// fixed-function symbols and the load fails.
    pub fn load_with<F>(mut loader: F) -> RenderResult<Self>
    where
        F: FnMut(&str) -> *const c_void,
    {
        let gl = Self {
            clear_color: load_fn!(loader, "glClearColor", ClearColorFn),
            clear_depth: load_fn!(loader, "glClearDepth", ClearDepthFn),
            enable: load_fn!(loader, "glEnable", CapFn),
            disable: load_fn!(loader, "glDisable", CapFn),
            blend_func: load_fn!(loader, "glBlendFunc", BlendFuncFn),
            depth_func: load_fn!(loader, "glDepthFunc", EnumFn),
            shade_model: load_fn!(loader, "glShadeModel", EnumFn),
            hint: load_fn!(loader, "glHint", HintFn),
            polygon_mode: load_fn!(loader, "glPolygonMode", PolygonModeFn),
            lightf: load_fn!(loader, "glLightf", LightfFn),
            lightfv: load_fn!(loader, "glLightfv", LightfvFn),
            light_modeli: load_fn!(loader, "glLightModeli", LightModeliFn),
            clear: load_fn!(loader, "glClear", ClearFn),
            matrix_mode: load_fn!(loader, "glMatrixMode", EnumFn),
            load_identity: load_fn!(loader, "glLoadIdentity", LoadIdentityFn),
            mult_matrixf: load_fn!(loader, "glMultMatrixf", MultMatrixfFn),
            viewport: load_fn!(loader, "glViewport", ViewportFn),
            get_string: load_fn!(loader, "glGetString", GetStringFn),
        };
        debug!("Loaded fixed-function OpenGL entry points");
        Ok(gl)
    }
}

// SAFETY (all blocks below): every pointer was resolved by `load_with` for the
// context current on this thread, and arguments are plain values or pointers
// to stack arrays that outlive the call.
impl GraphicsContext for FixedFunctionGl {
    fn clear_color(&mut self, color: Rgba) {
        let [r, g, b, a] = color;
        unsafe { (self.clear_color)(r, g, b, a) }
    }

    fn clear_depth(&mut self, depth: f64) {
        unsafe { (self.clear_depth)(depth) }
    }

    fn enable(&mut self, capability: Capability) {
        unsafe { (self.enable)(capability.as_gl()) }
    }

    fn disable(&mut self, capability: Capability) {
        unsafe { (self.disable)(capability.as_gl()) }
    }

    fn blend_func(&mut self, source: BlendFactor, destination: BlendFactor) {
        unsafe { (self.blend_func)(source.as_gl(), destination.as_gl()) }
    }

    fn depth_func(&mut self, func: DepthFunc) {
        unsafe { (self.depth_func)(func.as_gl()) }
    }

    fn shade_model(&mut self, model: ShadeModel) {
        unsafe { (self.shade_model)(model.as_gl()) }
    }

    fn hint(&mut self, target: HintTarget, mode: HintMode) {
        unsafe { (self.hint)(target.as_gl(), mode.as_gl()) }
    }

    fn polygon_mode(&mut self, face: Face, mode: PolygonMode) {
        unsafe { (self.polygon_mode)(face.as_gl(), mode.as_gl()) }
    }

    fn light(&mut self, unit: LightUnit, param: LightParam) {
        let pname = param.as_gl();
        match param {
            LightParam::Ambient(v)
            | LightParam::Diffuse(v)
            | LightParam::Specular(v)
            | LightParam::Position(v)
            | LightParam::SpotDirection(v) => unsafe { (self.lightfv)(unit.as_gl(), pname, v.as_ptr()) },
            LightParam::SpotExponent(v)
            | LightParam::SpotCutoff(v)
            | LightParam::ConstantAttenuation(v)
            | LightParam::LinearAttenuation(v)
            | LightParam::QuadraticAttenuation(v) => unsafe { (self.lightf)(unit.as_gl(), pname, v) },
        }
    }

    fn light_model(&mut self, model: LightModel) {
        let (pname, value) = model.as_gl();
        unsafe { (self.light_modeli)(pname, value) }
    }

    fn clear(&mut self, mask: ClearMask) {
        unsafe { (self.clear)(mask.bits()) }
    }

    fn matrix_mode(&mut self, mode: MatrixMode) {
        unsafe { (self.matrix_mode)(mode.as_gl()) }
    }

    fn load_identity(&mut self) {
        unsafe { (self.load_identity)() }
    }

    fn viewport(&mut self, x: i32, y: i32, width: i32, height: i32) {
        unsafe { (self.viewport)(x, y, width, height) }
    }

    fn perspective(&mut self, fov_y: f32, aspect: f32, near: f32, far: f32) {
        if let Some(matrix) = perspective_matrix(fov_y, aspect, near, far) {
            let columns = to_column_major(&matrix);
            unsafe { (self.mult_matrixf)(columns.as_ptr()) }
        }
    }

    fn get_string(&mut self, name: StringName) -> Option<String> {
        let ptr = unsafe { (self.get_string)(name.as_gl()) };
        if ptr.is_null() {
            return None;
        }
        // SAFETY: glGetString returns a static, NUL-terminated string
        let text = unsafe { CStr::from_ptr(ptr.cast()) };
        Some(text.to_string_lossy().into_owned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_symbol_fails_to_load() {
        let result = FixedFunctionGl::load_with(|_| std::ptr::null());
        match result {
            Err(RenderError::InitializationFailed(message)) => {
                assert!(message.contains("glClearColor"));
            }
            _ => panic!("expected initialization failure"),
        }
    }
}
