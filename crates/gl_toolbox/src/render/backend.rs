//! Graphics context abstraction
//!
//! [`GraphicsContext`] is the set of fixed-function entry points the
//! configurator drives. Implementations forward each call to a bound driver
//! context ([`FixedFunctionGl`](crate::render::backends::FixedFunctionGl)) or
//! record it ([`HeadlessContext`](crate::render::backends::HeadlessContext)).
//!
//! Calls are fire-and-forget: nothing here returns a status, and driver-side
//! errors are never inspected. A context is bound to one thread; all methods
//! take `&mut self` so the borrow checker serializes access.

use crate::foundation::math::Rgba;
use crate::render::types::{
    BlendFactor, Capability, ClearMask, DepthFunc, Face, HintMode, HintTarget, LightModel,
    LightParam, LightUnit, MatrixMode, PolygonMode, ShadeModel, StringName,
};

/// Fixed-function pipeline entry points
pub trait GraphicsContext {
    /// `glClearColor`
    fn clear_color(&mut self, color: Rgba);

    /// `glClearDepth`
    fn clear_depth(&mut self, depth: f64);

    /// `glEnable`
    fn enable(&mut self, capability: Capability);

    /// `glDisable`
    fn disable(&mut self, capability: Capability);

    /// `glBlendFunc`
    fn blend_func(&mut self, source: BlendFactor, destination: BlendFactor);

    /// `glDepthFunc`
    fn depth_func(&mut self, func: DepthFunc);

    /// `glShadeModel`
    fn shade_model(&mut self, model: ShadeModel);

    /// `glHint`
    fn hint(&mut self, target: HintTarget, mode: HintMode);

    /// `glPolygonMode`
    fn polygon_mode(&mut self, face: Face, mode: PolygonMode);

    /// `glLightf` / `glLightfv`, depending on the parameter
    fn light(&mut self, unit: LightUnit, param: LightParam);

    /// `glLightModeli`
    fn light_model(&mut self, model: LightModel);

    /// `glClear`
    fn clear(&mut self, mask: ClearMask);

    /// `glMatrixMode`
    fn matrix_mode(&mut self, mode: MatrixMode);

    /// `glLoadIdentity` on the current matrix
    fn load_identity(&mut self);

    /// `glViewport`
    fn viewport(&mut self, x: i32, y: i32, width: i32, height: i32);

    /// Multiply a perspective projection onto the current matrix (`gluPerspective`)
    ///
    /// `fov_y` is in degrees. Degenerate inputs leave the matrix untouched.
    fn perspective(&mut self, fov_y: f32, aspect: f32, near: f32, far: f32);

    /// `glGetString`; `None` when the driver returns no string
    fn get_string(&mut self, name: StringName) -> Option<String>;
}

impl<T: GraphicsContext + ?Sized> GraphicsContext for &mut T {
    fn clear_color(&mut self, color: Rgba) {
        (**self).clear_color(color);
    }

    fn clear_depth(&mut self, depth: f64) {
        (**self).clear_depth(depth);
    }

    fn enable(&mut self, capability: Capability) {
        (**self).enable(capability);
    }

    fn disable(&mut self, capability: Capability) {
        (**self).disable(capability);
    }

    fn blend_func(&mut self, source: BlendFactor, destination: BlendFactor) {
        (**self).blend_func(source, destination);
    }

    fn depth_func(&mut self, func: DepthFunc) {
        (**self).depth_func(func);
    }

    fn shade_model(&mut self, model: ShadeModel) {
        (**self).shade_model(model);
    }

    fn hint(&mut self, target: HintTarget, mode: HintMode) {
        (**self).hint(target, mode);
    }

    fn polygon_mode(&mut self, face: Face, mode: PolygonMode) {
        (**self).polygon_mode(face, mode);
    }

    fn light(&mut self, unit: LightUnit, param: LightParam) {
        (**self).light(unit, param);
    }

    fn light_model(&mut self, model: LightModel) {
        (**self).light_model(model);
    }

    fn clear(&mut self, mask: ClearMask) {
        (**self).clear(mask);
    }

    fn matrix_mode(&mut self, mode: MatrixMode) {
        (**self).matrix_mode(mode);
    }

    fn load_identity(&mut self) {
        (**self).load_identity();
    }

    fn viewport(&mut self, x: i32, y: i32, width: i32, height: i32) {
        (**self).viewport(x, y, width, height);
    }

    fn perspective(&mut self, fov_y: f32, aspect: f32, near: f32, far: f32) {
        (**self).perspective(fov_y, aspect, near, far);
    }

    fn get_string(&mut self, name: StringName) -> Option<String> {
        (**self).get_string(name)
    }
}
