//! Typed vocabulary for the fixed-function pipeline
//!
//! Every enum here maps one-to-one onto an OpenGL enum through `as_gl()`.
//! Backends that talk to a real driver use those values; the headless backend
//! only needs the variants.

use bitflags::bitflags;
use serde::{Deserialize, Serialize};

use crate::foundation::math::{Rgba, Vec4Array};

/// OpenGL enum value
pub type GLenum = u32;

// Raw enum values from the OpenGL 1.x/2.x compatibility headers
const GL_DEPTH_BUFFER_BIT: GLenum = 0x0000_0100;
const GL_COLOR_BUFFER_BIT: GLenum = 0x0000_4000;

const GL_NEVER: GLenum = 0x0200;
const GL_LESS: GLenum = 0x0201;
const GL_EQUAL: GLenum = 0x0202;
const GL_LEQUAL: GLenum = 0x0203;
const GL_GREATER: GLenum = 0x0204;
const GL_NOTEQUAL: GLenum = 0x0205;
const GL_GEQUAL: GLenum = 0x0206;
const GL_ALWAYS: GLenum = 0x0207;

const GL_ZERO: GLenum = 0;
const GL_ONE: GLenum = 1;
const GL_SRC_ALPHA: GLenum = 0x0302;
const GL_ONE_MINUS_SRC_ALPHA: GLenum = 0x0303;

const GL_FRONT: GLenum = 0x0404;
const GL_BACK: GLenum = 0x0405;
const GL_FRONT_AND_BACK: GLenum = 0x0408;

const GL_POINT: GLenum = 0x1B00;
const GL_LINE: GLenum = 0x1B01;
const GL_FILL: GLenum = 0x1B02;

const GL_FLAT: GLenum = 0x1D00;
const GL_SMOOTH: GLenum = 0x1D01;

const GL_LIGHTING: GLenum = 0x0B50;
const GL_COLOR_MATERIAL: GLenum = 0x0B57;
const GL_DEPTH_TEST: GLenum = 0x0B71;
const GL_NORMALIZE: GLenum = 0x0BA1;
const GL_BLEND: GLenum = 0x0BE2;
const GL_TEXTURE_2D: GLenum = 0x0DE1;
const GL_POLYGON_OFFSET_FILL: GLenum = 0x8037;
const GL_LIGHT0: GLenum = 0x4000;

const GL_PERSPECTIVE_CORRECTION_HINT: GLenum = 0x0C50;
const GL_POLYGON_SMOOTH_HINT: GLenum = 0x0C53;
const GL_DONT_CARE: GLenum = 0x1100;
const GL_FASTEST: GLenum = 0x1101;
const GL_NICEST: GLenum = 0x1102;

const GL_AMBIENT: GLenum = 0x1200;
const GL_DIFFUSE: GLenum = 0x1201;
const GL_SPECULAR: GLenum = 0x1202;
const GL_POSITION: GLenum = 0x1203;
const GL_SPOT_DIRECTION: GLenum = 0x1204;
const GL_SPOT_EXPONENT: GLenum = 0x1205;
const GL_SPOT_CUTOFF: GLenum = 0x1206;
const GL_CONSTANT_ATTENUATION: GLenum = 0x1207;
const GL_LINEAR_ATTENUATION: GLenum = 0x1208;
const GL_QUADRATIC_ATTENUATION: GLenum = 0x1209;

const GL_LIGHT_MODEL_COLOR_CONTROL: GLenum = 0x81F8;
const GL_SINGLE_COLOR: GLenum = 0x81F9;
const GL_SEPARATE_SPECULAR_COLOR: GLenum = 0x81FA;

const GL_MODELVIEW: GLenum = 0x1700;
const GL_PROJECTION: GLenum = 0x1701;

const GL_VENDOR: GLenum = 0x1F00;
const GL_RENDERER: GLenum = 0x1F01;
const GL_VERSION: GLenum = 0x1F02;
const GL_EXTENSIONS: GLenum = 0x1F03;
const GL_SHADING_LANGUAGE_VERSION: GLenum = 0x8B8C;

bitflags! {
    /// Buffers cleared by `glClear`
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct ClearMask: GLenum {
        /// Color buffer
        const COLOR = GL_COLOR_BUFFER_BIT;
        /// Depth buffer
        const DEPTH = GL_DEPTH_BUFFER_BIT;
    }
}

/// One of the eight fixed-function light units
///
/// OpenGL guarantees at least eight (`GL_MAX_LIGHTS >= 8`); this toolbox
/// addresses exactly those.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum LightUnit {
    /// `GL_LIGHT0`
    Light0,
    /// `GL_LIGHT1`
    Light1,
    /// `GL_LIGHT2`
    Light2,
    /// `GL_LIGHT3`
    Light3,
    /// `GL_LIGHT4`
    Light4,
    /// `GL_LIGHT5`
    Light5,
    /// `GL_LIGHT6`
    Light6,
    /// `GL_LIGHT7`
    Light7,
}

impl LightUnit {
    /// Number of addressable light units
    pub const COUNT: usize = 8;

    /// All units in index order
    pub const ALL: [Self; Self::COUNT] = [
        Self::Light0,
        Self::Light1,
        Self::Light2,
        Self::Light3,
        Self::Light4,
        Self::Light5,
        Self::Light6,
        Self::Light7,
    ];

    /// Look up a unit by index; `None` when the index is out of range
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Zero-based index of the unit
    pub fn index(self) -> usize {
        self as usize
    }

    /// `GL_LIGHTi`
    pub fn as_gl(self) -> GLenum {
        GL_LIGHT0 + self as GLenum
    }
}

/// Server-side capabilities toggled by `glEnable`/`glDisable`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Capability {
    /// Alpha blending
    Blend,
    /// Depth testing
    DepthTest,
    /// Automatic normal re-normalization
    Normalize,
    /// Polygon offset for filled primitives
    PolygonOffsetFill,
    /// Global lighting switch
    Lighting,
    /// A single light unit
    Light(LightUnit),
    /// Material color tracks the current color
    ColorMaterial,
    /// 2D texturing
    Texture2D,
}

impl Capability {
    /// OpenGL enum value
    pub fn as_gl(self) -> GLenum {
        match self {
            Self::Blend => GL_BLEND,
            Self::DepthTest => GL_DEPTH_TEST,
            Self::Normalize => GL_NORMALIZE,
            Self::PolygonOffsetFill => GL_POLYGON_OFFSET_FILL,
            Self::Lighting => GL_LIGHTING,
            Self::Light(unit) => unit.as_gl(),
            Self::ColorMaterial => GL_COLOR_MATERIAL,
            Self::Texture2D => GL_TEXTURE_2D,
        }
    }
}

/// Blend factors for `glBlendFunc`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlendFactor {
    /// `GL_ZERO`
    Zero,
    /// `GL_ONE`
    One,
    /// `GL_SRC_ALPHA`
    SrcAlpha,
    /// `GL_ONE_MINUS_SRC_ALPHA`
    OneMinusSrcAlpha,
}

impl BlendFactor {
    /// OpenGL enum value
    pub fn as_gl(self) -> GLenum {
        match self {
            Self::Zero => GL_ZERO,
            Self::One => GL_ONE,
            Self::SrcAlpha => GL_SRC_ALPHA,
            Self::OneMinusSrcAlpha => GL_ONE_MINUS_SRC_ALPHA,
        }
    }
}

/// Depth comparison for `glDepthFunc`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DepthFunc {
    /// Never passes
    Never,
    /// Passes if incoming < stored (GL default)
    Less,
    /// Passes if equal
    Equal,
    /// Passes if incoming <= stored
    LessOrEqual,
    /// Passes if incoming > stored
    Greater,
    /// Passes if not equal
    NotEqual,
    /// Passes if incoming >= stored
    GreaterOrEqual,
    /// Always passes
    Always,
}

impl DepthFunc {
    /// OpenGL enum value
    pub fn as_gl(self) -> GLenum {
        match self {
            Self::Never => GL_NEVER,
            Self::Less => GL_LESS,
            Self::Equal => GL_EQUAL,
            Self::LessOrEqual => GL_LEQUAL,
            Self::Greater => GL_GREATER,
            Self::NotEqual => GL_NOTEQUAL,
            Self::GreaterOrEqual => GL_GEQUAL,
            Self::Always => GL_ALWAYS,
        }
    }
}

/// Shading model for `glShadeModel`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShadeModel {
    /// One color per primitive
    Flat,
    /// Gouraud interpolation (GL default)
    Smooth,
}

impl ShadeModel {
    /// OpenGL enum value
    pub fn as_gl(self) -> GLenum {
        match self {
            Self::Flat => GL_FLAT,
            Self::Smooth => GL_SMOOTH,
        }
    }
}

/// Hint targets for `glHint`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HintTarget {
    /// Perspective-correct color and texture interpolation
    PerspectiveCorrection,
    /// Polygon antialiasing
    PolygonSmooth,
}

impl HintTarget {
    /// OpenGL enum value
    pub fn as_gl(self) -> GLenum {
        match self {
            Self::PerspectiveCorrection => GL_PERSPECTIVE_CORRECTION_HINT,
            Self::PolygonSmooth => GL_POLYGON_SMOOTH_HINT,
        }
    }
}

/// Hint preference
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HintMode {
    /// Prefer speed
    Fastest,
    /// Prefer quality
    Nicest,
    /// No preference (GL default)
    DontCare,
}

impl HintMode {
    /// OpenGL enum value
    pub fn as_gl(self) -> GLenum {
        match self {
            Self::Fastest => GL_FASTEST,
            Self::Nicest => GL_NICEST,
            Self::DontCare => GL_DONT_CARE,
        }
    }
}

/// Polygon faces
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Face {
    /// Front faces
    Front,
    /// Back faces
    Back,
    /// Both
    FrontAndBack,
}

impl Face {
    /// OpenGL enum value
    pub fn as_gl(self) -> GLenum {
        match self {
            Self::Front => GL_FRONT,
            Self::Back => GL_BACK,
            Self::FrontAndBack => GL_FRONT_AND_BACK,
        }
    }
}

/// Rasterization mode for `glPolygonMode`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PolygonMode {
    /// Vertices only
    Point,
    /// Outlines
    Line,
    /// Filled (GL default)
    Fill,
}

impl PolygonMode {
    /// OpenGL enum value
    pub fn as_gl(self) -> GLenum {
        match self {
            Self::Point => GL_POINT,
            Self::Line => GL_LINE,
            Self::Fill => GL_FILL,
        }
    }
}

/// Matrix stack selected by `glMatrixMode`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MatrixMode {
    /// Model-view stack (GL default)
    ModelView,
    /// Projection stack
    Projection,
}

impl MatrixMode {
    /// OpenGL enum value
    pub fn as_gl(self) -> GLenum {
        match self {
            Self::ModelView => GL_MODELVIEW,
            Self::Projection => GL_PROJECTION,
        }
    }
}

/// A single light-unit parameter with its value, as set by `glLightf[v]`
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum LightParam {
    /// Ambient intensity
    Ambient(Rgba),
    /// Diffuse intensity
    Diffuse(Rgba),
    /// Specular intensity
    Specular(Rgba),
    /// Homogeneous position; `w == 0` makes the light directional
    Position(Vec4Array),
    /// Spot direction (first three components are read)
    SpotDirection(Vec4Array),
    /// Spot intensity falloff
    SpotExponent(f32),
    /// Spot cone half-angle in degrees; 180 disables the cone
    SpotCutoff(f32),
    /// Constant attenuation factor
    ConstantAttenuation(f32),
    /// Linear attenuation factor
    LinearAttenuation(f32),
    /// Quadratic attenuation factor
    QuadraticAttenuation(f32),
}

impl LightParam {
    /// OpenGL parameter name
    pub fn as_gl(&self) -> GLenum {
        match self {
            Self::Ambient(_) => GL_AMBIENT,
            Self::Diffuse(_) => GL_DIFFUSE,
            Self::Specular(_) => GL_SPECULAR,
            Self::Position(_) => GL_POSITION,
            Self::SpotDirection(_) => GL_SPOT_DIRECTION,
            Self::SpotExponent(_) => GL_SPOT_EXPONENT,
            Self::SpotCutoff(_) => GL_SPOT_CUTOFF,
            Self::ConstantAttenuation(_) => GL_CONSTANT_ATTENUATION,
            Self::LinearAttenuation(_) => GL_LINEAR_ATTENUATION,
            Self::QuadraticAttenuation(_) => GL_QUADRATIC_ATTENUATION,
        }
    }
}

/// How specular highlights combine with texturing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorControl {
    /// Specular added before texturing (GL default)
    SingleColor,
    /// Specular added after texturing
    SeparateSpecularColor,
}

impl ColorControl {
    /// OpenGL enum value
    pub fn as_gl(self) -> GLenum {
        match self {
            Self::SingleColor => GL_SINGLE_COLOR,
            Self::SeparateSpecularColor => GL_SEPARATE_SPECULAR_COLOR,
        }
    }
}

/// Light model settings for `glLightModeli`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LightModel {
    /// `GL_LIGHT_MODEL_COLOR_CONTROL`
    ColorControl(ColorControl),
}

impl LightModel {
    /// Parameter name and integer value as passed to `glLightModeli`
    #[allow(clippy::cast_possible_truncation, clippy::cast_possible_wrap)]
    pub fn as_gl(self) -> (GLenum, i32) {
        match self {
            Self::ColorControl(control) => (GL_LIGHT_MODEL_COLOR_CONTROL, control.as_gl() as i32),
        }
    }
}

/// Driver strings available through `glGetString`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StringName {
    /// Driver version
    Version,
    /// Vendor
    Vendor,
    /// Renderer (usually the GPU model)
    Renderer,
    /// GLSL version
    ShadingLanguageVersion,
    /// Space separated extension list
    Extensions,
}

impl StringName {
    /// OpenGL enum value
    pub fn as_gl(self) -> GLenum {
        match self {
            Self::Version => GL_VERSION,
            Self::Vendor => GL_VENDOR,
            Self::Renderer => GL_RENDERER,
            Self::ShadingLanguageVersion => GL_SHADING_LANGUAGE_VERSION,
            Self::Extensions => GL_EXTENSIONS,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    #[allow(clippy::cast_possible_truncation)]
    fn test_light_unit_lookup() {
        assert_eq!(LightUnit::from_index(0), Some(LightUnit::Light0));
        assert_eq!(LightUnit::from_index(7), Some(LightUnit::Light7));
        assert_eq!(LightUnit::from_index(8), None);
        for (i, unit) in LightUnit::ALL.iter().enumerate() {
            assert_eq!(unit.index(), i);
            assert_eq!(unit.as_gl(), 0x4000 + i as GLenum);
        }
    }

    #[test]
    fn test_clear_mask_bits() {
        assert_eq!((ClearMask::COLOR | ClearMask::DEPTH).bits(), 0x4100);
        assert_eq!(ClearMask::all(), ClearMask::COLOR | ClearMask::DEPTH);
    }

    #[test]
    fn test_enum_values() {
        assert_eq!(Capability::Blend.as_gl(), 0x0BE2);
        assert_eq!(Capability::DepthTest.as_gl(), 0x0B71);
        assert_eq!(Capability::Normalize.as_gl(), 0x0BA1);
        assert_eq!(Capability::PolygonOffsetFill.as_gl(), 0x8037);
        assert_eq!(Capability::Lighting.as_gl(), 0x0B50);
        assert_eq!(Capability::Light(LightUnit::Light3).as_gl(), 0x4003);
        assert_eq!(Capability::ColorMaterial.as_gl(), 0x0B57);
        assert_eq!(Capability::Texture2D.as_gl(), 0x0DE1);

        assert_eq!(BlendFactor::Zero.as_gl(), 0);
        assert_eq!(BlendFactor::One.as_gl(), 1);
        assert_eq!(BlendFactor::SrcAlpha.as_gl(), 0x0302);
        assert_eq!(BlendFactor::OneMinusSrcAlpha.as_gl(), 0x0303);

        assert_eq!(DepthFunc::Less.as_gl(), 0x0201);
        assert_eq!(DepthFunc::LessOrEqual.as_gl(), 0x0203);
        assert_eq!(DepthFunc::Always.as_gl(), 0x0207);
        assert_eq!(ShadeModel::Smooth.as_gl(), 0x1D01);

        assert_eq!(HintTarget::PerspectiveCorrection.as_gl(), 0x0C50);
        assert_eq!(HintTarget::PolygonSmooth.as_gl(), 0x0C53);
        assert_eq!(HintMode::Nicest.as_gl(), 0x1102);
        assert_eq!(HintMode::DontCare.as_gl(), 0x1100);

        assert_eq!(Face::FrontAndBack.as_gl(), 0x0408);
        assert_eq!(PolygonMode::Fill.as_gl(), 0x1B02);
        assert_eq!(MatrixMode::ModelView.as_gl(), 0x1700);
        assert_eq!(MatrixMode::Projection.as_gl(), 0x1701);
        assert_eq!(LightParam::SpotCutoff(180.0).as_gl(), 0x1206);
        assert_eq!(StringName::ShadingLanguageVersion.as_gl(), 0x8B8C);
        assert_eq!(
            LightModel::ColorControl(ColorControl::SeparateSpecularColor).as_gl(),
            (0x81F8, 0x81FA)
        );
    }
}
