//! Light unit parameters

use serde::{Deserialize, Serialize};

use crate::config::Config;
use crate::foundation::math::{Rgba, Vec4Array};
use crate::render::types::LightParam;

/// Default ambient intensity
pub const DEFAULT_AMBIENT_COLOR: Rgba = [0.2, 0.2, 0.2, 1.0];
/// Default diffuse intensity
pub const DEFAULT_DIFFUSE_COLOR: Rgba = [0.8, 0.8, 0.8, 1.0];
/// Default specular intensity
pub const DEFAULT_SPECULAR_COLOR: Rgba = [1.0, 1.0, 1.0, 1.0];
/// Default spot cutoff; 180 degrees means no cone
pub const DEFAULT_SPOT_CUTOFF: f32 = 180.0;
/// Default spot direction
pub const DEFAULT_SPOT_DIRECTION: Vec4Array = [0.0, 0.0, -1.0, 1.0];
/// Default spot exponent
pub const DEFAULT_SPOT_EXPONENT: f32 = 1.0;
/// Default constant attenuation
pub const DEFAULT_CONSTANT_ATTENUATION: f32 = 1.0;
/// Default linear attenuation
pub const DEFAULT_LINEAR_ATTENUATION: f32 = 0.0;
/// Default quadratic attenuation
pub const DEFAULT_QUADRATIC_ATTENUATION: f32 = 0.0;

/// Parameters written to one light unit
///
/// The defaults describe a neutral point light with no attenuation and a full
/// cone. Values are forwarded to the driver as given; nothing is clamped.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LightParameters {
    /// Ambient intensity
    pub ambient: Rgba,
    /// Diffuse intensity
    pub diffuse: Rgba,
    /// Specular intensity
    pub specular: Rgba,
    /// Spot cone half-angle in degrees (0–90, or 180)
    pub spot_cutoff: f32,
    /// Spot direction
    pub spot_direction: Vec4Array,
    /// Spot falloff exponent
    pub spot_exponent: f32,
    /// Constant attenuation factor
    pub constant_attenuation: f32,
    /// Linear attenuation factor
    pub linear_attenuation: f32,
    /// Quadratic attenuation factor
    pub quadratic_attenuation: f32,
    /// Position; `None` leaves the unit's current position alone
    pub position: Option<Vec4Array>,
}

impl Default for LightParameters {
    fn default() -> Self {
        Self {
            ambient: DEFAULT_AMBIENT_COLOR,
            diffuse: DEFAULT_DIFFUSE_COLOR,
            specular: DEFAULT_SPECULAR_COLOR,
            spot_cutoff: DEFAULT_SPOT_CUTOFF,
            spot_direction: DEFAULT_SPOT_DIRECTION,
            spot_exponent: DEFAULT_SPOT_EXPONENT,
            constant_attenuation: DEFAULT_CONSTANT_ATTENUATION,
            linear_attenuation: DEFAULT_LINEAR_ATTENUATION,
            quadratic_attenuation: DEFAULT_QUADRATIC_ATTENUATION,
            position: None,
        }
    }
}

impl Config for LightParameters {}

impl LightParameters {
    /// Same as `default()`
    pub fn new() -> Self {
        Self::default()
    }

    /// Set ambient intensity
    pub fn with_ambient(mut self, color: Rgba) -> Self {
        self.ambient = color;
        self
    }

    /// Set diffuse intensity
    pub fn with_diffuse(mut self, color: Rgba) -> Self {
        self.diffuse = color;
        self
    }

    /// Set specular intensity
    pub fn with_specular(mut self, color: Rgba) -> Self {
        self.specular = color;
        self
    }

    /// Shape the spot cone
    pub fn with_spot(mut self, direction: Vec4Array, cutoff: f32, exponent: f32) -> Self {
        self.spot_direction = direction;
        self.spot_cutoff = cutoff;
        self.spot_exponent = exponent;
        self
    }

    /// Set the constant, linear and quadratic attenuation factors
    pub fn with_attenuation(mut self, constant: f32, linear: f32, quadratic: f32) -> Self {
        self.constant_attenuation = constant;
        self.linear_attenuation = linear;
        self.quadratic_attenuation = quadratic;
        self
    }

    /// Also write a position
    pub fn with_position(mut self, position: Vec4Array) -> Self {
        self.position = Some(position);
        self
    }

    /// Parameter writes in the order they reach the driver
    pub fn to_params(&self) -> Vec<LightParam> {
        let mut params = vec![
            LightParam::Ambient(self.ambient),
            LightParam::Diffuse(self.diffuse),
            LightParam::Specular(self.specular),
            LightParam::SpotCutoff(self.spot_cutoff),
            LightParam::SpotExponent(self.spot_exponent),
            LightParam::SpotDirection(self.spot_direction),
            LightParam::ConstantAttenuation(self.constant_attenuation),
            LightParam::LinearAttenuation(self.linear_attenuation),
            LightParam::QuadraticAttenuation(self.quadratic_attenuation),
        ];
        if let Some(position) = self.position {
            params.push(LightParam::Position(position));
        }
        params
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ConfigFormat;

    #[test]
    fn test_default_params_order() {
        let params = LightParameters::default().to_params();
        assert_eq!(
            params,
            vec![
                LightParam::Ambient([0.2, 0.2, 0.2, 1.0]),
                LightParam::Diffuse([0.8, 0.8, 0.8, 1.0]),
                LightParam::Specular([1.0, 1.0, 1.0, 1.0]),
                LightParam::SpotCutoff(180.0),
                LightParam::SpotExponent(1.0),
                LightParam::SpotDirection([0.0, 0.0, -1.0, 1.0]),
                LightParam::ConstantAttenuation(1.0),
                LightParam::LinearAttenuation(0.0),
                LightParam::QuadraticAttenuation(0.0),
            ]
        );
    }

    #[test]
    fn test_position_is_appended_when_set() {
        let params = LightParameters::new().with_position([1.0, 2.0, 3.0, 1.0]).to_params();
        assert_eq!(params.len(), 10);
        assert_eq!(params.last(), Some(&LightParam::Position([1.0, 2.0, 3.0, 1.0])));
    }

    #[test]
    fn test_partial_file_keeps_defaults() {
        let light = LightParameters::from_str_as(
            "diffuse = [1.0, 0.5, 0.0, 1.0]\nlinear_attenuation = 0.01",
            ConfigFormat::Toml,
        )
        .unwrap();
        assert_eq!(light.diffuse, [1.0, 0.5, 0.0, 1.0]);
        assert_eq!(light.linear_attenuation, 0.01);
        assert_eq!(light.ambient, DEFAULT_AMBIENT_COLOR);
        assert_eq!(light.position, None);
    }
}
