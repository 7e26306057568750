//! Declarative fixed-function pipeline setup
//!
//! [`RenderConfiguration`] lists which pipeline features to switch on at
//! startup. Every field always holds a concrete value: the defaults below are
//! resolved when the value is built (or when a config file omits a key), so
//! the configurator never sees an "unset" field.

use serde::{Deserialize, Serialize};

use crate::config::Config;
use crate::foundation::math::Rgba;

/// Default clear color: opaque black
pub const DEFAULT_BACKGROUND_COLOR: Rgba = [0.0, 0.0, 0.0, 1.0];
/// Default clear depth
pub const DEFAULT_BACKGROUND_DEPTH: f64 = 1.0;

/// Pipeline features applied by
/// [`GraphicsConfigurator::apply_configuration`](crate::render::GraphicsConfigurator::apply_configuration)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderConfiguration {
    /// Request the nicest polygon antialiasing
    pub antialiasing: bool,
    /// Clear color
    pub background_color: Rgba,
    /// Clear depth
    pub background_depth: f64,
    /// Depth testing with a less-or-equal comparison
    pub depth: bool,
    /// Global lighting plus the first `num_lights` units
    pub lighting: bool,
    /// Material color follows the current color
    pub material_color: bool,
    /// Re-normalize normals after transformation
    pub normalized: bool,
    /// Light units to enable when `lighting` is set (0–8)
    pub num_lights: u32,
    /// Request the nicest perspective correction
    pub perspective_correction: bool,
    /// Fill both polygon faces
    pub polygon_fill_mode: bool,
    /// Smooth (Gouraud) shading
    pub smooth: bool,
    /// Polygon offset for filled primitives
    pub surface_fill: bool,
    /// 2D texturing with separate specular color
    pub textures: bool,
    /// Alpha blending
    pub transparency: bool,
    /// Log every state change
    pub verbose: bool,
    /// Log driver version information
    pub version: bool,
}

impl Default for RenderConfiguration {
    fn default() -> Self {
        Self {
            antialiasing: true,
            background_color: DEFAULT_BACKGROUND_COLOR,
            background_depth: DEFAULT_BACKGROUND_DEPTH,
            depth: true,
            lighting: false,
            material_color: true,
            normalized: true,
            num_lights: 0,
            perspective_correction: false,
            polygon_fill_mode: true,
            smooth: true,
            surface_fill: true,
            textures: false,
            transparency: false,
            verbose: false,
            version: false,
        }
    }
}

impl Config for RenderConfiguration {}

impl RenderConfiguration {
    /// Same as `default()`
    pub fn new() -> Self {
        Self::default()
    }

    /// Configuration with every toggle off, keeping the default clear values
    pub fn minimal() -> Self {
        Self {
            antialiasing: false,
            depth: false,
            material_color: false,
            normalized: false,
            polygon_fill_mode: false,
            smooth: false,
            surface_fill: false,
            ..Self::default()
        }
    }

    /// Set the clear color
    pub fn with_background_color(mut self, color: Rgba) -> Self {
        self.background_color = color;
        self
    }

    /// Set the clear depth
    pub fn with_background_depth(mut self, depth: f64) -> Self {
        self.background_depth = depth;
        self
    }

    /// Turn lighting on with `num_lights` units
    pub fn with_lighting(mut self, num_lights: u32) -> Self {
        self.lighting = true;
        self.num_lights = num_lights;
        self
    }

    /// Toggle antialiasing
    pub fn with_antialiasing(mut self, on: bool) -> Self {
        self.antialiasing = on;
        self
    }

    /// Toggle depth testing
    pub fn with_depth(mut self, on: bool) -> Self {
        self.depth = on;
        self
    }

    /// Toggle color material
    pub fn with_material_color(mut self, on: bool) -> Self {
        self.material_color = on;
        self
    }

    /// Toggle normal re-normalization
    pub fn with_normalized(mut self, on: bool) -> Self {
        self.normalized = on;
        self
    }

    /// Toggle perspective correction
    pub fn with_perspective_correction(mut self, on: bool) -> Self {
        self.perspective_correction = on;
        self
    }

    /// Toggle filled polygons
    pub fn with_polygon_fill_mode(mut self, on: bool) -> Self {
        self.polygon_fill_mode = on;
        self
    }

    /// Toggle smooth shading
    pub fn with_smooth(mut self, on: bool) -> Self {
        self.smooth = on;
        self
    }

    /// Toggle polygon offset fill
    pub fn with_surface_fill(mut self, on: bool) -> Self {
        self.surface_fill = on;
        self
    }

    /// Toggle texturing
    pub fn with_textures(mut self, on: bool) -> Self {
        self.textures = on;
        self
    }

    /// Toggle alpha blending
    pub fn with_transparency(mut self, on: bool) -> Self {
        self.transparency = on;
        self
    }

    /// Toggle per-change logging
    pub fn with_verbose(mut self, on: bool) -> Self {
        self.verbose = on;
        self
    }

    /// Toggle the driver information report
    pub fn with_version(mut self, on: bool) -> Self {
        self.version = on;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ConfigFormat;

    #[test]
    fn test_documented_defaults() {
        let config = RenderConfiguration::default();
        assert!(config.antialiasing);
        assert_eq!(config.background_color, [0.0, 0.0, 0.0, 1.0]);
        assert_eq!(config.background_depth, 1.0);
        assert!(config.depth);
        assert!(!config.lighting);
        assert!(config.material_color);
        assert!(config.normalized);
        assert_eq!(config.num_lights, 0);
        assert!(!config.perspective_correction);
        assert!(config.polygon_fill_mode);
        assert!(config.smooth);
        assert!(config.surface_fill);
        assert!(!config.textures);
        assert!(!config.transparency);
        assert!(!config.verbose);
        assert!(!config.version);
    }

    #[test]
    fn test_empty_file_resolves_to_defaults() {
        let config = RenderConfiguration::from_str_as("", ConfigFormat::Toml).unwrap();
        assert_eq!(config, RenderConfiguration::default());
    }

    #[test]
    fn test_ron_overrides_only_given_fields() {
        let config = RenderConfiguration::from_str_as(
            "(lighting: true, num_lights: 2, background_color: (0.1, 0.2, 0.3, 1.0))",
            ConfigFormat::Ron,
        )
        .unwrap();
        assert!(config.lighting);
        assert_eq!(config.num_lights, 2);
        assert_eq!(config.background_color, [0.1, 0.2, 0.3, 1.0]);
        assert!(config.depth);
        assert_eq!(config.background_depth, DEFAULT_BACKGROUND_DEPTH);
    }

    #[test]
    fn test_builder_matches_struct_literal() {
        let built = RenderConfiguration::new()
            .with_lighting(1)
            .with_textures(true)
            .with_transparency(false)
            .with_material_color(false);
        let literal = RenderConfiguration {
            lighting: true,
            num_lights: 1,
            textures: true,
            material_color: false,
            ..RenderConfiguration::default()
        };
        assert_eq!(built, literal);
    }

    #[test]
    fn test_minimal_turns_every_toggle_off() {
        let config = RenderConfiguration::minimal();
        assert!(!config.antialiasing && !config.depth && !config.smooth);
        assert!(!config.lighting && !config.textures && !config.transparency);
        assert_eq!(config.background_color, DEFAULT_BACKGROUND_COLOR);
    }
}
