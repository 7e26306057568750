//! Demo settings, loadable from a TOML or RON file

use gl_toolbox::config::Config;
use gl_toolbox::render::{LightParameters, RenderConfiguration};
use serde::{Deserialize, Serialize};

/// Everything the demo reads at startup
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DemoConfig {
    /// Window title
    pub title: String,
    /// Initial window size
    pub window_size: (u32, u32),
    /// Frame rate cap
    pub fps: u32,
    /// Degrees per frame the light orbits while A/D are held
    pub light_orbit_speed: f32,
    /// Units per frame the light rises/falls while W/S are held
    pub light_climb_speed: f32,
    /// Starting light position
    pub light_position: [f32; 4],
    /// Pipeline setup
    pub render: RenderConfiguration,
    /// Parameters for `GL_LIGHT0`
    pub light: LightParameters,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            title: "Axes example".to_string(),
            window_size: (800, 600),
            fps: 60,
            light_orbit_speed: 2.5,
            light_climb_speed: 10.0,
            light_position: [1000.0, 1000.0, 100.0, 1.0],
            render: RenderConfiguration::default()
                .with_transparency(false)
                .with_material_color(false)
                .with_normalized(true)
                .with_lighting(1)
                .with_perspective_correction(true)
                .with_antialiasing(true)
                .with_depth(true)
                .with_smooth(true)
                .with_textures(true)
                .with_verbose(false),
            light: LightParameters::default(),
        }
    }
}

impl Config for DemoConfig {}

#[cfg(test)]
mod tests {
    use super::*;
    use gl_toolbox::config::ConfigFormat;

    #[test]
    fn test_default_scene_is_lit_with_one_light() {
        let config = DemoConfig::default();
        assert!(config.render.lighting);
        assert_eq!(config.render.num_lights, 1);
        assert!(config.render.textures);
        assert!(!config.render.material_color);
        assert_eq!(config.window_size, (800, 600));
    }

    #[test]
    fn test_nested_render_section_overrides() {
        let text = "fps = 30\n\n[render]\nverbose = true\nnum_lights = 2\n";
        let config = DemoConfig::from_str_as(text, ConfigFormat::Toml).unwrap();
        assert_eq!(config.fps, 30);
        assert!(config.render.verbose);
        assert_eq!(config.render.num_lights, 2);
        // Keys missing from the section fall back to RenderConfiguration defaults
        assert!(!config.render.lighting);
        assert_eq!(config.title, "Axes example");
    }
}
