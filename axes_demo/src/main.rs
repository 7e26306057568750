//! Axes demo application
//!
//! Opens a window with a compatibility OpenGL context, sets the pipeline up
//! through the toolbox and runs a 60 FPS loop with one movable light.
//!
//! Controls: A/D orbit the light, W/S raise and lower it, Escape quits.
//! An optional TOML/RON config path may be passed as the first argument.

mod demo_config;

use demo_config::DemoConfig;
use gl_toolbox::config::{Config, ConfigError};
use gl_toolbox::foundation::logging;
use gl_toolbox::foundation::time::FrameClock;
use gl_toolbox::render::{
    FixedFunctionGl, GlWindow, GraphicsConfigurator, LightUnit, RenderError, WindowError,
    WindowOptions,
};
use glfw::{Action, Key, WindowEvent};
use thiserror::Error;

/// Startup failures
#[derive(Error, Debug)]
enum DemoError {
    #[error("Config error: {0}")]
    Config(#[from] ConfigError),

    #[error("Window error: {0}")]
    Window(#[from] WindowError),

    #[error("Render error: {0}")]
    Render(#[from] RenderError),
}

struct AxesDemoApp {
    window: GlWindow,
    gfx: GraphicsConfigurator<FixedFunctionGl>,
    config: DemoConfig,
    clock: FrameClock,
    light_position: [f32; 4],
}

impl AxesDemoApp {
    fn new(config: DemoConfig) -> Result<Self, DemoError> {
        let (width, height) = config.window_size;
        let mut window = GlWindow::new(&WindowOptions {
            title: config.title.clone(),
            width,
            height,
            ..WindowOptions::default()
        })?;

        let mut gfx = GraphicsConfigurator::new(window.load_gl()?);
        gfx.apply_configuration(&config.render);

        let (fb_width, fb_height) = window.framebuffer_size();
        gfx.reshape(fb_width, fb_height);

        // A bad unit is logged and skipped; the scene still runs unlit
        if let Err(e) = gfx.apply_light(Some(LightUnit::Light0), &config.light) {
            log::warn!("Light setup skipped: {e}");
        }

        Ok(Self {
            window,
            gfx,
            light_position: config.light_position,
            config,
            clock: FrameClock::new(),
        })
    }

    fn run(&mut self) {
        log::info!("Entering main loop at {} FPS", self.config.fps);

        while !self.window.should_close() {
            self.clock.tick(self.config.fps);
            self.gfx.clear_buffers();

            self.window.poll_events();
            for event in self.window.flush_events() {
                self.handle_event(&event);
            }

            self.update_light();
            if self.gfx.is_lighting_enabled() {
                self.gfx.set_light_position(LightUnit::Light0, self.light_position);
            }

            self.window.swap_buffers();
        }

        log::info!("Main loop finished after {} frames", self.clock.frame_count());
    }

    fn handle_event(&mut self, event: &WindowEvent) {
        match event {
            WindowEvent::Close | WindowEvent::Key(Key::Escape, _, Action::Press, _) => {
                self.window.set_should_close(true);
            }
            WindowEvent::FramebufferSize(width, height) => {
                log::info!("Window resized to {}x{}", width, height);
                self.gfx.reshape(*width, *height);
            }
            _ => {}
        }
    }

    /// Orbit the light around the Y axis and move it up and down from held keys
    fn update_light(&mut self) {
        let [x, y, z, w] = self.light_position;

        let mut angle = 0.0_f32;
        if self.window.is_key_pressed(Key::A) {
            angle -= self.config.light_orbit_speed;
        } else if self.window.is_key_pressed(Key::D) {
            angle += self.config.light_orbit_speed;
        }

        let mut climb = 0.0_f32;
        if self.window.is_key_pressed(Key::W) {
            climb += self.config.light_climb_speed;
        } else if self.window.is_key_pressed(Key::S) {
            climb -= self.config.light_climb_speed;
        }

        let (sin, cos) = angle.to_radians().sin_cos();
        self.light_position = [x * cos + z * sin, y + climb, -x * sin + z * cos, w];
    }
}

fn load_config() -> Result<DemoConfig, ConfigError> {
    match std::env::args().nth(1) {
        Some(path) => {
            log::info!("Loading demo configuration from {}", path);
            DemoConfig::load_from_file(path)
        }
        None => Ok(DemoConfig::default()),
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    logging::init();
    log::info!("Starting axes demo");

    let result = load_config()
        .map_err(DemoError::from)
        .and_then(AxesDemoApp::new)
        .map(|mut app| app.run());

    match result {
        Ok(()) => {
            log::info!("Axes demo completed successfully");
            Ok(())
        }
        Err(e) => {
            log::error!("Axes demo failed: {}", e);
            Err(e.into())
        }
    }
}
