//! Window management using GLFW
//!
//! Creates a window with a compatibility-profile OpenGL context so the
//! fixed-function entry points are available, and exposes the pieces the demo
//! loop needs: an event queue, a pressed-key query, buffer swapping and the
//! proc-address loader for [`FixedFunctionGl`].

use glfw::Context;
use log::{debug, info};
use thiserror::Error;

use crate::render::backends::FixedFunctionGl;
use crate::render::RenderResult;

/// Window management errors
#[derive(Error, Debug)]
pub enum WindowError {
    /// GLFW could not be initialized
    #[error("GLFW initialization failed: {0}")]
    InitializationFailed(String),

    /// The window or its GL context could not be created
    #[error("Window creation failed")]
    CreationFailed,
}

/// Result type for window operations
pub type WindowResult<T> = Result<T, WindowError>;

/// Window creation options
#[derive(Debug, Clone)]
pub struct WindowOptions {
    /// Title bar text
    pub title: String,
    /// Client area width in pixels
    pub width: u32,
    /// Client area height in pixels
    pub height: u32,
    /// Center the window on the primary monitor
    pub centered: bool,
    /// Wait for vertical sync on buffer swap
    pub vsync: bool,
    /// Requested OpenGL version; must predate core profiles for fixed-function use
    pub gl_version: (u32, u32),
}

impl Default for WindowOptions {
    fn default() -> Self {
        Self {
            title: "gl_toolbox".to_string(),
            width: 800,
            height: 600,
            centered: true,
            vsync: true,
            gl_version: (2, 1),
        }
    }
}

/// GLFW window owning a current OpenGL context
pub struct GlWindow {
    glfw: glfw::Glfw,
    window: glfw::PWindow,
    events: glfw::GlfwReceiver<(f64, glfw::WindowEvent)>,
}

impl GlWindow {
    /// Create the window and make its context current on this thread
    pub fn new(options: &WindowOptions) -> WindowResult<Self> {
        let mut glfw = glfw::init(glfw::fail_on_errors)
            .map_err(|e| WindowError::InitializationFailed(format!("{e:?}")))?;

        let (major, minor) = options.gl_version;
        glfw.window_hint(glfw::WindowHint::ContextVersion(major, minor));
        glfw.window_hint(glfw::WindowHint::Resizable(true));
        glfw.window_hint(glfw::WindowHint::DepthBits(Some(24)));

        let (mut window, events) = glfw
            .create_window(options.width, options.height, &options.title, glfw::WindowMode::Windowed)
            .ok_or(WindowError::CreationFailed)?;

        if options.centered {
            let monitor_size = glfw.with_primary_monitor(|_, monitor| {
                monitor
                    .and_then(|monitor| monitor.get_video_mode())
                    .map(|mode| (mode.width, mode.height))
            });
            if let Some((screen_w, screen_h)) = monitor_size {
                let x = (i64::from(screen_w) - i64::from(options.width)) / 2;
                let y = (i64::from(screen_h) - i64::from(options.height)) / 2;
                #[allow(clippy::cast_possible_truncation)]
                let (x, y) = (x.max(0) as i32, y.max(0) as i32);
                window.set_pos(x, y);
            }
        }

        window.make_current();
        glfw.set_swap_interval(if options.vsync {
            glfw::SwapInterval::Sync(1)
        } else {
            glfw::SwapInterval::None
        });

        window.set_key_polling(true);
        window.set_close_polling(true);
        window.set_framebuffer_size_polling(true);

        info!(
            "Created {}x{} window \"{}\" (OpenGL {}.{} requested)",
            options.width, options.height, options.title, major, minor
        );

        Ok(Self { glfw, window, events })
    }

    /// Bind the fixed-function entry points of this window's context
    pub fn load_gl(&mut self) -> RenderResult<FixedFunctionGl> {
        debug!("Loading OpenGL entry points from the window context");
        let window = &mut self.window;
        FixedFunctionGl::load_with(|symbol| window.get_proc_address(symbol) as *const _)
    }

    /// Whether a close was requested
    pub fn should_close(&self) -> bool {
        self.window.should_close()
    }

    /// Request or cancel closing
    pub fn set_should_close(&mut self, should_close: bool) {
        self.window.set_should_close(should_close);
    }

    /// Process pending window system events
    pub fn poll_events(&mut self) {
        self.glfw.poll_events();
    }

    /// Drain the events queued since the last poll
    pub fn flush_events(&self) -> Vec<glfw::WindowEvent> {
        glfw::flush_messages(&self.events).map(|(_, event)| event).collect()
    }

    /// Whether a key is currently held down
    pub fn is_key_pressed(&self, key: glfw::Key) -> bool {
        matches!(self.window.get_key(key), glfw::Action::Press | glfw::Action::Repeat)
    }

    /// Drawable size in pixels
    pub fn framebuffer_size(&self) -> (i32, i32) {
        self.window.get_framebuffer_size()
    }

    /// Present the back buffer
    pub fn swap_buffers(&mut self) {
        self.window.swap_buffers();
    }
}
