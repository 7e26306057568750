//! Log output of the configurator
//!
//! Runs in its own test binary so the capturing logger below can own the
//! global `log` slot. Records are kept per thread; every test runs on its own
//! thread and only sees its own lines.

use std::cell::RefCell;
use std::sync::Once;

use gl_toolbox::prelude::*;
use gl_toolbox::render::backends::GlCall;
use gl_toolbox::render::DriverInfo;
use log::{Level, LevelFilter, Log, Metadata, Record};

thread_local! {
    static LINES: RefCell<Vec<(Level, String)>> = RefCell::new(Vec::new());
}

struct CaptureLogger;

impl Log for CaptureLogger {
    fn enabled(&self, _metadata: &Metadata) -> bool {
        true
    }

    fn log(&self, record: &Record) {
        LINES.with(|lines| {
            lines
                .borrow_mut()
                .push((record.level(), record.args().to_string()));
        });
    }

    fn flush(&self) {}
}

static LOGGER: CaptureLogger = CaptureLogger;
static INIT: Once = Once::new();

fn capture() {
    INIT.call_once(|| {
        log::set_logger(&LOGGER).expect("no other logger in this binary");
        log::set_max_level(LevelFilter::Trace);
    });
    LINES.with(|lines| lines.borrow_mut().clear());
}

/// Captured lines at `level` or more severe, `debug`/`trace` noise dropped
fn lines_at(level: Level) -> Vec<String> {
    LINES.with(|lines| {
        lines
            .borrow()
            .iter()
            .filter(|(l, _)| *l <= level)
            .map(|(_, text)| text.clone())
            .collect()
    })
}

fn with_prefix(prefix: &str) -> Vec<String> {
    lines_at(Level::Info)
        .into_iter()
        .filter(|line| line.starts_with(prefix))
        .collect()
}

fn driver() -> HeadlessContext {
    HeadlessContext::with_driver_info(DriverInfo {
        version: Some("2.1 Mesa 23.0".to_string()),
        vendor: Some("Mesa".to_string()),
        renderer: Some("llvmpipe".to_string()),
        shading_language_version: Some("1.20".to_string()),
        extensions: Some("GL_ARB_multitexture".to_string()),
    })
}

#[test]
fn test_verbose_brackets_init_with_gl_lines() {
    capture();
    let mut gfx = GraphicsConfigurator::new(driver());
    gfx.apply_configuration(&RenderConfiguration::default().with_verbose(true).with_lighting(2));

    let gl = with_prefix("[GL] ");
    assert_eq!(gl.first().map(String::as_str), Some("[GL] Init OPENGL"));
    assert_eq!(gl.last().map(String::as_str), Some("[GL] OpenGL init finished"));
    assert!(gl.iter().any(|line| line == "[GL] Enable lighting"));
    assert!(gl.iter().any(|line| line == "[GL] Light 0 enabled"));
    assert!(gl.iter().any(|line| line == "[GL] Light 1 enabled"));
    assert!(!gl.iter().any(|line| line == "[GL] Light 2 enabled"));
    assert!(with_prefix("[GL-INFO]").is_empty());
}

#[test]
fn test_quiet_configuration_logs_nothing() {
    capture();
    let mut gfx = GraphicsConfigurator::new(driver());
    gfx.apply_configuration(&RenderConfiguration::default().with_lighting(1));

    assert!(with_prefix("[GL]").is_empty());
    assert!(lines_at(Level::Info).is_empty());
}

#[test]
fn test_version_reports_five_driver_lines() {
    for verbose in [false, true] {
        capture();
        let mut gfx = GraphicsConfigurator::new(driver());
        gfx.apply_configuration(
            &RenderConfiguration::default()
                .with_version(true)
                .with_verbose(verbose),
        );

        assert_eq!(
            with_prefix("[GL-INFO]"),
            vec![
                "[GL-INFO] OpenGL version 2.1 Mesa 23.0",
                "[GL-INFO] GPU Mesa",
                "[GL-INFO] Renderer llvmpipe",
                "[GL-INFO] GLSL version 1.20",
                "[GL-INFO] Extensions GL_ARB_multitexture",
            ]
        );
        assert_eq!(with_prefix("[GL] ").is_empty(), !verbose);
    }
}

#[test]
fn test_verbose_init_line_precedes_driver_report() {
    capture();
    let mut gfx = GraphicsConfigurator::new(driver());
    gfx.apply_configuration(&RenderConfiguration::minimal().with_verbose(true).with_version(true));

    let info = lines_at(Level::Info);
    assert_eq!(info[0], "[GL] Init OPENGL");
    assert!(info[1..6].iter().all(|line| line.starts_with("[GL-INFO] ")));
    assert_eq!(info.last().map(String::as_str), Some("[GL] OpenGL init finished"));
}

#[test]
fn test_missing_light_logs_one_error() {
    capture();
    let mut gfx = GraphicsConfigurator::new(HeadlessContext::new());
    let result = gfx.apply_light(None, &LightParameters::default());

    assert!(result.is_err());
    assert_eq!(lines_at(Level::Error), vec!["Light cannot be None"]);
    assert_eq!(gfx.context().count_calls(|call| matches!(call, GlCall::Light(..))), 0);
}

#[test]
fn test_valid_light_logs_no_error() {
    capture();
    let mut gfx = GraphicsConfigurator::new(HeadlessContext::new());
    gfx.apply_light(Some(LightUnit::Light0), &LightParameters::default())
        .expect("Light0 exists");

    assert!(lines_at(Level::Warn).is_empty());
}
