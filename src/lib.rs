use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::prelude::*;
use web_sys::{HtmlCanvasElement, WebGl2RenderingContext};

pub mod animation;
pub mod config;
pub mod error;
pub mod math;
pub mod mesh;
pub mod noise;
pub mod render;

use animation::{FrameClock, OrbitCamera};
use config::SceneConfig;
use error::DemoError;
use render::ScenePipeline;

/// Initialize panic hook and console logger
#[wasm_bindgen(start)]
pub fn init() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();

    if console_log::init_with_level(log::Level::Info).is_err() {
        web_sys::console::warn_1(&"Logger already initialized".into());
    }
}

fn aspect_ratio(width: i32, height: i32) -> f32 {
    if height > 0 {
        width as f32 / height as f32
    } else {
        1.0
    }
}

/// Demo state exposed to JavaScript
#[wasm_bindgen]
pub struct FragDepthDemo {
    pipeline: ScenePipeline,
    camera: OrbitCamera,
    clock: Option<FrameClock>,
    elapsed: f32,
}

#[wasm_bindgen]
impl FragDepthDemo {
    /// Create a demo with the stock scene
    #[wasm_bindgen(constructor)]
    pub fn new(canvas: HtmlCanvasElement) -> Result<FragDepthDemo, JsValue> {
        Self::build(canvas, SceneConfig::default()).map_err(JsValue::from)
    }

    /// Create a demo from a YAML scene config
    #[wasm_bindgen]
    pub fn with_config(canvas: HtmlCanvasElement, yaml: &str) -> Result<FragDepthDemo, JsValue> {
        let config = SceneConfig::from_yaml(yaml)?;
        Self::build(canvas, config).map_err(JsValue::from)
    }

    fn build(canvas: HtmlCanvasElement, config: SceneConfig) -> Result<FragDepthDemo, DemoError> {
        let width = canvas.width() as i32;
        let height = canvas.height() as i32;

        let gl = canvas
            .get_context("webgl2")?
            .ok_or_else(|| DemoError::ContextUnavailable("getContext returned null".into()))?
            .dyn_into::<WebGl2RenderingContext>()
            .map_err(|_| DemoError::ContextUnavailable("not a WebGL2 context".into()))?;

        let pipeline = ScenePipeline::new(gl, &config).map_err(|e| {
            log::error!("Scene setup failed: {}", e);
            e
        })?;
        let camera = OrbitCamera::new(aspect_ratio(width, height), &config);

        log::info!("FragDepthDemo initialized at {}x{}", width, height);

        Ok(Self {
            pipeline,
            camera,
            clock: None,
            elapsed: 0.0,
        })
    }

    /// Render a frame for a host timestamp in milliseconds. The first call
    /// marks time zero.
    #[wasm_bindgen]
    pub fn render(&mut self, now_ms: f64) {
        let clock = self.clock.get_or_insert_with(|| FrameClock::new(now_ms));
        let elapsed = clock.elapsed(now_ms);
        self.render_at(elapsed);
    }

    /// Render a frame for an explicit elapsed time in seconds
    #[wasm_bindgen]
    pub fn render_at(&mut self, elapsed: f32) {
        self.elapsed = elapsed;
        let frame = self.camera.frame(elapsed);
        self.pipeline.draw(&frame);
    }

    /// Seconds of the last rendered frame
    #[wasm_bindgen]
    pub fn elapsed(&self) -> f32 {
        self.elapsed
    }

    /// Resize the viewport and projection
    #[wasm_bindgen]
    pub fn resize(&mut self, width: i32, height: i32) {
        log::debug!("Resize to {}x{}", width, height);
        self.pipeline.resize(width, height);
        self.camera.set_aspect(aspect_ratio(width, height));
    }
}

fn window() -> Result<web_sys::Window, DemoError> {
    web_sys::window().ok_or_else(|| DemoError::Js("no global window".into()))
}

fn request_animation_frame(f: &Closure<dyn FnMut(f64)>) -> Result<i32, DemoError> {
    Ok(window()?.request_animation_frame(f.as_ref().unchecked_ref())?)
}

/// Look up `canvas_id` and drive the demo from `requestAnimationFrame`
/// until the page is torn down.
#[wasm_bindgen]
pub fn run(canvas_id: &str) -> Result<(), JsValue> {
    let canvas = window()?
        .document()
        .ok_or_else(|| DemoError::Js("no document".into()))?
        .get_element_by_id(canvas_id)
        .ok_or_else(|| DemoError::Js(format!("no element with id '{}'", canvas_id)))?
        .dyn_into::<HtmlCanvasElement>()
        .map_err(|_| DemoError::Js(format!("'{}' is not a canvas", canvas_id)))?;

    let mut demo = FragDepthDemo::new(canvas)?;

    // The closure re-schedules itself, so it holds a handle to its own slot
    let slot: Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>> = Rc::new(RefCell::new(None));
    let next = slot.clone();

    *slot.borrow_mut() = Some(Closure::wrap(Box::new(move |now_ms: f64| {
        demo.render(now_ms);
        if let Some(callback) = next.borrow().as_ref() {
            if let Err(e) = request_animation_frame(callback) {
                log::error!("Animation loop stopped: {}", e);
            }
        }
    }) as Box<dyn FnMut(f64)>));

    if let Some(callback) = slot.borrow().as_ref() {
        request_animation_frame(callback)?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_aspect_ratio() {
        assert!((aspect_ratio(800, 600) - 4.0 / 3.0).abs() < 1e-6);
        assert_eq!(aspect_ratio(800, 0), 1.0);
    }
}
