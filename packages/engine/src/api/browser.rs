//! Browser runner
//!
//! Acquires a canvas, sizes it to the viewport, and drives a `LifeCore`
//! from `requestAnimationFrame`. Everything runs on the main thread: the
//! frame and resize callbacks each hold the runner borrow for exactly one
//! callback, so a resize can never land in the middle of a step.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, Window};

use crate::domain::config::LifeConfig;
use crate::render::canvas::Canvas2dSurface;
use crate::simulation::LifeCore;

type FrameCallback = Closure<dyn FnMut(f64)>;

struct Runner {
    core: LifeCore,
    surface: Canvas2dSurface,
}

impl Runner {
    fn on_frame(&mut self, now_ms: f64) {
        if !self.core.frame(now_ms) {
            return;
        }
        if let Err(e) = self.core.paint_to(&mut self.surface) {
            console_log!("life: paint failed: {}", e);
        }
    }

    fn on_resize(&mut self, width: f64, height: f64) {
        self.surface.set_size(width as u32, height as u32);
        self.core.on_resize(width, height);
    }
}

/// Returned by `start`; stops the loop on request.
#[wasm_bindgen]
pub struct LoopHandle {
    running: Rc<Cell<bool>>,
}

#[wasm_bindgen]
impl LoopHandle {
    /// Stop re-arming the frame callback and ignore further resizes
    pub fn stop(&self) {
        if self.running.replace(false) {
            console_log!("life: loop stopped");
        }
    }

    #[wasm_bindgen(getter)]
    pub fn running(&self) -> bool {
        self.running.get()
    }
}

/// Start the automaton on the canvas with id `canvas_id`, default config
#[wasm_bindgen]
pub fn start(canvas_id: &str) -> Result<LoopHandle, JsValue> {
    start_with_config(canvas_id, LifeConfig::default())
}

#[wasm_bindgen(js_name = startWithConfigJson)]
pub fn start_with_config_json(canvas_id: &str, json: &str) -> Result<LoopHandle, JsValue> {
    let config = LifeConfig::from_json(json).map_err(|e| JsValue::from_str(&e))?;
    start_with_config(canvas_id, config)
}

pub fn start_with_config(canvas_id: &str, config: LifeConfig) -> Result<LoopHandle, JsValue> {
    let window = global_window()?;
    let (canvas, ctx) = acquire_canvas(&window, canvas_id)?;
    let (width, height) = viewport_size(&window);

    let mut surface = Canvas2dSurface::new(canvas, ctx);
    surface.set_size(width as u32, height as u32);
    let core = LifeCore::with_config(config, width, height);
    console_log!("life: started {}x{} cells on #{}", core.rows(), core.cols(), canvas_id);

    let runner = Rc::new(RefCell::new(Runner { core, surface }));
    let running = Rc::new(Cell::new(true));

    subscribe_resize(&window, runner.clone(), running.clone())?;
    drive_frames(runner, running.clone())?;

    Ok(LoopHandle { running })
}

fn global_window() -> Result<Window, JsValue> {
    web_sys::window().ok_or_else(|| JsValue::from_str("no global window"))
}

fn acquire_canvas(
    window: &Window,
    canvas_id: &str,
) -> Result<(HtmlCanvasElement, CanvasRenderingContext2d), JsValue> {
    let document = window
        .document()
        .ok_or_else(|| JsValue::from_str("window has no document"))?;
    let canvas = document
        .get_element_by_id(canvas_id)
        .ok_or_else(|| JsValue::from_str(&format!("no element with id '{}'", canvas_id)))?
        .dyn_into::<HtmlCanvasElement>()?;
    let ctx = canvas
        .get_context("2d")?
        .ok_or_else(|| JsValue::from_str("2d context unavailable"))?
        .dyn_into::<CanvasRenderingContext2d>()?;
    Ok((canvas, ctx))
}

fn viewport_size(window: &Window) -> (f64, f64) {
    let width = window.inner_width().ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
    let height = window.inner_height().ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
    (width, height)
}

fn subscribe_resize(
    window: &Window,
    runner: Rc<RefCell<Runner>>,
    running: Rc<Cell<bool>>,
) -> Result<(), JsValue> {
    let on_resize = Closure::<dyn FnMut()>::new(move || {
        if !running.get() {
            return;
        }
        let Ok(window) = global_window() else {
            return;
        };
        let (width, height) = viewport_size(&window);
        runner.borrow_mut().on_resize(width, height);
    });
    window.add_event_listener_with_callback("resize", on_resize.as_ref().unchecked_ref())?;
    // Lives as long as the page.
    on_resize.forget();
    Ok(())
}

fn request_animation_frame(callback: &FrameCallback) -> Result<i32, JsValue> {
    global_window()?.request_animation_frame(callback.as_ref().unchecked_ref())
}

/// Self re-arming frame callback. Each invocation explicitly requests the
/// next one; once `running` is cleared the closure drops itself.
fn drive_frames(runner: Rc<RefCell<Runner>>, running: Rc<Cell<bool>>) -> Result<(), JsValue> {
    let slot: Rc<RefCell<Option<FrameCallback>>> = Rc::new(RefCell::new(None));
    let rearm = slot.clone();

    *slot.borrow_mut() = Some(Closure::<dyn FnMut(f64)>::new(move |now_ms: f64| {
        if !running.get() {
            let _ = rearm.borrow_mut().take();
            return;
        }

        runner.borrow_mut().on_frame(now_ms);

        if let Some(callback) = rearm.borrow().as_ref() {
            if let Err(e) = request_animation_frame(callback) {
                console_log!("life: requestAnimationFrame failed: {:?}", e);
            }
        }
    }));

    let first = slot.borrow();
    let callback = first
        .as_ref()
        .ok_or_else(|| JsValue::from_str("frame callback missing"))?;
    request_animation_frame(callback)?;
    Ok(())
}
