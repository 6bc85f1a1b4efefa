//! WebAssembly entry point and platform-specific code.

use std::cell::Cell;
use std::rc::Rc;

use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use winit::window::{Window, WindowAttributes};

use crate::app::{AppConfig, AppError};
use crate::event_handler::GLOBAL_RELEASE_EVENTS;

/// Release listeners on the browser window, alive for as long as this value.
///
/// The canvas only sees releases that happen over it; these catch the rest.
pub struct GlobalReleaseListener {
    window: web_sys::Window,
    callback: Closure<dyn FnMut(web_sys::Event)>,
    released: Rc<Cell<bool>>,
}

impl GlobalReleaseListener {
    /// Register the listeners on the current browser window.
    pub fn register() -> Result<Self, JsValue> {
        let window = web_sys::window().ok_or_else(|| JsValue::from_str("No window"))?;
        let released = Rc::new(Cell::new(false));
        let flag = released.clone();
        let callback = Closure::<dyn FnMut(web_sys::Event)>::new(move |_event: web_sys::Event| {
            flag.set(true);
        });

        // On a partial failure, dropping `listener` removes whatever was added
        let listener = Self {
            window,
            callback,
            released,
        };
        for name in GLOBAL_RELEASE_EVENTS {
            listener
                .window
                .add_event_listener_with_callback(name, listener.callback.as_ref().unchecked_ref())?;
        }
        log::debug!("Registered global release listeners");
        Ok(listener)
    }

    /// Whether a release happened since the last call.
    pub fn take_release(&self) -> bool {
        self.released.replace(false)
    }
}

impl Drop for GlobalReleaseListener {
    fn drop(&mut self) {
        for name in GLOBAL_RELEASE_EVENTS {
            if let Err(e) = self
                .window
                .remove_event_listener_with_callback(name, self.callback.as_ref().unchecked_ref())
            {
                log::warn!("Failed to remove {} listener: {:?}", name, e);
            }
        }
        log::debug!("Removed global release listeners");
    }
}

/// Browser viewport size in physical pixels.
pub fn viewport_physical_size(config: &AppConfig) -> Result<(u32, u32), AppError> {
    let web_window = web_sys::window().ok_or_else(|| AppError::Platform("No window".into()))?;
    let dpr = web_window.device_pixel_ratio();
    let width = web_window
        .inner_width()
        .ok()
        .and_then(|v| v.as_f64())
        .unwrap_or(config.width as f64);
    let height = web_window
        .inner_height()
        .ok()
        .and_then(|v| v.as_f64())
        .unwrap_or(config.height as f64);
    Ok(((width * dpr) as u32, (height * dpr) as u32))
}

/// Window attributes bound to a full-viewport canvas in the page.
pub fn window_attributes(config: &AppConfig) -> Result<WindowAttributes, AppError> {
    use winit::platform::web::WindowAttributesExtWebSys;

    let web_window = web_sys::window().ok_or_else(|| AppError::Platform("No window".into()))?;
    let document = web_window
        .document()
        .ok_or_else(|| AppError::Platform("No document".into()))?;

    if let Some(loading) = document.get_element_by_id("loading") {
        loading.remove();
    }

    let canvas = document
        .get_element_by_id("dkexplorer-canvas")
        .and_then(|e| e.dyn_into::<web_sys::HtmlCanvasElement>().ok())
        .or_else(|| {
            let container = document.get_element_by_id("app").or_else(|| document.body().map(Into::into))?;
            let canvas = document.create_element("canvas").ok()?;
            canvas.set_id("dkexplorer-canvas");
            container.append_child(&canvas).ok()?;
            canvas.dyn_into::<web_sys::HtmlCanvasElement>().ok()
        })
        .ok_or_else(|| AppError::Platform("Failed to create canvas".into()))?;

    let (width, height) = viewport_physical_size(config)?;
    canvas.set_width(width);
    canvas.set_height(height);
    let style = canvas.style();
    for (property, value) in [
        ("width", "100%"),
        ("height", "100%"),
        ("display", "block"),
        ("position", "fixed"),
        ("top", "0"),
        ("left", "0"),
        ("touch-action", "none"),
    ] {
        let _ = style.set_property(property, value);
    }
    log::info!("Canvas created: {}x{} physical", width, height);

    Ok(Window::default_attributes()
        .with_title(&config.title)
        .with_canvas(Some(canvas)))
}

/// Initialize and run the WASM application.
#[wasm_bindgen(start)]
pub async fn run_wasm() -> Result<(), JsValue> {
    // Set up panic hook for better error messages
    console_error_panic_hook::set_once();

    console_log::init_with_level(log::Level::Info)
        .map_err(|e| JsValue::from_str(&format!("Failed to initialize logger: {}", e)))?;

    log::info!("Starting Dunning-Kruger explorer (WASM)");

    crate::App::run()
        .await
        .map_err(|e| JsValue::from_str(&e.to_string()))
}
