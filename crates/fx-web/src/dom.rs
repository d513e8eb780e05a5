use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
pub fn window_document() -> Option<web::Document> {
    web::window().and_then(|w| w.document())
}

/// Viewport size in CSS pixels.
pub fn viewport_size() -> (f32, f32) {
    let Some(w) = web::window() else {
        return (0.0, 0.0);
    };
    let width = w.inner_width().ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
    let height = w
        .inner_height()
        .ok()
        .and_then(|v| v.as_f64())
        .unwrap_or(0.0);
    (width as f32, height as f32)
}

/// Size a canvas' backing store to the viewport in CSS pixels (2D path).
pub fn size_canvas_to_viewport(canvas: &web::HtmlCanvasElement) -> (f32, f32) {
    let (w, h) = viewport_size();
    canvas.set_width((w as u32).max(1));
    canvas.set_height((h as u32).max(1));
    (w, h)
}

/// Keep a canvas' backing store at CSS size * devicePixelRatio (GPU path).
pub fn sync_canvas_backing_size(canvas: &web::HtmlCanvasElement) {
    if let Some(w) = web::window() {
        let dpr = w.device_pixel_ratio();
        let rect = canvas.get_bounding_client_rect();
        let w_px = (rect.width() * dpr) as u32;
        let h_px = (rect.height() * dpr) as u32;
        canvas.set_width(w_px.max(1));
        canvas.set_height(h_px.max(1));
    }
}

/// An attached event listener that detaches itself on drop.
///
/// Dropping the guard removes the callback from the target, so a torn-down
/// component cannot leave listeners behind.
pub struct EventListener {
    target: web::EventTarget,
    event: &'static str,
    closure: Closure<dyn FnMut(web::Event)>,
}

impl EventListener {
    pub fn new(
        target: &web::EventTarget,
        event: &'static str,
        callback: impl FnMut(web::Event) + 'static,
    ) -> Self {
        let closure = Closure::wrap(Box::new(callback) as Box<dyn FnMut(web::Event)>);
        if target
            .add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())
            .is_err()
        {
            log::error!("[dom] failed to attach {event} listener");
        }
        Self {
            target: target.clone(),
            event,
            closure,
        }
    }

    /// Attach to the window; `None` when there is no window object.
    pub fn on_window(
        event: &'static str,
        callback: impl FnMut(web::Event) + 'static,
    ) -> Option<Self> {
        let window: web::EventTarget = web::window()?.into();
        Some(Self::new(&window, event, callback))
    }
}

impl Drop for EventListener {
    fn drop(&mut self) {
        _ = self
            .target
            .remove_event_listener_with_callback(self.event, self.closure.as_ref().unchecked_ref());
    }
}
