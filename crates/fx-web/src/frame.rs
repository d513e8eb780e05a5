//! requestAnimationFrame loop with explicit cancellation.
//!
//! Every visual component drives its own loop; dropping the handle cancels
//! the pending callback, so no loop can outlive its owner.

use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

struct LoopInner {
    running: Cell<bool>,
    raf_id: Cell<Option<i32>>,
    closure: RefCell<Option<Closure<dyn FnMut()>>>,
}

impl LoopInner {
    fn schedule(self: &Rc<Self>) {
        if !self.running.get() {
            return;
        }
        let Some(window) = web::window() else {
            return;
        };
        let borrowed = self.closure.borrow();
        let Some(closure) = borrowed.as_ref() else {
            return;
        };
        match window.request_animation_frame(closure.as_ref().unchecked_ref()) {
            Ok(id) => self.raf_id.set(Some(id)),
            Err(e) => log::error!("[frame] requestAnimationFrame failed: {:?}", e),
        }
    }
}

/// Handle to a running animation loop; dropping it stops the loop.
pub struct AnimationLoop {
    inner: Rc<LoopInner>,
}

impl AnimationLoop {
    /// Start calling `tick` once per animation frame until stopped.
    pub fn start(mut tick: impl FnMut() + 'static) -> Self {
        let inner = Rc::new(LoopInner {
            running: Cell::new(true),
            raf_id: Cell::new(None),
            closure: RefCell::new(None),
        });
        let inner_tick = inner.clone();
        *inner.closure.borrow_mut() = Some(Closure::wrap(Box::new(move || {
            inner_tick.raf_id.set(None);
            if !inner_tick.running.get() {
                return;
            }
            tick();
            inner_tick.schedule();
        }) as Box<dyn FnMut()>));
        inner.schedule();
        Self { inner }
    }

    /// Cancel the pending callback and release the closure.
    ///
    /// Must not be called from inside the tick callback itself.
    pub fn stop(&self) {
        self.inner.running.set(false);
        if let Some(id) = self.inner.raf_id.take() {
            if let Some(window) = web::window() {
                _ = window.cancel_animation_frame(id);
            }
        }
        if let Ok(mut slot) = self.inner.closure.try_borrow_mut() {
            *slot = None;
        }
    }
}

impl Drop for AnimationLoop {
    fn drop(&mut self) {
        self.stop();
    }
}
