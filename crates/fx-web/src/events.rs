//! Input wiring: single producer for the pointer, ripples, and mode state.

use crate::dom::EventListener;
use fx_core::{PointerState, RippleField, SceneContext, TitleRect};
use glam::Vec2;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Cross-component shared state, single-writer / many-reader by construction.
#[derive(Clone)]
pub struct SharedState {
    pub scene: Rc<RefCell<SceneContext>>,
    pub pointer: Rc<RefCell<PointerState>>,
    pub ripples: Rc<RefCell<RippleField>>,
}

impl SharedState {
    pub fn new() -> Self {
        Self {
            scene: Rc::new(RefCell::new(SceneContext::default())),
            pointer: Rc::new(RefCell::new(PointerState::default())),
            ripples: Rc::new(RefCell::new(RippleField::default())),
        }
    }
}

impl Default for SharedState {
    fn default() -> Self {
        Self::new()
    }
}

fn event_client_pos(ev: &web::Event) -> Option<Vec2> {
    let mouse = ev.dyn_ref::<web::MouseEvent>()?;
    Some(Vec2::new(mouse.client_x() as f32, mouse.client_y() as f32))
}

/// Pointer position and click ripples, tracked window-wide.
pub fn wire_pointer(shared: &SharedState) -> Vec<EventListener> {
    let mut listeners = Vec::with_capacity(2);

    let pointer = shared.pointer.clone();
    listeners.extend(EventListener::on_window("pointermove", move |ev| {
        if let Some(pos) = event_client_pos(&ev) {
            pointer.borrow_mut().set(pos.x, pos.y);
        }
    }));

    let ripples = shared.ripples.clone();
    listeners.extend(EventListener::on_window("click", move |ev| {
        if let Some(pos) = event_client_pos(&ev) {
            ripples.borrow_mut().spawn(pos);
        }
    }));

    listeners
}

fn measure_title(title: &web::Element) -> TitleRect {
    let rect = title.get_bounding_client_rect();
    TitleRect {
        left: rect.left() as f32,
        top: rect.top() as f32,
        width: rect.width() as f32,
        height: rect.height() as f32,
    }
}

/// Title hover toggles focus mode, title click while focused re-rolls the
/// tracked frames, and resize/scroll keep the measured rectangle current.
pub fn wire_title(
    shared: &SharedState,
    title: &web::Element,
    on_focus_change: Rc<dyn Fn(bool)>,
) -> Vec<EventListener> {
    shared
        .scene
        .borrow_mut()
        .set_title_rect(measure_title(title));

    let target: web::EventTarget = title.clone().into();
    let mut listeners = Vec::with_capacity(5);

    {
        let scene = shared.scene.clone();
        let on_focus = on_focus_change.clone();
        listeners.push(EventListener::new(&target, "pointerenter", move |_| {
            scene.borrow_mut().set_focus(true);
            on_focus(true);
        }));
    }
    {
        let scene = shared.scene.clone();
        let on_focus = on_focus_change.clone();
        listeners.push(EventListener::new(&target, "pointerleave", move |_| {
            scene.borrow_mut().set_focus(false);
            on_focus(false);
        }));
    }
    {
        let scene = shared.scene.clone();
        listeners.push(EventListener::new(&target, "click", move |_| {
            let mut scene = scene.borrow_mut();
            if scene.focus_active {
                scene.reassign.trigger();
                log::info!("[mode] reassign triggered by title click");
            }
        }));
    }

    for event in ["resize", "scroll"] {
        let scene = shared.scene.clone();
        let title = title.clone();
        listeners.extend(EventListener::on_window(event, move |_| {
            scene.borrow_mut().set_title_rect(measure_title(&title));
        }));
    }

    listeners
}
