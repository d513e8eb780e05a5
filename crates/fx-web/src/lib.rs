#![cfg(target_arch = "wasm32")]
//! Entry point: wires the force grid, the shared mode state, and the
//! focus-mode particle visualizer to the host page.
//!
//! The page provides two full-viewport canvases and the title element; all
//! biography/project content belongs to the page, not to this crate.

use instant::Instant;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

mod constants;
mod dom;
mod events;
mod frame;
mod grid_view;
mod render;
mod visualizer;

use constants::*;
use events::SharedState;
use fx_core::ActivationState;
use frame::AnimationLoop;
use grid_view::GridView;
use visualizer::Visualizer;

/// A running visualizer; dropping it cancels its loop.
struct ActiveVisualizer {
    _raf: AnimationLoop,
}

/// Everything the effects layer owns. Dropped on [`shutdown`], which removes
/// every listener and cancels every animation callback.
struct App {
    _listeners: Vec<dom::EventListener>,
    _grid_raf: AnimationLoop,
    _visualizer: Rc<RefCell<Option<ActiveVisualizer>>>,
}

thread_local! {
    static APP: RefCell<Option<App>> = const { RefCell::new(None) };
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("fx-web starting");

    if let Err(e) = init() {
        log::error!("init error: {:?}", e);
    }
    Ok(())
}

/// Drop all listeners and loops. Safe to call more than once.
#[wasm_bindgen]
pub fn shutdown() {
    APP.with(|app| {
        if app.borrow_mut().take().is_some() {
            log::info!("fx-web shut down");
        }
    });
}

fn get_canvas(document: &web::Document, id: &str) -> anyhow::Result<web::HtmlCanvasElement> {
    document
        .get_element_by_id(id)
        .ok_or_else(|| anyhow::anyhow!("missing #{id}"))?
        .dyn_into::<web::HtmlCanvasElement>()
        .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))
}

fn init() -> anyhow::Result<()> {
    let document = dom::window_document().ok_or_else(|| anyhow::anyhow!("no document"))?;

    let grid_canvas = get_canvas(&document, GRID_CANVAS_ID)?;
    let shared = SharedState::new();
    let mut listeners = events::wire_pointer(&shared);

    // Force grid layer, alive for the page lifetime.
    let grid = Rc::new(RefCell::new(GridView::new(grid_canvas)?));
    {
        let grid = grid.clone();
        listeners.extend(dom::EventListener::on_window("resize", move |_| {
            grid.borrow_mut().resize();
        }));
    }
    let grid_raf = {
        let grid = grid.clone();
        let shared = shared.clone();
        let started = Instant::now();
        AnimationLoop::start(move || {
            shared.ripples.borrow_mut().tick();
            let pointer = *shared.pointer.borrow();
            let ripples = shared.ripples.borrow();
            let scene = shared.scene.borrow();
            grid.borrow_mut().frame(
                &pointer,
                ripples.live(),
                &scene,
                started.elapsed().as_secs_f32(),
            );
        })
    };

    // Focus mode: hovering the title swaps in the particle visualizer.
    let visualizer_slot: Rc<RefCell<Option<ActiveVisualizer>>> = Rc::new(RefCell::new(None));
    match (
        document.get_element_by_id(TITLE_ID),
        get_canvas(&document, VISUALIZER_CANVAS_ID),
    ) {
        (Some(title), Ok(vis_canvas)) => {
            let slot = visualizer_slot.clone();
            let shared_for_focus = shared.clone();
            let activation = Rc::new(RefCell::new(ActivationState::default()));
            let on_focus: Rc<dyn Fn(bool)> = Rc::new(move |active| {
                if active {
                    // Hover flicker re-arms a pending init instead of
                    // racing a second one against it.
                    if activation.borrow_mut().request() {
                        spawn_local(activate_visualizer(
                            activation.clone(),
                            slot.clone(),
                            vis_canvas.clone(),
                            shared_for_focus.clone(),
                        ));
                    }
                } else if activation.borrow_mut().release() {
                    // Drops the loop, cancelling its pending callback.
                    slot.borrow_mut().take();
                }
            });
            listeners.extend(events::wire_title(&shared, &title, on_focus));
        }
        _ => {
            // Degraded page: grid only, no focus mode.
            log::info!("[init] title or visualizer canvas missing; focus mode disabled");
        }
    }

    APP.with(|app| {
        *app.borrow_mut() = Some(App {
            _listeners: listeners,
            _grid_raf: grid_raf,
            _visualizer: visualizer_slot,
        });
    });
    Ok(())
}

async fn activate_visualizer(
    activation: Rc<RefCell<ActivationState>>,
    slot: Rc<RefCell<Option<ActiveVisualizer>>>,
    canvas: web::HtmlCanvasElement,
    shared: SharedState,
) {
    let vis = match Visualizer::new(canvas, FRAME_TRACKER_SEED).await {
        Ok(v) => v,
        Err(e) => {
            log::error!("WebGPU init error: {:?}", e);
            activation.borrow_mut().fail();
            return;
        }
    };
    // Hover may have ended while the adapter was being acquired.
    if !activation.borrow_mut().complete() {
        log::info!("[visualizer] focus left during init; discarding");
        return;
    }
    let vis = Rc::new(RefCell::new(vis));
    let raf = AnimationLoop::start(move || {
        let scene = shared.scene.borrow();
        vis.borrow_mut().frame(&scene);
    });
    *slot.borrow_mut() = Some(ActiveVisualizer { _raf: raf });
}
