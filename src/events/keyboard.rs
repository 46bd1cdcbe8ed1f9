use crate::constants::LOCK_HINT_ID;
use crate::dom;
use orbit_core::{CameraLock, DragTracker, OrbitCamera};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

pub fn lock_hint(camera: &OrbitCamera) -> String {
    let state = |locked: bool| if locked { "locked" } else { "free" };
    format!(
        "yaw {} (X) · pitch {} (Y)",
        state(camera.lock_yaw),
        state(camera.lock_pitch)
    )
}

pub fn wire_global_keydown(
    document: &web::Document,
    tracker: Rc<RefCell<DragTracker<OrbitCamera>>>,
) {
    dom::set_text(document, LOCK_HINT_ID, &lock_hint(tracker.borrow().sink()));

    let doc = document.clone();
    let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::KeyboardEvent| {
        if ev.repeat() {
            return;
        }
        if let Some(lock) = CameraLock::from_key(&ev.key()) {
            let mut t = tracker.borrow_mut();
            t.sink_mut().toggle_lock(lock);
            dom::set_text(&doc, LOCK_HINT_ID, &lock_hint(t.sink()));
        }
    }) as Box<dyn FnMut(_)>);
    if let Some(w) = web::window() {
        _ = w.add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
    }
    closure.forget();
}
