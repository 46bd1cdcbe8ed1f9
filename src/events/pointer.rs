use crate::input;
use orbit_core::{DragTracker, OrbitCamera};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

const POINTER_EVENTS: [&str; 4] = ["pointerdown", "pointermove", "pointerup", "pointercancel"];

/// Forward canvas pointer events to the drag tracker.
pub fn wire_input_handlers(
    canvas: &web::HtmlCanvasElement,
    tracker: Rc<RefCell<DragTracker<OrbitCamera>>>,
) {
    for name in POINTER_EVENTS {
        let canvas_for_handler = canvas.clone();
        let tracker = tracker.clone();
        let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::PointerEvent| {
            let Some(touch) = input::touch_event_from_pointer(&ev, &canvas_for_handler) else {
                return;
            };
            if ev.type_() == "pointerdown" {
                // Keep receiving moves and the release when the finger leaves the canvas
                _ = canvas_for_handler.set_pointer_capture(ev.pointer_id());
            }
            tracker.borrow_mut().handle_touch_event(touch);
            ev.prevent_default();
        }) as Box<dyn FnMut(_)>);
        _ = canvas.add_event_listener_with_callback(name, closure.as_ref().unchecked_ref());
        closure.forget();
    }
}
