use glam::Vec2;
use orbit_core::{TouchEvent, TouchKind};
use web_sys as web;

#[inline]
pub fn kind_for_pointer_event(event_type: &str) -> Option<TouchKind> {
    match event_type {
        "pointerdown" => Some(TouchKind::Press),
        "pointermove" => Some(TouchKind::Move),
        "pointerup" => Some(TouchKind::Release),
        "pointercancel" => Some(TouchKind::Cancel),
        _ => None,
    }
}

/// Map a CSS-pixel offset inside the canvas rect to backing-store pixels.
#[inline]
pub fn css_to_canvas_px(
    x_css: f32,
    y_css: f32,
    rect_w: f32,
    rect_h: f32,
    canvas_w: f32,
    canvas_h: f32,
) -> Vec2 {
    if rect_w > 0.0 && rect_h > 0.0 {
        Vec2::new(x_css / rect_w * canvas_w, y_css / rect_h * canvas_h)
    } else {
        Vec2::new(x_css, y_css)
    }
}

// ---------------- Pointer helpers ----------------
#[inline]
pub fn pointer_canvas_px(ev: &web::PointerEvent, canvas: &web::HtmlCanvasElement) -> Vec2 {
    let rect = canvas.get_bounding_client_rect();
    css_to_canvas_px(
        ev.client_x() as f32 - rect.left() as f32,
        ev.client_y() as f32 - rect.top() as f32,
        rect.width() as f32,
        rect.height() as f32,
        canvas.width() as f32,
        canvas.height() as f32,
    )
}

/// Touch event for a pointer event, or `None` when it should not drive the drag.
///
/// Only the primary pointer is tracked, and a press must come from the main
/// button (`button == 0`, which is also what touch and pen contacts report).
#[inline]
pub fn touch_event_for(
    event_type: &str,
    is_primary: bool,
    button: i16,
    position: Vec2,
) -> Option<TouchEvent> {
    if !is_primary {
        return None;
    }
    let kind = kind_for_pointer_event(event_type)?;
    if kind == TouchKind::Press && button != 0 {
        return None;
    }
    Some(TouchEvent { kind, position })
}

pub fn touch_event_from_pointer(
    ev: &web::PointerEvent,
    canvas: &web::HtmlCanvasElement,
) -> Option<TouchEvent> {
    touch_event_for(
        &ev.type_(),
        ev.is_primary(),
        ev.button(),
        pointer_canvas_px(ev, canvas),
    )
}
