use crate::core::ParticleField;
use crate::dom;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Keep the background canvas at window size; every resize rebuilds the grid.
pub fn wire_field_resize(canvas: &web::HtmlCanvasElement, field: Rc<RefCell<ParticleField>>) {
    let Some(window) = web::window() else {
        return;
    };
    let canvas = canvas.clone();
    let closure = Closure::wrap(Box::new(move || {
        let (w, h) = dom::fit_canvas_to_window(&canvas);
        field.borrow_mut().resize(w as f32, h as f32);
        log::debug!("[field] resized to {}x{}", w, h);
    }) as Box<dyn FnMut()>);
    _ = window.add_event_listener_with_callback("resize", closure.as_ref().unchecked_ref());
    closure.forget();
}
