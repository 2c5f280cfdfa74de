use crate::core::portrait::{coords_label, readout, COORDS_RESET};
use crate::core::ParticleField;
use crate::dom;
use crate::input;
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

/// Window-wide pointer moves retarget the field's tracked cursor.
pub fn wire_field_cursor(canvas: &web::HtmlCanvasElement, field: Rc<RefCell<ParticleField>>) {
    let Some(window) = web::window() else {
        return;
    };
    let canvas = canvas.clone();
    dom::add_mouse_listener(&window, "mousemove", move |ev| {
        let (x, y) = input::pointer_canvas_px(&ev, &canvas);
        field.borrow_mut().cursor_mut().set_target(x, y);
    });
}

/// Coordinate readout over the ASCII viewport. The enclosing terminal, when
/// present, also reports positions while the pointer is inside the viewport.
pub fn wire_readout(viewport: &web::Element, terminal: Option<&web::Element>, coords: &web::Element) {
    {
        let viewport_el = viewport.clone();
        let coords = coords.clone();
        dom::add_mouse_listener(viewport, "mousemove", move |ev| {
            let (x, y, _) = input::pointer_in_element(&ev, &viewport_el);
            coords.set_text_content(Some(&coords_label(x, y)));
        });
    }
    {
        let coords = coords.clone();
        dom::add_mouse_listener(viewport, "mouseleave", move |_| {
            coords.set_text_content(Some(COORDS_RESET));
        });
    }
    if let Some(terminal) = terminal {
        let viewport_el = viewport.clone();
        let coords = coords.clone();
        dom::add_mouse_listener(terminal, "mousemove", move |ev| {
            let (x, y, rect) = input::pointer_in_element(&ev, &viewport_el);
            if let Some(label) = readout(x, y, rect.width(), rect.height()) {
                coords.set_text_content(Some(&label));
            }
        });
    }
}
