use crate::constants::*;
use crate::core::portrait::{roll_glitch, COORDS_RESET};
use crate::dom;
use crate::events;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Character-art portrait, shown verbatim.
pub static PORTRAIT: &str = include_str!("../assets/portrait.txt");

/// Fill the ASCII viewer, hook up the coordinate readout and the ambient
/// glitch timer. Missing elements leave the viewer inert.
pub fn wire(document: &web::Document) {
    let Some(portrait) = dom::element::<web::HtmlElement>(document, ASCII_PORTRAIT_ID) else {
        log::warn!("[portrait] #{} not found", ASCII_PORTRAIT_ID);
        return;
    };
    portrait.set_text_content(Some(PORTRAIT));

    let viewport = document.query_selector(ASCII_VIEWPORT_SELECTOR).ok().flatten();
    let coords = document.get_element_by_id(ASCII_COORDS_ID);
    match (viewport, coords) {
        (Some(viewport), Some(coords)) => {
            coords.set_text_content(Some(COORDS_RESET));
            let terminal = document.query_selector(ASCII_TERMINAL_SELECTOR).ok().flatten();
            events::wire_readout(&viewport, terminal.as_ref(), &coords);
        }
        _ => log::warn!("[portrait] viewport or coordinate readout missing"),
    }

    start_glitch_timer(portrait);
}

fn start_glitch_timer(portrait: web::HtmlElement) {
    let Some(window) = web::window() else {
        return;
    };
    let tick = Closure::wrap(Box::new(move || {
        let Some(glitch) = roll_glitch(&mut rand::thread_rng()) else {
            return;
        };
        let style = portrait.style();
        _ = style.set_property("color", glitch.color);
        _ = style.set_property("transform", &glitch.transform());

        let restore_target = portrait.clone();
        let restore = Closure::once_into_js(move || {
            let style = restore_target.style();
            _ = style.remove_property("color");
            _ = style.remove_property("transform");
        });
        if let Some(w) = web::window() {
            _ = w.set_timeout_with_callback_and_timeout_and_arguments_0(
                restore.unchecked_ref(),
                GLITCH_HOLD_MS,
            );
        }
    }) as Box<dyn FnMut()>);
    _ = window.set_interval_with_callback_and_timeout_and_arguments_0(
        tick.as_ref().unchecked_ref(),
        GLITCH_INTERVAL_MS,
    );
    tick.forget();
}
