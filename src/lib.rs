#![cfg(target_arch = "wasm32")]
use crate::core::{FieldParams, ParticleField};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys as web;

mod audio;
mod constants;
mod core;
mod dom;
mod events;
mod frame;
mod hud;
mod input;
mod panel;
mod portrait;
mod render;
mod voice;

const BANNER: &str = r"
    ╔════════════════════════════════════════╗
    ║   ART_PROTO PORTFOLIO SYSTEM v2.0      ║
    ║   Status: ONLINE                       ║
    ║   Mode: RETRO TECH-NOIR                ║
    ╚════════════════════════════════════════╝";

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("art-proto-web starting");

    if let Err(e) = init() {
        log::error!("init error: {:?}", e);
    }
    Ok(())
}

fn init() -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;

    // Each component is optional; a missing element only disables that piece.
    if let Err(e) = start_background(&document) {
        log::warn!("[field] background disabled: {:?}", e);
    }
    match document.get_element_by_id(constants::TIMECODE_ID) {
        Some(el) => hud::wire_timecode(el),
        None => log::warn!("[hud] #{} not found", constants::TIMECODE_ID),
    }
    portrait::wire(&document);
    if voice::wire(&document).is_none() {
        log::warn!("[voice] #{} not found", constants::VOICE_WIDGET_ID);
    }

    if let Some(body) = document.body() {
        _ = body.class_list().add_1("loaded");
    }
    log::info!("{}", BANNER);
    Ok(())
}

fn start_background(document: &web::Document) -> anyhow::Result<()> {
    let canvas: web::HtmlCanvasElement = document
        .get_element_by_id(constants::BG_CANVAS_ID)
        .ok_or_else(|| anyhow::anyhow!("missing #{}", constants::BG_CANVAS_ID))?
        .dyn_into::<web::HtmlCanvasElement>()
        .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;
    let surface = render::Surface::new(canvas.clone())?;

    let (w, h) = dom::fit_canvas_to_window(&canvas);
    let field = Rc::new(RefCell::new(ParticleField::new(
        FieldParams::default(),
        w as f32,
        h as f32,
        StdRng::from_entropy(),
    )));
    log::info!(
        "[field] {}x{} canvas, {} particles",
        w,
        h,
        field.borrow().particles().len()
    );

    events::wire_field_resize(&canvas, field.clone());
    events::wire_field_cursor(&canvas, field.clone());

    let mut frame_ctx = frame::FieldFrame { surface, field };
    frame::start_loop(move || frame_ctx.frame()).detach();
    Ok(())
}
