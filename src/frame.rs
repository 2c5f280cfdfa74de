use crate::core::{self, ParticleField, SessionAdapter};
use crate::render::{self, Surface};
use crate::voice::JsSession;
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Per-tick state for the background particle field.
pub struct FieldFrame {
    pub surface: Surface,
    pub field: Rc<RefCell<ParticleField>>,
}

impl FieldFrame {
    pub fn frame(&mut self) {
        let mut field = self.field.borrow_mut();
        field.tick();
        render::paint_field(&self.surface, &field);
        if let Err(e) = render::paint_static(&self.surface, &mut field) {
            log::warn!("[field] static pass skipped: {:?}", e);
        }
    }
}

/// Per-tick state for the voice spectrum visualizer.
pub struct SpectrumFrame {
    pub surface: Surface,
    pub adapter: Rc<RefCell<SessionAdapter<JsSession>>>,
}

impl SpectrumFrame {
    pub fn frame(&mut self) {
        let (outbound, inbound) = self.adapter.borrow().spectrum_frame();
        let selection = core::select(outbound.as_deref(), inbound.as_deref());
        let t_sec = js_sys::Date::now() / 1000.0;
        render::paint_bars(&self.surface, selection, t_sec);
    }
}

type TickSlot = Rc<RefCell<Option<Closure<dyn FnMut()>>>>;

/// Handle to a running `requestAnimationFrame` loop.
pub struct FrameLoop {
    tick: TickSlot,
    pending: Rc<Cell<Option<i32>>>,
    running: Rc<Cell<bool>>,
}

impl FrameLoop {
    /// Cancel the pending frame and release the loop closure. Must not be
    /// called from inside the loop's own callback.
    pub fn stop(&self) {
        self.running.set(false);
        if let (Some(id), Some(w)) = (self.pending.take(), web::window()) {
            _ = w.cancel_animation_frame(id);
        }
        self.tick.borrow_mut().take();
    }

    /// Keep the loop running for the rest of the page; it can no longer be
    /// stopped.
    pub fn detach(self) {
        std::mem::forget(self);
    }
}

fn request_frame(tick: &TickSlot) -> Option<i32> {
    let slot = tick.borrow();
    let closure = slot.as_ref()?;
    web::window()?
        .request_animation_frame(closure.as_ref().unchecked_ref())
        .ok()
}

pub fn start_loop(mut on_frame: impl FnMut() + 'static) -> FrameLoop {
    let tick: TickSlot = Rc::new(RefCell::new(None));
    let pending = Rc::new(Cell::new(None));
    let running = Rc::new(Cell::new(true));

    let tick_clone = tick.clone();
    let pending_clone = pending.clone();
    let running_clone = running.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        pending_clone.set(None);
        if !running_clone.get() {
            return;
        }
        on_frame();
        pending_clone.set(request_frame(&tick_clone));
    }) as Box<dyn FnMut()>));
    pending.set(request_frame(&tick));

    FrameLoop {
        tick,
        pending,
        running,
    }
}
