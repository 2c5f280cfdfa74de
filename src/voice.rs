use crate::audio;
use crate::constants::*;
use crate::core::session::{Mode, TranscriptLine};
use crate::core::{SessionAdapter, SessionConfig, SessionError, SessionEvent, VoiceSession};
use crate::dom;
use crate::frame::{self, FrameLoop, SpectrumFrame};
use crate::panel;
use crate::render::{self, Surface};
use js_sys::{Function, Object, Promise, Reflect};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::{spawn_local, JsFuture};
use web_sys as web;

/// `Conversation` object returned by the voice SDK's `startSession`.
pub struct JsSession {
    inner: JsValue,
}

impl JsSession {
    fn method(&self, name: &str) -> Option<Function> {
        Reflect::get(&self.inner, &JsValue::from_str(name))
            .ok()
            .and_then(|f| f.dyn_into::<Function>().ok())
    }
}

impl VoiceSession for JsSession {
    fn end_session(&self) {
        let Some(f) = self.method("endSession") else {
            return;
        };
        match f.call0(&self.inner) {
            Ok(ret) => {
                if let Ok(promise) = ret.dyn_into::<Promise>() {
                    spawn_local(async move {
                        if let Err(e) = JsFuture::from(promise).await {
                            log::warn!("[voice] endSession rejected: {:?}", e);
                        }
                    });
                }
            }
            Err(e) => log::warn!("[voice] endSession failed: {:?}", e),
        }
    }

    fn set_mic_muted(&self, muted: bool) {
        if let Some(f) = self.method("setMicMuted") {
            _ = f.call1(&self.inner, &JsValue::from_bool(muted));
        }
    }

    fn output_frequency_data(&self) -> Option<Vec<u8>> {
        let f = self.method("getOutputByteFrequencyData")?;
        audio::byte_frequencies(f.call0(&self.inner).ok()?)
    }

    fn input_frequency_data(&self) -> Option<Vec<u8>> {
        let f = self.method("getInputByteFrequencyData")?;
        audio::byte_frequencies(f.call0(&self.inner).ok()?)
    }
}

/// Everything the widget callbacks need.
#[derive(Clone)]
pub struct VoiceWidget {
    document: web::Document,
    adapter: Rc<RefCell<SessionAdapter<JsSession>>>,
    visualizer: Option<Surface>,
    frame_loop: Rc<RefCell<Option<FrameLoop>>>,
    config: Rc<SessionConfig>,
    // transcript lines already in the DOM
    rendered_lines: Rc<RefCell<usize>>,
}

pub fn wire(document: &web::Document) -> Option<VoiceWidget> {
    let root = document.get_element_by_id(VOICE_WIDGET_ID)?;
    let config = SessionConfig::with_agent_id(root.get_attribute(AGENT_ID_ATTR).as_deref());

    let visualizer = dom::element::<web::HtmlCanvasElement>(document, VOICE_CANVAS_ID)
        .and_then(|c| match Surface::new(c) {
            Ok(s) => Some(s),
            Err(e) => {
                log::warn!("[voice] visualizer disabled: {:?}", e);
                None
            }
        });

    let widget = VoiceWidget {
        document: document.clone(),
        adapter: Rc::new(RefCell::new(SessionAdapter::new())),
        visualizer,
        frame_loop: Rc::new(RefCell::new(None)),
        config: Rc::new(config),
        rendered_lines: Rc::new(RefCell::new(0)),
    };

    let doc = document.clone();
    dom::add_click_listener(document, VOICE_TOGGLE_ID, move || panel::toggle(&doc));
    let doc = document.clone();
    dom::add_click_listener(document, VOICE_PANEL_CLOSE_ID, move || panel::hide(&doc));

    let w = widget.clone();
    dom::add_click_listener(document, VOICE_CALL_ID, move || w.start());
    let w = widget.clone();
    dom::add_click_listener(document, VOICE_END_ID, move || w.end());
    let w = widget.clone();
    dom::add_click_listener(document, VOICE_MUTE_ID, move || {
        w.adapter.borrow_mut().toggle_mute();
        w.render();
    });

    widget.render();
    log::info!("[voice] widget ready (agent {})", widget.config.agent_id);
    Some(widget)
}

impl VoiceWidget {
    pub fn start(&self) {
        if !self.adapter.borrow_mut().begin_start() {
            return;
        }
        self.render();
        let this = self.clone();
        spawn_local(async move {
            match this.connect().await {
                Ok(session) => this.adapter.borrow_mut().attach(session),
                Err(e) => this.adapter.borrow_mut().fail(&e),
            }
            this.render();
        });
    }

    pub fn end(&self) {
        if self.adapter.borrow_mut().end() {
            self.render();
        }
    }

    async fn connect(&self) -> Result<JsSession, SessionError> {
        let conversation = conversation_class().ok_or(SessionError::SdkUnavailable)?;
        log::info!("[voice] SDK loaded, requesting microphone");
        audio::request_microphone()
            .await
            .map_err(|_| SessionError::MicDenied)?;

        let start = Reflect::get(&conversation, &JsValue::from_str("startSession"))
            .ok()
            .and_then(|f| f.dyn_into::<Function>().ok())
            .ok_or(SessionError::SdkUnavailable)?;
        let options = self.session_options();
        let promise = start
            .call1(&conversation, &options)
            .map_err(|e| SessionError::Session(format!("{:?}", e)))?
            .dyn_into::<Promise>()
            .map_err(|_| SessionError::SdkUnavailable)?;
        let inner = JsFuture::from(promise)
            .await
            .map_err(|e| SessionError::Session(format!("{:?}", e)))?;
        Ok(JsSession { inner })
    }

    fn session_options(&self) -> Object {
        let options = Object::new();
        _ = Reflect::set(
            &options,
            &JsValue::from_str("agentId"),
            &JsValue::from_str(&self.config.agent_id),
        );

        self.set_callback(&options, "onConnect", |_| Some(SessionEvent::Connect));
        self.set_callback(&options, "onDisconnect", |_| Some(SessionEvent::Disconnect));
        self.set_callback(&options, "onModeChange", |v| {
            let mode = string_field(&v, "mode").unwrap_or_default();
            Some(SessionEvent::ModeChange(Mode::parse(&mode)))
        });
        self.set_callback(&options, "onMessage", |v| {
            if v.is_undefined() || v.is_null() {
                return None;
            }
            Some(SessionEvent::Message {
                source: string_field(&v, "source").unwrap_or_default(),
                text: string_field(&v, "message").unwrap_or_default(),
            })
        });
        self.set_callback(&options, "onStatusChange", |v| {
            string_field(&v, "status").map(SessionEvent::StatusChange)
        });
        self.set_callback(&options, "onError", |v| {
            let msg = v
                .as_string()
                .or_else(|| string_field(&v, "message"))
                .unwrap_or_else(|| format!("{:?}", v));
            Some(SessionEvent::Error(msg))
        });
        options
    }

    fn set_callback(
        &self,
        options: &Object,
        name: &str,
        to_event: impl Fn(JsValue) -> Option<SessionEvent> + 'static,
    ) {
        let this = self.clone();
        let closure = Closure::wrap(Box::new(move |v: JsValue| {
            if let Some(ev) = to_event(v) {
                this.dispatch(ev);
            }
        }) as Box<dyn FnMut(JsValue)>);
        _ = Reflect::set(options, &JsValue::from_str(name), closure.as_ref());
        closure.forget();
    }

    /// Feed an SDK callback to the adapter. Callbacks fired synchronously from
    /// inside an adapter call are re-queued until the borrow is released.
    fn dispatch(&self, ev: SessionEvent) {
        match self.adapter.try_borrow_mut() {
            Ok(mut adapter) => {
                adapter.handle_event(ev);
                drop(adapter);
                self.render();
            }
            Err(_) => {
                let this = self.clone();
                spawn_local(async move { this.dispatch(ev) });
            }
        }
    }

    /// Push adapter state into the DOM and start/stop the visualizer loop.
    fn render(&self) {
        let (controls, status, mode, live) = {
            let a = self.adapter.borrow();
            (a.controls(), a.status(), a.mode_label(), a.is_connected())
        };
        let doc = &self.document;
        dom::set_text(doc, VOICE_STATUS_TEXT_ID, status);
        dom::set_text(doc, VOICE_MODE_ID, mode);
        dom::set_text(doc, VOICE_CALL_ICON_ID, controls.call_label);
        dom::set_disabled(doc, VOICE_CALL_ID, !controls.call_enabled);
        dom::set_disabled(doc, VOICE_END_ID, !controls.end_enabled);
        dom::set_disabled(doc, VOICE_MUTE_ID, !controls.mute_enabled);
        dom::set_class(doc, VOICE_MUTE_ID, MUTED_CLASS, controls.muted);
        dom::set_class(doc, VOICE_WIDGET_ID, ACTIVE_CLASS, controls.widget_active);
        if let Some(icon) = doc
            .get_element_by_id(VOICE_MUTE_ID)
            .and_then(|b| b.query_selector(".voice-btn-icon").ok().flatten())
        {
            icon.set_text_content(Some(controls.mute_label));
        }
        self.append_transcript();
        self.sync_visualizer(live);
    }

    fn append_transcript(&self) {
        let Some(log_el) = self.document.get_element_by_id(VOICE_TRANSCRIPT_ID) else {
            return;
        };
        let adapter = self.adapter.borrow();
        let lines = adapter.transcript();
        let mut rendered = self.rendered_lines.borrow_mut();
        for line in lines.iter().skip(*rendered) {
            if let Err(e) = append_line(&self.document, &log_el, line) {
                log::warn!("[voice] transcript line dropped: {:?}", e);
            }
        }
        *rendered = lines.len();
        log_el.set_scroll_top(log_el.scroll_height());
    }

    fn sync_visualizer(&self, live: bool) {
        let Some(surface) = &self.visualizer else {
            return;
        };
        let mut slot = self.frame_loop.borrow_mut();
        match (live, slot.is_some()) {
            (true, false) => {
                let mut ctx = SpectrumFrame {
                    surface: surface.clone(),
                    adapter: self.adapter.clone(),
                };
                *slot = Some(frame::start_loop(move || ctx.frame()));
            }
            (false, true) => {
                if let Some(running) = slot.take() {
                    running.stop();
                }
                render::paint_resting(surface);
            }
            (false, false) => render::paint_resting(surface),
            (true, true) => {}
        }
    }
}

fn append_line(
    document: &web::Document,
    log_el: &web::Element,
    line: &TranscriptLine,
) -> Result<(), JsValue> {
    let row = document.create_element("div")?;
    row.set_class_name(&format!(
        "voice-transcript-line voice-transcript-line--{}",
        line.speaker.css_modifier()
    ));
    let label = document.create_element("span")?;
    label.set_class_name("voice-transcript-label");
    label.set_text_content(Some(line.speaker.label()));
    row.append_child(&label)?;
    // text node, never parsed as markup
    row.append_child(&document.create_text_node(&line.text))?;
    log_el.append_child(&row)?;
    Ok(())
}

/// `window.client.Conversation`, if the SDK script has loaded.
fn conversation_class() -> Option<JsValue> {
    let window = web::window()?;
    let client = Reflect::get(&window, &JsValue::from_str("client")).ok()?;
    if client.is_undefined() || client.is_null() {
        log::error!("[voice] SDK not loaded: window.client missing");
        return None;
    }
    let conversation = Reflect::get(&client, &JsValue::from_str("Conversation")).ok()?;
    if conversation.is_undefined() || conversation.is_null() {
        log::error!("[voice] SDK not loaded: Conversation missing");
        return None;
    }
    Some(conversation)
}

fn string_field(v: &JsValue, key: &str) -> Option<String> {
    Reflect::get(v, &JsValue::from_str(key))
        .ok()
        .and_then(|s| s.as_string())
}
