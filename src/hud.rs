use crate::core::timecode::format_elapsed;
use crate::frame;
use instant::Instant;
use web_sys as web;

/// Tape-counter style elapsed time since the page started.
pub fn wire_timecode(el: web::Element) {
    let started = Instant::now();
    let mut shown = String::new();
    frame::start_loop(move || {
        let text = format_elapsed(started.elapsed().as_millis() as u64);
        if text != shown {
            el.set_text_content(Some(&text));
            shown = text;
        }
    })
    .detach();
}
