use web_sys as web;

// ---------------- Pointer helpers ----------------

/// Pointer position relative to the top-left of `rect`, in CSS px.
#[inline]
pub fn relative_to(client_x: f64, client_y: f64, rect_left: f64, rect_top: f64) -> (f64, f64) {
    (client_x - rect_left, client_y - rect_top)
}

#[inline]
pub fn pointer_in_element(ev: &web::MouseEvent, el: &web::Element) -> (f64, f64, web::DomRect) {
    let rect = el.get_bounding_client_rect();
    let (x, y) = relative_to(
        ev.client_x() as f64,
        ev.client_y() as f64,
        rect.left(),
        rect.top(),
    );
    (x, y, rect)
}

/// Window pointer position mapped into canvas backing pixels.
#[inline]
pub fn client_to_canvas(
    client_x: f64,
    client_y: f64,
    rect_left: f64,
    rect_top: f64,
    rect_w: f64,
    rect_h: f64,
    canvas_w: u32,
    canvas_h: u32,
) -> (f32, f32) {
    let (x, y) = relative_to(client_x, client_y, rect_left, rect_top);
    if rect_w > 0.0 && rect_h > 0.0 {
        (
            (x / rect_w * canvas_w as f64) as f32,
            (y / rect_h * canvas_h as f64) as f32,
        )
    } else {
        (x as f32, y as f32)
    }
}

#[inline]
pub fn pointer_canvas_px(ev: &web::MouseEvent, canvas: &web::HtmlCanvasElement) -> (f32, f32) {
    let rect = canvas.get_bounding_client_rect();
    client_to_canvas(
        ev.client_x() as f64,
        ev.client_y() as f64,
        rect.left(),
        rect.top(),
        rect.width(),
        rect.height(),
        canvas.width(),
        canvas.height(),
    )
}
