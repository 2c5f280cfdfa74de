use crate::constants::{ACTIVE_CLASS, VOICE_PANEL_ID};
use web_sys as web;

#[inline]
pub fn show(document: &web::Document) {
    if let Some(el) = document.get_element_by_id(VOICE_PANEL_ID) {
        _ = el.class_list().add_1(ACTIVE_CLASS);
    }
}

#[inline]
pub fn hide(document: &web::Document) {
    if let Some(el) = document.get_element_by_id(VOICE_PANEL_ID) {
        _ = el.class_list().remove_1(ACTIVE_CLASS);
    }
}

#[inline]
pub fn is_open(document: &web::Document) -> bool {
    document
        .get_element_by_id(VOICE_PANEL_ID)
        .map(|el| el.class_list().contains(ACTIVE_CLASS))
        .unwrap_or(false)
}

#[inline]
pub fn toggle(document: &web::Document) {
    if is_open(document) {
        hide(document);
    } else {
        show(document);
    }
}
