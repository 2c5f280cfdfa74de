use js_sys::Uint8Array;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys as web;

/// Ask for microphone access. The stream itself is not kept; the voice SDK
/// opens its own once permission is granted.
pub async fn request_microphone() -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let devices = window
        .navigator()
        .media_devices()
        .map_err(|e| anyhow::anyhow!("mediaDevices unavailable: {:?}", e))?;
    let constraints = web::MediaStreamConstraints::new();
    constraints.set_audio(&JsValue::TRUE);
    let promise = devices
        .get_user_media_with_constraints(&constraints)
        .map_err(|e| anyhow::anyhow!("getUserMedia: {:?}", e))?;
    match JsFuture::from(promise).await {
        Ok(_) => {
            log::info!("[audio] microphone granted");
            Ok(())
        }
        Err(e) => {
            log::error!("[audio] microphone denied: {:?}", e);
            Err(anyhow::anyhow!("microphone denied: {:?}", e))
        }
    }
}

/// Copy a JS byte-frequency array (`Uint8Array` or plain numeric array) into
/// a `Vec<u8>`. `None` for missing data.
pub fn byte_frequencies(value: JsValue) -> Option<Vec<u8>> {
    if value.is_undefined() || value.is_null() {
        return None;
    }
    if let Some(bytes) = value.dyn_ref::<Uint8Array>() {
        return Some(bytes.to_vec());
    }
    let array = value.dyn_into::<js_sys::Array>().ok()?;
    Some(
        array
            .iter()
            .map(|v| v.as_f64().unwrap_or(0.0).clamp(0.0, 255.0) as u8)
            .collect(),
    )
}
