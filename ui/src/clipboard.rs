//! Clipboard delivery of exported definitions.

use formsmith_core::ExportSink;
use js_sys::{Function, Promise, Reflect};
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;

/// Writes exported text with `navigator.clipboard.writeText`.
///
/// The write completes after the click handler returns. Failures are logged
/// and otherwise dropped.
pub struct ClipboardSink;

impl ExportSink for ClipboardSink {
    fn deliver(&mut self, text: &str) {
        let text = text.to_string();
        wasm_bindgen_futures::spawn_local(async move {
            if let Err(err) = write_text(&text).await {
                log::warn!("Clipboard write failed: {:?}", err);
            }
        });
    }
}

async fn write_text(text: &str) -> Result<(), JsValue> {
    let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
    let clipboard = Reflect::get(&window.navigator(), &JsValue::from_str("clipboard"))?;
    if clipboard.is_undefined() {
        return Err(JsValue::from_str("clipboard API unavailable"));
    }
    let write: Function = Reflect::get(&clipboard, &JsValue::from_str("writeText"))?.dyn_into()?;
    let promise: Promise = write.call1(&clipboard, &JsValue::from_str(text))?.dyn_into()?;
    JsFuture::from(promise).await?;
    Ok(())
}
