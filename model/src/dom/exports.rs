use std::rc::Rc;

use seoblog_shared::Severity;
use tracing::warn;
use wasm_bindgen::prelude::*;

use super::{notice, Site};
use crate::analytics::log_custom;

/// Publish `window[global_name] = { showMessage, trackEvent }` for page
/// scripts.
pub fn install(site: &Rc<Site>) -> Result<(), JsValue> {
    let api = js_sys::Object::new();

    let handler_site = site.clone();
    let show_message = Closure::<dyn FnMut(JsValue, JsValue)>::new(
        move |message: JsValue, severity: JsValue| {
            let message = message.as_string().unwrap_or_default();
            let severity = Severity::parse(&severity.as_string().unwrap_or_default());
            if let Err(err) = notice::show_message(&handler_site, &message, severity) {
                warn!(error = ?err, "showMessage failed");
            }
        },
    );
    js_sys::Reflect::set(&api, &JsValue::from_str("showMessage"), show_message.as_ref())?;
    show_message.forget();

    let track_event = Closure::<dyn FnMut(JsValue, JsValue)>::new(
        move |name: JsValue, data: JsValue| {
            let name = name.as_string().unwrap_or_default();
            let data = if data.is_undefined() {
                String::from("null")
            } else {
                js_sys::JSON::stringify(&data)
                    .ok()
                    .and_then(|s| s.as_string())
                    .unwrap_or_else(|| String::from("null"))
            };
            log_custom(&name, &data);
        },
    );
    js_sys::Reflect::set(&api, &JsValue::from_str("trackEvent"), track_event.as_ref())?;
    track_event.forget();

    js_sys::Reflect::set(&site.window, &JsValue::from_str(&site.config.global_name), &api)?;
    Ok(())
}
