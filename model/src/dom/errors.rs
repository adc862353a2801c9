use std::rc::Rc;

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::ErrorEvent;

use super::{listen, now_iso, Site};
use crate::analytics::{log_error, ErrorReport};

/// Report uncaught page errors. Installed before the DOM is ready so early
/// failures are caught too.
pub fn install(site: &Rc<Site>) -> Result<(), JsValue> {
    let handler_site = site.clone();
    listen(&site.window, "error", move |event| {
        let Some(event) = event.dyn_ref::<ErrorEvent>() else {
            return;
        };
        log_error(&report(&handler_site, event));
    })
}

fn report(site: &Site, event: &ErrorEvent) -> ErrorReport {
    let stack = js_sys::Reflect::get(&event.error(), &JsValue::from_str("stack"))
        .ok()
        .and_then(|v| v.as_string());
    ErrorReport {
        message: event.message(),
        filename: event.filename(),
        lineno: event.lineno(),
        colno: event.colno(),
        stack,
        user_agent: site.user_agent(),
        url: site.page_url(),
        timestamp: now_iso(),
    }
}
