use std::rc::Rc;

use seoblog_shared::Severity;
use tracing::debug;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::HtmlElement;

use super::{set_style, set_timeout, Site};

/// Insert a banner, slide it in, and take it down again on the banner
/// timeline. Every call gets its own element and timers.
pub fn show_message(site: &Rc<Site>, message: &str, severity: Severity) -> Result<(), JsValue> {
    let (id, css, enter_at, leave_at, remove_at) = {
        let mut notices = site.notices.borrow_mut();
        let id = notices.show(severity.as_str(), js_sys::Date::now());
        (
            id,
            notices.banner_css(id),
            notices.enter_delay_ms(),
            notices.leave_at_ms(),
            notices.remove_at_ms(),
        )
    };

    let banner: HtmlElement = site.document.create_element("div")?.dyn_into()?;
    banner.set_class_name(&format!("message {}", severity.as_str()));
    banner.set_text_content(Some(message));
    banner.style().set_css_text(&css);

    let body = site
        .document
        .body()
        .ok_or_else(|| JsValue::from_str("no body"))?;
    body.append_child(&banner)?;

    {
        let banner = banner.clone();
        set_timeout(&site.window, enter_at, move || {
            set_style(&banner, "opacity", "1");
            set_style(&banner, "transform", "translateX(0)");
        })?;
    }
    {
        let banner = banner.clone();
        set_timeout(&site.window, leave_at, move || {
            set_style(&banner, "opacity", "0");
            set_style(&banner, "transform", "translateX(100%)");
        })?;
    }
    {
        let notices = site.notices.clone();
        set_timeout(&site.window, remove_at, move || {
            banner.remove();
            let mut notices = notices.borrow_mut();
            notices.remove(id);
            notices.prune(js_sys::Date::now());
        })?;
    }

    debug!(id, severity = severity.as_str(), "banner shown");
    Ok(())
}
