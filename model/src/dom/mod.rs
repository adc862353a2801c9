//! web-sys bindings.
//!
//! Everything that touches the page lives under this module. Each submodule
//! has an `install` function that looks up its elements, creates its engine
//! and registers listeners. Engines are shared with listener closures as
//! `Rc<RefCell<_>>`; the event loop runs one handler at a time, so borrows
//! never overlap.

use std::cell::RefCell;
use std::rc::Rc;

use seoblog_shared::SiteConfig;
use tracing::{debug, warn};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, Event, EventTarget, HtmlElement, Window};

use crate::notice_engine::NoticeEngine;

pub mod analytics;
pub mod anchors;
pub mod contact;
pub mod errors;
pub mod exports;
pub mod header;
pub mod navigation;
pub mod notice;
pub mod preload;
pub mod reveal;
pub mod search;

/// Handles shared by every component.
pub struct Site {
    pub window: Window,
    pub document: Document,
    pub config: SiteConfig,
    pub notices: Rc<RefCell<NoticeEngine>>,
}

impl Site {
    pub fn new(config: SiteConfig) -> Result<Site, JsValue> {
        let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
        let document = window
            .document()
            .ok_or_else(|| JsValue::from_str("no document"))?;
        let notices = Rc::new(RefCell::new(NoticeEngine::from_config(&config)));
        Ok(Site {
            window,
            document,
            config,
            notices,
        })
    }

    pub fn user_agent(&self) -> String {
        self.window.navigator().user_agent().unwrap_or_default()
    }

    pub fn page_url(&self) -> String {
        self.window.location().href().unwrap_or_default()
    }

    pub fn scroll_y(&self) -> f64 {
        self.window.scroll_y().unwrap_or(0.0)
    }
}

/// Wire every DOM-ready component. A component that fails to install is
/// logged and skipped; the rest still install.
pub fn install_components(site: &Rc<Site>) {
    let steps: [(&str, fn(&Rc<Site>) -> Result<(), JsValue>); 8] = [
        ("navigation", navigation::install),
        ("header", header::install),
        ("reveal", reveal::install),
        ("anchors", anchors::install),
        ("contact", contact::install),
        ("search", search::install),
        ("analytics", analytics::install),
        ("lazy images", reveal::install_lazy_images),
    ];
    for (name, install) in steps {
        if let Err(err) = install(site) {
            warn!(component = name, error = ?err, "failed to install");
        }
    }
}

/// Run `f` once the DOM is parsed: now if it already is, otherwise on
/// `DOMContentLoaded`.
pub fn on_ready(site: Rc<Site>, f: impl FnOnce(&Rc<Site>) + 'static) -> Result<(), JsValue> {
    if site.document.ready_state() != "loading" {
        f(&site);
        return Ok(());
    }
    let document = site.document.clone();
    let callback = Closure::once_into_js(move || f(&site));
    document.add_event_listener_with_callback("DOMContentLoaded", callback.unchecked_ref())
}

// ── Helpers ────────────────────────────────────────────────────────────────

/// All elements under `root` matching `selector`, cast to `T`. Nodes of
/// another type are skipped.
pub fn query_all<T: JsCast>(root: &Document, selector: &str) -> Result<Vec<T>, JsValue> {
    let list = root.query_selector_all(selector)?;
    Ok((0..list.length())
        .filter_map(|i| list.get(i))
        .filter_map(|node| node.dyn_into::<T>().ok())
        .collect())
}

/// Like [`query_all`], scoped to the descendants of `root`.
pub fn query_all_in<T: JsCast>(root: &Element, selector: &str) -> Result<Vec<T>, JsValue> {
    let list = root.query_selector_all(selector)?;
    Ok((0..list.length())
        .filter_map(|i| list.get(i))
        .filter_map(|node| node.dyn_into::<T>().ok())
        .collect())
}

/// Text of the first descendant of `el` matching `selector`, "" if absent.
pub fn child_text(el: &Element, selector: &str) -> String {
    el.query_selector(selector)
        .ok()
        .flatten()
        .and_then(|child| child.text_content())
        .unwrap_or_default()
}

pub fn set_style(el: &HtmlElement, property: &str, value: &str) {
    if let Err(err) = el.style().set_property(property, value) {
        debug!(property, error = ?err, "style update rejected");
    }
}

/// Add a listener that lives as long as the page.
pub fn listen(
    target: &EventTarget,
    event: &str,
    handler: impl FnMut(Event) + 'static,
) -> Result<(), JsValue> {
    let closure = Closure::<dyn FnMut(Event)>::new(handler);
    target.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())?;
    closure.forget();
    Ok(())
}

/// Run `f` once after `delay_ms`. The closure frees itself after running.
pub fn set_timeout(
    window: &Window,
    delay_ms: u32,
    f: impl FnOnce() + 'static,
) -> Result<i32, JsValue> {
    let callback = Closure::once_into_js(f);
    window.set_timeout_with_callback_and_timeout_and_arguments_0(
        callback.unchecked_ref(),
        delay_ms.min(i32::MAX as u32) as i32,
    )
}

pub fn now_iso() -> String {
    String::from(js_sys::Date::new_0().to_iso_string())
}
