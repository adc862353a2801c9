use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::prelude::*;
use web_sys::Element;

use super::{listen, now_iso, query_all, Site};
use crate::analytics::{log_click, log_page_view, log_scroll_depth, ClickEvent, PageView, ScrollDepthEngine};

const TRACKED_CLICKS: &str = ".btn, .service-link, .article-card a";

/// Page view now, then clicks on tracked elements and scroll depth.
pub fn install(site: &Rc<Site>) -> Result<(), JsValue> {
    log_page_view(&PageView {
        url: site.page_url(),
        title: site.document.title(),
        timestamp: now_iso(),
        user_agent: site.user_agent(),
    });

    let tracked: Vec<Element> = query_all(&site.document, TRACKED_CLICKS)?;
    for el in tracked {
        let target = el.clone();
        listen(&el, "click", move |_| {
            log_click(&ClickEvent {
                element: target.tag_name(),
                text: target.text_content().unwrap_or_default().trim().to_string(),
                href: js_sys::Reflect::get(&target, &JsValue::from_str("href"))
                    .ok()
                    .and_then(|v| v.as_string()),
                timestamp: now_iso(),
            });
        })?;
    }

    install_scroll_depth(site)
}

/// Document height is measured once; content added later does not move the
/// milestones.
fn install_scroll_depth(site: &Rc<Site>) -> Result<(), JsValue> {
    let document_height = site
        .document
        .document_element()
        .map(|root| f64::from(root.scroll_height()))
        .unwrap_or(0.0);
    let viewport_height = site.window.inner_height()?.as_f64().unwrap_or(0.0);
    let scrollable = document_height - viewport_height;

    let depth = RefCell::new(ScrollDepthEngine::new());
    let handler_site = site.clone();
    listen(&site.window, "scroll", move |_| {
        for percent in depth.borrow_mut().observe(handler_site.scroll_y(), scrollable) {
            log_scroll_depth(percent);
        }
    })
}
