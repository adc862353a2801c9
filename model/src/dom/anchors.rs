use std::rc::Rc;

use seoblog_shared::{anchor_scroll_top, fragment_id};
use tracing::debug;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Element, HtmlElement, ScrollBehavior, ScrollToOptions};

use super::{listen, query_all, Site};

/// In-page links scroll smoothly to their target, clearing the fixed header.
/// Links whose fragment names nothing keep the browser default.
pub fn install(site: &Rc<Site>) -> Result<(), JsValue> {
    let links: Vec<Element> = query_all(&site.document, "a[href^=\"#\"]")?;
    for link in links {
        let site = site.clone();
        let anchor = link.clone();
        listen(&link, "click", move |event| {
            let Some(href) = anchor.get_attribute("href") else {
                return;
            };
            let Some(target) = fragment_id(&href)
                .and_then(|id| site.document.get_element_by_id(&decode_fragment(id)))
                .and_then(|el| el.dyn_into::<HtmlElement>().ok())
            else {
                return;
            };

            event.prevent_default();
            let top = anchor_scroll_top(
                f64::from(target.offset_top()),
                site.config.header_offset_px,
            );
            let options = ScrollToOptions::new();
            options.set_top(top);
            options.set_behavior(ScrollBehavior::Smooth);
            site.window.scroll_to_with_scroll_to_options(&options);
            debug!(href = %href, top, "anchor scroll");
        })?;
    }
    Ok(())
}

/// Percent-decode a fragment so `#%E5%85%B3%E4%BA%8E` finds `id="关于"`.
/// Malformed escapes are looked up as written.
fn decode_fragment(id: &str) -> String {
    js_sys::decode_uri_component(id)
        .map(String::from)
        .unwrap_or_else(|_| id.to_string())
}
