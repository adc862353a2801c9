use std::cell::RefCell;
use std::rc::Rc;

use tracing::debug;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::HtmlElement;

use super::{listen, set_style, Site};
use crate::header_engine::HeaderEngine;

/// Scroll reactor for `.header`.
pub fn install(site: &Rc<Site>) -> Result<(), JsValue> {
    let Some(header) = site
        .document
        .query_selector(".header")?
        .and_then(|el| el.dyn_into::<HtmlElement>().ok())
    else {
        debug!("no .header, skipping scroll reactor");
        return Ok(());
    };

    let mut engine = HeaderEngine::from_config(&site.config);
    engine.set_initial_offset(site.scroll_y());
    let engine = Rc::new(RefCell::new(engine));

    let window = site.window.clone();
    let handler_site = site.clone();
    listen(&window, "scroll", move |_| {
        let mut engine = engine.borrow_mut();
        engine.on_scroll(handler_site.scroll_y());
        set_style(&header, "background", &engine.background());
        set_style(&header, "box-shadow", &engine.box_shadow());
        set_style(&header, "transform", &engine.transform());
    })
}
