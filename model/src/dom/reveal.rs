use std::cell::RefCell;
use std::rc::Rc;

use tracing::debug;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{
    Element, HtmlElement, HtmlImageElement, IntersectionObserver, IntersectionObserverEntry,
    IntersectionObserverInit,
};

use super::{query_all, set_style, Site};
use crate::reveal_engine::RevealEngine;

const CARD_SELECTOR: &str = ".service-card, .article-card, .case-card";
const LAZY_IMAGE_SELECTOR: &str = "img[data-src]";

/// Card animator: hide every card now, reveal each on first intersection.
pub fn install(site: &Rc<Site>) -> Result<(), JsValue> {
    let cards: Vec<HtmlElement> = query_all(&site.document, CARD_SELECTOR)?;
    if cards.is_empty() || !has_intersection_observer(site) {
        return Ok(());
    }

    let mut engine = RevealEngine::from_config(&site.config);
    for card in &cards {
        engine.register();
        set_style(card, "opacity", "0");
        set_style(card, "transform", &engine.hidden_transform());
        set_style(card, "transition", &engine.transition());
    }

    let options = IntersectionObserverInit::new();
    options.set_threshold(&JsValue::from_f64(site.config.reveal_threshold));
    options.set_root_margin(&site.config.reveal_root_margin);

    let observer = observe_once(engine, cards.clone(), Some(&options), |card: &HtmlElement| {
        set_style(card, "opacity", "1");
        set_style(card, "transform", "translateY(0)");
    })?;
    for card in &cards {
        observer.observe(card);
    }
    debug!(count = cards.len(), "observing cards");
    Ok(())
}

/// Lazy images: swap `data-src` into `src` on first intersection.
pub fn install_lazy_images(site: &Rc<Site>) -> Result<(), JsValue> {
    let images: Vec<HtmlImageElement> = query_all(&site.document, LAZY_IMAGE_SELECTOR)?;
    if images.is_empty() || !has_intersection_observer(site) {
        return Ok(());
    }

    let mut engine = RevealEngine::from_config(&site.config);
    images.iter().for_each(|_| {
        engine.register();
    });

    let observer = observe_once(engine, images.clone(), None, |img: &HtmlImageElement| {
        if let Some(src) = img.get_attribute("data-src") {
            img.set_src(&src);
        }
        if let Err(err) = img.class_list().add_1("loaded") {
            debug!(error = ?err, "class update rejected");
        }
    })?;
    for img in &images {
        observer.observe(img);
    }
    Ok(())
}

fn has_intersection_observer(site: &Site) -> bool {
    let supported = js_sys::Reflect::has(&site.window, &JsValue::from_str("IntersectionObserver"))
        .unwrap_or(false);
    if !supported {
        debug!("IntersectionObserver unavailable");
    }
    supported
}

/// Observer that calls `reveal` the first time each of `elements`
/// intersects, then stops watching that element.
fn observe_once<T>(
    engine: RevealEngine,
    elements: Vec<T>,
    options: Option<&IntersectionObserverInit>,
    reveal: impl Fn(&T) + 'static,
) -> Result<IntersectionObserver, JsValue>
where
    T: AsRef<Element> + 'static,
{
    let engine = RefCell::new(engine);
    let callback = Closure::<dyn FnMut(js_sys::Array, IntersectionObserver)>::new(
        move |entries: js_sys::Array, observer: IntersectionObserver| {
            for entry in entries.iter() {
                let entry: IntersectionObserverEntry = entry.unchecked_into();
                let target = entry.target();
                let Some(index) = elements.iter().position(|el| el.as_ref() == &target) else {
                    continue;
                };
                if engine.borrow_mut().on_intersect(index, entry.is_intersecting()) {
                    reveal(&elements[index]);
                    observer.unobserve(&target);
                }
            }
        },
    );

    let observer = match options {
        Some(options) => {
            IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), options)?
        }
        None => IntersectionObserver::new(callback.as_ref().unchecked_ref())?,
    };
    callback.forget();
    Ok(observer)
}
