use std::cell::RefCell;
use std::rc::Rc;

use tracing::{debug, warn};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{HtmlElement, HtmlInputElement};

use super::{child_text, listen, query_all, set_style, Site};
use crate::analytics::log_search;
use crate::filter_engine::{Debouncer, FilterEngine};

/// Live filter over `.article-card`, driven by every `.search-input`.
///
/// Card text is captured once here. Each keystroke clears the field's
/// pending timer and arms a new one; the debounce ticket makes sure only the
/// newest keystroke's value ever runs.
pub fn install(site: &Rc<Site>) -> Result<(), JsValue> {
    let inputs: Vec<HtmlInputElement> = query_all(&site.document, ".search-input")?;
    if inputs.is_empty() {
        return Ok(());
    }

    let cards: Vec<HtmlElement> = query_all(&site.document, ".article-card")?;
    let mut filter = FilterEngine::from_config(&site.config);
    for card in &cards {
        filter.add_card(&child_text(card, "h3"), &child_text(card, ".article-excerpt"));
    }
    debug!(cards = cards.len(), inputs = inputs.len(), "search ready");

    let filter = Rc::new(RefCell::new(filter));
    let cards = Rc::new(cards);

    for input in inputs {
        let binding = Rc::new(RefCell::new(Binding {
            debouncer: Debouncer::new(site.config.search_debounce_ms),
            timer: None,
        }));
        let (site, filter, cards) = (site.clone(), filter.clone(), cards.clone());
        let field = input.clone();
        listen(&input, "input", move |_| {
            if let Err(err) = arm(&site, &binding, &filter, &cards, &field.value()) {
                warn!(error = ?err, "could not arm search timer");
            }
        })?;
    }
    Ok(())
}

/// Debounce state for one input field.
struct Binding {
    debouncer: Debouncer,
    /// Browser timer for the pending run, and the callback it will call.
    timer: Option<(i32, Closure<dyn FnMut()>)>,
}

/// Cancel the pending run for this field, if any, and schedule a new one.
fn arm(
    site: &Site,
    binding: &Rc<RefCell<Binding>>,
    filter: &Rc<RefCell<FilterEngine>>,
    cards: &Rc<Vec<HtmlElement>>,
    value: &str,
) -> Result<(), JsValue> {
    let mut state = binding.borrow_mut();
    if let Some((handle, _)) = state.timer.take() {
        site.window.clear_timeout_with_handle(handle);
    }
    let ticket = state.debouncer.schedule(value);

    let weak = Rc::downgrade(binding);
    let (filter, cards) = (filter.clone(), cards.clone());
    let callback = Closure::<dyn FnMut()>::new(move || {
        let Some(binding) = weak.upgrade() else {
            return;
        };
        let Some(query) = binding.borrow_mut().debouncer.fire(ticket) else {
            return;
        };
        run_filter(&filter, &cards, &query);
    });
    let handle = site
        .window
        .set_timeout_with_callback_and_timeout_and_arguments_0(
            callback.as_ref().unchecked_ref(),
            state.debouncer.delay_ms().min(i32::MAX as u32) as i32,
        )?;
    state.timer = Some((handle, callback));
    Ok(())
}

fn run_filter(filter: &RefCell<FilterEngine>, cards: &[HtmlElement], query: &str) {
    let mut filter = filter.borrow_mut();
    if !filter.apply(query) {
        return;
    }
    for (card, &visible) in cards.iter().zip(filter.visibility()) {
        set_style(card, "display", if visible { "block" } else { "none" });
    }
    log_search(query, filter.visible_count(), filter.card_count());
}
