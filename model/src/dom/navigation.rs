use std::cell::RefCell;
use std::rc::Rc;

use tracing::debug;
use wasm_bindgen::prelude::*;
use web_sys::{Element, HtmlElement};

use super::{listen, query_all_in, Site};
use crate::nav_engine::NavEngine;

const ACTIVE: &str = "active";

/// Mobile menu: `#nav-toggle` flips `#nav-menu`, any `.nav-link` closes it.
pub fn install(site: &Rc<Site>) -> Result<(), JsValue> {
    let (Some(toggle), Some(menu)) = (
        site.document.get_element_by_id("nav-toggle"),
        site.document.get_element_by_id("nav-menu"),
    ) else {
        debug!("no #nav-toggle/#nav-menu, skipping navigation");
        return Ok(());
    };

    let nav = Rc::new(RefCell::new(NavEngine::new()));

    {
        let (nav, toggle_el, menu) = (nav.clone(), toggle.clone(), menu.clone());
        listen(&toggle, "click", move |_| {
            let open = nav.borrow_mut().toggle();
            apply(&toggle_el, &menu, open);
        })?;
    }

    for link in query_all_in::<HtmlElement>(&menu, ".nav-link")? {
        let (nav, toggle, menu) = (nav.clone(), toggle.clone(), menu.clone());
        listen(&link, "click", move |_| {
            nav.borrow_mut().close();
            apply(&toggle, &menu, false);
        })?;
    }
    Ok(())
}

fn apply(toggle: &Element, menu: &Element, open: bool) {
    for el in [menu, toggle] {
        let classes = el.class_list();
        let result = if open {
            classes.add_1(ACTIVE)
        } else {
            classes.remove_1(ACTIVE)
        };
        if let Err(err) = result {
            debug!(error = ?err, "class update rejected");
        }
    }
}
