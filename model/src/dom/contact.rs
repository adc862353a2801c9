use std::cell::RefCell;
use std::rc::Rc;

use seoblog_shared::{Severity, CONTACT_FIELDS};
use tracing::{debug, info, warn};
use wasm_bindgen::prelude::*;
use web_sys::{FormData, HtmlFormElement};

use super::{listen, notice, query_all, Site};
use crate::form_engine::ContactFormEngine;

/// Every `.contact-form` validates locally on submit. Nothing is sent.
pub fn install(site: &Rc<Site>) -> Result<(), JsValue> {
    let forms: Vec<HtmlFormElement> = query_all(&site.document, ".contact-form")?;
    for form in forms {
        let engine = Rc::new(RefCell::new(ContactFormEngine::new()));
        let site = site.clone();
        let target = form.clone();
        listen(&form, "submit", move |event| {
            event.prevent_default();
            let data = match FormData::new_with_form(&target) {
                Ok(data) => data,
                Err(err) => {
                    warn!(error = ?err, "could not read form");
                    return;
                }
            };

            let mut engine = engine.borrow_mut();
            for name in CONTACT_FIELDS {
                match data.get(name).as_string() {
                    Some(value) => engine.set_field(name, &value),
                    None => engine.clear_field(name),
                }
            }

            let messages = &site.config.messages;
            let shown = if engine.submit() {
                info!(submits = engine.submit_count(), "contact form accepted");
                target.reset();
                engine.reset();
                notice::show_message(&site, &messages.form_success, Severity::Success)
            } else {
                debug!(reason = %engine.last_error(), "contact form rejected");
                notice::show_message(&site, &messages.form_invalid, Severity::Error)
            };
            if let Err(err) = shown {
                warn!(error = ?err, "could not show banner");
            }
        })?;
    }
    Ok(())
}
