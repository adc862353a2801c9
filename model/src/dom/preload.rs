use std::rc::Rc;

use seoblog_shared::PreloadKind;
use tracing::debug;
use wasm_bindgen::prelude::*;

use super::Site;

/// Append a `<link rel="preload">` to `<head>` for each configured asset.
pub fn install(site: &Rc<Site>) -> Result<(), JsValue> {
    let Some(head) = site.document.head() else {
        debug!("no <head>, skipping preload hints");
        return Ok(());
    };
    for href in &site.config.preload {
        let link = site.document.create_element("link")?;
        link.set_attribute("rel", "preload")?;
        link.set_attribute("href", href)?;
        link.set_attribute("as", PreloadKind::from_href(href).as_str())?;
        head.append_child(&link)?;
    }
    Ok(())
}
