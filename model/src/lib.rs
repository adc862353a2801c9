//! # seoblog
//!
//! Client-side behaviour for the SEO blog, compiled to WebAssembly.
//!
//! The page-facing logic is split in two layers:
//!
//! - **Engines** (`*_engine.rs`, `analytics`): plain state machines with no
//!   DOM access. They are `#[wasm_bindgen]` classes, so a JS host can drive
//!   them directly, and they are unit-tested natively.
//! - **`dom`**: web-sys bindings that find elements, feed browser events into
//!   the engines and write the results back as styles and classes.
//!
//! The host calls [`start`] once per page.

use std::rc::Rc;

use seoblog_shared::SiteConfig;
use tracing::{info, warn};
use wasm_bindgen::prelude::*;

pub mod analytics;
pub mod dom;
pub mod filter_engine;
pub mod form_engine;
pub mod header_engine;
pub mod logging;
pub mod nav_engine;
pub mod notice_engine;
pub mod reveal_engine;

pub use analytics::ScrollDepthEngine;
pub use filter_engine::{Debouncer, FilterEngine};
pub use form_engine::ContactFormEngine;
pub use header_engine::HeaderEngine;
pub use nav_engine::NavEngine;
pub use notice_engine::{NoticeEngine, NoticePhase};
pub use reveal_engine::RevealEngine;

/// Initialize the site runtime.
///
/// `config_json` is an optional JSON object overriding any `SiteConfig`
/// field; invalid JSON falls back to the defaults. The error reporter,
/// preload hints and the global API are installed immediately; everything
/// that needs the parsed document waits for `DOMContentLoaded`.
#[wasm_bindgen]
pub fn start(config_json: Option<String>) -> Result<(), JsValue> {
    let (config, parse_error) = SiteConfig::from_json_or_default(config_json.as_deref());
    logging::init(&config.log_level);
    logging::install_panic_hook();
    if let Some(err) = parse_error {
        warn!(error = %err, "invalid site config, using defaults");
    }

    let site = Rc::new(dom::Site::new(config)?);
    dom::errors::install(&site)?;
    dom::preload::install(&site)?;
    dom::exports::install(&site)?;

    info!("site runtime started");
    dom::on_ready(site, dom::install_components)
}
