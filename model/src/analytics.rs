//! Console-only analytics.
//!
//! Every record here ends up as a `tracing` event under the
//! `seoblog::analytics` target (errors under `seoblog::errors`). Payloads are
//! serde structs rendered as JSON so the console line can be copied straight
//! into a real collector later. Nothing leaves the browser.

use seoblog_shared::{normalize, SCROLL_DEPTH_MILESTONES};
use serde::Serialize;
use tracing::{error, info};
use wasm_bindgen::prelude::*;

// ── Payloads ───────────────────────────────────────────────────────────────

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PageView {
    pub url: String,
    pub title: String,
    pub timestamp: String,
    pub user_agent: String,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ClickEvent {
    pub element: String,
    pub text: String,
    pub href: Option<String>,
    pub timestamp: String,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ErrorReport {
    pub message: String,
    pub filename: String,
    pub lineno: u32,
    pub colno: u32,
    pub stack: Option<String>,
    pub user_agent: String,
    pub url: String,
    pub timestamp: String,
}

fn to_json<T: Serialize>(payload: &T) -> String {
    serde_json::to_string(payload).unwrap_or_default()
}

pub fn log_page_view(view: &PageView) {
    info!(target: "seoblog::analytics", payload = %to_json(view), "page view");
}

pub fn log_click(click: &ClickEvent) {
    info!(target: "seoblog::analytics", payload = %to_json(click), "click");
}

pub fn log_search(query: &str, visible: usize, total: usize) {
    info!(target: "seoblog::analytics", query, visible, total, "search");
}

pub fn log_scroll_depth(percent: u32) {
    info!(target: "seoblog::analytics", percent, "scroll depth {percent}%");
}

/// `data_json` is the caller's payload already serialized to JSON.
pub fn log_custom(name: &str, data_json: &str) {
    info!(target: "seoblog::analytics", event = name, data = data_json, "custom event");
}

pub fn log_error(report: &ErrorReport) {
    error!(target: "seoblog::errors", payload = %to_json(report), "uncaught page error: {}", report.message);
}

// ── ScrollDepthEngine ──────────────────────────────────────────────────────

/// Tracks the deepest scroll position seen and reports each milestone in
/// `SCROLL_DEPTH_MILESTONES` once, in increasing order.
#[wasm_bindgen]
pub struct ScrollDepthEngine {
    max_percent: u32,
    /// Index into SCROLL_DEPTH_MILESTONES of the next milestone to report.
    next_milestone: usize,
}

#[wasm_bindgen]
impl ScrollDepthEngine {
    #[wasm_bindgen(constructor)]
    pub fn new() -> ScrollDepthEngine {
        ScrollDepthEngine {
            max_percent: 0,
            next_milestone: 0,
        }
    }

    /// Feed one scroll position. `scrollable_height` is document height
    /// minus viewport height. Returns the milestones newly reached; a page
    /// that cannot scroll reports nothing.
    pub fn observe(&mut self, scroll_y: f64, scrollable_height: f64) -> Vec<u32> {
        if !(scrollable_height > 0.0) {
            return Vec::new();
        }
        let percent = (normalize(scroll_y, 0.0, scrollable_height) * 100.0).floor() as u32;
        if percent <= self.max_percent {
            return Vec::new();
        }
        self.max_percent = percent;

        let mut reached = Vec::new();
        while let Some(&milestone) = SCROLL_DEPTH_MILESTONES.get(self.next_milestone) {
            if milestone > percent {
                break;
            }
            reached.push(milestone);
            self.next_milestone += 1;
        }
        reached
    }

    #[wasm_bindgen(getter)]
    pub fn max_percent(&self) -> u32 {
        self.max_percent
    }
}

impl Default for ScrollDepthEngine {
    fn default() -> Self {
        ScrollDepthEngine::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_milestones_reported_once_in_order() {
        let mut depth = ScrollDepthEngine::new();
        assert_eq!(depth.observe(100.0, 1000.0), Vec::<u32>::new());
        assert_eq!(depth.observe(250.0, 1000.0), vec![25]);
        assert_eq!(depth.observe(260.0, 1000.0), Vec::<u32>::new());
        assert_eq!(depth.observe(100.0, 1000.0), Vec::<u32>::new());
        assert_eq!(depth.observe(800.0, 1000.0), vec![50, 75]);
        assert_eq!(depth.observe(1000.0, 1000.0), vec![100]);
        assert_eq!(depth.observe(1000.0, 1000.0), Vec::<u32>::new());
        assert_eq!(depth.max_percent(), 100);
    }

    #[test]
    fn test_overscroll_clamps_to_100() {
        let mut depth = ScrollDepthEngine::new();
        assert_eq!(depth.observe(5000.0, 1000.0), vec![25, 50, 75, 100]);
        assert_eq!(depth.max_percent(), 100);
    }

    #[test]
    fn test_unscrollable_page_reports_nothing() {
        let mut depth = ScrollDepthEngine::new();
        assert!(depth.observe(0.0, 0.0).is_empty());
        assert!(depth.observe(10.0, -50.0).is_empty());
        assert!(depth.observe(10.0, f64::NAN).is_empty());
        assert_eq!(depth.max_percent(), 0);
    }

    #[test]
    fn test_payload_field_names() {
        let view = PageView {
            url: "https://example.com/".into(),
            title: "Home".into(),
            timestamp: "2024-01-01T00:00:00.000Z".into(),
            user_agent: "test".into(),
        };
        let json = to_json(&view);
        assert!(json.contains("\"userAgent\":\"test\""));

        let click = ClickEvent {
            element: "BUTTON".into(),
            text: "Contact".into(),
            href: None,
            timestamp: "t".into(),
        };
        assert!(to_json(&click).contains("\"href\":null"));
    }

    #[test]
    fn test_error_report_json() {
        let report = ErrorReport {
            message: "boom".into(),
            filename: "main.js".into(),
            lineno: 3,
            colno: 7,
            stack: Some("at main".into()),
            user_agent: "ua".into(),
            url: "u".into(),
            timestamp: "t".into(),
        };
        let json = to_json(&report);
        assert!(json.contains("\"lineno\":3"));
        assert!(json.contains("\"userAgent\":\"ua\""));
    }
}
