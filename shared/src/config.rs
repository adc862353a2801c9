//! Runtime configuration.
//!
//! The page passes an optional JSON object to `start()`. Every key is
//! optional; missing keys keep their defaults and unknown keys are ignored,
//! so a page can override a single threshold without restating the rest.

use serde::Deserialize;

use crate::{
    ELEVATE_THRESHOLD_PX, HEADER_OFFSET_PX, HIDE_THRESHOLD_PX, NOTICE_DISPLAY_MS,
    NOTICE_ENTER_DELAY_MS, NOTICE_EXIT_MS, REVEAL_DURATION_MS, REVEAL_OFFSET_PX,
    REVEAL_ROOT_MARGIN, REVEAL_THRESHOLD, SEARCH_DEBOUNCE_MS, SEARCH_MIN_CHARS,
};

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    pub elevate_threshold_px: f64,
    pub hide_threshold_px: f64,
    pub header_offset_px: f64,
    pub search_debounce_ms: u32,
    pub search_min_chars: usize,
    pub reveal_threshold: f64,
    pub reveal_root_margin: String,
    pub reveal_duration_ms: u32,
    pub reveal_offset_px: f64,
    pub notice_enter_delay_ms: u32,
    pub notice_display_ms: u32,
    pub notice_exit_ms: u32,
    pub messages: Messages,
    /// Critical resources injected as `<link rel="preload">`.
    pub preload: Vec<String>,
    /// Property name of the export object installed on `window`.
    pub global_name: String,
    /// Maximum log level: trace, debug, info, warn, error or off.
    pub log_level: String,
}

/// User-facing banner copy.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct Messages {
    pub form_success: String,
    pub form_invalid: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        SiteConfig {
            elevate_threshold_px: ELEVATE_THRESHOLD_PX,
            hide_threshold_px: HIDE_THRESHOLD_PX,
            header_offset_px: HEADER_OFFSET_PX,
            search_debounce_ms: SEARCH_DEBOUNCE_MS,
            search_min_chars: SEARCH_MIN_CHARS,
            reveal_threshold: REVEAL_THRESHOLD,
            reveal_root_margin: REVEAL_ROOT_MARGIN.to_string(),
            reveal_duration_ms: REVEAL_DURATION_MS,
            reveal_offset_px: REVEAL_OFFSET_PX,
            notice_enter_delay_ms: NOTICE_ENTER_DELAY_MS,
            notice_display_ms: NOTICE_DISPLAY_MS,
            notice_exit_ms: NOTICE_EXIT_MS,
            messages: Messages::default(),
            preload: vec!["/css/style.css".to_string(), "/js/main.js".to_string()],
            global_name: "SEOBlog".to_string(),
            log_level: "info".to_string(),
        }
    }
}

impl Default for Messages {
    fn default() -> Self {
        Messages {
            form_success: "Thanks for your message! We'll get back to you soon.".to_string(),
            form_invalid: "Please fill in all required fields.".to_string(),
        }
    }
}

impl SiteConfig {
    pub fn from_json(json: &str) -> Result<SiteConfig, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Parse `json` if given, falling back to defaults. The parse error is
    /// returned alongside so the caller can log it once logging is up.
    pub fn from_json_or_default(json: Option<&str>) -> (SiteConfig, Option<serde_json::Error>) {
        match json.map(str::trim).filter(|s| !s.is_empty()) {
            None => (SiteConfig::default(), None),
            Some(raw) => match SiteConfig::from_json(raw) {
                Ok(config) => (config, None),
                Err(err) => (SiteConfig::default(), Some(err)),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_constants() {
        let config = SiteConfig::default();
        assert_eq!(config.elevate_threshold_px, 100.0);
        assert_eq!(config.hide_threshold_px, 200.0);
        assert_eq!(config.header_offset_px, 80.0);
        assert_eq!(config.search_debounce_ms, 300);
        assert_eq!(config.search_min_chars, 2);
        assert_eq!(config.reveal_root_margin, "0px 0px -50px 0px");
        assert_eq!(config.notice_display_ms, 5000);
        assert_eq!(config.notice_exit_ms, 300);
        assert_eq!(config.global_name, "SEOBlog");
    }

    #[test]
    fn test_partial_override() {
        let config =
            SiteConfig::from_json(r#"{"search_debounce_ms": 150, "messages": {"form_invalid": "Nope"}}"#)
                .unwrap();
        assert_eq!(config.search_debounce_ms, 150);
        assert_eq!(config.messages.form_invalid, "Nope");
        assert_eq!(config.messages.form_success, Messages::default().form_success);
        assert_eq!(config.hide_threshold_px, 200.0);
    }

    #[test]
    fn test_unknown_keys_ignored() {
        let config = SiteConfig::from_json(r#"{"theme": "dark", "log_level": "debug"}"#).unwrap();
        assert_eq!(config.log_level, "debug");
    }

    #[test]
    fn test_invalid_json_falls_back() {
        let (config, err) = SiteConfig::from_json_or_default(Some("{not json"));
        assert_eq!(config, SiteConfig::default());
        assert!(err.is_some());

        let (config, err) = SiteConfig::from_json_or_default(Some("   "));
        assert_eq!(config, SiteConfig::default());
        assert!(err.is_none());

        let (_, err) = SiteConfig::from_json_or_default(None);
        assert!(err.is_none());
    }

    #[test]
    fn test_wrong_type_is_error() {
        assert!(SiteConfig::from_json(r#"{"search_min_chars": "two"}"#).is_err());
    }
}
