//! # seoblog-shared
//!
//! Common types, constants, configuration and validation used by the site
//! engines. Everything here is pure: no DOM access, no `wasm_bindgen`, no I/O.
//! The engine crate (`seoblog`) compiles to WASM and depends on this crate, and
//! the native test suite exercises it directly.
//!
//! ```text
//! shared crate (this)
//!   |
//!   +-- seoblog (model crate, compiled to WASM)
//!         - engines: pure state machines, one per page behaviour
//!         - dom/: web-sys bindings that feed events into the engines
//! ```
//!
//! ## What belongs here
//!
//! - Constants both the engines and the DOM layer must agree on
//! - `SiteConfig`, the serde-backed runtime configuration
//! - Validation functions for the contact form
//! - Pure computation helpers (anchor offsets, percentages, text matching)

use serde::{Deserialize, Serialize};

pub mod config;
pub mod validation;

pub use config::{Messages, SiteConfig};

// ============================================
// Constants
//
// Defaults for every tunable in SiteConfig. The
// engines fall back to these when constructed
// without a config.
// ============================================

/// Scroll offset above which the header switches to its elevated look.
pub const ELEVATE_THRESHOLD_PX: f64 = 100.0;

/// Scroll offset above which scrolling down hides the header.
pub const HIDE_THRESHOLD_PX: f64 = 200.0;

/// Height of the fixed header, subtracted from anchor scroll targets.
pub const HEADER_OFFSET_PX: f64 = 80.0;

/// Quiet period before a search query runs.
pub const SEARCH_DEBOUNCE_MS: u32 = 300;

/// Queries shorter than this (in characters) are ignored.
pub const SEARCH_MIN_CHARS: usize = 2;

/// Fraction of a card that must be visible before it reveals.
pub const REVEAL_THRESHOLD: f64 = 0.1;

/// Shrinks the viewport bottom so cards reveal slightly before the edge.
pub const REVEAL_ROOT_MARGIN: &str = "0px 0px -50px 0px";

/// Duration of the card reveal transition.
pub const REVEAL_DURATION_MS: u32 = 600;

/// Vertical offset of a card before it reveals.
pub const REVEAL_OFFSET_PX: f64 = 30.0;

/// Delay between inserting a banner and starting its fade-in.
pub const NOTICE_ENTER_DELAY_MS: u32 = 100;

/// Time from insertion until a banner starts fading out.
pub const NOTICE_DISPLAY_MS: u32 = 5000;

/// Length of the fade-out; the banner is removed when it ends.
pub const NOTICE_EXIT_MS: u32 = 300;

/// Scroll-depth percentages reported to analytics.
pub const SCROLL_DEPTH_MILESTONES: [u32; 4] = [25, 50, 75, 100];

/// Fields the contact form requires.
pub const CONTACT_FIELDS: [&str; 3] = ["name", "email", "message"];

/// Tolerance for floating-point comparisons.
pub const EPSILON: f64 = 1e-10;

// ============================================
// Domain Types
// ============================================

/// Banner severity. Anything other than `"success"` renders as an error.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Success,
    Error,
}

impl Severity {
    pub fn parse(s: &str) -> Severity {
        if s.eq_ignore_ascii_case("success") {
            Severity::Success
        } else {
            Severity::Error
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Severity::Success => "success",
            Severity::Error => "error",
        }
    }

    /// Banner background colour.
    pub fn color(self) -> &'static str {
        match self {
            Severity::Success => "#10b981",
            Severity::Error => "#ef4444",
        }
    }
}

/// The `as` attribute of a `<link rel="preload">`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PreloadKind {
    Style,
    Script,
}

impl PreloadKind {
    pub fn from_href(href: &str) -> PreloadKind {
        if href.ends_with(".css") {
            PreloadKind::Style
        } else {
            PreloadKind::Script
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            PreloadKind::Style => "style",
            PreloadKind::Script => "script",
        }
    }
}

// ============================================
// Computation Helpers
// ============================================

/// Fragment id of an in-page link (`"#about"` -> `Some("about")`).
/// A bare `"#"` or a non-fragment href yields `None`.
pub fn fragment_id(href: &str) -> Option<&str> {
    href.strip_prefix('#').filter(|id| !id.is_empty())
}

/// Scroll position that puts an anchor target just below the fixed header.
pub fn anchor_scroll_top(target_offset_top: f64, header_offset: f64) -> f64 {
    target_offset_top - header_offset
}

/// Clamp and normalize a value to 0.0..1.0 given a range.
pub fn normalize(value: f64, min: f64, max: f64) -> f64 {
    if (max - min).abs() < EPSILON {
        0.0
    } else {
        ((value - min) / (max - min)).clamp(0.0, 1.0)
    }
}

/// Case-insensitive substring test. `needle_lower` must already be lower-cased.
pub fn contains_folded(haystack: &str, needle_lower: &str) -> bool {
    haystack.to_lowercase().contains(needle_lower)
}

// ============================================
// Tests
// ============================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_severity_parse() {
        assert_eq!(Severity::parse("success"), Severity::Success);
        assert_eq!(Severity::parse("SUCCESS"), Severity::Success);
        assert_eq!(Severity::parse("error"), Severity::Error);
        assert_eq!(Severity::parse("warning"), Severity::Error);
        assert_eq!(Severity::Success.as_str(), "success");
    }

    #[test]
    fn test_preload_kind() {
        assert_eq!(PreloadKind::from_href("/css/style.css"), PreloadKind::Style);
        assert_eq!(PreloadKind::from_href("/js/main.js"), PreloadKind::Script);
        assert_eq!(PreloadKind::Style.as_str(), "style");
    }

    #[test]
    fn test_fragment_id() {
        assert_eq!(fragment_id("#about"), Some("about"));
        assert_eq!(fragment_id("#"), None);
        assert_eq!(fragment_id("/blog#about"), None);
        assert_eq!(fragment_id(""), None);
    }

    #[test]
    fn test_anchor_scroll_top() {
        assert!((anchor_scroll_top(500.0, HEADER_OFFSET_PX) - 420.0).abs() < EPSILON);
        assert!((anchor_scroll_top(20.0, HEADER_OFFSET_PX) + 60.0).abs() < EPSILON);
    }

    #[test]
    fn test_normalize() {
        assert!((normalize(50.0, 0.0, 100.0) - 0.5).abs() < EPSILON);
        assert!((normalize(150.0, 0.0, 100.0) - 1.0).abs() < EPSILON); // clamped
        assert!((normalize(10.0, 0.0, 0.0)).abs() < EPSILON); // empty range
    }

    #[test]
    fn test_contains_folded() {
        assert!(contains_folded("Rust SEO Guide", "seo"));
        assert!(contains_folded("谷歌排名 Tips", "tips"));
        assert!(!contains_folded("Rust SEO Guide", "python"));
    }
}
