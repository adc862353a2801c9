//! # Header Engine
//!
//! Scroll reactor for the fixed site header. Two independent states are
//! derived on every scroll event:
//!
//! - **Elevation**: elevated while the offset is above `elevate_threshold`.
//!   A pure function of the current offset, no hysteresis.
//! - **Visibility**: hidden while scrolling down past `hide_threshold`,
//!   shown on any upward scroll or near the top. Needs the previous offset,
//!   which is the only state carried between events.
//!
//! ## Frame buffer
//! `frame()` returns the derived state as a flat `Vec<f64>` so a JS host can
//! read everything in one boundary crossing. The Rust DOM layer uses the
//! string getters (`background()`, `box_shadow()`, `transform()`) instead.

use seoblog_shared::{SiteConfig, ELEVATE_THRESHOLD_PX, HIDE_THRESHOLD_PX};
use wasm_bindgen::prelude::*;

// ============================================
// Frame buffer offsets
// ============================================

pub const F_ELEVATED: usize = 0; // 0.0 / 1.0
pub const F_HIDDEN: usize = 1; // 0.0 / 1.0
pub const F_OFFSET: usize = 2; // current scroll offset
pub const FRAME_SIZE: usize = 3;

const BACKGROUND_NORMAL: &str = "rgba(255, 255, 255, 0.95)";
const BACKGROUND_ELEVATED: &str = "rgba(255, 255, 255, 0.98)";
const SHADOW_ELEVATED: &str = "0 2px 20px rgba(0, 0, 0, 0.1)";
const TRANSFORM_SHOWN: &str = "translateY(0)";
const TRANSFORM_HIDDEN: &str = "translateY(-100%)";

#[wasm_bindgen]
pub struct HeaderEngine {
    // --- Carried state ---
    last_offset: f64,

    // --- Derived state (recomputed every event) ---
    elevated: bool,
    hidden: bool,

    // --- Configuration ---
    elevate_threshold: f64,
    hide_threshold: f64,

    data_version: u32,
}

#[wasm_bindgen]
impl HeaderEngine {
    #[wasm_bindgen(constructor)]
    pub fn new() -> HeaderEngine {
        HeaderEngine {
            last_offset: 0.0,
            elevated: false,
            hidden: false,
            elevate_threshold: ELEVATE_THRESHOLD_PX,
            hide_threshold: HIDE_THRESHOLD_PX,
            data_version: 0,
        }
    }

    pub fn set_elevate_threshold(&mut self, px: f64) {
        self.elevate_threshold = px;
    }

    pub fn set_hide_threshold(&mut self, px: f64) {
        self.hide_threshold = px;
    }

    /// Seed the previous offset, e.g. when the page loads already scrolled.
    /// Derived state is left untouched until the first scroll event.
    pub fn set_initial_offset(&mut self, offset: f64) {
        self.last_offset = offset;
    }

    /// Feed one scroll event. Returns true if either derived state changed.
    pub fn on_scroll(&mut self, offset: f64) -> bool {
        let elevated = offset > self.elevate_threshold;
        let hidden = offset > self.last_offset && offset > self.hide_threshold;
        self.last_offset = offset;

        let changed = elevated != self.elevated || hidden != self.hidden;
        self.elevated = elevated;
        self.hidden = hidden;
        if changed {
            self.data_version = self.data_version.wrapping_add(1);
        }
        changed
    }

    #[wasm_bindgen(getter)]
    pub fn elevated(&self) -> bool {
        self.elevated
    }

    #[wasm_bindgen(getter)]
    pub fn hidden(&self) -> bool {
        self.hidden
    }

    #[wasm_bindgen(getter)]
    pub fn last_offset(&self) -> f64 {
        self.last_offset
    }

    pub fn background(&self) -> String {
        let background = if self.elevated { BACKGROUND_ELEVATED } else { BACKGROUND_NORMAL };
        background.to_string()
    }

    pub fn box_shadow(&self) -> String {
        let shadow = if self.elevated { SHADOW_ELEVATED } else { "none" };
        shadow.to_string()
    }

    pub fn transform(&self) -> String {
        let transform = if self.hidden { TRANSFORM_HIDDEN } else { TRANSFORM_SHOWN };
        transform.to_string()
    }

    pub fn frame(&self) -> Vec<f64> {
        let mut frame = vec![0.0; FRAME_SIZE];
        frame[F_ELEVATED] = if self.elevated { 1.0 } else { 0.0 };
        frame[F_HIDDEN] = if self.hidden { 1.0 } else { 0.0 };
        frame[F_OFFSET] = self.last_offset;
        frame
    }

    pub fn data_version(&self) -> u32 {
        self.data_version
    }
}

impl HeaderEngine {
    pub fn from_config(config: &SiteConfig) -> HeaderEngine {
        let mut engine = HeaderEngine::new();
        engine.set_elevate_threshold(config.elevate_threshold_px);
        engine.set_hide_threshold(config.hide_threshold_px);
        engine
    }
}

impl Default for HeaderEngine {
    fn default() -> Self {
        HeaderEngine::new()
    }
}
