//! # Reveal Engine
//!
//! One-shot viewport reveal tracking. Elements are registered once at start
//! and each moves `Hidden -> Revealed` exactly once, on its first
//! intersection. There is no way back: leaving the viewport does nothing, and
//! a revealed element is released so the observer can stop watching it.
//!
//! The same engine backs the card animator (`.service-card`, `.article-card`,
//! `.case-card`) and the lazy image loader (`img[data-src]`).

use seoblog_shared::{SiteConfig, REVEAL_DURATION_MS, REVEAL_OFFSET_PX};
use wasm_bindgen::prelude::*;

#[wasm_bindgen]
pub struct RevealEngine {
    revealed: Vec<bool>,
    duration_ms: u32,
    offset_px: f64,
}

#[wasm_bindgen]
impl RevealEngine {
    #[wasm_bindgen(constructor)]
    pub fn new() -> RevealEngine {
        RevealEngine {
            revealed: Vec::new(),
            duration_ms: REVEAL_DURATION_MS,
            offset_px: REVEAL_OFFSET_PX,
        }
    }

    /// Register an element in its hidden baseline. Returns its index.
    pub fn register(&mut self) -> usize {
        self.revealed.push(false);
        self.revealed.len() - 1
    }

    /// Report an intersection change. Returns true only on the one call that
    /// reveals the element; the caller should then animate and unobserve it.
    pub fn on_intersect(&mut self, index: usize, intersecting: bool) -> bool {
        match self.revealed.get_mut(index) {
            Some(revealed) if intersecting && !*revealed => {
                *revealed = true;
                true
            }
            _ => false,
        }
    }

    pub fn is_revealed(&self, index: usize) -> bool {
        self.revealed.get(index).copied().unwrap_or(false)
    }

    pub fn len(&self) -> usize {
        self.revealed.len()
    }

    pub fn is_empty(&self) -> bool {
        self.revealed.is_empty()
    }

    /// Elements still waiting for their first intersection.
    pub fn pending_count(&self) -> usize {
        self.revealed.iter().filter(|r| !**r).count()
    }

    /// Transform for the hidden baseline.
    pub fn hidden_transform(&self) -> String {
        format!("translateY({}px)", self.offset_px)
    }

    /// CSS `transition` value for the reveal animation.
    pub fn transition(&self) -> String {
        let secs = self.duration_ms as f64 / 1000.0;
        format!("opacity {secs}s ease, transform {secs}s ease")
    }
}

impl RevealEngine {
    pub fn from_config(config: &SiteConfig) -> RevealEngine {
        RevealEngine {
            revealed: Vec::new(),
            duration_ms: config.reveal_duration_ms,
            offset_px: config.reveal_offset_px,
        }
    }
}

impl Default for RevealEngine {
    fn default() -> Self {
        RevealEngine::new()
    }
}
