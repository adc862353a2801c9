// ============================================================================
// FILTER ENGINE: Client-side article card filter + per-input debouncer
// ============================================================================
//
// THE PATTERN:
//    - The DOM layer captures each `.article-card`'s title and excerpt once at
//      startup and registers them with add_card() (or load_cards(json)).
//    - Every keystroke in a search input goes to that input's Debouncer:
//      schedule(value) returns a ticket and supersedes any pending ticket.
//    - When the browser timer for a ticket fires, fire(ticket) hands back the
//      query only if that ticket is still the pending one.
//    - apply(query) recomputes the visibility of every card.
//
// THRESHOLD:
//    Queries shorter than min_chars are ignored. apply() returns false and
//    the previous visibility is left exactly as it was (no reset).
//
// MATCHING:
//    Case-insensitive substring containment against title OR excerpt. No
//    index is kept: every apply() lower-cases and scans every card again.
//
// ============================================================================

use seoblog_shared::{contains_folded, SiteConfig, SEARCH_DEBOUNCE_MS, SEARCH_MIN_CHARS};
use serde::Deserialize;
use wasm_bindgen::prelude::*;

// ── Card ───────────────────────────────────────────────────────────────────

#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default)]
struct Card {
    title: String,
    excerpt: String,
}

impl Card {
    fn matches(&self, query_lower: &str) -> bool {
        contains_folded(&self.title, query_lower) || contains_folded(&self.excerpt, query_lower)
    }
}

// ── FilterEngine ───────────────────────────────────────────────────────────

#[wasm_bindgen]
pub struct FilterEngine {
    cards: Vec<Card>,
    /// Parallel to `cards`. Cards start visible.
    visible: Vec<bool>,
    min_chars: usize,
    /// Last query that passed the threshold.
    query: String,
    data_version: u32,
}

#[wasm_bindgen]
impl FilterEngine {
    #[wasm_bindgen(constructor)]
    pub fn new() -> FilterEngine {
        FilterEngine {
            cards: Vec::new(),
            visible: Vec::new(),
            min_chars: SEARCH_MIN_CHARS,
            query: String::new(),
            data_version: 0,
        }
    }

    // ── Version tracking ───────────────────────────────────────────────

    pub fn data_version(&self) -> u32 {
        self.data_version
    }

    fn bump_version(&mut self) {
        self.data_version = self.data_version.wrapping_add(1);
    }

    // ── Cards ──────────────────────────────────────────────────────────

    /// Register a card. Returns its index.
    pub fn add_card(&mut self, title: &str, excerpt: &str) -> usize {
        self.cards.push(Card {
            title: title.to_string(),
            excerpt: excerpt.to_string(),
        });
        self.visible.push(true);
        self.bump_version();
        self.cards.len() - 1
    }

    /// Replace all cards from a JSON array of `{"title":..,"excerpt":..}`.
    /// Returns the number of cards loaded; malformed JSON loads nothing.
    pub fn load_cards(&mut self, json: &str) -> usize {
        let cards: Vec<Card> = serde_json::from_str(json).unwrap_or_default();
        self.visible = vec![true; cards.len()];
        self.cards = cards;
        self.query.clear();
        self.bump_version();
        self.cards.len()
    }

    pub fn card_count(&self) -> usize {
        self.cards.len()
    }

    // ── Filtering ──────────────────────────────────────────────────────

    pub fn set_min_chars(&mut self, n: usize) {
        self.min_chars = n;
    }

    /// Run the filter. Returns false, changing nothing, when the query is
    /// below the threshold; otherwise recomputes every card and returns true.
    /// Length is measured in UTF-16 units, the same as the input's
    /// `value.length`.
    pub fn apply(&mut self, query: &str) -> bool {
        if query.encode_utf16().count() < self.min_chars {
            return false;
        }

        let query_lower = query.to_lowercase();
        for (card, visible) in self.cards.iter().zip(self.visible.iter_mut()) {
            *visible = card.matches(&query_lower);
        }
        self.query = query.to_string();
        self.bump_version();
        true
    }

    pub fn is_visible(&self, index: usize) -> bool {
        self.visible.get(index).copied().unwrap_or(false)
    }

    pub fn visible_count(&self) -> usize {
        self.visible.iter().filter(|v| **v).count()
    }

    pub fn current_query(&self) -> String {
        self.query.clone()
    }
}

impl FilterEngine {
    pub fn from_config(config: &SiteConfig) -> FilterEngine {
        let mut engine = FilterEngine::new();
        engine.set_min_chars(config.search_min_chars);
        engine
    }

    pub fn visibility(&self) -> &[bool] {
        &self.visible
    }
}

impl Default for FilterEngine {
    fn default() -> Self {
        FilterEngine::new()
    }
}

// ── Debouncer ──────────────────────────────────────────────────────────────

/// Cancel-and-reschedule bookkeeping for one input field. The browser timer
/// is owned by the DOM layer; this tracks which scheduled run is current so
/// that at most one run is ever pending and stale timers are ignored.
#[wasm_bindgen]
pub struct Debouncer {
    delay_ms: u32,
    next_ticket: u32,
    pending: Option<(u32, String)>,
}

#[wasm_bindgen]
impl Debouncer {
    #[wasm_bindgen(constructor)]
    pub fn new(delay_ms: u32) -> Debouncer {
        Debouncer {
            delay_ms,
            next_ticket: 1,
            pending: None,
        }
    }

    /// Record a keystroke. Supersedes any pending run and returns the ticket
    /// the caller should pass to `fire` after `delay_ms`.
    pub fn schedule(&mut self, value: &str) -> u32 {
        let ticket = self.next_ticket;
        self.next_ticket = self.next_ticket.wrapping_add(1);
        self.pending = Some((ticket, value.to_string()));
        ticket
    }

    /// Timer callback. Returns the value to run with, or None if `ticket`
    /// was superseded or already fired.
    pub fn fire(&mut self, ticket: u32) -> Option<String> {
        match self.pending.take() {
            Some((current, value)) if current == ticket => Some(value),
            other => {
                self.pending = other;
                None
            }
        }
    }

    pub fn cancel(&mut self) {
        self.pending = None;
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    #[wasm_bindgen(getter)]
    pub fn delay_ms(&self) -> u32 {
        self.delay_ms
    }
}

impl Default for Debouncer {
    fn default() -> Self {
        Debouncer::new(SEARCH_DEBOUNCE_MS)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn engine() -> FilterEngine {
        let mut engine = FilterEngine::new();
        engine.add_card("Technical SEO Checklist", "Crawl budget, sitemaps and robots.txt");
        engine.add_card("Content Marketing", "Writing articles that rank");
        engine.add_card("Local Search", "Google Business Profile tips");
        engine
    }

    #[test]
    fn test_cards_start_visible() {
        let engine = engine();
        assert_eq!(engine.card_count(), 3);
        assert_eq!(engine.visible_count(), 3);
    }

    #[test]
    fn test_matches_title_or_excerpt_case_insensitive() {
        let mut engine = engine();
        assert!(engine.apply("seo"));
        assert_eq!(engine.visibility(), &[true, false, false]);

        assert!(engine.apply("RANK"));
        assert_eq!(engine.visibility(), &[false, true, false]);

        assert!(engine.apply("tips"));
        assert_eq!(engine.visibility(), &[false, false, true]);
    }

    #[test]
    fn test_no_match_hides_everything() {
        let mut engine = engine();
        assert!(engine.apply("zzz"));
        assert_eq!(engine.visible_count(), 0);
    }

    #[test]
    fn test_short_query_leaves_state_untouched() {
        let mut engine = engine();
        engine.apply("local");
        let before = engine.visibility().to_vec();
        let version = engine.data_version();

        assert!(!engine.apply("c"));
        assert!(!engine.apply(""));
        assert_eq!(engine.visibility(), before.as_slice());
        assert_eq!(engine.data_version(), version);
        assert_eq!(engine.current_query(), "local");
    }

    #[test]
    fn test_threshold_counts_utf16_units_not_bytes() {
        let mut engine = FilterEngine::new();
        engine.add_card("谷歌优化指南", "");
        engine.add_card("Other", "");
        assert!(!engine.apply("谷"));
        assert!(engine.apply("谷歌"));
        assert_eq!(engine.visibility(), &[true, false]);
    }

    #[test]
    fn test_astral_char_meets_threshold() {
        // One emoji is two UTF-16 units, enough to run the filter.
        let mut engine = FilterEngine::new();
        engine.add_card("Launch day 😀", "");
        engine.add_card("Other", "");
        assert!(engine.apply("😀"));
        assert_eq!(engine.visibility(), &[true, false]);
    }

    #[test]
    fn test_apply_is_idempotent() {
        let mut engine = engine();
        engine.apply("content");
        let first = engine.visibility().to_vec();
        engine.apply("content");
        assert_eq!(engine.visibility(), first.as_slice());
    }

    #[test]
    fn test_load_cards_json() {
        let mut engine = FilterEngine::new();
        let n = engine.load_cards(r#"[{"title":"A guide","excerpt":"x"},{"title":"B"}]"#);
        assert_eq!(n, 2);
        assert!(engine.apply("guide"));
        assert_eq!(engine.visibility(), &[true, false]);

        assert_eq!(engine.load_cards("not json"), 0);
        assert_eq!(engine.card_count(), 0);
    }

    #[test]
    fn test_is_visible_out_of_range() {
        let engine = engine();
        assert!(!engine.is_visible(99));
    }

    #[test]
    fn test_debounce_burst_fires_once_with_last_value() {
        let mut debouncer = Debouncer::new(300);
        let tickets: Vec<u32> = ["s", "se", "seo"].iter().map(|v| debouncer.schedule(v)).collect();

        // Timers fire in order; only the last ticket is still current.
        let fired: Vec<String> = tickets.iter().filter_map(|t| debouncer.fire(*t)).collect();
        assert_eq!(fired, vec!["seo".to_string()]);
        assert!(!debouncer.is_pending());
    }

    #[test]
    fn test_debounce_at_most_one_pending() {
        let mut debouncer = Debouncer::default();
        let first = debouncer.schedule("a");
        let second = debouncer.schedule("ab");
        assert!(debouncer.is_pending());
        assert_eq!(debouncer.fire(first), None);
        assert!(debouncer.is_pending(), "stale timer must not clear the current run");
        assert_eq!(debouncer.fire(second), Some("ab".to_string()));
        assert_eq!(debouncer.fire(second), None);
    }

    #[test]
    fn test_debounce_cancel() {
        let mut debouncer = Debouncer::default();
        let ticket = debouncer.schedule("query");
        debouncer.cancel();
        assert_eq!(debouncer.fire(ticket), None);
        assert_eq!(debouncer.delay_ms(), SEARCH_DEBOUNCE_MS);
    }
}
