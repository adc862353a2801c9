// ============================================================================
// NOTICE ENGINE: Transient status banners
// ============================================================================
//
// Each show() issues a banner id and records when it was shown. The banner
// then walks a fixed timeline measured from its own show time:
//
//     0            enter_delay        display            display + exit
//     |-- Entering --|---- Shown ---------|---- Leaving ------|-- Removed
//
// Banners never interact. Two banners shown 2s apart each get their own
// fade-out and removal; nothing is deduplicated or cancelled. The live list
// exists only so the DOM layer can prune finished banners and report counts.
//
// ============================================================================

use seoblog_shared::{
    Severity, SiteConfig, NOTICE_DISPLAY_MS, NOTICE_ENTER_DELAY_MS, NOTICE_EXIT_MS,
};
use wasm_bindgen::prelude::*;

/// Where a banner is on its timeline.
#[wasm_bindgen]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NoticePhase {
    /// Inserted, still transparent and off to the side.
    Entering = 0,
    Shown = 1,
    /// Fading out.
    Leaving = 2,
    /// Detached from the document.
    Removed = 3,
}

#[derive(Clone, Debug)]
struct Notice {
    id: u32,
    severity: Severity,
    shown_at_ms: f64,
}

#[wasm_bindgen]
pub struct NoticeEngine {
    live: Vec<Notice>,
    next_id: u32,
    enter_delay_ms: u32,
    display_ms: u32,
    exit_ms: u32,
}

#[wasm_bindgen]
impl NoticeEngine {
    #[wasm_bindgen(constructor)]
    pub fn new() -> NoticeEngine {
        NoticeEngine {
            live: Vec::new(),
            next_id: 1,
            enter_delay_ms: NOTICE_ENTER_DELAY_MS,
            display_ms: NOTICE_DISPLAY_MS,
            exit_ms: NOTICE_EXIT_MS,
        }
    }

    pub fn set_timing(&mut self, enter_delay_ms: u32, display_ms: u32, exit_ms: u32) {
        self.enter_delay_ms = enter_delay_ms;
        self.display_ms = display_ms;
        self.exit_ms = exit_ms;
    }

    /// Register a new banner. `severity` is "success" or anything else for
    /// an error banner.
    pub fn show(&mut self, severity: &str, now_ms: f64) -> u32 {
        let id = self.next_id;
        self.next_id = self.next_id.wrapping_add(1);
        self.live.push(Notice {
            id,
            severity: Severity::parse(severity),
            shown_at_ms: now_ms,
        });
        id
    }

    /// Phase of banner `id` at `now_ms`. Unknown ids are `Removed`.
    pub fn phase(&self, id: u32, now_ms: f64) -> NoticePhase {
        self.find(id)
            .map(|n| self.phase_for_elapsed(now_ms - n.shown_at_ms))
            .unwrap_or(NoticePhase::Removed)
    }

    /// Drop banners whose removal time has passed. Returns how many.
    pub fn prune(&mut self, now_ms: f64) -> usize {
        let remove_at = self.remove_at_ms() as f64;
        let before = self.live.len();
        self.live.retain(|n| now_ms - n.shown_at_ms < remove_at);
        before - self.live.len()
    }

    /// Forget banner `id` (its node was removed).
    pub fn remove(&mut self, id: u32) -> bool {
        let before = self.live.len();
        self.live.retain(|n| n.id != id);
        before != self.live.len()
    }

    pub fn live_count(&self) -> usize {
        self.live.len()
    }

    pub fn enter_delay_ms(&self) -> u32 {
        self.enter_delay_ms
    }

    /// Offset from show time at which the fade-out starts.
    pub fn leave_at_ms(&self) -> u32 {
        self.display_ms
    }

    /// Offset from show time at which the banner is removed.
    pub fn remove_at_ms(&self) -> u32 {
        self.display_ms.saturating_add(self.exit_ms)
    }

    /// Inline style for a freshly inserted banner.
    pub fn banner_css(&self, id: u32) -> String {
        let severity = self.find(id).map(|n| n.severity).unwrap_or(Severity::Error);
        format!(
            "position: fixed; top: 100px; right: 20px; background: {}; color: white; \
             padding: 15px 20px; border-radius: 8px; box-shadow: 0 4px 12px rgba(0, 0, 0, 0.15); \
             z-index: 1001; opacity: 0; transform: translateX(100%); transition: all {}s ease;",
            severity.color(),
            self.exit_ms as f64 / 1000.0,
        )
    }
}

impl NoticeEngine {
    pub fn from_config(config: &SiteConfig) -> NoticeEngine {
        let mut engine = NoticeEngine::new();
        engine.set_timing(
            config.notice_enter_delay_ms,
            config.notice_display_ms,
            config.notice_exit_ms,
        );
        engine
    }

    fn find(&self, id: u32) -> Option<&Notice> {
        self.live.iter().find(|n| n.id == id)
    }

    fn phase_for_elapsed(&self, elapsed_ms: f64) -> NoticePhase {
        if elapsed_ms < self.enter_delay_ms as f64 {
            NoticePhase::Entering
        } else if elapsed_ms < self.display_ms as f64 {
            NoticePhase::Shown
        } else if elapsed_ms < self.remove_at_ms() as f64 {
            NoticePhase::Leaving
        } else {
            NoticePhase::Removed
        }
    }
}

impl Default for NoticeEngine {
    fn default() -> Self {
        NoticeEngine::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_banner_timeline() {
        let mut engine = NoticeEngine::new();
        let id = engine.show("success", 1_000.0);
        assert_eq!(engine.phase(id, 1_000.0), NoticePhase::Entering);
        assert_eq!(engine.phase(id, 1_100.0), NoticePhase::Shown);
        assert_eq!(engine.phase(id, 5_999.0), NoticePhase::Shown);
        assert_eq!(engine.phase(id, 6_000.0), NoticePhase::Leaving);
        assert_eq!(engine.phase(id, 6_299.0), NoticePhase::Leaving);
        assert_eq!(engine.phase(id, 6_300.0), NoticePhase::Removed);
    }

    #[test]
    fn test_two_banners_are_independent() {
        let mut engine = NoticeEngine::new();
        let first = engine.show("success", 0.0);
        let second = engine.show("error", 2_000.0);
        assert_ne!(first, second);
        assert_eq!(engine.live_count(), 2);

        // First banner is gone while the second is still on screen.
        assert_eq!(engine.phase(first, 5_300.0), NoticePhase::Removed);
        assert_eq!(engine.phase(second, 5_300.0), NoticePhase::Shown);
        assert_eq!(engine.prune(5_300.0), 1);
        assert_eq!(engine.live_count(), 1);

        assert_eq!(engine.phase(second, 7_000.0), NoticePhase::Leaving);
        assert_eq!(engine.phase(second, 7_300.0), NoticePhase::Removed);
        assert_eq!(engine.prune(7_300.0), 1);
        assert_eq!(engine.live_count(), 0);
    }

    #[test]
    fn test_schedule_offsets() {
        let engine = NoticeEngine::new();
        assert_eq!(engine.enter_delay_ms(), 100);
        assert_eq!(engine.leave_at_ms(), 5_000);
        assert_eq!(engine.remove_at_ms(), 5_300);
    }

    #[test]
    fn test_remove_and_unknown_ids() {
        let mut engine = NoticeEngine::new();
        let id = engine.show("success", 0.0);
        assert!(engine.remove(id));
        assert!(!engine.remove(id));
        assert_eq!(engine.phase(id, 0.0), NoticePhase::Removed);
    }

    #[test]
    fn test_banner_css_uses_severity_color() {
        let mut engine = NoticeEngine::new();
        let ok = engine.show("success", 0.0);
        let bad = engine.show("error", 0.0);
        assert!(engine.banner_css(ok).contains("#10b981"));
        assert!(engine.banner_css(bad).contains("#ef4444"));
        assert!(engine.banner_css(bad).contains("transition: all 0.3s ease"));
    }

    #[test]
    fn test_custom_timing() {
        let config = SiteConfig {
            notice_display_ms: 1_000,
            notice_exit_ms: 50,
            ..SiteConfig::default()
        };
        let mut engine = NoticeEngine::from_config(&config);
        let id = engine.show("success", 0.0);
        assert_eq!(engine.phase(id, 1_049.0), NoticePhase::Leaving);
        assert_eq!(engine.phase(id, 1_050.0), NoticePhase::Removed);
    }
}
