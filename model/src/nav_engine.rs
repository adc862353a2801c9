use wasm_bindgen::prelude::*;

/// Mobile navigation menu state. The DOM layer mirrors `is_open` onto the
/// `active` class of both the toggle button and the menu.
#[wasm_bindgen]
#[derive(Default)]
pub struct NavEngine {
    open: bool,
}

#[wasm_bindgen]
impl NavEngine {
    #[wasm_bindgen(constructor)]
    pub fn new() -> NavEngine {
        NavEngine { open: false }
    }

    /// Flip the menu. Returns the new state.
    pub fn toggle(&mut self) -> bool {
        self.open = !self.open;
        self.open
    }

    /// Close the menu (a menu link was followed). Returns true if it was open.
    pub fn close(&mut self) -> bool {
        std::mem::replace(&mut self.open, false)
    }

    #[wasm_bindgen(getter)]
    pub fn is_open(&self) -> bool {
        self.open
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_flips() {
        let mut nav = NavEngine::new();
        assert!(nav.toggle());
        assert!(!nav.toggle());
        assert!(nav.toggle());
        assert!(nav.is_open());
    }

    #[test]
    fn test_close_always_closes() {
        let mut nav = NavEngine::new();
        assert!(!nav.close());
        nav.toggle();
        assert!(nav.close());
        assert!(!nav.is_open());
    }
}
