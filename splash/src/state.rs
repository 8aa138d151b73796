//! Ephemeral page state. Nothing here survives a reload.

use leptos::prelude::*;

#[derive(Debug, Clone, Copy)]
pub struct UiState {
    pub menu_open: RwSignal<bool>,
    /// Floating CTA is visible (scrolled far enough on a long page).
    pub scrolled: RwSignal<bool>,
    pub initialized: RwSignal<bool>,
    pub video_visible: RwSignal<bool>,
}

impl UiState {
    pub fn new() -> Self {
        Self {
            menu_open: RwSignal::new(false),
            scrolled: RwSignal::new(false),
            initialized: RwSignal::new(false),
            video_visible: RwSignal::new(false),
        }
    }

    pub fn toggle_menu(&self) {
        self.menu_open.update(|open| *open = !*open);
    }

    pub fn toggle_video(&self) {
        self.video_visible.update(|visible| *visible = !*visible);
    }
}

impl Default for UiState {
    fn default() -> Self {
        Self::new()
    }
}
