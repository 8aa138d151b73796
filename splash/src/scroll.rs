//! Floating call-to-action visibility, driven by debounced scroll/resize.

use crate::debounce::{BrowserScheduler, Debouncer, Scheduler};
use crate::state::UiState;
use leptos::prelude::*;
use std::rc::Rc;
use wasm_bindgen::prelude::*;

pub const SCROLL_DEBOUNCE_MS: u32 = 50;
pub const RESIZE_DEBOUNCE_MS: u32 = 100;
/// Suppresses the CTA flashing in before the first real measurement.
pub const STARTUP_DELAY_MS: u32 = 100;

/// Content must be taller than the viewport by more than this (px).
pub const CONTENT_OVERFLOW_THRESHOLD: f64 = 100.0;
/// Page must be scrolled further than this (px).
pub const SCROLL_OFFSET_THRESHOLD: f64 = 50.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollMetrics {
    pub scroll_y: f64,
    pub viewport_height: f64,
    pub document_height: f64,
}

/// Where page measurements come from.
pub trait MetricsSource {
    fn measure(&self) -> Option<ScrollMetrics>;
}

/// The live window; `None` outside a browser.
pub struct WindowMetrics;

impl MetricsSource for WindowMetrics {
    fn measure(&self) -> Option<ScrollMetrics> {
        let window = web_sys::window()?;
        let document_height = window
            .document()
            .and_then(|d| d.document_element())
            .map(|el| f64::from(el.scroll_height()))?;
        Some(ScrollMetrics {
            scroll_y: window.scroll_y().ok()?,
            viewport_height: window.inner_height().ok()?.as_f64()?,
            document_height,
        })
    }
}

pub fn floating_cta_visible(initialized: bool, metrics: ScrollMetrics) -> bool {
    let overflows =
        metrics.document_height - metrics.viewport_height > CONTENT_OVERFLOW_THRESHOLD;
    let scrolled = metrics.scroll_y > SCROLL_OFFSET_THRESHOLD;
    initialized && overflows && scrolled
}

fn recompute(ui: UiState, metrics: &dyn MetricsSource) {
    if let Some(m) = metrics.measure() {
        ui.scrolled
            .set(floating_cta_visible(ui.initialized.get_untracked(), m));
    }
}

/// Scroll and resize each go through their own debouncer; the startup delay
/// runs on the same scheduler. Dropping the tracker cancels anything pending.
pub struct FloatingCtaTracker<S: Scheduler> {
    scroll: Debouncer<S>,
    resize: Debouncer<S>,
    _startup: S::Handle,
}

impl<S: Scheduler + Clone> FloatingCtaTracker<S> {
    pub fn new(scheduler: S, metrics: impl MetricsSource + 'static, ui: UiState) -> Self {
        let metrics: Rc<dyn MetricsSource> = Rc::new(metrics);

        let scroll = {
            let metrics = Rc::clone(&metrics);
            Debouncer::new(scheduler.clone(), SCROLL_DEBOUNCE_MS, move || {
                recompute(ui, &*metrics)
            })
        };
        let resize = {
            let metrics = Rc::clone(&metrics);
            Debouncer::new(scheduler.clone(), RESIZE_DEBOUNCE_MS, move || {
                recompute(ui, &*metrics)
            })
        };
        let startup = scheduler.schedule(
            STARTUP_DELAY_MS,
            Box::new(move || {
                ui.initialized.set(true);
                recompute(ui, &*metrics);
            }),
        );

        Self {
            scroll,
            resize,
            _startup: startup,
        }
    }

    pub fn on_scroll(&self) {
        self.scroll.call();
    }

    pub fn on_resize(&self) {
        self.resize.call();
    }
}

/// Install the debounced window listeners and the startup delay.
///
/// Listeners (and the tracker they share) stay alive for the page lifetime.
pub fn track_floating_cta(ui: UiState) {
    let Some(window) = web_sys::window() else {
        return;
    };

    let tracker = Rc::new(FloatingCtaTracker::new(BrowserScheduler, WindowMetrics, ui));

    let on_scroll = {
        let tracker = Rc::clone(&tracker);
        Closure::<dyn Fn()>::new(move || tracker.on_scroll())
    };
    let on_resize = Closure::<dyn Fn()>::new(move || tracker.on_resize());

    let _ = window.add_event_listener_with_callback("scroll", on_scroll.as_ref().unchecked_ref());
    let _ = window.add_event_listener_with_callback("resize", on_resize.as_ref().unchecked_ref());
    on_scroll.forget();
    on_resize.forget();
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::debounce::testing::ManualScheduler;
    use std::cell::Cell;

    fn metrics(scroll_y: f64, viewport_height: f64, document_height: f64) -> ScrollMetrics {
        ScrollMetrics {
            scroll_y,
            viewport_height,
            document_height,
        }
    }

    #[test]
    fn hidden_until_initialized() {
        assert!(!floating_cta_visible(false, metrics(900.0, 800.0, 4000.0)));
        assert!(floating_cta_visible(true, metrics(900.0, 800.0, 4000.0)));
    }

    #[test]
    fn hidden_when_page_barely_overflows() {
        assert!(!floating_cta_visible(true, metrics(60.0, 800.0, 850.0)));
        assert!(!floating_cta_visible(true, metrics(60.0, 800.0, 900.0)));
        assert!(floating_cta_visible(true, metrics(60.0, 800.0, 901.0)));
    }

    #[test]
    fn hidden_near_top_of_page() {
        assert!(!floating_cta_visible(true, metrics(0.0, 800.0, 4000.0)));
        assert!(!floating_cta_visible(true, metrics(50.0, 800.0, 4000.0)));
        assert!(floating_cta_visible(true, metrics(51.0, 800.0, 4000.0)));
    }

    #[test]
    fn short_page_never_shows_cta() {
        assert!(!floating_cta_visible(true, metrics(0.0, 1000.0, 600.0)));
    }

    /// Fixed measurements that count how often they are read.
    #[derive(Clone)]
    struct FakePage {
        metrics: Rc<Cell<ScrollMetrics>>,
        reads: Rc<Cell<u32>>,
    }

    impl FakePage {
        fn new(m: ScrollMetrics) -> Self {
            Self {
                metrics: Rc::new(Cell::new(m)),
                reads: Rc::new(Cell::new(0)),
            }
        }
    }

    impl MetricsSource for FakePage {
        fn measure(&self) -> Option<ScrollMetrics> {
            self.reads.set(self.reads.get() + 1);
            Some(self.metrics.get())
        }
    }

    fn scrolled_long_page() -> ScrollMetrics {
        metrics(900.0, 800.0, 4000.0)
    }

    fn started(
        clock: &ManualScheduler,
        page: &FakePage,
        ui: UiState,
    ) -> FloatingCtaTracker<ManualScheduler> {
        let tracker = FloatingCtaTracker::new(clock.clone(), page.clone(), ui);
        clock.advance(u64::from(STARTUP_DELAY_MS));
        page.reads.set(0);
        tracker
    }

    #[test]
    fn cta_appears_only_once_startup_delay_elapses() {
        let clock = ManualScheduler::default();
        let page = FakePage::new(scrolled_long_page());
        let ui = UiState::new();
        let _tracker = FloatingCtaTracker::new(clock.clone(), page.clone(), ui);

        clock.advance(99);
        assert!(!ui.initialized.get_untracked());
        assert!(!ui.scrolled.get_untracked());
        assert_eq!(page.reads.get(), 0);

        clock.advance(1);
        assert!(ui.initialized.get_untracked());
        assert!(ui.scrolled.get_untracked());
    }

    #[test]
    fn startup_on_short_page_keeps_cta_hidden() {
        let clock = ManualScheduler::default();
        let page = FakePage::new(metrics(0.0, 1000.0, 600.0));
        let ui = UiState::new();
        let _tracker = FloatingCtaTracker::new(clock.clone(), page.clone(), ui);
        clock.advance(500);
        assert!(ui.initialized.get_untracked());
        assert!(!ui.scrolled.get_untracked());
    }

    #[test]
    fn scroll_burst_recomputes_once_after_quiet_period() {
        let clock = ManualScheduler::default();
        let page = FakePage::new(metrics(0.0, 800.0, 4000.0));
        let ui = UiState::new();
        let tracker = started(&clock, &page, ui);
        assert!(!ui.scrolled.get_untracked());

        page.metrics.set(scrolled_long_page());
        for _ in 0..5 {
            tracker.on_scroll();
            clock.advance(10);
        }
        clock.advance(39);
        assert_eq!(page.reads.get(), 0);
        assert!(!ui.scrolled.get_untracked());

        clock.advance(1);
        assert_eq!(page.reads.get(), 1);
        assert!(ui.scrolled.get_untracked());

        clock.advance(1000);
        assert_eq!(page.reads.get(), 1);
    }

    #[test]
    fn resize_recomputes_once_after_its_own_delay() {
        let clock = ManualScheduler::default();
        let page = FakePage::new(scrolled_long_page());
        let ui = UiState::new();
        let tracker = started(&clock, &page, ui);

        page.metrics.set(metrics(900.0, 3950.0, 4000.0));
        tracker.on_resize();
        tracker.on_resize();
        clock.advance(99);
        assert_eq!(page.reads.get(), 0);
        assert!(ui.scrolled.get_untracked());

        clock.advance(1);
        assert_eq!(page.reads.get(), 1);
        assert!(!ui.scrolled.get_untracked());
    }
}
