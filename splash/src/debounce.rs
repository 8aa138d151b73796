//! Trailing-edge debounce: a burst of calls collapses into one invocation
//! once `delay_ms` passes without another call.

use std::cell::RefCell;
use std::rc::Rc;

/// One-shot timer capability. Dropping the returned handle must cancel the
/// task if it has not fired yet.
pub trait Scheduler {
    type Handle;

    fn schedule(&self, delay_ms: u32, task: Box<dyn FnOnce()>) -> Self::Handle;
}

/// Browser timers via `setTimeout`.
#[derive(Debug, Clone, Copy)]
pub struct BrowserScheduler;

impl Scheduler for BrowserScheduler {
    type Handle = gloo_timers::callback::Timeout;

    fn schedule(&self, delay_ms: u32, task: Box<dyn FnOnce()>) -> Self::Handle {
        gloo_timers::callback::Timeout::new(delay_ms, task)
    }
}

pub struct Debouncer<S: Scheduler> {
    scheduler: S,
    delay_ms: u32,
    action: Rc<dyn Fn()>,
    pending: RefCell<Option<S::Handle>>,
}

impl<S: Scheduler> Debouncer<S> {
    pub fn new(scheduler: S, delay_ms: u32, action: impl Fn() + 'static) -> Self {
        Self {
            scheduler,
            delay_ms,
            action: Rc::new(action),
            pending: RefCell::new(None),
        }
    }

    /// Restart the quiet period. The previous pending run (if any) is dropped.
    pub fn call(&self) {
        let action = Rc::clone(&self.action);
        let handle = self.scheduler.schedule(self.delay_ms, Box::new(move || action()));
        // Old handle drops here, cancelling its timer.
        self.pending.replace(Some(handle));
    }
}
