//! Mobile navigation panel: closes on clicks outside its container.

use crate::state::UiState;
use leptos::html;
use leptos::prelude::*;
use wasm_bindgen::prelude::*;

/// "Does this container hold that click target?"
pub trait ContainsTarget<T> {
    fn contains_target(&self, target: &T) -> bool;
}

impl ContainsTarget<web_sys::Node> for web_sys::Element {
    fn contains_target(&self, target: &web_sys::Node) -> bool {
        self.contains(Some(target))
    }
}

/// True when an open menu should close for this click. An unmounted
/// container never closes the menu; a click with no target node counts as
/// outside.
pub fn closes_menu<C, T>(open: bool, container: Option<&C>, target: Option<&T>) -> bool
where
    C: ContainsTarget<T>,
{
    match (open, container) {
        (true, Some(container)) => !target.is_some_and(|t| container.contains_target(t)),
        _ => false,
    }
}

/// Document-level click listener bound to `container`, kept for the page lifetime.
pub fn close_on_outside_click(ui: UiState, container: NodeRef<html::Div>) {
    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        return;
    };

    let closure = Closure::<dyn Fn(web_sys::Event)>::new(move |event: web_sys::Event| {
        let target = event.target().and_then(|t| t.dyn_into::<web_sys::Node>().ok());
        let element: Option<web_sys::Element> = container.get_untracked().map(Into::into);
        if closes_menu(ui.menu_open.get_untracked(), element.as_ref(), target.as_ref()) {
            ui.menu_open.set(false);
        }
    });
    let _ = document.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
    closure.forget();
}
