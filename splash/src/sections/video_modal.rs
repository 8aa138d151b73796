use crate::config::VIDEO_EMBED_URL;
use crate::state::UiState;
use leptos::ev;
use leptos::prelude::*;
use wasm_bindgen::prelude::*;

fn is_dismiss_key(key: &str) -> bool {
    matches!(key, "Escape" | "Esc")
}

/// `Escape` closes the modal; listener kept for the page lifetime.
fn close_on_escape(ui: UiState) {
    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        return;
    };

    let closure =
        Closure::<dyn Fn(web_sys::KeyboardEvent)>::new(move |event: web_sys::KeyboardEvent| {
            if ui.video_visible.get_untracked() && is_dismiss_key(&event.key()) {
                ui.video_visible.set(false);
            }
        });
    let _ = document.add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
    closure.forget();
}

#[component]
pub fn VideoModal(ui: UiState) -> impl IntoView {
    close_on_escape(ui);

    // The iframe only exists while open, so closing stops playback.
    view! {
        <Show when=move || ui.video_visible.get()>
            <div class="video-backdrop" on:click=move |_| ui.video_visible.set(false)>
                <div class="video-dialog" on:click=|ev: ev::MouseEvent| ev.stop_propagation()>
                    <button
                        class="video-close"
                        aria-label="Close video"
                        on:click=move |_| ui.video_visible.set(false)
                    >
                        "✕"
                    </button>
                    <iframe
                        class="video-frame"
                        src=VIDEO_EMBED_URL
                        title="loctree demo"
                        allow="autoplay; encrypted-media; picture-in-picture"
                        allowfullscreen=true
                    ></iframe>
                </div>
            </div>
        </Show>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_escape_dismisses() {
        assert!(is_dismiss_key("Escape"));
        assert!(is_dismiss_key("Esc"));
        assert!(!is_dismiss_key("Enter"));
        assert!(!is_dismiss_key(" "));
    }
}
