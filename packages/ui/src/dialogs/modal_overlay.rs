use dioxus::prelude::*;

/// A full-screen overlay that centers its children in a modal card.
/// Clicking outside the card triggers `on_close`.
#[component]
pub fn ModalOverlay(title: String, on_close: EventHandler<()>, children: Element) -> Element {
    rsx! {
        div {
            class: "modal-backdrop",
            onclick: move |_| on_close.call(()),
            div {
                class: "modal-card",
                role: "dialog",
                onclick: move |evt: Event<MouseData>| evt.stop_propagation(),
                div {
                    class: "modal-header",
                    h2 { "{title}" }
                    button {
                        class: "modal-close",
                        onclick: move |_| on_close.call(()),
                        "×"
                    }
                }
                {children}
            }
        }
    }
}

/// Save / Cancel row at the bottom of a dialog.
#[component]
pub fn DialogActions(saving: bool, on_save: EventHandler<()>, on_cancel: EventHandler<()>) -> Element {
    rsx! {
        div {
            class: "modal-actions",
            crate::components::Button {
                variant: crate::components::ButtonVariant::Outline,
                onclick: move |_| on_cancel.call(()),
                "Cancel"
            }
            crate::components::Button {
                disabled: saving,
                onclick: move |_| on_save.call(()),
                if saving { "Saving..." } else { "Save" }
            }
        }
    }
}
