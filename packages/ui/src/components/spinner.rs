use dioxus::prelude::*;

#[component]
pub fn Spinner() -> Element {
    rsx! {
        div { class: "spinner-wrap",
            div { class: "spinner", role: "progressbar", aria_label: "Loading" }
        }
    }
}
