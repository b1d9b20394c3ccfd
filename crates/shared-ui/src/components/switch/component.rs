use dioxus::prelude::*;
use dioxus_primitives::switch as prim;

/// Labelled on/off switch. The thumb is rendered internally.
#[component]
pub fn Switch(
    checked: bool,
    on_change: EventHandler<bool>,
    #[props(default)] label: String,
) -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        div { class: "switch-row",
            if !label.is_empty() {
                span { class: "switch-label", "{label}" }
            }
            prim::Switch {
                class: "switch",
                checked: checked,
                on_checked_change: move |value: bool| on_change.call(value),
                prim::SwitchThumb { class: "switch-thumb" }
            }
        }
    }
}
