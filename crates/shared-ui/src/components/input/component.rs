use dioxus::prelude::*;

use crate::components::with_class;

/// Labelled text input. A non-empty `error` is shown under the field.
#[component]
pub fn Input(
    #[props(default)] value: String,
    #[props(default)] on_input: EventHandler<FormEvent>,
    #[props(default)] placeholder: String,
    #[props(default)] label: String,
    #[props(default = "text".to_string())] input_type: String,
    #[props(default)] error: String,
    #[props(default = false)] disabled: bool,
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
) -> Element {
    let attrs = with_class("input", attributes);
    let invalid = !error.is_empty();

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        label { class: "input-field",
            if !label.is_empty() {
                span { class: "input-label", "{label}" }
            }
            input {
                r#type: "{input_type}",
                value: value,
                placeholder: placeholder,
                disabled: disabled,
                "aria-invalid": if invalid { "true" } else { "false" },
                oninput: move |evt| on_input.call(evt),
                ..attrs,
            }
            if invalid {
                span { class: "input-error", "{error}" }
            }
        }
    }
}
