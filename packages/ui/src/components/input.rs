use dioxus::prelude::*;

#[component]
pub fn Label(html_for: Option<String>, children: Element) -> Element {
    rsx! {
        label {
            class: "field-label",
            r#for: html_for,
            {children}
        }
    }
}

#[component]
pub fn Input(
    id: Option<String>,
    class: Option<String>,
    r#type: Option<String>,
    placeholder: Option<String>,
    min: Option<String>,
    max: Option<String>,
    value: String,
    #[props(default)] oninput: EventHandler<FormEvent>,
) -> Element {
    let class = match class {
        Some(extra) => format!("input {extra}"),
        None => "input".to_string(),
    };

    rsx! {
        input {
            id,
            class: "{class}",
            r#type,
            placeholder,
            min,
            max,
            value,
            oninput: move |evt| oninput.call(evt),
        }
    }
}

#[component]
pub fn Textarea(
    id: Option<String>,
    class: Option<String>,
    placeholder: Option<String>,
    #[props(default = 3)] rows: u32,
    value: String,
    #[props(default)] oninput: EventHandler<FormEvent>,
) -> Element {
    let class = match class {
        Some(extra) => format!("textarea {extra}"),
        None => "textarea".to_string(),
    };

    rsx! {
        textarea {
            id,
            class: "{class}",
            placeholder,
            rows,
            value,
            oninput: move |evt| oninput.call(evt),
        }
    }
}
