use dioxus::prelude::*;

#[component]
pub fn Section(title: String, children: Element) -> Element {
    rsx! {
        section {
            class: "view-section",
            h2 { class: "view-section-title", "{title}" }
            {children}
        }
    }
}

#[component]
pub fn Card(class: Option<String>, style: Option<String>, children: Element) -> Element {
    let class = match class {
        Some(extra) => format!("card {extra}"),
        None => "card".to_string(),
    };

    rsx! {
        div {
            class: "{class}",
            style,
            {children}
        }
    }
}
