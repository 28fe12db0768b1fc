use dioxus::prelude::*;

/// Horizontal proficiency bar, 0–100.
///
/// `color` overrides the fill (the preview passes the portfolio theme's
/// primary color); the stylesheet default applies otherwise.
#[component]
pub fn ProgressBar(
    value: u8,
    label: Option<String>,
    #[props(default)] show_percentage: bool,
    color: Option<String>,
) -> Element {
    let value = value.min(100);
    let fill_style = match color {
        Some(c) => format!("width: {value}%; background-color: {c};"),
        None => format!("width: {value}%;"),
    };

    rsx! {
        div {
            class: "progress-field",
            if label.is_some() || show_percentage {
                div {
                    class: "progress-caption",
                    if let Some(ref label) = label {
                        span { class: "progress-label", "{label}" }
                    }
                    if show_percentage {
                        span { class: "progress-percentage", "{value}%" }
                    }
                }
            }
            div {
                class: "progress-track",
                div {
                    class: "progress-fill",
                    style: "{fill_style}",
                }
            }
        }
    }
}
