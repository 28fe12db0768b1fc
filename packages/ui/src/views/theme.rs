use dioxus::prelude::*;

use store::ThemeColors;

use crate::components::{Button, ButtonVariant, Card, Section};
use crate::{make_store_with, use_portfolio};

/// Swatches offered by the custom color pickers. The first two rows are hue
/// choices, the last two cover backgrounds and text.
const COLOR_OPTIONS: [&str; 18] = [
    "#6366f1", "#8b5cf6", "#ec4899", "#f43f5e", "#ef4444",
    "#f59e0b", "#10b981", "#14b8a6", "#0284c7", "#7c3aed",
    "#ffffff", "#f8fafc", "#f1f5f9", "#e2e8f0",
    "#1e293b", "#0f172a", "#020617", "#000000",
];

fn palette(
    primary: &str,
    secondary: &str,
    accent: &str,
    background: &str,
    text: &str,
    card_background: &str,
) -> ThemeColors {
    ThemeColors {
        primary: primary.into(),
        secondary: secondary.into(),
        accent: accent.into(),
        background: background.into(),
        text: text.into(),
        card_background: card_background.into(),
    }
}

/// Ready-made palettes, each hue family in a light and a dark variant.
fn preset_themes() -> Vec<(&'static str, ThemeColors)> {
    vec![
        ("Indigo", palette("#6366f1", "#8b5cf6", "#ec4899", "#f8fafc", "#0f172a", "#ffffff")),
        ("Emerald", palette("#10b981", "#14b8a6", "#f59e0b", "#f8fafc", "#0f172a", "#ffffff")),
        ("Rose", palette("#f43f5e", "#e11d48", "#6366f1", "#f8fafc", "#0f172a", "#ffffff")),
        ("Dark Indigo", palette("#6366f1", "#8b5cf6", "#ec4899", "#0f172a", "#f8fafc", "#1e293b")),
        ("Dark Emerald", palette("#10b981", "#14b8a6", "#f59e0b", "#0f172a", "#f8fafc", "#1e293b")),
        ("Dark Rose", palette("#f43f5e", "#e11d48", "#6366f1", "#0f172a", "#f8fafc", "#1e293b")),
    ]
}

#[derive(Clone, Copy, PartialEq)]
enum ThemeTab {
    Presets,
    Custom,
}

/// Which slot of [`ThemeColors`] a picker edits.
#[derive(Clone, Copy, PartialEq)]
enum ColorSlot {
    Primary,
    Secondary,
    Accent,
    Background,
    Text,
    CardBackground,
}

impl ColorSlot {
    fn get(self, theme: &ThemeColors) -> &str {
        match self {
            Self::Primary => &theme.primary,
            Self::Secondary => &theme.secondary,
            Self::Accent => &theme.accent,
            Self::Background => &theme.background,
            Self::Text => &theme.text,
            Self::CardBackground => &theme.card_background,
        }
    }

    fn set(self, theme: &mut ThemeColors, color: String) {
        match self {
            Self::Primary => theme.primary = color,
            Self::Secondary => theme.secondary = color,
            Self::Accent => theme.accent = color,
            Self::Background => theme.background = color,
            Self::Text => theme.text = color,
            Self::CardBackground => theme.card_background = color,
        }
    }
}

#[component]
pub fn ThemeView() -> Element {
    let mut portfolio = use_portfolio();
    let mut active_tab = use_signal(|| ThemeTab::Presets);
    let mut custom = use_signal(|| portfolio.peek().theme.clone());

    let mut apply_theme = move |theme: ThemeColors| {
        custom.set(theme.clone());
        spawn(async move {
            let mut store = make_store_with(portfolio.peek().clone());
            store.update_theme(theme).await;
            portfolio.set(store.into_data());
        });
    };

    let theme = portfolio().theme;

    rsx! {
        div {
            class: "view-page",
            Section {
                title: "Theme Customization",
                div {
                    class: "theme-tabs",
                    button {
                        class: if active_tab() == ThemeTab::Presets { "theme-tab active" } else { "theme-tab" },
                        onclick: move |_| active_tab.set(ThemeTab::Presets),
                        "Preset Themes"
                    }
                    button {
                        class: if active_tab() == ThemeTab::Custom { "theme-tab active" } else { "theme-tab" },
                        onclick: move |_| active_tab.set(ThemeTab::Custom),
                        "Custom Theme"
                    }
                }
                Card {
                    if active_tab() == ThemeTab::Presets {
                        div {
                            class: "preset-grid",
                            for (name, colors, border) in preset_themes().into_iter().map(|(name, colors)| {
                                let border = if theme == colors {
                                    colors.primary.clone()
                                } else {
                                    colors.card_background.clone()
                                };
                                (name, colors, border)
                            }) {
                                button {
                                    key: "{name}",
                                    class: if theme == colors { "preset-card selected" } else { "preset-card" },
                                    style: "background-color: {colors.card_background}; border-color: {border};",
                                    onclick: {
                                        let colors = colors.clone();
                                        move |_| apply_theme(colors.clone())
                                    },
                                    span {
                                        class: "preset-name",
                                        style: "color: {colors.text};",
                                        "{name}"
                                    }
                                    div {
                                        class: "color-preview",
                                        span { class: "color-dot", style: "background-color: {colors.primary};" }
                                        span { class: "color-dot", style: "background-color: {colors.secondary};" }
                                        span { class: "color-dot", style: "background-color: {colors.accent};" }
                                    }
                                }
                            }
                        }
                    } else {
                        div {
                            class: "custom-theme",
                            ColorPicker {
                                slot: ColorSlot::Primary,
                                label: "Primary Color",
                                description: "Used for buttons, links, and primary UI elements",
                                custom,
                            }
                            ColorPicker {
                                slot: ColorSlot::Secondary,
                                label: "Secondary Color",
                                description: "Used for highlights, accents, and secondary UI elements",
                                custom,
                            }
                            ColorPicker {
                                slot: ColorSlot::Accent,
                                label: "Accent Color",
                                description: "Used for special highlights and call-to-action elements",
                                custom,
                            }
                            ColorPicker {
                                slot: ColorSlot::Background,
                                label: "Background Color",
                                description: "The main background color of your portfolio",
                                custom,
                            }
                            ColorPicker {
                                slot: ColorSlot::Text,
                                label: "Text Color",
                                description: "The primary color for text throughout your portfolio",
                                custom,
                            }
                            ColorPicker {
                                slot: ColorSlot::CardBackground,
                                label: "Card Background",
                                description: "Background color for cards and content containers",
                                custom,
                            }
                            Button {
                                variant: ButtonVariant::Primary,
                                class: "full-width",
                                onclick: move |_| apply_theme(custom.peek().clone()),
                                "Apply Custom Theme"
                            }
                        }
                    }
                }
            }

            Section {
                title: "Current Theme Preview",
                Card {
                    style: "background-color: {theme.card_background};",
                    h3 {
                        class: "preview-heading",
                        style: "color: {theme.text};",
                        "Heading Example"
                    }
                    p {
                        class: "preview-body",
                        style: "color: {theme.text};",
                        "This is an example of body text in your selected theme. The text color adapts based on your theme selection to ensure readability."
                    }
                    p {
                        class: "preview-link",
                        style: "color: {theme.primary};",
                        "This is a link"
                    }
                    div {
                        class: "button-row",
                        span { class: "preview-button", style: "background-color: {theme.primary};", "Primary Button" }
                        span { class: "preview-button", style: "background-color: {theme.secondary};", "Secondary Button" }
                    }
                    div {
                        class: "button-row",
                        span {
                            class: "preview-button outline",
                            style: "border-color: {theme.primary}; color: {theme.primary};",
                            "Outline Button"
                        }
                        span { class: "preview-button", style: "background-color: {theme.accent};", "Accent Button" }
                    }
                    div {
                        class: "color-grid",
                        div { class: "color-box", style: "background-color: {theme.primary};", "Primary" }
                        div { class: "color-box", style: "background-color: {theme.secondary};", "Secondary" }
                        div { class: "color-box", style: "background-color: {theme.accent};", "Accent" }
                    }
                }
            }
        }
    }
}

#[component]
fn ColorPicker(
    slot: ColorSlot,
    label: &'static str,
    description: &'static str,
    custom: Signal<ThemeColors>,
) -> Element {
    let mut custom = custom;
    let current = slot.get(&custom()).to_string();

    rsx! {
        div {
            class: "color-picker",
            div {
                class: "color-picker-header",
                span { class: "field-label", "{label}" }
                span { class: "color-value", "{current}" }
            }
            p { class: "color-description", "{description}" }
            div {
                class: "color-options",
                for color in COLOR_OPTIONS {
                    button {
                        key: "{color}",
                        class: if current == color { "swatch selected" } else { "swatch" },
                        style: "background-color: {color};",
                        onclick: move |_| slot.set(&mut custom.write(), color.to_string()),
                    }
                }
            }
        }
    }
}
