use dioxus::prelude::*;

use crate::components::{Button, ButtonVariant, Card, ProgressBar, Section};
use crate::icons::{
    FaArrowUpRightFromSquare, FaEnvelope, FaGithub, FaLinkedin, FaLocationDot, FaPhone, FaTwitter,
};
use crate::{download_portfolio, use_portfolio, Icon};

/// Condensed portfolio preview plus the HTML export card. The preview shows
/// the same sections, in the same order, as the exported document.
#[component]
pub fn PreviewView() -> Element {
    let portfolio = use_portfolio();
    let mut show_export = use_signal(|| false);
    let mut export_status = use_signal(|| Option::<String>::None);

    let handle_download = move |_| {
        let data = portfolio.peek().clone();
        match download_portfolio(&data) {
            Ok(location) => export_status.set(Some(format!("Saved to {location}"))),
            Err(err) => {
                tracing::warn!("portfolio export failed: {err}");
                export_status.set(Some(format!("Error: {err}")));
            }
        }
    };

    let data = portfolio();
    let info = data.personal_info;
    let theme = data.theme;

    rsx! {
        div {
            class: "view-page",
            div {
                class: "preview-header",
                style: "background-color: {theme.card_background}; color: {theme.text};",
                div {
                    class: "preview-profile",
                    if !info.profile_image.is_empty() {
                        img {
                            class: "preview-profile-image",
                            src: "{info.profile_image}",
                            alt: "{info.name}",
                        }
                    }
                    div {
                        h2 { class: "preview-name", "{info.name}" }
                        p {
                            class: "preview-title",
                            style: "color: {theme.secondary};",
                            "{info.title}"
                        }
                    }
                }
                div {
                    class: "preview-contacts",
                    div {
                        class: "contact-item",
                        Icon { icon: FaEnvelope, width: 16, height: 16, fill: theme.primary.clone() }
                        span { "{info.email}" }
                    }
                    div {
                        class: "contact-item",
                        Icon { icon: FaPhone, width: 16, height: 16, fill: theme.primary.clone() }
                        span { "{info.phone}" }
                    }
                    div {
                        class: "contact-item",
                        Icon { icon: FaLocationDot, width: 16, height: 16, fill: theme.primary.clone() }
                        span { "{info.location}" }
                    }
                }
                div {
                    class: "social-row",
                    if !info.social_links.linkedin.is_empty() {
                        a {
                            class: "social-button",
                            href: "{info.social_links.linkedin}",
                            target: "_blank",
                            Icon { icon: FaLinkedin, width: 18, height: 18, fill: theme.primary.clone() }
                        }
                    }
                    if !info.social_links.github.is_empty() {
                        a {
                            class: "social-button",
                            href: "{info.social_links.github}",
                            target: "_blank",
                            Icon { icon: FaGithub, width: 18, height: 18, fill: theme.primary.clone() }
                        }
                    }
                    if !info.social_links.twitter.is_empty() {
                        a {
                            class: "social-button",
                            href: "{info.social_links.twitter}",
                            target: "_blank",
                            Icon { icon: FaTwitter, width: 18, height: 18, fill: theme.primary.clone() }
                        }
                    }
                }
                p { class: "preview-bio", "{info.bio}" }
            }

            Section {
                title: "Skills",
                Card {
                    style: "background-color: {theme.card_background}; color: {theme.text};",
                    for skill in &data.skills {
                        ProgressBar {
                            key: "{skill.id}",
                            value: skill.proficiency,
                            label: skill.name.clone(),
                            show_percentage: true,
                            color: theme.primary.clone(),
                        }
                    }
                }
            }

            Section {
                title: "Projects",
                for project in &data.projects {
                    Card {
                        key: "{project.id}",
                        style: "background-color: {theme.card_background}; color: {theme.text};",
                        if !project.image.is_empty() {
                            img {
                                class: "project-image",
                                src: "{project.image}",
                                alt: "{project.title}",
                            }
                        }
                        h3 { class: "item-title", "{project.title}" }
                        p { class: "item-description", "{project.description}" }
                        if !project.technologies.is_empty() {
                            div {
                                class: "chip-row",
                                for tech in &project.technologies {
                                    span {
                                        key: "{tech}",
                                        class: "chip",
                                        style: "color: {theme.primary};",
                                        "{tech}"
                                    }
                                }
                            }
                        }
                        if !project.link.is_empty() {
                            a {
                                class: "external-link",
                                style: "color: {theme.primary}; border-color: {theme.primary};",
                                href: "{project.link}",
                                target: "_blank",
                                Icon { icon: FaArrowUpRightFromSquare, width: 14, height: 14, fill: theme.primary.clone() }
                                span { "View Project" }
                            }
                        }
                    }
                }
            }

            Section {
                title: "Work Experience",
                for job in &data.work_experience {
                    Card {
                        key: "{job.id}",
                        style: "background-color: {theme.card_background}; color: {theme.text};",
                        h3 { class: "item-title", "{job.company}" }
                        p {
                            class: "item-subtitle",
                            style: "color: {theme.secondary};",
                            "{job.position}"
                        }
                        p { class: "item-duration", "{job.start_date} - {job.end_date}" }
                        if !job.description.is_empty() {
                            p { class: "item-description", "{job.description}" }
                        }
                        if !job.achievements.is_empty() {
                            p { class: "achievements-header", "Key Achievements:" }
                            ul {
                                class: "achievement-list",
                                for achievement in &job.achievements {
                                    li { key: "{achievement}", "{achievement}" }
                                }
                            }
                        }
                    }
                }
            }

            div {
                class: "export-section",
                if show_export() {
                    Card {
                        h3 { class: "form-title", "Export Options" }
                        p {
                            class: "export-description",
                            "Download your portfolio as an HTML file to host anywhere."
                        }
                        div {
                            class: "button-row",
                            Button {
                                variant: ButtonVariant::Secondary,
                                onclick: move |_| {
                                    show_export.set(false);
                                    export_status.set(None);
                                },
                                "Cancel"
                            }
                            Button {
                                variant: ButtonVariant::Outline,
                                onclick: handle_download,
                                "Download HTML"
                            }
                        }
                        if let Some(status) = export_status() {
                            p {
                                class: if status.starts_with("Error:") { "status-error" } else { "status-success" },
                                "{status}"
                            }
                        }
                    }
                } else {
                    Button {
                        variant: ButtonVariant::Primary,
                        class: "full-width",
                        onclick: move |_| show_export.set(true),
                        "Export Portfolio"
                    }
                }
            }
        }
    }
}
