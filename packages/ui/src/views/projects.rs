use dioxus::prelude::*;

use store::Project;

use crate::components::{Button, ButtonVariant, Card, Input, Label, Section, Textarea};
use crate::icons::{FaArrowUpRightFromSquare, FaPenToSquare, FaPlus, FaTrashCan, FaXmark};
use crate::{make_store_with, use_portfolio, Icon};

/// Shared projects view: cards with inline editing, technology chips and an
/// add form.
#[component]
pub fn ProjectsView() -> Element {
    let mut portfolio = use_portfolio();
    let mut editing = use_signal(|| Option::<Project>::None);
    let mut edit_tech_input = use_signal(String::new);
    let mut show_add_form = use_signal(|| false);
    let mut draft = use_signal(Project::default);
    let mut tech_input = use_signal(String::new);

    let handle_add = move |_| {
        let project = draft.peek().clone();
        if project.title.trim().is_empty() || project.description.trim().is_empty() {
            return;
        }
        spawn(async move {
            let mut store = make_store_with(portfolio.peek().clone());
            store.add_project(project).await;
            portfolio.set(store.into_data());
            draft.set(Project::default());
            tech_input.set(String::new());
            show_add_form.set(false);
        });
    };

    let handle_update = move |_| {
        let Some(project) = editing.peek().clone() else {
            return;
        };
        if project.title.trim().is_empty() || project.description.trim().is_empty() {
            return;
        }
        spawn(async move {
            let mut store = make_store_with(portfolio.peek().clone());
            store.update_project(project).await;
            portfolio.set(store.into_data());
            editing.set(None);
            edit_tech_input.set(String::new());
        });
    };

    let add_draft_technology = move |_| {
        let tech = tech_input.peek().trim().to_string();
        if !tech.is_empty() {
            draft.write().technologies.push(tech);
            tech_input.set(String::new());
        }
    };

    let add_edit_technology = move |_| {
        let tech = edit_tech_input.peek().trim().to_string();
        if tech.is_empty() {
            return;
        }
        if let Some(p) = editing.write().as_mut() {
            p.technologies.push(tech);
        }
        edit_tech_input.set(String::new());
    };

    let projects = portfolio().projects;
    let editing_id = editing().map(|p| p.id);

    rsx! {
        div {
            class: "view-page",
            Section {
                title: "Projects",
                if projects.is_empty() {
                    Card {
                        p { class: "empty-text", "No projects added yet. Showcase your work!" }
                    }
                }
                for project in projects {
                    if editing_id.as_deref() == Some(project.id.as_str()) {
                        Card {
                            key: "{project.id}",
                            class: "edit-card",
                            h3 { class: "form-title", "Edit Project" }
                            div {
                                class: "form-field",
                                Label { html_for: "project-title", "Project Title" }
                                Input {
                                    id: "project-title",
                                    placeholder: "My Awesome Project",
                                    value: editing().map(|p| p.title).unwrap_or_default(),
                                    oninput: move |evt: FormEvent| {
                                        if let Some(p) = editing.write().as_mut() {
                                            p.title = evt.value();
                                        }
                                    },
                                }
                            }
                            div {
                                class: "form-field",
                                Label { html_for: "project-description", "Project Description" }
                                Textarea {
                                    id: "project-description",
                                    placeholder: "Describe your project...",
                                    value: editing().map(|p| p.description).unwrap_or_default(),
                                    oninput: move |evt: FormEvent| {
                                        if let Some(p) = editing.write().as_mut() {
                                            p.description = evt.value();
                                        }
                                    },
                                }
                            }
                            div {
                                class: "form-field",
                                Label { html_for: "project-image", "Project Image URL" }
                                Input {
                                    id: "project-image",
                                    placeholder: "https://example.com/project-image.jpg",
                                    value: editing().map(|p| p.image).unwrap_or_default(),
                                    oninput: move |evt: FormEvent| {
                                        if let Some(p) = editing.write().as_mut() {
                                            p.image = evt.value();
                                        }
                                    },
                                }
                            }
                            div {
                                class: "form-field",
                                Label { html_for: "project-link", "Project Link" }
                                Input {
                                    id: "project-link",
                                    placeholder: "https://example.com/my-project",
                                    value: editing().map(|p| p.link).unwrap_or_default(),
                                    oninput: move |evt: FormEvent| {
                                        if let Some(p) = editing.write().as_mut() {
                                            p.link = evt.value();
                                        }
                                    },
                                }
                            }
                            div {
                                class: "form-field",
                                Label { html_for: "project-tech", "Technologies" }
                                div {
                                    class: "chip-input-row",
                                    Input {
                                        id: "project-tech",
                                        placeholder: "e.g. React",
                                        value: edit_tech_input(),
                                        oninput: move |evt: FormEvent| edit_tech_input.set(evt.value()),
                                    }
                                    Button {
                                        variant: ButtonVariant::Secondary,
                                        onclick: add_edit_technology,
                                        "Add"
                                    }
                                }
                                div {
                                    class: "chip-row",
                                    for (index, tech) in editing().map(|p| p.technologies).unwrap_or_default().into_iter().enumerate() {
                                        span {
                                            key: "{index}-{tech}",
                                            class: "chip",
                                            "{tech}"
                                            button {
                                                class: "chip-remove",
                                                onclick: move |_| {
                                                    if let Some(p) = editing.write().as_mut() {
                                                        if index < p.technologies.len() {
                                                            p.technologies.remove(index);
                                                        }
                                                    }
                                                },
                                                Icon { icon: FaXmark, width: 10, height: 10 }
                                            }
                                        }
                                    }
                                }
                            }
                            div {
                                class: "button-row",
                                Button {
                                    variant: ButtonVariant::Outline,
                                    onclick: move |_| {
                                        editing.set(None);
                                        edit_tech_input.set(String::new());
                                    },
                                    "Cancel"
                                }
                                Button {
                                    variant: ButtonVariant::Primary,
                                    disabled: editing()
                                        .map(|p| p.title.trim().is_empty() || p.description.trim().is_empty())
                                        .unwrap_or(true),
                                    onclick: handle_update,
                                    "Save"
                                }
                            }
                        }
                    } else {
                        Card {
                            key: "{project.id}",
                            if !project.image.is_empty() {
                                img {
                                    class: "project-image",
                                    src: "{project.image}",
                                    alt: "{project.title}",
                                }
                            }
                            div {
                                class: "item-header",
                                span { class: "item-title", "{project.title}" }
                                div {
                                    class: "item-actions",
                                    button {
                                        class: "icon-button",
                                        title: "Edit project",
                                        onclick: {
                                            let project = project.clone();
                                            move |_| editing.set(Some(project.clone()))
                                        },
                                        Icon { icon: FaPenToSquare, width: 16, height: 16 }
                                    }
                                    button {
                                        class: "icon-button danger",
                                        title: "Delete project",
                                        onclick: {
                                            let id = project.id.clone();
                                            move |_| {
                                                let id = id.clone();
                                                spawn(async move {
                                                    let mut store = make_store_with(portfolio.peek().clone());
                                                    store.remove_project(&id).await;
                                                    portfolio.set(store.into_data());
                                                });
                                            }
                                        },
                                        Icon { icon: FaTrashCan, width: 16, height: 16 }
                                    }
                                }
                            }
                            p { class: "item-description", "{project.description}" }
                            if !project.technologies.is_empty() {
                                div {
                                    class: "chip-row",
                                    for tech in &project.technologies {
                                        span { key: "{tech}", class: "chip", "{tech}" }
                                    }
                                }
                            }
                            if !project.link.is_empty() {
                                a {
                                    class: "external-link",
                                    href: "{project.link}",
                                    target: "_blank",
                                    Icon { icon: FaArrowUpRightFromSquare, width: 14, height: 14 }
                                    span { "View Project" }
                                }
                            }
                        }
                    }
                }
            }

            if show_add_form() {
                Card {
                    class: "add-card",
                    h3 { class: "form-title", "Add New Project" }
                    div {
                        class: "form-field",
                        Label { html_for: "new-project-title", "Project Title" }
                        Input {
                            id: "new-project-title",
                            placeholder: "My Awesome Project",
                            value: draft().title,
                            oninput: move |evt: FormEvent| draft.write().title = evt.value(),
                        }
                    }
                    div {
                        class: "form-field",
                        Label { html_for: "new-project-description", "Project Description" }
                        Textarea {
                            id: "new-project-description",
                            placeholder: "Describe your project...",
                            value: draft().description,
                            oninput: move |evt: FormEvent| draft.write().description = evt.value(),
                        }
                    }
                    div {
                        class: "form-field",
                        Label { html_for: "new-project-image", "Project Image URL" }
                        Input {
                            id: "new-project-image",
                            placeholder: "https://example.com/project-image.jpg",
                            value: draft().image,
                            oninput: move |evt: FormEvent| draft.write().image = evt.value(),
                        }
                    }
                    div {
                        class: "form-field",
                        Label { html_for: "new-project-link", "Project Link" }
                        Input {
                            id: "new-project-link",
                            placeholder: "https://example.com/my-project",
                            value: draft().link,
                            oninput: move |evt: FormEvent| draft.write().link = evt.value(),
                        }
                    }
                    div {
                        class: "form-field",
                        Label { html_for: "new-project-tech", "Technologies" }
                        div {
                            class: "chip-input-row",
                            Input {
                                id: "new-project-tech",
                                placeholder: "e.g. React",
                                value: tech_input(),
                                oninput: move |evt: FormEvent| tech_input.set(evt.value()),
                            }
                            Button {
                                variant: ButtonVariant::Secondary,
                                onclick: add_draft_technology,
                                "Add"
                            }
                        }
                        div {
                            class: "chip-row",
                            for (index, tech) in draft().technologies.into_iter().enumerate() {
                                span {
                                    key: "{index}-{tech}",
                                    class: "chip",
                                    "{tech}"
                                    button {
                                        class: "chip-remove",
                                        onclick: move |_| {
                                            let mut draft = draft.write();
                                            if index < draft.technologies.len() {
                                                draft.technologies.remove(index);
                                            }
                                        },
                                        Icon { icon: FaXmark, width: 10, height: 10 }
                                    }
                                }
                            }
                        }
                    }
                    div {
                        class: "button-row",
                        Button {
                            variant: ButtonVariant::Outline,
                            onclick: move |_| show_add_form.set(false),
                            "Cancel"
                        }
                        Button {
                            variant: ButtonVariant::Primary,
                            disabled: draft().title.trim().is_empty() || draft().description.trim().is_empty(),
                            onclick: handle_add,
                            "Add Project"
                        }
                    }
                }
            } else {
                Button {
                    variant: ButtonVariant::Primary,
                    class: "full-width",
                    onclick: move |_| show_add_form.set(true),
                    Icon { icon: FaPlus, width: 14, height: 14 }
                    "Add New Project"
                }
            }
        }
    }
}
